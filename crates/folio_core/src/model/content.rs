//! Static portfolio content records.
//!
//! # Responsibility
//! - Define the value records rendered into the page.
//! - Validate content once before it is rendered or exported.
//!
//! # Invariants
//! - Content is immutable after load; nothing in core mutates it.
//! - Skill levels are percentages in `0..=100`.
//! - Outbound URLs are opaque and passed through unchanged.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::error::Error;
use std::fmt::{Display, Formatter};

static HTTP_METHOD_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(GET|POST|PUT|PATCH|DELETE|HEAD|OPTIONS)$").expect("valid http method regex")
});

/// Upper bound for `SkillRating::level`.
pub const MAX_SKILL_LEVEL: u8 = 100;

/// Completion badge shown on a project card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProjectStatus {
    Completed,
    InProgress,
}

impl ProjectStatus {
    /// Badge text.
    pub fn label(self) -> &'static str {
        match self {
            Self::Completed => "Completed",
            Self::InProgress => "In Progress",
        }
    }

    /// Stable CSS modifier for the badge.
    pub fn css_class(self) -> &'static str {
        match self {
            Self::Completed => "completed",
            Self::InProgress => "in-progress",
        }
    }
}

/// One entry in the project gallery.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Project {
    pub title: String,
    pub description: String,
    /// Technology tags in display order.
    pub tech: Vec<String>,
    pub source_url: String,
    pub demo_url: String,
    pub status: ProjectStatus,
}

/// One row of the skills list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkillRating {
    pub name: String,
    /// Self-assessed proficiency percentage.
    pub level: u8,
}

/// Grouped list of technical expertise.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExpertiseCategory {
    pub title: String,
    pub items: Vec<String>,
}

/// Contact card kind; selects the icon and heading.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ContactKind {
    Email,
    Github,
    Linkedin,
}

impl ContactKind {
    pub fn heading(self) -> &'static str {
        match self {
            Self::Email => "Email",
            Self::Github => "GitHub",
            Self::Linkedin => "LinkedIn",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactChannel {
    pub kind: ContactKind,
    /// Text shown on the card, e.g. `github.com/yourusername`.
    pub display: String,
    pub href: String,
}

/// Decorative "sample endpoint" row. Never called.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiSample {
    pub method: String,
    pub path: String,
    pub description: String,
}

/// Free-text copy for the hero, about and contact blocks.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SiteProfile {
    /// Brand text in the navigation bar.
    pub brand: String,
    pub headline: String,
    pub tagline: String,
    pub about_intro: String,
    pub journey: Vec<String>,
    pub motto: String,
    pub projects_intro: String,
    pub contact_intro: String,
    pub resume_label: String,
    pub footer: String,
}

/// Complete page content.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PortfolioContent {
    pub profile: SiteProfile,
    pub projects: Vec<Project>,
    pub skills: Vec<SkillRating>,
    #[serde(default)]
    pub technical_expertise: Vec<ExpertiseCategory>,
    pub contacts: Vec<ContactChannel>,
    #[serde(default)]
    pub api_samples: Vec<ApiSample>,
}

impl PortfolioContent {
    /// Validates content invariants.
    ///
    /// # Errors
    /// - Returns the first violated rule; later records are not inspected.
    pub fn validate(&self) -> Result<(), ContentValidationError> {
        if self.profile.brand.trim().is_empty() {
            return Err(ContentValidationError::EmptyBrand);
        }
        if self.profile.headline.trim().is_empty() {
            return Err(ContentValidationError::EmptyHeadline);
        }

        let mut titles = BTreeSet::new();
        for (index, project) in self.projects.iter().enumerate() {
            let title = project.title.trim();
            if title.is_empty() {
                return Err(ContentValidationError::EmptyProjectTitle { index });
            }
            if project.tech.iter().all(|tag| tag.trim().is_empty()) {
                return Err(ContentValidationError::MissingProjectTech(title.to_string()));
            }
            if !titles.insert(title.to_string()) {
                return Err(ContentValidationError::DuplicateProjectTitle(
                    title.to_string(),
                ));
            }
        }

        let mut skill_names = BTreeSet::new();
        for (index, skill) in self.skills.iter().enumerate() {
            let name = skill.name.trim();
            if name.is_empty() {
                return Err(ContentValidationError::EmptySkillName { index });
            }
            if skill.level > MAX_SKILL_LEVEL {
                return Err(ContentValidationError::SkillLevelOutOfRange {
                    name: name.to_string(),
                    level: skill.level,
                });
            }
            if !skill_names.insert(name.to_ascii_lowercase()) {
                return Err(ContentValidationError::DuplicateSkill(name.to_string()));
            }
        }

        for (index, category) in self.technical_expertise.iter().enumerate() {
            let title = category.title.trim();
            if title.is_empty() {
                return Err(ContentValidationError::EmptyExpertiseTitle { index });
            }
            if category.items.iter().all(|item| item.trim().is_empty()) {
                return Err(ContentValidationError::EmptyExpertiseCategory(
                    title.to_string(),
                ));
            }
        }

        for sample in &self.api_samples {
            if !HTTP_METHOD_RE.is_match(sample.method.as_str()) {
                return Err(ContentValidationError::InvalidApiMethod(
                    sample.method.clone(),
                ));
            }
            if !sample.path.starts_with('/') {
                return Err(ContentValidationError::InvalidApiPath(sample.path.clone()));
            }
        }

        Ok(())
    }

    /// Looks up a project by exact title.
    pub fn project(&self, title: &str) -> Option<&Project> {
        self.projects.iter().find(|project| project.title == title)
    }
}

/// Content validation errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ContentValidationError {
    EmptyBrand,
    EmptyHeadline,
    EmptyProjectTitle { index: usize },
    MissingProjectTech(String),
    DuplicateProjectTitle(String),
    EmptySkillName { index: usize },
    SkillLevelOutOfRange { name: String, level: u8 },
    DuplicateSkill(String),
    EmptyExpertiseTitle { index: usize },
    EmptyExpertiseCategory(String),
    InvalidApiMethod(String),
    InvalidApiPath(String),
}

impl Display for ContentValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyBrand => write!(f, "profile brand must not be empty"),
            Self::EmptyHeadline => write!(f, "profile headline must not be empty"),
            Self::EmptyProjectTitle { index } => {
                write!(f, "project #{index} has an empty title")
            }
            Self::MissingProjectTech(title) => {
                write!(f, "project `{title}` must list at least one technology")
            }
            Self::DuplicateProjectTitle(title) => {
                write!(f, "project title is duplicated: {title}")
            }
            Self::EmptySkillName { index } => write!(f, "skill #{index} has an empty name"),
            Self::SkillLevelOutOfRange { name, level } => write!(
                f,
                "skill `{name}` level {level} exceeds {MAX_SKILL_LEVEL}"
            ),
            Self::DuplicateSkill(name) => write!(f, "skill is duplicated: {name}"),
            Self::EmptyExpertiseTitle { index } => {
                write!(f, "expertise category #{index} has an empty title")
            }
            Self::EmptyExpertiseCategory(title) => {
                write!(f, "expertise category `{title}` has no items")
            }
            Self::InvalidApiMethod(value) => write!(f, "api sample method is invalid: {value}"),
            Self::InvalidApiPath(value) => {
                write!(f, "api sample path must start with `/`: {value}")
            }
        }
    }
}

impl Error for ContentValidationError {}

#[cfg(test)]
mod tests {
    use super::{ContentValidationError, ProjectStatus};
    use crate::model::builtin::builtin_content;

    #[test]
    fn builtin_content_is_valid() {
        builtin_content()
            .validate()
            .expect("built-in content should validate");
    }

    #[test]
    fn rejects_case_insensitive_duplicate_skill() {
        let mut content = builtin_content().clone();
        let mut duplicate = content.skills[0].clone();
        duplicate.name = duplicate.name.to_ascii_uppercase();
        content.skills.push(duplicate);

        let err = content.validate().expect_err("duplicate skill must fail");
        assert!(matches!(err, ContentValidationError::DuplicateSkill(_)));
    }

    #[test]
    fn rejects_expertise_with_only_blank_items() {
        let mut content = builtin_content().clone();
        let title = content.technical_expertise[0].title.trim().to_string();
        content.technical_expertise[0].items = vec![" ".to_string(), String::new()];

        let err = content.validate().expect_err("blank items must fail");
        assert_eq!(err, ContentValidationError::EmptyExpertiseCategory(title));
    }

    #[test]
    fn rejects_unknown_api_method() {
        let mut content = builtin_content().clone();
        content.api_samples[0].method = "get".to_string();

        let err = content.validate().expect_err("lowercase method must fail");
        assert_eq!(err, ContentValidationError::InvalidApiMethod("get".to_string()));
    }

    #[test]
    fn status_badges_are_stable() {
        assert_eq!(ProjectStatus::Completed.css_class(), "completed");
        assert_eq!(ProjectStatus::InProgress.label(), "In Progress");
    }
}
