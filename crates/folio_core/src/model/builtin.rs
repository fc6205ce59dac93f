//! Built-in page content.
//!
//! Process-wide, immutable, built on first access.

use crate::model::content::{
    ApiSample, ContactChannel, ContactKind, ExpertiseCategory, PortfolioContent, Project,
    ProjectStatus, SiteProfile, SkillRating,
};
use once_cell::sync::Lazy;

static BUILTIN_CONTENT: Lazy<PortfolioContent> = Lazy::new(build_content);

/// Returns the default content shipped with the site.
pub fn builtin_content() -> &'static PortfolioContent {
    &BUILTIN_CONTENT
}

fn build_content() -> PortfolioContent {
    PortfolioContent {
        profile: SiteProfile {
            brand: "YourName.dev".to_string(),
            headline: "Junior Developer".to_string(),
            tagline: "Passionate about creating clean, responsive web experiences with modern technologies".to_string(),
            about_intro: "I'm a passionate junior developer eager to contribute to meaningful projects and continue learning".to_string(),
            journey: vec![
                "I discovered my passion for web development through online courses and hands-on projects. \
                 While I'm early in my career, I bring enthusiasm, fresh perspectives, and a strong \
                 commitment to writing clean, maintainable code."
                    .to_string(),
                "I enjoy problem-solving and learning new technologies. My goal is to join a team where \
                 I can contribute while growing as a developer."
                    .to_string(),
            ],
            motto: "Always learning, always growing".to_string(),
            projects_intro: "Here are some projects I've worked on to practice and showcase my skills".to_string(),
            contact_intro: "I'm always interested in new opportunities and would love to hear about potential projects or roles".to_string(),
            resume_label: "Download Resume".to_string(),
            footer: "\u{a9} 2025 Your Name. Built with Rust & WebAssembly".to_string(),
        },
        projects: vec![
            project(
                "Task Management App",
                "A responsive React app for managing daily tasks with local storage persistence.",
                &["React", "JavaScript", "CSS3", "Local Storage"],
                ProjectStatus::Completed,
            ),
            project(
                "Weather Dashboard",
                "Clean weather app consuming REST APIs with dynamic backgrounds.",
                &["HTML5", "JavaScript", "Weather API", "CSS Grid"],
                ProjectStatus::Completed,
            ),
            project(
                "Personal Blog",
                "Static blog built with modern web technologies and responsive design.",
                &["HTML5", "CSS3", "JavaScript", "Git"],
                ProjectStatus::InProgress,
            ),
        ],
        skills: [
            ("JavaScript", 75),
            ("React", 65),
            ("HTML5", 90),
            ("CSS3", 85),
            ("Git", 70),
            ("Node.js", 45),
        ]
        .into_iter()
        .map(|(name, level)| SkillRating {
            name: name.to_string(),
            level,
        })
        .collect(),
        technical_expertise: vec![
            expertise("Frontend", &["Responsive layouts", "Component design", "Accessibility basics"]),
            expertise("Tooling", &["Git workflows", "Build pipelines", "Browser devtools"]),
            expertise("APIs", &["REST consumption", "JSON handling", "Error states"]),
        ],
        contacts: vec![
            ContactChannel {
                kind: ContactKind::Email,
                display: "your.email@example.com".to_string(),
                href: "mailto:your.email@example.com".to_string(),
            },
            ContactChannel {
                kind: ContactKind::Github,
                display: "github.com/yourusername".to_string(),
                href: "https://github.com/yourusername".to_string(),
            },
            ContactChannel {
                kind: ContactKind::Linkedin,
                display: "linkedin.com/in/yourname".to_string(),
                href: "https://linkedin.com/in/yourname".to_string(),
            },
        ],
        api_samples: vec![
            api_sample("GET", "/api/projects", "List portfolio projects"),
            api_sample("GET", "/api/skills", "List skill ratings"),
            api_sample("POST", "/api/contact", "Send a contact message"),
        ],
    }
}

fn project(title: &str, description: &str, tech: &[&str], status: ProjectStatus) -> Project {
    Project {
        title: title.to_string(),
        description: description.to_string(),
        tech: tech.iter().map(|tag| tag.to_string()).collect(),
        source_url: "#".to_string(),
        demo_url: "#".to_string(),
        status,
    }
}

fn expertise(title: &str, items: &[&str]) -> ExpertiseCategory {
    ExpertiseCategory {
        title: title.to_string(),
        items: items.iter().map(|item| item.to_string()).collect(),
    }
}

fn api_sample(method: &str, path: &str, description: &str) -> ApiSample {
    ApiSample {
        method: method.to_string(),
        path: path.to_string(),
        description: description.to_string(),
    }
}
