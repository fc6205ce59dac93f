//! Navigation section identifiers.
//!
//! # Responsibility
//! - Define the fixed, ordered set of page sections.
//! - Map identifiers between wire strings, display labels and typed values.
//!
//! # Invariants
//! - `NavigationItem::ALL` order is the tracker's evaluation order.
//! - Wire strings are lowercase and match the section element ids 1:1.

use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// One of the four page sections reachable from the navigation bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NavigationItem {
    /// Hero section at the top of the page.
    Home,
    /// About block with the skills list.
    About,
    /// Project gallery.
    Projects,
    /// Contact cards.
    Contact,
}

impl NavigationItem {
    /// All sections in document order.
    pub const ALL: [NavigationItem; 4] = [
        NavigationItem::Home,
        NavigationItem::About,
        NavigationItem::Projects,
        NavigationItem::Contact,
    ];

    /// Stable identifier used for element ids and wire payloads.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Home => SECTION_HOME,
            Self::About => SECTION_ABOUT,
            Self::Projects => SECTION_PROJECTS,
            Self::Contact => SECTION_CONTACT,
        }
    }

    /// Capitalized label shown in the navigation bar.
    pub fn label(self) -> &'static str {
        match self {
            Self::Home => "Home",
            Self::About => "About",
            Self::Projects => "Projects",
            Self::Contact => "Contact",
        }
    }
}

impl Display for NavigationItem {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Element id of the hero section.
pub const SECTION_HOME: &str = "home";
/// Element id of the about section.
pub const SECTION_ABOUT: &str = "about";
/// Element id of the projects section.
pub const SECTION_PROJECTS: &str = "projects";
/// Element id of the contact section.
pub const SECTION_CONTACT: &str = "contact";

/// Parses one navigation identifier.
///
/// Surrounding whitespace is ignored; matching is otherwise exact, so
/// `"About"` is rejected just like an unknown id.
pub fn parse_navigation_item(value: &str) -> Result<NavigationItem, NavigationItemError> {
    let normalized = value.trim();
    if normalized.is_empty() {
        return Err(NavigationItemError::Empty);
    }

    match normalized {
        SECTION_HOME => Ok(NavigationItem::Home),
        SECTION_ABOUT => Ok(NavigationItem::About),
        SECTION_PROJECTS => Ok(NavigationItem::Projects),
        SECTION_CONTACT => Ok(NavigationItem::Contact),
        other => Err(NavigationItemError::Unknown(other.to_string())),
    }
}

/// Navigation identifier parse errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NavigationItemError {
    Empty,
    Unknown(String),
}

impl Display for NavigationItemError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Empty => write!(f, "navigation identifier must not be empty"),
            Self::Unknown(value) => write!(f, "unknown navigation identifier: {value}"),
        }
    }
}

impl Error for NavigationItemError {}

#[cfg(test)]
mod tests {
    use super::{parse_navigation_item, NavigationItem, NavigationItemError};

    #[test]
    fn parses_every_section_identifier() {
        for item in NavigationItem::ALL {
            assert_eq!(
                parse_navigation_item(item.as_str()).expect("known id should parse"),
                item
            );
        }
        assert_eq!(
            parse_navigation_item("  projects ").expect("padded id should parse"),
            NavigationItem::Projects
        );
    }

    #[test]
    fn rejects_empty_and_unknown_identifiers() {
        assert_eq!(
            parse_navigation_item("   ").expect_err("blank id must fail"),
            NavigationItemError::Empty
        );
        assert_eq!(
            parse_navigation_item("About").expect_err("capitalized id must fail"),
            NavigationItemError::Unknown("About".to_string())
        );
        assert_eq!(
            parse_navigation_item("blog").expect_err("unknown id must fail"),
            NavigationItemError::Unknown("blog".to_string())
        );
    }

    #[test]
    fn order_matches_document_layout() {
        let ids: Vec<&str> = NavigationItem::ALL.iter().map(|item| item.as_str()).collect();
        assert_eq!(ids, vec!["home", "about", "projects", "contact"]);
    }

    #[test]
    fn serializes_as_lowercase_identifier() {
        let json = serde_json::to_string(&NavigationItem::Projects).expect("serialize");
        assert_eq!(json, "\"projects\"");
    }
}
