//! Page markup.
//!
//! # Responsibility
//! - Render the full document from content plus page state.
//! - Render the nav-link and mobile-menu fragments the browser bridge
//!   re-renders after state changes.
//!
//! # Invariants
//! - Output is a pure function of its inputs.
//! - Every content string is escaped before it reaches the output.
//! - A closed mobile menu contains no interactive elements.

use crate::model::content::{PortfolioContent, Project};
use crate::model::section::NavigationItem;
use crate::page::controller::PageState;
use crate::render::escape::escape_html;
use log::warn;

/// Container id of the desktop navigation links.
pub const NAV_LINKS_ID: &str = "nav-links";
/// Container id of the mobile menu.
pub const MOBILE_MENU_ID: &str = "mobile-menu";
/// Id of the mobile menu toggle button.
pub const MENU_TOGGLE_ID: &str = "menu-toggle";
/// Attribute carrying the navigation target on clickable elements.
pub const DATA_NAV_ATTR: &str = "data-nav";

/// Document-level render settings.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct RenderOptions {
    /// Module path of the `folio_web` JS glue, e.g. `./pkg/folio_web.js`.
    pub script_path: Option<String>,
    /// `<title>` override; defaults to the brand.
    pub title: Option<String>,
}

/// Renders a complete HTML5 document.
pub fn render_page(content: &PortfolioContent, state: &PageState, options: &RenderOptions) -> String {
    let profile = &content.profile;
    let title = options.title.as_deref().unwrap_or(profile.brand.as_str());
    let mut html = String::with_capacity(16 * 1024);

    html.push_str("<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n");
    html.push_str("<meta charset=\"UTF-8\">\n");
    html.push_str("<meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">\n");
    html.push_str(&format!("<title>{}</title>\n", escape_html(title)));
    html.push_str("</head>\n<body>\n");

    render_nav_bar(&mut html, content, state);
    render_hero(&mut html, content, state);
    render_about(&mut html, content);
    render_projects(&mut html, content);
    render_contact(&mut html, content);

    html.push_str(&format!(
        "<footer class=\"footer\"><p>{}</p></footer>\n",
        escape_html(&profile.footer)
    ));

    if let Some(script_path) = &options.script_path {
        match script_literal(script_path) {
            Ok(literal) => html.push_str(&format!(
                "<script type=\"module\">import init from {literal}; init();</script>\n"
            )),
            Err(err) => warn!("event=render_script module=render status=skipped error={err}"),
        }
    }
    html.push_str("</body>\n</html>\n");
    html
}

/// Quotes `path` as a JS string literal safe inside `<script>` raw text.
///
/// Character references are not decoded in script text, so HTML escaping
/// does not apply here.
fn script_literal(path: &str) -> Result<String, serde_json::Error> {
    Ok(serde_json::to_string(path)?.replace("</", "<\\/"))
}

/// Inner markup of `#nav-links`.
pub fn render_nav_links(state: &PageState) -> String {
    let mut html = String::new();
    for section in NavigationItem::ALL {
        push_nav_button(&mut html, section, state.active_section(), "nav-link");
    }
    html
}

/// Inner markup of `#mobile-menu`; empty while the menu is closed.
pub fn render_mobile_menu(state: &PageState) -> String {
    if !state.mobile_menu_open() {
        return String::new();
    }
    let mut html = String::new();
    for section in NavigationItem::ALL {
        push_nav_button(&mut html, section, state.active_section(), "mobile-nav-link");
    }
    html
}

fn push_nav_button(
    html: &mut String,
    section: NavigationItem,
    active: Option<NavigationItem>,
    class: &str,
) {
    let is_active = active == Some(section);
    html.push_str(&format!(
        "<button type=\"button\" class=\"{class}{}\" {DATA_NAV_ATTR}=\"{}\"{}>{}</button>",
        if is_active { " active" } else { "" },
        section.as_str(),
        if is_active { " aria-current=\"true\"" } else { "" },
        section.label()
    ));
}

fn render_nav_bar(html: &mut String, content: &PortfolioContent, state: &PageState) {
    let menu_open = state.mobile_menu_open();
    html.push_str("<nav class=\"nav-bar\">\n");
    html.push_str(&format!(
        "<span class=\"brand\">{}</span>\n",
        escape_html(&content.profile.brand)
    ));
    html.push_str(&format!(
        "<div id=\"{NAV_LINKS_ID}\" class=\"nav-links\">{}</div>\n",
        render_nav_links(state)
    ));
    html.push_str(&format!(
        "<button type=\"button\" id=\"{MENU_TOGGLE_ID}\" class=\"menu-toggle\" aria-label=\"Toggle menu\" aria-controls=\"{MOBILE_MENU_ID}\" aria-expanded=\"{menu_open}\">&#9776;</button>\n"
    ));
    html.push_str(&format!(
        "<div id=\"{MOBILE_MENU_ID}\" class=\"mobile-menu\"{}>{}</div>\n",
        if menu_open { "" } else { " hidden" },
        render_mobile_menu(state)
    ));
    html.push_str("</nav>\n");
}

fn render_hero(html: &mut String, content: &PortfolioContent, state: &PageState) {
    let profile = &content.profile;
    html.push_str(&format!(
        "<section id=\"{}\" class=\"hero\">\n",
        NavigationItem::Home.as_str()
    ));
    html.push_str(&format!(
        "<div class=\"hero-content{}\">\n",
        if state.is_visible() { " is-visible" } else { "" }
    ));
    html.push_str(&format!("<h1>{}</h1>\n", escape_html(&profile.headline)));
    html.push_str(&format!("<p class=\"tagline\">{}</p>\n", escape_html(&profile.tagline)));
    html.push_str("<div class=\"hero-actions\">");
    html.push_str(&format!(
        "<button type=\"button\" class=\"primary\" {DATA_NAV_ATTR}=\"{}\">View My Work</button>",
        NavigationItem::Projects.as_str()
    ));
    html.push_str(&format!(
        "<button type=\"button\" class=\"secondary\" {DATA_NAV_ATTR}=\"{}\">Get In Touch</button>",
        NavigationItem::Contact.as_str()
    ));
    html.push_str("</div>\n<div class=\"social-links\">");
    for channel in &content.contacts {
        html.push_str(&format!(
            "<a href=\"{}\" aria-label=\"{}\">{}</a>",
            escape_html(&channel.href),
            channel.kind.heading(),
            channel.kind.heading()
        ));
    }
    html.push_str("</div>\n</div>\n</section>\n");
}

fn render_about(html: &mut String, content: &PortfolioContent) {
    let profile = &content.profile;
    html.push_str(&format!(
        "<section id=\"{}\" class=\"about\">\n",
        NavigationItem::About.as_str()
    ));
    html.push_str("<h2>About Me</h2>\n");
    html.push_str(&format!("<p class=\"intro\">{}</p>\n", escape_html(&profile.about_intro)));

    html.push_str("<div class=\"journey\">\n<h3>My Journey</h3>\n");
    for paragraph in &profile.journey {
        html.push_str(&format!("<p>{}</p>\n", escape_html(paragraph)));
    }
    html.push_str(&format!("<p class=\"motto\">{}</p>\n</div>\n", escape_html(&profile.motto)));

    html.push_str("<div class=\"skills\">\n<h3>Skills</h3>\n");
    for skill in &content.skills {
        html.push_str(&format!(
            "<div class=\"skill\"><span class=\"skill-name\">{}</span><span class=\"skill-level\">{}%</span><div class=\"skill-bar\"><div class=\"skill-fill\" style=\"width: {}%\"></div></div></div>\n",
            escape_html(&skill.name),
            skill.level,
            skill.level
        ));
    }
    html.push_str("</div>\n");

    if !content.technical_expertise.is_empty() {
        html.push_str("<div class=\"expertise\">\n<h3>Technical Expertise</h3>\n");
        for category in &content.technical_expertise {
            html.push_str(&format!("<h4>{}</h4>\n<ul>", escape_html(&category.title)));
            for item in &category.items {
                html.push_str(&format!("<li>{}</li>", escape_html(item)));
            }
            html.push_str("</ul>\n");
        }
        html.push_str("</div>\n");
    }
    html.push_str("</section>\n");
}

fn render_projects(html: &mut String, content: &PortfolioContent) {
    html.push_str(&format!(
        "<section id=\"{}\" class=\"projects\">\n",
        NavigationItem::Projects.as_str()
    ));
    html.push_str("<h2>My Projects</h2>\n");
    html.push_str(&format!(
        "<p class=\"intro\">{}</p>\n",
        escape_html(&content.profile.projects_intro)
    ));
    html.push_str("<div class=\"project-grid\">\n");
    for project in &content.projects {
        render_project_card(html, project);
    }
    html.push_str("</div>\n");

    if !content.api_samples.is_empty() {
        html.push_str("<div class=\"api-samples\" aria-hidden=\"true\">\n<h3>Sample API Endpoints</h3>\n<ul>");
        for sample in &content.api_samples {
            html.push_str(&format!(
                "<li><code>{} {}</code> {}</li>",
                escape_html(&sample.method),
                escape_html(&sample.path),
                escape_html(&sample.description)
            ));
        }
        html.push_str("</ul>\n</div>\n");
    }
    html.push_str("</section>\n");
}

fn render_project_card(html: &mut String, project: &Project) {
    html.push_str("<article class=\"project-card\">\n");
    html.push_str(&format!(
        "<h3>{}</h3><span class=\"status {}\">{}</span>\n",
        escape_html(&project.title),
        project.status.css_class(),
        project.status.label()
    ));
    html.push_str(&format!("<p>{}</p>\n<div class=\"tech\">", escape_html(&project.description)));
    for tag in &project.tech {
        html.push_str(&format!("<span class=\"tag\">{}</span>", escape_html(tag)));
    }
    html.push_str("</div>\n");
    html.push_str(&format!(
        "<div class=\"project-links\"><a href=\"{}\">Code</a><a href=\"{}\">Demo</a></div>\n",
        escape_html(&project.source_url),
        escape_html(&project.demo_url)
    ));
    html.push_str("</article>\n");
}

fn render_contact(html: &mut String, content: &PortfolioContent) {
    html.push_str(&format!(
        "<section id=\"{}\" class=\"contact\">\n",
        NavigationItem::Contact.as_str()
    ));
    html.push_str("<h2>Let's Connect</h2>\n");
    html.push_str(&format!(
        "<p class=\"intro\">{}</p>\n<div class=\"contact-grid\">\n",
        escape_html(&content.profile.contact_intro)
    ));
    for channel in &content.contacts {
        html.push_str(&format!(
            "<a class=\"contact-card\" href=\"{}\"><h3>{}</h3><p>{}</p></a>\n",
            escape_html(&channel.href),
            channel.kind.heading(),
            escape_html(&channel.display)
        ));
    }
    html.push_str(&format!(
        "</div>\n<button type=\"button\" class=\"resume\">{}</button>\n</section>\n",
        escape_html(&content.profile.resume_label)
    ));
}

#[cfg(test)]
mod tests {
    use super::{render_mobile_menu, render_nav_links};
    use crate::model::section::NavigationItem;
    use crate::page::controller::PageState;

    #[test]
    fn nav_links_mark_only_the_active_section() {
        let state = PageState::new().with_active_section(Some(NavigationItem::Projects));
        let html = render_nav_links(&state);
        assert_eq!(html.matches("aria-current").count(), 1);
        assert!(html.contains(
            "class=\"nav-link active\" data-nav=\"projects\" aria-current=\"true\""
        ));
    }

    #[test]
    fn nav_links_without_active_section_mark_nothing() {
        let html = render_nav_links(&PageState::new());
        assert!(!html.contains("active"));
        assert_eq!(html.matches("<button").count(), 4);
    }

    #[test]
    fn mobile_menu_lists_buttons_only_when_open() {
        assert!(render_mobile_menu(&PageState::new()).is_empty());
        let open = PageState::new().with_mobile_menu_open(true);
        assert_eq!(render_mobile_menu(&open).matches("<button").count(), 4);
    }
}
