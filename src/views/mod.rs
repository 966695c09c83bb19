//! Askama templates for item blocks, containers and the dashboard page.
//!
//! All field text goes through askama's HTML escaping; only fragments that
//! were themselves produced by these templates are inserted with `|safe`.

use askama::Template;

/// Two-line item fragment: title, then metadata
#[derive(Template)]
#[template(
    source = "<div class=\"item-title\">{{ title }}</div>\n<div class=\"item-meta\">{{ meta }}</div>",
    ext = "html"
)]
pub struct ItemTemplate<'a> {
    pub title: &'a str,
    pub meta: &'a str,
}

/// Inner markup of a container
#[derive(Template)]
#[template(
    source = "{% if show_placeholder %}<p>{{ placeholder }}</p>{% else %}{% for block in blocks %}<div class=\"item\">{{ block|safe }}</div>{% endfor %}{% endif %}",
    ext = "html"
)]
pub struct ContainerTemplate<'a> {
    pub show_placeholder: bool,
    pub placeholder: &'a str,
    pub blocks: Vec<String>,
}

/// One section of the page
pub struct PageSection {
    pub id: String,
    pub heading: String,
    pub updated: String,
    pub html: String,
}

/// Host page carrying the three containers
#[derive(Template)]
#[template(path = "dashboard.html")]
pub struct DashboardPage {
    pub title: String,
    pub sections: Vec<PageSection>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_item_template_escapes_text() {
        let html = ItemTemplate {
            title: "<b>A</b> vs B",
            meta: "X & Y",
        }
        .render()
        .unwrap();

        assert!(html.contains("&lt;b&gt;A"));
        assert!(html.contains("X &amp; Y"));
        assert!(!html.contains("<b>"));
    }

    #[test]
    fn test_container_template_placeholder() {
        let html = ContainerTemplate {
            show_placeholder: true,
            placeholder: "No data available yet.",
            blocks: vec![],
        }
        .render()
        .unwrap();

        assert_eq!(html, "<p>No data available yet.</p>");
    }

    #[test]
    fn test_page_contains_section_ids() {
        let page = DashboardPage {
            title: "Matchday".to_string(),
            sections: vec![PageSection {
                id: "scores".to_string(),
                heading: "Scores".to_string(),
                updated: String::new(),
                html: "<p>Scores are unavailable.</p>".to_string(),
            }],
        };

        let html = page.render().unwrap();
        assert!(html.contains("<div id=\"scores\"><p>Scores are unavailable.</p></div>"));
        assert!(!html.contains("class=\"updated\""));
    }
}
