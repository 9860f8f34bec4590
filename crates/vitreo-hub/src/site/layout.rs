//! Page shell: head, navigation header and footer

use super::html::escape;
use chrono::Datelike;

const STYLESHEET: &str = include_str!("../../assets/site.css");

/// Brand used when no site configuration is at hand (error pages)
pub const DEFAULT_SITE_TITLE: &str = "Vitreo Hub";

pub const FOOTER_DISCLAIMER: &str = "Educational resource only. Not medical advice. \
     Always consult a qualified ophthalmologist for clinical decisions.";

/// A top-level navigation entry
#[derive(Debug, Clone, Copy)]
pub struct NavItem {
    pub href: &'static str,
    pub label: &'static str,
}

pub const NAV_ITEMS: [NavItem; 5] = [
    NavItem { href: "/", label: "Dashboard" },
    NavItem { href: "/innovations", label: "Innovations" },
    NavItem { href: "/techniques", label: "Techniques" },
    NavItem { href: "/timeline", label: "Timeline" },
    NavItem { href: "/research", label: "Research" },
];

impl NavItem {
    /// The dashboard only matches `/`; other items match their whole subtree
    pub fn is_active(&self, path: &str) -> bool {
        if self.href == "/" {
            path == "/"
        } else {
            path == self.href
                || path
                    .strip_prefix(self.href)
                    .is_some_and(|rest| rest.starts_with('/'))
        }
    }
}

/// Wrap page content in the full document
pub fn page(site_title: &str, page_title: &str, path: &str, content: &str) -> String {
    let title = if page_title.is_empty() {
        escape(site_title)
    } else {
        format!("{} | {}", escape(page_title), escape(site_title))
    };

    let mut out = String::with_capacity(content.len() + STYLESHEET.len() + 2048);
    out.push_str("<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n");
    out.push_str("<meta charset=\"utf-8\">\n");
    out.push_str("<meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">\n");
    out.push_str(&format!("<title>{}</title>\n", title));
    out.push_str(&format!("<style>{}</style>\n", STYLESHEET));
    out.push_str("</head>\n<body>\n");
    out.push_str(&header(site_title, path));
    out.push_str("<main>\n");
    out.push_str(content);
    out.push_str("\n</main>\n");
    out.push_str(&footer(site_title));
    out.push_str("</body>\n</html>\n");
    out
}

fn header(site_title: &str, path: &str) -> String {
    let mut out = String::from("<header class=\"site\">");
    out.push_str(&format!(
        "<a class=\"brand\" href=\"/\">{}<small>Surgical Innovation</small></a><nav>",
        escape(site_title)
    ));
    for item in NAV_ITEMS {
        let class = if item.is_active(path) {
            " class=\"active\" aria-current=\"page\""
        } else {
            ""
        };
        out.push_str(&format!("<a href=\"{}\"{}>{}</a>", item.href, class, item.label));
    }
    out.push_str("</nav></header>\n");
    out
}

fn footer(site_title: &str) -> String {
    let year = chrono::Utc::now().year();
    format!(
        "<footer class=\"site\"><p><strong>{title}</strong></p><p>{disclaimer}</p>\
         <p>&copy; {year} {title}. For educational purposes only.</p></footer>\n",
        title = escape(site_title),
        disclaimer = FOOTER_DISCLAIMER,
        year = year,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_nav_active_matching() {
        let dashboard = NAV_ITEMS[0];
        assert!(dashboard.is_active("/"));
        assert!(!dashboard.is_active("/innovations"));

        let innovations = NAV_ITEMS[1];
        assert!(innovations.is_active("/innovations"));
        assert!(innovations.is_active("/innovations/ioct"));
        assert!(!innovations.is_active("/innovationsx"));
        assert!(!innovations.is_active("/"));
    }

    #[test]
    fn test_page_shell() {
        let html = page("Vitreo Hub", "Timeline", "/timeline", "<p>body</p>");
        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(html.contains("<title>Timeline | Vitreo Hub</title>"));
        assert!(html.contains("<a href=\"/timeline\" class=\"active\" aria-current=\"page\">Timeline</a>"));
        assert!(html.contains("<p>body</p>"));
        assert!(html.contains(FOOTER_DISCLAIMER));
    }

    #[test]
    fn test_site_title_is_escaped() {
        let html = page("R&D <Hub>", "", "/", "");
        assert!(html.contains("<title>R&amp;D &lt;Hub&gt;</title>"));
    }
}
