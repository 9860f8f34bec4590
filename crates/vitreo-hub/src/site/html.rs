//! HTML building blocks
//!
//! Every dynamic string goes through [`escape`] before it is written into
//! markup, including values from the compiled-in catalog.

use url::form_urlencoded;
use vitreo_types::MAX_IMPACT;

/// Escape text for use in element content and quoted attribute values
pub fn escape(input: &str) -> String {
    input
        .replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}

/// Build an escaped href from a path and query pairs. Empty values are dropped.
pub fn href(path: &str, params: &[(&str, &str)]) -> String {
    let mut query = form_urlencoded::Serializer::new(String::new());
    let mut any = false;
    for (key, value) in params {
        if !value.is_empty() {
            query.append_pair(key, value);
            any = true;
        }
    }

    if any {
        escape(&format!("{}?{}", path, query.finish()))
    } else {
        escape(path)
    }
}

pub fn badge(class: &str, text: &str) -> String {
    format!(
        "<span class=\"badge {}\">{}</span>",
        escape(class),
        escape(text)
    )
}

/// Impact rating as a row of ten segments, the first `impact` of them filled
pub fn impact_bar(impact: u8, show_score: bool) -> String {
    let mut out = String::from("<div class=\"impact\"><span class=\"muted\">Impact</span><span>");
    for i in 0..MAX_IMPACT {
        if i < impact {
            out.push_str("<span class=\"seg on\"></span>");
        } else {
            out.push_str("<span class=\"seg\"></span>");
        }
    }
    out.push_str("</span>");
    if show_score {
        out.push_str(&format!("<strong>{}/{}</strong>", impact, MAX_IMPACT));
    }
    out.push_str("</div>");
    out
}

/// One tab link of a tab bar
pub struct Tab {
    pub label: String,
    pub href: String,
    pub active: bool,
}

pub fn tab_bar(tabs: &[Tab]) -> String {
    let mut out = String::from("<nav class=\"tabs\">");
    for tab in tabs {
        out.push_str(&format!(
            "<a href=\"{}\"{}>{}</a>",
            tab.href,
            if tab.active { " class=\"active\"" } else { "" },
            escape(&tab.label)
        ));
    }
    out.push_str("</nav>");
    out
}

/// Search box that keeps the active tab in a hidden field
pub fn search_form(action: &str, placeholder: &str, category: &str, search: &str) -> String {
    let mut out = format!("<form class=\"search\" method=\"get\" action=\"{}\">", escape(action));
    if !category.is_empty() {
        out.push_str(&format!(
            "<input type=\"hidden\" name=\"category\" value=\"{}\">",
            escape(category)
        ));
    }
    out.push_str(&format!(
        "<input type=\"search\" name=\"q\" placeholder=\"{}\" value=\"{}\">",
        escape(placeholder),
        escape(search)
    ));
    out.push_str("</form>");
    out
}

/// Empty-state block with a link that clears every filter
pub fn empty_state(message: &str, hint: &str, reset_href: &str, reset_label: &str) -> String {
    format!(
        "<div class=\"empty\"><p><strong>{}</strong></p><p class=\"muted\">{}</p>\
         <a class=\"button\" href=\"{}\">{}</a></div>",
        escape(message),
        escape(hint),
        escape(reset_href),
        escape(reset_label)
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_escape() {
        assert_eq!(
            escape("<a href=\"x\">Tom & Jerry's</a>"),
            "&lt;a href=&quot;x&quot;&gt;Tom &amp; Jerry&#39;s&lt;/a&gt;"
        );
        assert_eq!(escape("plain"), "plain");
    }

    #[test]
    fn test_href_drops_empty_params() {
        assert_eq!(href("/innovations", &[("category", ""), ("q", "")]), "/innovations");
        assert_eq!(
            href("/innovations", &[("category", "ai"), ("q", "")]),
            "/innovations?category=ai"
        );
    }

    #[test]
    fn test_href_encodes_and_escapes() {
        assert_eq!(
            href("/techniques", &[("category", "macular"), ("q", "hole & peel")]),
            "/techniques?category=macular&amp;q=hole+%26+peel"
        );
    }

    #[test]
    fn test_impact_bar_segments() {
        let bar = impact_bar(7, true);
        assert_eq!(bar.matches("seg on").count(), 7);
        assert_eq!(bar.matches("class=\"seg\"").count(), 3);
        assert!(bar.contains("7/10"));
        assert!(!impact_bar(3, false).contains("/10"));
    }

    #[test]
    fn test_tab_bar_marks_active() {
        let tabs = [
            Tab { label: "All".into(), href: "/x".into(), active: false },
            Tab { label: "R&D".into(), href: "/x?c=r".into(), active: true },
        ];
        let html = tab_bar(&tabs);
        assert!(html.contains("<a href=\"/x?c=r\" class=\"active\">R&amp;D</a>"));
        assert!(html.contains("<a href=\"/x\">All</a>"));
    }

    proptest! {
        #[test]
        fn prop_escaped_text_has_no_markup(text in ".{0,40}") {
            let escaped = escape(&text);
            prop_assert!(!escaped.contains('<'));
            prop_assert!(!escaped.contains('>'));
            prop_assert!(!escaped.contains('"'));
            prop_assert!(!escaped.contains('\''));
        }
    }
}
