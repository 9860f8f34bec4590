//! Not-found, bad-request and error pages

use crate::site::html::escape;
use crate::site::layout::page;

pub fn not_found(site_title: &str) -> String {
    let content = "<div class=\"container empty\">\
         <h2>Page not found</h2>\
         <p class=\"muted\">The page you're looking for doesn't exist.</p>\
         <a class=\"button\" href=\"/\">Go home</a></div>";
    page(site_title, "Not found", "", content)
}

pub fn bad_request(site_title: &str, message: &str) -> String {
    let content = format!(
        "<div class=\"container empty\"><h2>Invalid request</h2>\
         <p class=\"muted\">{}</p><a class=\"button\" href=\"/\">Go home</a></div>",
        escape(message)
    );
    page(site_title, "Invalid request", "", &content)
}

/// Generic failure page; internal details are never shown
pub fn something_went_wrong(site_title: &str) -> String {
    let content = "<div class=\"container empty\"><h2>Something went wrong</h2>\
         <p class=\"muted\">An unexpected error occurred.</p>\
         <a class=\"button\" href=\"\">Try again</a></div>";
    page(site_title, "Error", "", content)
}
