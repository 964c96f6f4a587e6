//! Crawler policy: `robots.txt` and `sitemap.xml`.
//!
//! Private areas (`/admin/`, `/dashboard/`) and the JSON API are disallowed;
//! everything else is crawlable. The sitemap lists public pages only.

use std::fmt::Write as _;

use axum::extract::State;
use axum::http::header::CONTENT_TYPE;
use axum::response::IntoResponse;
use client::catalog::CASE_STUDIES;

use crate::state::AppState;

pub const DISALLOWED: &[&str] = &["/admin/", "/dashboard/", "/api/"];
const PUBLIC_PAGES: &[&str] = &["/", "/services", "/case-studies", "/offers", "/booking"];

#[must_use]
pub fn robots_body(site_url: &str) -> String {
    let mut body = String::from("User-agent: *\nAllow: /\n");
    for path in DISALLOWED {
        let _ = writeln!(body, "Disallow: {path}");
    }
    let _ = write!(body, "\nSitemap: {site_url}/sitemap.xml\n");
    body
}

/// Public page paths, static routes first, then case-study detail pages.
#[must_use]
pub fn sitemap_paths() -> Vec<String> {
    PUBLIC_PAGES
        .iter()
        .map(|p| (*p).to_owned())
        .chain(CASE_STUDIES.iter().map(|c| format!("/case-studies/{}", c.slug)))
        .collect()
}

/// Escape the characters that may not appear raw in XML text.
fn xml_escape(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for c in raw.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            _ => out.push(c),
        }
    }
    out
}

#[must_use]
pub fn sitemap_body(site_url: &str) -> String {
    let mut body = String::from(
        "<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n\
         <urlset xmlns=\"http://www.sitemaps.org/schemas/sitemap/0.9\">\n",
    );
    for path in sitemap_paths() {
        let loc = if path == "/" { format!("{site_url}/") } else { format!("{site_url}{path}") };
        let _ = writeln!(body, "  <url><loc>{}</loc></url>", xml_escape(&loc));
    }
    body.push_str("</urlset>\n");
    body
}

/// `GET /robots.txt`
pub async fn robots(State(state): State<AppState>) -> impl IntoResponse {
    ([(CONTENT_TYPE, "text/plain; charset=utf-8")], robots_body(&state.config.site_url))
}

/// `GET /sitemap.xml`
pub async fn sitemap(State(state): State<AppState>) -> impl IntoResponse {
    ([(CONTENT_TYPE, "application/xml")], sitemap_body(&state.config.site_url))
}
