//! Static service catalog and case studies.
//!
//! These arrays back the marketing pages, the booking flow and the sitemap.
//! The server prices checkout orders from [`SERVICES`] rather than trusting a
//! client-supplied amount.

#[cfg(test)]
#[path = "catalog_test.rs"]
mod catalog_test;

use crate::net::types::{CaseStudy, ServiceItem};

pub const SERVICES: &[ServiceItem] = &[
    ServiceItem {
        slug: "landing-page",
        title: "Landing Page",
        summary: "A fast, responsive single-page site built to convert.",
        price_usd: 499,
        features: &["Responsive design", "SEO setup", "Contact form", "Analytics"],
    },
    ServiceItem {
        slug: "business-website",
        title: "Business Website",
        summary: "A multi-page site with a CMS your team can edit.",
        price_usd: 1_499,
        features: &["Up to 10 pages", "Headless CMS", "Blog", "Performance budget"],
    },
    ServiceItem {
        slug: "web-app",
        title: "Web Application",
        summary: "Custom dashboards, portals and internal tools.",
        price_usd: 4_999,
        features: &["Auth and roles", "Database design", "API integration", "CI/CD"],
    },
    ServiceItem {
        slug: "ecommerce",
        title: "E-commerce Store",
        summary: "Storefront with catalog, cart and payment gateway.",
        price_usd: 2_999,
        features: &["Product catalog", "Checkout", "Payment gateway", "Order emails"],
    },
    ServiceItem {
        slug: "maintenance",
        title: "Care Plan",
        summary: "Monthly updates, monitoring and small changes.",
        price_usd: 199,
        features: &["Uptime monitoring", "Security updates", "2h changes/month"],
    },
];

pub const CASE_STUDIES: &[CaseStudy] = &[
    CaseStudy {
        slug: "clinic-booking",
        title: "Online booking for a dental clinic",
        client: "BrightSmile Dental",
        summary: "Replaced phone bookings with a self-service scheduler.",
        outcome: "62% of appointments booked online within three months.",
        stack: &["Rust", "Axum", "PostgreSQL"],
    },
    CaseStudy {
        slug: "boutique-store",
        title: "Storefront relaunch for a fashion boutique",
        client: "Thread & Co.",
        summary: "Moved a legacy shop to a fast headless storefront.",
        outcome: "Page load halved and conversion up 18%.",
        stack: &["Leptos", "Payment gateway", "Headless CMS"],
    },
    CaseStudy {
        slug: "logistics-portal",
        title: "Shipment tracking portal",
        client: "NorthBay Logistics",
        summary: "Customer portal with live shipment status and invoices.",
        outcome: "Support tickets about delivery status dropped 40%.",
        stack: &["Rust", "WebSockets", "PostgreSQL"],
    },
];

#[must_use]
pub fn find_service(slug: &str) -> Option<&'static ServiceItem> {
    SERVICES.iter().find(|s| s.slug == slug)
}

#[must_use]
pub fn find_case_study(slug: &str) -> Option<&'static CaseStudy> {
    CASE_STUDIES.iter().find(|c| c.slug == slug)
}

/// Price in cents for a catalog entry.
#[must_use]
pub fn price_cents(service: &ServiceItem) -> u64 {
    u64::from(service.price_usd) * 100
}

/// Format a whole-dollar amount as `$1,499`.
#[must_use]
pub fn format_usd(amount: u32) -> String {
    format!("${}", group_thousands(u64::from(amount)))
}

/// Format an amount converted at `rate` as `₹41,417`.
#[must_use]
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss, clippy::cast_precision_loss)]
pub fn format_inr(amount_usd: u32, rate: f64) -> String {
    let converted = (f64::from(amount_usd) * rate).round().max(0.0) as u64;
    format!("₹{}", group_thousands(converted))
}

fn group_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}
