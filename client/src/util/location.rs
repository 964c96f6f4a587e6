//! Navigation accessors for the current URL.
//!
//! SYSTEM CONTEXT
//! ==============
//! Pages read the query string, path and fragment through a
//! [`LocationProvider`] instead of touching `window.location` directly. The
//! browser implementation only exists under `hydrate`; during SSR the provider
//! reports "no context" and every accessor degrades to its default.
//!
//! Absence of a browser context is a normal case, not an error.

#[cfg(test)]
#[path = "location_test.rs"]
mod location_test;

use std::sync::Arc;

use leptos::prelude::*;

/// Source of raw URL components.
///
/// Each method returns `None` when no browser context is available.
pub trait LocationProvider: Send + Sync {
    /// Raw query string, with or without the leading `?`.
    fn search(&self) -> Option<String>;
    /// Path component of the current URL.
    fn pathname(&self) -> Option<String>;
    /// Fragment, with or without the leading `#`.
    fn hash(&self) -> Option<String>;
}

/// Shared handle placed in Leptos context by the root component.
pub type SharedLocation = Arc<dyn LocationProvider>;

// =============================================================================
// PROVIDERS
// =============================================================================

/// Provider for non-interactive contexts: there is never a URL.
#[derive(Clone, Copy, Debug, Default)]
pub struct NullLocation;

impl LocationProvider for NullLocation {
    fn search(&self) -> Option<String> {
        None
    }

    fn pathname(&self) -> Option<String> {
        None
    }

    fn hash(&self) -> Option<String> {
        None
    }
}

/// Provider backed by `window.location`. Reads nothing outside the browser.
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserLocation;

impl LocationProvider for BrowserLocation {
    fn search(&self) -> Option<String> {
        #[cfg(feature = "hydrate")]
        {
            web_sys::window().and_then(|w| w.location().search().ok())
        }
        #[cfg(not(feature = "hydrate"))]
        {
            None
        }
    }

    fn pathname(&self) -> Option<String> {
        #[cfg(feature = "hydrate")]
        {
            web_sys::window().and_then(|w| w.location().pathname().ok())
        }
        #[cfg(not(feature = "hydrate"))]
        {
            None
        }
    }

    fn hash(&self) -> Option<String> {
        #[cfg(feature = "hydrate")]
        {
            web_sys::window().and_then(|w| w.location().hash().ok())
        }
        #[cfg(not(feature = "hydrate"))]
        {
            None
        }
    }
}

/// Provider over a fixed URL or path-and-query string.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct StaticLocation {
    path: String,
    search: String,
    hash: String,
}

impl StaticLocation {
    /// Split `raw` into path, query and fragment.
    ///
    /// Accepts absolute URLs (`https://host/a?b#c`) and relative
    /// path-and-query strings (`/a?b#c`).
    #[must_use]
    pub fn parse(raw: &str) -> Self {
        let relative = match raw.find("://") {
            Some(scheme_end) => {
                let after = &raw[scheme_end + 3..];
                after.find(['/', '?', '#']).map_or("", |i| &after[i..])
            }
            None => raw,
        };

        let (before_hash, hash) = match relative.split_once('#') {
            Some((head, frag)) => (head, frag),
            None => (relative, ""),
        };
        let (path, search) = match before_hash.split_once('?') {
            Some((p, q)) => (p, q),
            None => (before_hash, ""),
        };

        Self { path: path.to_owned(), search: search.to_owned(), hash: hash.to_owned() }
    }
}

impl LocationProvider for StaticLocation {
    fn search(&self) -> Option<String> {
        Some(self.search.clone())
    }

    fn pathname(&self) -> Option<String> {
        Some(self.path.clone())
    }

    fn hash(&self) -> Option<String> {
        Some(self.hash.clone())
    }
}

// =============================================================================
// QUERY PARAMS
// =============================================================================

/// Read-only key→value view over a query string.
///
/// Keys keep their first-seen order; for repeated keys the first value wins.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct QueryParams {
    pairs: Vec<(String, String)>,
}

impl QueryParams {
    /// Parse a raw query string. A leading `?` is ignored; values are
    /// percent-decoded and `+` is treated as a space.
    #[must_use]
    pub fn parse(raw: &str) -> Self {
        let raw = raw.strip_prefix('?').unwrap_or(raw);
        let mut pairs: Vec<(String, String)> = Vec::new();
        for (key, value) in url::form_urlencoded::parse(raw.as_bytes()) {
            if key.is_empty() || pairs.iter().any(|(k, _)| k.as_str() == key) {
                continue;
            }
            pairs.push((key.into_owned(), value.into_owned()));
        }
        Self { pairs }
    }

    #[must_use]
    pub fn get(&self, key: &str) -> Option<&str> {
        self.pairs
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    /// Value for `key`, ignoring blank values.
    #[must_use]
    pub fn get_non_empty(&self, key: &str) -> Option<&str> {
        self.get(key).map(str::trim).filter(|v| !v.is_empty())
    }

    #[must_use]
    pub fn contains(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.pairs.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

// =============================================================================
// ACCESSORS
// =============================================================================

/// Query parameters of the current URL; empty without a browser context.
#[must_use]
pub fn search_params(location: &dyn LocationProvider) -> QueryParams {
    location
        .search()
        .map(|raw| QueryParams::parse(&raw))
        .unwrap_or_default()
}

/// Current path; `"/"` without a browser context.
#[must_use]
pub fn pathname(location: &dyn LocationProvider) -> String {
    location
        .pathname()
        .filter(|p| !p.is_empty())
        .unwrap_or_else(|| "/".to_owned())
}

/// Fragment without its leading `#`; empty without a browser context.
#[must_use]
pub fn hash(location: &dyn LocationProvider) -> String {
    location
        .hash()
        .map(|h| h.strip_prefix('#').unwrap_or(h.as_str()).to_owned())
        .unwrap_or_default()
}

/// Query parameters re-read through `location` whenever `url` changes.
pub fn search_memo(location: SharedLocation, url: Memo<String>) -> Memo<QueryParams> {
    Memo::new(move |_| {
        url.track();
        search_params(location.as_ref())
    })
}

/// Query parameters of the current URL that follow client-side navigation.
///
/// Reads through the [`SharedLocation`] in context, re-evaluated whenever the
/// router's query string or fragment changes. Must be called under `<Router>`.
pub fn use_search_params() -> Memo<QueryParams> {
    let location = expect_context::<SharedLocation>();
    let route = leptos_router::hooks::use_location();
    let url = Memo::new(move |_| format!("{}#{}", route.search.get(), route.hash.get()));
    search_memo(location, url)
}

/// Provider appropriate for the current build: the browser under `hydrate`,
/// the null provider everywhere else.
#[must_use]
pub fn ambient() -> SharedLocation {
    #[cfg(feature = "hydrate")]
    {
        Arc::new(BrowserLocation)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Arc::new(NullLocation)
    }
}
