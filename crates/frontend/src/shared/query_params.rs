//! URL query parameters that outlive a single component (filters, sorts).
//!
//! Repeated keys are kept in order: `?filter=a&filter=b` → `["a", "b"]`.

use leptos::prelude::*;
use web_sys::window;

/// Read/write access to repeated URL query parameters
pub trait QueryParams {
    fn values(&self, key: &str) -> Vec<String>;
    fn set_values(&self, key: &str, values: Vec<String>);
}

/// Parses `?a=1&b=2&a=3` (leading `?` optional) into ordered pairs
pub fn parse_query(search: &str) -> Vec<(String, String)> {
    search
        .trim_start_matches('?')
        .split('&')
        .filter(|part| !part.is_empty())
        .map(|part| {
            let (key, value) = part.split_once('=').unwrap_or((part, ""));
            (decode(key), decode(value))
        })
        .collect()
}

fn decode(raw: &str) -> String {
    let raw = raw.replace('+', " ");
    urlencoding::decode(&raw)
        .map(|v| v.into_owned())
        .unwrap_or(raw)
}

/// Inverse of `parse_query`, without the leading `?`
pub fn build_query(pairs: &[(String, String)]) -> String {
    pairs
        .iter()
        .map(|(k, v)| format!("{}={}", urlencoding::encode(k), urlencoding::encode(v)))
        .collect::<Vec<_>>()
        .join("&")
}

/// Replaces every value of `key`, keeping the position of the first occurrence
pub fn replace_values(pairs: &mut Vec<(String, String)>, key: &str, values: Vec<String>) {
    let position = pairs.iter().position(|(k, _)| k == key).unwrap_or(pairs.len());
    pairs.retain(|(k, _)| k != key);
    let position = position.min(pairs.len());
    for (offset, value) in values.into_iter().enumerate() {
        pairs.insert(position + offset, (key.to_string(), value));
    }
}

/// Query parameters of the browser location, mirrored in a signal.
///
/// Writes use `history.replaceState`, so they do not add history entries.
#[derive(Clone, Copy)]
pub struct BrowserQueryParams {
    pairs: RwSignal<Vec<(String, String)>>,
}

impl BrowserQueryParams {
    pub fn new() -> Self {
        Self {
            pairs: RwSignal::new(current_search().map(|s| parse_query(&s)).unwrap_or_default()),
        }
    }

    /// Re-reads the location after router navigation
    pub fn sync_from_location(&self) {
        let pairs = current_search().map(|s| parse_query(&s)).unwrap_or_default();
        if self.pairs.get_untracked() != pairs {
            self.pairs.set(pairs);
        }
    }

    /// Tracked read for views
    pub fn watch(&self, key: &str) -> Vec<String> {
        self.pairs.with(|pairs| collect_values(pairs, key))
    }
}

impl Default for BrowserQueryParams {
    fn default() -> Self {
        Self::new()
    }
}

fn collect_values(pairs: &[(String, String)], key: &str) -> Vec<String> {
    pairs
        .iter()
        .filter(|(k, _)| k == key)
        .map(|(_, v)| v.clone())
        .collect()
}

fn current_search() -> Option<String> {
    window().and_then(|w| w.location().search().ok())
}

impl QueryParams for BrowserQueryParams {
    fn values(&self, key: &str) -> Vec<String> {
        self.pairs.with_untracked(|pairs| collect_values(pairs, key))
    }

    fn set_values(&self, key: &str, values: Vec<String>) {
        self.pairs.update(|pairs| replace_values(pairs, key, values));
        let query = self.pairs.with_untracked(|pairs| build_query(pairs));

        let Some(w) = window() else { return };
        let pathname = w.location().pathname().unwrap_or_default();
        let new_url = if query.is_empty() {
            pathname
        } else {
            format!("{}?{}", pathname, query)
        };
        if let Ok(history) = w.history() {
            let _ = history.replace_state_with_url(&wasm_bindgen::JsValue::NULL, "", Some(&new_url));
        }
    }
}
