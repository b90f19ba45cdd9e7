//! Injectable translation lookup.
//!
//! Components never hard-code user-facing strings; they ask a [`Translator`]
//! for a key such as `"Show"`. The default translator is the identity, so
//! the key itself is displayed.
//!
//! ```
//! use ecommerce_input_core::{Catalog, Translator};
//!
//! let catalog: Catalog = [("Show", "Mostrar")].into_iter().collect();
//! let translator = Translator::new(catalog);
//! assert_eq!(translator.t("Show"), "Mostrar");
//! assert_eq!(translator.t("Hide"), "Hide");
//! ```

use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

use serde::Deserialize;

use crate::error::Result;

/// Source of localized strings
pub trait Translate: Send + Sync {
    /// Localized string for `key`, or `None` to fall back to the key
    fn lookup(&self, key: &str) -> Option<String>;
}

/// Translation that always falls back to the key
#[derive(Clone, Copy, Debug, Default)]
pub struct Identity;

impl Translate for Identity {
    fn lookup(&self, _key: &str) -> Option<String> {
        None
    }
}

/// Fixed key to string map
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(transparent)]
pub struct Catalog {
    entries: HashMap<String, String>,
}

impl Catalog {
    /// Load a flat JSON object, e.g. `{"Show": "Mostrar", "Hide": "Ocultar"}`.
    pub fn from_json_str(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for Catalog {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            entries: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}

impl Translate for Catalog {
    fn lookup(&self, key: &str) -> Option<String> {
        self.entries.get(key).cloned()
    }
}

/// Shared handle to a [`Translate`] implementation.
///
/// Cheap to clone. Two translators compare equal only when they share the
/// same underlying source, which is what Dioxus props and context need.
#[derive(Clone)]
pub struct Translator {
    inner: Arc<dyn Translate>,
}

impl Translator {
    pub fn new(source: impl Translate + 'static) -> Self {
        Self {
            inner: Arc::new(source),
        }
    }

    pub fn identity() -> Self {
        Self::new(Identity)
    }

    /// Translate `key`, falling back to the key itself
    pub fn t(&self, key: &str) -> String {
        self.inner.lookup(key).unwrap_or_else(|| key.to_string())
    }
}

impl Default for Translator {
    fn default() -> Self {
        Self::identity()
    }
}

impl PartialEq for Translator {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.inner, &other.inner)
    }
}

impl fmt::Debug for Translator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Translator").finish_non_exhaustive()
    }
}
