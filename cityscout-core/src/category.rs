//! Map caller-facing categories onto the directory's canonical types.
//!
//! Callers ask for venues in everyday terms ("hotel", "shopping"); the
//! places directory indexes them under its own type names. The map is
//! configuration data with a stock default; lookups for unmapped terms fall
//! back to the directory's general attraction type.

use std::collections::HashMap;

/// Directory type used when a caller's category has no mapping.
const FALLBACK_CATEGORY: &str = "tourist_attraction";

/// Translation table from caller categories to directory types.
///
/// # Examples
/// ```
/// use cityscout_core::CategoryMap;
///
/// let map = CategoryMap::default();
/// assert_eq!(map.resolve("hotel"), "lodging");
/// assert_eq!(map.resolve("castle"), "tourist_attraction");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryMap {
    entries: HashMap<String, String>,
}

impl CategoryMap {
    /// Build a map from explicit pairs.
    pub fn new<I, K, V>(entries: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        Self {
            entries: entries
                .into_iter()
                .map(|(key, value)| (key.into(), value.into()))
                .collect(),
        }
    }

    /// Translate a caller category into the directory's type name.
    ///
    /// Unknown categories resolve to the general attraction type rather
    /// than failing, so free-text input always produces a usable search.
    #[must_use]
    pub fn resolve(&self, category: &str) -> &str {
        self.entries
            .get(category)
            .map_or(FALLBACK_CATEGORY, String::as_str)
    }
}

impl Default for CategoryMap {
    fn default() -> Self {
        Self::new([
            ("restaurant", "restaurant"),
            ("cafe", "cafe"),
            ("hotel", "lodging"),
            ("hotels", "lodging"),
            ("temple", "temple"),
            ("shopping", "shopping_mall"),
            ("fort", "tourist_attraction"),
            ("museum", "museum"),
            ("park", "park"),
            ("beach", "natural_feature"),
            ("mountain", "natural_feature"),
            ("lake", "natural_feature"),
            ("airport", "airport"),
            ("hospital", "hospital"),
            ("school", "school"),
            ("university", "university"),
            ("bank", "bank"),
            ("pharmacy", "pharmacy"),
            ("gas_station", "gas_station"),
            ("post_office", "post_office"),
        ])
    }
}
