//! Glass type catalog for the material autocomplete.
//!
//! A catalog is an owned value built from CSV text: one header row, then one
//! glass per line with the name in the first column. Further columns are
//! ignored.

use std::cmp::Ordering;

use crate::errors::CatalogError;
use crate::log::{debug, warn};

/// Upper bound on the suggestions returned for a non-empty query
pub const MAX_MATCHES: usize = 10;

const BUILTIN_CSV: &str = include_str!("../data/glass_types.csv");

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct GlassType {
    pub name: String,
}

impl GlassType {
    /// Name as shown in the material field (upper case)
    pub fn display_name(&self) -> String {
        self.name.to_uppercase()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GlassCatalog {
    glasses: Vec<GlassType>,
}

impl GlassCatalog {
    /// Parse catalog CSV text.
    pub fn from_csv(data: &str) -> Result<Self, CatalogError> {
        let mut lines = data.lines().filter(|line| !line.trim().is_empty());
        if lines.next().is_none() {
            return Err(CatalogError::Empty);
        }

        let mut glasses: Vec<GlassType> = lines
            .filter_map(|line| {
                let name = line.split(',').next()?.trim().trim_matches('"').trim();
                (!name.is_empty()).then(|| GlassType {
                    name: name.to_string(),
                })
            })
            .collect();
        if glasses.is_empty() {
            return Err(CatalogError::NoNames);
        }

        glasses.sort_by(|a, b| compare_names(&a.name, &b.name));
        debug!(count = glasses.len(), "loaded glass catalog");
        Ok(Self { glasses })
    }

    /// Load catalog text, falling back to an empty catalog on failure.
    pub fn load_or_empty(data: &str) -> Self {
        match Self::from_csv(data) {
            Ok(catalog) => catalog,
            Err(_err) => {
                warn!(error = %_err, "glass catalog unavailable, suggestions disabled");
                Self::default()
            }
        }
    }

    /// The reference list shipped with the crate
    pub fn builtin() -> Self {
        Self::load_or_empty(BUILTIN_CSV)
    }

    pub fn len(&self) -> usize {
        self.glasses.len()
    }

    pub fn is_empty(&self) -> bool {
        self.glasses.is_empty()
    }

    /// Suggestions for a partially typed glass name.
    ///
    /// A blank query lists the whole catalog; otherwise names containing the
    /// query (ignoring case and surrounding whitespace) are returned, at most
    /// [`MAX_MATCHES`] of them.
    pub fn search(&self, query: &str) -> Vec<&GlassType> {
        let query = query.trim().to_lowercase();
        if query.is_empty() {
            return self.glasses.iter().collect();
        }
        let matches: Vec<&GlassType> = self
            .glasses
            .iter()
            .filter(|glass| glass.name.to_lowercase().contains(&query))
            .take(MAX_MATCHES)
            .collect();
        debug!(query = %query, found = matches.len(), "glass search");
        matches
    }
}

fn compare_names(a: &str, b: &str) -> Ordering {
    a.to_lowercase().cmp(&b.to_lowercase()).then_with(|| a.cmp(b))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn names<'a>(glasses: &[&'a GlassType]) -> Vec<&'a str> {
        glasses.iter().map(|g| g.name.as_str()).collect()
    }

    #[test]
    fn csv_skips_header_and_blank_names() {
        let csv = "name,nd\nN-SF11,1.78\n\n  ,1.0\nN-BK7 , 1.51\n\"F2\",1.62\n";
        let catalog = GlassCatalog::from_csv(csv).unwrap();
        assert_eq!(names(&catalog.search("")), ["F2", "N-BK7", "N-SF11"]);
    }

    #[test]
    fn empty_and_headless_csv_are_errors() {
        assert_eq!(GlassCatalog::from_csv(""), Err(CatalogError::Empty));
        assert_eq!(GlassCatalog::from_csv("\n  \n"), Err(CatalogError::Empty));
        assert_eq!(GlassCatalog::from_csv("name\n,\n"), Err(CatalogError::NoNames));
    }

    #[test]
    fn failed_load_yields_empty_search() {
        let catalog = GlassCatalog::load_or_empty("");
        assert!(catalog.is_empty());
        assert!(catalog.search("bk7").is_empty());
        assert!(catalog.search("").is_empty());
    }

    #[test]
    fn search_is_case_insensitive_substring() {
        let catalog = GlassCatalog::builtin();
        assert_eq!(names(&catalog.search("bk7")), ["N-BK7"]);
        assert_eq!(names(&catalog.search("  Caf ")), ["CaF2"]);
        assert!(catalog.search("zzz").is_empty());
    }

    #[test]
    fn search_caps_matches() {
        let catalog = GlassCatalog::builtin();
        let found = catalog.search("sf");
        assert_eq!(found.len(), MAX_MATCHES);
        assert!(found.iter().all(|g| g.name.to_lowercase().contains("sf")));
    }

    #[test]
    fn blank_query_lists_everything_sorted() {
        let catalog = GlassCatalog::builtin();
        let all = catalog.search("   ");
        assert_eq!(all.len(), catalog.len());
        assert_eq!(all[0].name, "CaF2");
        assert!(all.windows(2).all(|w| compare_names(&w[0].name, &w[1].name) != Ordering::Greater));
    }

    #[test]
    fn display_name_is_upper_case() {
        let glass = GlassType {
            name: "CaF2".to_string(),
        };
        assert_eq!(glass.display_name(), "CAF2");
    }
}
