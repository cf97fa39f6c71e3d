//! Fixed category list accepted by the Getty search endpoint.

use crate::error::ScrapeError;

/// Artwork classification labels the endpoint accepts in its `types=` parameter.
pub const CATEGORIES: &[&str] = &[
    "Architectural drawings",
    "Architecture",
    "Book",
    "Coins",
    "Decorative Arts",
    "Drawings",
    "Figures (illustrations)",
    "Illuminations",
    "Implements",
    "Jewelry",
    "Manuscripts",
    "Mixed Material",
    "Paintings",
    "Photographs",
    "Plates (illustrations)",
    "Playing cards",
    "Prints",
    "Sculpture",
    "Vessels",
    "Visual Material",
    "Watercolors (paintings)",
];

/// A category label validated against [`CATEGORIES`].
///
/// Holding the `&'static str` from the table means a `Category` value is
/// known-valid everywhere downstream; validation happens exactly once.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Category(&'static str);

impl Category {
    /// Validates `name` against the fixed set (exact, case-sensitive match).
    pub fn parse(name: &str) -> Result<Self, ScrapeError> {
        CATEGORIES
            .iter()
            .find(|label| **label == name)
            .map(|label| Category(label))
            .ok_or_else(|| ScrapeError::InvalidCategory {
                given: name.to_string(),
            })
    }

    pub fn as_str(&self) -> &'static str {
        self.0
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_known_category() {
        let cat = Category::parse("Paintings").unwrap();
        assert_eq!(cat.as_str(), "Paintings");
    }

    #[test]
    fn parse_category_with_spaces_and_parens() {
        let cat = Category::parse("Watercolors (paintings)").unwrap();
        assert_eq!(cat.as_str(), "Watercolors (paintings)");
    }

    #[test]
    fn parse_unknown_category() {
        let err = Category::parse("Sketches").unwrap_err();
        match err {
            ScrapeError::InvalidCategory { given } => assert_eq!(given, "Sketches"),
            other => panic!("expected InvalidCategory, got {other}"),
        }
    }

    #[test]
    fn parse_is_case_sensitive() {
        assert!(Category::parse("paintings").is_err());
    }
}
