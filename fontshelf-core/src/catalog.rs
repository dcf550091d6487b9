//! Alphabetical grouping of font family names.
//!
//! The catalog is built once from a snapshot of the registry and never
//! changes afterwards. Only names whose first character is one of the 26
//! uppercase ASCII letters are placed; everything else is dropped silently
//! and only counted.

use std::collections::BTreeMap;
use std::fmt;

use tracing::debug;

/// Family excluded from grouping unless the configuration says otherwise.
pub const DEFAULT_EXCLUDED_FAMILY: &str = "Bodoni Ornaments";

/// One of the 26 uppercase ASCII letters used as section keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Letter(char);

impl Letter {
    /// The fixed index alphabet, in display order.
    pub const ALPHABET: [Letter; 26] = {
        let mut letters = [Letter('A'); 26];
        let mut i = 0;
        while i < 26 {
            letters[i] = Letter((b'A' + i as u8) as char);
            i += 1;
        }
        letters
    };

    /// Returns the letter for `c` when `c` is an uppercase ASCII letter.
    ///
    /// Comparison is exact: `'a'` is not a letter of the index.
    pub fn from_char(c: char) -> Option<Self> {
        c.is_ascii_uppercase().then_some(Letter(c))
    }

    pub fn as_char(self) -> char {
        self.0
    }
}

impl fmt::Display for Letter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A letter and the fonts filed under it, in first-seen order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LetterBucket {
    pub letter: Letter,
    pub fonts: Vec<String>,
}

impl LetterBucket {
    /// Fonts re-sorted ascending, the order sections are displayed in.
    pub fn sorted_fonts(&self) -> Vec<&str> {
        let mut fonts: Vec<&str> = self.fonts.iter().map(String::as_str).collect();
        fonts.sort_unstable();
        fonts
    }
}

/// Counts of input names that did not end up in any bucket.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Unplaced {
    /// Names matching an excluded family.
    pub excluded: usize,
    /// Names whose first character is not an uppercase ASCII letter.
    pub unmatched: usize,
}

/// Mapping from letter to bucket.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Catalog {
    buckets: BTreeMap<Letter, LetterBucket>,
    unplaced: Unplaced,
}

impl Catalog {
    /// Build a catalog excluding [`DEFAULT_EXCLUDED_FAMILY`].
    pub fn build<I, S>(font_names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self::build_with_exclusions(font_names, &[DEFAULT_EXCLUDED_FAMILY])
    }

    /// Build a catalog, skipping every name listed in `excluded`.
    pub fn build_with_exclusions<I, S, E>(font_names: I, excluded: &[E]) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
        E: AsRef<str>,
    {
        let mut catalog = Catalog::default();

        for name in font_names {
            let name = name.as_ref();

            if excluded.iter().any(|e| e.as_ref() == name) {
                catalog.unplaced.excluded += 1;
                continue;
            }

            let first = name.chars().next();
            let mut placed = false;
            for letter in Letter::ALPHABET {
                if first == Some(letter.as_char()) {
                    catalog
                        .buckets
                        .entry(letter)
                        .or_insert_with(|| LetterBucket {
                            letter,
                            fonts: Vec::new(),
                        })
                        .fonts
                        .push(name.to_string());
                    placed = true;
                }
            }

            if !placed {
                catalog.unplaced.unmatched += 1;
            }
        }

        debug!(
            placed = catalog.len(),
            sections = catalog.buckets.len(),
            excluded = catalog.unplaced.excluded,
            unmatched = catalog.unplaced.unmatched,
            "built font catalog"
        );

        catalog
    }

    /// Letters that have a bucket, ascending.
    pub fn letters(&self) -> Vec<Letter> {
        self.buckets.keys().copied().collect()
    }

    pub fn bucket(&self, letter: Letter) -> Option<&LetterBucket> {
        self.buckets.get(&letter)
    }

    /// Buckets in ascending letter order.
    pub fn buckets(&self) -> impl Iterator<Item = &LetterBucket> {
        self.buckets.values()
    }

    /// Whether `name` was placed in some bucket.
    pub fn contains(&self, name: &str) -> bool {
        name.chars()
            .next()
            .and_then(Letter::from_char)
            .and_then(|letter| self.buckets.get(&letter))
            .is_some_and(|bucket| bucket.fonts.iter().any(|f| f == name))
    }

    /// Number of placed fonts across all buckets.
    pub fn len(&self) -> usize {
        self.buckets.values().map(|b| b.fonts.len()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.buckets.is_empty()
    }

    pub fn unplaced(&self) -> Unplaced {
        self.unplaced
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn letter(c: char) -> Letter {
        Letter::from_char(c).unwrap()
    }

    #[test]
    fn test_alphabet_is_a_to_z() {
        let chars: String = Letter::ALPHABET.iter().map(|l| l.as_char()).collect();
        assert_eq!(chars, "ABCDEFGHIJKLMNOPQRSTUVWXYZ");
    }

    #[test]
    fn test_letter_rejects_lowercase_and_digits() {
        assert!(Letter::from_char('a').is_none());
        assert!(Letter::from_char('1').is_none());
        assert!(Letter::from_char('É').is_none());
        assert_eq!(letter('Q').to_string(), "Q");
    }

    #[test]
    fn test_build_groups_by_first_letter() {
        let catalog = Catalog::build(["Arial", "Avenir", "Helvetica", "Bodoni Ornaments"]);

        assert_eq!(catalog.letters(), vec![letter('A'), letter('H')]);
        assert_eq!(
            catalog.bucket(letter('A')).unwrap().sorted_fonts(),
            vec!["Arial", "Avenir"]
        );
        assert_eq!(
            catalog.bucket(letter('H')).unwrap().fonts,
            vec!["Helvetica".to_string()]
        );
        assert!(catalog.bucket(letter('B')).is_none());
        assert!(!catalog.contains("Bodoni Ornaments"));
        assert_eq!(catalog.unplaced().excluded, 1);
    }

    #[test]
    fn test_bucket_keeps_first_seen_order() {
        let catalog = Catalog::build(["Zapfino", "Avenir", "Arial", "Academy Engraved LET"]);
        let a = catalog.bucket(letter('A')).unwrap();

        assert_eq!(a.fonts, vec!["Avenir", "Arial", "Academy Engraved LET"]);
        assert_eq!(a.sorted_fonts(), vec!["Academy Engraved LET", "Arial", "Avenir"]);
    }

    #[test]
    fn test_non_latin_initials_are_dropped() {
        let catalog = Catalog::build(["Émigré", "3D Sans", "arial", "", "Menlo"]);

        assert_eq!(catalog.len(), 1);
        assert!(catalog.contains("Menlo"));
        assert!(!catalog.contains("arial"));
        assert_eq!(catalog.unplaced().unmatched, 4);
    }

    #[test]
    fn test_empty_input_builds_empty_catalog() {
        let catalog = Catalog::build(Vec::<String>::new());
        assert!(catalog.is_empty());
        assert_eq!(catalog.len(), 0);
        assert!(catalog.letters().is_empty());
    }

    #[test]
    fn test_custom_exclusions_replace_default() {
        let catalog =
            Catalog::build_with_exclusions(["Bodoni Ornaments", "Wingdings"], &["Wingdings"]);

        assert!(catalog.contains("Bodoni Ornaments"));
        assert!(!catalog.contains("Wingdings"));
    }

    #[test]
    fn test_buckets_iterate_ascending() {
        let catalog = Catalog::build(["Zapfino", "Courier", "Menlo", "Baskerville"]);
        let order: Vec<char> = catalog.buckets().map(|b| b.letter.as_char()).collect();
        assert_eq!(order, vec!['B', 'C', 'M', 'Z']);
    }
}
