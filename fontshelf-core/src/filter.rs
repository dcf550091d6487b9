//! Search-bar filtering over the full family list.

/// Current search state.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum FilterState {
    /// No active search; the grouped catalog is shown.
    #[default]
    Empty,
    /// Non-empty query, kept verbatim. Case folding happens at filter time.
    Query(String),
}

/// Whether families excluded from grouping are also hidden from search results.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchPolicy {
    pub hidden: Vec<String>,
}

impl SearchPolicy {
    /// Search sees every family, including ones excluded from grouping.
    pub fn show_all() -> Self {
        Self::default()
    }

    /// Search skips the given families too.
    pub fn hide<I, S>(families: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            hidden: families.into_iter().map(Into::into).collect(),
        }
    }

    fn allows(&self, name: &str) -> bool {
        !self.hidden.iter().any(|h| h == name)
    }
}

impl FilterState {
    /// Empty text means no search; anything else is kept as typed.
    pub fn from_query(text: &str) -> Self {
        if text.is_empty() {
            FilterState::Empty
        } else {
            FilterState::Query(text.to_string())
        }
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, FilterState::Empty)
    }

    pub fn query(&self) -> Option<&str> {
        match self {
            FilterState::Empty => None,
            FilterState::Query(q) => Some(q),
        }
    }

    /// `None` when the grouped catalog should be shown, otherwise the sorted
    /// matches (possibly none).
    pub fn apply<S: AsRef<str>>(&self, fonts: &[S], policy: &SearchPolicy) -> Option<Vec<String>> {
        let query = self.query()?;
        let mut matches = filter_fonts(fonts, query);
        matches.retain(|name| policy.allows(name));
        Some(matches)
    }
}

/// Every font whose lowercase form contains the lowercase query, ascending.
pub fn filter_fonts<S: AsRef<str>>(fonts: &[S], query: &str) -> Vec<String> {
    let needle = query.to_lowercase();
    let mut matches: Vec<String> = fonts
        .iter()
        .map(AsRef::as_ref)
        .filter(|name| name.to_lowercase().contains(&needle))
        .map(str::to_string)
        .collect();
    matches.sort_unstable();
    matches
}

#[cfg(test)]
mod tests {
    use super::*;

    const FONTS: [&str; 4] = ["Helvetica", "Avenir", "Bodoni Ornaments", "Arial"];

    #[test]
    fn test_from_query_empty_is_no_search() {
        assert_eq!(FilterState::from_query(""), FilterState::Empty);
        assert_eq!(
            FilterState::from_query("Ar"),
            FilterState::Query("Ar".to_string())
        );
    }

    #[test]
    fn test_filter_is_case_insensitive_and_sorted() {
        assert_eq!(
            filter_fonts(&FONTS, "a"),
            vec!["Arial", "Avenir", "Bodoni Ornaments", "Helvetica"]
        );
        assert_eq!(filter_fonts(&FONTS, "HELV"), vec!["Helvetica"]);
    }

    #[test]
    fn test_filter_no_matches() {
        assert!(filter_fonts(&FONTS, "zzz").is_empty());
    }

    #[test]
    fn test_empty_state_shows_catalog() {
        assert_eq!(FilterState::Empty.apply(&FONTS, &SearchPolicy::show_all()), None);
    }

    #[test]
    fn test_query_with_no_matches_is_empty_list_not_catalog() {
        let state = FilterState::from_query("xyz");
        assert_eq!(state.apply(&FONTS, &SearchPolicy::show_all()), Some(vec![]));
    }

    #[test]
    fn test_default_policy_keeps_excluded_family() {
        let state = FilterState::from_query("a");
        let results = state.apply(&FONTS, &SearchPolicy::show_all()).unwrap();
        assert!(results.contains(&"Bodoni Ornaments".to_string()));
    }

    #[test]
    fn test_hiding_policy_drops_excluded_family() {
        let state = FilterState::from_query("a");
        let policy = SearchPolicy::hide(["Bodoni Ornaments"]);
        assert_eq!(
            state.apply(&FONTS, &policy).unwrap(),
            vec!["Arial", "Avenir", "Helvetica"]
        );
    }
}
