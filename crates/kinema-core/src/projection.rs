//! Derivation of the displayed list: base set → filter → stable sort.
//!
//! Everything here is a pure function over explicit inputs; the projected
//! list is always freshly allocated and the base set is never touched.

use crate::models::{MediaKind, SearchItem};

/// Sort order for the displayed list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortKey {
    #[default]
    TitleAsc,
    TitleDesc,
    YearAsc,
    YearDesc,
}

impl SortKey {
    pub const ALL: &[SortKey] = &[
        Self::TitleAsc,
        Self::TitleDesc,
        Self::YearAsc,
        Self::YearDesc,
    ];
}

impl std::fmt::Display for SortKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::TitleAsc => write!(f, "Title (A-Z)"),
            Self::TitleDesc => write!(f, "Title (Z-A)"),
            Self::YearAsc => write!(f, "Year (oldest first)"),
            Self::YearDesc => write!(f, "Year (newest first)"),
        }
    }
}

/// Client-side filter state.
///
/// Year bounds are free text; non-numeric input behaves like an empty
/// bound. `kind: None` means no kind restriction.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Filters {
    pub kind: Option<MediaKind>,
    pub year_from: String,
    pub year_to: String,
}

impl Filters {
    pub fn matches(&self, item: &SearchItem) -> bool {
        if let Some(kind) = self.kind {
            if item.kind != kind {
                return false;
            }
        }

        let year = year_prefix(&item.year);
        if let Some(from) = parse_bound(&self.year_from) {
            if year < from {
                return false;
            }
        }
        if let Some(to) = parse_bound(&self.year_to) {
            if year > to {
                return false;
            }
        }
        true
    }
}

fn parse_bound(text: &str) -> Option<u32> {
    let text = text.trim();
    if text.is_empty() {
        return None;
    }
    text.parse().ok()
}

/// Numeric prefix of a year string: the digits among its first four
/// characters, or 0 when it does not start with a digit.
///
/// Handles range years like "2001–2006" (→ 2001). Items with an
/// unparseable year compare as year 0, so any positive lower bound
/// excludes them.
pub fn year_prefix(year: &str) -> u32 {
    year.chars()
        .take(4)
        .take_while(|c| c.is_ascii_digit())
        .collect::<String>()
        .parse()
        .unwrap_or(0)
}

/// Derive the displayed list: filter, then stable-sort.
///
/// Ties keep their relative input order for every sort key.
pub fn project(base: &[SearchItem], filters: &Filters, sort: SortKey) -> Vec<SearchItem> {
    let mut out: Vec<SearchItem> = base
        .iter()
        .filter(|item| filters.matches(item))
        .cloned()
        .collect();

    match sort {
        SortKey::TitleAsc => out.sort_by(|a, b| title_key(&a.title).cmp(&title_key(&b.title))),
        SortKey::TitleDesc => out.sort_by(|a, b| title_key(&b.title).cmp(&title_key(&a.title))),
        SortKey::YearAsc => out.sort_by_key(|item| year_prefix(&item.year)),
        SortKey::YearDesc => out.sort_by(|a, b| year_prefix(&b.year).cmp(&year_prefix(&a.year))),
    }
    out
}

/// Case-insensitive collation key for title comparisons.
fn title_key(title: &str) -> String {
    title.to_lowercase()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(id: &str, title: &str, year: &str, kind: MediaKind) -> SearchItem {
        SearchItem {
            imdb_id: id.into(),
            title: title.into(),
            year: year.into(),
            poster: "N/A".into(),
            kind,
        }
    }

    fn ids(items: &[SearchItem]) -> Vec<&str> {
        items.iter().map(|m| m.imdb_id.as_str()).collect()
    }

    #[test]
    fn year_prefix_extraction() {
        assert_eq!(year_prefix("2005"), 2005);
        assert_eq!(year_prefix("2001–2006"), 2001);
        assert_eq!(year_prefix("1999-"), 1999);
        assert_eq!(year_prefix("N/A"), 0);
        assert_eq!(year_prefix(""), 0);
        assert_eq!(year_prefix("85"), 85);
    }

    #[test]
    fn projection_is_pure() {
        let base = vec![
            item("tt1", "Zorro", "1998", MediaKind::Movie),
            item("tt2", "Alien", "1979", MediaKind::Movie),
        ];
        let snapshot = base.clone();
        let filters = Filters::default();

        let first = project(&base, &filters, SortKey::TitleAsc);
        let second = project(&base, &filters, SortKey::TitleAsc);

        assert_eq!(first, second);
        assert_eq!(base, snapshot);
        assert_eq!(ids(&base), vec!["tt1", "tt2"]);
    }

    #[test]
    fn title_sort_ignores_case() {
        let base = vec![
            item("tt1", "batman Returns", "1992", MediaKind::Movie),
            item("tt2", "Alien", "1979", MediaKind::Movie),
            item("tt3", "Batman Begins", "2005", MediaKind::Movie),
        ];

        let asc = project(&base, &Filters::default(), SortKey::TitleAsc);
        assert_eq!(ids(&asc), vec!["tt2", "tt3", "tt1"]);

        let desc = project(&base, &Filters::default(), SortKey::TitleDesc);
        assert_eq!(ids(&desc), vec!["tt1", "tt3", "tt2"]);
    }

    #[test]
    fn year_sort_uses_numeric_prefix() {
        let base = vec![
            item("tt1", "Series", "2001–2006", MediaKind::Series),
            item("tt2", "Newer", "2015", MediaKind::Movie),
            item("tt3", "Oldest", "1979", MediaKind::Movie),
        ];

        let asc = project(&base, &Filters::default(), SortKey::YearAsc);
        assert_eq!(ids(&asc), vec!["tt3", "tt1", "tt2"]);

        let desc = project(&base, &Filters::default(), SortKey::YearDesc);
        assert_eq!(ids(&desc), vec!["tt2", "tt1", "tt3"]);
    }

    #[test]
    fn ties_preserve_input_order_for_every_key() {
        let base = vec![
            item("tt1", "Twin", "2010", MediaKind::Movie),
            item("tt2", "Twin", "2010", MediaKind::Movie),
            item("tt3", "Twin", "2010", MediaKind::Movie),
        ];

        for &sort in SortKey::ALL {
            let projected = project(&base, &Filters::default(), sort);
            assert_eq!(ids(&projected), vec!["tt1", "tt2", "tt3"], "{sort:?}");
        }
    }

    #[test]
    fn kind_filter_keeps_matching_items() {
        let base = vec![
            item("tt1", "A Movie", "2015", MediaKind::Movie),
            item("tt2", "A Series", "2005", MediaKind::Series),
            item("tt3", "An Episode", "2008", MediaKind::Episode),
        ];

        let filters = Filters {
            kind: Some(MediaKind::Series),
            ..Filters::default()
        };
        assert_eq!(ids(&project(&base, &filters, SortKey::TitleAsc)), vec!["tt2"]);

        let all = project(&base, &Filters::default(), SortKey::TitleAsc);
        assert_eq!(all.len(), 3);
    }

    #[test]
    fn unparseable_year_fails_positive_lower_bound() {
        let base = vec![
            item("tt1", "Dated", "2012", MediaKind::Movie),
            item("tt2", "Undated", "N/A", MediaKind::Movie),
        ];

        let open = Filters::default();
        assert_eq!(project(&base, &open, SortKey::TitleAsc).len(), 2);

        let bounded = Filters {
            year_from: "2000".into(),
            ..Filters::default()
        };
        assert_eq!(ids(&project(&base, &bounded, SortKey::TitleAsc)), vec!["tt1"]);
    }

    #[test]
    fn non_numeric_bound_behaves_as_empty() {
        let base = vec![item("tt1", "Dated", "2012", MediaKind::Movie)];
        let filters = Filters {
            year_from: "twenty".into(),
            year_to: " ".into(),
            ..Filters::default()
        };
        assert_eq!(project(&base, &filters, SortKey::TitleAsc).len(), 1);
    }

    #[test]
    fn combined_kind_and_year_range() {
        let base = vec![
            item("tt1", "Movie 2015", "2015", MediaKind::Movie),
            item("tt2", "Series 2005", "2005", MediaKind::Series),
            item("tt3", "Series 2012", "2012", MediaKind::Series),
        ];

        let filters = Filters {
            kind: Some(MediaKind::Series),
            year_from: "2010".into(),
            year_to: String::new(),
        };
        assert_eq!(ids(&project(&base, &filters, SortKey::TitleAsc)), vec!["tt3"]);
    }

    #[test]
    fn year_to_bound_is_inclusive() {
        let base = vec![
            item("tt1", "A", "2010", MediaKind::Movie),
            item("tt2", "B", "2011", MediaKind::Movie),
        ];
        let filters = Filters {
            year_to: "2010".into(),
            ..Filters::default()
        };
        assert_eq!(ids(&project(&base, &filters, SortKey::TitleAsc)), vec!["tt1"]);
    }
}
