//! Sort/filter projection over accumulated entries.
//!
//! [`project`] is a pure function: it borrows the accumulated entries and returns
//! the ordered subset to display. It never fails; missing dates sort as earliest
//! and non-finite ratings sort as lowest.
//!
//! # Algorithm
//!
//! 1. **View mode filter**: `FavoritesOnly` keeps entries whose `(id, kind)` is a favorite
//! 2. **Stable sort** by the key comparator
//! 3. **Order**: `Descending` reverses the comparator result, so ties keep their
//!    original relative order in both directions

use super::modes::{SortKey, SortOrder, SortSpec, ViewMode};
use crate::domain::{CatalogEntry, FavoriteKey};
use std::cmp::Ordering;
use std::collections::BTreeSet;

/// Projects `entries` into the ordered sequence to display.
#[must_use]
pub fn project<'a>(
    entries: &'a [CatalogEntry],
    sort: SortSpec,
    view_mode: ViewMode,
    favorites: &BTreeSet<FavoriteKey>,
) -> Vec<&'a CatalogEntry> {
    let mut visible: Vec<&CatalogEntry> = match view_mode {
        ViewMode::All => entries.iter().collect(),
        ViewMode::FavoritesOnly => entries
            .iter()
            .filter(|entry| favorites.contains(&entry.key()))
            .collect(),
    };

    // sort_by is stable
    visible.sort_by(|a, b| {
        let ordering = compare(a, b, sort.key);
        match sort.order {
            SortOrder::Ascending => ordering,
            SortOrder::Descending => ordering.reverse(),
        }
    });

    visible
}

/// Ascending comparator for `key`.
#[must_use]
pub fn compare(a: &CatalogEntry, b: &CatalogEntry, key: SortKey) -> Ordering {
    match key {
        SortKey::Title => compare_titles(&a.title, &b.title),
        SortKey::Rating => rating_key(a).total_cmp(&rating_key(b)),
        // None < Some(_): missing dates sort as earliest
        SortKey::ReleaseDate => a.release_date.cmp(&b.release_date),
    }
}

fn rating_key(entry: &CatalogEntry) -> f64 {
    if entry.rating_average.is_finite() {
        entry.rating_average
    } else {
        f64::NEG_INFINITY
    }
}

/// Locale-style title comparison.
///
/// Compares base letters first (ignoring accents and case), then accents, then
/// case, so `"éclair"` sorts next to `"eclair"` and before `"Zorro"`.
///
/// Accent folding only knows the Latin-1 and Latin Extended-A letters listed in
/// [`fold_accent`]. Anything else (ligatures such as `œ` and `æ`, Vietnamese
/// letters with stacked diacritics, non-Latin scripts) is compared by code point
/// after lowercasing, so `"Œdipe"` sorts after `"Zorro"`.
#[must_use]
pub fn compare_titles(a: &str, b: &str) -> Ordering {
    let primary = |s: &str| -> Vec<char> { s.chars().flat_map(char::to_lowercase).map(fold_accent).collect() };
    let secondary = |s: &str| -> Vec<char> { s.chars().flat_map(char::to_lowercase).collect() };

    primary(a)
        .cmp(&primary(b))
        .then_with(|| secondary(a).cmp(&secondary(b)))
        .then_with(|| b.cmp(a))
}

/// Maps common Latin accented lowercase letters to their base letter.
///
/// Fixed table, not Unicode decomposition: letters outside it are returned as is.
fn fold_accent(c: char) -> char {
    match c {
        'à' | 'á' | 'â' | 'ã' | 'ä' | 'å' | 'ā' | 'ă' | 'ą' => 'a',
        'ç' | 'ć' | 'č' => 'c',
        'ď' => 'd',
        'è' | 'é' | 'ê' | 'ë' | 'ē' | 'ė' | 'ę' | 'ě' => 'e',
        'ì' | 'í' | 'î' | 'ï' | 'ī' | 'į' => 'i',
        'ł' => 'l',
        'ñ' | 'ń' | 'ň' => 'n',
        'ò' | 'ó' | 'ô' | 'õ' | 'ö' | 'ø' | 'ō' | 'ő' => 'o',
        'ř' => 'r',
        'ś' | 'š' | 'ş' => 's',
        'ť' => 't',
        'ù' | 'ú' | 'û' | 'ü' | 'ū' | 'ů' | 'ű' => 'u',
        'ý' | 'ÿ' => 'y',
        'ź' | 'ż' | 'ž' => 'z',
        other => other,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::MediaKind;
    use chrono::NaiveDate;
    use proptest::prelude::*;

    fn entry(id: u64, title: &str, rating: f64, date: Option<(i32, u32, u32)>) -> CatalogEntry {
        CatalogEntry::new(id, MediaKind::Film, title)
            .with_rating(rating, 10)
            .with_release_date(date.and_then(|(y, m, d)| NaiveDate::from_ymd_opt(y, m, d)))
    }

    fn sample() -> Vec<CatalogEntry> {
        vec![
            entry(1, "Zodiac", 7.7, Some((2007, 3, 2))),
            entry(2, "amélie", 7.9, Some((2001, 4, 25))),
            entry(3, "Alien", 8.1, None),
            entry(4, "Memento", 8.4, Some((2000, 9, 5))),
            entry(5, "Éclair", 6.2, Some((2019, 1, 1))),
        ]
    }

    fn ids(projected: &[&CatalogEntry]) -> Vec<u64> {
        projected.iter().map(|e| e.id).collect()
    }

    const ALL_SPECS: [SortSpec; 6] = [
        SortSpec::new(SortKey::Title, SortOrder::Ascending),
        SortSpec::new(SortKey::Title, SortOrder::Descending),
        SortSpec::new(SortKey::Rating, SortOrder::Ascending),
        SortSpec::new(SortKey::Rating, SortOrder::Descending),
        SortSpec::new(SortKey::ReleaseDate, SortOrder::Ascending),
        SortSpec::new(SortKey::ReleaseDate, SortOrder::Descending),
    ];

    #[test]
    fn titles_sort_ignoring_case_and_accents() {
        let entries = sample();
        let sorted = project(&entries, SortSpec::new(SortKey::Title, SortOrder::Ascending), ViewMode::All, &BTreeSet::new());
        assert_eq!(ids(&sorted), vec![3, 2, 5, 4, 1]);
    }

    #[test]
    fn missing_dates_sort_earliest() {
        let entries = sample();
        let sorted = project(&entries, SortSpec::new(SortKey::ReleaseDate, SortOrder::Ascending), ViewMode::All, &BTreeSet::new());
        assert_eq!(ids(&sorted), vec![3, 4, 2, 1, 5]);
    }

    #[test]
    fn projection_is_a_permutation_and_idempotent() {
        let entries = sample();
        let none = BTreeSet::new();
        for spec in ALL_SPECS {
            let first = ids(&project(&entries, spec, ViewMode::All, &none));
            let second = ids(&project(&entries, spec, ViewMode::All, &none));
            assert_eq!(first, second, "{spec:?}");

            let mut sorted_ids = first.clone();
            sorted_ids.sort_unstable();
            assert_eq!(sorted_ids, vec![1, 2, 3, 4, 5], "{spec:?}");
        }
    }

    #[test]
    fn rating_ascending_reversed_equals_descending() {
        let entries = sample();
        let none = BTreeSet::new();
        let mut ascending = ids(&project(&entries, SortSpec::new(SortKey::Rating, SortOrder::Ascending), ViewMode::All, &none));
        let descending = ids(&project(&entries, SortSpec::new(SortKey::Rating, SortOrder::Descending), ViewMode::All, &none));
        ascending.reverse();
        assert_eq!(ascending, descending);
    }

    #[test]
    fn ties_keep_fetch_order_in_both_directions() {
        let entries = vec![
            entry(1, "A", 7.0, None),
            entry(2, "B", 9.0, None),
            entry(3, "C", 7.0, None),
            entry(4, "D", 7.0, None),
        ];
        let none = BTreeSet::new();
        let asc = project(&entries, SortSpec::new(SortKey::Rating, SortOrder::Ascending), ViewMode::All, &none);
        let desc = project(&entries, SortSpec::new(SortKey::Rating, SortOrder::Descending), ViewMode::All, &none);

        assert_eq!(ids(&asc), vec![1, 3, 4, 2]);
        assert_eq!(ids(&desc), vec![2, 1, 3, 4]);

        let mut reversed: Vec<f64> = asc.iter().map(|e| e.rating_average).collect();
        reversed.reverse();
        let desc_ratings: Vec<f64> = desc.iter().map(|e| e.rating_average).collect();
        assert_eq!(reversed, desc_ratings);
    }

    #[test]
    fn favorites_only_keeps_favorites_for_every_sort() {
        let entries = vec![
            entry(1, "E1", 5.0, None),
            entry(2, "E2", 9.0, None),
            entry(3, "E3", 7.0, None),
        ];
        let favorites = BTreeSet::from([FavoriteKey::new(1, MediaKind::Film)]);
        for spec in ALL_SPECS {
            let visible = project(&entries, spec, ViewMode::FavoritesOnly, &favorites);
            assert_eq!(ids(&visible), vec![1], "{spec:?}");
        }
    }

    #[test]
    fn favorites_of_other_kind_do_not_match() {
        let entries = vec![entry(1, "E1", 5.0, None)];
        let favorites = BTreeSet::from([FavoriteKey::new(1, MediaKind::Series)]);
        assert!(project(&entries, SortSpec::default(), ViewMode::FavoritesOnly, &favorites).is_empty());
    }

    #[test]
    fn non_finite_ratings_sort_lowest() {
        let entries = vec![entry(1, "A", f64::NAN, None), entry(2, "B", 0.5, None)];
        let sorted = project(&entries, SortSpec::new(SortKey::Rating, SortOrder::Ascending), ViewMode::All, &BTreeSet::new());
        assert_eq!(ids(&sorted), vec![1, 2]);
    }

    fn rating_strategy() -> impl Strategy<Value = f64> {
        prop_oneof![
            8 => (0_u32..=100).prop_map(|tenths| f64::from(tenths) / 10.0),
            1 => Just(f64::NAN),
        ]
    }

    fn date_strategy() -> impl Strategy<Value = Option<(i32, u32, u32)>> {
        prop::option::of((1950_i32..2030, 1_u32..=12, 1_u32..=28))
    }

    /// Entries with ids equal to their position, so ids identify entries exactly.
    fn entries_strategy() -> impl Strategy<Value = Vec<CatalogEntry>> {
        prop::collection::vec(("[a-zA-Zéèü ]{0,6}", rating_strategy(), date_strategy(), any::<bool>()), 0..24).prop_map(
            |rows| {
                (0_u64..)
                    .zip(rows)
                    .map(|(id, (title, rating, date, series))| {
                        let kind = if series { MediaKind::Series } else { MediaKind::Film };
                        CatalogEntry::new(id, kind, title)
                            .with_rating(rating, 10)
                            .with_release_date(date.and_then(|(y, m, d)| NaiveDate::from_ymd_opt(y, m, d)))
                    })
                    .collect()
            },
        )
    }

    fn favorites_strategy() -> impl Strategy<Value = BTreeSet<FavoriteKey>> {
        prop::collection::btree_set((0_u64..24, any::<bool>()), 0..12).prop_map(|keys| {
            keys.into_iter()
                .map(|(id, series)| FavoriteKey::new(id, if series { MediaKind::Series } else { MediaKind::Film }))
                .collect()
        })
    }

    proptest! {
        #[test]
        fn any_projection_is_a_filtered_permutation_and_idempotent(
            entries in entries_strategy(),
            favorites in favorites_strategy(),
            favorites_only in any::<bool>(),
        ) {
            let view_mode = if favorites_only { ViewMode::FavoritesOnly } else { ViewMode::All };
            let expected: Vec<u64> = entries
                .iter()
                .filter(|e| !favorites_only || favorites.contains(&e.key()))
                .map(|e| e.id)
                .collect();

            for spec in ALL_SPECS {
                let once = project(&entries, spec, view_mode, &favorites);
                let mut sorted_ids = ids(&once);
                sorted_ids.sort_unstable();
                prop_assert_eq!(&sorted_ids, &expected, "{:?}", spec);

                let again = ids(&project(&entries, spec, view_mode, &favorites));
                prop_assert_eq!(ids(&once), again, "{:?}", spec);

                let projected: Vec<CatalogEntry> = once.into_iter().cloned().collect();
                let reprojected = ids(&project(&projected, spec, view_mode, &favorites));
                prop_assert_eq!(ids(&projected.iter().collect::<Vec<_>>()), reprojected, "{:?}", spec);
            }
        }

        #[test]
        fn distinct_ratings_ascending_reversed_equals_descending(
            ratings in (1_usize..24).prop_flat_map(|n| Just((0..n).collect::<Vec<_>>()).prop_shuffle())
        ) {
            let entries: Vec<CatalogEntry> = (0_u64..)
                .zip(&ratings)
                .map(|(id, &step)| entry(id, "Same", step as f64 * 0.25, None))
                .collect();
            let none = BTreeSet::new();

            let mut ascending = ids(&project(&entries, SortSpec::new(SortKey::Rating, SortOrder::Ascending), ViewMode::All, &none));
            let descending = ids(&project(&entries, SortSpec::new(SortKey::Rating, SortOrder::Descending), ViewMode::All, &none));
            ascending.reverse();
            prop_assert_eq!(ascending, descending);
        }
    }
}
