//! Distinct-type extraction, type filtering, and tab derivation.

use crate::models::{Food, FridgeEntry};

/// Distinct non-empty type values in first-seen order, deduplicated.
///
/// Empty input yields an empty output.
pub fn distinct_types<'a, I>(values: I) -> Vec<String>
where
    I: IntoIterator<Item = Option<&'a str>>,
{
    let mut seen = Vec::new();
    for value in values.into_iter().flatten() {
        if value.is_empty() {
            continue;
        }
        if !seen.iter().any(|s| s == value) {
            seen.push(value.to_owned());
        }
    }
    seen
}

/// Distinct types present in the food catalog.
#[must_use]
pub fn food_types(foods: &[Food]) -> Vec<String> {
    distinct_types(foods.iter().map(|f| f.food_type.as_deref()))
}

/// Distinct types present in a user's own entries (via the embedded food
/// snapshots), NOT in the global catalog.
#[must_use]
pub fn entry_types(entries: &[FridgeEntry]) -> Vec<String> {
    distinct_types(entries.iter().map(FridgeEntry::food_type))
}

/// Subsequence of `items` whose type equals `selected`, order preserved.
///
/// An empty selection means "no filter": the full collection comes back
/// unchanged. A selection absent from the collection yields an empty result,
/// not a failure.
pub fn filter_by_type<'a, T, F>(items: &'a [T], selected: &str, type_of: F) -> Vec<&'a T>
where
    F: Fn(&T) -> Option<&str>,
{
    if selected.is_empty() {
        return items.iter().collect();
    }
    items
        .iter()
        .filter(|item| type_of(item) == Some(selected))
        .collect()
}

/// Foods whose type equals `selected` (empty selection returns all).
#[must_use]
pub fn foods_of_type<'a>(foods: &'a [Food], selected: &str) -> Vec<&'a Food> {
    filter_by_type(foods, selected, |f| f.food_type.as_deref())
}

/// One tab on the refrigerator screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Tab {
    /// The synthetic "전체" tab, always first.
    All,
    /// One of the types present in the user's own entries.
    Type(String),
}

impl Tab {
    /// Label shown on the tab.
    #[must_use]
    pub fn label(&self) -> &str {
        match self {
            Self::All => "전체",
            Self::Type(t) => t,
        }
    }

    /// Whether an entry with the given type belongs under this tab.
    #[must_use]
    pub fn matches(&self, entry_type: Option<&str>) -> bool {
        match self {
            Self::All => true,
            Self::Type(t) => entry_type == Some(t.as_str()),
        }
    }
}

/// Tabs for the refrigerator view: "전체" prepended to the distinct types
/// found within the current user's own entries.
#[must_use]
pub fn fridge_tabs(entries: &[FridgeEntry]) -> Vec<Tab> {
    std::iter::once(Tab::All)
        .chain(entry_types(entries).into_iter().map(Tab::Type))
        .collect()
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::types::{EntryId, FoodId};

    fn food(id: i64, food_type: Option<&str>) -> Food {
        Food {
            id: FoodId::new(id),
            name: format!("food-{id}"),
            food_type: food_type.map(str::to_owned),
            image_url: None,
            created_at: None,
            updated_at: None,
        }
    }

    fn entry(id: i64, food_type: Option<&str>) -> FridgeEntry {
        FridgeEntry {
            id: EntryId::new(id),
            user_id: None,
            food: Some(food(id, food_type)),
            quantity: None,
            unit: None,
            exp_date: None,
        }
    }

    #[test]
    fn test_distinct_types_empty() {
        assert!(distinct_types(std::iter::empty()).is_empty());
        assert!(food_types(&[]).is_empty());
    }

    #[test]
    fn test_distinct_types_first_seen_order() {
        let foods = vec![
            food(1, Some("a")),
            food(2, Some("a")),
            food(3, Some("b")),
        ];
        assert_eq!(food_types(&foods), vec!["a", "b"]);
    }

    #[test]
    fn test_distinct_types_skips_empty_and_missing() {
        let foods = vec![
            food(1, None),
            food(2, Some("")),
            food(3, Some("찌개")),
            food(4, Some("볶음")),
            food(5, Some("찌개")),
        ];
        assert_eq!(food_types(&foods), vec!["찌개", "볶음"]);
    }

    #[test]
    fn test_filter_no_selection_returns_all_unchanged() {
        let foods = vec![food(1, Some("a")), food(2, Some("b")), food(3, None)];
        let filtered = foods_of_type(&foods, "");
        assert_eq!(filtered.len(), foods.len());
        let order: Vec<_> = filtered.iter().map(|f| f.id).collect();
        assert_eq!(order, vec![FoodId::new(1), FoodId::new(2), FoodId::new(3)]);
    }

    #[test]
    fn test_filter_by_type() {
        let foods = vec![food(1, Some("a")), food(2, Some("b")), food(3, Some("a"))];
        let filtered = foods_of_type(&foods, "a");
        assert_eq!(filtered.len(), 2);
        assert!(filtered.iter().all(|f| f.food_type.as_deref() == Some("a")));
    }

    #[test]
    fn test_filter_absent_type_yields_empty() {
        let foods = vec![food(1, Some("a"))];
        assert!(foods_of_type(&foods, "x").is_empty());
    }

    #[test]
    fn test_fridge_tabs_always_start_with_all() {
        assert_eq!(fridge_tabs(&[]), vec![Tab::All]);

        let entries = vec![entry(1, Some("반찬")), entry(2, Some("국")), entry(3, Some("반찬"))];
        let tabs = fridge_tabs(&entries);
        assert_eq!(
            tabs,
            vec![
                Tab::All,
                Tab::Type("반찬".to_owned()),
                Tab::Type("국".to_owned())
            ]
        );
        assert_eq!(tabs.first().unwrap().label(), "전체");
    }

    #[test]
    fn test_tab_matches() {
        assert!(Tab::All.matches(None));
        assert!(Tab::All.matches(Some("x")));
        assert!(Tab::Type("국".to_owned()).matches(Some("국")));
        assert!(!Tab::Type("국".to_owned()).matches(Some("반찬")));
        assert!(!Tab::Type("국".to_owned()).matches(None));
    }

    #[test]
    fn test_entry_types_use_embedded_snapshot() {
        let entries = vec![
            entry(1, Some("반찬")),
            FridgeEntry {
                id: EntryId::new(2),
                user_id: None,
                food: None,
                quantity: None,
                unit: None,
                exp_date: None,
            },
        ];
        assert_eq!(entry_types(&entries), vec!["반찬"]);
    }
}
