use stockroom_core::InventoryItem;

/// Case-insensitive substring filter over an already-fetched item list.
///
/// Pure and synchronous: it never consults the live store, only the snapshot
/// it is given. An empty query matches everything.
pub fn filter_items(items: &[InventoryItem], query: &str) -> Vec<InventoryItem> {
    let needle = query.to_lowercase();
    items
        .iter()
        .filter(|item| item.name.to_lowercase().contains(&needle))
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn items(names: &[&str]) -> Vec<InventoryItem> {
        names
            .iter()
            .map(|n| InventoryItem::new(*n, 1))
            .collect()
    }

    #[test]
    fn empty_query_matches_everything() {
        let all = items(&["Eggs", "Milk"]);
        assert_eq!(filter_items(&all, ""), all);
    }

    #[test]
    fn match_is_case_insensitive_substring() {
        let all = items(&["Eggs", "Milk"]);
        assert_eq!(filter_items(&all, "egg"), items(&["Eggs"]));
        assert_eq!(filter_items(&all, "ILK"), items(&["Milk"]));
        assert!(filter_items(&all, "bread").is_empty());
    }

    proptest! {
        /// Every kept item contains the query case-insensitively, and the
        /// result is a subsequence of the input.
        #[test]
        fn filter_keeps_only_matches(
            names in prop::collection::vec("[a-zA-Z]{0,8}", 0..12),
            query in "[a-zA-Z]{0,4}",
        ) {
            let all: Vec<InventoryItem> =
                names.iter().map(|n| InventoryItem::new(n.clone(), 1)).collect();
            let kept = filter_items(&all, &query);

            prop_assert!(kept.len() <= all.len());
            for item in &kept {
                prop_assert!(item.name.to_lowercase().contains(&query.to_lowercase()));
            }

            // Items left out genuinely do not match.
            for item in &all {
                if item.name.to_lowercase().contains(&query.to_lowercase()) {
                    prop_assert!(kept.contains(item));
                }
            }
        }
    }
}
