//! Item listing pipeline: filter, sort, paginate.
//!
//! Pure functions over an already-fetched item set and the category order;
//! the database hands over the full set in id order and everything else
//! happens here.

use crate::features::items::dtos::ListItemsQuery;
use crate::features::items::models::Item;

/// Rank assigned to slugs missing from the category order (deleted or never
/// registered). Larger than any real rank, so such items always sort last.
pub const UNKNOWN_CATEGORY_RANK: usize = 999;

/// Zero-based position of a slug in the registry order
pub fn category_rank(category_order: &[String], slug: &str) -> usize {
    category_order
        .iter()
        .position(|s| s == slug)
        .unwrap_or(UNKNOWN_CATEGORY_RANK)
}

/// Apply the listing query to the full item set.
///
/// The sort runs only on the unfiltered browse-all view: items group by
/// category in registry order, ties broken by ascending id. As soon as a
/// category filter or search is active the storage (id) order is kept
/// untouched. Empty category and search strings count as absent.
///
/// Pagination never fails: a page past the end or a limit of 0 yields an
/// empty slice, and negative page/limit values are clamped.
pub fn apply(mut items: Vec<Item>, category_order: &[String], query: &ListItemsQuery) -> Vec<Item> {
    let filter_category = query
        .category
        .as_deref()
        .filter(|c| *c != "all" && !c.is_empty());
    let search = query.search.as_deref().filter(|s| !s.is_empty());

    if let Some(slug) = filter_category {
        items.retain(|item| item.category == slug);
    }

    if let Some(needle) = search {
        let needle = needle.to_lowercase();
        items.retain(|item| item.title.to_lowercase().contains(&needle));
    }

    if filter_category.is_none() && search.is_none() {
        items.sort_by_key(|item| (category_rank(category_order, &item.category), item.id));
    }

    let limit = query.limit.max(0) as usize;
    let start = ((query.page.max(1) - 1) as usize).saturating_mul(limit);

    items.into_iter().skip(start).take(limit).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn item(id: i64, category: &str, title: &str) -> Item {
        Item {
            id,
            title: title.to_string(),
            description: format!("{} description", title),
            price: 10.0,
            category: category.to_string(),
            created_at: Utc::now(),
        }
    }

    fn order(slugs: &[&str]) -> Vec<String> {
        slugs.iter().map(|s| s.to_string()).collect()
    }

    fn query(category: Option<&str>, search: Option<&str>, page: i64, limit: i64) -> ListItemsQuery {
        ListItemsQuery {
            category: category.map(|s| s.to_string()),
            search: search.map(|s| s.to_string()),
            page,
            limit,
        }
    }

    fn ids(items: &[Item]) -> Vec<i64> {
        items.iter().map(|i| i.id).collect()
    }

    #[test]
    fn browse_all_groups_by_category_rank_then_id() {
        let items = vec![
            item(1, "weaving", "Runner rug"),
            item(2, "doll", "Rag doll"),
            item(3, "doll", "Porcelain doll"),
        ];
        let result = apply(items, &order(&["doll", "weaving"]), &query(None, None, 1, 10));

        assert_eq!(ids(&result), vec![2, 3, 1]);
    }

    #[test]
    fn browse_all_ordering_is_stable_across_calls() {
        let items = vec![
            item(5, "gifts", "Gift box"),
            item(1, "weaving", "Runner rug"),
            item(3, "doll", "Porcelain doll"),
            item(2, "doll", "Rag doll"),
            item(4, "unknown", "Mystery"),
        ];
        let category_order = order(&["doll", "weaving", "gifts"]);
        let q = query(None, None, 1, 10);

        let first = apply(items.clone(), &category_order, &q);
        let second = apply(items, &category_order, &q);

        assert_eq!(ids(&first), vec![2, 3, 1, 5, 4]);
        assert_eq!(ids(&first), ids(&second));
    }

    #[test]
    fn category_all_sentinel_behaves_like_no_filter() {
        let items = vec![item(1, "weaving", "Runner rug"), item(2, "doll", "Rag doll")];
        let result = apply(
            items,
            &order(&["doll", "weaving"]),
            &query(Some("all"), None, 1, 10),
        );

        assert_eq!(ids(&result), vec![2, 1]);
    }

    #[test]
    fn category_filter_keeps_storage_order() {
        // Registry order would put id 2 first; the filtered view must not sort
        let items = vec![
            item(1, "weaving", "Runner rug"),
            item(2, "doll", "Rag doll"),
            item(3, "doll", "Porcelain doll"),
        ];
        let result = apply(
            items,
            &order(&["doll", "weaving"]),
            &query(Some("doll"), None, 1, 10),
        );

        assert_eq!(ids(&result), vec![2, 3]);
    }

    #[test]
    fn category_filter_matches_slug_exactly() {
        let items = vec![item(1, "doll", "Rag doll"), item(2, "dolls", "Other")];
        let result = apply(items, &[], &query(Some("doll"), None, 1, 10));

        assert_eq!(ids(&result), vec![1]);
    }

    #[test]
    fn search_is_case_insensitive_substring_on_title() {
        let items = vec![
            item(1, "doll", "Wooden DOLL"),
            item(2, "doll", "Rag doll"),
            item(3, "weaving", "Runner rug"),
        ];
        let result = apply(items, &[], &query(None, Some("doll"), 1, 10));

        assert_eq!(ids(&result), vec![1, 2]);
    }

    #[test]
    fn search_suppresses_rank_sort_even_with_category_all() {
        // Both items match; storage order must survive although rank order
        // would be [2, 1]
        let items = vec![
            item(1, "weaving", "Handmade runner"),
            item(2, "doll", "Handmade doll"),
        ];
        let result = apply(
            items,
            &order(&["doll", "weaving"]),
            &query(Some("all"), Some("handmade"), 1, 10),
        );

        assert_eq!(ids(&result), vec![1, 2]);
    }

    #[test]
    fn empty_search_string_counts_as_absent() {
        let items = vec![item(1, "weaving", "Runner rug"), item(2, "doll", "Rag doll")];
        let result = apply(
            items,
            &order(&["doll", "weaving"]),
            &query(None, Some(""), 1, 10),
        );

        // Sorted: the empty search did not disable the browse-all sort
        assert_eq!(ids(&result), vec![2, 1]);
    }

    #[test]
    fn empty_category_string_counts_as_absent() {
        let items = vec![item(1, "weaving", "Runner rug"), item(2, "doll", "Rag doll")];
        let result = apply(
            items,
            &order(&["doll", "weaving"]),
            &query(Some(""), None, 1, 10),
        );

        assert_eq!(ids(&result), vec![2, 1]);
    }

    #[test]
    fn unknown_slug_ranks_last() {
        let items = vec![
            item(1, "retired-category", "Old stock"),
            item(2, "doll", "Rag doll"),
        ];
        let category_order = order(&["doll", "weaving"]);

        assert_eq!(category_rank(&category_order, "doll"), 0);
        assert_eq!(
            category_rank(&category_order, "retired-category"),
            UNKNOWN_CATEGORY_RANK
        );

        let result = apply(items, &category_order, &query(None, None, 1, 10));
        assert_eq!(ids(&result), vec![2, 1]);
    }

    #[test]
    fn pagination_partitions_without_gaps_or_overlap() {
        let items: Vec<Item> = (1..=5).map(|id| item(id, "doll", "Doll")).collect();
        let category_order = order(&["doll"]);

        let mut collected = Vec::new();
        for page in 1..=3 {
            let slice = apply(items.clone(), &category_order, &query(None, None, page, 2));
            assert!(slice.len() <= 2);
            collected.extend(ids(&slice));
        }

        assert_eq!(collected, vec![1, 2, 3, 4, 5]);
    }

    #[test]
    fn second_page_of_filtered_results() {
        // Filtered storage order is [2, 3]; page 2 of size 1 is id 3
        let items = vec![
            item(1, "weaving", "Runner rug"),
            item(2, "doll", "Rag doll"),
            item(3, "doll", "Porcelain doll"),
        ];
        let result = apply(
            items,
            &order(&["doll", "weaving"]),
            &query(Some("doll"), None, 2, 1),
        );

        assert_eq!(ids(&result), vec![3]);
    }

    #[test]
    fn page_past_the_end_is_empty() {
        let items = vec![item(1, "doll", "Rag doll")];
        let result = apply(items, &[], &query(None, None, 7, 5));

        assert!(result.is_empty());
    }

    #[test]
    fn limit_zero_yields_empty_page() {
        let items = vec![item(1, "doll", "Rag doll")];
        let result = apply(items, &[], &query(None, None, 1, 0));

        assert!(result.is_empty());
    }

    #[test]
    fn negative_page_and_limit_are_clamped() {
        let items = vec![item(1, "doll", "Rag doll"), item(2, "doll", "Other doll")];

        let negative_page = apply(items.clone(), &[], &query(None, None, -3, 10));
        assert_eq!(ids(&negative_page), vec![1, 2]);

        let negative_limit = apply(items, &[], &query(None, None, 1, -1));
        assert!(negative_limit.is_empty());
    }

    #[test]
    fn huge_page_number_does_not_overflow() {
        let items = vec![item(1, "doll", "Rag doll")];
        let result = apply(items, &[], &query(None, None, i64::MAX, i64::MAX));

        assert!(result.is_empty());
    }
}
