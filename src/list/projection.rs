//! Derives the visible page from a store and the current list query

use crate::core::entity::Entity;
use crate::core::query::{ListQuery, PaginationMeta};

/// One rendered page of a list
#[derive(Debug)]
pub struct Projection<'a, T> {
    /// Entities on the current page, in store order
    pub items: Vec<&'a T>,
    pub meta: PaginationMeta,
}

impl<T> Projection<'_, T> {
    pub fn is_no_results(&self) -> bool {
        self.meta.is_no_results()
    }

    pub fn label(&self) -> Option<String> {
        self.meta.label()
    }
}

/// Whether `entity` passes both the search text and the category filter
pub fn matches<T: Entity>(entity: &T, query: &ListQuery) -> bool {
    let search = query.search();
    let search_ok = search.is_empty() || entity.matches_search(&search.to_lowercase());

    let filter_ok = match query.filter() {
        None => true,
        Some(filter) => entity.category_value().as_deref() == Some(filter),
    };

    search_ok && filter_ok
}

/// Filter then paginate. A page past the end yields no items.
pub fn project<'a, T: Entity>(entities: &'a [T], query: &ListQuery) -> Projection<'a, T> {
    let filtered: Vec<&'a T> = entities.iter().filter(|e| matches(*e, query)).collect();
    let meta = PaginationMeta::new(query.page(), query.page_size(), filtered.len());

    let (start, end) = query.bounds();
    let start = start.min(filtered.len());
    let end = end.min(filtered.len());
    let items = filtered[start..end].to_vec();

    Projection { items, meta }
}
