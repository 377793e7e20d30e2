//! # Client-side list management
//!
//! The pure half of every listing screen: substring search, page slicing,
//! and the per-screen view state that ties them together. Nothing here
//! touches the network or the cache — these functions are re-run against
//! whatever collection the fetch layer currently holds.
//!
//! | Item | Purpose |
//! |------|---------|
//! | [`Searchable`] | Which text fields of a row the search box matches against |
//! | [`filter_rows`] | Case-insensitive substring filter; empty query is the identity |
//! | [`page_slice`] | Pure `[page*size, page*size+size)` slice, clamped at the end |
//! | [`ListViewState`] | Search query + page + page size, with the reset invariants |

use api::Account;

/// Page sizes offered by the table footer.
pub const PAGE_SIZE_OPTIONS: [usize; 4] = [5, 10, 25, 50];

/// Default rows per page.
pub const DEFAULT_PAGE_SIZE: usize = 10;

/// Rows that can be matched by the search box.
pub trait Searchable {
    /// The text fields considered by [`filter_rows`].
    fn search_fields(&self) -> Vec<&str>;
}

impl Searchable for Account {
    fn search_fields(&self) -> Vec<&str> {
        vec![self.name.as_str(), self.email.as_str(), self.role.label()]
    }
}

/// Keep the rows whose indexed fields contain `query`, case-insensitively.
///
/// A blank or whitespace-only query returns every row, in the original
/// order; the input is never reordered.
pub fn filter_rows<T: Searchable + Clone>(rows: &[T], query: &str) -> Vec<T> {
    let needle = query.trim().to_lowercase();
    if needle.is_empty() {
        return rows.to_vec();
    }
    rows.iter()
        .filter(|row| {
            row.search_fields()
                .iter()
                .any(|field| field.to_lowercase().contains(&needle))
        })
        .cloned()
        .collect()
}

/// The rows visible on `page` at `page_size` rows per page.
pub fn page_slice<T: Clone>(rows: &[T], page: usize, page_size: usize) -> Vec<T> {
    let start = page.saturating_mul(page_size).min(rows.len());
    let end = start.saturating_add(page_size).min(rows.len());
    rows[start..end].to_vec()
}

/// Per-screen list view state: search query, current page, page size.
///
/// Owned by the screen that renders the list, reset to defaults on mount.
/// The page invariant — `page * page_size` never points past the filtered
/// collection — is maintained by resetting to page 0 whenever the query or
/// the page size changes, and by [`retreat_if_empty`](Self::retreat_if_empty)
/// after a removal.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ListViewState {
    pub query: String,
    pub page: usize,
    pub page_size: usize,
}

impl Default for ListViewState {
    fn default() -> Self {
        Self {
            query: String::new(),
            page: 0,
            page_size: DEFAULT_PAGE_SIZE,
        }
    }
}

impl ListViewState {
    /// Change the search query; the current page resets to 0.
    pub fn set_query(&mut self, query: impl Into<String>) {
        self.query = query.into();
        self.page = 0;
    }

    pub fn set_page(&mut self, page: usize) {
        self.page = page;
    }

    /// Change the page size; ignored unless it is one of
    /// [`PAGE_SIZE_OPTIONS`]. The current page resets to 0 either way.
    pub fn set_page_size(&mut self, page_size: usize) {
        if PAGE_SIZE_OPTIONS.contains(&page_size) {
            self.page_size = page_size;
        }
        self.page = 0;
    }

    pub fn reset_page(&mut self) {
        self.page = 0;
    }

    /// Step back one page if a removal left the current page past the end
    /// of the `remaining` matching rows.
    pub fn retreat_if_empty(&mut self, remaining: usize) {
        if self.page > 0 && self.page * self.page_size >= remaining {
            self.page -= 1;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use api::AccountRole;

    fn account(id: &str, name: &str, email: &str, role: AccountRole) -> Account {
        Account {
            id: id.to_string(),
            name: name.to_string(),
            email: email.to_string(),
            role,
            is_active: true,
            created_at: None,
        }
    }

    fn sample() -> Vec<Account> {
        vec![
            account("1", "Jane Doe", "jane@x.com", AccountRole::Manager),
            account("2", "Ray Finch", "ray@fieldops.dev", AccountRole::Tech),
            account("3", "Ana Ortiz", "ana@fieldops.dev", AccountRole::Superadmin),
        ]
    }

    #[test]
    fn empty_query_is_identity() {
        let rows = sample();
        assert_eq!(filter_rows(&rows, ""), rows);
        assert_eq!(filter_rows(&rows, "   "), rows);
    }

    #[test]
    fn filter_is_case_insensitive_and_order_preserving() {
        let rows = sample();
        let hits = filter_rows(&rows, "FIELDOPS");
        assert_eq!(hits.len(), 2);
        assert_eq!(hits[0].id, "2");
        assert_eq!(hits[1].id, "3");
    }

    #[test]
    fn filter_matches_role_label() {
        let rows = sample();
        let hits = filter_rows(&rows, "super admin");
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].id, "3");
    }

    #[test]
    fn filter_is_idempotent() {
        let rows = sample();
        assert_eq!(filter_rows(&rows, "jane"), filter_rows(&rows, "jane"));
    }

    #[test]
    fn filter_returns_subset() {
        let rows = sample();
        for hit in filter_rows(&rows, "a") {
            assert!(rows.contains(&hit));
        }
    }

    #[test]
    fn page_slice_matches_range() {
        let rows: Vec<i32> = (0..23).collect();
        assert_eq!(page_slice(&rows, 0, 10), (0..10).collect::<Vec<_>>());
        assert_eq!(page_slice(&rows, 2, 10), vec![20, 21, 22]);
        assert!(page_slice(&rows, 3, 10).is_empty());
    }

    #[test]
    fn page_slice_never_exceeds_page_size() {
        let rows: Vec<i32> = (0..7).collect();
        for page in 0..4 {
            assert!(page_slice(&rows, page, 5).len() <= 5);
        }
    }

    #[test]
    fn query_change_resets_page() {
        let mut view = ListViewState::default();
        view.set_page(3);
        view.set_query("jane");
        assert_eq!(view.page, 0);
        assert_eq!(view.query, "jane");
    }

    #[test]
    fn page_size_change_resets_page() {
        let mut view = ListViewState::default();
        view.set_page(2);
        view.set_page_size(25);
        assert_eq!(view.page, 0);
        assert_eq!(view.page_size, 25);
    }

    #[test]
    fn unknown_page_size_is_rejected() {
        let mut view = ListViewState::default();
        view.set_page_size(7);
        assert_eq!(view.page_size, DEFAULT_PAGE_SIZE);
    }

    #[test]
    fn retreats_when_last_row_of_trailing_page_is_removed() {
        let mut view = ListViewState::default();
        view.set_page(2);
        // 21 rows filled page 2; deleting the 21st leaves 20.
        view.retreat_if_empty(20);
        assert_eq!(view.page, 1);
    }

    #[test]
    fn does_not_retreat_when_page_still_populated() {
        let mut view = ListViewState::default();
        view.set_page(1);
        view.retreat_if_empty(15);
        assert_eq!(view.page, 1);

        let mut view = ListViewState::default();
        view.retreat_if_empty(0);
        assert_eq!(view.page, 0);
    }
}
