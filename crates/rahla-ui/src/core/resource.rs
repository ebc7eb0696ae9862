//! Generic list/detail/create/update/delete state for one entity type.
//!
//! # Design
//! - One slice type serves every entity; reducers are pure and DOM-free.
//! - Each operation owns its own loading/error pair; nothing folds them into one busy flag.
//! - List and detail fetches are tagged with a monotonic sequence so a late,
//!   superseded response never overwrites fresher data.
//! - Failures keep the last good data in place.
//! - Sign-out resets data but never rewinds sequences; mutations carry the
//!   session generation they started in and are dropped after a reset.

use rahla_api_models::{Page, Resource};
use tracing::debug;

/// Monotonic request tag issued per slice.
pub type RequestSeq = u64;

/// Session generation a mutation was started in.
pub type Generation = u64;

/// Loading/error pair for a single mutating operation.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct OpState {
    /// Request in flight.
    pub loading: bool,
    /// Last failure message, cleared when the operation starts again.
    pub error: Option<String>,
}

impl OpState {
    fn start(&mut self) {
        self.loading = true;
        self.error = None;
    }

    fn succeed(&mut self) {
        self.loading = false;
        self.error = None;
    }

    fn fail(&mut self, message: String) {
        self.loading = false;
        self.error = Some(message);
    }
}

/// Collection, selection, and per-operation flags for one entity type.
#[derive(Clone, Debug, PartialEq)]
pub struct ResourceSlice<R> {
    /// Records from the last applied list response, in server order.
    pub items: Vec<R>,
    /// A list request newer than the last applied one is in flight.
    pub loading: bool,
    /// Last list failure.
    pub error: Option<String>,
    /// Server-reported total record count.
    pub total_items: u64,
    /// Server-reported page count.
    pub total_pages: u64,
    /// Record loaded by the detail view.
    pub selected: Option<R>,
    /// Detail request in flight.
    pub selected_loading: bool,
    /// Last detail failure.
    pub selected_error: Option<String>,
    /// Create operation flags.
    pub create: OpState,
    /// Update operation flags.
    pub update: OpState,
    /// Delete operation flags.
    pub delete: OpState,
    list_issued: RequestSeq,
    list_applied: RequestSeq,
    detail_issued: RequestSeq,
    generation: Generation,
}

impl<R> Default for ResourceSlice<R> {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            loading: false,
            error: None,
            total_items: 0,
            total_pages: 0,
            selected: None,
            selected_loading: false,
            selected_error: None,
            create: OpState::default(),
            update: OpState::default(),
            delete: OpState::default(),
            list_issued: 0,
            list_applied: 0,
            detail_issued: 0,
            generation: 0,
        }
    }
}

impl<R: Resource> ResourceSlice<R> {
    /// Drop all data and flags while keeping sequences monotonic.
    ///
    /// Requests issued before the reset can no longer settle into the slice.
    pub fn reset(&mut self) {
        *self = Self {
            list_issued: self.list_issued,
            list_applied: self.list_issued,
            detail_issued: self.detail_issued.saturating_add(1),
            generation: self.generation.saturating_add(1),
            ..Self::default()
        };
    }

    /// Start a list fetch and return its sequence tag.
    pub fn begin_list(&mut self) -> RequestSeq {
        self.list_issued += 1;
        self.loading = true;
        self.list_issued
    }

    /// Apply a successful list response. Returns `false` when the response was stale.
    pub fn finish_list_ok(&mut self, seq: RequestSeq, page: Page<R>) -> bool {
        if !self.accept_list(seq) {
            return false;
        }
        self.items = page.items;
        self.total_items = page.total_items;
        self.total_pages = page.total_pages;
        self.error = None;
        true
    }

    /// Record a list failure, keeping the previous items. Returns `false` when stale.
    pub fn finish_list_err(&mut self, seq: RequestSeq, message: String) -> bool {
        if !self.accept_list(seq) {
            return false;
        }
        self.error = Some(message);
        true
    }

    /// Settle an aborted list request without recording an error.
    pub fn cancel_list(&mut self, seq: RequestSeq) {
        self.accept_list(seq);
    }

    /// Hide the list error banner.
    pub fn dismiss_error(&mut self) {
        self.error = None;
    }

    /// Start a detail fetch. Clears `selected` so stale detail is never shown.
    pub fn begin_fetch_by_id(&mut self) -> RequestSeq {
        self.detail_issued += 1;
        self.selected = None;
        self.selected_loading = true;
        self.selected_error = None;
        self.detail_issued
    }

    /// Apply a detail response if it belongs to the latest detail request.
    pub fn finish_fetch_by_id_ok(&mut self, seq: RequestSeq, entity: R) -> bool {
        if !self.accept_detail(seq) {
            return false;
        }
        self.selected = Some(entity);
        true
    }

    /// Record a detail failure if it belongs to the latest detail request.
    pub fn finish_fetch_by_id_err(&mut self, seq: RequestSeq, message: String) -> bool {
        if !self.accept_detail(seq) {
            return false;
        }
        self.selected_error = Some(message);
        true
    }

    /// Settle an aborted detail request without recording an error.
    pub fn cancel_fetch_by_id(&mut self, seq: RequestSeq) {
        self.accept_detail(seq);
    }

    /// Drop the selection on navigation away; in-flight detail responses are ignored.
    pub fn clear_selected(&mut self) {
        self.detail_issued += 1;
        self.selected = None;
        self.selected_loading = false;
        self.selected_error = None;
    }

    /// Mark a create request as started.
    pub fn begin_create(&mut self) -> Generation {
        self.create.start();
        self.generation
    }

    /// Insert the created record at the front of the list.
    pub fn finish_create_ok(&mut self, generation: Generation, entity: R) -> bool {
        if !self.accept_mutation(generation, "create") {
            return false;
        }
        self.items.insert(0, entity);
        self.total_items = self.total_items.saturating_add(1);
        self.create.succeed();
        true
    }

    /// Record a create failure.
    pub fn finish_create_err(&mut self, generation: Generation, message: String) -> bool {
        if !self.accept_mutation(generation, "create") {
            return false;
        }
        self.create.fail(message);
        true
    }

    /// Mark an update request as started.
    pub fn begin_update(&mut self) -> Generation {
        self.update.start();
        self.generation
    }

    /// Replace the matching record in the list and in the selection.
    pub fn finish_update_ok(&mut self, generation: Generation, entity: R) -> bool {
        if !self.accept_mutation(generation, "update") {
            return false;
        }
        if let Some(slot) = self.items.iter_mut().find(|item| item.id() == entity.id()) {
            *slot = entity.clone();
        }
        if self
            .selected
            .as_ref()
            .is_some_and(|selected| selected.id() == entity.id())
        {
            self.selected = Some(entity);
        }
        self.update.succeed();
        true
    }

    /// Record an update failure.
    pub fn finish_update_err(&mut self, generation: Generation, message: String) -> bool {
        if !self.accept_mutation(generation, "update") {
            return false;
        }
        self.update.fail(message);
        true
    }

    /// Mark a delete request as started.
    pub fn begin_delete(&mut self) -> Generation {
        self.delete.start();
        self.generation
    }

    /// Remove the record by id; `total_items` never drops below zero.
    pub fn finish_delete_ok(&mut self, generation: Generation, id: &str) -> bool {
        if !self.accept_mutation(generation, "delete") {
            return false;
        }
        self.items.retain(|item| item.id() != id);
        self.total_items = self.total_items.saturating_sub(1);
        if self
            .selected
            .as_ref()
            .is_some_and(|selected| selected.id() == id)
        {
            self.selected = None;
        }
        self.delete.succeed();
        true
    }

    /// Record a delete failure.
    pub fn finish_delete_err(&mut self, generation: Generation, message: String) -> bool {
        if !self.accept_mutation(generation, "delete") {
            return false;
        }
        self.delete.fail(message);
        true
    }

    /// Find a loaded record by id, checking the selection first.
    #[must_use]
    pub fn find(&self, id: &str) -> Option<&R> {
        self.selected
            .iter()
            .chain(self.items.iter())
            .find(|item| item.id() == id)
    }

    fn accept_list(&mut self, seq: RequestSeq) -> bool {
        if seq <= self.list_applied {
            debug!(
                resource = R::NAME,
                seq,
                applied = self.list_applied,
                "dropping stale list response"
            );
            return false;
        }
        self.list_applied = seq;
        self.loading = self.list_applied < self.list_issued;
        true
    }

    fn accept_mutation(&self, generation: Generation, operation: &'static str) -> bool {
        if generation == self.generation {
            return true;
        }
        debug!(
            resource = R::NAME,
            operation,
            generation,
            current = self.generation,
            "dropping response from a previous session"
        );
        false
    }

    fn accept_detail(&mut self, seq: RequestSeq) -> bool {
        if seq != self.detail_issued {
            debug!(
                resource = R::NAME,
                seq,
                latest = self.detail_issued,
                "dropping stale detail response"
            );
            return false;
        }
        self.selected_loading = false;
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rahla_api_models::{City, Translations};

    fn city(id: &str, name: &str) -> City {
        City {
            id: id.to_string(),
            name: Translations {
                english: name.to_string(),
                ..Translations::default()
            },
            is_active: true,
            created_at: None,
        }
    }

    fn page(items: Vec<City>, total_items: u64, total_pages: u64) -> Page<City> {
        Page {
            items,
            total_items,
            total_pages,
        }
    }

    fn loaded() -> ResourceSlice<City> {
        let mut slice = ResourceSlice::default();
        let seq = slice.begin_list();
        slice.finish_list_ok(
            seq,
            page(vec![city("a", "Erbil"), city("b", "Duhok")], 12, 2),
        );
        slice
    }

    #[test]
    fn list_success_replaces_items_and_metadata() {
        let slice = loaded();
        assert_eq!(slice.items.len(), 2);
        assert_eq!(slice.total_items, 12);
        assert_eq!(slice.total_pages, 2);
        assert!(!slice.loading);
        assert!(slice.error.is_none());
    }

    #[test]
    fn list_failure_keeps_previous_items() {
        let mut slice = loaded();
        let before = slice.items.clone();
        let seq = slice.begin_list();
        assert!(slice.loading);
        assert!(slice.finish_list_err(seq, "Failed to fetch".to_string()));
        assert_eq!(slice.items, before);
        assert_eq!(slice.error.as_deref(), Some("Failed to fetch"));
        assert!(!slice.loading);
    }

    #[test]
    fn late_response_from_superseded_request_is_ignored() {
        let mut slice = ResourceSlice::<City>::default();
        let old = slice.begin_list();
        let new = slice.begin_list();
        assert!(slice.finish_list_ok(new, page(vec![city("n", "Newer")], 1, 1)));
        assert!(!slice.loading);
        assert!(!slice.finish_list_ok(old, page(vec![city("o", "Older")], 9, 1)));
        assert_eq!(slice.items.len(), 1);
        assert_eq!(slice.items[0].id, "n");
        assert_eq!(slice.total_items, 1);
    }

    #[test]
    fn loading_stays_until_latest_request_settles() {
        let mut slice = ResourceSlice::<City>::default();
        let first = slice.begin_list();
        let second = slice.begin_list();
        slice.finish_list_ok(first, page(vec![city("a", "A")], 1, 1));
        assert!(slice.loading);
        slice.cancel_list(second);
        assert!(!slice.loading);
        assert!(slice.error.is_none());
    }

    #[test]
    fn empty_page_beyond_range_is_not_an_error() {
        let mut slice = loaded();
        let seq = slice.begin_list();
        slice.finish_list_ok(seq, page(Vec::new(), 25, 3));
        assert!(slice.items.is_empty());
        assert!(slice.error.is_none());
        assert_eq!(slice.total_pages, 3);
    }

    #[test]
    fn create_prepends_and_counts() {
        let mut slice = loaded();
        let generation = slice.begin_create();
        assert!(slice.create.loading);
        assert!(slice.finish_create_ok(generation, city("c", "Sulaymaniyah")));
        assert_eq!(slice.items[0].id, "c");
        assert_eq!(slice.total_items, 13);
        assert!(!slice.create.loading);
        assert!(!slice.loading);
    }

    #[test]
    fn create_failure_is_isolated_from_other_flags() {
        let mut slice = loaded();
        let generation = slice.begin_create();
        slice.finish_create_err(generation, "duplicate".to_string());
        assert_eq!(slice.create.error.as_deref(), Some("duplicate"));
        assert!(slice.update.error.is_none());
        assert!(slice.delete.error.is_none());
        assert!(slice.error.is_none());
    }

    #[test]
    fn update_replaces_list_entry_and_selection() {
        let mut slice = loaded();
        let seq = slice.begin_fetch_by_id();
        slice.finish_fetch_by_id_ok(seq, city("b", "Duhok"));
        let mut patched = city("b", "Dohuk");
        patched.is_active = false;
        let generation = slice.begin_update();
        slice.finish_update_ok(generation, patched.clone());
        assert_eq!(slice.items[1], patched);
        assert_eq!(slice.selected.as_ref(), Some(&patched));
        assert_eq!(slice.items[0].name.english, "Erbil");
    }

    #[test]
    fn update_leaves_other_selection_alone() {
        let mut slice = loaded();
        let seq = slice.begin_fetch_by_id();
        slice.finish_fetch_by_id_ok(seq, city("a", "Erbil"));
        let generation = slice.begin_update();
        slice.finish_update_ok(generation, city("b", "Dohuk"));
        assert_eq!(slice.selected.as_ref().map(|c| c.id.as_str()), Some("a"));
    }

    #[test]
    fn delete_removes_and_floors_total() {
        let mut slice = ResourceSlice::<City>::default();
        let seq = slice.begin_list();
        slice.finish_list_ok(seq, page(vec![city("a", "A")], 0, 1));
        let generation = slice.begin_delete();
        slice.finish_delete_ok(generation, "a");
        assert!(slice.items.is_empty());
        assert_eq!(slice.total_items, 0);
        assert!(!slice.delete.loading);
    }

    #[test]
    fn delete_clears_matching_selection_only() {
        let mut slice = loaded();
        let seq = slice.begin_fetch_by_id();
        slice.finish_fetch_by_id_ok(seq, city("a", "Erbil"));
        let generation = slice.begin_delete();
        slice.finish_delete_ok(generation, "b");
        assert!(slice.selected.is_some());
        assert_eq!(slice.total_items, 11);
        let generation = slice.begin_delete();
        slice.finish_delete_ok(generation, "a");
        assert!(slice.selected.is_none());
        assert_eq!(slice.total_items, 10);
    }

    #[test]
    fn fetch_by_id_clears_stale_selection_and_ignores_old_responses() {
        let mut slice = loaded();
        let first = slice.begin_fetch_by_id();
        slice.finish_fetch_by_id_ok(first, city("a", "Erbil"));
        let second = slice.begin_fetch_by_id();
        assert!(slice.selected.is_none());
        assert!(slice.selected_loading);
        let third = slice.begin_fetch_by_id();
        assert!(!slice.finish_fetch_by_id_ok(second, city("a", "Erbil")));
        assert!(slice.selected_loading);
        assert!(slice.finish_fetch_by_id_err(third, "not found".to_string()));
        assert_eq!(slice.selected_error.as_deref(), Some("not found"));
        assert!(!slice.selected_loading);
    }

    #[test]
    fn clear_selected_discards_in_flight_detail() {
        let mut slice = loaded();
        let seq = slice.begin_fetch_by_id();
        slice.clear_selected();
        assert!(!slice.finish_fetch_by_id_ok(seq, city("a", "Erbil")));
        assert!(slice.selected.is_none());
        assert!(!slice.selected_loading);
    }

    #[test]
    fn find_prefers_selection() {
        let mut slice = loaded();
        let seq = slice.begin_fetch_by_id();
        slice.finish_fetch_by_id_ok(seq, city("a", "Erbil (fresh)"));
        assert_eq!(
            slice.find("a").map(|c| c.name.english.as_str()),
            Some("Erbil (fresh)")
        );
        assert!(slice.find("zzz").is_none());
    }

    #[test]
    fn reset_keeps_sequences_so_next_session_lists_load() {
        let mut slice = ResourceSlice::<City>::default();
        slice.begin_list();
        slice.begin_list();
        let in_flight = slice.begin_list();
        slice.reset();
        assert!(slice.items.is_empty());
        assert!(!slice.loading);

        slice.cancel_list(in_flight);
        assert!(!slice.finish_list_ok(in_flight, page(vec![city("x", "Old")], 1, 1)));
        assert!(slice.items.is_empty());

        let fresh = slice.begin_list();
        assert!(fresh > in_flight);
        assert!(slice.finish_list_ok(fresh, page(vec![city("a", "Erbil")], 1, 1)));
        assert_eq!(slice.items.len(), 1);
        assert!(!slice.loading);
    }

    #[test]
    fn reset_drops_detail_and_mutations_from_previous_session() {
        let mut slice = loaded();
        let detail = slice.begin_fetch_by_id();
        let created = slice.begin_create();
        let updated = slice.begin_update();
        let deleted = slice.begin_delete();
        slice.reset();

        assert!(!slice.finish_fetch_by_id_ok(detail, city("a", "Erbil")));
        assert!(!slice.finish_create_ok(created, city("c", "Stale")));
        assert!(!slice.finish_update_ok(updated, city("a", "Stale")));
        assert!(!slice.finish_delete_ok(deleted, "a"));
        assert!(!slice.finish_create_err(created, "late".to_string()));
        assert!(slice.items.is_empty());
        assert!(slice.selected.is_none());
        assert_eq!(slice.total_items, 0);
        assert!(slice.create.error.is_none());

        let generation = slice.begin_create();
        assert!(slice.finish_create_ok(generation, city("n", "New")));
        assert_eq!(slice.total_items, 1);
    }
}
