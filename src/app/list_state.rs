//! The member list state container and its transitions.
//!
//! [`ListState`] owns the loaded records together with the selection, the search
//! term, the current page and the single in-progress edit. Every transition runs to
//! completion synchronously and returns `true` when it changed something, which the
//! event handler forwards as the re-render signal. Operations that make no sense in
//! the current state (unknown id, no edit in progress, ...) are no-ops returning
//! `false`.
//!
//! Filtering, page count and the page slice are derived on every read and never
//! stored, so they cannot go stale after a mutation.
//!
//! # Example
//!
//! ```
//! use memberdesk::app::ListState;
//! use memberdesk::domain::generate_sample_records;
//!
//! let mut list = ListState::new();
//! list.load(generate_sample_records(25));
//! assert_eq!(list.total_pages(), 3);
//!
//! list.set_page(5);
//! assert_eq!(list.current_page(), 3);
//! assert_eq!(list.page_records().len(), 5);
//! ```

use crate::domain::{EditBuffer, EditField, Record};
use std::collections::HashSet;

/// Rows shown per page.
pub const PAGE_SIZE: usize = 10;

/// The record currently being edited and its staged values.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditSession {
    pub id: String,
    pub buffer: EditBuffer,
}

/// Selection counts shown under the table: `(selected, total)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SelectionSummary {
    pub selected: usize,
    pub total: usize,
}

/// In-memory member list with selection, search, paging and inline editing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListState {
    records: Vec<Record>,
    selected_ids: HashSet<String>,
    search_term: String,
    current_page: usize,
    editing: Option<EditSession>,
}

impl Default for ListState {
    fn default() -> Self {
        Self::new()
    }
}

impl ListState {
    /// Creates an empty list on page 1.
    #[must_use]
    pub fn new() -> Self {
        Self {
            records: Vec::new(),
            selected_ids: HashSet::new(),
            search_term: String::new(),
            current_page: 1,
            editing: None,
        }
    }

    /// All records in load order, after deletions and committed edits.
    #[must_use]
    pub fn records(&self) -> &[Record] {
        &self.records
    }

    /// Ids of the selected records.
    #[must_use]
    pub const fn selected_ids(&self) -> &HashSet<String> {
        &self.selected_ids
    }

    #[must_use]
    pub fn is_selected(&self, id: &str) -> bool {
        self.selected_ids.contains(id)
    }

    #[must_use]
    pub fn search_term(&self) -> &str {
        &self.search_term
    }

    /// 1-based page number, always within `1..=total_pages()`.
    #[must_use]
    pub const fn current_page(&self) -> usize {
        self.current_page
    }

    /// The in-progress edit, if any.
    #[must_use]
    pub const fn editing(&self) -> Option<&EditSession> {
        self.editing.as_ref()
    }

    #[must_use]
    pub fn editing_id(&self) -> Option<&str> {
        self.editing.as_ref().map(|session| session.id.as_str())
    }

    #[must_use]
    pub fn edit_buffer(&self) -> Option<&EditBuffer> {
        self.editing.as_ref().map(|session| &session.buffer)
    }

    fn contains(&self, id: &str) -> bool {
        self.records.iter().any(|record| record.id == id)
    }

    /// Replaces the record set wholesale.
    ///
    /// Clears selection and any edit and returns to page 1. Ids must be unique: a
    /// repeated id keeps its first occurrence and later ones are dropped.
    pub fn load(&mut self, records: Vec<Record>) {
        let _span = tracing::debug_span!("list_load", incoming = records.len()).entered();

        let mut seen = HashSet::with_capacity(records.len());
        let mut unique = Vec::with_capacity(records.len());
        for record in records {
            if seen.insert(record.id.clone()) {
                unique.push(record);
            } else {
                tracing::warn!(id = %record.id, "dropping record with duplicate id");
            }
        }

        self.records = unique;
        self.selected_ids.clear();
        self.editing = None;
        self.current_page = 1;

        tracing::debug!(loaded = self.records.len(), "records loaded");
    }

    /// Sets the search term and re-clamps the current page.
    pub fn set_search_term(&mut self, term: &str) -> bool {
        if self.search_term == term {
            return false;
        }
        term.clone_into(&mut self.search_term);
        self.clamp_page();

        tracing::trace!(
            term = %self.search_term,
            filtered = self.filtered_count(),
            page = self.current_page,
            "search term updated"
        );
        true
    }

    /// Flips the selection of `id`. Unknown ids are ignored.
    pub fn toggle_row_selected(&mut self, id: &str) -> bool {
        if !self.contains(id) {
            tracing::debug!(id = %id, "toggle ignored for unknown id");
            return false;
        }
        if !self.selected_ids.remove(id) {
            self.selected_ids.insert(id.to_string());
        }
        true
    }

    /// Whether every record (ignoring the search filter) is selected.
    ///
    /// An empty list is never "all selected".
    #[must_use]
    pub fn all_selected(&self) -> bool {
        !self.records.is_empty() && self.selected_ids.len() == self.records.len()
    }

    /// Selects every record, or clears the selection when everything is already
    /// selected. Operates on the full record set regardless of search or page.
    pub fn toggle_select_all(&mut self) -> bool {
        if self.records.is_empty() {
            return false;
        }
        if self.all_selected() {
            self.selected_ids.clear();
        } else {
            self.selected_ids = self.records.iter().map(|record| record.id.clone()).collect();
        }
        tracing::debug!(selected = self.selected_ids.len(), "select all toggled");
        true
    }

    /// Removes every selected record and clears the selection.
    pub fn delete_selected(&mut self) -> bool {
        if self.selected_ids.is_empty() {
            return false;
        }

        let before = self.records.len();
        let selected = std::mem::take(&mut self.selected_ids);
        self.records.retain(|record| !selected.contains(&record.id));

        if self
            .editing
            .as_ref()
            .is_some_and(|session| selected.contains(&session.id))
        {
            tracing::debug!("discarding edit of deleted record");
            self.editing = None;
        }
        self.clamp_page();

        tracing::debug!(
            removed = before - self.records.len(),
            remaining = self.records.len(),
            "selected records deleted"
        );
        true
    }

    /// Removes a single record, its selection and any edit of it.
    pub fn delete_one(&mut self, id: &str) -> bool {
        let Some(index) = self.records.iter().position(|record| record.id == id) else {
            tracing::debug!(id = %id, "delete ignored for unknown id");
            return false;
        };

        self.records.remove(index);
        self.selected_ids.remove(id);
        if self.editing_id() == Some(id) {
            tracing::debug!(id = %id, "discarding edit of deleted record");
            self.editing = None;
        }
        self.clamp_page();

        tracing::debug!(id = %id, remaining = self.records.len(), "record deleted");
        true
    }

    /// Starts editing `id`, seeding the buffer from the record.
    ///
    /// Ignored while another edit is open or if the id is unknown.
    pub fn begin_edit(&mut self, id: &str) -> bool {
        if let Some(open) = &self.editing {
            tracing::debug!(open = %open.id, requested = %id, "edit already in progress");
            return false;
        }
        let Some(record) = self.records.iter().find(|record| record.id == id) else {
            tracing::debug!(id = %id, "edit ignored for unknown id");
            return false;
        };

        self.editing = Some(EditSession {
            id: record.id.clone(),
            buffer: EditBuffer::from_record(record),
        });
        tracing::debug!(id = %id, "edit started");
        true
    }

    /// Changes one field of the edit buffer. The committed record is untouched.
    pub fn update_edit_buffer(&mut self, field: EditField, value: &str) -> bool {
        self.editing
            .as_mut()
            .is_some_and(|session| session.buffer.set(field, value))
    }

    /// Writes the edit buffer onto its record and closes the edit.
    pub fn commit_edit(&mut self) -> bool {
        let Some(session) = self.editing.take() else {
            return false;
        };

        if let Some(record) = self.records.iter_mut().find(|record| record.id == session.id) {
            session.buffer.apply_to(record);
            tracing::debug!(id = %session.id, "edit committed");
        }
        // The edited values may no longer match the search term.
        self.clamp_page();
        true
    }

    /// Discards the edit buffer.
    pub fn cancel_edit(&mut self) -> bool {
        self.editing.take().is_some_and(|session| {
            tracing::debug!(id = %session.id, "edit cancelled");
            true
        })
    }

    /// Moves to page `page`, clamped to `1..=total_pages()`.
    pub fn set_page(&mut self, page: usize) -> bool {
        let clamped = page.clamp(1, self.total_pages());
        if clamped == self.current_page {
            return false;
        }
        self.current_page = clamped;
        true
    }

    fn clamp_page(&mut self) {
        self.current_page = self.current_page.clamp(1, self.total_pages());
    }

    /// Records matching the search term, in load order.
    #[must_use]
    pub fn filtered_records(&self) -> Vec<&Record> {
        let folded = self.search_term.to_lowercase();
        self.records
            .iter()
            .filter(|record| record.matches_folded(&folded))
            .collect()
    }

    #[must_use]
    pub fn filtered_count(&self) -> usize {
        let folded = self.search_term.to_lowercase();
        self.records
            .iter()
            .filter(|record| record.matches_folded(&folded))
            .count()
    }

    /// Number of pages for the filtered set; at least 1.
    #[must_use]
    pub fn total_pages(&self) -> usize {
        self.filtered_count().div_ceil(PAGE_SIZE).max(1)
    }

    /// The filtered records shown on the current page.
    #[must_use]
    pub fn page_records(&self) -> Vec<&Record> {
        let start = (self.current_page - 1) * PAGE_SIZE;
        self.filtered_records()
            .into_iter()
            .skip(start)
            .take(PAGE_SIZE)
            .collect()
    }

    #[must_use]
    pub fn selection_summary(&self) -> SelectionSummary {
        SelectionSummary {
            selected: self.selected_ids.len(),
            total: self.records.len(),
        }
    }
}
