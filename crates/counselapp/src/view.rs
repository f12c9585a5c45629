//! # View State Controller
//!
//! The management screen is a small state machine. [`ViewController`] tracks which
//! collection is shown, the active [`FilterState`], and the current [`ViewMode`]:
//!
//! ```text
//!            request_create             submit / cancel
//!   List ─────────────────────▶ Create ─────────────────▶ List
//!   List ── request_edit(R) ──▶ Edit(R) ── submit / cancel ──▶ List
//!   List ── request_delete(R) ▶ ConfirmDelete(R) ── confirm / cancel ──▶ List
//! ```
//!
//! ## Rules
//!
//! - The initial mode is `List`.
//! - Only counselors can be created, edited or deleted.
//! - Switching collections is only legal from `List` and resets the filter.
//! - `Edit` and `ConfirmDelete` always name a record that existed on entry. If that record
//!   disappears, the controller falls back to `List` (see [`ViewController::reconcile`]).
//! - A validation failure keeps the form open; a missing record returns to `List`.
//! - An illegal request fails with [`CounselError::InvalidTransition`] and changes nothing.
//!
//! The controller owns no records. Every operation that reads or mutates records takes the
//! store by reference, and all mutation goes through the command layer.

use serde::Serialize;
use std::fmt;

use crate::commands::{self, CmdResult};
use crate::error::{CounselError, Result};
use crate::filter::{FilterField, FilterState};
use crate::forms::{CounselorForm, CounselorPatch};
use crate::model::{Collection, Counselor, RecordId};
use crate::store::RecordStore;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "mode", content = "target", rename_all = "snake_case")]
pub enum ViewMode {
    List,
    Create,
    Edit(RecordId),
    ConfirmDelete(RecordId),
}

impl ViewMode {
    pub fn target(&self) -> Option<RecordId> {
        match self {
            ViewMode::Edit(id) | ViewMode::ConfirmDelete(id) => Some(*id),
            ViewMode::List | ViewMode::Create => None,
        }
    }
}

impl fmt::Display for ViewMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ViewMode::List => f.write_str("list"),
            ViewMode::Create => f.write_str("create"),
            ViewMode::Edit(id) => write!(f, "edit {}", id),
            ViewMode::ConfirmDelete(id) => write!(f, "confirm-delete {}", id),
        }
    }
}

#[derive(Debug, Clone)]
pub struct ViewController {
    collection: Collection,
    mode: ViewMode,
    filter: FilterState,
    /// Form being filled in while in `Create` or `Edit`.
    form: Option<CounselorForm>,
    /// The record as it was when `Edit` was entered.
    baseline: Option<CounselorForm>,
}

impl Default for ViewController {
    fn default() -> Self {
        Self::new(Collection::Students)
    }
}

impl ViewController {
    pub fn new(collection: Collection) -> Self {
        Self {
            collection,
            mode: ViewMode::List,
            filter: FilterState::default(),
            form: None,
            baseline: None,
        }
    }

    pub fn collection(&self) -> Collection {
        self.collection
    }

    pub fn mode(&self) -> ViewMode {
        self.mode
    }

    pub fn filter(&self) -> &FilterState {
        &self.filter
    }

    /// The form open in `Create` or `Edit` mode.
    pub fn form(&self) -> Option<&CounselorForm> {
        self.form.as_ref()
    }

    // --- Filters ---

    pub fn set_filter(&mut self, field: FilterField, value: &str) -> Result<()> {
        self.filter.set(field, value)?;
        tracing::debug!(%field, value, "filter set");
        Ok(())
    }

    pub fn clear_filter(&mut self, field: FilterField) {
        self.filter.clear(field);
        tracing::debug!(%field, "filter cleared");
    }

    pub fn switch_collection(&mut self, collection: Collection) -> Result<()> {
        self.expect_list("switch collections")?;
        self.collection = collection;
        self.filter.reset();
        self.close_form();
        tracing::debug!(%collection, "collection switched");
        Ok(())
    }

    // --- Requests from List ---

    pub fn request_create(&mut self) -> Result<()> {
        self.expect_list("create")?;
        self.expect_editable("create")?;
        self.form = Some(CounselorForm::new());
        self.enter(ViewMode::Create);
        Ok(())
    }

    /// Open the edit form for `id`, pre-filled with the stored record.
    pub fn request_edit<S: RecordStore<Counselor>>(
        &mut self,
        store: &S,
        id: RecordId,
    ) -> Result<Counselor> {
        self.expect_list("edit")?;
        self.expect_editable("edit")?;
        let counselor = find(store, id)?;
        let form = CounselorForm::from_counselor(&counselor);
        self.baseline = Some(form.clone());
        self.form = Some(form);
        self.enter(ViewMode::Edit(id));
        Ok(counselor)
    }

    pub fn request_delete<S: RecordStore<Counselor>>(
        &mut self,
        store: &S,
        id: RecordId,
    ) -> Result<Counselor> {
        self.expect_list("delete")?;
        self.expect_editable("delete")?;
        let counselor = find(store, id)?;
        self.enter(ViewMode::ConfirmDelete(id));
        Ok(counselor)
    }

    // --- Form editing ---

    pub fn set_field(&mut self, field: &str, value: &str) -> Result<()> {
        if matches!(self.mode, ViewMode::Create | ViewMode::Edit(_)) {
            if let Some(form) = self.form.as_mut() {
                return form.set(field, value);
            }
        }
        Err(self.illegal("edit form fields"))
    }

    // --- Completing a mode ---

    /// Submit a create form. Stays in `Create` if the form is invalid.
    pub fn submit_create<S: RecordStore<Counselor>>(
        &mut self,
        store: &mut S,
        form: &CounselorForm,
        id_floor: RecordId,
    ) -> Result<CmdResult<Counselor>> {
        if self.mode != ViewMode::Create {
            return Err(self.illegal("submit a create form"));
        }
        let result = commands::create::run(store, form, id_floor);
        self.settle(&result);
        result
    }

    /// Merge `patch` into record `id`, which must be the one being edited.
    pub fn submit_edit<S: RecordStore<Counselor>>(
        &mut self,
        store: &mut S,
        id: RecordId,
        patch: &CounselorPatch,
    ) -> Result<CmdResult<Counselor>> {
        if self.mode != ViewMode::Edit(id) {
            return Err(self.illegal(&format!("submit an edit for {}", id)));
        }
        let result = commands::update::run(store, id, patch);
        self.settle(&result);
        result
    }

    pub fn confirm_delete<S: RecordStore<Counselor>>(
        &mut self,
        store: &mut S,
        id: RecordId,
    ) -> Result<CmdResult<Counselor>> {
        if self.mode != ViewMode::ConfirmDelete(id) {
            return Err(self.illegal(&format!("confirm deletion of {}", id)));
        }
        let result = commands::delete::run(store, id);
        self.settle(&result);
        result
    }

    /// Submit whatever the current mode holds: the open form for `Create`, the changed
    /// fields of the open form for `Edit`, or the pending deletion.
    pub fn submit<S: RecordStore<Counselor>>(
        &mut self,
        store: &mut S,
        id_floor: RecordId,
    ) -> Result<CmdResult<Counselor>> {
        match self.mode {
            ViewMode::Create => {
                let form = self.form.clone().unwrap_or_default();
                self.submit_create(store, &form, id_floor)
            }
            ViewMode::Edit(id) => {
                let patch = match (&self.form, &self.baseline) {
                    (Some(form), Some(baseline)) => form.diff(baseline),
                    _ => CounselorPatch::new(),
                };
                self.submit_edit(store, id, &patch)
            }
            ViewMode::ConfirmDelete(id) => self.confirm_delete(store, id),
            ViewMode::List => Err(self.illegal("submit")),
        }
    }

    /// Leave any form or confirmation without touching the store.
    pub fn cancel(&mut self) {
        if self.mode != ViewMode::List {
            tracing::debug!(mode = %self.mode, "cancelled");
        }
        self.back_to_list();
    }

    /// Fall back to `List` if the record targeted by `Edit`/`ConfirmDelete` is gone.
    ///
    /// Returns true when a fallback happened.
    pub fn reconcile<S: RecordStore<Counselor>>(&mut self, store: &S) -> bool {
        match self.mode.target() {
            Some(id) if !store.contains(id) => {
                tracing::warn!(id, mode = %self.mode, "target record vanished; back to list");
                self.back_to_list();
                true
            }
            _ => false,
        }
    }

    // --- internals ---

    fn enter(&mut self, mode: ViewMode) {
        tracing::debug!(from = %self.mode, to = %mode, "view transition");
        self.mode = mode;
    }

    fn back_to_list(&mut self) {
        self.close_form();
        self.mode = ViewMode::List;
    }

    fn close_form(&mut self) {
        self.form = None;
        self.baseline = None;
    }

    /// Success and missing records return to `List`; other failures keep the mode.
    fn settle<T>(&mut self, result: &Result<T>) {
        match result {
            Ok(_) => self.back_to_list(),
            Err(CounselError::NotFound { id, .. }) => {
                tracing::warn!(id, "record no longer exists; back to list");
                self.back_to_list();
            }
            Err(_) => {}
        }
    }

    fn expect_list(&self, action: &str) -> Result<()> {
        if self.mode == ViewMode::List {
            Ok(())
        } else {
            Err(self.illegal(action))
        }
    }

    fn expect_editable(&self, action: &str) -> Result<()> {
        if self.collection.is_editable() {
            Ok(())
        } else {
            Err(CounselError::InvalidTransition(format!(
                "cannot {} {} records",
                action, self.collection
            )))
        }
    }

    fn illegal(&self, action: &str) -> CounselError {
        CounselError::InvalidTransition(format!("cannot {} while in {} mode", action, self.mode))
    }
}

fn find<S: RecordStore<Counselor>>(store: &S, id: RecordId) -> Result<Counselor> {
    store.get(id).cloned().ok_or(CounselError::NotFound {
        collection: Collection::Counselors,
        id,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::UserStatus;
    use crate::store::memory::fixtures::StoreFixture;
    use crate::store::memory::MemoryStore;

    fn counselors_view() -> ViewController {
        ViewController::new(Collection::Counselors)
    }

    fn store() -> MemoryStore<Counselor> {
        StoreFixture::new().with_three_counselors().counselors
    }

    fn create_form(email: &str) -> CounselorForm {
        CounselorForm::new()
            .with("email", email)
            .unwrap()
            .with("college_assignment", "COS")
            .unwrap()
    }

    #[test]
    fn starts_in_list_mode() {
        let view = ViewController::default();
        assert_eq!(view.mode(), ViewMode::List);
        assert_eq!(view.collection(), Collection::Students);
        assert!(view.filter().is_empty());
        assert!(view.form().is_none());
    }

    #[test]
    fn create_submit_returns_to_list_and_appends() {
        let mut store = store();
        let mut view = counselors_view();
        view.request_create().unwrap();
        assert_eq!(view.mode(), ViewMode::Create);

        let result = view
            .submit_create(&mut store, &create_form("a@x.edu"), 100)
            .unwrap();
        assert_eq!(result.affected[0].id, 104);
        assert_eq!(view.mode(), ViewMode::List);
        assert!(view.form().is_none());
        assert_eq!(store.len(), 4);
    }

    #[test]
    fn invalid_create_stays_in_create() {
        let mut store = store();
        let mut view = counselors_view();
        view.request_create().unwrap();
        let result = view.submit_create(&mut store, &CounselorForm::new(), 100);
        assert!(matches!(result, Err(CounselError::Validation(_))));
        assert_eq!(view.mode(), ViewMode::Create);
        assert_eq!(store.len(), 3);
    }

    #[test]
    fn cancel_create_discards_input() {
        let mut view = counselors_view();
        view.request_create().unwrap();
        view.set_field("email", "typed@x.edu").unwrap();
        view.cancel();
        assert_eq!(view.mode(), ViewMode::List);
        assert!(view.form().is_none());
    }

    #[test]
    fn edit_loads_record_as_form() {
        let store = store();
        let mut view = counselors_view();
        let loaded = view.request_edit(&store, 102).unwrap();
        assert_eq!(loaded.email, "jane.smith@umake.edu.ph");
        assert_eq!(view.mode(), ViewMode::Edit(102));
        assert_eq!(view.form().unwrap().email, "jane.smith@umake.edu.ph");
    }

    #[test]
    fn edit_of_missing_record_stays_in_list() {
        let store = store();
        let mut view = counselors_view();
        let result = view.request_edit(&store, 999);
        assert!(matches!(result, Err(CounselError::NotFound { id: 999, .. })));
        assert_eq!(view.mode(), ViewMode::List);
    }

    #[test]
    fn submit_edit_merges_and_returns_to_list() {
        let mut store = store();
        let mut view = counselors_view();
        view.request_edit(&store, 101).unwrap();
        view.submit_edit(&mut store, 101, &CounselorPatch::status(UserStatus::Inactive))
            .unwrap();
        assert_eq!(view.mode(), ViewMode::List);
        assert_eq!(store.get(101).unwrap().status, UserStatus::Inactive);
    }

    #[test]
    fn submit_edit_for_other_id_is_rejected() {
        let mut store = store();
        let mut view = counselors_view();
        view.request_edit(&store, 101).unwrap();
        let result = view.submit_edit(&mut store, 102, &CounselorPatch::new());
        assert!(matches!(result, Err(CounselError::InvalidTransition(_))));
        assert_eq!(view.mode(), ViewMode::Edit(101));
    }

    #[test]
    fn invalid_edit_stays_in_edit() {
        let mut store = store();
        let mut view = counselors_view();
        view.request_edit(&store, 101).unwrap();
        let patch = CounselorPatch::new().with("email", "").unwrap();
        assert!(view.submit_edit(&mut store, 101, &patch).is_err());
        assert_eq!(view.mode(), ViewMode::Edit(101));
    }

    #[test]
    fn edit_of_vanished_record_falls_back_to_list() {
        let mut store = store();
        let mut view = counselors_view();
        view.request_edit(&store, 103).unwrap();
        store.remove(103).unwrap();

        let result = view.submit_edit(&mut store, 103, &CounselorPatch::new());
        assert!(matches!(result, Err(CounselError::NotFound { id: 103, .. })));
        assert_eq!(view.mode(), ViewMode::List);
    }

    #[test]
    fn reconcile_drops_stale_target() {
        let mut store = store();
        let mut view = counselors_view();
        view.request_delete(&store, 102).unwrap();
        assert!(!view.reconcile(&store));
        store.remove(102).unwrap();
        assert!(view.reconcile(&store));
        assert_eq!(view.mode(), ViewMode::List);
    }

    #[test]
    fn confirm_delete_removes_and_returns_to_list() {
        let mut store = store();
        let mut view = counselors_view();
        view.request_delete(&store, 102).unwrap();
        assert_eq!(view.mode(), ViewMode::ConfirmDelete(102));
        view.confirm_delete(&mut store, 102).unwrap();
        assert_eq!(view.mode(), ViewMode::List);
        assert!(!store.contains(102));
    }

    #[test]
    fn cancel_delete_keeps_record() {
        let store = store();
        let mut view = counselors_view();
        view.request_delete(&store, 102).unwrap();
        view.cancel();
        assert_eq!(view.mode(), ViewMode::List);
        assert!(store.contains(102));
    }

    #[test]
    fn confirm_without_request_is_illegal() {
        let mut store = store();
        let mut view = counselors_view();
        let result = view.confirm_delete(&mut store, 101);
        assert!(matches!(result, Err(CounselError::InvalidTransition(_))));
        assert!(store.contains(101));
    }

    #[test]
    fn requests_only_from_list() {
        let store = store();
        let mut view = counselors_view();
        view.request_create().unwrap();
        assert!(view.request_edit(&store, 101).is_err());
        assert!(view.request_delete(&store, 101).is_err());
        assert!(view.request_create().is_err());
        assert_eq!(view.mode(), ViewMode::Create);
    }

    #[test]
    fn students_are_read_only() {
        let store = store();
        let mut view = ViewController::new(Collection::Students);
        assert!(matches!(
            view.request_create(),
            Err(CounselError::InvalidTransition(_))
        ));
        assert!(view.request_delete(&store, 101).is_err());
        assert_eq!(view.mode(), ViewMode::List);
    }

    #[test]
    fn switch_collection_resets_filter() {
        let mut view = ViewController::default();
        view.set_filter(FilterField::Status, "Inactive").unwrap();
        view.set_filter(FilterField::Query, "bautista").unwrap();
        view.switch_collection(Collection::Counselors).unwrap();
        assert_eq!(view.collection(), Collection::Counselors);
        assert!(view.filter().is_empty());
    }

    #[test]
    fn switch_collection_outside_list_is_illegal() {
        let mut view = counselors_view();
        view.request_create().unwrap();
        assert!(view.switch_collection(Collection::Students).is_err());
        assert_eq!(view.collection(), Collection::Counselors);
    }

    #[test]
    fn set_field_needs_an_open_form() {
        let mut view = counselors_view();
        assert!(view.set_field("email", "a@x.edu").is_err());
    }

    #[test]
    fn submit_pending_edit_sends_only_changed_fields() {
        let mut store = store();
        let before = store.get(102).cloned().unwrap();
        let mut view = counselors_view();
        view.request_edit(&store, 102).unwrap();
        view.set_field("status", "Inactive").unwrap();
        view.submit(&mut store, 100).unwrap();

        let after = store.get(102).cloned().unwrap();
        assert_eq!(after.status, UserStatus::Inactive);
        assert_eq!(
            Counselor {
                status: before.status,
                ..after
            },
            before
        );
    }

    #[test]
    fn submit_pending_create_uses_open_form() {
        let mut store = store();
        let mut view = counselors_view();
        view.request_create().unwrap();
        view.set_field("email", "new@umake.edu.ph").unwrap();
        view.set_field("collegeAssignment", "COE").unwrap();
        let result = view.submit(&mut store, 100).unwrap();
        assert_eq!(result.affected[0].college, "COE");
    }

    #[test]
    fn submit_in_list_is_illegal() {
        let mut store = store();
        let mut view = counselors_view();
        assert!(view.submit(&mut store, 100).is_err());
    }

    #[test]
    fn mode_display() {
        assert_eq!(ViewMode::Edit(7).to_string(), "edit 7");
        assert_eq!(ViewMode::ConfirmDelete(3).to_string(), "confirm-delete 3");
        assert_eq!(ViewMode::List.target(), None);
    }
}
