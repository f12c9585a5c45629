//! # API Facade
//!
//! [`CounselApi`] is the single entry point for every UI. It owns the [`Campus`] stores,
//! the [`ViewController`] and the resolved [`CounselConfig`], and forwards each request to
//! the controller or the command layer.
//!
//! ## What the API Does NOT Do
//!
//! - **Business logic**: that belongs in `commands/*.rs`
//! - **Mode rules**: those belong in [`crate::view`]
//! - **I/O**: no stdout, stderr or formatting; results are data structures
//!
//! ## Listings
//!
//! [`CounselApi::list_records`] applies the session filter only to the collection the
//! controller is showing. Listing any other collection returns it unfiltered. One-shot
//! clients that carry their own filter use [`CounselApi::list_with`].
//!
//! ## Stale Targets
//!
//! Requests that enter a mode first reconcile the controller with the counselor store, so
//! an `Edit` or `ConfirmDelete` whose record was removed behind its back drops to `List`
//! before the request is judged. A submit or confirm that finds its record gone fails with
//! `NotFound` and also lands in `List`.

use serde::Serialize;

use crate::commands::{self, dashboard, CmdMessage, CmdResult};
use crate::config::CounselConfig;
use crate::error::Result;
use crate::filter::{FilterField, FilterState};
use crate::forms::{CounselorForm, CounselorPatch};
use crate::model::{Collection, ContentItem, Counselor, RecordId, Student};
use crate::store::campus::Campus;
use crate::view::{ViewController, ViewMode};

/// Records of one collection, in store order.
#[derive(Debug, Clone, Serialize)]
#[serde(untagged)]
pub enum Records {
    Students(Vec<Student>),
    Counselors(Vec<Counselor>),
    Content(Vec<ContentItem>),
}

impl Records {
    pub fn len(&self) -> usize {
        match self {
            Records::Students(v) => v.len(),
            Records::Counselors(v) => v.len(),
            Records::Content(v) => v.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn ids(&self) -> Vec<RecordId> {
        match self {
            Records::Students(v) => v.iter().map(|r| r.id).collect(),
            Records::Counselors(v) => v.iter().map(|r| r.id).collect(),
            Records::Content(v) => v.iter().map(|r| r.id).collect(),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct Listing {
    pub collection: Collection,
    pub filter: FilterState,
    pub records: Records,
    pub messages: Vec<CmdMessage>,
}

fn listing<R>(
    collection: Collection,
    filter: &FilterState,
    result: CmdResult<R>,
    wrap: fn(Vec<R>) -> Records,
) -> Listing {
    Listing {
        collection,
        filter: filter.clone(),
        records: wrap(result.listed),
        messages: result.messages,
    }
}

pub struct CounselApi {
    campus: Campus,
    view: ViewController,
    config: CounselConfig,
}

impl CounselApi {
    pub fn new(campus: Campus, config: CounselConfig) -> Result<Self> {
        let view = ViewController::new(config.collection()?);
        Ok(Self {
            campus,
            view,
            config,
        })
    }

    /// Build from configuration alone, seeding mock data when `seed_mock_data` is set.
    pub fn from_config(config: CounselConfig) -> Result<Self> {
        let campus = if config.seed_mock_data {
            Campus::seeded()
        } else {
            Campus::empty()
        };
        Self::new(campus, config)
    }

    pub fn config(&self) -> &CounselConfig {
        &self.config
    }

    pub fn campus(&self) -> &Campus {
        &self.campus
    }

    /// Direct store access for callers that change records outside the controller.
    pub fn campus_mut(&mut self) -> &mut Campus {
        &mut self.campus
    }

    // --- Listing ---

    pub fn list_records(&self, collection: Collection) -> Result<Listing> {
        if collection == self.view.collection() {
            self.list_with(collection, self.view.filter())
        } else {
            self.list_with(collection, &FilterState::default())
        }
    }

    pub fn list_with(&self, collection: Collection, filter: &FilterState) -> Result<Listing> {
        Ok(match collection {
            Collection::Students => listing(
                collection,
                filter,
                commands::list::run(&self.campus.students, filter)?,
                Records::Students,
            ),
            Collection::Counselors => listing(
                collection,
                filter,
                commands::list::run(&self.campus.counselors, filter)?,
                Records::Counselors,
            ),
            Collection::Content => listing(
                collection,
                filter,
                commands::list::run(&self.campus.content, filter)?,
                Records::Content,
            ),
        })
    }

    // --- Controller state ---

    pub fn collection(&self) -> Collection {
        self.view.collection()
    }

    pub fn mode(&self) -> ViewMode {
        self.view.mode()
    }

    pub fn filter(&self) -> &FilterState {
        self.view.filter()
    }

    pub fn form(&self) -> Option<&CounselorForm> {
        self.view.form()
    }

    /// Drop a stale `Edit`/`ConfirmDelete`. Returns true when the mode changed.
    pub fn refresh(&mut self) -> bool {
        self.view.reconcile(&self.campus.counselors)
    }

    pub fn set_filter(&mut self, field: FilterField, value: &str) -> Result<()> {
        self.view.set_filter(field, value)
    }

    pub fn clear_filter(&mut self, field: FilterField) {
        self.view.clear_filter(field)
    }

    pub fn switch_collection(&mut self, collection: Collection) -> Result<()> {
        self.refresh();
        self.view.switch_collection(collection)
    }

    pub fn cancel(&mut self) {
        self.view.cancel()
    }

    // --- Counselor management ---

    pub fn request_create(&mut self) -> Result<()> {
        self.refresh();
        self.view.request_create()
    }

    pub fn request_edit(&mut self, id: RecordId) -> Result<Counselor> {
        self.refresh();
        self.view.request_edit(&self.campus.counselors, id)
    }

    pub fn request_delete(&mut self, id: RecordId) -> Result<Counselor> {
        self.refresh();
        self.view.request_delete(&self.campus.counselors, id)
    }

    pub fn set_form_field(&mut self, field: &str, value: &str) -> Result<()> {
        self.refresh();
        self.view.set_field(field, value)
    }

    pub fn submit_create(&mut self, form: &CounselorForm) -> Result<CmdResult<Counselor>> {
        let floor = self.config.id_floor;
        self.view
            .submit_create(&mut self.campus.counselors, form, floor)
    }

    pub fn submit_edit(
        &mut self,
        id: RecordId,
        patch: &CounselorPatch,
    ) -> Result<CmdResult<Counselor>> {
        self.view.submit_edit(&mut self.campus.counselors, id, patch)
    }

    pub fn confirm_delete(&mut self, id: RecordId) -> Result<CmdResult<Counselor>> {
        self.view.confirm_delete(&mut self.campus.counselors, id)
    }

    /// Submit the open form or pending deletion, whichever the current mode holds.
    pub fn submit(&mut self) -> Result<CmdResult<Counselor>> {
        let floor = self.config.id_floor;
        self.view.submit(&mut self.campus.counselors, floor)
    }

    // --- Dashboard ---

    pub fn dashboard(
        &self,
        college: Option<&str>,
        range: dashboard::TimeRange,
    ) -> Result<dashboard::DashboardDataset> {
        dashboard::dataset(college, range)
    }

    pub fn summary(&self) -> Vec<dashboard::CollectionSummary> {
        dashboard::summary(&self.campus)
    }
}
