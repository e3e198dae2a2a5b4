//! Resource State
//!
//! Owned per-resource view state. The methods here are the only way it
//! changes; they are synchronous so no borrow spans a request.

use chrono::NaiveDateTime;

use crate::resource::Resource;
use crate::validation::ValidationError;

/// Collection lifecycle: `Idle` until the first load, `Loading` while any
/// list request is outstanding, `Loaded` afterwards
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Idle,
    Loading,
    Loaded,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DialogMode {
    Create,
    Edit { id: i64 },
}

#[derive(Debug, Clone, PartialEq)]
pub struct Dialog<D> {
    pub mode: DialogMode,
    pub draft: D,
}

/// Snapshot of an open dialog taken when a submit starts
#[derive(Debug, Clone, PartialEq)]
pub struct Submission<D> {
    pub mode: DialogMode,
    pub draft: D,
}

/// Why a submit never reached the network
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitRefusal {
    NoDialog,
    InFlight,
    /// Draft fails its static checks; the action is disabled in the UI
    Incomplete(ValidationError),
    /// Draft was rejected at submission time; the user is told why
    Rejected(ValidationError),
}

pub struct ResourceState<R: Resource> {
    records: Vec<R::Record>,
    phase: Phase,
    pending_loads: u32,
    loaded_once: bool,
    filters: R::Filters,
    dialog: Option<Dialog<R::Draft>>,
    /// Bumped every time a dialog opens
    dialog_generation: u64,
    /// Generation of the dialog whose submit is in flight
    submitted_dialog: Option<u64>,
}

impl<R: Resource> Default for ResourceState<R> {
    fn default() -> Self {
        Self::new(R::Filters::default())
    }
}

impl<R: Resource> ResourceState<R> {
    pub fn new(filters: R::Filters) -> Self {
        Self {
            records: Vec::new(),
            phase: Phase::Idle,
            pending_loads: 0,
            loaded_once: false,
            filters,
            dialog: None,
            dialog_generation: 0,
            submitted_dialog: None,
        }
    }

    // ========================
    // Collection Snapshot
    // ========================

    pub fn records(&self) -> &[R::Record] {
        &self.records
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn is_loading(&self) -> bool {
        self.phase == Phase::Loading
    }

    /// Enter `Loading` and hand out the filters the request should use
    pub fn begin_load(&mut self) -> R::Filters {
        self.pending_loads += 1;
        self.phase = Phase::Loading;
        self.filters.clone()
    }

    /// Replace the snapshot with a fresh server listing
    pub fn finish_load(&mut self, records: Vec<R::Record>) {
        self.records = records;
        self.loaded_once = true;
        self.settle_load();
    }

    /// A listing failed: the previous snapshot stays visible
    pub fn fail_load(&mut self) {
        self.settle_load();
    }

    fn settle_load(&mut self) {
        self.pending_loads = self.pending_loads.saturating_sub(1);
        self.phase = if self.pending_loads > 0 {
            Phase::Loading
        } else if self.loaded_once {
            Phase::Loaded
        } else {
            Phase::Idle
        };
    }

    // ========================
    // Filter State
    // ========================

    pub fn filters(&self) -> &R::Filters {
        &self.filters
    }

    pub fn filters_mut(&mut self) -> &mut R::Filters {
        &mut self.filters
    }

    // ========================
    // Dialog / Draft State
    // ========================

    pub fn dialog(&self) -> Option<&Dialog<R::Draft>> {
        self.dialog.as_ref()
    }

    pub fn is_dialog_open(&self) -> bool {
        self.dialog.is_some()
    }

    pub fn draft(&self) -> Option<&R::Draft> {
        self.dialog.as_ref().map(|dialog| &dialog.draft)
    }

    pub fn draft_mut(&mut self) -> Option<&mut R::Draft> {
        self.dialog.as_mut().map(|dialog| &mut dialog.draft)
    }

    pub fn open_create(&mut self, draft: R::Draft) {
        self.dialog_generation += 1;
        self.dialog = Some(Dialog { mode: DialogMode::Create, draft });
    }

    pub fn open_edit(&mut self, record: &R::Record) {
        self.dialog_generation += 1;
        self.dialog = Some(Dialog {
            mode: DialogMode::Edit { id: R::record_id(record) },
            draft: R::draft_from(record),
        });
    }

    /// Cancel: the draft is discarded
    pub fn close_dialog(&mut self) {
        self.dialog = None;
    }

    pub fn is_submitting(&self) -> bool {
        self.submitted_dialog.is_some()
    }

    /// Static validation result of the open draft, `None` when no dialog
    pub fn draft_error(&self) -> Option<ValidationError> {
        self.draft().and_then(|draft| R::check_draft(draft).err())
    }

    /// Whether the submit affordance should be enabled
    pub fn can_submit(&self) -> bool {
        !self.is_submitting() && self.draft().is_some_and(|draft| R::check_draft(draft).is_ok())
    }

    /// Run the validation gate and, if it passes, mark the dialog as
    /// submitting and snapshot it for the request
    pub fn begin_submit(&mut self, now: NaiveDateTime) -> Result<Submission<R::Draft>, SubmitRefusal> {
        let dialog = self.dialog.as_ref().ok_or(SubmitRefusal::NoDialog)?;
        if self.is_submitting() {
            return Err(SubmitRefusal::InFlight);
        }
        R::check_draft(&dialog.draft).map_err(SubmitRefusal::Incomplete)?;
        R::check_at_submit(&dialog.draft, now).map_err(SubmitRefusal::Rejected)?;

        let submission = Submission {
            mode: dialog.mode,
            draft: dialog.draft.clone(),
        };
        self.submitted_dialog = Some(self.dialog_generation);
        Ok(submission)
    }

    /// Success closes the submitted dialog and drops its draft; failure
    /// keeps both for a retry. A dialog opened after the submit started is
    /// left alone either way.
    pub fn finish_submit(&mut self, saved: bool) {
        let submitted = self.submitted_dialog.take();
        if saved && submitted == Some(self.dialog_generation) {
            self.dialog = None;
        }
    }
}
