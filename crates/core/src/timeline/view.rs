//! Timeline view session
//!
//! One `TimelineView` backs one viewing context. It owns the last applied
//! snapshot and a generation counter: selecting another lead, refreshing
//! after a mutating action, or tearing the view down moves the generation
//! on, and a load that resolves under an outdated generation is dropped
//! instead of being applied.

use std::sync::Arc;

use parking_lot::Mutex;
use salestrail_domain::{LeadId, Result, SalesTrailError};
use tracing::debug;

use super::bundle::TimelineBundle;
use super::service::CustomerTimelineService;

/// Result of [`TimelineView::load`]
#[derive(Debug, Clone, PartialEq)]
pub enum LoadOutcome {
    /// The fetched bundle is now the view's current snapshot.
    Applied(Arc<TimelineBundle>),
    /// The view moved on while the fetch was in flight.
    Discarded,
}

#[derive(Debug, Default)]
struct ViewState {
    generation: u64,
    lead_id: Option<LeadId>,
    current: Option<Arc<TimelineBundle>>,
}

pub struct TimelineView {
    service: Arc<CustomerTimelineService>,
    state: Mutex<ViewState>,
}

impl TimelineView {
    pub fn new(service: Arc<CustomerTimelineService>) -> Self {
        Self { service, state: Mutex::new(ViewState::default()) }
    }

    /// Point the view at a lead. Any snapshot of the previous lead is dropped.
    pub fn select_lead(&self, lead_id: LeadId) -> u64 {
        let mut state = self.state.lock();
        state.generation += 1;
        if state.lead_id != Some(lead_id) {
            state.current = None;
        }
        state.lead_id = Some(lead_id);
        state.generation
    }

    /// Invalidate in-flight loads so the next [`load`](Self::load) fetches a
    /// fresh bundle. Call after every approve/reject/cancel action; the
    /// previous snapshot is replaced, never patched.
    pub fn refresh(&self) -> u64 {
        let mut state = self.state.lock();
        state.generation += 1;
        state.generation
    }

    /// Forget the lead and snapshot; loads still in flight will be discarded.
    pub fn teardown(&self) {
        let mut state = self.state.lock();
        state.generation += 1;
        state.lead_id = None;
        state.current = None;
    }

    /// Last applied snapshot, if any.
    pub fn current(&self) -> Option<Arc<TimelineBundle>> {
        self.state.lock().current.clone()
    }

    pub fn lead_id(&self) -> Option<LeadId> {
        self.state.lock().lead_id
    }

    /// Fetch the selected lead's timeline and apply it if still relevant.
    ///
    /// # Errors
    /// `SalesTrailError::InvalidInput` when no lead is selected or the lead
    /// id is invalid. Errors of a stale load are discarded like its data.
    pub async fn load(&self) -> Result<LoadOutcome> {
        let (generation, lead_id) = {
            let state = self.state.lock();
            (state.generation, state.lead_id)
        };
        let lead_id = lead_id
            .ok_or_else(|| SalesTrailError::InvalidInput("no lead selected".to_string()))?;

        let result = self.service.get_timeline_data(lead_id).await;

        let mut state = self.state.lock();
        if state.generation != generation {
            debug!(
                lead_id = %lead_id,
                started = generation,
                current = state.generation,
                "discarding stale timeline load"
            );
            return Ok(LoadOutcome::Discarded);
        }

        let bundle = Arc::new(result?);
        state.current = Some(bundle.clone());
        Ok(LoadOutcome::Applied(bundle))
    }
}
