// src/state.rs
use crate::backend::Backend;
use crate::config::DashboardConfig;
use crate::errors::ServerError;
use crate::filters::{FilterSession, FormValues};
use crate::render::{DashboardSurface, RequestSequencer, ResultRenderer};
use std::sync::{Mutex, MutexGuard};

/// What the spatial filter page currently shows.
#[derive(Debug, Default)]
pub struct SpatialView {
    pub session: FilterSession,
    pub values: FormValues,
    /// Chart iframe URLs built from the last accepted filter.
    pub chart_urls: Vec<String>,
    pub error: Option<String>,
}

/// What the occurrences page currently shows.
#[derive(Debug)]
pub struct OccurrenceView {
    pub renderer: ResultRenderer<DashboardSurface>,
    pub values: FormValues,
    pub form_error: Option<String>,
}

impl Default for OccurrenceView {
    fn default() -> Self {
        Self {
            renderer: ResultRenderer::new(DashboardSurface::default()),
            values: FormValues::default(),
            form_error: None,
        }
    }
}

/// Shared by every worker thread. Locks are never held across backend calls.
pub struct AppState {
    pub config: DashboardConfig,
    pub backend: Box<dyn Backend>,
    pub sequencer: RequestSequencer,
    spatial: Mutex<SpatialView>,
    occurrences: Mutex<OccurrenceView>,
}

impl AppState {
    pub fn new(config: DashboardConfig, backend: Box<dyn Backend>) -> Self {
        Self {
            config,
            backend,
            sequencer: RequestSequencer::default(),
            spatial: Mutex::new(SpatialView::default()),
            occurrences: Mutex::new(OccurrenceView::default()),
        }
    }

    pub fn spatial(&self) -> Result<MutexGuard<'_, SpatialView>, ServerError> {
        self.spatial.lock().map_err(|_| ServerError::InternalError)
    }

    pub fn occurrences(&self) -> Result<MutexGuard<'_, OccurrenceView>, ServerError> {
        self.occurrences.lock().map_err(|_| ServerError::InternalError)
    }
}
