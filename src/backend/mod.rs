mod backend_error;
mod client;
mod embed;
mod endpoints;
mod models;

pub use backend_error::BackendError;
pub use client::BackendClient;
pub use embed::{extract_frame, EmbedError, FrameState};
pub use endpoints::{AnalysisView, UploadKind};
pub use models::{CorrelationItem, GeoPoint, QueryResult, RecentEvent};

#[cfg(test)]
pub(crate) use client::{classify, decode_json, structured_error};

use crate::filters::CorrelationQuery;

/// The remote analytics service. Every call is a single attempt.
pub trait Backend: Send + Sync {
    /// `GET /events-near-cancellations` with the query's populated parameters.
    fn events_near_cancellations(
        &self,
        query: &CorrelationQuery,
    ) -> Result<QueryResult, BackendError>;

    /// Raw HTML of a chart view.
    fn fetch_embed(&self, view: AnalysisView) -> Result<String, BackendError>;

    /// Forward a multipart upload verbatim; returns the success message.
    fn upload(
        &self,
        kind: UploadKind,
        content_type: &str,
        body: Vec<u8>,
    ) -> Result<String, BackendError>;
}
