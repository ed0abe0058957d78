mod encoder;
mod fields;
mod filter_error;
mod form;
mod session;

pub use encoder::{encode_spatial, Condition, CorrelationQuery, EncodedFilter, FilterValue};
pub use fields::{occurrence_filters, spatial_filters, FieldKind, FilterField, HIDE_TABLE};
pub use filter_error::FilterError;
pub use form::FormValues;
pub use session::{FilterSession, Submission};
