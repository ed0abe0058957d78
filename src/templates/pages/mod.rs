pub mod analysis;
pub mod home;
pub mod occurrences;
pub mod spatial;

pub use analysis::analysis_page;
pub use home::home_page;
pub use occurrences::{occurrences_page, OCCURRENCES_PATH};
pub use spatial::{spatial_page, SPATIAL_FILTERS_PATH};
