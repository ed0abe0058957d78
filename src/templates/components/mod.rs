pub mod error;
pub mod filter_form;
pub mod frame;
pub mod map;
pub mod navbar;
pub mod upload;

pub use error::html_error_response;
pub use filter_form::filter_form;
pub use frame::frame_panel;
pub use map::{map_panel, results_table, status_banner};
pub use navbar::navbar;
pub use upload::{upload_result, upload_section};
