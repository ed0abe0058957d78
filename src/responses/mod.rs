pub mod assets;
pub mod html;

pub use crate::errors::ResultResp;
pub use assets::static_asset;
pub use html::{html_response, no_content};
