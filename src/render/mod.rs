mod renderer;
mod target;

pub use renderer::{Applied, RequestSequencer, ResultRenderer, ViewStatus, NO_DATA_MESSAGE};
pub use target::{DashboardSurface, MapSurface, Overlay, RenderTarget, TableRow, HINT_COLOR};
