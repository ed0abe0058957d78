use crate::backend::{AnalysisView, FrameState};
use crate::templates::{components::frame_panel, desktop_layout};
use maud::{html, Markup};

/// Page shell for a backend chart view. The frame loads after the page does.
pub fn analysis_page(view: AnalysisView) -> Markup {
    desktop_layout(
        view.title(),
        &view.endpoint(),
        html! {
            main class="analysis" {
                (frame_panel(view, &FrameState::Loading))
            }
        },
    )
}
