use crate::backend::{AnalysisView, FrameState};
use maud::{html, Markup, PreEscaped};

/// A backend chart frame in one of its three states.
pub fn frame_panel(view: AnalysisView, state: &FrameState) -> Markup {
    let frame_url = format!("/frames/{}", view.slug());

    html! {
        @match state {
            FrameState::Loading => {
                div class="frame-loader" hx-get=(frame_url) hx-trigger="load" hx-swap="outerHTML" {
                    div class="spinner" aria-label="Carregando" {}
                    noscript { a href=(frame_url) { "Abrir visualização" } }
                }
            }
            // Markup was re-serialized by the HTML parser during extraction.
            FrameState::Ready(markup) => {
                div class="iframe-container" { (PreEscaped(markup)) }
            }
            FrameState::Failed(message) => {
                div class="frame-error" role="alert" {
                    p { "Não foi possível carregar a visualização." }
                    p class="detail" { (message) }
                }
            }
        }
    }
}
