use crate::render::{MapSurface, TableRow, ViewStatus};
use maud::{html, Markup};

const LEAFLET_CSS: &str = "https://unpkg.com/leaflet@1.9.4/dist/leaflet.css";
const LEAFLET_JS: &str = "https://unpkg.com/leaflet@1.9.4/dist/leaflet.js";

/// Map container; `/static/map.js` draws the serialized surface with Leaflet.
pub fn map_panel(surface: &MapSurface) -> Markup {
    html! {
        link rel="stylesheet" href=(LEAFLET_CSS);
        script src=(LEAFLET_JS) {}
        div id="map" class="map" data-surface=(surface.to_json()) {}
        script src="/static/map.js" {}
    }
}

pub fn results_table(rows: &[TableRow]) -> Markup {
    html! {
        table id="data-table" class=[rows.is_empty().then_some("hidden")] {
            thead {
                tr {
                    @for header in TableRow::HEADERS {
                        th scope="col" { (header) }
                    }
                }
            }
            tbody {
                @for row in rows {
                    tr class="data-row" {
                        @for cell in row.cells() {
                            td { (cell) }
                        }
                    }
                }
            }
        }
    }
}

pub fn status_banner(status: &ViewStatus) -> Markup {
    html! {
        @match status {
            ViewStatus::Idle => {}
            ViewStatus::Loading => {
                p class="status status-loading" { "Carregando…" }
            }
            ViewStatus::Rendered { rows } => {
                p class="status status-ok" { (rows) " correlações encontradas." }
            }
            ViewStatus::Empty { message, hints } => {
                div class="status status-empty" {
                    p { (message) }
                    @if *hints > 0 {
                        p class="detail" { (hints) " eventos recentes destacados no mapa." }
                    }
                }
            }
            ViewStatus::Error { message } => {
                div class="status status-error" role="alert" {
                    p { (message) }
                }
            }
        }
    }
}
