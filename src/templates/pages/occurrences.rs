use crate::filters::{occurrence_filters, HIDE_TABLE};
use crate::state::OccurrenceView;
use crate::templates::{
    components::{filter_form, map_panel, results_table, status_banner},
    desktop_layout,
};
use maud::{html, Markup};

pub const OCCURRENCES_PATH: &str = "/mapa-ocorrencias";

pub fn occurrences_page(view: &OccurrenceView) -> Markup {
    let surface = view.renderer.target();

    desktop_layout(
        "Impacto dos Eventos na Cidade",
        OCCURRENCES_PATH,
        html! {
            main class="occurrences" {
                (filter_form(OCCURRENCES_PATH, &occurrence_filters(), &view.values, None))

                @if let Some(err) = &view.form_error {
                    div class="status status-error" role="alert" { p { (err) } }
                }

                (status_banner(view.renderer.status()))
                (map_panel(&surface.map))
                @if !view.values.is_on(HIDE_TABLE) {
                    (results_table(&surface.rows))
                }
            }
        },
    )
}
