use crate::charts::{CHART_HEIGHT, CHART_WIDTH};
use crate::filters::spatial_filters;
use crate::state::SpatialView;
use crate::templates::{components::filter_form, desktop_layout};
use maud::{html, Markup};

pub const SPATIAL_FILTERS_PATH: &str = "/analise-espacial/filtros";

pub fn spatial_page(view: &SpatialView) -> Markup {
    desktop_layout(
        "Análise Espacial (Embed)",
        SPATIAL_FILTERS_PATH,
        html! {
            main class="spatial" {
                (filter_form(SPATIAL_FILTERS_PATH, &spatial_filters(), &view.values, Some(3)))

                @if let Some(err) = &view.error {
                    div class="status status-error" role="alert" { p { (err) } }
                }

                div class="charts" {
                    @for url in &view.chart_urls {
                        iframe
                            class="chart"
                            src=(url)
                            style=(format!("width: {CHART_WIDTH}; height: {CHART_HEIGHT}; border: none;"))
                        {}
                    }
                }
            }
        },
    )
}
