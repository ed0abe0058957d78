// templates/pages/home.rs

use crate::templates::{components::upload_section, desktop_layout};
use maud::{html, Markup};

pub fn home_page() -> Markup {
    desktop_layout(
        "Visão Estratégica de Cancelamentos em Apps de Mobilidade",
        "/",
        html! {
            main class="home" {
                p class="lead" {
                    "Carregue o CSV de corridas e explore as análises temporal, pessoal, "
                    "espacial e sociodemográfica dos cancelamentos."
                }
                (upload_section())
            }
        },
    )
}
