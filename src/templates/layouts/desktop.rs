use crate::templates::components::navbar;
use maud::{html, Markup, DOCTYPE};

const HTMX_SRC: &str = "https://unpkg.com/htmx.org@1.9.12";

pub fn desktop_layout(title: &str, current_path: &str, content: Markup) -> Markup {
    html! {
        (DOCTYPE)
        html lang="pt-BR" {
            head {
                meta charset="utf-8";
                meta name="viewport" content="width=device-width, initial-scale=1.0";
                title { (title) " · Mobilidade" }
                link rel="stylesheet" href="/static/main.css";
                script src=(HTMX_SRC) defer {}
            }
            body {
                div class="page" {
                    span class="page-title" { (title) }
                    div class="container-content" {
                        (navbar(current_path))
                    }
                    (content)
                }
            }
        }
    }
}
