use maud::{html, Markup};

const LINKS: [(&str, &str); 8] = [
    ("/", "Home"),
    ("/analise-espacial", "Análise Espacial"),
    ("/analise-espacial/filtros", "Análise Espacial (Filtros)"),
    ("/analise-temporal", "Análise Temporal"),
    ("/analise-pessoal", "Análise Pessoal"),
    ("/dados-correlacionados", "Análise Sociodemográfica"),
    ("/mapa-ocorrencias", "Impacto dos Eventos na Cidade"),
    ("/impacto-eventos", "Impacto Eventos"),
];

pub fn navbar(current_path: &str) -> Markup {
    html! {
        nav {
            ul {
                @for (href, label) in LINKS {
                    li {
                        a href=(href) class=[(href == current_path).then_some("active")] { (label) }
                    }
                }
            }
        }
    }
}
