use crate::backend::UploadKind;
use maud::{html, Markup};

const FORMS: [(UploadKind, &str, &str, &str); 3] = [
    (UploadKind::Csv, "uploadCSVForm", "Selecionar Arquivo", ".csv"),
    (
        UploadKind::Favelas,
        "uploadFavelasForm",
        "GeoJSON de Favelas",
        ".geojson,.json",
    ),
    (
        UploadKind::Censo,
        "uploadCensoForm",
        "GeoJSON do Censo",
        ".geojson,.json",
    ),
];

pub fn upload_section() -> Markup {
    html! {
        section class="container-upload" {
            @for (kind, id, label, accept) in FORMS {
                (upload_form(kind, id, label, accept))
            }
        }
    }
}

fn upload_form(kind: UploadKind, id: &str, label: &str, accept: &str) -> Markup {
    let result_id = format!("{id}-result");

    html! {
        form
            id=(id)
            class="upload-form"
            action=(kind.endpoint())
            method="post"
            enctype="multipart/form-data"
            hx-post=(kind.endpoint())
            hx-encoding="multipart/form-data"
            hx-target=(format!("#{result_id}"))
            hx-swap="innerHTML"
            hx-disabled-elt="button"
        {
            div class="icon-upload" { "⬆" }
            label for=(format!("{id}-file")) class="custom-file-label" { (label) }
            input type="file" id=(format!("{id}-file")) name="file" accept=(accept) required;
            button type="submit" class="button-submit" { "Upload" }
            div id=(result_id) class="upload-result" {}
        }
    }
}

/// Inline outcome of an upload, swapped into the form's result slot.
pub fn upload_result(outcome: Result<&str, &str>) -> Markup {
    html! {
        @match outcome {
            Ok(msg) => {
                p class="upload-ok" { (msg) }
            }
            Err(msg) => {
                p class="upload-error" role="alert" { (msg) }
            }
        }
    }
}
