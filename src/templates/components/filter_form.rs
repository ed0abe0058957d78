use crate::filters::{FieldKind, FilterField, FormValues};
use maud::{html, Markup};

/// Render `fields` as a grid of labelled controls that posts to `action`.
/// `columns` defaults to one column per field.
pub fn filter_form(
    action: &str,
    fields: &[FilterField],
    values: &FormValues,
    columns: Option<usize>,
) -> Markup {
    let columns = columns.unwrap_or(fields.len()).max(1);

    html! {
        form class="filters" method="post" action=(action) {
            div
                id="fields"
                class="filter-fields"
                style=(format!("grid-template-columns: repeat({columns}, 1fr);"))
            {
                @for field in fields {
                    (filter_control(field, values))
                }
            }
            div class="filter-buttons" {
                button type="submit" class="filter-button" { "Submit" }
            }
        }
    }
}

fn filter_control(field: &FilterField, values: &FormValues) -> Markup {
    let current = values.get(field.id).or(field.selected);

    html! {
        div class="filter-container" {
            label class="filter-label" for=(field.id) { (field.label) }
            @match field.kind {
                FieldKind::Text => {
                    input
                        type="text"
                        id=(field.id)
                        name=(field.id)
                        class="filter-input"
                        placeholder=[field.placeholder]
                        value=[current];
                }
                FieldKind::Select => {
                    select id=(field.id) name=(field.id) class="filter-input" {
                        option value="" { (blank_label(field)) }
                        @for opt in &field.options {
                            @if !opt.value.is_empty() {
                                option value=(opt.value) selected[current == Some(opt.value)] { (opt.name) }
                            }
                        }
                    }
                }
                FieldKind::Toggle => {
                    input
                        type="checkbox"
                        id=(field.id)
                        name=(field.id)
                        value="on"
                        class="filter-toggle"
                        checked[values.is_on(field.id)];
                }
            }
        }
    }
}

/// Select options with an empty value label the blank choice ("Todos").
fn blank_label(field: &FilterField) -> &'static str {
    field
        .options
        .iter()
        .find(|opt| opt.value.is_empty())
        .map_or("", |opt| opt.name)
}
