// src/filters/fields.rs

/// How a field is rendered. Carries no business logic.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    Text,
    Select,
    Toggle,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectOption {
    pub name: &'static str,
    pub value: &'static str,
}

/// Declarative description of one form control.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterField {
    pub id: &'static str,
    pub kind: FieldKind,
    pub label: &'static str,
    pub placeholder: Option<&'static str>,
    pub options: Vec<SelectOption>,
    /// Value pre-selected when the form has not been submitted yet.
    pub selected: Option<&'static str>,
}

impl FilterField {
    pub fn text(id: &'static str, label: &'static str, placeholder: &'static str) -> Self {
        Self {
            id,
            kind: FieldKind::Text,
            label,
            placeholder: Some(placeholder),
            options: Vec::new(),
            selected: None,
        }
    }

    pub fn select(id: &'static str, label: &'static str, options: Vec<SelectOption>) -> Self {
        Self {
            id,
            kind: FieldKind::Select,
            label,
            placeholder: None,
            options,
            selected: None,
        }
    }

    pub fn toggle(id: &'static str, label: &'static str) -> Self {
        Self {
            id,
            kind: FieldKind::Toggle,
            label,
            placeholder: None,
            options: Vec::new(),
            selected: None,
        }
    }
}

const fn opt(name: &'static str, value: &'static str) -> SelectOption {
    SelectOption { name, value }
}

fn status_options() -> Vec<SelectOption> {
    vec![
        opt("Cancelada pelo Passageiro", "CANCELADA_PELO_PASSAGEIRO"),
        opt("Cancelada pelo Taxista", "CANCELADA_PELO_TAXISTA"),
        opt("Finalizada", "FINALIZADA"),
    ]
}

fn bairro_options() -> Vec<SelectOption> {
    vec![
        opt("Todos", ""),
        opt("Copacabana", "COPACABANA"),
        opt("Tijuca", "TIJUCA"),
        opt("Centro", "CENTRO"),
        opt("Botafogo", "BOTAFOGO"),
    ]
}

/// Fields of the spatial analysis filter form.
pub fn spatial_filters() -> Vec<FilterField> {
    vec![
        FilterField::text("createdAt", "Created At", "2025-01-01"),
        FilterField::select("status", "Status", status_options()),
        FilterField::text(
            "distanciaMotorista",
            "Distância do Motorista (metros)",
            "1000",
        ),
        FilterField::text("distanciaRota", "Distância da Rota (metros)", "5000"),
        FilterField::select("bairroCliente", "Bairro do Cliente", bairro_options()),
    ]
}

/// Toggle on the occurrences form; display only, never sent to the backend.
pub const HIDE_TABLE: &str = "hide_table";

/// Fields of the events-near-cancellations query form.
pub fn occurrence_filters() -> Vec<FilterField> {
    vec![
        FilterField::text("date", "Data", "2024-11-13"),
        FilterField::text("start_time", "Hora inicial", "00:00"),
        FilterField::text("end_time", "Hora final", "23:59"),
        FilterField::select("status", "Status", status_options()),
        FilterField::text("radius", "Raio (km)", "5"),
        FilterField::toggle(HIDE_TABLE, "Ocultar tabela"),
    ]
}
