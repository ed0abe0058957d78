use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FilterError {
    #[error("campo obrigatório ausente: {0}")]
    Missing(&'static str),
    #[error("data inválida em {field}: {value:?} (use AAAA-MM-DD)")]
    InvalidDate { field: &'static str, value: String },
    #[error("horário inválido em {field}: {value:?} (use HH:MM)")]
    InvalidTime { field: &'static str, value: String },
    #[error("número inválido em {field}: {value:?}")]
    InvalidNumber { field: &'static str, value: String },
}
