use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BackendError {
    #[error("Erro ao conectar ao servidor: {0}")]
    Network(String),
    #[error("O servidor respondeu com HTTP {0}")]
    Status(u16),
    /// Message carried by a structured `{"error": ...}` payload.
    #[error("{0}")]
    Api(String),
    #[error("Resposta inesperada do servidor: {0}")]
    Decode(String),
    #[error("Erro de configuração do cliente: {0}")]
    Config(String),
}

impl BackendError {
    /// Text shown to the user. Structured messages pass through as-is.
    pub fn user_message(&self) -> String {
        match self {
            BackendError::Api(msg) => msg.clone(),
            BackendError::Network(_) | BackendError::Status(_) => {
                "Erro ao buscar dados. Verifique os filtros e tente novamente.".to_string()
            }
            other => other.to_string(),
        }
    }
}
