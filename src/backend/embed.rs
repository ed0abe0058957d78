// embed.rs
use scraper::{Html, Selector};
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EmbedError {
    #[error("HTML parse error: {0}")]
    HtmlParse(String),
    #[error("nenhum frame de visualização encontrado na resposta")]
    MissingFrame,
}

/// State of one embedded visualization frame.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FrameState {
    /// The backend request has not answered yet.
    Loading,
    Ready(String),
    Failed(String),
}

/// Outer HTML of the first `iframe` in `html`.
pub fn extract_frame(html: &str) -> Result<String, EmbedError> {
    let document = Html::parse_document(html);
    let selector = Selector::parse("iframe").map_err(|e| EmbedError::HtmlParse(e.to_string()))?;

    document
        .select(&selector)
        .next()
        .map(|frame| frame.html())
        .ok_or(EmbedError::MissingFrame)
}
