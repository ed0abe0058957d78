// src/backend/endpoints.rs

pub const EVENTS_NEAR_CANCELLATIONS: &str = "/events-near-cancellations";

/// Backend views that answer with a pre-rendered chart frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnalysisView {
    Temporal,
    Pessoal,
    Sociodemografica,
    ImpactoEventos,
    Espacial,
}

impl AnalysisView {
    pub const ALL: [AnalysisView; 5] = [
        AnalysisView::Temporal,
        AnalysisView::Pessoal,
        AnalysisView::Sociodemografica,
        AnalysisView::ImpactoEventos,
        AnalysisView::Espacial,
    ];

    /// Path segment, shared by the backend endpoint and the dashboard page.
    pub fn slug(self) -> &'static str {
        match self {
            AnalysisView::Temporal => "analise-temporal",
            AnalysisView::Pessoal => "analise-pessoal",
            AnalysisView::Sociodemografica => "dados-correlacionados",
            AnalysisView::ImpactoEventos => "impacto-eventos",
            AnalysisView::Espacial => "analise-espacial",
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            AnalysisView::Temporal => "Análise Temporal",
            AnalysisView::Pessoal => "Análise Pessoal",
            AnalysisView::Sociodemografica => "Análise Sociodemográfica",
            AnalysisView::ImpactoEventos => "Impacto Eventos",
            AnalysisView::Espacial => "Análise Espacial",
        }
    }

    pub fn endpoint(self) -> String {
        format!("/{}", self.slug())
    }

    pub fn from_slug(slug: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|v| v.slug() == slug)
    }
}

/// Upload endpoints. All take a multipart body with a `file` field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UploadKind {
    Csv,
    LegacyCsv,
    Favelas,
    Censo,
}

impl UploadKind {
    pub fn endpoint(self) -> &'static str {
        match self {
            UploadKind::Csv => "/upload_csv",
            UploadKind::LegacyCsv => "/upload",
            UploadKind::Favelas => "/upload_favelas",
            UploadKind::Censo => "/upload_censo",
        }
    }

    pub fn from_path(path: &str) -> Option<Self> {
        [
            UploadKind::Csv,
            UploadKind::LegacyCsv,
            UploadKind::Favelas,
            UploadKind::Censo,
        ]
        .into_iter()
        .find(|k| k.endpoint() == path)
    }

    /// Shown when the backend accepts the file without a message of its own.
    pub fn success_message(self) -> &'static str {
        match self {
            UploadKind::Csv | UploadKind::LegacyCsv => "CSV carregado com sucesso!",
            UploadKind::Favelas => "GeoJSON de Favelas atualizado com sucesso!",
            UploadKind::Censo => "GeoJSON do Censo atualizado com sucesso!",
        }
    }
}
