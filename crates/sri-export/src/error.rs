use thiserror::Error;

#[derive(Debug, Error)]
pub enum ExportError {
    #[error("shared result could not be decoded: {0}")]
    Decode(String),

    #[error("no completed sessions to export")]
    Empty,

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("template parse error: {0}")]
    TemplateParse(String),

    #[error("template rendering failed: {0}")]
    TemplateRender(String),
}

impl From<tera::Error> for ExportError {
    fn from(e: tera::Error) -> Self {
        ExportError::TemplateRender(e.to_string())
    }
}
