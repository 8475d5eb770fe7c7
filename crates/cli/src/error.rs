use clinic_core::ClinicError;

#[derive(Debug, thiserror::Error)]
pub enum CliError {
    #[error("input stream closed")]
    InputClosed,
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to render JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error(transparent)]
    Clinic(#[from] ClinicError),
}

pub type CliResult<T> = std::result::Result<T, CliError>;
