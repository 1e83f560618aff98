use thiserror::Error;
use tracing::error;
use tracing_error::SpanTrace;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("ead-course server io: {0}")]
    Io(#[from] std::io::Error),
    #[error(transparent)]
    Config(#[from] crate::config::ConfigError),
    #[error("ead-course store: {0}")]
    Database(#[from] crate::model::DatabaseError),
    #[error("ead-course catalog: {0}")]
    Service(#[from] crate::service::ServiceError),
}

pub type AppResult<T> = std::result::Result<T, AppError>;

/// Process entry point: logs a failed run with its span trace and exits 1.
pub async fn run_with_error_handler<F, T>(run: F) -> T
where
    F: AsyncFn() -> AppResult<T>,
    T: Send + Sync,
{
    match run().await {
        Ok(value) => value,
        Err(e) => {
            log_error(&e);
            std::process::exit(1);
        }
    }
}

pub fn log_error<E: std::error::Error>(error: &E) {
    let span = SpanTrace::capture();
    error!("{}\n{}", error, span);
}
