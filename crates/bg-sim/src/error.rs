use bg_core::BgError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SimError {
    #[error("invalid {what} placement: {source}")]
    Placement {
        what:   &'static str,
        #[source]
        source: BgError,
    },

    #[error(transparent)]
    Core(#[from] BgError),
}

pub type SimResult<T> = Result<T, SimError>;
