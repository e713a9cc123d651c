use fuel_core::FuelError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ScheduleError {
    #[error("segment parse error: {0}")]
    Parse(String),

    #[error(transparent)]
    Core(#[from] FuelError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type ScheduleResult<T> = Result<T, ScheduleError>;
