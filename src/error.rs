use thiserror::Error;

#[derive(Error, Debug)]
pub enum SimError {
    #[error("invalid menu choice: {0}")]
    InvalidChoice(String),

    #[error("effectiveness band {0}..{1} is not contained in 0..=1")]
    InvalidBand(f64, f64),
}

pub type Result<T> = std::result::Result<T, SimError>;
