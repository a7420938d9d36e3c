use thiserror::Error;

pub type AppResult<T> = Result<T, AppError>;

#[derive(Debug, Error)]
pub enum AppError {
    /// Geocoding service failure or an empty geocoding result.
    #[error("Geocoding failed: {0}")]
    Geocoding(String),

    /// A location pick arrived while pickup and destination were both set.
    #[error("Both pickup and destination are already set. Clear them to set new locations.")]
    SelectionComplete,

    /// A booking referenced a tier that is not currently offered.
    #[error("Ride tier '{0}' is not currently offered")]
    UnknownTier(String),

    /// Pricing was asked for a distance that is negative or not finite.
    #[error("Distance in km must be non-negative and finite, got {0}")]
    InvalidDistance(f64),
}

impl From<reqwest::Error> for AppError {
    fn from(err: reqwest::Error) -> Self {
        AppError::Geocoding(err.to_string())
    }
}
