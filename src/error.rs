//! Error types for input validation.

/// Rejected observer or calendar input.
#[derive(Debug, Clone, Copy, PartialEq, thiserror::Error)]
pub enum SunError {
    /// Latitude outside -90..=90 degrees or not finite.
    #[error("latitude must be between -90 and 90, got {0}")]
    InvalidLatitude(f64),

    /// Longitude outside -180..=180 degrees or not finite.
    #[error("longitude must be between -180 and 180, got {0}")]
    InvalidLongitude(f64),

    /// Calendar date that does not exist or lies outside 1753..=4582.
    #[error("invalid date {year:04}-{month:02}-{day:02}")]
    InvalidDate {
        /// Requested year.
        year: i32,
        /// Requested month.
        month: i32,
        /// Requested day of month.
        day: i32,
    },
}
