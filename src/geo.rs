//! Geographic Position Module
//!
//! Observer location as a validated value type. Once a `GeoPosition` exists its
//! coordinates are known to be in range, so the solar calculator never re-checks them.

use crate::error::SunError;

// ===================== CONSTANTS =====================

/// Compiled-in default latitude (Norwich, UK), used when no config or flag supplies one.
pub const DEFAULT_LATITUDE: f64 = 52.628;

/// Compiled-in default longitude (Norwich, UK).
pub const DEFAULT_LONGITUDE: f64 = 1.252;

// ===================== TYPES =====================

/// Observer position in decimal degrees, positive North and East.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GeoPosition {
    latitude: f64,
    longitude: f64,
}

impl GeoPosition {
    /// Build a position, rejecting coordinates outside their valid ranges.
    ///
    /// # Errors
    /// `SunError::InvalidLatitude` unless `-90 <= lat <= 90`, and
    /// `SunError::InvalidLongitude` unless `-180 <= lon <= 180`. NaN fails both checks.
    pub fn new(latitude: f64, longitude: f64) -> Result<Self, SunError> {
        Ok(Self { latitude: check_latitude(latitude)?, longitude: check_longitude(longitude)? })
    }

    pub fn latitude(&self) -> f64 {
        self.latitude
    }

    pub fn longitude(&self) -> f64 {
        self.longitude
    }
}

impl Default for GeoPosition {
    fn default() -> Self {
        Self { latitude: DEFAULT_LATITUDE, longitude: DEFAULT_LONGITUDE }
    }
}

// ===================== RANGE CHECKS =====================

pub fn check_latitude(v: f64) -> Result<f64, SunError> {
    if !(-90.0..=90.0).contains(&v) {
        return Err(SunError::InvalidLatitude(v));
    }
    Ok(v)
}

pub fn check_longitude(v: f64) -> Result<f64, SunError> {
    if !(-180.0..=180.0).contains(&v) {
        return Err(SunError::InvalidLongitude(v));
    }
    Ok(v)
}

// ===================== TESTS =====================
