//! Solar Time Calculation Module
//!
//! Closed-form sunrise/sunset and twilight times from the low-precision solar
//! ephemeris published in the Almanac for Computers (1990), as worked through at
//! <https://www.edwilliams.org/sunrise_sunset_example.htm>. Accuracy is a minute
//! or two; there is no iteration and no state.

use std::fmt;

use serde::{Serialize, Serializer};

use crate::date::CalendarDate;
use crate::geo::GeoPosition;

// ===================== CONSTANTS =====================

/// Cosine of the local hour angle beyond which the sun is treated as never
/// crossing the target zenith. Values this close to +/-1 make `acos` unstable.
pub const NEVER_THRESHOLD: f64 = 0.995;

// ===================== TYPES =====================

/// Which horizon crossing to compute.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TwilightKind {
    /// Upper limb on the horizon, with standard refraction.
    #[default]
    Standard,
    /// Sun centre 6 degrees below the horizon.
    Civil,
    /// Sun centre 12 degrees below the horizon.
    Nautical,
    /// Sun centre 18 degrees below the horizon.
    Astronomical,
}

impl TwilightKind {
    /// Solar zenith angle in degrees at the moment of the event.
    pub fn zenith_deg(self) -> f64 {
        match self {
            Self::Standard => 90.0 + 50.0 / 60.0,
            Self::Civil => 96.0,
            Self::Nautical => 102.0,
            Self::Astronomical => 108.0,
        }
    }
}

/// A UTC time of day, truncated to whole seconds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ClockTime {
    pub hour: u32,
    pub minute: u32,
    pub second: u32,
}

impl ClockTime {
    /// Split fractional hours in `[0, 24)` into h/m/s by successive flooring.
    pub fn from_hours(ut: f64) -> Self {
        let hour = ut.floor();
        let minutes = 60.0 * (ut - hour);
        let minute = minutes.floor();
        let second = (60.0 * (minutes - minute)).floor();
        Self { hour: hour as u32, minute: minute as u32, second: second as u32 }
    }
}

impl fmt::Display for ClockTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}:{:02}", self.hour, self.minute, self.second)
    }
}

impl Serialize for ClockTime {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// Outcome of one calculation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SolarEvent {
    /// Rise and set times in UTC. Either may wrap past midnight.
    Times { rise: ClockTime, set: ClockTime },
    /// The sun stays below the target zenith all day.
    NeverRises,
    /// The sun stays above the target zenith all day.
    NeverSets,
}

#[derive(Debug, Clone, Copy)]
enum Crossing {
    Rise,
    Set,
}

impl Crossing {
    /// Approximate local hour of the event, used to seed the longitude hour.
    fn offset_hours(self) -> f64 {
        match self {
            Self::Rise => 6.0,
            Self::Set => 18.0,
        }
    }
}

// ===================== ANGLE HELPERS =====================

fn sin_deg(x: f64) -> f64 {
    x.to_radians().sin()
}

fn cos_deg(x: f64) -> f64 {
    x.to_radians().cos()
}

/// Reduce `x` into `[0, period)`.
pub fn normalize(x: f64, period: f64) -> f64 {
    let r = x.rem_euclid(period);
    // rem_euclid can round up to exactly `period` for tiny negative inputs
    if r >= period { 0.0 } else { r }
}

/// Day of year from the month/day approximation used by the almanac.
pub fn day_of_year(date: &CalendarDate) -> f64 {
    let y = f64::from(date.year());
    let m = f64::from(date.month());
    let d = f64::from(date.day());
    let n1 = (275.0 * m / 9.0).floor();
    let n2 = ((m + 9.0) / 12.0).floor();
    let n3 = 1.0 + ((y - 4.0 * (y / 4.0).floor() + 2.0) / 3.0).floor();
    n1 - n2 * n3 + d - 30.0
}

// ===================== CALCULATION =====================

/// Intermediate solar terms for one crossing.
struct SunTerms {
    /// Longitude hour, days.
    t: f64,
    /// Right ascension, hours, in the same quadrant as the true longitude.
    ra_hours: f64,
    /// Cosine of the local hour angle.
    cos_h: f64,
}

impl SunTerms {
    fn new(crossing: Crossing, n: f64, pos: &GeoPosition, zenith: f64) -> Self {
        let lng_hour = pos.longitude() / 15.0;
        let t = n + (crossing.offset_hours() - lng_hour) / 24.0;

        let mean_anomaly = 0.9856 * t - 3.289;
        let true_lng = normalize(
            mean_anomaly
                + 1.916 * sin_deg(mean_anomaly)
                + 0.020 * sin_deg(2.0 * mean_anomaly)
                + 282.634,
            360.0,
        );

        let ra = normalize((0.91764 * true_lng.to_radians().tan()).atan().to_degrees(), 360.0);
        let ra = ra + (true_lng / 90.0).floor() * 90.0 - (ra / 90.0).floor() * 90.0;

        let declination = (0.39782 * sin_deg(true_lng)).asin().to_degrees();

        let lat = pos.latitude();
        let cos_h = (cos_deg(zenith) - sin_deg(declination) * sin_deg(lat))
            / (cos_deg(declination) * cos_deg(lat));

        Self { t, ra_hours: ra / 15.0, cos_h }
    }

    fn utc(&self, crossing: Crossing, pos: &GeoPosition) -> ClockTime {
        let angle = self.cos_h.clamp(-1.0, 1.0).acos().to_degrees();
        let h = match crossing {
            Crossing::Rise => 360.0 - angle,
            Crossing::Set => angle,
        } / 15.0;
        let local_mean = h + self.ra_hours - 0.06571 * self.t - 6.622;
        ClockTime::from_hours(normalize(local_mean - pos.longitude() / 15.0, 24.0))
    }
}

/// Rise and set times in UTC for `kind` at `pos` on `date`.
///
/// The never-rises/never-sets decision is taken from the rising branch alone and
/// applies to the whole day.
pub fn compute(kind: TwilightKind, pos: &GeoPosition, date: &CalendarDate) -> SolarEvent {
    let zenith = kind.zenith_deg();
    let n = day_of_year(date);

    let rise = SunTerms::new(Crossing::Rise, n, pos, zenith);
    if rise.cos_h >= NEVER_THRESHOLD {
        return SolarEvent::NeverRises;
    }
    if rise.cos_h <= -NEVER_THRESHOLD {
        return SolarEvent::NeverSets;
    }
    let set = SunTerms::new(Crossing::Set, n, pos, zenith);

    SolarEvent::Times { rise: rise.utc(Crossing::Rise, pos), set: set.utc(Crossing::Set, pos) }
}

// ===================== TESTS =====================
