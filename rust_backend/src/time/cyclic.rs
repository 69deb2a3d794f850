use chrono::Timelike;
use qtty::{HourAngles, Radians};
use serde::{Deserialize, Serialize};

use crate::error::{KataError, KataResult};

/// Hours in one full cycle of the clock.
pub const HOURS_PER_DAY: i64 = 24;

/// An hour of the day in `[0, 24)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "i64", into = "i64")]
pub struct HourOfDay(u8);

impl HourOfDay {
    /// Validate `hour`, failing with [`KataError::InvalidHour`] outside `[0, 24)`.
    ///
    /// # Example
    /// ```
    /// use kata_rust::time::HourOfDay;
    ///
    /// assert_eq!(HourOfDay::new(23).unwrap().value(), 23);
    /// assert!(HourOfDay::new(24).is_err());
    /// ```
    pub fn new(hour: i64) -> KataResult<Self> {
        if !(0..HOURS_PER_DAY).contains(&hour) {
            return Err(KataError::InvalidHour(hour));
        }
        Ok(Self(hour as u8))
    }

    /// Hour component of any chrono time value.
    pub fn from_timelike<T: Timelike>(time: &T) -> Self {
        // chrono guarantees hour() < 24
        Self(time.hour() as u8)
    }

    pub fn value(self) -> u8 {
        self.0
    }

    /// Position on the clock face; one hour is 15°, a day is a full turn.
    pub fn angle(self) -> HourAngles {
        HourAngles::new(f64::from(self.0))
    }

    pub fn to_cyclic_point(self) -> CyclicPoint {
        let (sin, cos) = self.angle().sin_cos();
        CyclicPoint { sin, cos }
    }

    /// Shortest distance around the clock, in `[0, 12]`.
    pub fn distance_to(self, other: HourOfDay) -> u32 {
        let diff = (i64::from(other.0) - i64::from(self.0)).rem_euclid(HOURS_PER_DAY);
        let shortest = if diff > HOURS_PER_DAY / 2 {
            HOURS_PER_DAY - diff
        } else {
            diff
        };
        shortest as u32
    }
}

impl TryFrom<i64> for HourOfDay {
    type Error = KataError;

    fn try_from(hour: i64) -> Result<Self, Self::Error> {
        Self::new(hour)
    }
}

impl From<HourOfDay> for i64 {
    fn from(hour: HourOfDay) -> Self {
        i64::from(hour.0)
    }
}

/// Unit-circle encoding of an hour of the day.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CyclicPoint {
    pub sin: f64,
    pub cos: f64,
}

impl CyclicPoint {
    /// Decode back to a fractional hour in `[0, 24)`.
    ///
    /// Points off the unit circle decode by direction only.
    pub fn to_hour(&self) -> f64 {
        let angle = Radians::new(self.sin.atan2(self.cos)).wrap_pos();
        let hours = angle.to::<qtty::HourAngle>().value();
        // wrap_pos can land exactly on a full turn after the unit conversion
        if hours >= HOURS_PER_DAY as f64 {
            0.0
        } else {
            hours
        }
    }
}

impl From<CyclicPoint> for (f64, f64) {
    fn from(point: CyclicPoint) -> Self {
        (point.sin, point.cos)
    }
}

/// Encode an hour as `(sin, cos)` of `(hour / 24) * 2π`.
///
/// # Errors
/// [`KataError::InvalidHour`] if `hour` is outside `[0, 24)`.
///
/// # Example
/// ```
/// use kata_rust::time::hour_to_cyclic_point;
///
/// assert_eq!(hour_to_cyclic_point(0).unwrap(), (0.0, 1.0));
/// assert!(hour_to_cyclic_point(-1).is_err());
/// ```
pub fn hour_to_cyclic_point(hour: i64) -> KataResult<(f64, f64)> {
    Ok(HourOfDay::new(hour)?.to_cyclic_point().into())
}

/// Shortest number of hours between `start` and `end` on a 24-hour clock.
///
/// # Errors
/// [`KataError::InvalidHour`] for the first argument outside `[0, 24)`.
///
/// # Example
/// ```
/// use kata_rust::time::circular_hour_difference;
///
/// assert_eq!(circular_hour_difference(23, 1).unwrap(), 2);
/// assert_eq!(circular_hour_difference(12, 18).unwrap(), 6);
/// ```
pub fn circular_hour_difference(start: i64, end: i64) -> KataResult<u32> {
    let start = HourOfDay::new(start)?;
    let end = HourOfDay::new(end)?;
    Ok(start.distance_to(end))
}
