//! Hour-of-day features.
//!
//! - [`cyclic`]: sine/cosine encoding of an hour and circular hour distances

pub mod cyclic;

pub use cyclic::{
    circular_hour_difference, hour_to_cyclic_point, CyclicPoint, HourOfDay, HOURS_PER_DAY,
};
