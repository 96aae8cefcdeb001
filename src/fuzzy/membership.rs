//! Fuzzification of raw sensor values.
//!
//! Each input is partitioned into three overlapping linguistic labels.
//! Inside the middle band the outer labels ramp linearly while the middle
//! label stays saturated at 1; outside it one outer label saturates.
//!
//! ```text
//!  moisture  0 ──── 30 ──────────── 70 ──── 100
//!            dry=1  │ dry↘ mod=1 wet↗ │ mod↘ wet=1
//!
//!  temp      0 ──── 15 ──────────── 30 ──── 40
//!            low=1  │ low↘ mod=1 hi↗  │ mod↘ hi=1
//! ```
//!
//! Breakpoints belong to the lower band (`<=` comparisons).  The functions
//! do not clamp: callers must validate the domain first, otherwise the
//! falling `moderate` ramp goes negative past the upper bound.

use serde::Serialize;

/// Upper edge of the "dry" plateau (% moisture).
pub const MOISTURE_DRY_EDGE: f64 = 30.0;
/// Upper edge of the middle moisture band (% moisture).
pub const MOISTURE_WET_EDGE: f64 = 70.0;
/// Top of the moisture scale (% moisture).
pub const MOISTURE_MAX: f64 = 100.0;

/// Upper edge of the "low" temperature plateau (°C).
pub const TEMP_LOW_EDGE: f64 = 15.0;
/// Upper edge of the middle temperature band (°C).
pub const TEMP_HIGH_EDGE: f64 = 30.0;
/// Top of the temperature scale (°C).
pub const TEMP_MAX: f64 = 40.0;

/// Degrees of membership for a soil-moisture reading.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct MoistureMembership {
    pub dry: f64,
    pub moderate: f64,
    pub wet: f64,
}

/// Degrees of membership for an ambient-temperature reading.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct TemperatureMembership {
    pub low: f64,
    pub moderate: f64,
    pub high: f64,
}

/// Fuzzify a soil-moisture percentage.
pub fn moisture_membership(value: f64) -> MoistureMembership {
    let band = MOISTURE_WET_EDGE - MOISTURE_DRY_EDGE;
    if value <= MOISTURE_DRY_EDGE {
        MoistureMembership {
            dry: 1.0,
            moderate: 0.0,
            wet: 0.0,
        }
    } else if value <= MOISTURE_WET_EDGE {
        MoistureMembership {
            dry: (MOISTURE_WET_EDGE - value) / band,
            moderate: 1.0,
            wet: (value - MOISTURE_DRY_EDGE) / band,
        }
    } else {
        MoistureMembership {
            dry: 0.0,
            moderate: (MOISTURE_MAX - value) / (MOISTURE_MAX - MOISTURE_WET_EDGE),
            wet: 1.0,
        }
    }
}

/// Fuzzify an ambient temperature in °C.
pub fn temperature_membership(value: f64) -> TemperatureMembership {
    let band = TEMP_HIGH_EDGE - TEMP_LOW_EDGE;
    if value <= TEMP_LOW_EDGE {
        TemperatureMembership {
            low: 1.0,
            moderate: 0.0,
            high: 0.0,
        }
    } else if value <= TEMP_HIGH_EDGE {
        TemperatureMembership {
            low: (TEMP_HIGH_EDGE - value) / band,
            moderate: 1.0,
            high: (value - TEMP_LOW_EDGE) / band,
        }
    } else {
        TemperatureMembership {
            low: 0.0,
            moderate: (TEMP_MAX - value) / (TEMP_MAX - TEMP_HIGH_EDGE),
            high: 1.0,
        }
    }
}
