//! Sprinkler, a fuzzy-logic irrigation advisor.
//!
//! Recommends a watering duration (and the water volume it implies) from a
//! soil-moisture reading and an ambient temperature.  The inference core in
//! [`fuzzy`] and [`calculator`] is pure and synchronous; the [`app`] layer
//! and [`adapters`] connect it to logs, config files, and the CLI.

#![deny(unused_must_use)]

pub mod adapters;
pub mod app;
pub mod calculator;
pub mod config;
pub mod error;
pub mod fuzzy;
pub mod pattern;
pub mod progress;

pub use calculator::{NoWateringReason, Recommendation, WateringCalculator, WateringResult};
pub use error::{Error, Result, ValidationError};
