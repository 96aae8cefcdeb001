//! Application core: pure domain logic, zero I/O.
//!
//! This module wires the fuzzy calculator to the outside world.  All
//! interaction with consoles and files happens through **port traits**
//! defined in [`ports`], keeping this layer fully testable.

pub mod commands;
pub mod events;
pub mod ports;
pub mod service;
