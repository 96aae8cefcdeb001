//! Integration test driver for `tests/integration/` submodule.
//!
//! Each `mod` below maps to a file that exercises a specific subsystem
//! against mock adapters.  Nothing touches the console or the real
//! filesystem except `config_flow_tests`, which uses a temp directory.

mod config_flow_tests;
mod mock_sink;
mod service_tests;
