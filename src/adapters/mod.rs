//! Adapters: concrete implementations of the hexagonal port traits.
//!
//! | Adapter        | Implements         | Connects to              |
//! |----------------|--------------------|--------------------------|
//! | `file_config`  | ConfigPort         | JSON file on disk        |
//! | `log_sink`     | EventSink          | `log` facade             |

pub mod file_config;
pub mod log_sink;
