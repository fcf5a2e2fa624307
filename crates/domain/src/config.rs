//! Configuration module for Ferrous Responder
//!
//! - `root`: Main configuration and CLI overrides
//! - `server`: Listener port and binding
//! - `responder`: TTLs and message size limits handed to the query core
//! - `logging`: Logging settings
//! - `local_records`: Static zone entries seeding the registry
//! - `errors`: Configuration errors

pub mod errors;
pub mod local_records;
pub mod logging;
pub mod responder;
pub mod root;
pub mod server;

pub use errors::ConfigError;
pub use local_records::StaticRecord;
pub use logging::LoggingConfig;
pub use responder::{ResponderConfig, MAX_MESSAGE_SIZE, MIN_UDP_SIZE};
pub use root::{CliOverrides, Config};
pub use server::ServerConfig;
