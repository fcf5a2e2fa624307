//! Ferrous Responder Domain Layer
pub mod config;
pub mod dns_query;
pub mod dns_record;
pub mod errors;
pub mod reply;
pub mod reverse_name;

pub use config::{
    CliOverrides, Config, ConfigError, LoggingConfig, ResponderConfig, ServerConfig, StaticRecord,
    MAX_MESSAGE_SIZE, MIN_UDP_SIZE,
};
pub use dns_query::{OpCode, Query, QueryClass, Transport};
pub use dns_record::{QueryType, RecordData, RecordHeader, ResourceRecord, ZoneEntry, ZoneRecord};
pub use errors::DomainError;
pub use reply::{Question, Reply, ResponseCode};
pub use reverse_name::{parse_reverse_name, reverse_name};
