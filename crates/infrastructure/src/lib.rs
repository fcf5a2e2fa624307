//! Ferrous Responder Infrastructure Layer
pub mod dns;
pub mod registry;
