//! Ferrous Responder Application Layer
//!
//! Turns a parsed query plus registry candidates into a finished reply.
pub mod ports;
pub mod services;
pub mod use_cases;
