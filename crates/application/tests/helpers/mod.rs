#![allow(unused_imports)]

mod mock_encoder;
mod mock_registry;

pub use mock_encoder::{BrokenEncoder, RejectingEncoder, SizingEncoder};
pub use mock_registry::{entries, MockZoneRegistry};
