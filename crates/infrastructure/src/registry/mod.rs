pub mod static_registry;

pub use static_registry::StaticZoneRegistry;
