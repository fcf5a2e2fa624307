mod record;
mod record_type;
mod zone_entry;

pub use record::{RecordData, RecordHeader, ResourceRecord};
pub use record_type::QueryType;
pub use zone_entry::{ZoneEntry, ZoneRecord};
