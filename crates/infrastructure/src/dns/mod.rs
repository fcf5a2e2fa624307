pub mod query_parser;
pub mod record_type_map;
pub mod reply_encoder;
pub mod server;

pub use query_parser::parse_query;
pub use record_type_map::RecordTypeMapper;
pub use reply_encoder::HickoryReplyEncoder;
pub use server::DnsServerHandler;
