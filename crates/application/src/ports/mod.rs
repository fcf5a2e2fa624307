mod reply_encoder;
mod zone_registry;

pub use reply_encoder::{EncodedReply, ReplyEncoder};
pub use zone_registry::{ZoneRecordRef, ZoneRegistry};
