mod header_builder;
mod reply_assembler;
mod truncation_policy;

pub use header_builder::HeaderBuilder;
pub use reply_assembler::{ReplyAssembler, ReplyKind};
pub use truncation_policy::TruncationPolicy;
