//! Mapping between `ferrous_responder_domain::QueryType` and
//! `hickory_proto::rr::RecordType`.

use ferrous_responder_domain::QueryType;
use hickory_proto::rr::RecordType as HickoryRecordType;

pub struct RecordTypeMapper;

impl RecordTypeMapper {
    /// Anything other than A, AAAA and PTR keeps its wire value in `Other`.
    pub fn from_hickory(record_type: HickoryRecordType) -> QueryType {
        match record_type {
            HickoryRecordType::A => QueryType::A,
            HickoryRecordType::AAAA => QueryType::AAAA,
            HickoryRecordType::PTR => QueryType::PTR,
            other => QueryType::Other(u16::from(other)),
        }
    }

    /// Used for encoding and for log output, where hickory knows the mnemonic
    /// of every type.
    pub fn to_hickory(query_type: QueryType) -> HickoryRecordType {
        HickoryRecordType::from(query_type.to_u16())
    }
}
