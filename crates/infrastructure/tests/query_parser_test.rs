mod helpers;

use ferrous_responder_domain::{DomainError, OpCode, QueryClass, QueryType, Transport};
use ferrous_responder_infrastructure::dns::parse_query;
use helpers::QueryBytes;

#[test]
fn test_plain_a_query() {
    let buf = QueryBytes::a("host.local").id(0xBEEF).build();
    let query = parse_query(&buf, Transport::Datagram).unwrap();

    assert_eq!(query.id, 0xBEEF);
    assert_eq!(&*query.name, "host.local");
    assert_eq!(query.query_type, QueryType::A);
    assert_eq!(query.query_class, QueryClass::IN);
    assert_eq!(query.opcode, OpCode::Query);
    assert_eq!(query.transport, Transport::Datagram);
    assert!(query.recursion_desired);
    assert!(!query.has_edns());
}

#[test]
fn test_recursion_desired_cleared() {
    let buf = QueryBytes::a("host.local").flags(0x0000).build();
    let query = parse_query(&buf, Transport::Stream).unwrap();
    assert!(!query.recursion_desired);
    assert_eq!(query.transport, Transport::Stream);
}

#[test]
fn test_name_case_preserved() {
    let buf = QueryBytes::aaaa("WWW.Example.LOCAL").build();
    let query = parse_query(&buf, Transport::Datagram).unwrap();
    assert_eq!(&*query.name, "WWW.Example.LOCAL");
    assert_eq!(query.query_type, QueryType::AAAA);
    assert_eq!(
        query.wire_name.as_deref(),
        Some(QueryBytes::aaaa("WWW.Example.LOCAL").wire_name().as_slice())
    );
}

#[test]
fn test_dot_inside_label_stays_one_label() {
    let packet = QueryBytes::from_labels(vec![b"a.b".to_vec(), b"local".to_vec()], 1);
    let query = parse_query(&packet.build(), Transport::Datagram).unwrap();

    assert_eq!(&*query.name, "a\\.b.local");
    assert_eq!(
        query.wire_name.as_deref(),
        Some(&[3, b'a', b'.', b'b', 5, b'l', b'o', b'c', b'a', b'l', 0][..])
    );
}

#[test]
fn test_binary_label_accepted() {
    let packet = QueryBytes::from_labels(vec![b"h\xffst".to_vec(), b"local".to_vec()], 1);
    let query = parse_query(&packet.build(), Transport::Datagram).unwrap();

    assert_eq!(&*query.name, "h\\377st.local");
    assert_eq!(query.wire_name.as_deref(), Some(packet.wire_name().as_slice()));
}

#[test]
fn test_root_question() {
    let buf = QueryBytes::new("", 2).build();
    let query = parse_query(&buf, Transport::Datagram).unwrap();
    assert_eq!(&*query.name, "");
    assert_eq!(query.wire_name.as_deref(), Some(&[0u8][..]));
}

#[test]
fn test_edns_payload_size_extracted() {
    let buf = QueryBytes::a("host.local").edns(1232).build();
    let query = parse_query(&buf, Transport::Datagram).unwrap();
    assert_eq!(query.edns_payload_size, Some(1232));
}

#[test]
fn test_edns_payload_below_floor_reads_as_512() {
    let buf = QueryBytes::a("host.local").edns(256).build();
    let query = parse_query(&buf, Transport::Datagram).unwrap();
    assert_eq!(query.edns_payload_size, Some(512));
}

#[test]
fn test_unserved_type_and_class_passed_through() {
    let buf = QueryBytes::new("host.local", 15).class(3).build();
    let query = parse_query(&buf, Transport::Datagram).unwrap();
    assert_eq!(query.query_type, QueryType::Other(15));
    assert_eq!(query.query_class, QueryClass(3));
}

#[test]
fn test_opcode_extracted() {
    let buf = QueryBytes::a("host.local").opcode(2).build();
    let query = parse_query(&buf, Transport::Datagram).unwrap();
    assert_eq!(query.opcode, OpCode::Other(2));
    assert!(query.recursion_desired);
}

#[test]
fn test_reverse_name_query() {
    let buf = QueryBytes::ptr("5.0.0.10.in-addr.arpa").build();
    let query = parse_query(&buf, Transport::Datagram).unwrap();
    assert_eq!(query.query_type, QueryType::PTR);
    assert_eq!(&*query.name, "5.0.0.10.in-addr.arpa");
}

#[test]
fn test_response_rejected() {
    let buf = QueryBytes::a("host.local").flags(0x8100).build();
    assert!(matches!(
        parse_query(&buf, Transport::Datagram),
        Err(DomainError::MalformedQuery(_))
    ));
}

#[test]
fn test_short_buffer_rejected() {
    let buf = [0x12, 0x34, 0x01, 0x00, 0x00, 0x01];
    assert!(parse_query(&buf, Transport::Datagram).is_err());
}

#[test]
fn test_truncated_question_rejected() {
    let mut buf = QueryBytes::a("host.local").build();
    buf.truncate(buf.len() - 3);
    assert!(parse_query(&buf, Transport::Datagram).is_err());
}

#[test]
fn test_multiple_questions_rejected() {
    let mut buf = QueryBytes::a("host.local").build();
    buf[5] = 2;
    assert!(parse_query(&buf, Transport::Datagram).is_err());
}

#[test]
fn test_self_referencing_question_pointer_rejected() {
    let mut buf = vec![
        0x12, 0x34, 0x01, 0x00, 0x00, 0x01, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    ];
    buf.extend_from_slice(&[0xC0, 0x0C, 0x00, 0x01, 0x00, 0x01]);
    assert!(parse_query(&buf, Transport::Datagram).is_err());
}

#[test]
fn test_overlong_name_rejected() {
    let label = "a".repeat(63);
    let name = vec![label.as_str(); 5].join(".");
    let buf = QueryBytes::a(&name).build();
    assert!(parse_query(&buf, Transport::Datagram).is_err());
}

#[test]
fn test_truncated_opt_record_rejected() {
    let mut buf = QueryBytes::a("host.local").edns(4096).build();
    buf.truncate(buf.len() - 4);
    assert!(parse_query(&buf, Transport::Datagram).is_err());
}

#[test]
fn test_opt_found_after_other_additional_record() {
    let mut buf = QueryBytes::a("host.local").build();
    buf[11] = 2;
    // A record pointing back at the question name.
    buf.extend_from_slice(&[0xC0, 0x0C, 0x00, 0x01, 0x00, 0x01]);
    buf.extend_from_slice(&[0x00, 0x00, 0x00, 0x3C, 0x00, 0x04, 10, 0, 0, 1]);
    helpers::append_opt_record(&mut buf, 2048);

    let query = parse_query(&buf, Transport::Datagram).unwrap();
    assert_eq!(query.edns_payload_size, Some(2048));
}
