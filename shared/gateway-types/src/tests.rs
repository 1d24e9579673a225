use alloy_primitives::B256;

use crate::dns::{decode_dns_name, encode_dns_name, DnsDecodeError, DnsEncodeError};
use crate::namehash::namehash;

fn b256(hex_str: &str) -> B256 {
    let bytes = hex::decode(hex_str).unwrap();
    B256::from_slice(&bytes)
}

#[test]
fn test_decode_three_labels() {
    let encoded = b"\x01a\x01b\x01c\x00";
    assert_eq!(decode_dns_name(encoded).unwrap(), "a.b.c");
}

#[test]
fn test_decode_business_eth() {
    let encoded = b"\x08business\x03eth\x00";
    assert_eq!(decode_dns_name(encoded).unwrap(), "business.eth");
}

#[test]
fn test_decode_empty_buffer() {
    assert_eq!(decode_dns_name(&[]).unwrap(), "");
    // Root name: just the terminator.
    assert_eq!(decode_dns_name(&[0]).unwrap(), "");
}

#[test]
fn test_decode_missing_terminator_stops_at_end() {
    let encoded = b"\x08business\x03eth";
    assert_eq!(decode_dns_name(encoded).unwrap(), "business.eth");
}

#[test]
fn test_decode_ignores_bytes_after_terminator() {
    let encoded = b"\x03eth\x00\x05extra";
    assert_eq!(decode_dns_name(encoded).unwrap(), "eth");
}

#[test]
fn test_decode_truncated_label() {
    let encoded = b"\x08busi";
    assert_eq!(
        decode_dns_name(encoded),
        Err(DnsDecodeError::Truncated {
            offset: 1,
            len: 8,
            remaining: 4,
        })
    );
}

#[test]
fn test_decode_invalid_utf8() {
    let encoded = [0x02, 0xff, 0xfe, 0x00];
    assert_eq!(
        decode_dns_name(&encoded),
        Err(DnsDecodeError::InvalidUtf8 { offset: 1 })
    );
}

#[test]
fn test_encode_matches_wire_format() {
    assert_eq!(encode_dns_name("business.eth").unwrap(), b"\x08business\x03eth\x00".to_vec());
    assert_eq!(encode_dns_name("").unwrap(), vec![0u8]);
    assert_eq!(
        decode_dns_name(&encode_dns_name("pay.acme.eth").unwrap()).unwrap(),
        "pay.acme.eth"
    );
}

#[test]
fn test_encode_rejects_bad_labels() {
    assert_eq!(
        encode_dns_name("a..eth"),
        Err(DnsEncodeError::EmptyLabel("a..eth".to_string()))
    );
    let long = "x".repeat(64);
    assert_eq!(
        encode_dns_name(&format!("{long}.eth")),
        Err(DnsEncodeError::LabelTooLong(long))
    );
}

#[test]
fn test_namehash_vectors() {
    assert_eq!(namehash(""), B256::ZERO);
    assert_eq!(
        namehash("eth"),
        b256("93cdeb708b7545dc668eb9280176169d1c33cfd8ed6f04690a0bcc88a93fc4ae")
    );
    assert_eq!(
        namehash("foo.eth"),
        b256("de9b09fd7c5f901e23a3f19fecc54828e9c848539801e86591bd9801b019f84f")
    );
}

#[test]
fn test_namehash_is_case_sensitive() {
    assert_ne!(namehash("Business.eth"), namehash("business.eth"));
}

