//! DNS wire-format names, as passed to `resolve(bytes name, bytes data)`.
//!
//! Layout: a sequence of `[len: u8][label: len bytes]`, terminated by a zero-length label.

use thiserror::Error;

/// Longest label allowed by the DNS wire format.
pub const MAX_LABEL_LEN: usize = 63;

/// Errors while decoding a wire-format name.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DnsDecodeError {
    /// A length byte points past the end of the buffer.
    #[error("label at offset {offset} declares {len} bytes but only {remaining} remain")]
    Truncated {
        offset: usize,
        len: usize,
        remaining: usize,
    },
    #[error("label at offset {offset} is not valid UTF-8")]
    InvalidUtf8 { offset: usize },
}

/// Errors while encoding a dotted name.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DnsEncodeError {
    #[error("empty label in `{0}`")]
    EmptyLabel(String),
    #[error("label `{0}` is longer than 63 bytes")]
    LabelTooLong(String),
}

/// Decode a wire-format name into its dotted form (eg, `business.eth`).
///
/// Decoding stops at the first zero-length label, or at the end of the buffer when the
/// terminator is missing. Labels are not validated beyond UTF-8.
pub fn decode_dns_name(bytes: &[u8]) -> Result<String, DnsDecodeError> {
    let mut labels = Vec::new();
    let mut i = 0usize;

    while i < bytes.len() {
        let len = bytes[i] as usize;
        if len == 0 {
            break;
        }
        i += 1;
        let label = read_label(bytes, &mut i, len)?;
        labels.push(label);
    }

    Ok(labels.join("."))
}

fn read_label<'a>(bytes: &'a [u8], i: &mut usize, len: usize) -> Result<&'a str, DnsDecodeError> {
    let offset = *i;
    if bytes.len() < offset + len {
        return Err(DnsDecodeError::Truncated {
            offset,
            len,
            remaining: bytes.len() - offset,
        });
    }
    let label = core::str::from_utf8(&bytes[offset..offset + len])
        .map_err(|_| DnsDecodeError::InvalidUtf8 { offset })?;
    *i += len;
    Ok(label)
}

/// Encode a dotted name into wire format, including the terminating zero byte.
///
/// The empty name encodes to a single zero byte (the root).
pub fn encode_dns_name(name: &str) -> Result<Vec<u8>, DnsEncodeError> {
    let mut buf = Vec::with_capacity(name.len() + 2);
    if !name.is_empty() {
        for label in name.split('.') {
            if label.is_empty() {
                return Err(DnsEncodeError::EmptyLabel(name.to_string()));
            }
            if label.len() > MAX_LABEL_LEN {
                return Err(DnsEncodeError::LabelTooLong(label.to_string()));
            }
            buf.push(label.len() as u8);
            buf.extend_from_slice(label.as_bytes());
        }
    }
    buf.push(0);
    Ok(buf)
}
