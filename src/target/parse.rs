use memchr::memchr;

use crate::target::{Target, TargetError, TargetResult};

#[inline]
#[tracing::instrument(level = "trace", skip(input), fields(target_len = input.len() as u64))]
pub fn parse_target(input: &str) -> TargetResult<Target> {
    if input.is_empty() {
        return Err(TargetError::Empty);
    }

    if let Some((index, byte)) = input
        .bytes()
        .enumerate()
        .find(|&(_, byte)| byte < 0x20 || byte == 0x7f)
    {
        return Err(TargetError::ControlByte {
            input: input.to_string(),
            byte,
            index,
        });
    }

    // fragments never participate in matching or write-back
    let without_fragment = match memchr(b'#', input.as_bytes()) {
        Some(pos) => &input[..pos],
        None => input,
    };

    let (raw_target, query) = match memchr(b'?', without_fragment.as_bytes()) {
        Some(pos) => (
            &without_fragment[..pos],
            Some(without_fragment[pos + 1..].to_string()),
        ),
        None => (without_fragment, None),
    };

    let raw_path = strip_scheme_and_authority(raw_target);
    let path = decode_raw_path(raw_path)?;

    Ok(Target {
        path,
        raw_path: raw_path.to_string(),
        query,
    })
}

/// An absolute rewrite target contributes only its path component; the
/// scheme and authority are discarded.
fn strip_scheme_and_authority(raw_target: &str) -> &str {
    if raw_target.starts_with('/') {
        return raw_target;
    }

    let Some(sep) = raw_target.find("://") else {
        return raw_target;
    };

    let mut scheme = raw_target[..sep].bytes();
    let valid_scheme = match scheme.next() {
        Some(byte) if byte.is_ascii_alphabetic() => scheme
            .all(|byte| byte.is_ascii_alphanumeric() || matches!(byte, b'+' | b'-' | b'.')),
        _ => false,
    };

    if !valid_scheme {
        return raw_target;
    }

    let after_scheme = &raw_target[sep + 3..];
    match memchr(b'/', after_scheme.as_bytes()) {
        Some(pos) => &after_scheme[pos..],
        None => "",
    }
}

fn decode_raw_path(raw_path: &str) -> TargetResult<String> {
    let bytes = raw_path.as_bytes();
    let mut output = Vec::with_capacity(bytes.len());
    let mut idx = 0usize;

    while idx < bytes.len() {
        let byte = bytes[idx];
        if byte == b'%' {
            if idx + 2 >= bytes.len() {
                return Err(TargetError::InvalidPercentEncoding {
                    input: raw_path.to_string(),
                    index: idx,
                });
            }

            let value = decode_hex_pair(bytes[idx + 1], bytes[idx + 2]).ok_or_else(|| {
                TargetError::InvalidPercentEncoding {
                    input: raw_path.to_string(),
                    index: idx,
                }
            })?;

            output.push(value);
            idx += 3;
            continue;
        }

        output.push(byte);
        idx += 1;
    }

    String::from_utf8(output).map_err(|_| TargetError::InvalidUtf8AfterDecoding {
        input: raw_path.to_string(),
    })
}

fn decode_hex_pair(hi: u8, lo: u8) -> Option<u8> {
    fn val(byte: u8) -> Option<u8> {
        match byte {
            b'0'..=b'9' => Some(byte - b'0'),
            b'a'..=b'f' => Some(byte - b'a' + 10),
            b'A'..=b'F' => Some(byte - b'A' + 10),
            _ => None,
        }
    }

    Some(val(hi)? << 4 | val(lo)?)
}
