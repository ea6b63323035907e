use memchr::memchr;
use regex::{Captures, Regex};
use smallvec::SmallVec;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TemplatePart {
    Literal(String),
    Group(usize),
}

/// A replacement template pre-resolved against a pattern's capture groups.
///
/// `$N`/`${N}` and `$name`/`${name}` become `Group` parts when the pattern
/// defines such a group; references to groups the pattern does not define
/// stay behind as the literal reference text. `$$` is a literal dollar.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Template {
    parts: SmallVec<[TemplatePart; 4]>,
}

enum Reference<'t> {
    Escaped,
    Positional { digits: &'t str, len: usize },
    Named { name: &'t str, len: usize },
    Bare,
}

impl Template {
    pub fn compile(template: &str, pattern: &Regex) -> Self {
        let mut parts: SmallVec<[TemplatePart; 4]> = SmallVec::new();
        let mut literal = String::new();
        let bytes = template.as_bytes();
        let mut idx = 0usize;

        while idx < bytes.len() {
            let Some(rel) = memchr(b'$', &bytes[idx..]) else {
                literal.push_str(&template[idx..]);
                break;
            };

            literal.push_str(&template[idx..idx + rel]);
            let dollar = idx + rel;

            match parse_reference(&template[dollar..]) {
                Reference::Escaped => {
                    literal.push('$');
                    idx = dollar + 2;
                }
                Reference::Positional { digits, len } => {
                    match digits.parse::<usize>() {
                        Ok(group) if group < pattern.captures_len() => {
                            flush_literal(&mut literal, &mut parts);
                            parts.push(TemplatePart::Group(group));
                        }
                        // the pattern has no such group; keep the reference text
                        _ => literal.push_str(&template[dollar..dollar + len]),
                    }
                    idx = dollar + len;
                }
                Reference::Named { name, len } => {
                    match resolve_named_group(pattern, name) {
                        Some(group) => {
                            flush_literal(&mut literal, &mut parts);
                            parts.push(TemplatePart::Group(group));
                        }
                        None => literal.push_str(&template[dollar..dollar + len]),
                    }
                    idx = dollar + len;
                }
                Reference::Bare => {
                    literal.push('$');
                    idx = dollar + 1;
                }
            }
        }

        flush_literal(&mut literal, &mut parts);

        Template { parts }
    }

    pub fn expand(&self, caps: &Captures<'_>) -> String {
        let mut out = String::new();

        for part in &self.parts {
            match part {
                TemplatePart::Literal(text) => out.push_str(text),
                TemplatePart::Group(group) => {
                    // a group that matched nothing expands to the empty string
                    if let Some(found) = caps.get(*group) {
                        out.push_str(found.as_str());
                    }
                }
            }
        }

        out
    }

    #[cfg(test)]
    pub fn parts(&self) -> &[TemplatePart] {
        &self.parts
    }
}

/// `rest` starts at a `$`.
fn parse_reference(rest: &str) -> Reference<'_> {
    let bytes = rest.as_bytes();

    match bytes.get(1) {
        Some(b'$') => Reference::Escaped,
        Some(b'{') => {
            let Some(close) = memchr(b'}', bytes) else {
                return Reference::Bare;
            };
            let inner = &rest[2..close];
            if !inner.is_empty() && inner.bytes().all(|byte| byte.is_ascii_digit()) {
                Reference::Positional {
                    digits: inner,
                    len: close + 1,
                }
            } else if is_identifier(inner) {
                Reference::Named {
                    name: inner,
                    len: close + 1,
                }
            } else {
                Reference::Bare
            }
        }
        Some(byte) if byte.is_ascii_digit() => {
            let mut end = 1usize;
            while end < bytes.len() && bytes[end].is_ascii_digit() {
                end += 1;
            }
            Reference::Positional {
                digits: &rest[1..end],
                len: end,
            }
        }
        Some(byte) if byte.is_ascii_alphabetic() || *byte == b'_' => {
            let mut end = 1usize;
            while end < bytes.len() && (bytes[end].is_ascii_alphanumeric() || bytes[end] == b'_') {
                end += 1;
            }
            Reference::Named {
                name: &rest[1..end],
                len: end,
            }
        }
        _ => Reference::Bare,
    }
}

fn is_identifier(text: &str) -> bool {
    let mut bytes = text.bytes();
    match bytes.next() {
        Some(byte) if byte.is_ascii_alphabetic() || byte == b'_' => {
            bytes.all(|byte| byte.is_ascii_alphanumeric() || byte == b'_')
        }
        _ => false,
    }
}

fn resolve_named_group(pattern: &Regex, name: &str) -> Option<usize> {
    pattern
        .capture_names()
        .position(|candidate| candidate == Some(name))
}

fn flush_literal(literal: &mut String, parts: &mut SmallVec<[TemplatePart; 4]>) {
    if literal.is_empty() {
        return;
    }

    parts.push(TemplatePart::Literal(std::mem::take(literal)));
}
