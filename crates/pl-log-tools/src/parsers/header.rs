//! `PING <target> [(<address>)]` header line parser.

use regex::Regex;
use std::sync::LazyLock;

use crate::types::ProbeTarget;

// PING host (addr) ... | PING addr ...
static RE_HEADER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"PING\s+(\S+)(?:\s+\((\S+)\))?").unwrap());

/// Extract the probe target from a header line.
///
/// With a parenthesized second token the first token is the hostname and
/// the second the address; otherwise the first token alone is the address.
pub fn parse_header(line: &str) -> Option<ProbeTarget> {
    let caps = RE_HEADER.captures(line)?;
    let first = caps[1].to_string();

    let target = match caps.get(2) {
        Some(addr) => ProbeTarget {
            ip: addr.as_str().trim_matches(['(', ')']).to_string(),
            hostname: Some(first),
        },
        None => ProbeTarget {
            ip: first,
            hostname: None,
        },
    };
    Some(target)
}
