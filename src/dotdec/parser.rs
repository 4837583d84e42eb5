//! Parser for dot-decimal integer strings and IPv4 validation

use std::ops::RangeInclusive;

use crate::error::FormatError;

/// Number of octets in an IPv4 address
const OCTET_COUNT: usize = 4;

/// Inclusive value range of a single octet
const OCTET_RANGE: RangeInclusive<i64> = 0..=255;

/// Parse a dot-decimal string into the list of integers it encodes.
///
/// `"22.4.5"` parses to `[22, 4, 5]`. Every dot-separated part must be a
/// base-10 integer literal (an optional leading sign is accepted). The empty
/// string splits into one empty part, so it fails like any other malformed
/// part.
pub fn parse(s: &str) -> Result<Vec<i64>, FormatError> {
    s.split('.')
        .map(|part| {
            part.parse().map_err(|_| FormatError::InvalidInteger {
                part: part.to_string(),
                input: s.to_string(),
            })
        })
        .collect()
}

/// Validate a dot-decimal string as an IPv4 address.
///
/// Returns the four octets when the string holds exactly four integers, each
/// between 0 and 255 inclusive. Every failure mode, malformed integers
/// included, is a normal validation outcome and maps to `None`; no error
/// reaches the caller.
pub fn parse_ipv4(s: &str) -> Option<Vec<i64>> {
    let nums = match parse(s) {
        Ok(nums) => nums,
        Err(e) => {
            tracing::debug!("not an IPv4 address: {}", e);
            return None;
        }
    };

    if nums.len() == OCTET_COUNT && nums.iter().all(|n| OCTET_RANGE.contains(n)) {
        Some(nums)
    } else {
        None
    }
}
