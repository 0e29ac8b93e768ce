//! Field validators.
//!
//! Total, side-effect-free predicates over raw field values. They never
//! fail; callers read the boolean to enable or disable an affordance.

use std::collections::BTreeSet;

/// True when the string has at least one non-whitespace character.
pub fn non_empty_string(s: &str) -> bool {
    !s.trim().is_empty()
}

/// True when the trimmed string parses to an amount `>= 0`.
///
/// Age, price and budget fields accept zero. Amounts are stored as `u32`,
/// so anything above `u32::MAX` is rejected here rather than lost later.
pub fn parses_as_non_negative_int(s: &str) -> bool {
    s.trim().parse::<u32>().is_ok()
}

/// True when the trimmed string parses to an amount `> 0`.
pub fn parses_as_positive_int(s: &str) -> bool {
    matches!(s.trim().parse::<u32>(), Ok(n) if n > 0)
}

/// True when the optional selection is present.
pub fn is_set<T>(value: &Option<T>) -> bool {
    value.is_some()
}

/// True when the set has at least one member.
pub fn non_empty_set<T>(set: &BTreeSet<T>) -> bool {
    !set.is_empty()
}

/// True when either contact method is filled in.
pub fn has_at_least_one_contact(phone: &str, email: &str) -> bool {
    non_empty_string(phone) || non_empty_string(email)
}

/// True when `lo <= n <= hi`.
pub fn in_range(n: i64, lo: i64, hi: i64) -> bool {
    (lo..=hi).contains(&n)
}
