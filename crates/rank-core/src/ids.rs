//! Session-local task ID generation.
//!
//! IDs look like `m3k9x2ab417`: the current Unix time in milliseconds written
//! in base 36, followed by a random decimal suffix below 1000. They are only
//! unique enough for one interactive session; the collection that stores them
//! re-rolls on collision.

use chrono::Utc;

/// Exclusive upper bound of the random suffix.
pub const SUFFIX_BOUND: u16 = 1000;

/// Generate a fresh task ID from the wall clock and a random suffix.
#[must_use]
pub fn generate_task_id() -> String {
    let millis = u64::try_from(Utc::now().timestamp_millis()).unwrap_or_default();
    format_task_id(millis, random_suffix())
}

/// Build a task ID from its two components.
#[must_use]
pub fn format_task_id(millis: u64, suffix: u16) -> String {
    format!("{}{}", to_base36(millis), suffix % SUFFIX_BOUND)
}

fn random_suffix() -> u16 {
    let mut bytes = [0u8; 2];
    if getrandom::fill(&mut bytes).is_err() {
        // No entropy source: sub-second nanos still vary between calls.
        let nanos = Utc::now().timestamp_subsec_nanos();
        return u16::try_from(nanos % u32::from(SUFFIX_BOUND)).unwrap_or_default();
    }
    u16::from_le_bytes(bytes) % SUFFIX_BOUND
}

/// Lowercase base-36 rendering, matching JavaScript's `Number#toString(36)`.
fn to_base36(mut value: u64) -> String {
    const DIGITS: &[u8; 36] = b"0123456789abcdefghijklmnopqrstuvwxyz";
    if value == 0 {
        return "0".to_string();
    }
    let mut out = Vec::new();
    while value > 0 {
        out.push(DIGITS[(value % 36) as usize]);
        value /= 36;
    }
    out.reverse();
    String::from_utf8(out).unwrap_or_default()
}
