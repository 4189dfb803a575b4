//! Room-type labels and the capacities they imply.

/// Capacity used when a label names no known room type.
pub const FALLBACK_CAPACITY: i32 = 3;

/// Capacity implied by a room-type label such as `"2-Seater"`.
///
/// Matching is case-insensitive; a bare digit (`"1"`) also counts.
/// Unrecognised labels fall back to [`FALLBACK_CAPACITY`].
pub fn capacity_for_room_type(label: &str) -> i32 {
    let label = label.trim().to_ascii_lowercase();
    for n in 1..=3 {
        if label.contains(&format!("{n}-seater")) || label == n.to_string() {
            return n;
        }
    }
    FALLBACK_CAPACITY
}

/// Whether a stored room type satisfies a requested one. Untyped rooms match anything.
pub fn room_type_matches(stored: Option<&str>, requested: &str) -> bool {
    match stored {
        None => true,
        Some(stored) => stored.trim().eq_ignore_ascii_case(requested.trim()),
    }
}
