//! Shared serde helper functions.

/// Serde default function that returns `true`.
///
/// Used for output switches that are enabled unless turned off explicitly.
pub fn default_true() -> bool {
    true
}
