//! Label → identifier fragment mapping.
//!
//! Every class and instance identifier in the output is derived from exactly
//! one human-readable label through [`sanitize`]. Characters outside the
//! forbidden set pass through unchanged, including ones some Turtle consumers
//! reject in prefixed names; the conformance suite is where those surface.

/// Characters replaced by `_`.
pub const FORBIDDEN: [char; 4] = [' ', ',', '.', '%'];

/// Replacement written for each forbidden character.
pub const REPLACEMENT: char = '_';

/// Maps a label to a fragment safe to embed as a bare identifier.
///
/// Each occurrence of space, comma, period and percent becomes a single `_`.
/// No case folding, no trimming, no collision detection: two labels that
/// differ only in forbidden characters map to the same fragment.
#[must_use]
pub fn sanitize(label: &str) -> String {
    label
        .chars()
        .map(|c| if FORBIDDEN.contains(&c) { REPLACEMENT } else { c })
        .collect()
}

/// Returns true if `fragment` contains none of the forbidden characters.
#[must_use]
pub fn is_sanitized(fragment: &str) -> bool {
    !fragment.contains(FORBIDDEN)
}
