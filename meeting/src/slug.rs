//! Room-label canonicalization.
//!
//! Appointment slugs are generated from the appointment title by the same
//! rule applied here, so re-deriving the slug from whatever label the user
//! typed is what makes the lookup land on the right row.

/// Canonicalizes a raw room label into the stored slug form.
///
/// The label is split on `-`. Segments that do not parse as a number get
/// their first character upper-cased with the remainder untouched; numeric
/// segments pass through unchanged. Segments are rejoined with `-`.
pub fn canonicalize(raw: &str) -> String {
    raw.split('-')
        .map(capitalize_segment)
        .collect::<Vec<_>>()
        .join("-")
}

fn capitalize_segment(segment: &str) -> String {
    if is_numeric(segment) {
        return segment.to_owned();
    }

    let mut chars = segment.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

// The float parser alone would also accept textual forms like "inf" and
// "nan"; a numeric segment must start with something other than a letter.
fn is_numeric(segment: &str) -> bool {
    segment.parse::<f64>().is_ok()
        && segment.chars().next().is_some_and(|c| !c.is_alphabetic())
}
