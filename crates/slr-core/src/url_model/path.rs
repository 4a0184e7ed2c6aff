//! Identifier captures from URL paths.
//!
//! A marker such as `/app/` may appear anywhere in the path; every
//! occurrence is tried in order and the first acceptable segment wins. The
//! segment runs up to the next `/` (or the end of the path), so trailing
//! slashes and subpaths never leak into a capture.

/// Segments following each occurrence of `marker`, left to right.
/// Occurrences may overlap (`/app/app/5` yields `"app"` then `"5"`).
fn segments_after<'a>(path: &'a str, marker: &'a str) -> impl Iterator<Item = &'a str> + 'a {
    let mut from = 0;
    std::iter::from_fn(move || {
        let at = from + path.get(from..)?.find(marker)?;
        from = at + 1;
        let rest = &path[at + marker.len()..];
        Some(rest.split('/').next().unwrap_or(""))
    })
}

/// First non-empty segment following `marker`.
pub fn segment_after<'a>(path: &'a str, marker: &'a str) -> Option<&'a str> {
    segments_after(path, marker).find(|s| !s.is_empty())
}

/// First segment following `marker` made only of ASCII decimal digits.
/// Segments such as `notanumber` or `12ab` are rejected, not coerced.
pub fn numeric_after<'a>(path: &'a str, marker: &'a str) -> Option<&'a str> {
    segments_after(path, marker).find(|s| !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit()))
}
