//! String helpers for quote text.

/// One-line preview of a quote for log lines and compact listings.
///
/// Collapses runs of whitespace (including newlines) to single spaces and
/// cuts at `max_chars` characters, appending `...` when anything was dropped.
pub fn preview(text: &str, max_chars: usize) -> String {
    let flat = text.split_whitespace().collect::<Vec<_>>().join(" ");
    if flat.chars().count() <= max_chars {
        return flat;
    }
    let keep = max_chars.saturating_sub(3);
    let mut out: String = flat.chars().take(keep).collect();
    out.truncate(out.trim_end().len());
    out.push_str("...");
    out
}
