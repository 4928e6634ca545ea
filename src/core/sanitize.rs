// src/core/sanitize.rs

/// Collapse runs of whitespace (newlines included) into one space and trim.
pub fn normalize_ws(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut prev_space = false;
    for ch in s.chars() {
        if ch.is_whitespace() {
            if !prev_space { out.push(' '); prev_space = true; }
        } else { out.push(ch); prev_space = false; }
    }
    out.trim().to_string()
}

/// One-line preview of at most `max` chars, with an ellipsis when cut.
pub fn preview(s: &str, max: usize) -> String {
    let flat = normalize_ws(s);
    if flat.chars().count() <= max {
        return flat;
    }
    let mut out: String = flat.chars().take(max.saturating_sub(1)).collect();
    out.push('…');
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ws_collapses_line_breaks() {
        assert_eq!(normalize_ws("  Great\n\n service \t here "), "Great service here");
    }

    #[test]
    fn preview_cuts_on_chars_not_bytes() {
        assert_eq!(preview("żółw żółw", 5), "żółw…");
        assert_eq!(preview("short", 10), "short");
    }
}
