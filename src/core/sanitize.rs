// src/core/sanitize.rs

/// Collapse runs of whitespace (including NBSP) to one space and trim.
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

/// Table header text → field key: "First\nelected" → "first_elected".
pub fn header_key(s: &str) -> String {
    normalize_ws(s).replace(' ', "_").to_lowercase()
}

/// Page title → file stem: "Draft:Jane Doe" → "Draft_Jane_Doe".
/// Anything other than letters, digits, `-`, `'` and `.` collapses to `_`.
pub fn sanitize_page_filename(title: &str) -> String {
    let mut out = String::with_capacity(title.len());
    let mut last_us = false;
    for ch in title.chars() {
        if ch.is_alphanumeric() || ch == '-' || ch == '\'' || ch == '.' {
            out.push(ch);
            last_us = false;
        } else if !last_us {
            out.push('_');
            last_us = true;
        }
    }
    let out = out.trim_matches(|c| c == '_' || c == '.').to_string();
    if out.is_empty() { s!("untitled") } else { out }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ws_collapses_nbsp() {
        assert_eq!(normalize_ws(" Alabama\u{a0}1 \n"), "Alabama 1");
    }

    #[test]
    fn header_keys() {
        assert_eq!(header_key("Candidates\n"), "candidates");
        assert_eq!(header_key("First\nelected"), "first_elected");
        assert_eq!(header_key(" Cook  PVI "), "cook_pvi");
    }

    #[test]
    fn page_filenames() {
        assert_eq!(sanitize_page_filename("Draft:Jane Doe"), "Draft_Jane_Doe");
        assert_eq!(sanitize_page_filename("Mary-Jane O'Brien Jr"), "Mary-Jane_O'Brien_Jr");
        assert_eq!(sanitize_page_filename("../.."), "untitled");
        assert_eq!(sanitize_page_filename("///"), "untitled");
    }
}
