// src/normalize/name.rs
//
// "SURNAME, GIVEN [SUFFIX]" → "Given Surname [Suffix]".
// Already-normalized "Given Surname [Suffix...]" input comes back unchanged.

const HONORIFICS: &[&str] = &["mr", "mrs", "dr", "md"];

// iii before ii
const SUFFIXES: &[(&str, &str)] = &[
    ("iii", "III"),
    ("ii", "II"),
    ("iv", "IV"),
    ("jr", "Jr"),
    ("sr", "Sr"),
    ("esq", "Esq"),
];

pub fn normalize_name(name: &str) -> String {
    let mut rest = trim_tail(name.trim());
    if rest.is_empty() {
        return s!();
    }

    for honorific in HONORIFICS {
        if let Some(head) = strip_token(rest, honorific) {
            rest = trim_tail(head);
        }
    }

    let mut to_append: Vec<&str> = Vec::new();
    loop {
        let mut stripped = false;
        for &(raw, canonical) in SUFFIXES {
            if let Some(head) = strip_token(rest, raw) {
                to_append.push(canonical);
                rest = trim_tail(head);
                stripped = true;
            }
        }
        if !stripped {
            break;
        }
    }

    let reordered = match rest.split_once(',') {
        Some((surname, given)) => format!("{} {}", given.replace(',', " "), surname),
        None => rest.to_string(),
    };

    let collapsed = reordered.split_whitespace().collect::<Vec<_>>().join(" ");
    let mut normalized = title_case(&collapsed.to_lowercase());
    // stripped right to left; put back in reading order
    for suffix in to_append.into_iter().rev() {
        normalized.push(' ');
        normalized.push_str(suffix);
    }
    normalized
}

fn trim_tail(s: &str) -> &str {
    s.trim_end_matches(|c: char| c == '.' || c == ',' || c.is_whitespace())
}

/// Strip `word` off the end of `s` when it stands as its own token
/// (case-insensitive, preceded by whitespace or a comma).
fn strip_token<'a>(s: &'a str, word: &str) -> Option<&'a str> {
    if s.len() <= word.len() {
        return None;
    }
    let split = s.len() - word.len();
    if !s.is_char_boundary(split) {
        return None;
    }
    let (head, tail) = s.split_at(split);
    if !tail.eq_ignore_ascii_case(word) {
        return None;
    }
    match head.chars().next_back() {
        Some(c) if c.is_whitespace() || c == ',' => Some(head),
        _ => None,
    }
}

/// Upper-case the first letter of every alphabetic run, lower-case the rest.
fn title_case(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut in_word = false;
    for ch in s.chars() {
        if ch.is_alphabetic() {
            if in_word {
                out.extend(ch.to_lowercase());
            } else {
                out.extend(ch.to_uppercase());
            }
            in_word = true;
        } else {
            out.push(ch);
            in_word = false;
        }
    }
    out
}
