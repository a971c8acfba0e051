// src/normalize/location.rs
//
// (state, district) arrive in several shapes depending on the source:
//   ("",   "Alabama 1")         wiki tables
//   ("CA", "3")                 FEC feed
//   ("FL", "")                  statewide races
//   ("WY", "at-large")
// and come out as (full state name, ordinal district), either of which may be
// "" when it can't be resolved.

use std::sync::LazyLock;

use regex::Regex;

use super::states;

pub const AT_LARGE: &str = "at-large";

static DIGITS: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^\d+$").unwrap());

static STATE_AND_NUMBER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)^(.*?)\W+(\d+|at-large)$").unwrap());

pub fn normalize_location(state: &str, district: &str) -> (String, String) {
    let district = district.trim();
    let mut unverified_state = state.trim();
    let mut number = s!();

    if DIGITS.is_match(district) {
        number = strip_leading_zeros(district);
    } else if district.eq_ignore_ascii_case(AT_LARGE) {
        number = s!(AT_LARGE);
    } else if let Some(caps) = STATE_AND_NUMBER.captures(district) {
        // A state spelled out in the district wins over the state argument.
        unverified_state = caps.get(1).map_or("", |m| m.as_str().trim());
        let raw = caps.get(2).map_or("", |m| m.as_str());
        number = if raw.eq_ignore_ascii_case(AT_LARGE) {
            s!(AT_LARGE)
        } else {
            strip_leading_zeros(raw)
        };
    }

    let normalized_district = if number.is_empty() { s!() } else { ordinal(&number) };

    let normalized_state = states::lookup(unverified_state)
        .map(|s| s!(s.name))
        .unwrap_or_default();

    (normalized_state, normalized_district)
}

/// "1" → "1st", "12" → "12th", "23" → "23rd", "at-large" stays as is.
pub fn ordinal(number: &str) -> String {
    if number.eq_ignore_ascii_case(AT_LARGE) {
        return s!(AT_LARGE);
    }
    let b = number.as_bytes();
    let teen = b.len() >= 2 && b[b.len() - 2] == b'1';
    let suffix = if teen {
        "th"
    } else {
        match b.last() {
            Some(b'1') => "st",
            Some(b'2') => "nd",
            Some(b'3') => "rd",
            _ => "th",
        }
    };
    join!(number, suffix)
}

fn strip_leading_zeros(digits: &str) -> String {
    let trimmed = digits.trim_start_matches('0');
    if trimmed.is_empty() { s!("0") } else { s!(trimmed) }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn loc(state: &str, district: &str) -> (String, String) {
        normalize_location(state, district)
    }

    #[test]
    fn ordinal_suffixes() {
        let cases = [
            ("1", "1st"), ("2", "2nd"), ("3", "3rd"), ("4", "4th"),
            ("11", "11th"), ("12", "12th"), ("13", "13th"), ("19", "19th"),
            ("21", "21st"), ("22", "22nd"), ("23", "23rd"), ("30", "30th"),
            ("101", "101st"), ("111", "111th"), ("112", "112th"),
        ];
        for (n, want) in cases {
            assert_eq!(ordinal(n), want, "n = {n}");
        }
        assert_eq!(ordinal("at-large"), "at-large");
    }

    #[test]
    fn state_embedded_in_district() {
        assert_eq!(loc("", "Alabama 1"), (s!("Alabama"), s!("1st")));
        assert_eq!(loc("", "Wyoming at-large"), (s!("Wyoming"), s!("at-large")));
        assert_eq!(loc("", "North Carolina 13"), (s!("North Carolina"), s!("13th")));
    }

    #[test]
    fn abbreviation_and_bare_number() {
        assert_eq!(loc("CA", "3"), (s!("California"), s!("3rd")));
        assert_eq!(loc("NM", "07"), (s!("New Mexico"), s!("7th")));
        assert_eq!(loc("WY", "at-large"), (s!("Wyoming"), s!("at-large")));
        assert_eq!(loc("FL", ""), (s!("Florida"), s!()));
    }

    // Surprising but kept: the district's state overrides a conflicting
    // state argument.
    #[test]
    fn district_state_overrides_state_argument() {
        assert_eq!(loc("NJ", "New York 2"), (s!("New York"), s!("2nd")));
    }

    #[test]
    fn unresolvable_is_empty() {
        assert_eq!(loc("Alberta", ""), (s!(), s!()));
        assert_eq!(loc("", ""), (s!(), s!()));
        assert_eq!(loc("", "somewhere"), (s!(), s!()));
    }

    #[test]
    fn district_with_punctuation() {
        assert_eq!(loc("", "New York - 2"), (s!("New York"), s!("2nd")));
        assert_eq!(loc("", "Alaska At-Large"), (s!("Alaska"), s!("at-large")));
    }
}
