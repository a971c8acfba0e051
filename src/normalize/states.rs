// src/normalize/states.rs
//
// Canonical directory of US states, DC and the inhabited territories.
// Lookups accept the full name, the postal abbreviation or the FIPS code.

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct State {
    pub name: &'static str,
    pub abbr: &'static str,
    pub fips: &'static str,
}

macro_rules! st {
    ($name:expr, $abbr:expr, $fips:expr) => {
        State { name: $name, abbr: $abbr, fips: $fips }
    };
}

pub const STATES: &[State] = &[
    st!("Alabama", "AL", "01"),
    st!("Alaska", "AK", "02"),
    st!("Arizona", "AZ", "04"),
    st!("Arkansas", "AR", "05"),
    st!("California", "CA", "06"),
    st!("Colorado", "CO", "08"),
    st!("Connecticut", "CT", "09"),
    st!("Delaware", "DE", "10"),
    st!("District of Columbia", "DC", "11"),
    st!("Florida", "FL", "12"),
    st!("Georgia", "GA", "13"),
    st!("Hawaii", "HI", "15"),
    st!("Idaho", "ID", "16"),
    st!("Illinois", "IL", "17"),
    st!("Indiana", "IN", "18"),
    st!("Iowa", "IA", "19"),
    st!("Kansas", "KS", "20"),
    st!("Kentucky", "KY", "21"),
    st!("Louisiana", "LA", "22"),
    st!("Maine", "ME", "23"),
    st!("Maryland", "MD", "24"),
    st!("Massachusetts", "MA", "25"),
    st!("Michigan", "MI", "26"),
    st!("Minnesota", "MN", "27"),
    st!("Mississippi", "MS", "28"),
    st!("Missouri", "MO", "29"),
    st!("Montana", "MT", "30"),
    st!("Nebraska", "NE", "31"),
    st!("Nevada", "NV", "32"),
    st!("New Hampshire", "NH", "33"),
    st!("New Jersey", "NJ", "34"),
    st!("New Mexico", "NM", "35"),
    st!("New York", "NY", "36"),
    st!("North Carolina", "NC", "37"),
    st!("North Dakota", "ND", "38"),
    st!("Ohio", "OH", "39"),
    st!("Oklahoma", "OK", "40"),
    st!("Oregon", "OR", "41"),
    st!("Pennsylvania", "PA", "42"),
    st!("Rhode Island", "RI", "44"),
    st!("South Carolina", "SC", "45"),
    st!("South Dakota", "SD", "46"),
    st!("Tennessee", "TN", "47"),
    st!("Texas", "TX", "48"),
    st!("Utah", "UT", "49"),
    st!("Vermont", "VT", "50"),
    st!("Virginia", "VA", "51"),
    st!("Washington", "WA", "53"),
    st!("West Virginia", "WV", "54"),
    st!("Wisconsin", "WI", "55"),
    st!("Wyoming", "WY", "56"),
    st!("American Samoa", "AS", "60"),
    st!("Guam", "GU", "66"),
    st!("Northern Mariana Islands", "MP", "69"),
    st!("Puerto Rico", "PR", "72"),
    st!("Virgin Islands", "VI", "78"),
];

/// Resolve a name, abbreviation or FIPS code. Case and extra whitespace are
/// ignored; anything else must match exactly.
pub fn lookup(value: &str) -> Option<&'static State> {
    let value = value.split_whitespace().collect::<Vec<_>>().join(" ");
    if value.is_empty() {
        return None;
    }
    if value.len() == 2 && value.bytes().all(|b| b.is_ascii_digit()) {
        return STATES.iter().find(|s| s.fips == value);
    }
    if value.len() == 2 && value.bytes().all(|b| b.is_ascii_alphabetic()) {
        return STATES.iter().find(|s| s.abbr.eq_ignore_ascii_case(&value));
    }
    STATES.iter().find(|s| s.name.eq_ignore_ascii_case(&value))
}
