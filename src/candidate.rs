// src/candidate.rs
//! Candidate assembly and the read-only canonical record.
//!
//! `make_candidate` is the only place in the pipeline that rejects input:
//! every source funnels its raw field map through here, and callers skip the
//! record on `CandidateError` and carry on with the rest.

use std::fmt;

use crate::error::CandidateError;
use crate::normalize::{location::AT_LARGE, normalize_location, normalize_name, translate_field, translate_office};
use crate::record::{FieldMap, RawRecord};

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Office {
    President,
    House,
    Senate,
    Governor,
    Other(String),
}

impl Office {
    pub fn parse(s: &str) -> Self {
        match s {
            "president" => Office::President,
            "house" => Office::House,
            "senate" => Office::Senate,
            "governor" => Office::Governor,
            other => Office::Other(s!(other)),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            Office::President => "president",
            Office::House => "house",
            Office::Senate => "senate",
            Office::Governor => "governor",
            Office::Other(s) => s.as_str(),
        }
    }
}

impl fmt::Display for Office {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Translate, normalize and validate one raw record.
///
/// Required: `name` and `office` after translation, a resolvable `state`
/// for every office, and a `district` for House races. A state spelled out
/// in the district ("West Virginia 2") satisfies the state requirement.
/// Unrecognized keys are kept as they are.
pub fn make_candidate(raw: &RawRecord) -> Result<Candidate, CandidateError> {
    let mut data = FieldMap::new();
    for (tag, text) in raw.iter() {
        let translated = translate_field(tag);
        let value = if translated == "office" { translate_office(text) } else { text };
        data.insert(translated, value);
    }

    let name = normalize_name(data.get_or_empty("name"));
    if name.is_empty() {
        return Err(CandidateError::missing("name", had(&data)));
    }
    data.insert("name", name.as_str());

    let office = match data.get("office") {
        Some(o) if !o.trim().is_empty() => Office::parse(o.trim()),
        _ => return Err(CandidateError::missing("office", had(&data))),
    };

    let (state, district) =
        normalize_location(data.get_or_empty("state"), data.get_or_empty("district"));

    if state.is_empty() {
        return Err(CandidateError::missing("state", had(&data)));
    }
    data.insert("state", state);

    if district.is_empty() {
        if office == Office::House {
            return Err(CandidateError::missing("district", had(&data)));
        }
    } else {
        data.insert("district", district);
    }

    Ok(Candidate { name, office, data })
}

fn had(data: &FieldMap) -> Vec<String> {
    data.keys().map(String::from).collect()
}

/// An assembled candidate. Immutable once built.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Candidate {
    name: String,
    office: Office,
    data: FieldMap,
}

impl Candidate {
    /// Column order for tabular export.
    pub fn ordered_fields() -> &'static [&'static str] {
        &[
            "name",
            "office",
            "state",
            "district",
            "incumbent",
            "representative",
            "reference_name",
            "reference_url",
        ]
    }

    pub fn name(&self) -> &str { &self.name }

    pub fn office_kind(&self) -> &Office { &self.office }

    /// Display label for the office, as used in link text.
    pub fn office(&self) -> &str {
        match self.data.get("office") {
            Some("house") => "Congress",
            Some("senate") => "Senate",
            Some(other) => other,
            None => "Office",
        }
    }

    pub fn state(&self) -> Option<&str> { self.data.get("state") }

    pub fn district(&self) -> Option<&str> { self.data.get("district") }

    /// Human-readable description of the seat being sought.
    pub fn office_and_district(&self) -> String {
        match &self.office {
            Office::House => match (self.district(), self.state()) {
                (Some(AT_LARGE), Some(state)) => format!(
                    "the US House of Representatives to represent the {state} at-large district"
                ),
                (Some(district), Some(state)) => format!(
                    "the US House of Representatives to represent the {district} district of {state}"
                ),
                _ => s!("the US House of Representatives"),
            },
            Office::Senate => match self.state() {
                Some(state) => format!("the US Senate for {state}"),
                None => s!("the US Senate"),
            },
            Office::Governor => format!("Governor of {}", self.data.get_or_empty("state")),
            other => s!(other.as_str()),
        }
    }

    /// Wiki reference markup, or "" without a citation. Reference names are
    /// already enclosed in double quotes by the source.
    pub fn reference(&self) -> String {
        match (self.data.get("reference_name"), self.data.get("reference_url")) {
            (Some(name), Some(url)) => format!("<ref name={name}>{url}</ref>"),
            _ => s!(),
        }
    }

    pub fn data(&self) -> &FieldMap { &self.data }

    /// `ordered_fields()` projection; absent fields are "".
    pub fn as_list(&self) -> Vec<String> {
        Self::ordered_fields()
            .iter()
            .map(|f| s!(self.data.get_or_empty(f)))
            .collect()
    }
}
