// src/sources/yaml.rs
//
// Hand-maintained candidate lists:
//   - name: Some Person
//     office: house
//     state: NM
//     district: 3
// Scalars are stringified; entries without a name are skipped.

use serde_yaml::Value;

use crate::candidate::{Candidate, make_candidate};
use crate::error::SourceError;
use crate::record::RawRecord;

pub fn parse(text: &str, origin: &str) -> Result<Vec<Candidate>, SourceError> {
    let doc: Value = serde_yaml::from_str(text)?;
    let entries = match doc {
        Value::Sequence(seq) => seq,
        Value::Null => Vec::new(),
        _ => return Err(SourceError::NotASequence(s!(origin))),
    };

    let mut out = Vec::new();
    for (idx, entry) in entries.iter().enumerate() {
        let Value::Mapping(map) = entry else {
            logw!("{origin}: entry {idx} is not a mapping. Skipping.");
            continue;
        };

        let mut raw = RawRecord::new();
        for (k, v) in map {
            let Some(key) = scalar_string(k) else { continue };
            match scalar_string(v) {
                Some(value) => raw.insert(key, value),
                None => logd!("{origin}: entry {idx}: ignoring non-scalar field {key}"),
            }
        }

        if raw.get_or_empty("name").trim().is_empty() {
            logw!("{origin}: entry {idx} has no name. Skipping.");
            continue;
        }

        match make_candidate(&raw) {
            Ok(c) => out.push(c),
            Err(e) => logw!("{origin}: skipping {}: {e}", raw.get_or_empty("name")),
        }
    }
    Ok(out)
}

/// Scalars as strings; nulls read as "", collections as `None`.
fn scalar_string(v: &Value) -> Option<String> {
    match v {
        Value::Null => Some(s!()),
        Value::Bool(b) => Some(b.to_string()),
        Value::Number(n) => Some(n.to_string()),
        Value::String(s) => Some(s.clone()),
        Value::Tagged(t) => scalar_string(&t.value),
        Value::Sequence(_) | Value::Mapping(_) => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reads_list_of_candidates() {
        let text = r#"
- name: SMITH, JANE
  office: house
  state: CA
  district: 12
  incumbent: Someone Else
- name:
  office: senate
  state: OR
- name: Doe, John
  office: senate
  state: Oregon
- name: Nowhere Man
  office: house
  state: CA
- just a string
"#;
        let got = parse(text, "test.yaml").unwrap();
        assert_eq!(got.len(), 2);
        assert_eq!(got[0].name(), "Jane Smith");
        assert_eq!(got[0].district(), Some("12th"));
        assert_eq!(got[0].data().get("incumbent"), Some("Someone Else"));
        assert_eq!(got[1].name(), "John Doe");
        assert_eq!(got[1].state(), Some("Oregon"));
    }

    #[test]
    fn empty_document_is_empty() {
        assert!(parse("", "empty.yaml").unwrap().is_empty());
    }

    #[test]
    fn top_level_mapping_is_rejected() {
        let err = parse("name: Solo", "solo.yaml").unwrap_err();
        assert!(matches!(err, SourceError::NotASequence(_)));
    }
}
