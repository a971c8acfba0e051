// src/sources/fec_xml.rs
//
// Candidate summary XML from fec.gov. Shape:
//   <root>
//     <can_sum>
//       <can_nam>CATFACE, ALEX</can_nam>
//       <can_off>H</can_off>
//       ...
//     </can_sum>
//   </root>
// Every element whose children are leaves becomes one raw record of
// child tag → text. The feed is very noisy; only Democratic non-presidential
// candidates are kept.

use quick_xml::Reader;
use quick_xml::events::Event;

use crate::candidate::{Candidate, make_candidate};
use crate::error::SourceError;
use crate::record::RawRecord;

#[derive(Default)]
struct Frame {
    name: String,
    text: String,
    fields: RawRecord,
    has_children: bool,
}

/// Raw records in document order.
pub fn read_records(xml: &str) -> Result<Vec<RawRecord>, SourceError> {
    let mut reader = Reader::from_str(xml);
    reader.config_mut().trim_text(true);

    let mut stack: Vec<Frame> = Vec::new();
    let mut records = Vec::new();

    loop {
        match reader.read_event()? {
            Event::Start(e) => {
                if let Some(parent) = stack.last_mut() {
                    parent.has_children = true;
                }
                let name = String::from_utf8_lossy(e.local_name().as_ref()).into_owned();
                stack.push(Frame { name, ..Frame::default() });
            }
            Event::Empty(e) => {
                if let Some(parent) = stack.last_mut() {
                    parent.has_children = true;
                    let name = String::from_utf8_lossy(e.local_name().as_ref()).into_owned();
                    parent.fields.insert(name, "");
                }
            }
            Event::Text(t) => {
                if let Some(top) = stack.last_mut() {
                    top.text.push_str(&t.unescape()?);
                }
            }
            Event::CData(c) => {
                if let Some(top) = stack.last_mut() {
                    top.text.push_str(&String::from_utf8_lossy(&c.into_inner()));
                }
            }
            Event::End(_) => {
                let Some(frame) = stack.pop() else { continue };
                if frame.has_children {
                    if !frame.fields.is_empty() {
                        records.push(frame.fields);
                    }
                } else if let Some(parent) = stack.last_mut() {
                    parent.fields.insert(frame.name, frame.text.trim());
                }
            }
            Event::Eof => break,
            _ => {}
        }
    }
    Ok(records)
}

/// Keep Democratic House/Senate candidates that assemble cleanly.
pub fn candidates_from_records(records: Vec<RawRecord>) -> Vec<Candidate> {
    let mut out = Vec::new();
    for raw in records {
        let (Some(party), Some(office)) = (raw.get("can_par_aff"), raw.get("can_off")) else {
            continue;
        };
        if party != "DEM" || office == "P" {
            continue;
        }
        match make_candidate(&raw) {
            Ok(c) => out.push(c),
            Err(e) => logw!("Didn't create a candidate: {e}"),
        }
    }
    out
}

pub fn parse(xml: &str) -> Result<Vec<Candidate>, SourceError> {
    Ok(candidates_from_records(read_records(xml)?))
}

#[cfg(test)]
mod tests {
    use super::*;

    const FEED: &str = r#"<?xml version="1.0"?>
<root>
  <can_sum>
    <can_nam>CATFACE, ALEX</can_nam>
    <can_off>H</can_off>
    <can_off_sta>NM</can_off_sta>
    <can_off_dis>01</can_off_dis>
    <can_par_aff>DEM</can_par_aff>
    <ind_ite_con/>
  </can_sum>
  <can_sum>
    <can_nam>BEAR, P III</can_nam>
    <can_off>P</can_off>
    <can_off_sta>US</can_off_sta>
    <can_par_aff>DEM</can_par_aff>
  </can_sum>
  <can_sum>
    <can_nam>ELEPHANT, ED</can_nam>
    <can_off>S</can_off>
    <can_off_sta>TX</can_off_sta>
    <can_par_aff>REP</can_par_aff>
  </can_sum>
  <can_sum>
    <can_nam>NODISTRICT, NED</can_nam>
    <can_off>H</can_off>
    <can_off_sta>TX</can_off_sta>
    <can_par_aff>DEM</can_par_aff>
  </can_sum>
  <can_sum>
    <can_nam>PERSON, SOME &amp; CO</can_nam>
    <can_off>S</can_off>
    <can_off_sta>VT</can_off_sta>
    <can_par_aff>DEM</can_par_aff>
  </can_sum>
</root>"#;

    #[test]
    fn reads_leaf_records() {
        let records = read_records(FEED).unwrap();
        assert_eq!(records.len(), 5);
        assert_eq!(records[0].get("can_off_dis"), Some("01"));
        assert_eq!(records[0].get("ind_ite_con"), Some(""));
        assert_eq!(records[4].get("can_nam"), Some("PERSON, SOME & CO"));
    }

    #[test]
    fn filters_noise() {
        let got = parse(FEED).unwrap();
        let names: Vec<&str> = got.iter().map(|c| c.name()).collect();
        assert_eq!(names, vec!["Alex Catface", "Some & Co Person"]);
        assert_eq!(got[0].district(), Some("1st"));
        assert_eq!(got[0].data().get("party"), Some("DEM"));
    }

    #[test]
    fn malformed_xml_is_an_error() {
        assert!(read_records("<root><can_sum></root>").is_err());
    }
}
