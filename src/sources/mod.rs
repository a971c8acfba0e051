// src/sources/mod.rs
//! # Source readers
//!
//! One reader per input kind, all ending in `candidate::make_candidate`:
//!
//! ```text
//! FEC XML  ─ fec_xml::read_records ─┐
//! YAML     ─ yaml::parse ───────────┼─→ make_candidate → Candidate
//! Wiki HTML ─ wiki_table::scrape_candidates (+ citations) ─┘
//! ```
//!
//! Readers fail only when the file itself can't be read or parsed; bad
//! records inside a good file are logged and skipped.
pub mod citations;
pub mod fec_xml;
pub mod wiki_table;
pub mod yaml;

use std::fs;

use scraper::Html;

use crate::candidate::Candidate;
use crate::config::options::{SourceKind, SourceOptions};
use crate::error::SourceError;

pub use wiki_table::scrape_candidates;

/// Read and parse the configured source file.
pub fn parse_source(source: &SourceOptions) -> Result<Vec<Candidate>, SourceError> {
    let text = fs::read_to_string(&source.path)?;
    let origin = source.path.display().to_string();
    logf!("Reading {} source {origin}", source.kind);

    let candidates = parse_str(&source.kind, &text, &origin)?;
    logf!("{origin}: {} candidates", candidates.len());
    Ok(candidates)
}

/// Same as `parse_source` for text already in memory.
pub fn parse_str(kind: &SourceKind, text: &str, origin: &str) -> Result<Vec<Candidate>, SourceError> {
    match kind {
        SourceKind::FecXml => fec_xml::parse(text),
        SourceKind::Yaml => yaml::parse(text, origin),
        SourceKind::WikiTable { office } => {
            let doc = Html::parse_document(text);
            Ok(scrape_candidates(&doc, office).collect())
        }
    }
}
