// src/sources/wiki_table.rs
//! Scraping for wiki "Elections" pages.
//!
//! The page lists one `wikitable sortable` per state/territory. Inside a
//! table, a header-only row (`<th>` cells, no `<td>`) names the columns; the
//! data rows that follow are read against it until the next header-only row.
//! Only header rows with a "Candidates" column count; any other header row
//! switches extraction off until a qualifying one shows up.
//!
//! A candidates cell looks like
//! ```text
//! Some Name (Democrat)[63]
//! Other Person (Republican)[5]
//! ```
//! one candidate per line. Democratic lines become records; recognized
//! other-party lines are skipped quietly; anything else is logged as an
//! unexpected format. `[63]` is resolved through `citations`.
//!
//! Scraping is a single forward pass: `scrape_candidates` returns an iterator
//! that walks tables → rows → lines lazily and is done once exhausted.
//! Bad rows and rejected candidates are logged and skipped, never fatal.

use std::collections::VecDeque;
use std::sync::LazyLock;

use scraper::{ElementRef, Html, Node, Selector};

use super::citations::{self, Citations};
use crate::candidate::{Candidate, make_candidate};
use crate::core::sanitize::{header_key, normalize_ws};
use crate::record::RawRecord;

static TABLES: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("table.wikitable.sortable").unwrap());
static ROWS: LazyLock<Selector> = LazyLock::new(|| Selector::parse("tr").unwrap());

pub const KNOWN_OFFICES: &[&str] = &["house", "senate", "governor"];

const CANDIDATES: &str = "candidates";

/// Columns we never copy: the candidates cell is parsed separately, and
/// `first_elected` refers to the incumbent, not the candidate.
const SKIP_FIELDS: &[&str] = &["pvi", CANDIDATES, "first_elected"];

const OTHER_PARTIES: &[&str] = &[
    "Green", "Independent", "Libertarian", "NPP", "PDP", "PIP", "PPT", "R",
    "Reform", "Republican", "No Party Preference",
];

const LINE_BREAK_ELEMENTS: &[&str] = &["br", "li", "p", "div", "dd", "ul", "ol", "dl"];

/// Lazily scrape Democratic candidates for `office` from a parsed page.
pub fn scrape_candidates<'a>(doc: &'a Html, office: &str) -> WikiCandidates<'a> {
    if !KNOWN_OFFICES.contains(&office) {
        logw!("Unexpected office {office:?}, should be one of {KNOWN_OFFICES:?}");
    }
    WikiCandidates {
        office: s!(office),
        citations: citations::collect_citations(doc),
        tables: doc.select(&TABLES).collect::<Vec<_>>().into_iter(),
        rows: Vec::new().into_iter(),
        header_fields: Vec::new(),
        pending: VecDeque::new(),
    }
}

pub struct WikiCandidates<'a> {
    office: String,
    citations: Citations,
    tables: std::vec::IntoIter<ElementRef<'a>>,
    rows: std::vec::IntoIter<ElementRef<'a>>,
    /// Rolling header for the current table.
    header_fields: Vec<String>,
    pending: VecDeque<Candidate>,
}

impl Iterator for WikiCandidates<'_> {
    type Item = Candidate;

    fn next(&mut self) -> Option<Candidate> {
        loop {
            if let Some(candidate) = self.pending.pop_front() {
                return Some(candidate);
            }
            if let Some(row) = self.rows.next() {
                let raws = scan_row(row, &mut self.header_fields, &self.office, &self.citations);
                for raw in raws {
                    match make_candidate(&raw) {
                        Ok(c) => self.pending.push_back(c),
                        Err(e) => logw!(
                            "Skipping {} candidate {}: {e}",
                            self.office,
                            raw.get_or_empty("name")
                        ),
                    }
                }
                continue;
            }
            let table = self.tables.next()?;
            self.header_fields.clear();
            self.rows = table.select(&ROWS).collect::<Vec<_>>().into_iter();
        }
    }
}

/// Process one `<tr>`. Header-only rows update `header_fields`; data rows
/// produce zero or more raw candidate records.
fn scan_row(
    row: ElementRef<'_>,
    header_fields: &mut Vec<String>,
    office: &str,
    citations: &Citations,
) -> Vec<RawRecord> {
    let (headers, columns) = row_cells(row);

    if columns.is_empty() {
        let fields: Vec<String> = headers.iter().map(|h| header_key(&cell_text(*h))).collect();
        *header_fields = if fields.iter().any(|f| f == CANDIDATES) { fields } else { Vec::new() };
        return Vec::new();
    }

    if header_fields.is_empty() {
        return Vec::new();
    }

    if headers.len() + columns.len() != header_fields.len() {
        logw!(
            "Unexpected number of columns: {} header + {} data cells vs {} fields; skipping row",
            headers.len(),
            columns.len(),
            header_fields.len()
        );
        return Vec::new();
    }

    // Row header cells take the leading fields, data cells the rest.
    let bound: Vec<(&str, ElementRef<'_>)> = header_fields
        .iter()
        .map(String::as_str)
        .zip(headers.iter().chain(columns.iter()).copied())
        .collect();

    let Some(&(_, candidates_cell)) = bound.iter().find(|(k, _)| *k == CANDIDATES) else {
        logw!("No candidates column found; headers are {header_fields:?}");
        return Vec::new();
    };

    let mut out = Vec::new();
    for line in cell_lines(candidates_cell) {
        let Some(entry) = parse_candidate_line(&line) else { continue };

        let mut raw = RawRecord::new();
        raw.insert("name", entry.name.as_str());
        raw.insert("office", office);
        raw.insert("party", "Democratic");

        for (key, cell) in &bound {
            if raw.contains_key(key) || SKIP_FIELDS.contains(key) {
                continue;
            }
            raw.insert(*key, cell_text(*cell));
        }

        match citations::resolve(candidates_cell, &entry.marker, citations) {
            Some(citation) => {
                raw.insert("reference_name", citation.name.as_str());
                raw.insert("reference_url", citation.url.as_str());
            }
            None => logd!("No citation found for {}", entry.name),
        }
        out.push(raw);
    }
    out
}

/// Direct `<th>` and `<td>` children of a row, in order.
fn row_cells(row: ElementRef<'_>) -> (Vec<ElementRef<'_>>, Vec<ElementRef<'_>>) {
    let mut headers = Vec::new();
    let mut columns = Vec::new();
    for cell in row.children().filter_map(ElementRef::wrap) {
        match cell.value().name() {
            "th" => headers.push(cell),
            "td" => columns.push(cell),
            _ => {}
        }
    }
    (headers, columns)
}

/// Single-line text of a cell; line breaks become spaces ("Alabama<br>1").
fn cell_text(cell: ElementRef<'_>) -> String {
    cell_lines(cell).join(" ")
}

/// Visible text of a cell split into trimmed, non-empty lines. Literal
/// newlines end a line, and so do both edges of a line-breaking element.
fn cell_lines(cell: ElementRef<'_>) -> Vec<String> {
    let mut text = s!();
    push_text(cell, &mut text);
    text.lines()
        .map(normalize_ws)
        .filter(|l| !l.is_empty())
        .collect()
}

fn push_text(element: ElementRef<'_>, text: &mut String) {
    for child in element.children() {
        match child.value() {
            Node::Text(t) => text.push_str(t),
            Node::Element(e) => {
                let Some(inner) = ElementRef::wrap(child) else { continue };
                let breaks = LINE_BREAK_ELEMENTS.contains(&e.name());
                if breaks {
                    text.push('\n');
                }
                push_text(inner, text);
                if breaks {
                    text.push('\n');
                }
            }
            _ => {}
        }
    }
}

#[derive(Debug, PartialEq, Eq)]
struct CandidateLine {
    name: String,
    /// Footnote marker such as "[63]", or "" when there is none.
    marker: String,
}

/// "Some Name (Democrat)[63]" → name + marker. `None` for non-Democratic
/// lines; unrecognized formats are logged.
fn parse_candidate_line(line: &str) -> Option<CandidateLine> {
    if !(line.contains("(Democrat") || line.contains("(D)")) {
        let known = OTHER_PARTIES.iter().any(|p| line.contains(&format!("({p})")));
        if !known {
            logw!("[{line}] has an unknown party");
        }
        return None;
    }

    let name = line.split('(').next().unwrap_or("").trim();
    if name.is_empty() {
        logw!("[{line}] has no candidate name");
        return None;
    }

    let after = line.split_once(')').map_or("", |(_, rest)| rest.trim());
    // Several notes ("[63][64]") resolve through the first one.
    let marker = match after.find(']') {
        Some(end) if after.starts_with('[') => &after[..=end],
        _ => after,
    };

    Some(CandidateLine { name: s!(name), marker: s!(marker) })
}
