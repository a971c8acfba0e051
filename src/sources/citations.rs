// src/sources/citations.rs
//
// Footnotes on a wiki page: the `<ol class="references">` list maps note ids
// (e.g. "cite_note-68") to the first external link of each entry. Candidate
// lines point at notes through an inline marker like "[63]" whose anchor
// links to "#cite_note-68". The two numbers usually differ.

use std::collections::HashMap;
use std::sync::LazyLock;

use scraper::{ElementRef, Html, Selector};

use crate::core::sanitize::normalize_ws;

static REFERENCE_LISTS: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("ol.references").unwrap());
static LIST_ITEMS: LazyLock<Selector> = LazyLock::new(|| Selector::parse("li").unwrap());
static EXTERNAL_LINK: LazyLock<Selector> = LazyLock::new(|| Selector::parse("a.external").unwrap());
static ANCHOR: LazyLock<Selector> = LazyLock::new(|| Selector::parse("a").unwrap());

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Citation {
    /// Display text, e.g. `"Some Headline"` including the quotes.
    pub name: String,
    pub url: String,
}

pub type Citations = HashMap<String, Citation>;

/// Build the note id → citation map for a whole document.
/// Entries without an id or without an external link are left out.
pub fn collect_citations(doc: &Html) -> Citations {
    let mut citations = Citations::new();
    for list in doc.select(&REFERENCE_LISTS) {
        for item in list.select(&LIST_ITEMS) {
            let Some(id) = item.value().attr("id") else { continue };
            let Some(link) = item.select(&EXTERNAL_LINK).next() else {
                logd!("Reference {id} has no external link");
                continue;
            };
            let url = link.value().attr("href").unwrap_or_default();
            citations.insert(
                s!(id),
                Citation { name: normalize_ws(&link.text().collect::<String>()), url: s!(url) },
            );
        }
    }
    citations
}

/// Find the citation for `marker` ("[63]") among the anchors of `cell`.
pub fn resolve<'c>(cell: ElementRef<'_>, marker: &str, citations: &'c Citations) -> Option<&'c Citation> {
    if marker.is_empty() {
        return None;
    }
    cell.select(&ANCHOR)
        .filter(|a| a.text().collect::<String>().trim() == marker)
        .filter_map(|a| a.value().attr("href"))
        .filter_map(|href| href.strip_prefix('#'))
        .find_map(|note| citations.get(note))
}

#[cfg(test)]
mod tests {
    use super::*;

    const PAGE: &str = r##"
        <ol class="references">
          <li id="cite_note-68"><span><a rel="nofollow" class="external text" href="http://example.com">"Some Headline"</a></span></li>
          <li id="cite_note-70"><span>offline source</span></li>
          <li><a class="external text" href="http://no-id.example">orphan</a></li>
        </ol>
        <table><tr><td id="cell">Some Name (Democrat)<sup><a href="#cite_note-68">[63]</a></sup></td></tr></table>
    "##;

    #[test]
    fn collects_entries_with_links() {
        let doc = Html::parse_document(PAGE);
        let c = collect_citations(&doc);
        assert_eq!(c.len(), 1);
        assert_eq!(
            c.get("cite_note-68"),
            Some(&Citation { name: s!("\"Some Headline\""), url: s!("http://example.com") })
        );
    }

    #[test]
    fn resolves_marker_through_anchor() {
        let doc = Html::parse_document(PAGE);
        let c = collect_citations(&doc);
        let sel = Selector::parse("td#cell").unwrap();
        let cell = doc.select(&sel).next().unwrap();
        assert_eq!(resolve(cell, "[63]", &c).map(|c| c.url.as_str()), Some("http://example.com"));
        assert!(resolve(cell, "[64]", &c).is_none());
        assert!(resolve(cell, "", &c).is_none());
    }
}
