// src/render.rs
//
// Wiki stub for one candidate. Pure formatting; everything it needs is on
// the Candidate. Only fields the Officeholder infobox understands go in the
// infobox, the rest of the record is simply not rendered.

use crate::candidate::Candidate;
use crate::config::options::RenderOptions;

const INFOBOX_FIELDS: &[&str] = &[
    "name", "image", "caption", "office", "state", "district", "party",
    "incumbent", "predecessor", "successor", "term_start", "term_end",
    "constituency", "birth_date", "birth_place", "residence", "spouse",
    "children", "alma_mater", "occupation", "profession", "religion",
    "website",
];

/// Is `field` a parameter of the Officeholder infobox?
pub fn check_field(field: &str) -> bool {
    INFOBOX_FIELDS.contains(&field)
}

pub fn wikipedia_content(candidate: &Candidate, opts: &RenderOptions) -> String {
    let mut out = s!("{{Infobox Officeholder\n");
    for (k, v) in candidate.data().iter().filter(|(k, _)| check_field(k)) {
        out.push_str(&format!("| {k} = {v}\n"));
    }

    out.push_str(&format!(
        "\n}}}}\n'''{}''' is a {} {} candidate seeking election to {}. {}",
        candidate.name(),
        opts.election_year,
        opts.party_label,
        candidate.office_and_district(),
        candidate.reference(),
    ));

    out.push_str(&format!(
        "\n\n\
         == Biography ==\n\
         TODO: Replace this text with some biographical information.\
         <ref>TODO: Add a URL in here that confirms the bio.</ref>\
         \n\n\
         ==  Political positions ==\n\
         TODO: Replace this text with some information about the candidate's political positions\
         <ref>TODO: Add a URL in here that confirms them.</ref>\
         \n\n\
         == External links ==\n\
         * [ADD_URL_HERE / {} for {}]",
        candidate.name(),
        candidate.office(),
    ));

    out.push_str("\n\n{{US-politician-stub}}\n\n");
    out.push_str("==References==\n{{reflist}}");

    if let Some(state) = candidate.state() {
        out.push_str(&format!(
            "\n[[Category:{state} {}s]] \n[[Category:{state} Politicians]]\n",
            party_plural_stem(&opts.party_label),
        ));
    }
    out
}

/// "Democratic" → "Democrat" for category names ("Ohio Democrats").
fn party_plural_stem(label: &str) -> &str {
    label.strip_suffix("ic").unwrap_or(label)
}
