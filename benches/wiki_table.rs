// benches/wiki_table.rs
use criterion::{Criterion, black_box, criterion_group, criterion_main};
use scraper::Html;

use candidatebot::sources::scrape_candidates;

const STATES: &[&str] = &["Alabama", "California", "New York", "Texas", "Ohio", "Oregon"];

/// One sortable table per state, ten districts each, three candidates per row.
fn synthetic_page() -> String {
    let mut page = String::from("<html><body>");
    let mut note = 0;
    for state in STATES {
        page.push_str(
            "<table class=\"wikitable sortable\"><tr><th>District</th><th>Incumbent</th>\
             <th>Party</th><th>First<br>elected</th><th>Candidates</th></tr>",
        );
        for d in 1..=10 {
            note += 1;
            page.push_str(&format!(
                "<tr><td>{state} {d}</td><td>Incumbent {d}</td><td>Republican</td><td>2010</td>\
                 <td>Person{d} Name (Democratic)<sup><a href=\"#cite_note-{note}\">[{note}]</a></sup><br>\
                 Other{d} Name (Republican)<br>Third{d} Name (Libertarian)</td></tr>"
            ));
        }
        page.push_str("</table>");
    }
    page.push_str("<ol class=\"references\">");
    for n in 1..=note {
        page.push_str(&format!(
            "<li id=\"cite_note-{n}\"><a class=\"external text\" href=\"http://example.com/{n}\">\"Headline {n}\"</a></li>"
        ));
    }
    page.push_str("</ol></body></html>");
    page
}

fn bench_scrape(c: &mut Criterion) {
    let page = synthetic_page();

    c.bench_function("wiki_table_parse_and_scrape", |b| {
        b.iter(|| {
            let doc = Html::parse_document(black_box(&page));
            black_box(scrape_candidates(&doc, "house").count())
        })
    });

    let doc = Html::parse_document(&page);
    c.bench_function("wiki_table_scrape_only", |b| {
        b.iter(|| black_box(scrape_candidates(black_box(&doc), "house").count()))
    });
}

criterion_group!(benches, bench_scrape);
criterion_main!(benches);
