// tests/pipeline.rs
use std::fs;
use std::path::Path;

use candidatebot::config::{self, AppOptions};
use candidatebot::config::options::{ExportFormat, SourceKind, SourceOptions};
use candidatebot::error::SourceError;
use candidatebot::progress::{NullProgress, Progress};
use candidatebot::runner;
use candidatebot::sources::parse_source;

const YAML: &str = r#"
- name: SMITH, JANE
  office: house
  state: CA
  district: 12
- name: Doe, John
  office: senate
  state: OR
  reference_name: '"Doe Runs"'
  reference_url: http://example.com/doe
- name: Lost, Record
  office: senate
"#;

const XML: &str = r#"<?xml version="1.0"?>
<root>
  <can_sum>
    <can_nam>PERSON, SOME</can_nam>
    <can_off>H</can_off>
    <can_off_sta>NM</can_off_sta>
    <can_off_dis>7</can_off_dis>
    <can_par_aff>DEM</can_par_aff>
  </can_sum>
  <can_sum>
    <can_nam>OTHER, PARTY</can_nam>
    <can_off>S</can_off>
    <can_off_sta>NM</can_off_sta>
    <can_par_aff>REP</can_par_aff>
  </can_sum>
</root>"#;

fn options(dir: &Path, kind: SourceKind, file: &str, text: &str) -> AppOptions {
    let path = dir.join(file);
    fs::write(&path, text).unwrap();
    let mut opts = AppOptions::default();
    opts.source = SourceOptions { kind, path };
    opts.export.set_path(dir.join("out/candidates").to_str().unwrap());
    opts.publish.wiki_dir = dir.join("wiki");
    opts
}

#[derive(Default)]
struct Recorder {
    total: usize,
    done: Vec<String>,
    finished: bool,
}

impl Progress for Recorder {
    fn begin(&mut self, total: usize) { self.total = total; }
    fn item_done(&mut self, name: &str) { self.done.push(name.to_string()); }
    fn finish(&mut self) { self.finished = true; }
}

#[test]
fn yaml_to_csv_and_pages() {
    let dir = tempfile::tempdir().unwrap();
    let mut opts = options(dir.path(), SourceKind::Yaml, "c.yaml", YAML);
    opts.publish.enabled = true;

    let mut progress = Recorder::default();
    let summary = runner::run(&opts, Some(&mut progress)).unwrap();

    assert_eq!(summary.candidates, 2);
    assert_eq!(summary.pages_created, 2);
    assert_eq!(summary.failures, 0);
    assert_eq!(progress.total, 2);
    assert_eq!(progress.done, vec!["Jane Smith", "John Doe"]);
    assert!(progress.finished);

    let csv = fs::read_to_string(&summary.files_written[0]).unwrap();
    assert!(summary.files_written[0].ends_with("out/candidates.csv"));
    assert_eq!(
        csv,
        "name,office,state,district,incumbent,representative,reference_name,reference_url\n\
         Jane Smith,house,California,12th,,,,\n\
         John Doe,senate,Oregon,,,,\"\"\"Doe Runs\"\"\",http://example.com/doe\n"
    );

    let page = fs::read_to_string(dir.path().join("wiki/John_Doe.wiki")).unwrap();
    assert!(page.contains("seeking election to the US Senate for Oregon. <ref name=\"Doe Runs\">http://example.com/doe</ref>"));
    let list = fs::read_to_string(dir.path().join("wiki/Draft_CandidatebotListOfPages.wiki")).unwrap();
    assert_eq!(list, "[[Jane Smith]]<br>[[John Doe]]<br>");

    // Second run finds both pages already there.
    let again = runner::run(&opts, None).unwrap();
    assert_eq!(again.pages_created, 0);
    assert_eq!(again.pages_existing, 2);
}

#[test]
fn xml_to_tsv_without_headers() {
    let dir = tempfile::tempdir().unwrap();
    let mut opts = options(dir.path(), SourceKind::FecXml, "feed.xml", XML);
    opts.export.format = ExportFormat::Tsv;
    opts.export.include_headers = false;

    let summary = runner::run(&opts, Some(&mut NullProgress)).unwrap();
    assert_eq!(summary.candidates, 1);
    let tsv = fs::read_to_string(dir.path().join("out/candidates.tsv")).unwrap();
    assert_eq!(tsv, "Some Person\thouse\tNew Mexico\t7th\t\t\t\t\n");
    assert!(!dir.path().join("wiki").exists());
}

#[test]
fn wiki_source_from_file() {
    let dir = tempfile::tempdir().unwrap();
    let page = r#"<table class="wikitable sortable">
      <tr><th>District</th><th>Candidates</th></tr>
      <tr><td>Iowa 2</td><td>Dave Loebsack (Democratic)</td></tr>
    </table>"#;
    let opts = options(dir.path(), SourceKind::WikiTable { office: "house".into() }, "page.html", page);
    let got = parse_source(&opts.source).unwrap();
    assert_eq!(got.len(), 1);
    assert_eq!(got[0].office_and_district(), "the US House of Representatives to represent the 2nd district of Iowa");
}

#[test]
fn missing_source_is_an_error() {
    let dir = tempfile::tempdir().unwrap();
    let source = SourceOptions { kind: SourceKind::Yaml, path: dir.path().join("absent.yaml") };
    assert!(matches!(parse_source(&source), Err(SourceError::Io(_))));
    let opts = AppOptions { source, ..AppOptions::default() };
    assert!(runner::run(&opts, None).is_err());
}

#[test]
fn settings_file_round_trip() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("candidatebot.yaml");
    assert_eq!(config::load(&path).unwrap(), AppOptions::default());

    fs::write(&path, "source:\n  kind: fec_xml\n  path: feed.xml\nexport:\n  format: tsv\n").unwrap();
    let opts = config::load(&path).unwrap();
    assert_eq!(opts.source.kind, SourceKind::FecXml);
    assert_eq!(opts.export.format, ExportFormat::Tsv);

    fs::write(&path, "source: [not, a, mapping]\n").unwrap();
    assert!(config::load(&path).is_err());
}
