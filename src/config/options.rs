// src/config/options.rs
use std::fmt;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use super::consts::*;

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppOptions {
    pub source: SourceOptions,
    pub export: ExportOptions,
    pub publish: PublishOptions,
    pub render: RenderOptions,
    pub log: LogOptions,
}

/* ---------------- Source ---------------- */

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum SourceKind {
    FecXml,
    Yaml,
    /// Wiki "Elections" page; `office` labels every scraped candidate.
    WikiTable { office: String },
}

impl fmt::Display for SourceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SourceKind::FecXml => f.write_str("fec xml"),
            SourceKind::Yaml => f.write_str("yaml"),
            SourceKind::WikiTable { office } => write!(f, "wiki table ({office})"),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SourceOptions {
    #[serde(flatten)]
    pub kind: SourceKind,
    pub path: PathBuf,
}

impl Default for SourceOptions {
    fn default() -> Self {
        Self { kind: SourceKind::Yaml, path: PathBuf::from("candidates.yaml") }
    }
}

/* ---------------- Export ---------------- */

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExportFormat {
    Csv,
    Tsv,
}

impl ExportFormat {
    pub fn ext(&self) -> &'static str {
        match self { ExportFormat::Csv => "csv", ExportFormat::Tsv => "tsv" }
    }
    pub fn delim(&self) -> char {
        match self { ExportFormat::Csv => ',', ExportFormat::Tsv => '\t' }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExportOptions {
    pub enabled: bool,
    pub format: ExportFormat,
    out_path: OutputPath,
    pub include_headers: bool,
}

impl Default for ExportOptions {
    fn default() -> Self {
        Self {
            enabled: true,
            format: ExportFormat::Csv,
            out_path: OutputPath::default(),
            include_headers: true,
        }
    }
}

impl ExportOptions {
    /// `<dir>/<stem>.<ext>`. The extension follows the format unless the user
    /// typed one in.
    pub fn out_path(&self) -> PathBuf {
        let ext = self.out_path.ext.as_deref().unwrap_or(self.format.ext());
        self.out_path.dir.join(join!(&self.out_path.file_stem, ".", ext))
    }

    /// Split a user-supplied path into dir, stem and (optional) extension.
    pub fn set_path(&mut self, text: &str) {
        let p = Path::new(text.trim());
        if let Some(parent) = p.parent() {
            self.out_path.dir = parent.to_path_buf();
        }
        if let Some(stem) = p.file_stem() {
            self.out_path.file_stem = stem.to_string_lossy().into_owned();
        }
        self.out_path.ext = p.extension().map(|e| e.to_string_lossy().into_owned());
    }

    pub fn delim(&self) -> char {
        self.format.delim()
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputPath {
    dir: PathBuf,
    file_stem: String,
    ext: Option<String>,
}

impl Default for OutputPath {
    fn default() -> Self {
        Self {
            dir: PathBuf::from(DEFAULT_OUT_DIR),
            file_stem: s!(DEFAULT_FILE),
            ext: None,
        }
    }
}

/* ---------------- Publish / render / log ---------------- */

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PublishOptions {
    pub enabled: bool,
    /// Directory backing the local wiki.
    pub wiki_dir: PathBuf,
    /// Create `<draft_prefix><name>` pages instead of main-space ones.
    pub draft: bool,
    pub draft_prefix: String,
}

impl Default for PublishOptions {
    fn default() -> Self {
        Self {
            enabled: false,
            wiki_dir: PathBuf::from(DEFAULT_WIKI_DIR),
            draft: false,
            draft_prefix: s!(DRAFT_PREFIX),
        }
    }
}

impl PublishOptions {
    pub fn page_title(&self, name: &str) -> String {
        if self.draft { join!(&self.draft_prefix, name) } else { s!(name) }
    }

    pub fn list_page(&self) -> String {
        join!(&self.draft_prefix, LIST_PAGE)
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderOptions {
    pub election_year: u16,
    pub party_label: String,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self { election_year: ELECTION_YEAR, party_label: s!(PARTY_LABEL) }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LogOptions {
    pub file: PathBuf,
    pub verbose: bool,
}

impl Default for LogOptions {
    fn default() -> Self {
        Self { file: PathBuf::from(LOG_FILE), verbose: false }
    }
}
