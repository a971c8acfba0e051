// src/cli.rs
use std::path::PathBuf;

use clap::{ArgGroup, Parser, ValueEnum};

use crate::config::{self, AppOptions};
use crate::config::options::{ExportFormat, SourceKind};
use crate::progress::Progress;
use crate::runner::{self, RunSummary};

#[derive(Debug, Clone, Copy, ValueEnum)]
enum FormatArg {
    Csv,
    Tsv,
}

impl From<FormatArg> for ExportFormat {
    fn from(value: FormatArg) -> Self {
        match value {
            FormatArg::Csv => ExportFormat::Csv,
            FormatArg::Tsv => ExportFormat::Tsv,
        }
    }
}

#[derive(Debug, Parser)]
#[command(
    name = "candidatebot",
    version,
    about = "Extract Democratic candidates and write a table and wiki stubs",
    after_help = "Flags override the settings file. Without --xml, --yaml or --wiki the source comes from the settings file."
)]
#[command(group(ArgGroup::new("source").args(["xml", "yaml", "wiki"])))]
struct Args {
    #[arg(long, value_name = "FILE", help = "FEC candidate XML feed")]
    xml: Option<PathBuf>,
    #[arg(long, value_name = "FILE", help = "YAML list of candidates")]
    yaml: Option<PathBuf>,
    #[arg(long, value_name = "FILE", requires = "office", help = "Saved wiki \"Elections\" page")]
    wiki: Option<PathBuf>,
    #[arg(long, help = "Office the wiki page is about: house, senate or governor")]
    office: Option<String>,

    #[arg(short, long, value_name = "PATH", help = "Output table path")]
    out: Option<String>,
    #[arg(long, value_enum, help = "Output table format")]
    format: Option<FormatArg>,
    #[arg(long = "include-headers", help = "Write a header line, even if the settings file turns it off")]
    include_headers: bool,
    #[arg(long = "no-headers", conflicts_with = "include_headers", help = "Leave out the header line")]
    no_headers: bool,
    #[arg(long = "no-export", help = "Skip writing the table")]
    no_export: bool,

    #[arg(long, value_name = "DIR", help = "Create wiki pages in DIR")]
    publish: Option<PathBuf>,
    #[arg(long, help = "Create draft pages")]
    draft: bool,

    #[arg(long, value_name = "FILE", default_value = "candidatebot.yaml", help = "Settings file")]
    config: PathBuf,
    #[arg(long = "log-file", value_name = "FILE")]
    log_file: Option<PathBuf>,
    #[arg(short, long, help = "Debug logging")]
    verbose: bool,
}

impl Args {
    fn apply(self, opts: &mut AppOptions) {
        if let Some(path) = self.xml {
            opts.source.kind = SourceKind::FecXml;
            opts.source.path = path;
        } else if let Some(path) = self.yaml {
            opts.source.kind = SourceKind::Yaml;
            opts.source.path = path;
        } else if let Some(path) = self.wiki {
            opts.source.kind = SourceKind::WikiTable { office: self.office.unwrap_or_default() };
            opts.source.path = path;
        }

        if let Some(out) = self.out {
            opts.export.set_path(&out);
        }
        if let Some(format) = self.format {
            opts.export.format = format.into();
        }
        if self.include_headers {
            opts.export.include_headers = true;
        }
        if self.no_headers {
            opts.export.include_headers = false;
        }
        if self.no_export {
            opts.export.enabled = false;
        }

        if let Some(dir) = self.publish {
            opts.publish.enabled = true;
            opts.publish.wiki_dir = dir;
        }
        if self.draft {
            opts.publish.draft = true;
        }

        if let Some(file) = self.log_file {
            opts.log.file = file;
        }
        if self.verbose {
            opts.log.verbose = true;
        }
    }
}

/// Prints one line per event.
struct PrintProgress {
    total: usize,
    done: usize,
}

impl Progress for PrintProgress {
    fn begin(&mut self, total: usize) {
        self.total = total;
    }

    fn log(&mut self, msg: &str) {
        println!("{msg}");
    }

    fn item_done(&mut self, name: &str) {
        self.done += 1;
        println!("[{}/{}] {name}", self.done, self.total);
    }

    fn item_failed(&mut self, name: &str, reason: &str) {
        self.done += 1;
        eprintln!("[{}/{}] {name} failed: {reason}", self.done, self.total);
    }
}

pub fn run() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();
    let mut opts = config::load(&args.config)?;
    args.apply(&mut opts);

    crate::log::init(&opts.log.file, opts.log.verbose);
    logf!("Starting with source {} ({})", opts.source.path.display(), opts.source.kind);

    let mut progress = PrintProgress { total: 0, done: 0 };
    let summary = runner::run(&opts, Some(&mut progress))?;
    print_summary(&summary);
    Ok(())
}

fn print_summary(summary: &RunSummary) {
    println!("{} candidates", summary.candidates);
    for path in &summary.files_written {
        println!("Wrote {}", path.display());
    }
    if summary.pages_created + summary.pages_existing + summary.failures > 0 {
        println!(
            "Pages: {} created, {} already existed, {} failed",
            summary.pages_created, summary.pages_existing, summary.failures
        );
    }
}
