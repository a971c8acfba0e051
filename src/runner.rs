// src/runner.rs
use std::error::Error;
use std::path::PathBuf;

use crate::config::AppOptions;
use crate::file::write_candidates;
use crate::progress::Progress;
use crate::sources::parse_source;
use crate::wiki::{DirWiki, Published, publish};

/// Summary of what was produced.
#[derive(Debug, Default)]
pub struct RunSummary {
    pub candidates: usize,
    pub files_written: Vec<PathBuf>,
    pub pages_created: usize,
    pub pages_existing: usize,
    pub failures: usize,
}

/// Top-level runner: read the source, export the table, publish pages.
/// `progress` can be None (no UI updates) or Some(&mut impl Progress).
pub fn run(
    opts: &AppOptions,
    mut progress: Option<&mut dyn Progress>,
) -> Result<RunSummary, Box<dyn Error>> {
    let candidates = parse_source(&opts.source)?;
    let mut summary = RunSummary { candidates: candidates.len(), ..RunSummary::default() };

    if let Some(p) = progress.as_deref_mut() {
        p.begin(candidates.len());
        p.log(&format!("{} candidates from {}", candidates.len(), opts.source.path.display()));
    }

    if candidates.is_empty() {
        logw!("No candidates found in {}", opts.source.path.display());
    }

    if opts.export.enabled {
        let path = write_candidates(&opts.export, &candidates)?;
        logf!("Wrote {}", path.display());
        if let Some(p) = progress.as_deref_mut() {
            p.log(&format!("Wrote {}", path.display()));
        }
        summary.files_written.push(path);
    }

    if opts.publish.enabled {
        let mut wiki = DirWiki::new(&opts.publish.wiki_dir)?;
        for candidate in &candidates {
            match publish(&mut wiki, candidate, &opts.publish, &opts.render) {
                Ok(Published::Created(_)) => summary.pages_created += 1,
                Ok(Published::AlreadyExists(_)) => summary.pages_existing += 1,
                Err(e) => {
                    loge!("Could not publish {}: {e}", candidate.name());
                    summary.failures += 1;
                    if let Some(p) = progress.as_deref_mut() {
                        p.item_failed(candidate.name(), &e.to_string());
                    }
                    continue;
                }
            }
            if let Some(p) = progress.as_deref_mut() {
                p.item_done(candidate.name());
            }
        }
    }

    if let Some(p) = progress.as_deref_mut() {
        p.finish();
    }
    Ok(summary)
}
