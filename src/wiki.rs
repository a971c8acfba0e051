// src/wiki.rs
//! Page publishing.
//!
//! `Wiki` is the seam to whatever hosts the pages. `publish` renders one
//! candidate, creates the page unless it already exists, and records the new
//! title on the bot's list page. `DirWiki` keeps pages as files in a
//! directory, one `<sanitized title>.wiki` file per page.

use std::fs::{self, OpenOptions};
use std::io::{self, Write};
use std::path::PathBuf;

use thiserror::Error;

use crate::candidate::Candidate;
use crate::config::consts::EDIT_SUMMARY;
use crate::config::options::{PublishOptions, RenderOptions};
use crate::core::sanitize::sanitize_page_filename;
use crate::render::wikipedia_content;

#[derive(Debug, Error)]
pub enum WikiError {
    #[error("page {0} already exists")]
    PageExists(String),
    #[error("page {0} wasn't created, but there were no errors")]
    NotCreated(String),
    #[error("wiki storage: {0}")]
    Io(#[from] io::Error),
}

pub trait Wiki {
    /// Location of the page when it exists.
    fn page_exists(&mut self, title: &str) -> Result<Option<String>, WikiError>;

    /// Create a new page. Fails with `PageExists` rather than overwrite.
    fn create_page(&mut self, title: &str, content: &str, summary: &str) -> Result<(), WikiError>;

    /// Append to a page, creating it when missing.
    fn append_to_page(&mut self, title: &str, text: &str, summary: &str) -> Result<(), WikiError>;
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Published {
    Created(String),
    AlreadyExists(String),
}

impl Published {
    pub fn location(&self) -> &str {
        match self {
            Published::Created(l) | Published::AlreadyExists(l) => l,
        }
    }
}

/// Create the page for `candidate` unless one is already there.
pub fn publish(
    wiki: &mut dyn Wiki,
    candidate: &Candidate,
    publish: &PublishOptions,
    render: &RenderOptions,
) -> Result<Published, WikiError> {
    let title = publish.page_title(candidate.name());

    if let Some(existing) = wiki.page_exists(&title)? {
        logf!("{title} already exists at {existing}");
        return Ok(Published::AlreadyExists(existing));
    }

    wiki.create_page(&title, &wikipedia_content(candidate, render), EDIT_SUMMARY)?;

    let Some(location) = wiki.page_exists(&title)? else {
        return Err(WikiError::NotCreated(title));
    };

    let link = format!("[[{title}]]<br>");
    wiki.append_to_page(&publish.list_page(), &link, EDIT_SUMMARY)?;

    logf!("Created {title} at {location}");
    Ok(Published::Created(location))
}

/// Pages as files under `root`.
pub struct DirWiki {
    root: PathBuf,
}

impl DirWiki {
    pub fn new(root: impl Into<PathBuf>) -> Result<Self, WikiError> {
        let root = root.into();
        fs::create_dir_all(&root)?;
        Ok(Self { root })
    }

    pub fn page_path(&self, title: &str) -> PathBuf {
        self.root.join(join!(&sanitize_page_filename(title), ".wiki"))
    }
}

impl Wiki for DirWiki {
    fn page_exists(&mut self, title: &str) -> Result<Option<String>, WikiError> {
        let path = self.page_path(title);
        Ok(path.is_file().then(|| path.display().to_string()))
    }

    fn create_page(&mut self, title: &str, content: &str, summary: &str) -> Result<(), WikiError> {
        let path = self.page_path(title);
        let mut file = match OpenOptions::new().write(true).create_new(true).open(&path) {
            Ok(f) => f,
            Err(e) if e.kind() == io::ErrorKind::AlreadyExists => {
                return Err(WikiError::PageExists(s!(title)));
            }
            Err(e) => return Err(e.into()),
        };
        file.write_all(content.as_bytes())?;
        logd!("{title}: {summary}");
        Ok(())
    }

    fn append_to_page(&mut self, title: &str, text: &str, summary: &str) -> Result<(), WikiError> {
        let mut file = OpenOptions::new().create(true).append(true).open(self.page_path(title))?;
        file.write_all(text.as_bytes())?;
        logd!("{title}: {summary}");
        Ok(())
    }
}
