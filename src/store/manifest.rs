// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Courier-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Courier and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Form manifest: the list content and the transcript document to display.
//!
//! A manifest is a single JSON file; the built-in demo manifest needs none.

use std::error::Error;
use std::fmt;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

#[derive(Debug)]
pub enum StoreError {
    Io { path: PathBuf, source: io::Error },
    Json { path: PathBuf, source: serde_json::Error },
}

impl fmt::Display for StoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io { path, source } => write!(f, "io error at {path:?}: {source}"),
            Self::Json { path, source } => write!(f, "json error at {path:?}: {source}"),
        }
    }
}

impl Error for StoreError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Io { source, .. } => Some(source),
            Self::Json { source, .. } => Some(source),
        }
    }
}

/// Content of one form session.
///
/// `document` points at the transcript file shown in the text pane; when
/// absent, the built-in sample document is used.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Manifest {
    pub platforms: Vec<String>,
    pub transcripts: Vec<String>,
    pub destinations: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub document: Option<PathBuf>,
}

impl Manifest {
    pub fn load(path: impl AsRef<Path>) -> Result<Self, StoreError> {
        let path = path.as_ref();
        let raw = fs::read_to_string(path).map_err(|source| StoreError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        serde_json::from_str(&raw).map_err(|source| StoreError::Json {
            path: path.to_path_buf(),
            source,
        })
    }

    /// The built-in demo form.
    pub fn demo() -> Self {
        Self {
            platforms: vec![" DEV ".to_owned(), " CERT ".to_owned(), " PROD ".to_owned()],
            transcripts: vec![
                " kpu01.xml ".to_owned(),
                " langara01.xml ".to_owned(),
                " sfu01.xml ".to_owned(),
                " ubc01.xml ".to_owned(),
                " ufv01.xml ".to_owned(),
            ],
            destinations: vec![
                " Douglas College ".to_owned(),
                " Kwantlen Polytechnical University ".to_owned(),
                " Simon Fraser University ".to_owned(),
            ],
            document: None,
        }
    }

    /// The text pane's content, line by line.
    ///
    /// Reads `document` when set, the built-in sample otherwise.
    pub fn document_lines(&self) -> Result<Vec<String>, StoreError> {
        let Some(path) = self.document.as_ref() else {
            return Ok(sample_document());
        };
        let raw = fs::read_to_string(path).map_err(|source| StoreError::Io {
            path: path.clone(),
            source,
        })?;
        Ok(raw.lines().map(str::to_owned).collect())
    }
}

fn sample_document() -> Vec<String> {
    SAMPLE_DOCUMENT.lines().map(str::to_owned).collect()
}

const SAMPLE_DOCUMENT: &str = "\
TRANSCRIPT PREVIEW

No transcript file was configured for this session, so the pane shows
this placeholder instead. Point the manifest's \"document\" field at a
transcript file to preview it here while selecting a platform, source
transcript and destination institution.

The pane scrolls a page at a time with Page Up and Page Down from
anywhere in the form, and line by line with the arrow keys while it
holds focus. Scrolling is deliberately unbounded in both directions;
running past either end of the document simply shows empty space.

Selections are captured when a list is left with Tab or Right, or
pinned in place with Enter. The Submit control below the lists sends
the combined selection and reports it back in a confirmation overlay.
";
