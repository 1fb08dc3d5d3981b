// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Courier-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Courier and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! One-shot transcript download.
//!
//! `courier fetch <url> <path>` saves a remote transcript file to disk and
//! exits. Entirely separate from the form; no state is shared.

use std::error::Error;
use std::fmt;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

#[derive(Debug)]
pub enum FetchError {
    Http { url: String, source: reqwest::Error },
    Status { url: String, status: reqwest::StatusCode },
    Io { path: PathBuf, source: io::Error },
}

impl fmt::Display for FetchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Http { url, source } => write!(f, "request to {url} failed: {source}"),
            Self::Status { url, status } => write!(f, "request to {url} returned {status}"),
            Self::Io { path, source } => write!(f, "io error at {path:?}: {source}"),
        }
    }
}

impl Error for FetchError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Http { source, .. } => Some(source),
            Self::Status { .. } => None,
            Self::Io { source, .. } => Some(source),
        }
    }
}

/// Download `url` into the file at `dest`, returning the bytes written.
///
/// The body is streamed to disk; a non-success HTTP status is an error, not a
/// saved error page.
pub fn fetch_to_file(url: &str, dest: impl AsRef<Path>) -> Result<u64, FetchError> {
    let dest = dest.as_ref();

    let mut response = reqwest::blocking::get(url).map_err(|source| FetchError::Http {
        url: url.to_owned(),
        source,
    })?;
    let status = response.status();
    if !status.is_success() {
        return Err(FetchError::Status {
            url: url.to_owned(),
            status,
        });
    }

    let mut file = fs::File::create(dest).map_err(|source| FetchError::Io {
        path: dest.to_path_buf(),
        source,
    })?;
    response.copy_to(&mut file).map_err(|source| FetchError::Http {
        url: url.to_owned(),
        source,
    })
}
