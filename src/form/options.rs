// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Courier-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Courier and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::fmt;

use super::region::Region;

/// The selections gathered while walking the form.
///
/// One slot per list region, each holding the last captured line verbatim
/// (surrounding whitespace included), or empty if the region was never
/// captured. One instance lives for the whole form session, owned by the
/// controller.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Options {
    platform: String,
    transcript: String,
    destination: String,
}

impl Options {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn platform(&self) -> &str {
        &self.platform
    }

    pub fn transcript(&self) -> &str {
        &self.transcript
    }

    pub fn destination(&self) -> &str {
        &self.destination
    }

    /// Write `line` into the slot named by `region`.
    ///
    /// Regions without a slot are a no-op. Any line is a valid choice,
    /// including an empty one; captures overwrite unconditionally.
    pub fn capture(&mut self, region: Region, line: impl Into<String>) {
        match region {
            Region::Platforms => self.platform = line.into(),
            Region::Transcripts => self.transcript = line.into(),
            Region::Destinations => self.destination = line.into(),
            _ => {}
        }
    }
}

impl fmt::Display for Options {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}, {}, {}", self.platform, self.transcript, self.destination)
    }
}
