// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Courier-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Courier and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use super::region::Region;
use super::screen::{Screen, ScreenError};

/// The transient confirmation overlay.
///
/// While open, the message region owns focus, so none of the list/text
/// bindings can fire. Dismissal always hands focus back to `Platforms`; the
/// region recorded at show time is kept for inspection but is not the restore
/// target (a quirk of the original form, preserved rather than corrected).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Overlay {
    shown_over: Option<Region>,
}

impl Overlay {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_open(&self) -> bool {
        self.shown_over.is_some()
    }

    /// Region that held focus when the overlay opened.
    pub fn shown_over(&self) -> Option<Region> {
        self.shown_over
    }

    /// Open the overlay with `message`, taking focus.
    ///
    /// Idempotent: a second show while open changes nothing.
    pub fn show<S: Screen>(
        &mut self,
        screen: &mut S,
        over: Region,
        message: &str,
    ) -> Result<(), ScreenError> {
        if self.is_open() {
            return Ok(());
        }
        screen.clear_content(Region::Message)?;
        screen.append_text(Region::Message, message)?;
        screen.set_current_region(Region::Message)?;
        self.shown_over = Some(over);
        Ok(())
    }

    /// Close the overlay, reset the banner, and focus `Platforms`.
    pub fn dismiss<S: Screen>(&mut self, screen: &mut S, banner: &str) -> Result<(), ScreenError> {
        screen.delete_region(Region::Message)?;
        self.shown_over = None;
        screen.clear_content(Region::Banner)?;
        screen.append_text(Region::Banner, banner)?;
        screen.set_current_region(Region::Platforms)
    }
}
