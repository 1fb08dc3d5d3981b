// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Courier-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Courier and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Seam between the form core and the rendering engine.
//!
//! The controller never draws; it mutates a [`Screen`] and the shell renders
//! whatever the screen holds on the next frame. [`FormScreen`] is the
//! in-memory implementation used by both the ratatui shell and the tests.

use std::collections::BTreeMap;
use std::error::Error;
use std::fmt;

use super::region::Region;

/// Errors reported by the rendering collaborator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScreenError {
    /// The addressed region does not currently exist on the screen.
    UnknownRegion(Region),
}

impl fmt::Display for ScreenError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnknownRegion(region) => write!(f, "unknown region: {region}"),
        }
    }
}

impl Error for ScreenError {}

/// Operations the form core drives against the rendering engine.
///
/// Content reads are infallible — a missing line is `None`, never an error —
/// while mutations can fail when the addressed region does not exist. Errors
/// propagate unmodified to the event loop.
pub trait Screen {
    /// Content line at `index` within `region`, if present.
    fn line(&self, region: Region, index: usize) -> Option<&str>;

    /// Rows currently rendered for `region` (list window height).
    fn window_height(&self, region: Region) -> usize;

    fn set_cursor(&mut self, region: Region, line: usize) -> Result<(), ScreenError>;

    fn set_origin(&mut self, region: Region, line: i64) -> Result<(), ScreenError>;

    /// Move focus to `region`.
    fn set_current_region(&mut self, region: Region) -> Result<(), ScreenError>;

    /// Drop all content lines of `region`. Creates the message region if absent.
    fn clear_content(&mut self, region: Region) -> Result<(), ScreenError>;

    /// Append `text` (may span lines) to `region`. Creates the message region
    /// if absent.
    fn append_text(&mut self, region: Region, text: &str) -> Result<(), ScreenError>;

    /// Destroy a transient region. Only the message overlay can be deleted.
    fn delete_region(&mut self, region: Region) -> Result<(), ScreenError>;
}

/// In-memory screen state.
///
/// Holds per-region content, the cursor/origin mirrors pushed by the
/// controller, and the window heights the shell reports back from layout.
/// The message region exists only between `append_text`/`clear_content`
/// and `delete_region`.
#[derive(Debug, Clone)]
pub struct FormScreen {
    content: BTreeMap<Region, Vec<String>>,
    cursors: BTreeMap<Region, usize>,
    origins: BTreeMap<Region, i64>,
    windows: BTreeMap<Region, usize>,
    current: Region,
    message_open: bool,
}

/// Default list window height, matching the form's fixed layout.
const DEFAULT_LIST_WINDOW: usize = 3;

impl FormScreen {
    pub fn new(
        platforms: Vec<String>,
        transcripts: Vec<String>,
        destinations: Vec<String>,
        document: Vec<String>,
    ) -> Self {
        let mut content = BTreeMap::new();
        content.insert(Region::Banner, Vec::new());
        content.insert(Region::Platforms, platforms);
        content.insert(Region::Transcripts, transcripts);
        content.insert(Region::Destinations, destinations);
        content.insert(Region::Submit, vec!["Submit".to_owned()]);
        content.insert(Region::Text, document);

        let mut windows = BTreeMap::new();
        for region in [Region::Platforms, Region::Transcripts, Region::Destinations] {
            windows.insert(region, DEFAULT_LIST_WINDOW);
        }

        Self {
            content,
            cursors: BTreeMap::new(),
            origins: BTreeMap::new(),
            windows,
            current: Region::Platforms,
            message_open: false,
        }
    }

    fn exists(&self, region: Region) -> bool {
        match region {
            Region::Message => self.message_open,
            _ => self.content.contains_key(&region),
        }
    }

    fn ensure_exists(&self, region: Region) -> Result<(), ScreenError> {
        if self.exists(region) {
            Ok(())
        } else {
            Err(ScreenError::UnknownRegion(region))
        }
    }

    pub fn current_region(&self) -> Region {
        self.current
    }

    pub fn lines(&self, region: Region) -> &[String] {
        self.content.get(&region).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn banner(&self) -> String {
        self.lines(Region::Banner).join("\n")
    }

    /// Overlay text while the message region is open.
    pub fn message(&self) -> Option<String> {
        if self.message_open {
            Some(self.lines(Region::Message).join("\n"))
        } else {
            None
        }
    }

    pub fn cursor(&self, region: Region) -> usize {
        self.cursors.get(&region).copied().unwrap_or(0)
    }

    pub fn origin(&self, region: Region) -> i64 {
        self.origins.get(&region).copied().unwrap_or(0)
    }

    /// Reported by the shell after layout so list movement sees the real
    /// window size instead of the built-in default.
    pub fn set_window_height(&mut self, region: Region, rows: usize) {
        self.windows.insert(region, rows);
    }
}

impl Screen for FormScreen {
    fn line(&self, region: Region, index: usize) -> Option<&str> {
        self.content.get(&region)?.get(index).map(String::as_str)
    }

    fn window_height(&self, region: Region) -> usize {
        self.windows.get(&region).copied().unwrap_or(0)
    }

    fn set_cursor(&mut self, region: Region, line: usize) -> Result<(), ScreenError> {
        self.ensure_exists(region)?;
        self.cursors.insert(region, line);
        Ok(())
    }

    fn set_origin(&mut self, region: Region, line: i64) -> Result<(), ScreenError> {
        self.ensure_exists(region)?;
        self.origins.insert(region, line);
        Ok(())
    }

    fn set_current_region(&mut self, region: Region) -> Result<(), ScreenError> {
        self.ensure_exists(region)?;
        self.current = region;
        Ok(())
    }

    fn clear_content(&mut self, region: Region) -> Result<(), ScreenError> {
        if region == Region::Message {
            self.message_open = true;
        } else {
            self.ensure_exists(region)?;
        }
        self.content.insert(region, Vec::new());
        Ok(())
    }

    fn append_text(&mut self, region: Region, text: &str) -> Result<(), ScreenError> {
        if region == Region::Message {
            self.message_open = true;
        } else {
            self.ensure_exists(region)?;
        }
        let lines = self.content.entry(region).or_default();
        lines.extend(text.split('\n').map(str::to_owned));
        Ok(())
    }

    fn delete_region(&mut self, region: Region) -> Result<(), ScreenError> {
        if region == Region::Message && self.message_open {
            self.message_open = false;
            self.content.remove(&Region::Message);
            Ok(())
        } else {
            Err(ScreenError::UnknownRegion(region))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{FormScreen, Region, Screen, ScreenError};

    fn screen() -> FormScreen {
        FormScreen::new(
            vec![" DEV ".to_owned(), " CERT ".to_owned()],
            vec![" kpu01.xml ".to_owned()],
            vec![" Douglas College ".to_owned()],
            vec!["first".to_owned(), "second".to_owned()],
        )
    }

    #[test]
    fn line_reads_content_and_absence_is_none() {
        let screen = screen();
        assert_eq!(screen.line(Region::Platforms, 1), Some(" CERT "));
        assert_eq!(screen.line(Region::Platforms, 9), None);
        assert_eq!(screen.line(Region::Message, 0), None);
    }

    #[test]
    fn message_region_is_created_by_append_and_destroyed_by_delete() {
        let mut screen = screen();
        assert_eq!(screen.message(), None);

        screen.append_text(Region::Message, "Submitted , , ").unwrap();
        assert_eq!(screen.message().as_deref(), Some("Submitted , , "));

        screen.set_current_region(Region::Message).unwrap();
        assert_eq!(screen.current_region(), Region::Message);

        screen.delete_region(Region::Message).unwrap();
        assert_eq!(screen.message(), None);
    }

    #[test]
    fn deleting_an_absent_message_region_reports_unknown_region() {
        let mut screen = screen();
        assert_eq!(
            screen.delete_region(Region::Message),
            Err(ScreenError::UnknownRegion(Region::Message))
        );
    }

    #[test]
    fn permanent_regions_cannot_be_deleted() {
        let mut screen = screen();
        assert_eq!(
            screen.delete_region(Region::Platforms),
            Err(ScreenError::UnknownRegion(Region::Platforms))
        );
    }

    #[test]
    fn focusing_a_closed_message_region_fails() {
        let mut screen = screen();
        assert_eq!(
            screen.set_current_region(Region::Message),
            Err(ScreenError::UnknownRegion(Region::Message))
        );
    }

    #[test]
    fn banner_updates_via_clear_and_append() {
        let mut screen = screen();
        screen.append_text(Region::Banner, "one").unwrap();
        screen.clear_content(Region::Banner).unwrap();
        screen.append_text(Region::Banner, "two").unwrap();
        assert_eq!(screen.banner(), "two");
    }

    #[test]
    fn cursor_and_origin_mirrors_round_trip() {
        let mut screen = screen();
        screen.set_cursor(Region::Transcripts, 2).unwrap();
        screen.set_origin(Region::Text, -20).unwrap();
        assert_eq!(screen.cursor(Region::Transcripts), 2);
        assert_eq!(screen.origin(Region::Text), -20);
    }

    #[test]
    fn window_height_defaults_to_the_fixed_list_layout() {
        let mut screen = screen();
        assert_eq!(screen.window_height(Region::Platforms), 3);
        screen.set_window_height(Region::Platforms, 7);
        assert_eq!(screen.window_height(Region::Platforms), 7);
    }
}
