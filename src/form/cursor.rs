// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Courier-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Courier and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Cursor and scroll arithmetic.
//!
//! Three independent models: [`ListCursor`] (window-following selection on the
//! three lists), [`FreeCursor`] (plain one-line shift on the text pane), and
//! [`Scroll`] (unbounded page scroll on the text pane). The up/down list moves
//! are deliberately not mirror images of each other; see the notes on
//! [`ListCursor::move_up`].

/// Lines moved per page-scroll step.
pub const SCROLL_PAGE: i64 = 10;

/// Selection state of one list region.
///
/// `cursor` is the selected row inside the visible window, `origin` the
/// absolute index of the window's first content line. The selected content
/// line is always `origin + cursor`; nothing here bounds it to the list's
/// actual length — a selection past the end reads as empty content.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ListCursor {
    cursor: usize,
    origin: usize,
}

impl ListCursor {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn origin(&self) -> usize {
        self.origin
    }

    /// Absolute index of the selected content line.
    pub fn absolute_line(&self) -> usize {
        self.origin + self.cursor
    }

    /// Advance the selection by one line.
    ///
    /// Moves the cursor while the window has room below it, then scrolls the
    /// window by bumping the origin once the cursor sits on the bottom edge.
    /// Either way the selected absolute line grows by exactly one.
    pub fn move_down(&mut self, window: usize) {
        if self.cursor + 1 < window {
            self.cursor += 1;
        } else {
            self.origin += 1;
        }
    }

    /// Retreat the selection by one line.
    ///
    /// When `cursor == origin` the selection snaps to the window top and stops
    /// there, even if both values could retreat further. Not symmetric with
    /// [`ListCursor::move_down`]; both shapes are observable behavior and kept
    /// as separate functions.
    pub fn move_up(&mut self) {
        if self.cursor == self.origin {
            return;
        }
        if self.cursor > 0 {
            self.cursor -= 1;
        } else if self.origin > 0 {
            self.origin -= 1;
        }
    }
}

/// Free cursor of the text pane: a single line offset, floored at zero.
///
/// No window-follow logic; page movement is [`Scroll`]'s job.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FreeCursor {
    line: usize,
}

impl FreeCursor {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn line(&self) -> usize {
        self.line
    }

    pub fn down(&mut self) {
        self.line += 1;
    }

    pub fn up(&mut self) {
        self.line = self.line.saturating_sub(1);
    }
}

/// Page scroll of the text pane.
///
/// The origin is signed and unclamped in both directions: scrolling past the
/// end or above the start is permitted and left to the renderer to absorb.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Scroll {
    origin: i64,
}

impl Scroll {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn origin(&self) -> i64 {
        self.origin
    }

    pub fn page_down(&mut self) {
        self.origin += SCROLL_PAGE;
    }

    pub fn page_up(&mut self) {
        self.origin -= SCROLL_PAGE;
    }
}
