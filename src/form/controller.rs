// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Courier-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Courier and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Focus controller.
//!
//! Key events arrive already tagged with the focused region; a capability
//! table maps `(region, key)` to an action and the controller applies it.
//! The same physical key means different things in different regions (arrows
//! window-follow on lists but free-shift on the text pane), so dispatch is
//! keyed, not polymorphic.

use std::error::Error;
use std::fmt;

use super::cursor::{FreeCursor, ListCursor, Scroll};
use super::options::Options;
use super::overlay::Overlay;
use super::region::Region;
use super::screen::{Screen, ScreenError};

/// Instructional banner shown at start and after the overlay is dismissed.
pub const INTRO_BANNER: &str = "Select target platform, source transcript and destination.";

/// Banner shown once focus advances into the submit control.
pub const SUBMIT_BANNER: &str = "Hit enter to submit selections";

/// Physical keys the form reacts to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Tab,
    Right,
    Up,
    Down,
    Enter,
    PageUp,
    PageDown,
    CtrlC,
}

/// Control signal returned from a transition handler.
///
/// `Quit` is the dedicated loop-exit sentinel, not a failure; `Screen` wraps a
/// collaborator error unmodified.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Signal {
    Quit,
    Screen(ScreenError),
}

impl fmt::Display for Signal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Quit => f.write_str("quit"),
            Self::Screen(err) => write!(f, "{err}"),
        }
    }
}

impl Error for Signal {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Quit => None,
            Self::Screen(err) => Some(err),
        }
    }
}

impl From<ScreenError> for Signal {
    fn from(err: ScreenError) -> Self {
        Self::Screen(err)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Action {
    Advance,
    CaptureLine,
    MenuDown,
    MenuUp,
    CursorDown,
    CursorUp,
    Submit,
    DismissMessage,
    PageTextDown,
    PageTextUp,
    Quit,
}

/// The capability table.
///
/// Global bindings (quit, page scroll) fire regardless of focus — including
/// while the overlay is open; everything else is scoped to the region that
/// currently holds focus.
fn binding(region: Region, key: Key) -> Option<Action> {
    match (region, key) {
        (_, Key::CtrlC) => Some(Action::Quit),
        (_, Key::PageDown) => Some(Action::PageTextDown),
        (_, Key::PageUp) => Some(Action::PageTextUp),
        (region, Key::Tab | Key::Right) if region.is_sequenced() => Some(Action::Advance),
        (region, Key::Down) if region.is_list() => Some(Action::MenuDown),
        (region, Key::Up) if region.is_list() => Some(Action::MenuUp),
        (region, Key::Enter) if region.is_list() => Some(Action::CaptureLine),
        (Region::Submit, Key::Enter) => Some(Action::Submit),
        (Region::Message, Key::Enter) => Some(Action::DismissMessage),
        (Region::Text, Key::Down) => Some(Action::CursorDown),
        (Region::Text, Key::Up) => Some(Action::CursorUp),
        _ => None,
    }
}

/// The form's state machine.
///
/// Owns all mutable form state: the focused region, one [`ListCursor`] per
/// list, the text pane's free cursor and page scroll, the gathered
/// [`Options`], and the [`Overlay`]. Each handled key mutates at most one of
/// them before pushing the change out through the [`Screen`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Controller {
    focus: Region,
    platforms: ListCursor,
    transcripts: ListCursor,
    destinations: ListCursor,
    text_cursor: FreeCursor,
    text_scroll: Scroll,
    options: Options,
    overlay: Overlay,
}

impl Controller {
    pub fn new() -> Self {
        Self::default()
    }

    /// Focus `Platforms` and show the instructional banner.
    ///
    /// Runs once at session start; no user input is needed to select the
    /// first region.
    pub fn start<S: Screen>(&mut self, screen: &mut S) -> Result<(), ScreenError> {
        screen.clear_content(Region::Banner)?;
        screen.append_text(Region::Banner, INTRO_BANNER)?;
        self.focus = Region::Platforms;
        screen.set_current_region(Region::Platforms)
    }

    pub fn focus(&self) -> Region {
        self.focus
    }

    pub fn options(&self) -> &Options {
        &self.options
    }

    pub fn overlay(&self) -> &Overlay {
        &self.overlay
    }

    pub fn list(&self, region: Region) -> Option<&ListCursor> {
        match region {
            Region::Platforms => Some(&self.platforms),
            Region::Transcripts => Some(&self.transcripts),
            Region::Destinations => Some(&self.destinations),
            _ => None,
        }
    }

    fn list_mut(&mut self, region: Region) -> Option<&mut ListCursor> {
        match region {
            Region::Platforms => Some(&mut self.platforms),
            Region::Transcripts => Some(&mut self.transcripts),
            Region::Destinations => Some(&mut self.destinations),
            _ => None,
        }
    }

    pub fn text_cursor(&self) -> &FreeCursor {
        &self.text_cursor
    }

    pub fn text_scroll(&self) -> &Scroll {
        &self.text_scroll
    }

    /// Handle one key event delivered for `region`.
    ///
    /// Unbound combinations are ignored. `Err(Signal::Quit)` asks the event
    /// loop to exit; `Err(Signal::Screen(_))` surfaces a collaborator error.
    pub fn handle<S: Screen>(
        &mut self,
        screen: &mut S,
        region: Region,
        key: Key,
    ) -> Result<(), Signal> {
        let Some(action) = binding(region, key) else {
            return Ok(());
        };

        match action {
            Action::Quit => Err(Signal::Quit),
            Action::Advance => {
                self.advance(screen, region)?;
                Ok(())
            }
            Action::CaptureLine => {
                self.capture_line(screen, region);
                Ok(())
            }
            Action::MenuDown => {
                let window = screen.window_height(region);
                if let Some(list) = self.list_mut(region) {
                    list.move_down(window);
                }
                self.push_list_state(screen, region)?;
                Ok(())
            }
            Action::MenuUp => {
                if let Some(list) = self.list_mut(region) {
                    list.move_up();
                }
                self.push_list_state(screen, region)?;
                Ok(())
            }
            Action::CursorDown => {
                self.text_cursor.down();
                screen.set_cursor(Region::Text, self.text_cursor.line())?;
                Ok(())
            }
            Action::CursorUp => {
                self.text_cursor.up();
                screen.set_cursor(Region::Text, self.text_cursor.line())?;
                Ok(())
            }
            Action::PageTextDown => {
                self.text_scroll.page_down();
                screen.set_origin(Region::Text, self.text_scroll.origin())?;
                Ok(())
            }
            Action::PageTextUp => {
                self.text_scroll.page_up();
                screen.set_origin(Region::Text, self.text_scroll.origin())?;
                Ok(())
            }
            Action::Submit => {
                let message = format!("Submitted {}", self.options);
                self.overlay.show(screen, self.focus, &message)?;
                self.focus = Region::Message;
                Ok(())
            }
            Action::DismissMessage => {
                self.overlay.dismiss(screen, INTRO_BANNER)?;
                self.focus = Region::Platforms;
                Ok(())
            }
        }
    }

    /// Capture (on lists), then move focus to the next sequenced region.
    fn advance<S: Screen>(&mut self, screen: &mut S, region: Region) -> Result<(), ScreenError> {
        if region.is_list() {
            self.capture_line(screen, region);
        }
        let next = region.next();
        if next == Region::Submit {
            screen.clear_content(Region::Banner)?;
            screen.append_text(Region::Banner, SUBMIT_BANNER)?;
        }
        self.focus = next;
        screen.set_current_region(next)
    }

    /// Record the line under the cursor into the region's option slot.
    ///
    /// A cursor past the end of the content captures an empty string.
    fn capture_line<S: Screen>(&mut self, screen: &S, region: Region) {
        let Some(list) = self.list(region) else {
            return;
        };
        let line = screen
            .line(region, list.absolute_line())
            .unwrap_or("")
            .to_owned();
        self.options.capture(region, line);
    }

    fn push_list_state<S: Screen>(
        &mut self,
        screen: &mut S,
        region: Region,
    ) -> Result<(), ScreenError> {
        let Some(list) = self.list(region) else {
            return Ok(());
        };
        screen.set_cursor(region, list.cursor())?;
        screen.set_origin(region, list.origin() as i64)
    }
}
