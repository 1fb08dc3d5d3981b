// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Courier-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Courier and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Terminal UI.
//!
//! The interactive shell (ratatui + crossterm) around the form core: it owns
//! the terminal, renders the screen state every frame, and feeds translated
//! key events into the controller.

use std::error::Error;
use std::io;
use std::time::Duration;

use crossterm::{
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    backend::CrosstermBackend,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    text::{Line, Span, Text},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame, Terminal,
};

use crate::form::{Controller, FormScreen, Key, Region, ScreenError, Signal};
use crate::store::Manifest;

const FOCUS_COLOR: Color = Color::LightGreen;
const SELECTION_BG: Color = Color::Green;
const SELECTION_FG: Color = Color::Black;
const SUBMIT_BG: Color = Color::Yellow;
const SUBMIT_FOCUS_BG: Color = Color::White;
const SUBMIT_FG: Color = Color::Black;
const SCROLL_NOTE: &str = "Note: Scroll transcript with Page Up & Page Down";
const POLL_INTERVAL: Duration = Duration::from_millis(250);
const MESSAGE_WIDTH: u16 = 60;
const MESSAGE_HEIGHT: u16 = 3;

/// Runs the interactive form until the user quits.
pub fn run(manifest: &Manifest) -> Result<(), Box<dyn Error>> {
    let document = manifest.document_lines()?;

    let mut terminal = TerminalSession::new()?;
    let mut app = App::new(manifest, document);
    app.start()?;

    while !app.should_quit {
        terminal.draw(|frame| draw(frame, &mut app))?;

        if event::poll(POLL_INTERVAL)? {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => {
                    app.handle_key(key)?;
                }
                _ => {}
            }
        }
    }

    Ok(())
}

struct App {
    controller: Controller,
    screen: FormScreen,
    should_quit: bool,
}

impl App {
    fn new(manifest: &Manifest, document: Vec<String>) -> Self {
        Self {
            controller: Controller::new(),
            screen: FormScreen::new(
                manifest.platforms.clone(),
                manifest.transcripts.clone(),
                manifest.destinations.clone(),
                document,
            ),
            should_quit: false,
        }
    }

    fn start(&mut self) -> Result<(), ScreenError> {
        self.controller.start(&mut self.screen)
    }

    /// Feed one key press into the controller.
    ///
    /// The quit sentinel lands here and flips `should_quit`; collaborator
    /// errors keep propagating to the event loop.
    fn handle_key(&mut self, key: KeyEvent) -> Result<(), ScreenError> {
        let Some(key) = translate_key(key.code, key.modifiers) else {
            return Ok(());
        };
        let focus = self.controller.focus();
        match self.controller.handle(&mut self.screen, focus, key) {
            Ok(()) => Ok(()),
            Err(Signal::Quit) => {
                self.should_quit = true;
                Ok(())
            }
            Err(Signal::Screen(err)) => Err(err),
        }
    }
}

/// Map a crossterm key press onto the form's key vocabulary.
fn translate_key(code: KeyCode, modifiers: KeyModifiers) -> Option<Key> {
    match code {
        KeyCode::Char('c') if modifiers.contains(KeyModifiers::CONTROL) => Some(Key::CtrlC),
        KeyCode::Tab => Some(Key::Tab),
        KeyCode::Right => Some(Key::Right),
        KeyCode::Up => Some(Key::Up),
        KeyCode::Down => Some(Key::Down),
        KeyCode::Enter => Some(Key::Enter),
        KeyCode::PageUp => Some(Key::PageUp),
        KeyCode::PageDown => Some(Key::PageDown),
        _ => None,
    }
}

fn draw(frame: &mut Frame<'_>, app: &mut App) {
    let area = frame.size();

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(5),
            Constraint::Length(1),
            Constraint::Min(3),
        ])
        .split(area);
    let banner_area = rows[0];
    let lists_area = rows[1];
    let submit_area = rows[2];
    let text_area = rows[3];

    let lists = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(11),
            Constraint::Length(26),
            Constraint::Min(20),
        ])
        .split(lists_area);

    let focus = app.screen.current_region();

    let banner = Paragraph::new(app.screen.banner())
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(banner, banner_area);

    draw_list(frame, app, Region::Platforms, "  Hub  ", lists[0], focus);
    draw_list(frame, app, Region::Transcripts, "  Source Transcript  ", lists[1], focus);
    draw_list(frame, app, Region::Destinations, "  Destination Institution  ", lists[2], focus);

    let submit_row = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(8),
            Constraint::Length(10),
            Constraint::Min(0),
        ])
        .split(submit_area);
    let submit = Paragraph::new(" Submit ").style(submit_style(focus == Region::Submit));
    frame.render_widget(submit, submit_row[0]);
    let note = Paragraph::new(SCROLL_NOTE);
    frame.render_widget(note, submit_row[2]);

    draw_text_pane(frame, app, text_area, focus);

    if let Some(message) = app.screen.message() {
        let overlay_area = overlay_rect(area);
        frame.render_widget(Clear, overlay_area);
        let overlay = Paragraph::new(message)
            .block(Block::default().borders(Borders::ALL).border_style(panel_border_style(true)));
        frame.render_widget(overlay, overlay_area);
    }
}

fn draw_list(
    frame: &mut Frame<'_>,
    app: &mut App,
    region: Region,
    title: &str,
    area: Rect,
    focus: Region,
) {
    let window = area.height.saturating_sub(2) as usize;
    app.screen.set_window_height(region, window);

    let origin = app.screen.origin(region).max(0) as usize;
    let cursor = app.screen.cursor(region);
    let lines = visible_list_lines(app.screen.lines(region), origin, window, cursor);

    let list = Paragraph::new(Text::from(lines)).block(
        Block::default()
            .borders(Borders::ALL)
            .title(title.to_owned())
            .border_style(panel_border_style(focus == region)),
    );
    frame.render_widget(list, area);
}

/// The window of a list: `window` rows starting at `origin`, with the cursor
/// row carrying the selection bar. Rows past the content render empty.
fn visible_list_lines(
    lines: &[String],
    origin: usize,
    window: usize,
    cursor: usize,
) -> Vec<Line<'static>> {
    let mut out = Vec::with_capacity(window);
    for row in 0..window {
        let raw = lines.get(origin + row).map(String::as_str).unwrap_or("");
        let line = if row == cursor {
            Line::from(Span::styled(
                raw.to_owned(),
                Style::default().bg(SELECTION_BG).fg(SELECTION_FG),
            ))
        } else {
            Line::from(raw.to_owned())
        };
        out.push(line);
    }
    out
}

fn draw_text_pane(frame: &mut Frame<'_>, app: &mut App, area: Rect, focus: Region) {
    let origin = app.screen.origin(Region::Text);
    let mut text = Text::from(
        app.screen
            .lines(Region::Text)
            .iter()
            .map(|line| Line::from(line.clone()))
            .collect::<Vec<_>>(),
    );
    // A negative origin shows blank space above the document instead of
    // clamping; the scroll model never bounds itself.
    let top_pad = clamp_positive_i64_to_u16(-origin);
    if top_pad > 0 {
        text = pad_text_top(text, top_pad as usize);
    }
    let scroll_y = clamp_positive_i64_to_u16(origin);

    let pane = Paragraph::new(text)
        .block(Block::default().borders(Borders::ALL).border_style(panel_border_style(focus == Region::Text)))
        .wrap(Wrap { trim: false })
        .scroll((scroll_y, 0));
    frame.render_widget(pane, area);

    if focus == Region::Text {
        let cursor_line = app.screen.cursor(Region::Text) as i64;
        let rel = cursor_line - origin;
        let inner_height = i64::from(area.height.saturating_sub(2));
        if rel >= 0 && rel < inner_height {
            frame.set_cursor(area.x + 1, area.y + 1 + rel as u16);
        }
    }
}

fn submit_style(focused: bool) -> Style {
    let bg = if focused { SUBMIT_FOCUS_BG } else { SUBMIT_BG };
    Style::default().bg(bg).fg(SUBMIT_FG)
}

fn panel_border_style(focused: bool) -> Style {
    if focused {
        Style::default().fg(FOCUS_COLOR)
    } else {
        Style::default()
    }
}

/// Centered overlay box, shrunk to fit small terminals.
fn overlay_rect(area: Rect) -> Rect {
    let width = MESSAGE_WIDTH.min(area.width);
    let height = MESSAGE_HEIGHT.min(area.height);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}

fn clamp_positive_i64_to_u16(value: i64) -> u16 {
    value.max(0).min(i64::from(u16::MAX)) as u16
}

fn pad_text_top(text: Text<'static>, top_pad: usize) -> Text<'static> {
    let mut lines = Vec::with_capacity(top_pad + text.lines.len());
    lines.extend(std::iter::repeat(Line::from("")).take(top_pad));
    lines.extend(text.lines);
    Text::from(lines)
}

struct TerminalSession {
    terminal: Terminal<CrosstermBackend<io::Stdout>>,
}

impl TerminalSession {
    fn new() -> Result<Self, Box<dyn Error>> {
        enable_raw_mode()?;

        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen).map_err(|err| {
            teardown_terminal();
            err
        })?;

        let backend = CrosstermBackend::new(stdout);
        let mut terminal = Terminal::new(backend).map_err(|err| {
            teardown_terminal();
            err
        })?;
        terminal.clear().map_err(|err| {
            teardown_terminal();
            err
        })?;

        Ok(Self { terminal })
    }

    fn draw(&mut self, draw_fn: impl FnOnce(&mut Frame<'_>)) -> io::Result<()> {
        self.terminal.draw(draw_fn)?;
        Ok(())
    }
}

impl Drop for TerminalSession {
    fn drop(&mut self) {
        let _ = self.terminal.show_cursor();
        teardown_terminal();
    }
}

fn teardown_terminal() {
    let _ = disable_raw_mode();
    let mut stdout = io::stdout();
    let _ = execute!(stdout, LeaveAlternateScreen);
}
