//! Terminal plumbing: capability detection, key mapping, and a crossterm
//! backed [`Surface`].

use std::io::{self, Write};

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use crossterm::style::{Attribute, Print, ResetColor, SetAttribute, SetForegroundColor};
use crossterm::{cursor, queue, terminal};
use is_terminal::IsTerminal;
use unicode_width::UnicodeWidthChar;

use crate::tree::{Input, Title};

use super::list::Surface;
use super::theme::span_color;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TerminalCapabilities {
    pub is_tty: bool,
    pub supports_color: bool,
    pub supports_unicode: bool,
}

pub fn detect_capabilities() -> TerminalCapabilities {
    detect_capabilities_impl(
        |key| std::env::var(key).ok(),
        io::stdin().is_terminal() && io::stdout().is_terminal(),
    )
}

fn detect_capabilities_impl(
    get_env: impl Fn(&str) -> Option<String>,
    is_tty: bool,
) -> TerminalCapabilities {
    let term = get_env("TERM").unwrap_or_default();
    let term_is_dumb = term.eq_ignore_ascii_case("dumb");
    let no_color = get_env("NO_COLOR").is_some();

    TerminalCapabilities {
        is_tty,
        supports_color: is_tty && !term_is_dumb && !no_color,
        supports_unicode: !term_is_dumb && unicode_locale(&get_env),
    }
}

fn unicode_locale(get_env: &impl Fn(&str) -> Option<String>) -> bool {
    const KEYS: &[&str] = &["LC_ALL", "LC_CTYPE", "LANG"];
    for k in KEYS {
        if let Some(val) = get_env(k) {
            let v = val.to_lowercase();
            if v.contains("utf-8") || v.contains("utf8") {
                return true;
            }
            if v == "c" || v == "posix" {
                return false;
            }
        }
    }

    true
}

/// Map a key press to the input alphabet
pub fn key_to_input(key: KeyEvent) -> Option<Input> {
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        return match key.code {
            KeyCode::Char('c') => Some(Input::Quit),
            _ => None,
        };
    }

    match key.code {
        KeyCode::Up | KeyCode::Char('k') => Some(Input::Up),
        KeyCode::Down | KeyCode::Char('j') => Some(Input::Down),
        KeyCode::Left | KeyCode::Char('h') => Some(Input::Left),
        KeyCode::Right | KeyCode::Char('l') => Some(Input::Right),
        KeyCode::Enter | KeyCode::Char(' ') => Some(Input::Select),
        KeyCode::Char('q') | KeyCode::Esc => Some(Input::Quit),
        KeyCode::Tab => Some(Input::Char('\t')),
        KeyCode::Char(c) => Some(Input::Char(c)),
        _ => None,
    }
}

/// Rectangle of the screen, in cells
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Region {
    pub x: u16,
    pub y: u16,
    pub width: u16,
    pub height: u16,
}

/// Draws list rows into a region of the terminal
pub struct TerminalSurface<'a, W: Write> {
    out: &'a mut W,
    region: Region,
    color: bool,
}

impl<'a, W: Write> TerminalSurface<'a, W> {
    pub fn new(out: &'a mut W, region: Region, color: bool) -> Self {
        Self { out, region, color }
    }

    fn blank_line(&mut self, row: u16) -> io::Result<()> {
        queue!(
            self.out,
            cursor::MoveTo(self.region.x, self.region.y + row),
            Print(" ".repeat(self.region.width as usize))
        )
    }
}

impl<W: Write> Surface for TerminalSurface<'_, W> {
    fn height(&self) -> usize {
        self.region.height as usize
    }

    fn clear(&mut self) -> io::Result<()> {
        for row in 0..self.region.height {
            self.blank_line(row)?;
        }
        Ok(())
    }

    fn draw_row(
        &mut self,
        row: usize,
        indent: usize,
        title: &Title,
        highlighted: bool,
    ) -> io::Result<()> {
        let Ok(row) = u16::try_from(row) else {
            return Ok(());
        };
        if row >= self.region.height {
            return Ok(());
        }

        let width = self.region.width as usize;
        let colored = self.color;
        let mut used = indent.min(width);
        queue!(
            self.out,
            cursor::MoveTo(self.region.x, self.region.y + row),
            Print(" ".repeat(used))
        )?;
        if highlighted {
            queue!(self.out, SetAttribute(Attribute::Reverse))?;
        }

        for span in title.spans() {
            if used >= width {
                break;
            }
            let (text, text_width) = truncate(&span.text, width - used);
            used += text_width;
            match span_color(span.style).filter(|_| colored) {
                Some(color) => queue!(
                    self.out,
                    SetForegroundColor(color),
                    Print(text),
                    ResetColor
                )?,
                None => queue!(self.out, Print(text))?,
            }
        }

        if highlighted {
            queue!(self.out, SetAttribute(Attribute::NoReverse))?;
        }
        Ok(())
    }
}

/// Longest prefix of `text` that fits in `max` columns, and its width
fn truncate(text: &str, max: usize) -> (&str, usize) {
    let mut width = 0;
    for (idx, ch) in text.char_indices() {
        let w = ch.width().unwrap_or(0);
        if width + w > max {
            return (&text[..idx], width);
        }
        width += w;
    }
    (text, width)
}

/// Raw mode and the alternate screen for as long as the guard lives
pub struct TerminalGuard {
    active: bool,
}

impl TerminalGuard {
    pub fn enter() -> io::Result<Self> {
        terminal::enable_raw_mode()?;
        let mut stdout = io::stdout();
        queue!(stdout, terminal::EnterAlternateScreen, cursor::Hide)?;
        stdout.flush()?;
        Ok(Self { active: true })
    }

    /// Give the terminal back, e.g. while an external dialog runs
    pub fn suspend(&mut self) -> io::Result<()> {
        if self.active {
            restore()?;
            self.active = false;
        }
        Ok(())
    }

    pub fn resume(&mut self) -> io::Result<()> {
        if !self.active {
            terminal::enable_raw_mode()?;
            let mut stdout = io::stdout();
            queue!(
                stdout,
                terminal::EnterAlternateScreen,
                cursor::Hide,
                terminal::Clear(terminal::ClearType::All)
            )?;
            stdout.flush()?;
            self.active = true;
        }
        Ok(())
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        if self.active {
            let _ = restore();
        }
    }
}

fn restore() -> io::Result<()> {
    let mut stdout = io::stdout();
    queue!(stdout, cursor::Show, terminal::LeaveAlternateScreen)?;
    stdout.flush()?;
    terminal::disable_raw_mode()
}
