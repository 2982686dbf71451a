//! Terminal painter for styled text.
//!
//! `paint` translates a `StyledText` into an ordered command list: one color
//! change per run, one `MoveTo` per line. `paint_inline` does the same
//! without positioning, for plain stdout. `flush_to` queues the commands on
//! any `io::Write` and flushes once.
//!
//! Design invariants:
//! * Commands preserve ordering; no flushing mid-frame.
//! * Positions are absolute; the caller supplies the origin (its padding).
//! * The foreground color is reset after the last run.

use crate::color::Color;
use crate::style::StyledText;
use anyhow::Result;
use crossterm::{
    cursor::MoveTo,
    queue,
    style::{Print, ResetColor, SetForegroundColor},
    terminal::{Clear, ClearType},
};
use std::io::Write;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    MoveTo(u16, u16),
    ClearAll,
    ClearLine,
    SetForeground(Color),
    ResetColor,
    Print(String),
}

#[derive(Debug, Default)]
pub struct Writer {
    cmds: Vec<Command>,
}

impl Writer {
    pub fn new() -> Self {
        Self { cmds: Vec::new() }
    }
    pub fn move_to(&mut self, x: u16, y: u16) {
        self.cmds.push(Command::MoveTo(x, y));
    }
    pub fn clear_all(&mut self) {
        self.cmds.push(Command::ClearAll);
    }
    pub fn clear_line(&mut self) {
        self.cmds.push(Command::ClearLine);
    }
    pub fn set_foreground(&mut self, color: Color) {
        self.cmds.push(Command::SetForeground(color));
    }
    pub fn reset_color(&mut self) {
        self.cmds.push(Command::ResetColor);
    }
    pub fn print<S: Into<String>>(&mut self, s: S) {
        let s: String = s.into();
        if !s.is_empty() {
            self.cmds.push(Command::Print(s));
        }
    }
    pub fn commands(&self) -> &[Command] {
        &self.cmds
    }
    pub fn flush_to<W: Write>(self, out: &mut W) -> Result<()> {
        for c in self.cmds {
            match c {
                Command::MoveTo(x, y) => queue!(out, MoveTo(x, y))?,
                Command::ClearAll => queue!(out, Clear(ClearType::All))?,
                Command::ClearLine => queue!(out, Clear(ClearType::CurrentLine))?,
                Command::SetForeground(color) => queue!(out, SetForegroundColor(color.into()))?,
                Command::ResetColor => queue!(out, ResetColor)?,
                Command::Print(s) => queue!(out, Print(s))?,
            }
        }
        out.flush()?;
        Ok(())
    }
}

/// Append the commands drawing `text` with its top-left corner at `origin`.
pub fn paint(writer: &mut Writer, text: &StyledText<'_>, origin: (u16, u16)) {
    if text.is_empty() {
        return;
    }
    let (x, mut y) = origin;
    writer.move_to(x, y);
    for run in text.runs() {
        writer.set_foreground(run.color);
        let mut lines = run.text.split('\n');
        if let Some(first) = lines.next() {
            writer.print(first);
        }
        for line in lines {
            y = y.saturating_add(1);
            writer.move_to(x, y);
            writer.print(line);
        }
    }
    writer.reset_color();
}

/// Append the commands drawing `text` at the current cursor position, for
/// line-oriented output where absolute positioning does not apply.
pub fn paint_inline(writer: &mut Writer, text: &StyledText<'_>) {
    if text.is_empty() {
        return;
    }
    for run in text.runs() {
        writer.set_foreground(run.color);
        writer.print(run.text);
    }
    writer.reset_color();
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::style::{ClassColorMap, tag};
    use clarity_text::{CharClass, Classifier};

    #[test]
    fn one_color_change_per_run() {
        let mut colors = ClassColorMap::default();
        colors.set(CharClass::Digit, Color::RED);
        let spans = tag("ab12", &Classifier::default(), &colors);
        let styled = StyledText::new("ab12", &spans);
        let mut w = Writer::new();
        paint(&mut w, &styled, (2, 1));
        assert_eq!(
            w.commands(),
            &[
                Command::MoveTo(2, 1),
                Command::SetForeground(Color::BLACK),
                Command::Print("ab".into()),
                Command::SetForeground(Color::RED),
                Command::Print("12".into()),
                Command::ResetColor,
            ]
        );
    }

    #[test]
    fn newline_moves_to_next_row_at_origin_column() {
        let spans = tag("a\nb", &Classifier::default(), &ClassColorMap::default());
        let styled = StyledText::new("a\nb", &spans);
        let mut w = Writer::new();
        paint(&mut w, &styled, (3, 0));
        assert!(w.commands().contains(&Command::MoveTo(3, 1)));
    }

    #[test]
    fn inline_paint_has_no_positioning() {
        let spans = tag("Ab3!", &Classifier::default(), &ClassColorMap::default());
        let styled = StyledText::new("Ab3!", &spans);
        let mut w = Writer::new();
        paint_inline(&mut w, &styled);
        assert!(!w.commands().iter().any(|c| matches!(c, Command::MoveTo(..))));
        let printed: String = w
            .commands()
            .iter()
            .filter_map(|c| match c {
                Command::Print(s) => Some(s.as_str()),
                _ => None,
            })
            .collect();
        assert_eq!(printed, "Ab3!");
    }

    #[test]
    fn empty_text_paints_nothing() {
        let mut w = Writer::new();
        paint(&mut w, &StyledText::new("", &[]), (0, 0));
        assert!(w.commands().is_empty());
    }

    #[test]
    fn flush_emits_rgb_foreground() {
        let mut colors = ClassColorMap::default();
        colors.set(CharClass::Digit, Color::RED);
        let spans = tag("3", &Classifier::default(), &colors);
        let styled = StyledText::new("3", &spans);
        let mut w = Writer::new();
        paint(&mut w, &styled, (0, 0));
        let mut out = Vec::new();
        w.flush_to(&mut out).unwrap();
        let s = String::from_utf8(out).unwrap();
        assert!(s.contains("38;2;255;0;0m3"), "{s:?}");
    }
}
