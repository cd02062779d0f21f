//! Buffered terminal output surface.
//!
//! All drawing during a frame is queued into an in-memory buffer and released
//! to the terminal as one atomic flush, so an observer never sees a partially
//! drawn frame. The buffer is the only shared output resource; the batched
//! flush is the sole synchronization the single-threaded model needs.

use std::io::Write;

use crossterm::cursor::{Hide, MoveTo, Show};
use crossterm::queue;
use crossterm::style::{
    Attribute, Color, Print, ResetColor, SetAttribute, SetBackgroundColor, SetForegroundColor,
};
use crossterm::terminal::{Clear, ClearType};

use crate::core::layout::Layout;
use crate::core::style::{Border, Style};
use crate::error::Result;

/// Frame-scoped command buffer over queued terminal control operations.
pub struct Surface {
    buf: Vec<u8>,
}

impl Surface {
    pub fn new() -> Self {
        Self { buf: Vec::new() }
    }

    /// Bytes queued so far (diagnostics only).
    pub fn pending(&self) -> usize {
        self.buf.len()
    }

    pub fn move_to(&mut self, x: u16, y: u16) -> Result<()> {
        queue!(self.buf, MoveTo(x, y))?;
        Ok(())
    }

    /// Reset all attributes and colors.
    pub fn reset(&mut self) -> Result<()> {
        queue!(self.buf, SetAttribute(Attribute::Reset), ResetColor)?;
        Ok(())
    }

    pub fn set_foreground(&mut self, color: Color) -> Result<()> {
        queue!(self.buf, SetForegroundColor(color))?;
        Ok(())
    }

    pub fn set_background(&mut self, color: Color) -> Result<()> {
        queue!(self.buf, SetBackgroundColor(color))?;
        Ok(())
    }

    pub fn set_underline(&mut self, on: bool) -> Result<()> {
        let attr = if on {
            Attribute::Underlined
        } else {
            Attribute::NoUnderline
        };
        queue!(self.buf, SetAttribute(attr))?;
        Ok(())
    }

    pub fn print(&mut self, text: &str) -> Result<()> {
        queue!(self.buf, Print(text))?;
        Ok(())
    }

    pub fn show_cursor(&mut self) -> Result<()> {
        queue!(self.buf, Show)?;
        Ok(())
    }

    pub fn hide_cursor(&mut self) -> Result<()> {
        queue!(self.buf, Hide)?;
        Ok(())
    }

    pub fn clear_all(&mut self) -> Result<()> {
        queue!(self.buf, MoveTo(0, 0), Clear(ClearType::All))?;
        Ok(())
    }

    /// Reset, then apply a style's base colors and underline.
    pub fn apply_style(&mut self, style: &Style) -> Result<()> {
        self.reset()?;
        if let Some(bg) = style.background {
            self.set_background(bg)?;
        }
        if let Some(fg) = style.foreground {
            self.set_foreground(fg)?;
        }
        if style.underline {
            self.set_underline(true)?;
        }
        Ok(())
    }

    /// Fill the outer box of `layout` with spaces in the style's colors.
    pub fn fill(&mut self, layout: &Layout, style: &Style) -> Result<()> {
        if layout.is_degenerate() {
            return Ok(());
        }
        self.apply_style(style)?;
        let row = " ".repeat(layout.width as usize);
        for dy in 0..layout.height {
            self.move_to(layout.x, layout.y + dy)?;
            self.print(&row)?;
        }
        Ok(())
    }

    /// Paint a border on the outer edge of `layout`, with an optional label
    /// embedded in the top edge.
    pub fn draw_border(&mut self, layout: &Layout, border: Border, label: &str, style: &Style) -> Result<()> {
        if layout.width < 2 || layout.height < 2 {
            return Ok(());
        }
        let glyphs = border.glyphs();
        self.reset()?;
        if let Some(bg) = style.background {
            self.set_background(bg)?;
        }
        if let Some(fg) = style.border_color.or(style.foreground) {
            self.set_foreground(fg)?;
        }

        let inner_span = (layout.width - 2) as usize;
        let horizontal: String = std::iter::repeat(glyphs.horizontal).take(inner_span).collect();

        self.move_to(layout.x, layout.y)?;
        self.print(&format!("{}{}{}", glyphs.top_left, horizontal, glyphs.top_right))?;
        for dy in 1..layout.height - 1 {
            self.move_to(layout.x, layout.y + dy)?;
            self.print(&glyphs.vertical.to_string())?;
            self.move_to(layout.x + layout.width - 1, layout.y + dy)?;
            self.print(&glyphs.vertical.to_string())?;
        }
        self.move_to(layout.x, layout.y + layout.height - 1)?;
        self.print(&format!("{}{}{}", glyphs.bottom_left, horizontal, glyphs.bottom_right))?;

        if !label.is_empty() && inner_span > 2 {
            let text: String = label.chars().take(inner_span - 2).collect();
            let lx = layout.x + 1 + ((inner_span - (text.chars().count() + 2)) / 2) as u16;
            self.reset()?;
            if let Some(bg) = style.label_background.or(style.background) {
                self.set_background(bg)?;
            }
            if let Some(fg) = style.label_foreground.or(style.foreground) {
                self.set_foreground(fg)?;
            }
            self.move_to(lx, layout.y)?;
            self.print(&format!(" {text} "))?;
        }
        Ok(())
    }

    /// Release everything queued so far as one write, then clear the buffer.
    ///
    /// Called even after a draw fault so partial output up to the fault point
    /// still reaches the terminal before the fault is surfaced.
    pub fn flush_to(&mut self, out: &mut impl Write) -> Result<()> {
        out.write_all(&self.buf)?;
        out.flush()?;
        self.buf.clear();
        Ok(())
    }
}

impl Default for Surface {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flush_releases_and_clears() {
        let mut surface = Surface::new();
        surface.move_to(2, 3).unwrap();
        surface.print("hi").unwrap();
        assert!(surface.pending() > 0);

        let mut out = Vec::new();
        surface.flush_to(&mut out).unwrap();
        assert!(!out.is_empty());
        assert_eq!(surface.pending(), 0);
    }

    #[test]
    fn fill_skips_degenerate_boxes() {
        let mut surface = Surface::new();
        let layout = Layout::default();
        surface.fill(&layout, &Style::new()).unwrap();
        assert_eq!(surface.pending(), 0);
    }
}
