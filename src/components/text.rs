use std::any::Any;

use crate::constants::KIND_TEXT;
use crate::core::component::{Snapshot, Widget};
use crate::core::layout::{resolve_dimension, Layout, Position, SizeOverrides};
use crate::core::style::Style;
use crate::core::surface::Surface;
use crate::error::Result;

/// Word-wrapped text block.
///
/// Reactive field: `value`. Auto width is the value length capped at the
/// parent's inner width; auto height is the wrapped line count. Longer
/// content scrolls through the stored viewport offset.
#[derive(Debug, Clone, Default)]
pub struct Text {
    value: String,
    lines: Vec<String>,
}

impl Text {
    pub fn new(value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            lines: Vec::new(),
        }
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    pub fn set_value(&mut self, value: impl Into<String>) {
        self.value = value.into();
    }

    /// Wrapped lines as of the last compute pass.
    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    /// Separate text into lines no wider than `chars_per_line`, breaking at
    /// word boundaries and collapsing runs of whitespace.
    pub fn word_wrap(text: &str, chars_per_line: usize) -> Vec<String> {
        let mut lines = Vec::new();
        for raw in text.split('\n') {
            let line = raw.trim();
            if line.chars().count() <= chars_per_line {
                lines.push(line.to_string());
                continue;
            }
            let mut current = String::new();
            for word in line.split_whitespace() {
                if !current.is_empty()
                    && current.chars().count() + 1 + word.chars().count() > chars_per_line
                {
                    lines.push(std::mem::take(&mut current));
                }
                if !current.is_empty() {
                    current.push(' ');
                }
                current.push_str(word);
            }
            lines.push(current);
        }
        lines
    }
}

impl Widget for Text {
    fn kind(&self) -> &'static str {
        KIND_TEXT
    }

    fn natural_size(&mut self, position: &Position, style: &Style, parent: &Layout) -> SizeOverrides {
        let border = if style.has_border() { 2 } else { 0 };
        let mut overrides = SizeOverrides::default();

        let value_len = self.value.chars().count() as u16;
        if position.width <= 0.0 {
            overrides.width =
                Some(value_len.min(parent.inner_width) + position.padding.horizontal() + border);
        }

        let width_spec = if position.width > 0.0 {
            position.width
        } else {
            f32::from(overrides.width.unwrap_or(0))
        };
        let outer_width =
            resolve_dimension(width_spec, parent.inner_width, position.margin.horizontal());
        let wrap_width = outer_width
            .saturating_sub(border + position.padding.horizontal())
            .max(1);
        self.lines = Self::word_wrap(&self.value, wrap_width as usize);

        if position.height <= 0.0 {
            overrides.height =
                Some(self.lines.len() as u16 + position.padding.vertical() + border);
        }
        overrides
    }

    fn draw(&mut self, surface: &mut Surface, layout: &mut Layout, _style: &Style) -> Result<()> {
        let range = layout.scroll_content_range(layout.scroll_y, self.lines.len());
        layout.scroll_y = range.content_y;
        for i in 0..range.height {
            surface.move_to(layout.inner_x, range.y + i)?;
            surface.print(&self.lines[range.content_y + i as usize])?;
        }
        Ok(())
    }

    fn snapshot(&self) -> Snapshot {
        Snapshot::new().text(&self.value)
    }

    fn boxed_clone(&self) -> Box<dyn Widget> {
        Box::new(self.clone())
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }
}
