use std::any::Any;

use crate::constants::KIND_SCROLLBAR;
use crate::core::component::{Snapshot, Widget};
use crate::core::layout::{Layout, Position, SizeOverrides};
use crate::core::style::Style;
use crate::core::surface::Surface;
use crate::error::Result;

/// Vertical scrollbar: a track column with a proportional thumb, painted
/// with the theme's track/thumb glyphs. Not focusable; an application keeps
/// `offset` in step with the scrolled widget (e.g. from list change events).
///
/// Reactive fields: `total`, `visible`, `offset`.
#[derive(Debug, Clone, Default)]
pub struct ScrollBar {
    total: usize,
    visible: usize,
    offset: usize,
}

impl ScrollBar {
    pub fn new(total: usize, visible: usize) -> Self {
        Self {
            total,
            visible,
            offset: 0,
        }
    }

    pub fn set_range(&mut self, total: usize, visible: usize) {
        self.total = total;
        self.visible = visible;
        self.offset = self.offset.min(total.saturating_sub(visible));
    }

    pub fn set_offset(&mut self, offset: usize) {
        self.offset = offset.min(self.total.saturating_sub(self.visible));
    }

    pub fn offset(&self) -> usize {
        self.offset
    }
}

impl Widget for ScrollBar {
    fn kind(&self) -> &'static str {
        KIND_SCROLLBAR
    }

    fn natural_size(&mut self, position: &Position, style: &Style, parent: &Layout) -> SizeOverrides {
        let border = if style.has_border() { 2 } else { 0 };
        let mut overrides = SizeOverrides::default();
        if position.width <= 0.0 {
            overrides.width = Some(1 + position.padding.horizontal() + border);
        }
        if position.height <= 0.0 {
            overrides.height = Some(parent.inner_height);
        }
        overrides
    }

    fn draw(&mut self, surface: &mut Surface, layout: &mut Layout, style: &Style) -> Result<()> {
        let rows = layout.inner_height;
        if rows == 0 {
            return Ok(());
        }

        let (thumb_start, thumb_len) = if self.total <= self.visible || self.total == 0 {
            (0, rows)
        } else {
            let len = ((rows as usize * self.visible) / self.total).max(1) as u16;
            let max_offset = self.total - self.visible;
            let start = ((rows - len) as usize * self.offset.min(max_offset) / max_offset) as u16;
            (start, len)
        };

        for row in 0..rows {
            let in_thumb = row >= thumb_start && row < thumb_start + thumb_len;
            surface.reset()?;
            if let Some(bg) = style.background {
                surface.set_background(bg)?;
            }
            let (glyph, color) = if in_thumb {
                (style.thumb_glyph, style.thumb_color.or(style.foreground))
            } else {
                (style.track_glyph, style.track_color.or(style.foreground))
            };
            if let Some(fg) = color {
                surface.set_foreground(fg)?;
            }
            surface.move_to(layout.inner_x, layout.inner_y + row)?;
            surface.print(&glyph.to_string())?;
        }
        Ok(())
    }

    fn snapshot(&self) -> Snapshot {
        Snapshot::new()
            .int(self.total as i64)
            .int(self.visible as i64)
            .int(self.offset as i64)
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
