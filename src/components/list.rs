use std::any::Any;

use crate::constants::KIND_LIST;
use crate::core::component::{EventKind, KeyInput, KeyName, KeyOutcome, Snapshot, Widget};
use crate::core::layout::{Layout, Position, SizeOverrides};
use crate::core::style::Style;
use crate::core::surface::Surface;
use crate::error::Result;

/// Scrollable item list with an active cursor row and an optional selected
/// row.
///
/// Reactive fields: `items`, `active_index`, `selected_index`. Up/down move
/// the cursor and keep bubbling (so a container may react too); return
/// selects the cursor row. With `auto_select`, moving the cursor selects as
/// it goes.
#[derive(Debug, Clone, Default)]
pub struct List {
    items: Vec<String>,
    active_index: usize,
    selected_index: Option<usize>,
    auto_select: bool,
    longest: usize,
}

impl List {
    pub fn new(items: Vec<String>) -> Self {
        Self {
            items,
            ..Self::default()
        }
    }

    pub fn auto_select(mut self, auto_select: bool) -> Self {
        self.auto_select = auto_select;
        self
    }

    pub fn items(&self) -> &[String] {
        &self.items
    }

    pub fn set_items(&mut self, items: Vec<String>) {
        self.items = items;
        if !self.items.is_empty() {
            self.active_index = self.active_index.min(self.items.len() - 1);
        } else {
            self.active_index = 0;
        }
    }

    pub fn active_index(&self) -> usize {
        self.active_index
    }

    pub fn selected_index(&self) -> Option<usize> {
        self.selected_index
    }

    pub fn active_item(&self) -> Option<&str> {
        self.items.get(self.active_index).map(String::as_str)
    }

    /// Move the cursor up one row. Returns whether it moved.
    pub fn goto_previous(&mut self) -> bool {
        self.goto_index(self.active_index.saturating_sub(1))
    }

    /// Move the cursor down one row, clamped at the last item.
    pub fn goto_next(&mut self) -> bool {
        self.goto_index(self.active_index + 1)
    }

    /// Move the cursor to `index`, clamped into the item range.
    pub fn goto_index(&mut self, index: usize) -> bool {
        if self.items.is_empty() {
            return false;
        }
        let clamped = index.min(self.items.len() - 1);
        if clamped == self.active_index {
            return false;
        }
        self.active_index = clamped;
        true
    }

    /// Mark the cursor row as selected.
    pub fn select_active(&mut self) -> Option<EventKind> {
        let item = self.items.get(self.active_index)?.clone();
        self.selected_index = Some(self.active_index);
        Some(EventKind::Selected {
            index: self.active_index,
            item,
        })
    }

    fn moved(&mut self) -> KeyOutcome {
        let mut outcome = KeyOutcome::emit_and_bubble(EventKind::Changed {
            index: self.active_index,
            item: self.items[self.active_index].clone(),
        });
        if self.auto_select {
            if let Some(selected) = self.select_active() {
                outcome.events.push(selected);
            }
        }
        outcome
    }
}

impl Widget for List {
    fn kind(&self) -> &'static str {
        KIND_LIST
    }

    fn default_focusable(&self) -> bool {
        true
    }

    fn natural_size(&mut self, position: &Position, style: &Style, _parent: &Layout) -> SizeOverrides {
        let border = if style.has_border() { 2 } else { 0 };
        self.longest = self.items.iter().map(|i| i.chars().count()).max().unwrap_or(0);

        let mut overrides = SizeOverrides::default();
        if position.width <= 0.0 {
            overrides.width =
                Some(self.longest as u16 + position.padding.horizontal() + border);
        }
        if position.height <= 0.0 {
            overrides.height =
                Some(self.items.len() as u16 + position.padding.vertical() + border);
        }
        overrides
    }

    fn draw(&mut self, surface: &mut Surface, layout: &mut Layout, style: &Style) -> Result<()> {
        let range = layout.scroll_content_range(self.active_index, self.items.len());
        layout.scroll_y = range.content_y;

        let row_width = self.longest.min(layout.inner_width as usize);
        for i in 0..range.height {
            let index = range.content_y + i as usize;
            if Some(index) == self.selected_index {
                surface.reset()?;
                if let Some(bg) = style.selected_background.or(style.background) {
                    surface.set_background(bg)?;
                }
                if let Some(fg) = style.selected_foreground.or(style.foreground) {
                    surface.set_foreground(fg)?;
                }
                surface.set_underline(style.selected_underline)?;
            } else if index == self.active_index {
                surface.reset()?;
                if let Some(bg) = style.active_background.or(style.background) {
                    surface.set_background(bg)?;
                }
                if let Some(fg) = style.active_foreground.or(style.foreground) {
                    surface.set_foreground(fg)?;
                }
                surface.set_underline(style.active_underline)?;
            } else {
                surface.apply_style(style)?;
            }

            let item: String = self.items[index].chars().take(row_width).collect();
            let fill = row_width.saturating_sub(item.chars().count());
            surface.move_to(layout.inner_x, range.y + i)?;
            surface.print(&format!("{}{}", item, " ".repeat(fill)))?;
        }
        Ok(())
    }

    fn on_key(&mut self, input: &KeyInput) -> KeyOutcome {
        match input.name {
            KeyName::Up => {
                if self.goto_previous() {
                    self.moved()
                } else {
                    KeyOutcome::bubble()
                }
            }
            KeyName::Down => {
                if self.goto_next() {
                    self.moved()
                } else {
                    KeyOutcome::bubble()
                }
            }
            KeyName::Return => match self.select_active() {
                Some(selected) => KeyOutcome::emit(selected),
                None => KeyOutcome::consumed(),
            },
            _ => KeyOutcome::bubble(),
        }
    }

    fn cursor_pos(&self, layout: &Layout) -> Option<(u16, u16)> {
        let row = self.active_index.checked_sub(layout.scroll_y)?;
        Some((layout.inner_x, layout.inner_y + row as u16))
    }

    fn snapshot(&self) -> Snapshot {
        Snapshot::new()
            .items(&self.items)
            .int(self.active_index as i64)
            .int(self.selected_index.map(|i| i as i64).unwrap_or(-1))
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
