use std::any::Any;

use crate::constants::KIND_BUTTON;
use crate::core::component::{EventKind, KeyInput, KeyName, KeyOutcome, Snapshot, Widget};
use crate::core::layout::{Edges, Layout, OriginX, OriginY, Position, SizeOverrides};
use crate::core::style::Style;
use crate::core::surface::Surface;
use crate::error::Result;

/// Push button. Return/enter emits [`EventKind::Pressed`].
///
/// Reactive field: `value`. Auto outer width is the value length plus
/// horizontal padding (plus 2 with a border); auto height is one row plus
/// vertical padding (plus 2 with a border).
#[derive(Debug, Clone, Default)]
pub struct Button {
    value: String,
}

impl Button {
    pub fn new(value: impl Into<String>) -> Self {
        Self { value: value.into() }
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    pub fn set_value(&mut self, value: impl Into<String>) {
        self.value = value.into();
    }
}

impl Widget for Button {
    fn kind(&self) -> &'static str {
        KIND_BUTTON
    }

    fn default_focusable(&self) -> bool {
        true
    }

    fn default_position(&self) -> Position {
        Position::new()
            .anchored(OriginX::Right, OriginY::Bottom)
            .with_padding(Edges::new(0, 1, 0, 1))
    }

    fn natural_size(&mut self, position: &Position, style: &Style, _parent: &Layout) -> SizeOverrides {
        let border = if style.has_border() { 2 } else { 0 };
        let mut overrides = SizeOverrides::default();
        if position.width <= 0.0 {
            overrides.width =
                Some(self.value.chars().count() as u16 + position.padding.horizontal() + border);
        }
        if position.height <= 0.0 {
            overrides.height = Some(1 + position.padding.vertical() + border);
        }
        overrides
    }

    fn draw(&mut self, surface: &mut Surface, layout: &mut Layout, _style: &Style) -> Result<()> {
        surface.move_to(layout.inner_x, layout.inner_y)?;
        surface.print(&self.value)?;
        Ok(())
    }

    fn on_key(&mut self, input: &KeyInput) -> KeyOutcome {
        match input.name {
            KeyName::Return => KeyOutcome::emit(EventKind::Pressed),
            _ => KeyOutcome::bubble(),
        }
    }

    fn cursor_pos(&self, layout: &Layout) -> Option<(u16, u16)> {
        Some((layout.inner_x, layout.inner_y))
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
