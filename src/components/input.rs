use std::any::Any;

use crate::constants::KIND_INPUT;
use crate::core::component::{EventKind, KeyInput, KeyName, KeyOutcome, Snapshot, Widget};
use crate::core::layout::{Layout, Position, SizeOverrides};
use crate::core::style::Style;
use crate::core::surface::Surface;
use crate::error::Result;

/// Single-line text editor.
///
/// Reactive fields: `value`, `cursor`. Return emits
/// [`EventKind::Submitted`] with the current value; editing keys are
/// consumed, everything else bubbles. The terminal cursor tracks the edit
/// position while focused.
#[derive(Debug, Clone, Default)]
pub struct Input {
    value: String,
    cursor: usize,
    masked: bool,
    max_length: Option<usize>,
}

impl Input {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_value(mut self, value: impl Into<String>) -> Self {
        self.value = value.into();
        self.cursor = self.value.chars().count();
        self
    }

    /// Echo `*` instead of typed characters.
    pub fn masked(mut self, masked: bool) -> Self {
        self.masked = masked;
        self
    }

    pub fn max_length(mut self, max_length: usize) -> Self {
        self.max_length = Some(max_length);
        self
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    pub fn set_value(&mut self, value: impl Into<String>) {
        self.value = value.into();
        self.cursor = self.value.chars().count();
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    fn len(&self) -> usize {
        self.value.chars().count()
    }

    fn byte_at(&self, char_index: usize) -> usize {
        self.value
            .char_indices()
            .nth(char_index)
            .map(|(b, _)| b)
            .unwrap_or(self.value.len())
    }

    fn insert(&mut self, c: char) {
        if let Some(max) = self.max_length {
            if self.len() >= max {
                return;
            }
        }
        let at = self.byte_at(self.cursor);
        self.value.insert(at, c);
        self.cursor += 1;
    }

    fn backspace(&mut self) {
        if self.cursor == 0 {
            return;
        }
        let at = self.byte_at(self.cursor - 1);
        self.value.remove(at);
        self.cursor -= 1;
    }

    fn delete(&mut self) {
        if self.cursor >= self.len() {
            return;
        }
        let at = self.byte_at(self.cursor);
        self.value.remove(at);
    }

    /// First visible character when the value outgrows the field.
    fn window_start(&self, inner_width: u16) -> usize {
        let width = inner_width.max(1) as usize;
        (self.cursor + 1).saturating_sub(width)
    }
}

impl Widget for Input {
    fn kind(&self) -> &'static str {
        KIND_INPUT
    }

    fn default_focusable(&self) -> bool {
        true
    }

    fn natural_size(&mut self, position: &Position, style: &Style, _parent: &Layout) -> SizeOverrides {
        let border = if style.has_border() { 2 } else { 0 };
        let mut overrides = SizeOverrides::default();
        if position.width <= 0.0 {
            let content = self.max_length.unwrap_or(self.len() + 1) as u16;
            overrides.width = Some(content + position.padding.horizontal() + border);
        }
        if position.height <= 0.0 {
            overrides.height = Some(1 + position.padding.vertical() + border);
        }
        overrides
    }

    fn draw(&mut self, surface: &mut Surface, layout: &mut Layout, _style: &Style) -> Result<()> {
        let width = layout.inner_width as usize;
        if width == 0 {
            return Ok(());
        }
        let display: String = if self.masked {
            "*".repeat(self.len())
        } else {
            self.value.clone()
        };
        let start = self.window_start(layout.inner_width);
        let visible: String = display.chars().skip(start).take(width).collect();
        let fill = width.saturating_sub(visible.chars().count());

        surface.move_to(layout.inner_x, layout.inner_y)?;
        surface.print(&format!("{}{}", visible, " ".repeat(fill)))?;
        Ok(())
    }

    fn on_key(&mut self, input: &KeyInput) -> KeyOutcome {
        match input.name {
            KeyName::Char => match input.text {
                Some(c) if !input.ctrl && !c.is_control() => {
                    self.insert(c);
                    KeyOutcome::consumed()
                }
                _ => KeyOutcome::bubble(),
            },
            KeyName::Backspace => {
                self.backspace();
                KeyOutcome::consumed()
            }
            KeyName::Delete => {
                self.delete();
                KeyOutcome::consumed()
            }
            KeyName::Left => {
                self.cursor = self.cursor.saturating_sub(1);
                KeyOutcome::consumed()
            }
            KeyName::Right => {
                self.cursor = (self.cursor + 1).min(self.len());
                KeyOutcome::consumed()
            }
            KeyName::Home => {
                self.cursor = 0;
                KeyOutcome::consumed()
            }
            KeyName::End => {
                self.cursor = self.len();
                KeyOutcome::consumed()
            }
            KeyName::Return => KeyOutcome::emit(EventKind::Submitted {
                value: self.value.clone(),
            }),
            _ => KeyOutcome::bubble(),
        }
    }

    fn cursor_pos(&self, layout: &Layout) -> Option<(u16, u16)> {
        let start = self.window_start(layout.inner_width);
        Some((
            layout.inner_x + (self.cursor - start) as u16,
            layout.inner_y,
        ))
    }

    fn snapshot(&self) -> Snapshot {
        Snapshot::new().text(&self.value).int(self.cursor as i64)
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
