use std::any::Any;

use crate::constants::KIND_WINDOW;
use crate::core::component::Widget;
use crate::core::layout::{Layout, Position, SizeOverrides};
use crate::core::style::Style;
use crate::core::surface::Surface;
use crate::error::Result;

/// Bordered container. The border and the title label are painted by the
/// pipeline chrome; a window contributes no content of its own. Attach it
/// with `.focus_trap(true)` for modal dialogs.
#[derive(Debug, Clone, Copy, Default)]
pub struct Window;

impl Widget for Window {
    fn kind(&self) -> &'static str {
        KIND_WINDOW
    }

    fn natural_size(&mut self, position: &Position, _style: &Style, parent: &Layout) -> SizeOverrides {
        // A window without explicit size spans its parent.
        let mut overrides = SizeOverrides::default();
        if position.width <= 0.0 {
            overrides.width = Some(parent.inner_width);
        }
        if position.height <= 0.0 {
            overrides.height = Some(parent.inner_height);
        }
        overrides
    }

    fn draw(&mut self, _surface: &mut Surface, _layout: &mut Layout, _style: &Style) -> Result<()> {
        Ok(())
    }

    fn boxed_clone(&self) -> Box<dyn Widget> {
        Box::new(*self)
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }
}
