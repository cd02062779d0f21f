use std::any::Any;

use crate::constants::KIND_SCREEN;
use crate::core::component::Widget;
use crate::core::layout::{Layout, Position, SizeOverrides};
use crate::core::style::Style;
use crate::core::surface::Surface;
use crate::error::Result;

/// Root component kind: anchors the coordinate system to the terminal bounds
/// and paints the session background (via its theme style's fill).
#[derive(Debug, Clone, Copy, Default)]
pub struct Screen;

impl Widget for Screen {
    fn kind(&self) -> &'static str {
        KIND_SCREEN
    }

    fn natural_size(&mut self, position: &Position, _style: &Style, parent: &Layout) -> SizeOverrides {
        // Auto specs span the whole terminal.
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
