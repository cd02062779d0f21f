//! Concrete widgets.
//!
//! These are clients of the core: each one fulfills the
//! [`Widget`](crate::core::component::Widget) capability contract (natural
//! size, draw self, optionally intercept keys) and nothing else. The shared
//! pipeline in [`crate::core::tree`] owns layout, dirtiness and focus.

pub mod button;
pub mod input;
pub mod list;
pub mod screen;
pub mod scrollbar;
pub mod text;
pub mod window;

pub use button::Button;
pub use input::Input;
pub use list::List;
pub use screen::Screen;
pub use scrollbar::ScrollBar;
pub use text::Text;
pub use window::Window;
