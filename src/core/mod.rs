//! Core building blocks of the toolkit.
//!
//! - [`layout`] - box model, origin anchoring and scroll-viewport math
//! - [`style`] - visual attribute records and border glyphs
//! - [`theme`] - kind-name to style maps
//! - [`component`] - the widget capability contract and key/event model
//! - [`tree`] - the arena component tree and the two-phase frame pipeline
//! - [`surface`] - the buffered terminal output surface

pub mod component;
pub mod layout;
pub mod style;
pub mod surface;
pub mod theme;
pub mod tree;

pub use component::{Component, EventKind, KeyInput, KeyName, KeyOutcome, Snapshot, UiEvent, Widget};
pub use layout::{Edges, Layout, OriginX, OriginY, Position, ScrollRange, SizeOverrides};
pub use style::{Border, Style};
pub use surface::Surface;
pub use theme::Theme;
pub use tree::{NodeId, Tree};
