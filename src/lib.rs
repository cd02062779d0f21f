//! Velour - a retained-mode toolkit for terminal user interfaces
//!
//! This library provides a positioning engine, a component tree with
//! change-driven rendering, focus and key routing, and a frame-paced
//! session driver, all on top of crossterm. Applications declare a tree of
//! widgets once, mutate widget state between frames, and the pipeline
//! recomputes and repaints exactly the components whose state changed.
//!
//! # Modules
//!
//! The library is organized into several key modules:
//!
//! * [`core`] - layout, styling, themes, the widget contract and the tree
//! * [`components`] - the built-in widgets (screen, window, text, button,
//!   input, list, scrollbar)
//! * [`driver`] - the session driver: frame pacing, input capture, focus
//!   policy and terminal bracketing
//! * [`config`] - session configuration management
//! * [`themes`] - built-in palettes

/// Session configuration management
pub mod config;

/// Shared constants and default values
pub mod constants;

/// Built-in widgets
pub mod components;

/// Layout, styling, the widget contract and the component tree
pub mod core;

/// The frame-paced session driver
pub mod driver;

/// Error taxonomy
pub mod error;

/// In-memory log sink and logger installation
pub mod logger;

/// Built-in theme palettes
pub mod themes;

/// Frame delta clock
pub mod timer;

// Re-export the surface an application touches for convenient access.
pub use components::{Button, Input, List, Screen, ScrollBar, Text, Window};
pub use config::DriverConfig;
pub use crate::core::{
    Border, Component, Edges, EventKind, KeyInput, KeyName, Layout, NodeId, OriginX, OriginY,
    Position, Style, Theme, Tree, UiEvent,
};
pub use driver::Driver;
pub use error::{Error, Result};
