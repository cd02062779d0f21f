//! Built-in theme palettes.
//!
//! Palettes are static data tables only; all cascade logic lives in
//! [`crate::core::theme`].

mod lavabit;
mod ocean;
mod space;

use once_cell::sync::Lazy;

use crate::core::theme::Theme;

pub static SPACE: Lazy<Theme> = Lazy::new(space::theme);
pub static OCEAN: Lazy<Theme> = Lazy::new(ocean::theme);
pub static LAVABIT: Lazy<Theme> = Lazy::new(lavabit::theme);
