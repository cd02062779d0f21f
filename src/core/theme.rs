//! Cascading theme maps.
//!
//! A theme maps component kind names (`"Button"`, `"List"`, ...) to a default
//! [`Style`] and an optional focus-state [`Style`]. Resolution happens once at
//! attach time: the tree clones the matching entries onto the component unless
//! explicit styles were supplied. Built-in palettes live in
//! [`crate::themes`] as data only.

use std::collections::HashMap;

use crate::core::style::Style;
use crate::error::{Error, Result};
use crate::themes;

#[derive(Debug, Clone, Default)]
pub struct Theme {
    name: String,
    styles: HashMap<&'static str, Style>,
    focus_styles: HashMap<&'static str, Style>,
}

impl Theme {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            styles: HashMap::new(),
            focus_styles: HashMap::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Set the default style for a component kind.
    pub fn set_style(mut self, kind: &'static str, style: Style) -> Self {
        self.styles.insert(kind, style);
        self
    }

    /// Set the focus-state style for a component kind.
    pub fn set_focus_style(mut self, kind: &'static str, style: Style) -> Self {
        self.focus_styles.insert(kind, style);
        self
    }

    pub fn style(&self, kind: &str) -> Option<&Style> {
        self.styles.get(kind)
    }

    pub fn focus_style(&self, kind: &str) -> Option<&Style> {
        self.focus_styles.get(kind)
    }

    /// Look up a built-in palette by its configuration name.
    pub fn by_name(name: &str) -> Result<Theme> {
        match name.to_ascii_lowercase().as_str() {
            "space" => Ok(themes::SPACE.clone()),
            "ocean" => Ok(themes::OCEAN.clone()),
            "lavabit" => Ok(themes::LAVABIT.clone()),
            other => Err(Error::UnknownTheme(other.to_string())),
        }
    }
}
