//! Visual attribute records.

use crossterm::style::Color;

use crate::constants;

/// Border glyph family.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Border {
    Single,
    Double,
}

/// Code points used to paint one border kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BorderGlyphs {
    pub top_left: char,
    pub top_right: char,
    pub bottom_left: char,
    pub bottom_right: char,
    pub horizontal: char,
    pub vertical: char,
}

impl Border {
    pub fn glyphs(self) -> BorderGlyphs {
        match self {
            Border::Single => BorderGlyphs {
                top_left: constants::SINGLE_TOP_LEFT,
                top_right: constants::SINGLE_TOP_RIGHT,
                bottom_left: constants::SINGLE_BOTTOM_LEFT,
                bottom_right: constants::SINGLE_BOTTOM_RIGHT,
                horizontal: constants::SINGLE_HORIZONTAL,
                vertical: constants::SINGLE_VERTICAL,
            },
            Border::Double => BorderGlyphs {
                top_left: constants::DOUBLE_TOP_LEFT,
                top_right: constants::DOUBLE_TOP_RIGHT,
                bottom_left: constants::DOUBLE_BOTTOM_LEFT,
                bottom_right: constants::DOUBLE_BOTTOM_RIGHT,
                horizontal: constants::DOUBLE_HORIZONTAL,
                vertical: constants::DOUBLE_VERTICAL,
            },
        }
    }
}

/// Flat visual attribute record.
///
/// Authored once per component kind in a [`Theme`](crate::core::theme::Theme)
/// and cloned onto each component at attach time. A component may carry a
/// second clone as its focus variant; the draw pass selects between the two,
/// it never mutates them.
#[derive(Debug, Clone, PartialEq)]
pub struct Style {
    pub background: Option<Color>,
    pub foreground: Option<Color>,
    pub selected_background: Option<Color>,
    pub selected_foreground: Option<Color>,
    pub selected_underline: bool,
    pub active_background: Option<Color>,
    pub active_foreground: Option<Color>,
    pub active_underline: bool,
    pub border: Option<Border>,
    pub border_color: Option<Color>,
    pub label_background: Option<Color>,
    pub label_foreground: Option<Color>,
    pub underline: bool,
    pub track_glyph: char,
    pub track_color: Option<Color>,
    pub thumb_glyph: char,
    pub thumb_color: Option<Color>,
}

impl Default for Style {
    fn default() -> Self {
        Self {
            background: None,
            foreground: None,
            selected_background: None,
            selected_foreground: None,
            selected_underline: false,
            active_background: None,
            active_foreground: None,
            active_underline: false,
            border: None,
            border_color: None,
            label_background: None,
            label_foreground: None,
            underline: false,
            track_glyph: constants::GLYPH_TRACK,
            track_color: None,
            thumb_glyph: constants::GLYPH_THUMB,
            thumb_color: None,
        }
    }
}

impl Style {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn colors(mut self, background: Color, foreground: Color) -> Self {
        self.background = Some(background);
        self.foreground = Some(foreground);
        self
    }

    pub fn selected(mut self, background: Color, foreground: Color, underline: bool) -> Self {
        self.selected_background = Some(background);
        self.selected_foreground = Some(foreground);
        self.selected_underline = underline;
        self
    }

    pub fn active(mut self, background: Color, foreground: Color, underline: bool) -> Self {
        self.active_background = Some(background);
        self.active_foreground = Some(foreground);
        self.active_underline = underline;
        self
    }

    pub fn bordered(mut self, border: Border) -> Self {
        self.border = Some(border);
        self
    }

    pub fn border_colored(mut self, color: Color) -> Self {
        self.border_color = Some(color);
        self
    }

    pub fn labeled(mut self, background: Color, foreground: Color) -> Self {
        self.label_background = Some(background);
        self.label_foreground = Some(foreground);
        self
    }

    pub fn underlined(mut self, underline: bool) -> Self {
        self.underline = underline;
        self
    }

    pub fn track(mut self, glyph: char, color: Color) -> Self {
        self.track_glyph = glyph;
        self.track_color = Some(color);
        self
    }

    pub fn thumb(mut self, glyph: char, color: Color) -> Self {
        self.thumb_glyph = glyph;
        self.thumb_color = Some(color);
        self
    }

    pub fn has_border(&self) -> bool {
        self.border.is_some()
    }
}
