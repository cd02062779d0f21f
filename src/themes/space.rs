//! Monochrome-on-black palette.

use crossterm::style::Color;

use crate::constants::{
    GLYPH_THUMB, GLYPH_TRACK, KIND_BUTTON, KIND_INPUT, KIND_LIST, KIND_SCREEN, KIND_SCROLLBAR,
    KIND_TEXT, KIND_WINDOW,
};
use crate::core::style::{Border, Style};
use crate::core::theme::Theme;

pub fn theme() -> Theme {
    Theme::new("space")
        .set_style(KIND_SCREEN, Style::new().colors(Color::Black, Color::White))
        .set_style(KIND_WINDOW, Style::new().bordered(Border::Double))
        .set_style(KIND_TEXT, Style::new())
        .set_style(KIND_INPUT, Style::new().bordered(Border::Single))
        .set_style(KIND_BUTTON, Style::new().bordered(Border::Single))
        .set_style(
            KIND_LIST,
            Style::new()
                .bordered(Border::Single)
                .selected(Color::Black, Color::White, true)
                .active(Color::White, Color::Black, false),
        )
        .set_style(
            KIND_SCROLLBAR,
            Style::new()
                .bordered(Border::Single)
                .track(GLYPH_TRACK, Color::White)
                .thumb(GLYPH_THUMB, Color::White),
        )
        .set_focus_style(
            KIND_BUTTON,
            Style::new().bordered(Border::Single).colors(Color::White, Color::Black),
        )
}
