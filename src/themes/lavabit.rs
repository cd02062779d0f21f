//! Red-and-white palette.

use crossterm::style::Color;

use crate::constants::{
    GLYPH_THUMB, GLYPH_TRACK, KIND_BUTTON, KIND_INPUT, KIND_LIST, KIND_SCREEN, KIND_SCROLLBAR,
    KIND_TEXT, KIND_WINDOW,
};
use crate::core::style::{Border, Style};
use crate::core::theme::Theme;

pub fn theme() -> Theme {
    Theme::new("lavabit")
        .set_style(
            KIND_SCREEN,
            Style::new()
                .colors(Color::DarkRed, Color::Black)
                .labeled(Color::White, Color::Black),
        )
        .set_style(
            KIND_WINDOW,
            Style::new()
                .bordered(Border::Double)
                .border_colored(Color::Black)
                .labeled(Color::White, Color::Black),
        )
        .set_style(KIND_TEXT, Style::new())
        .set_style(
            KIND_INPUT,
            Style::new().bordered(Border::Single).colors(Color::White, Color::Black),
        )
        .set_style(
            KIND_BUTTON,
            Style::new().bordered(Border::Single).colors(Color::White, Color::Black),
        )
        .set_style(
            KIND_LIST,
            Style::new()
                .bordered(Border::Single)
                .colors(Color::White, Color::Black)
                .selected(Color::White, Color::Black, true)
                .active(Color::Black, Color::White, false),
        )
        .set_style(
            KIND_SCROLLBAR,
            Style::new()
                .bordered(Border::Single)
                .colors(Color::White, Color::Black)
                .track(GLYPH_TRACK, Color::White)
                .thumb(GLYPH_THUMB, Color::Black),
        )
        .set_focus_style(
            KIND_BUTTON,
            Style::new().bordered(Border::Single).colors(Color::Black, Color::White),
        )
}
