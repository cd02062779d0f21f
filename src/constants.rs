//! Shared constants.

/// Default render cadence of the automatic frame timer.
pub const DEFAULT_FPS: u16 = 10;
/// Lowest accepted frame rate.
pub const FPS_MIN: u16 = 1;
/// Highest accepted frame rate.
pub const FPS_MAX: u16 = 120;

// Widget kind names; theme lookup keys.
pub const KIND_SCREEN: &str = "screen";
pub const KIND_WINDOW: &str = "window";
pub const KIND_TEXT: &str = "text";
pub const KIND_BUTTON: &str = "button";
pub const KIND_INPUT: &str = "input";
pub const KIND_LIST: &str = "list";
pub const KIND_SCROLLBAR: &str = "scrollbar";

// Scrollbar glyphs.
pub const GLYPH_TRACK: char = '▒';
pub const GLYPH_THUMB: char = '█';

// Box-drawing glyphs, single line.
pub const SINGLE_TOP_LEFT: char = '┌';
pub const SINGLE_TOP_RIGHT: char = '┐';
pub const SINGLE_BOTTOM_LEFT: char = '└';
pub const SINGLE_BOTTOM_RIGHT: char = '┘';
pub const SINGLE_HORIZONTAL: char = '─';
pub const SINGLE_VERTICAL: char = '│';

// Box-drawing glyphs, double line.
pub const DOUBLE_TOP_LEFT: char = '╔';
pub const DOUBLE_TOP_RIGHT: char = '╗';
pub const DOUBLE_BOTTOM_LEFT: char = '╚';
pub const DOUBLE_BOTTOM_RIGHT: char = '╝';
pub const DOUBLE_HORIZONTAL: char = '═';
pub const DOUBLE_VERTICAL: char = '║';

// Configuration file locations.
pub const CONFIG_FILE_LOCAL: &str = "velour.toml";
pub const CONFIG_DIR_NAME: &str = "velour";
pub const CONFIG_FILE_NAME: &str = "config.toml";
