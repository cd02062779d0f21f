//! Error taxonomy for the toolkit.

use thiserror::Error;

/// Errors surfaced by the core and the driver.
#[derive(Error, Debug)]
pub enum Error {
    /// Focus was requested on a component that does not accept it.
    #[error("'{id}' - not focusable")]
    NotFocusable { id: String },

    /// Focus was requested on a component that has never been drawn with
    /// usable bounds.
    #[error("'{id}' - not rendered")]
    NotRendered { id: String },

    /// A theme name had no built-in palette.
    #[error("unknown theme '{0}'")]
    UnknownTheme(String),

    /// Configuration was rejected at session start.
    #[error("configuration error: {0}")]
    Config(String),

    /// Terminal I/O failure.
    #[error("terminal i/o error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
