//! Structural error types for session setup and processing

use core::fmt;

/// An error reported directly to the caller of [`Session`](crate::Session)
/// operations.
///
/// These are programmer errors (a missing buffer, a session that was never
/// initialized) rather than runtime conditions. Problems with a typed command
/// line are never reported here; they travel over the wire as a
/// [`Status`](crate::Status) instead.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum Error {
    /// No receive buffer was supplied in the configuration.
    MissingBuffer,
    /// The receive buffer holds fewer than two bytes.
    BufferTooSmall,
    /// No command table was supplied in the configuration.
    MissingCommands,
    /// No character transport was supplied in the configuration.
    MissingIo,
    /// An operation was attempted on a session that was not initialized.
    NotInitialized,
    /// A serialized settings blob could not be parsed.
    InvalidSettings,
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let msg = match self {
            Error::MissingBuffer => "receive buffer not configured",
            Error::BufferTooSmall => "receive buffer must hold at least two bytes",
            Error::MissingCommands => "command table not configured",
            Error::MissingIo => "character transport not configured",
            Error::NotInitialized => "session not initialized",
            Error::InvalidSettings => "settings could not be parsed",
        };
        f.write_str(msg)
    }
}

#[cfg(feature = "std")]
impl std::error::Error for Error {}

#[cfg(feature = "defmt")]
impl defmt::Format for Error {
    fn format(&self, f: defmt::Formatter) {
        match self {
            Error::MissingBuffer => defmt::write!(f, "MissingBuffer"),
            Error::BufferTooSmall => defmt::write!(f, "BufferTooSmall"),
            Error::MissingCommands => defmt::write!(f, "MissingCommands"),
            Error::MissingIo => defmt::write!(f, "MissingIo"),
            Error::NotInitialized => defmt::write!(f, "NotInitialized"),
            Error::InvalidSettings => defmt::write!(f, "InvalidSettings"),
        }
    }
}
