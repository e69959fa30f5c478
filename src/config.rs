//! Session configuration.
//!
//! A [`Config`] is assembled once with builder calls and handed to
//! [`Session::init`](crate::Session::init). The plain options live in
//! [`Settings`], which can also be loaded from a small JSON blob kept in
//! flash or received over the network:
//!
//! ```rust
//! use cmdline::{ArgOverflow, Eol, Settings};
//!
//! let settings = Settings::from_json(br#"{"eol":"lf","arg_overflow":"reject"}"#).unwrap();
//! assert_eq!(settings.eol, Eol::Lf);
//! assert_eq!(settings.arg_overflow, ArgOverflow::Reject);
//! assert!(settings.echo);
//! ```

use serde::{Deserialize, Serialize};

use crate::dispatch::Command;
use crate::error::Error;

/// ASCII backspace character (0x08).
pub const ASCII_BACKSPACE: u8 = 0x08;
/// ASCII line feed character (0x0A).
pub const ASCII_LF: u8 = 0x0A;
/// ASCII carriage return character (0x0D).
pub const ASCII_CR: u8 = 0x0D;
/// ASCII delete character (0x7F).
pub const ASCII_DEL: u8 = 0x7F;
/// ASCII space character (0x20).
pub const ASCII_SPACE: u8 = 0x20;

/// Which byte ends a line.
///
/// The other half of the CR/LF pair becomes the *companion* byte and is
/// discarded wherever it appears, so a terminal sending CR LF produces one
/// line, not a line followed by an empty one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Eol {
    /// Carriage return ends a line; line feed is ignored.
    #[default]
    Cr,
    /// Line feed ends a line; carriage return is ignored.
    Lf,
}

impl Eol {
    /// The byte that completes a line.
    pub const fn terminator(self) -> u8 {
        match self {
            Eol::Cr => ASCII_CR,
            Eol::Lf => ASCII_LF,
        }
    }

    /// The byte that is silently discarded.
    pub const fn companion(self) -> u8 {
        match self {
            Eol::Cr => ASCII_LF,
            Eol::Lf => ASCII_CR,
        }
    }
}

/// What to do with a line holding more than [`MAX_ARGS`](crate::MAX_ARGS)
/// tokens.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ArgOverflow {
    /// Drop the extra tokens and dispatch the rest.
    #[default]
    Truncate,
    /// Answer `TOO MANY ARGS` without running any handler.
    Reject,
}

/// Plain, serializable session options.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// End-of-line convention.
    pub eol: Eol,
    /// Echo every received byte back to the transport.
    pub echo: bool,
    /// Answer `<command> -h` / `<command> --help` with the command's help.
    pub help_flag: bool,
    /// Policy for lines with too many tokens.
    pub arg_overflow: ArgOverflow,
}

impl Default for Settings {
    fn default() -> Self {
        Self::new()
    }
}

impl Settings {
    /// Defaults: CR line endings, echo on, help flag off, truncate overflow.
    pub const fn new() -> Self {
        Self {
            eol: Eol::Cr,
            echo: true,
            help_flag: false,
            arg_overflow: ArgOverflow::Truncate,
        }
    }

    /// Parse settings from JSON. Missing fields keep their defaults.
    pub fn from_json(json: &[u8]) -> Result<Self, Error> {
        serde_json_core::from_slice::<Settings>(json)
            .map(|(settings, _)| settings)
            .map_err(|_| Error::InvalidSettings)
    }
}

/// Everything a [`Session`](crate::Session) needs, supplied once.
///
/// The buffer, the command table and the transport are mandatory;
/// [`Session::init`](crate::Session::init) rejects a configuration missing
/// any of them.
///
/// # Examples
///
/// ```rust
/// use cmdline::{Args, CharIo, Command, Config, Eol, Status};
///
/// # struct Uart;
/// # impl CharIo for Uart {
/// #     fn read_byte(&mut self) -> Option<u8> { None }
/// #     fn write_byte(&mut self, _byte: u8) {}
/// # }
/// fn ping(_args: &Args<'_>) -> Status {
///     Status::CmdOk
/// }
///
/// const COMMANDS: &[Command<'static>] = &[Command::new("ping", &ping, "Reply CMD OK")];
///
/// let mut buffer = [0u8; 64];
/// let config = Config::new()
///     .buffer(&mut buffer)
///     .commands(COMMANDS)
///     .io(Uart)
///     .eol(Eol::Lf);
/// # let _ = config;
/// ```
#[derive(Debug)]
pub struct Config<'b, 't, IO> {
    pub(crate) buffer: Option<&'b mut [u8]>,
    pub(crate) commands: Option<&'t [Command<'t>]>,
    pub(crate) io: Option<IO>,
    pub(crate) settings: Settings,
}

impl<IO> Default for Config<'_, '_, IO> {
    fn default() -> Self {
        Self::new()
    }
}

impl<'b, 't, IO> Config<'b, 't, IO> {
    /// An empty configuration with default [`Settings`].
    pub const fn new() -> Self {
        Self {
            buffer: None,
            commands: None,
            io: None,
            settings: Settings::new(),
        }
    }

    /// The receive buffer. Its length is the line capacity and must be at
    /// least 2; one slot is always kept for the terminator.
    pub fn buffer(mut self, buffer: &'b mut [u8]) -> Self {
        self.buffer = Some(buffer);
        self
    }

    /// The command table, searched in order.
    pub fn commands(mut self, commands: &'t [Command<'t>]) -> Self {
        self.commands = Some(commands);
        self
    }

    /// The character transport.
    pub fn io(mut self, io: IO) -> Self {
        self.io = Some(io);
        self
    }

    /// Replace all plain options at once.
    pub fn settings(mut self, settings: Settings) -> Self {
        self.settings = settings;
        self
    }

    /// End-of-line convention.
    pub fn eol(mut self, eol: Eol) -> Self {
        self.settings.eol = eol;
        self
    }

    /// Enable or disable echo of received bytes.
    pub fn echo(mut self, enabled: bool) -> Self {
        self.settings.echo = enabled;
        self
    }

    /// Enable or disable `-h` / `--help` handling.
    pub fn help_flag(mut self, enabled: bool) -> Self {
        self.settings.help_flag = enabled;
        self
    }

    /// Policy for lines with too many tokens.
    pub fn arg_overflow(mut self, policy: ArgOverflow) -> Self {
        self.settings.arg_overflow = policy;
        self
    }
}
