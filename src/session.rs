//! The line-cycle controller.
//!
//! A [`Session`] starts uninitialized and becomes ready after a successful
//! [`init`](Session::init). While ready, each call to
//! [`process`](Session::process) runs at most one line cycle:
//!
//! ```text
//!            init                 EOL / full          tokenize + dispatch
//! UNINIT ──────────▶ ACCUMULATING ──────────▶ LINE_COMPLETE ──────────▶ DISPATCHED
//!                        ▲                                                  │
//!                        │            zero buffer, cursor = 0               │ status + CR LF
//!                        └──────────────────── CLEARED ◀────────────────────┘
//! ```
//!
//! A line that is still being typed when the transport runs dry simply stays
//! in the buffer until a later call completes it.

use crate::config::{ASCII_CR, ASCII_LF, ArgOverflow, Config, Settings};
use crate::dispatch::{self, Command};
use crate::editor::LineEditor;
use crate::error::Error;
use crate::io::CharIo;
use crate::status::Status;

/// One interactive command line bound to one transport.
///
/// # Examples
///
/// ```rust
/// use cmdline::{Args, CharIo, Command, Config, Session, Status};
///
/// struct Uart {
///     rx: &'static [u8],
///     tx: Vec<u8>,
/// }
///
/// impl CharIo for Uart {
///     fn read_byte(&mut self) -> Option<u8> {
///         let (&first, rest) = self.rx.split_first()?;
///         self.rx = rest;
///         Some(first)
///     }
///
///     fn write_byte(&mut self, byte: u8) {
///         self.tx.push(byte);
///     }
/// }
///
/// fn reboot(_args: &Args<'_>) -> Status {
///     Status::CmdOk
/// }
///
/// const COMMANDS: &[Command<'static>] = &[Command::new("reboot", &reboot, "Restart the device")];
///
/// let mut buffer = [0u8; 32];
/// let mut uart = Uart { rx: b"reboot\r", tx: Vec::new() };
///
/// let mut session = Session::new();
/// session
///     .init(Config::new().buffer(&mut buffer).commands(COMMANDS).io(&mut uart))
///     .unwrap();
/// session.process().unwrap();
/// drop(session);
///
/// assert_eq!(uart.tx, b"reboot\rCMD OK\r\n");
/// ```
#[derive(Debug)]
pub struct Session<'b, 't, IO> {
    ready: Option<Ready<'b, 't, IO>>,
}

#[derive(Debug)]
struct Ready<'b, 't, IO> {
    editor: LineEditor<'b>,
    commands: &'t [Command<'t>],
    io: IO,
    settings: Settings,
}

impl<IO: CharIo> Default for Session<'_, '_, IO> {
    fn default() -> Self {
        Self::new()
    }
}

impl<'b, 't, IO: CharIo> Session<'b, 't, IO> {
    /// An uninitialized session. Usable in a `static`.
    pub const fn new() -> Self {
        Self { ready: None }
    }

    /// Create and initialize in one step.
    pub fn with_config(config: Config<'b, 't, IO>) -> Result<Self, Error> {
        let mut session = Self::new();
        session.init(config)?;
        Ok(session)
    }

    /// Validate `config` and make the session ready.
    ///
    /// Calling this on a session that is already initialized succeeds without
    /// touching it: the new configuration is dropped and any partially typed
    /// line is kept.
    ///
    /// # Errors
    ///
    /// Checked in this order:
    ///
    /// * [`Error::MissingBuffer`] - no buffer was supplied
    /// * [`Error::BufferTooSmall`] - the buffer holds fewer than two bytes
    /// * [`Error::MissingCommands`], [`Error::MissingIo`] - a mandatory part
    ///   was not supplied
    pub fn init(&mut self, config: Config<'b, 't, IO>) -> Result<(), Error> {
        if self.ready.is_some() {
            trace!("session already initialized");
            return Ok(());
        }

        let Config {
            buffer,
            commands,
            io,
            settings,
        } = config;

        let buffer = buffer.ok_or(Error::MissingBuffer)?;
        let editor = LineEditor::new(buffer, settings.eol)?;
        let commands = commands.ok_or(Error::MissingCommands)?;
        let io = io.ok_or(Error::MissingIo)?;

        debug!(
            "session ready: capacity {=usize}, eol {=u8:#x}, {=usize} commands",
            editor.capacity(),
            settings.eol.terminator(),
            commands.len()
        );

        self.ready = Some(Ready {
            editor,
            commands,
            io,
            settings,
        });
        Ok(())
    }

    /// Run one polling step.
    ///
    /// Drains the transport until it is empty or a line completes. For a
    /// completed line the command is dispatched, its status phrase and CR LF
    /// are written, and the buffer is cleared. Command failures are reported
    /// only on the wire; the call itself still succeeds.
    ///
    /// # Errors
    ///
    /// * [`Error::NotInitialized`] - [`init`](Self::init) has not succeeded;
    ///   nothing is read, echoed or dispatched
    pub fn process(&mut self) -> Result<(), Error> {
        let ready = self.ready.as_mut().ok_or(Error::NotInitialized)?;
        ready.process();
        Ok(())
    }

    /// `true` once [`init`](Self::init) has succeeded.
    pub fn is_initialized(&self) -> bool {
        self.ready.is_some()
    }

    /// Number of committed bytes in the line being typed.
    pub fn cursor(&self) -> Option<usize> {
        self.ready.as_ref().map(|ready| ready.editor.len())
    }

    /// The committed bytes of the line being typed.
    pub fn line(&self) -> Option<&[u8]> {
        self.ready.as_ref().map(|ready| ready.editor.line())
    }

    /// The whole receive buffer.
    pub fn buffer(&self) -> Option<&[u8]> {
        self.ready.as_ref().map(|ready| ready.editor.buffer())
    }

    /// The options in effect.
    pub fn settings(&self) -> Option<&Settings> {
        self.ready.as_ref().map(|ready| &ready.settings)
    }

    /// The transport.
    pub fn io(&self) -> Option<&IO> {
        self.ready.as_ref().map(|ready| &ready.io)
    }

    /// The transport, mutably.
    pub fn io_mut(&mut self) -> Option<&mut IO> {
        self.ready.as_mut().map(|ready| &mut ready.io)
    }

    /// Tear the session down, returning the buffer and the transport.
    pub fn into_parts(self) -> Option<(&'b mut [u8], IO)> {
        self.ready.map(|ready| (ready.editor.into_buffer(), ready.io))
    }
}

impl<IO: CharIo> Ready<'_, '_, IO> {
    fn process(&mut self) {
        if !self.editor.poll(&mut self.io, self.settings.echo) {
            return;
        }

        let status = self.execute();
        self.reply(status);
        self.editor.clear();
    }

    fn execute(&mut self) -> Status {
        let args = self.editor.tokenize();

        if args.is_empty() {
            return Status::TooFewArgs;
        }

        if args.is_truncated() && self.settings.arg_overflow == ArgOverflow::Reject {
            warn!("line rejected, {=usize} arguments over capacity", args.dropped());
            return Status::TooManyArgs;
        }

        if self.settings.help_flag {
            if let Some(status) = dispatch::help(self.commands, &args, &mut self.io) {
                return status;
            }
        }

        dispatch::dispatch(self.commands, &args)
    }

    fn reply(&mut self, status: Status) {
        self.io.write_all(status.as_str().as_bytes());
        self.io.write_all(&[ASCII_CR, ASCII_LF]);
    }
}
