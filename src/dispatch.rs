//! Command table lookup and execution.
//!
//! The table is an ordered slice of [`Command`] descriptors owned by the
//! caller, usually a `const` in ROM. Lookup is a linear scan comparing the
//! command name byte-for-byte with `argv[0]`; the first match wins, so an
//! earlier entry shadows a later one with the same name.

use core::fmt;

use crate::io::CharIo;
use crate::status::Status;
use crate::tokenizer::Args;

/// The implementation of a command.
///
/// Any `Fn(&Args<'_>) -> Status` is a handler, so plain functions can be
/// placed in a table directly. Implement the trait on a type when the
/// command needs state.
///
/// # Examples
///
/// ```rust
/// use core::sync::atomic::{AtomicU32, Ordering};
/// use cmdline::{Args, Handler, Status};
///
/// struct Counter(AtomicU32);
///
/// impl Handler for Counter {
///     fn run(&self, _args: &Args<'_>) -> Status {
///         self.0.fetch_add(1, Ordering::Relaxed);
///         Status::CmdOk
///     }
/// }
/// ```
pub trait Handler {
    /// Run the command with the parsed arguments (`argv[0]` is the name).
    fn run(&self, args: &Args<'_>) -> Status;
}

impl<F> Handler for F
where
    F: Fn(&Args<'_>) -> Status,
{
    fn run(&self, args: &Args<'_>) -> Status {
        self(args)
    }
}

/// Prints detailed help for one command through the session transport.
pub type HelpFn = fn(&mut dyn CharIo);

/// One entry of the command table.
#[derive(Clone, Copy)]
pub struct Command<'t> {
    /// The name typed by the user. Matching is exact and case-sensitive.
    pub name: &'t str,
    /// The command implementation.
    pub handler: &'t dyn Handler,
    /// One-line description.
    pub help: &'t str,
    /// Optional detailed help printer.
    pub detail: Option<HelpFn>,
}

impl<'t> Command<'t> {
    /// A table entry without detailed help.
    pub const fn new(name: &'t str, handler: &'t dyn Handler, help: &'t str) -> Self {
        Self {
            name,
            handler,
            help,
            detail: None,
        }
    }

    /// Attach a detailed help printer.
    pub const fn with_detail(mut self, detail: HelpFn) -> Self {
        self.detail = Some(detail);
        self
    }
}

impl fmt::Debug for Command<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Command")
            .field("name", &self.name)
            .field("help", &self.help)
            .field("detail", &self.detail.is_some())
            .finish_non_exhaustive()
    }
}

/// Find the first command called `name`.
pub fn find<'c, 't>(commands: &'c [Command<'t>], name: &[u8]) -> Option<&'c Command<'t>> {
    commands.iter().find(|command| command.name.as_bytes() == name)
}

/// Run the command named by `argv[0]` and return its status.
///
/// An empty argument list yields [`Status::TooFewArgs`] without searching;
/// an unknown name yields [`Status::BadCmd`].
pub fn dispatch(commands: &[Command<'_>], args: &Args<'_>) -> Status {
    let Some(name) = args.command() else {
        return Status::TooFewArgs;
    };

    match find(commands, name) {
        Some(command) => {
            let status = command.handler.run(args);
            debug!("command returned {}", status);
            status
        }
        None => Status::BadCmd,
    }
}

/// Answer `<name> -h` / `<name> --help` for a known command.
///
/// Returns `None` when the line is not a help request for a command in the
/// table, leaving it to [`dispatch`].
pub(crate) fn help(
    commands: &[Command<'_>],
    args: &Args<'_>,
    io: &mut dyn CharIo,
) -> Option<Status> {
    if args.len() != 2 {
        return None;
    }

    let flag = args.get(1)?;
    if flag != b"-h" && flag != b"--help" {
        return None;
    }

    let command = find(commands, args.command()?)?;
    match command.detail {
        Some(detail) => detail(io),
        None => {
            io.write_all(command.help.as_bytes());
            io.write_all(b"\r\n");
        }
    }

    Some(Status::CmdOk)
}
