//! Command outcome vocabulary.
//!
//! Every completed line is answered with exactly one of these phrases followed
//! by CR LF. Scripts driving a device parse these strings, so they are part of
//! the wire protocol and must not change.

use core::fmt;

/// Outcome of processing one command line.
///
/// Handlers return a `Status` too, which lets them report argument problems
/// using the same vocabulary the dispatcher uses.
///
/// # Examples
///
/// ```rust
/// use cmdline::{Args, Status};
///
/// fn led(args: &Args<'_>) -> Status {
///     match args.get(1) {
///         Some(b"on") | Some(b"off") => Status::CmdOk,
///         Some(_) => Status::InvalidArg,
///         None => Status::TooFewArgs,
///     }
/// }
/// # let _ = led;
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Status {
    /// The command ran successfully.
    CmdOk = 0,
    /// An argument had an unacceptable value.
    InvalidArg,
    /// The line held no tokens, or the command needs more arguments.
    TooFewArgs,
    /// The line held more arguments than can be accepted.
    TooManyArgs,
    /// No command with that name exists.
    BadCmd,
    /// The command (or something it depends on) has not been initialized.
    NotInitialized,
}

impl Status {
    /// Every status, in code order.
    pub const ALL: [Status; 6] = [
        Status::CmdOk,
        Status::InvalidArg,
        Status::TooFewArgs,
        Status::TooManyArgs,
        Status::BadCmd,
        Status::NotInitialized,
    ];

    /// The phrase written to the transport for this status.
    pub const fn as_str(self) -> &'static str {
        match self {
            Status::CmdOk => "CMD OK",
            Status::InvalidArg => "INVALID ARG",
            Status::TooFewArgs => "TOO FEW ARGS",
            Status::TooManyArgs => "TOO MANY ARGS",
            Status::BadCmd => "BAD CMD",
            Status::NotInitialized => "NOT INITIALIZED",
        }
    }

    /// Returns `true` for [`Status::CmdOk`].
    pub const fn is_ok(self) -> bool {
        matches!(self, Status::CmdOk)
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(feature = "defmt")]
impl defmt::Format for Status {
    fn format(&self, f: defmt::Formatter) {
        defmt::write!(f, "{=str}", self.as_str())
    }
}
