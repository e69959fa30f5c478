//! # cmdline - serial command interpreter for embedded devices
//!
//! A byte-oriented command-line interpreter for resource-constrained systems.
//! Bytes arrive one at a time from a UART (or any other transport), are edited
//! into a line buffer, split into arguments, and dispatched to a handler from a
//! table you provide. Every completed line is answered with a short status
//! phrase, so both humans at a terminal and scripts on a host can drive the
//! device.
//!
//! ## Features
//!
//! - **Zero-allocation**: the line lives in a buffer you own; arguments are
//!   borrowed views into it
//! - **Line editing**: backspace/delete, CR or LF line endings with the other
//!   byte of a CR LF pair swallowed
//! - **Polling**: [`Session::process`] never blocks and handles at most one
//!   line per call, so it drops straight into a main loop
//! - **Static command tables**: `const` slices of [`Command`] in ROM
//! - **Stable replies**: `CMD OK`, `INVALID ARG`, `TOO FEW ARGS`,
//!   `TOO MANY ARGS`, `BAD CMD`, `NOT INITIALIZED`
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────┐    ┌─────────────────┐    ┌─────────────────┐
//! │   LineEditor    │───▶│   tokenize      │───▶│   dispatch      │
//! │  (echo, BS/DEL, │    │  (in place,     │    │  (linear, exact │
//! │   EOL, full)    │    │   MAX_ARGS)     │    │   name match)   │
//! └─────────────────┘    └─────────────────┘    └─────────────────┘
//!          ▲                                             │
//!          │              ┌─────────────────┐            ▼
//!       CharIo ◀──────────│     Session     │◀──── Status + CR LF
//!                         └─────────────────┘
//! ```
//!
//! ## Usage
//!
//! ```rust
//! use cmdline::{Args, Command, Config, Eol, FnIo, Session, Status};
//!
//! fn led(args: &Args<'_>) -> Status {
//!     match args.get_str(1) {
//!         Some("on") | Some("off") => Status::CmdOk,
//!         Some(_) => Status::InvalidArg,
//!         None => Status::TooFewArgs,
//!     }
//! }
//!
//! const COMMANDS: &[Command<'static>] = &[Command::new("led", &led, "Switch the LED on or off")];
//!
//! let mut rx = b"led on\r\n".iter().copied();
//! let mut tx = Vec::new();
//! let mut buffer = [0u8; 64];
//!
//! let mut session = Session::new();
//! session
//!     .init(
//!         Config::new()
//!             .buffer(&mut buffer)
//!             .commands(COMMANDS)
//!             .eol(Eol::Cr)
//!             .io(FnIo::new(|| rx.next(), |byte| tx.push(byte))),
//!     )
//!     .unwrap();
//!
//! // Typically called once per main-loop iteration.
//! session.process().unwrap();
//! session.process().unwrap();
//! drop(session);
//!
//! assert_eq!(tx, b"led on\rCMD OK\r\n\n");
//! ```
//!
//! ## Optional Features
//!
//! - `std`: implement `std::error::Error` for [`Error`] (default: disabled)
//! - `defmt`: log session events and implement `defmt::Format` for the
//!   public error and status types

#![cfg_attr(not(any(test, feature = "std")), no_std)]
#![deny(missing_docs)]
#![deny(unsafe_code)]
#![warn(missing_debug_implementations)]

#[macro_use]
mod fmt;

/// Session configuration and serializable settings.
pub mod config;

/// Command table types and lookup.
pub mod dispatch;

/// Line buffer editing with a bounded cursor.
pub mod editor;

/// Structural errors.
pub mod error;

/// Character transport abstraction.
pub mod io;

/// The line-cycle controller.
pub mod session;

/// Status vocabulary written after each line.
pub mod status;

/// In-place argument splitting.
pub mod tokenizer;

pub use config::{
    ASCII_BACKSPACE, ASCII_CR, ASCII_DEL, ASCII_LF, ASCII_SPACE, ArgOverflow, Config, Eol, Settings,
};
pub use dispatch::{Command, Handler, HelpFn, dispatch, find};
pub use editor::{Cursor, Feed, LineEditor};
pub use error::Error;
pub use io::{CharIo, FnIo};
pub use session::Session;
pub use status::Status;
pub use tokenizer::{Args, MAX_ARGS, tokenize};
