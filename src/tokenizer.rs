//! In-place argument splitting.
//!
//! A completed line is split on spaces by overwriting each space with a zero
//! byte. The first byte of the line starts a token unless it is a space; any
//! later non-zero byte starts one when it follows a zero. Runs of spaces
//! collapse and leading or trailing spaces never produce empty tokens:
//!
//! ```text
//! before:  c m d ␠ ␠ a ␠ ␠ ␠ b
//! after:   c m d ∅ ∅ a ∅ ∅ ∅ b
//! starts:  ^         ^       ^      argc = 3
//! ```

use heapless::Vec;

use crate::config::ASCII_SPACE;

/// Maximum number of arguments per line, including the command name.
pub const MAX_ARGS: usize = 8;

/// The arguments of one line, borrowed from the receive buffer.
///
/// `argv[0]` is the command name. Tokens are raw bytes; use
/// [`get_str`](Args::get_str) when a handler expects text.
#[derive(Debug, Clone)]
pub struct Args<'b> {
    line: &'b [u8],
    starts: Vec<usize, MAX_ARGS>,
    dropped: usize,
}

impl<'b> Args<'b> {
    /// Number of arguments (argc).
    pub fn len(&self) -> usize {
        self.starts.len()
    }

    /// `true` when the line held no tokens.
    pub fn is_empty(&self) -> bool {
        self.starts.is_empty()
    }

    /// Argument `index`, or `None` past the end.
    pub fn get(&self, index: usize) -> Option<&'b [u8]> {
        let start = *self.starts.get(index)?;
        let rest = self.line.get(start..)?;
        let end = rest.iter().position(|&b| b == 0).unwrap_or(rest.len());
        rest.get(..end)
    }

    /// Argument `index` as UTF-8 text, or `None` if absent or not valid UTF-8.
    pub fn get_str(&self, index: usize) -> Option<&'b str> {
        core::str::from_utf8(self.get(index)?).ok()
    }

    /// The command name, `argv[0]`.
    pub fn command(&self) -> Option<&'b [u8]> {
        self.get(0)
    }

    /// Iterate over all recorded arguments in order.
    pub fn iter(&self) -> impl Iterator<Item = &'b [u8]> + '_ {
        (0..self.len()).filter_map(move |index| self.get(index))
    }

    /// Number of tokens found beyond [`MAX_ARGS`] and not recorded.
    pub fn dropped(&self) -> usize {
        self.dropped
    }

    /// `true` when the line held more than [`MAX_ARGS`] tokens.
    pub fn is_truncated(&self) -> bool {
        self.dropped > 0
    }
}

/// Split `buffer[..len]` into arguments, rewriting separators to zero.
///
/// At most [`MAX_ARGS`] tokens are recorded; the rest are only counted.
pub fn tokenize(buffer: &mut [u8], len: usize) -> Args<'_> {
    let len = len.min(buffer.len());
    let mut starts = Vec::new();
    let mut dropped = 0;
    let mut previous = 0u8;

    for (index, byte) in buffer.iter_mut().take(len).enumerate() {
        let start = if *byte == ASCII_SPACE {
            *byte = 0;
            false
        } else {
            index == 0 || (*byte != 0 && previous == 0)
        };
        if start && starts.push(index).is_err() {
            dropped += 1;
        }
        previous = *byte;
    }

    if dropped > 0 {
        warn!("{=usize} arguments beyond capacity dropped", dropped);
    }

    Args {
        line: buffer.get(..len).unwrap_or_default(),
        starts,
        dropped,
    }
}
