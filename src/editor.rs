//! Line buffer editing.
//!
//! [`LineEditor`] turns a stream of raw bytes into one committed line inside a
//! caller-owned buffer. It understands exactly three kinds of control input:
//! backspace/delete erase the last committed byte, the companion half of the
//! CR/LF pair is dropped, and the terminator (or a full buffer) completes the
//! line. Everything else is stored verbatim.
//!
//! ```text
//!   byte ──▶ echo ──▶ BS/DEL? ──▶ companion? ──▶ EOL or full? ──▶ store
//!                       │             │               │             │
//!                    erase         discard      zero tail,       advance
//!                                               complete
//! ```
//!
//! A full line is only noticed when the next byte arrives. That byte completes
//! the line whatever it is and is not stored.

use crate::config::{ASCII_BACKSPACE, ASCII_DEL, Eol};
use crate::error::Error;
use crate::io::CharIo;
use crate::tokenizer::{self, Args};

/// A write position that can never run past the end of its buffer.
///
/// One slot is reserved for the terminator, so a cursor over a buffer of
/// capacity `N` ranges over `0..=N - 1`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cursor {
    position: usize,
    limit: usize,
}

impl Cursor {
    /// A cursor for a buffer of `capacity` bytes, or `None` when the capacity
    /// leaves no room for both a byte and the terminator.
    pub const fn new(capacity: usize) -> Option<Self> {
        if capacity < 2 {
            return None;
        }
        Some(Self {
            position: 0,
            limit: capacity - 1,
        })
    }

    /// Number of committed bytes.
    pub const fn position(&self) -> usize {
        self.position
    }

    /// Highest position the cursor can reach.
    pub const fn limit(&self) -> usize {
        self.limit
    }

    /// `true` once no further byte can be committed.
    pub const fn is_full(&self) -> bool {
        self.position >= self.limit
    }

    /// Claim the slot under the cursor and move past it.
    pub fn advance(&mut self) -> Option<usize> {
        if self.is_full() {
            return None;
        }
        let slot = self.position;
        self.position += 1;
        Some(slot)
    }

    /// Step back over the last committed slot and return it.
    pub fn retreat(&mut self) -> Option<usize> {
        self.position = self.position.checked_sub(1)?;
        Some(self.position)
    }

    /// Return to the start of the line.
    pub fn reset(&mut self) {
        self.position = 0;
    }
}

/// Result of feeding one byte to a [`LineEditor`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Feed {
    /// The line is still being typed.
    Pending,
    /// The line is complete and terminated.
    Complete,
}

/// Accumulates and edits one line in a borrowed buffer.
///
/// # Examples
///
/// ```rust
/// use cmdline::{Eol, Feed, LineEditor};
///
/// let mut buffer = [0u8; 16];
/// let mut editor = LineEditor::new(&mut buffer, Eol::Cr).unwrap();
///
/// for &byte in b"lex\x08d" {
///     assert_eq!(editor.feed(byte), Feed::Pending);
/// }
/// assert_eq!(editor.feed(b'\r'), Feed::Complete);
/// assert_eq!(editor.line(), b"led");
/// ```
#[derive(Debug)]
pub struct LineEditor<'b> {
    buffer: &'b mut [u8],
    cursor: Cursor,
    terminator: u8,
    companion: u8,
}

impl<'b> LineEditor<'b> {
    /// Take over `buffer` as the line storage.
    ///
    /// The buffer is zeroed so no stale bytes can leak into the first line.
    pub fn new(buffer: &'b mut [u8], eol: Eol) -> Result<Self, Error> {
        let cursor = Cursor::new(buffer.len()).ok_or(Error::BufferTooSmall)?;
        buffer.fill(0);
        Ok(Self {
            buffer,
            cursor,
            terminator: eol.terminator(),
            companion: eol.companion(),
        })
    }

    /// Apply one received byte.
    pub fn feed(&mut self, byte: u8) -> Feed {
        if byte == ASCII_DEL || byte == ASCII_BACKSPACE {
            self.erase_last();
            return Feed::Pending;
        }

        if byte == self.companion {
            return Feed::Pending;
        }

        if byte == self.terminator || self.cursor.is_full() {
            if byte != self.terminator {
                trace!("line buffer full at {=usize} bytes", self.cursor.position());
            }
            self.terminate();
            return Feed::Complete;
        }

        if let Some(slot) = self.cursor.advance() {
            if let Some(cell) = self.buffer.get_mut(slot) {
                *cell = byte;
            }
        }

        Feed::Pending
    }

    /// Drain `io` until it runs dry or a line completes.
    ///
    /// Every byte read is echoed back first when `echo` is set. Returns `true`
    /// when a complete line is waiting in the buffer; bytes after the
    /// terminator stay in the transport for the next call.
    pub fn poll<IO: CharIo + ?Sized>(&mut self, io: &mut IO, echo: bool) -> bool {
        while let Some(byte) = io.read_byte() {
            if echo {
                io.write_byte(byte);
            }

            if self.feed(byte) == Feed::Complete {
                debug!("line complete, {=usize} bytes", self.cursor.position());
                return true;
            }
        }

        false
    }

    /// The committed bytes of the current line.
    pub fn line(&self) -> &[u8] {
        self.buffer.get(..self.cursor.position()).unwrap_or_default()
    }

    /// Number of committed bytes.
    pub fn len(&self) -> usize {
        self.cursor.position()
    }

    /// `true` when nothing is committed.
    pub fn is_empty(&self) -> bool {
        self.cursor.position() == 0
    }

    /// Total buffer size, including the terminator slot.
    pub fn capacity(&self) -> usize {
        self.buffer.len()
    }

    /// The whole underlying buffer.
    pub fn buffer(&self) -> &[u8] {
        self.buffer
    }

    /// The cursor state.
    pub fn cursor(&self) -> Cursor {
        self.cursor
    }

    /// Split the committed line into arguments, in place.
    ///
    /// The returned view borrows the buffer, so it must be dropped before the
    /// editor can be cleared or fed again.
    pub fn tokenize(&mut self) -> Args<'_> {
        let len = self.cursor.position();
        tokenizer::tokenize(self.buffer, len)
    }

    /// Zero the whole buffer and rewind the cursor for the next line.
    pub fn clear(&mut self) {
        self.buffer.fill(0);
        self.cursor.reset();
    }

    /// Hand the buffer back to the caller.
    pub fn into_buffer(self) -> &'b mut [u8] {
        self.buffer
    }

    fn erase_last(&mut self) {
        if let Some(slot) = self.cursor.retreat() {
            if let Some(cell) = self.buffer.get_mut(slot) {
                *cell = 0;
            }
        }
    }

    fn terminate(&mut self) {
        if let Some(tail) = self.buffer.get_mut(self.cursor.position()..) {
            tail.fill(0);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::VecDeque;

    struct ScriptedIo {
        input: VecDeque<u8>,
        output: Vec<u8>,
    }

    impl ScriptedIo {
        fn new(input: &[u8]) -> Self {
            Self {
                input: input.iter().copied().collect(),
                output: Vec::new(),
            }
        }
    }

    impl CharIo for ScriptedIo {
        fn read_byte(&mut self) -> Option<u8> {
            self.input.pop_front()
        }

        fn write_byte(&mut self, byte: u8) {
            self.output.push(byte);
        }
    }

    fn feed_all(editor: &mut LineEditor<'_>, bytes: &[u8]) -> Feed {
        let mut last = Feed::Pending;
        for &byte in bytes {
            last = editor.feed(byte);
        }
        last
    }

    #[test]
    fn test_cursor_bounds() {
        assert!(Cursor::new(0).is_none());
        assert!(Cursor::new(1).is_none());

        let mut cursor = Cursor::new(3).unwrap();
        assert_eq!(cursor.limit(), 2);
        assert_eq!(cursor.retreat(), None);
        assert_eq!(cursor.position(), 0);
        assert_eq!(cursor.advance(), Some(0));
        assert_eq!(cursor.advance(), Some(1));
        assert!(cursor.is_full());
        assert_eq!(cursor.advance(), None);
        assert_eq!(cursor.position(), 2);
        assert_eq!(cursor.retreat(), Some(1));
        cursor.reset();
        assert_eq!(cursor.position(), 0);
    }

    #[test]
    fn test_new_rejects_tiny_buffer() {
        let mut buffer = [0u8; 1];
        assert_eq!(
            LineEditor::new(&mut buffer, Eol::Cr).err(),
            Some(Error::BufferTooSmall)
        );
    }

    #[test]
    fn test_new_zeroes_buffer() {
        let mut buffer = [0xAAu8; 8];
        let editor = LineEditor::new(&mut buffer, Eol::Cr).unwrap();
        assert!(editor.buffer().iter().all(|&b| b == 0));
    }

    #[test]
    fn test_plain_line() {
        let mut buffer = [0u8; 16];
        let mut editor = LineEditor::new(&mut buffer, Eol::Cr).unwrap();
        assert_eq!(feed_all(&mut editor, b"help\r"), Feed::Complete);
        assert_eq!(editor.line(), b"help");
        assert_eq!(editor.len(), 4);
    }

    #[test]
    fn test_backspace_and_delete_erase() {
        let mut buffer = [0u8; 16];
        let mut editor = LineEditor::new(&mut buffer, Eol::Cr).unwrap();
        feed_all(&mut editor, b"hellp");
        editor.feed(ASCII_BACKSPACE);
        editor.feed(b'o');
        editor.feed(ASCII_DEL);
        editor.feed(ASCII_DEL);
        assert_eq!(editor.line(), b"hel");
        assert_eq!(editor.buffer()[3], 0);
        assert_eq!(editor.buffer()[4], 0);
    }

    #[test]
    fn test_erase_on_empty_is_noop() {
        let mut buffer = [0u8; 4];
        let mut editor = LineEditor::new(&mut buffer, Eol::Cr).unwrap();
        assert_eq!(editor.feed(ASCII_BACKSPACE), Feed::Pending);
        assert_eq!(editor.feed(ASCII_DEL), Feed::Pending);
        assert!(editor.is_empty());
        assert_eq!(editor.cursor().position(), 0);
    }

    #[test]
    fn test_companion_is_ignored_cr_mode() {
        let mut buffer = [0u8; 16];
        let mut editor = LineEditor::new(&mut buffer, Eol::Cr).unwrap();
        assert_eq!(feed_all(&mut editor, b"a\nb"), Feed::Pending);
        assert_eq!(editor.feed(b'\r'), Feed::Complete);
        assert_eq!(editor.line(), b"ab");
    }

    #[test]
    fn test_companion_is_ignored_lf_mode() {
        let mut buffer = [0u8; 16];
        let mut editor = LineEditor::new(&mut buffer, Eol::Lf).unwrap();
        assert_eq!(feed_all(&mut editor, b"ab\r"), Feed::Pending);
        assert_eq!(editor.feed(b'\n'), Feed::Complete);
        assert_eq!(editor.line(), b"ab");
    }

    #[test]
    fn test_full_buffer_stays_pending() {
        let mut buffer = [0u8; 5];
        let mut editor = LineEditor::new(&mut buffer, Eol::Cr).unwrap();
        assert_eq!(feed_all(&mut editor, b"abcd"), Feed::Pending);
        assert!(editor.cursor().is_full());
        assert_eq!(editor.line(), b"abcd");
    }

    #[test]
    fn test_full_buffer_completes_on_next_byte_without_storing() {
        let mut buffer = [0u8; 5];
        let mut editor = LineEditor::new(&mut buffer, Eol::Cr).unwrap();
        feed_all(&mut editor, b"abcd");
        assert_eq!(editor.feed(b'e'), Feed::Complete);
        assert_eq!(editor.line(), b"abcd");
        assert_eq!(editor.buffer(), b"abcd\0");
    }

    #[test]
    fn test_full_buffer_completes_on_eol() {
        let mut buffer = [0u8; 3];
        let mut editor = LineEditor::new(&mut buffer, Eol::Cr).unwrap();
        assert_eq!(feed_all(&mut editor, b"ab"), Feed::Pending);
        assert_eq!(editor.feed(b'\r'), Feed::Complete);
        assert_eq!(editor.line(), b"ab");
    }

    #[test]
    fn test_erase_on_full_buffer_reopens_line() {
        let mut buffer = [0u8; 3];
        let mut editor = LineEditor::new(&mut buffer, Eol::Cr).unwrap();
        feed_all(&mut editor, b"ab");
        assert_eq!(editor.feed(ASCII_BACKSPACE), Feed::Pending);
        assert_eq!(editor.feed(b'c'), Feed::Pending);
        assert_eq!(editor.line(), b"ac");
    }

    #[test]
    fn test_poll_full_line_then_eol_is_one_line() {
        let mut buffer = [0u8; 4];
        let mut editor = LineEditor::new(&mut buffer, Eol::Cr).unwrap();
        let mut io = ScriptedIo::new(b"abc\r");
        assert!(editor.poll(&mut io, true));
        assert_eq!(editor.line(), b"abc");
        assert_eq!(io.output, b"abc\r");
        assert!(io.input.is_empty());
    }

    #[test]
    fn test_terminate_zeroes_tail() {
        let mut buffer = [0u8; 8];
        let mut editor = LineEditor::new(&mut buffer, Eol::Cr).unwrap();
        feed_all(&mut editor, b"abcdef");
        for _ in 0..4 {
            editor.feed(ASCII_BACKSPACE);
        }
        assert_eq!(editor.feed(b'\r'), Feed::Complete);
        assert_eq!(editor.buffer(), b"ab\0\0\0\0\0\0");
    }

    #[test]
    fn test_clear_zeroes_everything() {
        let mut buffer = [0u8; 8];
        let mut editor = LineEditor::new(&mut buffer, Eol::Cr).unwrap();
        feed_all(&mut editor, b"abc\r");
        editor.clear();
        assert!(editor.buffer().iter().all(|&b| b == 0));
        assert!(editor.is_empty());
    }

    #[test]
    fn test_poll_echoes_every_byte() {
        let mut buffer = [0u8; 16];
        let mut editor = LineEditor::new(&mut buffer, Eol::Cr).unwrap();
        let mut io = ScriptedIo::new(b"ab\x08c\n\r");
        assert!(editor.poll(&mut io, true));
        assert_eq!(io.output, b"ab\x08c\n\r");
        assert_eq!(editor.line(), b"ac");
    }

    #[test]
    fn test_poll_without_echo() {
        let mut buffer = [0u8; 16];
        let mut editor = LineEditor::new(&mut buffer, Eol::Cr).unwrap();
        let mut io = ScriptedIo::new(b"ab\r");
        assert!(editor.poll(&mut io, false));
        assert!(io.output.is_empty());
    }

    #[test]
    fn test_poll_stops_after_one_line() {
        let mut buffer = [0u8; 16];
        let mut editor = LineEditor::new(&mut buffer, Eol::Cr).unwrap();
        let mut io = ScriptedIo::new(b"one\rtwo\r");
        assert!(editor.poll(&mut io, true));
        assert_eq!(editor.line(), b"one");
        assert_eq!(io.input.len(), 4);

        editor.clear();
        assert!(editor.poll(&mut io, true));
        assert_eq!(editor.line(), b"two");
    }

    #[test]
    fn test_poll_returns_false_when_drained() {
        let mut buffer = [0u8; 16];
        let mut editor = LineEditor::new(&mut buffer, Eol::Cr).unwrap();
        let mut io = ScriptedIo::new(b"partial");
        assert!(!editor.poll(&mut io, true));
        assert_eq!(editor.line(), b"partial");
        assert!(!editor.poll(&mut io, true));
    }
}
