//! Character transport abstraction.
//!
//! The interpreter never touches hardware. It pulls bytes from, and pushes
//! bytes to, whatever implements [`CharIo`]: a UART driver, a USB CDC class,
//! a ring buffer filled from an interrupt, or a test double.

/// A byte-at-a-time, non-blocking character transport.
///
/// # Examples
///
/// ```rust
/// use cmdline::CharIo;
///
/// struct Loopback {
///     pending: Option<u8>,
/// }
///
/// impl CharIo for Loopback {
///     fn read_byte(&mut self) -> Option<u8> {
///         self.pending.take()
///     }
///
///     fn write_byte(&mut self, byte: u8) {
///         self.pending = Some(byte);
///     }
/// }
/// ```
pub trait CharIo {
    /// Fetch the next received byte, or `None` when nothing is pending.
    ///
    /// Must return immediately; the session drains this in a tight loop.
    fn read_byte(&mut self) -> Option<u8>;

    /// Transmit one byte. Assumed to always succeed.
    fn write_byte(&mut self, byte: u8);

    /// Transmit every byte of `bytes` in order.
    fn write_all(&mut self, bytes: &[u8]) {
        for &byte in bytes {
            self.write_byte(byte);
        }
    }
}

impl<T: CharIo + ?Sized> CharIo for &mut T {
    fn read_byte(&mut self) -> Option<u8> {
        (**self).read_byte()
    }

    fn write_byte(&mut self, byte: u8) {
        (**self).write_byte(byte)
    }

    fn write_all(&mut self, bytes: &[u8]) {
        (**self).write_all(bytes)
    }
}

/// A [`CharIo`] assembled from a read closure and a write closure.
///
/// Handy when the platform already exposes two free functions, e.g. a HAL's
/// `uart_getc`/`uart_putc` pair.
///
/// # Examples
///
/// ```rust
/// use cmdline::{CharIo, FnIo};
///
/// let mut input = b"ok".iter().copied();
/// let mut sent = 0usize;
///
/// let mut io = FnIo::new(|| input.next(), |_byte| sent += 1);
/// while let Some(byte) = io.read_byte() {
///     io.write_byte(byte);
/// }
/// drop(io);
/// assert_eq!(sent, 2);
/// ```
pub struct FnIo<R, W> {
    read: R,
    write: W,
}

impl<R, W> FnIo<R, W>
where
    R: FnMut() -> Option<u8>,
    W: FnMut(u8),
{
    /// Pair a read capability with a write capability.
    pub const fn new(read: R, write: W) -> Self {
        Self { read, write }
    }
}

impl<R, W> CharIo for FnIo<R, W>
where
    R: FnMut() -> Option<u8>,
    W: FnMut(u8),
{
    fn read_byte(&mut self) -> Option<u8> {
        (self.read)()
    }

    fn write_byte(&mut self, byte: u8) {
        (self.write)(byte)
    }
}

impl<R, W> core::fmt::Debug for FnIo<R, W> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("FnIo").finish_non_exhaustive()
    }
}
