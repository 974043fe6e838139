//! Byte-stream device abstraction
//!
//! The console never talks to hardware directly. Anything that can
//! report pending bytes and move single bytes in both directions can
//! back a console: a UART driver, a USB CDC endpoint, a test double.

/// Non-blocking byte-stream capability.
///
/// All methods are non-blocking. `read` and `peek` return `None` when
/// no byte is pending; `write` is fire-and-forget (a full TX path drops
/// bytes rather than stalling the poll loop).
pub trait Serial {
    /// Number of bytes currently available to read.
    fn available(&self) -> usize;

    /// Consume the next pending byte.
    fn read(&mut self) -> Option<u8>;

    /// Look at the next pending byte without consuming it.
    fn peek(&mut self) -> Option<u8>;

    /// Write a single byte.
    fn write(&mut self, byte: u8);

    /// Write a byte slice.
    fn write_bytes(&mut self, bytes: &[u8]) {
        for &byte in bytes {
            self.write(byte);
        }
    }
}

/// Formatted output on trait objects, so diagnostics and command
/// handlers can use the `write!` family directly on a `&mut dyn Serial`.
impl<'a> core::fmt::Write for (dyn Serial + 'a) {
    fn write_str(&mut self, s: &str) -> core::fmt::Result {
        self.write_bytes(s.as_bytes());
        Ok(())
    }
}
