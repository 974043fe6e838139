//! In-memory serial port double for console tests.

#![allow(dead_code)]

use std::collections::VecDeque;

use serial_console::Serial;

/// Byte-stream double: a FIFO of pending input and a capture of
/// everything the console writes.
pub struct MockPort {
    rx: VecDeque<u8>,
    tx: Vec<u8>,
}

impl MockPort {
    pub fn new() -> Self {
        Self {
            rx: VecDeque::new(),
            tx: Vec::new(),
        }
    }

    /// Queue bytes for the console to read.
    pub fn feed(&mut self, bytes: &[u8]) {
        self.rx.extend(bytes.iter().copied());
    }

    /// Everything written so far, lossily decoded.
    pub fn output(&self) -> String {
        String::from_utf8_lossy(&self.tx).into_owned()
    }

    /// Drain and return the captured output.
    pub fn take_output(&mut self) -> String {
        let out = self.output();
        self.tx.clear();
        out
    }

    /// Raw captured output bytes.
    pub fn output_bytes(&self) -> &[u8] {
        &self.tx
    }

    /// Input bytes not yet consumed by the console.
    pub fn pending(&self) -> usize {
        self.rx.len()
    }
}

impl Serial for MockPort {
    fn available(&self) -> usize {
        self.rx.len()
    }

    fn read(&mut self) -> Option<u8> {
        self.rx.pop_front()
    }

    fn peek(&mut self) -> Option<u8> {
        self.rx.front().copied()
    }

    fn write(&mut self, byte: u8) {
        self.tx.push(byte);
    }
}
