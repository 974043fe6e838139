//! Main console struct integrating all components
//!
//! Lazy polling - call [`Console::poll`] from the host loop; it drains
//! whatever bytes are pending and returns. Zero heap allocation - all
//! buffers are owned and sized at the type level.

use core::fmt::Write;

use heapless::String;

use crate::command::{self, resolve, Command, Context};
use crate::completion::{complete, TabOutcome};
use crate::error::ConsoleError;
use crate::line_buffer::LineBuffer;
use crate::parser::ParsedLine;
use crate::serial::Serial;

/// Default line buffer capacity in bytes.
pub const DEFAULT_LINE_LEN: usize = 64;

/// Default maximum number of user arguments (excluding the command name).
pub const DEFAULT_MAX_ARGS: usize = 8;

/// Default token vector capacity: command name plus arguments.
pub const DEFAULT_TOKENS: usize = DEFAULT_MAX_ARGS + 1;

/// Maximum prompt length in characters; longer prompts are truncated.
pub const MAX_PROMPT_LEN: usize = 17;

/// Prompt printed after every newline unless overridden.
pub const DEFAULT_PROMPT: &str = "> ";

const BELL: u8 = 0x07;
const BACKSPACE: u8 = 0x08;
const DEL: u8 = 0x7F;
const CTRL_C: u8 = 0x03;

/// Interactive command console over a byte stream.
///
/// `LINE` is the line buffer capacity and `TOKENS` the token vector
/// capacity (command name included). Both are fixed at the type level:
/// there is no way to resize after construction, which is the point -
/// the console never reallocates.
///
/// A new console starts stopped; call [`start`](Console::start) to
/// print the first prompt and begin consuming input.
pub struct Console<'a, S, const LINE: usize = DEFAULT_LINE_LEN, const TOKENS: usize = DEFAULT_TOKENS>
{
    io: S,
    commands: &'a [Command],
    line: LineBuffer<LINE>,
    prompt: String<MAX_PROMPT_LEN>,
    running: bool,
}

impl<'a, S: Serial, const LINE: usize, const TOKENS: usize> Console<'a, S, LINE, TOKENS> {
    /// Create a console over `io` with a fixed command table.
    pub fn new(io: S, commands: &'a [Command]) -> Self {
        let mut prompt = String::new();
        let _ = prompt.push_str(DEFAULT_PROMPT);
        Self {
            io,
            commands,
            line: LineBuffer::new(),
            prompt,
            running: false,
        }
    }

    /// Replace the prompt, truncating to [`MAX_PROMPT_LEN`] characters.
    pub fn set_prompt(&mut self, prompt: &str) {
        self.prompt.clear();
        for ch in prompt.chars() {
            if self.prompt.push(ch).is_err() {
                break;
            }
        }
    }

    /// Start or restart processing and print the initial prompt.
    pub fn start(&mut self) {
        log::debug!("console started");
        self.running = true;
        self.print_prompt();
    }

    /// Stop processing. Subsequent [`poll`](Console::poll) calls leave
    /// the stream untouched until [`start`](Console::start).
    pub fn stop(&mut self) {
        log::debug!("console stopped");
        self.running = false;
    }

    /// Whether the console is currently processing input.
    pub fn is_running(&self) -> bool {
        self.running
    }

    /// The underlying stream, for callers that need direct I/O.
    pub fn serial(&mut self) -> &mut S {
        &mut self.io
    }

    /// Consume the console and release the stream.
    pub fn into_serial(self) -> S {
        self.io
    }

    /// Drain all currently available input. Non-blocking; returns
    /// immediately when the stream has nothing pending or the console
    /// is stopped.
    pub fn poll(&mut self) {
        while self.running && self.io.available() > 0 {
            let Some(byte) = self.io.read() else {
                break;
            };
            self.handle_byte(byte);
        }
    }

    /// Dispatch an already-assembled line, bypassing character-level
    /// editing. No echo, no prompt.
    pub fn process_input(&mut self, line: &str) {
        if !self.running {
            return;
        }
        if dispatch::<TOKENS>(self.commands, line, &mut self.io) {
            self.running = false;
        }
    }

    /// Print the command listing to the stream.
    pub fn print_help(&mut self) {
        command::print_help(self.commands, &mut self.io);
    }

    fn handle_byte(&mut self, byte: u8) {
        match byte {
            b'\r' | b'\n' => self.handle_terminator(byte),
            b'\t' => self.handle_tab(),
            BACKSPACE | DEL => self.handle_backspace(),
            CTRL_C => self.handle_cancel(),
            // Printable characters accumulate and echo
            0x20..=0x7E => self.handle_printable(byte),
            // Ignore other non-printable characters
            _ => {}
        }
    }

    fn handle_terminator(&mut self, first: u8) {
        if !self.line.is_empty() {
            if dispatch::<TOKENS>(self.commands, self.line.as_str(), &mut self.io) {
                self.running = false;
            }
        }
        self.line.clear();
        if self.running {
            self.print_prompt();
        }
        // Consume the second byte of a CRLF or LFCR pair so it does
        // not surface as an extra empty line.
        if let Some(next) = self.io.peek() {
            if (first == b'\r' && next == b'\n') || (first == b'\n' && next == b'\r') {
                let _ = self.io.read();
            }
        }
    }

    fn handle_tab(&mut self) {
        match complete(&mut self.line, self.commands) {
            TabOutcome::None => {}
            TabOutcome::Reject => self.io.write(BELL),
            TabOutcome::Extended { suffix, completed } => {
                self.io.write_bytes(suffix.as_bytes());
                if completed {
                    self.io.write(b' ');
                }
            }
            TabOutcome::ListMatches => {
                self.io.write_bytes(b"\r\n");
                let word = self.line.as_str();
                for cmd in self.commands {
                    if cmd.name.starts_with(word) {
                        self.io.write_bytes(cmd.name.as_bytes());
                        self.io.write_bytes(b"  ");
                    }
                }
                // Put the user back where they were.
                self.print_prompt();
                self.io.write_bytes(self.line.as_bytes());
            }
        }
    }

    fn handle_backspace(&mut self) {
        if !self.line.is_empty() {
            self.line.backspace();
            // Echo: backspace, space, backspace. Best effort - not
            // guaranteed correct on every terminal.
            self.io.write_bytes(b"\x08 \x08");
        }
    }

    fn handle_cancel(&mut self) {
        self.line.clear();
        self.io.write_bytes(b"^C\r\n");
        self.print_prompt();
    }

    fn handle_printable(&mut self, byte: u8) {
        if self.line.push(byte) {
            self.io.write(byte);
        } else {
            // Buffer full: the byte is dropped, never overwritten.
            self.io.write(BELL);
        }
    }

    fn print_prompt(&mut self) {
        self.io.write_bytes(b"\r\n");
        self.io.write_bytes(self.prompt.as_bytes());
    }
}

/// Tokenize, resolve, validate and execute one line. Returns `true`
/// when the handler requested a session stop.
fn dispatch<const TOKENS: usize>(commands: &[Command], line: &str, io: &mut dyn Serial) -> bool {
    let parsed = ParsedLine::<TOKENS>::parse(line);
    let Some(word) = parsed.command() else {
        return false;
    };

    let resolved = resolve(commands, word).and_then(|cmd| {
        if parsed.user_args() > cmd.max_args || parsed.is_truncated() {
            Err(ConsoleError::TooManyArguments {
                command: cmd.name,
                max: cmd.max_args,
                given: parsed.user_args(),
            })
        } else {
            Ok(cmd)
        }
    });

    match resolved {
        Err(err) => {
            log::debug!("dispatch rejected: {}", err);
            let _ = write!(io, "\r\n{}\r\n", err);
            false
        }
        Ok(cmd) => {
            log::trace!("dispatching '{}' ({} args)", cmd.name, parsed.user_args());
            // Blank line between the echoed input and handler output.
            io.write_bytes(b"\r\n");
            let mut ctx = Context::new(io, commands);
            (cmd.handler)(&mut ctx, parsed.argv());
            if ctx.stop_requested() {
                log::debug!("stop requested by '{}'", cmd.name);
                return true;
            }
            false
        }
    }
}
