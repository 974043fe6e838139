//! # serial-console
//!
//! Interactive line-oriented command dispatcher for serial consoles.
//!
//! ## Architecture
//!
//! Input flows one byte at a time through [`Console::poll`]. The
//! console performs cooked line editing (echo, backspace, cancel, tab
//! completion), then tokenizes each completed line, resolves the
//! command name against a caller-supplied table (unambiguous prefixes
//! accepted), validates the argument count and invokes the handler.
//!
//! Components are isolated:
//! - The device is anything implementing [`Serial`] - the console
//!   never touches hardware.
//! - Command tables are plain immutable data, usually `static`.
//! - Handlers receive a [`Context`] capability instead of the console
//!   itself: the I/O stream, the command table, and a stop request.
//!
//! Zero heap allocation: every buffer is owned and sized at the type
//! level, so the console never reallocates after construction.

#![cfg_attr(not(test), no_std)]

pub mod command;
pub mod completion;
pub mod console;
pub mod error;
pub mod line_buffer;
pub mod parser;
pub mod serial;

pub use command::{print_help, resolve, Command, CommandHandler, Context};
pub use completion::{complete, TabOutcome};
pub use console::{
    Console, DEFAULT_LINE_LEN, DEFAULT_MAX_ARGS, DEFAULT_PROMPT, DEFAULT_TOKENS, MAX_PROMPT_LEN,
};
pub use error::ConsoleError;
pub use line_buffer::LineBuffer;
pub use parser::ParsedLine;
pub use serial::Serial;
