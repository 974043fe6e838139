//! Command table, resolver and handler context

use core::fmt::Write;

use crate::error::ConsoleError;
use crate::serial::Serial;

/// Column the help text is padded to in `print_help` output.
const HELP_NAME_WIDTH: usize = 15;

/// Handler invoked for a dispatched command. `argv[0]` is the command
/// name; the remaining entries are the user arguments.
pub type CommandHandler = fn(&mut Context<'_>, &[&str]);

/// Command descriptor.
///
/// Plain immutable data; tables are built by the caller, usually as a
/// `static` slice, and never mutated by the console.
pub struct Command {
    /// Command keyword.
    pub name: &'static str,
    /// Handler to invoke on dispatch.
    pub handler: CommandHandler,
    /// Maximum number of user arguments (0 for none).
    pub max_args: usize,
    /// One-line description for help output.
    pub help: &'static str,
}

/// Capability handed to command handlers.
///
/// Replaces direct access to the console instance: handlers get the
/// I/O stream, the command table, and a way to request a session stop.
pub struct Context<'a> {
    io: &'a mut dyn Serial,
    commands: &'a [Command],
    stop: bool,
}

impl<'a> Context<'a> {
    pub(crate) fn new(io: &'a mut dyn Serial, commands: &'a [Command]) -> Self {
        Self {
            io,
            commands,
            stop: false,
        }
    }

    /// The console's I/O stream, for handlers that perform their own
    /// input or output.
    pub fn io(&mut self) -> &mut dyn Serial {
        &mut *self.io
    }

    /// The command table the console was built with.
    pub fn commands(&self) -> &'a [Command] {
        self.commands
    }

    /// Print the command listing. Intended to be called from a
    /// user-registered `help` command handler.
    pub fn print_help(&mut self) {
        print_help(self.commands, &mut *self.io);
    }

    /// Ask the console to leave the running state once this handler
    /// returns. Applied by the dispatcher, never mid-handler.
    pub fn request_stop(&mut self) {
        self.stop = true;
    }

    pub(crate) fn stop_requested(&self) -> bool {
        self.stop
    }
}

/// Resolve a token to a command, allowing unambiguous abbreviation.
///
/// An exact name match always wins, even when the token is also a
/// prefix of other names. Otherwise a single prefix match resolves;
/// anything else is a dispatch failure.
pub fn resolve<'c, 'w>(
    commands: &'c [Command],
    word: &'w str,
) -> Result<&'c Command, ConsoleError<'w>> {
    if word.is_empty() {
        return Err(ConsoleError::UnknownCommand(word));
    }

    let mut exact = None;
    let mut first_prefix = None;
    let mut prefix_count = 0;

    for cmd in commands {
        if exact.is_none() && cmd.name == word {
            exact = Some(cmd);
        }
        if cmd.name.starts_with(word) {
            if first_prefix.is_none() {
                first_prefix = Some(cmd);
            }
            prefix_count += 1;
        }
    }

    if let Some(cmd) = exact {
        return Ok(cmd);
    }

    match (first_prefix, prefix_count) {
        (Some(cmd), 1) => Ok(cmd),
        (Some(_), _) => Err(ConsoleError::AmbiguousCommand(word)),
        (None, _) => Err(ConsoleError::UnknownCommand(word)),
    }
}

/// Print one line per command: name, help text, argument limit.
pub fn print_help(commands: &[Command], io: &mut dyn Serial) {
    io.write_bytes(b"Available commands:\r\n");
    for cmd in commands {
        io.write_bytes(b"  ");
        io.write_bytes(cmd.name.as_bytes());
        // Pad the name to a fixed column, always at least one space.
        let padding = HELP_NAME_WIDTH.saturating_sub(cmd.name.len()).max(1);
        for _ in 0..padding {
            io.write(b' ');
        }
        let _ = write!(io, "- {} (max args: {})\r\n", cmd.help, cmd.max_args);
    }
}
