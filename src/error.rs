//! Console error types

/// A dispatch failure for one input line.
///
/// All variants are user-input errors: the diagnostic is printed on the
/// console's output stream and the poll loop continues.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConsoleError<'a> {
    /// No command name matches the token, not even as a prefix.
    UnknownCommand(&'a str),
    /// The token is a prefix of two or more command names.
    AmbiguousCommand(&'a str),
    /// More user arguments than the command accepts.
    TooManyArguments {
        command: &'a str,
        max: usize,
        given: usize,
    },
}

impl core::fmt::Display for ConsoleError<'_> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::UnknownCommand(token) => {
                write!(f, "Error: Unknown command '{}'. Type 'help' for list.", token)
            }
            Self::AmbiguousCommand(token) => {
                write!(f, "Error: Ambiguous command '{}'.", token)
            }
            Self::TooManyArguments { command, max, given } => {
                write!(
                    f,
                    "Error: Too many arguments for '{}' (max: {}, got: {}).",
                    command, max, given
                )
            }
        }
    }
}
