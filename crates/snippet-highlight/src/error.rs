use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
/// Errors produced while turning a query into a highlight pattern.
pub enum ResolveError {
    #[error("empty argument for mode '{0}'")]
    /// The mode needs an argument but none (or only whitespace) was given.
    EmptyArgument(&'static str),

    #[error("invalid numeric argument '{argument}' for mode '{mode}'")]
    /// A length/count mode received something that is not a positive integer.
    InvalidNumber {
        /// Mode name.
        mode: &'static str,
        /// The rejected argument.
        argument: String,
    },

    #[error("nothing to match: no mode, server pattern, or argument")]
    /// No mode was selected and there is neither a server pattern nor an argument.
    NothingToMatch,

    #[error("regex compile error for pattern '{pattern}': {message}")]
    /// A regex pattern failed to compile.
    RegexCompile {
        /// The regex pattern string.
        pattern: String,
        /// The compiler error message.
        message: String,
    },
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("unknown search mode '{0}'")]
/// A mode name or glyph did not match any [`SearchMode`](crate::SearchMode).
pub struct UnknownMode(pub String);
