use thiserror::Error;

use super::{Literal, Var};

/// The result of an AIG operation.
pub type Result<T> = std::result::Result<T, AigError>;

/// Error returned when an AIG operation failed.
#[derive(Debug, Error)]
pub enum AigError {
    /// The variable is already defined by an input, a latch or an and gate.
    #[error("variable {0} is defined twice")]
    DuplicateDefinition(Var),

    /// Variable 0 is reserved for the constants.
    #[error("variable 0 is for constants only")]
    ConstantDefinition,

    /// Inputs, latches and and gates are defined by a plain (even) literal.
    #[error("literal {0} is complemented and cannot be defined")]
    ComplementedDefinition(Literal),

    /// The literal refers to a variable which nothing defines.
    #[error("literal {0} refers to an undefined variable")]
    UndefinedLiteral(Literal),

    /// The literal is beyond the maximum variable index.
    #[error("literal {lit} exceeds maximum variable index {max_var}")]
    MaxVarExceeded { lit: Literal, max_var: Var },

    /// A latch can only be reset to a constant or to itself (uninitialized).
    #[error("latch {latch} has invalid reset {reset}")]
    InvalidReset { latch: Literal, reset: Literal },

    /// The and gates form a combinational loop going through this variable.
    #[error("found a combinational cycle through variable {0}")]
    Cycle(Var),

    /// Moving the variable up would exceed the largest representable literal.
    #[error("variable {var} cannot be moved {offset} variable(s) up")]
    VarOverflow { var: Var, offset: Var },

    /// Just forwarding a [`ParserError`].
    #[error("{0}")]
    ParserError(#[from] ParserError),
}

/// Error returned when parsing from file failed.
///
/// It is defined here because the `parser` module is private.
#[derive(Debug, Error)]
pub enum ParserError {
    /// Some AIGER extensions are not supported.
    #[error("unsupported feature: {0}")]
    UnsupportedFeature(String),

    /// Invalid token, something else was expected.
    #[error("invalid token: {0}")]
    InvalidToken(String),

    /// An IO error occured (file doesn't exist, unexpected end of stream, ...).
    #[error("io error: {0}")]
    IoError(String),
}
