pub mod aig;
pub mod combine;

// Re-exporting symbols and modules.
pub use aig::{
    Aig, AigError, AndGate, Justice, Latch, Literal, ParserError, Result, Role, Symbol, Var,
};
pub use combine::{CombineError, SignalKind, combine};
