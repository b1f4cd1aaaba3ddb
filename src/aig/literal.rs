//! A [`Literal`] points at a variable and can be complemented (indicates the presence of a NOT gate).

use std::{fmt, ops::Not};

/// A variable index.
///
/// Variable 0 is reserved for the constant by convention.
pub type Var = u64;

/// An AIGER literal, ie `2 * var + complement`.
///
/// Literal 0 is constant false and literal 1 constant true.
/// Every other even/odd pair refers to the same variable, plain or negated.
///
/// ```rust
/// use aigcombine::Literal;
/// let a = Literal::new(3, false);
/// assert_eq!(a.get_raw(), 6);
/// assert_eq!(!a, Literal::from(7));
/// assert_eq!(!Literal::FALSE, Literal::TRUE);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Literal(u64);

impl Literal {
    /// The constant false literal.
    pub const FALSE: Self = Literal(0);
    /// The constant true literal.
    pub const TRUE: Self = Literal(1);

    pub fn new(var: Var, complement: bool) -> Self {
        Literal((var << 1) | complement as u64)
    }

    pub fn get_raw(&self) -> u64 {
        self.0
    }

    pub fn get_var(&self) -> Var {
        self.0 >> 1
    }

    pub fn get_complement(&self) -> bool {
        self.0 & 1 != 0
    }

    pub fn is_constant(&self) -> bool {
        self.get_var() == 0
    }

    /// Returns the non complemented literal of the same variable.
    pub fn strip(&self) -> Self {
        Literal(self.0 & !1)
    }

    /// Complements the literal iff `complement` is set.
    pub fn xor(self, complement: bool) -> Self {
        Literal(self.0 ^ complement as u64)
    }

    /// Moves the literal `offset` variables up, keeping its polarity.
    /// Returns [`None`] if the result does not fit in a literal.
    pub fn shift(self, offset: Var) -> Option<Self> {
        offset
            .checked_mul(2)
            .and_then(|delta| self.0.checked_add(delta))
            .map(Literal)
    }
}

impl Not for Literal {
    type Output = Self;

    fn not(self) -> Self::Output {
        Literal(self.0 ^ 1)
    }
}

impl From<u64> for Literal {
    fn from(value: u64) -> Self {
        Literal(value)
    }
}

impl From<Literal> for u64 {
    fn from(value: Literal) -> Self {
        value.0
    }
}

impl fmt::Display for Literal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
