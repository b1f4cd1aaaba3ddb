//! Records stored in an [`Aig`]: symbols, latches, and gates and justice properties.
//!
//! [`Aig`]: crate::Aig

use super::Literal;

/// A literal with an optional name.
///
/// Used for inputs, outputs, bad states, invariant constraints and fairness constraints.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Symbol {
    pub lit: Literal,
    pub name: Option<String>,
}

impl Symbol {
    pub fn new(lit: Literal, name: Option<&str>) -> Self {
        Symbol {
            lit,
            name: name.map(str::to_string),
        }
    }

    pub fn get_name(&self) -> Option<&str> {
        self.name.as_deref()
    }
}

/// A latch (for sequential circuits).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Latch {
    pub lit: Literal,
    pub next: Literal,
    /// `None` if the file did not specify any reset value,
    /// which is not the same thing as an explicit reset to [`Literal::FALSE`].
    pub reset: Option<Literal>,
    pub name: Option<String>,
}

impl Latch {
    pub fn new(lit: Literal, next: Literal, reset: Option<Literal>, name: Option<&str>) -> Self {
        Latch {
            lit,
            next,
            reset,
            name: name.map(str::to_string),
        }
    }

    pub fn get_name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// A latch whose reset is its own literal starts in an arbitrary state.
    pub fn is_uninitialized(&self) -> bool {
        self.reset == Some(self.lit)
    }
}

/// An AND gate `lhs = rhs0 & rhs1`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AndGate {
    pub lhs: Literal,
    pub rhs0: Literal,
    pub rhs1: Literal,
}

impl AndGate {
    pub fn new(lhs: Literal, rhs0: Literal, rhs1: Literal) -> Self {
        AndGate { lhs, rhs0, rhs1 }
    }

    pub fn get_fanins(&self) -> [Literal; 2] {
        [self.rhs0, self.rhs1]
    }
}

/// A justice property: a set of literals that must hold infinitely often.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Justice {
    pub lits: Vec<Literal>,
    pub name: Option<String>,
}

impl Justice {
    pub fn new(lits: Vec<Literal>, name: Option<&str>) -> Self {
        Justice {
            lits,
            name: name.map(str::to_string),
        }
    }
}

/// What defines a variable within an [`Aig`], with the position of the definition.
///
/// [`Aig`]: crate::Aig
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    /// Variable 0.
    Constant,
    Input(usize),
    Latch(usize),
    And(usize),
}

impl Role {
    pub fn is_and(&self) -> bool {
        matches!(self, Role::And(_))
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn latch_uninitialized_test() {
        let lit = Literal::from(4);
        assert!(Latch::new(lit, Literal::from(7), Some(lit), None).is_uninitialized());
        assert!(!Latch::new(lit, Literal::from(7), Some(Literal::FALSE), None).is_uninitialized());
        assert!(!Latch::new(lit, Literal::from(7), None, None).is_uninitialized());
    }

    #[test]
    fn symbol_name_test() {
        assert_eq!(Symbol::new(Literal::from(2), Some("x")).get_name(), Some("x"));
        assert_eq!(Symbol::new(Literal::from(2), None).get_name(), None);
    }
}
