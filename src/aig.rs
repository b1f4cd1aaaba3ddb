//! Module defining the [`Aig`] struct, as well as [`Literal`], [`Symbol`], [`Latch`] and some others relevant structs.
//!
//! To combine a monitor with an implementation, check [`crate::combine`] docs.

pub mod error;
mod integrity;
pub mod literal;
mod parser;
pub mod symbol;
mod writer;

use std::collections::HashMap;

pub use error::{AigError, ParserError, Result};
pub use literal::{Literal, Var};
pub use symbol::{AndGate, Justice, Latch, Role, Symbol};

/// A whole AIG, as described by an AIGER file.
///
/// Records are kept in the order they were added, which is also the order they get written back.
/// Each variable can be defined only once: by an input, a latch or an and gate.
/// All `add_*` methods check that, and keep track of which record defines which variable
/// (see [`Aig::get_role`]).
///
/// The maximum variable index grows with every literal added, so it never has to be
/// computed by the caller. Use [`Aig::with_max_var`] to start from a larger one
/// (eg. the `M` of an AIGER header).
///
/// Nothing prevents an and gate or a latch from referring to a variable defined later on,
/// run [`Aig::check_integrity`] once the AIG is complete.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Aig {
    max_var: Var,
    inputs: Vec<Symbol>,
    latches: Vec<Latch>,
    outputs: Vec<Symbol>,
    bad: Vec<Symbol>,
    constraints: Vec<Symbol>,
    justice: Vec<Justice>,
    fairness: Vec<Symbol>,
    ands: Vec<AndGate>,
    comments: Vec<String>,
    /// Maps each defined variable to its definition.
    roles: HashMap<Var, Role>,
}

impl Aig {
    /// Create a brand new empty AIG.
    pub fn new() -> Self {
        Aig::default()
    }

    /// Create an empty AIG whose maximum variable index is at least `max_var`.
    pub fn with_max_var(max_var: Var) -> Self {
        Aig {
            max_var,
            ..Aig::default()
        }
    }

    pub fn get_max_var(&self) -> Var {
        self.max_var
    }

    pub fn get_inputs(&self) -> &[Symbol] {
        &self.inputs
    }

    pub fn get_latches(&self) -> &[Latch] {
        &self.latches
    }

    pub fn get_outputs(&self) -> &[Symbol] {
        &self.outputs
    }

    pub fn get_bad(&self) -> &[Symbol] {
        &self.bad
    }

    pub fn get_constraints(&self) -> &[Symbol] {
        &self.constraints
    }

    pub fn get_justice(&self) -> &[Justice] {
        &self.justice
    }

    pub fn get_fairness(&self) -> &[Symbol] {
        &self.fairness
    }

    pub fn get_ands(&self) -> &[AndGate] {
        &self.ands
    }

    pub fn get_comments(&self) -> &[String] {
        &self.comments
    }

    /// Retrieves what defines the variable, [`None`] if nothing does.
    pub fn get_role(&self, var: Var) -> Option<Role> {
        if var == 0 {
            Some(Role::Constant)
        } else {
            self.roles.get(&var).copied()
        }
    }

    /// Retrieves the input defining the variable, if any.
    pub fn get_input(&self, var: Var) -> Option<&Symbol> {
        match self.get_role(var)? {
            Role::Input(k) => self.inputs.get(k),
            _ => None,
        }
    }

    /// Retrieves the latch defining the variable, if any.
    pub fn get_latch(&self, var: Var) -> Option<&Latch> {
        match self.get_role(var)? {
            Role::Latch(k) => self.latches.get(k),
            _ => None,
        }
    }

    /// Retrieves the and gate defining the variable, if any.
    pub fn get_and(&self, var: Var) -> Option<&AndGate> {
        match self.get_role(var)? {
            Role::And(k) => self.ands.get(k),
            _ => None,
        }
    }

    fn import_literal(&mut self, lit: Literal) {
        self.max_var = self.max_var.max(lit.get_var());
    }

    fn define(&mut self, lit: Literal, role: Role) -> Result<()> {
        if lit.is_constant() {
            return Err(AigError::ConstantDefinition);
        }
        if lit.get_complement() {
            return Err(AigError::ComplementedDefinition(lit));
        }
        if self.roles.contains_key(&lit.get_var()) {
            return Err(AigError::DuplicateDefinition(lit.get_var()));
        }
        self.roles.insert(lit.get_var(), role);
        self.import_literal(lit);
        Ok(())
    }

    /// Add a new primary input.
    /// This will fail if the variable is already defined, or if `lit` is complemented or constant.
    pub fn add_input(&mut self, lit: Literal, name: Option<&str>) -> Result<()> {
        self.define(lit, Role::Input(self.inputs.len()))?;
        self.inputs.push(Symbol::new(lit, name));
        Ok(())
    }

    /// Add a new latch.
    /// On top of the checks of [`Aig::add_input`], the reset must be a constant or `lit` itself.
    pub fn add_latch(
        &mut self,
        lit: Literal,
        next: Literal,
        reset: Option<Literal>,
        name: Option<&str>,
    ) -> Result<()> {
        let latch = Latch::new(lit, next, reset, name);
        if let Some(reset) = reset {
            if !reset.is_constant() && !latch.is_uninitialized() {
                return Err(AigError::InvalidReset { latch: lit, reset });
            }
        }
        self.define(lit, Role::Latch(self.latches.len()))?;
        self.import_literal(next);
        self.latches.push(latch);
        Ok(())
    }

    /// Add a new and gate `lhs = rhs0 & rhs1`.
    /// This will fail if the variable of `lhs` is already defined, or if `lhs` is complemented or constant.
    pub fn add_and(&mut self, lhs: Literal, rhs0: Literal, rhs1: Literal) -> Result<()> {
        self.define(lhs, Role::And(self.ands.len()))?;
        self.import_literal(rhs0);
        self.import_literal(rhs1);
        self.ands.push(AndGate::new(lhs, rhs0, rhs1));
        Ok(())
    }

    /// Mark a literal as an output.
    pub fn add_output(&mut self, lit: Literal, name: Option<&str>) {
        self.import_literal(lit);
        self.outputs.push(Symbol::new(lit, name));
    }

    /// Mark a literal as a bad state property.
    pub fn add_bad(&mut self, lit: Literal, name: Option<&str>) {
        self.import_literal(lit);
        self.bad.push(Symbol::new(lit, name));
    }

    /// Mark a literal as an invariant constraint.
    pub fn add_constraint(&mut self, lit: Literal, name: Option<&str>) {
        self.import_literal(lit);
        self.constraints.push(Symbol::new(lit, name));
    }

    /// Add a justice property made of the given literals.
    pub fn add_justice(&mut self, lits: Vec<Literal>, name: Option<&str>) {
        for &lit in &lits {
            self.import_literal(lit);
        }
        self.justice.push(Justice::new(lits, name));
    }

    /// Mark a literal as a fairness constraint.
    pub fn add_fairness(&mut self, lit: Literal, name: Option<&str>) {
        self.import_literal(lit);
        self.fairness.push(Symbol::new(lit, name));
    }

    pub fn add_comment(&mut self, comment: &str) {
        self.comments.push(comment.to_string());
    }
}

#[cfg(test)]
mod test {
    use super::*;

    fn lit(x: u64) -> Literal {
        Literal::from(x)
    }

    #[test]
    fn add_definitions_test() {
        let mut aig = Aig::new();

        // Adding legit definitions
        aig.add_input(lit(2), Some("a")).unwrap();
        aig.add_input(lit(4), None).unwrap();
        aig.add_latch(lit(6), lit(9), Some(Literal::FALSE), Some("l"))
            .unwrap();
        aig.add_and(lit(8), lit(2), lit(5)).unwrap();

        assert_eq!(aig.get_role(0), Some(Role::Constant));
        assert_eq!(aig.get_role(1), Some(Role::Input(0)));
        assert_eq!(aig.get_role(2), Some(Role::Input(1)));
        assert_eq!(aig.get_role(3), Some(Role::Latch(0)));
        assert_eq!(aig.get_role(4), Some(Role::And(0)));
        assert_eq!(aig.get_role(5), None);
        assert_eq!(aig.get_max_var(), 4);

        assert_eq!(aig.get_input(1).unwrap().get_name(), Some("a"));
        assert!(aig.get_input(3).is_none());
        assert_eq!(aig.get_latch(3).unwrap().next, lit(9));
        assert_eq!(aig.get_and(4).unwrap().get_fanins(), [lit(2), lit(5)]);

        // Now, trying to add some illegal definitions
        assert!(matches!(
            aig.add_input(lit(2), None),
            Err(AigError::DuplicateDefinition(1))
        ));
        assert!(matches!(
            aig.add_and(lit(6), lit(2), lit(4)),
            Err(AigError::DuplicateDefinition(3))
        ));
        assert!(matches!(
            aig.add_input(lit(11), None),
            Err(AigError::ComplementedDefinition(_))
        ));
        assert!(matches!(
            aig.add_and(lit(1), lit(2), lit(4)),
            Err(AigError::ConstantDefinition)
        ));

        // Failed additions leave the AIG untouched
        assert_eq!(aig.get_inputs().len(), 2);
        assert_eq!(aig.get_ands().len(), 1);
    }

    #[test]
    fn add_latch_reset_test() {
        let mut aig = Aig::new();
        aig.add_latch(lit(2), lit(2), Some(lit(2)), None).unwrap();
        aig.add_latch(lit(4), lit(2), Some(Literal::TRUE), None)
            .unwrap();
        aig.add_latch(lit(6), lit(2), None, None).unwrap();
        assert!(matches!(
            aig.add_latch(lit(8), lit(2), Some(lit(2)), None),
            Err(AigError::InvalidReset { .. })
        ));
        assert!(aig.get_role(4).is_none());
    }

    #[test]
    fn max_var_test() {
        let mut aig = Aig::with_max_var(10);
        aig.add_input(lit(2), None).unwrap();
        assert_eq!(aig.get_max_var(), 10);

        let mut aig = Aig::new();
        aig.add_bad(lit(7), None);
        assert_eq!(aig.get_max_var(), 3);
        aig.add_justice(vec![lit(2), lit(13)], Some("j"));
        assert_eq!(aig.get_max_var(), 6);
        aig.add_and(lit(4), lit(30), lit(2)).unwrap();
        assert_eq!(aig.get_max_var(), 15);
    }

    #[test]
    fn aig_eq_test() {
        let mut a = Aig::new();
        a.add_input(lit(2), Some("x")).unwrap();
        a.add_and(lit(4), lit(3), Literal::TRUE).unwrap();
        a.add_bad(lit(4), Some("p0"));

        let mut b = Aig::new();
        b.add_input(lit(2), Some("x")).unwrap();
        b.add_and(lit(4), lit(3), Literal::TRUE).unwrap();
        assert_ne!(a, b);

        b.add_bad(lit(4), Some("p0"));
        assert_eq!(a, b);
    }
}
