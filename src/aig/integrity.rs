use std::collections::HashSet;

use crate::{Aig, AigError, Literal, Result, Var};

impl Aig {
    fn check_literal_integrity(&self, lit: Literal) -> Result<()> {
        self.get_role(lit.get_var())
            .map(|_| ())
            .ok_or(AigError::UndefinedLiteral(lit))
    }

    fn topological_visit(
        &self,
        var: Var,
        sort: &mut Vec<Var>,
        seen: &mut HashSet<Var>,
        done: &mut HashSet<Var>,
    ) -> Result<()> {
        let mut stack: Vec<(Var, bool)> = vec![(var, false)];

        while let Some((var, last_time)) = stack.pop() {
            // Post order check
            if last_time {
                done.insert(var);
                sort.push(var);
                continue;
            }

            if done.contains(&var) {
                continue;
            } else if seen.contains(&var) {
                return Err(AigError::Cycle(var));
            }

            seen.insert(var);
            stack.push((var, true));

            // Latches break cycles, so only and gates are followed
            if let Some(and) = self.get_and(var) {
                for fanin in and.get_fanins() {
                    let fanin_var = fanin.get_var();
                    let is_and = self.get_role(fanin_var).is_some_and(|r| r.is_and());
                    if is_and && !done.contains(&fanin_var) {
                        stack.push((fanin_var, false));
                    }
                }
            }
        }

        Ok(())
    }

    /// Returns the variables of the and gates sorted so that each gate comes after its fanins.
    /// Will error if the and gates form a combinational cycle.
    pub fn get_topological_sort(&self) -> Result<Vec<Var>> {
        let mut sort = Vec::new();
        let mut seen = HashSet::new();
        let mut done = HashSet::new();

        for and in &self.ands {
            self.topological_visit(and.lhs.get_var(), &mut sort, &mut seen, &mut done)?;
        }
        Ok(sort)
    }

    /// Checking if the AIG structure is correct, that is:
    /// - every literal used by a latch, an and gate or a property refers to a defined variable
    /// - latches are reset to a constant or to themselves
    /// - and gates do not form a combinational cycle.
    ///
    /// Unique definition of each variable is already enforced when adding records.
    pub fn check_integrity(&self) -> Result<()> {
        for latch in &self.latches {
            self.check_literal_integrity(latch.next)?;
            if let Some(reset) = latch.reset {
                if !reset.is_constant() && !latch.is_uninitialized() {
                    return Err(AigError::InvalidReset {
                        latch: latch.lit,
                        reset,
                    });
                }
            }
        }

        for and in &self.ands {
            self.check_literal_integrity(and.rhs0)?;
            self.check_literal_integrity(and.rhs1)?;
        }

        for symbol in self
            .outputs
            .iter()
            .chain(&self.bad)
            .chain(&self.constraints)
            .chain(&self.fairness)
        {
            self.check_literal_integrity(symbol.lit)?;
        }

        for justice in &self.justice {
            for &lit in &justice.lits {
                self.check_literal_integrity(lit)?;
            }
        }

        // Checks for acyclicity
        self.get_topological_sort()?;

        Ok(())
    }
}
