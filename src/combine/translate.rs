//! Renumbering of implementation literals into the combined circuit.

use crate::{Aig, AigError, Literal, Role, Var};

use super::{CombineError, validate::InterfaceBinding};

/// Maps literals of the implementation to literals of the combined circuit.
///
/// - constants are kept
/// - inputs become the monitor input they are bound to (keeping the polarity of the reference)
/// - latches and and gates are moved `offset` variables up,
///   with `offset = monitor max variable + 1` so they cannot collide with the monitor.
pub struct Translator<'a> {
    implementation: &'a Aig,
    binding: &'a InterfaceBinding,
    offset: Var,
}

impl<'a> Translator<'a> {
    /// Fails if the monitor variables leave no room for the implementation ones.
    pub fn new(
        monitor: &Aig,
        implementation: &'a Aig,
        binding: &'a InterfaceBinding,
    ) -> Result<Self, CombineError> {
        let max_var = monitor.get_max_var();
        let offset = max_var.checked_add(1).ok_or(AigError::VarOverflow {
            var: max_var,
            offset: 1,
        })?;
        Ok(Translator {
            implementation,
            binding,
            offset,
        })
    }

    pub fn get_offset(&self) -> Var {
        self.offset
    }

    pub fn translate(&self, lit: Literal) -> Result<Literal, CombineError> {
        let var = lit.get_var();
        match self.implementation.get_role(var) {
            Some(Role::Constant) => Ok(lit),
            Some(Role::Input(_)) => {
                let bound = self
                    .binding
                    .get(var)
                    .ok_or(AigError::UndefinedLiteral(lit))?;
                Ok(bound.xor(lit.get_complement()))
            }
            Some(Role::Latch(_)) | Some(Role::And(_)) => {
                let shifted = lit.shift(self.offset).ok_or(AigError::VarOverflow {
                    var,
                    offset: self.offset,
                })?;
                Ok(shifted)
            }
            None => Err(AigError::UndefinedLiteral(lit).into()),
        }
    }
}

#[cfg(test)]
mod test {
    use proptest::prelude::*;

    use super::*;
    use crate::combine::validate::validate_interface;

    fn lit(x: u64) -> Literal {
        Literal::from(x)
    }

    #[test]
    fn translate_test() {
        let mut monitor = Aig::with_max_var(10);
        monitor.add_input(lit(6), Some("a")).unwrap();
        let mut implementation = Aig::new();
        implementation.add_input(lit(2), Some("a")).unwrap();
        implementation.add_latch(lit(4), lit(6), None, None).unwrap();
        implementation.add_and(lit(6), lit(3), lit(4)).unwrap();

        let binding = validate_interface(&monitor, &implementation).unwrap();
        let translator = Translator::new(&monitor, &implementation, &binding).unwrap();
        assert_eq!(translator.get_offset(), 11);

        assert_eq!(translator.translate(Literal::FALSE).unwrap(), Literal::FALSE);
        assert_eq!(translator.translate(Literal::TRUE).unwrap(), Literal::TRUE);
        assert_eq!(translator.translate(lit(2)).unwrap(), lit(6));
        assert_eq!(translator.translate(lit(3)).unwrap(), lit(7));
        assert_eq!(translator.translate(lit(4)).unwrap(), lit(26));
        assert_eq!(translator.translate(lit(5)).unwrap(), lit(27));
        assert_eq!(translator.translate(lit(6)).unwrap(), lit(28));
        assert!(matches!(
            translator.translate(lit(8)),
            Err(CombineError::StructuralInconsistency(
                AigError::UndefinedLiteral(_)
            ))
        ));
    }

    #[test]
    fn unbound_input_test() {
        let monitor = Aig::new();
        let mut implementation = Aig::new();
        implementation.add_input(lit(2), Some("a")).unwrap();
        let binding = InterfaceBinding::default();
        let translator = Translator::new(&monitor, &implementation, &binding).unwrap();
        assert!(translator.translate(lit(2)).is_err());
    }

    #[test]
    fn overflow_test() {
        let mut implementation = Aig::new();
        implementation.add_latch(lit(2), lit(3), None, None).unwrap();
        let binding = InterfaceBinding::default();

        // No room left for the offset itself
        let monitor = Aig::with_max_var(u64::MAX);
        assert!(matches!(
            Translator::new(&monitor, &implementation, &binding),
            Err(CombineError::StructuralInconsistency(
                AigError::VarOverflow { offset: 1, .. }
            ))
        ));

        // The offset fits, the shifted latch does not
        let monitor = Aig::with_max_var(u64::MAX >> 1);
        let translator = Translator::new(&monitor, &implementation, &binding).unwrap();
        assert!(matches!(
            translator.translate(lit(2)),
            Err(CombineError::StructuralInconsistency(
                AigError::VarOverflow { var: 1, .. }
            ))
        ));
        // Constants are never moved
        assert_eq!(translator.translate(Literal::TRUE).unwrap(), Literal::TRUE);
    }

    proptest! {
        #[test]
        fn shifted_literals_keep_polarity(
            monitor_max_var in 0u64..100_000,
            var in 1u64..64,
            complement in any::<bool>(),
            is_latch in any::<bool>(),
        ) {
            let mut implementation = Aig::new();
            let defined = Literal::new(var, false);
            if is_latch {
                implementation.add_latch(defined, Literal::FALSE, None, None).unwrap();
            } else {
                implementation.add_and(defined, Literal::TRUE, Literal::TRUE).unwrap();
            }
            let monitor = Aig::with_max_var(monitor_max_var);
            let binding = InterfaceBinding::default();
            let translator = Translator::new(&monitor, &implementation, &binding).unwrap();

            let l = Literal::new(var, complement);
            let translated = translator.translate(l).unwrap();
            prop_assert_eq!(translated.get_raw(), l.get_raw() + 2 * (monitor_max_var + 1));
            prop_assert_eq!(translated.get_complement(), complement);
            prop_assert!(translated.get_var() > monitor_max_var);
        }

        #[test]
        fn bound_inputs_keep_polarity(
            monitor_var in 1u64..1_000,
            impl_var in 1u64..1_000,
            complement in any::<bool>(),
        ) {
            let mut monitor = Aig::new();
            monitor.add_input(Literal::new(monitor_var, false), Some("AIGER_NEXT_sig")).unwrap();
            let mut implementation = Aig::new();
            implementation.add_input(Literal::new(impl_var, false), Some("SIG")).unwrap();

            let binding = validate_interface(&monitor, &implementation).unwrap();
            let translator = Translator::new(&monitor, &implementation, &binding).unwrap();
            let translated = translator.translate(Literal::new(impl_var, complement)).unwrap();
            prop_assert_eq!(translated, Literal::new(monitor_var, false).xor(complement));
        }
    }
}
