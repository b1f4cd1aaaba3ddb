//! Combine a monitor with an implementation into a single AIG.
//!
//! The monitor is typically compiled from a temporal formula: its inputs are the signals
//! it observes, its bad states, constraints, justice and fairness properties are the
//! property to check. The implementation is the circuit under verification.
//!
//! [`combine`] plugs every implementation output into the monitor input carrying the same name
//! (see [`matcher`] for the naming rule), and reads implementation inputs from the monitor inputs
//! they match. The result can be handed to a model checker as is.
//!
//! ```rust
//! use aigcombine::{Aig, Literal, combine};
//!
//! // Monitor: bad state whenever `grant` is high
//! let mut monitor = Aig::new();
//! monitor.add_input(Literal::from(2), Some("AIGER_NEXT_grant")).unwrap();
//! monitor.add_bad(Literal::from(2), Some("never_grant"));
//!
//! // Implementation: `grant` is a latch toggling at every step
//! let mut implementation = Aig::new();
//! implementation.add_latch(Literal::from(2), Literal::from(3), None, None).unwrap();
//! implementation.add_output(Literal::from(2), Some("grant"));
//!
//! let combination = combine(&monitor, &implementation).unwrap();
//! assert!(combination.get_inputs().is_empty());
//! // Monitor input 2 is now an and gate reading the translated latch
//! assert_eq!(combination.get_ands().len(), 1);
//! assert_eq!(combination.get_ands()[0].rhs0, Literal::from(6));
//! ```

pub mod matcher;
pub mod translate;
pub mod validate;

use std::fmt;

use thiserror::Error;
use tracing::{debug, info};

use crate::{Aig, AigError, Literal, Symbol};

use matcher::symbols_match;
use translate::Translator;
use validate::validate_interface;

/// Which side of the implementation interface a signal belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SignalKind {
    Input,
    Output,
}

impl fmt::Display for SignalKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SignalKind::Input => write!(f, "input"),
            SignalKind::Output => write!(f, "output"),
        }
    }
}

/// Error returned when combining a monitor with an implementation failed.
/// No combined AIG is produced in any case.
#[derive(Debug, Error)]
pub enum CombineError {
    /// An implementation input or output has no counterpart among the monitor inputs.
    #[error("{kind} {name} does not appear in monitor")]
    UnmatchedSignal { kind: SignalKind, name: String },

    /// Only the implementation may declare outputs.
    #[error("monitor declares {outputs} output(s), expected none")]
    MalformedMonitor { outputs: usize },

    /// The combined AIG is not well formed. This should never happen on valid inputs.
    #[error("combined circuit is inconsistent: {0}")]
    StructuralInconsistency(#[from] AigError),
}

/// Combine `monitor` and `implementation`.
///
/// This will fail if:
/// - the monitor declares outputs
/// - an implementation output or input does not match any monitor input.
///
/// The combined AIG contains, in order:
/// - monitor inputs not fed by an implementation output
/// - monitor latches, properties and and gates, unchanged
/// - implementation latches and and gates, renumbered above the monitor variables
/// - one and gate `monitor input = implementation output & true` per fed monitor input.
pub fn combine(monitor: &Aig, implementation: &Aig) -> Result<Aig, CombineError> {
    if !monitor.get_outputs().is_empty() {
        return Err(CombineError::MalformedMonitor {
            outputs: monitor.get_outputs().len(),
        });
    }

    let binding = validate_interface(monitor, implementation)?;
    let translator = Translator::new(monitor, implementation, &binding)?;
    debug!(
        offset = translator.get_offset(),
        bound_inputs = binding.len(),
        "interface validated"
    );

    // Implementation output feeding each monitor input, if any
    let feeds: Vec<(&Symbol, Option<&Symbol>)> = monitor
        .get_inputs()
        .iter()
        .map(|input| {
            let feed = implementation
                .get_outputs()
                .iter()
                .find(|output| symbols_match(input, output));
            (input, feed)
        })
        .collect();

    let mut combination = Aig::with_max_var(monitor.get_max_var());

    // Monitor
    for &(input, _) in feeds.iter().filter(|(_, feed)| feed.is_none()) {
        combination.add_input(input.lit, input.get_name())?;
    }
    for latch in monitor.get_latches() {
        combination.add_latch(latch.lit, latch.next, latch.reset, latch.get_name())?;
    }
    for bad in monitor.get_bad() {
        combination.add_bad(bad.lit, bad.get_name());
    }
    for constraint in monitor.get_constraints() {
        combination.add_constraint(constraint.lit, constraint.get_name());
    }
    for justice in monitor.get_justice() {
        combination.add_justice(justice.lits.clone(), justice.name.as_deref());
    }
    for fairness in monitor.get_fairness() {
        combination.add_fairness(fairness.lit, fairness.get_name());
    }
    for and in monitor.get_ands() {
        combination.add_and(and.lhs, and.rhs0, and.rhs1)?;
    }
    debug!(
        inputs = combination.get_inputs().len(),
        latches = monitor.get_latches().len(),
        ands = monitor.get_ands().len(),
        "monitor copied"
    );

    // Implementation
    for latch in implementation.get_latches() {
        // Constant resets are left untouched, uninitialized latches stay uninitialized
        let reset = latch
            .reset
            .map(|reset| translator.translate(reset))
            .transpose()?;
        combination.add_latch(
            translator.translate(latch.lit)?,
            translator.translate(latch.next)?,
            reset,
            latch.get_name(),
        )?;
    }
    for and in implementation.get_ands() {
        combination.add_and(
            translator.translate(and.lhs)?,
            translator.translate(and.rhs0)?,
            translator.translate(and.rhs1)?,
        )?;
    }
    debug!(
        latches = implementation.get_latches().len(),
        ands = implementation.get_ands().len(),
        "implementation imported"
    );

    // Splicing implementation outputs into the monitor inputs they feed
    for &(input, feed) in &feeds {
        if let Some(output) = feed {
            combination.add_and(input.lit, translator.translate(output.lit)?, Literal::TRUE)?;
        }
    }

    combination.check_integrity()?;
    info!(
        max_var = combination.get_max_var(),
        inputs = combination.get_inputs().len(),
        latches = combination.get_latches().len(),
        ands = combination.get_ands().len(),
        "monitor and implementation combined"
    );

    Ok(combination)
}
