//! Checks that the implementation interface is part of the monitor interface.

use std::collections::HashMap;

use tracing::warn;

use crate::{Aig, Literal, Symbol, Var};

use super::{CombineError, SignalKind, matcher::symbols_match};

/// Associates each implementation input (by variable) with the monitor input literal it reads.
///
/// Built by [`validate_interface`], it lives next to the circuits and never inside them.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InterfaceBinding {
    inputs: HashMap<Var, Literal>,
}

impl InterfaceBinding {
    /// The monitor literal bound to the implementation input variable `var`.
    pub fn get(&self, var: Var) -> Option<Literal> {
        self.inputs.get(&var).copied()
    }

    pub fn len(&self) -> usize {
        self.inputs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inputs.is_empty()
    }

    fn bind(&mut self, var: Var, monitor_lit: Literal) {
        self.inputs.insert(var, monitor_lit);
    }
}

/// Name used in diagnostics, unnamed symbols are called as in an AIGER symbol table (eg. `i3`).
fn display_name(kind: SignalKind, index: usize, symbol: &Symbol) -> String {
    match symbol.get_name() {
        Some(name) => name.to_string(),
        None => match kind {
            SignalKind::Input => format!("i{}", index),
            SignalKind::Output => format!("o{}", index),
        },
    }
}

/// Returns the first monitor input matching the implementation signal.
///
/// Several candidates usually mean two signals only differing by case,
/// the first one wins but it is worth a warning.
pub fn find_monitor_input<'a>(monitor: &'a Aig, signal: &Symbol) -> Option<&'a Symbol> {
    let mut candidates = monitor
        .get_inputs()
        .iter()
        .filter(|input| symbols_match(input, signal));
    let first = candidates.next()?;
    let others = candidates.count();
    if others > 0 {
        warn!(
            signal = signal.get_name().unwrap_or_default(),
            chosen = first.get_name().unwrap_or_default(),
            ignored = others,
            "several monitor inputs match the same signal"
        );
    }
    Some(first)
}

/// Checks that every implementation output and input has a matching monitor input,
/// and binds implementation inputs to the matching monitor input.
///
/// Outputs are checked first, the first unmatched signal is reported.
pub fn validate_interface(
    monitor: &Aig,
    implementation: &Aig,
) -> Result<InterfaceBinding, CombineError> {
    for (k, output) in implementation.get_outputs().iter().enumerate() {
        if find_monitor_input(monitor, output).is_none() {
            return Err(CombineError::UnmatchedSignal {
                kind: SignalKind::Output,
                name: display_name(SignalKind::Output, k, output),
            });
        }
    }

    let mut binding = InterfaceBinding::default();
    for (k, input) in implementation.get_inputs().iter().enumerate() {
        match find_monitor_input(monitor, input) {
            Some(monitor_input) => binding.bind(input.lit.get_var(), monitor_input.lit),
            None => {
                return Err(CombineError::UnmatchedSignal {
                    kind: SignalKind::Input,
                    name: display_name(SignalKind::Input, k, input),
                });
            }
        }
    }

    Ok(binding)
}
