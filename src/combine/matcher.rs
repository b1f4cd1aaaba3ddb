//! Name correspondence between monitor inputs and implementation signals.

use crate::Symbol;

/// Prefix of monitor inputs standing for the next state of an implementation signal.
///
/// Monitors compiled from temporal formulas name such inputs after the signal,
/// though not necessarily with the same case.
pub const NEXT_PREFIX: &str = "AIGER_NEXT_";

/// Whether the monitor input `monitor_input` denotes the implementation signal `other`.
///
/// - without [`NEXT_PREFIX`], names must be equal
/// - with it, what follows the prefix must be equal to `other` up to ASCII case.
///
/// ```rust
/// use aigcombine::combine::matcher::names_match;
/// assert!(names_match("AIGER_NEXT_req", "REQ"));
/// assert!(names_match("grant", "grant"));
/// assert!(!names_match("grant", "GRANT"));
/// ```
pub fn names_match(monitor_input: &str, other: &str) -> bool {
    match monitor_input.strip_prefix(NEXT_PREFIX) {
        None => monitor_input == other,
        // A longer name can never match, whatever its case
        Some(rest) => rest.len() >= other.len() && rest.eq_ignore_ascii_case(other),
    }
}

/// Same as [`names_match`] for symbols. Unnamed symbols never match.
pub fn symbols_match(monitor_input: &Symbol, other: &Symbol) -> bool {
    match (monitor_input.get_name(), other.get_name()) {
        (Some(monitor_input), Some(other)) => names_match(monitor_input, other),
        _ => false,
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::Literal;

    #[test]
    fn exact_match_test() {
        assert!(names_match("x", "x"));
        assert!(!names_match("x", "X"));
        assert!(!names_match("x", "xy"));
        assert!(!names_match("AIGER_NEXT", "AIGER_NEXT_"));
    }

    #[test]
    fn next_prefix_match_test() {
        assert!(names_match("AIGER_NEXT_x", "x"));
        assert!(names_match("AIGER_NEXT_x", "X"));
        assert!(names_match("AIGER_NEXT_Grant_0", "grant_0"));
        assert!(!names_match("AIGER_NEXT_x", "y"));
        // The prefix itself is never part of the implementation name
        assert!(!names_match("AIGER_NEXT_x", "AIGER_NEXT_x"));
        // Prefix is case sensitive
        assert!(!names_match("aiger_next_x", "x"));
    }

    #[test]
    fn shorter_remainder_test() {
        assert!(!names_match("AIGER_NEXT_x", "xx"));
        assert!(!names_match("AIGER_NEXT_", "x"));
        assert!(names_match("AIGER_NEXT_", ""));
        assert!(!names_match("AIGER_NEXT_xx", "x"));
    }

    #[test]
    fn symbols_match_test() {
        let named = Symbol::new(Literal::from(2), Some("AIGER_NEXT_x"));
        let unnamed = Symbol::new(Literal::from(2), None);
        assert!(symbols_match(&named, &Symbol::new(Literal::from(8), Some("x"))));
        assert!(!symbols_match(&named, &unnamed));
        assert!(!symbols_match(&unnamed, &named));
        assert!(!symbols_match(&unnamed, &unnamed));
    }
}
