use std::{
    fmt,
    io::{self, Write},
};

use crate::{Aig, Symbol};

fn write_symbols(f: &mut fmt::Formatter<'_>, kind: char, symbols: &[Symbol]) -> fmt::Result {
    for (k, symbol) in symbols.iter().enumerate() {
        if let Some(name) = symbol.get_name() {
            writeln!(f, "{}{} {}", kind, k, name)?;
        }
    }
    Ok(())
}

/// Writes the AIG in ASCII AIGER format (`aag`).
///
/// Extended header counts `B C J F` are only written as far as needed,
/// eg. `aag M I L O A B` if there are bad states but no constraints, justice or fairness.
impl fmt::Display for Aig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "aag {} {} {} {} {}",
            self.max_var,
            self.inputs.len(),
            self.latches.len(),
            self.outputs.len(),
            self.ands.len()
        )?;
        let mut extended = vec![
            self.bad.len(),
            self.constraints.len(),
            self.justice.len(),
            self.fairness.len(),
        ];
        while extended.last() == Some(&0) {
            extended.pop();
        }
        for count in extended {
            write!(f, " {}", count)?;
        }
        writeln!(f)?;

        for input in &self.inputs {
            writeln!(f, "{}", input.lit)?;
        }
        for latch in &self.latches {
            match latch.reset {
                Some(reset) => writeln!(f, "{} {} {}", latch.lit, latch.next, reset)?,
                None => writeln!(f, "{} {}", latch.lit, latch.next)?,
            }
        }
        for symbol in self
            .outputs
            .iter()
            .chain(&self.bad)
            .chain(&self.constraints)
        {
            writeln!(f, "{}", symbol.lit)?;
        }
        for justice in &self.justice {
            writeln!(f, "{}", justice.lits.len())?;
        }
        for justice in &self.justice {
            for lit in &justice.lits {
                writeln!(f, "{}", lit)?;
            }
        }
        for fairness in &self.fairness {
            writeln!(f, "{}", fairness.lit)?;
        }
        for and in &self.ands {
            writeln!(f, "{} {} {}", and.lhs, and.rhs0, and.rhs1)?;
        }

        // Symbol table
        write_symbols(f, 'i', &self.inputs)?;
        for (k, latch) in self.latches.iter().enumerate() {
            if let Some(name) = latch.get_name() {
                writeln!(f, "l{} {}", k, name)?;
            }
        }
        write_symbols(f, 'o', &self.outputs)?;
        write_symbols(f, 'b', &self.bad)?;
        write_symbols(f, 'c', &self.constraints)?;
        for (k, justice) in self.justice.iter().enumerate() {
            if let Some(name) = &justice.name {
                writeln!(f, "j{} {}", k, name)?;
            }
        }
        write_symbols(f, 'f', &self.fairness)?;

        if !self.comments.is_empty() {
            writeln!(f, "c")?;
            for comment in &self.comments {
                writeln!(f, "{}", comment)?;
            }
        }

        Ok(())
    }
}

impl Aig {
    /// Writes the AIG in ASCII AIGER format to the given writer.
    pub fn write_ascii(&self, mut writer: impl Write) -> io::Result<()> {
        write!(writer, "{}", self)?;
        writer.flush()
    }

    /// Returns the AIG in ASCII AIGER format.
    pub fn to_ascii(&self) -> String {
        self.to_string()
    }
}

#[cfg(test)]
mod test {
    use crate::{Aig, Literal};

    fn lit(x: u64) -> Literal {
        Literal::from(x)
    }

    #[test]
    fn write_ascii_test() {
        let mut aig = Aig::new();
        aig.add_input(lit(2), Some("x")).unwrap();
        aig.add_input(lit(4), None).unwrap();
        aig.add_latch(lit(6), lit(9), None, Some("l")).unwrap();
        aig.add_latch(lit(10), lit(6), Some(lit(10)), None).unwrap();
        aig.add_and(lit(8), lit(2), lit(7)).unwrap();
        aig.add_bad(lit(9), Some("p0"));

        assert_eq!(
            aig.to_ascii(),
            "aag 5 2 2 0 1 1\n\
             2\n\
             4\n\
             6 9\n\
             10 6 10\n\
             9\n\
             8 2 7\n\
             i0 x\n\
             l0 l\n\
             b0 p0\n"
        );
    }

    #[test]
    fn write_ascii_extended_header_test() {
        let mut aig = Aig::new();
        aig.add_input(lit(2), None).unwrap();
        aig.add_justice(vec![lit(2), lit(3)], Some("live"));
        aig.add_comment("hello");

        assert_eq!(
            aig.to_ascii(),
            "aag 1 1 0 0 0 0 0 1\n\
             2\n\
             2\n\
             2\n\
             3\n\
             j0 live\n\
             c\n\
             hello\n"
        );
    }

    #[test]
    fn write_then_read_test() {
        let text = "aag 5 1 1 0 1 1 1 1 1\n\
                    2\n\
                    4 10 0\n\
                    10\n\
                    3\n\
                    2\n\
                    4\n\
                    11\n\
                    4\n\
                    10 2 5\n\
                    i0 req\n\
                    b0 p0\n\
                    c0 env\n\
                    j0 live\n\
                    c\n\
                    some comment\n";
        let aig: Aig = text.parse().unwrap();
        assert_eq!(aig.to_ascii(), text);
        assert_eq!(aig.to_ascii().parse::<Aig>().unwrap(), aig);
    }
}
