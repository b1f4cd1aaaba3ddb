use std::{fs::File, io::Read, path::Path, str::FromStr};

use crate::{Aig, AigError, Literal, Result, Var, aig::error::ParserError};

fn read_u64(s: &str) -> std::result::Result<u64, ParserError> {
    s.parse::<u64>()
        .map_err(|_| ParserError::InvalidToken(s.to_string() + " expected u64"))
}

/// Reads a literal and checks it against the maximum variable index of the header.
fn read_literal(s: &str, max_var: Var) -> Result<Literal> {
    let lit = Literal::from(read_u64(s)?);
    if lit.get_var() > max_var {
        return Err(AigError::MaxVarExceeded { lit, max_var });
    }
    Ok(lit)
}

fn tokens_exactly<'a>(line: &'a str, n: usize, what: &str) -> Result<Vec<&'a str>> {
    let tokens = line.split_whitespace().collect::<Vec<&str>>();
    if tokens.len() != n {
        return Err(ParserError::InvalidToken(format!(
            "expected {} token(s) for {}, got \"{}\"",
            n, what, line
        ))
        .into());
    }
    Ok(tokens)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Format {
    Ascii,
    Binary,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Header {
    format: Format,
    m: u64,
    i: u64,
    l: u64,
    o: u64,
    a: u64,
    b: u64,
    c: u64,
    j: u64,
    f: u64,
}

impl TryFrom<&str> for Header {
    type Error = ParserError;

    fn try_from(line: &str) -> std::result::Result<Self, Self::Error> {
        let tokens = line.split_whitespace().collect::<Vec<&str>>();

        if tokens.len() < 6 {
            return Err(ParserError::InvalidToken(
                "missing header tokens".to_string(),
            ));
        }

        let format = match tokens[0] {
            "aag" => Format::Ascii,
            "aig" => Format::Binary,
            _ => {
                return Err(ParserError::InvalidToken(
                    "expected aag or aig, got ".to_string() + tokens[0],
                ));
            }
        };

        if tokens.len() > 10 {
            return Err(ParserError::UnsupportedFeature(
                "header only supports M I L O A B C J F".to_string(),
            ));
        }

        let mut counts = [0; 9];
        for (count, token) in counts.iter_mut().zip(&tokens[1..]) {
            *count = read_u64(token)?;
        }
        let [m, i, l, o, a, b, c, j, f] = counts;

        // Literal 2 * M + 1 must fit
        if m > Var::MAX >> 1 {
            return Err(ParserError::InvalidToken(format!(
                "M={} is too large for a literal",
                m
            )));
        }
        let defined = i
            .checked_add(l)
            .and_then(|n| n.checked_add(a))
            .ok_or_else(|| ParserError::InvalidToken("I + L + A overflows".to_string()))?;
        if defined > m {
            return Err(ParserError::InvalidToken(format!(
                "M={} is smaller than I + L + A = {}",
                m, defined
            )));
        }
        if format == Format::Binary && defined != m {
            return Err(ParserError::InvalidToken(format!(
                "binary format expects M = I + L + A, got M={} and I + L + A = {}",
                m, defined
            )));
        }

        Ok(Header {
            format,
            m,
            i,
            l,
            o,
            a,
            b,
            c,
            j,
            f,
        })
    }
}

/// Walks through the raw bytes of an AIGER file.
///
/// Both formats are line based, except for the and gates section of the binary format.
struct Source {
    buf: Vec<u8>,
    offset: usize,
}

impl Source {
    fn new(buf: Vec<u8>) -> Self {
        Source { buf, offset: 0 }
    }

    fn is_eof(&self) -> bool {
        self.offset >= self.buf.len()
    }

    /// Returns the next line without its line terminator, or [`None`] at the end of the file.
    fn next_line(&mut self) -> Result<Option<&str>> {
        if self.is_eof() {
            return Ok(None);
        }
        let start = self.offset;
        let end = self.buf[start..]
            .iter()
            .position(|&ch| ch == b'\n')
            .map_or(self.buf.len(), |k| start + k);
        self.offset = (end + 1).min(self.buf.len());

        let line = std::str::from_utf8(&self.buf[start..end])
            .map_err(|_| ParserError::InvalidToken("line is not valid utf-8".to_string()))?;
        Ok(Some(line.strip_suffix('\r').unwrap_or(line)))
    }

    fn expect_line(&mut self, what: &str) -> Result<&str> {
        self.next_line()?.ok_or_else(|| {
            ParserError::IoError(format!("unexpected end of file, expected {}", what)).into()
        })
    }

    fn getnoneofch(&mut self) -> Result<u8> {
        if self.is_eof() {
            return Err(ParserError::InvalidToken("unexpected end of file".to_string()).into());
        }

        let byte = self.buf[self.offset];
        self.offset += 1;
        Ok(byte)
    }

    fn decode_delta(&mut self) -> Result<u64> {
        let mut x = 0;
        let mut i = 0;

        loop {
            let ch = self.getnoneofch()?;
            if i >= 10 {
                return Err(ParserError::InvalidToken("delta overflows u64".to_string()).into());
            }
            x |= ((ch & 0x7f) as u64) << (7 * i);
            i += 1;

            if ch & 0x80 == 0 {
                break;
            }
        }
        Ok(x)
    }
}

/// Sections shared by both formats, between latches and and gates.
fn read_properties(aig: &mut Aig, source: &mut Source, header: &Header) -> Result<()> {
    for _ in 0..header.o {
        let line = source.expect_line("output")?;
        let tokens = tokens_exactly(line, 1, "output")?;
        aig.add_output(read_literal(tokens[0], header.m)?, None);
    }

    for _ in 0..header.b {
        let line = source.expect_line("bad state")?;
        let tokens = tokens_exactly(line, 1, "bad state")?;
        aig.add_bad(read_literal(tokens[0], header.m)?, None);
    }

    for _ in 0..header.c {
        let line = source.expect_line("constraint")?;
        let tokens = tokens_exactly(line, 1, "constraint")?;
        aig.add_constraint(read_literal(tokens[0], header.m)?, None);
    }

    // Sizes of all justice properties come first, then their literals
    let mut sizes = Vec::new();
    for _ in 0..header.j {
        let line = source.expect_line("justice size")?;
        let tokens = tokens_exactly(line, 1, "justice size")?;
        sizes.push(read_u64(tokens[0])?);
    }
    for size in sizes {
        let mut lits = Vec::new();
        for _ in 0..size {
            let line = source.expect_line("justice literal")?;
            let tokens = tokens_exactly(line, 1, "justice literal")?;
            lits.push(read_literal(tokens[0], header.m)?);
        }
        aig.add_justice(lits, None);
    }

    for _ in 0..header.f {
        let line = source.expect_line("fairness")?;
        let tokens = tokens_exactly(line, 1, "fairness")?;
        aig.add_fairness(read_literal(tokens[0], header.m)?, None);
    }

    Ok(())
}

/// Parser for the ASCII AIGER format.
mod ascii {
    use super::{Header, Source, read_literal, read_properties, tokens_exactly};
    use crate::{Aig, Result, aig::error::ParserError};

    pub(super) fn read_body(aig: &mut Aig, source: &mut Source, header: &Header) -> Result<()> {
        for _ in 0..header.i {
            let line = source.expect_line("input")?;
            let tokens = tokens_exactly(line, 1, "input")?;
            aig.add_input(read_literal(tokens[0], header.m)?, None)?;
        }

        for _ in 0..header.l {
            let line = source.expect_line("latch")?;
            let tokens = line.split_whitespace().collect::<Vec<&str>>();
            if tokens.len() != 2 && tokens.len() != 3 {
                return Err(ParserError::InvalidToken(format!(
                    "expected 2 or 3 tokens for latch, got \"{}\"",
                    line
                ))
                .into());
            }
            let lit = read_literal(tokens[0], header.m)?;
            let next = read_literal(tokens[1], header.m)?;
            let reset = tokens
                .get(2)
                .map(|token| read_literal(token, header.m))
                .transpose()?;
            aig.add_latch(lit, next, reset, None)?;
        }

        read_properties(aig, source, header)?;

        for _ in 0..header.a {
            let line = source.expect_line("and gate")?;
            let tokens = tokens_exactly(line, 3, "and gate")?;
            aig.add_and(
                read_literal(tokens[0], header.m)?,
                read_literal(tokens[1], header.m)?,
                read_literal(tokens[2], header.m)?,
            )?;
        }

        Ok(())
    }
}

/// Parser for the bin AIGER format.
mod bin {
    use super::{Header, Source, read_literal, read_properties};
    use crate::{Aig, Literal, Result, aig::error::ParserError};

    pub(super) fn read_body(aig: &mut Aig, source: &mut Source, header: &Header) -> Result<()> {
        // Inputs are implicit
        for k in 0..header.i {
            aig.add_input(Literal::new(1 + k, false), None)?;
        }

        // Latch literals are implicit too, only next state and reset are given
        for k in 0..header.l {
            let lit = Literal::new(1 + header.i + k, false);
            let line = source.expect_line("latch")?;
            let tokens = line.split_whitespace().collect::<Vec<&str>>();
            if tokens.len() != 1 && tokens.len() != 2 {
                return Err(ParserError::InvalidToken(format!(
                    "expected 1 or 2 tokens for latch, got \"{}\"",
                    line
                ))
                .into());
            }
            let next = read_literal(tokens[0], header.m)?;
            let reset = tokens
                .get(1)
                .map(|token| read_literal(token, header.m))
                .transpose()?;
            aig.add_latch(lit, next, reset, None)?;
        }

        read_properties(aig, source, header)?;

        // And gates are implicit as well, they come right after the latches
        for k in 0..header.a {
            let lhs = Literal::new(1 + header.i + header.l + k, false);
            let delta0 = source.decode_delta()?;
            let delta1 = source.decode_delta()?;

            let rhs0 = lhs.get_raw().checked_sub(delta0).ok_or_else(|| {
                ParserError::InvalidToken(format!("delta {} too large for and {}", delta0, lhs))
            })?;
            let rhs1 = rhs0.checked_sub(delta1).ok_or_else(|| {
                ParserError::InvalidToken(format!("delta {} too large for and {}", delta1, lhs))
            })?;

            aig.add_and(lhs, Literal::from(rhs0), Literal::from(rhs1))?;
        }

        Ok(())
    }
}

/// Reads the optional symbol table and comment section, both formats share them.
fn read_symbols(aig: &mut Aig, source: &mut Source) -> Result<()> {
    while let Some(line) = source.next_line()? {
        if line.is_empty() {
            continue;
        }

        let (kind, rest) = line.split_at_checked(1).ok_or_else(|| {
            ParserError::InvalidToken(format!("expected symbol, got \"{}\"", line))
        })?;
        if kind == "c" && rest.is_empty() {
            // Everything left is a comment
            while let Some(comment) = source.next_line()? {
                aig.comments.push(comment.to_string());
            }
            break;
        }

        let (index, name) = rest.split_once(' ').ok_or_else(|| {
            ParserError::InvalidToken(format!("expected symbol, got \"{}\"", line))
        })?;
        let index = usize::try_from(read_u64(index)?)
            .map_err(|_| ParserError::InvalidToken(format!("symbol index {} too large", index)))?;

        let slot = match kind {
            "i" => aig.inputs.get_mut(index).map(|s| &mut s.name),
            "l" => aig.latches.get_mut(index).map(|s| &mut s.name),
            "o" => aig.outputs.get_mut(index).map(|s| &mut s.name),
            "b" => aig.bad.get_mut(index).map(|s| &mut s.name),
            "c" => aig.constraints.get_mut(index).map(|s| &mut s.name),
            "j" => aig.justice.get_mut(index).map(|s| &mut s.name),
            "f" => aig.fairness.get_mut(index).map(|s| &mut s.name),
            _ => {
                return Err(ParserError::InvalidToken(format!(
                    "unknown symbol kind in \"{}\"",
                    line
                ))
                .into());
            }
        };
        let slot = slot.ok_or_else(|| {
            ParserError::InvalidToken(format!("symbol index out of range in \"{}\"", line))
        })?;
        *slot = Some(name.to_string());
    }
    Ok(())
}

impl Aig {
    /// Creates an AIG from the content of an AIGER file, in ASCII or binary format.
    /// The format is detected from the header (`aag` or `aig`).
    ///
    /// Supports the AIGER 1.9 sections: bad states, invariant constraints, justice and fairness,
    /// as well as the symbol table and comments.
    pub fn from_bytes(buf: Vec<u8>) -> Result<Self> {
        let mut source = Source::new(buf);

        // Reading the header
        let header = Header::try_from(source.expect_line("header")?)?;
        let mut aig = Aig::with_max_var(header.m);

        match header.format {
            Format::Ascii => ascii::read_body(&mut aig, &mut source, &header)?,
            Format::Binary => bin::read_body(&mut aig, &mut source, &header)?,
        }
        read_symbols(&mut aig, &mut source)?;

        // Is the AIG okay?
        aig.check_integrity()?;

        Ok(aig)
    }

    /// Creates an AIG by reading the whole reader (file, stdin, ...).
    pub fn from_reader(mut reader: impl Read) -> Result<Self> {
        let mut buf = Vec::new();
        reader
            .read_to_end(&mut buf)
            .map_err(|e| ParserError::IoError(e.to_string()))?;
        Aig::from_bytes(buf)
    }

    /// Creates an AIG from an .aag or .aig file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let f = File::open(path.as_ref()).map_err(|e| ParserError::IoError(e.to_string()))?;
        Aig::from_reader(f)
    }
}

impl FromStr for Aig {
    type Err = AigError;

    fn from_str(s: &str) -> Result<Self> {
        Aig::from_bytes(s.as_bytes().to_vec())
    }
}
