use std::{
    fs::File,
    io::{BufRead, BufReader, BufWriter, Read, Write},
    path::Path,
};

use crate::{
    error::{ParseError, ParseErrorKind, Result},
    log::targets,
    types::{max_var, Clause, Formula, Lit, SatResult},
};

fn parse_clause(line: &str) -> std::result::Result<Clause, ParseErrorKind> {
    let mut clause = line
        .split_whitespace()
        .map(|word| match word.parse::<Lit>() {
            // the variable of Lit::MIN has no positive literal
            Ok(lit) if lit != Lit::MIN => Ok(lit),
            _ => Err(ParseErrorKind::InvalidToken(word.to_string())),
        })
        .collect::<std::result::Result<Clause, _>>()?;

    match clause.pop() {
        Some(0) => (),
        _ => return Err(ParseErrorKind::MissingTerminator),
    }
    if clause.contains(&0) {
        return Err(ParseErrorKind::MisplacedZero);
    }

    Ok(clause)
}

/// Reads a DIMACS CNF formula, one clause per line.
///
/// The `p` header and `c` comment lines are skipped and a `%` line ends the
/// input. The header is not checked against the clauses that follow.
pub fn read_formula(reader: &mut impl Read) -> Result<Formula> {
    let mut formula = vec![];

    for (i, line) in BufReader::new(reader).lines().enumerate() {
        let line = line?;
        let line = line.trim();

        if line.is_empty() || line.starts_with('p') || line.starts_with('c') {
            continue;
        }
        // SATLIB benchmarks end with a "%" line followed by a stray "0"
        if line.starts_with('%') {
            break;
        }

        let clause = parse_clause(line).map_err(|kind| ParseError { line: i + 1, kind })?;
        formula.push(clause);
    }

    Ok(formula)
}

pub fn read_file(path: impl AsRef<Path>) -> Result<Formula> {
    let path = path.as_ref();
    let mut file = File::open(path)?;
    let formula = read_formula(&mut file)?;
    log::debug!(
        target: targets::IO,
        "Read {} clauses over {} variables from {}",
        formula.len(),
        max_var(&formula),
        path.display()
    );
    Ok(formula)
}

pub fn write_result(writer: &mut impl Write, result: &SatResult) -> std::io::Result<()> {
    let mut writer = BufWriter::new(writer);
    writeln!(writer, "c Solved by dpll-sat.")?;

    match result {
        SatResult::Sat { model } => {
            writeln!(writer, "s SATISFIABLE")?;

            const PER_LINE: usize = 10;
            for chunk in model.chunks(PER_LINE) {
                let chunk_str = chunk
                    .iter()
                    .fold(String::new(), |str, lit| str + &lit.to_string() + " ");
                writeln!(writer, "v {chunk_str}")?;
            }
            writeln!(writer, "v 0")?;
        }
        SatResult::Unsat => writeln!(writer, "s UNSATISFIABLE")?,
    }

    writer.flush()
}
