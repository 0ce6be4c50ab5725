pub mod vc;

use std::{
    fs::File,
    io::{self, BufRead, BufReader, BufWriter, Read, Write},
    path::Path,
};

use bzip2::read::BzDecoder;
use flate2::read::MultiGzDecoder;
use xz2::read::XzDecoder;

use crate::{
    error::ParseError,
    formula::Formula,
    types::{Lit, Problem},
};

/// Wraps `reader` in the decoder matching a `gz`, `bz2` or `xz` extension.
pub fn decoder<'a>(extension: Option<&str>, reader: impl Read + 'a) -> Box<dyn Read + 'a> {
    match extension {
        Some("gz") => Box::new(MultiGzDecoder::new(reader)),
        Some("bz2") => Box::new(BzDecoder::new(reader)),
        Some("xz") => Box::new(XzDecoder::new(reader)),
        _ => Box::new(reader),
    }
}

/// Opens `path`, decompressing by file extension.
pub fn open(path: &Path) -> io::Result<Box<dyn Read>> {
    let file = File::open(path)?;
    let extension = path.extension().and_then(|e| e.to_str());
    log::debug!("opening {path:?} (extension {extension:?})");
    Ok(decoder(extension, file))
}

fn parse_header(line: usize, parts: &[&str]) -> Result<(usize, usize), ParseError> {
    if parts.len() != 4 {
        return Err(ParseError::HeaderArity {
            line,
            found: parts.len(),
        });
    }
    if parts[1] != "cnf" {
        return Err(ParseError::NotCnf {
            line,
            found: parts[1].to_string(),
        });
    }

    let number = |token: &str| {
        token
            .parse::<usize>()
            .map_err(|_| ParseError::InvalidHeaderNumber {
                line,
                token: token.to_string(),
            })
    };
    let var_count = number(parts[2])?;
    if var_count > Lit::MAX as usize {
        return Err(ParseError::TooManyVariables { line, var_count });
    }
    Ok((var_count, number(parts[3])?))
}

/// Reads a DIMACS CNF problem, one clause per line.
///
/// Lines starting with `c`, `%` or `w` are comments. A trailing `0` on a
/// clause line is optional. Lines left empty after stripping it are dropped.
pub fn read_problem(reader: &mut impl Read) -> Result<Problem, ParseError> {
    let mut header: Option<(usize, usize)> = None;
    let mut clauses = vec![];

    for (i, line) in BufReader::new(reader).lines().enumerate() {
        let line = line?;
        let nr = i + 1;

        let parts: Vec<&str> = line.split_whitespace().collect();
        let Some(&first) = parts.first() else {
            continue;
        };

        match first {
            "p" => {
                if header.is_some() {
                    return Err(ParseError::MultipleHeaders { line: nr });
                }
                let (var_count, clause_count) = parse_header(nr, &parts)?;
                log::info!("header: {var_count} variables, {clause_count} clauses");
                header = Some((var_count, clause_count));
            }
            "c" | "%" | "w" => {
                // comment line
                log::debug!("comment: {line}");
            }
            _ => {
                let Some((var_count, _)) = header else {
                    return Err(ParseError::ClauseBeforeHeader { line: nr });
                };

                let mut clause = parts
                    .iter()
                    .map(|&token| {
                        token.parse::<Lit>().map_err(|_| ParseError::InvalidLiteral {
                            line: nr,
                            token: token.to_string(),
                        })
                    })
                    .collect::<Result<Vec<Lit>, _>>()?;

                if clause.last() == Some(&0) {
                    clause.pop();
                }

                if let Some(&lit) = clause
                    .iter()
                    .find(|lit| !(1..=var_count).contains(&(lit.unsigned_abs() as usize)))
                {
                    return Err(ParseError::LiteralOutOfRange {
                        line: nr,
                        lit,
                        var_count,
                    });
                }

                if !clause.is_empty() {
                    clauses.push(clause);
                }
            }
        }
    }

    let (var_count, clause_count) = header.ok_or(ParseError::MissingHeader)?;
    if clause_count != clauses.len() {
        log::warn!(
            "header announces {clause_count} clauses, read {}",
            clauses.len()
        );
    }

    Ok(Problem { var_count, clauses })
}

/// Writes `formula` in DIMACS CNF.
pub fn write_formula(writer: &mut impl Write, formula: &Formula) -> io::Result<()> {
    let mut writer = BufWriter::new(writer);
    writeln!(
        writer,
        "p cnf {} {}",
        formula.var_count(),
        formula.clause_count()
    )?;

    for clause in formula.clauses() {
        let clause_str = clause
            .iter()
            .fold(String::new(), |str, lit| str + &lit.to_string() + " ");
        writeln!(writer, "{clause_str}0")?;
    }

    writer.flush()
}
