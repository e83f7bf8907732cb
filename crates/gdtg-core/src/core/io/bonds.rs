//! Reader for bond listings.
//!
//! A listing is line-oriented with whitespace-separated fields; blank lines
//! and lines starting with `#` are skipped. Hydrogen-bond records carry
//! `donor acceptor length cluster flags`, tertiary records carry
//! `donor acceptor vdw-distance`. Fields past the ones named here (rotation
//! data in some detector outputs) are ignored. Atom ids follow the
//! 3-atoms-per-residue convention described in [`crate::core::models::ids`].

use crate::core::models::bond::{HydrogenBond, TertiaryBond};
use crate::core::models::graph::BondGraph;
use crate::core::models::ids::AtomId;
use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;
use thiserror::Error;
use tracing::debug;

#[derive(Debug, Error)]
pub enum BondFileError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
    #[error("Parse error on line {line}: {kind}")]
    Parse {
        line: usize,
        kind: BondParseErrorKind,
    },
}

#[derive(Debug, Error)]
pub enum BondParseErrorKind {
    #[error("Expected at least {expected} fields, found {found}")]
    TooFewFields { expected: usize, found: usize },
    #[error("Invalid integer in '{field}' field (value: '{value}')")]
    InvalidInt { field: &'static str, value: String },
    #[error("Invalid float in '{field}' field (value: '{value}')")]
    InvalidFloat { field: &'static str, value: String },
}

fn parse_atom(field: &'static str, value: &str, line: usize) -> Result<AtomId, BondFileError> {
    value
        .parse::<u32>()
        .map(AtomId)
        .map_err(|_| BondFileError::Parse {
            line,
            kind: BondParseErrorKind::InvalidInt {
                field,
                value: value.to_string(),
            },
        })
}

fn parse_u32(field: &'static str, value: &str, line: usize) -> Result<u32, BondFileError> {
    value.parse::<u32>().map_err(|_| BondFileError::Parse {
        line,
        kind: BondParseErrorKind::InvalidInt {
            field,
            value: value.to_string(),
        },
    })
}

fn parse_f64(field: &'static str, value: &str, line: usize) -> Result<f64, BondFileError> {
    value.parse::<f64>().map_err(|_| BondFileError::Parse {
        line,
        kind: BondParseErrorKind::InvalidFloat {
            field,
            value: value.to_string(),
        },
    })
}

fn record_lines(
    reader: impl BufRead,
) -> impl Iterator<Item = Result<(usize, String), io::Error>> {
    reader
        .lines()
        .enumerate()
        .map(|(index, result)| result.map(|line| (index + 1, line)))
        .filter(|entry| match entry {
            Ok((_, line)) => {
                let trimmed = line.trim();
                !trimmed.is_empty() && !trimmed.starts_with('#')
            }
            Err(_) => true,
        })
}

/// Reads hydrogen-bond records from `reader` into `graph`, returning the
/// number of records accepted.
pub fn read_hydrogen_bonds(
    graph: &mut BondGraph,
    reader: impl BufRead,
) -> Result<usize, BondFileError> {
    let mut accepted = 0;
    for entry in record_lines(reader) {
        let (line, text) = entry?;
        let fields: Vec<&str> = text.split_whitespace().collect();
        if fields.len() < 5 {
            return Err(BondFileError::Parse {
                line,
                kind: BondParseErrorKind::TooFewFields {
                    expected: 5,
                    found: fields.len(),
                },
            });
        }
        let bond = HydrogenBond {
            donor: parse_atom("donor", fields[0], line)?,
            acceptor: parse_atom("acceptor", fields[1], line)?,
            length: parse_f64("length", fields[2], line)?,
            cluster: parse_u32("cluster", fields[3], line)?,
            flags: fields[4].to_string(),
        };
        if graph.add_hydrogen_bond(bond) {
            accepted += 1;
        }
    }
    Ok(accepted)
}

/// Reads tertiary-interaction records from `reader` into `graph`, returning
/// the number of records accepted.
pub fn read_tertiary_bonds(
    graph: &mut BondGraph,
    reader: impl BufRead,
) -> Result<usize, BondFileError> {
    let mut accepted = 0;
    for entry in record_lines(reader) {
        let (line, text) = entry?;
        let fields: Vec<&str> = text.split_whitespace().collect();
        if fields.len() < 3 {
            return Err(BondFileError::Parse {
                line,
                kind: BondParseErrorKind::TooFewFields {
                    expected: 3,
                    found: fields.len(),
                },
            });
        }
        let bond = TertiaryBond {
            donor: parse_atom("donor", fields[0], line)?,
            acceptor: parse_atom("acceptor", fields[1], line)?,
            vdw_distance: parse_f64("vdw-distance", fields[2], line)?,
        };
        if graph.add_tertiary_bond(bond) {
            accepted += 1;
        }
    }
    Ok(accepted)
}

/// Loads a protein's bond graph from a hydrogen-bond listing and an
/// optional tertiary-interaction listing.
///
/// The residue universe is not set here; callers span it from the
/// sequence-length table (targets) or pin it to the target's span (decoys).
pub fn load_graph(
    name: &str,
    hydrogen_path: &Path,
    tertiary_path: Option<&Path>,
) -> Result<BondGraph, BondFileError> {
    let mut graph = BondGraph::new(name);

    let file = File::open(hydrogen_path)?;
    let hydrogen = read_hydrogen_bonds(&mut graph, BufReader::new(file))?;

    let mut tertiary = 0;
    if let Some(path) = tertiary_path {
        let file = File::open(path)?;
        tertiary = read_tertiary_bonds(&mut graph, BufReader::new(file))?;
    }

    debug!(
        name,
        hydrogen, tertiary, "Loaded bond graph from listing files."
    );
    Ok(graph)
}
