pub mod compare;
pub mod score;

use crate::error::{CliError, Result};
use gdtgraph::core::io::bonds;
use gdtgraph::core::models::graph::BondGraph;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};
use tracing::warn;

/// Protein name from a listing path: the file stem.
pub(crate) fn file_stem(path: &Path) -> Result<String> {
    path.file_stem()
        .and_then(|stem| stem.to_str())
        .map(str::to_string)
        .ok_or_else(|| {
            CliError::Config(format!(
                "Cannot derive a protein name from '{}'",
                path.display()
            ))
        })
}

/// Loads one protein's bond graph, pairing the listing with the same file
/// name in the tertiary directory. A missing tertiary listing degrades to a
/// hydrogen-only graph with a warning.
pub(crate) fn load_protein(
    name: &str,
    listing: &Path,
    tertiary_dir: Option<&Path>,
) -> Result<BondGraph> {
    let tertiary_path = tertiary_dir
        .and_then(|dir| listing.file_name().map(|file| dir.join(file)));
    let tertiary = match &tertiary_path {
        Some(path) if path.is_file() => Some(path.as_path()),
        Some(path) => {
            warn!(
                name,
                path = %path.display(),
                "No tertiary listing found; continuing with hydrogen bonds only."
            );
            None
        }
        None => None,
    };

    bonds::load_graph(name, listing, tertiary).map_err(|source| CliError::BondFile {
        path: listing.to_path_buf(),
        source,
    })
}

/// Decoy listings belonging to `stem`, sorted by file name.
pub(crate) fn decoy_listings(stem: &str, dir: &Path) -> Result<Vec<PathBuf>> {
    let mut paths = Vec::new();
    for entry in std::fs::read_dir(dir)? {
        let path = entry?.path();
        let Some(name) = path.file_stem().and_then(|s| s.to_str()) else {
            continue;
        };
        if path.is_file() && name.starts_with(stem) && name != stem {
            paths.push(path);
        }
    }
    paths.sort();
    Ok(paths)
}

/// Loads every decoy of `stem` from `dir`. With `residues` given, each
/// decoy's residue universe is pinned to the target's span.
pub(crate) fn load_decoys(
    stem: &str,
    dir: &Path,
    tertiary_dir: Option<&Path>,
    residues: Option<u32>,
) -> Result<Vec<BondGraph>> {
    let mut decoys = Vec::new();
    for path in decoy_listings(stem, dir)? {
        let name = file_stem(&path)?;
        let mut graph = load_protein(&name, &path, tertiary_dir)?;
        if let Some(count) = residues {
            graph.set_residue_span(count);
        }
        decoys.push(graph);
    }
    Ok(decoys)
}

/// Opens the record output: a buffered file, or stdout when no path is
/// given.
pub(crate) fn open_output(path: Option<&Path>) -> Result<Box<dyn Write>> {
    Ok(match path {
        Some(path) => Box::new(BufWriter::new(File::create(path)?)),
        None => Box::new(std::io::stdout().lock()),
    })
}
