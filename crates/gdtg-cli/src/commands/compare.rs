use super::{file_stem, load_decoys, load_protein, open_output};
use crate::cli::CompareArgs;
use crate::config::RunFile;
use crate::error::Result;
use gdtgraph::engine::bondset::{AgreementParams, SetAgreement};
use gdtgraph::workflows::compare;
use std::io::Write;
use tracing::info;

pub fn run(args: CompareArgs) -> Result<()> {
    let run_file = RunFile::load_or_default(args.config.as_deref())?;
    let params = match args.half_width.or(run_file.half_width) {
        Some(half_width) => AgreementParams { half_width },
        None => AgreementParams::default(),
    };

    let stem = file_stem(&args.target)?;
    let target = load_protein(&stem, &args.target, args.tertiary_dir.as_deref())?;
    let decoys = load_decoys(&stem, &args.decoy_dir, args.tertiary_dir.as_deref(), None)?;
    info!(target = %stem, count = decoys.len(), "Loaded graphs for comparison.");

    let rows = compare::run(&target, &decoys, params);

    let mut out = open_output(args.output.as_deref())?;
    for row in &rows {
        let mut columns = vec![stem.clone(), row.decoy.clone()];
        columns.extend(agreement_columns(&row.hydrogen));
        columns.extend(agreement_columns(&row.tertiary));
        writeln!(out, "{}", columns.join("\t"))?;
    }
    out.flush()?;

    info!(rows = rows.len(), "Compare run complete.");
    Ok(())
}

fn agreement_columns(agreement: &SetAgreement) -> Vec<String> {
    vec![
        agreement.target_size.to_string(),
        agreement.decoy_size.to_string(),
        agreement.overlap_pct.to_string(),
        agreement.mismatch.to_string(),
        agreement.combined.to_string(),
    ]
}
