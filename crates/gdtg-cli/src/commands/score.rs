use super::{file_stem, load_decoys, load_protein, open_output};
use crate::cli::ScoreArgs;
use crate::config::RunFile;
use crate::error::Result;
use gdtgraph::core::io::seqlen::SeqLenTable;
use gdtgraph::engine::config::ScoringConfigBuilder;
use gdtgraph::engine::progress::{Progress, ProgressReporter};
use gdtgraph::workflows::score;
use indicatif::{ProgressBar, ProgressStyle};
use std::io::Write;
use tracing::{info, warn};

pub fn run(args: ScoreArgs) -> Result<()> {
    let run_file = RunFile::load_or_default(args.config.as_deref())?;
    let mut builder = ScoringConfigBuilder::new();
    if let Some(cutoffs) = args.cutoffs.or(run_file.cutoffs) {
        builder = builder.cutoffs(cutoffs);
    }
    let config = builder.build()?;

    let stem = file_stem(&args.target)?;
    let table = SeqLenTable::load(&args.seqfile)?;

    let mut target = load_protein(&stem, &args.target, args.tertiary_dir.as_deref())?;
    let residues = score::resolve_residue_span(&mut target, &table)?;
    info!(target = %stem, residues, "Loaded target graph.");

    let decoys = load_decoys(
        &stem,
        &args.decoy_dir,
        args.tertiary_dir.as_deref(),
        Some(residues),
    )?;
    info!(count = decoys.len(), "Loaded decoy graphs.");

    let bar = ProgressBar::new(decoys.len() as u64);
    bar.set_style(
        ProgressStyle::with_template("[{bar:40.cyan/blue}] {pos}/{len} decoys ({eta})")
            .unwrap_or_else(|_| ProgressStyle::default_bar())
            .progress_chars("#>-"),
    );
    let reporter = ProgressReporter::with_callback(Box::new(|event| {
        if matches!(event, Progress::DecoyFinish { .. }) {
            bar.inc(1);
        }
    }));

    let outcome = score::score_decoys(&target, &decoys, &config.cutoffs, &reporter);
    bar.finish_and_clear();

    let mut out = open_output(args.output.as_deref())?;
    for decoy_score in &outcome.scores {
        writeln!(out, "{}\t{}", decoy_score.decoy, decoy_score.mean)?;
    }
    out.flush()?;

    if !outcome.failures.is_empty() {
        for (decoy, err) in &outcome.failures {
            warn!(decoy = %decoy, %err, "Decoy could not be scored.");
        }
        return Err(anyhow::anyhow!(
            "{} of {} decoys failed to score",
            outcome.failures.len(),
            decoys.len()
        )
        .into());
    }

    info!(scored = outcome.scores.len(), "Score run complete.");
    Ok(())
}
