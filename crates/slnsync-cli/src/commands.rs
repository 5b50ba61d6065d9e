use std::io::Write;
use std::path::{Path, PathBuf};

use anyhow::Context;
use colored::Colorize;
use slnsync_diff::diff_solutions;
use slnsync_locate::{locate, SolutionPair};
use slnsync_model::{CommandProvider, SolutionProvider};
use slnsync_reconcile::{reconcile, DecisionSource, ReconcileReport};
use tracing::info;

use crate::cli::Cli;
use crate::config::SyncConfig;
use crate::terminal::{RawTerminal, TerminalDecisions};

/// What a sync run did.
#[derive(Debug)]
pub struct SyncSummary {
    pub pair: SolutionPair,
    pub report: ReconcileReport,
    /// Whether both files were written back.
    pub saved: bool,
}

pub async fn run_command(cli: Cli, config: &SyncConfig) -> anyhow::Result<()> {
    let provider = CommandProvider::new(&config.provider_program);
    let mut decisions = TerminalDecisions::new(std::io::stdout(), RawTerminal);
    let summary = sync(
        &cli.paths,
        &config.working_dir,
        &provider,
        &mut decisions,
        &mut std::io::stdout(),
    )
    .await?;
    info!(
        legacy = %summary.pair.legacy.display(),
        xml = %summary.pair.xml.display(),
        differences = summary.report.len(),
        saved = summary.saved,
        "sync finished"
    );
    Ok(())
}

/// Locate, load, reconcile, and persist one solution pair.
pub async fn sync<P, D, W>(
    paths: &[PathBuf],
    working_dir: &Path,
    provider: &P,
    decisions: &mut D,
    out: &mut W,
) -> anyhow::Result<SyncSummary>
where
    P: SolutionProvider + ?Sized,
    D: DecisionSource + ?Sized,
    W: Write,
{
    let pair = locate(paths, working_dir)?;
    info!(legacy = %pair.legacy.display(), xml = %pair.xml.display(), "syncing solution pair");

    let (legacy, xml) = tokio::join!(
        provider.open_legacy(&pair.legacy),
        provider.open_xml(&pair.xml)
    );
    let mut legacy =
        legacy.with_context(|| format!("failed to open {}", pair.legacy.display()))?;
    let mut xml = xml.with_context(|| format!("failed to open {}", pair.xml.display()))?;

    let diff = diff_solutions(&legacy, &xml);
    if diff.is_empty() {
        writeln!(
            out,
            "{} No differences between {} and {}",
            "✓".green().bold(),
            pair.legacy.display(),
            pair.xml.display()
        )?;
        return Ok(SyncSummary {
            pair,
            report: ReconcileReport::default(),
            saved: false,
        });
    }

    let report = reconcile(&mut legacy, &mut xml, &diff, decisions);
    writeln!(
        out,
        "{} added, {} removed, {} skipped",
        report.added().to_string().green(),
        report.removed().to_string().red(),
        report.skipped().to_string().dimmed()
    )?;

    provider
        .save_legacy(&pair.legacy, &legacy)
        .await
        .with_context(|| format!("failed to save {}", pair.legacy.display()))?;
    provider
        .save_xml(&pair.xml, &xml)
        .await
        .with_context(|| format!("failed to save {}", pair.xml.display()))?;
    writeln!(
        out,
        "{}",
        format!(
            "Synced solutions: {} {}",
            pair.legacy.display(),
            pair.xml.display()
        )
        .green()
    )?;

    Ok(SyncSummary {
        pair,
        report,
        saved: true,
    })
}
