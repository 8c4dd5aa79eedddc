//! pdfdeck - Assemble PDF files into an ordered deck and merge them.

mod cli;

use clap::{CommandFactory, FromArgMatches};
use std::process;
use tracing_subscriber::EnvFilter;

use crate::cli::{Cli, Edit};
use pdfdeck::config::{Config, OverwriteMode};
use pdfdeck::error::DeckError;
use pdfdeck::io::collect_candidates;
use pdfdeck::output::{
    OutputFormatter, ProgressBar, ProgressStyle, display_ingest_outcome, merge_summary,
};
use pdfdeck::Deck;

/// Environment variable holding the log filter.
const LOG_ENV: &str = "PDFDECK_LOG";

#[tokio::main]
async fn main() {
    let matches = Cli::command().get_matches();
    let cli = Cli::from_arg_matches(&matches).unwrap_or_else(|err| err.exit());
    let edits = cli.edits(&matches);

    init_tracing(cli.verbose);

    if let Err(err) = run(cli, edits).await {
        eprintln!("{}", error_message(&err));
        process::exit(err.exit_code());
    }
}

fn init_tracing(verbose: bool) {
    let default = if verbose { "pdfdeck=debug" } else { "warn" };
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(default));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

/// Main application logic.
async fn run(cli: Cli, edits: Vec<Edit>) -> Result<(), DeckError> {
    cli.validate()?;
    let config = cli.to_config()?;
    tracing::debug!(?config, edits = edits.len(), "starting");
    let formatter = OutputFormatter::from_config(&config);
    let json = cli.json;

    let candidates = collect_candidates(&cli.inputs)?;
    formatter.debug(&format!("Found {} candidate file(s)", candidates.len()));

    let mut deck = Deck::new(config.clone());
    let outcome = deck.ingest(candidates).await;
    display_ingest_outcome(&formatter, &outcome);

    apply_edits(&mut deck, &edits, &formatter).await?;

    if cli.show {
        if json {
            print_json(&serde_json::json!({ "deck": deck.grid() }))?;
        } else {
            formatter.grid(deck.grid(), deck.merge_button());
        }
        return Ok(());
    }

    if !json {
        formatter.grid(deck.grid(), deck.merge_button());
    }

    if config.dry_run {
        let merged = deck.merge().await?;
        if json {
            print_json(&serde_json::json!({
                "deck": deck.grid(),
                "merge": merged.statistics,
                "output": null,
            }))?;
        } else {
            formatter.success(&merge_summary(&merged.statistics, None));
            formatter.info(&format!("  Output would be: {}", config.output_path().display()));
            formatter.info("  Run without --dry-run to write the merged PDF");
        }
        return Ok(());
    }

    if handle_output_overwrite(&config, &formatter).await? {
        deck.allow_overwrite();
    }

    let mut progress = if formatter.should_print() && !json {
        ProgressBar::new(deck.collection().count(), ProgressStyle::Bar)
    } else {
        ProgressBar::disabled()
    };
    progress.set_message("Merging");

    let result = deck
        .merge_and_save_with_progress(|step| progress.observe(step))
        .await;
    match &result {
        Ok(_) => progress.finish(),
        Err(_) => progress.clear(),
    }
    let (stats, write) = result?;

    if json {
        print_json(&serde_json::json!({
            "deck": deck.grid(),
            "merge": stats,
            "output": write.output_path,
        }))?;
    } else {
        formatter.success(&merge_summary(&stats, Some(&write)));
        formatter.detail("Input size", &stats.format_input_size());
        formatter.detail("Output size", &write.format_file_size());
        formatter.detail(
            "Write time",
            &format!("{:.2}s", write.write_time.as_secs_f64()),
        );
    }

    Ok(())
}

/// Apply moves and removals in order. Removal positions are resolved to
/// identities at the moment each removal runs.
async fn apply_edits(
    deck: &mut Deck,
    edits: &[Edit],
    formatter: &OutputFormatter,
) -> Result<(), DeckError> {
    for edit in edits {
        match *edit {
            Edit::Move(step) => {
                if deck.reorder(step.from, step.to).await? {
                    formatter.debug(&format!("Moved {} to {}", step.from, step.to));
                }
            }
            Edit::Remove(position) => {
                let entry = deck
                    .collection()
                    .at(position)
                    .ok_or(DeckError::InvalidPosition {
                        position,
                        len: deck.collection().count(),
                    })?;
                let (id, name) = (entry.id(), entry.name().to_string());
                deck.remove(id).await;
                formatter.debug(&format!("Removed {name}"));
            }
        }
    }
    Ok(())
}

/// Decide whether an existing artifact may be replaced.
///
/// Returns `true` when the user agreed to overwrite at the prompt.
async fn handle_output_overwrite(
    config: &Config,
    formatter: &OutputFormatter,
) -> Result<bool, DeckError> {
    let output = config.output_path();
    if tokio::fs::metadata(&output).await.is_err() {
        return Ok(false);
    }

    match config.overwrite_mode {
        OverwriteMode::Force => Ok(false),
        OverwriteMode::NoClobber => Err(DeckError::output_exists(output)),
        OverwriteMode::Prompt => {
            if formatter.is_quiet() {
                return Err(DeckError::output_exists(output));
            }

            formatter.warning(&format!("Output file already exists: {}", output.display()));

            use std::io::{self, Write};
            print!("Overwrite? [y/N]: ");
            io::stdout().flush().ok();

            let mut response = String::new();
            io::stdin()
                .read_line(&mut response)
                .map_err(|err| DeckError::other(format!("Failed to read input: {err}")))?;

            match response.trim().to_lowercase().as_str() {
                "y" | "yes" => Ok(true),
                _ => Err(DeckError::Cancelled),
            }
        }
    }
}

/// Text printed for an error that ends the run.
///
/// Validation errors carry a usage hint; errors never meant for the user
/// are marked as internal.
fn error_message(err: &DeckError) -> String {
    if !err.is_user_facing() {
        return format!("Internal error: {err}");
    }

    let mut message = format!("Error: {err}");
    if err.is_validation() {
        message.push_str("\n  Run 'pdfdeck --help' for usage");
    }
    message
}

fn print_json(value: &serde_json::Value) -> Result<(), DeckError> {
    let text = serde_json::to_string_pretty(value)
        .map_err(|err| DeckError::other(format!("Failed to encode JSON: {err}")))?;
    println!("{text}");
    Ok(())
}
