//! CLI argument parsing for pdfdeck.
//!
//! This module defines the command-line interface structure using `clap`.
//! It is also compiled by the build script to render the man page, so it
//! only depends on `clap` and the `pdfdeck` library.

use clap::{ArgMatches, Parser};
use std::path::PathBuf;
use std::str::FromStr;

use pdfdeck::config::{Config, DEFAULT_PREVIEW_SCALE, OverwriteMode};
use pdfdeck::error::{DeckError, Result};

/// Assemble PDF files into an ordered deck and merge them.
///
/// Files are added to the deck in the order given. Non-PDF files are
/// skipped with a warning. The deck can be rearranged with --move and
/// --remove before it is merged into a single PDF.
#[derive(Parser, Debug)]
#[command(name = "pdfdeck")]
#[command(version)]
#[command(about = "Assemble PDF files into an ordered deck and merge them", long_about = None)]
#[command(author)]
#[command(arg_required_else_help = true)]
pub struct Cli {
    /// PDF files or glob patterns to add to the deck (in order)
    ///
    /// Examples:
    ///   pdfdeck cover.pdf chapter*.pdf
    ///   pdfdeck a.pdf b.pdf --move 1:0 -o out/
    #[arg(value_name = "FILE")]
    pub inputs: Vec<String>,

    /// Directory the merged PDF is written to, as merged-pdfs.pdf
    #[arg(short, long = "output-dir", value_name = "DIR", default_value = ".")]
    pub output_dir: PathBuf,

    /// Move the document at FROM to position TO (0-based)
    ///
    /// May be repeated. Moves and removals run in the order given, each
    /// seeing the positions left by the previous one.
    #[arg(long = "move", value_name = "FROM:TO", value_parser = parse_move)]
    pub moves: Vec<Move>,

    /// Remove the document at position POS (0-based)
    ///
    /// May be repeated.
    #[arg(long = "remove", value_name = "POS")]
    pub removals: Vec<usize>,

    /// Print the deck and exit without merging
    #[arg(long)]
    pub show: bool,

    /// Print the deck and merge statistics as JSON
    #[arg(long)]
    pub json: bool,

    /// Dry run - merge in memory and report without writing the output
    #[arg(short = 'n', long)]
    pub dry_run: bool,

    /// Verbose output - show details and debug logging
    #[arg(short, long)]
    pub verbose: bool,

    /// Force overwrite of existing output file without confirmation
    #[arg(short, long)]
    pub force: bool,

    /// Never overwrite existing output file
    #[arg(long, conflicts_with = "force")]
    pub no_clobber: bool,

    /// Suppress all non-error output
    #[arg(short, long, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Write the merged PDF without compressing its streams
    #[arg(long)]
    pub no_compress: bool,

    /// Scale of the first-page previews
    #[arg(long, value_name = "SCALE", default_value_t = DEFAULT_PREVIEW_SCALE)]
    pub preview_scale: f32,
}

/// A `--move FROM:TO` argument.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Move {
    /// Source position.
    pub from: usize,
    /// Destination position.
    pub to: usize,
}

impl FromStr for Move {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        let (from, to) = s
            .split_once(':')
            .ok_or_else(|| format!("expected FROM:TO, got '{s}'"))?;
        let parse = |part: &str| {
            part.trim()
                .parse::<usize>()
                .map_err(|_| format!("'{part}' is not a position"))
        };
        Ok(Self {
            from: parse(from)?,
            to: parse(to)?,
        })
    }
}

fn parse_move(s: &str) -> std::result::Result<Move, String> {
    s.parse()
}

/// One deck edit requested on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Edit {
    /// Reorder.
    Move(Move),
    /// Remove the document at a position.
    Remove(usize),
}

impl Cli {
    /// Convert CLI arguments into a validated Config.
    ///
    /// # Errors
    ///
    /// Returns an error if the resulting configuration fails validation.
    pub fn to_config(&self) -> Result<Config> {
        let overwrite_mode = if self.force {
            OverwriteMode::Force
        } else if self.no_clobber {
            OverwriteMode::NoClobber
        } else {
            OverwriteMode::Prompt
        };

        let config = Config {
            output_dir: self.output_dir.clone(),
            preview_scale: self.preview_scale,
            compress: !self.no_compress,
            overwrite_mode,
            verbose: self.verbose,
            quiet: self.quiet,
            dry_run: self.dry_run,
            ..Config::default()
        };

        config.validate().map_err(|e| {
            DeckError::invalid_config(format!("Configuration validation failed: {e}"))
        })?;

        Ok(config)
    }

    /// Validate CLI arguments before processing.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - `--show` is combined with `--dry-run`
    /// - An input pattern is blank
    pub fn validate(&self) -> Result<()> {
        if self.show && self.dry_run {
            return Err(DeckError::invalid_config(
                "--show lists the deck without merging; it cannot be combined with --dry-run",
            ));
        }

        if self.inputs.iter().any(|input| input.trim().is_empty()) {
            return Err(DeckError::invalid_config("Input patterns cannot be empty"));
        }

        Ok(())
    }

    /// Moves and removals in command-line order.
    ///
    /// `matches` must be the matches this `Cli` was built from; their value
    /// indices restore the interleaving of the two flags.
    pub fn edits(&self, matches: &ArgMatches) -> Vec<Edit> {
        let indices = |id: &str| -> Vec<usize> {
            matches
                .indices_of(id)
                .map(|found| found.collect())
                .unwrap_or_default()
        };

        let mut edits: Vec<(usize, Edit)> = indices("moves")
            .into_iter()
            .zip(self.moves.iter().map(|&m| Edit::Move(m)))
            .chain(
                indices("removals")
                    .into_iter()
                    .zip(self.removals.iter().map(|&p| Edit::Remove(p))),
            )
            .collect();

        edits.sort_by_key(|&(index, _)| index);
        edits.into_iter().map(|(_, edit)| edit).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::{CommandFactory, FromArgMatches};
    use rstest::rstest;

    fn parse(args: &[&str]) -> (Cli, ArgMatches) {
        let matches = Cli::command()
            .try_get_matches_from(std::iter::once("pdfdeck").chain(args.iter().copied()))
            .unwrap();
        let cli = Cli::from_arg_matches(&matches).unwrap();
        (cli, matches)
    }

    #[test]
    fn test_command_is_well_formed() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_basic_cli_to_config() {
        let (cli, _) = parse(&["a.pdf", "b.pdf", "-o", "out"]);
        let config = cli.to_config().unwrap();

        assert_eq!(cli.inputs, ["a.pdf", "b.pdf"]);
        assert_eq!(config.output_path(), PathBuf::from("out/merged-pdfs.pdf"));
        assert!(config.compress);
        assert_eq!(config.overwrite_mode, OverwriteMode::Prompt);
    }

    #[rstest]
    #[case(&["a.pdf"], OverwriteMode::Prompt)]
    #[case(&["a.pdf", "--force"], OverwriteMode::Force)]
    #[case(&["a.pdf", "--no-clobber"], OverwriteMode::NoClobber)]
    fn test_overwrite_modes(#[case] args: &[&str], #[case] expected: OverwriteMode) {
        let (cli, _) = parse(args);
        assert_eq!(cli.to_config().unwrap().overwrite_mode, expected);
    }

    #[test]
    fn test_force_conflicts_with_no_clobber() {
        let result = Cli::command().try_get_matches_from(["pdfdeck", "a.pdf", "-f", "--no-clobber"]);
        assert!(result.is_err());
    }

    #[rstest]
    #[case("2:0", Move { from: 2, to: 0 })]
    #[case(" 1 : 3 ", Move { from: 1, to: 3 })]
    fn test_parse_move(#[case] input: &str, #[case] expected: Move) {
        assert_eq!(input.parse::<Move>().unwrap(), expected);
    }

    #[rstest]
    #[case("2")]
    #[case("a:1")]
    #[case("1:-1")]
    fn test_parse_move_rejects(#[case] input: &str) {
        assert!(input.parse::<Move>().is_err());
    }

    #[test]
    fn test_edits_keep_command_line_order() {
        let (cli, matches) = parse(&[
            "a.pdf", "b.pdf", "c.pdf", "--remove", "1", "--move", "1:0", "--remove", "0",
        ]);

        assert_eq!(
            cli.edits(&matches),
            vec![
                Edit::Remove(1),
                Edit::Move(Move { from: 1, to: 0 }),
                Edit::Remove(0),
            ]
        );
    }

    #[test]
    fn test_output_name_is_fixed() {
        let (cli, _) = parse(&["a.pdf", "-o", "out"]);
        assert_eq!(cli.to_config().unwrap().output_name, "merged-pdfs.pdf");

        let result = Cli::command().try_get_matches_from(["pdfdeck", "a.pdf", "--name", "x.pdf"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_invalid_preview_scale_rejected() {
        let (cli, _) = parse(&["a.pdf", "--preview-scale", "0"]);
        assert!(matches!(
            cli.to_config().unwrap_err(),
            DeckError::InvalidConfig { .. }
        ));
    }

    #[test]
    fn test_no_compress() {
        let (cli, _) = parse(&["a.pdf", "--no-compress"]);
        assert!(!cli.to_config().unwrap().compress);
    }

    #[test]
    fn test_show_with_dry_run_rejected() {
        let (cli, _) = parse(&["a.pdf", "--show", "-n"]);
        assert!(cli.validate().is_err());
    }
}
