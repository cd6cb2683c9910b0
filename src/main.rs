// SPDX-License-Identifier: BSD-3-Clause
// Copyright (c) 2025 William Bro-Jørgensen
// Copyright (c) 2020 Guillaume Fraux and contributors
//
// See LICENSE at the project root for full text.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{ArgAction, Args, Parser, Subcommand};
use log::{info, LevelFilter};
use xyztraj::transform::{self, DecimateOptions};
use xyztraj::{TrajError, Trajectory, WriteMode};

/// Reverse, combine and thin XYZ trajectories.
#[derive(Parser)]
#[command(name = "xyztraj", version, propagate_version = true)]
struct Cli {
    /// Report progress; repeat for more detail
    #[arg(short, long, global = true, action = ArgAction::Count)]
    verbose: u8,

    /// Only report errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    quiet: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Join two trajectories. The frames of SECOND are written before those of FIRST.
    Combine {
        /// Forward trajectory, written last (xyz)
        first: PathBuf,
        /// Already reversed backward trajectory, written first (xyz)
        second: PathBuf,
        /// Output path (xyz)
        output: PathBuf,
    },

    /// Keep every STRIDE-th frame of a trajectory.
    Cut(CutArgs),

    /// Write the frames of a trajectory in reverse order.
    Reverse {
        /// Input path (xyz)
        input: PathBuf,
        /// Output path (xyz)
        output: PathBuf,
    },
}

#[derive(Args)]
struct CutArgs {
    /// Input path (xyz)
    input: PathBuf,

    /// Output path (xyz). Defaults to `<stem>_per<stride>.xyz` next to the input.
    #[arg(short, long, value_name = "FILE")]
    output: Option<PathBuf>,

    /// Distance between two kept frames
    #[arg(short, long, value_name = "N", default_value_t = 1)]
    stride: usize,

    /// Number of frames to aim for; the stride becomes `frames / LENGTH`.
    ///
    /// Takes precedence over `--stride`.
    #[arg(short, long, value_name = "N")]
    length: Option<usize>,

    /// Do not append the last frame when the stride skips it.
    #[arg(long = "no-keep-last", default_value_t = true, action = ArgAction::SetFalse)]
    keep_last: bool,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logger(cli.verbose, cli.quiet);

    match run(cli.command) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn init_logger(verbose: u8, quiet: bool) {
    let level = if quiet {
        LevelFilter::Error
    } else {
        match verbose {
            0 => LevelFilter::Warn,
            1 => LevelFilter::Info,
            2 => LevelFilter::Debug,
            _ => LevelFilter::Trace,
        }
    };
    env_logger::Builder::new()
        .filter_level(level)
        .format_timestamp(None)
        .init();
}

fn run(command: Command) -> Result<(), TrajError> {
    match command {
        Command::Combine {
            first,
            second,
            output,
        } => {
            let first_original = Trajectory::open(&first)?;
            let second_original = Trajectory::open(&second)?;
            transform::concatenate(first_original, second_original)
                .write(&output, WriteMode::Overwrite)
        }
        Command::Cut(args) => {
            let trajectory = Trajectory::open(&args.input)?;
            let options = DecimateOptions {
                stride: args.stride,
                length: args.length,
                keep_last: args.keep_last,
            };
            let thinned = transform::decimate(&trajectory, &options)?;
            let output = args.output.unwrap_or_else(|| {
                transform::thinned_file_name(
                    &args.input,
                    options.effective_stride(trajectory.len()),
                )
            });
            info!("keeping {} of {} frames", thinned.len(), trajectory.len());
            thinned.write(&output, WriteMode::Overwrite)
        }
        Command::Reverse { input, output } => {
            transform::reverse(Trajectory::open(&input)?).write(&output, WriteMode::Overwrite)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use std::path::Path;
    use tempfile::tempdir;

    const WATER: &str = "./src/tests-data/xyz/water.xyz";

    fn parse(args: &[&str]) -> Cli {
        Cli::try_parse_from(args).unwrap()
    }

    fn comments(path: &Path) -> Vec<String> {
        Trajectory::open(path)
            .unwrap()
            .iter()
            .map(|f| f.comment.clone())
            .collect()
    }

    #[test]
    fn parse_cut() {
        let cli = parse(&["xyztraj", "cut", "data.xyz", "-o", "out.xyz", "-s", "10"]);
        let Command::Cut(args) = cli.command else {
            panic!("expected the cut command");
        };
        assert_eq!(args.input, Path::new("data.xyz"));
        assert_eq!(args.output.as_deref(), Some(Path::new("out.xyz")));
        assert_eq!(args.stride, 10);
        assert_eq!(args.length, None);
        assert!(args.keep_last);

        let cli = parse(&["xyztraj", "-q", "cut", "data.xyz", "--length", "5", "--no-keep-last"]);
        assert!(cli.quiet);
        let Command::Cut(args) = cli.command else {
            panic!("expected the cut command");
        };
        assert_eq!(args.output, None);
        assert_eq!(args.stride, 1);
        assert_eq!(args.length, Some(5));
        assert!(!args.keep_last);
    }

    #[test]
    fn parse_errors() {
        assert!(Cli::try_parse_from(["xyztraj", "reverse", "in.xyz"]).is_err());
        assert!(Cli::try_parse_from(["xyztraj", "cut", "in.xyz", "-s", "-2"]).is_err());
        assert!(Cli::try_parse_from(["xyztraj", "combine", "a.xyz", "b.xyz"]).is_err());
        assert!(Cli::try_parse_from(["xyztraj", "-v", "-q", "reverse", "a", "b"]).is_err());
    }

    #[test]
    fn reverse_file() {
        let dir = tempdir().unwrap();
        let output = dir.path().join("reversed.xyz");

        let cli = parse(&["xyztraj", "reverse", WATER, output.to_str().unwrap()]);
        run(cli.command).unwrap();

        let comments = comments(&output);
        assert_eq!(comments.len(), 10);
        assert_eq!(comments[0], "H2O-9 step 9");
        assert_eq!(comments[9], "H2O-0 step 0");
    }

    #[test]
    fn combine_files() {
        let dir = tempdir().unwrap();
        let backward = dir.path().join("backward.xyz");
        let output = dir.path().join("combined.xyz");
        fs::write(&backward, "3\nback\nO 0 0 0\nH 0 0 1\nH 0 1 0\n").unwrap();

        let cli = parse(&[
            "xyztraj",
            "combine",
            WATER,
            backward.to_str().unwrap(),
            output.to_str().unwrap(),
        ]);
        run(cli.command).unwrap();

        let comments = comments(&output);
        assert_eq!(comments.len(), 11);
        assert_eq!(comments[0], "back");
        assert_eq!(comments[1], "H2O-0 step 0");
        assert_eq!(comments[10], "H2O-9 step 9");
    }

    #[test]
    fn cut_file() {
        let dir = tempdir().unwrap();
        let output = dir.path().join("thin.xyz");

        let cli = parse(&[
            "xyztraj",
            "cut",
            WATER,
            "-o",
            output.to_str().unwrap(),
            "-s",
            "4",
        ]);
        run(cli.command).unwrap();

        assert_eq!(
            comments(&output),
            ["H2O-0 step 0", "H2O-4 step 4", "H2O-8 step 8", "H2O-9 step 9"]
        );
    }

    #[test]
    fn cut_file_default_name() {
        let dir = tempdir().unwrap();
        let input = dir.path().join("water.xyz");
        fs::copy(WATER, &input).unwrap();

        let cli = parse(&["xyztraj", "cut", input.to_str().unwrap(), "-l", "5"]);
        run(cli.command).unwrap();

        let output = dir.path().join("water_per002.xyz");
        assert_eq!(comments(&output).len(), 6);
    }

    #[test]
    fn failures_are_reported() {
        let dir = tempdir().unwrap();
        let output = dir.path().join("out.xyz");
        let out = output.to_str().unwrap();

        let cli = parse(&["xyztraj", "cut", WATER, "-o", out, "-s", "0"]);
        assert!(matches!(
            run(cli.command),
            Err(TrajError::InvalidStride { .. })
        ));

        let cli = parse(&["xyztraj", "cut", WATER, "-o", out, "-l", "11"]);
        assert!(matches!(
            run(cli.command),
            Err(TrajError::InvalidStride { .. })
        ));

        let cli = parse(&["xyztraj", "reverse", "./src/tests-data/xyz/missing.xyz", out]);
        assert!(matches!(run(cli.command), Err(TrajError::IoError(_))));

        let cli = parse(&["xyztraj", "reverse", "./src/tests-data/xyz/bad_record.xyz", out]);
        assert!(matches!(
            run(cli.command),
            Err(TrajError::MalformedRecord { .. })
        ));
        assert!(!output.exists());
    }
}
