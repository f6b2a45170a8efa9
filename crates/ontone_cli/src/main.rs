//! ontone - Sass/CSS color token generator
//!
//! Reads a list of named theme colors, derives accessible on-colors, and
//! writes a stylesheet plus an optional contrast compatibility report.

use anyhow::Result;
use clap::{ArgAction, Args, Parser, Subcommand};
use ontone_cli::config::{ConfigOverrides, GeneratorConfig};
use ontone_cli::generate::{generate, GenerateOutcome};
use ontone_cli::init::create_sample_tokens;
use ontone_core::contrast_ratio;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

/// Exit status of `generate --check` when an explicit on-color fails contrast
const EXIT_CONTRAST_WARNINGS: u8 = 2;

#[derive(Parser)]
#[command(name = "ontone", version, about, long_about = None)]
#[command(args_conflicts_with_subcommands = true)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Generate options when no subcommand is given
    #[command(flatten)]
    generate: GenerateArgs,

    /// More logging (-v info, -vv debug). RUST_LOG takes precedence.
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate the token stylesheet and compatibility report (default)
    Generate(GenerateArgs),

    /// Create a sample color tokens file
    Init {
        /// Where to write it (.toml or .json)
        #[arg(default_value = "color-tokens.toml")]
        path: PathBuf,

        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },
}

#[derive(Args, Clone, Debug, Default)]
struct GenerateArgs {
    #[command(flatten)]
    overrides: ConfigOverrides,

    /// Validate and report contrast failures without writing files
    #[arg(long)]
    check: bool,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let result = match cli.command {
        Some(Commands::Init { path, force }) => cmd_init(path, force),
        Some(Commands::Generate(args)) => cmd_generate(&args),
        None => cmd_generate(&cli.generate),
    };

    match result {
        Ok(code) => code,
        Err(err) => {
            eprintln!("error: {err:#}");
            ExitCode::FAILURE
        }
    }
}

fn init_tracing(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn cmd_init(path: PathBuf, force: bool) -> Result<ExitCode> {
    create_sample_tokens(&path, force)?;
    println!("Created {}", path.display());
    Ok(ExitCode::SUCCESS)
}

fn cmd_generate(args: &GenerateArgs) -> Result<ExitCode> {
    let base_dir = std::env::current_dir()?;
    let config = GeneratorConfig::load(&base_dir, &args.overrides)?;
    tracing::debug!(?config, "effective configuration");

    let outcome = generate(&config, &base_dir, args.check)?;

    if args.check {
        print_contrast_failures(&outcome, &config.token_prefix);
        if outcome.warning_count() > 0 {
            return Ok(ExitCode::from(EXIT_CONTRAST_WARNINGS));
        }
        println!("{} tokens, no contrast failures", outcome.tokens.len());
    } else {
        for path in &outcome.written {
            println!("Wrote {}", path.display());
        }
    }

    Ok(ExitCode::SUCCESS)
}

fn print_contrast_failures(outcome: &GenerateOutcome, prefix: &str) {
    for token in outcome.tokens.warnings() {
        let Some(base_name) = &token.pair_of else {
            continue;
        };
        let base = outcome.tokens.get(&format!("{prefix}{base_name}"));
        match base {
            Some(base) => println!(
                "{}: {} on {} is {:.2}:1",
                token.name,
                token.color,
                base.color,
                contrast_ratio(token.color, base.color)
            ),
            None => println!("{}: fails contrast against {base_name}", token.name),
        }
    }
}
