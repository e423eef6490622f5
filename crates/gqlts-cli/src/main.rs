//! gqlts command line interface.
//!
//! Reads a GraphQL schema and writes a TypeScript client library next to
//! it. Every flag maps onto [`CompilerConfig`]; the interesting work happens
//! in `gqlts-compiler`.

use std::path::PathBuf;
use std::time::Instant;

use clap::builder::{NonEmptyStringValueParser, TypedValueParser};
use clap::{ArgAction, Parser};
use tracing_subscriber::EnvFilter;

use gqlts_compiler::config::decode_header;
use gqlts_compiler::{
    Compiler, CompilerConfig, CyclePolicy, ErrorMode, GenerationContext, SelectionGuard,
};

mod ui;

#[derive(Parser, Debug)]
#[command(name = "gqlts")]
#[command(about = "Generates a typed TypeScript client library from a GraphQL schema", version)]
struct Cli {
    /// Path to GraphQL schema file
    #[arg(long, value_name = "PATH", value_parser = NonEmptyStringValueParser::new().map(PathBuf::from))]
    schema: PathBuf,

    /// Path to output TypeScript file (created or truncated)
    #[arg(long, value_name = "PATH", value_parser = NonEmptyStringValueParser::new().map(PathBuf::from))]
    output: PathBuf,

    /// Header code inserted at the top of the output; `\n` becomes a newline
    #[arg(long, value_name = "TEXT", value_parser = NonEmptyStringValueParser::new())]
    header: String,

    /// Name of the client object (e.g. apolloClient or client)
    #[arg(long, value_name = "NAME", value_parser = NonEmptyStringValueParser::new())]
    client: String,

    /// Return errors as `[value, error]` tuples; any non-empty value enables it
    #[arg(long, value_name = "VALUE")]
    error: Option<String>,

    /// Maximum nesting of selection sets below a root field
    #[arg(long, value_name = "N", value_parser = clap::value_parser!(u64).range(1..))]
    max_depth: Option<u64>,

    /// What to do with fields that re-enter a type being expanded: truncate or reject
    #[arg(long, value_name = "POLICY", default_value = "truncate")]
    on_cycle: CyclePolicy,

    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,

    /// Only report errors
    #[arg(short, long)]
    quiet: bool,
}

impl Cli {
    fn compiler_config(&self) -> CompilerConfig {
        let selection = SelectionGuard {
            max_depth: self.max_depth.map(|depth| depth as usize),
            on_cycle: self.on_cycle,
        };

        let context = GenerationContext::new(self.client.clone(), decode_header(&self.header))
            .with_error_mode(ErrorMode::from_flag(self.error.as_deref()))
            .with_selection_guard(selection);

        CompilerConfig {
            schema_path: self.schema.clone(),
            output_path: self.output.clone(),
            context,
        }
    }
}

fn main() -> miette::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let config = cli.compiler_config();
    tracing::debug!(?config, "resolved configuration");

    generate(config, cli.quiet)
}

/// Logs go to stderr so they never mix with anything piped from stdout.
fn init_tracing(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("gqlts={level},gqlts_compiler={level}")));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

/// Runs the compiler and prints a summary.
fn generate(config: CompilerConfig, quiet: bool) -> miette::Result<()> {
    let start = Instant::now();
    let spinner = (!quiet).then(|| ui::spinner("Generating client library..."));

    let output = config.output_path.clone();
    let mode = config.context.error_mode;
    let result = Compiler::new(config).compile();

    if let Some(spinner) = spinner {
        spinner.finish_and_clear();
    }

    let result = match result {
        Ok(result) => result,
        Err(e) => {
            ui::error_header(&e);
            return Err(e.into());
        }
    };

    if quiet {
        return Ok(());
    }

    ui::success(&format!("Wrote {}", output.display()));
    println!();

    ui::box_header("GENERATED");
    ui::box_line("");
    ui::box_line(&ui::summary_line("interfaces", result.interfaces));
    ui::box_line(&ui::summary_line("queries", result.queries));
    ui::box_line(&ui::summary_line("mutations", result.mutations));
    ui::box_line("");
    ui::box_footer();
    println!();

    let mode_label = match mode {
        ErrorMode::Throw => "throwing functions",
        ErrorMode::Tuple => "[value, error] functions",
    };
    ui::dim(&format!("{} {}", ui::symbols::DOT, mode_label));
    ui::timing("Done", start.elapsed().as_millis());
    println!();

    Ok(())
}
