use std::path::{Path, PathBuf};
use std::rc::Rc;

use clap::{Args, Parser, Subcommand};
use optgroup_core::{Container, OptionItem, SearchHit};
use optgroup_decl::Declaration;
use serde::Serialize;
use tracing::debug;

/// CLI-specific output format enum with clap argument parsing support.
#[derive(Debug, Clone, Copy, clap::ValueEnum)]
enum CliOutputFormat {
    Table,
    Json,
    Yaml,
}

#[derive(Debug, Parser)]
#[command(name = "optgroup")]
#[command(about = "Check, list and resolve declared command-line options")]
struct Cli {
    /// Increase log verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Validate, build and seal a declaration file.
    Check(CheckArgs),
    /// List every option reachable from a declaration, in traversal order.
    List(ListArgs),
    /// Look up an option by name, abbreviation or sticky token.
    Resolve(ResolveArgs),
}

#[derive(Debug, Args)]
struct CheckArgs {
    /// Declaration file (.yaml, .yml or .json).
    file: PathBuf,
}

#[derive(Debug, Args)]
struct ListArgs {
    /// Declaration file (.yaml, .yml or .json).
    file: PathBuf,
    /// Output format.
    #[arg(long, default_value = "table")]
    format: CliOutputFormat,
}

#[derive(Debug, Args)]
struct ResolveArgs {
    /// Declaration file (.yaml, .yml or .json).
    file: PathBuf,
    #[command(flatten)]
    target: ResolveTarget,
}

#[derive(Debug, Args)]
#[group(required = true, multiple = true)]
struct ResolveTarget {
    /// Exact short name, without the dash.
    #[arg(long)]
    short: Option<String>,
    /// Exact long name, without the dashes.
    #[arg(long)]
    long: Option<String>,
    /// Abbreviation of a long name.
    #[arg(long, conflicts_with_all = ["short", "long", "sticky"])]
    partial: Option<String>,
    /// Short name immediately followed by its argument (e.g. xVALUE).
    #[arg(long, conflicts_with_all = ["short", "long", "partial"])]
    sticky: Option<String>,
}

/// One listed option.
#[derive(Debug, Serialize)]
struct OptionRow {
    #[serde(skip_serializing_if = "Option::is_none")]
    short: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    long: Option<String>,
    takes_argument: bool,
}

impl OptionRow {
    fn from_option(option: &Rc<dyn OptionItem>) -> Self {
        Self {
            short: option.short_name().map(String::from),
            long: option.long_name().map(String::from),
            takes_argument: option.takes_argument(),
        }
    }

    fn display_names(&self) -> String {
        let short = self.short.as_deref().map(|s| format!("-{s}"));
        let long = self.long.as_deref().map(|l| format!("--{l}"));
        match (short, long) {
            (Some(short), Some(long)) => format!("{short}, {long}"),
            (Some(short), None) => short,
            (None, Some(long)) => format!("    {long}"),
            (None, None) => String::new(),
        }
    }
}

fn main() {
    let cli = Cli::parse();
    setup_logging(cli.verbose);

    let result = match cli.command {
        Command::Check(args) => run_check(args),
        Command::List(args) => run_list(args),
        Command::Resolve(args) => run_resolve(args),
    };

    match result {
        Ok(true) => {}
        Ok(false) => std::process::exit(1),
        Err(err) => {
            eprintln!("error: {err}");
            std::process::exit(2);
        }
    }
}

fn setup_logging(verbosity: u8) {
    use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

    let level = match verbosity {
        0 => tracing::Level::WARN,
        1 => tracing::Level::INFO,
        2 => tracing::Level::DEBUG,
        _ => tracing::Level::TRACE,
    };

    let filter = tracing_subscriber::EnvFilter::from_default_env().add_directive(level.into());

    let fmt_layer = tracing_subscriber::fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_line_number(false);

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt_layer)
        .init();
}

fn load_root(file: &Path) -> Result<Container, String> {
    let decl = Declaration::load(file)
        .map_err(|err| format!("Failed to load '{}': {err}", file.display()))?;
    decl.build()
        .map_err(|err| format!("Failed to build '{}': {err}", file.display()))
}

fn run_check(args: CheckArgs) -> Result<bool, String> {
    let root = load_root(&args.file)?;
    println!(
        "Sealed '{}': {} option(s) reachable.",
        args.file.display(),
        root.options().len()
    );
    Ok(true)
}

fn run_list(args: ListArgs) -> Result<bool, String> {
    let root = load_root(&args.file)?;
    let rows: Vec<OptionRow> = root.options().iter().map(OptionRow::from_option).collect();
    print!("{}", format_rows(&rows, args.format)?);
    Ok(true)
}

fn run_resolve(args: ResolveArgs) -> Result<bool, String> {
    let root = load_root(&args.file)?;
    let ResolveTarget {
        short,
        long,
        partial,
        sticky,
    } = args.target;

    let (strategy, hit) = if let Some(namearg) = sticky {
        ("sticky", root.search_sticky_option(&namearg))
    } else if let Some(partial) = partial {
        ("abbreviation", root.search_option_by_abbreviation(&partial))
    } else {
        (
            "name",
            root.search_option_by_name(short.as_deref(), long.as_deref()),
        )
    };
    debug!(strategy, found = hit.is_some(), "Resolved option");

    match hit {
        Some(hit) => {
            println!("{}", format_hit(strategy, &hit));
            Ok(true)
        }
        None => {
            println!("no match");
            Ok(false)
        }
    }
}

fn format_hit(strategy: &str, hit: &SearchHit) -> String {
    let label = hit.option.label();
    match strategy {
        "sticky" => format!("{label}\targument={}", hit.name),
        "abbreviation" => format!("{label}\tcompleted={}", hit.name),
        _ => format!("{label}\tmatched={}", hit.name),
    }
}

fn format_rows(rows: &[OptionRow], format: CliOutputFormat) -> Result<String, String> {
    match format {
        CliOutputFormat::Json => serde_json::to_string_pretty(rows)
            .map(|raw| format!("{raw}\n"))
            .map_err(|err| format!("Failed to serialize options: {err}")),
        CliOutputFormat::Yaml => serde_yaml::to_string(rows)
            .map_err(|err| format!("Failed to serialize options: {err}")),
        CliOutputFormat::Table => {
            let mut out = String::new();
            for row in rows {
                let argument = if row.takes_argument { " ARG" } else { "" };
                out.push_str(&format!("{}{argument}\n", row.display_names()));
            }
            Ok(out)
        }
    }
}
