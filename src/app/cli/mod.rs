//! CLI Adapter.

mod select;

use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use crate::app::commands::{OutputTarget, catalog, generate, inspect, restore, scan};
use crate::app::{DefaultContext, default_context};
use crate::domain::{AppError, SnapshotFormat, ToolCategory};

/// Environment variable holding a `tracing` filter directive.
const LOG_ENV: &str = "BASELINE_LOG";

#[derive(Parser)]
#[command(name = "baseline")]
#[command(version)]
#[command(
    about = "Generate macOS setup scripts from tool selections and machine snapshots",
    long_about = None
)]
struct Cli {
    /// Log diagnostic detail to stderr
    #[arg(short, long, global = true)]
    verbose: bool,
    /// Generator config file (defaults to ./baseline.toml when present)
    #[arg(long, global = true, value_name = "FILE")]
    config: Option<PathBuf>,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate an installer script from a selection file
    #[clap(visible_alias = "g")]
    Generate {
        /// Selection file (JSON, or YAML by extension)
        selection: PathBuf,
        /// Output file, or - for stdout
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,
    },
    /// Generate an installer script from a scanned snapshot
    #[clap(visible_alias = "r")]
    Restore {
        /// Snapshot file, or - for stdin
        snapshot: PathBuf,
        /// Output file, or - for stdout
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,
        /// Fail on unreadable snapshots instead of restoring what remains
        #[arg(long)]
        strict: bool,
    },
    /// Write the script that scans a Mac into a snapshot
    #[clap(visible_alias = "sc")]
    Scan {
        /// Output file, or - for stdout
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,
    },
    /// Validate a snapshot and summarize what it would restore
    #[clap(visible_alias = "i")]
    Inspect {
        /// Snapshot file, or - for stdin
        snapshot: PathBuf,
    },
    /// List available tools
    #[clap(visible_alias = "ls")]
    Catalog {
        /// Only list one category (applications, package-managers, devops, cli-tools)
        #[arg(long, value_parser = parse_category)]
        category: Option<ToolCategory>,
        /// Show detailed info for a specific tool
        #[arg(long, value_name = "ID")]
        detail: Option<String>,
    },
    /// Build a selection file from catalog tools
    #[clap(visible_alias = "s")]
    Select {
        /// Tool id to include (repeatable); prompts when omitted
        #[arg(short, long = "tool", value_name = "ID")]
        tools: Vec<String>,
        /// Runtime version pin such as node=20 (repeatable)
        #[arg(long = "pin", value_name = "LANG=VERSION")]
        pins: Vec<String>,
        /// Selection file to write
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,
    },
}

fn parse_category(value: &str) -> Result<ToolCategory, String> {
    ToolCategory::from_name(value).ok_or_else(|| {
        let names: Vec<&str> = ToolCategory::ALL.iter().map(|c| c.as_str()).collect();
        format!("unknown category '{}' (expected one of: {})", value, names.join(", "))
    })
}

/// Entry point for the CLI.
pub fn run() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let result = dispatch(cli.command, cli.config.as_deref());

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn init_logging(verbose: bool) {
    let fallback = if verbose { "baseline=debug" } else { "warn" };
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(fallback));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .without_time()
        .init();
}

fn dispatch(command: Commands, config: Option<&Path>) -> Result<(), AppError> {
    match command {
        Commands::Generate { selection, output } => {
            let ctx = default_context(config)?;
            run_generate(&ctx, &selection, output)
        }
        Commands::Restore { snapshot, output, strict } => {
            let ctx = default_context(config)?;
            run_restore(&ctx, &snapshot, output, strict)
        }
        Commands::Scan { output } => {
            let ctx = default_context(config)?;
            run_scan(&ctx, output)
        }
        Commands::Inspect { snapshot } => run_inspect(&snapshot),
        Commands::Catalog { category, detail } => {
            let ctx = default_context(config)?;
            run_catalog(&ctx, category, detail)
        }
        Commands::Select { tools, pins, output } => {
            let ctx = default_context(config)?;
            select::run_select(&ctx, tools, pins, output)
        }
    }
}

fn run_generate(
    ctx: &DefaultContext,
    selection: &Path,
    output: Option<PathBuf>,
) -> Result<(), AppError> {
    let target = OutputTarget::from_arg(output, generate::DEFAULT_OUTPUT);
    let outcome = generate::execute(ctx, selection, target)?;
    if outcome.output.is_stdout() {
        return Ok(());
    }

    println!(
        "✅ Generated {} ({} tool(s), {} custom script(s))",
        outcome.output, outcome.tools, outcome.custom_scripts
    );
    if !outcome.unknown_tools.is_empty() {
        println!("⚠️  Not in the catalog, using recorded commands:");
        for id in &outcome.unknown_tools {
            println!("  • {}", id);
        }
    }
    println!("  Run it with: bash {}", outcome.output);
    Ok(())
}

fn run_restore(
    ctx: &DefaultContext,
    snapshot: &Path,
    output: Option<PathBuf>,
    strict: bool,
) -> Result<(), AppError> {
    let target = OutputTarget::from_arg(output, restore::DEFAULT_OUTPUT);
    let options = restore::RestoreOptions { output: target, strict };
    let outcome = restore::execute(ctx, snapshot, options)?;
    if let Some(warning) = &outcome.warning {
        eprintln!("⚠️  {}", warning);
    }
    if outcome.output.is_stdout() {
        return Ok(());
    }

    let source = match outcome.format {
        SnapshotFormat::Json => outcome.hostname.clone(),
        SnapshotFormat::LegacyText => "legacy text scan".to_string(),
    };
    println!("✅ Generated {} from {}", outcome.output, source);
    println!("  {} formula(e), {} cask(s)", outcome.formulae, outcome.casks);
    Ok(())
}

fn run_scan(ctx: &DefaultContext, output: Option<PathBuf>) -> Result<(), AppError> {
    let target = OutputTarget::from_arg(output, scan::DEFAULT_OUTPUT);
    scan::execute(ctx, target.clone())?;
    if target.is_stdout() {
        return Ok(());
    }

    println!("✅ Generated {}", target);
    println!("  Run it on the source Mac: bash {}", target);
    println!("  It writes {} for `baseline restore`", crate::domain::generate::SNAPSHOT_FILE);
    Ok(())
}

fn run_inspect(snapshot: &Path) -> Result<(), AppError> {
    let report = inspect::execute(snapshot)?;

    match report.format {
        SnapshotFormat::Json => {
            println!("Host:      {}", report.hostname);
            println!("macOS:     {} ({})", report.os_version, report.arch);
            if let Some(scanned_at) = &report.scanned_at {
                println!("Scanned:   {}", scanned_at);
            }
        }
        SnapshotFormat::LegacyText => println!("Source:    legacy text scan"),
    }
    println!();
    let rows = [
        ("Homebrew taps", report.taps),
        ("Homebrew formulae", report.formulae),
        ("Homebrew casks", report.casks),
        ("Applications found", report.applications),
        ("VS Code extensions", report.vscode_extensions),
        ("Node.js packages", report.node_packages),
        ("Python packages", report.pip_packages),
        ("SSH key files", report.ssh_keys),
    ];
    for (label, count) in rows {
        println!("  {:<22} {}", label, count);
    }
    if !report.shell_configs.is_empty() {
        println!("  {:<22} {}", "Shell configs", report.shell_configs.join(", "));
    }
    Ok(())
}

fn run_catalog(
    ctx: &DefaultContext,
    category: Option<ToolCategory>,
    detail: Option<String>,
) -> Result<(), AppError> {
    if let Some(id) = detail {
        let tool = catalog::detail(ctx.catalog(), &id)?;
        println!("{} ({})", tool.name, tool.id);
        if !tool.description.is_empty() {
            println!("{}", tool.description);
        }
        println!("\nCategory: {}", tool.category.display_name());
        println!("Install:  {}", tool.install_command);
        if let Some(homepage) = &tool.homepage {
            println!("Homepage: {}", homepage);
        }
        return Ok(());
    }

    let tools = catalog::list(ctx.catalog(), category);
    for category in ToolCategory::ALL {
        let rows: Vec<_> = tools.iter().filter(|t| t.category == category).collect();
        if rows.is_empty() {
            continue;
        }
        println!("{}:", category.display_name());
        for tool in rows {
            let mark = if tool.dev_pick {
                " ★"
            } else if tool.popular {
                " •"
            } else {
                ""
            };
            println!("  {} - {}{}", tool.id, tool.description, mark);
        }
    }
    Ok(())
}
