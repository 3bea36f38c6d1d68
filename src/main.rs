//! gift-ranking: the real-time rising gift ranking section in the terminal.

use anyhow::{Context, Result};
use clap::{Args, CommandFactory, Parser, Subcommand};
use clap_complete::{generate, Shell};
use gift_ranking::{
    cli::{self, RenderConfig, RenderFormat, ViewConfig},
    config::{self as app_config, AppConfig},
    tui::{set_theme, Theme, DEFAULT_RENDER_WIDTH},
    CategoryFilter, TargetFilter, ViewState,
};
use std::fs::File;
use std::io::{self, IsTerminal};
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use tracing_subscriber::{fmt::writer::BoxMakeWriter, layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "gift-ranking")]
#[command(version)]
#[command(about = "실시간 급상승 선물랭킹 - the gift ranking section in your terminal", long_about = None)]
#[command(after_help = "EXAMPLES:
    # Browse interactively
    gift-ranking view products.json

    # One frame for a given state
    gift-ranking render products.json --target women --expanded

    # The render tree as JSON, clicking product 3 first
    gift-ranking render products.json --format json --click 3

    # Read the catalog from stdin
    cat products.json | gift-ranking render -")]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Only log warnings and errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    quiet: bool,

    /// Path to configuration file
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Theme: dark, light, high-contrast (overrides saved preference and config)
    #[arg(long, global = true, env = "GIFT_RANKING_THEME")]
    theme: Option<String>,

    /// Write logs to this file (the interactive view otherwise discards them)
    #[arg(long, global = true)]
    log_file: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

// ============================================================================
// Command argument structs (extracted for readability)
// ============================================================================

/// Product catalog and the state to start from
#[derive(Args)]
struct StateArgs {
    /// Product catalog (JSON), or `-` for stdin
    products: PathBuf,

    /// Target audience tab: all, women, men, teens (or the Korean label)
    #[arg(short, long, default_value = "all")]
    target: TargetFilter,

    /// Category button: most-wanted, most-gifted, most-wished
    #[arg(short, long, default_value = "most-wanted")]
    category: CategoryFilter,

    /// Start with the list expanded
    #[arg(short, long)]
    expanded: bool,
}

impl StateArgs {
    fn state(&self) -> ViewState {
        ViewState::new()
            .with_target(self.target)
            .with_category(self.category)
            .with_expanded(self.expanded)
    }
}

/// Arguments for the `render` subcommand
#[derive(Args)]
struct RenderArgs {
    #[command(flatten)]
    state: StateArgs,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = RenderFormat::Text)]
    format: RenderFormat,

    /// Width of the text rendering in cells
    #[arg(short, long, default_value_t = DEFAULT_RENDER_WIDTH)]
    width: u16,

    /// Click the displayed product with this id before rendering (repeatable)
    #[arg(long = "click", value_name = "ID")]
    click: Vec<String>,
}

#[derive(Subcommand)]
enum Commands {
    /// Browse the ranking section interactively
    View(StateArgs),

    /// Render the section once and print it
    Render(RenderArgs),

    /// Configuration file management
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

#[derive(Subcommand)]
enum ConfigAction {
    /// Print current effective configuration (merged from defaults + file)
    Show,
    /// Print config file search paths and discovered config file
    Path,
    /// Generate an example .gift-ranking.yaml in the current directory
    Init,
    /// Print an example configuration
    Example {
        /// Include every option with comments
        #[arg(long)]
        full: bool,
    },
    /// Generate JSON Schema for the config file format
    Schema {
        /// Write schema to file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let interactive = matches!(cli.command, Commands::View(_)) && io::stdout().is_terminal();
    init_logging(&cli, interactive)?;

    // Dispatch to command handlers
    match cli.command {
        Commands::View(args) => {
            let app = load_app_config(cli.config.as_deref(), cli.theme.as_deref())?;
            cli::run_view(ViewConfig {
                products_path: args.products.clone(),
                state: args.state(),
                app,
            })?;
            Ok(())
        }

        Commands::Render(args) => {
            let app = load_app_config(cli.config.as_deref(), cli.theme.as_deref())?;
            cli::run_render(RenderConfig {
                products_path: args.state.products.clone(),
                state: args.state.state(),
                click_ids: args.click,
                format: args.format,
                width: args.width,
                app,
            })?;
            Ok(())
        }

        Commands::Completions { shell } => {
            generate(shell, &mut Cli::command(), "gift-ranking", &mut io::stdout());
            Ok(())
        }

        Commands::Config { action } => run_config_action(action, cli.config.as_deref()),
    }
}

/// Register the tracing subscriber.
///
/// `-v` selects debug, `-q` warn, otherwise info; `RUST_LOG` wins over all
/// three. Logs go to stderr, or to `--log-file`. While the interactive view
/// owns the terminal, logs without a file are dropped.
fn init_logging(cli: &Cli, interactive: bool) -> Result<()> {
    let log_level = if cli.verbose {
        "debug"
    } else if cli.quiet {
        "warn"
    } else {
        "info"
    };

    let (writer, ansi) = match &cli.log_file {
        Some(path) => {
            let file = File::create(path)
                .with_context(|| format!("failed to create log file {}", path.display()))?;
            (BoxMakeWriter::new(Mutex::new(file)), false)
        }
        None if interactive => (BoxMakeWriter::new(io::sink), false),
        None => (BoxMakeWriter::new(io::stderr), io::stderr().is_terminal()),
    };

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| log_level.to_string()),
        ))
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_ansi(ansi)
                .with_writer(writer),
        )
        .init();
    Ok(())
}

/// Load, validate and apply the configuration, then pick the theme.
fn load_app_config(explicit: Option<&Path>, theme_flag: Option<&str>) -> Result<AppConfig> {
    let (mut config, loaded_from) = app_config::load_or_default(explicit);
    match &loaded_from {
        Some(path) => tracing::debug!("Loaded config from {}", path.display()),
        None => tracing::debug!("No config file found; using defaults"),
    }

    config.tui.theme = cli::resolve_theme(theme_flag, &config);
    cli::check_config(&config).context("invalid configuration")?;
    set_theme(Theme::from_name(&config.tui.theme));
    Ok(config)
}

fn run_config_action(action: ConfigAction, explicit: Option<&Path>) -> Result<()> {
    match action {
        ConfigAction::Show => {
            let (config, loaded_from) = app_config::load_or_default(explicit);
            if let Some(path) = &loaded_from {
                eprintln!("# Loaded from: {}", path.display());
            } else {
                eprintln!("# No config file found; showing defaults");
            }
            let yaml = serde_yaml::to_string(&config).context("failed to serialize config")?;
            print!("{yaml}");
            Ok(())
        }
        ConfigAction::Path => {
            eprintln!("Config file search paths (in order):");
            for dir in app_config::file::search_dirs() {
                eprintln!("  {}", dir.display());
            }
            eprintln!();
            eprintln!("Recognized file names:");
            for name in app_config::file::CONFIG_FILE_NAMES {
                eprintln!("  {name}");
            }
            eprintln!();
            match app_config::discover_config_file(explicit) {
                Some(path) => eprintln!("Active config file: {}", path.display()),
                None => eprintln!("No config file found."),
            }
            Ok(())
        }
        ConfigAction::Init => {
            let target = std::env::current_dir()
                .context("cannot determine current directory")?
                .join(".gift-ranking.yaml");
            if target.exists() {
                anyhow::bail!(
                    "{} already exists. Remove it first to re-initialize.",
                    target.display()
                );
            }
            let content = app_config::generate_full_example_config();
            std::fs::write(&target, content)
                .with_context(|| format!("failed to write {}", target.display()))?;
            eprintln!("Created {}", target.display());
            Ok(())
        }
        ConfigAction::Example { full } => {
            if full {
                print!("{}", app_config::generate_full_example_config());
            } else {
                print!("{}", app_config::generate_example_config());
            }
            Ok(())
        }
        ConfigAction::Schema { output } => {
            let schema = app_config::generate_json_schema()?;
            match output {
                Some(path) => {
                    std::fs::write(&path, &schema)
                        .with_context(|| format!("failed to write {}", path.display()))?;
                    eprintln!("Schema written to {}", path.display());
                }
                None => {
                    println!("{schema}");
                }
            }
            Ok(())
        }
    }
}
