use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use pagesearch::document::{PageSource, TextDocument};
use pagesearch::output;
use pagesearch::search::{complete, highlight};
use pagesearch::session::Session;
use pagesearch::utils::progress::{page_bar, ProgressBar};
use pagesearch::utils::{get_config_path, AppConfig};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "pagesearch")]
#[command(about = "Compare linear and trie-backed phrase search over document pages")]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// When to use colors
    #[arg(long, value_enum, default_value_t = ColorWhen::Auto, global = true)]
    color: ColorWhen,
}

#[derive(Clone, Copy, PartialEq, Eq, ValueEnum)]
enum ColorWhen {
    Auto,
    Never,
}

#[derive(Subcommand)]
enum Commands {
    /// Compare both strategies on one page
    Compare {
        /// Extracted text file, pages separated by form feeds
        file: PathBuf,

        /// Phrase to search for
        #[arg(required = true)]
        query: Vec<String>,

        /// Page number (1-based)
        #[arg(short, long, default_value_t = 1)]
        page: usize,

        /// Do not print the highlighted page
        #[arg(long)]
        no_highlight: bool,

        /// Print the result as JSON
        #[arg(long)]
        json: bool,
    },
    /// Compare both strategies on every page
    Scan {
        /// Extracted text file, pages separated by form feeds
        file: PathBuf,

        /// Phrase to search for
        #[arg(required = true)]
        query: Vec<String>,

        /// Print per-page results and history as JSON
        #[arg(long)]
        json: bool,
    },
    /// List trie completions of a prefix next to the linear scan
    Complete {
        /// Extracted text file, pages separated by form feeds
        file: PathBuf,

        /// Prefix to complete
        prefix: String,

        /// Page number (1-based)
        #[arg(short, long, default_value_t = 1)]
        page: usize,
    },
    /// Show the effective configuration
    Config {
        /// Write the current settings to the config file
        #[arg(long)]
        save: bool,
    },
}

fn init_logging() {
    let filter = EnvFilter::try_from_env("PAGESEARCH_LOG")
        .unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn main() -> Result<()> {
    init_logging();

    let cli = Cli::parse();
    let config = AppConfig::load().unwrap_or_else(|e| {
        tracing::warn!(error = %e, "using default config");
        AppConfig::default()
    });
    let color = config.color && cli.color == ColorWhen::Auto;

    match cli.command {
        Commands::Compare {
            file,
            query,
            page,
            no_highlight,
            json,
        } => {
            let query = query.join(" ");
            let doc = TextDocument::open(&file)?;
            let mut session = Session::new(&config);
            let result = session.compare_page(&doc, page, &query)?;

            if json {
                println!("{}", serde_json::to_string_pretty(&result)?);
            } else {
                let segments = (config.highlight && !no_highlight).then(|| {
                    highlight(&result.text, &result.comparison.query, &result.comparison.candidates)
                });
                output::print_comparison(&result, segments.as_deref(), color)?;
            }
        }
        Commands::Scan { file, query, json } => {
            let query = query.join(" ");
            let doc = TextDocument::open(&file)?;
            let mut session = Session::new(&config);

            let pb = if json {
                ProgressBar::hidden()
            } else {
                page_bar(doc.page_count())
            };
            let results = session.scan(&doc, &query, &pb)?;
            pb.finish_and_clear();

            if json {
                let report = serde_json::json!({
                    "document": doc.id(),
                    "pages": results,
                    "history": session.history().series(doc.id()),
                });
                println!("{}", serde_json::to_string_pretty(&report)?);
            } else {
                output::print_scan_table(&results, color)?;
            }
        }
        Commands::Complete { file, prefix, page } => {
            let doc = TextDocument::open(&file)?;
            let text = doc
                .page_text(page)
                .with_context(|| format!("Failed to read page {} of {}", page, file.display()))?;
            output::print_completion(&complete(&text, &prefix), color)?;
        }
        Commands::Config { save } => {
            let path = get_config_path()?;
            if save {
                config.save()?;
            }
            println!("Config file: {}", path.display());
            if !path.exists() {
                println!("(not present, showing defaults)");
            }
            println!("{}", serde_json::to_string_pretty(&config)?);
        }
    }

    Ok(())
}
