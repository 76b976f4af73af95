use anyhow::{Context, Result};
use arxiv_feed::config::{find_config_file, get_config, load_config, Config};
use arxiv_feed::models::{CategoryRegistry, NormalizedResult, SearchField, SearchSpec};
use arxiv_feed::ArxivClient;
use clap::{Parser, Subcommand, ValueEnum};
use std::io::IsTerminal;
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// arxiv-feed - Search arXiv and read the daily submissions of a category
#[derive(Parser, Debug)]
#[command(name = "arxiv-feed")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Search arXiv and read the daily submissions of a category", long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Enable verbose logging (can be used multiple times for more verbosity: -v, -vv)
    #[arg(long, short, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Suppress non-error output
    #[arg(long, short, global = true)]
    quiet: bool,

    /// Output format
    #[arg(long, short, value_enum, global = true, default_value_t = OutputFormat::Auto)]
    output: OutputFormat,

    /// Configuration file path
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Request timeout in seconds (overrides the configuration)
    #[arg(long, global = true)]
    timeout: Option<u64>,

    /// Authors shown before "et al." (overrides the configuration)
    #[arg(long, global = true)]
    max_authors: Option<usize>,

    #[command(subcommand)]
    command: Commands,
}

/// Output format for results
#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
enum OutputFormat {
    /// Automatic based on terminal (table if TTY, JSON otherwise)
    Auto,
    /// Table format (human-readable)
    Table,
    /// JSON format (machine-readable)
    Json,
    /// Plain text format
    Plain,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Search all fields for the given words
    #[command(alias = "s")]
    Search {
        /// Words to search for (all must match)
        #[arg(required = true)]
        words: Vec<String>,

        /// Index of the first result
        #[arg(long, default_value_t = 0)]
        start: usize,

        /// Maximum number of results (default from configuration)
        #[arg(long, short)]
        max_results: Option<usize>,
    },

    /// Search specific fields
    #[command(alias = "a")]
    Advanced {
        #[arg(long)]
        author: Option<String>,

        #[arg(long)]
        title: Option<String>,

        #[arg(long = "abstract")]
        abstract_text: Option<String>,

        #[arg(long)]
        comment: Option<String>,

        #[arg(long)]
        journal_ref: Option<String>,

        #[arg(long)]
        category: Option<String>,

        #[arg(long)]
        report_number: Option<String>,

        /// arXiv identifier
        #[arg(long)]
        id: Option<String>,
    },

    /// Today's submissions of a category
    #[command(alias = "d")]
    Daily {
        /// Category code, e.g. cs.AI
        category: String,
    },

    /// List the known categories
    #[command(alias = "ls")]
    Categories {
        /// Only print the category at this position
        #[arg(long)]
        index: Option<String>,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize tracing based on verbosity
    let log_level = match cli.verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    let env_filter = if cli.quiet { "error" } else { log_level };

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| format!("arxiv_feed={}", env_filter)),
        ))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let mut config = if let Some(config_path) = &cli.config {
        load_config(config_path)
            .with_context(|| format!("Failed to load {}", config_path.display()))?
    } else if let Some(config_path) = find_config_file() {
        tracing::info!("Using config file: {}", config_path.display());
        load_config(&config_path)?
    } else {
        get_config()?
    };
    apply_overrides(&mut config, &cli);

    match cli.command {
        Commands::Categories { index } => {
            match index {
                Some(index) => println!("{}", CategoryRegistry::by_index_str(&index)?),
                None => {
                    for category in CategoryRegistry::all() {
                        println!("{}", category);
                    }
                }
            }
            return Ok(());
        }
        Commands::Search {
            words,
            start,
            max_results,
        } => {
            let client = ArxivClient::new(&config)?;
            let max_results = max_results.unwrap_or(config.arxiv.max_results);
            let response = client.search(words, start, max_results).await?;

            if let Some(total) = response.total_results {
                if !cli.quiet {
                    eprintln!(
                        "Showing {} of {} results{}",
                        response.results.len(),
                        total,
                        if response.has_more(start) {
                            format!(" (next page: --start {})", start + response.results.len())
                        } else {
                            String::new()
                        }
                    );
                }
            }
            output_results(&response.results, cli.output)?;
        }
        Commands::Advanced {
            author,
            title,
            abstract_text,
            comment,
            journal_ref,
            category,
            report_number,
            id,
        } => {
            let spec = SearchSpec::new()
                .field_opt(SearchField::Author, author)
                .field_opt(SearchField::Title, title)
                .field_opt(SearchField::Abstract, abstract_text)
                .field_opt(SearchField::Comment, comment)
                .field_opt(SearchField::JournalRef, journal_ref)
                .field_opt(SearchField::Category, category)
                .field_opt(SearchField::ReportNumber, report_number)
                .field_opt(SearchField::Identity, id);

            let client = ArxivClient::new(&config)?;
            let response = client.advanced_search(&spec).await?;
            output_results(&response.results, cli.output)?;
        }
        Commands::Daily { category } => {
            let client = ArxivClient::new(&config)?;
            let response = client.daily_submissions(&category).await?;
            output_results(&response.results, cli.output)?;
        }
    }

    Ok(())
}

fn apply_overrides(config: &mut Config, cli: &Cli) {
    if let Some(timeout) = cli.timeout {
        config.http.timeout_secs = timeout;
    }
    if let Some(max_authors) = cli.max_authors {
        config.arxiv.max_authors = max_authors;
    }
}

fn output_results(results: &[NormalizedResult], format: OutputFormat) -> Result<()> {
    let actual_format = if format == OutputFormat::Auto {
        if std::io::stdout().is_terminal() {
            OutputFormat::Table
        } else {
            OutputFormat::Json
        }
    } else {
        format
    };

    match actual_format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(results)?);
        }
        OutputFormat::Plain => {
            for result in results {
                println!("{}", result.title.as_deref().unwrap_or("(untitled)"));
                if let Some(ref authors) = result.authors {
                    println!("  {}", authors);
                }
                if let Some(ref link) = result.link {
                    println!("  {}", link);
                }
                println!();
            }
        }
        OutputFormat::Table => {
            use comfy_table::{Attribute, Cell, Table};
            let mut table = Table::new();
            table.load_preset(comfy_table::presets::UTF8_FULL);
            table.set_header(vec!["Title", "Authors", "Link"]);

            for result in results {
                table.add_row(vec![
                    Cell::new(result.title.as_deref().unwrap_or_default())
                        .add_attribute(Attribute::Bold),
                    Cell::new(result.authors.as_deref().unwrap_or_default()),
                    Cell::new(result.link.as_deref().unwrap_or_default()),
                ]);
            }
            println!("{table}");
        }
        OutputFormat::Auto => unreachable!(),
    }

    Ok(())
}
