//! imbib-arxiv command-line front end

use std::path::PathBuf;
use std::sync::Arc;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use imbib_arxiv::http::DEFAULT_USER_AGENT;
use imbib_arxiv::{
    ArxivBackend, ArxivConfig, BackendRegistry, CanonicalRecord, CatalogBackend, DoiResolver,
    HttpClient,
};

#[derive(Parser, Debug)]
#[command(
    name = "imbib-arxiv",
    about = "Search arXiv and print BibTeX entries",
    version
)]
struct Cli {
    /// Configuration file (defaults to <config_dir>/imbib/arxiv.toml)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// List the registered catalog backends
    Backends,

    /// Print the request URL for a query
    Url { query: String },

    /// Search arXiv and list the results
    Search { query: String },

    /// Parse a saved feed document and print its records as JSON
    Parse { file: PathBuf },

    /// Print the BibTeX entry for one search result
    Bibtex {
        query: String,

        /// Zero-based position in the result list
        #[arg(short, long, default_value_t = 0)]
        index: usize,
    },
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => ArxivConfig::load(path)?,
        None => ArxivConfig::load_default()?,
    };

    let client = HttpClient::new(DEFAULT_USER_AGENT)?;
    let resolver = Arc::new(DoiResolver::from_config(client.clone(), &config.bibtex));
    let backend = Arc::new(ArxivBackend::new(&config, resolver));

    let mut registry = BackendRegistry::new();
    Arc::clone(&backend).register(&mut registry);

    match cli.command {
        Command::Backends => {
            for backend in registry.iter() {
                println!("{:<8}  {}", backend.name(), backend.prompt().trim_end());
            }
        }
        Command::Url { query } => println!("{}", backend.url(&query)),
        Command::Search { query } => {
            let records = backend.search(&client, &query)?;
            if records.is_empty() {
                eprintln!("No results for {:?}", query);
            }
            for (i, record) in records.iter().enumerate() {
                println!("{:>3}  {}", i, summary_line(record));
            }
        }
        Command::Parse { file } => {
            let body = std::fs::read_to_string(&file)?;
            let records = backend.parse_buffer(&body)?;
            println!("{}", serde_json::to_string_pretty(&records)?);
        }
        Command::Bibtex { query, index } => {
            let records = backend.search(&client, &query)?;
            let record = records
                .get(index)
                .ok_or_else(|| format!("no result at index {} ({} results)", index, records.len()))?;
            backend
                .forward_citation(record, Box::new(|entry| println!("{}", entry)))
                .map_err(|e| e as Box<dyn std::error::Error>)?;
        }
    }

    Ok(())
}

fn summary_line(record: &CanonicalRecord) -> String {
    let first_author = match record.authors.len() {
        0 => String::new(),
        1 => record.authors[0].clone(),
        _ => format!("{} et al.", record.authors[0]),
    };
    let title = record
        .title
        .as_deref()
        .unwrap_or("(untitled)")
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ");
    format!(
        "{:<4}  {:<16}  {}  [{}]",
        record.year.as_deref().unwrap_or("----"),
        record.identifier,
        title,
        first_author
    )
}
