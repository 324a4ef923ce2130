//! vivo-ldf CLI: inspect generated queries and resolve counts.
//!
//! Usage:
//!   vivo-ldf count-query <pattern>
//!   vivo-ldf construct-query <pattern> [--offset n] [--limit n] [--config path]
//!   vivo-ldf count <pattern> [--config path]
//!   vivo-ldf fetch <pattern> [--offset n] [--limit n] [--config path]

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;
use std::sync::Arc;
use tracing_subscriber::EnvFilter;
use vivo_ldf::{
    build_construct_query, build_count_query, HttpTransport, NamedGraphSet, TriplePattern,
    VivoConfig, VivoSparqlDatasource,
};

#[derive(Parser)]
#[command(
    name = "vivo-ldf",
    version,
    about = "Linked Data Fragments datasource for VIVO SPARQL endpoints"
)]
struct Cli {
    /// Log cache and request activity to stderr
    #[arg(long, short, global = true)]
    verbose: bool,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the COUNT query for a pattern
    CountQuery {
        /// SPARQL graph pattern, e.g. '{?s ?p ?o}'
        pattern: String,
    },
    /// Print the CONSTRUCT query for one page of a pattern
    ConstructQuery {
        pattern: String,
        #[command(flatten)]
        page: PageArgs,
        #[command(flatten)]
        endpoint: EndpointArgs,
    },
    /// Resolve the approximate triple count of a pattern
    Count {
        pattern: String,
        #[command(flatten)]
        endpoint: EndpointArgs,
    },
    /// Fetch one page of triples and print the raw RDF
    Fetch {
        pattern: String,
        #[command(flatten)]
        page: PageArgs,
        #[command(flatten)]
        endpoint: EndpointArgs,
    },
}

#[derive(Args)]
struct PageArgs {
    #[arg(long)]
    offset: Option<u64>,
    #[arg(long)]
    limit: Option<u64>,
}

#[derive(Args)]
struct EndpointArgs {
    /// Path to a JSON or YAML config file
    #[arg(long)]
    config: Option<PathBuf>,
    /// Endpoint URL (overrides config)
    #[arg(long)]
    endpoint: Option<String>,
    /// Account email (overrides config)
    #[arg(long)]
    email: Option<String>,
    /// Account password (overrides config)
    #[arg(long)]
    password: Option<String>,
    /// Named graph to scope CONSTRUCT queries to; repeatable (overrides config)
    #[arg(long = "graph")]
    graphs: Vec<String>,
}

/// Get the default config path (~/.config/vivo-ldf/config.json)
fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("vivo-ldf").join("config.json"))
}

fn load_config(args: EndpointArgs) -> Result<VivoConfig, String> {
    let path = args
        .config
        .or_else(|| default_config_path().filter(|p| p.exists()));
    let mut config = match path {
        Some(path) => VivoConfig::load(&path)
            .map_err(|e| format!("Failed to load config '{}': {}", path.display(), e))?,
        None => VivoConfig::default(),
    };
    if let Some(endpoint) = args.endpoint {
        config.endpoint = endpoint;
    }
    if args.email.is_some() {
        config.email = args.email;
    }
    if args.password.is_some() {
        config.password = args.password;
    }
    if !args.graphs.is_empty() {
        config.graphs = args.graphs;
    }
    Ok(config)
}

fn open_datasource(args: EndpointArgs) -> Result<VivoSparqlDatasource, String> {
    let config = load_config(args)?;
    VivoSparqlDatasource::new(&config, Arc::new(HttpTransport::new())).map_err(|e| e.to_string())
}

fn cmd_construct_query(pattern: &TriplePattern, page: PageArgs, args: EndpointArgs) -> i32 {
    // Only the graphs matter here, so no credentials are required.
    let config = match load_config(args) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Error: {}", e);
            return 1;
        }
    };
    let graphs = NamedGraphSet::new(config.graphs);
    println!(
        "{}",
        build_construct_query(pattern, page.offset, page.limit, &graphs)
    );
    0
}

async fn cmd_count(pattern: &TriplePattern, args: EndpointArgs) -> i32 {
    let datasource = match open_datasource(args) {
        Ok(ds) => ds,
        Err(e) => {
            eprintln!("Error: {}", e);
            return 1;
        }
    };
    match datasource.pattern_count(pattern).await {
        Ok(count) => {
            println!("{}", count);
            0
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            1
        }
    }
}

async fn cmd_fetch(pattern: &TriplePattern, page: PageArgs, args: EndpointArgs) -> i32 {
    let datasource = match open_datasource(args) {
        Ok(ds) => ds,
        Err(e) => {
            eprintln!("Error: {}", e);
            return 1;
        }
    };
    match datasource.fetch_page(pattern, page.offset, page.limit).await {
        Ok(body) => {
            print!("{}", body);
            0
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            1
        }
    }
}

fn init_logging(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("vivo_ldf=debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let code = match cli.command {
        Commands::CountQuery { pattern } => {
            println!("{}", build_count_query(&TriplePattern::new(pattern)));
            0
        }
        Commands::ConstructQuery { pattern, page, endpoint } => {
            cmd_construct_query(&TriplePattern::new(pattern), page, endpoint)
        }
        Commands::Count { pattern, endpoint } => {
            cmd_count(&TriplePattern::new(pattern), endpoint).await
        }
        Commands::Fetch { pattern, page, endpoint } => {
            cmd_fetch(&TriplePattern::new(pattern), page, endpoint).await
        }
    };
    std::process::exit(code);
}
