//! BookAI CLI - Command-line front end for the book studio

mod commands;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Parse and validate the chapter count (3..=20)
fn parse_chapters(s: &str) -> Result<bookai_core::ChapterCount, String> {
    let n: u32 = s.parse().map_err(|_| format!("'{}' is not a valid number", s))?;
    bookai_core::ChapterCount::try_from(n).map_err(|e| e.to_string())
}

/// Parse a genre key
fn parse_genre(s: &str) -> Result<bookai_core::Genre, String> {
    s.parse().map_err(|e: bookai_core::ValidationError| {
        let keys: Vec<&str> = bookai_core::Genre::ALL.iter().map(|g| g.key()).collect();
        format!("{} (expected one of: {})", e, keys.join(", "))
    })
}

#[derive(Parser)]
#[command(name = "bookai")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List the supported genres
    Genres {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show the library
    Library {
        /// Output as JSON
        #[arg(long)]
        json: bool,

        /// Start from an empty library instead of the sample books
        #[arg(long)]
        empty: bool,
    },

    /// Create a book and show the resulting library
    Create {
        /// Book title
        #[arg(short, long, default_value = "")]
        title: String,

        /// Genre key (fantasy, detective, romance, scifi)
        #[arg(short, long, value_parser = parse_genre)]
        genre: Option<bookai_core::Genre>,

        /// Plot description
        #[arg(short, long, default_value = "")]
        description: String,

        /// Number of chapters (3-20)
        #[arg(short, long, default_value = "5", value_parser = parse_chapters)]
        chapters: bookai_core::ChapterCount,

        /// Simulated generation latency in milliseconds
        #[arg(long, default_value = "2000")]
        latency_ms: u64,

        /// Start from an empty library instead of the sample books
        #[arg(long)]
        empty: bool,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize tracing
    let filter = if cli.verbose {
        "bookai_cli=debug,bookai_core=debug"
    } else {
        "bookai_cli=info"
    };

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(filter))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    match cli.command {
        Commands::Genres { json } => commands::genres(json),

        Commands::Library { json, empty } => commands::library(json, empty).await,

        Commands::Create {
            title,
            genre,
            description,
            chapters,
            latency_ms,
            empty,
            json,
        } => {
            let args = commands::CreateArgs {
                title,
                genre,
                description,
                chapters,
                latency_ms,
                empty,
                json,
            };
            commands::create(args).await
        }
    }
}
