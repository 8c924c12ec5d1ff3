use std::io::Read;
use std::path::PathBuf;

use anyhow::{Context, Result};
use batmi::config::Config;
use clap::{Parser, Subcommand};
use colored::Colorize;
use tracing::info;

/// Batmi: identify the topic of Marathi news text.
///
/// Classifies text into Auto, Tech, Sports, Politics or International using a
/// pretrained LDA topic model.
#[derive(Parser)]
#[command(name = "batmi", version, about)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Serve the web form and JSON API
    #[cfg(feature = "web")]
    Serve {
        /// Port to listen on (default: PORT env var, then 8000)
        #[arg(long)]
        port: Option<u16>,

        /// Address to bind (default: BATMI_BIND env var, then 0.0.0.0)
        #[arg(long)]
        bind: Option<String>,
    },

    /// Classify text given as an argument, or read from stdin
    Classify {
        /// Marathi text to classify
        text: Option<String>,

        /// Print the classification as JSON
        #[arg(long)]
        json: bool,
    },

    /// Write the bundled Marathi stopword list to a file
    Stopwords {
        /// Destination file
        #[arg(long)]
        output: PathBuf,

        /// Replace the destination if it already exists
        #[arg(long)]
        force: bool,
    },

    /// Load the model, dictionary and stopwords and report what was found
    Check,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file if present (silently ignore if missing)
    let _ = dotenvy::dotenv();

    // Set up structured logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("batmi=info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let config = Config::load()?;

    match cli.command {
        #[cfg(feature = "web")]
        Commands::Serve { port, bind } => {
            // Resources load before the listener binds, so a bad artifact
            // stops the process before it accepts a single request.
            let classifier = batmi::classifier::load_shared(&config)?;
            let port = port.unwrap_or(config.port);
            let bind = bind.unwrap_or_else(|| config.bind.clone());
            batmi::web::run_server(classifier, port, &bind).await?;
        }

        Commands::Classify { text, json } => {
            let classifier = batmi::classifier::load_shared(&config)?;

            let text = match text {
                Some(text) => text,
                None => {
                    let mut buf = String::new();
                    std::io::stdin()
                        .read_to_string(&mut buf)
                        .context("Failed to read text from stdin")?;
                    buf
                }
            };

            let result = classifier.classify(&text);
            info!(
                tokens = result.token_count,
                top = %result.top_label,
                "Classified input"
            );

            if json {
                println!("{}", serde_json::to_string_pretty(&result)?);
            } else {
                batmi::output::terminal::display_classification(&text, &result);
            }
        }

        Commands::Stopwords { output, force } => {
            let stopwords = batmi::text::StopwordSet::builtin();
            stopwords.write_to(&output, force)?;
            println!(
                "Wrote {} Marathi stopwords to {}",
                stopwords.len(),
                output.display()
            );
        }

        Commands::Check => {
            let classifier = batmi::classifier::load_shared(&config)?;
            let thresholds = classifier.thresholds();
            println!("\n{}", "=== Batmi resources ===".bold());
            println!("  Model:       {}", config.model_path.display());
            println!("  Dictionary:  {}", config.dictionary_path.display());
            println!("  Stopwords:   {}", config.stopwords_path.display());
            println!("  Topics:      {}", classifier.num_topics());
            println!("  Vocabulary:  {}", classifier.vocabulary_size());
            println!(
                "  Thresholds:  top1 {:.2}  top2 {:.2}  top3 {:.2}",
                thresholds.top1, thresholds.top2, thresholds.top3
            );
            println!("\n{}", "All resources loaded.".green().bold());
        }
    }

    Ok(())
}
