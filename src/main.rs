// src/main.rs

use std::io::{BufRead, Write};
use std::str::FromStr;
use std::sync::Arc;

use clap::Parser;
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

use brandwise::brand::BrandPlanOrchestrator;
use brandwise::chat::{ChatSession, FALLBACK_REPLY};
use brandwise::cli::{render_summary, write_assets, Cli, Command};
use brandwise::config::BrandwiseConfig;
use brandwise::gemini::{GeminiClient, GenerativeService};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let config = BrandwiseConfig::from_env()?;

    let level = Level::from_str(&config.log_level).unwrap_or(Level::INFO);
    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    info!("Starting brandwise");
    info!("Plan model: {}", config.plan_model);
    info!("Image model: {}", config.image_model);

    let service: Arc<dyn GenerativeService> = Arc::new(GeminiClient::new(&config));

    match cli.command {
        Command::Generate { mission, out } => {
            // Progress phrases go to stderr while the generation is in flight.
            let (tx, mut rx) = tokio::sync::mpsc::unbounded_channel();
            let printer = tokio::spawn(async move {
                while let Some(phrase) = rx.recv().await {
                    eprintln!("  {phrase}");
                }
            });

            let orchestrator = BrandPlanOrchestrator::new(service)
                .with_progress(tx)
                .with_progress_interval(std::time::Duration::from_secs(
                    config.progress_interval,
                ));

            let bible = orchestrator.generate_brand_bible(&mission).await?;
            // The ticker's sender clone is gone once the operation settles;
            // ours goes out of scope with the orchestrator below.
            drop(orchestrator);
            printer.await?;

            print!("{}", render_summary(&bible));
            if let Some(dir) = out {
                write_assets(&bible, &dir)?;
                info!("Assets written to {}", dir.display());
            }
        }

        Command::Chat => {
            let mut session = ChatSession::new(service, Vec::new());
            let stdin = std::io::stdin();
            let mut stdout = std::io::stdout();

            println!("Branding assistant ready. Empty line exits.");
            loop {
                print!("> ");
                stdout.flush()?;

                let mut line = String::new();
                if stdin.lock().read_line(&mut line)? == 0 {
                    break;
                }
                let text = line.trim();
                if text.is_empty() {
                    break;
                }

                match session.send(text).await {
                    Ok(reply) => println!("{reply}"),
                    Err(err) => {
                        info!("chat turn failed: {err}");
                        println!("{FALLBACK_REPLY}");
                    }
                }
            }
        }
    }

    Ok(())
}
