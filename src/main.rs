use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use denali_docs::{api, catalog::DocCatalog, outline};

#[derive(Parser)]
#[command(name = "denali-docs")]
#[command(about = "Versioned guides and API reference content for the Denali documentation site")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Serve the documentation API
    Serve {
        /// Port for HTTP API
        #[arg(short, long, default_value = "3000")]
        port: u16,
    },
    /// Write the snapshot payload as JSON
    Export {
        /// Output file; stdout when omitted
        #[arg(short, long)]
        out: Option<PathBuf>,

        /// Pretty-print the JSON
        #[arg(long)]
        pretty: bool,
    },
    /// Lint the shipped content
    Check,
    /// Print the guide tree as an ASCII outline
    Outline {
        /// Version id to outline; defaults to the latest snapshot
        #[arg(long)]
        version: Option<String>,
    },
}

fn init_tracing() {
    let filter = tracing_subscriber::EnvFilter::new(
        std::env::var("RUST_LOG").unwrap_or_else(|_| "denali_docs=debug,tower_http=debug".into()),
    );

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer())
        .init();
}

async fn serve(catalog: DocCatalog, port: u16) -> anyhow::Result<()> {
    tracing::info!("Starting denali-docs server on port {}", port);

    let issues = catalog.lint();
    if issues.is_empty() {
        tracing::info!(
            "Content OK: {} snapshots, {} guide pages",
            catalog.snapshots().len(),
            catalog
                .snapshots()
                .first()
                .map(|s| s.page_count())
                .unwrap_or(0)
        );
    } else {
        for issue in &issues {
            tracing::warn!("Content issue: {}", issue);
        }
    }

    let app = api::create_router(catalog);

    let listener = tokio::net::TcpListener::bind(format!("127.0.0.1:{}", port)).await?;
    tracing::info!("denali-docs server listening on http://127.0.0.1:{}", port);

    axum::serve(listener, app).await?;
    Ok(())
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing();

    let catalog = DocCatalog::load();

    match cli.command {
        Some(Commands::Serve { port }) => {
            serve(catalog, port).await?;
        }
        Some(Commands::Export { out, pretty }) => match out {
            Some(path) => {
                let file = std::fs::File::create(&path)?;
                catalog.write_json(std::io::BufWriter::new(file), pretty)?;
                tracing::info!("Wrote snapshot payload to {}", path.display());
            }
            None => {
                let stdout = std::io::stdout();
                catalog.write_json(stdout.lock(), pretty)?;
            }
        },
        Some(Commands::Check) => {
            let issues = catalog.lint();
            if issues.is_empty() {
                let snapshots = catalog.snapshots();
                println!(
                    "Content OK: {} snapshots, {} guide pages, {} classes",
                    snapshots.len(),
                    snapshots.first().map(|s| s.page_count()).unwrap_or(0),
                    snapshots.first().map(|s| s.class_count()).unwrap_or(0),
                );
            } else {
                for issue in &issues {
                    eprintln!("  {}", issue);
                }
                anyhow::bail!("{} content issue(s) found", issues.len());
            }
        }
        Some(Commands::Outline { version }) => {
            let snapshot = match version {
                Some(id) => catalog
                    .get_version(&id)
                    .ok_or_else(|| anyhow::anyhow!("No version with id: {}", id))?,
                None => catalog
                    .snapshots()
                    .last()
                    .ok_or_else(|| anyhow::anyhow!("No snapshots available"))?,
            };
            print!("{}", outline::render_outline(&snapshot.pages));
        }
        None => {
            // Default: serve on the default port
            serve(catalog, 3000).await?;
        }
    }

    Ok(())
}
