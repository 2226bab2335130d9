use anyhow::Context;
use clap::{Args, Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use kanban_board::api::{self, AppState};
use kanban_board::board::{BoardEngine, GroupBy, OrderBy, ViewOptions};
use kanban_board::client::BoardClient;
use kanban_board::config::{default_config_path, BoardConfig};
use kanban_board::render::render_board;
use kanban_board::state::SnapshotStore;
use kanban_board::view::BoardView;

#[derive(Parser)]
#[command(name = "kanban")]
#[command(about = "Kanban board view: group and order tickets into columns")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Fetch the board once and print it
    Show {
        /// Grouping: status, user or priority
        #[arg(short, long)]
        group_by: Option<GroupBy>,

        /// Ordering within a column: priority or title
        #[arg(short, long)]
        order_by: Option<OrderBy>,

        #[command(flatten)]
        source: SourceArgs,
    },
    /// Serve the board as JSON over HTTP
    Serve {
        /// Port for HTTP API
        #[arg(short, long)]
        port: Option<u16>,

        #[command(flatten)]
        source: SourceArgs,
    },
    /// Write the current settings to the config file
    Init,
}

#[derive(Args)]
struct SourceArgs {
    /// Data source URL (overrides config and KANBAN_BOARD_URL)
    #[arg(long)]
    url: Option<String>,

    /// Locale used to collate titles, e.g. "en" or "sv"
    #[arg(long)]
    locale: Option<String>,
}

impl SourceArgs {
    fn apply(self, config: &mut BoardConfig) {
        if let Some(url) = self.url {
            config.endpoint = url;
        }
        if self.locale.is_some() {
            config.locale = self.locale;
        }
    }
}

/// Initialize tracing. `show` logs to stderr so stdout carries only the board.
fn init_tracing(use_stderr: bool) {
    let filter = tracing_subscriber::EnvFilter::new(
        std::env::var("RUST_LOG").unwrap_or_else(|_| "kanban_board=info,tower_http=debug".into()),
    );

    if use_stderr {
        tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
            .init();
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer())
            .init();
    }
}

fn build_engine(config: &BoardConfig) -> anyhow::Result<BoardEngine> {
    let engine = match config.locale.as_deref() {
        Some(tag) => BoardEngine::for_locale(tag)?,
        None => BoardEngine::new()?,
    };
    Ok(engine)
}

async fn show(config: BoardConfig, options: ViewOptions) -> anyhow::Result<()> {
    let engine = build_engine(&config)?;
    let client = BoardClient::new(config.endpoint.clone());

    // No retry: a failed fetch ends the command with its message
    let snapshot = client.fetch_snapshot().await?;

    let groups = engine.group(&snapshot.tasks, options);
    let view = BoardView::build(&groups, &snapshot, options);
    print!("{}", render_board(&view));
    Ok(())
}

async fn serve(config: BoardConfig) -> anyhow::Result<()> {
    let engine = build_engine(&config)?;
    let client = BoardClient::new(config.endpoint.clone());
    let store = SnapshotStore::new();

    // Single startup fetch; a failure is reported by the API, not retried
    let loader = store.clone();
    let startup_client = client.clone();
    tokio::spawn(async move {
        let _ = loader.load(&startup_client).await;
    });

    let app = api::create_router(AppState::new(store, engine, Some(client)));

    let listener = tokio::net::TcpListener::bind(format!("127.0.0.1:{}", config.port)).await?;
    tracing::info!("Kanban board listening on http://127.0.0.1:{}", config.port);

    axum::serve(listener, app).await?;
    Ok(())
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let use_stderr = !matches!(cli.command, Some(Commands::Serve { .. }));
    init_tracing(use_stderr);

    let mut config = BoardConfig::load();

    match cli.command {
        Some(Commands::Show {
            group_by,
            order_by,
            source,
        }) => {
            source.apply(&mut config);
            let options = ViewOptions::new(
                group_by.unwrap_or(config.group_by),
                order_by.unwrap_or(config.order_by),
            );
            show(config, options).await?;
        }
        Some(Commands::Serve { port, source }) => {
            source.apply(&mut config);
            if let Some(port) = port {
                config.port = port;
            }
            serve(config).await?;
        }
        Some(Commands::Init) => {
            // File contents only, so a KANBAN_BOARD_URL override is not persisted
            let path = default_config_path()?;
            BoardConfig::load_file()
                .save_to(&path)
                .with_context(|| format!("Failed to write {}", path.display()))?;
            println!("Wrote {}", path.display());
        }
        None => {
            let options = config.view_options();
            show(config, options).await?;
        }
    }

    Ok(())
}
