use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use swiss_tracker::api::state::AppState;
use swiss_tracker::config::AppConfig;
use swiss_tracker::models::PlayerId;
use swiss_tracker::storage::{JsonlStore, StorageConfig};
use swiss_tracker::tournament::Tournament;

#[derive(Parser)]
#[command(name = "swiss-tracker")]
#[command(about = "Swiss-system tournament tracker")]
#[command(version)]
struct Cli {
    /// Path to configuration file
    #[arg(long, default_value = "./config.toml")]
    config: String,

    /// Data directory path (overrides the config file)
    #[arg(long)]
    data_dir: Option<String>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long)]
    log_level: Option<String>,

    /// Output logs as JSON
    #[arg(long)]
    json_logs: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Register a new player
    Register {
        /// Player's full name (need not be unique)
        name: String,
    },

    /// Report the outcome of a match
    Report {
        /// Id of the winning player
        #[arg(long)]
        winner: PlayerId,

        /// Id of the losing player
        #[arg(long)]
        loser: PlayerId,
    },

    /// List registered players
    Players,

    /// Print the number of registered players
    Count,

    /// Show current standings
    Standings {
        /// Print as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show pairings for the next round
    Pairings {
        /// Print as JSON
        #[arg(long)]
        json: bool,
    },

    /// Delete all match records
    DeleteMatches,

    /// Delete all player records (matches must be deleted first)
    DeletePlayers,

    /// Delete all matches and players
    Reset,

    /// Start the API server
    Serve {
        /// Bind address (defaults to the config file)
        #[arg(long)]
        host: Option<String>,

        /// Port number (defaults to the config file)
        #[arg(long)]
        port: Option<u16>,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut config = AppConfig::load_or_default(&PathBuf::from(&cli.config))
        .with_context(|| format!("Failed to load config from {}", cli.config))?;
    if let Some(dir) = &cli.data_dir {
        config.data_dir = PathBuf::from(dir);
    }
    if let Some(level) = &cli.log_level {
        config.log_level = level.clone();
    }
    config.validate()?;

    // Initialize tracing
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&config.log_level));

    if cli.json_logs {
        tracing_subscriber::registry()
            .with(filter)
            .with(
                tracing_subscriber::fmt::layer()
                    .json()
                    .with_writer(std::io::stderr),
            )
            .init();
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
            .init();
    }

    tracing::debug!("Starting swiss-tracker v{}", env!("CARGO_PKG_VERSION"));

    let store = JsonlStore::open(StorageConfig::new(config.data_dir.clone()))?;
    let mut tournament = Tournament::new(store, config.tournament.clone());

    match cli.command {
        Commands::Register { name } => {
            let player = tournament.register_player(&name)?;
            println!("Registered {} with id {}", player.name, player.id);
        }
        Commands::Report { winner, loser } => {
            tournament.report_match(winner, loser)?;
            println!("Recorded: {} beat {}", winner, loser);
        }
        Commands::Players => {
            let players = tournament.players()?;
            if players.is_empty() {
                println!("No players registered.");
            }
            for p in players {
                println!("{:>4}  {}", p.id, p.name);
            }
        }
        Commands::Count => {
            println!("{}", tournament.count_players()?);
        }
        Commands::Standings { json } => {
            let standings = tournament.player_standings()?;
            if json {
                println!("{}", serde_json::to_string_pretty(&standings)?);
            } else {
                println!(
                    "{:>4}  {:<30} {:>5} {:>7} {:>7} {:>6}",
                    "ID", "Name", "Wins", "Losses", "Matches", "Win%"
                );
                for s in &standings {
                    println!(
                        "{:>4}  {:<30} {:>5} {:>7} {:>7} {:>5.1}%",
                        s.player_id,
                        s.name,
                        s.wins,
                        s.losses(),
                        s.matches_played,
                        s.win_rate() * 100.0
                    );
                }
            }
        }
        Commands::Pairings { json } => {
            let pairings = tournament.swiss_pairings()?;
            if json {
                println!("{}", serde_json::to_string_pretty(&pairings)?);
            } else {
                for (table, p) in pairings.iter().enumerate() {
                    println!(
                        "Table {:>3}: {} ({}) vs {} ({})",
                        table + 1,
                        p.player1_name,
                        p.player1_id,
                        p.player2_name,
                        p.player2_id
                    );
                }
            }
        }
        Commands::DeleteMatches => {
            tournament.delete_matches()?;
            println!("All matches deleted.");
        }
        Commands::DeletePlayers => {
            let deleted = tournament.delete_players()?;
            println!("Deleted {} players.", deleted);
        }
        Commands::Reset => {
            tournament.reset()?;
            println!("Tournament reset.");
        }
        Commands::Serve { host, port } => {
            let host = host.unwrap_or_else(|| config.server.host.clone());
            let port = port.unwrap_or(config.server.port);

            let state = AppState::new(tournament);
            let app =
                swiss_tracker::api::build_router_with_cors(state, &config.server.cors_origin);
            let addr = format!("{}:{}", host, port);
            let listener = tokio::net::TcpListener::bind(&addr).await?;
            tracing::info!("Listening on http://{}", addr);
            axum::serve(listener, app).await?;
        }
    }

    Ok(())
}
