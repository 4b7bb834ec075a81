use std::io::{self, BufReader};

use battleship_client::{
    auto_play, init_logging, ui, AutoPlayConfig, GameSession, HeartbeatTransport, LocalSession,
    ManualPlayer, RefereeServer, RemoteSession, TcpTransport,
};
use clap::{Args, Parser, Subcommand};
use rand::rngs::SmallRng;
use rand::SeedableRng;
use tokio::net::TcpListener;
use tokio::time::Duration;

const HEARTBEAT_INTERVAL: Duration = Duration::from_secs(10);
const IDLE_TIMEOUT: Duration = Duration::from_secs(45);

#[derive(Parser)]
#[command(author, version, about = "Battleship client with hunt/target auto-play", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Args, Clone, Copy)]
struct PlayOpts {
    /// Let the hunt/target strategy play instead of reading `x y` moves.
    #[arg(long)]
    auto: bool,
    /// Give up auto-play after this many move attempts.
    #[arg(long, requires = "auto")]
    max_attempts: Option<u32>,
}

#[derive(Subcommand)]
enum Commands {
    /// Play against a referee running in this process.
    Local {
        #[arg(long, help = "Fix RNG seed for reproducible games (e.g., --seed 12345)")]
        seed: Option<u64>,
        /// Lose the game after this many shots.
        #[arg(long)]
        shot_budget: Option<u32>,
        #[command(flatten)]
        play: PlayOpts,
    },
    /// Host a referee and serve one client connection at a time.
    Serve {
        #[arg(long, default_value = "0.0.0.0:8080")]
        bind: String,
        #[arg(long, help = "Fix RNG seed for reproducible games (e.g., --seed 12345)")]
        seed: Option<u64>,
        /// Clients lose after this many shots.
        #[arg(long)]
        shot_budget: Option<u32>,
    },
    /// Play against a referee server.
    Play {
        #[arg(long, default_value = "127.0.0.1:8080")]
        connect: String,
        #[arg(long, default_value = "player")]
        login: String,
        #[command(flatten)]
        play: PlayOpts,
    },
}

fn seeded_rng(seed: Option<u64>) -> SmallRng {
    match seed {
        Some(s) => {
            log::info!("using fixed seed {} (game will be reproducible)", s);
            SmallRng::seed_from_u64(s)
        }
        None => SmallRng::from_rng(&mut rand::rng()),
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_logging();
    let cli = Cli::parse();

    match cli.command {
        Commands::Local {
            seed,
            shot_budget,
            play,
        } => {
            let mut session = LocalSession::new(seeded_rng(seed), shot_budget);
            run_game(&mut session, play).await?;
        }
        Commands::Serve {
            bind,
            seed,
            shot_budget,
        } => {
            let listener = TcpListener::bind(&bind).await?;
            log::info!("referee listening on {}", listener.local_addr()?);
            let mut rng = seeded_rng(seed);
            loop {
                let (stream, addr) = listener.accept().await?;
                log::info!("client connected from {}", addr);
                let transport = HeartbeatTransport::new(
                    TcpTransport::new(stream),
                    HEARTBEAT_INTERVAL,
                    IDLE_TIMEOUT,
                );
                let conn_rng = SmallRng::from_rng(&mut rng);
                let mut server = RefereeServer::new(transport, conn_rng, shot_budget);
                if let Err(e) = server.run().await {
                    log::warn!("connection from {} ended with an error: {}", addr, e);
                }
            }
        }
        Commands::Play {
            connect,
            login,
            play,
        } => {
            log::info!("connecting to {}", connect);
            let transport = HeartbeatTransport::new(
                TcpTransport::connect(&connect).await?,
                HEARTBEAT_INTERVAL,
                IDLE_TIMEOUT,
            );
            let mut session = RemoteSession::new(transport, login);
            run_game(&mut session, play).await?;
        }
    }
    Ok(())
}

async fn run_game<S: GameSession>(session: &mut S, opts: PlayOpts) -> anyhow::Result<()> {
    let report = if opts.auto {
        let config = AutoPlayConfig {
            max_attempts: opts.max_attempts,
        };
        println!("Auto-play engaged: hunt/target strategy.");
        auto_play(session, config).await?
    } else {
        let id = session.start_new_game().await?;
        println!("New game started. game_id={}", id);
        let mut player = ManualPlayer::new(BufReader::new(io::stdin()), io::stdout());
        player.play(session, &id).await?
    };
    println!("{}", ui::render_report(&report));
    Ok(())
}
