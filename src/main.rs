#[cfg(not(feature = "std"))]
fn main() {}

#[cfg(feature = "std")]
use clap::{Parser, Subcommand, ValueEnum};
#[cfg(feature = "std")]
use rand::rngs::SmallRng;
#[cfg(feature = "std")]
use rand::SeedableRng;
#[cfg(feature = "std")]
use tokio::net::TcpListener;
#[cfg(feature = "std")]
use trapfive::{
    init_logging, AiPlayer, Authority, AuthorityServer, CliPlayer, InMemoryTransport,
    MatchSession, Player, PlayerNode, SessionReport, TcpTransport, Transport,
};

#[derive(Parser)]
#[command(author, version, about = "Two-player five-in-a-row with hidden traps", long_about = None)]
#[cfg(feature = "std")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(ValueEnum, Clone, Copy, Debug)]
#[cfg(feature = "std")]
enum PlayerType {
    Human,
    Ai,
}

#[derive(Subcommand)]
#[cfg(feature = "std")]
enum Commands {
    /// Watch two AIs play each other on the local machine.
    Local {
        #[arg(long, help = "Fix RNG seed for reproducible games (e.g., --seed 12345)")]
        seed: Option<u64>,
        #[arg(long, default_value_t = 1, help = "Number of matches to play")]
        matches: usize,
    },
    /// Host a session: run the authority and play as the host.
    Host {
        #[arg(long, default_value = "0.0.0.0:8080")]
        bind: String,
        #[arg(long, value_enum, default_value_t = PlayerType::Human)]
        player: PlayerType,
        #[arg(long, help = "Fix RNG seed for reproducible games (e.g., --seed 12345)")]
        seed: Option<u64>,
    },
    /// Join a session hosted elsewhere.
    Join {
        #[arg(long, default_value = "127.0.0.1:8080")]
        connect: String,
        #[arg(long, value_enum, default_value_t = PlayerType::Human)]
        player: PlayerType,
        #[arg(long, help = "Fix RNG seed for reproducible games (e.g., --seed 12345)")]
        seed: Option<u64>,
    },
}

#[cfg(feature = "std")]
fn make_rng(seed: Option<u64>, offset: u64) -> SmallRng {
    match seed {
        Some(s) => SmallRng::seed_from_u64(s.wrapping_add(offset)),
        None => SmallRng::from_rng(&mut rand::rng()),
    }
}

#[cfg(feature = "std")]
fn make_player(kind: PlayerType) -> Box<dyn Player> {
    match kind {
        PlayerType::Human => Box::new(CliPlayer::new()),
        PlayerType::Ai => Box::new(AiPlayer::new()),
    }
}

#[cfg(feature = "std")]
fn print_report(report: &SessionReport) {
    println!("\nSession over after {} finished match(es).", report.matches.len());
    for (i, record) in report.matches.iter().enumerate() {
        println!(
            "  match {}: host played {}, {} won",
            i + 1,
            record.host_color,
            record.winner
        );
    }
}

/// Run the authority on a background task, fed by `host_link` for the local
/// participant and `guest` for the remote one, and play `player` locally.
#[cfg(feature = "std")]
async fn host_session(
    player: Box<dyn Player>,
    guest: Box<dyn Transport>,
    seed: Option<u64>,
) -> anyhow::Result<SessionReport> {
    let (server_end, node_end) = InMemoryTransport::pair();
    let authority = Authority::new(MatchSession::new(), make_rng(seed, 0));
    let mut server = AuthorityServer::new(authority, Box::new(server_end), guest);
    let server_task = tokio::spawn(async move { server.run().await });

    let mut rng = make_rng(seed, 1);
    let mut node = PlayerNode::new(player, Box::new(node_end));
    if let Err(e) = node.run(&mut rng).await {
        eprintln!("Game ended with an error: {}", e);
    }
    // closes the host link so the server cannot outlive us
    drop(node);
    server_task.await?
}

#[cfg(feature = "std")]
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_logging();
    let cli = Cli::parse();

    match cli.command {
        Commands::Local { seed, matches } => {
            println!("Starting local AI vs AI session...");
            if let Some(s) = seed {
                println!("Using fixed seed: {} (session will be reproducible)", s);
            }
            let (guest_link, guest_end) = InMemoryTransport::pair();
            let host = AiPlayer::new().with_rematches(matches.saturating_sub(1), true);
            let mut guest_rng = make_rng(seed, 2);
            let guest = async move {
                let mut node = PlayerNode::new(Box::new(AiPlayer::new()), Box::new(guest_end));
                node.run(&mut guest_rng).await
            };
            let (report, ()) = tokio::try_join!(
                host_session(Box::new(host), Box::new(guest_link), seed),
                guest
            )?;
            print_report(&report);
        }
        Commands::Host { bind, player, seed } => {
            println!("Hosting at {}...", bind);
            if let Some(s) = seed {
                println!("Using fixed seed: {} (session will be reproducible)", s);
            }
            let listener = TcpListener::bind(&bind).await?;
            println!("Waiting for a player to connect...");
            let (stream, addr) = listener.accept().await?;
            println!("Player connected from {}", addr);
            let guest = Box::new(TcpTransport::new(stream));
            let report = host_session(make_player(player), guest, seed).await?;
            print_report(&report);
        }
        Commands::Join {
            connect,
            player,
            seed,
        } => {
            println!("Connecting to {}...", connect);
            let transport = TcpTransport::connect(&connect).await?;
            println!("Connected successfully!");
            let mut rng = make_rng(seed, 2);
            let mut node = PlayerNode::new(make_player(player), Box::new(transport));
            if let Err(e) = node.run(&mut rng).await {
                eprintln!("Game ended with an error: {}", e);
            }
        }
    }
    Ok(())
}
