use rand::{rngs::SmallRng, SeedableRng};
use serde_json::json;
use trapfive::{
    AiPlayer, Authority, AuthorityServer, Color, InMemoryTransport, MatchSession, PlayerNode,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args: Vec<String> = std::env::args().collect();
    if !(3..=4).contains(&args.len()) {
        eprintln!("Usage: {} <seed1> <seed2> [matches]", args[0]);
        std::process::exit(1);
    }
    let seed1: u64 = args[1].parse()?;
    let seed2: u64 = args[2].parse()?;
    let matches: usize = match args.get(3) {
        Some(n) => n.parse()?,
        None => 1,
    };

    let (server_host, host_end) = InMemoryTransport::pair();
    let (server_guest, guest_end) = InMemoryTransport::pair();

    let authority = Authority::new(MatchSession::new(), SmallRng::seed_from_u64(seed1));
    let mut server = AuthorityServer::new(authority, Box::new(server_host), Box::new(server_guest));

    let mut host_rng = SmallRng::seed_from_u64(seed1.wrapping_add(1));
    let mut guest_rng = SmallRng::seed_from_u64(seed2);
    let host = AiPlayer::new().with_rematches(matches.saturating_sub(1), true);

    let host_future = async move {
        let mut node = PlayerNode::new(Box::new(host), Box::new(host_end));
        node.run(&mut host_rng).await
    };
    let guest_future = async move {
        let mut node = PlayerNode::new(Box::new(AiPlayer::new()), Box::new(guest_end));
        node.run(&mut guest_rng).await
    };

    let (report, (), ()) = tokio::try_join!(server.run(), host_future, guest_future)?;

    let wins = |color: Color| report.matches.iter().filter(|m| m.winner == color).count();
    let result = json!({
        "matches": report
            .matches
            .iter()
            .map(|m| json!({"host_color": m.host_color, "winner": m.winner}))
            .collect::<Vec<_>>(),
        "black_wins": wins(Color::Black),
        "white_wins": wins(Color::White),
        "left_by": report.left_by.0,
    });

    println!("{}", serde_json::to_string(&result)?);
    Ok(())
}
