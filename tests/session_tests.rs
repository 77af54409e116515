use rand::{rngs::SmallRng, SeedableRng};
use trapfive::{
    AiPlayer, Authority, AuthorityServer, Color, InMemoryTransport, MatchSession, Message,
    PlayerNode, Transport, AUTHORITY_PARTICIPANT, GUEST_PARTICIPANT, PROTOCOL_VERSION,
};

fn server(seed: u64) -> (AuthorityServer<SmallRng>, InMemoryTransport, InMemoryTransport) {
    let (server_host, host_end) = InMemoryTransport::pair();
    let (server_guest, guest_end) = InMemoryTransport::pair();
    let authority = Authority::new(MatchSession::new(), SmallRng::seed_from_u64(seed));
    (
        AuthorityServer::new(authority, Box::new(server_host), Box::new(server_guest)),
        host_end,
        guest_end,
    )
}

async fn handshake(link: &mut InMemoryTransport) -> anyhow::Result<Message> {
    link.send(Message::Handshake {
        version: PROTOCOL_VERSION,
    })
    .await?;
    link.recv().await
}

/// Read until the opening `TurnChanged` of a match.
async fn drain_opening(link: &mut InMemoryTransport) -> anyhow::Result<Vec<Message>> {
    let mut seen = Vec::new();
    loop {
        let msg = link.recv().await?;
        let done = matches!(msg, Message::TurnChanged { .. });
        seen.push(msg);
        if done {
            return Ok(seen);
        }
    }
}

#[tokio::test]
async fn ai_session_keeps_replicas_in_sync() -> anyhow::Result<()> {
    for seed in [1u64, 2, 3] {
        let (mut server, host_end, guest_end) = server(seed);
        let host_player = AiPlayer::new().with_rematches(2, true);
        let mut host_rng = SmallRng::seed_from_u64(seed + 100);
        let mut guest_rng = SmallRng::seed_from_u64(seed + 200);

        let host = async move {
            let mut node = PlayerNode::new(Box::new(host_player), Box::new(host_end));
            node.run(&mut host_rng).await?;
            Ok::<_, anyhow::Error>(node.replica().cloned())
        };
        let guest = async move {
            let mut node = PlayerNode::new(Box::new(AiPlayer::new()), Box::new(guest_end));
            node.run(&mut guest_rng).await?;
            Ok::<_, anyhow::Error>(node.replica().cloned())
        };

        let (report, host_view, guest_view) = tokio::try_join!(server.run(), host, guest)?;
        let host_view = host_view.expect("host replica");
        let guest_view = guest_view.expect("guest replica");
        let engine = server.authority().engine();

        // An AI may concede a stalled match, so fewer than three can finish.
        assert!(report.matches.len() <= 3);
        assert_eq!(host_view.board(), engine.board());
        assert_eq!(guest_view.board(), engine.board());
        assert_eq!(host_view.winner(), engine.winner());

        // Private layers: each side knows exactly its own traps, and only
        // the guest was told about public traps.
        let host_color = server.authority().host_color();
        assert_eq!(host_view.color(), Some(host_color));
        assert_eq!(guest_view.color(), Some(host_color.opponent()));
        assert_eq!(host_view.my_traps(), engine.hidden_traps(host_color));
        assert_eq!(
            guest_view.my_traps(),
            engine.hidden_traps(host_color.opponent())
        );
        assert!(host_view.known_public_traps().is_empty());
        assert_eq!(guest_view.known_public_traps(), engine.public_traps());
        assert_eq!(host_view.matches_seen(), guest_view.matches_seen());

        // Swapping every rematch alternates the host's colour.
        for (i, record) in report.matches.iter().enumerate() {
            let expected = if i % 2 == 0 { Color::Black } else { Color::White };
            assert_eq!(record.host_color, expected);
        }
    }
    Ok(())
}

#[tokio::test]
async fn handshake_assigns_participant_ids() -> anyhow::Result<()> {
    let (mut server, mut host, mut guest) = server(5);
    let task = tokio::spawn(async move { server.run().await });

    assert_eq!(
        handshake(&mut host).await?,
        Message::HandshakeAck {
            version: PROTOCOL_VERSION,
            participant: AUTHORITY_PARTICIPANT
        }
    );
    assert_eq!(
        handshake(&mut guest).await?,
        Message::HandshakeAck {
            version: PROTOCOL_VERSION,
            participant: GUEST_PARTICIPANT
        }
    );

    let host_opening = drain_opening(&mut host).await?;
    let guest_opening = drain_opening(&mut guest).await?;
    assert_eq!(
        host_opening[0],
        Message::MatchStarted {
            host_color: Color::Black
        }
    );
    assert_eq!(host_opening.len(), 2);
    assert_eq!(guest_opening.len(), 12);

    guest.send(Message::Leave).await?;
    assert_eq!(host.recv().await?, Message::MatchClosed);

    let report = task.await??;
    assert_eq!(report.left_by, GUEST_PARTICIPANT);
    assert!(report.matches.is_empty());
    Ok(())
}

#[tokio::test]
async fn version_mismatch_aborts_the_session() -> anyhow::Result<()> {
    let (mut server, mut host, mut guest) = server(6);
    let task = tokio::spawn(async move { server.run().await });

    handshake(&mut host).await?;
    guest.send(Message::Handshake { version: 99 }).await?;

    let err = task.await?.unwrap_err();
    assert!(err.to_string().contains("version mismatch"));
    Ok(())
}

#[tokio::test]
async fn invalid_requests_are_silently_dropped() -> anyhow::Result<()> {
    let (mut server, mut host, mut guest) = server(7);
    let task = tokio::spawn(async move { server.run().await });
    handshake(&mut host).await?;
    handshake(&mut guest).await?;
    drain_opening(&mut host).await?;
    drain_opening(&mut guest).await?;

    // Off the board, and a message only the authority may send.
    guest
        .send(Message::PlacePieceRequest { x: 12, z: 0 })
        .await?;
    guest
        .send(Message::WinnerSet {
            color: Color::White,
        })
        .await?;
    host.send(Message::PlaceTrapRequest { x: 0, z: 0 }).await?;

    // The host's own trap comes back to it; the guest only sees the turn pass.
    assert!(matches!(
        host.recv().await?,
        Message::TrapPlacedVisual {
            owner: AUTHORITY_PARTICIPANT,
            ..
        }
    ));
    assert_eq!(
        host.recv().await?,
        Message::TurnChanged {
            color: Color::White
        }
    );
    assert_eq!(
        guest.recv().await?,
        Message::TurnChanged {
            color: Color::White
        }
    );

    host.send(Message::Leave).await?;
    assert_eq!(guest.recv().await?, Message::MatchClosed);
    let report = task.await??;
    assert_eq!(report.left_by, AUTHORITY_PARTICIPANT);
    Ok(())
}

#[tokio::test]
async fn dropped_link_closes_the_other_side() -> anyhow::Result<()> {
    let (mut server, mut host, mut guest) = server(8);
    let task = tokio::spawn(async move { server.run().await });
    handshake(&mut host).await?;
    handshake(&mut guest).await?;
    drain_opening(&mut host).await?;
    drop(guest);

    assert_eq!(host.recv().await?, Message::MatchClosed);
    assert!(task.await?.is_err());
    Ok(())
}
