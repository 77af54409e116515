use trapfive::{Cell, Color, InMemoryTransport, Message, Transport};

#[tokio::test]
async fn messages_arrive_in_order() -> anyhow::Result<()> {
    let (mut a, mut b) = InMemoryTransport::pair();
    let cell = Cell::new(3, 4)?;
    a.send(Message::PlacePieceRequest { x: 3, z: 4 }).await?;
    a.send(Message::Leave).await?;
    b.send(Message::PieceSpawned {
        cell,
        color: Color::Black,
    })
    .await?;

    assert_eq!(b.recv().await?, Message::PlacePieceRequest { x: 3, z: 4 });
    assert_eq!(b.recv().await?, Message::Leave);
    assert_eq!(
        a.recv().await?,
        Message::PieceSpawned {
            cell,
            color: Color::Black
        }
    );
    Ok(())
}

#[tokio::test]
async fn dropped_peer_closes_the_channel() {
    let (mut a, b) = InMemoryTransport::pair();
    drop(b);
    assert!(a.send(Message::Leave).await.is_err());
    let err = a.recv().await.unwrap_err();
    assert!(err.to_string().contains("Channel closed"));
}

#[tokio::test]
async fn cancelled_recv_loses_nothing() -> anyhow::Result<()> {
    let (mut a, mut b) = InMemoryTransport::pair();
    let waited =
        tokio::time::timeout(std::time::Duration::from_millis(20), b.recv()).await;
    assert!(waited.is_err());
    a.send(Message::MatchClosed).await?;
    assert_eq!(b.recv().await?, Message::MatchClosed);
    Ok(())
}
