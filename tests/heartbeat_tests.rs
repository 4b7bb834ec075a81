use std::time::Duration;

use battleship_client::{
    Coord, GameSession, HeartbeatTransport, InMemoryTransport, Message, RefereeServer,
    RemoteSession, Transport, PROTOCOL_VERSION,
};
use rand::rngs::SmallRng;
use rand::SeedableRng;

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn heartbeats_are_filtered() {
    let (a, mut b) = InMemoryTransport::pair();
    let mut a = HeartbeatTransport::new(a, Duration::from_millis(50), Duration::from_secs(5));

    b.send(Message::Heartbeat {
        version: PROTOCOL_VERSION,
    })
    .await
    .unwrap();
    b.send(Message::NewGame {
        login: "hb".into(),
    })
    .await
    .unwrap();
    assert_eq!(
        a.recv().await.unwrap(),
        Message::NewGame {
            login: "hb".into()
        }
    );
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn disabled_wrapper_still_drops_heartbeats() {
    let (a, mut b) = InMemoryTransport::pair();
    let mut a = HeartbeatTransport::disabled(a);

    b.send(Message::Heartbeat {
        version: PROTOCOL_VERSION,
    })
    .await
    .unwrap();
    b.send(Message::Error {
        reason: "x".into(),
    })
    .await
    .unwrap();
    assert_eq!(a.recv().await.unwrap(), Message::Error { reason: "x".into() });
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn silent_peer_times_out_after_sending_heartbeats() {
    let (a, mut b) = InMemoryTransport::pair();
    let mut a = HeartbeatTransport::new(a, Duration::from_millis(20), Duration::from_millis(100));

    let err = a.recv().await.unwrap_err();
    assert!(err.to_string().contains("idle timeout"), "{}", err);

    assert_eq!(
        b.recv().await.unwrap(),
        Message::Heartbeat {
            version: PROTOCOL_VERSION
        }
    );
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn heartbeat_version_mismatch_is_an_error() {
    let (a, mut b) = InMemoryTransport::pair();
    let mut a = HeartbeatTransport::new(a, Duration::from_millis(50), Duration::from_secs(5));

    b.send(Message::Heartbeat {
        version: PROTOCOL_VERSION + 1,
    })
    .await
    .unwrap();
    let err = a.recv().await.unwrap_err();
    assert!(err.to_string().contains("Heartbeat version mismatch"), "{}", err);
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn idle_client_keeps_the_connection_alive() {
    let (client, server) = InMemoryTransport::pair();
    let server = HeartbeatTransport::new(server, Duration::from_millis(20), Duration::from_millis(100));
    tokio::spawn(async move {
        let mut server = RefereeServer::new(server, SmallRng::seed_from_u64(2), None);
        server.run().await
    });

    let client = HeartbeatTransport::new(client, Duration::from_millis(20), Duration::from_secs(5));
    let mut session = RemoteSession::new(client, "slow-typist");
    let id = session.start_new_game().await.unwrap();

    // Well past the server's idle timeout, without any call on the session.
    tokio::time::sleep(Duration::from_millis(300)).await;

    let result = session.execute_move(&id, Coord::new(4, 4).unwrap()).await;
    assert!(result.shot().is_some(), "{:?}", result);
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn keepalive_runs_outside_recv() {
    let (a, mut b) = InMemoryTransport::pair();
    let mut a = HeartbeatTransport::new(a, Duration::from_millis(20), Duration::from_secs(5));
    a.send(Message::NewGame { login: "x".into() }).await.unwrap();

    tokio::time::sleep(Duration::from_millis(100)).await;

    assert_eq!(b.recv().await.unwrap(), Message::NewGame { login: "x".into() });
    assert_eq!(
        b.recv().await.unwrap(),
        Message::Heartbeat {
            version: PROTOCOL_VERSION
        }
    );
}
