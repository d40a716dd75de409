use crate::util::host::{match_at, spawn, RED};
use crate::util::init;
use forfeit::event::ChatCommandEvent;
use forfeit::CommandOutcome;
use forfeit_common::types::Team;

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn simultaneous_votes_end_match_once() {
    init();
    let host = match_at(0, 3);
    let (handle, _) = spawn(&host);

    let outcomes = futures::future::join_all(RED.iter().map(|id| {
        let handle = handle.clone();
        let id = *id;
        tokio::spawn(async move { handle.chat_command(ChatCommandEvent::new("/ff", id)).await })
    }))
    .await;

    let outcomes = outcomes
        .into_iter()
        .map(|r| r.unwrap().unwrap())
        .collect::<Vec<_>>();
    let forfeited = outcomes
        .iter()
        .filter(|o| **o == CommandOutcome::Forfeited { team: Team::Red })
        .count();

    assert_eq!(forfeited, 1);
    assert_eq!(host.end_match_calls(), 1);
    assert!(outcomes.contains(&CommandOutcome::NoActiveMatch));
}

#[tokio::test]
async fn cloned_handles_share_votes() {
    init();
    let host = match_at(0, 3);
    let (handle, _) = spawn(&host);
    let other = handle.clone();

    handle
        .chat_command(ChatCommandEvent::new("/ff", RED[0]))
        .await
        .unwrap();

    assert_eq!(
        other
            .chat_command(ChatCommandEvent::new("/ff", RED[1]))
            .await
            .unwrap(),
        CommandOutcome::InProgress {
            count: 2,
            needed: 3
        }
    );
}
