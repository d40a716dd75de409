use crate::util::host::{match_at, spawn};
use crate::util::init;
use forfeit::coordinator::error::CommandError;
use forfeit::event::error::EventError;
use forfeit::service::error::ServiceError;
use forfeit::text;
use forfeit::CommandOutcome;
use forfeit_common::types::ClientId;
use std::collections::HashMap;

fn payload(pairs: &[(&str, &str)]) -> HashMap<String, String> {
    pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect()
}

#[tokio::test]
async fn raw_payload_is_parsed() {
    init();
    let host = match_at(0, 3);
    let (handle, _) = spawn(&host);

    let outcome = handle
        .chat_command_fields(&payload(&[("command", "/help"), ("clientId", "2")]))
        .await
        .unwrap();

    assert_eq!(outcome, CommandOutcome::Help);
    assert_eq!(host.messages_to(2), vec![text::prefixed(text::HELP)]);
}

#[tokio::test]
async fn incomplete_payload_is_dropped() {
    init();
    let host = match_at(0, 3);
    let (handle, _) = spawn(&host);

    assert_eq!(
        handle
            .chat_command_fields(&payload(&[("command", "/ff")]))
            .await,
        Err(ServiceError::Event(EventError::MissingField("clientId")))
    );
    assert!(matches!(
        handle
            .chat_command_fields(&payload(&[("command", "/ff"), ("clientId", "abc")]))
            .await,
        Err(ServiceError::Event(EventError::InvalidClientId(_)))
    ));
    assert!(host.broadcasts().is_empty());
    assert_eq!(host.direct_message_count(), 0);
}

#[tokio::test]
async fn unknown_client_is_reported() {
    init();
    let host = match_at(0, 3);
    let (handle, _) = spawn(&host);

    assert_eq!(
        handle
            .chat_command_fields(&payload(&[("command", "/ff"), ("clientId", "404")]))
            .await,
        Err(ServiceError::Command(CommandError::PlayerNotFound(
            ClientId::new(404)
        )))
    );
}
