mod helpers;

use std::net::TcpListener;
use std::path::Path;

use anyhow::Result;
use helpers::CannedConnect;
use vocanki::application::ConnectGateway;
use vocanki::domain::{DomainError, Note};
use vocanki::infrastructure::ConnectClient;

#[test]
fn given_store_media_call_when_posting_then_wire_format_matches_ankiconnect() -> Result<()> {
    // Arrange
    let server = CannedConnect::start(vec![(
        200,
        r#"{"result": "물.mp3", "error": null}"#.to_string(),
    )])?;
    let client = ConnectClient::new(server.url())?;

    // Act
    let reply = client.store_media_file("물.mp3", Path::new("/tmp/clips/물.mp3"))?;

    // Assert
    assert_eq!(reply.status_code, 200);
    assert_eq!(reply.error, None);

    let requests = server.finish();
    assert_eq!(requests.len(), 1);
    assert_eq!(requests[0]["action"], "storeMediaFile");
    assert_eq!(requests[0]["version"], 6);
    assert_eq!(requests[0]["params"]["filename"], "물.mp3");
    assert_eq!(requests[0]["params"]["path"], "/tmp/clips/물.mp3");
    Ok(())
}

#[test]
fn given_add_note_call_when_posting_then_payload_carries_fixed_field_labels() -> Result<()> {
    // Arrange
    let server = CannedConnect::start(vec![(
        200,
        r#"{"result": 1496198395707, "error": null}"#.to_string(),
    )])?;
    let client = ConnectClient::new(server.url())?;
    let note = Note::new("죄송합니다", "ごめん")
        .with_deck("test")
        .with_template("Basic (裏表反転カード付き)+sentense");

    // Act
    let reply = client.add_note(&note)?;

    // Assert
    assert_eq!(reply.status_code, 200);
    assert_eq!(reply.result.as_ref().and_then(|v| v.as_i64()), Some(1496198395707));
    assert_eq!(reply.error, None);

    let requests = server.finish();
    assert_eq!(requests.len(), 1);
    assert_eq!(requests[0]["action"], "addNote");
    assert_eq!(requests[0]["version"], 6);

    let payload = &requests[0]["params"]["note"];
    assert_eq!(payload["deckName"], "test");
    assert_eq!(payload["modelName"], "Basic (裏表反転カード付き)+sentense");
    assert_eq!(payload["fields"]["表面"], "죄송합니다");
    assert_eq!(payload["fields"]["裏面"], "ごめん");
    Ok(())
}

#[test]
fn given_error_reply_when_posting_then_error_is_surfaced_not_raised() -> Result<()> {
    // Arrange
    let server = CannedConnect::start(vec![(
        200,
        r#"{"result": null, "error": "cannot create note because it is a duplicate"}"#.to_string(),
    )])?;
    let client = ConnectClient::new(server.url())?;

    // Act
    let reply = client.add_note(&Note::new("물", "水"))?;

    // Assert
    assert_eq!(reply.status_code, 200);
    assert_eq!(
        reply.error.as_deref(),
        Some("cannot create note because it is a duplicate")
    );
    server.finish();
    Ok(())
}

#[test]
fn given_non_json_body_when_posting_then_reply_records_parse_failure() -> Result<()> {
    // Arrange
    let server = CannedConnect::start(vec![(500, "oops".to_string())])?;
    let client = ConnectClient::new(server.url())?;

    // Act
    let reply = client.add_note(&Note::new("물", "水"))?;

    // Assert
    assert_eq!(reply.status_code, 500);
    assert!(reply.error.unwrap().contains("unparseable reply"));
    server.finish();
    Ok(())
}

#[test]
fn given_no_listener_when_posting_then_returns_transport_error() -> Result<()> {
    // Arrange: grab a free port, then close it again
    let listener = TcpListener::bind("127.0.0.1:0")?;
    let url = format!("http://{}", listener.local_addr()?);
    drop(listener);

    let client = ConnectClient::new(url)?;

    // Act
    let result = client.add_note(&Note::new("물", "水"));

    // Assert
    assert!(matches!(result, Err(DomainError::Transport(_))));
    Ok(())
}
