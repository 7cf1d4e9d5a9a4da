//! End-to-end flows: the form components against a live record API
//! backed by the in-memory store.

use std::sync::Arc;

use roster::{api, AppState, MemoryStore, RecordFields};
use roster_client::{ApiClient, ClientError, CreateForm, EditForm, Level, ListView, Nav};

/// Spawn the record API on an ephemeral loopback port and return a client
/// pointed at it.
async fn spawn_api() -> ApiClient {
    let state = AppState::new(Arc::new(MemoryStore::new()));
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind ephemeral port");
    let addr = listener.local_addr().expect("local addr");

    tokio::spawn(async move {
        axum::serve(listener, api::router(state))
            .await
            .expect("server task");
    });

    ApiClient::new(format!("http://{addr}"))
}

fn sample_fields() -> RecordFields {
    RecordFields {
        person_name: "Ann".to_string(),
        person_position: "Engineer".to_string(),
        person_level: "Junior".to_string(),
    }
}

#[tokio::test]
async fn create_form_round_trip() {
    let client = spawn_api().await;

    let mut form = CreateForm::new();
    form.set_person_name("Ann");
    form.set_person_position("Engineer");
    form.set_person_level(Level::Junior);
    form.submit(&client).await;

    // The form resets itself after posting.
    assert!(form.is_empty());

    let records = client.list_records().await.unwrap();
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].fields, sample_fields());

    let id = records[0].id.clone().unwrap();
    let fetched = client.get_record(&id).await.unwrap().unwrap();
    assert_eq!(fetched.fields, sample_fields());
}

#[tokio::test]
async fn edit_form_loads_and_updates() {
    let client = spawn_api().await;
    let ack = client.create_record(&sample_fields()).await.unwrap();

    let mut form = EditForm::for_record(ack.inserted_id.clone());
    form.load(&client).await;
    assert_eq!(form.person_name(), "Ann");
    assert_eq!(form.person_position(), "Engineer");
    assert_eq!(form.person_level(), "Junior");

    form.set_person_level(Level::Senior);
    assert_eq!(form.submit(&client).await, Nav::BackToList);

    let fetched = client.get_record(&ack.inserted_id).await.unwrap().unwrap();
    assert_eq!(fetched.fields.person_level, "Senior");
    assert_eq!(fetched.fields.person_name, "Ann");
    assert_eq!(fetched.fields.person_position, "Engineer");
}

#[tokio::test]
async fn list_view_deletes_locally_and_remotely() {
    let client = spawn_api().await;
    let first = client.create_record(&sample_fields()).await.unwrap();
    let mut other = sample_fields();
    other.person_name = "Bo".to_string();
    client.create_record(&other).await.unwrap();

    let mut view = ListView::new();
    view.load(&client).await;
    assert_eq!(view.records().len(), 2);

    view.delete(&first.inserted_id, &client).await;
    assert_eq!(view.records().len(), 1);
    assert_eq!(view.records()[0].fields.person_name, "Bo");

    assert!(client.get_record(&first.inserted_id).await.unwrap().is_none());
    assert_eq!(client.list_records().await.unwrap().len(), 1);
}

#[tokio::test]
async fn update_absent_record_matches_nothing() {
    let client = spawn_api().await;

    let absent = "64ab00000000000000000009";
    let ack = client.update_record(absent, &sample_fields()).await.unwrap();
    assert_eq!(ack.matched_count, 0);
    assert_eq!(ack.modified_count, 0);
    assert!(client.list_records().await.unwrap().is_empty());
}

#[tokio::test]
async fn delete_returns_acknowledgment_json() {
    let client = spawn_api().await;
    let ack = client.create_record(&sample_fields()).await.unwrap();

    let deleted = client.delete_record(&ack.inserted_id).await.unwrap();
    assert!(deleted.acknowledged);
    assert_eq!(deleted.deleted_count, 1);
}

#[tokio::test]
async fn invalid_id_surfaces_as_bad_request() {
    let client = spawn_api().await;

    let err = client.get_record("not-an-id").await.unwrap_err();
    match err {
        ClientError::Status { status, .. } => assert_eq!(status.as_u16(), 400),
        other => panic!("expected status error, got {other:?}"),
    }
}

#[tokio::test]
async fn missing_body_fields_stored_as_empty() {
    let client = spawn_api().await;

    let ack = client.create_record(&RecordFields::default()).await.unwrap();
    let fetched = client.get_record(&ack.inserted_id).await.unwrap().unwrap();
    assert_eq!(fetched.fields, RecordFields::default());
}

#[tokio::test]
async fn create_form_resets_when_endpoint_is_down() {
    let client = ApiClient::new("http://127.0.0.1:1");

    let mut form = CreateForm::new();
    form.set_person_name("Ann");
    form.submit(&client).await;
    assert!(form.is_empty());
}
