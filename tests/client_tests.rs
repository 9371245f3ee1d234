use std::cell::RefCell;
use std::collections::VecDeque;

use futures::executor::block_on;
use insights_hub::api::{
    ApiClient, ApiRequest, ApiResponse, CsvUpload, Method, RequestBody, Transport, UploadFile,
    UploadKind,
};
use insights_hub::error::ApiError;
use insights_hub::session::Session;
use insights_hub::view::{login_status, source_rows, summary_rows, DashboardView, LOGIN_FAILED};

/// Replays canned responses in order and records every request it sees.
#[derive(Default)]
struct RecordingTransport {
    responses: RefCell<VecDeque<Result<ApiResponse, ApiError>>>,
    requests: RefCell<Vec<ApiRequest>>,
}

impl RecordingTransport {
    fn with(responses: Vec<ApiResponse>) -> Self {
        Self {
            responses: RefCell::new(responses.into_iter().map(Ok).collect()),
            requests: RefCell::new(Vec::new()),
        }
    }

    fn failing(err: ApiError) -> Self {
        Self {
            responses: RefCell::new(VecDeque::from([Err(err)])),
            requests: RefCell::new(Vec::new()),
        }
    }

    fn requests(&self) -> Vec<ApiRequest> {
        self.requests.borrow().clone()
    }
}

impl Transport for RecordingTransport {
    async fn send(&self, request: ApiRequest) -> Result<ApiResponse, ApiError> {
        self.requests.borrow_mut().push(request);
        self.responses
            .borrow_mut()
            .pop_front()
            .unwrap_or_else(|| panic!("Unexpected request, no response queued"))
    }
}

fn csv_file() -> UploadFile {
    UploadFile {
        name: "streams.csv".to_string(),
        bytes: b"artist,streams\nX,5\n".to_vec(),
    }
}

#[test]
fn test_login_success_stores_token() {
    let client = ApiClient::new(RecordingTransport::with(vec![ApiResponse::new(
        200,
        r#"{"access_token":"abc","token_type":"bearer"}"#,
    )]));
    let mut session = Session::new();

    let result = block_on(client.login(&mut session, "admin", "secret"));

    assert_eq!(session.token(), Some("abc"));
    assert!(login_status(&result, true).contains("abc"));

    let requests = client.transport().requests();
    assert_eq!(requests.len(), 1);
    assert_eq!(requests[0].method, Method::POST);
    assert_eq!(requests[0].path, "/auth/login");
    assert_eq!(
        requests[0].body,
        RequestBody::Json(serde_json::json!({"username": "admin", "password": "secret"}))
    );
    assert_eq!(requests[0].bearer, None, "Login must not carry a bearer token");
}

#[test]
fn test_login_401_clears_token() {
    let client = ApiClient::new(RecordingTransport::with(vec![ApiResponse::new(
        401,
        r#"{"detail":"Credenciais inválidas"}"#,
    )]));
    let mut session = Session::with_token("stale");

    let result = block_on(client.login(&mut session, "admin", "wrong"));

    assert_eq!(session.token(), None);
    assert_eq!(result.as_ref().unwrap_err().status(), Some(401));
    assert_eq!(login_status(&result, false), LOGIN_FAILED);
}

#[test]
fn test_login_network_failure_clears_token() {
    let client = ApiClient::new(RecordingTransport::failing(ApiError::Network(
        "Failed to fetch".to_string(),
    )));
    let mut session = Session::with_token("stale");

    let result = block_on(client.login(&mut session, "admin", "secret"));

    assert!(matches!(result, Err(ApiError::Network(_))));
    assert!(!session.is_authenticated());
}

#[test]
fn test_list_sources_renders_active_as_sim() {
    let client = ApiClient::new(RecordingTransport::with(vec![ApiResponse::new(
        200,
        r#"[{"id":1,"name":"A","type":"spotify","active":true}]"#,
    )]));

    let sources = block_on(client.list_sources(&Session::new())).expect("list should succeed");
    let rows = source_rows(&sources);

    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].active, "Sim");
    assert_eq!(rows[0].name, "A");
}

#[test]
fn test_requests_carry_bearer_after_login() {
    let client = ApiClient::new(RecordingTransport::with(vec![ApiResponse::new(200, "[]")]));
    let session = Session::with_token("abc");

    block_on(client.list_sources(&session)).expect("list should succeed");

    let requests = client.transport().requests();
    assert_eq!(requests[0].bearer.as_deref(), Some("abc"));
}

#[test]
fn test_summary_revenue_has_two_decimals() {
    let client = ApiClient::new(RecordingTransport::with(vec![ApiResponse::new(
        200,
        r#"{"rows":[{"artist":"X","platform":"Y","plays":5,"revenue":12.3}]}"#,
    )]));

    let summary = block_on(client.load_summary(&Session::new())).expect("summary should load");
    let rows = summary_rows(&summary);

    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].revenue, "12.30");
    assert_eq!(client.transport().requests()[0].path, "/reports/summary");
}

#[test]
fn test_summary_without_rows_is_empty() {
    let client = ApiClient::new(RecordingTransport::with(vec![ApiResponse::new(
        200,
        r#"{"total_artists":0,"total_tracks":0,"total_streams":0,"first_date":null,"last_date":null}"#,
    )]));

    let summary = block_on(client.load_summary(&Session::new())).expect("summary should load");

    assert!(summary_rows(&summary).is_empty());
}

#[test]
fn test_create_source_with_empty_name_sends_nothing() {
    let client = ApiClient::new(RecordingTransport::default());

    let result = block_on(client.create_source(&Session::new(), "", "spotify"));

    assert!(matches!(result, Err(ApiError::Validation(_))), "got {:?}", result);
    assert!(client.transport().requests().is_empty());

    let blank_type = block_on(client.create_source(&Session::new(), "A", "   "));
    assert!(blank_type.unwrap_err().is_validation());
    assert!(client.transport().requests().is_empty());
}

#[test]
fn test_create_source_posts_then_refetches() {
    let client = ApiClient::new(RecordingTransport::with(vec![
        ApiResponse::new(200, r#"{"id":2,"name":"B","type":"CSV","active":true}"#),
        ApiResponse::new(
            200,
            r#"[{"id":1,"name":"A","type":"spotify","active":true},{"id":2,"name":"B","type":"CSV","active":true}]"#,
        ),
    ]));

    let sources = block_on(client.create_source(&Session::new(), " B ", "CSV"))
        .expect("create should succeed")
        .refreshed
        .expect("refresh should succeed");

    assert_eq!(sources.len(), 2);
    let requests = client.transport().requests();
    assert_eq!(requests.len(), 2);
    assert_eq!(requests[0].method, Method::POST);
    assert_eq!(
        requests[0].body,
        RequestBody::Json(serde_json::json!({"name": "B", "type": "CSV", "active": true}))
    );
    assert_eq!(requests[1].method, Method::GET);
    assert_eq!(requests[1].path, "/sources/");
}

#[test]
fn test_create_source_succeeds_when_refresh_fails() {
    let client = ApiClient::new(RecordingTransport::with(vec![
        ApiResponse::new(200, r#"{"id":9,"name":"C","type":"API","active":true}"#),
        ApiResponse::new(500, ""),
    ]));

    let created = block_on(client.create_source(&Session::new(), "C", "API"))
        .expect("the source was created even though the list reload failed");

    assert_eq!(created.refreshed.unwrap_err().status(), Some(500));
    assert_eq!(client.transport().requests().len(), 2);
}

#[test]
fn test_create_source_failure_skips_refetch() {
    let client = ApiClient::new(RecordingTransport::with(vec![ApiResponse::new(500, "")]));

    let result = block_on(client.create_source(&Session::new(), "A", "API"));

    assert_eq!(result.unwrap_err().status(), Some(500));
    assert_eq!(client.transport().requests().len(), 1);
}

#[test]
fn test_get_source_404_surfaces_detail() {
    let client = ApiClient::new(RecordingTransport::with(vec![ApiResponse::new(
        404,
        r#"{"detail":"Fonte não encontrada"}"#,
    )]));

    let err = block_on(client.get_source(&Session::new(), 42)).unwrap_err();

    assert_eq!(
        err,
        ApiError::Http {
            status: 404,
            message: "Fonte não encontrada".to_string()
        }
    );
    assert_eq!(client.transport().requests()[0].path, "/sources/42");
}

#[test]
fn test_upload_without_file_sends_nothing() {
    let client = ApiClient::new(RecordingTransport::default());

    let result = block_on(client.upload_csv(&Session::new(), CsvUpload::new(UploadKind::Artists, None)));

    assert!(matches!(result, Err(ApiError::Validation(_))));
    assert!(client.transport().requests().is_empty());
}

#[test]
fn test_upload_routes_by_kind() {
    let client = ApiClient::new(RecordingTransport::with(vec![
        ApiResponse::new(200, r#"{"status":"ok","rows_inserted":1}"#),
        ApiResponse::new(200, r#"{"message":"ok","ingestion_id":7}"#),
    ]));
    let session = Session::new();

    let artists = block_on(client.upload_csv(
        &session,
        CsvUpload::new(UploadKind::Artists, Some(csv_file())).with_distributor("FUGA"),
    ))
    .expect("artists upload");
    let devices = block_on(client.upload_csv(
        &session,
        CsvUpload::new(UploadKind::Devices, Some(csv_file())).with_distributor("FUGA"),
    ))
    .expect("devices upload");

    assert_eq!(artists["rows_inserted"], 1);
    assert_eq!(devices["ingestion_id"], 7);

    let requests = client.transport().requests();
    assert_eq!(requests[0].path, "/upload/artists");
    assert_eq!(requests[1].path, "/upload/devices");
    match (&requests[0].body, &requests[1].body) {
        (
            RequestBody::Multipart { file_field, file, fields: artist_fields },
            RequestBody::Multipart { fields: device_fields, .. },
        ) => {
            assert_eq!(file_field, "file");
            assert_eq!(file.name, "streams.csv");
            assert!(artist_fields.is_empty(), "Distributor only applies to device reports");
            assert_eq!(
                device_fields,
                &vec![("distributor".to_string(), "FUGA".to_string())]
            );
        }
        other => panic!("Expected multipart bodies, got {:?}", other),
    }
}

#[test]
fn test_device_upload_requires_distributor() {
    let client = ApiClient::new(RecordingTransport::default());
    let session = Session::new();

    let missing = block_on(client.upload_csv(
        &session,
        CsvUpload::new(UploadKind::Devices, Some(csv_file())),
    ));
    let blank = block_on(client.upload_csv(
        &session,
        CsvUpload::new(UploadKind::Devices, Some(csv_file())).with_distributor("  "),
    ));

    assert!(missing.unwrap_err().is_validation());
    assert!(blank.unwrap_err().is_validation());
    assert!(client.transport().requests().is_empty());
}

#[test]
fn test_rejected_upload_shows_server_detail() {
    let client = ApiClient::new(RecordingTransport::with(vec![ApiResponse::new(
        400,
        r#"{"detail":"Arquivo inválido"}"#,
    )]));

    let result = block_on(client.upload_csv(
        &Session::new(),
        CsvUpload::new(UploadKind::Artists, Some(csv_file())),
    ));

    match DashboardView::from_upload(result) {
        DashboardView::Error(message) => {
            assert!(message.contains("Arquivo inválido"), "got {}", message);
            assert!(message.contains("400"), "got {}", message);
        }
        other => panic!("Expected Error view, got {:?}", other),
    }
}

#[test]
fn test_malformed_json_is_decode_error() {
    let client = ApiClient::new(RecordingTransport::with(vec![ApiResponse::new(200, "<html>")]));

    let result = block_on(client.list_sources(&Session::new()));

    assert!(matches!(result, Err(ApiError::Decode(_))), "got {:?}", result);
}

#[test]
fn test_delete_ingestion_refetches_history() {
    let client = ApiClient::new(RecordingTransport::with(vec![
        ApiResponse::new(200, r#"{"status":"ok","deleted_ingestion_id":3}"#),
        ApiResponse::new(
            200,
            r#"[{"id":4,"source_id":1,"file_name":"a.csv","ingested_at":"2024-05-01T10:00:00","total_rows":12}]"#,
        ),
    ]));

    let history = block_on(client.delete_ingestion(&Session::new(), 3))
        .expect("delete should succeed")
        .refreshed
        .expect("refresh should succeed");

    assert_eq!(history.len(), 1);
    assert_eq!(history[0].total_rows, Some(12));
    let requests = client.transport().requests();
    assert_eq!(requests[0].method, Method::DELETE);
    assert_eq!(requests[0].path, "/ingestions/3");
    assert_eq!(requests[1].path, "/ingestions/");
}

#[test]
fn test_delete_ingestion_succeeds_when_refresh_fails() {
    let client = ApiClient::new(RecordingTransport::with(vec![
        ApiResponse::new(200, r#"{"status":"ok","deleted_ingestion_id":3}"#),
    ]));
    // Queue a network failure for the history reload.
    client
        .transport()
        .responses
        .borrow_mut()
        .push_back(Err(ApiError::Network("Failed to fetch".to_string())));

    let deleted = block_on(client.delete_ingestion(&Session::new(), 3))
        .expect("the ingestion was deleted even though the reload failed");

    assert!(matches!(deleted.refreshed, Err(ApiError::Network(_))));
    assert_eq!(client.transport().requests().len(), 2);
}

#[test]
fn test_report_breakdowns_and_health() {
    let client = ApiClient::new(RecordingTransport::with(vec![
        ApiResponse::new(200, r#"[{"artist_name":"X","total_streams":50}]"#),
        ApiResponse::new(200, r#"[{"platform":null,"total_streams":7}]"#),
        ApiResponse::new(200, r#"{"status":"ok"}"#),
    ]));
    let session = Session::new();

    let top = block_on(client.top_artists(&session, 5)).expect("top artists");
    let platforms = block_on(client.streams_by_platform(&session)).expect("platforms");
    let health = block_on(client.health(&session)).expect("health");

    assert_eq!(top[0].artist_name, "X");
    assert_eq!(platforms[0].platform, None);
    assert!(health.is_ok());
    let paths: Vec<String> = client.transport().requests().into_iter().map(|r| r.path).collect();
    assert_eq!(
        paths,
        vec!["/reports/top-artists?limit=5", "/reports/streams-by-platform", "/health"]
    );
}
