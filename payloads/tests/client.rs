//! Drives the real `APIClient` against an in-process mock backend that
//! serves deterministic fixture JSON, the same contract the production
//! backend exposes.

use actix_web::{App, HttpRequest, HttpResponse, HttpServer, web};
use payloads::requests;
use payloads::session::{MemorySession, NoSession};
use payloads::{APIClient, BookingStatus, ClientError};
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

const TEST_TOKEN: &str = "test-access-token";

const BOOKINGS_FIXTURE: &str = r#"{
  "count": 2,
  "next": null,
  "previous": null,
  "results": [
    {
      "id": "7c9e6679-7425-40de-944b-e07fc1f90ae7",
      "booking_number": "SB-2026-0001",
      "service": {
        "id": "b5a7a2f1-3e4d-4a6b-9c8d-1f2e3a4b5c6d",
        "title": "Deep House Cleaning",
        "category": "cleaning",
        "price": "1500.00"
      },
      "customer": {
        "user_id": "f47ac10b-58cc-4372-a567-0e02b2c3d479",
        "username": "sita",
        "full_name": "Sita Sharma"
      },
      "status": "confirmed",
      "scheduled_at": "2026-09-02T09:00:00Z",
      "price": "1500.00",
      "address": "Baluwatar, Kathmandu",
      "created_at": "2026-08-20T14:05:00Z"
    },
    {
      "id": "a1b2c3d4-e5f6-4071-8899-aabbccddeeff",
      "booking_number": "SB-2026-0002",
      "service": {
        "id": "b5a7a2f1-3e4d-4a6b-9c8d-1f2e3a4b5c6d",
        "title": "Deep House Cleaning",
        "category": "cleaning",
        "price": "1500.00"
      },
      "customer": {
        "user_id": "9b2d7a11-0c4e-4f5a-8b6c-7d8e9f0a1b2c",
        "username": "ram_k",
        "full_name": null
      },
      "status": "pending",
      "scheduled_at": "2026-09-03T13:30:00Z",
      "price": "1500.00",
      "address": null,
      "created_at": "2026-08-21T08:11:00Z"
    }
  ]
}"#;

const SCHEDULE_FIXTURE: &str = r#"{
  "working_hours": [
    {
      "weekday": 0,
      "start_time": "09:00:00",
      "end_time": "17:00:00",
      "is_available": true
    }
  ],
  "blocked_times": []
}"#;

const BLOCKED_TIME_FIXTURE: &str = r#"{
  "id": "0f8fad5b-d9cb-469f-a165-70867728950e",
  "date": "2026-09-05",
  "start_time": "10:00:00",
  "end_time": "12:00:00",
  "reason": "Personal appointment"
}"#;

const PROFILE_FIXTURE: &str = r#"{
  "id": "f47ac10b-58cc-4372-a567-0e02b2c3d479",
  "username": "sita",
  "email": "sita@example.com",
  "full_name": "Sita Sharma",
  "role": "customer",
  "phone": "+977-9800000000",
  "avatar_url": null
}"#;

const LOGIN_FIXTURE: &str = r#"{
  "access": "test-access-token",
  "refresh": "test-refresh-token",
  "user": {
    "id": "f47ac10b-58cc-4372-a567-0e02b2c3d479",
    "username": "sita",
    "email": "sita@example.com",
    "full_name": "Sita Sharma",
    "role": "customer",
    "phone": null,
    "avatar_url": null
  }
}"#;

#[derive(Default)]
struct Counters {
    schedule_gets: AtomicUsize,
}

fn bearer(req: &HttpRequest) -> Option<&str> {
    req.headers()
        .get("authorization")?
        .to_str()
        .ok()?
        .strip_prefix("Bearer ")
}

fn json(body: &'static str) -> HttpResponse {
    HttpResponse::Ok()
        .content_type("application/json")
        .body(body)
}

async fn provider_bookings(req: HttpRequest) -> HttpResponse {
    if bearer(&req) != Some(TEST_TOKEN) {
        return HttpResponse::Unauthorized()
            .json(serde_json::json!({"detail": "Invalid token."}));
    }
    json(BOOKINGS_FIXTURE)
}

async fn provider_schedule(
    req: HttpRequest,
    counters: web::Data<Counters>,
) -> HttpResponse {
    if bearer(&req) != Some(TEST_TOKEN) {
        return HttpResponse::Unauthorized()
            .json(serde_json::json!({"detail": "Invalid token."}));
    }
    counters.schedule_gets.fetch_add(1, Ordering::SeqCst);
    json(SCHEDULE_FIXTURE)
}

async fn create_blocked_time() -> HttpResponse {
    json(BLOCKED_TIME_FIXTURE)
}

async fn user_profile(req: HttpRequest) -> HttpResponse {
    if bearer(&req) != Some(TEST_TOKEN) {
        return HttpResponse::Unauthorized()
            .json(serde_json::json!({"detail": "Invalid token."}));
    }
    json(PROFILE_FIXTURE)
}

async fn login(req: HttpRequest) -> HttpResponse {
    // Login runs before any token exists; reject requests that leak one.
    if bearer(&req).is_some() {
        return HttpResponse::BadRequest()
            .json(serde_json::json!({"message": "Unexpected credentials"}));
    }
    json(LOGIN_FIXTURE)
}

async fn earnings_down() -> HttpResponse {
    HttpResponse::InternalServerError()
        .json(serde_json::json!({"error": "Internal Server Error"}))
}

async fn deviant_notifications() -> HttpResponse {
    json(r#"{"count": 0, "next": null, "previous": null, "items": []}"#)
}

/// Spawn the mock backend and return a client pointed at it, along with
/// the per-route request counters.
async fn spawn_backend() -> anyhow::Result<(APIClient, Arc<Counters>)> {
    let counters = Arc::new(Counters::default());
    let counters_for_app = counters.clone();

    let server = HttpServer::new(move || {
        App::new()
            .app_data(web::Data::from(counters_for_app.clone()))
            .route("/api/auth/login", web::post().to(login))
            .route("/api/users/me", web::get().to(user_profile))
            .route(
                "/api/provider/bookings",
                web::get().to(provider_bookings),
            )
            .route(
                "/api/provider-dashboard/schedule",
                web::get().to(provider_schedule),
            )
            .route(
                "/api/provider-schedule",
                web::post().to(create_blocked_time),
            )
            .route("/api/provider/earnings", web::get().to(earnings_down))
            .route(
                "/api/notifications",
                web::get().to(deviant_notifications),
            )
    })
    .workers(1)
    .bind(("127.0.0.1", 0))?;

    let port = server.addrs()[0].port();
    actix_web::rt::spawn(server.run());

    let session = Arc::new(MemorySession::with_token(TEST_TOKEN));
    let client = APIClient::new(format!("http://127.0.0.1:{port}"), session);
    Ok((client, counters))
}

#[actix_web::test]
async fn bookings_fixture_loads_through_the_client() -> anyhow::Result<()> {
    let (client, _) = spawn_backend().await?;

    let page = requests::Page {
        offset: 0,
        limit: 20,
    };
    let envelope = client.list_provider_bookings(&page).await?;

    assert_eq!(envelope.count, 2);
    assert_eq!(envelope.results.len() as u64, envelope.count);

    let first = &envelope.results[0];
    assert_eq!(first.booking_number, "SB-2026-0001");
    assert_eq!(first.status, BookingStatus::Confirmed);
    assert_eq!(first.service.title, "Deep House Cleaning");
    assert_eq!(first.customer.display_name(), "Sita Sharma");

    let second = &envelope.results[1];
    assert_eq!(second.status, BookingStatus::Pending);
    assert_eq!(second.customer.display_name(), "ram_k");
    Ok(())
}

#[actix_web::test]
async fn bearer_token_is_attached_and_required() -> anyhow::Result<()> {
    let (client, _) = spawn_backend().await?;

    let profile = client.user_profile().await?;
    assert_eq!(profile.username, "sita");

    // A client with no session must be rejected by protected routes.
    let unauthenticated =
        APIClient::new(client.address().to_string(), Arc::new(NoSession));
    let err = unauthenticated.user_profile().await.unwrap_err();
    assert!(err.is_unauthorized());
    assert_eq!(err.to_string(), "Invalid token.");
    Ok(())
}

#[actix_web::test]
async fn login_succeeds_without_a_token() -> anyhow::Result<()> {
    let (client, _) = spawn_backend().await?;

    let unauthenticated =
        APIClient::new(client.address().to_string(), Arc::new(NoSession));
    let tokens = unauthenticated
        .login(&requests::LoginCredentials {
            email: "sita@example.com".to_string(),
            password: "hunter2hunter2".to_string(),
        })
        .await?;

    assert_eq!(tokens.access, TEST_TOKEN);
    assert_eq!(tokens.user.email, "sita@example.com");
    Ok(())
}

#[actix_web::test]
async fn server_error_surfaces_status_and_body_message() -> anyhow::Result<()>
{
    let (client, _) = spawn_backend().await?;

    let err = client.get_provider_earnings().await.unwrap_err();
    match err {
        ClientError::Api { status, message } => {
            assert_eq!(status.as_u16(), 500);
            assert_eq!(message, "Internal Server Error");
        }
        other => panic!("expected Api error, got {other:?}"),
    }
    Ok(())
}

#[actix_web::test]
async fn envelope_deviation_is_a_parse_error() -> anyhow::Result<()> {
    let (client, _) = spawn_backend().await?;

    let page = requests::Page {
        offset: 0,
        limit: 20,
    };
    let err = client.list_notifications(&page).await.unwrap_err();
    assert!(matches!(err, ClientError::Parse(_)));
    Ok(())
}

#[actix_web::test]
async fn blocked_time_create_and_schedule_reload() -> anyhow::Result<()> {
    let (client, counters) = spawn_backend().await?;

    // Initial load.
    let schedule = client.get_provider_schedule().await?;
    assert_eq!(schedule.working_hours.len(), 1);
    assert_eq!(counters.schedule_gets.load(Ordering::SeqCst), 1);

    // Create a blocked window, then reload the schedule the way the UI
    // does after a successful mutation. The counter pins down how many
    // requests each step put on the wire.
    let created = client
        .create_blocked_time(&requests::CreateBlockedTime {
            date: "2026-09-05".parse()?,
            start_time: "10:00".parse()?,
            end_time: "12:00".parse()?,
            reason: Some("Personal appointment".to_string()),
        })
        .await?;
    assert_eq!(created.reason.as_deref(), Some("Personal appointment"));

    client.get_provider_schedule().await?;
    assert_eq!(counters.schedule_gets.load(Ordering::SeqCst), 2);
    Ok(())
}
