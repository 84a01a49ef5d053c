//! Shared test infrastructure for portal and upstream-client tests.
//!
//! - `StubUpstream::start()` - an in-process activities API on an ephemeral port
//! - `unreachable_api_url()` - a base URL nothing listens on
//! - `portal_state()` / `extract_*()` - helpers for driving the portal app
#![allow(dead_code)]

use std::net::TcpListener;
use std::sync::Mutex;
use std::time::Duration;

use actix_web::http::StatusCode;
use actix_web::{web, App, HttpResponse, HttpServer};
use regex::Regex;
use serde::Deserialize;
use serde_json::json;

use signup_portal::api::ActivitiesApi;
use signup_portal::config::Locale;
use signup_portal::state::PortalState;

// ============================================================================
// TEST CONSTANTS
// ============================================================================

pub const CHESS_CLUB: &str = "Chess Club";
pub const ART_STUDIO: &str = "Art Studio";
pub const PROGRAMMING_CLASS: &str = "Programming Class";
pub const NEW_STUDENT: &str = "newstudent@mergington.edu";

/// Three activities in non-alphabetical order; Chess Club is over capacity,
/// Art Studio has nobody signed up.
pub fn sample_catalog() -> serde_json::Value {
    json!({
        "Programming Class": {
            "description": "Learn programming fundamentals and build software projects",
            "schedule": "Tuesdays and Thursdays, 3:30 PM - 4:30 PM",
            "max_participants": 20,
            "participants": ["emma@mergington.edu", "sophia.j@mergington.edu"]
        },
        "Chess Club": {
            "description": "Learn strategies and compete in chess tournaments",
            "schedule": "Fridays, 3:30 PM - 5:00 PM",
            "max_participants": 2,
            "participants": ["michael@mergington.edu", "daniel.s@mergington.edu", "mary_jane_watson@mergington.edu"]
        },
        "Art Studio": {
            "description": "Explore painting and drawing",
            "schedule": "Mondays, 4:00 PM - 5:30 PM",
            "max_participants": 10,
            "participants": []
        }
    })
}

// ============================================================================
// STUB UPSTREAM
// ============================================================================

/// A scripted HTTP answer.
#[derive(Debug, Clone)]
pub struct Reply {
    pub status: u16,
    pub content_type: &'static str,
    pub body: String,
}

impl Reply {
    pub fn json(status: u16, body: serde_json::Value) -> Self {
        Self {
            status,
            content_type: "application/json",
            body: body.to_string(),
        }
    }

    pub fn text(status: u16, body: &str) -> Self {
        Self {
            status,
            content_type: "text/plain",
            body: body.to_string(),
        }
    }

    fn respond(&self) -> HttpResponse {
        let status = StatusCode::from_u16(self.status).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
        HttpResponse::build(status)
            .content_type(self.content_type)
            .body(self.body.clone())
    }
}

/// A mutation request the stub received, with path and query decoded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordedCall {
    pub method: &'static str,
    pub activity: String,
    pub email: String,
}

pub struct StubState {
    pub catalog: Mutex<Reply>,
    pub signup: Mutex<Reply>,
    pub unregister: Mutex<Reply>,
    pub calls: Mutex<Vec<RecordedCall>>,
}

#[derive(Deserialize)]
struct EmailQuery {
    email: String,
}

async fn stub_catalog(state: web::Data<StubState>) -> HttpResponse {
    state.catalog.lock().unwrap().respond()
}

async fn stub_signup(
    state: web::Data<StubState>,
    path: web::Path<String>,
    query: web::Query<EmailQuery>,
) -> HttpResponse {
    state.calls.lock().unwrap().push(RecordedCall {
        method: "POST",
        activity: path.into_inner(),
        email: query.into_inner().email,
    });
    state.signup.lock().unwrap().respond()
}

async fn stub_unregister(
    state: web::Data<StubState>,
    path: web::Path<String>,
    query: web::Query<EmailQuery>,
) -> HttpResponse {
    state.calls.lock().unwrap().push(RecordedCall {
        method: "DELETE",
        activity: path.into_inner(),
        email: query.into_inner().email,
    });
    state.unregister.lock().unwrap().respond()
}

pub struct StubUpstream {
    pub base_url: String,
    pub state: web::Data<StubState>,
}

impl StubUpstream {
    /// Start a stub serving `sample_catalog()` and accepting every mutation.
    /// Must be called from within an actix runtime.
    pub fn start() -> Self {
        let state = web::Data::new(StubState {
            catalog: Mutex::new(Reply::json(200, sample_catalog())),
            signup: Mutex::new(Reply::json(
                200,
                json!({ "message": format!("Signed up {NEW_STUDENT} for {CHESS_CLUB}") }),
            )),
            unregister: Mutex::new(Reply::json(200, json!({ "message": "Unregistered" }))),
            calls: Mutex::new(Vec::new()),
        });

        let listener = TcpListener::bind("127.0.0.1:0").expect("Failed to bind stub listener");
        let port = listener.local_addr().expect("stub addr").port();

        let data = state.clone();
        let server = HttpServer::new(move || {
            App::new()
                .app_data(data.clone())
                .route("/activities", web::get().to(stub_catalog))
                .route("/activities/{name}/signup", web::post().to(stub_signup))
                .route("/activities/{name}/participants", web::delete().to(stub_unregister))
        })
        .workers(1)
        .disable_signals()
        .listen(listener)
        .expect("Failed to listen")
        .run();
        actix_web::rt::spawn(server);

        Self {
            base_url: format!("http://127.0.0.1:{port}"),
            state,
        }
    }

    pub fn set_catalog(&self, reply: Reply) {
        *self.state.catalog.lock().unwrap() = reply;
    }

    pub fn set_signup(&self, reply: Reply) {
        *self.state.signup.lock().unwrap() = reply;
    }

    pub fn set_unregister(&self, reply: Reply) {
        *self.state.unregister.lock().unwrap() = reply;
    }

    pub fn calls(&self) -> Vec<RecordedCall> {
        self.state.calls.lock().unwrap().clone()
    }

    pub fn api(&self) -> ActivitiesApi {
        api_for(&self.base_url)
    }
}

/// A base URL whose port was just released, so connections are refused.
pub fn unreachable_api_url() -> String {
    let listener = TcpListener::bind("127.0.0.1:0").expect("bind");
    let port = listener.local_addr().expect("addr").port();
    drop(listener);
    format!("http://127.0.0.1:{port}")
}

pub fn api_for(base_url: &str) -> ActivitiesApi {
    ActivitiesApi::new(base_url, Duration::from_secs(2)).expect("Failed to build API client")
}

// ============================================================================
// PORTAL HELPERS
// ============================================================================

pub fn portal_state(base_url: &str, locale: Locale) -> web::Data<PortalState> {
    PortalState::new(api_for(base_url), locale).into_data()
}

/// The CSRF token embedded in a rendered page.
pub fn extract_csrf(html: &str) -> String {
    let re = Regex::new(r#"name="csrf_token" value="([0-9a-f]{64})""#).unwrap();
    re.captures(html)
        .and_then(|c| c.get(1))
        .map(|m| m.as_str().to_string())
        .expect("page has no CSRF token")
}

/// Text and class of the message area, if a message is shown.
pub fn extract_message(html: &str) -> Option<(String, String)> {
    let re = Regex::new(r#"<div id="message" class="(success|error)"[^>]*>([^<]*)</div>"#).unwrap();
    re.captures(html)
        .map(|c| (c[1].to_string(), c[2].to_string()))
}

/// Value attribute of the email input.
pub fn extract_email_value(html: &str) -> String {
    let re = Regex::new(r#"<input type="email" id="email"[^>]* value="([^"]*)""#).unwrap();
    re.captures(html)
        .map(|c| c[1].to_string())
        .expect("page has no email input")
}

/// `(value, selected)` for every option of the activity selector except the default one.
pub fn extract_options(html: &str) -> Vec<(String, bool)> {
    let re = Regex::new(r#"<option value="([^"]+)"( selected)?>"#).unwrap();
    re.captures_iter(html)
        .map(|c| (c[1].to_string(), c.get(2).is_some()))
        .collect()
}

pub fn extract_spots_left(html: &str) -> Vec<i64> {
    let re = Regex::new(r#"<span class="spots-left">(-?\d+)</span> spots left"#).unwrap();
    re.captures_iter(html)
        .map(|c| c[1].parse().unwrap())
        .collect()
}

pub fn extract_card_names(html: &str) -> Vec<String> {
    let re = Regex::new(r"<h4>([^<]*)</h4>").unwrap();
    re.captures_iter(html).map(|c| c[1].to_string()).collect()
}
