//! Mock Paddles service for E2E tests.
//!
//! Starts an in-process HTTP server answering the handful of Paddles routes
//! the grid views read, and records every request it receives.

use std::collections::HashMap;
use std::net::TcpListener;
use std::sync::{Arc, Mutex};

use actix_web::{App, HttpRequest, HttpResponse, HttpServer, get, web};
use serde_json::{Value, json};

/// Shared state of the mock service.
#[derive(Default)]
pub struct MockPaddlesState {
    pub runs: Vec<Value>,
    pub run_details: HashMap<String, Value>,
    pub node_jobs: HashMap<String, Vec<Value>>,
    /// Path and query of every request received, in order.
    pub requests: Vec<String>,
    /// Answer every request with a 500.
    pub failing: bool,
}

type SharedState = web::Data<Arc<Mutex<MockPaddlesState>>>;

/// Record the request; returns true when the mock is set to fail.
fn record(state: &SharedState, req: &HttpRequest) -> bool {
    let mut state = state.lock().unwrap();
    state.requests.push(req.uri().to_string());
    state.failing
}

fn failure() -> HttpResponse {
    HttpResponse::InternalServerError().json(json!({"message": "paddles is down"}))
}

#[get("/")]
async fn root(state: SharedState, req: HttpRequest) -> HttpResponse {
    if record(&state, &req) {
        return failure();
    }
    HttpResponse::Ok().json(json!({"name": "paddles"}))
}

#[get("/runs/")]
async fn list_runs(state: SharedState, req: HttpRequest) -> HttpResponse {
    if record(&state, &req) {
        return failure();
    }
    let runs = state.lock().unwrap().runs.clone();
    HttpResponse::Ok().json(runs)
}

#[get("/runs/status/{status}/")]
async fn list_runs_by_status(
    state: SharedState,
    req: HttpRequest,
    path: web::Path<String>,
) -> HttpResponse {
    if record(&state, &req) {
        return failure();
    }
    let status = path.into_inner();
    let runs: Vec<Value> = state
        .lock()
        .unwrap()
        .runs
        .iter()
        .filter(|run| run["status"].as_str() == Some(status.as_str()))
        .cloned()
        .collect();
    HttpResponse::Ok().json(runs)
}

#[get("/runs/{name}/")]
async fn get_run(state: SharedState, req: HttpRequest, path: web::Path<String>) -> HttpResponse {
    if record(&state, &req) {
        return failure();
    }
    match state.lock().unwrap().run_details.get(path.as_str()) {
        Some(run) => HttpResponse::Ok().json(run),
        None => HttpResponse::NotFound().json(json!({"message": "no such run"})),
    }
}

#[get("/nodes/{name}/jobs/")]
async fn node_jobs(state: SharedState, req: HttpRequest, path: web::Path<String>) -> HttpResponse {
    if record(&state, &req) {
        return failure();
    }
    let jobs = state
        .lock()
        .unwrap()
        .node_jobs
        .get(path.as_str())
        .cloned()
        .unwrap_or_default();
    HttpResponse::Ok().json(json!({"name": path.as_str(), "jobs": jobs}))
}

/// Mock Paddles service.
pub struct MockPaddles {
    pub base_url: String,
    pub state: Arc<Mutex<MockPaddlesState>>,
}

impl MockPaddles {
    /// Start the mock on an ephemeral port.
    pub async fn start(initial: MockPaddlesState) -> Self {
        let state = Arc::new(Mutex::new(initial));

        let listener = TcpListener::bind("127.0.0.1:0").expect("failed to bind");
        let port = listener.local_addr().unwrap().port();
        let base_url = format!("http://127.0.0.1:{}", port);

        let state_data = state.clone();
        let server = HttpServer::new(move || {
            App::new()
                .app_data(web::Data::new(state_data.clone()))
                .service(root)
                .service(list_runs)
                .service(list_runs_by_status)
                .service(get_run)
                .service(node_jobs)
        })
        .workers(1)
        .listen(listener)
        .expect("failed to listen")
        .disable_signals()
        .run();

        tokio::spawn(server);

        MockPaddles { base_url, state }
    }

    /// Requests received so far.
    pub fn requests(&self) -> Vec<String> {
        self.state.lock().unwrap().requests.clone()
    }

    /// Make every following request fail with a 500.
    pub fn set_failing(&self, failing: bool) {
        self.state.lock().unwrap().failing = failing;
    }
}
