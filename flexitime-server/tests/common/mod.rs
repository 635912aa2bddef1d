//! Shared helpers for integration tests
//!
//! Every test gets its own in-memory SurrealDB and drives the fully layered
//! router in-process through `tower::ServiceExt::oneshot`.

#![allow(dead_code)]

use std::sync::Arc;

use async_trait::async_trait;
use axum::Router;
use axum::body::{Body, Bytes};
use axum::http::{HeaderMap, Method, Request, StatusCode, header};
use chrono::{TimeZone, Utc};
use http_body_util::BodyExt;
use serde::de::DeserializeOwned;
use serde_json::Value;
use shared::models::EmployeeCreate;
use tower::ServiceExt;

use flexitime_server::db::models::{Employee, Flexitime};
use flexitime_server::{
    Config, DbService, EmployeeRepository, EmployeeStore, RepoError, RepoResult, ServerState,
    build_app,
};

pub const PREFIX: &str = "/api/v1";

/// Application plus direct access to its store
pub struct TestApp {
    pub router: Router,
    pub repo: EmployeeRepository,
}

impl TestApp {
    /// Fresh in-memory database, real repository
    pub async fn new() -> Self {
        let repo = memory_repository().await;
        let state = ServerState::new(Config::for_tests(), Arc::new(repo.clone()));
        Self {
            router: build_app(state),
            repo,
        }
    }

    pub fn url(path: &str) -> String {
        format!("{PREFIX}{path}")
    }

    pub async fn get(&self, path: &str) -> TestResponse {
        send(&self.router, Method::GET, &Self::url(path), None).await
    }

    pub async fn post(&self, path: &str, body: Value) -> TestResponse {
        send(&self.router, Method::POST, &Self::url(path), Some(body)).await
    }

    pub async fn put(&self, path: &str, body: Value) -> TestResponse {
        send(&self.router, Method::PUT, &Self::url(path), Some(body)).await
    }

    pub async fn delete(&self, path: &str) -> TestResponse {
        send(&self.router, Method::DELETE, &Self::url(path), None).await
    }

    /// Create through the API and return the new id
    pub async fn create(&self, email: &str, firstname: &str, lastname: &str) -> String {
        let payload = EmployeeCreate {
            email: email.to_string(),
            firstname: firstname.to_string(),
            lastname: lastname.to_string(),
        };
        let response = self
            .post("/employees", serde_json::to_value(payload).unwrap())
            .await;
        assert_eq!(response.status, StatusCode::OK, "create failed");
        response.json::<shared::models::Employee>().id
    }
}

pub async fn memory_repository() -> EmployeeRepository {
    let db = DbService::open(&Config::for_tests())
        .await
        .expect("in-memory database opens");
    EmployeeRepository::new(db.db)
}

/// Router over an arbitrary store
pub fn app_with_store(store: Arc<dyn EmployeeStore>) -> Router {
    build_app(ServerState::new(Config::for_tests(), store))
}

pub struct TestResponse {
    pub status: StatusCode,
    pub headers: HeaderMap,
    pub body: Bytes,
}

impl TestResponse {
    pub fn json<T: DeserializeOwned>(&self) -> T {
        serde_json::from_slice(&self.body).expect("response body is valid JSON")
    }

    pub fn cache_control(&self) -> &str {
        self.headers
            .get(header::CACHE_CONTROL)
            .and_then(|v| v.to_str().ok())
            .unwrap_or_default()
    }
}

pub async fn send(router: &Router, method: Method, uri: &str, body: Option<Value>) -> TestResponse {
    let builder = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(json) => builder
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(json.to_string())),
        None => builder.body(Body::empty()),
    }
    .unwrap();
    dispatch(router, request).await
}

pub async fn send_raw(
    router: &Router,
    method: Method,
    uri: &str,
    content_type: Option<&str>,
    body: &'static str,
) -> TestResponse {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(content_type) = content_type {
        builder = builder.header(header::CONTENT_TYPE, content_type);
    }
    dispatch(router, builder.body(Body::from(body)).unwrap()).await
}

async fn dispatch(router: &Router, request: Request<Body>) -> TestResponse {
    let response = router.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let headers = response.headers().clone();
    let body = response.into_body().collect().await.unwrap().to_bytes();
    TestResponse {
        status,
        headers,
        body,
    }
}

/// Employee carrying one accrued and one used entry
pub fn employee_with_ledgers() -> Employee {
    let mut employee = Employee::new("ledger@localhost", "Lee", "Dger");
    employee.accrue(Flexitime::new(
        Utc.with_ymd_and_hms(2016, 1, 2, 8, 0, 0).unwrap(),
        60,
        "Started work one hour early.",
    ));
    employee.spend(Flexitime::new(
        Utc.with_ymd_and_hms(2016, 1, 3, 16, 0, 0).unwrap(),
        60,
        "Finished work one hour early.",
    ));
    employee
}

/// Store whose every call fails
pub struct FailingStore;

#[async_trait]
impl EmployeeStore for FailingStore {
    async fn find_all(&self) -> RepoResult<Vec<Employee>> {
        Err(RepoError::Database("connection lost".into()))
    }

    async fn find_by_id(&self, _id: &str) -> RepoResult<Option<Employee>> {
        Err(RepoError::Database("connection lost".into()))
    }

    async fn create(&self, _employee: Employee) -> RepoResult<Employee> {
        Err(RepoError::Database("connection lost".into()))
    }

    async fn save(&self, _employee: &Employee) -> RepoResult<Employee> {
        Err(RepoError::Database("connection lost".into()))
    }

    async fn remove(&self, _id: &str) -> RepoResult<Option<Employee>> {
        Err(RepoError::Database("connection lost".into()))
    }
}

/// Real reads, failing writes
pub struct ReadOnlyStore(pub EmployeeRepository);

#[async_trait]
impl EmployeeStore for ReadOnlyStore {
    async fn find_all(&self) -> RepoResult<Vec<Employee>> {
        self.0.find_all().await
    }

    async fn find_by_id(&self, id: &str) -> RepoResult<Option<Employee>> {
        self.0.find_by_id(id).await
    }

    async fn create(&self, _employee: Employee) -> RepoResult<Employee> {
        Err(RepoError::Database("read-only".into()))
    }

    async fn save(&self, _employee: &Employee) -> RepoResult<Employee> {
        Err(RepoError::Database("read-only".into()))
    }

    async fn remove(&self, _id: &str) -> RepoResult<Option<Employee>> {
        Err(RepoError::Database("read-only".into()))
    }
}
