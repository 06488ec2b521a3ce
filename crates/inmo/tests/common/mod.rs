#![allow(dead_code)]

use std::collections::{HashMap, VecDeque};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use inmo::api::{ApiClient, ApiError, ApiRequest, ApiResponse, Method, RequestBody, Transport};
use inmo::services::Services;
use serde_json::Value;

/// Scripted backend. Responses are queued per (method, path); the last one
/// queued keeps answering. Unscripted calls get a 404.
#[derive(Default)]
pub struct FakeBackend {
    routes: Mutex<HashMap<(Method, String), VecDeque<ApiResponse>>>,
    calls: Mutex<Vec<ApiRequest>>,
}

impl FakeBackend {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub fn respond(&self, method: Method, path: &str, status: u16, body: Value) {
        let body = if body.is_null() {
            Vec::new()
        } else {
            serde_json::to_vec(&body).expect("json body")
        };
        self.routes
            .lock()
            .expect("routes mutex")
            .entry((method, path.to_string()))
            .or_default()
            .push_back(ApiResponse { status, body });
    }

    pub fn ok(&self, method: Method, path: &str, body: Value) {
        self.respond(method, path, 200, body);
    }

    /// Drop whatever was queued for the route and answer with `body` instead.
    pub fn replace(&self, method: Method, path: &str, status: u16, body: Value) {
        self.routes
            .lock()
            .expect("routes mutex")
            .remove(&(method, path.to_string()));
        self.respond(method, path, status, body);
    }

    pub fn calls(&self) -> Vec<ApiRequest> {
        self.calls.lock().expect("calls mutex").clone()
    }

    pub fn calls_to(&self, method: Method, path: &str) -> Vec<ApiRequest> {
        self.calls()
            .into_iter()
            .filter(|call| call.method == method && call.path == path)
            .collect()
    }

    pub fn call_count(&self) -> usize {
        self.calls.lock().expect("calls mutex").len()
    }

    /// `(METHOD, path)` of every call, in order.
    pub fn trace(&self) -> Vec<(Method, String)> {
        self.calls()
            .into_iter()
            .map(|call| (call.method, call.path))
            .collect()
    }
}

#[async_trait]
impl Transport for FakeBackend {
    async fn send(&self, request: ApiRequest) -> Result<ApiResponse, ApiError> {
        let key = (request.method, request.path.clone());
        self.calls.lock().expect("calls mutex").push(request);
        let mut routes = self.routes.lock().expect("routes mutex");
        let response = match routes.get_mut(&key) {
            Some(queue) if queue.len() > 1 => queue.pop_front(),
            Some(queue) => queue.front().cloned(),
            None => None,
        };
        Ok(response.unwrap_or(ApiResponse {
            status: 404,
            body: Vec::new(),
        }))
    }
}

pub fn services(backend: &Arc<FakeBackend>) -> Services {
    Services::new(ApiClient::new(backend.clone()))
}

pub fn json_body(request: &ApiRequest) -> Value {
    match &request.body {
        RequestBody::Json(value) => value.clone(),
        other => panic!("expected a JSON body, got {other:?}"),
    }
}
