//! Shared test doubles: an in-memory session, a recording redirect, and a
//! scripted transport.

use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;

use crate::config::ClientConfig;
use crate::net::api::ApiClient;
use crate::net::error::ApiError;
use crate::net::interceptor::AuthInterceptor;
use crate::net::transport::{HttpRequest, HttpResponse, Transport};
use crate::routing::Redirect;
use crate::state::session::{Role, Session, SessionAccess, SessionStore};
use crate::util::storage::MemoryStorage;

#[derive(Clone)]
pub struct SharedSession {
    pub store: Arc<Mutex<SessionStore>>,
    pub storage: MemoryStorage,
}

impl SharedSession {
    pub fn anonymous() -> Self {
        let storage = MemoryStorage::new();
        let store = SessionStore::load(Arc::new(storage.clone()));
        Self { store: Arc::new(Mutex::new(store)), storage }
    }

    pub fn signed_in(token: &str, role: Role) -> Self {
        let shared = Self::anonymous();
        shared.set_session(Session::new(token, role));
        shared
    }

    pub fn current(&self) -> Option<Session> {
        self.store.lock().unwrap().session().cloned()
    }
}

impl SessionAccess for SharedSession {
    fn token(&self) -> Option<String> {
        self.store.lock().unwrap().token().map(str::to_owned)
    }

    fn role(&self) -> Option<Role> {
        self.store.lock().unwrap().role()
    }

    fn set_session(&self, session: Session) {
        self.store.lock().unwrap().set_session(session);
    }

    fn clear(&self) {
        self.store.lock().unwrap().clear();
    }
}

#[derive(Clone, Default)]
pub struct RecordingRedirect {
    pub paths: Arc<Mutex<Vec<String>>>,
}

impl RecordingRedirect {
    pub fn taken(&self) -> Vec<String> {
        self.paths.lock().unwrap().clone()
    }
}

impl Redirect for RecordingRedirect {
    fn redirect(&self, path: &str) {
        self.paths.lock().unwrap().push(path.to_owned());
    }
}

/// Replays scripted responses in order and records every request it sees.
#[derive(Default)]
pub struct MockTransport {
    responses: Mutex<VecDeque<Result<HttpResponse, ApiError>>>,
    requests: Mutex<Vec<HttpRequest>>,
}

impl MockTransport {
    pub fn respond(&self, status: u16, body: serde_json::Value) {
        self.responses
            .lock()
            .unwrap()
            .push_back(Ok(HttpResponse { status, body: body.to_string() }));
    }

    pub fn fail(&self, err: ApiError) {
        self.responses.lock().unwrap().push_back(Err(err));
    }

    pub fn requests(&self) -> Vec<HttpRequest> {
        self.requests.lock().unwrap().clone()
    }

    pub fn last_request(&self) -> HttpRequest {
        self.requests.lock().unwrap().last().cloned().expect("no request was sent")
    }
}

#[async_trait(?Send)]
impl Transport for MockTransport {
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, ApiError> {
        self.requests.lock().unwrap().push(request);
        self.responses
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Err(ApiError::Network("no scripted response".to_owned())))
    }
}

pub struct Harness {
    pub api: ApiClient,
    pub transport: Arc<MockTransport>,
    pub session: SharedSession,
    pub redirect: RecordingRedirect,
}

impl Harness {
    pub fn new(session: SharedSession) -> Self {
        let transport = Arc::new(MockTransport::default());
        let redirect = RecordingRedirect::default();
        let interceptor = AuthInterceptor::new(Arc::new(session.clone()), Arc::new(redirect.clone()));
        let config = ClientConfig::from_values(Some("http://api.test"), None).unwrap();
        let api = ApiClient::new(config, transport.clone(), interceptor);
        Self { api, transport, session, redirect }
    }

    pub fn anonymous() -> Self {
        Self::new(SharedSession::anonymous())
    }
}
