//! Shared harness for integration tests: an in-memory Corkboard server on
//! an ephemeral port.

use corkboard::api::{AppState, router};
use corkboard::auth::adapters::InMemorySessionDirectory;
use corkboard::auth::domain::{Session, SessionToken, UserId};
use corkboard::auth::ports::SessionDirectory;
use corkboard::board::adapters::memory::InMemoryBoardRepository;
use corkboard::board::ports::BoardRepository;
use corkboard::board::services::BoardDeskService;
use corkboard::task::adapters::memory::InMemoryTaskRepository;
use corkboard::task::ports::TaskRepository;
use corkboard::task::services::TaskCatalogService;
use mockable::{Clock, DefaultClock};
use std::sync::Arc;
use tokio::net::TcpListener;

/// Aborts the server task when the test ends.
pub struct AbortOnDrop(tokio::task::JoinHandle<()>);

impl Drop for AbortOnDrop {
    fn drop(&mut self) {
        self.0.abort();
    }
}

/// Running test server plus the handles a test needs to talk to it.
pub struct TestServer {
    pub base_url: String,
    pub token: String,
    sessions: Arc<InMemorySessionDirectory>,
    _server: AbortOnDrop,
}

impl TestServer {
    /// Issues a second session, for tests that need a stranger.
    pub fn issue_session(&self, token: &str) -> UserId {
        let user_id = UserId::new();
        self.sessions
            .issue(SessionToken::new(token), Session::new(user_id))
            .expect("session issued");
        user_id
    }
}

/// Boots the full router over in-memory adapters with one issued session.
pub async fn spawn_server() -> TestServer {
    let clock: Arc<dyn Clock + Send + Sync> = Arc::new(DefaultClock);
    let tasks: Arc<dyn TaskRepository> = Arc::new(InMemoryTaskRepository::new());
    let boards: Arc<dyn BoardRepository> = Arc::new(InMemoryBoardRepository::new());
    let sessions = Arc::new(InMemorySessionDirectory::new());

    let user_id = UserId::new();
    let token = "integration-token".to_owned();
    sessions
        .issue(SessionToken::new(token.as_str()), Session::new(user_id))
        .expect("session issued");

    let catalog = TaskCatalogService::new(Arc::clone(&tasks), Arc::clone(&boards), Arc::clone(&clock));
    let desk = BoardDeskService::new(boards, tasks, clock);
    let state = AppState::new(
        Arc::clone(&sessions) as Arc<dyn SessionDirectory>,
        catalog,
        desk,
    );

    let listener = TcpListener::bind("127.0.0.1:0")
        .await
        .expect("ephemeral port available");
    let addr = listener.local_addr().expect("bound address");
    let base_url = format!("http://{addr}");

    let handle = tokio::spawn(async move {
        let _ = axum::serve(listener, router(state)).await;
    });
    tokio::task::yield_now().await;

    TestServer {
        base_url,
        token,
        sessions,
        _server: AbortOnDrop(handle),
    }
}
