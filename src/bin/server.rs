//! Corkboard HTTP server over in-memory storage.
//!
//! Binds to `CORKBOARD_ADDR` (default `127.0.0.1:8780`) and seeds one demo
//! session and board so the API is usable straight away. The session token
//! and board id are logged at startup.

use corkboard::api::{AppState, router};
use corkboard::auth::adapters::InMemorySessionDirectory;
use corkboard::auth::domain::{Session, SessionToken, UserId};
use corkboard::auth::ports::SessionDirectory;
use corkboard::board::adapters::memory::InMemoryBoardRepository;
use corkboard::board::domain::BoardDraft;
use corkboard::board::ports::BoardRepository;
use corkboard::board::services::BoardDeskService;
use corkboard::task::adapters::memory::InMemoryTaskRepository;
use corkboard::task::ports::TaskRepository;
use corkboard::task::services::TaskCatalogService;
use mockable::{Clock, DefaultClock};
use std::sync::Arc;
use tracing_subscriber::EnvFilter;

const DEMO_TOKEN: &str = "demo-token";

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let clock: Arc<dyn Clock + Send + Sync> = Arc::new(DefaultClock);
    let tasks: Arc<dyn TaskRepository> = Arc::new(InMemoryTaskRepository::new());
    let boards: Arc<dyn BoardRepository> = Arc::new(InMemoryBoardRepository::new());
    let sessions = Arc::new(InMemorySessionDirectory::new());

    let catalog = TaskCatalogService::new(Arc::clone(&tasks), Arc::clone(&boards), Arc::clone(&clock));
    let desk = BoardDeskService::new(Arc::clone(&boards), Arc::clone(&tasks), Arc::clone(&clock));

    seed_demo_data(&sessions, &desk).await?;

    let state = AppState::new(
        sessions as Arc<dyn SessionDirectory>,
        catalog,
        desk,
    );

    let addr =
        std::env::var("CORKBOARD_ADDR").unwrap_or_else(|_| "127.0.0.1:8780".to_owned());
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!(%addr, "corkboard server listening");
    axum::serve(listener, router(state)).await?;
    Ok(())
}

/// Issues a demo session and creates a starter board for it.
async fn seed_demo_data(
    sessions: &InMemorySessionDirectory,
    desk: &BoardDeskService<
        dyn BoardRepository,
        dyn TaskRepository,
        dyn Clock + Send + Sync,
    >,
) -> Result<(), Box<dyn std::error::Error>> {
    let user_id = UserId::new();
    let session = Session::new(user_id)
        .with_name("Demo User")
        .with_email("demo@example.com");
    sessions.issue(SessionToken::new(DEMO_TOKEN), session.clone())?;

    let board = desk
        .create_board(&session, BoardDraft::new("Demo Board"))
        .await?;
    tracing::info!(token = DEMO_TOKEN, board = %board.id(), "seeded demo session and board");
    Ok(())
}
