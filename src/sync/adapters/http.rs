//! HTTP+JSON adapter for the remote task store port.

use crate::auth::domain::SessionToken;
use crate::board::domain::BoardId;
use crate::board::services::BoardDetail;
use crate::sync::ports::{RemoteStoreError, RemoteStoreResult, RemoteTaskStore};
use crate::task::domain::{Task, TaskDraft, TaskId, TaskUpdate};
use async_trait::async_trait;
use reqwest::{Client, RequestBuilder, Response};
use serde::Deserialize;
use serde::de::DeserializeOwned;

/// Creation responses arrive wrapped in a `data` envelope.
#[derive(Debug, Deserialize)]
struct Created {
    data: Task,
}

/// Remote task store backed by the Corkboard HTTP API.
///
/// Every request carries the session token as a bearer credential; the
/// server answers missing or foreign sessions with 401, which this adapter
/// folds into [`RemoteStoreError::Unauthorized`].
#[derive(Debug, Clone)]
pub struct HttpRemoteTaskStore {
    client: Client,
    base_url: String,
    token: SessionToken,
}

impl HttpRemoteTaskStore {
    /// Creates a store talking to the API rooted at `base_url`.
    #[must_use]
    pub fn new(base_url: impl Into<String>, token: SessionToken) -> Self {
        let root = base_url.into().trim_end_matches('/').to_owned();
        Self {
            client: Client::new(),
            base_url: root,
            token,
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }

    fn authorized(&self, builder: RequestBuilder) -> RequestBuilder {
        builder.bearer_auth(self.token.as_str())
    }

    async fn send(&self, builder: RequestBuilder) -> RemoteStoreResult<Response> {
        let response = self
            .authorized(builder)
            .send()
            .await
            .map_err(RemoteStoreError::transport)?;
        let status = response.status();
        if status.is_success() {
            Ok(response)
        } else {
            Err(RemoteStoreError::from_status(status.as_u16()))
        }
    }

    async fn send_json<T: DeserializeOwned>(&self, builder: RequestBuilder) -> RemoteStoreResult<T> {
        self.send(builder)
            .await?
            .json()
            .await
            .map_err(RemoteStoreError::invalid_payload)
    }
}

#[async_trait]
impl RemoteTaskStore for HttpRemoteTaskStore {
    async fn fetch_tasks(&self) -> RemoteStoreResult<Vec<Task>> {
        self.send_json(self.client.get(self.url("/api/tasks"))).await
    }

    async fn fetch_board(&self, id: BoardId) -> RemoteStoreResult<BoardDetail> {
        let path = format!("/api/boards/{id}");
        self.send_json(self.client.get(self.url(&path))).await
    }

    async fn create_task(&self, draft: TaskDraft) -> RemoteStoreResult<Task> {
        let builder = self.client.post(self.url("/api/tasks")).json(&draft);
        let created: Created = self.send_json(builder).await?;
        Ok(created.data)
    }

    async fn update_task(&self, id: &TaskId, update: TaskUpdate) -> RemoteStoreResult<Task> {
        let path = format!("/api/tasks/{id}");
        let builder = self.client.put(self.url(&path)).json(&update);
        self.send_json(builder).await
    }

    async fn delete_task(&self, id: &TaskId) -> RemoteStoreResult<()> {
        let path = format!("/api/tasks/{id}");
        // The body is an acknowledgement message; only the status matters.
        self.send(self.client.delete(self.url(&path))).await?;
        Ok(())
    }
}
