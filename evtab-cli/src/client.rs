//! HTTP client for the events REST API.

use anyhow::{Context, Result};
use async_trait::async_trait;
use serde::Deserialize;

use evtab_core::{Event, EventDraft, EventId};

/// Error body shape some servers return on failures.
#[derive(Deserialize)]
struct ErrorResponse {
    error: String,
}

/// The five REST operations the UI is built on.
///
/// Kept behind a trait so the table controller can be driven by a recording
/// client in tests.
#[async_trait]
pub trait EventsApi {
    /// GET /events
    async fn list_events(&self) -> Result<Vec<Event>>;

    /// GET /events/{id}
    async fn get_event(&self, id: &EventId) -> Result<Event>;

    /// POST /events
    async fn create_event(&self, draft: &EventDraft) -> Result<Event>;

    /// PUT /events/{id}
    async fn update_event(&self, id: &EventId, draft: &EventDraft) -> Result<Event>;

    /// DELETE /events/{id} — the response body, if any, is ignored
    async fn delete_event(&self, id: &EventId) -> Result<()>;
}

/// reqwest-backed client against a fixed events endpoint.
pub struct EventsClient {
    http: reqwest::Client,
    base_url: String,
}

impl EventsClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    fn event_url(&self, id: &EventId) -> String {
        format!("{}/{}", self.base_url, id)
    }

    /// Turn a non-success response into an error, preferring the server's
    /// error body over the bare status line.
    async fn check(resp: reqwest::Response) -> Result<reqwest::Response> {
        let status = resp.status();
        if status.is_success() {
            return Ok(resp);
        }

        let message = match resp.json::<ErrorResponse>().await {
            Ok(body) => body.error,
            Err(_) => status.to_string(),
        };
        tracing::warn!(%status, "request failed: {message}");
        anyhow::bail!("{}", message)
    }
}

#[async_trait]
impl EventsApi for EventsClient {
    async fn list_events(&self) -> Result<Vec<Event>> {
        tracing::debug!(url = %self.base_url, "listing events");
        let resp = self
            .http
            .get(&self.base_url)
            .send()
            .await
            .context("Failed to reach the events server")?;

        Self::check(resp)
            .await?
            .json()
            .await
            .context("Malformed events list")
    }

    async fn get_event(&self, id: &EventId) -> Result<Event> {
        tracing::debug!(%id, "fetching event");
        let resp = self
            .http
            .get(self.event_url(id))
            .send()
            .await
            .context("Failed to reach the events server")?;

        Self::check(resp)
            .await?
            .json()
            .await
            .context("Malformed event")
    }

    async fn create_event(&self, draft: &EventDraft) -> Result<Event> {
        tracing::info!(name = %draft.event_name, "creating event");
        let resp = self
            .http
            .post(&self.base_url)
            .json(draft)
            .send()
            .await
            .context("Failed to reach the events server")?;

        Self::check(resp)
            .await?
            .json()
            .await
            .context("Malformed created event")
    }

    async fn update_event(&self, id: &EventId, draft: &EventDraft) -> Result<Event> {
        tracing::info!(%id, "updating event");
        let resp = self
            .http
            .put(self.event_url(id))
            .json(draft)
            .send()
            .await
            .context("Failed to reach the events server")?;

        Self::check(resp)
            .await?
            .json()
            .await
            .context("Malformed updated event")
    }

    async fn delete_event(&self, id: &EventId) -> Result<()> {
        tracing::info!(%id, "deleting event");
        let resp = self
            .http
            .delete(self.event_url(id))
            .send()
            .await
            .context("Failed to reach the events server")?;

        Self::check(resp).await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_body(id: &str, name: &str) -> String {
        format!(
            r#"{{"id":"{id}","eventName":"{name}","startDate":"2024-02-01","endDate":"2024-02-02"}}"#
        )
    }

    #[tokio::test]
    async fn list_parses_numeric_ids() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("GET", "/events")
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(
                r#"[{"id":1,"eventName":"Standup","startDate":"2024-01-01","endDate":"2024-01-01"}]"#,
            )
            .create_async()
            .await;

        let client = EventsClient::new(format!("{}/events", server.url()));
        let events = client.list_events().await.unwrap();

        assert_eq!(events.len(), 1);
        assert_eq!(events[0].id, EventId::new("1"));
        assert_eq!(events[0].event_name, "Standup");
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn create_posts_camel_case_body_and_keeps_server_id() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("POST", "/events")
            .match_body(mockito::Matcher::Json(serde_json::json!({
                "eventName": "Demo",
                "startDate": "2024-02-01",
                "endDate": "2024-02-02",
            })))
            .with_status(201)
            .with_header("content-type", "application/json")
            .with_body(sample_body("7", "Demo"))
            .create_async()
            .await;

        let client = EventsClient::new(format!("{}/events", server.url()));
        let draft = EventDraft::parse("Demo", "2024-02-01", "2024-02-02").unwrap();
        let created = client.create_event(&draft).await.unwrap();

        // Id comes from the server, never from the client
        assert_eq!(created.id, EventId::new("7"));
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn update_puts_to_the_event_path() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("PUT", "/events/7")
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(sample_body("7", "Demo v2"))
            .create_async()
            .await;

        let client = EventsClient::new(format!("{}/events", server.url()));
        let draft = EventDraft::parse("Demo v2", "2024-02-01", "2024-02-02").unwrap();
        let updated = client
            .update_event(&EventId::new("7"), &draft)
            .await
            .unwrap();

        assert_eq!(updated.event_name, "Demo v2");
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn delete_ignores_response_body() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("DELETE", "/events/7")
            .with_status(200)
            .with_body("not json at all")
            .create_async()
            .await;

        let client = EventsClient::new(format!("{}/events", server.url()));
        client.delete_event(&EventId::new("7")).await.unwrap();
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn server_error_body_is_surfaced() {
        let mut server = mockito::Server::new_async().await;
        let _mock = server
            .mock("GET", "/events/9")
            .with_status(404)
            .with_header("content-type", "application/json")
            .with_body(r#"{"error":"Not found"}"#)
            .create_async()
            .await;

        let client = EventsClient::new(format!("{}/events", server.url()));
        let err = client.get_event(&EventId::new("9")).await.unwrap_err();
        assert!(err.to_string().contains("Not found"));
    }

    #[tokio::test]
    async fn bare_error_status_is_surfaced() {
        let mut server = mockito::Server::new_async().await;
        let _mock = server
            .mock("GET", "/events")
            .with_status(500)
            .create_async()
            .await;

        let client = EventsClient::new(format!("{}/events", server.url()));
        let err = client.list_events().await.unwrap_err();
        assert!(err.to_string().contains("500"));
    }
}
