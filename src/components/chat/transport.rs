//! Outbound calls to the chat backend.
//!
//! `HttpTransport` talks to the backend over `gloo-net`; the response
//! interpretation is kept in plain functions so it can be checked without a
//! browser.
//!
//! ENDPOINTS
//! =========
//! - `POST /api/chat`   `{ message, history }` -> `{ reply }`
//! - `GET  /health`     warm-up ping for hosts that sleep when idle
//! - `GET  /api/resume` structured résumé for the Résumé tab

#[cfg(test)]
#[path = "transport_test.rs"]
mod transport_test;

use gloo_net::http::{Request, Response};
use serde::de::DeserializeOwned;

use super::error::ChatError;
use super::types::{ChatReply, ChatRequest, ErrorBody, Resume};
use crate::config::SiteConfig;

/// The single outbound boundary of the chat widget.
#[allow(async_fn_in_trait)]
pub trait ChatTransport {
	/// Issue exactly one chat request and await its reply.
	async fn send(&self, request: &ChatRequest) -> Result<ChatReply, ChatError>;

	/// Nudge the backend awake before the first message.
	async fn warm_up(&self) -> Result<(), ChatError> {
		Ok(())
	}

	async fn fetch_resume(&self) -> Result<Resume, ChatError>;
}

/// Map a non-success response onto [`ChatError::Server`], keeping `detail` if present.
pub fn server_error(status: u16, body: &str) -> ChatError {
	let detail = serde_json::from_str::<ErrorBody>(body)
		.ok()
		.and_then(|b| b.detail)
		.and_then(|d| match d {
			serde_json::Value::Null => None,
			serde_json::Value::String(s) => Some(s),
			other => Some(other.to_string()),
		});
	ChatError::Server { status, detail }
}

/// Decode a response body, or explain why it failed.
pub fn interpret<T: DeserializeOwned>(status: u16, ok: bool, body: &str) -> Result<T, ChatError> {
	if !ok {
		return Err(server_error(status, body));
	}
	serde_json::from_str(body).map_err(|e| ChatError::Malformed(e.to_string()))
}

/// `gloo-net` transport against the configured backend.
#[derive(Clone, Debug)]
pub struct HttpTransport {
	config: SiteConfig,
}

impl HttpTransport {
	pub fn new(config: SiteConfig) -> Self {
		Self { config }
	}

	async fn read<T: DeserializeOwned>(resp: Response) -> Result<T, ChatError> {
		let (status, ok) = (resp.status(), resp.ok());
		let body = resp.text().await.map_err(|e| ChatError::Transport(e.to_string()))?;
		interpret(status, ok, &body)
	}
}

impl ChatTransport for HttpTransport {
	async fn send(&self, request: &ChatRequest) -> Result<ChatReply, ChatError> {
		let resp = Request::post(&self.config.endpoint("/api/chat"))
			.json(request)
			.map_err(|e| ChatError::Transport(e.to_string()))?
			.send()
			.await
			.map_err(|e| ChatError::Transport(e.to_string()))?;
		Self::read(resp).await
	}

	async fn warm_up(&self) -> Result<(), ChatError> {
		let resp = Request::get(&self.config.endpoint("/health"))
			.send()
			.await
			.map_err(|e| ChatError::Transport(e.to_string()))?;
		if resp.ok() {
			Ok(())
		} else {
			Err(ChatError::Server { status: resp.status(), detail: None })
		}
	}

	async fn fetch_resume(&self) -> Result<Resume, ChatError> {
		let resp = Request::get(&self.config.endpoint("/api/resume"))
			.send()
			.await
			.map_err(|e| ChatError::Transport(e.to_string()))?;
		Self::read(resp).await
	}
}
