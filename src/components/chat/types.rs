use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
	User,
	Assistant,
}

impl Role {
	pub fn class(self) -> &'static str {
		match self {
			Role::User => "u",
			Role::Assistant => "b",
		}
	}

	pub fn avatar(self) -> &'static str {
		match self {
			Role::User => "👤",
			Role::Assistant => "🤖",
		}
	}
}

/// A rendered conversation entry. `html` is already escaped.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ChatMessage {
	pub id: u64,
	pub role: Role,
	pub html: String,
}

/// One prior turn, in the shape the backend accepts.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoryEntry {
	pub role: Role,
	pub content: String,
}

/// Body of `POST /api/chat`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ChatRequest {
	pub message: String,
	/// Always sent empty; the backend keeps no session.
	pub history: Vec<HistoryEntry>,
}

impl ChatRequest {
	pub fn new(message: impl Into<String>) -> Self {
		Self { message: message.into(), history: Vec::new() }
	}
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct ChatReply {
	pub reply: String,
}

/// Error payload; validation failures carry a list rather than a string.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct ErrorBody {
	#[serde(default)]
	pub detail: Option<serde_json::Value>,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ChatTab {
	#[default]
	Chat,
	Resume,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
pub struct Resume {
	pub name: String,
	pub title: String,
	#[serde(default)]
	pub school: String,
	#[serde(default)]
	pub gpa: String,
	#[serde(default)]
	pub location: String,
	#[serde(default)]
	pub status: String,
	#[serde(default)]
	pub email: String,
	#[serde(default)]
	pub linkedin: String,
	#[serde(default)]
	pub skills: Vec<String>,
	#[serde(default)]
	pub projects: Vec<Project>,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
pub struct Project {
	pub name: String,
	#[serde(rename = "type", default)]
	pub kind: String,
	#[serde(default)]
	pub desc: String,
	#[serde(default)]
	pub stack: Vec<String>,
}
