/// Failure of a single chat exchange.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ChatError {
	/// The request never completed.
	#[error("{0}")]
	Transport(String),

	/// Non-success status, with the server's `detail` when it sent one.
	#[error("{}", server_message(.status, .detail))]
	Server { status: u16, detail: Option<String> },

	/// Success status but the body was not a reply.
	#[error("Unexpected response: {0}")]
	Malformed(String),
}

fn server_message(status: &u16, detail: &Option<String>) -> String {
	match detail {
		Some(detail) => detail.to_owned(),
		None => format!("Server error {status}"),
	}
}
