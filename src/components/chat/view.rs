use super::types::{ChatMessage, ChatTab, Resume};

/// UI surface the chat relay drives.
pub trait ChatView {
	fn set_panel_open(&self, open: bool);
	fn focus_input(&self);
	fn append_message(&self, message: &ChatMessage);
	fn set_quick_questions_visible(&self, visible: bool);
	/// Disable input and swap the send control for a pending indicator.
	fn set_busy(&self, busy: bool);
	fn show_typing(&self);
	fn remove_typing(&self);
	fn set_tab(&self, tab: ChatTab);
	fn show_resume(&self, resume: &Resume);
	fn show_resume_error(&self, message: &str);
}
