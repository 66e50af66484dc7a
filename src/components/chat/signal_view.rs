use leptos::prelude::*;

use super::types::{ChatMessage, ChatTab, Resume};
use super::view::ChatView;

/// [`ChatView`] backed by Leptos signals; the widget renders from these.
#[derive(Clone, Copy)]
pub struct SignalChatView {
	pub messages: RwSignal<Vec<ChatMessage>>,
	pub open: RwSignal<bool>,
	pub busy: RwSignal<bool>,
	pub typing: RwSignal<bool>,
	pub quick_visible: RwSignal<bool>,
	pub tab: RwSignal<ChatTab>,
	/// `None` until the résumé has been fetched (or has failed).
	pub resume: RwSignal<Option<Result<Resume, String>>>,
	pub input_ref: NodeRef<leptos::html::Input>,
}

impl SignalChatView {
	pub fn new() -> Self {
		Self {
			messages: RwSignal::new(Vec::new()),
			open: RwSignal::new(false),
			busy: RwSignal::new(false),
			typing: RwSignal::new(false),
			quick_visible: RwSignal::new(true),
			tab: RwSignal::new(ChatTab::Chat),
			resume: RwSignal::new(None),
			input_ref: NodeRef::new(),
		}
	}
}

impl ChatView for SignalChatView {
	fn set_panel_open(&self, open: bool) {
		self.open.set(open);
	}

	fn focus_input(&self) {
		if let Some(input) = self.input_ref.get_untracked() {
			let _ = input.focus();
		}
	}

	fn append_message(&self, message: &ChatMessage) {
		let message = message.clone();
		self.messages.update(|m| m.push(message));
	}

	fn set_quick_questions_visible(&self, visible: bool) {
		self.quick_visible.set(visible);
	}

	fn set_busy(&self, busy: bool) {
		self.busy.set(busy);
	}

	fn show_typing(&self) {
		self.typing.set(true);
	}

	fn remove_typing(&self) {
		self.typing.set(false);
	}

	fn set_tab(&self, tab: ChatTab) {
		self.tab.set(tab);
	}

	fn show_resume(&self, resume: &Resume) {
		self.resume.set(Some(Ok(resume.clone())));
	}

	fn show_resume_error(&self, message: &str) {
		self.resume.set(Some(Err(message.to_owned())));
	}
}
