#[cfg(test)]
#[path = "relay_test.rs"]
mod relay_test;

use std::cell::{Cell, RefCell};

use futures::future::join;
use log::{info, warn};

use super::markup::{error_html, escape_html, reply_html};
use super::transport::ChatTransport;
use super::types::{ChatMessage, ChatRequest, ChatTab, Role};
use super::view::ChatView;
use crate::config::SiteConfig;
use crate::runtime::{Clock, ms};

/// Result of a [`ChatRelay::send`] call.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SendOutcome {
	/// Empty text, or another send was in flight.
	Ignored,
	Replied,
	Failed,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
enum ResumeLoad {
	#[default]
	Idle,
	Loading,
	Loaded,
}

/// Clears the busy flag on every exit path.
struct BusyGuard<'a, V: ChatView> {
	busy: &'a Cell<bool>,
	view: &'a V,
}

impl<V: ChatView> Drop for BusyGuard<'_, V> {
	fn drop(&mut self) {
		self.busy.set(false);
		self.view.set_busy(false);
	}
}

/// Single-flight bridge between the chat widget and the backend.
pub struct ChatRelay<T, V, C> {
	transport: T,
	view: V,
	clock: C,
	contact_email: String,
	focus_delay_ms: u64,
	open: Cell<bool>,
	busy: Cell<bool>,
	warmed: Cell<bool>,
	resume: Cell<ResumeLoad>,
	next_id: Cell<u64>,
	messages: RefCell<Vec<ChatMessage>>,
}

impl<T: ChatTransport, V: ChatView, C: Clock> ChatRelay<T, V, C> {
	pub fn new(transport: T, view: V, clock: C, config: &SiteConfig) -> Self {
		Self {
			transport,
			view,
			clock,
			contact_email: config.contact_email.clone(),
			focus_delay_ms: config.focus_delay_ms,
			open: Cell::new(false),
			busy: Cell::new(false),
			warmed: Cell::new(false),
			resume: Cell::new(ResumeLoad::Idle),
			next_id: Cell::new(0),
			messages: RefCell::new(Vec::new()),
		}
	}

	/// Whether [`send`](Self::send) would accept `text` right now.
	pub fn accepts(&self, text: &str) -> bool {
		!text.trim().is_empty() && !self.busy.get()
	}

	/// Open or close the panel. Opening focuses the input once the slide-in has
	/// finished and, the first time, pings the backend awake.
	pub async fn toggle(&self) {
		let open = !self.open.get();
		self.open.set(open);
		self.view.set_panel_open(open);
		if !open {
			return;
		}

		let focus = async {
			self.clock.sleep(ms(self.focus_delay_ms)).await;
			if self.open.get() {
				self.view.focus_input();
			}
		};
		let warm = async {
			if self.warmed.replace(true) {
				return;
			}
			if let Err(err) = self.transport.warm_up().await {
				warn!("chat: warm-up failed: {err}");
				self.warmed.set(false);
			}
		};
		join(focus, warm).await;
	}

	/// Send one message and append the reply, or an error bubble on failure.
	pub async fn send(&self, text: &str) -> SendOutcome {
		let text = text.trim();
		if text.is_empty() || self.busy.get() {
			return SendOutcome::Ignored;
		}

		self.push(Role::User, escape_html(text));
		self.view.set_quick_questions_visible(false);
		self.busy.set(true);
		self.view.set_busy(true);
		let _busy = BusyGuard { busy: &self.busy, view: &self.view };
		self.view.show_typing();

		match self.transport.send(&ChatRequest::new(text)).await {
			Ok(reply) => {
				self.view.remove_typing();
				self.push(Role::Assistant, reply_html(&reply.reply));
				info!("chat: reply received ({} chars)", reply.reply.len());
				SendOutcome::Replied
			}
			Err(err) => {
				self.view.remove_typing();
				warn!("chat: send failed: {err}");
				self.push(Role::Assistant, error_html(&err.to_string(), &self.contact_email));
				SendOutcome::Failed
			}
		}
	}

	/// Quick-question chip: hide the chips and send the chip's text.
	pub async fn quick_send(&self, text: &str) -> SendOutcome {
		self.view.set_quick_questions_visible(false);
		self.send(text).await
	}

	/// Switch panel tabs; the résumé is fetched the first time its tab is shown.
	pub async fn select_tab(&self, tab: ChatTab) {
		self.view.set_tab(tab);
		if tab != ChatTab::Resume || self.resume.get() != ResumeLoad::Idle {
			return;
		}
		self.resume.set(ResumeLoad::Loading);
		match self.transport.fetch_resume().await {
			Ok(resume) => {
				self.resume.set(ResumeLoad::Loaded);
				self.view.show_resume(&resume);
			}
			Err(err) => {
				warn!("chat: résumé fetch failed: {err}");
				self.resume.set(ResumeLoad::Idle);
				self.view.show_resume_error(&err.to_string());
			}
		}
	}

	fn push(&self, role: Role, html: String) {
		let id = self.next_id.get();
		self.next_id.set(id + 1);
		let message = ChatMessage { id, role, html };
		self.view.append_message(&message);
		self.messages.borrow_mut().push(message);
	}
}
