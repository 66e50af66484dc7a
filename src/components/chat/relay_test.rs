use std::cell::RefCell;
use std::collections::VecDeque;

use futures::executor::block_on;
use futures::future::join;

use super::*;
use crate::components::chat::error::ChatError;
use crate::components::chat::types::{ChatReply, Resume};
use crate::testing::{ManualClock, YieldNow};

// =============================================================
// Fakes
// =============================================================

#[derive(Default)]
struct ScriptedTransport {
	replies: RefCell<VecDeque<Result<ChatReply, ChatError>>>,
	requests: RefCell<Vec<ChatRequest>>,
	warm_ups: Cell<usize>,
	warm_fails: Cell<bool>,
	resume: RefCell<Option<Result<Resume, ChatError>>>,
	resume_calls: Cell<usize>,
}

impl ScriptedTransport {
	fn replying(result: Result<ChatReply, ChatError>) -> Self {
		let t = Self::default();
		t.replies.borrow_mut().push_back(result);
		t
	}
}

impl ChatTransport for ScriptedTransport {
	async fn send(&self, request: &ChatRequest) -> Result<ChatReply, ChatError> {
		self.requests.borrow_mut().push(request.clone());
		YieldNow(false).await;
		self.replies
			.borrow_mut()
			.pop_front()
			.unwrap_or_else(|| Err(ChatError::Transport("no scripted reply".into())))
	}

	async fn warm_up(&self) -> Result<(), ChatError> {
		self.warm_ups.set(self.warm_ups.get() + 1);
		if self.warm_fails.get() {
			Err(ChatError::Transport("cold".into()))
		} else {
			Ok(())
		}
	}

	async fn fetch_resume(&self) -> Result<Resume, ChatError> {
		self.resume_calls.set(self.resume_calls.get() + 1);
		self.resume
			.borrow_mut()
			.take()
			.unwrap_or_else(|| Err(ChatError::Server { status: 404, detail: None }))
	}
}

#[derive(Clone, Debug, PartialEq)]
enum Ui {
	Open(bool),
	Focus,
	Append(Role),
	QuickQuestions(bool),
	Busy(bool),
	Typing,
	TypingRemoved,
	Tab(ChatTab),
	Resume(String),
	ResumeError(String),
}

#[derive(Default)]
struct RecordingView {
	events: RefCell<Vec<Ui>>,
}

impl RecordingView {
	fn events(&self) -> Vec<Ui> {
		self.events.borrow().clone()
	}

	fn push(&self, ui: Ui) {
		self.events.borrow_mut().push(ui);
	}
}

impl ChatView for RecordingView {
	fn set_panel_open(&self, open: bool) {
		self.push(Ui::Open(open));
	}
	fn focus_input(&self) {
		self.push(Ui::Focus);
	}
	fn append_message(&self, message: &ChatMessage) {
		self.push(Ui::Append(message.role));
	}
	fn set_quick_questions_visible(&self, visible: bool) {
		self.push(Ui::QuickQuestions(visible));
	}
	fn set_busy(&self, busy: bool) {
		self.push(Ui::Busy(busy));
	}
	fn show_typing(&self) {
		self.push(Ui::Typing);
	}
	fn remove_typing(&self) {
		self.push(Ui::TypingRemoved);
	}
	fn set_tab(&self, tab: ChatTab) {
		self.push(Ui::Tab(tab));
	}
	fn show_resume(&self, resume: &Resume) {
		self.push(Ui::Resume(resume.name.clone()));
	}
	fn show_resume_error(&self, message: &str) {
		self.push(Ui::ResumeError(message.to_owned()));
	}
}

type Relay = ChatRelay<ScriptedTransport, RecordingView, ManualClock>;

fn relay(transport: ScriptedTransport) -> Relay {
	let config = SiteConfig::from_build_env();
	ChatRelay::new(transport, RecordingView::default(), ManualClock::new(), &config)
}

fn reply(text: &str) -> Result<ChatReply, ChatError> {
	Ok(ChatReply { reply: text.into() })
}

// =============================================================
// send
// =============================================================

#[test]
fn empty_and_blank_text_are_ignored() {
	let relay = relay(ScriptedTransport::replying(reply("unused")));
	assert_eq!(block_on(relay.send("")), SendOutcome::Ignored);
	assert_eq!(block_on(relay.send("   \n\t")), SendOutcome::Ignored);
	assert!(relay.messages.borrow().clone().is_empty());
	assert!(relay.transport.requests.borrow().is_empty());
	assert!(relay.view.events().is_empty());
}

#[test]
fn hello_gets_hi_there() {
	let relay = relay(ScriptedTransport::replying(reply("Hi there")));
	assert_eq!(block_on(relay.send("Hello")), SendOutcome::Replied);

	let messages = relay.messages.borrow().clone();
	assert_eq!(messages.len(), 2);
	assert_eq!((messages[0].role, messages[0].html.as_str()), (Role::User, "Hello"));
	assert_eq!((messages[1].role, messages[1].html.as_str()), (Role::Assistant, "Hi there"));
	assert!(!relay.busy.get());

	let requests = relay.transport.requests.borrow();
	assert_eq!(requests.as_slice(), &[ChatRequest::new("Hello")]);
	assert!(requests[0].history.is_empty());
}

#[test]
fn ui_sequence_for_successful_send() {
	let relay = relay(ScriptedTransport::replying(reply("ok")));
	block_on(relay.send("Hello"));
	assert_eq!(
		relay.view.events(),
		vec![
			Ui::Append(Role::User),
			Ui::QuickQuestions(false),
			Ui::Busy(true),
			Ui::Typing,
			Ui::TypingRemoved,
			Ui::Append(Role::Assistant),
			Ui::Busy(false),
		]
	);
}

#[test]
fn user_text_and_reply_are_escaped() {
	let relay = relay(ScriptedTransport::replying(reply("<b>bold</b>\nnext")));
	block_on(relay.send("<img src=x onerror=alert(1)>"));
	let messages = relay.messages.borrow().clone();
	assert_eq!(messages[0].html, "&lt;img src=x onerror=alert(1)&gt;");
	assert_eq!(messages[1].html, "&lt;b&gt;bold&lt;/b&gt;<br>next");
}

#[test]
fn server_error_detail_is_shown() {
	let relay = relay(ScriptedTransport::replying(Err(ChatError::Server {
		status: 500,
		detail: Some("overloaded".into()),
	})));
	assert_eq!(block_on(relay.send("Hello")), SendOutcome::Failed);

	let messages = relay.messages.borrow().clone();
	assert_eq!(messages.len(), 2);
	assert_eq!(messages[0].role, Role::User);
	assert_eq!(messages[1].role, Role::Assistant);
	assert!(messages[1].html.contains("overloaded"));
	assert!(messages[1].html.contains("mailto:"));
	assert!(!relay.busy.get());
}

#[test]
fn every_failure_kind_appends_one_error_and_clears_busy() {
	for err in [
		ChatError::Transport("Failed to fetch".into()),
		ChatError::Server { status: 500, detail: None },
		ChatError::Malformed("missing field `reply`".into()),
	] {
		let expected = err.to_string();
		let relay = relay(ScriptedTransport::replying(Err(err)));
		assert_eq!(block_on(relay.send("Hello")), SendOutcome::Failed);
		let messages = relay.messages.borrow().clone();
		assert_eq!(messages.len(), 2);
		assert!(messages[1].html.contains(&escape_html(&expected)));
		assert!(!relay.busy.get());
		assert_eq!(relay.view.events().last(), Some(&Ui::Busy(false)));
		assert!(relay.view.events().contains(&Ui::TypingRemoved));
	}
}

#[test]
fn generic_server_error_names_status() {
	let relay = relay(ScriptedTransport::replying(Err(ChatError::Server { status: 503, detail: None })));
	block_on(relay.send("Hello"));
	assert!(relay.messages.borrow().clone()[1].html.contains("Server error 503"));
}

#[test]
fn second_send_while_busy_is_dropped() {
	let relay = relay(ScriptedTransport::replying(reply("first")));
	let (a, b) = block_on(join(relay.send("one"), relay.send("two")));
	assert_eq!((a, b), (SendOutcome::Replied, SendOutcome::Ignored));
	assert_eq!(relay.transport.requests.borrow().len(), 1);
	assert_eq!(relay.messages.borrow().clone().len(), 2);
	assert!(!relay.busy.get());
}

#[test]
fn accepts_reflects_busy_and_blank() {
	let relay = relay(ScriptedTransport::default());
	assert!(relay.accepts("hi"));
	assert!(!relay.accepts("  "));
	relay.busy.set(true);
	assert!(!relay.accepts("hi"));
}

#[test]
fn quick_send_hides_chips_and_sends() {
	let relay = relay(ScriptedTransport::replying(reply("sure")));
	assert_eq!(block_on(relay.quick_send("What are you working on?")), SendOutcome::Replied);
	assert_eq!(relay.view.events()[0], Ui::QuickQuestions(false));
	assert_eq!(relay.messages.borrow().clone().len(), 2);
}

// =============================================================
// toggle
// =============================================================

#[test]
fn opening_focuses_after_delay_and_warms_once() {
	let relay = relay(ScriptedTransport::default());
	block_on(relay.toggle());
	assert!(relay.open.get());
	assert_eq!(relay.view.events(), vec![Ui::Open(true), Ui::Focus]);
	assert_eq!(relay.clock.sleeps(), vec![ms(350)]);

	block_on(relay.toggle());
	assert!(!relay.open.get());
	block_on(relay.toggle());
	assert_eq!(relay.transport.warm_ups.get(), 1);
}

#[test]
fn closing_does_not_focus() {
	let relay = relay(ScriptedTransport::default());
	block_on(relay.toggle());
	block_on(relay.toggle());
	assert_eq!(relay.view.events().last(), Some(&Ui::Open(false)));
	assert_eq!(relay.view.count_focus(), 1);
}

#[test]
fn failed_warm_up_is_retried_on_next_open() {
	let transport = ScriptedTransport::default();
	transport.warm_fails.set(true);
	let relay = relay(transport);
	block_on(relay.toggle());
	block_on(relay.toggle());
	block_on(relay.toggle());
	assert_eq!(relay.transport.warm_ups.get(), 2);
}

// =============================================================
// tabs
// =============================================================

#[test]
fn resume_is_fetched_once() {
	let transport = ScriptedTransport::default();
	*transport.resume.borrow_mut() = Some(Ok(Resume { name: "A. Person".into(), ..Resume::default() }));
	let relay = relay(transport);

	block_on(relay.select_tab(ChatTab::Resume));
	block_on(relay.select_tab(ChatTab::Chat));
	block_on(relay.select_tab(ChatTab::Resume));

	assert_eq!(relay.transport.resume_calls.get(), 1);
	assert_eq!(
		relay.view.events(),
		vec![
			Ui::Tab(ChatTab::Resume),
			Ui::Resume("A. Person".into()),
			Ui::Tab(ChatTab::Chat),
			Ui::Tab(ChatTab::Resume),
		]
	);
}

#[test]
fn resume_failure_is_reported_and_retried() {
	let relay = relay(ScriptedTransport::default());
	block_on(relay.select_tab(ChatTab::Resume));
	assert!(relay.view.events().contains(&Ui::ResumeError("Server error 404".into())));
	block_on(relay.select_tab(ChatTab::Resume));
	assert_eq!(relay.transport.resume_calls.get(), 2);
}

impl RecordingView {
	fn count_focus(&self) -> usize {
		self.events.borrow().iter().filter(|e| **e == Ui::Focus).count()
	}
}
