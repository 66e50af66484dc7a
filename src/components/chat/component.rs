//! Floating chat widget: anchor button, sliding panel, Chat and Résumé tabs.

use std::rc::Rc;

use leptos::prelude::*;

use super::relay::ChatRelay;
use super::signal_view::SignalChatView;
use super::transport::HttpTransport;
use super::types::{ChatMessage, ChatTab, Resume};
use crate::config::SiteConfig;
use crate::runtime::BrowserClock;

type Relay = ChatRelay<HttpTransport, SignalChatView, BrowserClock>;

const QUICK_QUESTIONS: &[&str] = &[
	"What are you working on right now?",
	"Which project are you proudest of?",
	"Are you open to new roles?",
];

fn message_view(msg: ChatMessage) -> impl IntoView {
	view! {
		<div class=format!("cm {}", msg.role.class())>
			<div class="cm-av">{msg.role.avatar()}</div>
			<div class="cm-bub" inner_html=msg.html></div>
		</div>
	}
}

fn resume_view(resume: Resume) -> impl IntoView {
	let skills = resume
		.skills
		.into_iter()
		.map(|s| view! { <span class="skill">{s}</span> })
		.collect_view();
	let projects = resume
		.projects
		.into_iter()
		.map(|p| {
			let stack = p.stack.join(" · ");
			view! {
				<div class="resume-project">
					<strong>{p.name}</strong>
					<span class="resume-project-type">{p.kind}</span>
					<p>{p.desc}</p>
					<small>{stack}</small>
				</div>
			}
		})
		.collect_view();
	let mailto = format!("mailto:{}", resume.email);

	view! {
		<div class="resume">
			<h3>{resume.name}</h3>
			<p class="resume-title">{resume.title}</p>
			<p class="resume-meta">{resume.school} " · GPA " {resume.gpa} " · " {resume.location}</p>
			<p class="resume-status">{resume.status}</p>
			<div class="resume-skills">{skills}</div>
			<div class="resume-projects">{projects}</div>
			<p class="resume-links">
				<a href=mailto>{resume.email}</a>
				" · "
				<a href=resume.linkedin target="_blank" rel="noopener">"LinkedIn"</a>
			</p>
		</div>
	}
}

fn display(visible: bool) -> &'static str {
	if visible { "block" } else { "none" }
}

/// The chat widget. One relay instance lives for the life of the page.
#[component]
pub fn ChatWidget() -> impl IntoView {
	let config = use_context::<SiteConfig>().unwrap_or_default();
	let ui = SignalChatView::new();
	let relay: Rc<Relay> = Rc::new(ChatRelay::new(HttpTransport::new(config.clone()), ui, BrowserClock, &config));

	let input = RwSignal::new(String::new());
	let messages_ref = NodeRef::<leptos::html::Div>::new();

	Effect::new(move |_| {
		let _ = ui.messages.with(Vec::len);
		let _ = ui.typing.get();
		if let Some(el) = messages_ref.get() {
			el.set_scroll_top(el.scroll_height());
		}
	});

	let on_toggle = {
		let relay = relay.clone();
		move |_: leptos::ev::MouseEvent| {
			let relay = relay.clone();
			leptos::task::spawn_local(async move { relay.toggle().await });
		}
	};

	let submit = {
		let relay = relay.clone();
		move || {
			let text = input.get_untracked();
			if !relay.accepts(&text) {
				return;
			}
			input.set(String::new());
			let relay = relay.clone();
			leptos::task::spawn_local(async move {
				relay.send(&text).await;
			});
		}
	};
	let submit_click = submit.clone();
	let on_keydown = move |ev: leptos::ev::KeyboardEvent| {
		if ev.key() == "Enter" && !ev.shift_key() {
			ev.prevent_default();
			submit();
		}
	};

	let tab_button = |tab: ChatTab, label: &'static str| {
		let relay = relay.clone();
		view! {
			<button
				class="chat-tab"
				class:on=move || ui.tab.get() == tab
				on:click=move |_| {
					let relay = relay.clone();
					leptos::task::spawn_local(async move { relay.select_tab(tab).await });
				}
			>
				{label}
			</button>
		}
	};
	let tabs = view! { <div class="chat-tabs">{tab_button(ChatTab::Chat, "Chat")} {tab_button(ChatTab::Resume, "Résumé")}</div> };

	let chips = QUICK_QUESTIONS
		.iter()
		.map(|&q| {
			let relay = relay.clone();
			view! {
				<button
					class="quick-q"
					on:click=move |_| {
						let relay = relay.clone();
						leptos::task::spawn_local(async move {
							relay.quick_send(q).await;
						});
					}
				>
					{q}
				</button>
			}
		})
		.collect_view();

	view! {
		<div class="twin-anchor" class:panel-open=move || ui.open.get()>
			<span class="twin-label">"Ask my AI twin"</span>
			<button class="twin-btn" class:open=move || ui.open.get() on:click=on_toggle>
				"💬"
			</button>

			<div class="twin-panel" class:open=move || ui.open.get()>
				{tabs}

				<div id="tab-chat" style:display=move || display(ui.tab.get() == ChatTab::Chat)>
					<div class="chat-msgs" node_ref=messages_ref>
						<For
							each=move || ui.messages.get()
							key=|m: &ChatMessage| m.id
							children=message_view
						/>
						<div class="cm b" style:display=move || display(ui.typing.get())>
							<div class="cm-av">"🤖"</div>
							<div class="cm-bub">
								<div class="typing-bub">
									<div class="td"></div>
									<div class="td"></div>
									<div class="td"></div>
								</div>
							</div>
						</div>
					</div>

					<div class="quick-qs" style:display=move || display(ui.quick_visible.get())>
						{chips}
					</div>

					<div class="chat-input-row">
						<input
							node_ref=ui.input_ref
							class="chat-inp"
							type="text"
							placeholder="Ask me anything..."
							prop:value=move || input.get()
							prop:disabled=move || ui.busy.get()
							on:input=move |ev| input.set(event_target_value(&ev))
							on:keydown=on_keydown
						/>
						<button
							class="chat-send"
							disabled=move || ui.busy.get()
							on:click=move |_| submit_click()
						>
							{move || if ui.busy.get() { "…" } else { "↑" }}
						</button>
					</div>
				</div>

				<div id="tab-resume" style:display=move || display(ui.tab.get() == ChatTab::Resume)>
					{move || match ui.resume.get() {
						None => view! { <p class="resume-loading">"Loading résumé..."</p> }.into_any(),
						Some(Ok(resume)) => resume_view(resume).into_any(),
						Some(Err(err)) => view! { <p class="resume-error">"Couldn't load résumé: " {err}</p> }.into_any(),
					}}
				</div>
			</div>
		</div>
	}
}
