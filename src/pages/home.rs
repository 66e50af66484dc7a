use leptos::prelude::*;

use crate::components::chat::ChatWidget;
use crate::components::pipeline::PipelineCanvas;

/// Default Home Page
#[component]
pub fn Home() -> impl IntoView {
	view! {
		<ErrorBoundary fallback=|errors| {
			view! {
				<h1>"Uh oh! Something went wrong!"</h1>

				<p>"Errors: "</p>
				<ul>
					{move || {
						errors
							.get()
							.into_iter()
							.map(|(_, e)| view! { <li>{e.to_string()}</li> })
							.collect_view()
					}}
				</ul>
			}
		}>

			<main class="home">
				<header class="hero">
					<h1>"Multi-agent research pipeline"</h1>
					<p class="subtitle">
						"A planner fans a query out to parallel searches, a writer drafts the report, "
						"two evaluators score it and a guarded rewrite loop runs until they converge."
					</p>
				</header>

				<section class="pipeline-section">
					<PipelineCanvas />
				</section>
			</main>

			<ChatWidget />
		</ErrorBoundary>
	}
}
