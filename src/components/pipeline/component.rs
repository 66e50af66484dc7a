use std::cell::RefCell;
use std::rc::Rc;

use leptos::prelude::*;
use log::{debug, warn};
use wasm_bindgen::prelude::*;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

use super::canvas_view::CanvasView;
use super::render;
use super::scene::{HudState, PipelineScene};
use super::sequencer::Sequencer;
use crate::config::SiteConfig;
use crate::runtime::BrowserClock;

const FALLBACK_SIZE: (f64, f64) = (720.0, 640.0);

fn container_size(canvas: &HtmlCanvasElement) -> (f64, f64) {
	canvas
		.parent_element()
		.map(|p| (p.client_width() as f64, p.client_height() as f64))
		.unwrap_or(FALLBACK_SIZE)
}

/// Animated research-pipeline diagram with its status HUD.
#[component]
pub fn PipelineCanvas() -> impl IntoView {
	let config = use_context::<SiteConfig>().unwrap_or_default();
	let canvas_ref = NodeRef::<leptos::html::Canvas>::new();
	let hud = RwSignal::new(HudState::default());
	let scene: Rc<RefCell<PipelineScene>> = Rc::new(RefCell::new(PipelineScene::new(FALLBACK_SIZE.0, FALLBACK_SIZE.1)));
	let animate: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
	let resize_cb: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));

	Effect::new(move |_| {
		let Some(canvas) = canvas_ref.get() else {
			return;
		};
		let canvas: HtmlCanvasElement = canvas.into();
		let Some(window) = web_sys::window() else {
			warn!("pipeline: no window, animation disabled");
			return;
		};

		let (w, h) = container_size(&canvas);
		canvas.set_width(w as u32);
		canvas.set_height(h as u32);
		scene.borrow_mut().resize(w, h);

		let ctx: CanvasRenderingContext2d = match canvas.get_context("2d") {
			Ok(Some(ctx)) => match ctx.dyn_into() {
				Ok(ctx) => ctx,
				Err(_) => return,
			},
			_ => {
				warn!("pipeline: 2d context unavailable");
				return;
			}
		};

		let sequencer = Rc::new(
			Sequencer::new(CanvasView { scene: scene.clone(), hud }, BrowserClock)
				.with_cooldown_ms(config.replay_cooldown_ms),
		);

		let (scene_resize, canvas_resize, seq_resize) = (scene.clone(), canvas.clone(), sequencer.clone());
		*resize_cb.borrow_mut() = Some(Closure::new(move || {
			let (nw, nh) = container_size(&canvas_resize);
			debug!("pipeline: resize {nw}x{nh}");
			canvas_resize.set_width(nw as u32);
			canvas_resize.set_height(nh as u32);
			scene_resize.borrow_mut().resize(nw, nh);
			seq_resize.resize();
		}));
		if let Some(ref cb) = *resize_cb.borrow() {
			let _ = window.add_event_listener_with_callback("resize", cb.as_ref().unchecked_ref());
		}

		let (scene_anim, animate_inner) = (scene.clone(), animate.clone());
		let mut last_ts: Option<f64> = None;
		*animate.borrow_mut() = Some(Closure::new(move || {
			let now = web_sys::window()
				.and_then(|w| w.performance())
				.map(|p| p.now())
				.unwrap_or(0.0);
			let dt = last_ts.map(|t| ((now - t) / 1000.0).clamp(0.0, 0.1)).unwrap_or(0.016);
			last_ts = Some(now);
			{
				let mut s = scene_anim.borrow_mut();
				s.tick(dt);
				render::render(&s, &ctx);
			}
			if let Some(ref cb) = *animate_inner.borrow() {
				if let Some(win) = web_sys::window() {
					let _ = win.request_animation_frame(cb.as_ref().unchecked_ref());
				}
			}
		}));
		if let Some(ref cb) = *animate.borrow() {
			let _ = window.request_animation_frame(cb.as_ref().unchecked_ref());
		}

		leptos::task::spawn_local(async move {
			sequencer.run_forever().await;
		});
	});

	let dots = move || {
		hud.get()
			.dots
			.iter()
			.map(|d| view! { <span class=d.class()></span> })
			.collect_view()
	};

	view! {
		<div class="pipeline">
			<div class="pipeline-stage">
				<canvas node_ref=canvas_ref class="pipeline-canvas" style="display: block;" />
				<div class="disagree-badge" class:show=move || hud.get().disagreement>
					"⚠ EVALUATORS DISAGREE"
				</div>
			</div>
			<div class="pipeline-hud">
				<div class="p-status">
					<span class="p-step">
						{move || {
							let h = hud.get();
							if h.stage == 0 { String::new() } else { format!("{:02}/10 · {}", h.stage, h.stage_title) }
						}}
					</span>
					<span class=move || hud.get().tone.class()>{move || hud.get().status}</span>
				</div>
				<div class="p-dots">{dots}</div>
				<div class="p-score">
					<div class="score-track">
						<div class="score-fill" style:width=move || format!("{}%", hud.get().score_fill)></div>
					</div>
					<span class="score-val">
						{move || {
							let h = hud.get();
							format!("{}/{}", h.score_value, h.score_max)
						}}
					</span>
				</div>
			</div>
		</div>
	}
}
