//! Timing primitives shared by the pipeline animation and the chat widget.
//!
//! Everything that waits goes through [`Clock`], so the same async code runs
//! against the browser event loop in production and a virtual clock in tests.

use std::time::Duration;

use futures::channel::oneshot;
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::Closure;

/// Source of time and suspension points for cooperative UI tasks.
#[allow(async_fn_in_trait)]
pub trait Clock {
	/// Current timestamp in milliseconds.
	fn now(&self) -> f64;

	/// Suspend for `duration`.
	async fn sleep(&self, duration: Duration);

	/// Suspend until the next animation frame and return its timestamp (ms).
	async fn next_frame(&self) -> f64;
}

/// Browser clock backed by `setTimeout` and `requestAnimationFrame`.
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserClock;

impl Clock for BrowserClock {
	fn now(&self) -> f64 {
		web_sys::window()
			.and_then(|w| w.performance())
			.map(|p| p.now())
			.unwrap_or(0.0)
	}

	async fn sleep(&self, duration: Duration) {
		if duration.is_zero() {
			return;
		}
		gloo_timers::future::sleep(duration).await;
	}

	async fn next_frame(&self) -> f64 {
		let Some(window) = web_sys::window() else {
			// No frame source: fall back to a short timer so callers still progress.
			gloo_timers::future::sleep(Duration::from_millis(16)).await;
			return self.now();
		};

		let (tx, rx) = oneshot::channel::<f64>();
		let cb = Closure::once(move |ts: f64| {
			let _ = tx.send(ts);
		});
		if window
			.request_animation_frame(cb.as_ref().unchecked_ref())
			.is_err()
		{
			gloo_timers::future::sleep(Duration::from_millis(16)).await;
			return self.now();
		}
		// `cb` must stay alive until the frame fires.
		let ts = rx.await.unwrap_or_else(|_| self.now());
		drop(cb);
		ts
	}
}

/// Milliseconds helper for the static timing tables.
pub const fn ms(value: u64) -> Duration {
	Duration::from_millis(value)
}
