//! Test doubles shared by the unit tests.

use std::cell::{Cell, RefCell};
use std::future::Future;
use std::pin::Pin;
use std::task::{Context, Poll};
use std::time::Duration;

use crate::runtime::Clock;

/// Virtual clock: every suspension advances time and yields to the executor once.
#[derive(Debug, Default)]
pub struct ManualClock {
	now: Cell<f64>,
	sleeps: RefCell<Vec<Duration>>,
	frames: Cell<u64>,
}

pub const FRAME_MS: f64 = 16.0;

impl ManualClock {
	pub fn new() -> Self {
		Self::default()
	}

	pub fn sleeps(&self) -> Vec<Duration> {
		self.sleeps.borrow().clone()
	}

	pub fn frames(&self) -> u64 {
		self.frames.get()
	}
}

impl Clock for ManualClock {
	fn now(&self) -> f64 {
		self.now.get()
	}

	async fn sleep(&self, duration: Duration) {
		self.sleeps.borrow_mut().push(duration);
		self.now.set(self.now.get() + duration.as_secs_f64() * 1000.0);
		YieldNow(false).await;
	}

	async fn next_frame(&self) -> f64 {
		self.frames.set(self.frames.get() + 1);
		self.now.set(self.now.get() + FRAME_MS);
		YieldNow(false).await;
		self.now.get()
	}
}

/// Returns `Pending` exactly once so sibling futures in a join get polled.
pub struct YieldNow(pub bool);

impl Future for YieldNow {
	type Output = ();

	fn poll(mut self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<()> {
		if self.0 {
			Poll::Ready(())
		} else {
			self.0 = true;
			cx.waker().wake_by_ref();
			Poll::Pending
		}
	}
}
