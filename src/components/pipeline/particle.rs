#[cfg(test)]
#[path = "particle_test.rs"]
mod particle_test;

use std::time::Duration;

use super::types::{ParticleId, ParticleTone, Segment};
use super::view::PipelineView;
use crate::runtime::Clock;

/// Quadratic ease-in-ease-out.
pub fn ease_in_out(t: f64) -> f64 {
	let t = t.clamp(0.0, 1.0);
	if t < 0.5 {
		2.0 * t * t
	} else {
		-1.0 + (4.0 - 2.0 * t) * t
	}
}

/// One flight request: where, how long, after what delay.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ParticleSpec {
	pub segment: Segment,
	pub tone: ParticleTone,
	pub duration: Duration,
	pub delay: Duration,
}

/// Removes the marker when the flight ends, however it ends.
struct Marker<'a, V: PipelineView> {
	view: &'a V,
	id: ParticleId,
}

impl<V: PipelineView> Drop for Marker<'_, V> {
	fn drop(&mut self) {
		self.view.remove_particle(self.id);
	}
}

/// Animate a single marker along `spec.segment`; resolves once it has arrived.
pub async fn emit_particle<V: PipelineView, C: Clock>(view: &V, clock: &C, id: ParticleId, spec: ParticleSpec) {
	clock.sleep(spec.delay).await;

	view.spawn_particle(id, spec.tone, spec.segment.start);
	let _marker = Marker { view, id };

	let duration_ms = spec.duration.as_secs_f64() * 1000.0;
	let start = clock.now();
	loop {
		let now = clock.next_frame().await;
		let t = if duration_ms <= 0.0 {
			1.0
		} else {
			((now - start) / duration_ms).min(1.0)
		};
		view.move_particle(id, spec.segment.point_at(ease_in_out(t)));
		if t >= 1.0 {
			break;
		}
	}
}
