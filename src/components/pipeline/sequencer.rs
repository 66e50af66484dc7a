#[cfg(test)]
#[path = "sequencer_test.rs"]
mod sequencer_test;

use std::cell::{Cell, RefCell};

use futures::future::{join, join_all};
use log::{debug, info};

use super::layout::{Layout, compute_layout};
use super::particle::{ParticleSpec, emit_particle};
use super::paths::build_paths;
use super::storyboard::{Flight, INIT_STATUS, REPLAY_COOLDOWN_MS, STORYBOARD, Stage, Step};
use super::types::{Edge, EdgeId, ParticleId, Segment, StatusTone};
use super::view::PipelineView;
use crate::runtime::{Clock, ms};

/// Outcome of a [`Sequencer::play_sequence`] call.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Playback {
	Completed,
	/// Another cycle was already running.
	Skipped,
}

/// Clears the running flag when a cycle ends or is dropped.
struct RunningGuard<'a>(&'a Cell<bool>);

impl Drop for RunningGuard<'_> {
	fn drop(&mut self) {
		self.0.set(false);
	}
}

/// Plays the storyboard against a [`PipelineView`], one cycle at a time.
pub struct Sequencer<V, C> {
	view: V,
	clock: C,
	storyboard: &'static [Stage],
	cooldown_ms: u64,
	running: Cell<bool>,
	layout: RefCell<Option<Layout>>,
	edges: RefCell<Vec<Edge>>,
	next_particle: Cell<ParticleId>,
}

impl<V: PipelineView, C: Clock> Sequencer<V, C> {
	pub fn new(view: V, clock: C) -> Self {
		Self {
			view,
			clock,
			storyboard: STORYBOARD,
			cooldown_ms: REPLAY_COOLDOWN_MS,
			running: Cell::new(false),
			layout: RefCell::new(None),
			edges: RefCell::new(Vec::new()),
			next_particle: Cell::new(0),
		}
	}

	pub fn with_cooldown_ms(mut self, cooldown_ms: u64) -> Self {
		self.cooldown_ms = cooldown_ms;
		self
	}

	#[cfg(test)]
	pub fn view(&self) -> &V {
		&self.view
	}

	#[cfg(test)]
	pub fn clock(&self) -> &C {
		&self.clock
	}

	/// Position every node for the current container size.
	///
	/// Returns `false` (and keeps the previous layout) for an empty container.
	pub fn compute_layout(&self) -> bool {
		let size = self.view.container_size();
		let Some(layout) = compute_layout(size) else {
			debug!("pipeline: container {}x{} not drawable yet", size.width, size.height);
			return false;
		};
		self.view.apply_layout(&layout);
		*self.layout.borrow_mut() = Some(layout);
		true
	}

	/// Rebuild every edge from the current layout.
	pub fn build_paths(&self) {
		let edges = match self.layout.borrow().as_ref() {
			Some(layout) => build_paths(layout),
			None => return,
		};
		self.view.rebuild_paths(&edges);
		*self.edges.borrow_mut() = edges;
	}

	/// Window resize hook.
	pub fn resize(&self) {
		if self.compute_layout() {
			self.build_paths();
		}
	}

	fn segment(&self, edge: EdgeId) -> Option<Segment> {
		self.edges.borrow().iter().find(|e| e.id == edge).map(|e| e.segment)
	}

	/// Animate one marker along `spec`, resolving once it has arrived.
	pub async fn emit_particle(&self, spec: ParticleSpec) {
		let id = self.next_particle.get();
		self.next_particle.set(id.wrapping_add(1));
		emit_particle(&self.view, &self.clock, id, spec).await;
	}

	/// Play one full cycle. A call made while a cycle is running does nothing.
	pub async fn play_sequence(&self) -> Playback {
		if self.running.replace(true) {
			debug!("pipeline: cycle already running");
			return Playback::Skipped;
		}
		let _guard = RunningGuard(&self.running);
		info!("pipeline: cycle started");

		self.view.reset();
		self.view.set_status(INIT_STATUS, StatusTone::Neutral);
		while !self.compute_layout() {
			self.clock.next_frame().await;
		}
		self.build_paths();

		for (index, stage) in self.storyboard.iter().enumerate() {
			debug!("pipeline: stage {} {}", index + 1, stage.title);
			self.view.stage_changed(index, stage.title);
			for step in stage.steps {
				self.run_step(step).await;
			}
		}

		info!("pipeline: cycle complete");
		Playback::Completed
	}

	/// Loop the storyboard forever, pausing for the cooldown between cycles.
	pub async fn run_forever(&self) {
		self.run_cycles(None).await;
	}

	async fn run_cycles(&self, limit: Option<usize>) {
		let mut played = 0usize;
		loop {
			if self.play_sequence().await == Playback::Skipped {
				return;
			}
			played += 1;
			if limit.is_some_and(|n| played >= n) {
				return;
			}
			self.clock.sleep(ms(self.cooldown_ms)).await;
		}
	}

	async fn run_step(&self, step: &Step) {
		match *step {
			Step::Status(text, tone) => self.view.set_status(text, tone),
			Step::Flights { reveal, flights } => {
				join(self.reveal_edges(reveal), self.fly_all(flights)).await;
			}
			Step::ShowNodes(nodes) => {
				for &(node, delay) in nodes {
					self.clock.sleep(ms(delay)).await;
					self.view.show_node(node);
				}
			}
			Step::ShowEdge(edge) => self.view.show_edge(edge),
			Step::Dot(index, state) => self.view.set_dot(index, state),
			Step::EvalScore(node, text) => self.view.set_eval_score(node, text),
			Step::Alert(node) => self.view.alert_node(node),
			Step::Disagreement => self.view.show_disagreement(),
			Step::Sleep(delay) => self.clock.sleep(ms(delay)).await,
			Step::Finale { fill_percent, score, max, tick_ms, burst_after_ms, status } => {
				self.view.set_score(fill_percent, 0, max);
				let counter = async {
					for value in 1..=score {
						self.clock.sleep(ms(tick_ms)).await;
						self.view.set_score(fill_percent, value, max);
					}
				};
				let flourish = async {
					self.clock.sleep(ms(burst_after_ms)).await;
					self.view.burst();
					self.view.set_status(status, StatusTone::Ok);
				};
				join(counter, flourish).await;
			}
		}
	}

	async fn reveal_edges(&self, reveal: &[(EdgeId, u64)]) {
		join_all(reveal.iter().map(|&(edge, delay)| async move {
			self.clock.sleep(ms(delay)).await;
			self.view.show_edge(edge);
		}))
		.await;
	}

	async fn fly_all(&self, flights: &[Flight]) {
		join_all(flights.iter().filter_map(|flight| {
			let segment = self.segment(flight.edge)?;
			Some(self.emit_particle(ParticleSpec {
				segment,
				tone: flight.tone,
				duration: ms(flight.duration_ms),
				delay: ms(flight.delay_ms),
			}))
		}))
		.await;
	}
}
