//! In-memory [`PipelineView`] that records every call.

use std::cell::{Cell, RefCell};

use super::layout::Layout;
use super::types::{DotState, Edge, EdgeId, NodeId, ParticleId, ParticleTone, Point, Size, StatusTone};
use super::view::PipelineView;

#[derive(Clone, Debug, PartialEq)]
pub enum Event {
	Reset,
	Layout(Size),
	Paths(usize),
	ShowNode(NodeId),
	Alert(NodeId),
	ShowEdge(EdgeId),
	Status(String, StatusTone),
	Dot(usize, DotState),
	EvalScore(NodeId, String),
	Disagreement,
	Score(u8, u8, u8),
	Burst,
	Spawn(ParticleId, ParticleTone),
	Remove(ParticleId),
	Stage(usize),
}

#[derive(Debug, Default)]
pub struct RecordingView {
	pub size: Cell<Size>,
	pub events: RefCell<Vec<Event>>,
	pub edges: RefCell<Vec<Edge>>,
	pub layout: RefCell<Option<Layout>>,
	pub live_particles: RefCell<Vec<ParticleId>>,
	pub last_positions: RefCell<Vec<(ParticleId, Point)>>,
}

impl RecordingView {
	pub fn sized(width: f64, height: f64) -> Self {
		let view = Self::default();
		view.size.set(Size::new(width, height));
		view
	}

	pub fn events(&self) -> Vec<Event> {
		self.events.borrow().clone()
	}

	pub fn count(&self, pred: impl Fn(&Event) -> bool) -> usize {
		self.events.borrow().iter().filter(|e| pred(e)).count()
	}

	fn push(&self, event: Event) {
		self.events.borrow_mut().push(event);
	}
}

impl PipelineView for RecordingView {
	fn container_size(&self) -> Size {
		self.size.get()
	}

	fn reset(&self) {
		self.push(Event::Reset);
	}

	fn apply_layout(&self, layout: &Layout) {
		*self.layout.borrow_mut() = Some(layout.clone());
		self.push(Event::Layout(layout.size));
	}

	fn rebuild_paths(&self, edges: &[Edge]) {
		*self.edges.borrow_mut() = edges.to_vec();
		self.push(Event::Paths(edges.len()));
	}

	fn show_node(&self, node: NodeId) {
		self.push(Event::ShowNode(node));
	}

	fn alert_node(&self, node: NodeId) {
		self.push(Event::Alert(node));
	}

	fn show_edge(&self, edge: EdgeId) {
		self.push(Event::ShowEdge(edge));
	}

	fn set_status(&self, text: &str, tone: StatusTone) {
		self.push(Event::Status(text.to_owned(), tone));
	}

	fn set_dot(&self, index: usize, state: DotState) {
		self.push(Event::Dot(index, state));
	}

	fn set_eval_score(&self, node: NodeId, text: &str) {
		self.push(Event::EvalScore(node, text.to_owned()));
	}

	fn show_disagreement(&self) {
		self.push(Event::Disagreement);
	}

	fn set_score(&self, fill_percent: u8, value: u8, max: u8) {
		self.push(Event::Score(fill_percent, value, max));
	}

	fn burst(&self) {
		self.push(Event::Burst);
	}

	fn spawn_particle(&self, id: ParticleId, tone: ParticleTone, _at: Point) {
		self.live_particles.borrow_mut().push(id);
		self.push(Event::Spawn(id, tone));
	}

	fn move_particle(&self, id: ParticleId, to: Point) {
		let mut last = self.last_positions.borrow_mut();
		match last.iter_mut().find(|(p, _)| *p == id) {
			Some(slot) => slot.1 = to,
			None => last.push((id, to)),
		}
	}

	fn remove_particle(&self, id: ParticleId) {
		self.live_particles.borrow_mut().retain(|p| *p != id);
		self.push(Event::Remove(id));
	}

	fn stage_changed(&self, index: usize, _title: &str) {
		self.push(Event::Stage(index));
	}
}
