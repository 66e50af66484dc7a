#[cfg(test)]
#[path = "scene_test.rs"]
mod scene_test;

use std::collections::BTreeMap;

use super::layout::Layout;
use super::types::{DotState, Edge, EdgeId, NodeId, ParticleId, ParticleTone, Point, StatusTone};

pub const NODE_RADIUS: f64 = 9.0;
pub const PARTICLE_RADIUS: f64 = 3.0;
pub const DOT_COUNT: usize = 5;

/// Seconds for a node to fade in once shown.
const REVEAL_SECS: f64 = 0.35;
/// Seconds for the completion ring to expand and fade.
const BURST_SECS: f64 = 1.2;

#[derive(Clone, Debug, Default)]
pub struct NodeSprite {
	pub pos: Point,
	pub visible: bool,
	pub alert: bool,
	pub reveal_t: f64,
}

#[derive(Clone, Debug)]
pub struct EdgeSprite {
	pub edge: Edge,
	pub visible: bool,
}

#[derive(Clone, Copy, Debug)]
pub struct ParticleSprite {
	pub tone: ParticleTone,
	pub pos: Point,
}

/// Everything the canvas draws each frame.
#[derive(Debug, Default)]
pub struct PipelineScene {
	pub width: f64,
	pub height: f64,
	pub nodes: BTreeMap<NodeId, NodeSprite>,
	pub edges: Vec<EdgeSprite>,
	pub particles: BTreeMap<ParticleId, ParticleSprite>,
	pub eval_scores: BTreeMap<NodeId, String>,
	/// Elapsed seconds of the completion ring, while it plays.
	pub burst_t: Option<f64>,
	pub flow_time: f64,
}

impl PipelineScene {
	pub fn new(width: f64, height: f64) -> Self {
		Self { width, height, ..Self::default() }
	}

	pub fn resize(&mut self, width: f64, height: f64) {
		self.width = width;
		self.height = height;
	}

	pub fn reset(&mut self) {
		for node in self.nodes.values_mut() {
			node.visible = false;
			node.alert = false;
			node.reveal_t = 0.0;
		}
		for edge in &mut self.edges {
			edge.visible = false;
		}
		self.particles.clear();
		self.eval_scores.clear();
		self.burst_t = None;
	}

	pub fn apply_layout(&mut self, layout: &Layout) {
		for (id, pos) in layout.iter() {
			self.nodes.entry(id).or_default().pos = pos;
		}
	}

	/// Replace the edge set, keeping the visibility of edges that survive.
	pub fn rebuild_paths(&mut self, edges: &[Edge]) {
		let shown: Vec<EdgeId> = self.edges.iter().filter(|e| e.visible).map(|e| e.edge.id).collect();
		self.edges = edges
			.iter()
			.map(|edge| EdgeSprite { edge: edge.clone(), visible: shown.contains(&edge.id) })
			.collect();
	}

	pub fn show_node(&mut self, id: NodeId) {
		if let Some(node) = self.nodes.get_mut(&id) {
			node.visible = true;
		}
	}

	pub fn alert_node(&mut self, id: NodeId) {
		if let Some(node) = self.nodes.get_mut(&id) {
			node.alert = true;
		}
	}

	pub fn show_edge(&mut self, id: EdgeId) {
		if let Some(edge) = self.edges.iter_mut().find(|e| e.edge.id == id) {
			edge.visible = true;
		}
	}

	pub fn tick(&mut self, dt: f64) {
		self.flow_time += dt;
		for node in self.nodes.values_mut() {
			if node.visible && node.reveal_t < 1.0 {
				node.reveal_t = (node.reveal_t + dt / REVEAL_SECS).min(1.0);
			}
		}
		if let Some(t) = self.burst_t.as_mut() {
			*t += dt;
			if *t >= BURST_SECS {
				self.burst_t = None;
			}
		}
	}

	/// Progress of the completion ring in `[0, 1]`.
	pub fn burst_progress(&self) -> Option<f64> {
		self.burst_t.map(|t| (t / BURST_SECS).min(1.0))
	}
}

/// Text and indicator state shown around the canvas.
#[derive(Clone, Debug, PartialEq)]
pub struct HudState {
	pub status: String,
	pub tone: StatusTone,
	pub dots: [DotState; DOT_COUNT],
	pub score_fill: u8,
	pub score_value: u8,
	pub score_max: u8,
	pub disagreement: bool,
	pub stage: usize,
	pub stage_title: String,
}

impl Default for HudState {
	fn default() -> Self {
		Self {
			status: String::new(),
			tone: StatusTone::Neutral,
			dots: [DotState::Off; DOT_COUNT],
			score_fill: 0,
			score_value: 0,
			score_max: 10,
			disagreement: false,
			stage: 0,
			stage_title: String::new(),
		}
	}
}
