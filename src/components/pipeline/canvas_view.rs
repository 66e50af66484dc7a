use std::cell::RefCell;
use std::rc::Rc;

use leptos::prelude::*;

use super::layout::Layout;
use super::scene::{DOT_COUNT, HudState, ParticleSprite, PipelineScene};
use super::types::{DotState, Edge, EdgeId, NodeId, ParticleId, ParticleTone, Point, Size, StatusTone};
use super::view::PipelineView;

/// [`PipelineView`] over the shared canvas scene and the HUD signal.
#[derive(Clone)]
pub struct CanvasView {
	pub scene: Rc<RefCell<PipelineScene>>,
	pub hud: RwSignal<HudState>,
}

impl PipelineView for CanvasView {
	fn container_size(&self) -> Size {
		let scene = self.scene.borrow();
		Size::new(scene.width, scene.height)
	}

	fn reset(&self) {
		self.scene.borrow_mut().reset();
		self.hud.set(HudState::default());
	}

	fn apply_layout(&self, layout: &Layout) {
		self.scene.borrow_mut().apply_layout(layout);
	}

	fn rebuild_paths(&self, edges: &[Edge]) {
		self.scene.borrow_mut().rebuild_paths(edges);
	}

	fn show_node(&self, node: NodeId) {
		self.scene.borrow_mut().show_node(node);
	}

	fn alert_node(&self, node: NodeId) {
		self.scene.borrow_mut().alert_node(node);
	}

	fn show_edge(&self, edge: EdgeId) {
		self.scene.borrow_mut().show_edge(edge);
	}

	fn set_status(&self, text: &str, tone: StatusTone) {
		let text = text.to_owned();
		self.hud.update(|h| {
			h.status = text;
			h.tone = tone;
		});
	}

	fn set_dot(&self, index: usize, state: DotState) {
		if index < DOT_COUNT {
			self.hud.update(|h| h.dots[index] = state);
		}
	}

	fn set_eval_score(&self, node: NodeId, text: &str) {
		self.scene.borrow_mut().eval_scores.insert(node, text.to_owned());
	}

	fn show_disagreement(&self) {
		self.hud.update(|h| h.disagreement = true);
	}

	fn set_score(&self, fill_percent: u8, value: u8, max: u8) {
		self.hud.update(|h| {
			h.score_fill = fill_percent.min(100);
			h.score_value = value;
			h.score_max = max;
		});
	}

	fn burst(&self) {
		self.scene.borrow_mut().burst_t = Some(0.0);
	}

	fn spawn_particle(&self, id: ParticleId, tone: ParticleTone, at: Point) {
		self.scene.borrow_mut().particles.insert(id, ParticleSprite { tone, pos: at });
	}

	fn move_particle(&self, id: ParticleId, to: Point) {
		if let Some(p) = self.scene.borrow_mut().particles.get_mut(&id) {
			p.pos = to;
		}
	}

	fn remove_particle(&self, id: ParticleId) {
		self.scene.borrow_mut().particles.remove(&id);
	}

	fn stage_changed(&self, index: usize, title: &str) {
		let title = title.to_owned();
		self.hud.update(|h| {
			h.stage = index + 1;
			h.stage_title = title;
		});
	}
}
