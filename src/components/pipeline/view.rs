use super::layout::Layout;
use super::types::{DotState, Edge, EdgeId, NodeId, ParticleId, ParticleTone, Point, Size, StatusTone};

/// Rendering surface the sequencer drives.
///
/// Implementations must tolerate any call for an element they cannot show.
pub trait PipelineView {
	/// Current container size in pixels.
	fn container_size(&self) -> Size;

	/// Hide every node, edge and indicator ahead of a new cycle.
	fn reset(&self);

	fn apply_layout(&self, layout: &Layout);

	/// Replace all drawn edges. New edges start hidden.
	fn rebuild_paths(&self, edges: &[Edge]);

	fn show_node(&self, node: NodeId);
	fn alert_node(&self, node: NodeId);
	fn show_edge(&self, edge: EdgeId);

	fn set_status(&self, text: &str, tone: StatusTone);
	fn set_dot(&self, index: usize, state: DotState);
	fn set_eval_score(&self, node: NodeId, text: &str);
	fn show_disagreement(&self);

	/// Final quality bar: fill percentage and counter value.
	fn set_score(&self, fill_percent: u8, value: u8, max: u8);
	fn burst(&self);

	fn spawn_particle(&self, id: ParticleId, tone: ParticleTone, at: Point);
	fn move_particle(&self, id: ParticleId, to: Point);
	fn remove_particle(&self, id: ParticleId);

	/// Storyboard position, for step counters.
	fn stage_changed(&self, _index: usize, _title: &str) {}
}
