#[cfg(test)]
#[path = "layout_test.rs"]
mod layout_test;

use std::collections::BTreeMap;

use super::types::{NodeId, Point, SEARCH_COUNT, Size};

/// Fractional (x, y) of each fixed node within the container.
const FIXED: &[(NodeId, f64, f64)] = &[
	(NodeId::Query, 0.50, 0.10),
	(NodeId::Planner, 0.50, 0.22),
	(NodeId::Writer, 0.50, 0.46),
	(NodeId::EvalClaude, 0.34, 0.61),
	(NodeId::EvalGemini, 0.66, 0.61),
	(NodeId::TargetedSearch, 0.50, 0.72),
	(NodeId::Rewriter, 0.50, 0.82),
	(NodeId::Guard, 0.50, 0.90),
	(NodeId::Converge, 0.50, 0.97),
];

const SEARCH_FX: [f64; SEARCH_COUNT] = [0.18, 0.32, 0.50, 0.68, 0.82];
const SEARCH_FY: f64 = 0.34;

/// Absolute pixel positions of every node for one container size.
#[derive(Clone, Debug, PartialEq)]
pub struct Layout {
	pub size: Size,
	positions: BTreeMap<NodeId, Point>,
}

impl Layout {
	pub fn position(&self, id: NodeId) -> Point {
		self.positions.get(&id).copied().unwrap_or_default()
	}

	pub fn iter(&self) -> impl Iterator<Item = (NodeId, Point)> + '_ {
		self.positions.iter().map(|(&id, &p)| (id, p))
	}
}

/// Fractional offset of `id`.
pub fn fraction(id: NodeId) -> (f64, f64) {
	match id {
		NodeId::Search(i) => (SEARCH_FX[i as usize % SEARCH_COUNT], SEARCH_FY),
		other => FIXED
			.iter()
			.find(|(n, _, _)| *n == other)
			.map(|&(_, fx, fy)| (fx, fy))
			.unwrap_or((0.5, 0.5)),
	}
}

/// Map every node onto `size`. Returns `None` for an empty container.
pub fn compute_layout(size: Size) -> Option<Layout> {
	if !size.is_drawable() {
		return None;
	}
	let positions = NodeId::all()
		.map(|id| {
			let (fx, fy) = fraction(id);
			(id, Point::new(size.width * fx, size.height * fy))
		})
		.collect();
	Some(Layout { size, positions })
}
