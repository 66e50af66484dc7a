#[cfg(test)]
#[path = "paths_test.rs"]
mod paths_test;

use super::layout::Layout;
use super::types::{CurveKind, Edge, EdgeId, EdgeStyle, NodeId, Point, SEARCH_COUNT, Segment};

/// Horizontal bulge of the rollback arc's control points, relative to its endpoints.
const ROLLBACK_BULGE_GUARD: f64 = 160.0;
const ROLLBACK_BULGE_WRITER: f64 = 180.0;

#[derive(Clone, Copy)]
enum Shape {
	Line,
	Curve,
}

fn connect(layout: &Layout, id: EdgeId, from: NodeId, to: NodeId, shape: Shape, style: EdgeStyle) -> Edge {
	let (start, end) = (layout.position(from), layout.position(to));
	let segment = match shape {
		Shape::Line => Segment::straight(start, end),
		Shape::Curve => Segment::elbow(start, end),
	};
	Edge { id, from, to, segment, style }
}

/// Build every connector from scratch for `layout`.
pub fn build_paths(layout: &Layout) -> Vec<Edge> {
	use EdgeStyle::*;
	use Shape::*;

	let mut edges = Vec::with_capacity(8 + 2 * SEARCH_COUNT);
	edges.push(connect(layout, EdgeId::QueryPlanner, NodeId::Query, NodeId::Planner, Line, Cyan));

	for i in 0..SEARCH_COUNT as u8 {
		edges.push(connect(layout, EdgeId::PlannerSearch(i), NodeId::Planner, NodeId::Search(i), Curve, Cyan));
		edges.push(connect(layout, EdgeId::SearchWriter(i), NodeId::Search(i), NodeId::Writer, Curve, Cyan));
	}

	edges.extend([
		connect(layout, EdgeId::WriterClaude, NodeId::Writer, NodeId::EvalClaude, Curve, Violet),
		connect(layout, EdgeId::WriterGemini, NodeId::Writer, NodeId::EvalGemini, Curve, Green),
		connect(layout, EdgeId::ClaudeGemini, NodeId::EvalClaude, NodeId::EvalGemini, Line, RedDashed),
		connect(layout, EdgeId::ClaudeResearch, NodeId::EvalClaude, NodeId::TargetedSearch, Curve, Muted),
		connect(layout, EdgeId::GeminiResearch, NodeId::EvalGemini, NodeId::TargetedSearch, Curve, Muted),
		connect(layout, EdgeId::ResearchRewriter, NodeId::TargetedSearch, NodeId::Rewriter, Line, Cyan),
		connect(layout, EdgeId::RewriterGuard, NodeId::Rewriter, NodeId::Guard, Line, Cyan),
		connect(layout, EdgeId::GuardConverge, NodeId::Guard, NodeId::Converge, Line, Green),
	]);

	let (guard, writer) = (layout.position(NodeId::Guard), layout.position(NodeId::Writer));
	edges.push(Edge {
		id: EdgeId::Rollback,
		from: NodeId::Guard,
		to: NodeId::Writer,
		segment: Segment {
			start: guard,
			end: writer,
			curve: CurveKind::Cubic {
				c1: Point::new(guard.x + ROLLBACK_BULGE_GUARD, guard.y),
				c2: Point::new(writer.x + ROLLBACK_BULGE_WRITER, writer.y),
			},
		},
		style: Rollback,
	});

	edges
}
