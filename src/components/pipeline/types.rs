/// Number of parallel search nodes in the fan-out stage.
pub const SEARCH_COUNT: usize = 5;

/// Named marker on the diagram.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum NodeId {
	Query,
	Planner,
	Search(u8),
	Writer,
	EvalClaude,
	EvalGemini,
	TargetedSearch,
	Rewriter,
	Guard,
	Converge,
}

impl NodeId {
	/// Every node, in drawing order.
	pub fn all() -> impl Iterator<Item = NodeId> {
		[NodeId::Query, NodeId::Planner]
			.into_iter()
			.chain((0..SEARCH_COUNT as u8).map(NodeId::Search))
			.chain([
				NodeId::Writer,
				NodeId::EvalClaude,
				NodeId::EvalGemini,
				NodeId::TargetedSearch,
				NodeId::Rewriter,
				NodeId::Guard,
				NodeId::Converge,
			])
	}

	pub fn label(self) -> String {
		match self {
			NodeId::Query => "QUERY".into(),
			NodeId::Planner => "PLANNER".into(),
			NodeId::Search(i) => format!("SEARCH {}", i + 1),
			NodeId::Writer => "WRITER".into(),
			NodeId::EvalClaude => "CLAUDE".into(),
			NodeId::EvalGemini => "GEMINI".into(),
			NodeId::TargetedSearch => "RE-SEARCH".into(),
			NodeId::Rewriter => "REWRITER".into(),
			NodeId::Guard => "GUARD".into(),
			NodeId::Converge => "CONVERGED".into(),
		}
	}
}

/// Named connector between two nodes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum EdgeId {
	QueryPlanner,
	PlannerSearch(u8),
	SearchWriter(u8),
	WriterClaude,
	WriterGemini,
	ClaudeGemini,
	ClaudeResearch,
	GeminiResearch,
	ResearchRewriter,
	RewriterGuard,
	GuardConverge,
	Rollback,
}

/// Colour / role tag of an edge.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EdgeStyle {
	Cyan,
	Violet,
	Green,
	RedDashed,
	Muted,
	Rollback,
}

impl EdgeStyle {
	pub fn rgb(self) -> (u8, u8, u8) {
		match self {
			EdgeStyle::Cyan => (0, 212, 255),
			EdgeStyle::Violet => (167, 139, 250),
			EdgeStyle::Green => (52, 211, 153),
			EdgeStyle::RedDashed => (248, 113, 113),
			EdgeStyle::Muted => (120, 130, 150),
			EdgeStyle::Rollback => (255, 107, 53),
		}
	}
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Point {
	pub x: f64,
	pub y: f64,
}

impl Point {
	pub const fn new(x: f64, y: f64) -> Self {
		Self { x, y }
	}
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Size {
	pub width: f64,
	pub height: f64,
}

impl Size {
	pub const fn new(width: f64, height: f64) -> Self {
		Self { width, height }
	}

	/// A container we can lay out into.
	pub fn is_drawable(self) -> bool {
		self.width.is_finite() && self.height.is_finite() && self.width > 0.0 && self.height > 0.0
	}
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum CurveKind {
	Straight,
	Cubic { c1: Point, c2: Point },
}

/// Geometry shared by drawn edges and the particles that travel along them.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Segment {
	pub start: Point,
	pub end: Point,
	pub curve: CurveKind,
}

impl Segment {
	pub fn straight(start: Point, end: Point) -> Self {
		Self { start, end, curve: CurveKind::Straight }
	}

	/// S-shaped connector with both control points on the vertical through the midpoint.
	pub fn elbow(start: Point, end: Point) -> Self {
		let mx = (start.x + end.x) / 2.0;
		Self {
			start,
			end,
			curve: CurveKind::Cubic {
				c1: Point::new(mx, start.y),
				c2: Point::new(mx, end.y),
			},
		}
	}

	/// Position at progress `e` in `[0, 1]`.
	pub fn point_at(&self, e: f64) -> Point {
		let e = e.clamp(0.0, 1.0);
		match self.curve {
			CurveKind::Straight => Point::new(
				self.start.x + (self.end.x - self.start.x) * e,
				self.start.y + (self.end.y - self.start.y) * e,
			),
			CurveKind::Cubic { c1, c2 } => {
				let mt = 1.0 - e;
				let (a, b, c, d) = (mt * mt * mt, 3.0 * mt * mt * e, 3.0 * mt * e * e, e * e * e);
				Point::new(
					a * self.start.x + b * c1.x + c * c2.x + d * self.end.x,
					a * self.start.y + b * c1.y + c * c2.y + d * self.end.y,
				)
			}
		}
	}
}

#[derive(Clone, Debug, PartialEq)]
pub struct Edge {
	pub id: EdgeId,
	pub from: NodeId,
	pub to: NodeId,
	pub segment: Segment,
	pub style: EdgeStyle,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum StatusTone {
	#[default]
	Neutral,
	Warn,
	Ok,
}

impl StatusTone {
	pub fn class(self) -> &'static str {
		match self {
			StatusTone::Neutral => "",
			StatusTone::Warn => "warn",
			StatusTone::Ok => "ok",
		}
	}
}

/// Progress indicator state for one of the five stage dots.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum DotState {
	#[default]
	Off,
	On,
	Warn,
	Ok,
}

impl DotState {
	pub fn class(self) -> &'static str {
		match self {
			DotState::Off => "",
			DotState::On => "on",
			DotState::Warn => "warn",
			DotState::Ok => "ok",
		}
	}
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ParticleTone {
	#[default]
	Cyan,
	Violet,
	Green,
	Red,
}

impl ParticleTone {
	pub fn color(self) -> &'static str {
		match self {
			ParticleTone::Cyan => "#00d4ff",
			ParticleTone::Violet => "#a78bfa",
			ParticleTone::Green => "#34d399",
			ParticleTone::Red => "#f87171",
		}
	}
}

pub type ParticleId = u64;
