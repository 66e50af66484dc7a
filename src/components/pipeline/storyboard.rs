//! The fixed playback script.
//!
//! Scores, the evaluator disagreement and the rollback are scripted
//! constants; nothing here is computed from input.

#[cfg(test)]
#[path = "storyboard_test.rs"]
mod storyboard_test;

use super::types::{DotState, EdgeId, NodeId, ParticleTone, StatusTone};

/// Pause between the end of one cycle and the start of the next.
pub const REPLAY_COOLDOWN_MS: u64 = 4000;

/// Shown while layout and paths are being prepared.
pub const INIT_STATUS: &str = "INITIALIZING PIPELINE...";

/// A marker travelling along one edge.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Flight {
	pub edge: EdgeId,
	pub tone: ParticleTone,
	pub duration_ms: u64,
	pub delay_ms: u64,
}

const fn fly(edge: EdgeId, tone: ParticleTone, duration_ms: u64, delay_ms: u64) -> Flight {
	Flight { edge, tone, duration_ms, delay_ms }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Step {
	Status(&'static str, StatusTone),
	/// Edges revealed (each after its delay) while the flights run; all awaited together.
	Flights { reveal: &'static [(EdgeId, u64)], flights: &'static [Flight] },
	/// Nodes shown one after another, each after its own delay.
	ShowNodes(&'static [(NodeId, u64)]),
	ShowEdge(EdgeId),
	Dot(usize, DotState),
	EvalScore(NodeId, &'static str),
	Alert(NodeId),
	Disagreement,
	Sleep(u64),
	/// Score bar fill, counter ticking up to `score`, burst after `burst_after_ms`, closing status.
	Finale { fill_percent: u8, score: u8, max: u8, tick_ms: u64, burst_after_ms: u64, status: &'static str },
}

#[derive(Clone, Copy, Debug)]
pub struct Stage {
	pub title: &'static str,
	pub steps: &'static [Step],
}

use EdgeId::*;
use ParticleTone::{Cyan, Green, Red, Violet};
use Step::*;

const SEARCH_REVEAL: &[(EdgeId, u64)] = &[
	(PlannerSearch(0), 0),
	(PlannerSearch(1), 60),
	(PlannerSearch(2), 120),
	(PlannerSearch(3), 180),
	(PlannerSearch(4), 240),
];

const SEARCH_FLIGHTS: &[Flight] = &[
	fly(PlannerSearch(0), Cyan, 500, 0),
	fly(PlannerSearch(1), Cyan, 500, 80),
	fly(PlannerSearch(2), Cyan, 500, 160),
	fly(PlannerSearch(3), Cyan, 500, 240),
	fly(PlannerSearch(4), Cyan, 500, 320),
];

const WRITER_REVEAL: &[(EdgeId, u64)] = &[
	(SearchWriter(0), 0),
	(SearchWriter(1), 60),
	(SearchWriter(2), 120),
	(SearchWriter(3), 180),
	(SearchWriter(4), 240),
];

const WRITER_FLIGHTS: &[Flight] = &[
	fly(SearchWriter(0), Cyan, 550, 0),
	fly(SearchWriter(1), Cyan, 550, 100),
	fly(SearchWriter(2), Cyan, 550, 200),
	fly(SearchWriter(3), Cyan, 550, 300),
	fly(SearchWriter(4), Cyan, 550, 400),
];

/// The ten stages of one playback cycle.
pub const STORYBOARD: &[Stage] = &[
	Stage {
		title: "Query",
		steps: &[
			Status("QUERY RECEIVED", StatusTone::Neutral),
			ShowNodes(&[(NodeId::Query, 0)]),
			Sleep(400),
		],
	},
	Stage {
		title: "Planning",
		steps: &[
			Status("PLANNER AGENT · decomposing query...", StatusTone::Neutral),
			Flights { reveal: &[(QueryPlanner, 0)], flights: &[fly(QueryPlanner, Cyan, 500, 0)] },
			ShowNodes(&[(NodeId::Planner, 0)]),
			Dot(0, DotState::On),
			Sleep(500),
		],
	},
	Stage {
		title: "Parallel search",
		steps: &[
			Status("PARALLEL WEB SEARCH · ×5 queries dispatched", StatusTone::Neutral),
			Flights { reveal: SEARCH_REVEAL, flights: SEARCH_FLIGHTS },
			ShowNodes(&[
				(NodeId::Search(0), 0),
				(NodeId::Search(1), 80),
				(NodeId::Search(2), 160),
				(NodeId::Search(3), 240),
				(NodeId::Search(4), 320),
			]),
			Dot(1, DotState::On),
			Sleep(400),
		],
	},
	Stage {
		title: "Draft",
		steps: &[
			Flights { reveal: WRITER_REVEAL, flights: WRITER_FLIGHTS },
			Status("DRAFT WRITER · synthesizing 1000+ words...", StatusTone::Neutral),
			ShowNodes(&[(NodeId::Writer, 0)]),
			Dot(2, DotState::On),
			Sleep(600),
		],
	},
	Stage {
		title: "Dual evaluation",
		steps: &[
			Status("DUAL EVALUATION · Claude ⊕ Gemini in parallel", StatusTone::Neutral),
			Flights {
				reveal: &[(WriterClaude, 0), (WriterGemini, 0)],
				flights: &[fly(WriterClaude, Violet, 600, 0), fly(WriterGemini, Green, 600, 0)],
			},
			ShowNodes(&[(NodeId::EvalClaude, 0), (NodeId::EvalGemini, 0)]),
			Sleep(400),
		],
	},
	Stage {
		title: "Disagreement",
		steps: &[
			EvalScore(NodeId::EvalClaude, "score: 5 / 10"),
			EvalScore(NodeId::EvalGemini, "score: 9 / 10"),
			ShowEdge(ClaudeGemini),
			Sleep(300),
			Status("⚠ EVALUATOR DISAGREEMENT — GAP = 4 · CONSERVATIVE MIN", StatusTone::Warn),
			Alert(NodeId::EvalClaude),
			Disagreement,
			Dot(3, DotState::Warn),
			Sleep(900),
		],
	},
	Stage {
		title: "Targeted search",
		steps: &[
			Status("TARGETED SEARCH · filling weak sections", StatusTone::Neutral),
			Flights {
				reveal: &[(ClaudeResearch, 0), (GeminiResearch, 0)],
				flights: &[fly(ClaudeResearch, Red, 500, 0), fly(GeminiResearch, Green, 500, 0)],
			},
			ShowNodes(&[(NodeId::TargetedSearch, 0)]),
			Sleep(400),
		],
	},
	Stage {
		title: "Rewrite",
		steps: &[
			Status("SECTION REWRITER · targeted rewrites dispatched", StatusTone::Neutral),
			Flights { reveal: &[(ResearchRewriter, 0)], flights: &[fly(ResearchRewriter, Cyan, 450, 0)] },
			ShowNodes(&[(NodeId::Rewriter, 0)]),
			Sleep(400),
		],
	},
	Stage {
		title: "Guard",
		steps: &[
			Status("BEST-VERSION GUARD · checking score delta...", StatusTone::Neutral),
			Flights { reveal: &[(RewriterGuard, 0)], flights: &[fly(RewriterGuard, Cyan, 450, 0)] },
			ShowNodes(&[(NodeId::Guard, 0)]),
			Sleep(300),
			ShowEdge(Rollback),
			Status("↺ ROLLBACK TRIGGERED · score regressed, restoring prior version", StatusTone::Warn),
			Sleep(800),
		],
	},
	Stage {
		title: "Convergence",
		steps: &[
			Status("CONVERGENCE · final quality score achieved", StatusTone::Ok),
			Flights { reveal: &[(GuardConverge, 0)], flights: &[fly(GuardConverge, Green, 500, 0)] },
			ShowNodes(&[(NodeId::Converge, 0)]),
			Dot(4, DotState::Ok),
			Finale {
				fill_percent: 82,
				score: 8,
				max: 10,
				tick_ms: 150,
				burst_after_ms: 500,
				status: "PIPELINE COMPLETE · report ready",
			},
		],
	},
];
