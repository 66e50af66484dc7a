use std::f64::consts::PI;

use wasm_bindgen::JsValue;
use web_sys::CanvasRenderingContext2d;

use super::scene::{NODE_RADIUS, PARTICLE_RADIUS, PipelineScene};
use super::types::{CurveKind, EdgeStyle, NodeId, Segment};

const BACKGROUND: &str = "#0b0f1a";
const NODE_FILL: &str = "#111827";
const ALERT: (u8, u8, u8) = (248, 113, 113);

fn ease_out_cubic(t: f64) -> f64 {
	1.0 - (1.0 - t).powi(3)
}

fn rgba((r, g, b): (u8, u8, u8), a: f64) -> String {
	format!("rgba({r}, {g}, {b}, {a})")
}

pub fn render(scene: &PipelineScene, ctx: &CanvasRenderingContext2d) {
	ctx.set_fill_style_str(BACKGROUND);
	ctx.fill_rect(0.0, 0.0, scene.width, scene.height);
	draw_edges(scene, ctx);
	draw_nodes(scene, ctx);
	draw_particles(scene, ctx);
	draw_burst(scene, ctx);
}

fn trace(segment: &Segment, ctx: &CanvasRenderingContext2d) {
	ctx.begin_path();
	ctx.move_to(segment.start.x, segment.start.y);
	match segment.curve {
		CurveKind::Straight => ctx.line_to(segment.end.x, segment.end.y),
		CurveKind::Cubic { c1, c2 } => {
			ctx.bezier_curve_to(c1.x, c1.y, c2.x, c2.y, segment.end.x, segment.end.y)
		}
	}
	ctx.stroke();
}

fn draw_edges(scene: &PipelineScene, ctx: &CanvasRenderingContext2d) {
	let (dash, gap) = (6.0, 4.0);
	let dash_offset = -(scene.flow_time * 30.0) % (dash + gap);

	for sprite in scene.edges.iter().filter(|e| e.visible) {
		let style = sprite.edge.style;
		let dashed = matches!(style, EdgeStyle::RedDashed | EdgeStyle::Rollback);
		let alpha = match style {
			EdgeStyle::Muted => 0.35,
			EdgeStyle::Rollback => 0.8,
			_ => 0.55,
		};

		ctx.set_stroke_style_str(&rgba(style.rgb(), alpha));
		ctx.set_line_width(if style == EdgeStyle::Rollback { 1.8 } else { 1.2 });
		if dashed {
			let _ = ctx.set_line_dash(&js_sys::Array::of2(&JsValue::from_f64(dash), &JsValue::from_f64(gap)));
			ctx.set_line_dash_offset(dash_offset);
		}
		trace(&sprite.edge.segment, ctx);
		let _ = ctx.set_line_dash(&js_sys::Array::new());

		if style == EdgeStyle::Rollback {
			draw_arrow_head(&sprite.edge.segment, style, ctx);
		}
	}
}

/// Arrow at the end of `segment`, pointing along its final tangent.
fn draw_arrow_head(segment: &Segment, style: EdgeStyle, ctx: &CanvasRenderingContext2d) {
	let tail = match segment.curve {
		CurveKind::Straight => segment.start,
		CurveKind::Cubic { c2, .. } => c2,
	};
	let (dx, dy) = (segment.end.x - tail.x, segment.end.y - tail.y);
	let dist = (dx * dx + dy * dy).sqrt();
	if dist < 0.001 {
		return;
	}
	let size = 7.0;
	let (ux, uy) = (dx / dist, dy / dist);
	let (tip_x, tip_y) = (segment.end.x - ux * NODE_RADIUS, segment.end.y - uy * NODE_RADIUS);
	let (back_x, back_y) = (tip_x - ux * size, tip_y - uy * size);
	let (px, py) = (-uy * size * 0.5, ux * size * 0.5);

	ctx.set_fill_style_str(&rgba(style.rgb(), 0.8));
	ctx.begin_path();
	ctx.move_to(tip_x, tip_y);
	ctx.line_to(back_x + px, back_y + py);
	ctx.line_to(back_x - px, back_y - py);
	ctx.close_path();
	ctx.fill();
}

fn node_accent(id: NodeId) -> (u8, u8, u8) {
	match id {
		NodeId::EvalClaude => EdgeStyle::Violet.rgb(),
		NodeId::EvalGemini | NodeId::Converge => EdgeStyle::Green.rgb(),
		NodeId::Guard => EdgeStyle::Rollback.rgb(),
		_ => EdgeStyle::Cyan.rgb(),
	}
}

fn draw_nodes(scene: &PipelineScene, ctx: &CanvasRenderingContext2d) {
	ctx.set_text_align("center");
	for (&id, node) in scene.nodes.iter().filter(|(_, n)| n.visible) {
		let t = ease_out_cubic(node.reveal_t);
		let (x, y) = (node.pos.x, node.pos.y);
		let accent = if node.alert { ALERT } else { node_accent(id) };
		let radius = NODE_RADIUS * (0.6 + 0.4 * t);

		ctx.set_global_alpha(t);
		let gradient = ctx.create_radial_gradient(x, y, radius * 0.3, x, y, radius * 2.4);
		if let Ok(gradient) = gradient {
			let _ = gradient.add_color_stop(0.0, &rgba(accent, 0.35));
			let _ = gradient.add_color_stop(1.0, &rgba(accent, 0.0));
			ctx.begin_path();
			let _ = ctx.arc(x, y, radius * 2.4, 0.0, 2.0 * PI);
			#[allow(deprecated)]
			ctx.set_fill_style(&gradient);
			ctx.fill();
		}

		ctx.begin_path();
		let _ = ctx.arc(x, y, radius, 0.0, 2.0 * PI);
		ctx.set_fill_style_str(NODE_FILL);
		ctx.fill();
		ctx.set_stroke_style_str(&rgba(accent, 0.9));
		ctx.set_line_width(1.5);
		ctx.stroke();

		ctx.set_fill_style_str("rgba(226, 232, 240, 0.85)");
		ctx.set_font("10px monospace");
		let _ = ctx.fill_text(&id.label(), x, y - radius - 6.0);

		if let Some(score) = scene.eval_scores.get(&id) {
			ctx.set_fill_style_str(&rgba(accent, 0.9));
			let _ = ctx.fill_text(score, x, y + radius + 14.0);
		}
	}
	ctx.set_global_alpha(1.0);
}

fn draw_particles(scene: &PipelineScene, ctx: &CanvasRenderingContext2d) {
	for particle in scene.particles.values() {
		ctx.begin_path();
		let _ = ctx.arc(particle.pos.x, particle.pos.y, PARTICLE_RADIUS, 0.0, 2.0 * PI);
		ctx.set_fill_style_str(particle.tone.color());
		ctx.fill();
	}
}

fn draw_burst(scene: &PipelineScene, ctx: &CanvasRenderingContext2d) {
	let (Some(p), Some(node)) = (scene.burst_progress(), scene.nodes.get(&NodeId::Converge)) else {
		return;
	};
	let t = ease_out_cubic(p);
	ctx.begin_path();
	let _ = ctx.arc(node.pos.x, node.pos.y, NODE_RADIUS * (1.0 + 4.0 * t), 0.0, 2.0 * PI);
	ctx.set_stroke_style_str(&rgba(EdgeStyle::Green.rgb(), 0.8 * (1.0 - t)));
	ctx.set_line_width(2.0);
	ctx.stroke();
}
