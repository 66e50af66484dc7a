mod canvas_view;
mod component;
mod layout;
mod particle;
mod paths;
#[cfg(test)]
mod recording;
mod render;
mod scene;
mod sequencer;
mod storyboard;
mod types;
mod view;

pub use component::PipelineCanvas;
pub use storyboard::REPLAY_COOLDOWN_MS;
