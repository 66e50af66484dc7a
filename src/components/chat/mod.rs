mod component;
mod error;
mod markup;
mod relay;
mod signal_view;
mod transport;
mod types;
mod view;

pub use component::ChatWidget;
