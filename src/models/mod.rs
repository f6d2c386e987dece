//! Data model: the persisted session state and the slide settings payload

pub mod settings;
pub mod state;

pub use state::{Settings, State, StatePatch};
