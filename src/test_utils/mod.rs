pub mod event_builder;
pub mod player_templates;

pub use event_builder::*;
pub use player_templates::*;
