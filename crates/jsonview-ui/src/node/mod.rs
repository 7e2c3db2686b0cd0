mod arena;
mod commands;
mod types;

pub use arena::{NodeArena, NodeState};
pub use commands::LabelCommand;
pub use types::{CustomRender, KeyLabelProps, LabelBundle, NodeId, RenderStrategy};
