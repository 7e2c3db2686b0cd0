use crate::highlight::Flash;
use crate::node::{LabelCommand, NodeId};

/// The external label primitive: paints key labels for a concrete host
/// (terminal, web view, test buffer). Its internals are out of scope
/// here; the widget only hands it commands.
pub trait LabelHost {
    fn apply(&mut self, cmd: &LabelCommand);

    /// Probe for the animation capability. Hosts that cannot animate
    /// return `None` and flashes are skipped silently.
    fn animator(&mut self) -> Option<&mut dyn Animator>;
}

/// Plays one-shot background flashes on mounted labels.
pub trait Animator {
    /// Play `flash` on `node`. Unknown or detached nodes must be ignored,
    /// not treated as errors.
    fn animate(&mut self, node: NodeId, flash: &Flash);
}
