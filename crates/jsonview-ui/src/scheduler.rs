use crate::highlight::Flash;
use crate::key::format_key;
use crate::node::{
    CustomRender, KeyLabelProps, LabelBundle, LabelCommand, NodeArena, NodeId, NodeState,
    RenderStrategy,
};
use crate::renderer::LabelHost;
use crate::theme::Theme;
use smartstring::alias::String as SmartString;
use std::collections::HashMap;
use std::time::Instant;
use thiserror::Error;
use tracing::debug;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum UiError {
    #[error("node {0:?} is not mounted")]
    NotMounted(NodeId),
}

/// Outcome of the render phase for one node.
#[derive(Debug, Clone, PartialEq)]
pub enum Rendered {
    /// Built-in rendering; the host has been handed the label command.
    Label { text: SmartString },
    /// A custom renderer's output, returned verbatim.
    Custom(CustomRender),
}

/// Drives the per-frame two-phase protocol for mounted key labels.
///
/// Phase a, [`render`]: label formatting and change classification, both
/// pure; the label command goes to the host and the flash decision is
/// queued. The previous-value cell is committed before `render` returns,
/// whether or not phase b ever runs. Phase b, [`commit`]: invoked by the
/// frame driver strictly after the host has reflected the frame; queued
/// flashes play against the host's animator. Unmounting between the
/// phases abandons the flash silently.
///
/// [`render`]: RenderCycle::render
/// [`commit`]: RenderCycle::commit
pub struct RenderCycle {
    arena: NodeArena,
    theme: Theme,
    /// Flash decisions queued during phase a, keyed by node. A re-render
    /// of the same node before `commit` replaces its entry, so the
    /// committed decision always matches the frame actually rendered.
    pending: HashMap<NodeId, bool>,
}

impl RenderCycle {
    pub fn new() -> Self {
        Self::with_theme(Theme::default())
    }

    pub fn with_theme(theme: Theme) -> Self {
        Self {
            arena: NodeArena::new(),
            theme,
            pending: HashMap::new(),
        }
    }

    pub fn mounted(&self) -> usize {
        self.arena.len()
    }

    pub fn mount(&mut self, host: &mut dyn LabelHost) -> NodeId {
        let node = self.arena.mount();
        host.apply(&LabelCommand::Mount { node });
        node
    }

    pub fn unmount(&mut self, node: NodeId, host: &mut dyn LabelHost) {
        if self.arena.unmount(node) {
            if self.pending.remove(&node).is_some() {
                debug!(?node, "dropped pending flash on unmount");
            }
            host.apply(&LabelCommand::Unmount { node });
        }
    }

    /// Phase a: render one node's key label.
    ///
    /// With the default strategy this formats the label, classifies the
    /// value against the previous frame's snapshot, hands the host the
    /// label command and queues the flash decision for [`commit`]. A
    /// custom strategy instead receives the assembled bundle and fully
    /// replaces all of that, flash included.
    ///
    /// [`commit`]: RenderCycle::commit
    pub fn render(
        &mut self,
        node: NodeId,
        props: &KeyLabelProps,
        host: &mut dyn LabelHost,
    ) -> Result<Rendered, UiError> {
        let state = self.arena.get_mut(node).ok_or(UiError::NotMounted(node))?;
        let text = format_key(&props.key_name, &props.quotes);

        if let RenderStrategy::Custom(callback) = &props.strategy {
            // Overriding rendering opts out of the flash machinery; the
            // previous-value cell still advances so a later switch back
            // to the default strategy does not flash against a stale
            // snapshot.
            self.pending.remove(&node);
            state.prev.commit(props.value.clone());
            let bundle = LabelBundle {
                class_name: props.class_name.clone(),
                style: props.style.clone().with_color(props.color),
                children: text,
                label: props.key_name.raw(),
                key_name: props.key_name.clone(),
                quotes: props.quotes.clone(),
                namespace: props.namespace.clone(),
                parent_name: props.parent_name.clone(),
                value: props.value.clone(),
            };
            return Ok(Rendered::Custom(callback(&bundle)));
        }

        let NodeState { prev, memo, gate } = state;
        let verdict = memo.check(props.value.as_ref(), props.highlight_updates, prev.get());
        let fire = gate.should_fire(verdict, props.value.as_ref());
        prev.commit(props.value.clone());

        self.pending.insert(node, fire);
        debug!(?node, verdict, fire, "rendered key label");

        host.apply(&LabelCommand::UpdateLabel {
            node,
            text: text.clone(),
            class_name: props.class_name.clone(),
            style: props.style.clone().with_color(props.color),
        });
        Ok(Rendered::Label { text })
    }

    /// Phase b: play queued flashes, stamped with the current time.
    pub fn commit(&mut self, host: &mut dyn LabelHost) {
        self.commit_at(host, Instant::now());
    }

    pub fn commit_at(&mut self, host: &mut dyn LabelHost, now: Instant) {
        let color = self.theme.flash_color();
        for (node, fire) in self.pending.drain() {
            if !fire {
                continue;
            }
            if !self.arena.contains(node) {
                debug!(?node, "flash abandoned, node unmounted");
                continue;
            }
            match host.animator() {
                Some(animator) => animator.animate(node, &Flash::new(color, now)),
                None => debug!(?node, "host has no animation capability"),
            }
        }
    }
}

impl Default for RenderCycle {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::renderer::StubHost;
    use jsonview_types::JsonValue;

    #[test]
    fn test_render_unmounted_node_fails() {
        let mut cycle = RenderCycle::new();
        let mut host = StubHost::new();
        let node = cycle.mount(&mut host);
        cycle.unmount(node, &mut host);

        let props = KeyLabelProps::new("k").with_value(JsonValue::Int(1));
        assert_eq!(
            cycle.render(node, &props, &mut host),
            Err(UiError::NotMounted(node))
        );
    }

    #[test]
    fn test_rendered_label_text() {
        let mut cycle = RenderCycle::new();
        let mut host = StubHost::new();
        let node = cycle.mount(&mut host);

        let props = KeyLabelProps::new("name").with_value(JsonValue::str("ada"));
        let rendered = cycle.render(node, &props, &mut host).unwrap();
        assert_eq!(
            rendered,
            Rendered::Label {
                text: "\"name\"".into()
            }
        );
    }

    #[test]
    fn test_unmount_is_idempotent() {
        let mut cycle = RenderCycle::new();
        let mut host = StubHost::new();
        let node = cycle.mount(&mut host);
        cycle.unmount(node, &mut host);
        cycle.unmount(node, &mut host);
        assert_eq!(cycle.mounted(), 0);
    }
}
