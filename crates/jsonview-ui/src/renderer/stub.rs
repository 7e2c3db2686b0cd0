use super::traits::{Animator, LabelHost};
use crate::highlight::Flash;
use crate::node::{LabelCommand, NodeId};
use std::cell::RefCell;
use std::rc::Rc;

/// Debug/testing host that renders nothing visually.
///
/// Label commands and played flashes become log lines, optionally shared
/// through a buffer so tests can assert on them.
pub struct StubHost {
    log_buffer: Option<Rc<RefCell<Vec<String>>>>,
    flashes: Vec<(NodeId, Flash)>,
    can_animate: bool,
}

impl StubHost {
    pub fn new() -> Self {
        Self {
            log_buffer: None,
            flashes: Vec::new(),
            can_animate: true,
        }
    }

    /// Create a StubHost with a log buffer for testing.
    pub fn with_buffer(buffer: Rc<RefCell<Vec<String>>>) -> Self {
        Self {
            log_buffer: Some(buffer),
            flashes: Vec::new(),
            can_animate: true,
        }
    }

    /// A host that lacks the animation capability entirely.
    pub fn without_animation() -> Self {
        Self {
            log_buffer: None,
            flashes: Vec::new(),
            can_animate: false,
        }
    }

    pub fn flashes(&self) -> &[(NodeId, Flash)] {
        &self.flashes
    }

    fn log(&self, msg: String) {
        if let Some(buffer) = &self.log_buffer {
            buffer.borrow_mut().push(msg.clone());
        }
        println!("{msg}");
    }
}

impl Default for StubHost {
    fn default() -> Self {
        Self::new()
    }
}

impl LabelHost for StubHost {
    fn apply(&mut self, cmd: &LabelCommand) {
        match cmd {
            LabelCommand::Mount { node } => self.log(format!("Mount({node:?})")),
            LabelCommand::UpdateLabel { node, text, .. } => {
                self.log(format!("Label({node:?}): \"{text}\""));
            }
            LabelCommand::Unmount { node } => self.log(format!("Unmount({node:?})")),
        }
    }

    fn animator(&mut self) -> Option<&mut dyn Animator> {
        if self.can_animate { Some(self) } else { None }
    }
}

impl Animator for StubHost {
    fn animate(&mut self, node: NodeId, flash: &Flash) {
        self.log(format!("Flash({node:?})"));
        self.flashes.push((node, flash.clone()));
    }
}
