use super::types::NodeId;
use crate::classify::HighlightMemo;
use crate::highlight::{FlashGate, PrevValue};

/// State owned by one mounted label node, never shared between nodes.
#[derive(Default)]
pub struct NodeState {
    pub(crate) prev: PrevValue,
    pub(crate) memo: HighlightMemo,
    pub(crate) gate: FlashGate,
}

/// Slot arena for per-node state, with slot reuse through a free list.
pub struct NodeArena {
    slots: Vec<Option<NodeState>>,
    free_list: Vec<u32>,
}

impl NodeArena {
    pub fn new() -> Self {
        Self {
            slots: Vec::new(),
            free_list: Vec::new(),
        }
    }

    pub fn mount(&mut self) -> NodeId {
        if let Some(index) = self.free_list.pop() {
            self.slots[index as usize] = Some(NodeState::default());
            NodeId(index)
        } else {
            self.slots.push(Some(NodeState::default()));
            NodeId((self.slots.len() - 1) as u32)
        }
    }

    pub fn get(&self, id: NodeId) -> Option<&NodeState> {
        self.slots.get(id.0 as usize)?.as_ref()
    }

    pub fn get_mut(&mut self, id: NodeId) -> Option<&mut NodeState> {
        self.slots.get_mut(id.0 as usize)?.as_mut()
    }

    pub fn contains(&self, id: NodeId) -> bool {
        self.get(id).is_some()
    }

    /// Free the node's slot. Returns false if it was not mounted.
    pub fn unmount(&mut self, id: NodeId) -> bool {
        let index = id.0 as usize;
        match self.slots.get_mut(index) {
            Some(slot @ Some(_)) => {
                *slot = None;
                self.free_list.push(id.0);
                true
            }
            _ => false,
        }
    }

    pub fn len(&self) -> usize {
        self.slots.iter().filter(|slot| slot.is_some()).count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Default for NodeArena {
    fn default() -> Self {
        Self::new()
    }
}
