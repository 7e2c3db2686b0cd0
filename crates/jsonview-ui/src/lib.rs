//! Key-label rendering and live-update highlighting for a JSON tree view.
//!
//! Each key/value pair in the tree is one node. Per frame the node's label
//! is formatted and its value is classified against the snapshot from the
//! previous frame; a qualifying change arms a one-shot background flash
//! that plays after the host has reflected the frame. Deep comparison of
//! containers is deliberately never attempted.

pub mod classify;
pub mod highlight;
pub mod key;
pub mod node;
pub mod renderer;
pub mod scheduler;
pub mod style;
pub mod theme;

pub use classify::{HighlightMemo, should_highlight};
pub use highlight::{Easing, FLASH_DURATION, Flash, FlashGate, PrevValue};
pub use key::{KeyName, format_key};
pub use node::{
    CustomRender, KeyLabelProps, LabelBundle, LabelCommand, NodeArena, NodeId, RenderStrategy,
};
pub use renderer::{Animator, LabelHost, StubHost};
pub use scheduler::{RenderCycle, Rendered, UiError};
pub use style::LabelStyle;
pub use theme::{Color, DEFAULT_UPDATE_COLOR, Theme};

pub use jsonview_types::{FuncValue, JsonValue, TypeTag};
