use super::types::NodeId;
use crate::style::LabelStyle;
use smartstring::alias::String as SmartString;

/// Instructions handed to the host label primitive.
#[derive(Debug, Clone, PartialEq)]
pub enum LabelCommand {
    Mount {
        node: NodeId,
    },
    UpdateLabel {
        node: NodeId,
        text: SmartString,
        class_name: SmartString,
        style: LabelStyle,
    },
    Unmount {
        node: NodeId,
    },
}
