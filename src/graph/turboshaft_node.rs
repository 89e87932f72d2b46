//! Turboshaft operation node

use crate::core::types::{BlockId, NodeId};
use crate::graph::node::{join_ids, GraphNode, NodeCore};
use crate::graph::op_properties::OpPropertiesType;

/// One operation of a Turboshaft graph
#[derive(Debug, Clone, PartialEq)]
pub struct TurboshaftNode {
    core: NodeCore,
    title: String,
    block: BlockId,
    op_properties_type: OpPropertiesType,
}

impl TurboshaftNode {
    /// Create a visible node with no edges and no cached label
    pub fn new(
        id: NodeId,
        title: impl Into<String>,
        block: BlockId,
        op_properties_type: OpPropertiesType,
    ) -> Self {
        Self {
            core: NodeCore::new(id),
            title: title.into(),
            block,
            op_properties_type,
        }
    }

    /// Operator name, e.g. `"Add"`
    pub fn op_title(&self) -> &str {
        &self.title
    }

    /// Owning block
    pub fn block(&self) -> BlockId {
        self.block
    }

    /// Side-effect classification
    pub fn op_properties_type(&self) -> OpPropertiesType {
        self.op_properties_type
    }

    /// Whether the node survives the current filter
    pub fn is_visible(&self) -> bool {
        self.core.is_visible()
    }

    /// Show or hide the node
    pub fn set_visible(&mut self, visible: bool) {
        self.core.set_visible(visible);
    }
}

impl GraphNode for TurboshaftNode {
    fn core(&self) -> &NodeCore {
        &self.core
    }

    fn core_mut(&mut self) -> &mut NodeCore {
        &mut self.core
    }

    fn inline_label(&self) -> String {
        if self.core.inputs().is_empty() {
            return format!("{} {}", self.core.id(), self.title);
        }
        format!(
            "{} {}({})",
            self.core.id(),
            self.title,
            join_ids(self.core.input_ids(), ",")
        )
    }

    fn title(&self) -> String {
        let mut title = format!("{} {} {}", self.core.id(), self.title, self.op_properties_type);
        if !self.core.inputs().is_empty() {
            title.push_str("\nInputs: ");
            title.push_str(&join_ids(self.core.input_ids(), ", "));
        }
        if !self.core.outputs().is_empty() {
            title.push_str("\nOutputs: ");
            title.push_str(&join_ids(self.core.output_ids(), ", "));
        }
        title
    }
}
