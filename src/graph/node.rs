//! Base node contract shared by every node kind the viewer renders
//!
//! [`NodeCore`] holds the state common to all kinds: identity, edge lists,
//! visibility and the cached display label. [`GraphNode`] is the capability
//! the rendering layer talks to; kinds supply their label and title text and
//! inherit the geometry.
//!
//! The display label is cached by [`GraphNode::init_display_label`]. Pushing
//! a new input clears the cache, and geometry queries on an uncached node
//! measure the current inline label on the spot, so sizes are always
//! consistent with the edges a node has right now.

use crate::constants::NODE_INPUT_WIDTH;
use crate::core::error::GraphError;
use crate::core::types::NodeId;
use crate::graph::edge::Edge;
use crate::measure::{BoundingBox, TextMeasure};

/// Inline label text together with its measured extent
#[derive(Debug, Clone, PartialEq)]
pub struct DisplayLabel {
    /// Label text
    pub text: String,
    /// Measured bounding box of `text`
    pub bbox: BoundingBox,
}

/// State shared by all node kinds
///
/// Edges can only be attached by the graph that owns the node, so both ends
/// of an edge always agree:
///
/// ```compile_fail
/// use turboshaft_view::{Edge, NodeCore, NodeId};
///
/// let mut core = NodeCore::new(NodeId::new(1));
/// core.push_input(Edge::new(NodeId::new(99), NodeId::new(1))).unwrap();
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct NodeCore {
    id: NodeId,
    inputs: Vec<Edge>,
    outputs: Vec<Edge>,
    visible: bool,
    label: Option<DisplayLabel>,
}

impl NodeCore {
    /// Create a visible node without edges
    pub fn new(id: NodeId) -> Self {
        Self {
            id,
            inputs: Vec::new(),
            outputs: Vec::new(),
            visible: true,
            label: None,
        }
    }

    /// Node identifier
    pub fn id(&self) -> NodeId {
        self.id
    }

    /// Incoming edges in operand order
    pub fn inputs(&self) -> &[Edge] {
        &self.inputs
    }

    /// Outgoing edges in insertion order
    pub fn outputs(&self) -> &[Edge] {
        &self.outputs
    }

    /// Whether the node survives the current filter
    pub fn is_visible(&self) -> bool {
        self.visible
    }

    /// Show or hide the node
    pub fn set_visible(&mut self, visible: bool) {
        self.visible = visible;
    }

    /// Cached display label, `None` until initialised or after inputs changed
    pub fn display_label(&self) -> Option<&DisplayLabel> {
        self.label.as_ref()
    }

    /// Append an incoming edge and drop the cached label
    pub(crate) fn push_input(&mut self, edge: Edge) -> Result<(), GraphError> {
        if edge.target != self.id {
            return Err(self.mismatch(edge));
        }
        self.inputs.push(edge);
        self.label = None;
        Ok(())
    }

    /// Append an outgoing edge
    pub(crate) fn push_output(&mut self, edge: Edge) -> Result<(), GraphError> {
        if edge.source != self.id {
            return Err(self.mismatch(edge));
        }
        self.outputs.push(edge);
        Ok(())
    }

    /// Ids of the producers feeding this node, in operand order
    pub fn input_ids(&self) -> impl Iterator<Item = NodeId> + '_ {
        self.inputs.iter().map(|e| e.source)
    }

    /// Ids of the consumers of this node, in insertion order
    pub fn output_ids(&self) -> impl Iterator<Item = NodeId> + '_ {
        self.outputs.iter().map(|e| e.target)
    }

    fn mismatch(&self, edge: Edge) -> GraphError {
        GraphError::EdgeMismatch {
            node: self.id,
            from: edge.source,
            to: edge.target,
        }
    }
}

/// Join ids with `sep`, e.g. `"1,2"` or `"1, 2"`
pub(crate) fn join_ids(ids: impl Iterator<Item = NodeId>, sep: &str) -> String {
    ids.map(|id| id.to_string()).collect::<Vec<_>>().join(sep)
}

/// Rendering capability of a graph node
pub trait GraphNode {
    /// Shared node state
    fn core(&self) -> &NodeCore;

    /// Shared node state, mutably
    fn core_mut(&mut self) -> &mut NodeCore;

    /// Short text drawn on the node
    fn inline_label(&self) -> String;

    /// Tooltip text, rebuilt on every call
    fn title(&self) -> String;

    /// Node identifier
    fn id(&self) -> NodeId {
        self.core().id()
    }

    /// Measured box of the inline label
    ///
    /// Uses the cached measurement when present, otherwise measures the
    /// current inline label without caching it.
    fn label_box(&self, measure: &dyn TextMeasure) -> BoundingBox {
        match self.core().display_label() {
            Some(label) => label.bbox,
            None => measure.measure(&self.inline_label()),
        }
    }

    /// Layout width: room for every input slot and never narrower than the label
    fn width(&self, measure: &dyn TextMeasure) -> f64 {
        let slots = self.core().inputs().len() as f64 * NODE_INPUT_WIDTH;
        slots.max(self.label_box(measure).width)
    }

    /// Layout height; a second row is reserved when custom data is shown
    fn height(&self, show_custom_data: bool, measure: &dyn TextMeasure) -> f64 {
        let height = self.label_box(measure).height;
        if show_custom_data {
            height * 2.0
        } else {
            height
        }
    }

    /// Compute, measure and cache the inline label
    fn init_display_label(&mut self, measure: &dyn TextMeasure) {
        let text = self.inline_label();
        let bbox = measure.measure(&text);
        tracing::trace!(node = %self.id(), label = %text, width = bbox.width, "display label measured");
        self.core_mut().label = Some(DisplayLabel { text, bbox });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_core_defaults() {
        let core = NodeCore::new(NodeId::new(1));
        assert!(core.is_visible());
        assert!(core.inputs().is_empty());
        assert!(core.outputs().is_empty());
        assert!(core.display_label().is_none());
    }

    #[test]
    fn test_push_rejects_foreign_edges() {
        let mut core = NodeCore::new(NodeId::new(3));
        let foreign = Edge::new(NodeId::new(1), NodeId::new(2));
        assert_eq!(
            core.push_input(foreign),
            Err(GraphError::EdgeMismatch {
                node: NodeId::new(3),
                from: NodeId::new(1),
                to: NodeId::new(2),
            })
        );
        assert!(core.push_output(foreign).is_err());

        assert!(core.push_input(Edge::new(NodeId::new(1), NodeId::new(3))).is_ok());
        assert!(core.push_output(Edge::new(NodeId::new(3), NodeId::new(9))).is_ok());
        assert_eq!(core.input_ids().collect::<Vec<_>>(), vec![NodeId::new(1)]);
        assert_eq!(core.output_ids().collect::<Vec<_>>(), vec![NodeId::new(9)]);
    }

    #[test]
    fn test_join_ids() {
        let ids = [NodeId::new(3), NodeId::new(7)];
        assert_eq!(join_ids(ids.into_iter(), ","), "3,7");
        assert_eq!(join_ids(ids.into_iter(), ", "), "3, 7");
        assert_eq!(join_ids(std::iter::empty(), ","), "");
    }
}
