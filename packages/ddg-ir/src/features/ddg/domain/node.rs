//! DDG node
//!
//! A node represents one instruction, or several instructions from the same
//! region merged into a single vertex. The node keeps per-instruction
//! identity (an ordered `InstrId` list) even when merged, so consumers can
//! always recover exactly which instructions a vertex stands for.

use serde::{Deserialize, Serialize};

use super::edge::DDGEdge;
use crate::shared::models::InstrId;

/// Kind of DDG node
///
/// Closed for now; new region-merging policies (e.g. pi-block style cycle
/// grouping) extend this enum with new variants rather than adding a type
/// hierarchy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum NodeKind {
    #[default]
    Unknown,
    /// Node holding exactly one instruction
    SingleInstruction,
    /// Node holding two or more instructions merged into one vertex
    MultiInstruction,
}

impl NodeKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            NodeKind::Unknown => "UNKNOWN",
            NodeKind::SingleInstruction => "SINGLE",
            NodeKind::MultiInstruction => "MULTI",
        }
    }
}

/// DDG node: an ordered, non-empty instruction list plus the outgoing
/// edge list the node owns.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DDGNode {
    kind: NodeKind,
    instrs: Vec<InstrId>,
    edges: Vec<DDGEdge>,
}

impl DDGNode {
    /// Create a node in `SingleInstruction` state holding exactly `instr`.
    pub fn new_single(instr: InstrId) -> Self {
        DDGNode {
            kind: NodeKind::SingleInstruction,
            instrs: vec![instr],
            edges: Vec::new(),
        }
    }

    pub fn kind(&self) -> NodeKind {
        self.kind
    }

    /// Append instructions to this node, promoting its kind.
    ///
    /// A node stays (or becomes) `SingleInstruction` only in the degenerate
    /// case of appending exactly one instruction to an empty list; any
    /// append onto existing instructions yields `MultiInstruction`.
    pub fn append(&mut self, instrs: &[InstrId]) {
        self.kind = if self.instrs.is_empty() && instrs.len() == 1 {
            NodeKind::SingleInstruction
        } else {
            NodeKind::MultiInstruction
        };
        self.instrs.extend_from_slice(instrs);
    }

    /// Ordered instruction list of this node.
    ///
    /// Contract: the node must hold at least one instruction. An empty node
    /// here means the calling algorithm is defective, so this aborts.
    pub fn instructions(&self) -> &[InstrId] {
        assert!(!self.instrs.is_empty(), "instruction list is empty");
        &self.instrs
    }

    /// First instruction in the node. Same precondition as `instructions`.
    pub fn first_instruction(&self) -> InstrId {
        self.instructions()[0]
    }

    /// Last instruction in the node. Same precondition as `instructions`.
    pub fn last_instruction(&self) -> InstrId {
        *self.instructions().last().unwrap()
    }

    /// Collect the node's instructions matching `pred` into a list.
    /// Returns true if at least one instruction was collected.
    pub fn collect_instructions(
        &self,
        pred: impl Fn(InstrId) -> bool,
        out: &mut Vec<InstrId>,
    ) -> bool {
        let before = out.len();
        out.extend(self.instructions().iter().copied().filter(|&i| pred(i)));
        out.len() > before
    }

    /// Outgoing edges in append order
    pub fn edges(&self) -> &[DDGEdge] {
        &self.edges
    }

    pub(crate) fn push_edge(&mut self, edge: DDGEdge) -> usize {
        self.edges.push(edge);
        self.edges.len() - 1
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_single_is_single_instruction() {
        let node = DDGNode::new_single(InstrId(0));
        assert_eq!(node.kind(), NodeKind::SingleInstruction);
        assert_eq!(node.instructions(), &[InstrId(0)]);
        assert_eq!(node.first_instruction(), InstrId(0));
        assert_eq!(node.last_instruction(), InstrId(0));
    }

    #[test]
    fn test_append_promotes_to_multi() {
        let mut node = DDGNode::new_single(InstrId(0));
        node.append(&[InstrId(1)]);

        assert_eq!(node.kind(), NodeKind::MultiInstruction);
        // Creation order followed by append order, no reordering
        assert_eq!(node.instructions(), &[InstrId(0), InstrId(1)]);
        assert_eq!(node.first_instruction(), InstrId(0));
        assert_eq!(node.last_instruction(), InstrId(1));
    }

    #[test]
    fn test_append_multiple_keeps_order() {
        let mut node = DDGNode::new_single(InstrId(5));
        node.append(&[InstrId(2), InstrId(9)]);
        assert_eq!(node.instructions(), &[InstrId(5), InstrId(2), InstrId(9)]);
        assert_eq!(node.kind(), NodeKind::MultiInstruction);
    }

    #[test]
    fn test_collect_instructions_filters() {
        let mut node = DDGNode::new_single(InstrId(0));
        node.append(&[InstrId(1), InstrId(2)]);

        let mut evens = Vec::new();
        assert!(node.collect_instructions(|i| i.0 % 2 == 0, &mut evens));
        assert_eq!(evens, vec![InstrId(0), InstrId(2)]);

        let mut none = Vec::new();
        assert!(!node.collect_instructions(|i| i.0 > 10, &mut none));
        assert!(none.is_empty());
    }

    #[test]
    #[should_panic(expected = "instruction list is empty")]
    fn test_instructions_panics_on_empty_node() {
        // Deserialization is the only way to observe an empty list
        let node: DDGNode = serde_json::from_str(
            r#"{"kind":"Unknown","instrs":[],"edges":[]}"#,
        )
        .unwrap();
        let _ = node.instructions();
    }
}
