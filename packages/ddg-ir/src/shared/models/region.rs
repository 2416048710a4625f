//! Region model
//!
//! A region is the unit a dependence graph is built over: either a whole
//! function body or the basic blocks contained in a single loop. The region
//! owns its instructions and assigns each a stable [`InstrId`] in program
//! order; everything downstream references instructions through those ids.

use serde::{Deserialize, Serialize};

use super::{InstrId, Instruction};
use crate::errors::{DDGError, Result};

/// Kind of program region
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RegionKind {
    /// Entire function body
    Function,
    /// Body of a single loop (its contained basic blocks only)
    Loop,
}

/// A basic block: a label plus a straight-line run of instructions
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BasicBlock {
    pub label: String,
    pub instructions: Vec<Instruction>,
}

impl BasicBlock {
    pub fn new(label: impl Into<String>, instructions: Vec<Instruction>) -> Self {
        BasicBlock {
            label: label.into(),
            instructions,
        }
    }
}

/// An ordered sequence of basic blocks forming one dependence-analysis scope
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Region {
    pub name: String,
    pub kind: RegionKind,
    blocks: Vec<BasicBlock>,
}

impl Region {
    pub fn function(name: impl Into<String>, blocks: Vec<BasicBlock>) -> Self {
        Region {
            name: name.into(),
            kind: RegionKind::Function,
            blocks,
        }
    }

    pub fn loop_body(name: impl Into<String>, blocks: Vec<BasicBlock>) -> Self {
        Region {
            name: name.into(),
            kind: RegionKind::Loop,
            blocks,
        }
    }

    /// Single-block convenience constructor for straight-line regions
    pub fn straight_line(name: impl Into<String>, instructions: Vec<Instruction>) -> Self {
        let name = name.into();
        let entry = BasicBlock::new("entry", instructions);
        Region::function(name, vec![entry])
    }

    pub fn blocks(&self) -> &[BasicBlock] {
        &self.blocks
    }

    /// Iterate instructions in program order, paired with their ids
    pub fn instructions(&self) -> impl Iterator<Item = (InstrId, &Instruction)> {
        self.blocks
            .iter()
            .flat_map(|b| b.instructions.iter())
            .enumerate()
            .map(|(i, instr)| (InstrId(i as u32), instr))
    }

    /// Look up an instruction by id
    ///
    /// Ids are dense indices into program order, so this is O(blocks).
    pub fn instruction(&self, id: InstrId) -> Option<&Instruction> {
        let mut remaining = id.index();
        for block in &self.blocks {
            if remaining < block.instructions.len() {
                return Some(&block.instructions[remaining]);
            }
            remaining -= block.instructions.len();
        }
        None
    }

    pub fn instruction_count(&self) -> usize {
        self.blocks.iter().map(|b| b.instructions.len()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.instruction_count() == 0
    }

    /// Validate the region before graph construction.
    ///
    /// The region must be non-empty and single-assignment: def-use edge
    /// construction resolves each operand name to at most one defining
    /// instruction.
    pub fn validate(&self) -> Result<()> {
        if self.is_empty() {
            return Err(DDGError::EmptyRegion(self.name.clone()));
        }

        let mut defined = std::collections::HashSet::new();
        for (_, instr) in self.instructions() {
            if instr.defines_value() && !defined.insert(instr.name.as_str()) {
                return Err(DDGError::DuplicateDefinition {
                    region: self.name.clone(),
                    name: instr.name.clone(),
                });
            }
        }

        Ok(())
    }
}
