//! Instruction model
//!
//! Instructions are opaque to the dependence graph: the graph only needs a
//! stable identity per instruction (`InstrId`), the value name it defines,
//! the value names it reads, and whether it touches memory. The surrounding
//! region owns the instructions; graph nodes hold `InstrId` back-references
//! and never mutate instruction data.

use serde::{Deserialize, Serialize};

/// Stable instruction identity, assigned by the owning [`Region`] in
/// program order. Usable as a map/set key.
///
/// [`Region`]: super::Region
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub struct InstrId(pub u32);

impl InstrId {
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

impl std::fmt::Display for InstrId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "i{}", self.0)
    }
}

/// How an instruction touches memory
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum MemoryAccess {
    /// Pure register computation
    #[default]
    None,
    /// Reads memory (load)
    Load,
    /// Writes memory (store)
    Store,
    /// Reads and writes (e.g. read-modify-write)
    Both,
}

impl MemoryAccess {
    pub fn reads(self) -> bool {
        matches!(self, MemoryAccess::Load | MemoryAccess::Both)
    }

    pub fn writes(self) -> bool {
        matches!(self, MemoryAccess::Store | MemoryAccess::Both)
    }

    pub fn touches_memory(self) -> bool {
        !matches!(self, MemoryAccess::None)
    }
}

/// One instruction of the region's program text
///
/// `name` is the single-assignment value the instruction defines (empty for
/// pure effects like stores), `operands` are the value names it reads, and
/// `pointer` is the symbol of the address a memory access goes through
/// (`None` means an unknown address, which conservative oracles treat as
/// potentially aliasing everything).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Instruction {
    pub name: String,
    pub opcode: String,
    pub operands: Vec<String>,
    pub memory: MemoryAccess,
    pub pointer: Option<String>,
    pub line: u32,
}

impl Instruction {
    pub fn new(name: impl Into<String>, opcode: impl Into<String>) -> Self {
        Instruction {
            name: name.into(),
            opcode: opcode.into(),
            operands: Vec::new(),
            memory: MemoryAccess::None,
            pointer: None,
            line: 0,
        }
    }

    pub fn with_operands(mut self, operands: Vec<String>) -> Self {
        self.operands = operands;
        self
    }

    pub fn with_memory(mut self, memory: MemoryAccess, pointer: Option<String>) -> Self {
        self.memory = memory;
        self.pointer = pointer;
        self
    }

    pub fn at_line(mut self, line: u32) -> Self {
        self.line = line;
        self
    }

    /// True if this instruction defines a register value
    pub fn defines_value(&self) -> bool {
        !self.name.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_access_predicates() {
        assert!(!MemoryAccess::None.touches_memory());
        assert!(MemoryAccess::Load.reads());
        assert!(!MemoryAccess::Load.writes());
        assert!(MemoryAccess::Store.writes());
        assert!(!MemoryAccess::Store.reads());
        assert!(MemoryAccess::Both.reads() && MemoryAccess::Both.writes());
    }

    #[test]
    fn test_instruction_builder_chain() {
        let instr = Instruction::new("x", "load")
            .with_operands(vec![])
            .with_memory(MemoryAccess::Load, Some("p".to_string()))
            .at_line(1);

        assert!(instr.defines_value());
        assert_eq!(instr.pointer.as_deref(), Some("p"));
        assert_eq!(instr.line, 1);
    }

    #[test]
    fn test_store_defines_no_value() {
        let store = Instruction::new("", "store")
            .with_operands(vec!["y".to_string()])
            .with_memory(MemoryAccess::Store, Some("q".to_string()));

        assert!(!store.defines_value());
        assert!(store.memory.writes());
    }
}
