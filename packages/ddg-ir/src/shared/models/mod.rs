//! Common data models shared by every feature slice.

mod instruction;
mod region;

pub use instruction::{InstrId, Instruction, MemoryAccess};
pub use region::{BasicBlock, Region, RegionKind};
