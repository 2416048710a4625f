//! Conservative alias oracle
//!
//! Default [`DependenceOracle`] used when no real dependence analysis is
//! plugged in: two memory accesses depend on each other when at least one
//! writes and their pointer symbols may alias (equal symbol, or either
//! side going through an unknown address). Direction and distance are
//! always `Unknown` / `None`; a conservative answer never claims more than
//! it knows.

use crate::features::ddg::ports::{
    DependenceDirection, DependenceInfo, DependenceKind, DependenceOracle,
};
use crate::shared::models::Instruction;

#[derive(Debug, Clone, Copy, Default)]
pub struct ConservativeAliasOracle;

impl ConservativeAliasOracle {
    fn may_alias(src: &Instruction, dst: &Instruction) -> bool {
        match (&src.pointer, &dst.pointer) {
            (Some(a), Some(b)) => a == b,
            // Unknown address on either side aliases everything
            _ => true,
        }
    }
}

impl DependenceOracle for ConservativeAliasOracle {
    fn dependence(&self, src: &Instruction, dst: &Instruction) -> Option<DependenceInfo> {
        if !src.memory.touches_memory() || !dst.memory.touches_memory() {
            return None;
        }
        if !src.memory.writes() && !dst.memory.writes() {
            return None;
        }
        if !Self::may_alias(src, dst) {
            return None;
        }

        let kind = match (src.memory.writes(), dst.memory.writes()) {
            (true, true) => DependenceKind::Output,
            (true, false) => DependenceKind::Flow,
            (false, true) => DependenceKind::Anti,
            (false, false) => unreachable!("read/read pairs filtered above"),
        };

        Some(DependenceInfo {
            kind,
            direction: DependenceDirection::Unknown,
            distance: None,
        })
    }
}
