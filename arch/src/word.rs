use crate::op::{Format, OpKind};

const DISP_MASK: u32 = 0x7F_FFFF;

/// A packed 32-bit object word: opcode in bits 31..24, the extended-format
/// flag in bit 23 and the displacement in bits 22..0.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ObjectWord(pub u32);

impl ObjectWord {
    /// Displacements outside 23 bits are truncated by the mask, not rejected.
    pub fn encode(opcode: u8, format: Format, disp: i64) -> Self {
        let disp = (disp as u32) & DISP_MASK;
        ObjectWord((opcode as u32) << 24 | format.flag() << 23 | disp)
    }

    pub fn opcode(&self) -> u8 {
        (self.0 >> 24) as u8
    }

    pub fn is_extended(&self) -> bool {
        (self.0 >> 23) & 1 == 1
    }

    pub fn displacement(&self) -> u32 {
        self.0 & DISP_MASK
    }

    pub fn kind(&self) -> Option<OpKind> {
        OpKind::from_opcode(self.opcode())
    }
}

impl std::fmt::Display for ObjectWord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:08X}", self.0)
    }
}

/// The short preview shown in the location table listing:
/// `opcode << 16 | operand address`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ListingWord(pub u32);

impl ListingWord {
    pub fn encode(opcode: u8, addr: u32) -> Self {
        ListingWord((opcode as u32) << 16 | addr)
    }
}

impl std::fmt::Display for ListingWord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:06X}", self.0)
    }
}
