use strum::{Display, EnumString};

/// Assembler directives. Anything else in the opcode column is treated as a
/// machine instruction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumString, Display)]
pub enum Directive {
    START,
    END,
    CSECT,
    USE,
    ENDUSE,
    RESW,
    RESB,
    BYTE,
    MEND,
}

impl Directive {
    pub fn parse(s: &str) -> Option<Self> {
        s.parse::<Self>().ok()
    }
}

/// Number of bytes a `BYTE` operand occupies.
///
/// `X'F1'` holds two hex digits per byte, `C'EOF'` one byte per character.
/// The three characters of `X'`/`C'` and the closing quote are not counted.
pub fn byte_length(operand: &str) -> u32 {
    let len = operand.chars().count() as u32;
    if operand.starts_with("X'") {
        len.saturating_sub(3) / 2
    } else {
        len.saturating_sub(3)
    }
}
