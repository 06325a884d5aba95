//! Pass 2: encode instructions against the completed symbol table.

use sicxe::op::{Format, Mnemonic};
use sicxe::word::ObjectWord;

use crate::cursor::Cursor;
use crate::error::Error;
use crate::line::Source;
use crate::msg::{WarnKind, Warning};
use crate::pass1::Resolution;

/// One object word and where it came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Emission {
    pub line: usize,
    pub addr: u32,
    pub word: ObjectWord,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Generated {
    pub emitted: Vec<Emission>,
    pub warnings: Vec<Warning>,
}

impl Generated {
    pub fn words(&self) -> impl Iterator<Item = ObjectWord> + '_ {
        self.emitted.iter().map(|e| e.word)
    }

    /// Object file text: one 8-digit hex word per line.
    pub fn object_program(&self) -> String {
        self.words().map(|w| format!("{}\n", w)).collect()
    }

    pub fn at_line(&self, line: usize) -> Option<&Emission> {
        self.emitted.iter().find(|e| e.line == line)
    }
}

pub fn generate(src: &Source, res: &Resolution) -> Result<Generated, Error> {
    let mut cursor = Cursor::new();
    let mut out = Generated::default();

    for (line, stmt) in src.stmts() {
        // the instruction's own address, re-walked the same way pass 1 did
        let addr = cursor.step(line.idx, stmt)?.addr;

        let Ok(mnemonic) = Mnemonic::parse(&stmt.opcode) else {
            continue;
        };
        let Some(operand) = stmt.operand() else {
            out.warnings.push(Warning::new(
                line.idx,
                WarnKind::MissingOperand(stmt.opcode.clone()),
            ));
            continue;
        };
        let Some(target) = res.symbols.get_val(operand) else {
            out.warnings.push(Warning::new(
                line.idx,
                WarnKind::UndefinedSymbol(operand.to_string()),
            ));
            continue;
        };

        let disp = match mnemonic.format {
            Format::Four => 0,
            Format::Three => target as i64 - addr as i64,
        };
        out.emitted.push(Emission {
            line: line.idx,
            addr,
            word: ObjectWord::encode(mnemonic.opcode(), mnemonic.format, disp),
        });
    }

    Ok(out)
}
