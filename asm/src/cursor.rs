//! The location counter walk shared by both passes.
//!
//! Pass 1 and pass 2 both drive a [`Cursor`] over the same statements, so the
//! address pass 2 sees for an instruction is the one pass 1 assigned to it.

use sicxe::directive::{byte_length, Directive};
use sicxe::op::Format;

use crate::error::Error;
use crate::line::Stmt;

/// What a statement does to the location counter and the assembler state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    End,
    Csect,
    Use(String),
    EndUse,
    Reserve(u32),
    Byte(u32),
    MacroEnd,
    /// Not sized while a program block is active.
    BlockInternal,
    Start(u32),
    Instruction(Format),
}

impl Effect {
    /// Classify a statement. The arms are checked in priority order: once one
    /// matches, the rest are not considered. Inside a program block only the
    /// directives above `BlockInternal` take effect. Anything that is not a
    /// directive, a label-only line included, is sized as an instruction.
    pub fn classify(line: usize, stmt: &Stmt, in_block: bool) -> Result<Effect, Error> {
        let effect = match Directive::parse(&stmt.opcode) {
            Some(Directive::END) => Effect::End,
            Some(Directive::CSECT) => Effect::Csect,
            Some(Directive::USE) => Effect::Use(stmt.operand().unwrap_or_default().to_string()),
            Some(Directive::ENDUSE) => Effect::EndUse,
            Some(Directive::RESW) => {
                let words = count(line, Directive::RESW, stmt)?;
                Effect::Reserve(words.checked_mul(3).ok_or(Error::AddressOverflow { line })?)
            }
            Some(Directive::RESB) => Effect::Reserve(count(line, Directive::RESB, stmt)?),
            Some(Directive::BYTE) => Effect::Byte(byte_length(stmt.operand().unwrap_or_default())),
            Some(Directive::MEND) => Effect::MacroEnd,
            _ if in_block => Effect::BlockInternal,
            Some(Directive::START) => Effect::Start(start_addr(line, stmt)?),
            None => Effect::Instruction(Format::of(&stmt.opcode)),
        };
        Ok(effect)
    }
}

// Missing operand counts as 0.
fn count(line: usize, directive: Directive, stmt: &Stmt) -> Result<u32, Error> {
    match stmt.operand() {
        None => Ok(0),
        Some(s) => s.parse::<u32>().map_err(|source| Error::ParseNumber {
            line,
            directive,
            operand: s.to_string(),
            radix: "decimal",
            source,
        }),
    }
}

fn start_addr(line: usize, stmt: &Stmt) -> Result<u32, Error> {
    match stmt.operand() {
        None => Ok(0),
        Some(s) => u32::from_str_radix(s, 16).map_err(|source| Error::ParseNumber {
            line,
            directive: Directive::START,
            operand: s.to_string(),
            radix: "hex",
            source,
        }),
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Step {
    /// Location counter before the statement.
    pub addr: u32,
    pub effect: Effect,
}

#[derive(Debug, Clone, Default)]
pub struct Cursor {
    pub lc: u32,
    pub section: Option<String>,
    pub block: Option<String>,
    /// Counter value at `END`.
    pub length: Option<u32>,
}

impl Cursor {
    pub fn new() -> Self {
        Self::default()
    }

    /// `<section>.<label>` inside a control section, `<block>.<label>` inside a
    /// program block, the bare label otherwise.
    pub fn qualify(&self, label: &str) -> String {
        match (&self.section, &self.block) {
            (Some(section), _) => format!("{}.{}", section, label),
            (None, Some(block)) => format!("{}.{}", block, label),
            (None, None) => label.to_string(),
        }
    }

    pub fn step(&mut self, line: usize, stmt: &Stmt) -> Result<Step, Error> {
        let addr = self.lc;
        let effect = Effect::classify(line, stmt, self.block.is_some())?;
        match &effect {
            Effect::End => {
                self.length = Some(self.lc);
                self.section = None;
            }
            Effect::Csect => {
                self.lc = 0;
                self.section = Some(stmt.label.clone().unwrap_or_default());
            }
            Effect::Use(name) => self.block = Some(name.clone()),
            Effect::EndUse => self.block = None,
            Effect::Reserve(n) | Effect::Byte(n) => self.advance(line, *n)?,
            Effect::Start(addr) => self.lc = *addr,
            Effect::Instruction(format) => self.advance(line, format.size())?,
            Effect::MacroEnd | Effect::BlockInternal => {}
        }
        Ok(Step { addr, effect })
    }

    fn advance(&mut self, line: usize, n: u32) -> Result<(), Error> {
        self.lc = self
            .lc
            .checked_add(n)
            .ok_or(Error::AddressOverflow { line })?;
        Ok(())
    }
}
