use color_print::cformat;
use sicxe::op::Mnemonic;
use std::io::{BufRead, BufReader};

use crate::error::Error;

// ----------------------------------------------------------------------------
// Source

/// One source unit: every line of one input file.
#[derive(Debug, Clone)]
pub struct Source {
    pub path: String,
    pub lines: Vec<Line>,
}

impl Source {
    pub fn read(path: &str) -> Result<Source, Error> {
        let file = std::fs::File::open(path).map_err(|e| Error::FileOpen(path.to_string(), e))?;
        let mut lines = vec![];
        for (idx, raw) in BufReader::new(file).lines().enumerate() {
            let raw = raw.map_err(Error::FileRead)?;
            lines.push(Line::parse(idx, &raw));
        }
        Ok(Source {
            path: path.to_string(),
            lines,
        })
    }

    pub fn parse(path: &str, text: &str) -> Source {
        Source {
            path: path.to_string(),
            lines: text
                .lines()
                .enumerate()
                .map(|(idx, raw)| Line::parse(idx, raw))
                .collect(),
        }
    }

    /// Lines that carry a statement, in source order.
    pub fn stmts(&self) -> impl Iterator<Item = (&Line, &Stmt)> {
        self.lines
            .iter()
            .filter_map(|line| line.stmt.as_ref().map(|stmt| (line, stmt)))
    }
}

// ----------------------------------------------------------------------------
// Line

#[derive(Debug, Clone)]
pub struct Line {
    pub idx: usize,
    pub raw: String,
    pub stmt: Option<Stmt>,
}

impl Line {
    pub fn parse(idx: usize, raw: &str) -> Self {
        Line {
            idx,
            raw: raw.to_string(),
            stmt: Stmt::parse(raw),
        }
    }

    pub fn no(&self) -> usize {
        self.idx + 1
    }
}

// ----------------------------------------------------------------------------
// Statement

/// `[label] opcode operand...`
///
/// The label column is the first column: a line starting with whitespace has
/// no label.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Stmt {
    pub label: Option<String>,
    pub opcode: String,
    pub operands: Vec<String>,
}

impl Stmt {
    pub fn parse(code: &str) -> Option<Stmt> {
        let mut words = code.split_whitespace();
        let has_label = code.chars().next().is_some_and(|c| !c.is_whitespace());

        let label = if has_label {
            words.next().map(|s| s.to_string())
        } else {
            None
        };
        let opcode = words.next().map(|s| s.to_string());
        let operands: Vec<String> = words.map(|s| s.to_string()).collect();

        match (label, opcode) {
            (None, None) => None,
            (label, opcode) => Some(Stmt {
                label,
                opcode: opcode.unwrap_or_default(),
                operands,
            }),
        }
    }

    pub fn operand(&self) -> Option<&str> {
        self.operands.first().map(|s| s.as_str())
    }

    pub fn cformat(&self) -> String {
        let label = match &self.label {
            Some(label) => cformat!("<g>{:<8}</>", label),
            None => " ".repeat(8),
        };
        let opcode = match Mnemonic::parse(&self.opcode) {
            Ok(m) => m.cformat(),
            Err(_) => cformat!("<c>{:<6}</>", self.opcode),
        };
        cformat!("{} {} <b>{}</>", label, opcode, self.operands.join(" "))
    }
}
