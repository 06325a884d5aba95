use color_print::cprintln;

use crate::line::Source;

#[derive(Debug)]
pub enum Msg {
    Error(String),
    Warn(String),
    Note(String),
}

impl Msg {
    pub fn print(&self, info: (&str, usize, &str)) {
        let (file, line, raw) = info;
        match self {
            Msg::Error(msg) => cprintln!("<red,bold>error</>: {}", msg),
            Msg::Warn(msg) => cprintln!("<yellow,bold>warn</>: {}", msg),
            Msg::Note(msg) => cprintln!("<green,bold>note</>: {}", msg),
        }
        cprintln!("     <blue>--></> <underline>{}:{}</>", file, line);
        cprintln!("      <blue>|</>");
        cprintln!(" <blue>{:>4} |</> {}", line, raw);
        cprintln!("      <blue>|</>");
    }

    /// Print against a 0-based line of `src`.
    pub fn diag(&self, src: &Source, idx: usize) {
        let raw = src.lines.get(idx).map(|l| l.raw.as_str()).unwrap_or("");
        self.print((&src.path, idx + 1, raw));
    }
}

/// Non-fatal findings of either pass.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Warning {
    pub line: usize,
    pub kind: WarnKind,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WarnKind {
    RedefinedLabel { name: String, prev: usize },
    LateStart,
    MissingEnd,
    UndefinedSymbol(String),
    MissingOperand(String),
}

impl std::fmt::Display for WarnKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            WarnKind::RedefinedLabel { name, .. } => write!(f, "Re-defined label: `{}`", name),
            WarnKind::LateStart => write!(f, "START is not the first statement"),
            WarnKind::MissingEnd => {
                write!(f, "No END directive, program length taken at end of file")
            }
            WarnKind::UndefinedSymbol(sym) => {
                write!(f, "Undefined symbol `{}`, no object code emitted", sym)
            }
            WarnKind::MissingOperand(op) => {
                write!(f, "`{}` has no operand, no object code emitted", op)
            }
        }
    }
}

impl Warning {
    pub fn new(line: usize, kind: WarnKind) -> Self {
        Warning { line, kind }
    }

    pub fn diag(&self, src: &Source) {
        Msg::Warn(self.kind.to_string()).diag(src, self.line);
        if let WarnKind::RedefinedLabel { prev, .. } = self.kind {
            Msg::Note("Already defined here. The value has been overridden.".to_string())
                .diag(src, prev);
        }
    }
}
