//! Pass 1: assign an address to every label and measure the program.

use crate::cursor::{Cursor, Effect};
use crate::error::Error;
use crate::line::Source;
use crate::msg::{WarnKind, Warning};
use crate::table::{LocationTable, SymbolTable};

/// Everything pass 1 learns about one source unit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resolution {
    pub symbols: SymbolTable,
    pub locations: LocationTable,
    pub length: u32,
    pub warnings: Vec<Warning>,
}

pub fn resolve(src: &Source) -> Result<Resolution, Error> {
    let mut cursor = Cursor::new();
    let mut symbols = SymbolTable::new();
    let mut locations = LocationTable::new();
    let mut warnings = vec![];

    for (n, (line, stmt)) in src.stmts().enumerate() {
        // Labels take the counter value before the statement is sized.
        if let Some(label) = &stmt.label {
            let name = cursor.qualify(label);
            if let Some((prev, _)) = symbols.insert(name.clone(), line.idx, cursor.lc) {
                warnings.push(Warning::new(line.idx, WarnKind::RedefinedLabel { name, prev }));
            }
        }

        let step = cursor.step(line.idx, stmt)?;
        if matches!(step.effect, Effect::Start(_)) && n != 0 {
            warnings.push(Warning::new(line.idx, WarnKind::LateStart));
        }

        locations.record(&stmt.opcode, cursor.lc);
    }

    let length = match cursor.length {
        Some(length) => length,
        None => {
            let last = src.lines.len().saturating_sub(1);
            warnings.push(Warning::new(last, WarnKind::MissingEnd));
            cursor.lc
        }
    };

    Ok(Resolution {
        symbols,
        locations,
        length,
        warnings,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn resolve_str(code: &str) -> Resolution {
        resolve(&Source::parse("test.asm", code)).unwrap()
    }

    #[test]
    fn labels_take_address_before_statement() {
        let res = resolve_str(
            "COPY START 1000\n\
             FIRST LDA ALPHA\n\
             \x20   STA BETA\n\
             ALPHA RESW 1\n\
             BETA RESB 6\n\
             \x20   END FIRST\n",
        );
        assert_eq!(res.symbols.get_val("COPY"), Some(0));
        assert_eq!(res.symbols.get_val("FIRST"), Some(0x1000));
        assert_eq!(res.symbols.get_val("ALPHA"), Some(0x1006));
        assert_eq!(res.symbols.get_val("BETA"), Some(0x1009));
        assert_eq!(res.length, 0x100F);
        assert!(res.warnings.is_empty());
    }

    #[test]
    fn location_table_keeps_last_occurrence() {
        let res = resolve_str("P START 0\n    LDA A\n    STA B\n    LDA C\n    END\n");
        assert_eq!(res.locations.get("LDA"), Some(9));
        assert_eq!(res.locations.get("STA"), Some(6));
        assert_eq!(res.locations.get("START"), Some(0));
        assert_eq!(res.locations.get("END"), Some(9));
    }

    #[test]
    fn sections_and_blocks_qualify_labels() {
        let res = resolve_str(
            "MAIN START 0\n\
             A LDA X\n\
             SUB CSECT\n\
             B LDA X\n\
             \x20   END\n\
             \x20   USE DATA\n\
             C RESW 1\n\
             \x20   ENDUSE\n\
             D RESB 1\n",
        );
        assert_eq!(res.symbols.get_val("A"), Some(0));
        // the CSECT label itself belongs to the enclosing scope
        assert_eq!(res.symbols.get_val("SUB"), Some(3));
        assert_eq!(res.symbols.get_val("SUB.B"), Some(0));
        assert_eq!(res.symbols.get_val("DATA.C"), Some(3));
        assert_eq!(res.symbols.get_val("D"), Some(6));
        assert_eq!(res.length, 3);
    }

    #[test]
    fn redefined_label_warns_and_overrides() {
        let res = resolve_str("P START 0\nL LDA X\nL LDA X\n    END\n");
        assert_eq!(res.symbols.get_val("L"), Some(3));
        assert_eq!(
            res.warnings,
            vec![Warning::new(
                2,
                WarnKind::RedefinedLabel {
                    name: "L".to_string(),
                    prev: 1
                }
            )]
        );
    }

    #[test]
    fn late_start_and_missing_end() {
        let res = resolve_str("    LDA X\nP START 100\n    LDA X\n");
        assert_eq!(res.length, 0x103);
        let kinds: Vec<_> = res.warnings.iter().map(|w| w.kind.clone()).collect();
        assert_eq!(kinds, vec![WarnKind::LateStart, WarnKind::MissingEnd]);
        assert_eq!(res.warnings[1].line, 2);
    }

    #[test]
    fn label_only_line_takes_three_bytes() {
        let res = resolve_str("P START 0\nHERE\nNEXT LDA NEXT\n    END\n");
        assert_eq!(res.symbols.get_val("HERE"), Some(0));
        assert_eq!(res.symbols.get_val("NEXT"), Some(3));
        assert_eq!(res.length, 6);
    }

    #[test]
    fn parse_failure_aborts() {
        let err = resolve(&Source::parse("t.asm", "P START 0\nA RESW x\n")).unwrap_err();
        assert_eq!(err.line(), Some(1));
    }

    #[test]
    fn deterministic() {
        let src = Source::parse("t.asm", "P START 0\nA LDA B\nB BYTE C'EOF'\n    END\n");
        let first = resolve(&src).unwrap();
        let second = resolve(&src).unwrap();
        assert_eq!(first, second);
    }
}
