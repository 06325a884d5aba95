use sicasm::line::Source;
use sicasm::msg::WarnKind;
use sicasm::{assemble, Error};

fn case(code: &str, expects: &[&str]) {
    let src = Source::parse("case.asm", code);
    let asm = assemble(&src).unwrap();

    println!("{}", sicasm::report::dump(&src, &asm.generated));

    let words: Vec<String> = asm.generated.words().map(|w| w.to_string()).collect();
    assert_eq!(words, expects);
}

#[test]
fn pc_relative_load() {
    case(
        "PROG START 1000\n    LDA ALPHA\n    RESB 13\nALPHA RESW 1\n    END\n",
        &["00000010"],
    );
}

#[test]
fn mixed_formats() {
    case(
        "PROG START 0\n\
         LOOP LDX ZERO\n\
         \x20   +JSUB SUBR\n\
         \x20   TIX COUNT\n\
         \x20   JLT LOOP\n\
         \x20   STA COUNT\n\
         SUBR RSUB\n\
         ZERO RESW 1\n\
         COUNT RESW 1\n\
         \x20   END LOOP\n",
        &[
            "04000013", // 0x13 - 0x00
            "48800000",
            "2C00000F", // 0x16 - 0x07
            "387FFFF6", // 0x00 - 0x0A
            "0C000009", // 0x16 - 0x0D
        ],
    );
}

#[test]
fn unknown_mnemonics_and_directives_emit_nothing() {
    case(
        "PROG START 0\n\
         \x20   FOO BAR\n\
         \x20   BYTE C'EOF'\n\
         BAR LDA BAR\n\
         \x20   END\n",
        &["00000000"],
    );
}

#[test]
fn skipped_statements_are_reported() {
    let src = Source::parse("case.asm", "P START 0\n    LDA NOWHERE\n    RSUB\n    END\n");
    let asm = assemble(&src).unwrap();
    assert_eq!(asm.generated.emitted.len(), 0);
    let kinds: Vec<_> = asm.warnings().map(|w| w.kind.clone()).collect();
    assert_eq!(
        kinds,
        vec![
            WarnKind::UndefinedSymbol("NOWHERE".to_string()),
            WarnKind::MissingOperand("RSUB".to_string()),
        ]
    );
}

#[test]
fn failing_unit_does_not_affect_the_next() {
    let units = [
        Source::parse("bad.asm", "P START 0\nBUF RESW many\n    END\n"),
        Source::parse("good.asm", "P START 0\n    LDA X\nX RESW 1\n    END\n"),
    ];
    let results: Vec<_> = units.iter().map(assemble).collect();

    match &results[0] {
        Err(Error::ParseNumber { line, operand, .. }) => {
            assert_eq!(*line, 1);
            assert_eq!(operand, "many");
        }
        other => panic!("expected parse error, got {:?}", other),
    }
    let good = results[1].as_ref().unwrap();
    assert_eq!(good.generated.object_program(), "00000003\n");
    assert_eq!(good.resolution.length, 6);
}

#[test]
fn units_do_not_share_symbols() {
    let first = Source::parse("a.asm", "P START 0\nSHARED RESW 1\n    END\n");
    let second = Source::parse("b.asm", "P START 0\n    LDA SHARED\n    END\n");
    assemble(&first).unwrap();
    let asm = assemble(&second).unwrap();
    assert!(asm.generated.emitted.is_empty());
    assert_eq!(asm.resolution.symbols.get_val("SHARED"), None);
}
