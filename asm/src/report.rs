//! Text rendering of the pass 1 tables and the per-line listing.

use color_print::cformat;
use sicxe::op::Mnemonic;
use sicxe::word::{ListingWord, ObjectWord};

use crate::line::Source;
use crate::pass1::Resolution;
use crate::pass2::Generated;

const RULE: &str = "------------------------------------------------------------------";

fn header() -> String {
    format!("{:<6} {:<8} {:<30} {}", "LINE", "LOC", "SOURCE STATEMENT", "OBJECT CODE")
}

pub fn symbol_table(res: &Resolution) -> String {
    let mut out = vec![cformat!("<s>Symbol Table:</>"), RULE.to_string(), header()];
    for (idx, (name, addr)) in res.symbols.iter().enumerate() {
        out.push(cformat!("{:<6} <g>{:06X}</>   {:<30}", idx + 1, addr, name));
    }
    out.join("\n")
}

/// Lines whose opcode is an OPTAB mnemonic with a resolvable operand, each
/// with the location recorded for its opcode and a short preview word.
pub fn location_table(src: &Source, res: &Resolution) -> String {
    let mut out = vec![cformat!("<s>Location Table:</>"), RULE.to_string(), header()];
    let rows = src.stmts().filter_map(|(line, stmt)| {
        let mnemonic = Mnemonic::parse(&stmt.opcode).ok()?;
        let target = res.symbols.get_val(stmt.operand()?)?;
        let loc = res.locations.get(&stmt.opcode)?;
        Some((line, loc, ListingWord::encode(mnemonic.opcode(), target)))
    });
    for (idx, (line, loc, preview)) in rows.enumerate() {
        out.push(cformat!(
            "{:<6} <g>{:06X}</>   {:<30} <y>{}</>",
            idx + 1,
            loc,
            line.raw.trim(),
            preview
        ));
    }
    out.join("\n")
}

pub fn program_length(res: &Resolution) -> String {
    cformat!("<s>Program Length:</> <g>{:06X}</> ({})", res.length, res.length)
}

pub fn render(src: &Source, res: &Resolution) -> String {
    let rule = "=".repeat(RULE.len());
    [
        cformat!("Tables for Input File: <u>{}</>", src.path),
        rule.clone(),
        symbol_table(res),
        String::new(),
        location_table(src, res),
        String::new(),
        program_length(res),
        rule,
    ]
    .join("\n")
}

/// Per-line listing: address, object word decoded back to its mnemonic,
/// and the parsed statement.
pub fn dump(src: &Source, gen: &Generated) -> String {
    let mut out = vec![format!(
        "{}+------[{}]{}",
        "-".repeat(25),
        src.path,
        "-".repeat(45usize.saturating_sub(src.path.len()))
    )];
    for line in &src.lines {
        let body = match (&line.stmt, gen.at_line(line.idx)) {
            (None, _) => format!("{:25}| {:>4}:", "", line.no()),
            (Some(stmt), Some(e)) => cformat!(
                "[<g>{:06X}</>] {} {} | {:>4}: {}",
                e.addr,
                e.word,
                decoded(e.word),
                line.no(),
                stmt.cformat()
            ),
            (Some(stmt), None) => format!("{:25}| {:>4}: {}", "", line.no(), stmt.cformat()),
        };
        out.push(body);
    }
    out.push(format!("{}+{}", "-".repeat(25), "-".repeat(53)));
    out.join("\n")
}

fn decoded(word: ObjectWord) -> String {
    match word.kind() {
        Some(kind) if word.is_extended() => cformat!("<r>{:<6}</>", format!("+{}", kind)),
        Some(kind) => cformat!("<r>{:<6}</>", kind.to_string()),
        None => cformat!("<r,s>{:<6}</>", "!!"),
    }
}
