use crate::assembler::Word;
use crate::parser::{Line, Stmt};
use color_print::cformat;
use std::collections::HashMap;

/// Render the listing: address and binary of each instruction next to the
/// source line it came from.
pub fn format_dump(path: &str, lines: &[Line], words: &[Word]) -> Vec<String> {
    let by_line: HashMap<usize, &Word> = words.iter().map(|word| (word.idx, word)).collect();

    let mut out = vec![format!(
        "{}+------[{}]{}",
        "-".repeat(24),
        path,
        "-".repeat(45usize.saturating_sub(path.len()))
    )];

    for line in lines {
        let comment_str = line
            .comment
            .as_ref()
            .map(|s| cformat!("<dim>// {}</>", s))
            .unwrap_or_default();

        let body = match (&line.stmt, by_line.get(&line.idx)) {
            (Some(Stmt::Code), Some(word)) => format!(
                "[{:04X}] {} | {:>4}:   {} {}",
                word.pc,
                word.inst.to_bin_string(),
                line.no(),
                word.inst.cformat(),
                comment_str
            ),
            (Some(Stmt::Code), None) => format!(
                "[????] {} | {:>4}:   {} {}",
                cformat!("<r,s>{}</>", "!".repeat(16)),
                line.no(),
                line.code,
                comment_str
            ),
            (Some(Stmt::Label(key)), _) => {
                let label = cformat!("<g>({})</>", key);
                format!("{:24}| {:>4}: {} {}", "", line.no(), label, comment_str)
            }
            (None, _) => format!("{:24}| {:>4}: {}", "", line.no(), comment_str),
        };
        out.push(body);
    }

    out.push(format!("{}+{}", "-".repeat(24), "-".repeat(53)));
    out
}

pub fn print_dump(path: &str, lines: &[Line], words: &[Word]) {
    for row in format_dump(path, lines, words) {
        println!("{}", row);
    }
}

#[test]
fn dump_lists_every_source_line() {
    use crate::assembler::Assembler;

    let mut asm = Assembler::new("// add\n(START)\n@2\nD=A").unwrap();
    let words: Vec<Word> = asm.encode().collect::<Result<_, _>>().unwrap();
    let rows = format_dump("add.asm", asm.lines(), &words);

    // header + 4 lines + footer
    assert_eq!(rows.len(), 6);
    assert!(rows[0].contains("[add.asm]"));
    assert!(rows[3].starts_with("[0000] 0000000000000010"));
    assert!(rows[4].starts_with("[0001] 1110110000010000"));
}
