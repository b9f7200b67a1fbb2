use color_print::cprintln;
use hasm::{util, Assembler, Error, LineError};
use std::{
    fs::File,
    io::{BufWriter, Write},
    path::Path,
};

const HELP_TEMPLATE: &str = "\
{before-help}{bin} {version}
  {author}
  {about}

{usage-heading}
{tab}{usage}

{all-args}{after-help}";

#[derive(Debug, clap::Parser)]
#[clap(author, version, about, help_template = HELP_TEMPLATE)]
struct Args {
    /// Input assembly file
    input: String,

    /// Output file [default: input path with `.hack` extension]
    #[clap(short, long)]
    output: Option<String>,

    /// Dump assembly listing
    #[clap(short, long)]
    dump: bool,

    /// Write the symbol table as YAML
    #[clap(short, long)]
    symbols: Option<String>,
}

fn main() {
    println!("Hack Assembler");

    let code = match run() {
        Ok(()) => {
            cprintln!("<green,bold>done</>: Files outputted successfully!");
            0
        }
        Err(err) => {
            cprintln!("<red,bold>failed</>: {} (code {})", err, err.code());
            err.code()
        }
    };
    std::process::exit(code);
}

fn run() -> Result<(), Error> {
    use clap::{error::ErrorKind, Parser};

    let args = match Args::try_parse() {
        Ok(args) => args,
        Err(err) => match err.kind() {
            ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => err.exit(),
            _ => {
                let _ = err.print();
                return Err(Error::Usage("expected exactly one input file".to_string()));
            }
        },
    };
    let output = args
        .output
        .clone()
        .unwrap_or_else(|| default_output(&args.input));

    println!("1. Read File & Collect Labels");
    println!("  < {}", args.input);
    let source = std::fs::read_to_string(&args.input)
        .map_err(|e| Error::FileOpen(args.input.clone(), e))?;
    let file = File::create(&output).map_err(|e| Error::FileCreate(output.clone(), e))?;

    let mut asm = Assembler::new(&source).map_err(|e| diag(&args.input, e))?;
    println!("  - found #{} labels", asm.idents().labels().len());

    println!("2. Resolve Symbols & Generate Binary");
    println!("  > {}", output);
    let mut writer = BufWriter::new(file);
    let mut words = vec![];
    for word in asm.encode() {
        match word {
            Ok(word) => {
                writeln!(writer, "{}", word.inst.to_bin_string())
                    .map_err(|e| Error::FileWrite(output.clone(), e))?;
                words.push(word);
            }
            Err(err) => {
                // Keep the lines encoded so far.
                writer
                    .flush()
                    .map_err(|e| Error::FileWrite(output.clone(), e))?;
                return Err(diag(&args.input, err));
            }
        }
    }
    writer
        .flush()
        .map_err(|e| Error::FileWrite(output.clone(), e))?;
    println!(
        "  - wrote #{} words, allocated #{} variables",
        words.len(),
        asm.idents().variables().count()
    );

    if let Some(path) = &args.symbols {
        println!("  > {}", path);
        let file = File::create(path).map_err(|e| Error::FileCreate(path.clone(), e))?;
        let mut writer = BufWriter::new(file);
        serde_yaml::to_writer(&mut writer, &asm.idents().symbols())
            .map_err(|e| Error::SymbolDump(path.clone(), e))?;
        writer
            .flush()
            .map_err(|e| Error::FileWrite(path.clone(), e))?;
    }

    if args.dump {
        util::print_dump(&args.input, asm.lines(), &words);
    }

    Ok(())
}

fn default_output(input: &str) -> String {
    Path::new(input)
        .with_extension("hack")
        .to_string_lossy()
        .into_owned()
}

fn diag(path: &str, err: LineError) -> Error {
    err.print_diag(path);
    err.error
}

#[test]
fn output_sits_next_to_the_input() {
    assert_eq!(default_output("Add.asm"), "Add.hack");
    assert_eq!(default_output("prog/max/Max.asm"), "prog/max/Max.hack");
    assert_eq!(default_output("noext"), "noext.hack");
    assert_eq!(default_output("dir.v1/Prog"), "dir.v1/Prog.hack");
}
