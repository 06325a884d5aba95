use color_print::cprintln;
use sicasm::line::Source;
use sicasm::{objfile, pass1, pass2, report, Assembly, Error, UnitError};
use std::path::Path;
use std::process::ExitCode;

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
    /// Input files, assembled one after another
    #[clap(default_value = "main.asm")]
    input: Vec<String>,

    /// Directory for the object files (<input stem>.obj)
    #[clap(short, long, default_value = ".")]
    out_dir: String,

    /// Dump per-line listing
    #[clap(short, long)]
    dump: bool,

    /// Do not print the symbol and location tables
    #[clap(short, long)]
    quiet: bool,
}

fn main() -> ExitCode {
    use clap::Parser;

    let args: Args = Args::parse();
    println!("SIC/XE Assembler");

    let mut failed = vec![];
    for path in &args.input {
        if let Err(err) = run(path, &args) {
            failed.push(err);
        }
    }

    println!("----------------------------------------------------");
    if failed.is_empty() {
        cprintln!("<g,s>Assembled</> {} file(s)", args.input.len());
        ExitCode::SUCCESS
    } else {
        for err in &failed {
            cprintln!("<r,s>Failed</>: {}", err);
        }
        ExitCode::FAILURE
    }
}

/// Assemble one source unit. Errors stop this unit only.
fn run(path: &str, args: &Args) -> Result<(), UnitError> {
    println!("----------------------------------------------------");
    println!("  < {}", path);

    let src = Source::read(path).map_err(|e| {
        cprintln!("<red,bold>error</>: {}", e);
        UnitError::new(path, e)
    })?;

    let fail = |e: Error| {
        e.print_diag(&src);
        UnitError::new(path, e)
    };

    println!("1. Pass 1: Resolve Addresses");
    let resolution = pass1::resolve(&src).map_err(fail)?;
    println!("2. Pass 2: Generate Object Code");
    let generated = pass2::generate(&src, &resolution).map_err(fail)?;
    let asm = Assembly {
        resolution,
        generated,
    };
    for warning in asm.warnings() {
        warning.diag(&src);
    }
    println!(
        "  - {} symbols, {} object words",
        asm.resolution.symbols.len(),
        asm.generated.emitted.len()
    );

    let out = objfile::output_path(path, Path::new(&args.out_dir));
    println!("3. Write Object File");
    println!("  > {}", out.display());
    objfile::write(&out, &asm.generated).map_err(fail)?;

    if !args.quiet {
        println!("{}", report::render(&src, &asm.resolution));
    }
    if args.dump {
        println!("{}", report::dump(&src, &asm.generated));
    }
    Ok(())
}
