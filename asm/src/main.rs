use color_print::{ceprintln, cprintln};
use hasm::{emit::Format, Error};

const HELP_TEMPLATE: &str = "\
{before-help}{bin} {version}
  {about}

{usage-heading}
{tab}{usage}

{all-args}{after-help}";

#[derive(Debug, clap::Parser)]
#[clap(version, about, help_template = HELP_TEMPLATE)]
struct Args {
    /// Input file (HACK assembly)
    input: String,

    /// Output file
    output: String,

    /// Output format
    #[clap(short, long, value_enum, default_value = "text")]
    format: Format,

    /// Dump listing and symbol table
    #[clap(short, long)]
    dump: bool,

    /// Print progress and warnings
    #[clap(short, long)]
    verbose: bool,
}

fn read_source(path: &str) -> Result<String, Error> {
    if !std::path::Path::new(path).is_file() {
        return Err(Error::InputNotFound(path.to_string()));
    }
    std::fs::read_to_string(path).map_err(|err| Error::FileRead(path.to_string(), err))
}

fn fail(err: Error) -> ! {
    ceprintln!("<red,bold>error</>: {}", err);
    std::process::exit(1);
}

fn main() {
    use clap::Parser;

    let args: Args = Args::parse();
    if args.verbose {
        cprintln!("<s>HACK Assembler</>");
        println!("1. Read Source");
        println!("  < {}", args.input);
    }

    let src = read_source(&args.input).unwrap_or_else(|err| fail(err));
    let raw: Vec<&str> = src.lines().collect();

    if args.verbose {
        println!("2. Resolve Labels & Generate Binary");
    }
    let asm = match hasm::assemble(&src) {
        Ok(asm) => asm,
        Err(err) => {
            err.print_diag(&args.input, &raw);
            std::process::exit(1);
        }
    };

    if args.verbose {
        for (line, msg) in &asm.msgs {
            msg.print(&args.input, *line, raw.get(*line).copied().unwrap_or(""));
        }
        println!("  > {}", args.output);
    }

    let bytes = hasm::emit::emit(&asm.words(), args.format);
    std::fs::write(&args.output, bytes)
        .unwrap_or_else(|err| fail(Error::FileWrite(args.output.clone(), err)));

    if args.dump {
        hasm::util::print_dump(&args.input, &raw, &asm);
    }
}
