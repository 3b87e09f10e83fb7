use std::error::Error;
use std::fs;
use std::io::{self, Read, Write};
use std::path::Path;

use clap::{Parser, Subcommand, ValueEnum};
use textbuilder::compat::{canonicalize_filename, fsync};
use textbuilder::{TextBuilder, Uri};
use tracing::debug;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "textbuilder", version, about = "Escape and re-indent text")]
struct Args {
    /// Log rejected input and buffer growth to stderr. Overrides RUST_LOG.
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Escape input for one target syntax. A single trailing newline is ignored.
    Escape {
        #[arg(value_enum)]
        context: ContextArg,

        /// Input file path. Omit or use '-' to read from stdin.
        input: Option<String>,

        /// Template with one {} placeholder (not used by shell and uri).
        #[arg(short, long, default_value = "{}")]
        template: String,

        /// Output file path (prints to stdout if omitted).
        #[arg(short, long, value_name = "file")]
        output: Option<String>,
    },
    /// Indent every non-empty line of the input.
    Indent {
        /// Input file path. Omit or use '-' to read from stdin.
        input: Option<String>,

        /// Indentation width in spaces.
        #[arg(short, long, value_name = "number", default_value_t = 2)]
        width: usize,

        /// Output file path (prints to stdout if omitted).
        #[arg(short, long, value_name = "file")]
        output: Option<String>,
    },
    /// Split a URI into components and print them as JSON.
    Uri {
        uri: String,

        /// Print the re-assembled URI instead of its components.
        #[arg(long)]
        format: bool,
    },
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum ContextArg {
    Xml,
    Quoted,
    Sexpr,
    Regex,
    Sql,
    Shell,
    Uri,
}

fn main() {
    let args = Args::parse();
    init_logging(args.verbose);
    if let Err(err) = run(args) {
        eprintln!("ERROR  {err}");
        std::process::exit(1);
    }
}

fn init_logging(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .init();
}

fn run(args: Args) -> Result<(), Box<dyn Error>> {
    match args.command {
        Command::Escape {
            context,
            input,
            template,
            output,
        } => {
            let text = read_input(input.as_deref())?;
            let text = text.strip_suffix('\n').unwrap_or(&text);
            let mut buf = TextBuilder::new();
            match context {
                ContextArg::Xml => buf.escape_xml(&template, text)?,
                ContextArg::Quoted => buf.escape_quoted(&template, text)?,
                ContextArg::Sexpr => buf.escape_sexpr(&template, text)?,
                ContextArg::Regex => buf.escape_regex(&template, text)?,
                ContextArg::Sql => buf.escape_sql(&template, text)?,
                ContextArg::Shell => buf.escape_shell(text)?,
                ContextArg::Uri => buf.uri_encode(text)?,
            }
            write_output(output.as_deref(), buf.content_and_reset().as_bytes())
        }
        Command::Indent {
            input,
            width,
            output,
        } => {
            let text = read_input(input.as_deref())?;
            let mut source = TextBuilder::new();
            source.add(&text)?;

            let mut buf = TextBuilder::new();
            buf.set_indent(width);
            if !text.is_empty() && !text.starts_with('\n') {
                buf.apply_indent()?;
            }
            buf.add_buffer(&mut source)?;
            debug!(width, bytes = buf.len(), "re-indented input");
            write_output(output.as_deref(), buf.content_and_reset().as_bytes())
        }
        Command::Uri { uri, format } => {
            let parsed = Uri::parse(&uri)?;
            let rendered = if format {
                parsed.format()?
            } else {
                serde_json::to_string_pretty(&parsed)?
            };
            write_output(None, rendered.as_bytes())
        }
    }
}

fn read_input(input: Option<&str>) -> Result<String, Box<dyn Error>> {
    match input {
        None | Some("-") => {
            let mut buf = String::new();
            io::stdin().read_to_string(&mut buf)?;
            Ok(buf)
        }
        Some(path) => Ok(fs::read_to_string(path)?),
    }
}

fn write_output(path: Option<&str>, data: &[u8]) -> Result<(), Box<dyn Error>> {
    match path {
        Some(path) if path != "-" => {
            let mut file = fs::File::create(path)?;
            file.write_all(data)?;
            fsync(&file)?;
            let shown = canonicalize_filename(Path::new(path), None)?;
            println!("✔ Wrote {}", shown.display());
            Ok(())
        }
        _ => {
            let stdout = io::stdout();
            let mut handle = stdout.lock();
            handle.write_all(data)?;
            handle.flush()?;
            Ok(())
        }
    }
}
