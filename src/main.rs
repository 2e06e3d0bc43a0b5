use clap::Parser;
use mathparse::{Compile, CompiledProgram, DEFAULT_MAX_DEPTH, functions};
use rustyline::completion::{Completer, Pair};
use rustyline::error::ReadlineError;
use rustyline::highlight::Highlighter;
use rustyline::hint::Hinter;
use rustyline::history::DefaultHistory;
use rustyline::validate::Validator;
use rustyline::{Context, Editor, Helper};
use std::process::ExitCode;
use tracing::debug;

/// mathparse - compile and evaluate single-variable math expressions
#[derive(Parser, Debug)]
#[command(name = "mathparse")]
#[command(about = "Evaluate math expressions in one variable x", long_about = None)]
struct Args {
    /// Value substituted for x in one-shot mode
    #[arg(short = 'x', long = "x", default_value_t = 0.0, allow_negative_numbers = true)]
    x: f64,

    /// Print the compiled bytecode before the result
    #[arg(long)]
    bytecode: bool,

    /// Maximum nesting of parentheses and function calls
    #[arg(long, default_value_t = DEFAULT_MAX_DEPTH)]
    max_depth: usize,

    /// Expression to evaluate (if not provided, starts an interactive shell)
    expression: Option<String>,
}

const PROMPT: &str = ">> ";
const SEPARATOR: &str = "--------------------";

const COMMANDS: &[&str] = &["help", "usage", "description", "exit"];

/// Shell keywords, matched case-insensitively.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Command {
    Help,
    Usage,
    Description,
    Exit,
}

impl Command {
    fn parse(line: &str) -> Option<Self> {
        match line.trim().to_ascii_lowercase().as_str() {
            "help" => Some(Command::Help),
            "usage" => Some(Command::Usage),
            "description" => Some(Command::Description),
            "exit" => Some(Command::Exit),
            _ => None,
        }
    }
}

fn usage_text() -> String {
    "Usage: type any expression built from the functions listed in the description\n\
     example: sin(2*x)*cos(x)"
        .to_string()
}

fn description_text() -> String {
    let mut out = format!("Description:\n{SEPARATOR}\n\n");
    out.push_str("Compiles and evaluates expressions in one variable x.\n");
    out.push_str("Operators: + - * / ^ (power groups left to right: 2^3^2 is 64)\n");
    out.push_str("Numbers like 45.3e-13 are supported.\n\nFunctions:\n");
    for def in functions::all() {
        out.push_str(&format!("  {:<7} {}\n", def.name, def.description));
    }
    out.push_str(&format!(
        "\nNotes:\n{SEPARATOR}\n\
         1. Trigonometric functions work in radians\n\
         2. sin x is not valid, write sin(x) or sin (x)\n\
         3. Whitespace between tokens is ignored\n\
         4. Results that are undefined or infinite print as 'undefined'\n"
    ));
    out
}

fn help_text() -> String {
    format!(
        "Commands: {}\nAnything else is evaluated as an expression.",
        COMMANDS.join(", ")
    )
}

fn format_result(value: f64) -> String {
    if value.is_nan() {
        "undefined".to_string()
    } else {
        value.to_string()
    }
}

/// Completes function names and shell commands.
struct ShellHelper {
    words: Vec<&'static str>,
}

impl ShellHelper {
    fn new() -> Self {
        let mut words: Vec<&'static str> = functions::names().chain(COMMANDS.iter().copied()).collect();
        words.sort_unstable();
        Self { words }
    }
}

impl Completer for ShellHelper {
    type Candidate = Pair;

    fn complete(
        &self,
        line: &str,
        pos: usize,
        _ctx: &Context<'_>,
    ) -> rustyline::Result<(usize, Vec<Pair>)> {
        let before = &line[..pos];
        let start = before
            .char_indices()
            .rfind(|&(_, c)| !c.is_ascii_alphanumeric())
            .map_or(0, |(i, c)| i + c.len_utf8());
        let partial = before[start..].to_ascii_lowercase();
        if partial.is_empty() {
            return Ok((pos, Vec::new()));
        }

        let matches = self
            .words
            .iter()
            .filter(|w| w.starts_with(&partial))
            .map(|w| Pair {
                display: (*w).to_string(),
                replacement: (*w).to_string(),
            })
            .collect();
        Ok((start, matches))
    }
}

impl Hinter for ShellHelper {
    type Hint = String;
}

impl Highlighter for ShellHelper {}

impl Validator for ShellHelper {}

impl Helper for ShellHelper {}

type ShellEditor = Editor<ShellHelper, DefaultHistory>;

/// Parses one line of input as the value of x.
fn parse_variable(line: &str) -> Result<f64, String> {
    let text = line.trim();
    text.parse::<f64>()
        .map_err(|_| format!("'{text}' is not a number, try again"))
}

/// Asks for x until the line parses as a number. `None` on Ctrl-C/Ctrl-D.
fn read_variable(editor: &mut ShellEditor) -> Result<Option<f64>, ReadlineError> {
    loop {
        match editor.readline("x = ") {
            Ok(line) => match parse_variable(&line) {
                Ok(value) => return Ok(Some(value)),
                Err(msg) => println!("{msg}"),
            },
            Err(ReadlineError::Interrupted | ReadlineError::Eof) => return Ok(None),
            Err(e) => return Err(e),
        }
    }
}

fn run_shell(compiler: &Compile) -> Result<(), ReadlineError> {
    let mut editor = ShellEditor::new()?;
    editor.set_helper(Some(ShellHelper::new()));

    println!("{}\n\n{}\n", description_text(), usage_text());
    println!("Type help, usage or description for assistance and exit to leave (or Ctrl+D)");

    loop {
        let line = match editor.readline(PROMPT) {
            Ok(line) => line,
            Err(ReadlineError::Interrupted | ReadlineError::Eof) => break,
            Err(e) => return Err(e),
        };
        if line.trim().is_empty() {
            continue;
        }
        if let Err(e) = editor.add_history_entry(line.as_str()) {
            debug!(%e, "history entry not recorded");
        }

        match Command::parse(&line) {
            Some(Command::Help) => println!("{}", help_text()),
            Some(Command::Usage) => println!("{}", usage_text()),
            Some(Command::Description) => println!("{}", description_text()),
            Some(Command::Exit) => break,
            None => {
                let program = match compiler.compile_str(&line) {
                    Ok(program) => program,
                    Err(e) => {
                        println!("{e}");
                        continue;
                    }
                };
                let x = if program.uses_variable() {
                    let Some(x) = read_variable(&mut editor)? else {
                        break;
                    };
                    println!("Entered value (x = {x})");
                    println!("The given expression is: {}", program.source());
                    x
                } else {
                    0.0
                };
                println!("{}", format_result(program.evaluate(x)));
            }
        }
    }

    println!("Good bye.");
    Ok(())
}

fn run_once(compiler: &Compile, expression: &str, x: f64, bytecode: bool) -> ExitCode {
    let program: CompiledProgram = match compiler.compile_str(expression) {
        Ok(program) => program,
        Err(e) => {
            eprintln!("error: {e}");
            return ExitCode::FAILURE;
        }
    };
    if bytecode {
        println!("{program}");
    }
    println!("{}", format_result(program.evaluate(x)));
    ExitCode::SUCCESS
}

fn main() -> ExitCode {
    let args = Args::parse();

    // Initialize logging subscriber
    use tracing_subscriber::{EnvFilter, fmt};

    // RUST_LOG controls the level; default to WARN if not set
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();

    debug!(?args, "starting");
    let compiler = Compile::new().max_depth(args.max_depth);

    if let Some(expression) = args.expression {
        return run_once(&compiler, &expression, args.x, args.bytecode);
    }

    match run_shell(&compiler) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Readline error: {e}");
            ExitCode::FAILURE
        }
    }
}
