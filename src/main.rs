use std::{
    fs::File,
    io::{self, BufReader, IsTerminal},
    path::{Path, PathBuf},
    process::ExitCode,
};

use clap::Parser;
use env_logger::Env;
use log::LevelFilter;
use lrcalc::{
    error::SessionError,
    eval_line,
    session::{
        DEFAULT_PRECISION, DEFAULT_PROMPT, ErrorPolicy, ReaderSource, Session, SessionConfig,
        SessionSummary, TerminalSource, format_answer,
    },
};

/// lrcalc is a calculator that evaluates `+ - * /` strictly from left to
/// right, so `2+3*4` is `20`.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Reads expressions line by line from a file instead of standard input.
    #[arg(short, long, conflicts_with = "expression")]
    file: Option<PathBuf>,

    /// Number of digits printed after the decimal point.
    #[arg(short, long, default_value_t = DEFAULT_PRECISION)]
    precision: usize,

    /// Prompt shown before each line is read.
    #[arg(long, default_value = DEFAULT_PROMPT)]
    prompt: String,

    /// Stops at the first invalid line instead of reporting it and moving on.
    #[arg(short, long)]
    abort_on_error: bool,

    /// Prints debug logging to standard error.
    #[arg(short, long)]
    verbose: bool,

    /// A single expression to evaluate. Starts a session when omitted.
    #[arg(allow_hyphen_values = true)]
    expression: Option<String>,
}

fn main() -> ExitCode {
    let args = Args::parse();
    init_logging(args.verbose);

    if let Some(expression) = &args.expression {
        return match eval_line(expression) {
            Ok(answer) => {
                println!("{}", format_answer(answer, args.precision));
                ExitCode::SUCCESS
            },
            Err(e) => {
                eprintln!("{e}");
                ExitCode::FAILURE
            },
        };
    }

    let on_error = if args.abort_on_error {
        ErrorPolicy::Abort
    } else {
        ErrorPolicy::Continue
    };
    let session = Session::new(SessionConfig { prompt: args.prompt,
                                               precision: args.precision,
                                               on_error });

    match run_session(&session, args.file.as_deref()) {
        Ok(summary) => {
            log::info!("{} lines evaluated, {} rejected",
                       summary.evaluated,
                       summary.rejected);
            ExitCode::SUCCESS
        },
        Err(e) => {
            eprintln!("{e}");
            ExitCode::FAILURE
        },
    }
}

/// Picks the line source and runs the session to completion.
fn run_session(session: &Session,
               file: Option<&Path>)
               -> Result<SessionSummary, SessionError> {
    let mut out = io::stdout();
    let mut err = io::stderr();

    if let Some(path) = file {
        let handle = File::open(path).map_err(|error| {
                                        SessionError::InputFile { path: path.to_path_buf(),
                                                                  error }
                                    })?;
        let reader = BufReader::new(handle);
        log::debug!("reading from {}", path.display());
        session.run(&mut ReaderSource::new(reader, io::sink()), &mut out, &mut err)
    } else if io::stdin().is_terminal() {
        log::debug!("reading from terminal");
        session.run(&mut TerminalSource::new()?, &mut out, &mut err)
    } else {
        log::debug!("reading from standard input");
        session.run(&mut ReaderSource::new(io::stdin().lock(), io::stdout()),
                    &mut out,
                    &mut err)
    }
}

fn init_logging(verbose: bool) {
    let default_level = if verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Warn
    };
    let _ = env_logger::Builder::from_env(Env::default().default_filter_or(default_level.as_str()))
        .try_init();
}
