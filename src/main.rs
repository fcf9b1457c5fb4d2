use std::process::ExitCode;

use calcapi::{api::handle_calculate, calculate};
use clap::Parser;
use tracing_subscriber::EnvFilter;

/// calcapi evaluates arithmetic expressions with `+`, `-`, `*`, `/` and
/// parentheses.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Treats the input as a JSON request body such as
    /// `{"expression":"2+2"}` and prints the status code and response body.
    #[arg(short, long)]
    request: bool,

    /// Logs every stage of the calculation to stderr.
    #[arg(short, long)]
    verbose: bool,

    /// The expression, or the request body with `--request`.
    #[arg(allow_hyphen_values = true)]
    contents: String,
}

fn init_logging(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };

    tracing_subscriber::fmt().with_env_filter(filter)
                             .with_writer(std::io::stderr)
                             .init();
}

fn main() -> ExitCode {
    let args = Args::parse();
    init_logging(args.verbose);

    if args.request {
        let response = handle_calculate(args.contents.as_bytes());
        println!("{} {}", response.status.as_u16(), response.body);
        return if response.status.is_success() { ExitCode::SUCCESS } else { ExitCode::FAILURE };
    }

    match calculate(&args.contents) {
        Ok(value) => {
            println!("{value}");
            ExitCode::SUCCESS
        },
        Err(e) => {
            eprintln!("{e}");
            ExitCode::FAILURE
        },
    }
}
