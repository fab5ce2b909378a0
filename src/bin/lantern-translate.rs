use std::io::{self, Read, Write};
use std::process;

use clap::{ArgAction, Parser, ValueEnum};
use lantern_bridge::{translate, Rule};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum RuleArg {
    All,
    DimSize,
    DimRange,
    MaxIndex,
}

impl RuleArg {
    fn apply(self, msg: &str) -> String {
        match self {
            RuleArg::All => translate(msg),
            RuleArg::DimSize => Rule::DimensionSize.apply(msg),
            RuleArg::DimRange => Rule::DimensionRange.apply(msg),
            RuleArg::MaxIndex => Rule::MaxIndex.apply(msg),
        }
    }
}

#[derive(Parser, Debug)]
#[command(
    version,
    about = "Rewrite Lantern error messages to one-based dimension and index numbers.",
    long_about = None
)]
struct Cli {
    /// Apply only this rule.
    #[arg(long, short = 'r', value_enum, default_value_t = RuleArg::All)]
    rule: RuleArg,

    /// Raise log verbosity (repeat for more).
    #[arg(long, short = 'v', action = ArgAction::Count)]
    verbose: u8,

    /// Messages to translate, one per output line. Reads stdin when omitted.
    messages: Vec<String>,
}

fn main() {
    let cli = Cli::parse();

    let default_filter = match cli.verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .init();

    if !cli.messages.is_empty() {
        for msg in &cli.messages {
            println!("{}", cli.rule.apply(msg));
        }
        return;
    }

    let mut input = String::new();
    if let Err(e) = io::stdin().read_to_string(&mut input) {
        eprintln!("error: failed to read stdin: {e}");
        process::exit(1);
    }
    log::debug!("read {} bytes from stdin", input.len());

    let out = cli.rule.apply(&input);
    let mut stdout = io::stdout().lock();
    if let Err(e) = stdout.write_all(out.as_bytes()).and_then(|_| stdout.flush()) {
        eprintln!("error: failed to write stdout: {e}");
        process::exit(1);
    }
}
