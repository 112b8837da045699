mod terminal;

use std::fmt;
use std::time::Duration;

use mole_core::GameConfig;
use mole_core::model::CandidateId;
use services::{EngineError, RoundEngine};
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing_subscriber::EnvFilter;

use crate::terminal::{TerminalAudio, TerminalPresenter};

/// How often the event loop lets due timers fire.
const POLL_INTERVAL: Duration = Duration::from_millis(50);

#[derive(Debug)]
enum ArgsError {
    MissingValue { flag: &'static str },
    UnknownArg(String),
    InvalidSeed { raw: String },
}

impl fmt::Display for ArgsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ArgsError::MissingValue { flag } => write!(f, "{flag} requires a value"),
            ArgsError::UnknownArg(arg) => write!(f, "unknown argument: {arg}"),
            ArgsError::InvalidSeed { raw } => write!(f, "invalid --seed value: {raw}"),
        }
    }
}

impl std::error::Error for ArgsError {}

fn require_value(
    args: &mut impl Iterator<Item = String>,
    flag: &'static str,
) -> Result<String, ArgsError> {
    args.next().ok_or(ArgsError::MissingValue { flag })
}

fn print_usage() {
    eprintln!("Usage:");
    eprintln!("  cargo run -p app -- [--seed <u64>] [--mute]");
    eprintln!();
    eprintln!("While playing:");
    eprintln!("  s        start (or restart) a session");
    eprintln!("  <n>      whack candidate n");
    eprintln!("  r        reset");
    eprintln!("  l        redraw the current candidates");
    eprintln!("  q        quit");
    eprintln!();
    eprintln!("Environment:");
    eprintln!("  MOLE_SEED  RNG seed (overridden by --seed)");
    eprintln!("  MOLE_LOG   tracing filter, e.g. `services=debug` (default: warn)");
}

#[derive(Debug, PartialEq, Eq)]
struct Args {
    seed: Option<u64>,
    mute: bool,
}

impl Args {
    fn parse(
        args: &mut impl Iterator<Item = String>,
        env_seed: Option<String>,
    ) -> Result<Option<Self>, ArgsError> {
        let mut seed = match env_seed {
            Some(raw) => {
                let parsed = raw.trim().parse::<u64>();
                Some(parsed.map_err(|_| ArgsError::InvalidSeed { raw })?)
            }
            None => None,
        };
        let mut mute = false;

        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--seed" => {
                    let value = require_value(args, "--seed")?;
                    let parsed = value
                        .parse::<u64>()
                        .map_err(|_| ArgsError::InvalidSeed { raw: value.clone() })?;
                    seed = Some(parsed);
                }
                "--mute" => mute = true,
                "--help" | "-h" => return Ok(None),
                _ => return Err(ArgsError::UnknownArg(arg)),
            }
        }

        Ok(Some(Self { seed, mute }))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Command {
    Start,
    Reset,
    Relayout,
    Quit,
    Click(CandidateId),
}

impl Command {
    fn from_line(line: &str) -> Option<Self> {
        match line.trim() {
            "s" | "start" => Some(Self::Start),
            "r" | "reset" => Some(Self::Reset),
            "l" | "layout" => Some(Self::Relayout),
            "q" | "quit" | "exit" => Some(Self::Quit),
            other => other.parse::<CandidateId>().ok().map(Self::Click),
        }
    }
}

fn init_tracing() {
    let filter = EnvFilter::try_from_env("MOLE_LOG").unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

async fn run() -> Result<(), Box<dyn std::error::Error>> {
    let mut argv = std::env::args().skip(1);
    let Some(args) = Args::parse(&mut argv, std::env::var("MOLE_SEED").ok()).map_err(|e| {
        eprintln!("{e}");
        print_usage();
        e
    })?
    else {
        print_usage();
        return Ok(());
    };

    init_tracing();

    let config = GameConfig::standard();
    let mut engine = RoundEngine::new(
        TerminalPresenter::new(config.clone()),
        TerminalAudio::new(!args.mute),
    )
    .with_config(config);
    if let Some(seed) = args.seed {
        engine = engine.with_seed(seed);
    }
    tracing::info!(seed = ?args.seed, "engine ready");

    println!("Whack the creature standing at the target value. Type `s` to start.");

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    let mut ticker = tokio::time::interval(POLL_INTERVAL);
    ticker.set_missed_tick_behavior(tokio::time::MissedTickBehavior::Skip);

    loop {
        tokio::select! {
            _ = ticker.tick() => {
                engine.poll();
            }
            line = lines.next_line() => {
                let Some(line) = line? else {
                    break;
                };
                // Fire anything that came due while the line was being typed.
                engine.poll();
                match Command::from_line(&line) {
                    Some(Command::Start) => engine.start(),
                    Some(Command::Reset) => engine.reset(),
                    Some(Command::Relayout) => engine.relayout(),
                    Some(Command::Quit) => break,
                    Some(Command::Click(id)) => match engine.click(id) {
                        Ok(outcome) => tracing::debug!(?outcome, "click"),
                        Err(EngineError::NotPlaying) => println!("type `s` to start"),
                        Err(err) => tracing::debug!(%err, "click ignored"),
                    },
                    None if line.trim().is_empty() => {}
                    None => println!("unknown command: {}", line.trim()),
                }
            }
        }
    }

    Ok(())
}

#[tokio::main(flavor = "current_thread")]
async fn main() {
    if let Err(err) = run().await {
        eprintln!("{err}");
        std::process::exit(2);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str], env_seed: Option<&str>) -> Result<Option<Args>, ArgsError> {
        let mut iter = args.iter().map(|s| (*s).to_string());
        Args::parse(&mut iter, env_seed.map(str::to_string))
    }

    #[test]
    fn flag_seed_overrides_environment() {
        let args = parse(&["--seed", "42"], Some("7")).unwrap().unwrap();
        assert_eq!(
            args,
            Args {
                seed: Some(42),
                mute: false
            }
        );
        let args = parse(&["--mute"], Some("7")).unwrap().unwrap();
        assert_eq!(args.seed, Some(7));
        assert!(args.mute);
    }

    #[test]
    fn bad_arguments_are_reported() {
        assert!(matches!(
            parse(&["--seed"], None),
            Err(ArgsError::MissingValue { flag: "--seed" })
        ));
        assert!(matches!(
            parse(&["--seed", "abc"], None),
            Err(ArgsError::InvalidSeed { .. })
        ));
        assert!(matches!(
            parse(&["--fast"], None),
            Err(ArgsError::UnknownArg(_))
        ));
        assert!(matches!(parse(&[], Some("x")), Err(ArgsError::InvalidSeed { .. })));
        assert!(parse(&["--help"], None).unwrap().is_none());
    }

    #[test]
    fn commands_parse_from_lines() {
        assert_eq!(Command::from_line("s\n"), Some(Command::Start));
        assert_eq!(Command::from_line(" reset "), Some(Command::Reset));
        assert_eq!(Command::from_line("l"), Some(Command::Relayout));
        assert_eq!(Command::from_line("q"), Some(Command::Quit));
        assert_eq!(
            Command::from_line("3"),
            Some(Command::Click(CandidateId::new(3)))
        );
        assert_eq!(Command::from_line("whack"), None);
    }
}
