mod app;
mod command;
mod config;
mod consts;
mod game;
mod highscores;
mod util;
use crate::app::App;
use crate::config::Config;
use crate::game::Game;
use crate::highscores::HighScore;
use anyhow::Context;
use lexopt::{Arg, Parser};
use simplelog::{LevelFilter, WriteLogger};
use std::io::{self, ErrorKind};
use std::path::PathBuf;
use std::process::ExitCode;

const USAGE: &str = "\
Usage: ticksnake [<options>]

Play Snake in your terminal

Options:
  -c <file>, --config <file>  Read configuration from <file>
      --log-file <file>       Write log messages to <file>
  -v, --verbose               Log debug messages as well
  -h, --help                  Display this help message and exit
  -V, --version               Show the program version and exit
";

/// What the program was asked to do on the command line
#[derive(Clone, Debug, Eq, PartialEq)]
enum Mode {
    Run(Arguments),
    Help,
    Version,
}

impl Mode {
    fn from_parser(mut parser: Parser) -> Result<Mode, lexopt::Error> {
        let mut args = Arguments::default();
        while let Some(arg) = parser.next()? {
            match arg {
                Arg::Short('c') | Arg::Long("config") => {
                    args.config = Some(PathBuf::from(parser.value()?));
                }
                Arg::Long("log-file") => args.log_file = Some(PathBuf::from(parser.value()?)),
                Arg::Short('v') | Arg::Long("verbose") => args.verbose = true,
                Arg::Short('h') | Arg::Long("help") => return Ok(Mode::Help),
                Arg::Short('V') | Arg::Long("version") => return Ok(Mode::Version),
                _ => return Err(arg.unexpected()),
            }
        }
        Ok(Mode::Run(args))
    }
}

#[derive(Clone, Debug, Default, Eq, PartialEq)]
struct Arguments {
    config: Option<PathBuf>,
    log_file: Option<PathBuf>,
    verbose: bool,
}

fn main() -> ExitCode {
    match Mode::from_parser(Parser::from_env()) {
        Ok(Mode::Run(args)) => exit(run(args)),
        Ok(Mode::Help) => {
            print!("{USAGE}");
            ExitCode::SUCCESS
        }
        Ok(Mode::Version) => {
            println!("{} {}", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"));
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("ticksnake: {e}\n\n{USAGE}");
            ExitCode::from(2)
        }
    }
}

fn run(args: Arguments) -> anyhow::Result<()> {
    let (config_path, allow_missing) = match args.config {
        Some(p) => (p, false),
        None => (Config::default_path()?, true),
    };
    let config = Config::load(&config_path, allow_missing).with_context(|| {
        format!(
            "failed to load configuration from {}",
            config_path.display()
        )
    })?;
    if let Some(path) = args.log_file.as_deref().or_else(|| config.log_file()) {
        let level = if args.verbose {
            LevelFilter::Debug
        } else {
            LevelFilter::Info
        };
        let file = fs_err::File::create(path).context("failed to create log file")?;
        WriteLogger::init(level, simplelog::Config::default(), file)
            .context("failed to initialize logger")?;
    }
    log::info!(
        "Starting {} {} with configuration from {}",
        env!("CARGO_PKG_NAME"),
        env!("CARGO_PKG_VERSION"),
        config_path.display()
    );
    let high_score = HighScore::load(config.high_score_store());
    let game = Game::new(config.board(), config.palette(), high_score);
    let terminal = ratatui::init();
    let r = App::new(game).run(terminal);
    ratatui::restore();
    if let Err(ref e) = r {
        log::error!("Exiting on I/O error: {e}");
    }
    r.map_err(Into::into)
}

fn exit(r: anyhow::Result<()>) -> ExitCode {
    match r {
        Ok(()) => ExitCode::SUCCESS,
        Err(e)
            if e.downcast_ref::<io::Error>()
                .is_some_and(|e| e.kind() == ErrorKind::BrokenPipe) =>
        {
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("ticksnake: {e:#}");
            ExitCode::from(2)
        }
    }
}
