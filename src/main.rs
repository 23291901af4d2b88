//! Terminal front-end for the scipro calculator.
//!
//! With keystrokes on the command line it evaluates them once and prints
//! the result. Without, it reads keystroke lines from stdin until EOF or
//! `:quit`.

use anyhow::{Context, Result, bail};
use clap::Parser;
use scipro::calculator::{AngleMode, copy_to_clipboard, looks_like_keystrokes};
use scipro::feedback::Feedback;
use scipro::theme::{ButtonGroup, Swatch, render_keypad};
use scipro::{Config, Readout, Session};
use std::io::{self, BufRead, Write};
use std::path::{Path, PathBuf};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

/// Scientific calculator driven by keystrokes.
#[derive(Parser, Debug)]
#[command(name = "scipro", version, about)]
struct Cli {
    /// Keystrokes to evaluate, e.g. `5 + 3 =`. Starts a REPL when omitted.
    #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
    keys: Vec<String>,

    /// Start in radians instead of the configured angle mode.
    #[arg(long)]
    radians: bool,

    /// Disable the key-press bell.
    #[arg(long)]
    no_sound: bool,

    /// Print readouts as JSON.
    #[arg(long)]
    json: bool,

    /// Config file to use instead of the default location.
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let config_path = match cli.config.clone() {
        Some(path) => path,
        None => Config::default_path()?,
    };
    let mut config = Config::load(&config_path)
        .with_context(|| format!("loading {}", config_path.display()))?;

    let angle_mode = if cli.radians {
        AngleMode::Radians
    } else {
        config.angle_mode
    };
    let feedback = if config.sound && !cli.no_sound {
        Feedback::spawn(|_tone| {
            // The terminal has one pitch; the bell stands in for every tone.
            let mut stderr = io::stderr();
            let _ = stderr.write_all(b"\x07");
            let _ = stderr.flush();
        })
        .context("starting feedback worker")?
    } else {
        Feedback::disabled()
    };

    let mut session = Session::new(angle_mode, feedback);

    if !cli.keys.is_empty() {
        session.handle_keystrokes(&cli.keys.join(" "))?;
        print_readout(&session.readout(), cli.json)?;
        return Ok(());
    }

    info!(path = %config_path.display(), "starting REPL");
    run_repl(&mut session, &mut config, &config_path, cli.json)
}

fn init_logging(verbose: u8) {
    let filter = match verbose {
        0 => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn run_repl(
    session: &mut Session,
    config: &mut Config,
    config_path: &Path,
    json: bool,
) -> Result<()> {
    let stdin = io::stdin();
    print_readout(&session.readout(), json)?;

    for line in stdin.lock().lines() {
        let line = line.context("reading stdin")?;

        if looks_like_keystrokes(&line) {
            match session.handle_keystrokes(&line) {
                Ok(_) => print_readout(&session.readout(), json)?,
                Err(e) => eprintln!("{}", e),
            }
            continue;
        }

        let mut words = line.split_whitespace();
        match words.next() {
            None => {}
            Some(":quit") | Some(":q") => break,
            Some(":keypad") => {
                println!(
                    "{}",
                    render_keypad(&config.theme, session.state().angle_mode.label())
                );
            }
            Some(":state") => {
                println!("{}", serde_json::to_string_pretty(session.state())?);
            }
            Some(":copy") => {
                let readout = session.readout();
                match readout.text_for_clipboard() {
                    Some(text) => match copy_to_clipboard(text) {
                        Ok(()) => println!("copied {}", text),
                        Err(e) => warn!("{}", e),
                    },
                    None => eprintln!("nothing to copy"),
                }
            }
            Some(":theme") => match set_theme(config, words.next(), words.next()) {
                Ok((group, swatch)) => {
                    if let Err(e) = config.save(config_path) {
                        warn!("theme not saved: {}", e);
                    }
                    println!("{} = {}", group.name(), swatch);
                }
                Err(e) => eprintln!("{}", e),
            },
            Some(other) => eprintln!("unknown command {}", other),
        }
    }

    Ok(())
}

fn set_theme(
    config: &mut Config,
    group: Option<&str>,
    swatch: Option<&str>,
) -> Result<(ButtonGroup, Swatch)> {
    let (Some(group), Some(swatch)) = (group, swatch) else {
        bail!("usage: :theme <group> <colour>");
    };

    let group: ButtonGroup = group.parse().map_err(anyhow::Error::msg)?;
    let swatch: Swatch = swatch.parse().map_err(anyhow::Error::msg)?;
    config.theme.set(group, swatch);
    Ok((group, swatch))
}

fn print_readout(readout: &Readout, json: bool) -> Result<()> {
    if json {
        println!("{}", serde_json::to_string(readout)?);
    } else {
        if !readout.expression.is_empty() {
            println!("  {}", readout.expression);
        }
        println!("{} {}", readout.angle_mode.label(), readout.display_result);
    }
    Ok(())
}
