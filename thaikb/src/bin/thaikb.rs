use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{bail, Context, Result};
use clap::{Args, Parser, Subcommand};
use thaikb::libthai_core::grammar::Strictness;
use thaikb::libthai_core::keymap::{self, KeyboardLayout, ShiftLevel};
use thaikb::libthai_core::{EditAction, EngineConfig, ThaiEngine, ValidationResult};
use thaikb::{check_text, simulate};

#[derive(Parser, Debug)]
#[command(author, version, about = "Thai keyboard input tools", long_about = None)]
struct Cli {
    /// Enable verbose output (repeat for more)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Type QWERTY keys into a simulated text field and print the result
    Type {
        /// Keys as typed, with {Name} for function keys, e.g. "dj{BackSpace}b"
        keys: String,

        #[command(flatten)]
        settings: Settings,

        /// Simulate a field that cannot report surrounding text
        #[arg(long)]
        no_surrounding_text: bool,
    },
    /// Show the character a layout produces for an evdev keycode
    Map {
        keycode: u16,

        /// Shift level: 0 plain, 1 Shift, 2 alternate shift
        #[arg(short = 'L', long, default_value_t = 0)]
        level: u8,

        #[arg(short, long, default_value = "KETMANEE")]
        layout: KeyboardLayout,
    },
    /// Report characters in Thai text that would be rejected when typed
    Check {
        text: String,

        #[arg(short, long, default_value = "Strict")]
        strictness: Strictness,
    },
    /// Show or update a configuration file
    Config {
        path: PathBuf,

        /// KEY=VALUE assignments to write, e.g. KeyboardMap=PATTACHOTE
        #[arg(long = "set")]
        assignments: Vec<String>,
    },
}

#[derive(Args, Debug)]
struct Settings {
    /// Configuration file to start from
    #[arg(short, long)]
    config: Option<PathBuf>,

    #[arg(short, long)]
    layout: Option<KeyboardLayout>,

    #[arg(short, long)]
    strictness: Option<Strictness>,

    /// Disable cluster correction
    #[arg(long)]
    no_correction: bool,
}

impl Settings {
    fn resolve(&self) -> EngineConfig {
        let mut config = match &self.config {
            Some(path) => EngineConfig::load_or_default(path),
            None => EngineConfig::default(),
        };
        if let Some(layout) = self.layout {
            config.keyboard_layout = layout;
        }
        if let Some(strictness) = self.strictness {
            config.strictness = strictness;
        }
        if self.no_correction {
            config.correction = false;
        }
        config
    }
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();
}

fn run_type(keys: &str, settings: &Settings, no_surrounding_text: bool, verbose: bool) -> Result<()> {
    let config = settings.resolve();
    let transcript = simulate(config, keys, !no_surrounding_text).context("Invalid key script")?;

    if verbose {
        for step in &transcript.steps {
            let action = match &step.output.action {
                EditAction::None => String::new(),
                EditAction::Commit(text) => format!("commit {:?}", text),
                EditAction::DeleteAndCommit(n, text) => format!("delete {} commit {:?}", n, text),
            };
            let consumed = if step.output.consumed { "consumed" } else { "passed" };
            println!("{:<40} {:<9} {}", format!("{:?}", step.stroke), consumed, action);
        }
    }
    println!("{}", transcript.text);
    Ok(())
}

fn run_map(keycode: u16, level: u8, layout: KeyboardLayout) -> Result<()> {
    let Ok(level) = ShiftLevel::try_from(level) else {
        bail!("Shift level must be 0, 1 or 2");
    };
    match keymap::map(layout, keycode, level).and_then(|c| c.to_char()) {
        Some(ch) => println!("{} U+{:04X}", ch, ch as u32),
        None => println!("unmapped"),
    }
    Ok(())
}

fn run_check(text: &str, strictness: Strictness) -> Result<bool> {
    let violations = check_text(text, strictness);
    for v in &violations {
        let verdict = match &v.result {
            ValidationResult::Reject => "rejected".to_string(),
            ValidationResult::Replace { delete_backward, .. } => {
                format!("reordered (deletes {})", delete_backward)
            }
            ValidationResult::Accept => continue,
        };
        println!("{:>4}  {:?} U+{:04X}  {}", v.position, v.ch, v.ch as u32, verdict);
    }
    Ok(violations.is_empty())
}

fn run_config(path: PathBuf, assignments: &[String]) -> Result<()> {
    let engine = ThaiEngine::with_config_file(&path);
    if !assignments.is_empty() {
        let update = assignments.join("\n");
        engine
            .apply_config_text(&update)
            .with_context(|| format!("Invalid setting in {:?}", assignments))?;
        engine
            .save_config()
            .with_context(|| format!("Failed to write {}", path.display()))?;
    }
    print!("{}", engine.config().to_ini_string());
    Ok(())
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let result = match cli.command {
        Command::Type {
            keys,
            settings,
            no_surrounding_text,
        } => run_type(&keys, &settings, no_surrounding_text, cli.verbose > 0),
        Command::Map { keycode, level, layout } => run_map(keycode, level, layout),
        Command::Check { text, strictness } => match run_check(&text, strictness) {
            Ok(true) => Ok(()),
            Ok(false) => return ExitCode::FAILURE,
            Err(e) => Err(e),
        },
        Command::Config { path, assignments } => run_config(path, &assignments),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {:#}", e);
            ExitCode::FAILURE
        }
    }
}
