//! ucfedit: toggle signals in Xilinx UCF pin-constraint files.
#![allow(clippy::multiple_crate_versions)]

use clap::{Parser, Subcommand, ValueEnum};
use std::io;
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use ucfedit::config::Config;
use ucfedit::destination::{SaveMode, SaveModeKind};
use ucfedit::listing;
use ucfedit::plan::TogglePlan;
use ucfedit::prefs::{JsonPreferences, PreferenceStore, LAST_DIR};
use ucfedit::selection::{Preset, Selection};
use ucfedit::session::Session;
use ucfedit::toggle::ToggleEngine;

#[derive(Parser)]
#[command(name = "ucfedit")]
#[command(about = "Section-aware signal toggling for UCF pin-constraint files", long_about = None)]
struct Args {
    #[command(subcommand)]
    command: Command,

    /// Log parser and toggle decisions
    #[arg(long, short = 'v', global = true)]
    verbose: bool,

    /// Only log errors
    #[arg(long, short = 'q', global = true)]
    quiet: bool,
}

#[derive(Subcommand)]
enum Command {
    /// Show sections and signals of a constraint file
    List(ListArgs),
    /// Write the constraint file with disabled signals commented out
    Save(SaveArgs),
}

#[derive(clap::Args)]
struct ListArgs {
    /// Constraint file to read
    #[arg(value_name = "FILE")]
    file: PathBuf,

    /// Only show signals whose name, location or section contains this text
    #[arg(long, short = 's')]
    search: Option<String>,

    /// Print the listing as JSON
    #[arg(long)]
    json: bool,

    #[command(flatten)]
    selection: SelectionArgs,
}

#[derive(clap::Args)]
struct SaveArgs {
    /// Constraint file to read
    #[arg(value_name = "FILE")]
    file: PathBuf,

    /// Where to write (defaults to the configured mode, or custom when --output is given)
    #[arg(long, value_enum)]
    mode: Option<ModeArg>,

    /// Directory for named mode (defaults to the folder containing FILE)
    #[arg(long, value_name = "DIR")]
    project_dir: Option<PathBuf>,

    /// File stem for named mode (defaults to the project directory name)
    #[arg(long, value_name = "NAME")]
    project_name: Option<String>,

    /// Output path for custom mode
    #[arg(long, short = 'o', value_name = "PATH")]
    output: Option<PathBuf>,

    /// Load the disabled set from a JSON toggle plan
    #[arg(long, value_name = "JSON")]
    plan: Option<PathBuf>,

    /// Print the resulting toggle plan as JSON instead of writing
    #[arg(long)]
    emit_plan: bool,

    #[command(flatten)]
    selection: SelectionArgs,
}

#[derive(clap::Args)]
struct SelectionArgs {
    /// Start from a canned selection
    #[arg(long, value_enum)]
    preset: Option<PresetArg>,

    /// Flip every signal after applying the preset
    #[arg(long)]
    invert: bool,

    /// Disable a signal (repeatable)
    #[arg(long, value_name = "NAME")]
    disable: Vec<String>,

    /// Enable a signal (repeatable)
    #[arg(long, value_name = "NAME")]
    enable: Vec<String>,
}

impl SelectionArgs {
    fn apply(&self, selection: &mut Selection) {
        if let Some(preset) = self.preset {
            selection.apply_preset(preset.into());
        }
        if self.invert {
            selection.invert();
        }
        for name in &self.disable {
            selection.set(name, false);
        }
        for name in &self.enable {
            selection.set(name, true);
        }
    }
}

#[derive(Clone, Copy, ValueEnum)]
enum PresetArg {
    SwLed,
    SwLedBtn,
    All,
    None,
}

impl From<PresetArg> for Preset {
    fn from(arg: PresetArg) -> Self {
        match arg {
            PresetArg::SwLed => Self::SwLed,
            PresetArg::SwLedBtn => Self::SwLedBtn,
            PresetArg::All => Self::All,
            PresetArg::None => Self::None,
        }
    }
}

#[derive(Clone, Copy, ValueEnum)]
enum ModeArg {
    Named,
    Overwrite,
    Custom,
}

impl From<ModeArg> for SaveModeKind {
    fn from(arg: ModeArg) -> Self {
        match arg {
            ModeArg::Named => Self::Named,
            ModeArg::Overwrite => Self::Overwrite,
            ModeArg::Custom => Self::Custom,
        }
    }
}

fn main() -> ExitCode {
    let args = Args::parse();
    init_logging(args.verbose, args.quiet);

    let cfg = Config::load();
    let mut prefs = JsonPreferences::load(Path::new(&cfg.prefs_file));

    match run(args.command, &cfg, &mut prefs) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn init_logging(verbose: bool, quiet: bool) {
    let mut builder =
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"));
    if quiet {
        builder.filter_level(log::LevelFilter::Error);
    } else if verbose {
        builder.filter_level(log::LevelFilter::Debug);
    }
    builder.target(env_logger::Target::Stderr).init();
}

fn run(command: Command, cfg: &Config, prefs: &mut JsonPreferences) -> io::Result<()> {
    match command {
        Command::List(args) => {
            let mut session = open_session(&args.file, cfg, prefs)?;
            args.selection.apply(&mut session.selection);

            let Some(document) = session.document.as_ref() else {
                return Err(io::Error::other(ucfedit::Error::NoDocument));
            };
            let views = listing::filter(document, args.search.as_deref().unwrap_or_default());

            if args.json {
                let json = serde_json::to_string_pretty(&listing::to_listing(
                    &views,
                    &session.selection,
                ))
                .map_err(io::Error::other)?;
                println!("{json}");
            } else {
                let total = document.signal_index().len();
                print!("{}", listing::render(&views, &session.selection, total));
            }
            Ok(())
        }
        Command::Save(args) => {
            let mut session = open_session(&args.file, cfg, prefs)?;

            if let Some(plan_path) = &args.plan {
                let file_content = std::fs::read_to_string(plan_path)?;
                let plan: TogglePlan = serde_json::from_str(&file_content)
                    .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;
                session.load_plan(&plan);
            }
            args.selection.apply(&mut session.selection);

            if args.emit_plan {
                let json =
                    serde_json::to_string_pretty(&session.plan()).map_err(io::Error::other)?;
                println!("{json}");
                return Ok(());
            }

            if let Some(dir) = args.project_dir {
                session.project_dir = Some(dir);
            }
            if let Some(name) = args.project_name {
                session.project_name = Some(name);
            }

            let kind = match (args.mode, &args.output) {
                (Some(mode), _) => mode.into(),
                (None, Some(_)) => SaveModeKind::Custom,
                (None, None) => cfg.mode(),
            };
            let mode = match kind {
                SaveModeKind::Named => session.named_mode(),
                SaveModeKind::Overwrite => SaveMode::Overwrite,
                SaveModeKind::Custom => SaveMode::Custom(args.output.unwrap_or_default()),
            };

            let target = session.save(&mode).map_err(io::Error::other)?;
            println!("{}", target.display());
            // Only a completed save moves the last used directory.
            remember_dir(prefs, session.project_dir.as_deref());
            Ok(())
        }
    }
}

fn open_session(file: &Path, cfg: &Config, prefs: &JsonPreferences) -> io::Result<Session> {
    let path = resolve_input(file, prefs);
    let mut session = Session::new(
        ToggleEngine::new(cfg.marker()),
        cfg.fallback_project_name.clone(),
    );
    session.open(&path).map_err(io::Error::other)?;
    if let Some(message) = &session.message {
        log::info!("{message}");
    }
    Ok(session)
}

/// Relative paths missing from the working directory are looked up in the last used directory.
fn resolve_input(file: &Path, prefs: &JsonPreferences) -> PathBuf {
    if file.exists() || file.is_absolute() {
        return file.to_path_buf();
    }
    match prefs.last_dir().map(|dir| dir.join(file)) {
        Some(candidate) if candidate.exists() => {
            log::info!("using {} from last directory", candidate.display());
            candidate
        }
        _ => file.to_path_buf(),
    }
}

fn remember_dir(prefs: &mut JsonPreferences, dir: Option<&Path>) {
    let Some(dir) = dir else {
        return;
    };
    let dir = dir.canonicalize().unwrap_or_else(|_| dir.to_path_buf());
    prefs.set(LAST_DIR, &dir.to_string_lossy());
    if let Err(e) = prefs.save() {
        log::warn!("could not save preferences: {e}");
    }
}
