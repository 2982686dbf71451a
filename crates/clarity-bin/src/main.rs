//! Clarity demo entrypoint.
//!
//! Shows a `ClarityView` in the terminal: every character colored by class,
//! plus a status line with the view's desired size. `--print` renders once
//! to stdout and exits.
use anyhow::Result;
use clap::Parser;
use clarity_config::{Config, load_from};
use clarity_render::writer::{Writer, paint, paint_inline};
use clarity_render::{CellMeasurer, ClarityView, Classifier, LowercaseSet};
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind};
use std::io::{Write, stdout};
use std::path::PathBuf;
use std::sync::Once;
use tracing::{debug, info};
use tracing_appender::non_blocking::WorkerGuard;

mod demo;
mod terminal;

use terminal::{CrosstermBackend, TerminalBackend};

type View = ClarityView<CellMeasurer>;

/// CLI arguments.
#[derive(Parser, Debug)]
#[command(name = "clarity", version, about = "Text colored by character class")]
struct Args {
    /// Text to display. Overrides `[text] value` from the config file.
    text: Option<String>,
    /// Optional configuration file path (overrides discovery of `clarity.toml`).
    #[arg(long = "config")]
    config: Option<PathBuf>,
    /// Text size override.
    #[arg(long)]
    size: Option<f32>,
    /// Classify with the historical 25-letter lowercase set (no `n`).
    #[arg(long)]
    legacy_lowercase: bool,
    /// Render once to stdout and exit.
    #[arg(long)]
    print: bool,
    /// Log file path.
    #[arg(long = "log-file", default_value = "clarity.log")]
    log_file: PathBuf,
}

struct AppStartup {
    log_guard: Option<WorkerGuard>,
}

impl AppStartup {
    fn new() -> Self {
        Self { log_guard: None }
    }

    fn configure_logging(&mut self, log_path: &std::path::Path) -> Result<()> {
        if log_path.exists() {
            let _ = std::fs::remove_file(log_path);
        }
        let dir = log_path
            .parent()
            .filter(|p| !p.as_os_str().is_empty())
            .unwrap_or_else(|| std::path::Path::new("."));
        let file_name = log_path
            .file_name()
            .map_or_else(|| "clarity.log".into(), |n| n.to_os_string());

        let file_appender = tracing_appender::rolling::never(dir, file_name);
        let (nb_writer, guard) = tracing_appender::non_blocking(file_appender);
        if tracing_subscriber::fmt()
            .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
            .with_ansi(false)
            .with_writer(nb_writer)
            .try_init()
            .is_ok()
        {
            self.log_guard = Some(guard);
        }
        Ok(())
    }

    fn install_panic_hook() {
        static HOOK: Once = Once::new();
        HOOK.call_once(|| {
            let default_panic = std::panic::take_hook();
            std::panic::set_hook(Box::new(move |info| {
                tracing::error!(target: "runtime.panic", ?info, "panic");
                default_panic(info);
            }));
        });
    }
}

/// Build the view from config, then apply command-line overrides.
fn build_view(args: &Args, config: &Config) -> View {
    let mut view = ClarityView::with_measurer(CellMeasurer);
    config.apply(&mut view);
    if args.legacy_lowercase {
        view.set_classifier(Classifier::new(LowercaseSet::Legacy));
    }
    if let Some(size) = args.size {
        view.set_text_size(size);
    }
    if let Some(text) = args.text.as_deref() {
        view.set_text(Some(text));
    }
    view
}

fn origin(view: &View) -> (u16, u16) {
    let pad = view.padding();
    let clamp = |v: i32| u16::try_from(v.max(0)).unwrap_or(u16::MAX);
    (clamp(pad.left), clamp(pad.top))
}

fn print_once(view: &View, out: &mut impl Write) -> Result<()> {
    let mut writer = Writer::new();
    paint_inline(&mut writer, &view.styled());
    writer.print("\n");
    writer.print(demo::status_line(view));
    writer.print("\n");
    writer.flush_to(out)
}

fn redraw(view: &View) -> Result<()> {
    let (_, rows) = crossterm::terminal::size()?;
    let mut writer = Writer::new();
    writer.clear_all();
    paint(&mut writer, &view.styled(), origin(view));
    let status_row = rows.saturating_sub(1);
    writer.move_to(0, status_row);
    writer.clear_line();
    writer.print(demo::status_line(view));
    writer.flush_to(&mut stdout())
}

fn run_interactive(mut view: View) -> Result<()> {
    let mut backend = CrosstermBackend::new();
    backend.set_title("Clarity")?;
    let _guard = backend.enter_guard()?;
    let mut rng = rand::thread_rng();
    view.take_invalidation();
    redraw(&view)?;

    loop {
        let mut force = false;
        match event::read()? {
            Event::Key(KeyEvent {
                code,
                kind: KeyEventKind::Press,
                ..
            }) => match code {
                KeyCode::Char('q') | KeyCode::Esc => break,
                KeyCode::Char('g') | KeyCode::Enter => {
                    let text = demo::random_text(&mut rng);
                    view.set_text(Some(text.as_str()));
                }
                KeyCode::Char('+') => view.set_text_size(view.text_size() + 1.0),
                KeyCode::Char('-') => view.set_text_size((view.text_size() - 1.0).max(1.0)),
                _ => {}
            },
            Event::Resize(w, h) => {
                debug!(target: "runtime", width = w, height = h, "resize");
                force = true;
            }
            _ => {}
        }
        let invalidation = view.take_invalidation();
        if force || !invalidation.is_empty() {
            redraw(&view)?;
        }
    }
    info!(target: "runtime", "shutdown");
    Ok(())
}

fn main() -> Result<()> {
    let args = Args::parse();
    let mut startup = AppStartup::new();
    startup.configure_logging(&args.log_file)?;
    AppStartup::install_panic_hook();
    info!(target: "runtime", print = args.print, "startup");

    let config = load_from(args.config.clone())?;
    let view = build_view(&args, &config);
    let config_path = config.path.as_ref().map(|p| p.display().to_string());
    info!(
        target: "runtime.startup",
        config_override = args.config.is_some(),
        config_path = config_path.as_deref(),
        text_bytes = view.text().len(),
        text_size = view.text_size(),
        "bootstrap_complete"
    );

    if args.print {
        print_once(&view, &mut stdout())
    } else {
        run_interactive(view)
    }
}
