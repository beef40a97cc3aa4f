//! folio: a single-page portfolio in the terminal.
#![allow(clippy::multiple_crate_versions)]

use clap::Parser;
use folio::app_state::{AppState, View};
use folio::document::Portfolio;
use folio::error::Result;
use folio::theme::ThemeMode;
use folio::{config, logging, ui};
use ratatui::crossterm::{
    event::{
        self, DisableFocusChange, DisableMouseCapture, EnableFocusChange, EnableMouseCapture,
        Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent,
        MouseEventKind,
    },
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;
use std::path::PathBuf;
use std::time::{Duration, Instant};

#[derive(Parser)]
#[command(name = "folio")]
#[command(about = "A single-page portfolio in the terminal", long_about = None)]
struct Args {
    /// Markdown portfolio to show instead of the built-in one
    #[arg(value_name = "PATH")]
    content: Option<PathBuf>,

    /// Theme mode: light, dark or system
    #[arg(long)]
    theme: Option<String>,

    /// Colour preset name
    #[arg(long)]
    color: Option<String>,

    /// Background style name
    #[arg(long)]
    background: Option<String>,

    /// Hide the pointer follower
    #[arg(long)]
    no_cursor: bool,

    /// Print the session snapshot as JSON on exit
    #[arg(long)]
    print_session: bool,

    /// Print the parsed sections as JSON and exit
    #[arg(long)]
    outline: bool,

    /// Write diagnostic logs to this file
    #[arg(long, value_name = "FILE")]
    log_file: Option<PathBuf>,
}

fn main() -> Result<()> {
    let args = Args::parse();
    let _log_guard = logging::init(args.log_file.as_deref())?;
    let mut cfg = config::Config::load()?;

    // Command line overrides the config file
    if let Some(theme) = args.theme {
        cfg.theme = theme;
    }
    if let Some(color) = args.color {
        cfg.color = color;
    }
    if let Some(background) = args.background {
        cfg.background = background;
    }
    if args.no_cursor {
        cfg.cursor = false;
    }

    let portfolio = match &args.content {
        Some(path) => Portfolio::load(path)?,
        None => Portfolio::builtin()?,
    };

    if args.outline {
        println!("{}", serde_json::to_string_pretty(&portfolio)?);
        return Ok(());
    }

    let app = AppState::new(portfolio, &cfg)?;
    tracing::info!(
        sections = app.tracker.ids().len(),
        theme = %cfg.theme,
        color = %cfg.color,
        "starting viewer"
    );
    run_tui(app, &cfg, args.print_session)
}

fn run_tui(mut app: AppState, cfg: &config::Config, print_session: bool) -> Result<()> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(
        stdout,
        EnterAlternateScreen,
        EnableMouseCapture,
        EnableFocusChange
    )?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let tick = Duration::from_millis(cfg.tick_ms.max(1));
    let result = run_app(&mut terminal, &mut app, tick);
    app.shutdown();

    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture,
        DisableFocusChange
    )?;
    terminal.show_cursor()?;

    if let Err(e) = &result {
        tracing::error!(error = %e, "viewer stopped");
    }
    result?;

    if print_session {
        println!("{}", app.session().to_json()?);
    }
    Ok(())
}

fn run_app<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    app: &mut AppState,
    tick: Duration,
) -> Result<()> {
    let mut last_tick = Instant::now();

    loop {
        terminal.draw(|f| ui::draw(f, app))?;

        let timeout = tick.saturating_sub(last_tick.elapsed());
        if event::poll(timeout)? {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => {
                    if handle_key(app, key) {
                        return Ok(());
                    }
                }
                Event::Mouse(mouse) => handle_mouse(app, mouse),
                Event::FocusLost => app.pointer_left(),
                _ => {}
            }
        }

        let elapsed = last_tick.elapsed();
        if elapsed >= tick {
            app.tick(elapsed.as_secs_f64());
            last_tick = Instant::now();
        }
    }
}

/// Applies a key press; returns `true` when the viewer should quit.
fn handle_key(app: &mut AppState, key: KeyEvent) -> bool {
    if key.code == KeyCode::Char('q')
        || (key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL))
    {
        return true;
    }
    app.message = None;

    match app.current_view {
        View::Palette => match key.code {
            KeyCode::Esc | KeyCode::Char('p') => app.toggle_palette(),
            KeyCode::Left | KeyCode::Up => app.cycle_color(false),
            KeyCode::Right | KeyCode::Down => app.cycle_color(true),
            KeyCode::Char('l') => app.set_theme_mode(ThemeMode::Light),
            KeyCode::Char('d') => app.set_theme_mode(ThemeMode::Dark),
            KeyCode::Char('s') => app.set_theme_mode(ThemeMode::System),
            _ => {}
        },
        View::Menu => match key.code {
            KeyCode::Up | KeyCode::Char('k') => app.menu.focus_prev(app.tracker.ids().len()),
            KeyCode::Down | KeyCode::Char('j') => app.menu.focus_next(app.tracker.ids().len()),
            KeyCode::Enter => {
                app.activate_menu_focus();
            }
            KeyCode::Esc | KeyCode::Char('m') => app.toggle_menu(),
            _ => {}
        },
        View::Page => match key.code {
            KeyCode::Down | KeyCode::Char('j') => app.scroll_step_by(true),
            KeyCode::Up | KeyCode::Char('k') => app.scroll_step_by(false),
            KeyCode::PageDown | KeyCode::Char(' ') => app.scroll_page(true),
            KeyCode::PageUp => app.scroll_page(false),
            KeyCode::Home | KeyCode::Char('g') => app.scroll_top(),
            KeyCode::End | KeyCode::Char('G') => app.scroll_bottom(),
            KeyCode::Tab => {
                app.activate_relative(1);
            }
            KeyCode::BackTab => {
                app.activate_relative(-1);
            }
            KeyCode::Char(digit @ '1'..='9') => {
                let index = digit.to_digit(10).and_then(|d| usize::try_from(d).ok());
                if let Some(index) = index {
                    app.activate_index(index - 1);
                }
            }
            KeyCode::Char('m') => app.toggle_menu(),
            KeyCode::Char('t') => app.toggle_theme(),
            KeyCode::Char('c') => app.cycle_color(true),
            KeyCode::Char('C') => app.cycle_color(false),
            KeyCode::Char('b') => app.cycle_background(true),
            KeyCode::Char('B') => app.cycle_background(false),
            KeyCode::Char('p') => app.toggle_palette(),
            _ => {}
        },
    }

    false
}

fn handle_mouse(app: &mut AppState, mouse: MouseEvent) {
    match mouse.kind {
        MouseEventKind::Moved | MouseEventKind::Drag(_) => {
            app.pointer_moved(mouse.column, mouse.row);
        }
        MouseEventKind::Down(MouseButton::Left) => {
            app.pointer_moved(mouse.column, mouse.row);
            app.click(mouse.column, mouse.row);
        }
        MouseEventKind::ScrollDown => app.scroll_step_by(true),
        MouseEventKind::ScrollUp => app.scroll_step_by(false),
        _ => {}
    }
}
