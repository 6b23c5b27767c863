//! fsnek — a keyboard-driven terminal file browser built with ratatui.
//!
//! This binary initialises the terminal, runs the main event loop,
//! and restores the terminal on exit or panic.

mod app;
mod icons;
mod input;
mod render;
mod ui;

use std::io;
use std::panic;
use std::path::PathBuf;
use std::time::Instant;

use crossterm::{
    event::{self, Event},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};

use fsnek_core::config::keymap::Keymap;
use fsnek_core::config::settings::Config;
use fsnek_core::config::theme::Theme;

use crate::app::App;
use crate::input::{handle_key, InputAction};
use crate::render::render;

fn setup_terminal() -> anyhow::Result<Terminal<CrosstermBackend<io::Stdout>>> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let terminal = Terminal::new(backend)?;
    Ok(terminal)
}

fn restore_terminal(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>) -> anyhow::Result<()> {
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;
    Ok(())
}

/// Installs a panic hook that restores the terminal before printing the panic.
fn install_panic_hook() {
    let original_hook = panic::take_hook();
    panic::set_hook(Box::new(move |panic_info| {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen);
        original_hook(panic_info);
    }));
}

/// Returns the user config directory (~/.config/fsnek).
fn config_dir() -> PathBuf {
    std::env::var("HOME")
        .map(PathBuf::from)
        .unwrap_or_else(|_| PathBuf::from("/"))
        .join(".config")
        .join("fsnek")
}

fn main() -> anyhow::Result<()> {
    // Logs go to a file so they never touch the alternate screen.
    tracing_subscriber::fmt()
        .with_writer(|| {
            std::fs::OpenOptions::new()
                .create(true)
                .append(true)
                .open("/tmp/fsnek.log")
                .expect("failed to open log file")
        })
        .with_max_level(tracing::Level::DEBUG)
        .with_ansi(false)
        .init();

    let cfg_dir = config_dir();
    let config = Config::load_or_default(&cfg_dir.join("config.toml"))?;
    let theme = Theme::load_or_default(&cfg_dir.join("theme.toml"))?;
    let keymap = Keymap::load_or_default(&cfg_dir.join("keymap.toml"))?;

    let start_dir = std::env::args()
        .nth(1)
        .map(PathBuf::from)
        .map(Ok)
        .unwrap_or_else(std::env::current_dir)?;
    let floor = config.floor_dir();

    install_panic_hook();
    let mut terminal = setup_terminal()?;

    let result = run_app(&mut terminal, App::new(&start_dir, &floor, config, theme, keymap)?);

    restore_terminal(&mut terminal)?;

    if let Err(e) = result {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }

    Ok(())
}

fn run_app(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    mut app: App,
) -> anyhow::Result<()> {
    loop {
        app = app.tick(Instant::now());

        terminal.draw(|f| render(f, &app))?;

        if app.should_quit() {
            break;
        }

        // Wake at the next gesture or flash deadline even without input.
        let timeout = app.poll_timeout(Instant::now());
        if !event::poll(timeout)? {
            continue;
        }

        if let Event::Key(key) = event::read()? {
            let now = Instant::now();
            app = match handle_key(key, app.mode(), app.keymap()) {
                InputAction::Dispatch(action) => {
                    app.with_clear_status().handle_action(action, now)
                }
                InputAction::ConfirmApproved => app.with_clear_status().handle_confirm(true),
                InputAction::ConfirmRejected => app.with_clear_status().handle_confirm(false),
                InputAction::RenameChar(c) => app.rename_push_char(c),
                InputAction::RenameBackspace => app.rename_backspace(),
                InputAction::RenameCaretLeft => app.rename_caret_left(),
                InputAction::RenameCaretRight => app.rename_caret_right(),
                InputAction::RenameConfirm => app.with_clear_status().rename_submit(),
                InputAction::RenameCancel => app.rename_cancel(),
                InputAction::Quit => app.with_quit(),
                InputAction::None => app,
            };
        }
    }

    Ok(())
}
