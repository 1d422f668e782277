//! TUI effects boundary: event loop, terminal lifecycle, input mapping.
//!
//! This is the only module with side effects. It wires the pure layers
//! (state, update, view) to the real terminal via crossterm and ratatui.
//! Kept minimal — all intelligence lives in the pure layers.
//!
//! Architecture: two producer threads feed a single mpsc channel.
//! - Input reader thread: forwards crossterm key and mouse events
//! - Ticker thread: sends a Tick at the frame interval
//! The event loop consumes from the channel; ticks advance the oscillators
//! by measured wall-clock elapsed time and run the per-tick step.

use std::io;
use std::sync::mpsc;
use std::thread;
use std::time::{Duration, Instant};

use crossterm::ExecutableCommand;
use crossterm::event::{
    self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEvent, KeyEventKind,
    KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;

use super::state::{Action, App, AppEvent, Transition};
use super::update::{tick, update};
use super::view::render;

/// Frame interval for the ticker thread (~30 fps).
const TICK_INTERVAL: Duration = Duration::from_millis(33);

// ============================================================================
// INPUT MAPPING
// ============================================================================

/// Map a crossterm key event to a semantic Action.
///
/// Returns None for keys that don't map to any action.
pub fn map_key(key: KeyEvent) -> Option<Action> {
    // Ctrl+C always quits
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return Some(Action::Quit);
    }

    match key.code {
        KeyCode::Enter => Some(Action::Confirm),
        KeyCode::Esc => Some(Action::Back),
        KeyCode::Char(' ') => Some(Action::Advance),
        KeyCode::Char('q') => Some(Action::Quit),
        KeyCode::Char(c @ '1'..='7') => Some(Action::NumberKey(c as u8 - b'0')),
        _ => None,
    }
}

/// Map a mouse event to a semantic Action.
///
/// Only left-button presses matter; the transition function decides
/// whether the cell falls inside a click region.
pub fn map_mouse(mouse: MouseEvent) -> Option<Action> {
    match mouse.kind {
        MouseEventKind::Down(MouseButton::Left) => Some(Action::Click {
            column: mouse.column,
            row: mouse.row,
        }),
        _ => None,
    }
}

// ============================================================================
// TERMINAL LIFECYCLE
// ============================================================================

/// Set up the terminal for TUI mode with mouse capture.
fn setup_terminal() -> io::Result<Terminal<CrosstermBackend<io::Stdout>>> {
    enable_raw_mode()?;
    io::stdout()
        .execute(EnterAlternateScreen)?
        .execute(EnableMouseCapture)?;
    let backend = CrosstermBackend::new(io::stdout());
    let terminal = Terminal::new(backend)?;
    Ok(terminal)
}

/// Restore the terminal to normal mode.
fn restore_terminal() -> io::Result<()> {
    disable_raw_mode()?;
    io::stdout()
        .execute(DisableMouseCapture)?
        .execute(LeaveAlternateScreen)?;
    Ok(())
}

/// Install a panic hook that restores the terminal before printing the panic.
fn install_panic_hook() {
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        // Best-effort terminal restoration
        let _ = restore_terminal();
        original_hook(panic_info);
    }));
}

// ============================================================================
// BACKGROUND THREADS
// ============================================================================

/// Spawn a thread that reads crossterm events and forwards key presses and
/// mouse events to the channel.
fn spawn_input_reader(tx: mpsc::Sender<AppEvent>) {
    thread::spawn(move || {
        loop {
            let forwarded = match event::read() {
                Ok(Event::Key(key)) if key.kind == KeyEventKind::Press => {
                    tx.send(AppEvent::Key(key))
                }
                Ok(Event::Mouse(mouse)) => tx.send(AppEvent::Mouse(mouse)),
                Ok(_) => Ok(()), // ignore resize, focus, release events
                Err(_) => break,
            };
            if forwarded.is_err() {
                break; // receiver dropped, TUI is shutting down
            }
        }
    });
}

/// Spawn a thread that sends a Tick at the frame interval.
fn spawn_ticker(tx: mpsc::Sender<AppEvent>) {
    thread::spawn(move || {
        loop {
            thread::sleep(TICK_INTERVAL);
            if tx.send(AppEvent::Tick).is_err() {
                break;
            }
        }
    });
}

// ============================================================================
// EVENT LOOP
// ============================================================================

/// Run the TUI event loop until the user quits.
///
/// This is the main entry point for the TUI. It sets up the terminal,
/// spawns the producer threads, and consumes events one at a time.
pub fn run() -> io::Result<()> {
    install_panic_hook();
    let mut terminal = setup_terminal()?;
    let mut app = App::new();

    let (tx, rx) = mpsc::channel::<AppEvent>();

    spawn_input_reader(tx.clone());
    spawn_ticker(tx);

    let mut last_tick = Instant::now();

    loop {
        terminal.draw(|frame| render(&app, frame))?;

        if app.should_quit {
            break;
        }

        let event = match rx.recv() {
            Ok(e) => e,
            Err(_) => break, // all senders dropped
        };

        match event {
            AppEvent::Key(key) => {
                if let Some(action) = map_key(key) {
                    apply(&mut app, action);
                }
            }
            AppEvent::Mouse(mouse) => {
                if let Some(action) = map_mouse(mouse) {
                    apply(&mut app, action);
                }
            }
            AppEvent::Tick => {
                let now = Instant::now();
                let dt = now.duration_since(last_tick).as_secs_f32();
                last_tick = now;

                app.anim.advance(dt);
                app.screen = tick(std::mem::take(&mut app.screen), &mut app.journey);
            }
        }
    }

    restore_terminal()?;
    Ok(())
}

/// Dispatch one action through the pure transition function.
fn apply(app: &mut App, action: Action) {
    let screen = std::mem::take(&mut app.screen);
    match update(screen, &action, &mut app.journey) {
        Transition::Screen(screen) => app.screen = screen,
        Transition::Quit => app.should_quit = true,
    }
}

// ============================================================================
// TESTS
// ============================================================================
