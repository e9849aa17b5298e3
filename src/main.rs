//! uicd-tui - A terminal UI for UICD advanced actions
//!
//! This is the main entry point for the uicd-tui application.
//! It uses the Component Architecture pattern from ratatui.

mod action;
mod app;
mod component;
mod components;
mod config;
mod logging;
mod model;
mod tui;

use crate::action::Action;
use crate::app::App;
use crate::component::Component;
use crate::config::Config;
use crate::tui::Tui;
use anyhow::Result;
use crossterm::event::Event;
use std::time::Duration;
use tracing::{error, info, warn};

fn main() -> Result<()> {
    // Load config, falling back to defaults on first run
    let (config, first_run) = match Config::load() {
        Some(config) => (config, false),
        None => (Config::default(), true),
    };

    // Logging goes to a file; the terminal belongs to the UI.
    // The guard must live for the entire app lifetime.
    let _log_guard = logging::init(&config.log_directory());
    info!(version = env!("CARGO_PKG_VERSION"), "uicd-tui starting");

    if first_run {
        match config.save() {
            Ok(()) => info!("wrote default config"),
            Err(e) => warn!(error = %e, "could not write default config"),
        }
    }

    // Setup terminal
    let mut tui = Tui::new()?.with_tick_rate(Duration::from_millis(config.tick_rate_ms));
    tui.enter()?;

    // Create app state
    let mut app = App::new();
    app.init()?;

    // Main event loop
    let result = run_app(&mut tui, &mut app);

    // Cleanup terminal
    tui.exit()?;

    // Handle any errors
    if let Err(err) = result {
        error!(error = ?err, "exited with error");
        eprintln!("Error: {:?}", err);
        std::process::exit(1);
    }

    info!("uicd-tui exiting");
    Ok(())
}

/// Run the main application loop
fn run_app(tui: &mut Tui, app: &mut App) -> Result<()> {
    while !app.should_quit {
        // Draw the UI
        tui.draw(|frame| {
            if let Err(e) = app.draw(frame, frame.area()) {
                error!(error = %e, "draw failed");
            }
        })?;

        // Poll for events
        if let Some(event) = tui.next_event()? {
            // Convert event to action
            let action = match event {
                Event::Key(key) => app.handle_key_event(key)?,
                Event::Resize(w, h) => Some(Action::Resize(w, h)),
                _ => None,
            };

            // Process the action
            if let Some(action) = action {
                // Action might produce a follow-up action
                let mut current_action = Some(action);
                while let Some(a) = current_action {
                    current_action = app.update(a)?;
                }
            }
        } else {
            // No event - send a tick for time-based updates
            app.update(Action::Tick)?;
        }
    }

    Ok(())
}
