use std::path::PathBuf;
use std::time::Duration;

use anyhow::Result;
use clap::Parser;
use tokio::sync::mpsc;

use quizdeck_catalog::Catalog;
use quizdeck_tui::{
    Action, AppState, Event, EventHandler, HelpOverlay, KeyBindings, Layout, QuestionScreen,
    QuizListScreen, RevealScreen, Screen, SummaryScreen, Theme, Tui,
};

/// Quizdeck - A terminal UI for running multiple-choice quizzes
#[derive(Parser, Debug)]
#[command(name = "quizdeck")]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Quiz title to start directly (optional, case-insensitive)
    #[arg(value_name = "QUIZ")]
    quiz: Option<String>,

    /// Load the quiz catalog from a TOML file instead of the built-in set
    #[arg(long, value_name = "FILE")]
    catalog: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    // Initialize tracing for debugging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::WARN.into()),
        )
        .with_writer(std::io::stderr)
        .init();

    // Run the application
    let result = run_app(args).await;

    // Handle any errors
    if let Err(e) = &result {
        eprintln!("Error: {:#}", e);
    }

    result
}

async fn run_app(args: Args) -> Result<()> {
    // Action channel
    let (action_tx, mut action_rx) = mpsc::unbounded_channel::<Action>();

    // Load the catalog: built-in unless a file was given
    let catalog = match &args.catalog {
        Some(path) => Catalog::from_path(path)?,
        None => Catalog::builtin(),
    };

    // Initialize state
    let mut state = AppState::new(catalog);

    // Handle CLI argument for direct navigation
    if let Some(title) = &args.quiz {
        if !state.start_attempt_by_title(title) {
            anyhow::bail!("Quiz '{}' not found in the catalog", title);
        }
    }

    // Initialize TUI
    let mut tui = Tui::new()?;

    // Initialize event handler
    let mut events = EventHandler::new(Duration::from_millis(250));

    // Initialize keybindings
    let keybindings = KeyBindings::new();

    // Initial render
    render(&mut tui, &mut state)?;

    // Main event loop
    loop {
        tokio::select! {
            // Handle terminal events
            Some(event) = events.next() => {
                match event {
                    Event::Key(key) => {
                        let context = state.screen().into();
                        if let Some(action) = keybindings.get_action(context, &key) {
                            let _ = action_tx.send(action);
                        }
                    }
                    Event::Tick => {
                        // Re-render on tick so the summary clock stays live
                    }
                    Event::Resize => {
                        let _ = action_tx.send(Action::Render);
                    }
                    Event::Error(e) => {
                        state.show_error(e);
                    }
                }
            }

            // Handle user actions
            Some(action) = action_rx.recv() => {
                handle_action(&mut state, action);
            }
        }

        if state.should_quit {
            break;
        }

        render(&mut tui, &mut state)?;
    }

    // Cleanup
    events.shutdown();
    tui.restore()?;

    Ok(())
}

fn handle_action(state: &mut AppState, action: Action) {
    match action {
        Action::Quit => {
            state.should_quit = true;
        }
        Action::GoBack => {
            if state.ui_state.help_visible {
                state.ui_state.help_visible = false;
            } else if state.ui_state.error_message.is_some() {
                state.dismiss_error();
            } else if !state.go_back() {
                state.should_quit = true;
            }
        }
        Action::ListUp => {
            state.list_up();
        }
        Action::ListDown => {
            state.list_down();
        }
        Action::ListSelect => {
            state.confirm_cursor();
        }
        Action::Submit => {
            state.submit();
        }
        Action::Next => {
            state.next();
        }
        Action::Restart => {
            state.restart();
        }
        Action::ToggleHelp => {
            state.ui_state.help_visible = !state.ui_state.help_visible;
        }
        Action::ShowError(msg) => {
            state.show_error(msg);
        }
        Action::DismissError => {
            state.dismiss_error();
        }
        Action::Render => {
            // No-op: the loop renders after every event
        }
    }
}

fn render(tui: &mut Tui, state: &mut AppState) -> Result<()> {
    tui.draw(|frame| {
        match state.screen() {
            Screen::QuizList => {
                QuizListScreen::render(frame, state);
            }
            Screen::Question => {
                QuestionScreen::render(frame, state);
            }
            Screen::Reveal => {
                RevealScreen::render(frame, state);
            }
            Screen::Summary => {
                SummaryScreen::render(frame, state);
            }
        }

        // Render error overlay if present
        if let Some(msg) = &state.ui_state.error_message {
            let area = Layout::centered_popup(frame.area(), 60, 3);
            frame.render_widget(ratatui::widgets::Clear, area);
            let error = ratatui::widgets::Paragraph::new(msg.clone())
                .style(Theme::error())
                .block(
                    ratatui::widgets::Block::default()
                        .borders(ratatui::widgets::Borders::ALL)
                        .border_style(Theme::error()),
                );
            frame.render_widget(error, area);
        }

        // Render help overlay if visible
        if state.ui_state.help_visible {
            HelpOverlay::render(frame);
        }
    })?;

    Ok(())
}
