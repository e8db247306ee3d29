pub mod app;
pub mod theme;
pub mod ui;

pub use app::{App, Items, TestKind};
pub use theme::{resolve_theme, ThemeColors};

use std::time::Duration;

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use ratatui::DefaultTerminal;

use crate::bank::QuestionBank;
use crate::scoring::TestOutcome;
use app::Screen;

const TICK_RATE: Duration = Duration::from_millis(250);

/// Run a questionnaire in the terminal.
///
/// Returns the scored outcome, or `None` when the user quit before
/// finishing.
pub fn run(
    kind: TestKind,
    bank: &QuestionBank,
    count: Option<usize>,
) -> anyhow::Result<Option<TestOutcome>> {
    let items = match kind {
        TestKind::Mbti => {
            let mut questions = bank.mbti.clone();
            if let Some(count) = count {
                questions.truncate(count);
            }
            Items::Mbti(questions)
        }
        TestKind::Ocean => {
            let mut questions = bank.ocean.clone();
            if let Some(count) = count {
                questions.truncate(count);
            }
            Items::Ocean(questions)
        }
    };

    // Theme probing queries the terminal; it must happen before raw mode
    let theme = theme::resolve_theme();
    let mut app = App::new(items, theme);

    // Init terminal (sets up panic hooks automatically)
    let mut terminal = ratatui::init();
    let result = event_loop(&mut terminal, &mut app);
    ratatui::restore();
    result?;

    Ok(app.outcome.take())
}

fn event_loop(terminal: &mut DefaultTerminal, app: &mut App) -> anyhow::Result<()> {
    loop {
        terminal.draw(|frame| ui::draw(frame, app))?;

        if event::poll(TICK_RATE)? {
            if let Event::Key(key) = event::read()? {
                // Windows terminals also emit Release events
                if key.kind == KeyEventKind::Press {
                    handle_key_event(app, key);
                }
            }
        } else {
            app.update_flash();
        }

        if app.should_quit {
            break;
        }
    }
    Ok(())
}

fn handle_key_event(app: &mut App, key: KeyEvent) {
    // Ctrl-C quits from any screen
    if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
        app.quit();
        return;
    }

    match app.screen {
        Screen::Intro => match key.code {
            KeyCode::Char('q') | KeyCode::Esc => app.quit(),
            KeyCode::Enter | KeyCode::Char(' ') => app.start(),
            _ => {}
        },
        Screen::Question => match key.code {
            // Quit
            KeyCode::Char('q') => app.quit(),

            // Navigation
            KeyCode::Char('j') | KeyCode::Down => app.next_option(),
            KeyCode::Char('k') | KeyCode::Up => app.previous_option(),

            // Confirm the highlighted option
            KeyCode::Enter | KeyCode::Char(' ') => app.confirm(),

            // Step back to the previous question
            KeyCode::Left | KeyCode::Backspace => app.revisit_previous(),

            // Quick pick by option number
            KeyCode::Char(c) => {
                if let Some(digit) = c.to_digit(10) {
                    app.pick_number(digit as usize);
                }
            }

            _ => {}
        },
        Screen::Results => match key.code {
            KeyCode::Char('q') | KeyCode::Enter | KeyCode::Esc => app.quit(),
            _ => {}
        },
    }
}
