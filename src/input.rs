use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind};

use crate::state::State;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Continue,
    Quit,
}

pub fn handle_event(state: &mut State, event: Event) -> Action {
    match event {
        Event::Key(key) => handle_key(state, key),
        Event::Resize(cols, rows) => {
            state.resize(cols, rows);
            Action::Continue
        }
        _ => Action::Continue,
    }
}

pub fn handle_key(state: &mut State, key: KeyEvent) -> Action {
    // Only react to presses so platforms reporting releases don't double-fire
    if key.kind != KeyEventKind::Press {
        return Action::Continue;
    }

    match key.code {
        KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc | KeyCode::Enter => Action::Quit,
        _ if state.paused => {
            state.paused = false;
            log::debug!("Resumed at generation {}", state.generation);
            Action::Continue
        }
        KeyCode::Char('p') | KeyCode::Char('P') => {
            state.paused = true;
            log::debug!("Paused at generation {}", state.generation);
            Action::Continue
        }
        _ => Action::Continue,
    }
}
