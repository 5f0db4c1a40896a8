use crossterm::event::{KeyCode, KeyEvent};

use crate::app::{App, Mode};

/// Handle a key event and update the application state
pub fn handle_key(app: &mut App, key: KeyEvent) {
    // Clear messages on any key press
    app.clear_messages();

    match &app.mode {
        Mode::Normal => handle_normal_mode(app, key),
        Mode::JumpTo { .. } => handle_jump_mode(app, key),
        Mode::ConfirmRemove => handle_confirm_remove_mode(app, key),
        Mode::Help => handle_help_mode(app, key),
    }
}

fn handle_normal_mode(app: &mut App, key: KeyEvent) {
    match key.code {
        // Quit
        KeyCode::Char('q') | KeyCode::Esc => {
            app.should_quit = true;
        }

        // Swiping
        KeyCode::Char('l') | KeyCode::Right => {
            app.next_page();
        }
        KeyCode::Char('h') | KeyCode::Left => {
            app.prev_page();
        }
        KeyCode::Char('g') | KeyCode::Home => {
            app.first_page();
        }
        KeyCode::Char('G') | KeyCode::End => {
            app.last_page();
        }
        KeyCode::Char(':') => {
            app.start_jump();
        }

        // Cards
        KeyCode::Char('a') => {
            app.add_card();
        }
        KeyCode::Char('x') => {
            app.start_remove();
        }

        // Indicator settings
        KeyCode::Char('+') | KeyCode::Char('=') => {
            app.increase_cap();
        }
        KeyCode::Char('-') => {
            app.decrease_cap();
        }
        KeyCode::Char('u') => {
            app.toggle_unlimited();
        }
        KeyCode::Char('p') => {
            app.toggle_jump_policy();
        }

        // Help
        KeyCode::Char('?') => {
            app.show_help();
        }

        _ => {}
    }
}

fn handle_jump_mode(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Esc => {
            app.cancel();
        }
        KeyCode::Enter => {
            app.apply_jump();
        }
        KeyCode::Backspace => {
            if let Mode::JumpTo { ref mut input } = app.mode {
                input.pop();
            }
        }
        KeyCode::Char(c) if c.is_ascii_digit() => {
            if let Mode::JumpTo { ref mut input } = app.mode {
                input.push(c);
            }
        }
        _ => {}
    }
}

fn handle_confirm_remove_mode(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Char('y') | KeyCode::Char('Y') | KeyCode::Enter => {
            app.confirm_remove();
        }
        KeyCode::Char('n') | KeyCode::Char('N') | KeyCode::Esc => {
            app.cancel();
        }
        _ => {}
    }
}

fn handle_help_mode(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Char('q') | KeyCode::Esc | KeyCode::Char('?') => {
            app.cancel();
        }
        _ => {}
    }
}
