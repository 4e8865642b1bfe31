use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::ui::app::App;
use crate::ui::home::GridIntent;
use crate::ui::login::LoginIntent;
use crate::ui::navigation::Route;

pub fn handle_key(app: &mut App, key: KeyEvent) {
    if key.kind != KeyEventKind::Press {
        return;
    }

    if is_ctrl_char(key, 'c') || is_ctrl_char(key, 'q') {
        app.request_quit();
        return;
    }

    // An open alert swallows every key until dismissed.
    if app.alert().is_some() {
        if matches!(key.code, KeyCode::Enter | KeyCode::Esc) {
            app.dismiss_alert();
        }
        return;
    }

    match app.route() {
        Route::Login => handle_login_key(app, key),
        Route::Home => handle_home_key(app, key),
        Route::Detail { .. } => handle_detail_key(app, key),
    }
}

fn handle_login_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Tab | KeyCode::Down => app.dispatch_login(LoginIntent::FocusNext),
        KeyCode::BackTab | KeyCode::Up => app.dispatch_login(LoginIntent::FocusPrev),
        KeyCode::Backspace => app.dispatch_login(LoginIntent::Backspace),
        KeyCode::Enter => app.submit_login(),
        KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
            app.dispatch_login(LoginIntent::Type(c))
        }
        _ => {}
    }
}

fn handle_home_key(app: &mut App, key: KeyEvent) {
    let item_count = app.grid_item_count();
    match key.code {
        KeyCode::Left => app.dispatch_grid(GridIntent::Left { item_count }),
        KeyCode::Right => app.dispatch_grid(GridIntent::Right { item_count }),
        KeyCode::Up => app.dispatch_grid(GridIntent::Up { item_count }),
        KeyCode::Down => app.dispatch_grid(GridIntent::Down { item_count }),
        KeyCode::Enter => app.open_selected(),
        KeyCode::Char('r') => app.reload_catalog(),
        KeyCode::Esc => app.go_back(),
        _ => {}
    }
}

fn handle_detail_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Esc | KeyCode::Backspace | KeyCode::Left => app.go_back(),
        KeyCode::Char('r') => app.reload_catalog(),
        _ => {}
    }
}

fn is_ctrl_char(key: KeyEvent, ch: char) -> bool {
    key.modifiers.contains(KeyModifiers::CONTROL)
        && matches!(key.code, KeyCode::Char(c) if c.eq_ignore_ascii_case(&ch))
}
