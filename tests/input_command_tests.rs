use btc_forecast::input::{parse_main_command, UiCommand};
use crossterm::event::KeyCode;

#[test]
fn forecast_and_backend_keys() {
    assert_eq!(parse_main_command(&KeyCode::Char('f')), Some(UiCommand::RunForecast));
    assert_eq!(parse_main_command(&KeyCode::Char('F')), Some(UiCommand::RunForecast));
    assert_eq!(parse_main_command(&KeyCode::Enter), Some(UiCommand::RunForecast));
    assert_eq!(parse_main_command(&KeyCode::Char('b')), Some(UiCommand::FetchBackend));
}

#[test]
fn scroll_and_quit_keys() {
    assert_eq!(parse_main_command(&KeyCode::Char('j')), Some(UiCommand::ScrollProjectionDown));
    assert_eq!(parse_main_command(&KeyCode::Down), Some(UiCommand::ScrollProjectionDown));
    assert_eq!(parse_main_command(&KeyCode::Char('k')), Some(UiCommand::ScrollProjectionUp));
    assert_eq!(parse_main_command(&KeyCode::Up), Some(UiCommand::ScrollProjectionUp));
    assert_eq!(parse_main_command(&KeyCode::Char('q')), Some(UiCommand::Quit));
    assert_eq!(parse_main_command(&KeyCode::Esc), Some(UiCommand::Quit));
}

#[test]
fn unknown_keys_are_ignored() {
    assert_eq!(parse_main_command(&KeyCode::Char('x')), None);
    assert_eq!(parse_main_command(&KeyCode::Tab), None);
}
