use crossterm::event::KeyCode;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UiCommand {
    RunForecast,
    FetchBackend,
    ScrollProjectionUp,
    ScrollProjectionDown,
    Quit,
}

pub fn parse_main_command(key_code: &KeyCode) -> Option<UiCommand> {
    match key_code {
        KeyCode::Enter => Some(UiCommand::RunForecast),
        KeyCode::Esc => Some(UiCommand::Quit),
        KeyCode::Up => Some(UiCommand::ScrollProjectionUp),
        KeyCode::Down => Some(UiCommand::ScrollProjectionDown),
        KeyCode::Char(c) => match c.to_ascii_lowercase() {
            'f' => Some(UiCommand::RunForecast),
            'b' => Some(UiCommand::FetchBackend),
            'k' => Some(UiCommand::ScrollProjectionUp),
            'j' => Some(UiCommand::ScrollProjectionDown),
            'q' => Some(UiCommand::Quit),
            _ => None,
        },
        _ => None,
    }
}
