use tictactoe_common::GameMode;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClientCommand {
    /// Zero-based cell index, ready for the session.
    Place(usize),
    SelectMode(GameMode),
    Restart,
    ResetScores,
    ShowScores,
    ShowBoard,
    Help,
    Quit,
}

/// Cells are typed 1-9 as shown on screen.
pub fn parse_command(line: &str) -> Result<ClientCommand, String> {
    let mut words = line.split_whitespace();
    let Some(first) = words.next() else {
        return Err("Type `help` to see the commands".to_string());
    };
    let first = first.to_ascii_lowercase();

    if let Ok(number) = first.parse::<usize>() {
        return match number {
            1..=9 => Ok(ClientCommand::Place(number - 1)),
            _ => Err(format!("Cells are numbered 1-9, got {}", number)),
        };
    }

    let command = match first.as_str() {
        "mode" | "m" => {
            let Some(mode) = words.next() else {
                return Err("Usage: mode two|computer".to_string());
            };
            ClientCommand::SelectMode(parse_mode(mode)?)
        }
        "restart" | "r" => ClientCommand::Restart,
        "reset" => ClientCommand::ResetScores,
        "scores" | "s" => ClientCommand::ShowScores,
        "board" | "b" => ClientCommand::ShowBoard,
        "help" | "h" | "?" => ClientCommand::Help,
        "quit" | "q" | "exit" => ClientCommand::Quit,
        other => return Err(format!("Unknown command `{}`, type `help`", other)),
    };

    Ok(command)
}

fn parse_mode(word: &str) -> Result<GameMode, String> {
    match word.to_ascii_lowercase().as_str() {
        "two" | "2p" | "multiplayer" | "human" => Ok(GameMode::TwoPlayer),
        "computer" | "ai" | "cpu" | "robo" => Ok(GameMode::VsComputer),
        other => Err(format!("Unknown mode `{}`, use `two` or `computer`", other)),
    }
}
