/// One line typed at the prompt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawInputEvent {
    pub line: String,
}

impl RawInputEvent {
    pub fn new(line: impl Into<String>) -> Self {
        Self { line: line.into() }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GameAction {
    // Game screen
    Correct,
    Skip,

    // Score screen
    PlayAgain,

    // System
    Quit,
}
