//! Turns snapshots into terminal lines.

use crate::models::KeyBindings;
use crate::shared::snapshot::{GameplaySnapshot, RenderState, ScoreSnapshot};

/// Lines to print when the screen goes from `previous` to `next`.
///
/// Entering a screen prints its banner; staying on the game screen prints a
/// status line whenever the word, score or time changed.
pub fn draw_frame(previous: &RenderState, next: &RenderState, keys: &KeyBindings) -> Vec<String> {
    let mut lines = Vec::new();
    match (previous, next) {
        (_, RenderState::Empty) => {}
        (RenderState::InGame(old), RenderState::InGame(new)) => {
            if old != new {
                lines.push(status_line(new));
            }
        }
        (_, RenderState::InGame(new)) => {
            lines.push(format!(
                "=== New game! [{}] correct, [{}] skip, [{}] quit ===",
                hint(&keys.correct),
                hint(&keys.skip),
                hint(&keys.quit)
            ));
            lines.push(status_line(new));
        }
        (RenderState::Score(old), RenderState::Score(new)) if old == new => {}
        (_, RenderState::Score(score)) => lines.extend(score_screen(score, keys)),
    }
    lines
}

fn status_line(snapshot: &GameplaySnapshot) -> String {
    format!(
        "[{}] score {:>3} | word: {}",
        snapshot.time_text, snapshot.score, snapshot.word
    )
}

fn score_screen(snapshot: &ScoreSnapshot, keys: &KeyBindings) -> Vec<String> {
    vec![
        "=== Time's up! ===".to_string(),
        format!("Final score: {}", snapshot.score),
        format!(
            "[{}] play again, [{}] quit",
            hint(&keys.play_again),
            hint(&keys.quit)
        ),
    ]
}

fn hint(keys: &[String]) -> &str {
    keys.first().map(String::as_str).unwrap_or("?")
}
