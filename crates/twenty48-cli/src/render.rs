use twenty48_game::Game;

/// Renders the read-only projection of `game` as text.
///
/// The board grid is followed by the freshly spawned positions and a status
/// line with the score, the highest tile, and which history steps are
/// available.
#[must_use]
pub fn render<P>(game: &Game<P>) -> String {
    let snapshot = game.snapshot();
    let board = snapshot.board();
    let spawned = snapshot
        .new_positions()
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(" ");

    let mut out = format!(
        "{board}\nnew: {spawned}\nscore: {}  best: {}  undo: {}  redo: {}",
        snapshot.score(),
        board.max_value(),
        availability(game.can_undo()),
        availability(game.can_redo()),
    );
    if game.is_game_over() {
        out.push_str("\ngame over");
    }
    out
}

fn availability(available: bool) -> &'static str {
    if available { "yes" } else { "no" }
}
