//! Random playouts over the editor.
//!
//! A playout extends the record from the current node by alternating random
//! legal moves until both players pass in a row or the move limit runs out.
//! Every move goes through the editor's rule checks, so playouts double as a
//! stress test of the rules engine.

use log::debug;

use crate::board::Board;
use crate::constants::{PLAYOUT_PASSES, PLAYOUT_SAMPLES};
use crate::editor::GameTreeEditor;
use crate::error::Result;
use crate::property::{Color, Point};

/// Color of the stones surrounding `point`, if every on-board neighbour is a
/// stone of that one color.
///
/// This also holds for false eyes.
pub fn is_eyeish(board: &Board, point: Point) -> Option<Color> {
    let mut eyecolor = None;
    for n in point.neighbors(board.width(), board.height()) {
        let c = board.get(n)?;
        match eyecolor {
            None => eyecolor = Some(c),
            Some(e) if e != c => return None,
            Some(_) => {}
        }
    }
    eyecolor
}

fn playable(editor: &GameTreeEditor, board: &Board, color: Color, point: Point) -> bool {
    board.is_empty_at(point)
        && is_eyeish(board, point) != Some(color)
        && editor.is_legal(color, point)
}

/// A random legal move for the player to move that does not fill one of
/// their own eyes, or `None` if there is none.
pub fn random_legal_move(editor: &GameTreeEditor, rng: &mut fastrand::Rng) -> Result<Option<Point>> {
    let board = editor.board()?;
    let color = editor.next_to_play();

    for _ in 0..PLAYOUT_SAMPLES {
        let point = Point {
            x: rng.u8(1..=board.width()),
            y: rng.u8(1..=board.height()),
        };
        if playable(editor, &board, color, point) {
            return Ok(Some(point));
        }
    }

    let mut candidates: Vec<Point> = (1..=board.height())
        .flat_map(|y| (1..=board.width()).map(move |x| Point { x, y }))
        .filter(|p| board.is_empty_at(*p))
        .collect();
    rng.shuffle(&mut candidates);
    Ok(candidates
        .into_iter()
        .find(|p| playable(editor, &board, color, *p)))
}

/// Extend the record with random legal moves from the current node.
///
/// Stops after two consecutive passes or `max_moves` moves, passes included.
pub fn playout(
    editor: &GameTreeEditor,
    rng: &mut fastrand::Rng,
    max_moves: usize,
) -> Result<GameTreeEditor> {
    let mut editor = editor.clone();
    let mut passes = 0;
    let mut played = 0;

    while passes < PLAYOUT_PASSES && played < max_moves {
        let color = editor.next_to_play();
        editor = match random_legal_move(&editor, rng)? {
            Some(point) => {
                passes = 0;
                editor.place_stone(color, point)?
            }
            None => {
                passes += 1;
                editor.pass(color)?
            }
        };
        played += 1;
    }
    debug!("playout finished after {played} moves");
    Ok(editor)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game_tree::GameTree;
    use crate::node::Node;
    use crate::property::Property;

    fn editor(size: u8) -> GameTreeEditor {
        GameTreeEditor::new(GameTree::new(Node::new().with(Property::square(size))))
    }

    #[test]
    fn test_is_eyeish() {
        let mut board = Board::square(5).unwrap();
        let corner = Point { x: 1, y: 1 };
        assert_eq!(is_eyeish(&board, corner), None);
        board.set_stone(Color::Black, Point { x: 2, y: 1 }).unwrap();
        board.set_stone(Color::Black, Point { x: 1, y: 2 }).unwrap();
        assert_eq!(is_eyeish(&board, corner), Some(Color::Black));
        board.set_stone(Color::White, Point { x: 1, y: 2 }).unwrap();
        assert_eq!(is_eyeish(&board, corner), None);
    }

    #[test]
    fn test_random_move_is_legal() {
        let mut rng = fastrand::Rng::with_seed(7);
        let editor = editor(9);
        let point = random_legal_move(&editor, &mut rng).unwrap().unwrap();
        assert!(editor.is_legal(Color::Black, point));
    }

    #[test]
    fn test_playout_respects_limit() {
        let mut rng = fastrand::Rng::with_seed(42);
        let result = playout(&editor(5), &mut rng, 12).unwrap();
        assert!(result.depth() <= 12);
        assert!(result.depth() > 0);
    }

    #[test]
    fn test_playout_is_reproducible() {
        let a = playout(&editor(5), &mut fastrand::Rng::with_seed(3), 20).unwrap();
        let b = playout(&editor(5), &mut fastrand::Rng::with_seed(3), 20).unwrap();
        assert_eq!(a.commit(), b.commit());
    }
}
