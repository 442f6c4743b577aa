//! Game tree editor.
//!
//! The editor is a cursor into a game record built from two zippers: a
//! [`ListZipper`] over the node sequence of the current game tree, and a
//! [`TreeZipper`] over the game trees themselves. Every operation returns a
//! new editor; the old one stays valid.
//!
//! Navigation reports its outcome as a [`Movement`]. Edits go through one
//! insertion routine that amends the current node when it can, reuses an
//! identical move that already follows, and otherwise branches so that the
//! newest content is always the left-most variation.

use std::collections::BTreeSet;

use log::{debug, trace, warn};

use crate::board::Board;
use crate::config::{EditorConfig, KoMarkerPolicy};
use crate::constants::HANDICAP_WHITE_FIRST;
use crate::error::{IllegalMove, Result, SgfError};
use crate::game_tree::GameTree;
use crate::list_zipper::ListZipper;
use crate::movement::Movement;
use crate::node::Node;
use crate::property::{Category, Color, Point, Property, PropertyId};
use crate::tree_zipper::TreeZipper;

#[derive(Clone, Debug)]
pub struct GameTreeEditor {
    /// Position within the current game tree's sequence
    sequence: ListZipper<Node>,
    /// Position within the tree of game trees; its focus always holds the
    /// sequence above
    tree: TreeZipper<GameTree>,
    config: EditorConfig,
}

/// Content to be placed at the cursor.
enum Edit {
    /// A fresh move node (the move, possibly with a ko marker)
    Move(Node),
    /// A single setup property
    Setup(Property),
}

impl Edit {
    fn can_amend(&self, node: &Node) -> bool {
        match self {
            Edit::Move(_) => !node.has_move() && !node.has_root() && !node.has_setup(),
            Edit::Setup(_) => !node.has_move(),
        }
    }

    fn amend(self, node: &mut Node) {
        match self {
            Edit::Move(content) => {
                for property in content.iter() {
                    node.insert(property.clone());
                }
            }
            Edit::Setup(property) => node.merge_setup(property),
        }
    }

    fn matches(&self, node: &Node) -> bool {
        match self {
            Edit::Move(content) => {
                content.played_move().is_some() && node.played_move() == content.played_move()
            }
            Edit::Setup(property) => node.get(&property.id()) == Some(property),
        }
    }

    fn into_node(self) -> Node {
        match self {
            Edit::Move(content) => content,
            Edit::Setup(property) => Node::new().with(property),
        }
    }
}

fn start_of(tree: &GameTree) -> ListZipper<Node> {
    let nodes = tree.sequence();
    ListZipper::starting_at(nodes[0].clone(), nodes[1..].to_vec())
}

fn end_of(tree: &GameTree) -> ListZipper<Node> {
    let nodes = tree.sequence();
    let last = nodes.len() - 1;
    ListZipper::ending_at(nodes[..last].to_vec(), nodes[last].clone())
}

/// Whose turn it is after the last node of `path`.
///
/// The most recent explicit player-to-play or move decides. With neither on
/// the path, White starts in handicap games and Black otherwise.
fn next_to_play_on(path: &[&Node]) -> Color {
    for node in path.iter().rev() {
        if let Some(color) = node.player_to_play() {
            return color;
        }
        if let Some((color, _)) = node.played_move() {
            return color.opponent();
        }
    }
    let handicap = path.iter().find_map(|node| match node.get(&PropertyId::Handicap) {
        Some(Property::Handicap(count)) => Some(*count),
        _ => None,
    });
    match handicap {
        Some(count) if count >= HANDICAP_WHITE_FIRST => Color::White,
        _ => Color::Black,
    }
}

impl GameTreeEditor {
    pub fn new(tree: GameTree) -> Self {
        Self::with_config(tree, EditorConfig::default())
    }

    pub fn with_config(tree: GameTree, config: EditorConfig) -> Self {
        GameTreeEditor {
            sequence: start_of(&tree),
            tree: TreeZipper::new(tree),
            config,
        }
    }

    /// An editor over a record holding one empty root node.
    pub fn empty() -> Self {
        Self::new(GameTree::new(Node::new()))
    }

    pub fn config(&self) -> &EditorConfig {
        &self.config
    }

    // =========================================================================
    // Queries
    // =========================================================================

    pub fn current_node(&self) -> &Node {
        self.sequence.focus()
    }

    /// The game tree whose sequence holds the current node.
    pub fn current_tree(&self) -> &GameTree {
        self.tree.focus()
    }

    pub fn is_root_node(&self) -> bool {
        self.tree.is_root() && !self.sequence.has_left()
    }

    pub fn has_next_node(&self) -> bool {
        self.sequence.has_right() || !self.tree.focus().children().is_empty()
    }

    pub fn has_previous_node(&self) -> bool {
        self.sequence.has_left() || !self.tree.is_root()
    }

    /// Variations that branch after the current node.
    pub fn variations(&self) -> &[GameTree] {
        if self.sequence.has_right() {
            &[]
        } else {
            self.tree.focus().children()
        }
    }

    /// Nodes from the root to the current node, inclusive.
    pub fn path(&self) -> Vec<&Node> {
        let mut levels: Vec<&GameTree> = self.tree.ancestors().collect();
        levels.reverse();
        let mut path: Vec<&Node> = levels
            .into_iter()
            .flat_map(|tree| tree.sequence().iter())
            .collect();
        let start = path.len();
        path.extend(self.sequence.left());
        path[start..].reverse();
        path.push(self.sequence.focus());
        path
    }

    /// Number of nodes before the current one on the path from the root.
    pub fn depth(&self) -> usize {
        self.tree
            .ancestors()
            .map(|tree| tree.sequence().len())
            .sum::<usize>()
            + self.sequence.index()
    }

    /// The board at the current node.
    pub fn board(&self) -> Result<Board> {
        Board::from_path(self.path(), self.config.default_board_size)
    }

    pub fn next_to_play(&self) -> Color {
        next_to_play_on(&self.path())
    }

    /// The full record with all edits applied.
    pub fn commit(&self) -> GameTree {
        self.tree.commit()
    }

    // =========================================================================
    // Navigation
    // =========================================================================

    fn at(&self, sequence: ListZipper<Node>, tree: TreeZipper<GameTree>) -> Self {
        GameTreeEditor {
            sequence,
            tree,
            config: self.config.clone(),
        }
    }

    fn step_sequence<F>(&self, step: F) -> Movement<Self>
    where
        F: FnOnce(&ListZipper<Node>) -> Movement<ListZipper<Node>>,
    {
        match step(&self.sequence).value() {
            Some(sequence) => Movement::success(self.at(sequence, self.tree.clone()), self.clone()),
            None => Movement::failure(self.clone()),
        }
    }

    // `land` picks where in the new tree's sequence the cursor ends up.
    fn step_tree<F>(&self, step: F, land: fn(&GameTree) -> ListZipper<Node>) -> Movement<Self>
    where
        F: FnOnce(&TreeZipper<GameTree>) -> Movement<TreeZipper<GameTree>>,
    {
        match step(&self.tree).value() {
            Some(tree) => Movement::success(self.at(land(tree.focus()), tree), self.clone()),
            None => Movement::failure(self.clone()),
        }
    }

    /// The next node in the sequence, or the first node of the first
    /// variation at the end of the sequence.
    pub fn next_node(&self) -> Movement<Self> {
        self.step_sequence(ListZipper::step_right).or_else(|editor| {
            trace!("end of sequence, entering first variation");
            editor.first_child_tree()
        })
    }

    /// The previous node in the sequence, or the last node of the parent
    /// tree at the start of the sequence.
    pub fn previous_node(&self) -> Movement<Self> {
        self.step_sequence(ListZipper::step_left).or_else(|editor| {
            trace!("start of sequence, leaving variation");
            editor.parent_tree()
        })
    }

    /// First node of the first variation of the current tree.
    pub fn first_child_tree(&self) -> Movement<Self> {
        self.step_tree(TreeZipper::step_down_into_first_child, start_of)
    }

    /// First node of the next sibling variation.
    pub fn next_sibling_tree(&self) -> Movement<Self> {
        self.step_tree(TreeZipper::step_right, start_of)
    }

    /// First node of the previous sibling variation.
    pub fn previous_sibling_tree(&self) -> Movement<Self> {
        self.step_tree(TreeZipper::step_left, start_of)
    }

    /// Last node of the parent tree, where the current variation branches off.
    pub fn parent_tree(&self) -> Movement<Self> {
        self.step_tree(TreeZipper::step_up, end_of)
    }

    pub fn root_node(&self) -> Movement<Self> {
        if self.is_root_node() {
            return Movement::failure(self.clone());
        }
        let tree = self.tree.to_root().stay();
        Movement::success(self.at(start_of(tree.focus()), tree), self.clone())
    }

    /// Last node of the current sequence.
    pub fn last_node(&self) -> Movement<Self> {
        self.step_sequence(ListZipper::step_to_end)
    }

    /// Follow [`next_node`](Self::next_node) as far as it goes.
    pub fn end_of_line(&self) -> Movement<Self> {
        Movement::repeat(self.clone(), Self::next_node)
    }

    pub fn next_node_or_stay(&self) -> Self {
        self.next_node().stay()
    }

    pub fn previous_node_or_stay(&self) -> Self {
        self.previous_node().stay()
    }

    pub fn first_child_tree_or_stay(&self) -> Self {
        self.first_child_tree().stay()
    }

    pub fn next_sibling_tree_or_stay(&self) -> Self {
        self.next_sibling_tree().stay()
    }

    pub fn previous_sibling_tree_or_stay(&self) -> Self {
        self.previous_sibling_tree().stay()
    }

    pub fn parent_tree_or_stay(&self) -> Self {
        self.parent_tree().stay()
    }

    pub fn root_node_or_stay(&self) -> Self {
        self.root_node().stay()
    }

    pub fn last_node_or_stay(&self) -> Self {
        self.last_node().stay()
    }

    pub fn end_of_line_or_stay(&self) -> Self {
        self.end_of_line().stay()
    }

    // =========================================================================
    // Editing
    // =========================================================================

    // Replace the current sequence, keeping the tree focus in step with it.
    fn with_sequence(&self, sequence: ListZipper<Node>) -> Self {
        let focus = self.tree.focus().with_sequence(sequence.commit());
        self.at(sequence, self.tree.with_focus(focus))
    }

    // Put the current line on the left-most path from the root.
    fn promoted(self) -> Self {
        GameTreeEditor {
            tree: self.tree.promote(),
            ..self
        }
    }

    fn apply(&self, edit: Edit) -> Self {
        let current = self.sequence.focus();

        if edit.can_amend(current) {
            debug!("amending current node in place");
            let mut node = current.clone();
            edit.amend(&mut node);
            return self.with_sequence(self.sequence.with_focus(node)).promoted();
        }

        if let Some(next) = self.sequence.peek_right() {
            if edit.matches(next) {
                debug!("identical node follows, advancing onto it");
                return self.next_node_or_stay();
            }
        } else {
            let children = self.tree.focus().children();
            if let Some(index) = children.iter().position(|child| edit.matches(child.first_node())) {
                debug!("re-entering existing variation {index}");
                let mut tree = self.tree.step_down_into_first_child().stay();
                for _ in 0..index {
                    tree = tree.step_right().stay();
                }
                return self.at(start_of(tree.focus()), tree);
            }
        }

        let fresh = GameTree::new(edit.into_node());

        if self.sequence.has_right() {
            debug!("branching at node {}", self.depth());
            let (kept, rest) = self.sequence.truncate_right();
            let focus = self.tree.focus();
            let remainder = GameTree::from_nodes(rest, focus.children().to_vec());
            let level = GameTree::from_nodes(kept.commit(), Vec::new());
            return self.enter_new(self.tree.with_focus(level), vec![fresh, remainder]);
        }

        if !self.tree.focus().children().is_empty() {
            debug!("adding variation at node {}", self.depth());
            return self.enter_new(self.tree.clone(), vec![fresh]);
        }

        trace!("appending node at end of sequence");
        let sequence = self.sequence.insert_right(fresh.first_node().clone());
        self.with_sequence(sequence.step_right().stay()).promoted()
    }

    fn enter_new(&self, tree: TreeZipper<GameTree>, forest: Vec<GameTree>) -> Self {
        let tree = tree.insert_siblings_down_left(forest).stay();
        self.at(start_of(tree.focus()), tree).promoted()
    }

    /// Check a placement against the rules without playing it.
    ///
    /// Checks run in order and the first failure wins: bounds, turn order,
    /// occupancy, repetition of the position one node back, suicide.
    pub fn check_move(&self, color: Color, point: Point) -> Result<()> {
        let path = self.path();
        let board = Board::from_path(path.iter().copied(), self.config.default_board_size)?;
        if !board.contains(point) {
            return Err(IllegalMove::OutsideBoard.into());
        }
        match self.rule_violation(&path, &board, color, point)? {
            Some(reason) => Err(reason.into()),
            None => Ok(()),
        }
    }

    pub fn is_legal(&self, color: Color, point: Point) -> bool {
        self.check_move(color, point).is_ok()
    }

    fn rule_violation(
        &self,
        path: &[&Node],
        board: &Board,
        color: Color,
        point: Point,
    ) -> Result<Option<IllegalMove>> {
        if next_to_play_on(path) != color {
            return Ok(Some(IllegalMove::NotYourTurn));
        }
        if !board.is_empty_at(point) {
            return Ok(Some(IllegalMove::Occupied));
        }
        let mut after = board.clone();
        after.place_stone(color, point)?;
        if let Some((_, before)) = path.split_last() {
            if !before.is_empty() {
                let previous =
                    Board::from_path(before.iter().copied(), self.config.default_board_size)?;
                if after.same_stones(&previous) {
                    return Ok(Some(IllegalMove::Repeating));
                }
            }
        }
        if after.get(point) != Some(color) {
            return Ok(Some(IllegalMove::Suicide));
        }
        Ok(None)
    }

    /// Play a stone for `color` at `point` after checking the rules.
    pub fn place_stone(&self, color: Color, point: Point) -> Result<Self> {
        self.check_move(color, point)?;
        Ok(self.apply(Edit::Move(
            Node::new().with(Property::stone(color, point)),
        )))
    }

    /// Play a stone without checking turn order, occupancy, ko or suicide.
    ///
    /// The point must still lie on the board. The new node carries a ko
    /// marker according to the configured [`KoMarkerPolicy`].
    pub fn force_stone(&self, color: Color, point: Point) -> Result<Self> {
        let path = self.path();
        let board = Board::from_path(path.iter().copied(), self.config.default_board_size)?;
        if !board.contains(point) {
            return Err(IllegalMove::OutsideBoard.into());
        }
        let violation = self.rule_violation(&path, &board, color, point)?;
        if let Some(reason) = violation {
            warn!("forcing {color} at {point} past rule violation: {reason}");
        }
        let mut content = Node::new().with(Property::stone(color, point));
        let tag = match self.config.ko_marker {
            KoMarkerPolicy::Always => true,
            KoMarkerPolicy::WhenIllegal => violation.is_some(),
        };
        if tag {
            content.insert(Property::Ko);
        }
        Ok(self.apply(Edit::Move(content)))
    }

    /// Pass for `color`. Only turn order is checked.
    pub fn pass(&self, color: Color) -> Result<Self> {
        if self.next_to_play() != color {
            return Err(IllegalMove::NotYourTurn.into());
        }
        Ok(self.apply(Edit::Move(Node::new().with(Property::pass(color)))))
    }

    fn check_on_board(&self, points: &BTreeSet<Point>) -> Result<()> {
        let board = Board::from_path(
            self.path().into_iter().take(1),
            self.config.default_board_size,
        )?;
        if points.iter().all(|p| board.contains(*p)) {
            Ok(())
        } else {
            Err(IllegalMove::OutsideBoard.into())
        }
    }

    fn setup(&self, property: Property) -> Result<Self> {
        if let Some(points) = property.setup_points() {
            self.check_on_board(points)?;
            if points.is_empty() {
                return Ok(self.clone());
            }
        }
        Ok(self.apply(Edit::Setup(property)))
    }

    /// Add stones of `color` as setup, without captures.
    pub fn add_stones(&self, color: Color, points: BTreeSet<Point>) -> Result<Self> {
        self.setup(Property::AddStones { color, points })
    }

    /// Empty `points` as setup.
    pub fn clear_points(&self, points: BTreeSet<Point>) -> Result<Self> {
        self.setup(Property::ClearPoints(points))
    }

    pub fn set_next_to_play(&self, color: Color) -> Self {
        self.apply(Edit::Setup(Property::PlayerToPlay(color)))
    }

    /// Add a property to the current node, replacing any property with the
    /// same identifier. Meant for payload the editor does not interpret, such
    /// as comments or game information.
    ///
    /// Setup properties go through the same insertion as [`Self::add_stones`],
    /// so they never share a node with a move. Stones and passes must be
    /// played with [`Self::place_stone`] or [`Self::pass`]; the move
    /// annotations `KO` and `MN` only attach to a node that holds a move.
    /// Root properties are only accepted on the root node.
    pub fn add_property(&self, property: Property) -> Result<Self> {
        let allowed = match property.category() {
            Category::Setup => return self.setup(property),
            Category::Move => {
                !matches!(property, Property::Move { .. })
                    && self.current_node().played_move().is_some()
            }
            Category::Root => self.is_root_node(),
            Category::GameInfo | Category::Other => true,
        };
        if !allowed {
            return Err(SgfError::MisplacedProperty(property.id().to_string()));
        }
        let mut node = self.sequence.focus().clone();
        node.insert(property);
        Ok(self.with_sequence(self.sequence.with_focus(node)).promoted())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::property::points;

    fn pt(x: u8, y: u8) -> Point {
        Point::new(x, y).unwrap()
    }

    fn root9() -> GameTreeEditor {
        GameTreeEditor::new(GameTree::new(Node::new().with(Property::square(9))))
    }

    fn moves(editor: &GameTreeEditor, moves: &[(u8, u8)]) -> GameTreeEditor {
        let mut editor = editor.clone();
        for &(x, y) in moves {
            let color = editor.next_to_play();
            editor = editor.place_stone(color, pt(x, y)).unwrap();
        }
        editor
    }

    #[test]
    fn test_empty_root_is_amended() {
        let editor = GameTreeEditor::empty()
            .place_stone(Color::Black, pt(4, 4))
            .unwrap();
        assert!(editor.is_root_node());
        assert_eq!(editor.commit().node_count(), 1);
    }

    #[test]
    fn test_append_after_root_with_size() {
        let editor = moves(&root9(), &[(3, 3), (7, 7)]);
        assert_eq!(editor.depth(), 2);
        assert_eq!(editor.commit().sequence().len(), 3);
        assert!(editor.commit().children().is_empty());
    }

    #[test]
    fn test_navigation_round_trip() {
        let editor = moves(&root9(), &[(3, 3), (7, 7)]);
        let root = editor.root_node().stay();
        assert!(root.is_root_node());
        assert!(root.previous_node().is_failure());
        assert!(root.root_node().is_failure());
        let end = root.end_of_line().stay();
        assert_eq!(end.current_node(), editor.current_node());
        assert!(end.next_node().is_failure());
    }

    #[test]
    fn test_branch_on_undo() {
        let editor = moves(&root9(), &[(3, 3), (7, 7)]);
        let undone = editor.previous_node().stay();
        let branched = undone.place_stone(Color::White, pt(5, 5)).unwrap();
        let tree = branched.commit();
        assert_eq!(tree.sequence().len(), 2);
        assert_eq!(tree.children().len(), 2);
        let first = tree.children()[0].first_node().played_move();
        let second = tree.children()[1].first_node().played_move();
        assert_eq!(first, Some((Color::White, Some(pt(5, 5)))));
        assert_eq!(second, Some((Color::White, Some(pt(7, 7)))));
    }

    #[test]
    fn test_replay_advances_without_change() {
        let editor = moves(&root9(), &[(3, 3), (7, 7)]);
        let undone = editor.previous_node().stay();
        let replayed = undone.place_stone(Color::White, pt(7, 7)).unwrap();
        assert_eq!(replayed.commit(), editor.commit());
        assert_eq!(replayed.current_node(), editor.current_node());
    }

    #[test]
    fn test_replay_reenters_variation() {
        let editor = moves(&root9(), &[(3, 3), (7, 7)]);
        let branched = editor
            .previous_node()
            .stay()
            .place_stone(Color::White, pt(5, 5))
            .unwrap();
        let back = branched.parent_tree().stay();
        let again = back.place_stone(Color::White, pt(7, 7)).unwrap();
        assert_eq!(again.commit(), branched.commit());
        assert_eq!(
            again.current_node().played_move(),
            Some((Color::White, Some(pt(7, 7))))
        );
    }

    #[test]
    fn test_sibling_navigation() {
        let editor = moves(&root9(), &[(3, 3), (7, 7)]);
        let branched = editor
            .previous_node()
            .stay()
            .place_stone(Color::White, pt(5, 5))
            .unwrap();
        assert!(branched.previous_sibling_tree().is_failure());
        let sibling = branched.next_sibling_tree().stay();
        assert_eq!(sibling.current_node(), editor.current_node());
        assert!(sibling.next_sibling_tree().is_failure());
        assert_eq!(sibling.previous_sibling_tree_or_stay().current_node(), branched.current_node());
    }

    #[test]
    fn test_next_to_play() {
        let editor = root9();
        assert_eq!(editor.next_to_play(), Color::Black);
        let handicap = editor.add_property(Property::Handicap(2)).unwrap();
        assert_eq!(handicap.next_to_play(), Color::White);
        let forced = editor.set_next_to_play(Color::White);
        assert_eq!(forced.next_to_play(), Color::White);
        let played = moves(&forced, &[(1, 1)]);
        assert_eq!(played.next_to_play(), Color::Black);
    }

    #[test]
    fn test_setup_merges_into_node_without_move() {
        let editor = root9()
            .add_stones(Color::Black, points([(4, 4)]).unwrap())
            .unwrap()
            .add_stones(Color::Black, points([(5, 5)]).unwrap())
            .unwrap();
        assert!(editor.is_root_node());
        let expected = points([(4, 4), (5, 5)]).unwrap();
        assert_eq!(
            editor.current_node().setup_points(&PropertyId::AddBlack),
            Some(&expected)
        );
    }

    #[test]
    fn test_setup_after_move_gets_own_node() {
        let editor = moves(&root9(), &[(3, 3)])
            .clear_points(points([(3, 3)]).unwrap())
            .unwrap();
        assert!(!editor.current_node().has_move());
        assert_eq!(editor.depth(), 2);
        assert!(editor.board().unwrap().is_empty_at(pt(3, 3)));
    }

    #[test]
    fn test_move_after_setup_gets_own_node() {
        let editor = root9()
            .next_node_or_stay()
            .add_stones(Color::Black, points([(4, 4)]).unwrap())
            .unwrap();
        let played = editor.place_stone(Color::Black, pt(5, 5)).unwrap();
        assert_eq!(played.depth(), 1);
    }

    #[test]
    fn test_setup_outside_board() {
        let err = root9()
            .add_stones(Color::White, points([(10, 10)]).unwrap())
            .unwrap_err();
        assert_eq!(err.illegal_move(), Some(IllegalMove::OutsideBoard));
    }

    #[test]
    fn test_force_stone_tags_only_illegal_moves() {
        let editor = root9().force_stone(Color::Black, pt(3, 3)).unwrap();
        assert!(!editor.current_node().contains(&PropertyId::Ko));
        let editor = editor.force_stone(Color::Black, pt(4, 4)).unwrap();
        assert!(editor.current_node().contains(&PropertyId::Ko));
    }

    #[test]
    fn test_force_stone_always_policy() {
        let config = EditorConfig::default().with_ko_marker(KoMarkerPolicy::Always);
        let editor = GameTreeEditor::with_config(
            GameTree::new(Node::new().with(Property::square(9))),
            config,
        );
        let editor = editor.force_stone(Color::Black, pt(3, 3)).unwrap();
        assert!(editor.current_node().contains(&PropertyId::Ko));
    }

    #[test]
    fn test_force_stone_still_checks_bounds() {
        let err = root9().force_stone(Color::Black, pt(10, 1)).unwrap_err();
        assert_eq!(err.illegal_move(), Some(IllegalMove::OutsideBoard));
    }

    #[test]
    fn test_pass_checks_turn() {
        let editor = root9();
        assert_eq!(
            editor.pass(Color::White).unwrap_err().illegal_move(),
            Some(IllegalMove::NotYourTurn)
        );
        let passed = editor.pass(Color::Black).unwrap();
        assert_eq!(passed.next_to_play(), Color::White);
        assert_eq!(passed.current_node().played_move(), Some((Color::Black, None)));
    }

    #[test]
    fn test_variations_listed_at_branch_point() {
        let editor = moves(&root9(), &[(3, 3), (7, 7)]);
        let branched = editor
            .previous_node()
            .stay()
            .place_stone(Color::White, pt(5, 5))
            .unwrap();
        let branch_point = branched.previous_node().stay();
        assert_eq!(branch_point.variations().len(), 2);
        assert!(branch_point.has_next_node());
        assert!(branch_point.root_node().stay().variations().is_empty());
    }

    #[test]
    fn test_add_property_preserved_on_commit() {
        let comment = Property::other("C", vec!["nice move".to_string()]).unwrap();
        let editor = moves(&root9(), &[(3, 3)])
            .add_property(comment.clone())
            .unwrap();
        let tree = editor.commit();
        assert_eq!(
            tree.sequence()[1].get(&PropertyId::Other("C".into())),
            Some(&comment)
        );
    }

    #[test]
    fn test_add_property_respects_node_kinds() {
        let played = moves(&root9(), &[(3, 3)]);

        // Setup after a move opens a node of its own.
        let setup = played
            .add_property(Property::AddStones {
                color: Color::White,
                points: points([(5, 5)]).unwrap(),
            })
            .unwrap();
        assert!(!setup.current_node().has_move());
        assert!(setup.current_node().has_setup());
        assert_eq!(setup.previous_node().stay().current_node(), played.current_node());

        // Moves go through the rules engine, not in place.
        let stone = Property::stone(Color::White, pt(4, 4));
        assert_eq!(
            played.add_property(stone).err(),
            Some(SgfError::MisplacedProperty("W".into()))
        );
        assert!(root9().add_property(Property::MoveNumber(7)).is_err());
        let numbered = played.add_property(Property::MoveNumber(7)).unwrap();
        assert_eq!(numbered.current_node().len(), 2);

        // Board size belongs to the root only.
        assert_eq!(
            played.add_property(Property::square(13)).err(),
            Some(SgfError::MisplacedProperty("SZ".into()))
        );
        let resized = root9().add_property(Property::square(13)).unwrap();
        assert_eq!(resized.board().unwrap().width(), 13);
    }
}
