//! A single node of a game record: a set of properties keyed by identifier.

use std::collections::{BTreeMap, BTreeSet};
use std::rc::Rc;

use crate::property::{Category, Color, Point, Property, PropertyId};

/// Properties of one position in the record.
///
/// Storage is shared between clones and copied only when a clone is edited.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Node {
    properties: Rc<BTreeMap<PropertyId, Property>>,
}

impl Node {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_properties<I>(properties: I) -> Self
    where
        I: IntoIterator<Item = Property>,
    {
        let mut node = Node::new();
        for property in properties {
            node.insert(property);
        }
        node
    }

    /// This node with `property` added.
    pub fn with(mut self, property: Property) -> Self {
        self.insert(property);
        self
    }

    /// Add a property, replacing any property with the same identifier.
    pub fn insert(&mut self, property: Property) -> Option<Property> {
        Rc::make_mut(&mut self.properties).insert(property.id(), property)
    }

    pub fn remove(&mut self, id: &PropertyId) -> Option<Property> {
        if !self.properties.contains_key(id) {
            return None;
        }
        Rc::make_mut(&mut self.properties).remove(id)
    }

    pub fn get(&self, id: &PropertyId) -> Option<&Property> {
        self.properties.get(id)
    }

    pub fn contains(&self, id: &PropertyId) -> bool {
        self.properties.contains_key(id)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Property> {
        self.properties.values()
    }

    pub fn len(&self) -> usize {
        self.properties.len()
    }

    pub fn is_empty(&self) -> bool {
        self.properties.is_empty()
    }

    fn has_category(&self, category: Category) -> bool {
        self.properties.keys().any(|id| id.category() == category)
    }

    /// Any move-category property (a move, pass, ko marker or move number).
    pub fn has_move(&self) -> bool {
        self.has_category(Category::Move)
    }

    pub fn has_setup(&self) -> bool {
        self.has_category(Category::Setup)
    }

    pub fn has_root(&self) -> bool {
        self.has_category(Category::Root)
    }

    /// The move played on this node: its color and point (`None` for a pass).
    pub fn played_move(&self) -> Option<(Color, Option<Point>)> {
        [PropertyId::Black, PropertyId::White]
            .iter()
            .find_map(|id| match self.properties.get(id) {
                Some(Property::Move { color, point }) => Some((*color, *point)),
                _ => None,
            })
    }

    /// The explicit player-to-move set on this node.
    pub fn player_to_play(&self) -> Option<Color> {
        match self.properties.get(&PropertyId::PlayerToPlay) {
            Some(Property::PlayerToPlay(color)) => Some(*color),
            _ => None,
        }
    }

    /// Points listed by one of the add-black, add-white or clear properties.
    pub fn setup_points(&self, id: &PropertyId) -> Option<&BTreeSet<Point>> {
        self.properties.get(id).and_then(Property::setup_points)
    }

    /// Merge a setup property into this node.
    ///
    /// Point sets of the same kind are unioned. The added points are removed
    /// from the two opposing point properties, and any point property left
    /// empty is dropped. Other properties are simply inserted.
    pub fn merge_setup(&mut self, property: Property) {
        let (id, added) = match &property {
            Property::AddStones { points, .. } | Property::ClearPoints(points) => {
                (property.id(), points.clone())
            }
            _ => {
                self.insert(property);
                return;
            }
        };

        let merged: BTreeSet<Point> = self
            .setup_points(&id)
            .into_iter()
            .flatten()
            .chain(added.iter())
            .copied()
            .collect();
        let opposing = [PropertyId::AddBlack, PropertyId::AddWhite, PropertyId::AddEmpty]
            .into_iter()
            .filter(|other| *other != id);
        for other in opposing {
            if let Some(existing) = self.setup_points(&other) {
                let kept: BTreeSet<Point> = existing.difference(&added).copied().collect();
                if kept.len() != existing.len() {
                    self.replace_points(&other, kept);
                }
            }
        }
        self.replace_points(&id, merged);
    }

    // Replace the point set behind `id`, dropping the property if it is empty.
    fn replace_points(&mut self, id: &PropertyId, points: BTreeSet<Point>) {
        if points.is_empty() {
            self.remove(id);
            return;
        }
        let property = match id {
            PropertyId::AddBlack => Property::AddStones {
                color: Color::Black,
                points,
            },
            PropertyId::AddWhite => Property::AddStones {
                color: Color::White,
                points,
            },
            _ => Property::ClearPoints(points),
        };
        self.insert(property);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::property::points;

    fn add(color: Color, coords: &[(u8, u8)]) -> Property {
        Property::AddStones {
            color,
            points: points(coords.iter().copied()).unwrap(),
        }
    }

    fn clear(coords: &[(u8, u8)]) -> Property {
        Property::ClearPoints(points(coords.iter().copied()).unwrap())
    }

    #[test]
    fn test_insert_replaces_same_id() {
        let p = Point::new(4, 4).unwrap();
        let q = Point::new(5, 5).unwrap();
        let mut node = Node::new().with(Property::stone(Color::Black, p));
        node.insert(Property::stone(Color::Black, q));
        assert_eq!(node.len(), 1);
        assert_eq!(node.played_move(), Some((Color::Black, Some(q))));
    }

    #[test]
    fn test_clones_do_not_alias() {
        let original = Node::new().with(Property::Handicap(2));
        let mut copy = original.clone();
        copy.insert(Property::Ko);
        assert_eq!(original.len(), 1);
        assert_eq!(copy.len(), 2);
    }

    #[test]
    fn test_categories() {
        let node = Node::new().with(Property::square(9));
        assert!(node.has_root());
        assert!(!node.has_move());
        let node = Node::new().with(Property::PlayerToPlay(Color::White));
        assert!(node.has_setup());
        assert_eq!(node.player_to_play(), Some(Color::White));
    }

    #[test]
    fn test_merge_unions_same_kind() {
        let mut node = Node::new();
        node.merge_setup(add(Color::Black, &[(4, 4)]));
        node.merge_setup(add(Color::Black, &[(5, 5)]));
        let expected = points([(4, 4), (5, 5)]).unwrap();
        assert_eq!(node.setup_points(&PropertyId::AddBlack), Some(&expected));
        assert_eq!(node.len(), 1);
    }

    #[test]
    fn test_merge_removes_from_opposing() {
        let mut node = Node::new();
        node.merge_setup(add(Color::Black, &[(4, 4), (5, 5)]));
        node.merge_setup(clear(&[(4, 4)]));
        let black = points([(5, 5)]).unwrap();
        let cleared = points([(4, 4)]).unwrap();
        assert_eq!(node.setup_points(&PropertyId::AddBlack), Some(&black));
        assert_eq!(node.setup_points(&PropertyId::AddEmpty), Some(&cleared));
    }

    #[test]
    fn test_merge_drops_emptied_property() {
        let mut node = Node::new();
        node.merge_setup(add(Color::White, &[(3, 3)]));
        node.merge_setup(add(Color::Black, &[(3, 3)]));
        assert!(!node.contains(&PropertyId::AddWhite));
        assert!(node.contains(&PropertyId::AddBlack));
    }
}
