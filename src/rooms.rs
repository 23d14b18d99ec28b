use glam::Vec3;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Bounds {
    pub min: Vec3,
    pub max: Vec3,
}

impl Bounds {
    /// Build bounds from two opposite corners in any order.
    pub fn from_corners(a: Vec3, b: Vec3) -> Self {
        Self {
            min: a.min(b),
            max: a.max(b),
        }
    }

    pub fn centre(&self) -> Vec3 {
        (self.min + self.max) * 0.5
    }

    pub fn size(&self) -> Vec3 {
        self.max - self.min
    }

    pub fn contains(&self, point: Vec3) -> bool {
        point.cmpge(self.min).all() && point.cmple(self.max).all()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Room {
    pub name: String,
    pub bounds: Bounds,
}

impl Room {
    pub fn new(name: impl Into<String>, bounds: Bounds) -> Self {
        Self {
            name: name.into(),
            bounds,
        }
    }

    pub fn centre(&self) -> Vec3 {
        self.bounds.centre()
    }
}

/// All rooms in the world, in insertion order.
#[derive(Debug, Clone, Default)]
pub struct RoomList {
    rooms: Vec<Room>,
}

impl RoomList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, room: Room) -> usize {
        self.rooms.push(room);
        self.rooms.len() - 1
    }

    pub fn get(&self, index: usize) -> Option<&Room> {
        self.rooms.get(index)
    }

    pub fn index_of(&self, name: &str) -> Option<usize> {
        self.rooms.iter().position(|room| room.name == name)
    }

    /// Index of the first room whose bounds contain `point`.
    pub fn room_at(&self, point: Vec3) -> Option<usize> {
        self.rooms.iter().position(|room| room.bounds.contains(point))
    }

    pub fn len(&self) -> usize {
        self.rooms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rooms.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Room> {
        self.rooms.iter()
    }
}

impl<'a> IntoIterator for &'a RoomList {
    type Item = &'a Room;
    type IntoIter = std::slice::Iter<'a, Room>;

    fn into_iter(self) -> Self::IntoIter {
        self.rooms.iter()
    }
}

impl FromIterator<Room> for RoomList {
    fn from_iter<I: IntoIterator<Item = Room>>(iter: I) -> Self {
        Self {
            rooms: iter.into_iter().collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn room(name: &str, x: f32) -> Room {
        Room::new(
            name,
            Bounds::from_corners(Vec3::new(x, 0.0, 0.0), Vec3::new(x + 10.0, 4.0, 10.0)),
        )
    }

    #[test]
    fn bounds_normalize_corners() {
        let b = Bounds::from_corners(Vec3::new(4.0, 2.0, -1.0), Vec3::new(-2.0, 0.0, 3.0));
        assert_eq!(b.min, Vec3::new(-2.0, 0.0, -1.0));
        assert_eq!(b.max, Vec3::new(4.0, 2.0, 3.0));
        assert_eq!(b.centre(), Vec3::new(1.0, 1.0, 1.0));
        assert_eq!(b.size(), Vec3::new(6.0, 2.0, 4.0));
    }

    #[test]
    fn lookup_by_index_and_name() {
        let mut rooms = RoomList::new();
        assert_eq!(rooms.add(room("entry", 0.0)), 0);
        assert_eq!(rooms.add(room("hall", 10.0)), 1);

        assert_eq!(rooms.len(), 2);
        assert_eq!(rooms.get(1).map(|r| r.name.as_str()), Some("hall"));
        assert!(rooms.get(2).is_none());
        assert_eq!(rooms.index_of("entry"), Some(0));
        assert_eq!(rooms.index_of("vault"), None);
    }

    #[test]
    fn room_at_finds_containing_room() {
        let rooms: RoomList = [room("a", 0.0), room("b", 20.0)].into_iter().collect();
        assert_eq!(rooms.room_at(Vec3::new(25.0, 1.0, 5.0)), Some(1));
        assert_eq!(rooms.room_at(Vec3::new(15.0, 1.0, 5.0)), None);
    }

    #[test]
    fn iterates_in_insertion_order() {
        let rooms: RoomList = ["a", "b", "c"]
            .iter()
            .enumerate()
            .map(|(i, n)| room(n, i as f32 * 10.0))
            .collect();
        let names: Vec<_> = (&rooms).into_iter().map(|r| r.name.clone()).collect();
        assert_eq!(names, ["a", "b", "c"]);
    }
}
