//! Resting place for [PlayerRoster]

use std::collections::{HashMap, HashSet};


/// Maps client ids to the player nick names known for them in a game.\
/// Client ids are log-local & may be reused (a slot may disconnect and be taken by someone else),
/// so the last name set for an id wins. Iteration follows the order each id was first seen.
#[derive(Debug, Default)]
pub struct PlayerRoster {
    /// `(client_id, name)` in order of the first appearance of `client_id`
    slots: Vec<(u32, String)>,
    /// `client_id` -> index in [Self::slots]
    positions: HashMap<u32, usize>,
}

impl PlayerRoster {

    /// Associates `name` to `client_id`, replacing any previous name while keeping the id's original position
    pub fn set_name(&mut self, client_id: u32, name: &str) {
        if let Some((_, slot_name)) = self.positions.get(&client_id)
                                          .and_then(|&position| self.slots.get_mut(position)) {
            slot_name.clear();
            slot_name.push_str(name);
        } else {
            self.positions.insert(client_id, self.slots.len());
            self.slots.push((client_id, name.to_owned()));
        }
    }

    /// The latest name associated with `client_id`, if any
    pub fn name_of(&self, client_id: u32) -> Option<&str> {
        self.positions.get(&client_id)
            .and_then(|&position| self.slots.get(position))
            .map(|(_, name)| name.as_str())
    }

    /// The distinct names in the roster, in the order they are first found when iterating the ids
    pub fn distinct_names(&self) -> Vec<&str> {
        let mut seen = HashSet::with_capacity(self.slots.len());
        self.slots.iter()
            .map(|(_, name)| name.as_str())
            .filter(|name| seen.insert(*name))
            .collect()
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

}
