//! Ordered apartment roster with per-apartment selection.
//!
//! The roster decides the rotation order: the selected apartments, in roster
//! order, are what schedule generation receives.

use crate::models::ApartmentId;

/// Apartments offered when no roster is configured.
pub const DEFAULT_APARTMENTS: [u32; 4] = [301, 202, 201, 302];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MoveDirection {
    Up,
    Down,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RosterEntry {
    pub apartment: ApartmentId,
    pub selected: bool,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ApartmentRoster {
    entries: Vec<RosterEntry>,
}

impl Default for ApartmentRoster {
    fn default() -> Self {
        Self::new(DEFAULT_APARTMENTS.into_iter().map(ApartmentId::from))
    }
}

impl ApartmentRoster {
    /// Build a roster with every apartment selected.
    pub fn new(apartments: impl IntoIterator<Item = ApartmentId>) -> Self {
        Self {
            entries: apartments
                .into_iter()
                .map(|apartment| RosterEntry {
                    apartment,
                    selected: true,
                })
                .collect(),
        }
    }

    pub fn entries(&self) -> &[RosterEntry] {
        &self.entries
    }

    /// Swap the entry at `index` with its neighbour.
    ///
    /// Returns false when the entry is already at that edge or `index` is out of range.
    pub fn move_apartment(&mut self, index: usize, direction: MoveDirection) -> bool {
        if index >= self.entries.len() {
            return false;
        }
        let target = match direction {
            MoveDirection::Up if index > 0 => index - 1,
            MoveDirection::Down if index + 1 < self.entries.len() => index + 1,
            _ => return false,
        };
        self.entries.swap(index, target);
        true
    }

    /// Remove the entry at `from` and reinsert it at `to` (drag and drop).
    pub fn move_to(&mut self, from: usize, to: usize) -> bool {
        if from >= self.entries.len() || to >= self.entries.len() {
            return false;
        }
        if from != to {
            let entry = self.entries.remove(from);
            self.entries.insert(to, entry);
        }
        true
    }

    /// Flip the selection of `apartment`, returning its new state.
    pub fn toggle(&mut self, apartment: &ApartmentId) -> Option<bool> {
        let entry = self
            .entries
            .iter_mut()
            .find(|entry| &entry.apartment == apartment)?;
        entry.selected = !entry.selected;
        Some(entry.selected)
    }

    /// Selected apartments in roster order.
    pub fn selected(&self) -> Vec<ApartmentId> {
        self.entries
            .iter()
            .filter(|entry| entry.selected)
            .map(|entry| entry.apartment.clone())
            .collect()
    }

    /// One-based position indicator of `apartment`.
    pub fn position(&self, apartment: &ApartmentId) -> Option<usize> {
        self.entries
            .iter()
            .position(|entry| &entry.apartment == apartment)
            .map(|idx| idx + 1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn order(roster: &ApartmentRoster) -> Vec<&str> {
        roster
            .entries()
            .iter()
            .map(|entry| entry.apartment.as_str())
            .collect()
    }

    #[test]
    fn test_default_roster() {
        let roster = ApartmentRoster::default();
        assert_eq!(order(&roster), vec!["301", "202", "201", "302"]);
        assert_eq!(roster.selected().len(), 4);
    }

    #[test]
    fn test_move_up_and_down() {
        let mut roster = ApartmentRoster::default();
        assert!(roster.move_apartment(2, MoveDirection::Up));
        assert_eq!(order(&roster), vec!["301", "201", "202", "302"]);
        assert!(roster.move_apartment(0, MoveDirection::Down));
        assert_eq!(order(&roster), vec!["201", "301", "202", "302"]);
    }

    #[test]
    fn test_move_at_edges_is_noop() {
        let mut roster = ApartmentRoster::default();
        assert!(!roster.move_apartment(0, MoveDirection::Up));
        assert!(!roster.move_apartment(3, MoveDirection::Down));
        assert!(!roster.move_apartment(9, MoveDirection::Up));
        assert_eq!(order(&roster), vec!["301", "202", "201", "302"]);
    }

    #[test]
    fn test_move_to_reinserts() {
        let mut roster = ApartmentRoster::default();
        assert!(roster.move_to(3, 0));
        assert_eq!(order(&roster), vec!["302", "301", "202", "201"]);
        assert!(roster.move_to(0, 3));
        assert_eq!(order(&roster), vec!["301", "202", "201", "302"]);
        assert!(!roster.move_to(0, 4));
    }

    #[test]
    fn test_toggle_filters_selection_in_order() {
        let mut roster = ApartmentRoster::default();
        assert_eq!(roster.toggle(&ApartmentId::from(202)), Some(false));

        let selected: Vec<String> = roster.selected().iter().map(|a| a.to_string()).collect();
        assert_eq!(selected, vec!["301", "201", "302"]);

        assert_eq!(roster.toggle(&ApartmentId::from(202)), Some(true));
        assert_eq!(roster.selected().len(), 4);
        assert_eq!(roster.toggle(&ApartmentId::from(999)), None);
    }

    #[test]
    fn test_position_indicator() {
        let mut roster = ApartmentRoster::default();
        assert_eq!(roster.position(&ApartmentId::from(201)), Some(3));
        roster.move_apartment(2, MoveDirection::Up);
        assert_eq!(roster.position(&ApartmentId::from(201)), Some(2));
        assert_eq!(roster.position(&ApartmentId::from(999)), None);
    }
}
