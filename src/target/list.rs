use std::collections::VecDeque;

use crate::target::Timestamp;

/// Countdown targets, consumed head-first.
///
/// The list only ever shrinks: there is no way to push or reorder.
#[derive(Debug, Default, Clone)]
pub struct TargetList {
    targets: VecDeque<Timestamp>,
}

impl TargetList {
    pub fn head(&self) -> Option<Timestamp> {
        self.targets.front().copied()
    }

    /// Drop the head and return the new one, if any.
    pub fn advance(&mut self) -> Option<Timestamp> {
        self.targets.pop_front();
        self.head()
    }

    pub fn len(&self) -> usize {
        self.targets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.targets.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = Timestamp> + '_ {
        self.targets.iter().copied()
    }
}

impl FromIterator<Timestamp> for TargetList {
    fn from_iter<I: IntoIterator<Item = Timestamp>>(iter: I) -> Self {
        Self {
            targets: iter.into_iter().collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_advance_shrinks_until_empty() {
        let mut list: TargetList = [1.0, 2.0, 3.0].into_iter().collect();
        assert_eq!(list.head(), Some(1.0));

        assert_eq!(list.advance(), Some(2.0));
        assert_eq!(list.len(), 2);
        assert_eq!(list.advance(), Some(3.0));
        assert_eq!(list.advance(), None);
        assert!(list.is_empty());

        // advancing an empty list stays empty
        assert_eq!(list.advance(), None);
        assert!(list.is_empty());
    }

    #[test]
    fn test_default_is_empty() {
        let list = TargetList::default();
        assert!(list.is_empty());
        assert_eq!(list.head(), None);
    }
}
