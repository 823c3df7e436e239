//! Index-stable collection with deferred removal.
//!
//! Removing marks a slot dead instead of shifting the vector, so indices
//! taken at the start of a pass stay valid while the pass removes and appends.
//! Dead slots are dropped by [`Roster::compact`] once the pass is over.

#[derive(Debug, Clone)]
pub struct Roster<T> {
    items: Vec<T>,
    removed: Vec<bool>,
    live: usize,
}

impl<T> Default for Roster<T> {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            removed: Vec::new(),
            live: 0,
        }
    }
}

impl<T> Roster<T> {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn from_vec(items: Vec<T>) -> Self {
        let live = items.len();
        Self {
            removed: vec![false; live],
            items,
            live,
        }
    }

    /// Appends an item and returns its slot index.
    pub fn push(&mut self, item: T) -> usize {
        self.items.push(item);
        self.removed.push(false);
        self.live += 1;
        self.items.len() - 1
    }

    /// Marks the slot removed. Returns `false` when it was already gone.
    pub fn remove(&mut self, index: usize) -> bool {
        match self.removed.get_mut(index) {
            Some(flag) if !*flag => {
                *flag = true;
                self.live -= 1;
                true
            }
            _ => false,
        }
    }

    #[must_use]
    pub fn is_live(&self, index: usize) -> bool {
        matches!(self.removed.get(index), Some(false))
    }

    #[must_use]
    pub fn get(&self, index: usize) -> Option<&T> {
        if self.is_live(index) {
            self.items.get(index)
        } else {
            None
        }
    }

    pub fn get_mut(&mut self, index: usize) -> Option<&mut T> {
        if self.is_live(index) {
            self.items.get_mut(index)
        } else {
            None
        }
    }

    /// Number of live items.
    #[must_use]
    pub fn len(&self) -> usize {
        self.live
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.live == 0
    }

    /// Number of slots, live or not. Stable until the next compaction.
    #[must_use]
    pub fn slots(&self) -> usize {
        self.items.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.iter_indexed().map(|(_, item)| item)
    }

    pub fn iter_indexed(&self) -> impl Iterator<Item = (usize, &T)> {
        self.items
            .iter()
            .zip(&self.removed)
            .enumerate()
            .filter(|(_, (_, removed))| !**removed)
            .map(|(i, (item, _))| (i, item))
    }

    /// Drops removed slots, preserving the order of the survivors.
    pub fn compact(&mut self) {
        if self.live == self.items.len() {
            return;
        }
        let mut flags = self.removed.iter();
        self.items.retain(|_| !flags.next().copied().unwrap_or(false));
        self.removed = vec![false; self.items.len()];
        self.live = self.items.len();
    }

    pub fn clear(&mut self) {
        self.items.clear();
        self.removed.clear();
        self.live = 0;
    }

    /// Live items in order; only meaningful right after [`Roster::compact`].
    #[must_use]
    pub fn as_slice(&self) -> &[T] {
        debug_assert_eq!(self.live, self.items.len(), "roster not compacted");
        &self.items
    }
}

impl<T> FromIterator<T> for Roster<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self::from_vec(iter.into_iter().collect())
    }
}
