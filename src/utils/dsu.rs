//! # RollbackDsu
//!
//! A disjoint-set structure over `0..n` supporting checkpoints and rollback to a
//! previous checkpoint. Intended for backtracking searches that speculatively merge
//! classes and must undo those merges on failure.
//!
//! Union is by size; `find` does not compress paths, as compression cannot be undone
//! cheaply. Lookups are therefore logarithmic, which suffices for the small universes
//! this structure is used on.

/// A union-find over `0..n` with undo support
#[derive(Debug, Clone)]
pub struct RollbackDsu {
    parent: Vec<u32>,
    size: Vec<u32>,
    merges: Vec<u32>,
}

/// An opaque marker into the merge history
pub type DsuCheckpoint = usize;

impl RollbackDsu {
    /// Creates `n` singleton classes
    pub fn new(n: usize) -> Self {
        Self {
            parent: (0..n as u32).collect(),
            size: vec![1; n],
            merges: Vec::new(),
        }
    }

    /// Returns the representative of the class containing `x`.
    /// ** Panics if `x >= n` **
    pub fn find(&self, x: u32) -> u32 {
        let mut x = x;
        while self.parent[x as usize] != x {
            x = self.parent[x as usize];
        }
        x
    }

    /// Returns *true* if `x` and `y` are in the same class
    pub fn same(&self, x: u32, y: u32) -> bool {
        self.find(x) == self.find(y)
    }

    /// Merges the classes of `x` and `y`.
    /// Returns *true* exactly if the classes were distinct before.
    pub fn union(&mut self, x: u32, y: u32) -> bool {
        let (mut x, mut y) = (self.find(x), self.find(y));
        if x == y {
            return false;
        }

        if self.size[x as usize] < self.size[y as usize] {
            std::mem::swap(&mut x, &mut y);
        }

        self.parent[y as usize] = x;
        self.size[x as usize] += self.size[y as usize];
        self.merges.push(y);

        true
    }

    /// Returns a checkpoint capturing the current merge history
    pub fn checkpoint(&self) -> DsuCheckpoint {
        self.merges.len()
    }

    /// Undoes all merges performed after `mark` was taken.
    /// ** Panics if `mark` is newer than the merge history **
    pub fn rollback(&mut self, mark: DsuCheckpoint) {
        assert!(mark <= self.merges.len());

        while self.merges.len() > mark {
            let y = self.merges.pop().unwrap();
            let x = self.parent[y as usize];
            self.parent[y as usize] = y;
            self.size[x as usize] -= self.size[y as usize];
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn union_find_basics() {
        let mut dsu = RollbackDsu::new(5);
        assert!(!dsu.same(0, 1));

        assert!(dsu.union(0, 1));
        assert!(dsu.union(2, 3));
        assert!(!dsu.union(1, 0));

        assert!(dsu.same(0, 1));
        assert!(dsu.same(2, 3));
        assert!(!dsu.same(1, 2));

        assert!(dsu.union(1, 3));
        assert!(dsu.same(0, 2));
        assert!(!dsu.same(0, 4));
    }

    #[test]
    fn rollback_restores_classes() {
        let mut dsu = RollbackDsu::new(6);
        dsu.union(0, 1);

        let mark = dsu.checkpoint();
        dsu.union(2, 3);
        dsu.union(1, 2);
        assert!(dsu.same(0, 3));

        dsu.rollback(mark);
        assert!(dsu.same(0, 1));
        assert!(!dsu.same(2, 3));
        assert!(!dsu.same(0, 3));

        // merging again after a rollback works as if the undone merges never happened
        assert!(dsu.union(2, 3));
        assert!(dsu.same(2, 3));
    }

    #[test]
    fn rollback_to_empty_history() {
        let mut dsu = RollbackDsu::new(4);
        let mark = dsu.checkpoint();
        dsu.union(0, 1);
        dsu.union(1, 2);
        dsu.rollback(mark);

        for u in 0..4 {
            assert_eq!(dsu.find(u), u);
        }
    }
}
