use crate::grid::{Coordinate, Grid};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Link {
    Unseen,
    Root,
    From(Coordinate),
}

/// Discovered cells and who discovered them, indexed by `y * cols + x`.
#[derive(Debug, Clone)]
pub struct ParentMap {
    links: Vec<Link>,
    cols: usize,
}

impl ParentMap {
    pub fn new(grid: &Grid) -> Self {
        Self {
            links: vec![Link::Unseen; grid.len()],
            cols: grid.cols(),
        }
    }

    /// A map holding only `root`, with no parent.
    pub fn rooted(grid: &Grid, root: Coordinate) -> Self {
        debug_assert!(grid.in_bounds(root), "root {root} is outside the grid");
        let mut map = Self::new(grid);
        map.links[root.to_index(map.cols)] = Link::Root;
        map
    }

    pub fn insert(&mut self, pos: Coordinate, parent: Coordinate) {
        self.links[pos.to_index(self.cols)] = Link::From(parent);
    }

    pub fn contains(&self, pos: Coordinate) -> bool {
        self.links
            .get(pos.to_index(self.cols))
            .is_some_and(|link| *link != Link::Unseen)
    }

    pub fn parent(&self, pos: Coordinate) -> Option<Coordinate> {
        match self.links.get(pos.to_index(self.cols))? {
            Link::From(parent) => Some(*parent),
            Link::Unseen | Link::Root => None,
        }
    }

    /// Walk parent links from `target` back to the root and return the path
    /// root-first. `None` if `target` was never discovered.
    pub fn reconstruct(&self, target: Coordinate) -> Option<Vec<Coordinate>> {
        if !self.contains(target) {
            return None;
        }

        let mut path = vec![target];
        let mut current = target;

        while let Some(prev) = self.parent(current) {
            path.push(prev);
            current = prev;
        }

        path.reverse();
        Some(path)
    }
}
