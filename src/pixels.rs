//! Ordered, deduplicated pixel sequences.

use std::collections::HashSet;

use crate::geometry::Point;

/// The output of every rasterizer: pixels in emission order, each at most
/// once.
///
/// Symmetry-based algorithms (circle reflections, clip-window borders)
/// revisit cells; an explicit seen-set keyed by `(x, y)` keeps uniqueness
/// separate from emission order, so the order stays deterministic.
#[derive(Debug, Clone, Default)]
pub struct PixelSet {
    ordered: Vec<Point>,
    seen: HashSet<(i32, i32)>,
}

impl PixelSet {
    /// Create an empty pixel set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty pixel set with capacity for `n` pixels.
    #[must_use]
    pub fn with_capacity(n: usize) -> Self {
        Self {
            ordered: Vec::with_capacity(n),
            seen: HashSet::with_capacity(n),
        }
    }

    /// Emit a pixel. Returns `true` if it was not already present.
    pub fn push(&mut self, p: Point) -> bool {
        if self.seen.insert((p.x, p.y)) {
            self.ordered.push(p);
            true
        } else {
            false
        }
    }

    /// Emit every pixel from another set, preserving this set's order.
    pub fn extend_from(&mut self, other: &PixelSet) {
        for &p in other.iter() {
            self.push(p);
        }
    }

    /// Whether the pixel has been emitted.
    #[must_use]
    pub fn contains(&self, p: Point) -> bool {
        self.seen.contains(&(p.x, p.y))
    }

    /// Number of unique pixels emitted.
    #[must_use]
    pub fn len(&self) -> usize {
        self.ordered.len()
    }

    /// Whether no pixels have been emitted.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.ordered.is_empty()
    }

    /// First emitted pixel, if any.
    #[must_use]
    pub fn first(&self) -> Option<Point> {
        self.ordered.first().copied()
    }

    /// Last emitted pixel, if any.
    #[must_use]
    pub fn last(&self) -> Option<Point> {
        self.ordered.last().copied()
    }

    /// Iterate over pixels in emission order.
    pub fn iter(&self) -> std::slice::Iter<'_, Point> {
        self.ordered.iter()
    }

    /// Pixels in emission order as a slice.
    #[must_use]
    pub fn as_slice(&self) -> &[Point] {
        &self.ordered
    }

    /// Consume the set, yielding the ordered pixel list.
    #[must_use]
    pub fn into_points(self) -> Vec<Point> {
        self.ordered
    }
}

impl PartialEq for PixelSet {
    fn eq(&self, other: &Self) -> bool {
        self.ordered == other.ordered
    }
}

impl Eq for PixelSet {}

impl<'a> IntoIterator for &'a PixelSet {
    type Item = &'a Point;
    type IntoIter = std::slice::Iter<'a, Point>;

    fn into_iter(self) -> Self::IntoIter {
        self.ordered.iter()
    }
}

impl IntoIterator for PixelSet {
    type Item = Point;
    type IntoIter = std::vec::IntoIter<Point>;

    fn into_iter(self) -> Self::IntoIter {
        self.ordered.into_iter()
    }
}

impl FromIterator<Point> for PixelSet {
    fn from_iter<I: IntoIterator<Item = Point>>(iter: I) -> Self {
        let mut set = Self::new();
        for p in iter {
            set.push(p);
        }
        set
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_push_preserves_insertion_order() {
        let mut set = PixelSet::new();
        assert!(set.push(Point::new(2, 0)));
        assert!(set.push(Point::new(0, 0)));
        assert!(set.push(Point::new(1, 0)));
        let points: Vec<_> = set.iter().map(|p| p.x).collect();
        assert_eq!(points, vec![2, 0, 1]);
    }

    #[test]
    fn test_duplicate_not_re_emitted() {
        let mut set = PixelSet::new();
        assert!(set.push(Point::new(3, 4)));
        assert!(!set.push(Point::new(3, 4)));
        assert_eq!(set.len(), 1);
    }

    #[test]
    fn test_first_and_last() {
        let set: PixelSet = [(0, 0), (1, 1), (2, 2)]
            .into_iter()
            .map(Point::from)
            .collect();
        assert_eq!(set.first(), Some(Point::new(0, 0)));
        assert_eq!(set.last(), Some(Point::new(2, 2)));
        assert_eq!(PixelSet::new().first(), None);
    }

    #[test]
    fn test_extend_from_dedups_across_sets() {
        let a: PixelSet = [(0, 0), (1, 0)].into_iter().map(Point::from).collect();
        let b: PixelSet = [(1, 0), (2, 0)].into_iter().map(Point::from).collect();
        let mut merged = PixelSet::new();
        merged.extend_from(&a);
        merged.extend_from(&b);
        assert_eq!(merged.len(), 3);
        assert_eq!(merged.last(), Some(Point::new(2, 0)));
    }
}
