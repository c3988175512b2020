use crate::core::Position;
use crate::core::bounds::BoundsOriginRoot;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BoundedGrid<T> {
    bounds: BoundsOriginRoot,
    cells: Vec<T>,
}

impl<T> BoundedGrid<T> {
    pub fn new(bounds: BoundsOriginRoot, default: T) -> Self
    where
        T: Clone,
    {
        let cells = vec![default; bounds.area() as usize];
        BoundedGrid { bounds, cells }
    }

    pub fn size(&self) -> BoundsOriginRoot {
        self.bounds
    }

    pub fn width(&self) -> i32 {
        self.bounds.extent.x
    }

    pub fn height(&self) -> i32 {
        self.bounds.extent.y
    }

    pub fn contains(&self, pos: &Position) -> bool {
        self.bounds.contains(pos)
    }

    pub fn get(&self, pos: &Position) -> Option<&T> {
        if !self.bounds.contains(pos) {
            return None;
        }
        Some(&self[pos])
    }

    fn offset(&self, pos: &Position) -> usize {
        assert!(self.bounds.contains(pos), "position {} outside grid {:?}", pos, self.bounds);
        (pos.y * self.bounds.extent.x + pos.x) as usize
    }
}

impl<T> std::ops::Index<&Position> for BoundedGrid<T> {
    type Output = T;

    fn index(&self, index: &Position) -> &Self::Output {
        &self.cells[self.offset(index)]
    }
}

impl<T> std::ops::IndexMut<&Position> for BoundedGrid<T> {
    fn index_mut(&mut self, index: &Position) -> &mut Self::Output {
        let offset = self.offset(index);
        &mut self.cells[offset]
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn get_outside_bounds_is_none() {
        let grid = BoundedGrid::new(BoundsOriginRoot::new(3, 2), 0u8);

        assert_eq!(grid.get(&Position::new(2, 1)), Some(&0));
        assert_eq!(grid.get(&Position::new(3, 0)), None);
        assert_eq!(grid.get(&Position::new(0, 2)), None);
        assert_eq!(grid.get(&Position::new(-1, 0)), None);
    }

    #[test]
    fn index_mut_writes_row_major() {
        let mut grid = BoundedGrid::new(BoundsOriginRoot::new(3, 2), 0u8);
        grid[&Position::new(1, 1)] = 7;

        assert_eq!(grid.cells, vec![0, 0, 0, 0, 7, 0]);
    }

    #[test]
    fn border_detection() {
        let bounds = BoundsOriginRoot::new(4, 3);

        assert!(bounds.is_border(&Position::new(0, 1)));
        assert!(bounds.is_border(&Position::new(3, 1)));
        assert!(bounds.is_border(&Position::new(2, 2)));
        assert!(!bounds.is_border(&Position::new(1, 1)));
        assert!(!bounds.is_border(&Position::new(4, 1)));
    }
}
