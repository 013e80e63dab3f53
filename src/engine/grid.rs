use engine::constants::MAX_FIELD_SIDE;
use engine::geometry::Point;
use engine::settings::ConfigurationError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Grid {
    height: i32,
    width: i32
}

impl Grid {
    pub fn new(height: i32, width: i32) -> Result<Grid, ConfigurationError> {
        if height <= 0 || width <= 0 {
            return Err(ConfigurationError::NonPositiveDimensions { height, width });
        }
        if height > MAX_FIELD_SIDE || width > MAX_FIELD_SIDE {
            return Err(ConfigurationError::FieldTooLarge { height, width });
        }
        Ok(Grid { height, width })
    }

    pub fn height(&self) -> i32 { self.height }
    pub fn width(&self) -> i32 { self.width }

    pub fn in_bounds(&self, row: i32, col: i32) -> bool {
        row >= 0 && row < self.height && col >= 0 && col < self.width
    }

    pub fn contains(&self, p: Point) -> bool {
        self.in_bounds(p.row, p.col)
    }

    pub fn cell_count(&self) -> usize {
        self.height as usize * self.width as usize
    }

    fn index(&self, p: Point) -> usize {
        p.row as usize * self.width as usize + p.col as usize
    }
}

const WORD_BITS: usize = 64;

/**
 * # Bitfields
 *
 * Every cell that any agent has ever stood on. Cell (row, col) is bit
 * `row * width + col`, packed into 64 bit words. Bits are only ever
 * set, never cleared, for the lifetime of a game.
 */
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Occupancy {
    grid: Grid,
    words: Vec<u64>,
    count: usize
}

impl Occupancy {
    pub fn empty(grid: Grid) -> Occupancy {
        let words = (grid.cell_count() + WORD_BITS - 1) / WORD_BITS;
        Occupancy {
            grid,
            words: vec![0; words],
            count: 0
        }
    }

    /// Cells outside the grid are never occupied. Walls are the bounds
    /// check's business.
    pub fn contains(&self, p: Point) -> bool {
        if !self.grid.contains(p) {
            return false;
        }
        let i = self.grid.index(p);
        self.words[i / WORD_BITS] & (1u64 << (i % WORD_BITS)) != 0
    }

    pub fn is_occupied(&self, row: i32, col: i32) -> bool {
        self.contains(Point::new(row, col))
    }

    pub(crate) fn insert(&mut self, p: Point) {
        debug_assert!(self.grid.contains(p));
        let i = self.grid.index(p);
        let mask = 1u64 << (i % WORD_BITS);
        if self.words[i / WORD_BITS] & mask == 0 {
            self.words[i / WORD_BITS] |= mask;
            self.count += 1;
        }
    }

    pub fn len(&self) -> usize {
        self.count
    }
}
