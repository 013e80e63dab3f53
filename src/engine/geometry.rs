use std::fmt;
use std::str::FromStr;

/// A cell on the field. 0,0 is the top left point. Coordinates are
/// signed so that a step off the edge is still representable and can
/// be rejected by the bounds check.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Point {
    pub row: i32,
    pub col: i32
}

impl Point {
    pub fn new(row: i32, col: i32) -> Point {
        Point { row, col }
    }

    pub fn step(&self, heading: Heading) -> Point {
        let (d_row, d_col) = heading.vector();
        Point {
            row: self.row + d_row,
            col: self.col + d_col
        }
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "({},{})", self.row, self.col)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Heading {
    Up,
    Down,
    Left,
    Right
}

impl Heading {
    /// The fixed enumeration order. Anything that needs to break a
    /// tie between headings does it by position in this array.
    pub fn all() -> [Heading; 4] {
        use self::Heading::*;
        [Up, Down, Left, Right]
    }

    pub fn vector(&self) -> (i32, i32) {
        match *self {
            Heading::Up => (-1, 0),
            Heading::Down => (1, 0),
            Heading::Left => (0, -1),
            Heading::Right => (0, 1),
        }
    }

    pub fn reverse(&self) -> Heading {
        match *self {
            Heading::Up => Heading::Down,
            Heading::Down => Heading::Up,
            Heading::Left => Heading::Right,
            Heading::Right => Heading::Left,
        }
    }

    pub fn is_reverse_of(&self, other: Heading) -> bool {
        self.reverse() == other
    }
}

impl fmt::Display for Heading {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            Heading::Up => write!(f, "up"),
            Heading::Down => write!(f, "down"),
            Heading::Left => write!(f, "left"),
            Heading::Right => write!(f, "right"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParseHeadingError;

impl fmt::Display for ParseHeadingError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "expected one of up, down, left, right")
    }
}

impl ::std::error::Error for ParseHeadingError {}

impl FromStr for Heading {
    type Err = ParseHeadingError;

    fn from_str(s: &str) -> Result<Heading, ParseHeadingError> {
        match s.trim().to_lowercase().as_str() {
            "up" | "u" => Ok(Heading::Up),
            "down" | "d" => Ok(Heading::Down),
            "left" | "l" => Ok(Heading::Left),
            "right" | "r" => Ok(Heading::Right),
            _ => Err(ParseHeadingError)
        }
    }
}
