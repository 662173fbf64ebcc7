/// A pixel position: `x` is the column, `y` is the row (row 0 is the top).
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct Point {
    pub x: u32,
    pub y: u32,
}
