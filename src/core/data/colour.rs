#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct Colour {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Colour {
    pub const BLACK: Self = Self { r: 0, g: 0, b: 0 };

    #[must_use]
    pub fn is_black(&self) -> bool {
        *self == Self::BLACK
    }
}
