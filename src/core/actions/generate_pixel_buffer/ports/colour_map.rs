use crate::core::data::colour::Colour;

pub trait ColourMap {
    type Input;

    fn map(&self, value: Self::Input) -> Colour;

    fn display_name(&self) -> &str;
}
