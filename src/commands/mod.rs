pub mod add;
pub mod display;
pub mod select;
