pub mod generate;
pub mod interactive;
pub mod revert;
