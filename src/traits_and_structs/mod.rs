pub mod automata_trait;
pub mod cell;
pub mod direction;
pub mod grid;

pub use automata_trait::CellAutomata;
pub use cell::CellState;
pub use grid::Grid;
