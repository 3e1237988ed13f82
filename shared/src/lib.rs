/**
* A live cell dies if it has fewer than two live neighbors.
* A live cell with two or three live neighbors lives on to the next generation.
* A live cell with more than three live neighbors dies.
* A dead cell will be brought back to live if it has exactly three live neighbors.
*
* Neighbors are counted from the snapshot of the previous generation, and cells
* beyond the board edge simply do not exist (no wraparound).
*/

pub mod cell;
pub mod error;
pub mod grid;
pub mod patterns;

pub use cell::Cell;
pub use error::GridError;
pub use grid::Grid;
pub use patterns::Pattern;
