// Built on the pixels game of life example
//https://github.com/parasyte/pixels/tree/c2454b01abc11c007d4b9de8525195af942fef0d/examples/conway

mod auxiliary;
mod error;
mod projects;
mod traits_and_structs;

use error::AppError;

fn main() -> Result<(), AppError> {
    println!("\nWelcome to the Game of Life!");
    projects::life::run_life()
}
