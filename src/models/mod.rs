pub mod doctor;
pub mod medicine;

pub use doctor::*;
pub use medicine::*;
