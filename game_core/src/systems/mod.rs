pub mod bounds;
pub mod collision;
pub mod movement;

pub use bounds::*;
pub use collision::*;
pub use movement::*;
