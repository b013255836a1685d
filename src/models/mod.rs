pub mod pod;
pub mod sort;

pub use pod::*;
pub use sort::*;
