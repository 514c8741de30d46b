pub mod chains;

pub use chains::*;
