pub mod custody;
pub mod engine;
pub mod registry;

#[cfg(test)]
pub mod testing;

pub use custody::*;
pub use engine::*;
pub use registry::*;
