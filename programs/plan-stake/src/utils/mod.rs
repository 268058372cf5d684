pub mod native;
pub mod token;
pub use native::*;
pub use token::*;
