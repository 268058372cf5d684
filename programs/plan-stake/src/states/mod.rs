pub mod events;
pub use events::*;

pub mod stake_config;
pub use stake_config::*;

pub mod plan;
pub use plan::*;

pub mod stake_record;
pub use stake_record::*;
