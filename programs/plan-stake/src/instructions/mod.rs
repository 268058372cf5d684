pub mod initialise_config;
pub use initialise_config::*;

pub mod add_plan;
pub use add_plan::*;

pub mod stake;
pub use stake::*;

pub mod withdraw;
pub use withdraw::*;

pub mod views;
pub use views::*;

pub mod initialise_native_config;
pub use initialise_native_config::*;

pub mod stake_native;
pub use stake_native::*;

pub mod withdraw_native;
pub use withdraw_native::*;
