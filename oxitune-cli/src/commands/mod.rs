//! Command implementations for the oxitune CLI.

pub mod delta;
pub mod info;
pub mod pack;
pub mod unpack;

pub use delta::cmd_delta;
pub use info::cmd_info;
pub use pack::{Format, PackMode, cmd_pack};
pub use unpack::cmd_unpack;
