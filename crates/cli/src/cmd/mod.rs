mod build;
mod check;
mod info;

pub use build::cmd_build;
pub use check::cmd_check;
pub use info::cmd_info;
