pub mod cli;
pub mod helpers;
pub mod icon;
pub mod iconset;
pub mod inspect;
pub mod logger;
pub mod pack;

pub use icnspack_core as format;
pub use pack::{check_inputs, pack, PackError, PackJob, PackReport};
