pub mod assignment;
pub mod common;
pub mod completion;
