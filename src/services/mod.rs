pub mod completion;
pub mod planner;
