pub mod laws;
pub mod list;
pub mod option;
pub mod result;
pub mod task;
pub mod traced;
