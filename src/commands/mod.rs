pub mod add;
pub mod complete;
pub mod due;
pub mod list;
