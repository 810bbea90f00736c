pub mod images;
pub mod populate;
