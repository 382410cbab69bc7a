pub mod category;
pub mod event;
