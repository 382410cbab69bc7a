pub mod chart;
pub mod collect;
pub mod config;
