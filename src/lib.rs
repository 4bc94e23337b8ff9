pub mod error;
pub mod grid;
pub mod combinations;
pub mod runner;
pub mod sweep;
pub mod dataset;
pub mod aggregate;
pub mod statistics;
pub mod views;
pub mod render;
pub mod plots;
pub mod affinity;
