pub mod chart;
pub mod nav;
pub mod period;
pub mod settings;
pub mod summary;
