pub mod browse;
pub mod nav;
pub mod player;
