pub mod category_chips;
pub mod game_frame;
pub mod game_tile;
pub mod stats_panel;
