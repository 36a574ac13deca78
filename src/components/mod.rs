pub mod app;
pub mod confetti_overlay;
pub mod connector_canvas;
pub mod error_panel;
pub mod game_view;
pub mod picture_tile;
pub mod points_box;
pub mod popup;
pub mod word_tile;
