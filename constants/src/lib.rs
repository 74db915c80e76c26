pub mod asset_names;
pub mod grid;
pub mod scene;
