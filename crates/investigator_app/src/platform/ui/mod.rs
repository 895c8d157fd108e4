pub mod controls;
pub mod render;
pub mod surface;
