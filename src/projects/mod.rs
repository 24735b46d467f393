pub mod life;
pub mod render;
