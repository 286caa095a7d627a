pub mod background;
pub mod border;
pub mod keying;
pub mod pipeline;
