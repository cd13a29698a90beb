pub mod animator;
pub mod camera;
pub mod clock;
pub mod constants;
pub mod error;
pub mod pool;
pub mod spiral;
pub mod text;
pub mod visibility;
pub mod words;
pub static WORDS_WGSL: &str = include_str!("../shaders/words.wgsl");

pub use animator::*;
pub use camera::*;
pub use clock::*;
pub use constants::*;
pub use error::FunnelError;
pub use pool::*;
pub use spiral::*;
pub use text::*;
pub use visibility::*;
pub use words::*;
