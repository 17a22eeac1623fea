mod echo;
mod image;
mod memory;
mod rich_media;

pub use echo::EchoResponder;
pub use image::ImageResponder;
pub use memory::MemoryAwareResponder;
pub use rich_media::RichMediaResponder;
