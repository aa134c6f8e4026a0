pub mod carousel;
pub mod icon;
pub mod pages;

pub use carousel::BannerCarousel;
pub use icon::{Icon, icons};
