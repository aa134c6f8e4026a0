//! Application pages module
//!
//! - Landing page, one route per page variant
//! - Not found page

mod landing;
mod not_found;

pub use landing::LandingPage;
pub use not_found::NotFoundPage;
