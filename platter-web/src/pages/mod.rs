//! Pages wiring routes to the pure views

mod album_detail;
mod layout;
mod library;

pub use album_detail::AlbumDetail;
pub use layout::AppLayout;
pub use library::Library;
