//! Value types shared by the cache layers

mod byte_view;
mod sizeable;

pub use byte_view::ByteView;
pub use sizeable::Sizeable;
