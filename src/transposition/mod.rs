pub mod layout_transpose;

pub use layout_transpose::transpose_layout;
