#![deny(missing_docs)]
#![doc = env!("CARGO_PKG_DESCRIPTION")]

#[doc(inline)]
pub use asciipix_image as image;

#[doc(inline)]
pub use asciipix_render as render;
