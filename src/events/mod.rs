pub mod pointer;

pub use pointer::wire_carousel_input;
