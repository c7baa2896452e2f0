#![doc = env!("CARGO_PKG_DESCRIPTION")]

#[doc(inline)]
pub use synthlabel_camera as camera;

#[doc(inline)]
pub use synthlabel_labels as labels;

#[doc(inline)]
pub use synthlabel_scene as scene;
