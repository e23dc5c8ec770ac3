pub mod gif;

pub use gif::{EncodeSummary, GifOpts, encode_gif, ensure_parent_dir};
