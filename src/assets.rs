pub mod load;

pub use load::{decode_frame, frame_path, load_frames};
