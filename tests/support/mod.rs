use std::{
    fs::File,
    io::BufReader,
    path::{Path, PathBuf},
};

use image::{AnimationDecoder as _, Rgba, RgbaImage, codecs::gif::GifDecoder};

/// Fresh directory under `target/` for one test.
pub fn scratch_dir(group: &str, name: &str) -> PathBuf {
    let dir = PathBuf::from("target").join(group).join(name);
    let _ = std::fs::remove_dir_all(&dir);
    std::fs::create_dir_all(&dir).unwrap();
    dir
}

/// Size used for frame `i` of the synthetic capture.
pub fn frame_size(i: u32) -> (u32, u32) {
    match i {
        1 => (48, 20),
        4 => (24, 36),
        10 => (30, 18),
        12 => (26, 25),
        _ => (24, 18),
    }
}

pub fn frame_color(i: u32) -> [u8; 4] {
    [(i * 13) as u8, 255 - (i * 7) as u8, (i * 3) as u8, 255]
}

pub fn write_frames(dir: &Path, count: u32) {
    for i in 1..=count {
        let (w, h) = frame_size(i);
        RgbaImage::from_pixel(w, h, Rgba(frame_color(i)))
            .save(dir.join(format!("frame-{i}.png")))
            .unwrap();
    }
}

pub fn decode_gif(path: &Path) -> Vec<image::Frame> {
    let reader = BufReader::new(File::open(path).unwrap());
    GifDecoder::new(reader)
        .unwrap()
        .into_frames()
        .collect_frames()
        .unwrap()
}

pub fn delay_ms(frame: &image::Frame) -> u32 {
    let (n, d) = frame.delay().numer_denom_ms();
    n / d
}
