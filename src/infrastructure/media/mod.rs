pub mod ffmpeg_extractor;

pub use ffmpeg_extractor::{check_ffmpeg_binary, FfmpegAudioExtractor};
