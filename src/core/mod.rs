pub mod captions;
pub mod frame_math;
pub mod history;
pub mod subtitles;
pub mod timeline_snap;
