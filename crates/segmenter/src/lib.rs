pub mod segment;
pub mod speakers;
pub mod style;
pub mod types;

pub use segment::segment;
pub use speakers::unique_speakers;
pub use style::SpeakerStyle;
pub use types::Segment;
