/// A maximal run of consecutive words attributed to the same speaker.
///
/// `start_time` is the `start` of the first word in the run. `end_time` is
/// the `end` of the most recently absorbed word, an unconditional overwrite
/// rather than a running max, so under out-of-order input it tracks the last
/// word seen rather than the latest point in time.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Segment {
    pub speaker: Option<String>,
    pub words: Vec<String>,
    pub start_time: f64,
    pub end_time: f64,
}

impl Segment {
    /// The segment's words joined with single spaces, for display.
    pub fn text(&self) -> String {
        self.words.join(" ")
    }
}
