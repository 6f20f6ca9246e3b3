use dia_analyze_interface::WordToken;

use crate::types::Segment;

/// Fold a time-ordered word list into speaker segments.
///
/// Single linear pass: a word either extends the open segment (same speaker,
/// compared by value; `None` is its own speaker, distinct from every id) or
/// closes it and opens a new one. The input is trusted as delivered: nothing
/// is sorted, validated, or rejected, and a word with an earlier `end` than
/// the open segment's current `end_time` still overwrites it.
pub fn segment(tokens: &[WordToken]) -> Vec<Segment> {
    let mut segments: Vec<Segment> = Vec::new();

    for token in tokens {
        let extends_open = segments
            .last()
            .is_some_and(|open| open.speaker == token.speaker);

        if extends_open {
            let open = segments.last_mut().unwrap();
            open.words.push(token.text.clone());
            open.end_time = token.end;
        } else {
            segments.push(Segment {
                speaker: token.speaker.clone(),
                words: vec![token.text.clone()],
                start_time: token.start,
                end_time: token.end,
            });
        }
    }

    segments
}
