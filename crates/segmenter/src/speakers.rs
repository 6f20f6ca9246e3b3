use dia_analyze_interface::WordToken;

/// Distinct speaker ids present in the timeline, sorted lexicographically.
///
/// Identity is the raw id string: case-sensitive, no normalization.
/// Unattributed words (`None`) and empty ids are skipped.
pub fn unique_speakers(tokens: &[WordToken]) -> Vec<String> {
    let mut speakers: Vec<String> = Vec::new();

    for token in tokens {
        let Some(speaker) = token.speaker.as_deref() else {
            continue;
        };
        if speaker.is_empty() {
            continue;
        }
        if !speakers.iter().any(|s| s == speaker) {
            speakers.push(speaker.to_string());
        }
    }

    speakers.sort();
    speakers
}
