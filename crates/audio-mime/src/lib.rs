use std::path::Path;

pub fn extension_to_content_type(extension: &str) -> &'static str {
    match extension.to_ascii_lowercase().as_str() {
        "wav" | "wave" => "audio/wav",
        "mp3" => "audio/mpeg",
        "ogg" => "audio/ogg",
        "flac" => "audio/flac",
        "m4a" | "mp4" => "audio/mp4",
        "webm" => "audio/webm",
        "aac" => "audio/aac",
        _ => "application/octet-stream",
    }
}

pub fn content_type_for_path(path: &Path) -> &'static str {
    path.extension()
        .and_then(|ext| ext.to_str())
        .map(extension_to_content_type)
        .unwrap_or("application/octet-stream")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extension_mapping() {
        assert_eq!(extension_to_content_type("wav"), "audio/wav");
        assert_eq!(extension_to_content_type("wave"), "audio/wav");
        assert_eq!(extension_to_content_type("mp3"), "audio/mpeg");
        assert_eq!(extension_to_content_type("ogg"), "audio/ogg");
        assert_eq!(extension_to_content_type("flac"), "audio/flac");
        assert_eq!(extension_to_content_type("m4a"), "audio/mp4");
        assert_eq!(extension_to_content_type("webm"), "audio/webm");
        assert_eq!(extension_to_content_type("aac"), "audio/aac");
        assert_eq!(extension_to_content_type("txt"), "application/octet-stream");
    }

    #[test]
    fn extension_is_case_insensitive() {
        assert_eq!(extension_to_content_type("WAV"), "audio/wav");
        assert_eq!(extension_to_content_type("Mp3"), "audio/mpeg");
    }

    #[test]
    fn path_lookup() {
        assert_eq!(content_type_for_path(Path::new("talk.wav")), "audio/wav");
        assert_eq!(
            content_type_for_path(Path::new("dir/recording.MP3")),
            "audio/mpeg"
        );
        assert_eq!(
            content_type_for_path(Path::new("no_extension")),
            "application/octet-stream"
        );
    }
}
