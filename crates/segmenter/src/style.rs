/// Display style tokens for one speaker: a foreground accent and a block
/// background, both as `#rrggbb` hex strings. How the tokens turn into
/// terminal or widget colors is the renderer's business.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SpeakerStyle {
    pub color: &'static str,
    pub background: &'static str,
}

const STYLES: &[(&str, SpeakerStyle)] = &[
    (
        "Speaker_0",
        SpeakerStyle {
            color: "#007bff",
            background: "#e6f0ff",
        },
    ),
    (
        "Speaker_1",
        SpeakerStyle {
            color: "#28a745",
            background: "#e9f8ec",
        },
    ),
    (
        "Speaker_2",
        SpeakerStyle {
            color: "#dc3545",
            background: "#fceaea",
        },
    ),
    (
        "Speaker_3",
        SpeakerStyle {
            color: "#ffc107",
            background: "#fff9e6",
        },
    ),
    (
        "Speaker_4",
        SpeakerStyle {
            color: "#6f42c1",
            background: "#f3ebfa",
        },
    ),
];

/// Shared fallback for every id outside the static table.
pub const DEFAULT_STYLE: SpeakerStyle = SpeakerStyle {
    color: "#6c757d",
    background: "#f8f9fa",
};

/// Resolve a speaker id to its display style. Total: unknown ids, empty ids,
/// and unattributed speech all get [`DEFAULT_STYLE`].
pub fn resolve(speaker: Option<&str>) -> SpeakerStyle {
    let Some(speaker) = speaker else {
        return DEFAULT_STYLE;
    };

    STYLES
        .iter()
        .find(|(id, _)| *id == speaker)
        .map(|(_, style)| *style)
        .unwrap_or(DEFAULT_STYLE)
}
