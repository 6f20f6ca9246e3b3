use crossterm::style::{Color, Stylize};

use dia_segmenter::style;
use dia_session_core::AnalysisResult;

pub fn print_result(result: &AnalysisResult) {
    println!();
    print_header(result);

    if !result.speakers.is_empty() {
        let labels: Vec<String> = result
            .speakers
            .iter()
            .map(|speaker| {
                let color = hex_color(style::resolve(Some(speaker)).color);
                speaker.as_str().with(color).to_string()
            })
            .collect();
        println!("Speakers detected: {}", labels.join("  "));
        println!();
    }

    if result.segments.is_empty() {
        println!("No speech segments were detected in the audio.");
        return;
    }

    for segment in &result.segments {
        let speaker_style = style::resolve(segment.speaker.as_deref());
        let color = hex_color(speaker_style.color);
        let background = hex_color(speaker_style.background);
        let label = segment.speaker.as_deref().unwrap_or("Unknown Speaker");
        let timestamp = format!("({:.2}s - {:.2}s)", segment.start_time, segment.end_time);

        println!(
            "{} {}",
            label.with(color).on(background).bold(),
            timestamp.dark_grey()
        );
        println!("  {}", segment.text());
        println!();
    }

    if result.has_metrics() {
        print_metrics(result);
    }
}

fn print_header(result: &AnalysisResult) {
    let mut header = format!("File: {}", result.file_name);
    if let Some(reference) = &result.reference_file_name {
        header.push_str(" | Reference: ");
        header.push_str(reference);
    }
    header.push_str(&format!(
        " | Lang: {} | {:.2}s",
        result.language, result.duration
    ));

    println!("{}", header.dark_grey());
    println!();
}

fn print_metrics(result: &AnalysisResult) {
    println!("{}", "Diarization metrics".bold());
    print_metric("DER", result.der);
    print_metric("Speaker error", result.speaker_error);
    print_metric("Missed speech", result.missed_speech);
    print_metric("False alarm", result.false_alarm);
}

fn print_metric(label: &str, value: Option<f64>) {
    match value {
        Some(value) => println!("  {label}: {value:.3}"),
        None => println!("  {label}: n/a"),
    }
}

/// `#rrggbb` style token → terminal color. Tokens come from the static style
/// table, so the fallback only fires on a malformed table entry.
fn hex_color(token: &str) -> Color {
    let hex = token.strip_prefix('#').unwrap_or(token);
    if hex.len() != 6 || !hex.is_ascii() {
        return Color::Reset;
    }

    let channel = |range: std::ops::Range<usize>| u8::from_str_radix(&hex[range], 16);
    match (channel(0..2), channel(2..4), channel(4..6)) {
        (Ok(r), Ok(g), Ok(b)) => Color::Rgb { r, g, b },
        _ => Color::Reset,
    }
}
