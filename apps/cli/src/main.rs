mod render;

use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::prelude::*;

use dia_analyze_client::AnalyzeClient;
use dia_analyze_interface::{AnalyzeRequest, FileUpload};
use dia_session_core::{AnalysisSession, RequestState, run_submission};

#[derive(Parser)]
#[command(
    name = "diaview",
    about = "Submit audio for diarized transcription and view the result"
)]
struct Cli {
    /// Audio recording to analyze
    audio: PathBuf,

    /// RTTM reference file for server-side DER scoring
    #[arg(long)]
    rttm: Option<PathBuf>,

    /// Base URL of the analysis service
    #[arg(long, env = "DIAVIEW_BASE_URL")]
    base_url: String,

    /// Print the analysis result as JSON instead of the rendered transcript
    #[arg(long)]
    json: bool,
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "warn".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let (audio_name, audio_bytes) = match read_file(&cli.audio).await {
        Ok(read) => read,
        Err(err) => {
            eprintln!("Failed to read {}: {err}", cli.audio.display());
            return ExitCode::from(2);
        }
    };
    let mut request = AnalyzeRequest::new(FileUpload::new(
        audio_name,
        dia_audio_mime::content_type_for_path(&cli.audio),
        audio_bytes,
    ));

    if let Some(rttm) = &cli.rttm {
        let (rttm_name, rttm_bytes) = match read_file(rttm).await {
            Ok(read) => read,
            Err(err) => {
                eprintln!("Failed to read {}: {err}", rttm.display());
                return ExitCode::from(2);
            }
        };
        request = request.with_reference(FileUpload::new(rttm_name, "text/plain", rttm_bytes));
    }

    let client = AnalyzeClient::builder().api_base(&cli.base_url).build();
    let mut session = AnalysisSession::new();

    println!(
        "Uploading {} and awaiting analysis...",
        request.audio.file_name
    );

    if let Err(rejected) = run_submission(&mut session, &client, request).await {
        eprintln!("ERROR: {}", rejected.message);
        return ExitCode::from(2);
    }

    match session.state() {
        RequestState::Succeeded(result) => {
            if cli.json {
                match serde_json::to_string_pretty(result) {
                    Ok(body) => println!("{body}"),
                    Err(err) => {
                        eprintln!("Failed to serialize result: {err}");
                        return ExitCode::FAILURE;
                    }
                }
            } else {
                render::print_result(result);
            }
            ExitCode::SUCCESS
        }
        RequestState::Failed { message } => {
            eprintln!("ERROR: {message}");
            ExitCode::FAILURE
        }
        // run_submission drove the one submission to completion above
        RequestState::Idle | RequestState::Submitting { .. } => unreachable!(),
    }
}

async fn read_file(path: &Path) -> std::io::Result<(String, Vec<u8>)> {
    let bytes = tokio::fs::read(path).await?;
    let file_name = path
        .file_name()
        .and_then(|name| name.to_str())
        .unwrap_or("upload")
        .to_string();
    Ok((file_name, bytes))
}
