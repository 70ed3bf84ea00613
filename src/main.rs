use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use log::info;

use mediascribe::{media, Language, Settings, UploadPipeline, UploadedMedia};

#[derive(Parser)]
#[command(name = "mediascribe")]
#[command(about = "Transcribe an audio/video file via the ApyHub speech-to-text API")]
struct Cli {
    /// Audio or video file to transcribe.
    file: PathBuf,

    /// Language hint as a BCP-47 tag (en-US, my-MM, es-ES, fr-FR).
    #[arg(short, long, default_value = "en-US")]
    language: Language,
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_target(false)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "warn".into()),
        )
        .init();

    let cli = Cli::parse();

    // Credential absence is fatal before anything else runs.
    let settings = match Settings::from_env() {
        Ok(settings) => settings,
        Err(e) => {
            eprintln!("Configuration error: {}", e);
            return ExitCode::from(2);
        }
    };

    let filename = match cli.file.file_name().and_then(|n| n.to_str()) {
        Some(name) => name.to_string(),
        None => {
            eprintln!("Error: {} is not a valid file path.", cli.file.display());
            return ExitCode::FAILURE;
        }
    };

    if !media::has_allowed_extension(&filename) {
        eprintln!(
            "Error: unsupported file type. Supported extensions: {}.",
            media::ALLOWED_EXTENSIONS.join(", ")
        );
        return ExitCode::FAILURE;
    }

    let content = match std::fs::read(&cli.file) {
        Ok(content) => content,
        Err(e) => {
            eprintln!("Error: failed to read {}: {}", cli.file.display(), e);
            return ExitCode::FAILURE;
        }
    };

    let uploaded = UploadedMedia::new(content, filename, None);
    info!(
        "Uploading {} ({} bytes) for transcription in {}",
        uploaded.filename(),
        uploaded.byte_len(),
        cli.language
    );

    let pipeline = UploadPipeline::from_settings(&settings);
    match pipeline.process(&uploaded, cli.language) {
        Ok(document) => {
            println!("{}", document.render());
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("{}", e.user_message());
            ExitCode::FAILURE
        }
    }
}
