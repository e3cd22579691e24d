//! azure-tts-say: synthesize a line of text to an audio file
//!
//! Usage:
//!   azure-tts-say [OPTIONS] <text>...
//!
//! Reads the subscription key from AZURE_KEY and the region from AZURE_REGION.

use anyhow::{bail, Context};
use azure_tts::{AudioOutput, Gender, Locale, Region, SpeechClient, VoiceRequest};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

const DEFAULT_TEXT: &str = "64 BASIC BYTES FREE. READY.";
const DEFAULT_VOICE: &str = "en-US-AvaMultilingualNeural";
const DEFAULT_OUT: &str = "audio.mp3";

struct Options {
    text: String,
    voice: String,
    locale: Locale,
    gender: Gender,
    format: AudioOutput,
    out: PathBuf,
}

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    if args.iter().any(|a| a == "--help" || a == "-h") {
        print_usage();
        return;
    }
    if args.iter().any(|a| a == "--version" || a == "-V") {
        println!("azure-tts-say {}", env!("CARGO_PKG_VERSION"));
        return;
    }

    if let Err(e) = run(&args).await {
        eprintln!("ERROR: {:#}", e);
        std::process::exit(1);
    }
}

fn print_usage() {
    println!(
        r#"azure-tts-say: synthesize text with Azure text-to-speech

USAGE:
    azure-tts-say [OPTIONS] [TEXT]...

OPTIONS:
    --voice <name>      Voice name (default: {DEFAULT_VOICE})
    --locale <tag>      Locale, e.g. en-US (default: en-US)
    --gender <gender>   Male or Female (default: Female)
    --format <format>   Audio encoding (default: audio-16khz-32kbitrate-mono-mp3)
    --out <path>        Output file (default: {DEFAULT_OUT})
    -h, --help          Show this help message

ENVIRONMENT:
    AZURE_KEY           Speech resource subscription key
    AZURE_REGION        Speech resource region, e.g. westus2
    RUST_LOG            Log filter, e.g. azure_tts=debug"#
    );
}

fn parse_args(args: &[String]) -> anyhow::Result<Options> {
    let mut options = Options {
        text: String::new(),
        voice: DEFAULT_VOICE.to_string(),
        locale: Locale::EnUs,
        gender: Gender::Female,
        format: AudioOutput::Audio16khz32kbitrateMonoMp3,
        out: PathBuf::from(DEFAULT_OUT),
    };
    let mut words = Vec::new();

    let mut iter = args.iter();
    while let Some(arg) = iter.next() {
        let mut value = |flag: &str| {
            iter.next()
                .cloned()
                .with_context(|| format!("{flag} requires a value"))
        };
        match arg.as_str() {
            "--voice" => options.voice = value("--voice")?,
            "--locale" => options.locale = Locale::from(value("--locale")?),
            "--gender" => options.gender = value("--gender")?.parse()?,
            "--format" => options.format = value("--format")?.parse()?,
            "--out" => options.out = PathBuf::from(value("--out")?),
            other if other.starts_with("--") => bail!("unknown option: {other}"),
            other => words.push(other.to_string()),
        }
    }

    options.text = if words.is_empty() {
        DEFAULT_TEXT.to_string()
    } else {
        words.join(" ")
    };
    Ok(options)
}

async fn run(args: &[String]) -> anyhow::Result<()> {
    let options = parse_args(args)?;

    let key = std::env::var("AZURE_KEY")
        .ok()
        .filter(|k| !k.is_empty())
        .context("please set your AZURE_KEY environment variable")?;
    let region = std::env::var("AZURE_REGION")
        .ok()
        .filter(|r| !r.is_empty())
        .context("please set your AZURE_REGION environment variable")?;

    let client = SpeechClient::new(key, Region::from(region))
        .await
        .context("failed to create client")?;

    let request = VoiceRequest::new(options.text, options.voice, options.locale, options.gender);
    let result = client.synthesize(&request, options.format).await;
    client.shutdown();

    let audio = result.context("unable to synthesize")?;
    std::fs::write(&options.out, &audio)
        .with_context(|| format!("unable to write {}", options.out.display()))?;
    println!("wrote {} bytes to {}", audio.len(), options.out.display());
    Ok(())
}
