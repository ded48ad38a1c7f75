//! Build a `.pptx` deck from a content payload file.
//!
//! The input is either the payload JSON itself or a raw model response that
//! contains it (optionally wrapped in a Markdown code fence).
//!
//! # Usage
//!
//! ```sh
//! cargo run --example build_deck -- payload.json --topic "Coral reefs"
//! ```
//!
//! Replay a recorded model response into a widescreen deck:
//! ```sh
//! RUST_LOG=debug cargo run --example build_deck -- response.txt \
//!     --model-text --size widescreen -o reefs.pptx
//! ```

use clap::{Parser, ValueEnum};
use slidesmith::common::FontSize;
use slidesmith::content::StaticSource;
use slidesmith::{AssemblyOptions, ContentPayload, DeckRequest, generate};
use std::fs;
use std::path::PathBuf;

/// Assemble a PowerPoint deck from slide content
#[derive(Parser, Debug)]
#[command(name = "build_deck", version)]
struct Args {
    /// Payload file to read
    #[arg(value_name = "INPUT")]
    input: PathBuf,

    /// Output file; defaults to a name derived from the topic
    #[arg(short, long, value_name = "OUTPUT")]
    output: Option<PathBuf>,

    /// Presentation topic, used for the default output name
    #[arg(short, long, default_value = "Presentation")]
    topic: String,

    /// Treat the input as a raw model response instead of plain JSON
    #[arg(long)]
    model_text: bool,

    /// Slide size
    #[arg(long, value_enum, default_value = "standard")]
    size: SizeArg,

    /// Bullet font size in points
    #[arg(long, default_value_t = 24)]
    bullet_size: u32,

    /// Title of the closing slide when the payload has none
    #[arg(long)]
    final_title: Option<String>,
}

/// Slide size options for CLI
#[derive(Debug, Clone, Copy, ValueEnum)]
enum SizeArg {
    /// 10" x 7.5" (4:3)
    Standard,
    /// 13.33" x 7.5" (16:9)
    Widescreen,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();
    let args = Args::parse();

    let text = fs::read_to_string(&args.input)?;
    let payload = if args.model_text {
        ContentPayload::from_model_text(&text)?
    } else {
        ContentPayload::from_json(&text)?
    };

    let mut options = AssemblyOptions::new()
        .with_bullet_font_size(FontSize::from_hundredths(args.bullet_size.saturating_mul(100)));
    if let SizeArg::Widescreen = args.size {
        options = options.widescreen();
    }
    if let Some(title) = args.final_title {
        options = options.with_final_title(title);
    }

    let request = DeckRequest::new(args.topic);
    let deck = generate(&StaticSource::new(payload), &request, &options)?;

    let output = args.output.unwrap_or_else(|| PathBuf::from(&deck.filename));
    fs::write(&output, &deck.bytes)?;

    for report in &deck.sections {
        println!("  {report}");
    }
    println!(
        "Wrote {} ({} bytes, {} of {} sections omitted)",
        output.display(),
        deck.bytes.len(),
        deck.omitted_count(),
        deck.sections.len()
    );

    Ok(())
}
