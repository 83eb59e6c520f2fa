use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use glam::Vec2;
use tracing::{debug, info};

use drape_core::{config, Anchor, Location, TransitionSettings};
use drape_layout::{AnchoredFrameEngine, AnimationPlan, Frame, FrameEngine, TransitionPhase};

#[derive(Debug, Clone, Copy, ValueEnum)]
enum Phase {
    Present,
    Dismiss,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum Format {
    Text,
    Json,
}

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Container width in pixels
    #[arg(long, default_value = "400")]
    width: f32,

    /// Container height in pixels
    #[arg(long, default_value = "800")]
    height: f32,

    /// JSON settings file; fields it leaves out come from the standard preset
    #[arg(short, long, value_name = "FILE")]
    settings: Option<PathBuf>,

    /// Settled anchor (name like `bottom_left`, or index 0-8)
    #[arg(long)]
    position: Option<String>,

    /// Entry direction anchor
    #[arg(long)]
    direction_in: Option<String>,

    /// Exit direction anchor
    #[arg(long)]
    direction_out: Option<String>,

    /// Which half of the transition to plan
    #[arg(long, value_enum, default_value = "present")]
    phase: Phase,

    /// Number of evenly spaced keyframes to sample from the plan
    #[arg(long, default_value = "0")]
    samples: u32,

    /// Output format
    #[arg(long, value_enum, default_value = "text")]
    format: Format,

    /// Enable debug logging
    #[arg(short, long)]
    debug: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    // Initialize logging
    let subscriber = tracing_subscriber::fmt()
        .with_max_level(if args.debug {
            tracing::Level::DEBUG
        } else {
            tracing::Level::INFO
        })
        .with_target(false)
        .with_writer(std::io::stderr)
        .compact()
        .finish();

    tracing::subscriber::set_global_default(subscriber)
        .context("Failed to set tracing subscriber")?;

    let settings = build_settings(&args)?;
    let warnings = settings
        .validate()
        .context("Transition settings cannot be resolved")?;
    if !warnings.is_empty() {
        info!("{} configuration warning(s)", warnings.len());
    }

    let container = Vec2::new(args.width, args.height);
    let engine = AnchoredFrameEngine::new().with_debug(args.debug);
    let frames = engine
        .compute_frames(container, &settings)
        .context("Failed to compute transition frames")?;

    let phase = match args.phase {
        Phase::Present => TransitionPhase::Presenting,
        Phase::Dismiss => TransitionPhase::Dismissing,
    };
    let plan = AnimationPlan::new(phase, &frames, &settings);
    let samples: Vec<_> = sample_points(args.samples)
        .map(|progress| (progress, plan.sample(progress)))
        .collect();

    match args.format {
        Format::Text => {
            println!("Container: {} x {}", container.x, container.y);
            println!("  start:     {}", describe_frame(&frames.start));
            println!("  displayed: {}", describe_frame(&frames.displayed));
            println!("  end:       {}", describe_frame(&frames.end));
            println!(
                "Plan: {:?} over {:.3}s, alpha {} -> {}",
                plan.phase,
                plan.duration.as_secs_f64(),
                plan.from.alpha,
                plan.to.alpha
            );
            match plan.chrome {
                Some(chrome) => println!(
                    "  chrome: rgba({}, {}, {}, {}), dismiss on tap: {}",
                    chrome.color.x, chrome.color.y, chrome.color.z, chrome.color.w, chrome.dismiss_on_tap
                ),
                None => println!("  chrome: none, background interactive"),
            }
            for (progress, keyframe) in &samples {
                println!(
                    "  t={:.3}: {} alpha {:.3} chrome {:.3}",
                    progress,
                    describe_frame(&keyframe.frame),
                    keyframe.alpha,
                    keyframe.chrome_alpha
                );
            }
        }
        Format::Json => {
            let samples: Vec<_> = samples
                .iter()
                .map(|(progress, keyframe)| serde_json::json!({ "progress": progress, "keyframe": keyframe }))
                .collect();
            let output = serde_json::json!({
                "container": container,
                "settings": settings,
                "frames": frames,
                "plan": plan,
                "samples": samples,
            });
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
    }

    Ok(())
}

fn build_settings(args: &Args) -> Result<TransitionSettings> {
    let mut settings = match &args.settings {
        Some(path) => config::load_settings(path)
            .with_context(|| format!("Failed to load settings: {}", path.display()))?,
        None => TransitionSettings::standard(),
    };

    if let Some(position) = &args.position {
        settings.position = Location::Anchor(parse_anchor(position)?);
    }
    if let Some(direction) = &args.direction_in {
        settings.direction_in = Location::Anchor(parse_anchor(direction)?);
    }
    if let Some(direction) = &args.direction_out {
        settings.direction_out = Location::Anchor(parse_anchor(direction)?);
    }

    debug!("Resolved settings: {:?}", settings);
    Ok(settings)
}

/// Indices go through the lenient mapping, which logs its own warning.
fn parse_anchor(value: &str) -> Result<Anchor> {
    if let Ok(index) = value.trim().parse::<i64>() {
        let (anchor, _warning) = Anchor::from_index(index);
        return Ok(anchor);
    }
    value
        .parse::<Anchor>()
        .with_context(|| format!("Invalid anchor: {}", value))
}

fn sample_points(count: u32) -> impl Iterator<Item = f32> {
    let steps = count.saturating_sub(1).max(1);
    (0..count).map(move |i| i as f32 / steps as f32)
}

fn describe_frame(frame: &Frame) -> String {
    format!(
        "origin ({}, {}) size {} x {}",
        frame.origin.x, frame.origin.y, frame.size.x, frame.size.y
    )
}
