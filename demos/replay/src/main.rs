//! Bodyline replay demo
//!
//! ```text
//! replay record <frames> [config.json]   simulate a camera and record a session
//! replay play <session-log> [config.json] print the projected skeleton per frame
//! ```

use std::error::Error;

use bodyline_record::SessionReader;
use bodyline_runtime::{telemetry, BodyStream, StreamConfig};
use bodyline_skeleton::{BoneLengths, SkeletonGeometry};
use bodyline_test::{OcclusionConfig, PinholeProjection, PoseGenerator, ScriptedSource};

fn usage() {
    println!("Usage: replay record <frames> [config.json]");
    println!("       replay play <session-log> [config.json]");
}

fn main() -> Result<(), Box<dyn Error>> {
    let args: Vec<String> = std::env::args().collect();
    if args.len() < 3 {
        usage();
        return Ok(());
    }

    let config = StreamConfig::load(args.get(3).map(String::as_str).unwrap_or("bodyline.json"))?;
    telemetry::init_from_config(&config)?;

    match args[1].as_str() {
        "record" => record(config, args[2].parse()?),
        "play" => play(&config, &args[2]),
        _ => {
            usage();
            Ok(())
        }
    }
}

fn record(config: StreamConfig, frames: usize) -> Result<(), Box<dyn Error>> {
    let mut generator = PoseGenerator::with_seed(OcclusionConfig::default(), 1);
    let source = ScriptedSource::new(PinholeProjection::default())
        .with_body_frames((0..frames).map(|_| generator.next_frame()));
    let mut stream = BodyStream::new(source, config);

    let path = stream.init_record()?.to_path_buf();
    println!("Recording to {}", path.display());

    while stream.has_new_body_frame() {
        let Some(body) = stream.refresh_body() else {
            tracing::debug!("no tracked body in frame");
            continue;
        };
        let drawn = stream.draw_body(&body);
        tracing::debug!(segments = drawn.len(), "body drawn");
        stream.record_frame(&body)?;
    }

    stream.close()?;
    let stats = stream.stats();
    println!(
        "{} frames, {} recorded, {} segments drawn",
        stats.body_frames, stats.frames_recorded, stats.segments_drawn
    );
    Ok(())
}

fn play(config: &StreamConfig, path: &str) -> Result<(), Box<dyn Error>> {
    let geometry = SkeletonGeometry::new(BoneLengths::uniform(config.initial_bone_length));
    let bones = geometry.hierarchy().bones();

    for (frame, angles) in SessionReader::open(path)?.enumerate() {
        let radians = angles?.to_radians();
        println!("frame {frame}");
        let lines = geometry.derive_skeleton_lines(config.root_point, &radians);
        for (bone, line) in bones.iter().zip(lines) {
            println!(
                "  {:>13} -> {:<13} ({:8.2}, {:8.2}) -> ({:8.2}, {:8.2})",
                bone.parent.name(),
                bone.child.name(),
                line.start.x,
                line.start.y,
                line.end.x,
                line.end.y,
            );
        }
    }

    tracing::info!(path, "replay finished");
    Ok(())
}
