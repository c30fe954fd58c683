use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use pal3_formats::{DecoderConfig, GameVariant, SceneFileDecoder};

#[derive(Parser)]
struct Args {
    /// Path to a .scn file to inspect.
    input: PathBuf,

    /// Decode object records with the PAL3A layout.
    #[arg(long)]
    pal3a: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();
    let variant = if args.pal3a {
        GameVariant::Pal3A
    } else {
        GameVariant::Pal3
    };
    let decoder = SceneFileDecoder::new(DecoderConfig {
        variant,
        ..Default::default()
    })?;
    let decoded = decoder.open(&args.input)?;
    let scene = &decoded.scene;
    println!(
        "SCN {}: {} / {} ({} npcs, {} objects, {} diagnostics)",
        args.input.display(),
        scene.info.city_name,
        scene.info.name,
        scene.npcs.len(),
        scene.objects.len(),
        decoded.diagnostics.len()
    );
    let teleports = scene.objects.iter().filter(|object| object.links_to_scene());
    for object in teleports {
        println!(
            "  object {} -> {} (#{})",
            object.id, object.dependent_scene_name, object.dependent_id
        );
    }
    Ok(())
}
