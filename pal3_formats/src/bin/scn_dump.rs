use std::io::{self, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use log::warn;
use pal3_formats::{DecoderConfig, GameVariant, SceneFileDecoder};

/// Decode a PAL3 scene (.scn) file and print its contents.
#[derive(Parser, Debug)]
#[command(about = "Inspect PAL3 / PAL3A scene files", version)]
struct Args {
    /// Path to the `.scn` file to decode
    path: PathBuf,

    /// Object record layout to use (pal3 or pal3a)
    #[arg(long, default_value_t = GameVariant::Pal3)]
    variant: GameVariant,

    /// Windows code page of embedded strings (936 = GBK, 950 = Big5)
    #[arg(long, default_value_t = 936)]
    codepage: u16,

    /// Emit the whole descriptor as pretty-printed JSON
    #[arg(long)]
    json: bool,
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    let decoder = SceneFileDecoder::new(DecoderConfig {
        variant: args.variant,
        codepage: args.codepage,
    })?;
    let decoded = decoder.open(&args.path)?;

    for diagnostic in &decoded.diagnostics {
        warn!("{}: {diagnostic}", args.path.display());
    }

    if args.json {
        let stdout = io::stdout();
        let mut out = stdout.lock();
        serde_json::to_writer_pretty(&mut out, &decoded).context("serialising scene")?;
        writeln!(out)?;
        return Ok(());
    }

    let scene = &decoded.scene;
    let info = &scene.info;
    println!(
        "scene {}/{} model {} type {} lightmap {} skybox {} (version {})",
        info.city_name,
        info.name,
        info.model,
        info.scene_type.0,
        info.light_map,
        info.sky_box,
        scene.header.version
    );

    println!("npcs: {}", scene.npcs.len());
    for npc in &scene.npcs {
        let [x, y, z] = npc.position();
        println!(
            "{:>4}  kind {:>3}  script {:>6}  ({x:>9.2}, {y:>9.2}, {z:>9.2})  {} [{}]",
            npc.id, npc.kind.0, npc.script_id, npc.name, npc.texture
        );
    }

    println!("objects: {}", scene.objects.len());
    for object in &scene.objects {
        let model = object.model_asset(info);
        println!(
            "{:>4}  type {:>3}  script {:>6}  {:<32} {}",
            object.id,
            object.object_type.0,
            object.script_id,
            object.name,
            model.path().unwrap_or("-")
        );
    }

    Ok(())
}
