use anyhow::Context;
use log::info;

use sphere_scene::{SceneBuilder, SceneConfig};

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let config = SceneConfig::default();
    let scene = SceneBuilder::new(config.clone())
        .build()
        .with_context(|| format!("failed to build scene from {}", config.sphere_csv.display()))?;

    let report = scene.load_report();
    println!("line number: {}", report.sphere_lines);
    println!(
        "position lines: x {}, y {}",
        report.x_position_lines, report.y_position_lines
    );

    if let Some(root) = scene.root_node() {
        info!("Root group '{}' ready", root.name);
    }
    println!("{}", scene.statistics());

    Ok(())
}
