/// Replay a scripted sequence of host events and print the resulting scene.
///
/// Usage:
///   cargo run --bin vecviz_replay -- <script> [config.json]
///
/// Script lines (blank lines and `#` comments are skipped):
///   resize <width> <height>
///   down <x> <y>
///   move <x> <y>
///   up
///   length <text>
///   step <degrees>
///   scene

use std::fs;
use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use vecviz::{ColorId, DrawPrimitive, EngineConfig, InteractionController, NotificationType, Point2};

fn main() -> Result<()> {
    env_logger::init();

    let args: Vec<String> = std::env::args().collect();
    if args.len() < 2 {
        eprintln!("Usage:");
        eprintln!("  vecviz_replay <script> [config.json]");
        std::process::exit(2);
    }

    let script_path = PathBuf::from(&args[1]);
    let config = match args.get(2) {
        Some(path) => {
            let json = fs::read_to_string(path)
                .with_context(|| format!("reading config {}", path))?;
            EngineConfig::from_json_str(&json).with_context(|| format!("parsing config {}", path))?
        }
        None => EngineConfig::default(),
    };

    let script = fs::read_to_string(&script_path)
        .with_context(|| format!("reading script {}", script_path.display()))?;

    let mut controller = InteractionController::new(config)?;

    for (index, raw_line) in script.lines().enumerate() {
        let line = raw_line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        run_line(&mut controller, line).with_context(|| format!("line {}: {}", index + 1, line))?;

        let pending = controller.notifications();
        if pending.is_empty() {
            continue;
        }
        if pending.has_type(NotificationType::ValidationFailed) {
            println!("  line {} rejected", index + 1);
        }
        for notification in controller.take_notifications() {
            println!("  {}", notification);
        }
    }

    print_scene(&controller);
    Ok(())
}

fn run_line(controller: &mut InteractionController, line: &str) -> Result<()> {
    let mut parts = line.split_whitespace();
    let command = parts.next().unwrap_or_default();
    let rest: Vec<&str> = parts.collect();

    match command {
        "resize" => {
            let [w, h] = two_numbers(&rest)?;
            controller.resize_surface(w, h)?;
        }
        "down" => {
            let [x, y] = two_numbers(&rest)?;
            let state = controller.pointer_down(Point2::new(x, y));
            println!("down ({}, {}) -> {:?}", x, y, state);
        }
        "move" => {
            let [x, y] = two_numbers(&rest)?;
            controller.pointer_move(Point2::new(x, y));
        }
        "up" => {
            controller.pointer_up();
        }
        "length" => {
            // Rejections are reported through notifications
            let _ = controller.set_scalar_length(&rest.join(" "));
        }
        "step" => {
            let step: f64 = rest
                .first()
                .context("missing step")?
                .parse()
                .context("step is not a number")?;
            controller.set_snap_step(step)?;
        }
        "scene" => print_scene(controller),
        other => bail!("unknown command {:?}", other),
    }
    Ok(())
}

fn two_numbers(args: &[&str]) -> Result<[f64; 2]> {
    if args.len() != 2 {
        bail!("expected two numbers, got {}", args.len());
    }
    Ok([
        args[0].parse().context("first value is not a number")?,
        args[1].parse().context("second value is not a number")?,
    ])
}

fn print_scene(controller: &InteractionController) {
    let scene = controller.scene();
    println!("--- scene ({} primitives) ---", scene.primitives.len());
    for primitive in &scene.primitives {
        match primitive {
            DrawPrimitive::Line { from, to, color, dashed, .. } => {
                println!("LINE   {} -> {} {}{}", from, to, paint(*color), if *dashed { " dashed" } else { "" });
            }
            DrawPrimitive::Arc { center, radius, start_angle, sweep_angle, color, .. } => {
                println!(
                    "ARC    c={} r={} start={:.2} sweep={:.2} {}",
                    center, radius, start_angle, sweep_angle, paint(*color)
                );
            }
            DrawPrimitive::Label { position, text, color, .. } => {
                println!("LABEL  {} {:?} {}", position, text, paint(*color));
            }
            DrawPrimitive::Circle { center, radius, color, filled, .. } => {
                println!("CIRCLE c={} r={} {}{}", center, radius, paint(*color), if *filled { " filled" } else { "" });
            }
        }
    }
    println!("{}", scene.summary);
}

/// Color name followed by its RGB triple
fn paint(color: ColorId) -> String {
    let (r, g, b) = color.rgb();
    format!("{} #{:02x}{:02x}{:02x}", color, r, g, b)
}
