#![deny(unsafe_code)]
//! CLI binary for the texgen procedural texture engine.
//!
//! Subcommands:
//! - `render <program.json>` — run a layer program, write PNG
//! - `list` — print available algorithms and blend modes

mod error;

use clap::{Parser, Subcommand};
use error::CliError;
use std::io::Read;
use std::path::PathBuf;
use std::process;

use texgen_algorithms::AlgorithmKind;
use texgen_core::blend::BlendMode;
use texgen_render::{snapshot, Compositor, Layer};

#[derive(Parser)]
#[command(name = "texgen", about = "Procedural texture generator CLI")]
struct Cli {
    /// Output as JSON instead of human-readable text.
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Render a layer program to a PNG.
    Render {
        /// Path to the program JSON (an array of layer records), or `-`
        /// to read it from stdin.
        program: PathBuf,

        /// Texture width in pixels.
        #[arg(short = 'W', long, default_value_t = 256)]
        width: usize,

        /// Texture height in pixels.
        #[arg(short = 'H', long, default_value_t = 256)]
        height: usize,

        /// Output file path.
        #[arg(short, long, default_value = "output.png")]
        output: PathBuf,

        /// Scale channels to 8-bit without clamping to [0, 1] first.
        #[arg(long)]
        raw_range: bool,
    },
    /// List available algorithms and blend modes.
    List,
}

fn read_program(path: &PathBuf) -> Result<Vec<Layer>, CliError> {
    let text = if path.to_str() == Some("-") {
        let mut buf = String::new();
        std::io::stdin()
            .read_to_string(&mut buf)
            .map_err(|e| CliError::Io(format!("reading stdin: {e}")))?;
        buf
    } else {
        std::fs::read_to_string(path)
            .map_err(|e| CliError::Io(format!("reading {}: {e}", path.display())))?
    };
    serde_json::from_str(&text).map_err(|e| CliError::Input(format!("invalid program JSON: {e}")))
}

fn run(cli: Cli) -> Result<(), CliError> {
    match cli.command {
        Command::List => {
            let algorithms = AlgorithmKind::list_names();
            let blend_modes = BlendMode::list_names();
            if cli.json {
                let info = serde_json::json!({
                    "algorithms": algorithms,
                    "blendModes": blend_modes,
                });
                println!("{}", serde_json::to_string_pretty(&info)?);
            } else {
                println!("Algorithms:");
                for name in algorithms {
                    println!("  {name}");
                }
                println!("Blend modes:");
                println!("  {}", blend_modes.join(", "));
            }
        }
        Command::Render {
            program,
            width,
            height,
            output,
            raw_range,
        } => {
            let layers = read_program(&program)?;

            let mut compositor = Compositor::new(width, height)?.with_clamp_output(!raw_range);
            compositor.set_program(&layers)?;
            compositor.render()?;

            snapshot::write_png(compositor.buffer(), compositor.clamp_output(), &output)?;

            if cli.json {
                let info = serde_json::json!({
                    "layers": layers.len(),
                    "width": width,
                    "height": height,
                    "output": output.display().to_string(),
                });
                println!("{}", serde_json::to_string_pretty(&info)?);
            } else {
                eprintln!(
                    "rendered {} layer(s) ({width}x{height}) -> {}",
                    layers.len(),
                    output.display()
                );
            }
        }
    }

    Ok(())
}

fn main() {
    let cli = Cli::parse();
    let json_mode = cli.json;
    if let Err(e) = run(cli) {
        if json_mode {
            let j = serde_json::json!({"error": e.to_string(), "exit_code": e.exit_code()});
            eprintln!("{}", serde_json::to_string_pretty(&j).unwrap_or_default());
        } else {
            eprintln!("error: {e}");
        }
        process::exit(e.exit_code());
    }
}
