use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Parser;

use ginotate::config::ReplayScript;
use ginotate::{EditorOutcome, HostAdapter, SourceImage};

#[derive(Parser)]
#[command(name = "ginotate")]
#[command(about = "Replay an annotation script over a screenshot")]
#[command(version)]
struct Cli {
    /// Screenshot: an image file, or a text file holding a data: URL
    input: PathBuf,
    /// JSON replay script
    script: PathBuf,
    /// Where to write the result (defaults to a timestamped file next to the input)
    #[arg(short, long)]
    output: Option<PathBuf>,
    /// Size the screenshot was captured at in page units, as WIDTHxHEIGHT
    #[arg(long, value_parser = parse_size)]
    logical_size: Option<(u32, u32)>,
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    let cli = Cli::parse();

    match run(&cli)? {
        Some(output) => println!("{}", output.display()),
        None => log::info!("Annotation cancelled; nothing written"),
    }
    Ok(())
}

/// Replay the script; returns the written path, or None when it cancelled
fn run(cli: &Cli) -> Result<Option<PathBuf>> {
    let bytes = std::fs::read(&cli.input)
        .with_context(|| format!("Failed to read input: {}", cli.input.display()))?;
    let mut screenshot = SourceImage::from_input(&bytes)
        .with_context(|| format!("Failed to decode input: {}", cli.input.display()))?;
    if let Some((width, height)) = cli.logical_size {
        screenshot = screenshot.with_logical_size(width, height);
    }
    let script = ReplayScript::load(&cli.script)?;

    let mut host = HostAdapter::new();
    host.set_screenshot(screenshot);
    host.open_editor()?;
    match host.replay(script.messages()) {
        Some(EditorOutcome::Saved) => {}
        Some(EditorOutcome::Discarded) => return Ok(None),
        None => anyhow::bail!("Replay script did not close the editor"),
    }

    let result = host
        .screenshot()
        .context("Screenshot missing after replay")?;
    let output = cli
        .output
        .clone()
        .unwrap_or_else(|| default_output_path(&cli.input, result));
    std::fs::write(&output, result.to_output()?)
        .with_context(|| format!("Failed to write output: {}", output.display()))?;

    log::info!("Annotated screenshot written to {}", output.display());
    Ok(Some(output))
}

fn parse_size(s: &str) -> Result<(u32, u32), String> {
    let (width, height) = s
        .split_once(['x', 'X'])
        .ok_or_else(|| format!("expected WIDTHxHEIGHT, got '{s}'"))?;
    let parse = |v: &str| {
        v.trim()
            .parse::<u32>()
            .map_err(|e| format!("invalid dimension '{v}': {e}"))
    };
    Ok((parse(width)?, parse(height)?))
}

fn default_output_path(input: &Path, result: &SourceImage) -> PathBuf {
    let stem = input
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| "screenshot".to_string());
    let extension = if result.encoding.data_url {
        "txt"
    } else {
        result
            .encoding
            .format
            .extensions_str()
            .first()
            .copied()
            .unwrap_or("png")
    };
    let stamp = chrono::Local::now().format("%Y-%m-%d_%H-%M-%S");
    input.with_file_name(format!("{stem}-annotated-{stamp}.{extension}"))
}
