// src/bin/boxlay-debug.rs
use std::fs;
use std::path::Path;
use std::sync::Arc;

use anyhow::{Context, Result};
use boxlay_core::{Element, Scene, Theme};
use boxlay_layout::{BoxLayout, Layout, SizeOverrides};
use clap::Parser;
use glam::Vec2;
use tracing::{debug, info};

#[derive(Parser)]
#[command(name = "boxlay-debug")]
#[command(about = "Runs a box layout over a scene file and prints the result")]
struct Args {
    /// Path to the scene (.json) file
    scene_file: String,

    /// Output format (tree, json)
    #[arg(long, default_value = "tree")]
    format: String,

    /// Padding between children. Overrides the value in the scene file.
    #[arg(long)]
    padding: Option<f32>,

    /// Number of layout passes to run
    #[arg(long, default_value_t = 1)]
    passes: usize,

    /// Save output to file instead of stdout
    #[arg(long)]
    output: Option<String>,

    /// Enable debug logging
    #[arg(short, long)]
    debug: bool,
}

struct LayoutReport<'a> {
    scene: &'a Scene,
    layout: &'a BoxLayout,
    theme: Theme,
    elements: &'a [Box<dyn Element>],
    min_before: Vec2,
    min_after: Vec2,
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

    if !Path::new(&args.scene_file).exists() {
        anyhow::bail!("Scene file not found: {}", args.scene_file);
    }

    info!("Loading scene file: {}", args.scene_file);
    let scene = boxlay_core::load_scene_file(&args.scene_file)
        .context("Failed to load scene file")?;

    let mut theme = scene.theme(Theme::default());
    if let Some(padding) = args.padding {
        if !padding.is_finite() || padding < 0.0 {
            anyhow::bail!("Padding must be a non-negative number, got {}", padding);
        }
        theme.padding = padding;
    }

    let contents = scene.build();
    let overrides = Arc::new(SizeOverrides::new());
    overrides.extend(contents.overrides);
    let layout = BoxLayout::with_overrides(scene.orientation, overrides);
    let mut elements = contents.elements;

    let min_before = layout.min_size(&elements, &theme);
    for pass in 0..args.passes {
        debug!("Layout pass {}", pass + 1);
        layout.layout(&mut elements, scene.container_size(), &theme);
    }
    let min_after = layout.min_size(&elements, &theme);

    let report = LayoutReport {
        scene: &scene,
        layout: &layout,
        theme,
        elements: &elements,
        min_before,
        min_after,
    };

    let output_text = match args.format.as_str() {
        "tree" => generate_tree_output(&report),
        "json" => generate_json_output(&report),
        _ => anyhow::bail!("Unknown format: {}. Use 'tree' or 'json'", args.format),
    }?;

    if let Some(output_file) = args.output {
        fs::write(&output_file, output_text)
            .with_context(|| format!("Failed to write to file: {}", output_file))?;
        info!("Output written to: {}", output_file);
    } else {
        print!("{}", output_text);
    }

    Ok(())
}

fn element_state(report: &LayoutReport, element: &dyn Element) -> &'static str {
    if !element.visible() {
        "hidden"
    } else if report.layout.is_spacer(element) {
        "spacer"
    } else {
        "placed"
    }
}

fn generate_tree_output(report: &LayoutReport) -> Result<String> {
    let mut output = String::new();
    let container = report.scene.container_size();

    output.push_str(&format!(
        "{:?} box {:.0}x{:.0} (padding {})\n",
        report.layout.orientation(),
        container.x,
        container.y,
        report.theme.padding
    ));

    let count = report.elements.len();
    for (i, (element, source)) in report
        .elements
        .iter()
        .zip(&report.scene.elements)
        .enumerate()
    {
        let branch = if i + 1 == count { "└── " } else { "├── " };
        output.push_str(&format!("{}{} #{}", branch, source.kind(), element.id()));

        match element_state(report, element.as_ref()) {
            "placed" => {
                let pos = element.position();
                let size = element.size();
                output.push_str(&format!(
                    " pos:({:.0},{:.0}) size:({:.0},{:.0})",
                    pos.x, pos.y, size.x, size.y
                ));
                if let Some(size_override) = report.layout.overrides().get(element.id()) {
                    output.push_str(&format!(
                        " [override {:.0}x{:.0}]",
                        size_override.x, size_override.y
                    ));
                }
            }
            state => output.push_str(&format!(" ({})", state)),
        }
        output.push('\n');
    }

    output.push_str(&format!(
        "min size: before ({:.0},{:.0}) after ({:.0},{:.0})\n",
        report.min_before.x, report.min_before.y, report.min_after.x, report.min_after.y
    ));

    Ok(output)
}

fn generate_json_output(report: &LayoutReport) -> Result<String> {
    let elements: Vec<serde_json::Value> = report
        .elements
        .iter()
        .zip(&report.scene.elements)
        .map(|(element, source)| {
            let pos = element.position();
            let size = element.size();
            serde_json::json!({
                "id": element.id(),
                "kind": source.kind(),
                "state": element_state(report, element.as_ref()),
                "position": [pos.x, pos.y],
                "size": [size.x, size.y],
            })
        })
        .collect();

    let value = serde_json::json!({
        "orientation": report.scene.orientation,
        "container": report.scene.container,
        "padding": report.theme.padding,
        "min_size_before": [report.min_before.x, report.min_before.y],
        "min_size_after": [report.min_after.x, report.min_after.y],
        "elements": elements,
    });

    let mut output = serde_json::to_string_pretty(&value)?;
    output.push('\n');
    Ok(output)
}
