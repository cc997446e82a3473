use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use squircle::logging::{init_logging, LoggingConfig};
use squircle::models::{Brush, CornerSize, CornerSpec, StrokeStyle, VariantKind};
use squircle::{convert_svg_to_png, generate_svg, render_to_png, LayoutDirection, Smoothing};
use squircle::{SquircleElement, SquircleScene};
use std::fs;
use std::path::PathBuf;

#[derive(Debug, Clone, Copy, ValueEnum)]
enum Variant {
    Primary,
    Gentle,
}

#[derive(Parser, Debug)]
#[command(name = "squircle")]
#[command(about = "Render squircles to PNG or SVG", long_about = None)]
struct Args {
    /// Scene JSON file; when omitted a single squircle is drawn from the flags below
    #[arg(value_name = "FILE")]
    input: Option<PathBuf>,

    /// Output file path (defaults to the input name, or squircle.png)
    /// Use .svg extension to export as SVG, .png for PNG
    #[arg(short, long, value_name = "FILE")]
    output: Option<PathBuf>,

    /// Shape width
    #[arg(long, default_value_t = 200.0)]
    width: f32,

    /// Shape height; derived from --aspect-ratio when not given
    #[arg(long)]
    height: Option<f32>,

    /// Width divided by height, used when --height is absent
    #[arg(long, default_value_t = 1.0)]
    aspect_ratio: f32,

    /// Corner radius for all corners, in pixels ("24") or percent ("50%")
    #[arg(short, long, default_value = "100%")]
    radius: CornerSize,

    /// Per-corner radii as TOP_START,TOP_END,BOTTOM_START,BOTTOM_END (overrides --radius)
    #[arg(long, value_delimiter = ',', num_args = 4)]
    corners: Option<Vec<CornerSize>>,

    /// Smoothing: 0-100, a legacy 0.55-1.0 float, or none/small/medium/large/full
    #[arg(short, long, default_value = "medium")]
    smoothing: Smoothing,

    /// Enlarge corners to compensate for smoothing
    #[arg(long)]
    upscale: bool,

    /// Bow the straight edges with extra control points
    #[arg(long)]
    edge_pinch: bool,

    #[arg(long, value_enum, default_value_t = Variant::Primary)]
    variant: Variant,

    /// Lay out right-to-left (mirrors start/end corners)
    #[arg(long)]
    rtl: bool,

    /// Fill color (#RRGGBB or #RRGGBBAA)
    #[arg(long, default_value = "#3f51b5")]
    fill: String,

    /// Second fill color; turns the fill into a linear gradient
    #[arg(long)]
    gradient_to: Option<String>,

    /// Gradient angle in degrees
    #[arg(long, default_value_t = 90.0)]
    gradient_angle: f32,

    /// Stroke color
    #[arg(long)]
    stroke: Option<String>,

    #[arg(long, default_value_t = 2.0)]
    stroke_width: f32,

    /// Background color (#RRGGBB, #RRGGBBAA, or "transparent")
    #[arg(long, value_parser = parse_color_arg)]
    background: Option<String>,

    /// PNG compression quality 0-100
    #[arg(long, default_value_t = 75, value_parser = clap::value_parser!(u8).range(0..=100))]
    quality: u8,

    /// Output DPI for PNG (source is 96 DPI)
    #[arg(long)]
    dpi: Option<u32>,

    /// Render PNG through SVG + resvg instead of drawing directly with tiny-skia
    #[arg(long)]
    legacy: bool,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn parse_color_arg(value: &str) -> Result<String, String> {
    squircle::color_utils::parse_color(value)
        .map(|_| value.to_string())
        .map_err(|e| e.to_string())
}

/// Single-element scene built from the command-line flags
fn scene_from_args(args: &Args) -> SquircleScene {
    let height = args.height.unwrap_or_else(|| {
        if args.aspect_ratio > 0.0 {
            args.width / args.aspect_ratio
        } else {
            args.width
        }
    });

    let corners = match args.corners.as_deref() {
        Some([top_start, top_end, bottom_start, bottom_end]) => CornerSpec::PerCorner {
            top_start: *top_start,
            top_end: *top_end,
            bottom_start: *bottom_start,
            bottom_end: *bottom_end,
        },
        _ => CornerSpec::Uniform(args.radius),
    };

    let fill = match &args.gradient_to {
        Some(to) => Brush::LinearGradient {
            stops: vec![args.fill.clone(), to.clone()],
            angle: args.gradient_angle,
        },
        None => Brush::solid(args.fill.clone()),
    };

    let element = SquircleElement {
        id: Some("squircle".to_string()),
        x: 0.0,
        y: 0.0,
        width: args.width,
        height,
        corners,
        variant: match args.variant {
            Variant::Primary => VariantKind::Primary,
            Variant::Gentle => VariantKind::Gentle,
        },
        smoothing: args.smoothing,
        upscale: args.upscale,
        edge_pinch: args.edge_pinch,
        direction: if args.rtl { LayoutDirection::RightToLeft } else { LayoutDirection::LeftToRight },
        fill: Some(fill),
        stroke: args.stroke.as_ref().map(|color| StrokeStyle {
            brush: Brush::solid(color.clone()),
            width: args.stroke_width,
        }),
        alpha: 1.0,
    };

    SquircleScene {
        width: None,
        height: None,
        background: None,
        elements: vec![element],
    }
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_logging(LoggingConfig::from_verbosity(args.verbose));

    let scene = match &args.input {
        Some(input) => {
            let json_content = fs::read_to_string(input)
                .with_context(|| format!("Failed to read input file: {input:?}"))?;
            serde_json::from_str::<SquircleScene>(&json_content)
                .context("Failed to parse squircle scene JSON")?
        }
        None => scene_from_args(&args),
    };
    log::info!("loaded scene with {} element(s)", scene.elements.len());

    // Determine output path
    let output_path = args.output.clone().unwrap_or_else(|| match &args.input {
        Some(input) => input.with_extension("png"),
        None => PathBuf::from("squircle.png"),
    });

    // Check if output is SVG or PNG based on extension
    let extension = output_path
        .extension()
        .and_then(|s| s.to_str())
        .unwrap_or("png")
        .to_lowercase();

    let background = args.background.as_deref();

    match extension.as_str() {
        "svg" => {
            let mut scene = scene;
            if let Some(bg) = background {
                scene.background = Some(bg.to_string());
            }
            let svg_content = generate_svg(&scene).context("Failed to generate SVG")?;
            fs::write(&output_path, svg_content)
                .with_context(|| format!("Failed to write SVG file: {output_path:?}"))?;
        }
        _ => {
            if args.legacy {
                let svg_content = generate_svg(&scene).context("Failed to generate SVG")?;
                convert_svg_to_png(&svg_content, &output_path, background, args.quality, args.dpi)
                    .with_context(|| format!("Failed to convert to PNG: {output_path:?}"))?;
            } else {
                render_to_png(&scene, &output_path, background, args.quality, args.dpi)
                    .with_context(|| format!("Failed to render PNG: {output_path:?}"))?;
            }
        }
    }

    println!("Successfully wrote {}", output_path.display());
    Ok(())
}
