use std::env;
use std::fs;
use std::path::Path;

use hybrid_image::{build_hybrid, DistancePyramidExt};
use image::{DynamicImage, Rgb32FImage};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let args: Vec<String> = env::args().collect();

    if args.len() != 5 {
        eprintln!(
            "Usage: {} <distant_image> <close_image> <sigma> <output_dir>",
            args[0]
        );
        eprintln!("Example: {} dog.png cat.png 5.0 out", args[0]);
        std::process::exit(1);
    }

    let distant_path = &args[1];
    let close_path = &args[2];
    let sigma: f32 = args[3].parse().map_err(|_| "Invalid sigma")?;
    let output_dir = Path::new(&args[4]);

    // A missing or undecodable input is fatal for the whole run
    let distant = image::open(distant_path)?.to_rgb32f();
    println!(
        "Loaded distant image {}: {}x{}",
        distant_path,
        distant.width(),
        distant.height()
    );
    let close = image::open(close_path)?.to_rgb32f();
    println!(
        "Loaded close image {}: {}x{}",
        close_path,
        close.width(),
        close.height()
    );

    fs::create_dir_all(output_dir)?;

    let stages = build_hybrid(&distant, &close, sigma)?;
    let pyramid = stages.hybrid.distance_pyramid(&stages.kernel, 5)?;

    save_stage(stages.low_pass_distant, output_dir, "low_pass_distant")?;
    save_stage(stages.low_pass_close, output_dir, "low_pass_close")?;
    save_stage(stages.high_pass_close, output_dir, "high_pass_close")?;
    save_stage(stages.hybrid, output_dir, "hybrid")?;
    save_stage(pyramid, output_dir, "hybrid_pyramid")?;

    println!("Hybrid image (sigma={}) applied successfully!", sigma);
    println!("Output saved to: {}", output_dir.display());

    Ok(())
}

/// Encodes one pipeline stage as 8-bit PNG. Values are clamped to the
/// displayable range here, at the encoding boundary only.
fn save_stage(
    stage: Rgb32FImage,
    output_dir: &Path,
    label: &str,
) -> Result<(), Box<dyn std::error::Error>> {
    let path = output_dir.join(format!("{label}.png"));
    DynamicImage::ImageRgb32F(stage).to_rgb8().save(&path)?;
    println!("Saved {label} to {}", path.display());
    Ok(())
}
