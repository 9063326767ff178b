use edge_mask::config::edge::load_config;
use edge_mask::image::io::{save_gray_u8, save_magnitude_preview, write_json_file};
use edge_mask::process_path;
use std::env;
use std::path::Path;

fn main() {
    env_logger::init();
    if let Err(err) = run() {
        eprintln!("Error: {err}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), String> {
    let config_path = env::args().nth(1).ok_or_else(usage)?;
    let config = load_config(Path::new(&config_path)).map_err(|e| e.to_string())?;

    let output = process_path(&config.input, config.pipeline).map_err(|e| e.to_string())?;

    save_gray_u8(&output.mask, &config.output.mask_image).map_err(|e| e.to_string())?;
    println!(
        "Saved binary edge mask to {} ({} edge pixels, threshold {})",
        config.output.mask_image.display(),
        output.report.edge_pixels,
        output.report.threshold
    );

    if let Some(path) = &config.output.magnitude_image {
        save_magnitude_preview(output.magnitude(), path).map_err(|e| e.to_string())?;
        println!("Saved edge magnitude preview to {}", path.display());
    }

    if let Some(path) = &config.output.report_json {
        write_json_file(path, &output.report).map_err(|e| e.to_string())?;
        println!(
            "Saved report with {}-bin magnitude histogram to {}",
            output.histogram.num_bins(),
            path.display()
        );
    }

    Ok(())
}

fn usage() -> String {
    "Usage: edge_mask <config.json>".to_string()
}
