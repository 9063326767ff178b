use edge_mask::image::ImageBufU8;
use edge_mask::{EdgePipeline, PipelineParams};

fn main() {
    // Demo stub: builds a synthetic RGB image with a bright square and runs the pipeline
    let w = 64usize;
    let h = 48usize;
    let mut rgb = vec![20u8; w * h * 3];
    for y in 16..32 {
        for x in 24..40 {
            let i = (y * w + x) * 3;
            rgb[i..i + 3].copy_from_slice(&[230, 200, 180]);
        }
    }

    let result = ImageBufU8::new(w, h, 3, rgb)
        .and_then(|img| EdgePipeline::new(PipelineParams::default())?.run(img.as_view()));
    match result {
        Ok(out) => println!(
            "edge_pixels={} max_magnitude={:.1} latency_ms={:.3}",
            out.report.edge_pixels, out.report.magnitude.max, out.report.timings.total_ms
        ),
        Err(err) => {
            eprintln!("Error: {err}");
            std::process::exit(1);
        }
    }
}
