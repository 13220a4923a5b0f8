use iter_num_tools::lin_space;
use serde::{Deserialize, Serialize};

use crate::core::file_io::{serialize_to_json_or_panic, write_image_to_file_or_panic, FilePrefix};
use crate::core::palette::PaletteKind;

/// Parameters for rendering a palette preview strip.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct SwatchParams {
    pub resolution: (u32, u32),
    pub palette: PaletteKind,
}

impl Default for SwatchParams {
    fn default() -> SwatchParams {
        SwatchParams {
            resolution: (500, 50),
            palette: PaletteKind::default(),
        }
    }
}

/// Sweep the palette query from 0 to 1 across the image width; every row is
/// identical, so the strip shows the full range of the palette at a glance.
pub fn generate_palette_swatch(
    params: &SwatchParams,
    file_prefix: FilePrefix,
) -> Result<(), Box<dyn std::error::Error>> {
    serialize_to_json_or_panic(file_prefix.with_suffix(".json"), params);

    let (width, height) = params.resolution;
    let queries: Vec<f64> = lin_space(0.0..=1.0, width as usize).collect();

    let mut imgbuf = image::ImageBuffer::new(width, height);
    for (x, _y, pixel) in imgbuf.enumerate_pixels_mut() {
        *pixel = params.palette.compute_pixel(queries[x as usize]);
    }

    write_image_to_file_or_panic(file_prefix.with_suffix(".png"), |f| imgbuf.save(f));
    Ok(())
}
