use image::Rgb;
use serde::{Deserialize, Serialize};

use super::{
    escape_time::{normalized_escape_value, ConvergenceParams},
    file_io::{serialize_to_json_or_panic, write_image_to_file_or_panic, FilePrefix},
    palette::PaletteKind,
    raster::{blit_rgba, create_buffer, generate_color_image_in_place},
    view::{PanDirection, ViewState, ZoomDirection},
};

/// Full configuration of the explorer: where to look, how hard to iterate,
/// and how to color the result. This is the parameter-file format.
#[derive(Serialize, Deserialize, Debug, Clone, Default)]
pub struct ExplorerParams {
    pub view: ViewState,
    pub convergence: ConvergenceParams,
    pub palette: PaletteKind,
}

/**
 * Double-buffered raster engine, the seam that a UI collaborator drives.
 * Owns the view state exclusively: pan and zoom mutate it in place and each
 * transition is followed by a blocking full-frame render, so the display
 * buffer always reflects the current view. There are no partial updates.
 */
pub struct Explorer {
    view: ViewState,
    convergence: ConvergenceParams,
    palette: PaletteKind,
    display_buffer: Vec<Vec<Rgb<u8>>>, // read by `draw()` and `buffer()`
    scratch_buffer: Vec<Vec<Rgb<u8>>>, // written in place on `render()`
}

impl Explorer {
    /// Builds the engine and renders the first frame.
    pub fn new(params: ExplorerParams) -> Explorer {
        let mut explorer = Explorer {
            display_buffer: create_buffer(Rgb([0, 0, 0]), &params.view.resolution),
            scratch_buffer: create_buffer(Rgb([0, 0, 0]), &params.view.resolution),
            view: params.view,
            convergence: params.convergence,
            palette: params.palette,
        };
        explorer.render();
        explorer
    }

    pub fn view(&self) -> &ViewState {
        &self.view
    }

    pub fn palette(&self) -> PaletteKind {
        self.palette
    }

    /// The current frame, indexed `[x][y]`.
    pub fn buffer(&self) -> &[Vec<Rgb<u8>>] {
        &self.display_buffer
    }

    pub fn params(&self) -> ExplorerParams {
        ExplorerParams {
            view: self.view.clone(),
            convergence: self.convergence.clone(),
            palette: self.palette,
        }
    }

    /// Recompute the full frame for the current view and palette.
    pub fn render(&mut self) {
        let view = self.view.clone();
        let convergence = self.convergence.clone();
        let palette = self.palette;
        generate_color_image_in_place(
            &view,
            |point| palette.compute_pixel(normalized_escape_value(point, &convergence)),
            &mut self.scratch_buffer,
        );
        std::mem::swap(&mut self.scratch_buffer, &mut self.display_buffer);
    }

    pub fn pan(&mut self, direction: PanDirection) {
        self.view.pan(direction);
        self.render();
    }

    pub fn zoom(&mut self, direction: ZoomDirection) {
        self.view.zoom(direction);
        self.render();
    }

    /// Swap the active palette; the escape values themselves are recomputed,
    /// not cached across frames.
    pub fn set_palette(&mut self, palette: PaletteKind) {
        self.palette = palette;
        self.render();
    }

    /// Renders the display buffer into a row-major RGBA frame.
    pub fn draw(&self, frame: &mut [u8]) {
        blit_rgba(&self.display_buffer, &self.view.resolution, frame);
    }

    /// Save the current frame as a PNG, next to a JSON echo of the
    /// parameters that produced it.
    pub fn render_to_file(&self, file_prefix: &FilePrefix) {
        serialize_to_json_or_panic(file_prefix.with_suffix(".json"), &self.params());

        let mut imgbuf = image::ImageBuffer::new(self.view.resolution[0], self.view.resolution[1]);
        for (x, y, pixel) in imgbuf.enumerate_pixels_mut() {
            *pixel = self.display_buffer[x as usize][y as usize];
        }
        write_image_to_file_or_panic(file_prefix.with_suffix(".png"), |f| imgbuf.save(f));
    }
}
