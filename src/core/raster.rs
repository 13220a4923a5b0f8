use image::Rgb;
use nalgebra::Vector2;
use rayon::iter::{IndexedParallelIterator, IntoParallelRefMutIterator, ParallelIterator};

use super::view::ViewState;

/**
 * Affine map from pixel indices to complex coordinates, captured from a
 * view so the render loop does not need the view itself.
 */
#[derive(Clone, Debug)]
pub struct PixelMap {
    origin: Vector2<f64>,
    step: f64,
}

impl PixelMap {
    pub fn new(view: &ViewState) -> PixelMap {
        PixelMap {
            origin: view.origin,
            step: view.step,
        }
    }

    // Map from pixel (integer) to point (float). Pixel rows grow downward
    // while the imaginary axis grows upward, hence the sign flip on the
    // vertical axis.
    pub fn map(&self, pixel: (u32, u32)) -> Vector2<f64> {
        Vector2::new(
            self.origin[0] + (pixel.0 as f64) * self.step,
            self.origin[1] - (pixel.1 as f64) * self.step,
        )
    }
}

pub fn create_buffer<T: Clone>(value: T, resolution: &Vector2<u32>) -> Vec<Vec<T>> {
    vec![vec![value; resolution[1] as usize]; resolution[0] as usize]
}

/**
 * Render a full frame: iterate over every pixel of the view, mapping its
 * index to a complex coordinate and passing that point through the supplied
 * renderer. The buffer is indexed `[x][y]`.
 *
 * @param point_renderer: maps from a point in the complex plane to the
 * color of the pixel anchored there.
 */
pub fn generate_color_image<F>(view: &ViewState, point_renderer: F) -> Vec<Vec<Rgb<u8>>>
where
    F: Fn(&Vector2<f64>) -> Rgb<u8> + std::marker::Sync,
{
    let mut raw_data = create_buffer(Rgb([0, 0, 0]), &view.resolution);
    generate_color_image_in_place(view, point_renderer, &mut raw_data);
    raw_data
}

/**
 * In-place version of the above function. Columns are computed in parallel;
 * every pixel is independent and reads the view only, so the frame is
 * complete once the iterator joins.
 */
pub fn generate_color_image_in_place<F>(
    view: &ViewState,
    point_renderer: F,
    raw_data: &mut [Vec<Rgb<u8>>],
) where
    F: Fn(&Vector2<f64>) -> Rgb<u8> + std::marker::Sync,
{
    assert_eq!(
        raw_data.len(),
        view.resolution[0] as usize,
        "Outer dimension mismatch"
    );
    let pixel_map = PixelMap::new(view);
    raw_data.par_iter_mut().enumerate().for_each(|(x, column)| {
        assert_eq!(
            column.len(),
            view.resolution[1] as usize,
            "Inner dimension mismatch"
        );
        column.iter_mut().enumerate().for_each(|(y, elem)| {
            *elem = point_renderer(&pixel_map.map((x as u32, y as u32)));
        });
    });
}

/**
 * Copy an `[x][y]` color buffer into a row-major RGBA byte frame, such as a
 * display surface. The frame must hold exactly width * height pixels of
 * four bytes each; alpha is forced opaque.
 */
pub fn blit_rgba(buffer: &[Vec<Rgb<u8>>], resolution: &Vector2<u32>, frame: &mut [u8]) {
    assert_eq!(
        frame.len(),
        (4 * resolution[0] * resolution[1]) as usize,
        "RGBA frame size mismatch"
    );
    let row_length = resolution[0] as usize;
    for (flat_index, pixel) in frame.chunks_exact_mut(4).enumerate() {
        let y = flat_index / row_length;
        let x = flat_index % row_length;
        let raw_pixel = buffer[x][y];
        pixel.copy_from_slice(&[raw_pixel[0], raw_pixel[1], raw_pixel[2], 255]);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn two_by_two_view() -> ViewState {
        ViewState {
            origin: Vector2::new(-2.0, 2.0),
            step: 2.0,
            resolution: Vector2::new(2, 2),
        }
    }

    #[test]
    fn test_pixel_map_corners() {
        let pixel_map = PixelMap::new(&two_by_two_view());

        assert_eq!(pixel_map.map((0, 0)), Vector2::new(-2.0, 2.0));
        assert_eq!(pixel_map.map((1, 0)), Vector2::new(0.0, 2.0));
        assert_eq!(pixel_map.map((0, 1)), Vector2::new(-2.0, 0.0));
        assert_eq!(pixel_map.map((1, 1)), Vector2::new(0.0, 0.0));
    }

    #[test]
    fn test_pixel_map_vertical_axis_points_down() {
        let view = ViewState::default();
        let pixel_map = PixelMap::new(&view);

        let top = pixel_map.map((0, 0));
        let below = pixel_map.map((0, 1));
        assert_relative_eq!(top[1] - below[1], view.step, epsilon = 1e-12);
    }

    #[test]
    fn test_generate_color_image_dimensions_and_indexing() {
        let view = ViewState {
            origin: Vector2::new(0.0, 0.0),
            step: 1.0,
            resolution: Vector2::new(3, 2),
        };

        // Encode the coordinate into the color so indexing is observable.
        let image = generate_color_image(&view, |point| {
            Rgb([point[0] as u8, (-point[1]) as u8, 0])
        });

        assert_eq!(image.len(), 3);
        assert_eq!(image[0].len(), 2);
        for (x, column) in image.iter().enumerate() {
            for (y, pixel) in column.iter().enumerate() {
                assert_eq!(*pixel, Rgb([x as u8, y as u8, 0]));
            }
        }
    }

    #[test]
    fn test_blit_rgba_layout() {
        let view = two_by_two_view();
        let buffer = generate_color_image(&view, |point| {
            if point[0] < -1.0 {
                Rgb([255, 0, 0])
            } else {
                Rgb([0, 255, 0])
            }
        });

        let mut frame = vec![0u8; 4 * 2 * 2];
        blit_rgba(&buffer, &view.resolution, &mut frame);

        // Row-major: (x=0, y=0), (x=1, y=0), (x=0, y=1), (x=1, y=1).
        assert_eq!(frame[0..4], [255, 0, 0, 255]);
        assert_eq!(frame[4..8], [0, 255, 0, 255]);
        assert_eq!(frame[8..12], [255, 0, 0, 255]);
        assert_eq!(frame[12..16], [0, 255, 0, 255]);
    }

    #[test]
    #[should_panic(expected = "Outer dimension mismatch")]
    fn test_generate_color_image_rejects_wrong_buffer_shape() {
        let view = two_by_two_view();
        let mut raw_data = create_buffer(Rgb([0, 0, 0]), &Vector2::new(3, 2));
        generate_color_image_in_place(&view, |_| Rgb([0, 0, 0]), &mut raw_data);
    }
}
