//! Board grid drawing

use super::Surface;
use crate::consts::{GRID_LINE_WIDTH, GRID_STROKE_STYLE};

/// Clear the surface and outline every cell.
///
/// Each call replaces the previous frame entirely.
pub fn render_board<S: Surface>(surface: &mut S, grid_size: u32, cell_size: f64) {
    surface.clear();
    for col in 0..grid_size {
        for row in 0..grid_size {
            surface.stroke_rect(
                col as f64 * cell_size,
                row as f64 * cell_size,
                cell_size,
                cell_size,
                GRID_STROKE_STYLE,
                GRID_LINE_WIDTH,
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::renderer::testing::{DrawCall, RecordingSurface};

    #[test]
    fn test_two_by_two_board() {
        let mut surface = RecordingSurface::new(400.0, 400.0);
        render_board(&mut surface, 2, 200.0);

        assert_eq!(surface.calls[0], DrawCall::Clear);
        assert_eq!(surface.frame.len(), 4);
        let origins: Vec<_> = surface
            .frame
            .iter()
            .map(|c| match c {
                DrawCall::StrokeRect {
                    x,
                    y,
                    w,
                    h,
                    style,
                    line_width,
                } => {
                    assert_eq!((*w, *h), (200.0, 200.0));
                    assert_eq!(style, "#000080");
                    assert_eq!(*line_width, 4.0);
                    (*x, *y)
                }
                other => panic!("unexpected draw call {:?}", other),
            })
            .collect();
        assert_eq!(
            origins,
            vec![(0.0, 0.0), (0.0, 200.0), (200.0, 0.0), (200.0, 200.0)]
        );
    }

    #[test]
    fn test_rerender_is_idempotent() {
        let mut surface = RecordingSurface::new(400.0, 400.0);
        render_board(&mut surface, 2, 200.0);
        let first = surface.frame.clone();
        render_board(&mut surface, 2, 200.0);
        assert_eq!(surface.frame, first);
        assert_eq!(
            surface.calls.iter().filter(|c| **c == DrawCall::Clear).count(),
            2
        );
    }
}
