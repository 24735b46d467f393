use crate::traits_and_structs::{CellState, Grid};

pub const ALIVE_COLOR: [u8; 4] = [0, 200, 0, 0xff];
pub const DEAD_COLOR: [u8; 4] = [0xff, 0xff, 0xff, 0xff];
pub const BACKGROUND: [u8; 4] = [0xff, 0xff, 0xff, 0xff];

/// Fraction of the cell covered by its disc.
const DISC_DIAMETER: f32 = 0.8;

/// Which pixels of a `cell_size` square fall inside the cell's disc, row-major.
fn disc_mask(cell_size: usize) -> Vec<bool> {
    let center = cell_size as f32 / 2.0;
    let radius = cell_size as f32 * DISC_DIAMETER / 2.0;
    let mut mask = Vec::with_capacity(cell_size * cell_size);
    for ly in 0..cell_size {
        for lx in 0..cell_size {
            let dx = lx as f32 + 0.5 - center;
            let dy = ly as f32 + 0.5 - center;
            mask.push(dx * dx + dy * dy <= radius * radius);
        }
    }
    mask
}

/// Paint every cell as a disc into an RGBA frame of
/// `(grid.width() * cell_size) x (grid.height() * cell_size)` pixels.
pub fn draw_cells(grid: &Grid, screen: &mut [u8], cell_size: usize) {
    let stride = grid.width() * cell_size;
    debug_assert_eq!(screen.len(), 4 * stride * grid.height() * cell_size);
    let mask = disc_mask(cell_size);
    let cells = grid.cells();

    for (i, pix) in screen.chunks_exact_mut(4).enumerate() {
        let (px, py) = (i % stride, i / stride);
        let (lx, ly) = (px % cell_size, py % cell_size);
        let color = if mask[lx + ly * cell_size] {
            match cells[px / cell_size + (py / cell_size) * grid.width()] {
                CellState::Alive => ALIVE_COLOR,
                _ => DEAD_COLOR,
            }
        } else {
            BACKGROUND
        };
        pix.copy_from_slice(&color);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pixel(screen: &[u8], stride: usize, x: usize, y: usize) -> [u8; 4] {
        let i = 4 * (x + y * stride);
        [screen[i], screen[i + 1], screen[i + 2], screen[i + 3]]
    }

    #[test]
    fn disc_covers_centre_but_not_corners() {
        let mask = disc_mask(10);
        assert!(mask[5 + 5 * 10]);
        assert!(mask[4 + 4 * 10]);
        assert!(!mask[0]);
        assert!(!mask[9 + 9 * 10]);
    }

    #[test]
    fn live_cells_are_green() {
        let mut grid = Grid::new(2, 1).unwrap();
        grid.set_state(0, 0, CellState::Alive).unwrap();
        let mut screen = vec![0_u8; 4 * 20 * 10];
        draw_cells(&grid, &mut screen, 10);

        assert_eq!(pixel(&screen, 20, 5, 5), ALIVE_COLOR);
        assert_eq!(pixel(&screen, 20, 0, 0), BACKGROUND);
        assert_eq!(pixel(&screen, 20, 15, 5), DEAD_COLOR);
    }
}
