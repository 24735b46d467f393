use winit::dpi::{LogicalPosition, LogicalSize, PhysicalSize};
use winit::error::OsError;
use winit::event_loop::EventLoop;
use winit::window::{Window, WindowBuilder};

/// Canvas and cell geometry. The grid is as many cells as fit on the canvas.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Workarea {
    pub width: u32,
    pub height: u32,
    pub cell_size: u32,
}

impl Workarea {
    /// Cells across and down. A zero cell size yields an empty grid.
    pub fn grid_size(&self) -> (usize, usize) {
        (
            self.width.checked_div(self.cell_size).unwrap_or(0) as usize,
            self.height.checked_div(self.cell_size).unwrap_or(0) as usize,
        )
    }
}

pub const WORKAREA: Workarea = Workarea {
    width: 600,
    height: 600,
    cell_size: 10,
};

pub const SCREEN_WIDTH: u32 = WORKAREA.width;
pub const SCREEN_HEIGHT: u32 = WORKAREA.height;

pub const TICKS_PER_SECOND: u64 = 10;

/// Create a window for the game.
///
/// Automatically scales the window to cover about 2/3 of the monitor height.
///
/// # Returns
///
/// Tuple of `(window, surface_width, surface_height, hidpi_factor)`
/// `surface_width` and `surface_height` are in pixel units.
/// `hidpi_factor` is the DPI scaling factor.
pub fn create_window(
    title: &str,
    event_loop: &EventLoop<()>,
) -> Result<(Window, u32, u32, f64), OsError> {
    // Create a hidden window so we can estimate a good default window size
    let window = WindowBuilder::new()
        .with_visible(false)
        .with_title(title)
        .build(event_loop)?;
    let hidpi_factor = window.scale_factor();

    // Get dimensions
    let width = SCREEN_WIDTH as f64;
    let height = SCREEN_HEIGHT as f64;
    let (monitor_width, monitor_height) = match window.current_monitor() {
        Some(monitor) => {
            let size: LogicalSize<f64> = monitor.size().to_logical(hidpi_factor);
            (size.width, size.height)
        }
        None => (width, height),
    };
    let scale = (monitor_height / height * 2.0 / 3.0).round().max(1.0);

    // Resize
    let default_size = LogicalSize::new(width * scale, height * scale);
    let center = LogicalPosition::new(
        (monitor_width - width * scale) / 2.0,
        (monitor_height - height * scale) / 2.0,
    );
    window.set_inner_size(default_size);
    window.set_min_inner_size(Some(LogicalSize::new(width, height)));
    window.set_outer_position(center);
    window.set_visible(true);

    let size: PhysicalSize<f64> = default_size.to_physical(hidpi_factor);

    Ok((
        window,
        size.width.round() as u32,
        size.height.round() as u32,
        hidpi_factor,
    ))
}
