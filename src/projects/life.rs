#![deny(clippy::all)]
#![forbid(unsafe_code)]

use std::time::{Duration, Instant};

use log::{debug, error, info, trace};
use pixels::{Pixels, SurfaceTexture};
use winit::event::{Event, VirtualKeyCode};
use winit::event_loop::{ControlFlow, EventLoop};
use winit_input_helper::WinitInputHelper;

use super::render::draw_cells;
use crate::auxiliary::randomizer::generate_seed;
use crate::auxiliary::window::{create_window, Workarea, TICKS_PER_SECOND, WORKAREA};
use crate::error::{AppError, GridError};
use crate::traits_and_structs::{CellAutomata, CellState, Grid};

/// Chance that a cell starts alive after randomizing.
const RANDOM_FILL: f32 = 0.3;

pub fn run_life() -> Result<(), AppError> {
    env_logger::init();
    let event_loop = EventLoop::new();
    let mut input = WinitInputHelper::new();
    let (window, p_width, p_height, mut _hidpi_factor) = create_window("Game of Life", &event_loop)?;

    let surface_texture = SurfaceTexture::new(p_width, p_height, &window);

    let mut life = Life::new(WORKAREA)?;
    let (frame_width, frame_height) = life.frame_size();
    let mut pixels = Pixels::new(frame_width, frame_height, surface_texture)?;

    let mut last_frame = Instant::now();
    let mut draw_state: Option<bool> = None;

    println!("{}", Life::describe());

    event_loop.run(move |event, _, control_flow| {
        // The one and only event that winit_input_helper doesn't have for us...
        if let Event::RedrawRequested(_) = event {
            life.draw(pixels.get_frame());
            if pixels
                .render()
                .map_err(|e| error!("pixels.render() failed: {}", e))
                .is_err()
            {
                *control_flow = ControlFlow::Exit;
                return;
            }
        }

        // For everything else, for let winit_input_helper collect events to build its state.
        // It returns `true` when it is time to update our game state and request a redraw.
        if input.update(&event) {
            if input.key_pressed(VirtualKeyCode::Escape) || input.quit() {
                *control_flow = ControlFlow::Exit;
                return;
            }
            if input.key_pressed(VirtualKeyCode::P) {
                match life.toggle_running() {
                    true => println!("running"),
                    false => println!("paused at generation {}", life.generation()),
                }
            }
            if input.key_pressed(VirtualKeyCode::Space) {
                // Space is frame-step, so ensure we're paused
                if life.is_running() {
                    println!("paused");
                }
                println!("frame advanced");
                life.request_step();
            }
            if input.key_pressed(VirtualKeyCode::R) {
                match generate_seed() {
                    Ok(seed) => {
                        life.randomize(seed);
                        println!(
                            "reset with random conditions, {} cells alive",
                            life.grid().population()
                        );
                    }
                    Err(e) => error!("could not seed the randomizer: {}", e),
                }
            }
            if input.key_pressed(VirtualKeyCode::C) {
                println!("screen cleared");
                life.clear();
            }

            let (pointer, prev_pointer) = pointer_pixels(&input, &pixels);

            if input.mouse_pressed(0) {
                debug!("Mouse click at {:?} (cell {:?})", pointer, life.cell_at(pointer.0, pointer.1));
                draw_state = Some(life.toggle(pointer.0, pointer.1));
            } else if let Some(draw_alive) = draw_state {
                let release = input.mouse_released(0);
                let held = input.mouse_held(0);
                // A stroke paints from the last pointer position to the current one
                // until the button goes up.
                if release || held {
                    life.set_line(prev_pointer.0, prev_pointer.1, pointer.0, pointer.1, draw_alive);
                }
                if release || !held {
                    debug!("Stroke finished");
                    draw_state = None;
                }
            }
            if let Some(factor) = input.scale_factor_changed() {
                _hidpi_factor = factor;
            }
            if let Some(size) = input.window_resized() {
                pixels.resize_surface(size.width, size.height);
            }

            let now = Instant::now();
            life.tick(now - last_frame);
            last_frame = now;
            window.request_redraw();
        }
    });
}

/// Frame-buffer pixels under the pointer now and on the previous frame,
/// clamped onto the frame. `(0, 0)` for both when the pointer is outside the window.
fn pointer_pixels(input: &WinitInputHelper, pixels: &Pixels) -> ((isize, isize), (isize, isize)) {
    let to_pixel = |pos: (f32, f32)| {
        let (x, y) = pixels
            .window_pos_to_pixel(pos)
            .unwrap_or_else(|outside| pixels.clamp_pixel_pos(outside));
        (x as isize, y as isize)
    };
    input
        .mouse()
        .map(|(mx, my)| {
            let (dx, dy) = input.mouse_diff();
            (to_pixel((mx, my)), to_pixel((mx - dx, my - dy)))
        })
        .unwrap_or_default()
}

/// Application state: the grid plus the run and single-step flags that gate
/// each tick.
#[derive(Clone, Debug)]
pub struct Life {
    grid: Grid,
    cell_size: usize,
    running: bool,
    step_requested: bool,
    generation: u64,
    tick_interval: Duration,
    since_tick: Duration,
}

impl Life {
    pub fn new(area: Workarea) -> Result<Self, GridError> {
        let (width, height) = area.grid_size();
        Ok(Self {
            grid: Grid::new(width, height)?,
            cell_size: area.cell_size as usize,
            running: false,
            step_requested: false,
            generation: 0,
            tick_interval: Duration::from_millis(1000 / TICKS_PER_SECOND),
            since_tick: Duration::ZERO,
        })
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn toggle_running(&mut self) -> bool {
        self.running = !self.running;
        info!("running: {}", self.running);
        self.running
    }

    /// Ask for exactly one generation on the next tick and stop free running.
    pub fn request_step(&mut self) {
        self.running = false;
        self.step_requested = true;
    }

    /// Advance the clock by `elapsed`. A requested single step runs at once;
    /// otherwise a tick fires once a full tick interval has built up.
    /// Returns whether a generation was computed.
    pub fn tick(&mut self, elapsed: Duration) -> bool {
        self.since_tick += elapsed;
        if !self.step_requested && self.since_tick < self.tick_interval {
            return false;
        }
        self.since_tick = Duration::ZERO;
        let before = self.generation;
        self.update();
        self.generation != before
    }

    /// Pixel dimensions of the frame buffer the cells are drawn into.
    pub fn frame_size(&self) -> (u32, u32) {
        (
            (self.grid.width() * self.cell_size) as u32,
            (self.grid.height() * self.cell_size) as u32,
        )
    }

    /// Grid cell under frame pixel `(px, py)`, clamped onto the grid.
    /// The result is always a valid coordinate, whatever the input.
    pub fn cell_at(&self, px: isize, py: isize) -> (usize, usize) {
        (
            cell_coord(px, self.cell_size, self.grid.width()),
            cell_coord(py, self.cell_size, self.grid.height()),
        )
    }
}

/// `clamp(floor(pixel / cell_size), 0, dimension - 1)`
fn cell_coord(pixel: isize, cell_size: usize, dimension: usize) -> usize {
    let cell = pixel.max(0) as usize / cell_size;
    cell.min(dimension.saturating_sub(1))
}

impl CellAutomata for Life {
    fn draw(&self, screen: &mut [u8]) {
        draw_cells(&self.grid, screen, self.cell_size);
    }

    fn set_line(&mut self, x0: isize, y0: isize, x1: isize, y1: isize, alive: bool) {
        let (cx0, cy0) = self.cell_at(x0, y0);
        let (cx1, cy1) = self.cell_at(x1, y1);
        let state = CellState::from_alive(alive);
        debug!("Draw line of {:?} from {:?} to {:?}", state, (cx0, cy0), (cx1, cy1));
        // Both ends are on the grid, so every point between them is too.
        let width = self.grid.width();
        let cells = self.grid.cells_mut();
        for (x, y) in line_drawing::Bresenham::new(
            (cx0 as isize, cy0 as isize),
            (cx1 as isize, cy1 as isize),
        ) {
            cells[x as usize + y as usize * width] = state;
        }
    }

    fn toggle(&mut self, x: isize, y: isize) -> bool {
        // `cell_at` clamps, so both accesses hit the grid.
        let (cx, cy) = self.cell_at(x, y);
        self.grid
            .get_state(cx, cy)
            .and_then(|state| {
                let next = state.toggled();
                self.grid.set_state(cx, cy, next).map(|()| next == CellState::Alive)
            })
            .unwrap_or(false)
    }

    fn randomize(&mut self, seed: (u64, u64)) {
        let mut rng: randomize::PCG32 = seed.into();
        for c in self.grid.cells_mut() {
            let alive = randomize::f32_half_open_right(rng.next_u32()) < RANDOM_FILL;
            *c = CellState::from_alive(alive);
        }
        self.generation = 0;
        info!("randomized, population {}", self.grid.population());
    }

    fn clear(&mut self) {
        self.grid.clear();
        self.generation = 0;
        info!("cleared");
    }

    fn update(&mut self) {
        if self.running || self.step_requested {
            self.grid.step();
            self.step_requested = false;
            self.generation += 1;
            trace!(
                "generation {}: population {}",
                self.generation,
                self.grid.population()
            );
        }
    }

    fn describe() -> String {
        "Conway's Game of Life on a fixed grid.\n\nControls:\n\
         Click/drag: toggle cells\nP: run/pause\nSPACE: single step\n\
         R: randomize\nC: clear\nESC: close"
            .to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn small() -> Life {
        Life::new(Workarea {
            width: 50,
            height: 50,
            cell_size: 10,
        })
        .unwrap()
    }

    fn alive(life: &Life, x: usize, y: usize) -> bool {
        life.grid().get_state(x, y).unwrap() == CellState::Alive
    }

    #[test]
    fn empty_workarea_is_rejected() {
        let area = Workarea {
            width: 5,
            height: 50,
            cell_size: 10,
        };
        assert!(matches!(
            Life::new(area),
            Err(GridError::InvalidDimensions { width: 0, height: 5 })
        ));
    }

    #[test]
    fn frame_covers_every_cell() {
        assert_eq!(small().frame_size(), (50, 50));
    }

    #[test]
    fn pixels_map_to_clamped_cells() {
        let life = small();
        assert_eq!(life.cell_at(0, 0), (0, 0));
        assert_eq!(life.cell_at(19, 9), (1, 0));
        assert_eq!(life.cell_at(20, 49), (2, 4));
        assert_eq!(life.cell_at(-7, 500), (0, 4));
    }

    #[test]
    fn toggle_flips_the_cell_under_the_pointer() {
        let mut life = small();
        assert!(life.toggle(25, 35));
        assert!(alive(&life, 2, 3));
        assert!(!life.toggle(21, 39));
        assert!(!alive(&life, 2, 3));
    }

    #[test]
    fn paused_ticks_do_nothing() {
        let mut life = small();
        life.toggle(5, 5);
        life.update();
        assert!(alive(&life, 0, 0));
        assert_eq!(life.generation(), 0);
    }

    #[test]
    fn single_step_runs_once() {
        let mut life = small();
        // Blinker through the middle row.
        for x in [15, 25, 35] {
            life.toggle(x, 25);
        }
        life.request_step();
        life.update();
        assert_eq!(life.generation(), 1);
        assert!(alive(&life, 2, 1) && alive(&life, 2, 3));
        assert!(!alive(&life, 1, 2));

        life.update();
        assert_eq!(life.generation(), 1);
    }

    #[test]
    fn running_steps_every_tick() {
        let mut life = small();
        assert!(life.toggle_running());
        life.update();
        life.update();
        assert_eq!(life.generation(), 2);

        life.request_step();
        assert!(!life.is_running());
        life.update();
        life.update();
        assert_eq!(life.generation(), 3);
    }

    #[test]
    fn ticks_wait_for_a_full_interval_while_running() {
        let mut life = small();
        life.toggle_running();
        assert!(!life.tick(Duration::from_millis(60)));
        assert_eq!(life.generation(), 0);
        assert!(life.tick(Duration::from_millis(40)));
        assert_eq!(life.generation(), 1);
        // The interval restarts after every tick.
        assert!(!life.tick(Duration::from_millis(99)));
        assert!(life.tick(Duration::from_millis(250)));
        assert_eq!(life.generation(), 2);
    }

    #[test]
    fn requested_step_does_not_wait_for_the_clock() {
        let mut life = small();
        life.request_step();
        assert!(life.tick(Duration::ZERO));
        assert_eq!(life.generation(), 1);
        assert!(!life.tick(Duration::from_secs(1)));
        assert_eq!(life.generation(), 1);
    }

    #[test]
    fn pointer_far_outside_still_lands_on_the_grid() {
        let mut life = small();
        assert!(life.toggle(-1000, 10_000));
        assert!(alive(&life, 0, 4));
        life.set_line(-50, -50, 900, -3, true);
        for x in 0..5 {
            assert!(alive(&life, x, 0));
        }
    }

    #[test]
    fn line_paints_cells_between_endpoints() {
        let mut life = small();
        life.set_line(0, 0, 45, 45, true);
        for i in 0..5 {
            assert!(alive(&life, i, i));
        }
        assert_eq!(life.grid().population(), 5);

        life.set_line(0, 0, 45, 45, false);
        assert_eq!(life.grid().population(), 0);
    }

    #[test]
    fn randomize_is_deterministic_per_seed() {
        let mut a = small();
        let mut b = small();
        a.randomize((7, 11));
        b.randomize((7, 11));
        assert_eq!(a.grid(), b.grid());

        let mut big = Life::new(WORKAREA).unwrap();
        big.randomize((1, 2));
        let population = big.grid().population();
        assert!(population > 0 && population < 3600);
    }

    #[test]
    fn clear_kills_everything_and_resets_generation() {
        let mut life = small();
        life.randomize((3, 4));
        life.toggle_running();
        life.update();
        life.clear();
        assert_eq!(life.grid().population(), 0);
        assert_eq!(life.generation(), 0);
    }
}
