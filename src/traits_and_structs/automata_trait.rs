pub trait CellAutomata {
    fn draw(&self, screen: &mut [u8]);
    fn set_line(&mut self, x0: isize, y0: isize, x1: isize, y1: isize, alive: bool);
    fn toggle(&mut self, x: isize, y: isize) -> bool;
    fn randomize(&mut self, seed: (u64, u64));
    fn clear(&mut self);
    fn update(&mut self);
    fn describe() -> String;
}
