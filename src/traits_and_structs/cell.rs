/// State of a single cell.
///
/// `Dying` and `Newborn` only exist while a generation is being computed;
/// once `Grid::step` returns every cell is either `Dead` or `Alive`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum CellState {
    #[default]
    Dead,
    Dying,
    Alive,
    Newborn,
}

impl CellState {
    /// The state a click produces: live cells die, anything else comes alive.
    #[must_use]
    pub fn toggled(self) -> Self {
        match self {
            CellState::Alive => CellState::Dead,
            _ => CellState::Alive,
        }
    }

    /// Resolve a transient marker to its final state.
    #[must_use]
    pub fn committed(self) -> Self {
        match self {
            CellState::Dying => CellState::Dead,
            CellState::Newborn => CellState::Alive,
            other => other,
        }
    }

    pub fn from_alive(alive: bool) -> Self {
        if alive {
            CellState::Alive
        } else {
            CellState::Dead
        }
    }
}

/// Whether a neighbour lookup counts towards the living total.
/// Off-grid lookups and transient states never do.
pub fn is_living(state: Option<CellState>) -> bool {
    matches!(state, Some(CellState::Alive))
}
