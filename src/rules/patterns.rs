/// Predefined patterns for placing known shapes on a grid
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Pattern {
    /// A small oscillator (horizontal phase)
    Blinker,
    /// A small oscillator
    Toad,
    /// A small stationary pattern
    Block,
    /// A diagonal spaceship
    Glider,
}

impl Pattern {
    /// Get the `(row, col)` cells for a pattern anchored at `(row, col)`.
    ///
    /// The blinker is centered on the anchor; the other shapes extend down
    /// and to the right of it.
    pub fn cells(&self, row: i64, col: i64) -> Vec<(i64, i64)> {
        match self {
            Pattern::Blinker => vec![
                (row, col - 1), (row, col), (row, col + 1)
            ],
            Pattern::Toad => vec![
                (row, col + 1), (row, col + 2), (row, col + 3),
                (row + 1, col), (row + 1, col + 1), (row + 1, col + 2)
            ],
            Pattern::Block => vec![
                (row, col), (row, col + 1),
                (row + 1, col), (row + 1, col + 1)
            ],
            Pattern::Glider => vec![
                (row, col + 1),
                (row + 1, col + 2),
                (row + 2, col), (row + 2, col + 1), (row + 2, col + 2)
            ],
        }
    }
}
