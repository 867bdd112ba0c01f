use std::f64::consts::SQRT_2;
use std::fmt::{self, Display, Formatter};
use std::str::FromStr;

use derive_more::IsVariant;

use super::heuristic::{self, Cell};
use super::{GridParseError, PathFinder, SearchSpace};

const ORTHOGONAL: [Cell; 4] = [(-1, 0), (0, -1), (0, 1), (1, 0)];
const DIAGONAL: [Cell; 4] = [(-1, -1), (-1, 1), (1, -1), (1, 1)];

/// The moves allowed on a [`Grid`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, IsVariant)]
pub enum Connectivity {
    /// Up, down, left and right.
    #[default]
    Four,
    /// Orthogonal moves plus diagonals. A diagonal move can't cut a wall's corner.
    Eight,
}

/// A weighted 2D map, parsed from text, which can be searched with A*.
///
/// Each character of the text is a cell: `#` is a wall, `.` costs `1` to enter and the digits `1`
/// to `9` cost their value to enter. Diagonal moves cost `√2` times the weight of the entered cell.
/// Blank lines and surrounding whitespace are ignored.
///
/// ```
/// use searchstat::path::Grid;
///
/// let grid: Grid = "
///     .#.
///     .9.
///     ...
/// ".parse()?;
/// // Going around the 9 is cheaper than going through it.
/// assert_eq!(grid.find_path((0, 0), (0, 2)).len(), 6);
/// # Ok::<(), searchstat::path::GridParseError>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    cells: Vec<Option<u8>>,
    rows: usize,
    columns: usize,
    connectivity: Connectivity,
}

impl Grid {
    /// Parses a grid from `text`, using [`Connectivity::Four`].
    pub fn parse(text: &str) -> Result<Grid, GridParseError> {
        let mut cells = Vec::new();
        let mut columns = None;
        let mut rows = 0;

        for (row, line) in text.lines().map(str::trim).filter(|line| !line.is_empty()).enumerate() {
            let width = line.chars().count();
            match columns {
                None => columns = Some(width),
                Some(expected) if expected != width => {
                    return Err(GridParseError::Ragged { row, expected, found: width });
                },
                Some(_) => {},
            }

            for (column, glyph) in line.chars().enumerate() {
                cells.push(match glyph {
                    '#' => None,
                    '.' => Some(1),
                    '1'..='9' => Some(glyph as u8 - b'0'),
                    _ => return Err(GridParseError::UnknownCell { row, column, glyph }),
                });
            }
            rows += 1;
        }

        let columns = columns.ok_or(GridParseError::Empty)?;

        Ok(Grid {
            cells,
            rows,
            columns,
            connectivity: Connectivity::Four,
        })
    }

    /// Returns the grid with its connectivity replaced.
    pub fn with_connectivity(self, connectivity: Connectivity) -> Grid {
        Grid {
            connectivity,
            ..self
        }
    }

    /// Returns the number of rows in the grid.
    pub const fn rows(&self) -> usize {
        self.rows
    }

    /// Returns the number of columns in the grid.
    pub const fn columns(&self) -> usize {
        self.columns
    }

    /// Returns the moves allowed on the grid.
    pub const fn connectivity(&self) -> Connectivity {
        self.connectivity
    }

    /// Returns the cost of entering `cell`, or None if it is a wall or outside of the grid.
    pub fn weight(&self, cell: Cell) -> Option<f64> {
        self.index_of(cell)
            .and_then(|index| self.cells[index])
            .map(f64::from)
    }

    /// Returns true if `cell` is inside the grid and isn't a wall.
    pub fn is_passable(&self, cell: Cell) -> bool {
        self.weight(cell).is_some()
    }

    /// Creates a search space over this grid, with a heuristic estimating the distance to `goal`.
    pub const fn towards(&self, goal: Cell) -> GridSpace<'_> {
        GridSpace {
            grid: self,
            goal,
        }
    }

    /// Returns the cost of moving from `from` to the adjacent cell `to`, or None if the grid's
    /// connectivity doesn't allow the move.
    ///
    /// Moving onto a wall, outside of the grid or by more than one cell is never allowed. A diagonal
    /// move also needs both cells on either side of it to be passable.
    pub fn step_cost(&self, from: Cell, to: Cell) -> Option<f64> {
        let weight = self.weight(to)?;

        match (from.0.abs_diff(to.0), from.1.abs_diff(to.1)) {
            (0, 1) | (1, 0) => Some(weight),
            (1, 1)
                if self.connectivity.is_eight()
                    && self.is_passable((to.0, from.1))
                    && self.is_passable((from.0, to.1)) =>
            {
                Some(weight * SQRT_2)
            },
            _ => None,
        }
    }

    /// Computes the shortest path between two cells, goal first and excluding `start`.
    ///
    /// The path is empty if either cell is a wall or outside of the grid.
    pub fn find_path(&self, start: Cell, goal: Cell) -> Vec<Cell> {
        if !self.is_passable(start) || !self.is_passable(goal) {
            return Vec::new();
        }
        PathFinder::new(self.towards(goal)).find_path(&start, &goal)
    }

    /// Renders the grid, marking the cells of `path` with `*`.
    pub fn render_path(&self, path: &[Cell]) -> String {
        let mut output = String::with_capacity((self.columns + 1) * self.rows);

        for row in 0..self.rows {
            for column in 0..self.columns {
                let cell = (row as i64, column as i64);
                output.push(match self.cells[row * self.columns + column] {
                    _ if path.contains(&cell) => '*',
                    None => '#',
                    Some(1) => '.',
                    Some(weight) => char::from(b'0' + weight),
                });
            }
            output.push('\n');
        }

        output
    }

    fn index_of(&self, (row, column): Cell) -> Option<usize> {
        let row = usize::try_from(row).ok().filter(|row| *row < self.rows)?;
        let column = usize::try_from(column).ok().filter(|column| *column < self.columns)?;
        Some(row * self.columns + column)
    }
}

impl FromStr for Grid {
    type Err = GridParseError;

    fn from_str(text: &str) -> Result<Self, Self::Err> {
        Grid::parse(text)
    }
}

impl Display for Grid {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.render_path(&[]))
    }
}

/// A [`Grid`] paired with a goal, created by [`Grid::towards`].
#[derive(Debug, Clone, Copy)]
pub struct GridSpace<'a> {
    grid: &'a Grid,
    goal: Cell,
}

impl GridSpace<'_> {
    /// Returns the cell the heuristic estimates distances to.
    pub const fn goal(&self) -> Cell {
        self.goal
    }
}

impl SearchSpace for GridSpace<'_> {
    type Position = Cell;

    fn heuristic(&self, position: &Cell) -> f64 {
        match self.grid.connectivity {
            Connectivity::Four => heuristic::manhattan(*position, self.goal),
            Connectivity::Eight => heuristic::octile(*position, self.goal),
        }
    }

    fn neighbors(&self, &cell: &Cell, edges: &mut Vec<(Cell, f64)>) {
        let diagonals: &[Cell] = if self.grid.connectivity.is_eight() { &DIAGONAL } else { &[] };

        for &delta in ORTHOGONAL.iter().chain(diagonals) {
            let Some(next) = offset(cell, delta) else {
                continue;
            };
            if let Some(cost) = self.grid.step_cost(cell, next) {
                edges.push((next, cost));
            }
        }
    }
}

/// Moves `cell` by `delta`, or returns None if either coordinate overflows.
fn offset((row, column): Cell, (d_row, d_column): Cell) -> Option<Cell> {
    Some((row.checked_add(d_row)?, column.checked_add(d_column)?))
}
