use super::*;
use crate::*;
use rand::Rng;

/// A position in a [`Maze`], as (row, col).
pub type Cell = (usize, usize);

/// A rectangular grid of walls and open cells with one start and one goal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Maze {
    walls: Vec<Vec<bool>>,
    start: Cell,
    goal: Cell,
}

impl Maze {
    pub fn height(&self) -> usize {
        self.walls.len()
    }
    pub fn width(&self) -> usize {
        self.walls.first().map(Vec::len).unwrap_or(0)
    }
    pub fn goal(&self) -> Cell {
        self.goal
    }
    /// out-of-bounds cells count as walls
    pub fn is_wall(&self, (row, col): Cell) -> bool {
        self.walls
            .get(row)
            .and_then(|line| line.get(col))
            .copied()
            .unwrap_or(true)
    }
    /// the open cell one step away, if the move is legal
    pub fn step(&self, (row, col): Cell, direction: Direction) -> Option<Cell> {
        let (dr, dc) = direction.delta();
        let row = row.checked_add_signed(dr)?;
        let col = col.checked_add_signed(dc)?;
        Some((row, col)).filter(|cell| !self.is_wall(*cell))
    }
    /// render the maze with the cells visited by `path` marked
    pub fn draw(&self, path: &[Direction]) -> String {
        let mut trail = vec![self.start];
        for direction in path {
            match self.step(*trail.last().unwrap_or(&self.start), *direction) {
                Some(cell) => trail.push(cell),
                None => break,
            }
        }
        let mut out = String::new();
        for (row, line) in self.walls.iter().enumerate() {
            for (col, wall) in line.iter().enumerate() {
                let cell = (row, col);
                out.push(if *wall {
                    '%'
                } else if cell == self.start {
                    'P'
                } else if cell == self.goal {
                    '.'
                } else if trail.contains(&cell) {
                    '*'
                } else {
                    ' '
                });
            }
            out.push('\n');
        }
        out
    }
}

/// Manhattan distance to the goal. Consistent for unit step costs.
pub fn manhattan(&(row, col): &Cell, maze: &Maze) -> Cost {
    let (goal_row, goal_col) = maze.goal();
    (row.abs_diff(goal_row) + col.abs_diff(goal_col)) as Cost
}

impl Problem for Maze {
    type S = Cell;
    type A = Direction;
    fn start(&self) -> Self::S {
        self.start
    }
    fn is_goal(&self, state: &Self::S) -> bool {
        *state == self.goal
    }
    fn successors(&self, state: &Self::S) -> Vec<Successor<Self::S, Self::A>> {
        Direction::ALL
            .into_iter()
            .filter_map(|direction| self.step(*state, direction).map(|cell| (cell, direction, 1.)))
            .collect()
    }
    fn cost_of_actions(&self, actions: &[Self::A]) -> anyhow::Result<Cost> {
        let mut cell = self.start;
        for (i, direction) in actions.iter().enumerate() {
            cell = self
                .step(cell, *direction)
                .ok_or_else(|| anyhow::anyhow!("move {} ({}) walks into a wall", i, direction))?;
        }
        Ok(actions.len() as Cost)
    }
}

impl TryFrom<&str> for Maze {
    type Error = anyhow::Error;
    fn try_from(text: &str) -> Result<Self, Self::Error> {
        let lines = text
            .lines()
            .map(str::trim_end)
            .filter(|line| !line.is_empty())
            .collect::<Vec<_>>();
        let width = lines.iter().map(|line| line.chars().count()).max().unwrap_or(0);
        let mut start = None;
        let mut goal = None;
        let mut walls = vec![vec![true; width]; lines.len()];
        for (row, line) in lines.iter().enumerate() {
            for (col, c) in line.chars().enumerate() {
                walls[row][col] = match c {
                    '%' => true,
                    ' ' => false,
                    'P' if start.is_none() => {
                        start = Some((row, col));
                        false
                    }
                    '.' if goal.is_none() => {
                        goal = Some((row, col));
                        false
                    }
                    'P' | '.' => anyhow::bail!("duplicate '{}' at ({}, {})", c, row, col),
                    _ => anyhow::bail!("unexpected '{}' at ({}, {})", c, row, col),
                };
            }
        }
        Ok(Self {
            walls,
            start: start.ok_or_else(|| anyhow::anyhow!("maze has no start 'P'"))?,
            goal: goal.ok_or_else(|| anyhow::anyhow!("maze has no goal '.'"))?,
        })
    }
}

impl Arbitrary for Maze {
    /// `MAZE_HEIGHT` x `MAZE_WIDTH` with a solid border, interior walls at
    /// `MAZE_DENSITY`, and start and goal on distinct interior cells.
    /// the goal is not always reachable.
    fn random() -> Self {
        let ref mut rng = rand::rng();
        let mut walls = (0..MAZE_HEIGHT)
            .map(|row| {
                (0..MAZE_WIDTH)
                    .map(|col| {
                        row == 0
                            || col == 0
                            || row == MAZE_HEIGHT - 1
                            || col == MAZE_WIDTH - 1
                            || rng.random_bool(MAZE_DENSITY)
                    })
                    .collect::<Vec<_>>()
            })
            .collect::<Vec<_>>();
        let mut interior = || {
            (
                rng.random_range(1..MAZE_HEIGHT - 1),
                rng.random_range(1..MAZE_WIDTH - 1),
            )
        };
        let start = interior();
        let goal = std::iter::repeat_with(interior)
            .find(|cell| *cell != start)
            .unwrap_or(start);
        walls[start.0][start.1] = false;
        walls[goal.0][goal.1] = false;
        Self { walls, start, goal }
    }
}

impl std::fmt::Display for Maze {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}", self.draw(&[]))
    }
}
