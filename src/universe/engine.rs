use log::{debug, trace};

use super::cell::Cell;
use super::neighbor::{Direction, Neighbors};
use crate::error::UniverseError;

/// One entry of the changed-cell report returned by [`Universe::tick`]:
/// a position and the state it just flipped to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CellChange {
    pub x: usize,
    pub y: usize,
    pub alive: bool,
}

/// A finite, fixed-size board of cells evolving under B3/S23.
///
/// Cells live in a flat row-major vector (`index = y * width + x`) with one
/// extra permanently-dead slot at the end standing in for every off-board
/// neighbor. Each cell's 8 neighbor links are resolved against that storage
/// once, at construction, so the tick loop sums neighbor states without any
/// bounds logic.
pub struct Universe {
    width: usize,
    height: usize,
    /// `width * height` cells plus the boundary sentinel at the end.
    cells: Vec<Cell>,
    /// Per-cell links into `cells`, fixed after construction.
    neighbors: Vec<Neighbors>,
    generation: u64,
}

impl Universe {
    /// Build a dead `width` x `height` board and wire every cell's neighbors.
    ///
    /// Fails with [`UniverseError::ZeroDimension`] unless both dimensions are
    /// at least 1.
    pub fn new(width: usize, height: usize) -> Result<Self, UniverseError> {
        if width == 0 || height == 0 {
            return Err(UniverseError::ZeroDimension { width, height });
        }
        let count = width * height;
        let boundary = count;

        // Pass one: allocate the whole grid, so pass two can link any cell to
        // any other regardless of creation order.
        let mut cells = Vec::with_capacity(count + 1);
        for y in 0..height {
            for x in 0..width {
                cells.push(Cell::new(x, y));
            }
        }
        cells.push(Cell::BOUNDARY);

        // Pass two: resolve all 8 offsets per cell against final bounds.
        // Anything off the board lands on the sentinel slot.
        let mut neighbors = Vec::with_capacity(count);
        for y in 0..height {
            for x in 0..width {
                let mut links: Neighbors = [boundary; 8];
                for dir in Direction::ALL {
                    let (dx, dy) = dir.offset();
                    let nx = x as i64 + dx as i64;
                    let ny = y as i64 + dy as i64;
                    if nx >= 0 && ny >= 0 && (nx as usize) < width && (ny as usize) < height {
                        links[dir.index()] = ny as usize * width + nx as usize;
                    }
                }
                neighbors.push(links);
            }
        }

        debug!("built {width}x{height} universe");
        Ok(Self {
            width,
            height,
            cells,
            neighbors,
            generation: 0,
        })
    }

    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    #[inline]
    pub fn height(&self) -> usize {
        self.height
    }

    #[inline]
    pub fn generation(&self) -> u64 {
        self.generation
    }

    #[inline]
    fn cell_count(&self) -> usize {
        self.width * self.height
    }

    /// The board's cells in flat row-major order, sentinel excluded.
    pub fn cells(&self) -> &[Cell] {
        &self.cells[..self.cell_count()]
    }

    /// Committed state at `(x, y)`. Coordinates off the board read as dead,
    /// matching the boundary sentinel's semantics.
    #[inline]
    pub fn get_cell(&self, x: usize, y: usize) -> bool {
        if x >= self.width || y >= self.height {
            return false;
        }
        self.cells[y * self.width + x].is_alive()
    }

    /// Write a cell's state immediately (stage + commit in one step).
    ///
    /// Seeding is only valid before the simulation starts: once any tick has
    /// run this fails with [`UniverseError::SeedAfterTick`].
    pub fn set_cell(&mut self, x: usize, y: usize, alive: bool) -> Result<(), UniverseError> {
        if self.generation != 0 {
            return Err(UniverseError::SeedAfterTick {
                generation: self.generation,
            });
        }
        if x >= self.width || y >= self.height {
            return Err(UniverseError::OutOfBounds {
                x,
                y,
                width: self.width,
                height: self.height,
            });
        }
        let cell = &mut self.cells[y * self.width + x];
        cell.stage(alive)?;
        cell.commit()?;
        Ok(())
    }

    #[inline]
    fn alive_neighbors(&self, idx: usize) -> u8 {
        let mut count = 0u8;
        for &link in &self.neighbors[idx] {
            count += self.cells[link].is_alive() as u8;
        }
        count
    }

    /// Advance the whole board by one generation.
    ///
    /// Every cell's next state is computed from the committed generation and
    /// staged; only after all cells are staged does the commit loop run, so
    /// no cell ever sees a half-updated neighborhood. Returns the cells whose
    /// committed state flipped, in flat row-major order.
    pub fn tick(&mut self) -> Result<Vec<CellChange>, UniverseError> {
        let count = self.cell_count();

        // Read phase: derive and stage every next state. All cells are staged
        // for uniformity, not just the ones that flip.
        for idx in 0..count {
            let alive = self.cells[idx].is_alive();
            let n = self.alive_neighbors(idx);
            let next = if alive { n == 2 || n == 3 } else { n == 3 };
            self.cells[idx].stage(next)?;
        }

        // Commit phase: apply every staged state, reporting the flips.
        let mut changed = Vec::new();
        for idx in 0..count {
            let before = self.cells[idx].is_alive();
            self.cells[idx].commit()?;
            let cell = &self.cells[idx];
            if cell.is_alive() != before {
                changed.push(CellChange {
                    x: cell.x(),
                    y: cell.y(),
                    alive: cell.is_alive(),
                });
            }
        }

        self.generation += 1;
        trace!(
            "generation {}: {} of {count} cells changed",
            self.generation,
            changed.len()
        );
        Ok(changed)
    }

    /// The committed board as row-major rows of booleans.
    ///
    /// A pure read: calling it twice with no tick in between yields identical
    /// matrices.
    pub fn snapshot(&self) -> Vec<Vec<bool>> {
        (0..self.height)
            .map(|y| {
                (0..self.width)
                    .map(|x| self.cells[y * self.width + x].is_alive())
                    .collect()
            })
            .collect()
    }

    pub fn population(&self) -> u64 {
        self.cells().iter().filter(|cell| cell.is_alive()).count() as u64
    }

    pub fn is_empty(&self) -> bool {
        self.population() == 0
    }

    pub fn for_each_live<F: FnMut(usize, usize)>(&self, mut f: F) {
        for cell in self.cells() {
            if cell.is_alive() {
                f(cell.x(), cell.y());
            }
        }
    }
}
