use rand::{ rngs::StdRng, Rng, SeedableRng };

use crate::Result;

pub const ALIVE: char = 'X';
pub const DEAD: char = ' ';
pub const BORDER: char = '-';

/// Largest board side, the widest a terminal can report.
pub const MAX_SIZE: usize = u16::MAX as usize;

static OFFSETS: [(isize, isize); 8] = [
    (-1, -1), (-1, 0), (-1, 1),
    (0, -1),           (0, 1),
    (1, -1),  (1, 0),  (1, 1),
];

/// Square, edge-bounded Life board. Cells outside the board count as dead.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Field {
    size: usize,
    data: Vec<Vec<bool>>,
}

impl Field {

    /// Seeds a `size` x `size` board from entropy, `probability` percent of cells alive.
    #[inline]
    pub fn new(size: usize, probability: u32) -> Result<Self> {
        Self::with_rng(size, probability, &mut StdRng::from_entropy())
    }

    /// Seeds a board from `rng`. Every cell draws once from `1..=100` and is
    /// alive when the draw does not exceed `probability`, so 0 gives an empty
    /// board and 100 a full one. Fails for a side of 0, above `MAX_SIZE`, or
    /// when the board cannot be allocated.
    pub fn with_rng<R: Rng + ?Sized>(size: usize, probability: u32, rng: &mut R) -> Result<Self> {
        if size == 0 {
            return Err("field size should be positive".into());
        } if size > MAX_SIZE {
            return Err(format!("field size should be at most {MAX_SIZE}").into());
        }

        let mut data: Vec<Vec<bool>> = Vec::new();
        data.try_reserve_exact(size)?;
        for _ in 0..size {
            let mut r = Vec::new();
            r.try_reserve_exact(size)?;
            r.extend((0..size).map(|_| rng.gen_range(1..=100) <= probability));
            data.push(r);
        }

        Ok(Field {
            size,
            data,
        })
    }

    /// Reads a board drawn with `0` or space for dead cells and anything else
    /// for live ones, one row per line.
    pub fn from_string(s: &str) -> Result<Self> {
        let mut data: Vec<Vec<bool>> = vec![];

        for i in s.split('\n') {
            let r: Vec<bool> = i.trim_end_matches('\r')
                .chars()
                .map(|c| !matches!(c, '0' | ' '))
                .collect();
            if !r.is_empty() {
                data.push(r);
            }
        }

        let size = data.len();
        if size == 0 {
            return Err("field should have at least one row".into());
        } if !data.iter().all(|v| v.len() == size) {
            return Err("field should be square".into());
        }

        Ok(Field {
            size,
            data,
        })
    }

    #[inline]
    pub fn size(&self) -> usize {
        self.size
    }

    #[inline]
    pub fn data(&self) -> &Vec<Vec<bool>> {
        &self.data
    }

    #[inline]
    pub fn population(&self) -> usize {
        self.data.iter().flatten().filter(|c| **c).count()
    }

    #[inline]
    fn get(&self, i: isize, j: isize) -> Option<bool> {
        if i < 0 || j < 0 || i >= self.size as isize || j >= self.size as isize {
            None
        } else {
            Some(self.data[i as usize][j as usize])
        }
    }

    /// Live cells in the Moore neighbourhood of `(i, j)`, skipping positions off the board.
    pub fn neighbours(&self, i: usize, j: usize) -> usize {
        let (i, j) = (i as isize, j as isize);
        OFFSETS.iter()
            .filter_map(|(di, dj)| self.get(i + di, j + dj))
            .filter(|alive| *alive)
            .count()
    }

    /// Advances one generation. Counts are taken from the current board only;
    /// the new board replaces it once every cell has been computed.
    pub fn tick(&mut self) {
        let n: Vec<Vec<bool>> = (0..self.size)
            .map(|i| {
                (0..self.size)
                    .map(|j| Self::produce_value(self.data[i][j], self.neighbours(i, j)))
                    .collect()
            })
            .collect();

        self.data = n;
    }

    fn produce_value(current: bool, n: usize) -> bool {
        matches!((current, n), (true, 2) | (true, 3) | (false, 3))
    }

    /// Board as text: a dash border, one row per line, a closing dash border.
    pub fn lines(&self) -> Vec<String> {
        let border: String = std::iter::repeat(BORDER).take(self.size).collect();

        let mut lines = Vec::with_capacity(self.size + 2);
        lines.push(border.clone());
        for r in &self.data {
            lines.push(r.iter().map(|c| if *c { ALIVE } else { DEAD }).collect());
        }
        lines.push(border);
        lines
    }
}
