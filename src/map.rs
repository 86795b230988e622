use std::collections::HashSet;

use crate::{Error, Position};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tile {
    Empty,
    Rock,
    Start,
    Finish,
}

impl Tile {
    pub fn classify(c: char) -> Tile {
        match c {
            '0' => Tile::Rock,
            'S' => Tile::Start,
            'F' => Tile::Finish,
            '.' => Tile::Empty,
            // Unrecognized characters count as passable ground.
            _ => Tile::Empty,
        }
    }

    pub fn is_blocked(&self) -> bool {
        match self {
            Tile::Rock => true,
            Tile::Empty | Tile::Start | Tile::Finish => false,
        }
    }
}

#[derive(Debug)]
pub struct Map {
    tiles: Vec<Tile>,
    row_n: usize,
    col_n: usize,
}

impl Map {
    pub fn tile(&self, pos: &Position) -> Option<&Tile> {
        self.pos_to_ind(pos).and_then(|ind| self.tiles.get(ind))
    }

    // Scans in reading order, so the first matching tile of the top-most row wins.
    pub fn find_tile(&self, target: Tile) -> Option<Position> {
        self.tiles
            .iter()
            .position(|tile| *tile == target)
            .map(|ind| Position::new(ind / self.col_n, ind % self.col_n))
    }

    pub fn row_n(&self) -> usize {
        self.row_n
    }

    pub fn col_n(&self) -> usize {
        self.col_n
    }

    pub fn render_searched(&self, searched: &HashSet<Position>) -> String {
        let mut text = String::with_capacity(self.tiles.len() + self.row_n);
        for (ind, tile) in self.tiles.iter().enumerate() {
            if ind > 0 && ind % self.col_n == 0 {
                text.push('\n');
            }

            let pos = Position::new(ind / self.col_n, ind % self.col_n);
            text.push(match tile {
                Tile::Empty if searched.contains(&pos) => 'x',
                Tile::Empty => '.',
                Tile::Rock => '0',
                Tile::Start => 'S',
                Tile::Finish => 'F',
            });
        }

        text
    }

    fn pos_to_ind(&self, pos: &Position) -> Option<usize> {
        if self.is_inside(pos) {
            Some(pos.r * self.col_n + pos.c)
        } else {
            None
        }
    }

    fn is_inside(&self, pos: &Position) -> bool {
        pos.r < self.row_n && pos.c < self.col_n
    }
}

#[derive(Debug)]
pub struct MapBuilder {
    tiles: Vec<Tile>,
    row_n: usize,
    col_n: Option<usize>,
}

impl MapBuilder {
    pub fn new() -> Self {
        Self {
            tiles: Vec::new(),
            row_n: 0,
            col_n: None,
        }
    }

    pub fn add_row(&mut self, text: &str) -> Result<(), Error> {
        let this_col_n = text.chars().count();
        if *self.col_n.get_or_insert(this_col_n) != this_col_n {
            return Err(Error::InconsistentRow(self.col_n.unwrap(), this_col_n));
        }

        self.tiles.extend(text.chars().map(Tile::classify));
        self.row_n += 1;

        Ok(())
    }

    pub fn build(self) -> Result<Map, Error> {
        if self.row_n == 0 || self.col_n.map(|col_n| col_n == 0).unwrap_or(true) {
            return Err(Error::EmptyMap);
        }

        Ok(Map {
            tiles: self.tiles,
            row_n: self.row_n,
            col_n: self.col_n.unwrap_or(0),
        })
    }
}
