use std::{
    error,
    fmt::Display,
    fs::File,
    io::{BufRead, BufReader},
    path::{Path, PathBuf},
};

use anyhow::{Context, Result};
use clap::Parser;

use map::{Map, MapBuilder};

pub mod map;
pub mod report;
pub mod search;

#[derive(Debug)]
pub enum Error {
    InconsistentRow(usize, usize),
    EmptyMap,
    NoStartPosition,
    NoFinishPosition,
    NonAdjacentStep(Position, Position),
}

impl Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Error::InconsistentRow(expect_col_n, this_col_n) => write!(
                f,
                "Expect {} column(s) in each row, given {}.",
                expect_col_n, this_col_n
            ),
            Error::EmptyMap => write!(f, "No tiles in map."),
            Error::NoStartPosition => write!(f, "No start position in map."),
            Error::NoFinishPosition => write!(f, "No finish position in map."),
            Error::NonAdjacentStep(last_pos, pos) => write!(
                f,
                "Expect one step between adjacent positions in path, given {} to {}.",
                last_pos, pos
            ),
        }
    }
}

impl error::Error for Error {}

#[derive(Debug, Parser)]
pub struct CLIArgs {
    pub input_path: PathBuf,
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Position {
    r: usize,
    c: usize,
}

impl Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        // Printed as (x,y), x being the column index.
        write!(f, "({},{})", self.c, self.r)
    }
}

impl Position {
    pub fn new(r: usize, c: usize) -> Self {
        Self { r, c }
    }

    pub fn neighbor(&self, dir: Direction) -> Option<Self> {
        match dir {
            Direction::Up if self.r > 0 => Some(Position::new(self.r - 1, self.c)),
            Direction::Right => Some(Position::new(self.r, self.c + 1)),
            Direction::Down => Some(Position::new(self.r + 1, self.c)),
            Direction::Left if self.c > 0 => Some(Position::new(self.r, self.c - 1)),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Up,
    Right,
    Down,
    Left,
}

impl Display for Direction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", self)
    }
}

impl Direction {
    pub fn all_dirs() -> &'static [Direction] {
        static ALL_DIRECTIONS: [Direction; 4] = [
            Direction::Up,
            Direction::Right,
            Direction::Down,
            Direction::Left,
        ];

        &ALL_DIRECTIONS
    }

    pub fn between(from: &Position, to: &Position) -> Option<Direction> {
        Direction::all_dirs()
            .iter()
            .copied()
            .find(|dir| from.neighbor(*dir).map(|pos| pos == *to).unwrap_or(false))
    }
}

pub fn parse_map<'a, I: IntoIterator<Item = &'a str>>(lines: I) -> Result<Map, Error> {
    let mut builder = MapBuilder::new();
    for line in lines {
        builder.add_row(line)?;
    }

    builder.build()
}

pub fn read_map<P: AsRef<Path>>(path: P) -> Result<Map> {
    let file = File::open(&path)
        .with_context(|| format!("Failed to open given file({}).", path.as_ref().display()))?;
    let reader = BufReader::new(file);
    let lines = reader
        .lines()
        .collect::<std::result::Result<Vec<_>, _>>()
        .with_context(|| {
            format!(
                "Failed to read lines from given file({}).",
                path.as_ref().display()
            )
        })?;

    Ok(parse_map(lines.iter().map(|l| l.as_str()))?)
}
