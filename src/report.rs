use std::fmt::Display;

use crate::{Direction, Error, Position};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    Start,
    Move(Direction),
}

impl Display for Step {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Step::Start => write!(f, "Start"),
            Step::Move(dir) => write!(f, "{}", dir),
        }
    }
}

pub fn describe(path: &[Position]) -> Result<Vec<Step>, Error> {
    let mut steps = Vec::with_capacity(path.len());
    for (ind, pos) in path.iter().enumerate() {
        if ind == 0 {
            steps.push(Step::Start);
            continue;
        }

        let last_pos = &path[ind - 1];
        let dir = Direction::between(last_pos, pos)
            .ok_or_else(|| Error::NonAdjacentStep(last_pos.clone(), pos.clone()))?;
        steps.push(Step::Move(dir));
    }

    Ok(steps)
}
