use std::{
    cmp::Reverse,
    collections::{BinaryHeap, HashMap, HashSet},
};

use crate::{map::Map, Direction, Position};

#[derive(Debug, Clone)]
struct State {
    pos: Position,
    steps_n: usize,
}

impl Ord for State {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        // Fewer steps first, reading order of positions breaking ties.
        self.steps_n
            .cmp(&other.steps_n)
            .then_with(|| self.pos.cmp(&other.pos))
    }
}

impl PartialOrd for State {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for State {
    fn eq(&self, other: &Self) -> bool {
        self.steps_n == other.steps_n && self.pos == other.pos
    }
}

impl Eq for State {}

impl State {
    pub fn new(pos: Position, steps_n: usize) -> Self {
        Self { pos, steps_n }
    }
}

impl Map {
    pub fn shortest_path(&self, from: &Position, to: &Position) -> Option<Vec<Position>> {
        self.shortest_path_searched(from, to).0
    }

    // Same search as shortest_path, also returning every position whose
    // distance got finalized, for callers that want the covered area.
    pub fn shortest_path_searched(
        &self,
        from: &Position,
        to: &Position,
    ) -> (Option<Vec<Position>>, HashSet<Position>) {
        let mut finalized_positions = HashSet::new();
        if self.tile(from).map(|tile| tile.is_blocked()).unwrap_or(true)
            || self.tile(to).map(|tile| tile.is_blocked()).unwrap_or(true)
        {
            return (None, finalized_positions);
        }

        // Value: (tentative steps from `from`, position this one was reached from).
        let mut records: HashMap<Position, (usize, Option<Position>)> =
            HashMap::from([(from.clone(), (0, None))]);
        let mut frontier = BinaryHeap::from([Reverse(State::new(from.clone(), 0))]);
        while let Some(Reverse(cur_state)) = frontier.pop() {
            if !finalized_positions.insert(cur_state.pos.clone()) {
                // A stale duplicate of an already finalized position.
                continue;
            }

            if cur_state.pos == *to {
                return (Some(backtrack(to, &records)), finalized_positions);
            }

            for next_pos in Direction::all_dirs().iter().filter_map(|dir| {
                cur_state.pos.neighbor(*dir).filter(|pos| {
                    self.tile(pos)
                        .map(|tile| !tile.is_blocked())
                        .unwrap_or(false)
                })
            }) {
                if finalized_positions.contains(&next_pos) {
                    continue;
                }

                let next_steps_n = cur_state.steps_n + 1;
                if records
                    .get(&next_pos)
                    .map(|(steps_n, _)| next_steps_n < *steps_n)
                    .unwrap_or(true)
                {
                    records.insert(next_pos.clone(), (next_steps_n, Some(cur_state.pos.clone())));
                    frontier.push(Reverse(State::new(next_pos, next_steps_n)));
                }
            }
        }

        (None, finalized_positions)
    }
}

fn backtrack(
    to: &Position,
    records: &HashMap<Position, (usize, Option<Position>)>,
) -> Vec<Position> {
    let mut path = vec![to.clone()];
    let mut cur_pos = to.clone();
    while let Some((_, Some(last_pos))) = records.get(&cur_pos) {
        path.push(last_pos.clone());
        cur_pos = last_pos.clone();
    }

    path.reverse();
    path
}
