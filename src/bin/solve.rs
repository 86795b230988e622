use anyhow::{Context, Result};
use clap::Parser;
use maze_solver::{map::Tile, report, CLIArgs, Error};

fn main() -> Result<()> {
    let args = CLIArgs::parse();
    let map = maze_solver::read_map(&args.input_path).with_context(|| {
        format!(
            "Failed to read map from given file({}).",
            args.input_path.display()
        )
    })?;

    let start_pos = map.find_tile(Tile::Start).ok_or(Error::NoStartPosition)?;
    let finish_pos = map.find_tile(Tile::Finish).ok_or(Error::NoFinishPosition)?;

    if let Some(path) = map.shortest_path(&start_pos, &finish_pos) {
        let steps = report::describe(&path)?;
        println!("Shortest path found in {} steps:", path.len() - 1);
        for (ind, (step, pos)) in steps.iter().zip(path.iter()).enumerate() {
            println!("{}. Move {} to {}", ind + 1, step, pos);
        }
        println!("Done!");
    } else {
        println!("No path found!");
    }

    Ok(())
}
