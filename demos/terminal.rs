use grid_astar::{Board, EditMode, Outcome};
use std::ops::ControlFlow;

// Replays what a user of the interactive demonstrator would do on a 10x10 board:
// place the start (mode 1), the end (mode 2), paint a wall (mode 3) and press space.
// Every step of the search is printed the way a renderer would draw it, with
// - S the start, E the end, # barriers
// - o the frontier, x expanded cells, * the path
//
// Run with RUST_LOG=debug to see the search log.

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();
    let mut board = Board::new(10)?;
    board.paint(1, 1)?;
    board.mode = EditMode::End;
    board.paint(8, 7)?;
    board.mode = EditMode::Barrier;
    for row in 0..8 {
        board.paint(row, 4)?;
    }
    for col in 5..9 {
        board.paint(6, col)?;
    }

    let mut step = 0;
    let report = board.search(|grid| {
        step += 1;
        println!("Step {step}:\n{grid}");
        ControlFlow::Continue(())
    })?;
    match report.outcome {
        Outcome::Found(path) => {
            println!("Path of {} cells:", path.len());
            for p in path {
                println!("{:?}", p);
            }
        }
        Outcome::NotFound => println!("No path exists"),
    }
    println!("Expanded {} cells", report.expanded.len());
    Ok(())
}
