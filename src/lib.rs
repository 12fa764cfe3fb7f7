//! Generic graph search and multi-agent adversarial tree search.
//!
//! Two engines live here, and they never talk to each other:
//!
//! - `search` — finds an action sequence from a start state to a goal state
//!   of any [`Problem`], using depth-first, breadth-first, uniform-cost or
//!   heuristic-guided (A*) graph search.
//! - `adversarial` — picks a single action for agent 0 of any [`GameState`]
//!   by exploring a bounded-depth game tree with minimax, alpha-beta pruning
//!   or expectimax.
//!
//! # Module Structure
//!
//! - `problem` — Search problem contract and heuristics
//! - `tree` — Arena of search nodes with parent-chain path reconstruction
//! - `frontier` — LIFO, FIFO and priority orderings for the search loop
//! - `search` — The generic graph-search loop and its disciplines
//! - `game` — Multi-agent game state contract and evaluation functions
//! - `adversarial` — Minimax, alpha-beta, expectimax and reflex agents
//! - `maze`, `graph`, `outline` — Reference environments for tests and demos
#![allow(dead_code)]

mod adversarial;
mod frontier;
mod game;
mod graph;
mod maze;
mod outline;
mod problem;
mod search;
mod tree;

pub use adversarial::*;
pub use frontier::*;
pub use game::*;
pub use graph::*;
pub use maze::*;
pub use outline::*;
pub use problem::*;
pub use search::*;
pub use tree::*;

// ============================================================================
// TYPE ALIASES
// ============================================================================
/// Step costs, path costs and heuristic estimates.
pub type Cost = f32;
/// Evaluation scores of game states.
pub type Utility = f32;
/// Turn index of an agent within one ply (0 = maximizer).
pub type Agent = usize;

// ============================================================================
// TRAITS
// ============================================================================
/// Random instance generation for testing and benchmarking.
pub trait Arbitrary {
    /// Generate a uniformly random instance.
    fn random() -> Self;
}

// ============================================================================
// ADVERSARIAL SEARCH PARAMETERS
// ============================================================================
/// The agent whose value is maximized and whose action is returned.
pub const MAXIMIZER: Agent = 0;
/// Default ply budget. One ply = every agent acts once.
pub const DEPTH: usize = 2;
/// Seed for the reflex agent's tie-breaking rng.
pub const REFLEX_SEED: u64 = 0xB0B;

// ============================================================================
// REFERENCE MAZE
// Random mazes for tests, benches and the demo binary.
// ============================================================================
/// Width of a random maze, walls included.
pub const MAZE_WIDTH: usize = 24;
/// Height of a random maze, walls included.
pub const MAZE_HEIGHT: usize = 12;
/// Probability that an interior cell of a random maze is a wall.
pub const MAZE_DENSITY: f64 = 0.25;

// ============================================================================
// REFERENCE NETWORK
// Random weighted digraphs for search property tests.
// ============================================================================
/// Number of vertices in a random network.
pub const NETWORK_VERTICES: usize = 12;
/// Number of arcs in a random network.
pub const NETWORK_ARCS: usize = 30;
/// Largest integral step cost of a random arc.
pub const NETWORK_MAX_COST: u32 = 9;

// ============================================================================
// REFERENCE OUTLINE
// Random explicit game trees for adversarial property tests.
// ============================================================================
/// Maximum children of a random fork.
pub const OUTLINE_BRANCHING: usize = 3;
/// Height of a random outline in agent turns.
pub const OUTLINE_HEIGHT: usize = 6;
/// Leaf payoffs are drawn from `-OUTLINE_PAYOFF..=OUTLINE_PAYOFF`.
pub const OUTLINE_PAYOFF: i32 = 9;

// ============================================================================
// RUNTIME UTILITIES
// ============================================================================
/// Initialize dual logging (terminal + file) with timestamped log files.
/// Creates `logs/` directory and writes DEBUG level to file, INFO to terminal.
#[cfg(feature = "cli")]
pub fn log() -> anyhow::Result<()> {
    std::fs::create_dir_all("logs")?;
    let config = simplelog::ConfigBuilder::new()
        .set_location_level(log::LevelFilter::Off)
        .set_target_level(log::LevelFilter::Off)
        .set_thread_level(log::LevelFilter::Off)
        .build();
    let time = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)?
        .as_secs();
    let file = simplelog::WriteLogger::new(
        log::LevelFilter::Debug,
        config.clone(),
        std::fs::File::create(format!("logs/{}.log", time))?,
    );
    let term = simplelog::TermLogger::new(
        log::LevelFilter::Info,
        config.clone(),
        simplelog::TerminalMode::Mixed,
        simplelog::ColorChoice::Auto,
    );
    simplelog::CombinedLogger::init(vec![term, file])?;
    Ok(())
}
