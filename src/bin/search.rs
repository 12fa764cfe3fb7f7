//! Search Demo Binary
//!
//! Solves a maze with the graph-search engine, then picks a move on a
//! random game tree with every adversarial strategy.
//!
//! Options: --maze, --strategy, --depth, --agents, --json, --seed

use clap::Parser;
use clap::ValueEnum;
use colored::Colorize;
use rayon::prelude::*;
use robosearch::*;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// maze layout file (`%` wall, `P` start, `.` goal); random if omitted
    #[arg(long)]
    maze: Option<std::path::PathBuf>,
    /// graph-search strategy to run on the maze
    #[arg(long, value_enum, default_value = "all")]
    strategy: Strategy,
    /// ply budget of the adversarial strategies
    #[arg(long, default_value_t = DEPTH)]
    depth: usize,
    /// agents taking turns on the random game tree
    #[arg(long, default_value_t = 2)]
    agents: usize,
    /// print reports as json instead of drawing them
    #[arg(long)]
    json: bool,
    /// seed of the reflex agent's tie-breaking
    #[arg(long, default_value_t = REFLEX_SEED)]
    seed: u64,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum Strategy {
    Dfs,
    Bfs,
    Ucs,
    Astar,
    All,
}

impl Strategy {
    const EACH: [Strategy; 4] = [Self::Dfs, Self::Bfs, Self::Ucs, Self::Astar];

    fn solve(self, maze: &Maze) -> anyhow::Result<Outcome<Direction>> {
        match self {
            Self::Dfs => Search::new(maze, DepthFirst).run(),
            Self::Bfs => Search::new(maze, BreadthFirst).run(),
            Self::Ucs => Search::new(maze, UniformCost).run(),
            Self::Astar => Search::new(maze, AStar(manhattan)).run(),
            Self::All => unreachable!("all is expanded before solving"),
        }
    }
}

impl std::fmt::Display for Strategy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Dfs => write!(f, "dfs"),
            Self::Bfs => write!(f, "bfs"),
            Self::Ucs => write!(f, "ucs"),
            Self::Astar => write!(f, "astar"),
            Self::All => write!(f, "all"),
        }
    }
}

fn main() -> anyhow::Result<()> {
    log()?;
    let args = Args::parse();
    anyhow::ensure!(args.agents > 0, "at least one agent must take turns");
    let maze = match args.maze {
        Some(ref path) => Maze::try_from(std::fs::read_to_string(path)?.as_str())?,
        None => Maze::random(),
    };
    let strategies = match args.strategy {
        Strategy::All => Strategy::EACH.to_vec(),
        one => vec![one],
    };
    let outcomes = strategies
        .par_iter()
        .map(|strategy| strategy.solve(&maze).map(|outcome| (*strategy, outcome)))
        .collect::<anyhow::Result<Vec<_>>>()?;

    let outline = Outline::new(args.agents, Outline::random().root().clone());
    let adversaries: [&dyn Adversary<Outline>; 4] = [
        &Minimax::new(args.depth, Outline::score),
        &AlphaBeta::new(args.depth, Outline::score),
        &Expectimax::new(args.depth, Outline::score),
        &Reflex::seeded(Outline::score, args.seed),
    ];
    let decisions = adversaries
        .iter()
        .map(|adversary| adversary.search(&outline).map(|d| (adversary.name(), d)))
        .collect::<anyhow::Result<Vec<_>>>()?;

    if args.json {
        let report = serde_json::json!({
            "maze": outcomes
                .iter()
                .map(|(strategy, outcome)| (strategy.to_string(), outcome))
                .collect::<std::collections::BTreeMap<_, _>>(),
            "outline": decisions
                .iter()
                .map(|(name, decision)| (name.to_string(), decision))
                .collect::<std::collections::BTreeMap<_, _>>(),
        });
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    for (strategy, outcome) in outcomes.iter() {
        log::info!("{:<32}{}", strategy.to_string().bold(), outcome);
        match outcome.solution() {
            Some(path) => println!("{}", maze.draw(path)),
            None => println!("{}", "no path to the goal".red()),
        }
    }
    log::info!("{:<32}{}", "outline".bold(), outline);
    for (name, decision) in decisions.iter() {
        log::info!("{:<32}{}", name.green(), decision);
    }
    Ok(())
}
