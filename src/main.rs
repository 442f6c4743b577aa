//! SGF-Editor command line.
//!
//! ## Usage
//!
//! - `sgf-editor` - Show a demo
//! - `sgf-editor replay D4 Q16 pass ...` - Replay moves and print the board
//! - `sgf-editor random --seed 7` - Run a random playout

use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand};

use sgf_editor::config::{EditorConfig, KoMarkerPolicy};
use sgf_editor::coord::{parse_coord, str_coord};
use sgf_editor::editor::GameTreeEditor;
use sgf_editor::game_tree::GameTree;
use sgf_editor::node::Node;
use sgf_editor::playout::playout;
use sgf_editor::property::{Color, Point, Property};

/// SGF-Editor: a persistent editor for branching Go game records
#[derive(Parser)]
#[command(name = "sgf-editor")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Log editor decisions (branching, captures) to stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Replay alternating moves ("D4", "pass") and print the final board
    Replay {
        moves: Vec<String>,
        #[arg(long, default_value_t = 19)]
        size: u8,
        #[arg(long, default_value_t = 0)]
        handicap: u32,
        /// Skip rule checks (bounds are still enforced)
        #[arg(long)]
        force: bool,
        /// Tag every forced move with a ko marker
        #[arg(long)]
        always_mark_ko: bool,
    },
    /// Play random legal moves until both players pass
    Random {
        #[arg(long, default_value_t = 1)]
        seed: u64,
        #[arg(long, default_value_t = 200)]
        moves: usize,
        #[arg(long, default_value_t = 9)]
        size: u8,
    },
    /// Run a short demo of captures, ko and variations
    Demo,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let level = if cli.verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();

    match cli.command {
        Some(Commands::Replay {
            moves,
            size,
            handicap,
            force,
            always_mark_ko,
        }) => {
            let policy = if always_mark_ko {
                KoMarkerPolicy::Always
            } else {
                KoMarkerPolicy::WhenIllegal
            };
            let config = EditorConfig::default()
                .with_ko_marker(policy)
                .with_default_board_size(size);
            run_replay(&moves, size, handicap, force, config)
        }
        Some(Commands::Random { seed, moves, size }) => run_random(seed, moves, size),
        Some(Commands::Demo) | None => run_demo(),
    }
}

fn new_game(size: u8, handicap: u32, config: EditorConfig) -> GameTreeEditor {
    let mut root = Node::new().with(Property::square(size));
    if handicap > 0 {
        root.insert(Property::Handicap(handicap));
    }
    GameTreeEditor::with_config(GameTree::new(root), config)
}

fn print_position(editor: &GameTreeEditor) -> Result<()> {
    let board = editor.board()?;
    println!("{board}");
    println!(
        "Captures: black {}, white {}",
        board.captures(Color::Black),
        board.captures(Color::White)
    );
    println!("Next to play: {}", editor.next_to_play());
    Ok(())
}

fn run_replay(
    moves: &[String],
    size: u8,
    handicap: u32,
    force: bool,
    config: EditorConfig,
) -> Result<()> {
    let mut editor = new_game(size, handicap, config);
    for (i, mv) in moves.iter().enumerate() {
        let color = editor.next_to_play();
        let point = parse_coord(mv, size).with_context(|| format!("move {}", i + 1))?;
        editor = match (point, force) {
            (None, _) => editor.pass(color),
            (Some(p), false) => editor.place_stone(color, p),
            (Some(p), true) => editor.force_stone(color, p),
        }
        .with_context(|| format!("move {} ({color} {mv})", i + 1))?;
    }
    print_position(&editor)
}

fn run_random(seed: u64, moves: usize, size: u8) -> Result<()> {
    let mut rng = fastrand::Rng::with_seed(seed);
    let editor = new_game(size, 0, EditorConfig::default());
    let editor = playout(&editor, &mut rng, moves)?;
    print_position(&editor)?;
    println!("Nodes in record: {}", editor.commit().node_count());
    Ok(())
}

fn run_demo() -> Result<()> {
    println!("SGF-Editor: persistent game-record editor\n");
    let size = 9;
    let at = |s: &str| -> Result<Point> {
        match parse_coord(s, size)? {
            Some(p) => Ok(p),
            None => bail!("expected a point, got {s}"),
        }
    };

    // Demo 1: capture
    println!("=== Capture ===");
    let mut editor = new_game(size, 0, EditorConfig::default());
    for mv in ["C3", "D3", "D2", "J9", "E3", "J8", "D4"] {
        let color = editor.next_to_play();
        editor = editor.place_stone(color, at(mv)?)?;
    }
    print_position(&editor)?;

    // Demo 2: ko
    println!("\n=== Ko ===");
    let mut editor = new_game(size, 0, EditorConfig::default());
    for mv in ["B1", "C1", "A2", "D2", "B3", "C3", "C2", "B2"] {
        let color = editor.next_to_play();
        editor = editor.place_stone(color, at(mv)?)?;
    }
    match editor.place_stone(Color::Black, at("C2")?) {
        Ok(_) => println!("Black retook the ko"),
        Err(e) => println!("Black retaking at C2: {e}"),
    }

    // Demo 3: variations
    println!("\n=== Variations ===");
    let editor = new_game(size, 0, EditorConfig::default())
        .place_stone(Color::Black, at("E5")?)?
        .place_stone(Color::White, at("C3")?)?;
    let editor = editor
        .previous_node()
        .stay()
        .place_stone(Color::White, at("G7")?)?;
    let record = editor.commit();
    for (i, variation) in record.children().iter().enumerate() {
        if let Some((color, point)) = variation.first_node().played_move() {
            println!("Variation {}: {color} {}", i + 1, str_coord(point, size)?);
        }
    }
    Ok(())
}
