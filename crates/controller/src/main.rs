//! Terminal chess against the engine.
//!
//! Moves are coordinate pairs like `e2e4`, with an optional promotion
//! letter (`e7e8q`); promotions without a letter default to queen.

use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use std::process;

use chess_core::{GameResult, Move, PieceType, Player, Position};
use game_controller::{GameController, GameStats, HumanColor, SessionConfig};
use minimax_engine::ChessAi;

fn print_usage() {
    println!("Play chess against the engine");
    println!();
    println!("Usage:");
    println!("  play [--color white|black] [--difficulty N] [--time MS]");
    println!("       [--config PATH] [--stats PATH]");
    println!();
    println!("Options:");
    println!("  --color, -c       Side to play (default: white)");
    println!("  --difficulty, -d  Search depth in plies (default: 3)");
    println!("  --time, -t        Engine time budget per move in ms (default: 4000)");
    println!("  --config          TOML session config; flags override it");
    println!("  --stats           Stats file (default: chess_stats.json)");
    println!();
    println!("During play: moves <square> lists a piece's moves, quit exits.");
}

#[derive(Debug)]
struct CliOptions {
    config_path: Option<PathBuf>,
    stats_path: PathBuf,
    color: Option<HumanColor>,
    difficulty: Option<u8>,
    move_time_ms: Option<u64>,
    help: bool,
}

fn parse_args(args: &[String]) -> Result<CliOptions, String> {
    let mut opts = CliOptions {
        config_path: None,
        stats_path: PathBuf::from("chess_stats.json"),
        color: None,
        difficulty: None,
        move_time_ms: None,
        help: false,
    };

    let mut i = 0;
    while i < args.len() {
        match args[i].as_str() {
            "--help" | "-h" => {
                opts.help = true;
            }
            "--color" | "-c" => {
                let value = flag_value(args, i, "--color")?;
                opts.color = match value.to_lowercase().as_str() {
                    "white" | "w" => Some(HumanColor::White),
                    "black" | "b" => Some(HumanColor::Black),
                    other => return Err(format!("unknown color: {}", other)),
                };
                i += 1;
            }
            "--difficulty" | "-d" => {
                let value = flag_value(args, i, "--difficulty")?;
                let depth = value
                    .parse()
                    .map_err(|_| format!("bad difficulty: {}", value))?;
                opts.difficulty = Some(depth);
                i += 1;
            }
            "--time" | "-t" => {
                let value = flag_value(args, i, "--time")?;
                let ms = value
                    .parse()
                    .map_err(|_| format!("bad move time: {}", value))?;
                opts.move_time_ms = Some(ms);
                i += 1;
            }
            "--config" => {
                opts.config_path = Some(PathBuf::from(flag_value(args, i, "--config")?));
                i += 1;
            }
            "--stats" => {
                opts.stats_path = PathBuf::from(flag_value(args, i, "--stats")?);
                i += 1;
            }
            other => return Err(format!("unknown argument: {}", other)),
        }
        i += 1;
    }

    Ok(opts)
}

fn flag_value<'a>(args: &'a [String], i: usize, flag: &str) -> Result<&'a str, String> {
    args.get(i + 1)
        .map(|s| s.as_str())
        .ok_or_else(|| format!("{} requires a value", flag))
}

fn main() {
    tracing_subscriber::fmt::init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let opts = match parse_args(&args) {
        Ok(opts) => opts,
        Err(message) => {
            eprintln!("Error: {}", message);
            print_usage();
            process::exit(1);
        }
    };
    if opts.help {
        print_usage();
        return;
    }

    let mut config = match opts.config_path {
        Some(path) => match SessionConfig::load(&path) {
            Ok(config) => config,
            Err(e) => {
                eprintln!("Error: {}", e);
                process::exit(1);
            }
        },
        None => SessionConfig::default(),
    };
    if let Some(color) = opts.color {
        config.human_color = color;
    }
    if let Some(difficulty) = opts.difficulty {
        config.difficulty = difficulty;
    }
    if let Some(ms) = opts.move_time_ms {
        config.move_time_ms = ms;
    }

    let human: Player = config.human_color.into();
    let engine = ChessAi::with_move_time(human.opponent(), config.difficulty, config.move_time());
    let mut controller = GameController::with_engine(human, Box::new(engine));
    let mut stats = GameStats::load(&opts.stats_path).unwrap_or_default();

    println!(
        "You play {:?} against depth {}. Moves like e2e4 (e7e8q to promote).",
        human, config.difficulty
    );

    let stdin = io::stdin();
    loop {
        println!();
        println!("{}", controller.state().board());

        if let Some(result) = controller.state().result() {
            announce(result, human);
            stats.record(result, human);
            if let Err(e) = stats.save(&opts.stats_path) {
                eprintln!("Warning: failed to save stats: {}", e);
            }
            println!(
                "Record: {} played, {} wins, {} losses, {} draws ({:.1}% wins)",
                stats.games_played,
                stats.wins,
                stats.losses,
                stats.draws,
                stats.win_rate()
            );
            return;
        }

        if controller.is_human_turn() {
            print!("> ");
            let _ = io::stdout().flush();

            let mut line = String::new();
            match stdin.lock().read_line(&mut line) {
                Ok(0) => return,
                Ok(_) => {}
                Err(e) => {
                    eprintln!("Error reading input: {}", e);
                    process::exit(1);
                }
            }
            let input = line.trim();

            if input.is_empty() {
                continue;
            }
            if input == "quit" || input == "exit" {
                return;
            }
            if let Some(square) = input.strip_prefix("moves ") {
                list_moves(&controller, square.trim());
                continue;
            }

            match parse_move(&controller, input) {
                Some(mv) if controller.try_make_move(mv) => {}
                _ => println!("Illegal move: {}", input),
            }
        } else {
            match controller.make_ai_move() {
                Some(mv) => println!("Engine plays {}", mv),
                None => {
                    eprintln!("Engine found no move");
                    process::exit(1);
                }
            }
        }
    }
}

fn announce(result: GameResult, human: Player) {
    let verdict = if result.winner == Player::None {
        "Draw"
    } else if result.winner == human {
        "You win"
    } else {
        "Engine wins"
    };
    println!("Game over: {} ({:?})", verdict, result.end_reason);
}

fn list_moves(controller: &GameController, square: &str) {
    match Position::from_algebraic(square) {
        Some(pos) => {
            let moves = controller.legal_moves_for_piece(pos);
            if moves.is_empty() {
                println!("No moves from {}", square);
            } else {
                let listed: Vec<String> = moves.iter().map(|m| m.to_string()).collect();
                println!("{}", listed.join(" "));
            }
        }
        None => println!("Bad square: {}", square),
    }
}

/// Parse coordinate input like "e2e4" or "e7e8q" into a currently legal
/// move. A promotion without a letter picks the queen.
fn parse_move(controller: &GameController, input: &str) -> Option<Move> {
    if !input.is_ascii() || input.len() < 4 || input.len() > 5 {
        return None;
    }
    let from = Position::from_algebraic(&input[0..2])?;
    let to = Position::from_algebraic(&input[2..4])?;
    let promoted = match input.as_bytes().get(4) {
        None => None,
        Some(b'q') => Some(PieceType::Queen),
        Some(b'r') => Some(PieceType::Rook),
        Some(b'b') => Some(PieceType::Bishop),
        Some(b'n') => Some(PieceType::Knight),
        Some(_) => return None,
    };

    let candidates: Vec<Move> = controller
        .legal_moves_for_piece(from)
        .into_iter()
        .filter(|m| m.to() == to)
        .collect();

    match promoted {
        Some(kind) => candidates.into_iter().find(|m| m.promoted() == Some(kind)),
        None => candidates
            .into_iter()
            .find(|m| m.promoted().is_none() || m.promoted() == Some(PieceType::Queen)),
    }
}
