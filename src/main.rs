use anyhow::Result;

use std::io::{stdin, stdout, Write};

use connect4_minimax::{
    board::*,
    config::{EngineConfig, DEFAULT_DEPTH},
    evaluation::Weights,
    search::SearchEngine,
    self_play::run_match,
    win::check_winner,
};

mod display;

/// Games played when comparing the weight presets
const MATCH_GAMES: usize = 20;
/// Search depth used when comparing the weight presets
const MATCH_DEPTH: usize = 4;

fn read_answer(prompt: &str) -> Result<String> {
    print!("{}", prompt);
    stdout().flush().expect("failed to flush to stdout!");
    let mut buffer = String::new();
    stdin().read_line(&mut buffer)?;
    Ok(buffer.trim().to_string())
}

fn ask_yes_no(prompt: &str) -> Result<bool> {
    loop {
        let answer = read_answer(&format!("{} y/n: ", prompt))?;
        match answer.to_lowercase().chars().next() {
            Some('y') => return Ok(true),
            Some('n') => return Ok(false),
            _ => println!("Unknown answer given"),
        }
    }
}

fn ask_depth() -> Result<usize> {
    loop {
        let answer = read_answer(&format!("AI search depth (1-9, default {}): ", DEFAULT_DEPTH))?;
        if answer.is_empty() {
            return Ok(DEFAULT_DEPTH);
        }
        match answer.parse::<usize>() {
            Ok(depth @ 1..=9) => return Ok(depth),
            _ => println!("Invalid depth: {}", answer),
        }
    }
}

fn ask_weights() -> Result<Weights> {
    loop {
        let answer = read_answer("Evaluation weights (blocking/balanced, default blocking): ")?;
        if answer.is_empty() {
            return Ok(Weights::default());
        }
        match Weights::preset(&answer) {
            Ok(weights) => return Ok(weights),
            Err(err) => println!("{}", err),
        }
    }
}

fn compare_presets() -> Result<()> {
    let a = EngineConfig::new(Piece::PlayerOne, MATCH_DEPTH).with_weights(Weights::BLOCKING);
    let b = EngineConfig::new(Piece::PlayerOne, MATCH_DEPTH).with_weights(Weights::BALANCED);
    let seed = rand::random::<u64>();

    println!(
        "Playing {} games at depth {}, A = blocking weights, B = balanced weights (seed {})",
        MATCH_GAMES, MATCH_DEPTH, seed
    );
    let report = run_match(&a, &b, MATCH_GAMES, seed, true)?;
    println!("{}", report);
    Ok(())
}

fn main() -> Result<()> {
    println!("Welcome to Connect 4\n");

    if ask_yes_no("Compare the AI weight presets in self-play instead of playing?")? {
        return compare_presets();
    }

    let mut ai_players = (false, false);
    ai_players.0 = ask_yes_no("Is player 1 AI controlled?")?;
    ai_players.1 = ask_yes_no("Is player 2 AI controlled?")?;

    let mut engines = [None, None];
    if ai_players.0 || ai_players.1 {
        let depth = ask_depth()?;
        let weights = ask_weights()?;
        for (slot, (is_ai, piece)) in engines.iter_mut().zip(
            [
                (ai_players.0, Piece::PlayerOne),
                (ai_players.1, Piece::PlayerTwo),
            ]
            .iter(),
        ) {
            if *is_ai {
                *slot = Some(SearchEngine::from_config(
                    &EngineConfig::new(*piece, depth).with_weights(weights),
                ));
            }
        }
    }

    let mut board = Board::new();
    let mut piece = Piece::PlayerOne;

    // game loop
    loop {
        display::draw(&board, None).expect("Failed to draw board!");

        let next_move = match engines[piece.number() - 1].as_mut() {
            // AI player
            Some(engine) => {
                println!("AI is thinking...");
                stdout().flush().expect("Failed to flush to stdout!");

                // slow down play if both players are AI
                if ai_players == (true, true) {
                    std::thread::sleep(std::time::Duration::new(1, 0));
                }

                engine.node_count = 0;
                let depth = engine.depth();
                let result = engine.find_best_move(&board, depth, true);
                let column = match result.column {
                    Some(column) => column,
                    None => engine.choose_column(&board)?,
                };
                println!(
                    "Score: {}, searched {} positions",
                    result.score, engine.node_count
                );
                println!("Best move: {}", column + 1);
                column + 1
            }

            // human player
            None => {
                let input_str =
                    read_answer(&format!("Player {} move input > ", piece.number()))?;
                match input_str.parse::<usize>() {
                    Err(_) => {
                        println!("Invalid number: {}", input_str);
                        continue;
                    }
                    Ok(column) => column,
                }
            }
        };

        if let Err(err) = board.play_checked(next_move, piece) {
            println!("{}", err);
            // try the move again
            continue;
        }

        // end states
        if let Some(win_line) = check_winner(&board, piece) {
            display::draw(&board, Some(&win_line)).expect("Failed to draw board!");
            println!("Player {} wins!", piece.number());
            break;
        }
        if board.is_draw() {
            display::draw(&board, None).expect("Failed to draw board!");
            println!("Draw!");
            break;
        }

        piece = piece.opponent();
    }
    Ok(())
}
