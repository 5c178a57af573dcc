//! Perft divide: per-root-move node counts for localizing generator
//! bugs. Takes an optional FEN and depth on the command line.

use std::env;
use std::time::Instant;

use arbiter::board::Board;

const DEFAULT_FEN: &str = "r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R w KQkq - 0 1";

fn main() {
    let args: Vec<String> = env::args().collect();
    let fen = args.get(1).map_or(DEFAULT_FEN, String::as_str);
    let depth: usize = args.get(2).and_then(|d| d.parse().ok()).unwrap_or(4);

    let mut board = match Board::try_from_fen(fen) {
        Ok(board) => board,
        Err(err) => {
            eprintln!("bad FEN: {err}");
            std::process::exit(1);
        }
    };

    println!("{board}");
    println!("perft divide at depth {depth}");

    let start = Instant::now();
    let mut total = 0u64;
    let root_moves = board.generate_moves();
    let mut lines: Vec<(String, u64)> = Vec::new();
    for mv in &root_moves {
        board.make_move_untracked(mv);
        let nodes = if depth > 1 { board.perft(depth - 1) } else { 1 };
        board.undo_move();
        lines.push((mv.to_string(), nodes));
        total += nodes;
    }
    lines.sort();
    for (mv, nodes) in &lines {
        println!("  {mv}: {nodes}");
    }
    println!("total: {total} in {:?}", start.elapsed());
}
