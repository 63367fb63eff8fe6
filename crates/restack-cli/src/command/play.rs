use std::{
    io::{self, BufRead as _, Write as _},
    path::PathBuf,
};

use anyhow::Context as _;
use clap::Args;
use restack_engine::{
    BoardShape, Column, GameSession, MoveOutcome, RecordSink as _, RoundRecord, SESSION_LENGTH,
    SessionSeed,
};

use crate::sink::JsonlSink;

#[derive(Debug, Clone, Args)]
pub struct PlayArg {
    /// File round records are appended to, one JSON object per line
    #[arg(long, default_value = "restack-records.jsonl")]
    records: PathBuf,
    /// 32-hex-character seed for deterministic level draws
    #[arg(long)]
    seed: Option<SessionSeed>,
    /// JSON file with a custom level catalog (replaces the built-in one)
    #[arg(long)]
    levels: Option<PathBuf>,
}

impl Default for PlayArg {
    fn default() -> Self {
        Self {
            records: PathBuf::from("restack-records.jsonl"),
            seed: None,
            levels: None,
        }
    }
}

pub fn run(arg: &PlayArg) -> anyhow::Result<()> {
    let catalog = super::load_catalog(arg.levels.as_deref())?;
    let mut session = match arg.seed {
        Some(seed) => GameSession::with_seed(catalog, BoardShape::STANDARD, seed)?,
        None => GameSession::new(catalog, BoardShape::STANDARD)?,
    };
    let mut sink = JsonlSink::open(&arg.records)
        .with_context(|| format!("cannot open records file {}", arg.records.display()))?;

    println!("restack: rearrange the blocks to match the target layout.");
    println!("commands: move <block> <from> <to> (columns numbered from 1), skip, board, quit");
    session.start_session();
    print_round(&session);

    let stdin = io::stdin();
    let mut line = String::new();
    loop {
        print!("> ");
        io::stdout().flush()?;
        line.clear();
        if stdin.lock().read_line(&mut line)? == 0 {
            return Ok(());
        }
        let tokens: Vec<&str> = line.split_whitespace().collect();
        match tokens.as_slice() {
            [] => {}
            ["quit" | "q" | "exit"] => return Ok(()),
            ["board"] => print_round(&session),
            ["skip"] => match session.skip_round() {
                Ok(record) => {
                    println!(
                        "round skipped; difficulty steps down to {}",
                        session.difficulty()
                    );
                    persist(&mut sink, &record);
                    if conclude(&session) {
                        return Ok(());
                    }
                }
                Err(err) => println!("{err}"),
            },
            ["move", block, from, to] => match parse_move(block, from, to) {
                Ok((block, from, to)) => match session.try_move(block, from, to) {
                    Ok(MoveOutcome::Applied) => print_round(&session),
                    Ok(MoveOutcome::RoundWon(record)) => {
                        println!(
                            "solved {} in {} moves for {} points",
                            record.level_id, record.moves_taken, record.score
                        );
                        persist(&mut sink, &record);
                        if conclude(&session) {
                            return Ok(());
                        }
                    }
                    Err(err) => println!("illegal move: {err}"),
                },
                Err(err) => println!("{err}"),
            },
            _ => println!("unrecognized command; try: move <block> <from> <to>, skip, board, quit"),
        }
    }
}

fn parse_move(block: &str, from: &str, to: &str) -> Result<(u8, usize, usize), String> {
    let block = block
        .parse()
        .map_err(|_| format!("{block} is not a block id"))?;
    let column = |s: &str| {
        s.parse::<usize>()
            .ok()
            .and_then(|c| c.checked_sub(1))
            .ok_or_else(|| format!("{s} is not a column number (columns are numbered from 1)"))
    };
    Ok((block, column(from)?, column(to)?))
}

/// Forwards a finished record to the sink. A failed write is reported but
/// never interrupts play; the round has already been scored in memory.
fn persist(sink: &mut JsonlSink, record: &RoundRecord) {
    if let Err(err) = sink.append(record) {
        eprintln!("warning: {err}; the round still counts");
    }
}

/// Reports session completion, or prints the freshly loaded round.
fn conclude(session: &GameSession) -> bool {
    if session.state().is_session_complete() {
        println!(
            "session complete: total score {} over {SESSION_LENGTH} rounds",
            session.cumulative_score()
        );
        true
    } else {
        print_round(session);
        false
    }
}

fn print_round(session: &GameSession) {
    let (Some(board), Some(target)) = (session.board(), session.target()) else {
        return;
    };
    println!(
        "round {}/{SESSION_LENGTH}  level {}  difficulty {}  moves {} (optimal {})  score {}",
        session.round(),
        session.level_id().unwrap_or("?"),
        session.difficulty(),
        session.moves_taken().unwrap_or(0),
        session.optimal_moves().unwrap_or(0),
        session.cumulative_score(),
    );
    println!("  board   {}", render_columns(board.columns()));
    println!("  target  {}", render_columns(target));
}

fn render_columns(columns: &[Column]) -> String {
    columns
        .iter()
        .enumerate()
        .map(|(i, column)| {
            let blocks = if column.is_empty() {
                "-".to_owned()
            } else {
                column
                    .iter()
                    .map(ToString::to_string)
                    .collect::<Vec<_>>()
                    .join(" ")
            };
            format!("{}:[{blocks}]", i + 1)
        })
        .collect::<Vec<_>>()
        .join("  ")
}
