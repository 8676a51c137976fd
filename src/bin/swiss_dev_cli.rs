// src/bin/swiss_dev_cli.rs

use std::error::Error;

use clap::Parser;
use log::info;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use swiss_engine::api::{
    execute_command, execute_query, Command, CommandResponse, CreateTournamentCommand,
    NextRoundCommand, Query, QueryResponse, RecordResultCommand, RegisterParticipantCommand,
    RoundViewDto, StandingRowDto, StartTournamentCommand,
};
use swiss_engine::domain::game::Outcome;
use swiss_engine::domain::tournament::TournamentConfig;
use swiss_engine::domain::TournamentId;
use swiss_engine::engine::{PairingConfig, StrandedPolicy};
use swiss_engine::infra::{init_logger, RngSeed};
use swiss_engine::tournament::TournamentLobby;

const AFFILIATIONS: [&str; 4] = ["North", "South", "East", "West"];

/// Swiss tournament simulator
///
/// Registers synthetic participants, plays every round with seeded random
/// results and prints the pairings and the final standings.
#[derive(Parser, Debug)]
#[command(about = "Swiss tournament simulator")]
struct Args {
    /// How many participants to register
    #[arg(default_value_t = 9, long)]
    players: u32,

    /// Seed for pairings and results
    #[arg(default_value_t = 42, long)]
    seed: u64,

    /// Fix the number of rounds instead of deriving it from the field size
    #[arg(long)]
    rounds: Option<u32>,

    /// Pair stranded participants again instead of leaving them unmatched
    #[arg(long)]
    allow_rematch: bool,

    /// Print rounds and standings as JSON
    #[arg(long)]
    json: bool,

    /// Log without timestamps
    #[arg(long)]
    compact_log: bool,
}

#[derive(serde::Serialize)]
struct Report {
    rounds: Vec<RoundViewDto>,
    standings: Vec<StandingRowDto>,
}

fn main() -> Result<(), Box<dyn Error>> {
    let args = Args::parse();
    init_logger(args.compact_log);

    let mut lobby = TournamentLobby::new(RngSeed::from_u64(args.seed));
    let mut results = StdRng::seed_from_u64(args.seed);

    let mut config = TournamentConfig::named("Dev Swiss");
    config.rounds_override = args.rounds;
    config.pairing = PairingConfig {
        stranded: if args.allow_rematch {
            StrandedPolicy::AllowRematch
        } else {
            StrandedPolicy::LeaveUnmatched
        },
        ..PairingConfig::default()
    };

    let tournament_id = match execute_command(
        &mut lobby,
        Command::CreateTournament(CreateTournamentCommand { config }),
    )? {
        CommandResponse::TournamentCreated(view) => view.tournament_id,
        other => return Err(format!("unexpected response: {other:?}").into()),
    };

    for n in 1..=args.players {
        execute_command(
            &mut lobby,
            Command::RegisterParticipant(RegisterParticipantCommand {
                tournament_id,
                name: format!("Player {n:02}"),
                affiliation: AFFILIATIONS[n as usize % AFFILIATIONS.len()].to_string(),
            }),
        )?;
    }

    let mut rounds = Vec::new();
    let mut response = execute_command(
        &mut lobby,
        Command::StartTournament(StartTournamentCommand { tournament_id }),
    )?;

    loop {
        let round = match response {
            CommandResponse::RoundPaired(round) => round,
            other => return Err(format!("unexpected response: {other:?}").into()),
        };

        play_round(&mut lobby, tournament_id, &round, &mut results)?;
        rounds.push(current_round(&lobby, tournament_id)?);

        let finished = match execute_query(&lobby, Query::GetTournament { tournament_id })? {
            QueryResponse::Tournament(view) => view.winner.is_some() || view.status == "Finished",
            _ => false,
        };
        if finished {
            break;
        }

        response = execute_command(
            &mut lobby,
            Command::NextRound(NextRoundCommand { tournament_id }),
        )?;
    }

    let standings = match execute_query(&lobby, Query::GetStandings { tournament_id })? {
        QueryResponse::Standings(rows) => rows,
        other => return Err(format!("unexpected response: {other:?}").into()),
    };

    let played = rounds.len();
    if args.json {
        let report = Report { rounds, standings };
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        for round in &rounds {
            print_round(round);
        }
        print_standings(&standings);
    }

    info!("simulation finished after {} round(s)", played);
    Ok(())
}

/// Случайные результаты: белые ~40%, чёрные ~35%, ничья ~25%.
fn random_outcome(rng: &mut StdRng) -> Outcome {
    match rng.gen_range(0..100) {
        0..=39 => Outcome::WHITE_WINS,
        40..=74 => Outcome::BLACK_WINS,
        _ => Outcome::Draw,
    }
}

fn play_round(
    lobby: &mut TournamentLobby,
    tournament_id: TournamentId,
    round: &RoundViewDto,
    rng: &mut StdRng,
) -> Result<(), Box<dyn Error>> {
    for m in round.matches.iter().filter(|m| m.bye.is_none()) {
        execute_command(
            lobby,
            Command::RecordResult(RecordResultCommand {
                tournament_id,
                match_id: m.match_id,
                outcome: random_outcome(rng),
            }),
        )?;
    }
    Ok(())
}

fn current_round(
    lobby: &TournamentLobby,
    tournament_id: TournamentId,
) -> Result<RoundViewDto, Box<dyn Error>> {
    match execute_query(
        lobby,
        Query::GetRound {
            tournament_id,
            round: None,
        },
    )? {
        QueryResponse::Round(round) => Ok(round),
        other => Err(format!("unexpected response: {other:?}").into()),
    }
}

fn print_round(round: &RoundViewDto) {
    println!();
    println!("================ ROUND {} ================", round.round);

    for m in &round.matches {
        match (&m.white, &m.black, &m.bye) {
            (Some(white), Some(black), _) => {
                println!("  {:<12} {:^9} {}", white.name, m.result, black.name)
            }
            (_, _, Some(bye)) => println!("  {:<12} {:^9} (bye)", bye.name, m.result),
            _ => {}
        }
    }
}

fn print_standings(standings: &[StandingRowDto]) {
    println!();
    println!("================ STANDINGS ================");
    println!("  {:>3}  {:<12} {:<6} {:>5} {:>6}", "#", "name", "club", "pts", "buch");

    for row in standings {
        println!(
            "  {:>3}  {:<12} {:<6} {:>5.1} {:>6.1}",
            row.rank, row.name, row.affiliation, row.score, row.buchholz
        );
    }
}
