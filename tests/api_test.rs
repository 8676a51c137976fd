use swiss_engine::{
    api::{
        commands::{
            execute_command, Command, CreateTournamentCommand, NextRoundCommand,
            RecordResultCommand, RegisterParticipantCommand, StartTournamentCommand,
            UnregisterParticipantCommand,
        },
        dto::{CommandResponse, RoundViewDto, TournamentViewDto},
        errors::ApiError,
        queries::{execute_query, Query, QueryResponse},
    },
    domain::{tournament::TournamentError, Outcome, TournamentConfig, TournamentId},
    engine::EngineError,
    infra::RngSeed,
    tournament::TournamentLobby,
};

/// Утилита: лобби с одним турниром и `players` участниками.
fn lobby_with_players(players: u32) -> (TournamentLobby, TournamentId) {
    let mut lobby = TournamentLobby::new(RngSeed::from_u64(5));

    let view = match execute_command(
        &mut lobby,
        Command::CreateTournament(CreateTournamentCommand {
            config: TournamentConfig::named("API Open"),
        }),
    )
    .unwrap()
    {
        CommandResponse::TournamentCreated(view) => view,
        other => panic!("unexpected response: {other:?}"),
    };

    for n in 1..=players {
        execute_command(
            &mut lobby,
            Command::RegisterParticipant(RegisterParticipantCommand {
                tournament_id: view.tournament_id,
                name: format!("Player {n}"),
                affiliation: String::new(),
            }),
        )
        .unwrap();
    }

    (lobby, view.tournament_id)
}

fn start(lobby: &mut TournamentLobby, tournament_id: TournamentId) -> RoundViewDto {
    match execute_command(
        lobby,
        Command::StartTournament(StartTournamentCommand { tournament_id }),
    )
    .unwrap()
    {
        CommandResponse::RoundPaired(round) => round,
        other => panic!("unexpected response: {other:?}"),
    }
}

fn tournament_view(lobby: &TournamentLobby, tournament_id: TournamentId) -> TournamentViewDto {
    match execute_query(lobby, Query::GetTournament { tournament_id }).unwrap() {
        QueryResponse::Tournament(view) => view,
        other => panic!("unexpected response: {other:?}"),
    }
}

// ----------------------
// tests для commands.rs
// ----------------------

#[test]
fn create_tournament_returns_registering_view() {
    let (lobby, id) = lobby_with_players(0);
    let view = tournament_view(&lobby, id);

    assert_eq!(view.tournament_id, 1);
    assert_eq!(view.name, "API Open");
    assert_eq!(view.status, "Registering");
    assert_eq!(view.total_rounds, 0);
}

#[test]
fn register_participant_trims_name_and_rejects_blank() {
    let (mut lobby, id) = lobby_with_players(0);

    let response = execute_command(
        &mut lobby,
        Command::RegisterParticipant(RegisterParticipantCommand {
            tournament_id: id,
            name: "  Ann  ".into(),
            affiliation: "North".into(),
        }),
    )
    .unwrap();

    match response {
        CommandResponse::ParticipantRegistered {
            tournament_id,
            participant,
        } => {
            assert_eq!(tournament_id, id);
            assert_eq!(participant.participant_id, 1);
            assert_eq!(participant.name, "Ann");
        }
        other => panic!("unexpected response: {other:?}"),
    }

    let err = execute_command(
        &mut lobby,
        Command::RegisterParticipant(RegisterParticipantCommand {
            tournament_id: id,
            name: "   ".into(),
            affiliation: String::new(),
        }),
    )
    .unwrap_err();
    assert!(matches!(err, ApiError::BadRequest(_)));
}

#[test]
fn unregister_then_start_with_too_few_is_invalid_command() {
    let (mut lobby, id) = lobby_with_players(2);

    let response = execute_command(
        &mut lobby,
        Command::UnregisterParticipant(UnregisterParticipantCommand {
            tournament_id: id,
            participant_id: 2,
        }),
    )
    .unwrap();
    assert_eq!(response, CommandResponse::Ok);

    let err = execute_command(
        &mut lobby,
        Command::StartTournament(StartTournamentCommand { tournament_id: id }),
    )
    .unwrap_err();
    assert!(matches!(err, ApiError::InvalidCommand(_)));
}

#[test]
fn unknown_tournament_is_reported() {
    let mut lobby = TournamentLobby::new(RngSeed::from_u64(1));

    assert_eq!(
        execute_command(
            &mut lobby,
            Command::NextRound(NextRoundCommand { tournament_id: 9 }),
        ),
        Err(ApiError::TournamentNotFound(9))
    );
    assert_eq!(
        execute_query(&lobby, Query::GetStandings { tournament_id: 9 }),
        Err(ApiError::TournamentNotFound(9))
    );
}

#[test]
fn start_record_and_next_round_flow() {
    let (mut lobby, id) = lobby_with_players(5);

    let round = start(&mut lobby, id);
    assert_eq!(round.round, 1);
    assert_eq!(round.matches.len(), 3);
    assert_eq!(round.matches.iter().filter(|m| m.bye.is_some()).count(), 1);
    assert_eq!(round.pending, 2);

    let games: Vec<u64> = round
        .matches
        .iter()
        .filter(|m| m.bye.is_none())
        .map(|m| m.match_id)
        .collect();

    let err = execute_command(
        &mut lobby,
        Command::NextRound(NextRoundCommand { tournament_id: id }),
    )
    .unwrap_err();
    assert!(matches!(err, ApiError::InvalidCommand(_)));

    for match_id in games {
        let response = execute_command(
            &mut lobby,
            Command::RecordResult(RecordResultCommand {
                tournament_id: id,
                match_id,
                outcome: Outcome::WHITE_WINS,
            }),
        )
        .unwrap();
        assert!(matches!(response, CommandResponse::TournamentState(_)));
    }
    assert!(tournament_view(&lobby, id).current_round_finished);

    let err = execute_command(
        &mut lobby,
        Command::RecordResult(RecordResultCommand {
            tournament_id: id,
            match_id: 999,
            outcome: Outcome::Draw,
        }),
    )
    .unwrap_err();
    assert_eq!(err, ApiError::MatchNotFound(999));

    match execute_command(
        &mut lobby,
        Command::NextRound(NextRoundCommand { tournament_id: id }),
    )
    .unwrap()
    {
        CommandResponse::RoundPaired(round) => assert_eq!(round.round, 2),
        other => panic!("unexpected response: {other:?}"),
    }
}

// ----------------------
// tests для queries.rs
// ----------------------

#[test]
fn standings_and_round_queries() {
    let (mut lobby, id) = lobby_with_players(4);
    start(&mut lobby, id);

    match execute_query(&lobby, Query::GetStandings { tournament_id: id }).unwrap() {
        QueryResponse::Standings(rows) => {
            assert_eq!(rows.len(), 4);
            let ranks: Vec<u32> = rows.iter().map(|r| r.rank).collect();
            assert_eq!(ranks, vec![1, 2, 3, 4]);
        }
        other => panic!("unexpected response: {other:?}"),
    }

    let current = execute_query(
        &lobby,
        Query::GetRound {
            tournament_id: id,
            round: None,
        },
    )
    .unwrap();
    let first = execute_query(
        &lobby,
        Query::GetRound {
            tournament_id: id,
            round: Some(1),
        },
    )
    .unwrap();
    assert_eq!(current, first);

    assert!(matches!(
        execute_query(
            &lobby,
            Query::GetRound {
                tournament_id: id,
                round: Some(5),
            },
        ),
        Err(ApiError::BadRequest(_))
    ));

    match execute_query(&lobby, Query::ListTournaments).unwrap() {
        QueryResponse::Tournaments(list) => {
            assert_eq!(list.len(), 1);
            assert_eq!(list[0].status, "Running");
        }
        other => panic!("unexpected response: {other:?}"),
    }
}

#[test]
fn round_query_before_start_is_invalid() {
    let (lobby, id) = lobby_with_players(3);

    assert!(matches!(
        execute_query(
            &lobby,
            Query::GetRound {
                tournament_id: id,
                round: None,
            },
        ),
        Err(ApiError::InvalidCommand(_))
    ));
}

// ----------------------
// tests для errors.rs и сериализации
// ----------------------

#[test]
fn errors_map_to_api_errors() {
    assert_eq!(
        ApiError::from(TournamentError::TournamentNotFound { tournament_id: 3 }),
        ApiError::TournamentNotFound(3)
    );
    assert!(matches!(
        ApiError::from(TournamentError::InvalidConfig("x".into())),
        ApiError::BadRequest(_)
    ));
    assert!(matches!(
        ApiError::from(TournamentError::Engine(EngineError::DuplicateParticipant(4))),
        ApiError::EngineError(_)
    ));
}

#[test]
fn commands_and_responses_round_trip_through_json() {
    let command = Command::RecordResult(RecordResultCommand {
        tournament_id: 1,
        match_id: 7,
        outcome: Outcome::Draw,
    });
    let json = serde_json::to_string(&command).unwrap();
    assert_eq!(serde_json::from_str::<Command>(&json).unwrap(), command);

    // affiliation можно не передавать.
    let register: Command = serde_json::from_str(
        r#"{"RegisterParticipant":{"tournament_id":1,"name":"Ann"}}"#,
    )
    .unwrap();
    assert_eq!(
        register,
        Command::RegisterParticipant(RegisterParticipantCommand {
            tournament_id: 1,
            name: "Ann".into(),
            affiliation: String::new(),
        })
    );

    let (mut lobby, id) = lobby_with_players(4);
    let round = start(&mut lobby, id);
    let json = serde_json::to_string(&round).unwrap();
    assert_eq!(serde_json::from_str::<RoundViewDto>(&json).unwrap(), round);

    let err = ApiError::TournamentNotFound(2);
    let json = serde_json::to_string(&err).unwrap();
    assert_eq!(serde_json::from_str::<ApiError>(&json).unwrap(), err);
}
