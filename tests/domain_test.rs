// tests/domain_test.rs

use swiss_engine::domain::{
    Color, ColorTally, DomainError, Match, MatchSides, Outcome, Participant, Points, Round,
    Tournament, TournamentConfig, TournamentError, TournamentStatus,
};

//
// TEST 1 – очки в полуочках и их отображение
//
#[test]
fn points_are_counted_in_halves_and_displayed_like_a_crosstable() {
    assert_eq!(Points::ONE, Points::HALF + Points::HALF);
    assert_eq!(Points::whole(3), Points::from_halves(6));
    assert_eq!(Points::from_halves(5).to_string(), "2.5");
    assert_eq!(Points::whole(3).to_string(), "3");
    assert_eq!(Points::ZERO.to_string(), "0");
    assert_eq!(Points::from_halves(7).as_f64(), 3.5);

    let total: Points = [Points::ONE, Points::HALF, Points::ZERO].into_iter().sum();
    assert_eq!(total, Points::from_halves(3));
}

//
// TEST 2 – нотация результатов
//
#[test]
fn outcome_notation_parses_and_prints() {
    assert_eq!("1-0".parse::<Outcome>().unwrap(), Outcome::WHITE_WINS);
    assert_eq!("0-1".parse::<Outcome>().unwrap(), Outcome::BLACK_WINS);
    assert_eq!("1/2-1/2".parse::<Outcome>().unwrap(), Outcome::Draw);
    assert_eq!("½-½".parse::<Outcome>().unwrap(), Outcome::Draw);
    assert_eq!("*".parse::<Outcome>().unwrap(), Outcome::AwaitingResult);
    assert_eq!("+".parse::<Outcome>().unwrap(), Outcome::ByeWin);

    assert_eq!(Outcome::Draw.to_string(), "1/2-1/2");
    assert_eq!(Outcome::BLACK_WINS.to_string(), "0-1");

    assert!(matches!(
        "2-0".parse::<Outcome>(),
        Err(DomainError::UnknownOutcome(s)) if s == "2-0"
    ));
}

//
// TEST 3 – цвета и подсчёт
//
#[test]
fn color_tally_counts_history() {
    let tally = ColorTally::from_history(&[Color::White, Color::White, Color::Black]);
    assert_eq!(tally, ColorTally { white: 2, black: 1 });
    assert_eq!(tally.imbalance(), 1);

    assert_eq!(Color::White.opposite(), Color::Black);
    assert_eq!("b".parse::<Color>().unwrap(), Color::Black);
    assert!("x".parse::<Color>().is_err());
}

//
// TEST 4 – сборка партии из плоской формы
//
#[test]
fn match_from_sides_rejects_empty_and_self_pairing() {
    assert_eq!(
        Match::from_sides(1, 1, None, None, Outcome::AwaitingResult),
        Err(DomainError::EmptyMatch { match_id: 1 })
    );

    assert_eq!(
        Match::from_sides(2, 1, Some(5), Some(5), Outcome::AwaitingResult),
        Err(DomainError::SelfPairing {
            match_id: 2,
            participant: 5
        })
    );

    assert_eq!(
        Match::from_sides(3, 1, Some(1), Some(2), Outcome::ByeWin),
        Err(DomainError::ByeOutcomeOnPairedMatch { match_id: 3 })
    );
}

#[test]
fn legacy_pending_bye_is_normalized_to_bye_win() {
    let m = Match::from_sides(4, 2, None, Some(9), Outcome::AwaitingResult).unwrap();

    assert_eq!(m.sides, MatchSides::Bye { participant: 9 });
    assert_eq!(m.outcome, Outcome::ByeWin);
    assert!(m.is_resolved());
    assert_eq!(m.points_for(9), Some(Points::ONE));
}

#[test]
fn bye_counts_as_resolved_whatever_its_stored_outcome() {
    let mut stale = Match::bye(5, 1, 3);
    stale.outcome = Outcome::AwaitingResult;

    assert!(stale.is_resolved());
    let round = Round::new(1, vec![stale.clone()]);
    assert!(round.is_complete());
    assert_eq!(round.pending_count(), 0);

    stale.normalize_bye();
    assert_eq!(stale.outcome, Outcome::ByeWin);

    let mut game = Match::paired(6, 1, 1, 2);
    game.normalize_bye();
    assert_eq!(game.outcome, Outcome::AwaitingResult);
}

//
// TEST 5 – очки из партии
//
#[test]
fn match_points_follow_outcome_and_color() {
    let mut m = Match::paired(1, 1, 10, 20);
    assert_eq!(m.points_for(10), Some(Points::ZERO));
    assert_eq!(m.points_for(30), None);
    assert!(!m.is_resolved());

    m.set_outcome(Outcome::BLACK_WINS).unwrap();
    assert_eq!(m.points_for(10), Some(Points::ZERO));
    assert_eq!(m.points_for(20), Some(Points::ONE));

    m.set_outcome(Outcome::Draw).unwrap();
    assert_eq!(m.points_for(10), Some(Points::HALF));
    assert_eq!(m.points_for(20), Some(Points::HALF));

    assert_eq!(m.opponent_of(10), Some(20));
    assert_eq!(m.color_of(20), Some(Color::Black));
}

#[test]
fn bye_result_cannot_be_changed() {
    let mut bye = Match::bye(7, 1, 3);
    assert_eq!(
        bye.set_outcome(Outcome::WHITE_WINS),
        Err(DomainError::ResultOnBye { match_id: 7 })
    );

    let mut game = Match::paired(8, 1, 1, 2);
    assert_eq!(
        game.set_outcome(Outcome::ByeWin),
        Err(DomainError::ByeOutcomeOnPairedMatch { match_id: 8 })
    );
}

//
// TEST 6 – тур
//
#[test]
fn round_tracks_pending_results_and_bye() {
    let mut round = Round::new(1, vec![Match::bye(1, 1, 5), Match::paired(2, 1, 1, 2)]);

    assert_eq!(round.bye_recipient(), Some(5));
    assert_eq!(round.pending_count(), 1);
    assert!(!round.is_complete());

    round
        .find_match_mut(2)
        .unwrap()
        .set_outcome(Outcome::WHITE_WINS)
        .unwrap();

    assert!(round.is_complete());
    let mut ids = round.participant_ids();
    ids.sort();
    assert_eq!(ids, vec![1, 2, 5]);
}

//
// TEST 7 – конфиг и регистрация
//
#[test]
fn tournament_config_validation() {
    assert!(TournamentConfig::named("Open").validate_full().is_ok());

    let blank = TournamentConfig::named("  ");
    assert!(matches!(
        blank.validate_full(),
        Err(TournamentError::InvalidConfig(_))
    ));

    let mut too_small = TournamentConfig::named("Open");
    too_small.min_participants = 1;
    assert!(too_small.validate_full().is_err());

    let mut inverted = TournamentConfig::named("Open");
    inverted.min_participants = 8;
    inverted.max_participants = 4;
    assert!(inverted.validate_full().is_err());

    let mut zero_rounds = TournamentConfig::named("Open");
    zero_rounds.rounds_override = Some(0);
    assert!(zero_rounds.validate_full().is_err());
}

#[test]
fn registration_rules() {
    let mut config = TournamentConfig::named("Club night");
    config.max_participants = 2;
    let mut t = Tournament::new(1, config).unwrap();

    t.register_participant(Participant::new(1, "Ann", "A")).unwrap();

    assert_eq!(
        t.register_participant(Participant::new(1, "Ann again", "A")),
        Err(TournamentError::AlreadyRegistered {
            participant_id: 1,
            tournament_id: 1
        })
    );
    assert!(matches!(
        t.register_participant(Participant::new(2, " ", "")),
        Err(TournamentError::InvalidParticipant(_))
    ));

    t.register_participant(Participant::new(2, "Bob", "B")).unwrap();
    assert_eq!(
        t.register_participant(Participant::new(3, "Cid", "C")),
        Err(TournamentError::TournamentFull { tournament_id: 1 })
    );

    assert!(t.can_start());
    assert_eq!(t.status, TournamentStatus::Registering);
    assert!(t.winner().is_none());

    let removed = t.unregister_participant(1).unwrap();
    assert_eq!(removed.name, "Ann");
    assert_eq!(
        t.unregister_participant(1),
        Err(TournamentError::NotRegistered {
            participant_id: 1,
            tournament_id: 1
        })
    );
}

#[test]
fn results_cannot_be_recorded_before_start() {
    let mut t = Tournament::new(1, TournamentConfig::named("Open")).unwrap();
    assert_eq!(
        t.record_result(1, Outcome::Draw),
        Err(TournamentError::InvalidStatus {
            expected: TournamentStatus::Running,
            found: TournamentStatus::Registering
        })
    );
}
