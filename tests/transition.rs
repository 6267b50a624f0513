//! Integration tests for the match lifecycle transition: result derivation,
//! the all-or-nothing write sequence, and its failure modes.

use chrono::NaiveDate;
use soccer_tournament_web::{
    approve_player, create_player, create_scheduled, create_team, create_tournament,
    create_venue, register_team, transition_to_played, DecidedBy, ErrorKind, GoalScore, League,
    MatchKey, MatchOutcome, MatchResult, PlayStage, PlayedMatch, Player, ScheduledMatchFields,
    Team, TeamOutcome, Tournament, TournamentError, Venue, WinLose,
};

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn player(id: i32, name: &str, jersey: u32, position: &str) -> Player {
    Player {
        player_id: id,
        name: name.to_string(),
        date_of_birth: date(2002, 3, 15),
        jersey_no: jersey,
        position: position.to_string(),
    }
}

/// Tournament 10 with teams 101/102 registered, venue 5, a few rostered
/// players, and fixture 1 scheduled between the two teams.
fn league_with_fixture() -> League {
    let mut league = League::default();
    let refs = &mut league.refs;

    create_tournament(
        refs,
        Tournament {
            tr_id: 10,
            tr_name: "Campus Cup".to_string(),
            start_date: date(2025, 9, 1),
            end_date: date(2025, 12, 1),
        },
    )
    .unwrap();
    create_team(
        refs,
        Team {
            team_id: 101,
            team_name: "Falcons".to_string(),
        },
    )
    .unwrap();
    create_team(
        refs,
        Team {
            team_id: 102,
            team_name: "Eagles".to_string(),
        },
    )
    .unwrap();
    create_venue(
        refs,
        Venue {
            venue_id: 5,
            venue_name: "Main Stadium".to_string(),
            capacity: 5000,
        },
    )
    .unwrap();
    register_team(refs, 10, 101, "A".to_string()).unwrap();
    register_team(refs, 10, 102, "A".to_string()).unwrap();

    create_player(refs, player(1001, "Sami", 10, "Forward")).unwrap();
    create_player(refs, player(1010, "Khalid", 1, "Goalkeeper")).unwrap();
    create_player(refs, player(1020, "Omar", 1, "Goalkeeper")).unwrap();
    approve_player(refs, 10, 101, 1001).unwrap();
    approve_player(refs, 10, 101, 1010).unwrap();
    approve_player(refs, 10, 102, 1020).unwrap();

    create_scheduled(
        &league.refs,
        &mut league.matches,
        10,
        1,
        ScheduledMatchFields {
            play_date: date(2025, 10, 4),
            play_stage: PlayStage::Group,
            venue_id: 5,
            team_id1: 101,
            team_id2: 102,
        },
    )
    .unwrap();
    league
}

fn outcome(score: &str, team1: WinLose, team2: WinLose) -> MatchOutcome {
    MatchOutcome {
        decided_by: DecidedBy::NormalTime,
        goal_score: score.parse().unwrap(),
        venue_id: 5,
        audience: 500,
        player_of_match: 1001,
        stop1_sec: Some(120),
        stop2_sec: Some(240),
        team1: TeamOutcome {
            win_lose: team1,
            penalty_score: None,
            player_gk: 1010,
        },
        team2: TeamOutcome {
            win_lose: team2,
            penalty_score: None,
            player_gk: 1020,
        },
    }
}

#[test]
fn result_derived_from_goal_score() {
    let cases = [
        (3, 1, MatchResult::Team1Won),
        (1, 0, MatchResult::Team1Won),
        (0, 2, MatchResult::Team2Won),
        (4, 5, MatchResult::Team2Won),
        (0, 0, MatchResult::Draw),
        (2, 2, MatchResult::Draw),
    ];
    for (a, b, expected) in cases {
        assert_eq!(GoalScore::new(a, b).result(), expected, "{a}-{b}");
        let parsed: GoalScore = format!("{a}-{b}").parse().unwrap();
        assert_eq!(parsed.result(), expected);
    }
}

#[test]
fn goal_score_rejects_malformed_strings() {
    for bad in ["", "31", "a-b", "3-", "-2", "3:1", "1.5-2"] {
        let parsed = bad.parse::<GoalScore>();
        assert!(
            matches!(parsed, Err(TournamentError::BadGoalScore(_))),
            "{bad:?} should not parse"
        );
    }
    // Round trip keeps the wire form.
    let score: GoalScore = "3-1".parse().unwrap();
    assert_eq!(score.to_string(), "3-1");
}

#[test]
fn transition_records_result_and_details() {
    let mut league = league_with_fixture();
    let key = MatchKey {
        tr_id: 10,
        match_no: 1,
    };

    let played = transition_to_played(
        &mut league.matches,
        10,
        1,
        &outcome("3-1", WinLose::Win, WinLose::Lose),
    )
    .unwrap();

    assert_eq!(played.results, MatchResult::Team1Won);
    assert_eq!(played.goal_score.to_string(), "3-1");
    // Stage, date and teams are copied from the fixture.
    assert_eq!(played.play_stage, PlayStage::Group);
    assert_eq!(played.play_date, date(2025, 10, 4));
    assert_eq!(played.team_id1, 101);
    assert_eq!(played.team_id2, 102);
    assert_eq!(played.audience, 500);
    assert_eq!(played.player_of_match, 1001);
    assert_eq!(played.stop1_sec, Some(120));

    // Exactly one played row, exactly two detail rows, no fixture left.
    assert_eq!(league.matches.played(&key), Some(&played));
    assert!(league.matches.scheduled(&key).is_none());
    let details = league.matches.details_of(&key);
    assert_eq!(details.len(), 2);

    let home = league.matches.detail(&key, 101).unwrap();
    assert_eq!(home.goal_score, 3);
    assert_eq!(home.win_lose, WinLose::Win);
    assert_eq!(home.player_gk, 1010);
    assert_eq!(home.decided_by, DecidedBy::NormalTime);
    assert_eq!(home.penalty_score, None);

    let away = league.matches.detail(&key, 102).unwrap();
    assert_eq!(away.goal_score, 1);
    assert_eq!(away.win_lose, WinLose::Lose);
    assert_eq!(away.player_gk, 1020);
}

#[test]
fn draw_outcome_keeps_supplied_win_lose_pair() {
    let mut league = league_with_fixture();
    let key = MatchKey {
        tr_id: 10,
        match_no: 1,
    };

    let played = transition_to_played(
        &mut league.matches,
        10,
        1,
        &outcome("2-2", WinLose::Draw, WinLose::Draw),
    )
    .unwrap();

    assert_eq!(played.results, MatchResult::Draw);
    assert_eq!(league.matches.detail(&key, 101).unwrap().win_lose, WinLose::Draw);
    assert_eq!(league.matches.detail(&key, 102).unwrap().win_lose, WinLose::Draw);
}

#[test]
fn transition_is_one_way() {
    let mut league = league_with_fixture();
    transition_to_played(
        &mut league.matches,
        10,
        1,
        &outcome("1-0", WinLose::Win, WinLose::Lose),
    )
    .unwrap();

    // The fixture is gone, so a repeat attempt reports NotFound.
    let again = transition_to_played(
        &mut league.matches,
        10,
        1,
        &outcome("1-0", WinLose::Win, WinLose::Lose),
    );
    match again {
        Err(e) => {
            assert_eq!(e, TournamentError::FixtureNotFound { tr_id: 10, match_no: 1 });
            assert_eq!(e.kind(), ErrorKind::NotFound);
        }
        Ok(_) => panic!("second transition must fail"),
    }
}

#[test]
fn missing_fixture_fails_without_writes() {
    let mut league = league_with_fixture();
    let result = transition_to_played(
        &mut league.matches,
        10,
        99,
        &outcome("1-0", WinLose::Win, WinLose::Lose),
    );
    assert!(matches!(
        result,
        Err(TournamentError::FixtureNotFound { tr_id: 10, match_no: 99 })
    ));
    let key = MatchKey {
        tr_id: 10,
        match_no: 99,
    };
    assert!(league.matches.played(&key).is_none());
    assert!(league.matches.details_of(&key).is_empty());
}

#[test]
fn failed_transaction_rolls_back_every_write() {
    let mut league = league_with_fixture();
    let key = MatchKey {
        tr_id: 10,
        match_no: 1,
    };
    let fixture = league.matches.scheduled(&key).cloned().unwrap();

    // Inject a failure after the played-row insert, before the fixture
    // delete, the way a dropped connection would land mid-sequence.
    let row = PlayedMatch {
        match_no: 1,
        tr_id: 10,
        play_stage: fixture.play_stage,
        play_date: fixture.play_date,
        team_id1: fixture.team_id1,
        team_id2: fixture.team_id2,
        results: MatchResult::Team1Won,
        decided_by: DecidedBy::NormalTime,
        goal_score: GoalScore::new(3, 1),
        venue_id: 5,
        audience: 500,
        player_of_match: 1001,
        stop1_sec: None,
        stop2_sec: None,
    };
    let result: Result<(), TournamentError> = league.matches.transaction(|tx| {
        tx.insert_played(row.clone())?;
        Err(TournamentError::TransactionFailed("connection lost".to_string()))
    });

    let err = result.unwrap_err();
    assert_eq!(err.kind(), ErrorKind::TransactionFailed);
    // The fixture is untouched and no played or detail rows survived.
    assert_eq!(league.matches.scheduled(&key), Some(&fixture));
    assert!(league.matches.played(&key).is_none());
    assert!(league.matches.details_of(&key).is_empty());

    // The operation is safely retryable after the rollback.
    transition_to_played(
        &mut league.matches,
        10,
        1,
        &outcome("3-1", WinLose::Win, WinLose::Lose),
    )
    .unwrap();
    assert!(league.matches.played(&key).is_some());
}
