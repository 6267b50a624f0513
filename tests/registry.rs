//! Integration tests for reference-data administration: tournaments,
//! registrations, rosters, and the tournament delete cascade.

use chrono::NaiveDate;
use soccer_tournament_web::{
    approve_player, create_player, create_scheduled, create_team, create_tournament,
    create_venue, delete_tournament, register_team, transition_to_played, DecidedBy, ErrorKind,
    League, MatchKey, MatchOutcome, PlayStage, Player, ScheduledMatchFields, Team, TeamOutcome,
    Tournament, TournamentError, Venue, WinLose,
};

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn tournament(id: i32, name: &str) -> Tournament {
    Tournament {
        tr_id: id,
        tr_name: name.to_string(),
        start_date: date(2025, 9, 1),
        end_date: date(2025, 12, 1),
    }
}

fn player(id: i32, name: &str) -> Player {
    Player {
        player_id: id,
        name: name.to_string(),
        date_of_birth: date(2000, 1, 20),
        jersey_no: 9,
        position: "Forward".to_string(),
    }
}

fn seeded_league() -> League {
    let mut league = League::default();
    let refs = &mut league.refs;
    create_tournament(refs, tournament(10, "Campus Cup")).unwrap();
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
    league
}

#[test]
fn duplicate_tournament_conflicts() {
    let mut league = seeded_league();
    let dup = create_tournament(&mut league.refs, tournament(10, "Second Cup"));
    match dup {
        Err(e) => {
            assert_eq!(e, TournamentError::DuplicateTournament(10));
            assert_eq!(e.kind(), ErrorKind::Conflict);
        }
        Ok(_) => panic!("duplicate tournament must be rejected"),
    }
}

#[test]
fn register_team_requires_entities_and_rejects_duplicates() {
    let mut league = seeded_league();
    let refs = &mut league.refs;

    assert!(matches!(
        register_team(refs, 10, 999, "A".to_string()),
        Err(TournamentError::TeamNotFound(999))
    ));
    assert!(matches!(
        register_team(refs, 99, 101, "A".to_string()),
        Err(TournamentError::TournamentNotFound(99))
    ));

    let entry = register_team(refs, 10, 101, "A".to_string()).unwrap();
    assert_eq!(entry.team_group, "A");
    assert!(refs.team_registered(101, 10));

    assert!(matches!(
        register_team(refs, 10, 101, "B".to_string()),
        Err(TournamentError::TeamAlreadyRegistered { team_id: 101, tr_id: 10 })
    ));
}

#[test]
fn approve_player_requires_registration_and_rejects_duplicates() {
    let mut league = seeded_league();
    let refs = &mut league.refs;
    create_player(refs, player(1001, "Sami")).unwrap();

    // Team 102 exists but is not registered yet.
    assert!(matches!(
        approve_player(refs, 10, 102, 1001),
        Err(TournamentError::TeamNotRegistered(102))
    ));

    register_team(refs, 10, 101, "A".to_string()).unwrap();
    approve_player(refs, 10, 101, 1001).unwrap();
    assert!(refs.player_on_team(1001, 101, 10));

    assert!(matches!(
        approve_player(refs, 10, 101, 1001),
        Err(TournamentError::PlayerAlreadyOnTeam { player_id: 1001, team_id: 101 })
    ));
    assert!(matches!(
        approve_player(refs, 10, 101, 4242),
        Err(TournamentError::PlayerNotFound(4242))
    ));
}

#[test]
fn set_captain_moves_the_flag() {
    let mut league = seeded_league();
    let refs = &mut league.refs;
    register_team(refs, 10, 101, "A".to_string()).unwrap();
    create_player(refs, player(1001, "Sami")).unwrap();
    create_player(refs, player(1002, "Yousef")).unwrap();
    approve_player(refs, 10, 101, 1001).unwrap();
    approve_player(refs, 10, 101, 1002).unwrap();

    let spot = refs.set_captain(10, 101, 1001).unwrap();
    assert!(spot.is_captain);

    // Handing the armband over clears the previous captain.
    refs.set_captain(10, 101, 1002).unwrap();
    let captains: Vec<i32> = refs
        .roster_of(10, 101)
        .filter(|s| s.is_captain)
        .map(|s| s.player_id)
        .collect();
    assert_eq!(captains, vec![1002]);

    assert!(matches!(
        refs.set_captain(10, 101, 4242),
        Err(TournamentError::PlayerNotOnTeam(4242))
    ));
}

#[test]
fn delete_tournament_cascades_to_matches_and_registrations() {
    let mut league = seeded_league();
    {
        let refs = &mut league.refs;
        register_team(refs, 10, 101, "A".to_string()).unwrap();
        register_team(refs, 10, 102, "A".to_string()).unwrap();
        create_player(refs, player(1001, "Sami")).unwrap();
        create_player(refs, player(1010, "Khalid")).unwrap();
        create_player(refs, player(1020, "Omar")).unwrap();
        approve_player(refs, 10, 101, 1001).unwrap();
        approve_player(refs, 10, 101, 1010).unwrap();
        approve_player(refs, 10, 102, 1020).unwrap();
    }

    let fields = ScheduledMatchFields {
        play_date: date(2025, 10, 4),
        play_stage: PlayStage::Group,
        venue_id: 5,
        team_id1: 101,
        team_id2: 102,
    };
    create_scheduled(&league.refs, &mut league.matches, 10, 1, fields.clone()).unwrap();
    let mut second = fields;
    second.play_date = date(2025, 10, 11);
    create_scheduled(&league.refs, &mut league.matches, 10, 2, second).unwrap();

    // Play match 1 so the cascade also covers played and detail rows.
    let outcome = MatchOutcome {
        decided_by: DecidedBy::NormalTime,
        goal_score: "2-1".parse().unwrap(),
        venue_id: 5,
        audience: 400,
        player_of_match: 1001,
        stop1_sec: None,
        stop2_sec: None,
        team1: TeamOutcome {
            win_lose: WinLose::Win,
            penalty_score: None,
            player_gk: 1010,
        },
        team2: TeamOutcome {
            win_lose: WinLose::Lose,
            penalty_score: None,
            player_gk: 1020,
        },
    };
    transition_to_played(&mut league.matches, 10, 1, &outcome).unwrap();

    let deleted = delete_tournament(&mut league.refs, &mut league.matches, 10).unwrap();
    assert_eq!(deleted.tr_id, 10);

    assert!(!league.refs.tournament_exists(10));
    assert!(!league.refs.team_registered(101, 10));
    assert!(!league.refs.player_on_team(1001, 101, 10));
    // Teams, players and venues are standalone entities and survive.
    assert!(league.refs.team_exists(101));
    assert!(league.refs.player_exists(1001));

    for match_no in [1, 2] {
        let key = MatchKey { tr_id: 10, match_no };
        assert!(league.matches.scheduled(&key).is_none());
        assert!(league.matches.played(&key).is_none());
        assert!(league.matches.details_of(&key).is_empty());
    }

    let again = delete_tournament(&mut league.refs, &mut league.matches, 10);
    assert!(matches!(again, Err(TournamentError::TournamentNotFound(10))));
}
