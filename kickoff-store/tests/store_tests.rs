//! Integration tests for the store and repositories

use chrono::NaiveDate;
use kickoff_store::Store;
use kickoff_store::db::models::{
    Division, EmergencyContact, PlayerCreate, PlayerStatsUpdate, RegistrationStatus, TeamCreate,
    TeamRegistrationCreate, TeamUpdate, User, UserUpdate,
};
use kickoff_store::db::repository::{RepoError, player, registration, team, user};
use kickoff_store::db::seed;

fn test_store() -> Store {
    Store::open_in_memory().unwrap()
}

fn red_dragons() -> TeamCreate {
    TeamCreate {
        name: "Red Dragons FC".into(),
        played: 5,
        won: 4,
        drawn: 1,
        lost: 0,
        goals_for: 15,
        goals_against: 5,
        division: Division::One,
        location: "Willen Lake, Kick Off Sports Centre".into(),
        game_day: "Monday".into(),
        crest: None,
        captain_id: None,
    }
}

/// Test fixture account; password hash is irrelevant for store tests
fn test_user(id: &str, email: &str, full_name: &str) -> User {
    User {
        id: id.into(),
        email: email.into(),
        password_hash: "$argon2id$test".into(),
        full_name: full_name.into(),
        date_of_birth: NaiveDate::from_ymd_opt(1995, 3, 2).unwrap(),
        is_admin: false,
        is_player: true,
        team_id: None,
        is_captain: None,
        emergency_contact: EmergencyContact {
            name: "Contact".into(),
            relationship: "parent".into(),
            phone: "07700 900000".into(),
            email: None,
        },
    }
}

#[test]
fn team_insert_derives_fields_and_roundtrips() {
    let store = test_store();

    let created = team::create(&store, red_dragons()).unwrap();
    assert_eq!(created.goal_difference, 10);
    assert_eq!(created.points, 13);

    let fetched = team::find_by_id(&store, &created.id).unwrap().unwrap();
    assert_eq!(fetched, created);
}

#[test]
fn team_invariant_holds_after_every_edit() {
    let store = test_store();
    let created = team::create(&store, red_dragons()).unwrap();

    let edits = [
        TeamUpdate {
            won: Some(5),
            played: Some(6),
            ..Default::default()
        },
        TeamUpdate {
            goals_for: Some(20),
            goals_against: Some(11),
            ..Default::default()
        },
        TeamUpdate {
            name: Some("Red Dragons".into()),
            drawn: Some(3),
            ..Default::default()
        },
    ];

    for edit in edits {
        let updated = team::update(&store, &created.id, edit).unwrap();
        assert_eq!(
            updated.goal_difference,
            updated.goals_for as i32 - updated.goals_against as i32
        );
        assert_eq!(updated.points, 3 * updated.won + updated.drawn);

        let stored = team::find_by_id(&store, &created.id).unwrap().unwrap();
        assert_eq!(stored, updated);
    }
}

#[test]
fn deleted_team_disappears_from_find_all() {
    let store = test_store();
    let created = team::create(&store, red_dragons()).unwrap();
    assert_eq!(team::find_all(&store).unwrap().len(), 1);

    assert!(team::delete(&store, &created.id).unwrap());
    assert!(team::find_all(&store).unwrap().is_empty());
    assert!(!team::delete(&store, &created.id).unwrap());
}

#[test]
fn team_update_of_missing_id_is_not_found() {
    let store = test_store();
    let result = team::update(&store, "nope", TeamUpdate::default());
    assert!(matches!(result, Err(RepoError::NotFound(_))));
}

#[test]
fn find_all_returns_league_order() {
    let store = test_store();
    team::create(&store, red_dragons()).unwrap();
    team::create(
        &store,
        TeamCreate {
            name: "Blue Lightning".into(),
            played: 5,
            won: 3,
            drawn: 1,
            lost: 1,
            goals_for: 12,
            goals_against: 7,
            division: Division::One,
            location: "Willen Lake, Kick Off Sports Centre".into(),
            game_day: "Monday".into(),
            crest: None,
            captain_id: None,
        },
    )
    .unwrap();
    team::create(
        &store,
        TeamCreate {
            name: "Newport Rovers".into(),
            played: 0,
            won: 0,
            drawn: 0,
            lost: 0,
            goals_for: 0,
            goals_against: 0,
            division: Division::Two,
            location: "Newport Pagnell Town Football Club".into(),
            game_day: "Wednesday".into(),
            crest: None,
            captain_id: None,
        },
    )
    .unwrap();

    let table = team::find_all(&store).unwrap();
    let names: Vec<_> = table.iter().map(|t| t.name.as_str()).collect();
    assert_eq!(names, ["Red Dragons FC", "Blue Lightning", "Newport Rovers"]);

    let division_two = team::find_by_division(&store, Division::Two).unwrap();
    assert_eq!(division_two.len(), 1);
    assert_eq!(division_two[0].name, "Newport Rovers");
}

#[test]
fn store_persists_across_reopen() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("kickoff.redb");

    let team_id = {
        let store = Store::open(&path).unwrap();
        let created = team::create(&store, red_dragons()).unwrap();
        store.close();
        created.id
    };

    let store = Store::open(&path).unwrap();
    let fetched = team::find_by_id(&store, &team_id).unwrap().unwrap();
    assert_eq!(fetched.name, "Red Dragons FC");
    assert_eq!(fetched.points, 13);
}

#[test]
fn roster_join_resolves_names_best_effort() {
    let store = test_store();
    let team = team::create(&store, red_dragons()).unwrap();

    user::create(&store, test_user("u1", "sam@example.com", "Sam Carter")).unwrap();
    user::update(
        &store,
        "u1",
        UserUpdate {
            team_id: Some(team.id.clone()),
            is_captain: Some(true),
            ..Default::default()
        },
    )
    .unwrap();

    let rostered = player::create(
        &store,
        PlayerCreate {
            user_id: "u1".into(),
            team_id: team.id.clone(),
        },
    )
    .unwrap();
    assert_eq!(rostered.goals, 0);

    // Dangling reference: entry whose user record does not exist
    player::create(
        &store,
        PlayerCreate {
            user_id: "ghost".into(),
            team_id: team.id.clone(),
        },
    )
    .unwrap();

    let mut roster = player::find_by_team_with_names(&store, &team.id).unwrap();
    roster.sort_by(|a, b| a.player.user_id.cmp(&b.player.user_id));
    assert_eq!(roster.len(), 2);
    assert_eq!(roster[0].name, None);
    assert_eq!(roster[1].name.as_deref(), Some("Sam Carter"));

    // Attaching the same user twice is rejected
    let duplicate = player::create(
        &store,
        PlayerCreate {
            user_id: "u1".into(),
            team_id: team.id.clone(),
        },
    );
    assert!(matches!(duplicate, Err(RepoError::Duplicate(_))));
}

#[test]
fn player_stat_edits_apply() {
    let store = test_store();
    let team = team::create(&store, red_dragons()).unwrap();
    let rostered = player::create(
        &store,
        PlayerCreate {
            user_id: "u1".into(),
            team_id: team.id.clone(),
        },
    )
    .unwrap();

    let updated = player::update_stats(
        &store,
        &rostered.id,
        PlayerStatsUpdate {
            goals: Some(7),
            assists: Some(3),
            games_played: Some(5),
            ..Default::default()
        },
    )
    .unwrap();
    assert_eq!(updated.goals, 7);
    assert_eq!(updated.yellow_cards, 0);

    assert!(player::delete(&store, &rostered.id).unwrap());
    assert!(player::find_by_team(&store, &team.id).unwrap().is_empty());
}

#[test]
fn find_team_of_user_follows_reference() {
    let store = test_store();
    let team = team::create(&store, red_dragons()).unwrap();
    user::create(&store, test_user("u1", "sam@example.com", "Sam Carter")).unwrap();

    assert!(user::find_team_of_user(&store, "u1").unwrap().is_none());

    user::update(
        &store,
        "u1",
        UserUpdate {
            team_id: Some(team.id.clone()),
            ..Default::default()
        },
    )
    .unwrap();

    let found = user::find_team_of_user(&store, "u1").unwrap().unwrap();
    assert_eq!(found.id, team.id);

    // Unknown user resolves to nothing rather than an error
    assert!(user::find_team_of_user(&store, "ghost").unwrap().is_none());
}

#[test]
fn duplicate_email_rejected_case_insensitively() {
    let store = test_store();
    user::create(&store, test_user("u1", "sam@example.com", "Sam Carter")).unwrap();

    let duplicate = user::create(&store, test_user("u2", "Sam@Example.com", "Other Sam"));
    assert!(matches!(duplicate, Err(RepoError::Duplicate(_))));

    let found = user::find_by_email(&store, "SAM@EXAMPLE.COM").unwrap().unwrap();
    assert_eq!(found.id, "u1");
}

#[test]
fn registration_inbox_flow() {
    let store = test_store();

    let submitted = registration::submit_team(
        &store,
        TeamRegistrationCreate {
            team_name: "Green Machines".into(),
            captain_name: "Jo Taylor".into(),
            email: "jo@example.com".into(),
            phone: "07700 900123".into(),
            location: "Willen Lake, Kick Off Sports Centre".into(),
            game_day: "Wednesday".into(),
            players: vec!["Ash".into(), "".into(), "Robin".into()],
        },
    )
    .unwrap();
    assert_eq!(submitted.status, RegistrationStatus::Pending);
    assert_eq!(submitted.players, vec!["Ash".to_string(), "Robin".to_string()]);

    let inbox = registration::find_all_team(&store).unwrap();
    assert_eq!(inbox.len(), 1);

    let approved =
        registration::set_team_status(&store, &submitted.id, RegistrationStatus::Approved).unwrap();
    assert_eq!(approved.status, RegistrationStatus::Approved);

    assert!(registration::delete_team(&store, &submitted.id).unwrap());
    assert!(registration::find_all_team(&store).unwrap().is_empty());
}

#[test]
fn registration_requires_contact_details() {
    let store = test_store();
    let missing_email = registration::submit_team(
        &store,
        TeamRegistrationCreate {
            team_name: "Green Machines".into(),
            captain_name: "Jo Taylor".into(),
            email: "not-an-email".into(),
            phone: "07700 900123".into(),
            location: "Willen Lake".into(),
            game_day: "Wednesday".into(),
            players: vec![],
        },
    );
    assert!(matches!(missing_email, Err(RepoError::Validation(_))));
    assert!(registration::find_all_team(&store).unwrap().is_empty());
}

#[test]
fn seeding_runs_once() {
    let store = test_store();

    assert!(seed::ensure_defaults(&store, "admin@example.com", "seed-password-1").unwrap());
    assert!(!seed::ensure_defaults(&store, "admin@example.com", "seed-password-1").unwrap());

    let table = team::find_all(&store).unwrap();
    let names: Vec<_> = table.iter().map(|t| t.name.as_str()).collect();
    assert_eq!(names, ["Red Dragons FC", "Blue Lightning"]);

    let admin = user::find_by_email(&store, "admin@example.com").unwrap().unwrap();
    assert!(admin.is_admin);
}
