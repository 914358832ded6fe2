//! Integration tests for the record store and its JSON snapshot.

use tennis_tournament_web::{
    store::{file, MAX_SCORE},
    Database, EntityKind, NewMatch, NewPlayer, NewTournament, StoreError,
};
use uuid::Uuid;

fn new_player(first: &str, last: &str, ranking: u32) -> NewPlayer {
    NewPlayer {
        first_name: first.to_string(),
        last_name: last.to_string(),
        location: "Club".to_string(),
        ranking,
    }
}

fn new_tournament(db: &mut Database, name: &str) -> Uuid {
    db.add_tournament(NewTournament {
        name: name.to_string(),
        is_group_based: true,
    })
    .unwrap()
    .id
}

fn new_match(tournament_id: Uuid, p1: Uuid, p2: Uuid) -> NewMatch {
    NewMatch {
        tournament_id,
        player1_id: p1,
        player2_id: p2,
        score1: 2,
        score2: 1,
        location: "Court 1".to_string(),
        date: None,
        group_id: None,
    }
}

#[test]
fn add_player_trims_and_rejects_empty_fields() {
    let mut db = Database::new();
    let p = db.add_player(new_player("  Serena ", " Williams", 1)).unwrap();
    assert_eq!(p.first_name, "Serena");
    assert_eq!(p.last_name, "Williams");
    assert_eq!(db.players.len(), 1);

    assert!(matches!(
        db.add_player(new_player("   ", "X", 1)),
        Err(StoreError::EmptyField("firstName"))
    ));
    assert_eq!(db.players.len(), 1);
}

#[test]
fn remove_player_keeps_matches_and_leaves_groups() {
    let mut db = Database::new();
    let a = db.add_player(new_player("A", "A", 1)).unwrap().id;
    let b = db.add_player(new_player("B", "B", 2)).unwrap().id;
    let t = new_tournament(&mut db, "Open");
    let g = db.add_group(t, "Group A", 5).unwrap().id;
    db.set_group_players(g, &[a, b]).unwrap();
    db.add_match(new_match(t, a, b)).unwrap();

    db.remove_player(a).unwrap();
    assert_eq!(db.players.len(), 1);
    assert_eq!(db.matches.len(), 1);
    assert_eq!(db.group(g).unwrap().player_ids, vec![b]);

    assert!(matches!(
        db.remove_player(a),
        Err(StoreError::NotFound {
            kind: EntityKind::Player,
            ..
        })
    ));
}

#[test]
fn groups_are_capped_per_tournament() {
    let mut db = Database::new();
    let t = new_tournament(&mut db, "Open");
    for i in 0..5 {
        db.add_group(t, &format!("G{i}"), 5).unwrap();
    }
    assert!(matches!(
        db.add_group(t, "G5", 5),
        Err(StoreError::TooManyGroups { max: 5 })
    ));
    let groups = db.tournament_groups(t).unwrap();
    let names: Vec<&str> = groups.iter().map(|g| g.name.as_str()).collect();
    assert_eq!(names, vec!["G0", "G1", "G2", "G3", "G4"]);

    assert!(matches!(
        db.add_group(Uuid::new_v4(), "X", 5),
        Err(StoreError::NotFound {
            kind: EntityKind::Tournament,
            ..
        })
    ));
}

#[test]
fn set_group_players_validates_and_dedupes() {
    let mut db = Database::new();
    let a = db.add_player(new_player("A", "A", 1)).unwrap().id;
    let b = db.add_player(new_player("B", "B", 2)).unwrap().id;
    let t = new_tournament(&mut db, "Open");
    let g = db.add_group(t, "Group A", 5).unwrap().id;

    let group = db.set_group_players(g, &[b, a, b]).unwrap();
    assert_eq!(group.player_ids, vec![b, a]);

    let ghost = Uuid::new_v4();
    assert!(matches!(
        db.set_group_players(g, &[a, ghost]),
        Err(StoreError::UnknownReference { id, .. }) if id == ghost
    ));
    assert_eq!(db.group(g).unwrap().player_ids, vec![b, a]);
}

#[test]
fn add_match_validates_references() {
    let mut db = Database::new();
    let a = db.add_player(new_player("A", "A", 1)).unwrap().id;
    let b = db.add_player(new_player("B", "B", 2)).unwrap().id;
    let t = new_tournament(&mut db, "Open");
    let other = new_tournament(&mut db, "Other");
    let foreign_group = db.add_group(other, "Group A", 5).unwrap().id;

    assert!(matches!(
        db.add_match(new_match(t, a, a)),
        Err(StoreError::SamePlayerTwice)
    ));
    assert!(matches!(
        db.add_match(new_match(t, a, Uuid::new_v4())),
        Err(StoreError::UnknownReference {
            kind: EntityKind::Player,
            ..
        })
    ));
    assert!(matches!(
        db.add_match(new_match(Uuid::new_v4(), a, b)),
        Err(StoreError::UnknownReference {
            kind: EntityKind::Tournament,
            ..
        })
    ));
    let mut in_foreign_group = new_match(t, a, b);
    in_foreign_group.group_id = Some(foreign_group);
    assert!(matches!(
        db.add_match(in_foreign_group),
        Err(StoreError::GroupNotInTournament { .. })
    ));
    let mut runaway = new_match(t, a, b);
    runaway.score1 = MAX_SCORE + 1;
    assert!(matches!(
        db.add_match(runaway),
        Err(StoreError::ScoreOutOfRange { max: MAX_SCORE })
    ));
    assert!(db.matches.is_empty());

    let mut highest = new_match(t, a, b);
    highest.score2 = MAX_SCORE;
    let kept = db.add_match(highest).unwrap();
    db.remove_match(kept.id).unwrap();

    let m = db.add_match(new_match(t, a, b)).unwrap();
    assert_eq!(m.location, "Court 1");
    assert_eq!(db.matches_for(Some(t), None).len(), 1);
    assert!(db.matches_for(Some(other), None).is_empty());
    assert_eq!(db.matches_for(None, None).len(), 1);

    db.remove_match(m.id).unwrap();
    assert!(db.matches.is_empty());
}

#[test]
fn remove_tournament_drops_groups_keeps_matches() {
    let mut db = Database::new();
    let a = db.add_player(new_player("A", "A", 1)).unwrap().id;
    let b = db.add_player(new_player("B", "B", 2)).unwrap().id;
    let t = new_tournament(&mut db, "Open");
    db.add_group(t, "Group A", 5).unwrap();
    db.add_match(new_match(t, a, b)).unwrap();

    db.remove_tournament(t).unwrap();
    assert!(db.tournaments.is_empty());
    assert!(db.groups.is_empty());
    assert_eq!(db.matches.len(), 1);
}

#[test]
fn seed_tournament_reuses_players_and_snake_drafts() {
    let mut db = Database::new();
    let existing = db.add_player(new_player("Roger", "Federer", 1)).unwrap();
    let roster = vec![
        new_player("roger", "federer", 1),
        new_player("Rafa", "Nadal", 2),
        new_player("Novak", "Djokovic", 3),
        new_player("Andy", "Murray", 4),
    ];

    let seeded = db.seed_tournament("Masters", roster, 2, 5).unwrap();
    assert_eq!(seeded.players_created, 3);
    assert_eq!(db.players.len(), 4);
    assert!(seeded.tournament.is_group_based);
    assert_eq!(seeded.groups.len(), 2);
    assert_eq!(seeded.groups[0].name, "Group A");
    assert_eq!(seeded.groups[0].player_ids[0], existing.id);
    assert_eq!(seeded.groups[0].player_ids.len(), 2);
    assert_eq!(seeded.groups[1].player_ids.len(), 2);
    assert_eq!(db.tournament_groups(seeded.tournament.id).unwrap().len(), 2);

    assert!(matches!(
        db.seed_tournament("Empty", Vec::new(), 2, 5),
        Err(StoreError::EmptyRoster)
    ));
}

#[test]
fn seed_tournament_respects_group_cap() {
    let mut db = Database::new();
    let roster: Vec<NewPlayer> = (0..12)
        .map(|i| new_player(&format!("P{i}"), "Seed", i))
        .collect();
    let seeded = db.seed_tournament("Big", roster.clone(), 8, 5).unwrap();
    assert_eq!(seeded.groups.len(), 5);

    assert!(matches!(
        db.seed_tournament("None allowed", roster, 2, 0),
        Err(StoreError::TooManyGroups { max: 0 })
    ));
    assert_eq!(db.tournaments.len(), 1);
}

#[tokio::test]
async fn snapshot_round_trip_and_missing_file() {
    let dir = std::env::temp_dir().join(format!("tennis-store-{}", Uuid::new_v4()));
    let path = dir.join("db.json");

    let empty = file::load(&path).await.unwrap();
    assert!(empty.players.is_empty());

    let mut db = Database::new();
    let a = db.add_player(new_player("A", "A", 1)).unwrap().id;
    let b = db.add_player(new_player("B", "B", 2)).unwrap().id;
    let t = new_tournament(&mut db, "Open");
    db.add_group(t, "Group A", 5).unwrap();
    db.add_match(new_match(t, a, b)).unwrap();
    file::save(&path, &db).await.unwrap();

    let loaded = file::load(&path).await.unwrap();
    assert_eq!(loaded.players, db.players);
    assert_eq!(loaded.tournaments, db.tournaments);
    assert_eq!(loaded.groups, db.groups);
    assert_eq!(loaded.matches, db.matches);
    assert!(!dir.join("db.json.tmp").exists());

    tokio::fs::remove_dir_all(&dir).await.unwrap();
}

#[tokio::test]
async fn corrupt_snapshot_is_an_error() {
    let path = std::env::temp_dir().join(format!("tennis-corrupt-{}.json", Uuid::new_v4()));
    tokio::fs::write(&path, b"{ not json").await.unwrap();
    assert!(matches!(file::load(&path).await, Err(StoreError::Json(_))));
    tokio::fs::remove_file(&path).await.unwrap();
}
