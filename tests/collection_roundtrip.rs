use album_tracker::persistence::{self, collection_path};
use album_tracker::{AlbumDraft, Collection, CollectionError, Menu, TrackerConfig};
use std::fs;
use tempfile::TempDir;

/// Create a small test collection
fn create_test_collection() -> Collection {
    let mut collection = Collection::new();

    collection
        .add(AlbumDraft::new(
            "The Dark Side of the Moon",
            "Pink Floyd",
            "Progressive Rock",
            "Vinyl",
            10,
            1973,
        ))
        .unwrap();
    collection
        .add(AlbumDraft::new("Kind of Blue", "Miles Davis", "Jazz", "CD", 5, 1959))
        .unwrap();
    collection
        .add(AlbumDraft::new(
            "Darkness on the Edge of Town",
            "Bruce Springsteen",
            "Rock",
            "Cassette",
            10,
            1978,
        ))
        .unwrap();

    collection
}

#[test]
fn test_abbey_road_scenario() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let path = collection_path(temp_dir.path(), "beatles").unwrap();

    let mut collection = Collection::new();
    let album = collection
        .add(AlbumDraft::new(
            "Abbey Road",
            "The Beatles",
            "Rock",
            "Vinyl",
            17,
            1969,
        ))
        .unwrap()
        .clone();
    assert_eq!(album.id, 1);
    assert_eq!(collection.len(), 1);

    persistence::save(&path, collection.albums()).expect("Failed to save");

    let reloaded = persistence::load_collection(&path).expect("Failed to load");
    assert_eq!(reloaded.albums(), &[album]);
}

#[test]
fn test_round_trip_preserves_order_and_fields() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let path = temp_dir.path().join("mixed.csv");

    let mut collection = create_test_collection();
    collection.delete(2).unwrap();

    persistence::save(&path, collection.albums()).unwrap();
    let reloaded = persistence::load_collection(&path).unwrap();

    assert_eq!(reloaded.albums(), collection.albums());
    let ids: Vec<u32> = reloaded.albums().iter().map(|a| a.id).collect();
    assert_eq!(ids, vec![1, 3]);
}

#[test]
fn test_ids_stay_unique_after_reload() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let path = temp_dir.path().join("ids.csv");

    let mut collection = create_test_collection();
    collection.delete(1).unwrap();
    persistence::save(&path, collection.albums()).unwrap();

    let mut reloaded = persistence::load_collection(&path).unwrap();
    let added = reloaded
        .add(AlbumDraft::new("Blue", "Joni Mitchell", "Folk", "LP", 10, 1971))
        .unwrap();
    assert_eq!(added.id, 4);
}

#[test]
fn test_delimiters_in_text_survive_round_trip() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let path = temp_dir.path().join("tricky.csv");

    let mut collection = Collection::new();
    collection
        .add(AlbumDraft::new(
            "Déjà Vu",
            "Crosby, Stills, Nash & Young",
            "Folk, Rock",
            "12\" Vinyl",
            10,
            1970,
        ))
        .unwrap();
    collection
        .add(AlbumDraft::new("Two\nLines", "Someone", "", "CD", 1, 2001))
        .unwrap();

    persistence::save(&path, collection.albums()).unwrap();
    let reloaded = persistence::load_collection(&path).unwrap();

    assert_eq!(reloaded.albums(), collection.albums());
}

#[test]
fn test_load_rejects_last_possible_id() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let path = temp_dir.path().join("max.csv");
    fs::write(&path, "4294967295,A,B,C,D,1,2000\n").unwrap();

    let result = persistence::load_collection(&path);
    assert!(matches!(result, Err(CollectionError::IdsExhausted(u32::MAX))));
}

#[test]
fn test_search_matches_substring_ignoring_case() {
    let collection = create_test_collection();

    let titles: Vec<&str> = collection
        .search_by_title("DARK")
        .iter()
        .map(|a| a.title.as_str())
        .collect();
    assert_eq!(
        titles,
        vec!["The Dark Side of the Moon", "Darkness on the Edge of Town"]
    );

    // Exact lookup stays strict
    assert_eq!(collection.find_by_title("kind of blue"), None);
    assert_eq!(collection.find_by_title("Kind of Blue"), Some(1));
}

#[test]
fn test_load_rejects_corrupted_numbers() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let path = temp_dir.path().join("corrupt.csv");
    fs::write(&path, "1,Abbey Road,The Beatles,Rock,Vinyl,seventeen,1969\n").unwrap();

    let result = persistence::load_collection(&path);
    assert!(matches!(result, Err(CollectionError::Csv { .. })));
}

#[test]
fn test_load_file_written_by_hand() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let path = temp_dir.path().join("legacy.csv");
    fs::write(
        &path,
        "1,Abbey Road,The Beatles,Rock,Vinyl,17,1969\r\n2,\"Hello, Nasty\",Beastie Boys,Hip Hop,CD,22,1998\r\n",
    )
    .unwrap();

    let collection = persistence::load_collection(&path).unwrap();
    assert_eq!(collection.len(), 2);
    assert_eq!(collection.albums()[1].title, "Hello, Nasty");
    assert_eq!(collection.albums()[1].year, 1998);
}

#[test]
fn test_menu_session_saves_to_configured_directory() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let config = TrackerConfig::new(temp_dir.path().to_path_buf());

    let script = "2\n1\nAbbey Road\nThe Beatles\nRock\nVinyl\n17\n1969\n6\nbeatles\n8\n";
    let mut menu = Menu::new(config, script.as_bytes(), Vec::new());
    menu.run().expect("Menu session failed");

    let saved = persistence::load(&temp_dir.path().join("beatles.csv")).unwrap();
    assert_eq!(saved.len(), 1);
    assert_eq!(saved[0].title, "Abbey Road");
    assert_eq!(saved[0].id, 1);
}
