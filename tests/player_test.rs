use lmscli::config::ServerConfig;
use lmscli::lms::LmsClient;
use lmscli::player::{self, find_player, roster_names};
use lmscli::types::Player;

// Helper function to create a roster entry
fn create_test_player(name: &str, mac: &str) -> Player {
    Player {
        playerid: mac.to_string(),
        name: name.to_string(),
        connected: Some(1),
        isplaying: Some(0),
        power: Some(1),
    }
}

fn test_roster() -> Vec<Player> {
    vec![
        create_test_player("Kitchen", "00:04:20:aa:bb:01"),
        create_test_player("Living Room", "00:04:20:aa:bb:02"),
        create_test_player("Office", "00:04:20:aa:bb:03"),
    ]
}

#[test]
fn test_find_player_case_insensitive() {
    let roster = test_roster();

    for query in ["Kitchen", "kitchen", "KITCHEN", "kItChEn"] {
        let found = find_player(&roster, query);
        assert!(found.is_some(), "query {:?} should match", query);
        assert_eq!(found.unwrap().playerid, "00:04:20:aa:bb:01");
    }
}

#[test]
fn test_find_player_exact_match_only() {
    let roster = test_roster();

    // Substrings and supersets are not matches
    assert!(find_player(&roster, "Kitch").is_none());
    assert!(find_player(&roster, "Kitchen 2").is_none());
    assert!(find_player(&roster, "").is_none());
}

#[test]
fn test_find_player_no_match() {
    let roster = test_roster();
    assert!(find_player(&roster, "Bedroom").is_none());
}

#[test]
fn test_find_player_empty_roster() {
    assert!(find_player(&[], "Kitchen").is_none());
}

#[test]
fn test_find_player_first_match_wins() {
    // Display names are not unique on LMS; the contract is that the first
    // roster entry wins.
    let roster = vec![
        create_test_player("Kitchen", "00:04:20:aa:bb:01"),
        create_test_player("kitchen", "00:04:20:aa:bb:99"),
    ];

    let found = find_player(&roster, "KITCHEN").unwrap();
    assert_eq!(found.playerid, "00:04:20:aa:bb:01");
}

#[test]
fn test_roster_names_order_and_separator() {
    let roster = test_roster();
    assert_eq!(roster_names(&roster), "Kitchen, Living Room, Office");
}

#[test]
fn test_roster_names_lists_duplicates() {
    // Every roster entry appears exactly once, duplicates included
    let roster = vec![
        create_test_player("Kitchen", "00:04:20:aa:bb:01"),
        create_test_player("Kitchen", "00:04:20:aa:bb:99"),
    ];
    assert_eq!(roster_names(&roster), "Kitchen, Kitchen");
}

#[test]
fn test_roster_names_empty() {
    assert_eq!(roster_names(&[]), "");
}

#[test]
fn test_roster_names_single() {
    let roster = vec![create_test_player("Office", "00:04:20:aa:bb:03")];
    assert_eq!(roster_names(&roster), "Office");
}

#[tokio::test]
async fn test_resolve_mac_short_circuits_roster_query() {
    // TEST-NET-1 address: any roster query against it would fail (and
    // error! would exit the process), so a successful resolve proves the
    // explicit MAC bypassed the server entirely - even with a player name
    // also present.
    let server = ServerConfig {
        host: "192.0.2.1".to_string(),
        port: 9,
    };
    let client = LmsClient::new(&server);

    let mac = player::resolve(
        &client,
        Some("00:04:20:ab:cd:ef".to_string()),
        Some("Kitchen".to_string()),
    )
    .await;

    assert_eq!(mac, "00:04:20:ab:cd:ef");
}
