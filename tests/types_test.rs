use lmscli::types::*;
use serde_json::json;

#[test]
fn test_player_deserialization() {
    // Shape as returned inside players_loop by a current LMS
    let player: Player = serde_json::from_value(json!({
        "playerid": "00:04:20:ab:cd:ef",
        "name": "Kitchen",
        "connected": 1,
        "isplaying": 0,
        "power": 1,
        "modelname": "Squeezebox Radio"
    }))
    .unwrap();

    assert_eq!(player.playerid, "00:04:20:ab:cd:ef");
    assert_eq!(player.name, "Kitchen");
    assert_eq!(player.connected, Some(1));
    assert_eq!(player.isplaying, Some(0));
    assert_eq!(player.power, Some(1));
}

#[test]
fn test_player_deserialization_string_flags_and_omissions() {
    // Older servers send flags as strings and omit some fields entirely
    let player: Player = serde_json::from_value(json!({
        "playerid": "00:04:20:ab:cd:ef",
        "name": "Office",
        "connected": "1"
    }))
    .unwrap();

    assert_eq!(player.connected, Some(1));
    assert_eq!(player.isplaying, None);
    assert_eq!(player.power, None);
}

#[test]
fn test_player_flag_rendering() {
    assert_eq!(Player::flag(Some(1)), "1");
    assert_eq!(Player::flag(Some(0)), "0");
    assert_eq!(Player::flag(None), "?");
}

#[test]
fn test_player_status_deserialization() {
    let status: PlayerStatus = serde_json::from_value(json!({
        "mode": "play",
        "mixer volume": 40,
        "time": 65.3,
        "duration": 303.0,
        "playlist_cur_index": "2",
        "playlist_tracks": 12,
        "player_name": "Kitchen"
    }))
    .unwrap();

    assert_eq!(status.mode.as_deref(), Some("play"));
    assert_eq!(status.mixer_volume, Some(40));
    assert_eq!(status.time, Some(65.3));
    assert_eq!(status.duration, Some(303.0));
    // playlist_cur_index arrives as a string; parsed anyway
    assert_eq!(status.playlist_cur_index, Some(2));
    assert_eq!(status.playlist_tracks, Some(12));
}

#[test]
fn test_player_status_string_numerics() {
    // Every numeric field can arrive as a decimal string
    let status: PlayerStatus = serde_json::from_value(json!({
        "mixer volume": "-40",
        "time": "65.3",
        "duration": "303"
    }))
    .unwrap();

    assert_eq!(status.mixer_volume, Some(-40));
    assert_eq!(status.time, Some(65.3));
    assert_eq!(status.duration, Some(303.0));
    assert_eq!(status.mode, None);
}

#[test]
fn test_player_status_preserves_extras() {
    let status: PlayerStatus = serde_json::from_value(json!({
        "mode": "stop",
        "power": 1,
        "playlist_loop": [{"title": "Harvest Moon"}]
    }))
    .unwrap();

    // Untyped fields land in the flattened tail...
    assert_eq!(status.extra.get("power"), Some(&json!(1)));
    assert!(status.extra.contains_key("playlist_loop"));

    // ...and survive re-serialization for the status dump
    let dump = serde_json::to_value(&status).unwrap();
    assert_eq!(dump.get("mode"), Some(&json!("stop")));
    assert_eq!(dump.get("power"), Some(&json!(1)));
    // Absent typed fields stay absent instead of dumping as null
    assert!(dump.get("duration").is_none());
}

#[test]
fn test_search_kind_wire_mapping() {
    assert_eq!(SearchKind::Albums.command(), "albums");
    assert_eq!(SearchKind::Albums.loop_key(), "albums_loop");
    assert_eq!(SearchKind::Albums.label_field(), "album");

    assert_eq!(SearchKind::Artists.command(), "artists");
    assert_eq!(SearchKind::Artists.loop_key(), "artists_loop");
    assert_eq!(SearchKind::Artists.label_field(), "artist");

    // LMS answers the songs verb with titles_loop
    assert_eq!(SearchKind::Songs.command(), "songs");
    assert_eq!(SearchKind::Songs.loop_key(), "titles_loop");
    assert_eq!(SearchKind::Songs.label_field(), "title");
}

#[test]
fn test_search_kind_display() {
    assert_eq!(SearchKind::Albums.to_string(), "albums");
    assert_eq!(SearchKind::Artists.to_string(), "artists");
    assert_eq!(SearchKind::Songs.to_string(), "songs");
}

#[test]
fn test_load_kind_wire_mapping() {
    assert_eq!(LoadKind::Album.id_tag(), "album_id");
    assert_eq!(LoadKind::Artist.id_tag(), "artist_id");
    assert_eq!(LoadKind::Track.id_tag(), "track_id");

    assert_eq!(LoadKind::Album.to_string(), "album");
    assert_eq!(LoadKind::Artist.to_string(), "artist");
    assert_eq!(LoadKind::Track.to_string(), "track");
}

#[test]
fn test_load_action_display_and_default() {
    assert_eq!(LoadAction::Load.to_string(), "load");
    assert_eq!(LoadAction::Add.to_string(), "add");
    assert_eq!(LoadAction::Insert.to_string(), "insert");
    assert_eq!(LoadAction::default(), LoadAction::Load);
}

#[test]
fn test_json_scalar_helpers() {
    assert_eq!(json_u64(&json!(7)), Some(7));
    assert_eq!(json_u64(&json!("7")), Some(7));
    assert_eq!(json_u64(&json!(" 7 ")), Some(7));
    assert_eq!(json_u64(&json!(null)), None);
    assert_eq!(json_u64(&json!("x")), None);

    assert_eq!(json_i64(&json!(-3)), Some(-3));
    assert_eq!(json_i64(&json!("-3")), Some(-3));

    assert_eq!(json_f64(&json!(1.5)), Some(1.5));
    assert_eq!(json_f64(&json!("1.5")), Some(1.5));

    assert_eq!(json_string(&json!("play")), Some("play".to_string()));
    assert_eq!(json_string(&json!(42)), Some("42".to_string()));
    assert_eq!(json_string(&json!(null)), None);
}
