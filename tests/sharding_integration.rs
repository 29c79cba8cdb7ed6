//! Integration tests for the sharding routing and self-check flow.

use tessera::sharding::naming::{is_container_id, shard_container, shards_account};
use tessera::{ShardInfo, ShardRange, ShardRangeTable, TesseraError};

const TIMESTAMP: i64 = 1_630_000_000;

fn cid(c: char) -> String {
    c.to_string().repeat(64)
}

/// The JSON a control plane would publish for a three-way split.
fn control_plane_payload() -> String {
    format!(
        concat!(
            r#"[{{"index":0,"lower":"","upper":"m","cid":"{}"}},"#,
            r#"{{"index":1,"lower":"m","upper":"t","cid":"{}"}},"#,
            r#"{{"index":2,"lower":"t","upper":"","cid":"{}"}}]"#,
        ),
        cid('a'),
        cid('b'),
        cid('c'),
    )
}

/// The descriptor each shard of that split would hold.
fn shard_info_for(range: &ShardRange) -> ShardInfo {
    ShardInfo {
        root_cid: cid('0'),
        timestamp: TIMESTAMP,
        lower: range.lower.clone(),
        upper: range.upper.clone(),
    }
}

#[test]
fn test_router_and_shards_agree() {
    let table = ShardRangeTable::decode(&control_plane_payload()).unwrap();
    table.check_complete().unwrap();

    // For every path, exactly the shard the router picks accepts it.
    for path in ["a", "m", "mango", "n", "t", "tiger", "zzz"] {
        let owner = table.lookup(path).expect("total partition covers every path");
        for range in table.iter() {
            let info = shard_info_for(range);
            if range.index == owner.index {
                info.check_range(path).unwrap();
            } else {
                assert!(info.check_range(path).unwrap_err().is_out_of_range());
            }
        }
    }
}

#[test]
fn test_misroute_is_a_reroute_signal() {
    // A stale cache sends "zebra" to the middle shard.
    let info = ShardInfo {
        root_cid: cid('0'),
        timestamp: TIMESTAMP,
        lower: "m".into(),
        upper: "t".into(),
    };
    let err = info.check_range("zebra").unwrap_err();
    assert!(err.is_out_of_range());
    assert!(!err.is_decode_error());

    // A broken payload, by contrast, must not look routable.
    let err = ShardInfo::decode("{").unwrap_err();
    assert!(err.is_decode_error());
    assert!(!err.is_out_of_range());
}

#[test]
fn test_refresh_cycle_round_trip() {
    // Routing layers re-encode and re-decode tables across refresh
    // cycles; the bytes must stay stable.
    let payload = control_plane_payload();
    let table = ShardRangeTable::decode(&payload).unwrap();
    assert_eq!(table.encode(), payload);

    let again = ShardRangeTable::decode(&table.encode()).unwrap();
    assert_eq!(again, table);
    assert_eq!(again.encode(), payload);
}

#[test]
fn test_shard_info_embedded_in_envelope() {
    // Shards often receive their descriptor inside a larger properties
    // payload that the caller has already parsed.
    let envelope: serde_json::Value = serde_json::from_str(&format!(
        r#"{{"system":{{"sharding.state":3}},"shard_info":{{"root_cid":"{}","timestamp":{TIMESTAMP},"lower":"m","upper":"t"}}}}"#,
        cid('0'),
    ))
    .unwrap();

    let info = ShardInfo::from_value(envelope["shard_info"].clone()).unwrap();
    assert_eq!(info.lower, "m");
    assert_eq!(
        info.encode(),
        format!(
            r#"{{"root_cid":"{}","timestamp":{TIMESTAMP},"lower":"m","upper":"t"}}"#,
            cid('0'),
        )
    );
}

#[test]
fn test_incomplete_layout_is_rejected_before_activation() {
    // One shard missing from the proposal: decodes fine (the routing
    // side tolerates partial tables) but must not pass the activation
    // check.
    let partial = format!(
        concat!(
            r#"[{{"index":0,"lower":"","upper":"m","cid":"{}"}},"#,
            r#"{{"index":1,"lower":"t","upper":"","cid":"{}"}}]"#,
        ),
        cid('a'),
        cid('b'),
    );
    let table = ShardRangeTable::decode(&partial).unwrap();
    assert!(table.lookup("p").is_none());
    assert!(matches!(
        table.check_complete(),
        Err(TesseraError::Schema(_))
    ));
}

#[test]
fn test_shard_naming_convention() {
    assert_eq!(shards_account("acct"), ".shards_acct");

    let parent = cid('e');
    let name = shard_container("photos", &parent, TIMESTAMP, 1);
    assert_eq!(name, format!("photos-{parent}-{TIMESTAMP}-1"));

    assert!(is_container_id(&cid('d')));
    assert!(!is_container_id("photos"));
}
