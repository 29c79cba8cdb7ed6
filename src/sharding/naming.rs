//! Naming conventions for shard accounts and containers.
//!
//! Shards live under a dedicated technical account derived from the
//! root account, and each shard container name records its lineage:
//! root container, parent container id, split timestamp and index.

use crate::types::{ShardIndex, Timestamp, CONTAINER_ID_HEX_LEN};

/// Account that hosts the shards of containers belonging to
/// `root_account`.
pub fn shards_account(root_account: &str) -> String {
    format!(".shards_{root_account}")
}

/// Name of the shard container created for `index` by the split of
/// `root_container` at `timestamp`.
pub fn shard_container(
    root_container: &str,
    parent_cid: &str,
    timestamp: Timestamp,
    index: ShardIndex,
) -> String {
    format!("{root_container}-{parent_cid}-{timestamp}-{index}")
}

/// Check whether `s` has the syntax of a container id: exactly
/// [`CONTAINER_ID_HEX_LEN`] hexadecimal characters.
pub fn is_container_id(s: &str) -> bool {
    s.len() == CONTAINER_ID_HEX_LEN && s.bytes().all(|b| b.is_ascii_hexdigit())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shards_account() {
        assert_eq!(shards_account("myaccount"), ".shards_myaccount");
    }

    #[test]
    fn test_shard_container() {
        let cid = "f".repeat(64);
        assert_eq!(
            shard_container("photos", &cid, 1_630_000_000, 2),
            format!("photos-{cid}-1630000000-2")
        );
    }

    #[test]
    fn test_is_container_id() {
        assert!(is_container_id(&"0".repeat(64)));
        assert!(is_container_id(&"aF39".repeat(16)));
        assert!(!is_container_id(&"0".repeat(63)));
        assert!(!is_container_id(&"0".repeat(65)));
        assert!(!is_container_id(&"g".repeat(64)));
        assert!(!is_container_id(""));
    }
}
