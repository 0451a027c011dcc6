//! Codec and substitution rule for the `users.branch_pool` serialized
//! column: a JSON array of branch-id numbers, e.g. `[4,7,9]`.

use crate::error::CoreError;
use crate::types::DbId;

/// Decode a stored branch pool.
pub fn decode_branch_pool(raw: &str) -> Result<Vec<DbId>, CoreError> {
    serde_json::from_str(raw).map_err(|e| CoreError::Malformed {
        column: "branch_pool",
        detail: e.to_string(),
    })
}

/// Encode a branch pool into its JSON wire format.
pub fn encode_branch_pool(pool: &[DbId]) -> String {
    // Serializing a Vec<i64> cannot fail.
    serde_json::to_string(pool).expect("branch pool serialization")
}

/// Replace every occurrence of `from` in the pool with `to`, leaving
/// other entries untouched.
///
/// This is the pool-transfer substitution rule: no uniqueness check, so
/// duplicate occurrences of `from` all collapse onto the same `to`.
pub fn substitute_branch(pool: &[DbId], from: DbId, to: DbId) -> Vec<DbId> {
    pool.iter()
        .map(|&id| if id == from { to } else { id })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_pool() {
        assert_eq!(decode_branch_pool("[4,7,9]").unwrap(), vec![4, 7, 9]);
    }

    #[test]
    fn decodes_empty_pool() {
        assert!(decode_branch_pool("[]").unwrap().is_empty());
    }

    #[test]
    fn rejects_non_array() {
        assert!(decode_branch_pool("4,7,9").is_err());
    }

    #[test]
    fn rejects_non_numeric_entries() {
        assert!(decode_branch_pool(r#"["four"]"#).is_err());
    }

    #[test]
    fn encodes_compact_json() {
        assert_eq!(encode_branch_pool(&[4, 7, 9]), "[4,7,9]");
    }

    #[test]
    fn substitutes_single_occurrence() {
        assert_eq!(substitute_branch(&[4, 7, 9], 7, 21), vec![4, 21, 9]);
    }

    #[test]
    fn substitutes_every_occurrence() {
        assert_eq!(substitute_branch(&[7, 4, 7], 7, 21), vec![21, 4, 21]);
    }

    #[test]
    fn leaves_pool_unchanged_when_absent() {
        assert_eq!(substitute_branch(&[4, 9], 7, 21), vec![4, 9]);
    }

    #[test]
    fn round_trips() {
        let raw = "[4,7,9]";
        assert_eq!(encode_branch_pool(&decode_branch_pool(raw).unwrap()), raw);
    }
}
