//! Integration tests for the repository layer against a real database:
//! - Tree creation (tree + initial branch + branch order, one transaction)
//! - Pool transfer substitution semantics
//! - Branch naming and leaf linking
//! - Serialized column round-trips

use sqlx::PgPool;

use arbor_core::error::CoreError;
use arbor_core::order::decode_branch_order;
use arbor_core::pool::encode_branch_pool;
use arbor_core::tree::RESERVED_TREE_ID;
use arbor_db::repositories::{BranchRepo, LeafRepo, TreeRepo, UserRepo};
use arbor_db::DbError;

// ---------------------------------------------------------------------------
// Tree creation
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn create_tree_writes_initial_branch_order(pool: PgPool) {
    let user = UserRepo::create(&pool, "ada", &[]).await.unwrap();

    let (tree_id, branch_id) = TreeRepo::create_with_initial_branch(
        &pool,
        user.user_id,
        "tree.png",
        "Oak",
        "",
        "#000000",
    )
    .await
    .unwrap();

    let tree = TreeRepo::find_by_id(&pool, tree_id).await.unwrap().unwrap();
    assert_eq!(tree.branch_order, format!(r#"["{branch_id}:1"]"#));
    assert_eq!(tree.user_id, user.user_id);
    assert_eq!(tree.tree_name, "Oak");

    let slots = decode_branch_order(&tree.branch_order).unwrap();
    assert_eq!(slots.len(), 1);
    assert_eq!(slots[0].branch_id, branch_id);
    assert_eq!(slots[0].position, 1);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn initial_branch_starts_unattached_and_leafless(pool: PgPool) {
    let user = UserRepo::create(&pool, "ada", &[]).await.unwrap();

    let (_, branch_id) =
        TreeRepo::create_with_initial_branch(&pool, user.user_id, "tree.png", "Oak", "", "#000000")
            .await
            .unwrap();

    let branch = BranchRepo::find_by_id(&pool, branch_id)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(branch.tree_id, RESERVED_TREE_ID);
    assert_eq!(branch.branch_name, "");
    assert!(branch.leaf_id.is_none());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn create_tree_rolls_back_when_owner_missing(pool: PgPool) {
    // No such user: the tree insert violates its FK, and no branch row
    // survives from the aborted transaction.
    let result =
        TreeRepo::create_with_initial_branch(&pool, 999_999, "tree.png", "Oak", "", "#000000")
            .await;
    assert!(result.is_err());

    let (branches,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM branches")
        .fetch_one(&pool)
        .await
        .unwrap();
    assert_eq!(branches, 0);
}

// ---------------------------------------------------------------------------
// Tree listing and branch order
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn list_for_user_joins_owner_name(pool: PgPool) {
    let user = UserRepo::create(&pool, "ada", &[]).await.unwrap();

    TreeRepo::create_with_initial_branch(&pool, user.user_id, "oak.png", "Oak", "tall", "#112233")
        .await
        .unwrap();
    TreeRepo::create_with_initial_branch(&pool, user.user_id, "fir.png", "Fir", "", "#000000")
        .await
        .unwrap();

    let trees = TreeRepo::list_for_user(&pool, user.user_id).await.unwrap();
    assert_eq!(trees.len(), 2);
    assert!(trees.iter().all(|t| t.user_name == "ada"));
    assert!(trees.iter().any(|t| t.tree_name == "Oak" && t.tree_desc == "tall"));
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn set_branch_order_stores_verbatim(pool: PgPool) {
    let user = UserRepo::create(&pool, "ada", &[]).await.unwrap();
    let (tree_id, _) =
        TreeRepo::create_with_initial_branch(&pool, user.user_id, "tree.png", "Oak", "", "#000000")
            .await
            .unwrap();

    let raw = r#"["9:1","4:2"]"#;
    let affected = TreeRepo::set_branch_order(&pool, tree_id, raw).await.unwrap();
    assert_eq!(affected, 1);

    let rows = TreeRepo::branch_order(&pool, tree_id).await.unwrap();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].branch_order, raw);
    assert_eq!(rows[0].tree_id, tree_id);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn set_branch_order_affects_no_rows_for_unknown_tree(pool: PgPool) {
    let affected = TreeRepo::set_branch_order(&pool, 999_999, "[]").await.unwrap();
    assert_eq!(affected, 0);
}

// ---------------------------------------------------------------------------
// Pool transfer
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn transfer_substitutes_every_pool_slot(pool: PgPool) {
    let pooled = BranchRepo::create(&pool, RESERVED_TREE_ID).await.unwrap();
    let other = BranchRepo::create(&pool, RESERVED_TREE_ID).await.unwrap();

    // Duplicate occurrence on purpose: both slots must collapse onto the
    // same new id.
    let owner = UserRepo::create(&pool, "ada", &[pooled, other, pooled])
        .await
        .unwrap();
    let (tree_id, _) =
        TreeRepo::create_with_initial_branch(&pool, owner.user_id, "tree.png", "Oak", "", "#000000")
            .await
            .unwrap();

    let new_branch = UserRepo::transfer_pool_branch(&pool, owner.user_id, pooled, tree_id)
        .await
        .unwrap();

    let user = UserRepo::find_by_id(&pool, owner.user_id)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(
        user.branch_pool,
        encode_branch_pool(&[new_branch, other, new_branch])
    );

    // The original branch moved into the target tree; its replacement
    // starts unattached.
    let moved = BranchRepo::find_by_id(&pool, pooled).await.unwrap().unwrap();
    assert_eq!(moved.tree_id, tree_id);

    let fresh = BranchRepo::find_by_id(&pool, new_branch)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(fresh.tree_id, RESERVED_TREE_ID);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn transfer_leaves_non_matching_slots_untouched(pool: PgPool) {
    let a = BranchRepo::create(&pool, RESERVED_TREE_ID).await.unwrap();
    let b = BranchRepo::create(&pool, RESERVED_TREE_ID).await.unwrap();

    let owner = UserRepo::create(&pool, "ada", &[a, b]).await.unwrap();
    let (tree_id, _) =
        TreeRepo::create_with_initial_branch(&pool, owner.user_id, "tree.png", "Oak", "", "#000000")
            .await
            .unwrap();

    let new_branch = UserRepo::transfer_pool_branch(&pool, owner.user_id, a, tree_id)
        .await
        .unwrap();

    let user = UserRepo::find_by_id(&pool, owner.user_id)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(user.branch_pool, encode_branch_pool(&[new_branch, b]));
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn transfer_for_unknown_user_fails_and_creates_nothing(pool: PgPool) {
    let pooled = BranchRepo::create(&pool, RESERVED_TREE_ID).await.unwrap();

    let err = UserRepo::transfer_pool_branch(&pool, 999_999, pooled, RESERVED_TREE_ID)
        .await
        .unwrap_err();
    assert!(matches!(
        err,
        DbError::Core(CoreError::NotFound { entity: "User", .. })
    ));

    // The speculative branch insert rolled back with the transaction.
    let (branches,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM branches")
        .fetch_one(&pool)
        .await
        .unwrap();
    assert_eq!(branches, 1);
}

// ---------------------------------------------------------------------------
// Branch naming and leaves
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn rename_branch_and_read_back(pool: PgPool) {
    let branch_id = BranchRepo::create(&pool, RESERVED_TREE_ID).await.unwrap();

    let affected = BranchRepo::set_name(&pool, branch_id, "Trunk").await.unwrap();
    assert_eq!(affected, 1);

    let rows = BranchRepo::get_name(&pool, branch_id).await.unwrap();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].branch_name, "Trunk");
    assert_eq!(rows[0].branch_id, branch_id);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn leaf_links_to_branch(pool: PgPool) {
    let branch_id = BranchRepo::create(&pool, RESERVED_TREE_ID).await.unwrap();

    let leaf_id = LeafRepo::create(&pool, branch_id).await.unwrap();
    let affected = BranchRepo::set_leaf(&pool, branch_id, leaf_id).await.unwrap();
    assert_eq!(affected, 1);

    let branch = BranchRepo::find_by_id(&pool, branch_id)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(branch.leaf_id, Some(leaf_id));

    let leaf = LeafRepo::find_by_id(&pool, leaf_id).await.unwrap().unwrap();
    assert_eq!(leaf.branch_id, branch_id);
}

// ---------------------------------------------------------------------------
// Branch pool reads
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn branch_pool_reads_back_verbatim(pool: PgPool) {
    let owner = UserRepo::create(&pool, "ada", &[4, 7, 9]).await.unwrap();

    let rows = UserRepo::get_branch_pool(&pool, owner.user_id).await.unwrap();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].user_id, owner.user_id);
    assert_eq!(rows[0].branch_pool, "[4,7,9]");
}
