use super::*;

/// Tests deleting an outflow.
///
/// Expected: Ok(true), record gone
#[tokio::test]
async fn deletes_own_record() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_expense_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (user, _, _, outflow) =
        test_utils::factory::helpers::create_outflow_with_dependencies(db).await?;

    let repo = OutflowRepository::new(db);
    let deleted = repo.delete(outflow.id, user.id).await?;

    assert!(deleted);
    assert!(repo.get_by_id(outflow.id, user.id).await?.is_none());

    Ok(())
}

/// Tests that a user cannot delete another user's record.
///
/// Expected: Ok(false), record still present
#[tokio::test]
async fn cannot_delete_other_owners_record() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_expense_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (owner, _, _, outflow) =
        test_utils::factory::helpers::create_outflow_with_dependencies(db).await?;
    let intruder = factory::create_user(db).await?;

    let repo = OutflowRepository::new(db);
    let deleted = repo.delete(outflow.id, intruder.id).await?;

    assert!(!deleted);
    assert!(repo.get_by_id(outflow.id, owner.id).await?.is_some());

    Ok(())
}
