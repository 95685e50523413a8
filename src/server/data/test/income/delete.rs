use super::*;

/// Tests deleting an income record.
///
/// Expected: Ok(true), record gone
#[tokio::test]
async fn deletes_own_record() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_income_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let (_, income) = test_utils::factory::helpers::create_income_for_user(db, &user).await?;

    let repo = IncomeRepository::new(db);
    let deleted = repo.delete(income.id, user.id).await?;

    assert!(deleted);
    assert!(repo.get_by_id(income.id, user.id).await?.is_none());

    Ok(())
}

/// Tests that a user cannot delete another user's record.
///
/// Expected: Ok(false), record still present
#[tokio::test]
async fn cannot_delete_other_owners_record() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_income_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let owner = factory::create_user(db).await?;
    let intruder = factory::create_user(db).await?;
    let (_, income) = test_utils::factory::helpers::create_income_for_user(db, &owner).await?;

    let repo = IncomeRepository::new(db);
    let deleted = repo.delete(income.id, intruder.id).await?;

    assert!(!deleted);
    assert!(repo.get_by_id(income.id, owner.id).await?.is_some());

    Ok(())
}
