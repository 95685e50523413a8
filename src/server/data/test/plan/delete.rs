use super::*;

/// Tests deleting a plan entry.
///
/// Expected: Ok(true), entry gone
#[tokio::test]
async fn deletes_own_entry() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .with_table(entity::prelude::AnnualPlan)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let plan = factory::create_plan(db, user.id).await?;

    let repo = AnnualPlanRepository::new(db);
    let deleted = repo.delete(plan.id, user.id).await?;

    assert!(deleted);
    assert!(repo.get_by_id(plan.id, user.id).await?.is_none());

    Ok(())
}

/// Tests that a user cannot delete another user's entry.
///
/// Expected: Ok(false), entry still present
#[tokio::test]
async fn cannot_delete_other_owners_entry() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .with_table(entity::prelude::AnnualPlan)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let owner = factory::create_user(db).await?;
    let intruder = factory::create_user(db).await?;
    let plan = factory::create_plan(db, owner.id).await?;

    let repo = AnnualPlanRepository::new(db);
    let deleted = repo.delete(plan.id, intruder.id).await?;

    assert!(!deleted);
    assert!(repo.get_by_id(plan.id, owner.id).await?.is_some());

    Ok(())
}
