use super::*;

/// Tests updating an income record's amount and period.
///
/// Expected: Ok(Some) with the new values stored
#[tokio::test]
async fn updates_own_record() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_income_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let (income_type, income) =
        test_utils::factory::helpers::create_income_for_user(db, &user).await?;

    let repo = IncomeRepository::new(db);
    let updated = repo
        .update(UpdateIncomeParams {
            id: income.id,
            owner_id: user.id,
            year: "2026".to_string(),
            month: "09".to_string(),
            income_type_id: income_type.id,
            description: Some("Moved to September".to_string()),
            amount: Decimal::new(150_000, 2),
        })
        .await?;

    assert!(updated.is_some());
    let updated = updated.unwrap();
    assert_eq!(updated.month, "09");
    assert_eq!(updated.amount, Decimal::new(150_000, 2));

    Ok(())
}

/// Tests that a user cannot update another user's record.
///
/// Expected: Ok(None)
#[tokio::test]
async fn cannot_update_other_owners_record() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_income_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let owner = factory::create_user(db).await?;
    let intruder = factory::create_user(db).await?;
    let (income_type, income) =
        test_utils::factory::helpers::create_income_for_user(db, &owner).await?;

    let repo = IncomeRepository::new(db);
    let updated = repo
        .update(UpdateIncomeParams {
            id: income.id,
            owner_id: intruder.id,
            year: income.year.clone(),
            month: income.month.clone(),
            income_type_id: income_type.id,
            description: None,
            amount: Decimal::ZERO,
        })
        .await?;

    assert!(updated.is_none());

    let unchanged = repo.get_by_id(income.id, owner.id).await?.unwrap();
    assert_eq!(unchanged.amount, income.amount);

    Ok(())
}
