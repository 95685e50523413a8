use super::*;

/// Tests updating an outflow's amount and date.
///
/// Expected: Ok(Some) with the new values stored
#[tokio::test]
async fn updates_own_record() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_expense_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (user, _, expense, outflow) =
        test_utils::factory::helpers::create_outflow_with_dependencies(db).await?;

    let new_date = NaiveDate::from_ymd_opt(2026, 8, 28).unwrap();
    let repo = OutflowRepository::new(db);
    let updated = repo
        .update(UpdateOutflowParams {
            id: outflow.id,
            owner_id: user.id,
            date: Some(new_date),
            year: outflow.year.clone(),
            month: outflow.month.clone(),
            expense_id: expense.id,
            description: Some("Groceries".to_string()),
            expense_name: outflow.expense_name.clone(),
            amount: Decimal::new(4_200, 2),
        })
        .await?;

    assert!(updated.is_some());
    let updated = updated.unwrap();
    assert_eq!(updated.date, Some(new_date));
    assert_eq!(updated.amount, Decimal::new(4_200, 2));
    assert_eq!(updated.description.as_deref(), Some("Groceries"));

    Ok(())
}

/// Tests that a user cannot update another user's record.
///
/// Expected: Ok(None)
#[tokio::test]
async fn cannot_update_other_owners_record() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_expense_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (owner, _, expense, outflow) =
        test_utils::factory::helpers::create_outflow_with_dependencies(db).await?;
    let intruder = factory::create_user(db).await?;

    let repo = OutflowRepository::new(db);
    let updated = repo
        .update(UpdateOutflowParams {
            id: outflow.id,
            owner_id: intruder.id,
            date: outflow.date,
            year: outflow.year.clone(),
            month: outflow.month.clone(),
            expense_id: expense.id,
            description: None,
            expense_name: outflow.expense_name.clone(),
            amount: Decimal::ZERO,
        })
        .await?;

    assert!(updated.is_none());

    let unchanged = repo.get_by_id(outflow.id, owner.id).await?.unwrap();
    assert_eq!(unchanged.amount, outflow.amount);

    Ok(())
}
