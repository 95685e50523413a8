use super::*;

/// Tests updating a result recomputes its derived columns.
///
/// Expected: Ok(Some) with new raw totals and matching derived balances
#[tokio::test]
async fn updates_raw_totals_and_derived_columns() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .with_table(entity::prelude::MonthlyResult)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let result = factory::create_result(db, user.id).await?;

    let params = UpdateMonthlyResultParams {
        id: result.id,
        owner_id: user.id,
        year: result.year.clone(),
        month: result.month.clone(),
        total_income: Decimal::new(400_000, 2),
        total_fixed_expenses: Decimal::new(150_000, 2),
        total_variable_expenses: Decimal::new(100_000, 2),
    };
    let derived = params.derived();

    let repo = MonthlyResultRepository::new(db);
    let updated = repo.update(params, derived).await?;

    assert!(updated.is_some());
    let updated = updated.unwrap();
    assert_eq!(updated.total_income, Decimal::new(400_000, 2));
    assert_eq!(updated.available, Decimal::new(250_000, 2));
    assert_eq!(updated.subtotal, Decimal::new(150_000, 2));
    assert_eq!(updated.carry_over, Decimal::new(150_000, 2));

    Ok(())
}

/// Tests that a user cannot update another user's result.
///
/// Expected: Ok(None)
#[tokio::test]
async fn cannot_update_other_owners_result() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .with_table(entity::prelude::MonthlyResult)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let owner = factory::create_user(db).await?;
    let intruder = factory::create_user(db).await?;
    let result = factory::create_result(db, owner.id).await?;

    let params = UpdateMonthlyResultParams {
        id: result.id,
        owner_id: intruder.id,
        year: result.year.clone(),
        month: result.month.clone(),
        total_income: Decimal::ZERO,
        total_fixed_expenses: Decimal::ZERO,
        total_variable_expenses: Decimal::ZERO,
    };
    let derived = params.derived();

    let repo = MonthlyResultRepository::new(db);
    let updated = repo.update(params, derived).await?;

    assert!(updated.is_none());

    Ok(())
}
