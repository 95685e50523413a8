use super::*;

/// Tests listing a month's outflows ordered by date.
///
/// Expected: Ok with records sorted chronologically
#[tokio::test]
async fn lists_month_ordered_by_date() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_expense_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let (_, expense) = test_utils::factory::helpers::create_expense_for_user(db, &user).await?;

    test_utils::factory::outflow::OutflowFactory::new(db, user.id, expense.id)
        .date(NaiveDate::from_ymd_opt(2026, 8, 20).unwrap())
        .build()
        .await?;
    test_utils::factory::outflow::OutflowFactory::new(db, user.id, expense.id)
        .date(NaiveDate::from_ymd_opt(2026, 8, 3).unwrap())
        .build()
        .await?;

    let repo = OutflowRepository::new(db);
    let outflows = repo.get_by_month(user.id, "2026", "08").await?;

    assert_eq!(outflows.len(), 2);
    assert_eq!(outflows[0].date, NaiveDate::from_ymd_opt(2026, 8, 3));
    assert_eq!(outflows[1].date, NaiveDate::from_ymd_opt(2026, 8, 20));

    Ok(())
}

/// Tests that the month listing excludes other periods and other owners.
///
/// Expected: Ok with only the owner's records for the requested period
#[tokio::test]
async fn filters_by_period_and_owner() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_expense_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let owner = factory::create_user(db).await?;
    let other = factory::create_user(db).await?;
    let (_, expense) = test_utils::factory::helpers::create_expense_for_user(db, &owner).await?;
    let (_, other_expense) =
        test_utils::factory::helpers::create_expense_for_user(db, &other).await?;

    test_utils::factory::outflow::OutflowFactory::new(db, owner.id, expense.id)
        .year("2026")
        .month("08")
        .build()
        .await?;
    test_utils::factory::outflow::OutflowFactory::new(db, owner.id, expense.id)
        .year("2026")
        .month("07")
        .date(NaiveDate::from_ymd_opt(2026, 7, 15).unwrap())
        .build()
        .await?;
    test_utils::factory::outflow::OutflowFactory::new(db, other.id, other_expense.id)
        .year("2026")
        .month("08")
        .build()
        .await?;

    let repo = OutflowRepository::new(db);
    let outflows = repo.get_by_month(owner.id, "2026", "08").await?;

    assert_eq!(outflows.len(), 1);
    assert_eq!(outflows[0].month, "08");

    Ok(())
}
