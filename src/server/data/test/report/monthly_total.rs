use super::*;

/// Tests summing a month's variable spending.
///
/// Expected: Ok with the month's outflows summed, other periods excluded
#[tokio::test]
async fn sums_one_month() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_expense_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let (_, expense) = test_utils::factory::helpers::create_expense_for_user(db, &user).await?;

    test_utils::factory::outflow::OutflowFactory::new(db, user.id, expense.id)
        .amount(Decimal::new(10_000, 2))
        .build()
        .await?;
    test_utils::factory::outflow::OutflowFactory::new(db, user.id, expense.id)
        .amount(Decimal::new(5_500, 2))
        .build()
        .await?;
    test_utils::factory::outflow::OutflowFactory::new(db, user.id, expense.id)
        .year("2026")
        .month("07")
        .date(NaiveDate::from_ymd_opt(2026, 7, 10).unwrap())
        .amount(Decimal::new(99_999, 2))
        .build()
        .await?;

    let repo = ReportRepository::new(db);
    let total = repo.monthly_total(user.id, "2026", "08").await?;

    assert_eq!(total.total, Decimal::new(15_500, 2));
    assert_eq!(total.year, "2026");
    assert_eq!(total.month, "08");

    Ok(())
}

/// Tests a month without spending.
///
/// Expected: Ok with a zero total
#[tokio::test]
async fn returns_zero_for_blank_month() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_expense_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;

    let repo = ReportRepository::new(db);
    let total = repo.monthly_total(user.id, "2026", "01").await?;

    assert_eq!(total.total, Decimal::ZERO);

    Ok(())
}
