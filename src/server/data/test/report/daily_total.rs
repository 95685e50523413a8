use super::*;

/// Tests summing one day's spending.
///
/// Expected: Ok with the day's outflows summed, other days excluded
#[tokio::test]
async fn sums_one_day() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_expense_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let (_, expense) = test_utils::factory::helpers::create_expense_for_user(db, &user).await?;

    let target = NaiveDate::from_ymd_opt(2026, 8, 15).unwrap();
    test_utils::factory::outflow::OutflowFactory::new(db, user.id, expense.id)
        .date(target)
        .amount(Decimal::new(2_000, 2))
        .build()
        .await?;
    test_utils::factory::outflow::OutflowFactory::new(db, user.id, expense.id)
        .date(target)
        .amount(Decimal::new(1_250, 2))
        .build()
        .await?;
    test_utils::factory::outflow::OutflowFactory::new(db, user.id, expense.id)
        .date(NaiveDate::from_ymd_opt(2026, 8, 16).unwrap())
        .amount(Decimal::new(9_999, 2))
        .build()
        .await?;

    let repo = ReportRepository::new(db);
    let total = repo
        .daily_total(user.id, target, "2026", "08")
        .await?
        .unwrap();

    assert_eq!(total.total, Decimal::new(3_250, 2));
    assert_eq!(total.date, target);
    assert_eq!(total.year, "2026");
    assert_eq!(total.month, "08");

    Ok(())
}

/// Tests a day without spending.
///
/// Expected: Ok(None), unlike the monthly total which zero-fills
#[tokio::test]
async fn blank_day_has_no_row() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_expense_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;

    let repo = ReportRepository::new(db);
    let total = repo
        .daily_total(
            user.id,
            NaiveDate::from_ymd_opt(2026, 1, 1).unwrap(),
            "2026",
            "01",
        )
        .await?;

    assert!(total.is_none());

    Ok(())
}
