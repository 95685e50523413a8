use super::*;

/// Tests the per-month income vs. spending balance.
///
/// Expected: Ok with one line per recorded month, in chronological order,
/// balancing summed income against summed outflows
#[tokio::test]
async fn balances_income_against_outflows_per_month() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let income_type = factory::create_income_type(db, user.id).await?;
    let (_, expense) = test_utils::factory::helpers::create_expense_for_user(db, &user).await?;

    // July: income only
    test_utils::factory::income::IncomeFactory::new(db, user.id, income_type.id)
        .year("2026")
        .month("07")
        .amount(Decimal::new(200_000, 2))
        .build()
        .await?;

    // August: income and spending
    test_utils::factory::income::IncomeFactory::new(db, user.id, income_type.id)
        .year("2026")
        .month("08")
        .amount(Decimal::new(300_000, 2))
        .build()
        .await?;
    test_utils::factory::outflow::OutflowFactory::new(db, user.id, expense.id)
        .year("2026")
        .month("08")
        .amount(Decimal::new(40_000, 2))
        .build()
        .await?;

    let repo = ReportRepository::new(db);
    let months = repo.owned_money(user.id).await?;

    assert_eq!(months.len(), 2);

    assert_eq!(months[0].month, "07");
    assert_eq!(months[0].monthly_income, Decimal::new(200_000, 2));
    assert_eq!(months[0].fixed_expenses, Decimal::ZERO);
    assert_eq!(months[0].balance, Decimal::new(200_000, 2));

    assert_eq!(months[1].month, "08");
    assert_eq!(months[1].monthly_income, Decimal::new(300_000, 2));
    assert_eq!(months[1].fixed_expenses, Decimal::new(40_000, 2));
    assert_eq!(months[1].balance, Decimal::new(260_000, 2));

    Ok(())
}

/// Tests a month with only outflows.
///
/// Expected: Ok with zero income and a negative balance
#[tokio::test]
async fn shows_negative_balance_for_spending_only_month() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (user, _, _, outflow) =
        test_utils::factory::helpers::create_outflow_with_dependencies(db).await?;

    let repo = ReportRepository::new(db);
    let months = repo.owned_money(user.id).await?;

    assert_eq!(months.len(), 1);
    assert_eq!(months[0].monthly_income, Decimal::ZERO);
    assert_eq!(months[0].fixed_expenses, outflow.amount);
    assert_eq!(months[0].balance, -outflow.amount);

    Ok(())
}

/// Tests the single-month balance query.
///
/// Expected: Ok(Some) with the requested month's sums, Ok(None) for a month
/// with no records
#[tokio::test]
async fn balances_single_month() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let income_type = factory::create_income_type(db, user.id).await?;

    test_utils::factory::income::IncomeFactory::new(db, user.id, income_type.id)
        .year("2026")
        .month("08")
        .amount(Decimal::new(100_000, 2))
        .build()
        .await?;

    let repo = ReportRepository::new(db);

    let august = repo
        .owned_money_for_month(user.id, "2026", "08")
        .await?
        .unwrap();
    assert_eq!(august.monthly_income, Decimal::new(100_000, 2));
    assert_eq!(august.balance, Decimal::new(100_000, 2));

    let blank = repo.owned_money_for_month(user.id, "2026", "01").await?;
    assert!(blank.is_none());

    Ok(())
}
