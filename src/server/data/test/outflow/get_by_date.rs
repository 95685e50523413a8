use super::*;

/// Tests listing outflows for one calendar day.
///
/// Expected: Ok with only that day's records
#[tokio::test]
async fn filters_by_exact_date() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_expense_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let (_, expense) = test_utils::factory::helpers::create_expense_for_user(db, &user).await?;

    let target = NaiveDate::from_ymd_opt(2026, 8, 15).unwrap();
    test_utils::factory::outflow::OutflowFactory::new(db, user.id, expense.id)
        .date(target)
        .build()
        .await?;
    test_utils::factory::outflow::OutflowFactory::new(db, user.id, expense.id)
        .date(NaiveDate::from_ymd_opt(2026, 8, 16).unwrap())
        .build()
        .await?;

    let repo = OutflowRepository::new(db);
    let outflows = repo.get_by_date(user.id, target).await?;

    assert_eq!(outflows.len(), 1);
    assert_eq!(outflows[0].date, Some(target));

    Ok(())
}

/// Tests a day with no records.
///
/// Expected: Ok with empty vector
#[tokio::test]
async fn returns_empty_for_blank_day() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_expense_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;

    let repo = OutflowRepository::new(db);
    let outflows = repo
        .get_by_date(user.id, NaiveDate::from_ymd_opt(2026, 1, 1).unwrap())
        .await?;

    assert!(outflows.is_empty());

    Ok(())
}
