use super::*;

/// Tests listing income for one month.
///
/// Expected: Ok with only the requested period's records
#[tokio::test]
async fn filters_by_period() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_income_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let income_type = factory::create_income_type(db, user.id).await?;

    test_utils::factory::income::IncomeFactory::new(db, user.id, income_type.id)
        .year("2026")
        .month("08")
        .build()
        .await?;
    test_utils::factory::income::IncomeFactory::new(db, user.id, income_type.id)
        .year("2026")
        .month("07")
        .build()
        .await?;
    test_utils::factory::income::IncomeFactory::new(db, user.id, income_type.id)
        .year("2025")
        .month("08")
        .build()
        .await?;

    let repo = IncomeRepository::new(db);
    let incomes = repo.get_by_month(user.id, "2026", "08").await?;

    assert_eq!(incomes.len(), 1);
    assert_eq!(incomes[0].year, "2026");
    assert_eq!(incomes[0].month, "08");

    Ok(())
}

/// Tests that the month listing is owner-scoped.
///
/// Expected: Ok with another user's records for the same period excluded
#[tokio::test]
async fn excludes_other_owners_records() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_income_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let owner = factory::create_user(db).await?;
    let other = factory::create_user(db).await?;

    test_utils::factory::helpers::create_income_for_user(db, &owner).await?;
    test_utils::factory::helpers::create_income_for_user(db, &other).await?;

    let repo = IncomeRepository::new(db);
    let incomes = repo.get_by_month(owner.id, "2026", "08").await?;

    assert_eq!(incomes.len(), 1);

    Ok(())
}

/// Tests listing a month with no records.
///
/// Expected: Ok with empty vector
#[tokio::test]
async fn returns_empty_for_blank_month() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_income_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;

    let repo = IncomeRepository::new(db);
    let incomes = repo.get_by_month(user.id, "2026", "01").await?;

    assert!(incomes.is_empty());

    Ok(())
}
