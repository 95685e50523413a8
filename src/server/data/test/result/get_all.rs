use super::*;

/// Tests listing results in chronological order.
///
/// Expected: Ok with results sorted by year, then month
#[tokio::test]
async fn lists_results_chronologically() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .with_table(entity::prelude::MonthlyResult)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;

    test_utils::factory::monthly_result::MonthlyResultFactory::new(db, user.id)
        .year("2026")
        .month("02")
        .build()
        .await?;
    test_utils::factory::monthly_result::MonthlyResultFactory::new(db, user.id)
        .year("2025")
        .month("12")
        .build()
        .await?;
    test_utils::factory::monthly_result::MonthlyResultFactory::new(db, user.id)
        .year("2026")
        .month("01")
        .build()
        .await?;

    let repo = MonthlyResultRepository::new(db);
    let results = repo.get_all(user.id).await?;

    assert_eq!(results.len(), 3);
    assert_eq!((results[0].year.as_str(), results[0].month.as_str()), ("2025", "12"));
    assert_eq!((results[1].year.as_str(), results[1].month.as_str()), ("2026", "01"));
    assert_eq!((results[2].year.as_str(), results[2].month.as_str()), ("2026", "02"));

    Ok(())
}

/// Tests that the listing is owner-scoped.
///
/// Expected: Ok with another user's results excluded
#[tokio::test]
async fn excludes_other_owners_results() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .with_table(entity::prelude::MonthlyResult)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let owner = factory::create_user(db).await?;
    let other = factory::create_user(db).await?;

    factory::create_result(db, owner.id).await?;
    factory::create_result(db, other.id).await?;

    let repo = MonthlyResultRepository::new(db);
    let results = repo.get_all(owner.id).await?;

    assert_eq!(results.len(), 1);

    Ok(())
}
