use super::*;

/// Tests listing a year's plan entries ordered by month.
///
/// Expected: Ok with only the requested year, sorted by month
#[tokio::test]
async fn lists_year_ordered_by_month() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .with_table(entity::prelude::AnnualPlan)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;

    test_utils::factory::annual_plan::AnnualPlanFactory::new(db, user.id)
        .year("2026")
        .month("11")
        .build()
        .await?;
    test_utils::factory::annual_plan::AnnualPlanFactory::new(db, user.id)
        .year("2026")
        .month("02")
        .build()
        .await?;
    test_utils::factory::annual_plan::AnnualPlanFactory::new(db, user.id)
        .year("2025")
        .month("06")
        .build()
        .await?;

    let repo = AnnualPlanRepository::new(db);
    let plans = repo.get_by_year(user.id, "2026").await?;

    assert_eq!(plans.len(), 2);
    assert_eq!(plans[0].month, "02");
    assert_eq!(plans[1].month, "11");

    Ok(())
}

/// Tests that the year listing is owner-scoped.
///
/// Expected: Ok with another user's entries excluded
#[tokio::test]
async fn excludes_other_owners_entries() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .with_table(entity::prelude::AnnualPlan)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let owner = factory::create_user(db).await?;
    let other = factory::create_user(db).await?;

    factory::create_plan(db, owner.id).await?;
    factory::create_plan(db, other.id).await?;

    let repo = AnnualPlanRepository::new(db);
    let plans = repo.get_by_year(owner.id, "2026").await?;

    assert_eq!(plans.len(), 1);

    Ok(())
}
