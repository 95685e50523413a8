use super::*;

/// Tests creating a plan entry.
///
/// Expected: Ok with entry created
#[tokio::test]
async fn creates_plan_entry() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .with_table(entity::prelude::AnnualPlan)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;

    let repo = AnnualPlanRepository::new(db);
    let created = repo
        .create(CreateAnnualPlanParams {
            owner_id: user.id,
            year: "2026".to_string(),
            month: "12".to_string(),
            goal: "Emergency fund".to_string(),
            target_amount: Decimal::new(100_000, 2),
            notes: Some("Transfer on payday".to_string()),
            achieved: None,
        })
        .await?;

    assert!(created.id > 0);
    assert_eq!(created.goal, "Emergency fund");
    assert_eq!(created.target_amount, Decimal::new(100_000, 2));
    assert!(created.achieved.is_none());

    Ok(())
}
