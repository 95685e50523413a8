use super::*;

/// Tests creating an income record.
///
/// Expected: Ok with record created under the given period
#[tokio::test]
async fn creates_income() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_income_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let income_type = factory::create_income_type(db, user.id).await?;

    let repo = IncomeRepository::new(db);
    let created = repo
        .create(CreateIncomeParams {
            owner_id: user.id,
            year: "2026".to_string(),
            month: "08".to_string(),
            income_type_id: income_type.id,
            description: Some("August salary".to_string()),
            amount: Decimal::new(320_000, 2),
        })
        .await?;

    assert!(created.id > 0);
    assert_eq!(created.year, "2026");
    assert_eq!(created.month, "08");
    assert_eq!(created.amount, Decimal::new(320_000, 2));
    assert_eq!(created.description.as_deref(), Some("August salary"));

    Ok(())
}

/// Tests creating an income record without a description.
///
/// Expected: Ok with description stored as None
#[tokio::test]
async fn creates_income_without_description() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_income_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let income_type = factory::create_income_type(db, user.id).await?;

    let repo = IncomeRepository::new(db);
    let created = repo
        .create(CreateIncomeParams {
            owner_id: user.id,
            year: "2026".to_string(),
            month: "08".to_string(),
            income_type_id: income_type.id,
            description: None,
            amount: Decimal::new(5_000, 2),
        })
        .await?;

    assert!(created.description.is_none());

    Ok(())
}
