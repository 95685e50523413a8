use super::*;

/// Tests creating a monthly result with its derived columns.
///
/// Expected: Ok with raw totals and derived balances stored verbatim
#[tokio::test]
async fn stores_raw_and_derived_columns() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .with_table(entity::prelude::MonthlyResult)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;

    let params = CreateMonthlyResultParams {
        owner_id: user.id,
        year: "2026".to_string(),
        month: "08".to_string(),
        total_income: Decimal::new(300_000, 2),
        total_fixed_expenses: Decimal::new(120_000, 2),
        total_variable_expenses: Decimal::new(50_000, 2),
    };
    let derived = params.derived();

    let repo = MonthlyResultRepository::new(db);
    let created = repo.create(params, derived).await?;

    assert!(created.id > 0);
    assert_eq!(created.total_income, Decimal::new(300_000, 2));
    assert_eq!(created.available, Decimal::new(180_000, 2));
    assert_eq!(created.subtotal, Decimal::new(130_000, 2));
    assert_eq!(created.carry_over, created.subtotal);

    Ok(())
}
