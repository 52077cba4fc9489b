use grading::server::{config::Config, error::AppError, service::seed::SeedService, startup};

#[tokio::main]
async fn main() -> Result<(), AppError> {
    dotenvy::dotenv().ok();
    startup::init_tracing();

    let config = Config::from_env()?;
    let db = startup::connect_to_database(&config).await?;

    let summary = SeedService::new(&db).run().await?;

    tracing::info!(
        "Seeded course {} with {} tests, teacher {} and students {:?}",
        summary.course_id,
        summary.test_aggregates.len(),
        summary.teacher_id,
        summary.student_ids
    );

    db.close().await?;

    Ok(())
}
