use std::env;

use dotenvy::dotenv;
use tracing::{error, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use assignment_tracker::{config, db, importer};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenv().ok();

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            env::var("RUST_LOG")
                .unwrap_or_else(|_| "import_assignments=info,assignment_tracker=info".to_string()),
        ))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let path = config::import_file(env::args().nth(1));
    let database_url = config::database_url();

    let pool = db::connect(&database_url).await?;
    info!("importing {} into {}", path, database_url);

    let result = importer::import_file(&pool, &path).await;
    pool.close().await;

    match result {
        Ok(count) => {
            info!("Assignments imported: {}", count);
            Ok(())
        }
        Err(e) => {
            error!("import failed: {}", e);
            Err(e.into())
        }
    }
}
