use dotenvy::dotenv;

use markbook::logging::init_tracing;
use markbook::router::init_router;
use markbook::state::init_app_state;

#[tokio::main]
async fn main() {
    dotenv().ok();

    let args: Vec<String> = std::env::args().collect();

    if args.len() > 1 && args[1] == "create-school" {
        handle_create_school(args).await;
        return;
    }

    init_tracing();

    let state = init_app_state().await;
    let app = init_router(state);

    let listener = tokio::net::TcpListener::bind("0.0.0.0:3000").await.unwrap();
    println!("Server running on http://localhost:3000");
    println!("Swagger UI available at http://localhost:3000/swagger-ui");
    axum::serve(listener, app).await.unwrap();
}

async fn handle_create_school(args: Vec<String>) {
    if args.len() != 5 {
        eprintln!("Usage: {} create-school <school_code> <lga_code> <name>", args[0]);
        std::process::exit(1);
    }

    let school_code = &args[2];
    let lga_code = &args[3];
    let name = &args[4];

    let database_url = std::env::var("DATABASE_URL").expect("DATABASE_URL must be set");

    let pool = sqlx::postgres::PgPoolOptions::new()
        .max_connections(5)
        .connect(&database_url)
        .await
        .expect("Failed to connect to database");

    match markbook::cli::create_school(&pool, school_code, lga_code, name).await {
        Ok((school, pin)) => {
            println!("School created successfully!");
            println!("   Code: {}", school.school_code);
            println!("   Name: {}", school.name);
            println!("   PIN:  {}  (share out of band; it is not stored in plaintext)", pin);
        }
        Err(e) => {
            eprintln!("Error creating school: {}", e.error);
            std::process::exit(1);
        }
    }
}
