use anyhow::Result;
use client_registry::config::Config;
use client_registry::db;
use client_registry::models::{ClientPatch, ClientQuery, NewClient};

/// Example wiring for the registry: connect, walk every operation once,
/// print the results. The pool closes when it drops at the end of main.
#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::load()?;
    println!("Connecting to the client registry...");

    let db = db::init(&config).await?;
    db.ensure_schema().await?;
    println!("Database connection established");

    let client_id = db
        .add_client(&NewClient {
            first_name: Some("John".into()),
            last_name: Some("Doe".into()),
            email: Some("john.doe@example.com".into()),
            phones: Some(vec!["123456789".into(), "987654321".into()]),
        })
        .await?;
    println!("Added client with ID: {client_id}");

    db.add_phone(client_id, "555555555").await?;

    db.update_client(
        client_id,
        &ClientPatch::default()
            .first_name("Johnny")
            .phones(vec!["111111111".into(), "222222222".into()]),
    )
    .await?;

    let by_name = ClientQuery::default().first_name("Johnny");
    println!(
        "Client information after changes: {:?}",
        db.find_client(&by_name).await?
    );

    db.delete_phone(client_id, "111111111").await?;
    println!(
        "Client information after deleting a phone: {:?}",
        db.find_client(&by_name).await?
    );

    db.delete_client(client_id).await?;
    println!(
        "Client information after deleting the client: {:?}",
        db.find_client(&by_name).await?
    );

    Ok(())
}
