//! Base content population, reusing the server's migration and seeder.

use diesel_async::AsyncPgConnection;

use modsite_server::{migration, seeder};

pub async fn run(conn: &mut AsyncPgConnection, target: &str) -> eyre::Result<()> {
    migration::run_migration(conn)
        .await
        .map_err(|e| eyre::eyre!("{e}"))?;

    match target {
        "states" => {
            let inserted = seeder::seed_states(conn).await.map_err(|e| eyre::eyre!("{e}"))?;
            println!("states: {inserted} inserted");
        }
        "industries" => {
            let inserted = seeder::seed_industries(conn)
                .await
                .map_err(|e| eyre::eyre!("{e}"))?;
            println!("industries: {inserted} inserted");
        }
        "all" => {
            seeder::seed_base_content(conn)
                .await
                .map_err(|e| eyre::eyre!("{e}"))?;
            println!("base content populated");
        }
        other => eyre::bail!("unknown populate target '{other}' (states, industries, all)"),
    }

    Ok(())
}
