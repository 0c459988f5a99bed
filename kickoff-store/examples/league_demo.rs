//! End-to-end walkthrough of the league store
//!
//! Opens (or creates) the store under `KICKOFF_DATA_DIR`, seeds the
//! defaults, registers a player, attaches them to a team and prints the
//! league table and roster. Safe to run repeatedly.

use anyhow::Result;
use chrono::NaiveDate;
use kickoff_store::db::models::{EmergencyContact, PlayerCreate, UserCreate, UserUpdate};
use kickoff_store::db::{repository, seed};
use kickoff_store::{AppError, AuthService, Config, Store};

fn main() -> Result<()> {
    dotenv::dotenv().ok();
    kickoff_store::init_logger();

    let config = Config::from_env();
    std::fs::create_dir_all(&config.data_dir)?;
    let store = Store::open(config.store_path())?;
    seed::ensure_defaults(&store, &config.admin_email, &config.admin_password)?;

    let auth = AuthService::with_config(config.jwt.clone());

    // Admin session
    let admin_token = auth.login(&store, &config.admin_email, &config.admin_password)?;
    println!("admin logged in: is_admin = {}", auth.is_admin(Some(&admin_token)));

    // Player registration (idempotent across runs: fall back to login)
    let email = "sam.carter@example.com";
    let password = "kickoff2024!";
    let token = match auth.register(
        &store,
        UserCreate {
            email: email.to_string(),
            password: password.to_string(),
            full_name: "Sam Carter".to_string(),
            date_of_birth: NaiveDate::from_ymd_opt(1995, 3, 2).unwrap(),
            emergency_contact: EmergencyContact {
                name: "Alex Carter".to_string(),
                relationship: "sibling".to_string(),
                phone: "07700 900000".to_string(),
                email: None,
            },
        },
    ) {
        Ok((user, token)) => {
            println!("registered {} ({})", user.full_name, user.id);
            token
        }
        Err(AppError::Conflict(_)) => auth.login(&store, email, password)?,
        Err(e) => return Err(e.into()),
    };

    let current = auth
        .current_user(Some(&token))
        .ok_or_else(|| anyhow::anyhow!("token did not verify"))?;

    // Attach the player to the top team if they are not rostered yet
    let table = repository::team::find_all(&store)?;
    let top = table
        .first()
        .ok_or_else(|| anyhow::anyhow!("no teams in store"))?;
    if repository::user::find_team_of_user(&store, &current.id)?.is_none() {
        repository::user::update(
            &store,
            &current.id,
            UserUpdate {
                team_id: Some(top.id.clone()),
                ..Default::default()
            },
        )?;
        repository::player::create(
            &store,
            PlayerCreate {
                user_id: current.id.clone(),
                team_id: top.id.clone(),
            },
        )?;
        println!("attached {} to {}", current.email, top.name);
    }

    println!("\nLeague table:");
    for (pos, team) in table.iter().enumerate() {
        println!(
            "{:>2}. {:<20} P{} W{} D{} L{} GD{:+} pts {}",
            pos + 1,
            team.name,
            team.played,
            team.won,
            team.drawn,
            team.lost,
            team.goal_difference,
            team.points
        );
    }

    println!("\n{} roster:", top.name);
    for entry in repository::player::find_by_team_with_names(&store, &top.id)? {
        println!(
            "  {} - {} goals, {} assists",
            entry.name.as_deref().unwrap_or("(unknown)"),
            entry.player.goals,
            entry.player.assists
        );
    }

    store.close();
    Ok(())
}
