//! Seed command: the demo roster in one commit

use crate::{
    storage::{ChangeSet, Created, HeroDatabase, NewHero, NewTeam},
    Result,
};

/// Teams linked from the hero side and from the team side, plus one hero
/// appended to a team after it was built.
pub fn demo_roster() -> ChangeSet {
    let mut changes = ChangeSet::new();

    let preventers = changes.team(NewTeam::new("Preventers", "Sharp Tower"));
    let z_force = changes.team(NewTeam::new("Z-Force", "Sister Margaret's Bar"));

    changes.hero(NewHero::new("Deadpond", "Dive Wilson").team(z_force));
    changes.hero(NewHero::new("Spider-Boy", "Pedro Parqueador").team(preventers));

    let mut wakanda = NewTeam::new("Wakanda", "Wakanda")
        .with_hero(NewHero::new("Black Lion", "Trevor Challa").age(35))
        .with_hero(NewHero::new("Princess Sure-E", "Sure-E").age(25));
    wakanda.heroes.push(NewHero::new("Rusty-Man", "Tommy Sharp").age(48));
    changes.team(wakanda);

    changes
}

/// Handle the seed command
pub fn handle_seed(db: &HeroDatabase) -> Result<Created> {
    db.create_db_and_tables()?;
    let created = db.create_with_relationships(demo_roster())?;

    println!(
        "✓ Created {} teams and {} heroes",
        created.teams.len(),
        created.heroes.len()
    );
    for hero in &created.heroes {
        println!(
            "  Hero {} {:?} team_id={}",
            hero.id,
            hero.name,
            hero.team_id
                .map(|id| id.to_string())
                .unwrap_or_else(|| "none".to_string())
        );
    }

    // Read one back explicitly to show the store agrees
    if let Some(spider_boy) = created.hero_named("Spider-Boy") {
        let fresh = db.refresh_hero(spider_boy)?;
        println!("Spider-Boy team (from store): {:?}", fresh.team_id);
    }

    Ok(created)
}
