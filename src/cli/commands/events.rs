//! List events command handler

use crate::config::Config;
use crate::db::Store;

pub async fn cmd_list_events(config: &Config) -> anyhow::Result<()> {
    let store = Store::new(&config.general.database_path).await?;
    let events = store.list_events().await?;

    if events.is_empty() {
        println!("No events stored.");
        return Ok(());
    }

    println!("Events ({} total)", events.len());
    println!("{:-<70}", "");

    for event in events {
        // Stored end dates are exclusive; show the last included day instead.
        let last_day = event
            .end
            .as_deref()
            .and_then(|end| crate::models::event::parse_date(end).ok())
            .and_then(|end| end.pred_opt())
            .map(crate::models::event::format_date);

        let range = match last_day {
            Some(last) if last != event.start => format!("{} – {}", event.start, last),
            _ => event.start.clone(),
        };

        println!("#{:<5} {} {}", event.id, range, event.title);
        if !event.persons.is_empty() {
            println!("       {}", event.persons.join(", "));
        }
    }

    Ok(())
}
