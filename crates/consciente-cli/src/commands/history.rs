use consciente_core::views::history;

use super::{print_json, signed_in_store, CmdResult};

pub fn run(json: bool) -> CmdResult {
    let (store, _user) = signed_in_store()?;
    let items = history(&store.entries());

    if json {
        return print_json(&items);
    }
    if items.is_empty() {
        println!("Aún no hay registros.");
        return Ok(());
    }
    for item in items {
        match &item.badge {
            Some(badge) => println!("{}  [{badge}]", item.title),
            None => println!("{}", item.title),
        }
        println!("  {}", item.date);
        for (label, value) in &item.details {
            println!("  {label}: {value}");
        }
        if let Some(feedback) = &item.feedback {
            println!("  Coach AI dice: \"{feedback}\"");
        }
        println!();
    }
    Ok(())
}
