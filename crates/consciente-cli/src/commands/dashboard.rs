use consciente_core::views::Dashboard;
use consciente_core::{Coach, Config};

use super::{block_on, print_json, signed_in_store, CmdResult};

pub fn run(with_insight: bool, json: bool) -> CmdResult {
    let (store, user) = signed_in_store()?;
    let entries = store.entries();

    let Some(dashboard) = Dashboard::build(&entries) else {
        if json {
            println!("null");
        } else {
            println!("Aún no hay datos. Registra tu primera entrada con `consciente entry`.");
        }
        return Ok(());
    };

    let insight = if with_insight {
        let config = Config::load()?;
        let coach = Coach::from_config(&config.feedback);
        block_on(coach.weekly_insight(&entries))?
    } else {
        String::new()
    };

    if json {
        return print_json(&serde_json::json!({
            "dashboard": dashboard,
            "insight": insight,
        }));
    }

    println!("Hola, {}.", user.name);
    println!();
    println!("Límites puestos:    {}", dashboard.summary.boundaries);
    println!("Audios escuchados:  {}", dashboard.summary.audios_listened);
    println!("Actividad física:   {}", dashboard.summary.physical_done);

    if !dashboard.tiredness.is_empty() {
        println!();
        println!("Nivel de cansancio (últimos límites):");
        for point in &dashboard.tiredness {
            println!("  {:<7} {:>2} {}", point.label, point.value, "█".repeat(point.value.into()));
        }
    }

    println!();
    println!("Distribución:");
    for slice in &dashboard.distribution {
        println!("  {:<8} {}", slice.name, slice.value);
    }

    if !insight.is_empty() {
        println!();
        println!("Resumen del coach:");
        println!("{insight}");
    }
    Ok(())
}
