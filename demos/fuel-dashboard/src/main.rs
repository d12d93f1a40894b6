//! Terminal front end for a FuelControl backend.
//!
//! ```sh
//! fuelcontrol-dashboard [--url URL] [add LITERS [PRICE] [gasolina|etanol]]
//! fuelcontrol-dashboard [--url URL] delete ID
//! ```

use std::io::{self, BufRead, Write};

use fuelcontrol_sdk::{
    DeleteOutcome, DraftField, FuelControl, FuelType, LogId, SubmitOutcome,
};

/// Ask on stdin; anything but `y`/`yes` declines.
fn ask(prompt: &str) -> bool {
    print!("{} [y/N] ", prompt);
    let _ = io::stdout().flush();
    let mut line = String::new();
    if io::stdin().lock().read_line(&mut line).is_err() {
        return false;
    }
    matches!(line.trim().to_lowercase().as_str(), "y" | "yes")
}

fn parse_id(raw: &str) -> LogId {
    raw.parse::<i64>()
        .map(LogId::Number)
        .unwrap_or_else(|_| LogId::Text(raw.to_string()))
}

#[tokio::main]
async fn main() {
    let mut args: Vec<String> = std::env::args().skip(1).collect();
    let mut builder = FuelControl::builder();
    if args.first().map(String::as_str) == Some("--url") && args.len() > 1 {
        builder = builder.base_url(args[1].clone());
        args.drain(..2);
    }

    let mut app = match builder.build() {
        Ok(app) => app,
        Err(e) => {
            eprintln!("Failed to initialize FuelControl client: {}", e);
            std::process::exit(1);
        }
    };

    app.mount().await;

    match args.first().map(String::as_str) {
        Some("add") => {
            let controller = app.controller_mut();
            controller.show_add_form();
            controller.set_field(DraftField::Liters, args.get(1).cloned().unwrap_or_default());
            if let Some(price) = args.get(2) {
                controller.pick_price(price.clone());
            }
            if args.get(3).map(String::as_str) == Some("etanol") {
                controller.select_fuel_type(FuelType::Ethanol);
            }
            match app.submit().await {
                Ok(SubmitOutcome::Saved { .. }) => println!("Saved."),
                Ok(SubmitOutcome::Failed(e)) => eprintln!("Save failed: {}", e),
                Err(e) => eprintln!("{}", e),
            }
        }
        Some("delete") => {
            let Some(raw) = args.get(1) else {
                eprintln!("usage: delete ID");
                std::process::exit(2);
            };
            match app.delete(&parse_id(raw), &ask).await {
                DeleteOutcome::Cancelled => println!("Kept."),
                DeleteOutcome::Deleted(_) => println!("Deleted."),
                DeleteOutcome::Failed(e) => eprintln!("Delete failed: {}", e),
            }
        }
        Some(other) => {
            eprintln!("Unknown command: {}", other);
            std::process::exit(2);
        }
        None => {}
    }

    print!("{}", fuelcontrol_sdk::view::render(app.state()));
}
