use dialoguer::{theme::ColorfulTheme, Select};

use crate::{
    cli::cli::MenuAction,
    models::{CliApp, Result},
};
use tracing::error;

impl CliApp {
    pub async fn run(&self) -> Result<()> {
        println!("\n🔍 Welcome to Contact Finder!");
        println!("═══════════════════════════════════════");
        println!("Uses public search results only. Rate limits may apply.");

        loop {
            let actions = vec![
                MenuAction::EmailToPhone,
                MenuAction::PhoneToEmail,
                MenuAction::Exit,
            ];

            let selection = Select::with_theme(&ColorfulTheme::default())
                .with_prompt("\nSelect a lookup")
                .default(0)
                .items(&actions)
                .interact()?;

            match actions[selection].lookup_mode() {
                Some(mode) => {
                    if let Err(e) = self.run_lookup(mode).await {
                        error!("Lookup failed: {}", e);
                    }
                }
                None => {
                    println!("\n👋 Thanks for using Contact Finder!");
                    break;
                }
            }
        }

        Ok(())
    }
}
