// src/cli/run_lookup.rs
use dialoguer::{theme::ColorfulTheme, Confirm, Input};

use crate::models::{CliApp, LookupMode, LookupRequest, Result};
use crate::pipeline::LookupEvent;

impl CliApp {
    pub async fn run_lookup(&self, mode: LookupMode) -> Result<()> {
        println!("\n🔍 {} lookup", match mode {
            LookupMode::EmailToPhone => "Email → Phone",
            LookupMode::PhoneToEmail => "Phone → Email",
        });
        println!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");

        let value: String = Input::with_theme(&ColorfulTheme::default())
            .with_prompt(format!("Enter {}", mode.input_label()))
            .interact_text()?;

        let (min, max) = (
            self.config.search.min_results_per_query,
            self.config.search.max_results_per_query,
        );
        let results_per_query: usize = Input::with_theme(&ColorfulTheme::default())
            .with_prompt(format!("Results per query ({}-{})", min, max))
            .default(self.config.search.results_per_query)
            .validate_with(|n: &usize| -> std::result::Result<(), String> {
                if (min..=max).contains(n) {
                    Ok(())
                } else {
                    Err(format!("Enter a value between {} and {}", min, max))
                }
            })
            .interact_text()?;

        if !Confirm::with_theme(&ColorfulTheme::default())
            .with_prompt("Start lookup?")
            .default(true)
            .interact()?
        {
            println!("❌ Lookup cancelled");
            return Ok(());
        }

        let request = LookupRequest {
            mode,
            value,
            results_per_query,
        };

        let progress = |event: LookupEvent| match event {
            LookupEvent::QueryStarted {
                index,
                total,
                query,
            } => {
                println!("\n🔎 [{}/{}] {}", index, total, query);
            }
            LookupEvent::SearchAborted { warning, .. } => {
                println!("  ⚠️  {}", warning);
            }
            LookupEvent::UrlFailed { url, warning } => {
                println!("  ⚠️  Skipped {}: {}", url, warning);
            }
            LookupEvent::UrlProcessed {
                url,
                phones,
                emails,
                social,
            } => {
                if phones.is_empty() && emails.is_empty() && social.is_empty() {
                    println!("  📄 {} - nothing new", url);
                    return;
                }
                if !phones.is_empty() {
                    println!("  📞 Found on {}: {}", url, phones.join(", "));
                }
                if !emails.is_empty() {
                    println!("  📧 Found on {}: {}", url, emails.join(", "));
                }
                for link in &social {
                    println!("  🔗 {}", link);
                }
            }
        };

        match self.pipeline.run(&request, Some(&progress)).await {
            Ok(report) => self.display_lookup_report(mode, &report),
            // Only validation errors cross the pipeline boundary.
            Err(e) => println!("\n❌ {}", e),
        }

        Ok(())
    }
}
