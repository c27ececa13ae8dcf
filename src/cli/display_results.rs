use crate::models::{CliApp, LookupMode, LookupReport};

impl CliApp {
    pub fn display_lookup_report(&self, mode: LookupMode, report: &LookupReport) {
        println!("\n🎉 Lookup Summary");
        println!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");
        println!(
            "📊 Queries: {}/{} - URLs fetched: {} ({} failed)",
            report.queries_completed,
            report.queries_planned,
            report.urls_fetched,
            report.urls_failed
        );

        if report.phones.is_empty() {
            println!("📞 No phone numbers found");
        } else {
            println!("\n📞 Phone numbers ({}):", report.phones.len());
            for phone in &report.phones {
                println!("  • {}", phone);
            }
        }

        if report.emails.is_empty() {
            println!("📧 No email addresses found");
        } else {
            println!("\n📧 Email addresses ({}):", report.emails.len());
            for email in &report.emails {
                println!("  • {}", email);
            }
        }

        if report.social.is_empty() {
            println!("🔗 No social profiles found");
        } else {
            println!("\n🔗 Social profiles:");
            for (platform, links) in &report.social {
                println!("  {} ({}):", platform, links.len());
                for link in links {
                    println!("    • {}", link);
                }
            }
        }

        if !report.warnings.is_empty() {
            println!("\n⚠️  Warnings ({}):", report.warnings.len());
            for warning in report.warnings.iter().take(5) {
                println!("  • {}", warning);
            }
            if report.warnings.len() > 5 {
                println!("  ... and {} more", report.warnings.len() - 5);
            }
        }

        if report.total_contacts() == 0 {
            println!(
                "\n💡 No {} discovered this time. Try a higher result count.",
                mode.target_label()
            );
        }
    }
}
