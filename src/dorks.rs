use crate::models::LookupMode;

/// Expands a validated value into the fixed sequence of search-engine
/// queries. Six variants, always in the same order: a plain intext probe,
/// a PDF filetype probe, two site-scoped probes, a contact-page probe and a
/// keyword-context probe whose OR-list depends on the lookup direction.
pub fn build_queries(mode: LookupMode, value: &str) -> Vec<String> {
    let keywords = match mode {
        LookupMode::EmailToPhone => r#""phone" OR "contact" OR "mobile""#,
        LookupMode::PhoneToEmail => r#""email" OR "contact" OR "mail""#,
    };

    vec![
        format!(r#"intext:"{value}""#),
        format!(r#""{value}" filetype:pdf"#),
        format!(r#""{value}" site:linkedin.com"#),
        format!(r#""{value}" site:facebook.com"#),
        format!(r#"inurl:contact intext:"{value}""#),
        format!(r#"intext:"{value}" ({keywords})"#),
    ]
}
