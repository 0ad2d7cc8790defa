//! Output formatting module

use std::io::Write;

use fleetwise_domain::service::InsuranceQuote;
use fleetwise_types::{OutputFormat, Result};

pub fn output_quote(out: &mut dyn Write, format: OutputFormat, quote: &InsuranceQuote) -> Result<()> {
    if format == OutputFormat::Json {
        writeln!(out, "{}", serde_json::to_string_pretty(quote)?)?;
        return Ok(());
    }

    writeln!(out, "Insurance Quote")?;
    writeln!(out, "===============")?;
    writeln!(out, "Vehicle:         {} {} ({})", quote.make, quote.model, quote.year)?;
    writeln!(out, "Kind:            {}", quote.kind.label())?;
    writeln!(out, "Base cost:       ${}", quote.base_cost)?;
    writeln!(out, "Surcharge:       ${}", quote.surcharge)?;
    writeln!(out, "{} Insurance Cost: ${}", quote.kind.label(), quote.displayed_cost)?;
    Ok(())
}

pub fn output_quotes(out: &mut dyn Write, format: OutputFormat, quotes: &[InsuranceQuote]) -> Result<()> {
    if format == OutputFormat::Json {
        writeln!(out, "{}", serde_json::to_string_pretty(quotes)?)?;
        return Ok(());
    }

    if quotes.is_empty() {
        writeln!(out, "No vehicles in roster")?;
        return Ok(());
    }

    writeln!(
        out,
        "{:<14} {:<16} {:<16} {:>6} {:>8} {:>8}",
        "Kind", "Make", "Model", "Year", "Base", "Total"
    )?;
    writeln!(out, "{}", "-".repeat(73))?;
    for quote in quotes {
        writeln!(
            out,
            "{:<14} {:<16} {:<16} {:>6} {:>8} {:>8}",
            quote.kind.label(),
            quote.make,
            quote.model,
            quote.year,
            format!("${}", quote.base_cost),
            format!("${}", quote.displayed_cost)
        )?;
    }

    let total: u64 = quotes.iter().map(|q| u64::from(q.displayed_cost)).sum();
    writeln!(out, "{}", "-".repeat(73))?;
    writeln!(out, "{} vehicle(s), total ${}", quotes.len(), total)?;
    Ok(())
}

/// `json` is already the rendered vehicle JSON
pub fn output_details(out: &mut dyn Write, format: OutputFormat, json: &str) -> Result<()> {
    match format {
        OutputFormat::Json => writeln!(out, "{}", json)?,
        OutputFormat::Table => writeln!(out, "Vehicle Details in JSON: {}", json)?,
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use fleetwise_types::VehicleKind;

    fn sample_quote() -> InsuranceQuote {
        InsuranceQuote {
            kind: VehicleKind::Car,
            make: "Toyota".to_string(),
            model: "Camry".to_string(),
            year: 2018,
            base_cost: 1000,
            surcharge: 100,
            displayed_cost: 1100,
        }
    }

    fn render<F>(f: F) -> String
    where
        F: FnOnce(&mut dyn Write) -> Result<()>,
    {
        let mut out = Vec::new();
        f(&mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_quote_table() {
        let text = render(|out| output_quote(out, OutputFormat::Table, &sample_quote()));
        assert!(text.contains("Vehicle:         Toyota Camry (2018)"));
        assert!(text.contains("Base cost:       $1000"));
        assert!(text.ends_with("Car Insurance Cost: $1100\n"));
    }

    #[test]
    fn test_quote_json() {
        let text = render(|out| output_quote(out, OutputFormat::Json, &sample_quote()));
        let value: serde_json::Value = serde_json::from_str(&text).unwrap();
        assert_eq!(value["kind"], "car");
        assert_eq!(value["displayed_cost"], 1100);
    }

    #[test]
    fn test_quotes_table_total() {
        let mut second = sample_quote();
        second.kind = VehicleKind::Truck;
        second.displayed_cost = 1600;
        let text = render(|out| output_quotes(out, OutputFormat::Table, &[sample_quote(), second]));
        assert!(text.contains("2 vehicle(s), total $2700"));
        assert!(text.contains("Truck"));
    }

    #[test]
    fn test_quotes_table_empty() {
        let text = render(|out| output_quotes(out, OutputFormat::Table, &[]));
        assert_eq!(text, "No vehicles in roster\n");
    }

    #[test]
    fn test_details_formats() {
        let json = r#"{"VehicleMake": "Ford", "VehicleModel": "F-150", "VehicleYear": 1980}"#;
        let table = render(|out| output_details(out, OutputFormat::Table, json));
        assert_eq!(table, format!("Vehicle Details in JSON: {}\n", json));
        let raw = render(|out| output_details(out, OutputFormat::Json, json));
        assert_eq!(raw, format!("{}\n", json));
    }
}
