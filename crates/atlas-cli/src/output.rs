//! Output formatting for the CLI.
//!
//! The `Formatter` is the rendering collaborator of the lookup pipeline:
//! it consumes a `LookupOutcome` and produces the text to paint, making no
//! decisions about lookup semantics.

use crate::config::OutputFormat;
use crate::error::Result;
use atlas_domain::{BorderResult, CountryRecord};
use atlas_lookup::LookupOutcome;
use colored::*;
use tabled::{
    builder::Builder,
    settings::{object::Rows, Alignment, Modify, Style},
};

/// Output formatter.
pub struct Formatter {
    format: OutputFormat,
    color_enabled: bool,
}

impl Formatter {
    /// Create a new formatter.
    pub fn new(format: OutputFormat, color_enabled: bool) -> Self {
        Self {
            format,
            color_enabled,
        }
    }

    /// Format a finished lookup for display.
    pub fn format_outcome(&self, outcome: &LookupOutcome) -> Result<String> {
        match outcome {
            LookupOutcome::Success { country, borders } => match self.format {
                OutputFormat::Json => self.format_success_json(country, borders),
                OutputFormat::Table => self.format_success_table(country, borders),
                OutputFormat::Quiet => self.format_success_quiet(country, borders),
            },
            LookupOutcome::Failure(err) => Ok(self.error(&err.to_string())),
        }
    }

    /// Format a successful lookup as JSON.
    fn format_success_json(
        &self,
        country: &CountryRecord,
        borders: &BorderResult,
    ) -> Result<String> {
        let json_borders: Vec<serde_json::Value> = borders
            .slots()
            .iter()
            .map(|slot| match slot {
                Some(neighbor) => serde_json::json!({
                    "name": neighbor.name,
                    "flag": neighbor.flag_url,
                }),
                // Absent slot: that neighbor's fetch failed
                None => serde_json::Value::Null,
            })
            .collect();

        let value = serde_json::json!({
            "country": {
                "name": country.name,
                "capital": country.capital,
                "population": country.population,
                "region": country.region,
                "flag": country.flag_url,
                "borders": country.borders.iter().map(|c| c.as_str()).collect::<Vec<_>>(),
            },
            "bordering_countries": json_borders,
        });

        Ok(serde_json::to_string_pretty(&value)?)
    }

    /// Format a successful lookup as a country panel plus a borders table.
    fn format_success_table(
        &self,
        country: &CountryRecord,
        borders: &BorderResult,
    ) -> Result<String> {
        let mut out = String::new();

        out.push_str(&self.colorize(&country.name, "cyan"));
        out.push('\n');
        out.push_str(&format!(
            "Capital:    {}\n",
            country.primary_capital().unwrap_or("N/A")
        ));
        out.push_str(&format!(
            "Population: {}\n",
            format_population(country.population)
        ));
        out.push_str(&format!("Region:     {}\n", country.region));
        out.push_str(&format!("Flag:       {}\n", country.flag_url));
        out.push('\n');

        if borders.is_empty() {
            out.push_str("No bordering countries.\n");
            return Ok(out);
        }

        out.push_str("Bordering countries:\n");

        let mut builder = Builder::default();
        builder.push_record(["Name", "Capital", "Flag"]);
        for neighbor in borders.present() {
            builder.push_record([
                neighbor.name.as_str(),
                neighbor.primary_capital().unwrap_or("N/A"),
                neighbor.flag_url.as_str(),
            ]);
        }

        let mut table = builder.build();
        table
            .with(Style::rounded())
            .with(Modify::new(Rows::first()).with(Alignment::center()));
        out.push_str(&table.to_string());
        out.push('\n');

        if borders.absent_count() > 0 {
            out.push('\n');
            out.push_str(&self.warning(&format!(
                "{} bordering country(ies) could not be fetched",
                borders.absent_count()
            )));
            out.push('\n');
        }

        Ok(out)
    }

    /// Format a successful lookup in quiet mode (names only).
    fn format_success_quiet(
        &self,
        country: &CountryRecord,
        borders: &BorderResult,
    ) -> Result<String> {
        let mut names = vec![country.name.clone()];
        names.extend(borders.present().map(|c| c.name.clone()));
        Ok(names.join("\n"))
    }

    /// Format a success message.
    pub fn success(&self, message: &str) -> String {
        self.colorize(&format!("✓ {}", message), "green")
    }

    /// Format an error message.
    pub fn error(&self, message: &str) -> String {
        self.colorize(&format!("✗ {}", message), "red")
    }

    /// Format an info message.
    pub fn info(&self, message: &str) -> String {
        self.colorize(&format!("ℹ {}", message), "blue")
    }

    /// Format a warning message.
    pub fn warning(&self, message: &str) -> String {
        self.colorize(&format!("⚠ {}", message), "yellow")
    }

    /// Colorize text if color is enabled.
    fn colorize(&self, text: &str, color: &str) -> String {
        if !self.color_enabled {
            return text.to_string();
        }

        match color {
            "red" => text.red().to_string(),
            "green" => text.green().to_string(),
            "blue" => text.blue().to_string(),
            "yellow" => text.yellow().to_string(),
            "cyan" => text.cyan().to_string(),
            "magenta" => text.magenta().to_string(),
            _ => text.to_string(),
        }
    }
}

/// Format a population count with thousands separators.
pub fn format_population(population: u64) -> String {
    let digits = population.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);

    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use atlas_domain::BorderCode;
    use atlas_lookup::LookupError;

    fn france() -> CountryRecord {
        CountryRecord {
            name: "France".to_string(),
            capital: vec!["Paris".to_string()],
            population: 67_391_582,
            region: "Europe".to_string(),
            flag_url: "https://flagcdn.com/fr.svg".to_string(),
            borders: vec![BorderCode::new("BEL")],
        }
    }

    fn belgium() -> CountryRecord {
        CountryRecord {
            name: "Belgium".to_string(),
            capital: vec!["Brussels".to_string()],
            population: 11_555_997,
            region: "Europe".to_string(),
            flag_url: "https://flagcdn.com/be.svg".to_string(),
            borders: vec![],
        }
    }

    #[test]
    fn test_format_population() {
        assert_eq!(format_population(0), "0");
        assert_eq!(format_population(999), "999");
        assert_eq!(format_population(1_000), "1,000");
        assert_eq!(format_population(67_391_582), "67,391,582");
    }

    #[test]
    fn test_table_format_country_panel() {
        let formatter = Formatter::new(OutputFormat::Table, false);
        let outcome = LookupOutcome::Success {
            country: france(),
            borders: BorderResult::from_slots(vec![Some(belgium())]),
        };

        let output = formatter.format_outcome(&outcome).unwrap();
        assert!(output.contains("France"));
        assert!(output.contains("Paris"));
        assert!(output.contains("67,391,582"));
        assert!(output.contains("Belgium"));
    }

    #[test]
    fn test_table_format_no_borders() {
        let formatter = Formatter::new(OutputFormat::Table, false);
        let mut island = france();
        island.borders.clear();

        let outcome = LookupOutcome::Success {
            country: island,
            borders: BorderResult::empty(),
        };

        let output = formatter.format_outcome(&outcome).unwrap();
        assert!(output.contains("No bordering countries."));
    }

    #[test]
    fn test_table_format_reports_absent_neighbors() {
        let formatter = Formatter::new(OutputFormat::Table, false);
        let outcome = LookupOutcome::Success {
            country: france(),
            borders: BorderResult::from_slots(vec![Some(belgium()), None]),
        };

        let output = formatter.format_outcome(&outcome).unwrap();
        assert!(output.contains("1 bordering country(ies) could not be fetched"));
    }

    #[test]
    fn test_json_format_keeps_absent_slots() {
        let formatter = Formatter::new(OutputFormat::Json, false);
        let outcome = LookupOutcome::Success {
            country: france(),
            borders: BorderResult::from_slots(vec![None, Some(belgium())]),
        };

        let output = formatter.format_outcome(&outcome).unwrap();
        let value: serde_json::Value = serde_json::from_str(&output).unwrap();
        let slots = value["bordering_countries"].as_array().unwrap();
        assert!(slots[0].is_null());
        assert_eq!(slots[1]["name"], "Belgium");
    }

    #[test]
    fn test_quiet_format_lists_names() {
        let formatter = Formatter::new(OutputFormat::Quiet, false);
        let outcome = LookupOutcome::Success {
            country: france(),
            borders: BorderResult::from_slots(vec![Some(belgium()), None]),
        };

        let output = formatter.format_outcome(&outcome).unwrap();
        assert_eq!(output, "France\nBelgium");
    }

    #[test]
    fn test_failure_renders_error_message() {
        let formatter = Formatter::new(OutputFormat::Table, false);
        let outcome = LookupOutcome::Failure(LookupError::CountryNotFound("Wakanda".to_string()));

        let output = formatter.format_outcome(&outcome).unwrap();
        assert!(output.contains("Country not found: Wakanda"));
    }
}
