//! The `show` summary and the `export` command.

use std::fmt::{self, Write as _};
use std::path::Path;

use chrono::NaiveDate;
use quote_core::{AmountFormatter, IdGenerator};

use crate::error::AppResult;
use crate::state::Session;

fn or_dash(value: &str) -> &str {
    if value.trim().is_empty() {
        "-"
    } else {
        value
    }
}

/// The quote as it stands: header fields, numbered rows and totals.
pub fn summary<G: IdGenerator>(session: &Session<G>) -> String {
    let mut out = String::new();
    // Writing into a String cannot fail.
    let _ = write_summary(session, &mut out);
    out
}

fn write_summary<G: IdGenerator>(session: &Session<G>, out: &mut String) -> fmt::Result {
    let state = session.state();
    let quote = state.quote();
    let pricing = state.pricing();
    let format = session.format();
    let totals = state.totals();

    writeln!(out, "Client:  {}", or_dash(&quote.client.name))?;
    writeln!(out, "Project: {}", or_dash(&quote.project.name))?;
    if let Some(category) = quote.project.category {
        writeln!(out, "Type:    {}", category.label())?;
    }
    writeln!(out, "Rate:    {}/hour", format.currency(pricing.hourly_rate()))?;
    writeln!(out)?;

    if quote.items.is_empty() {
        writeln!(out, "No activities yet. Use 'add <hours> <description>'.")?;
    }
    for (index, item) in quote.items.iter().enumerate() {
        writeln!(
            out,
            "{:>3}. {:<40} {:>7} {:>12}   [{}]",
            index + 1,
            item.description,
            format.hours(item.hours),
            format.currency(state.line_cost(item)),
            item.id
        )?;
    }

    writeln!(out)?;
    writeln!(out, "Total hours: {}", format.hours(totals.total_hours))?;
    writeln!(out, "Subtotal:    {}", format.currency(totals.subtotal))?;
    if quote.vat_applied {
        writeln!(
            out,
            "VAT ({}):   {}",
            format.percent(pricing.vat_rate()),
            format.currency(totals.vat)
        )?;
        write!(out, "TOTAL (VAT incl.): {}", format.currency(totals.grand_total))
    } else {
        write!(out, "TOTAL (excl. VAT): {}", format.currency(totals.grand_total))
    }
}

/// Writes the PDF and reports where it went.
pub fn export<G: IdGenerator>(
    session: &Session<G>,
    dir: Option<&Path>,
    issue_date: NaiveDate,
) -> AppResult<String> {
    let path = session.export(dir, issue_date)?;
    Ok(format!("Saved {}", path.display()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorCode;
    use crate::state::AppConfig;
    use quote_core::{ClientField, Money, SequentialIds, VatRate};

    fn session() -> Session<SequentialIds> {
        let config = AppConfig {
            hourly_rate: Money::from_cents(3500),
            vat_rate: VatRate::from_bps(2200),
            output_dir: std::env::temp_dir(),
        };
        Session::with_ids(config, SequentialIds::new()).unwrap()
    }

    #[test]
    fn test_summary_of_empty_quote() {
        let text = summary(&session());
        assert!(text.contains("Client:  -"));
        assert!(text.contains("No activities yet"));
        assert!(text.contains("TOTAL (VAT incl.): 0,00 €"));
    }

    #[test]
    fn test_summary_rows_and_totals() {
        let mut session = session();
        session
            .state_mut()
            .set_client_field(ClientField::Name, "Rossi S.r.l.");
        session.state_mut().add_item("Analisi", 2.0).unwrap();
        session.state_mut().add_item("Sviluppo", 3.5).unwrap();

        let text = summary(&session);

        assert!(text.contains("Client:  Rossi S.r.l."));
        assert!(text.contains("Rate:    35,00 €/hour"));
        assert!(text.contains("[item-2]"));
        assert!(text.contains("122,50 €"));
        assert!(text.contains("Subtotal:    192,50 €"));
        assert!(text.contains("VAT (22%):   42,35 €"));
        assert!(text.ends_with("TOTAL (VAT incl.): 234,85 €"));
    }

    #[test]
    fn test_summary_without_vat() {
        let mut session = session();
        session.state_mut().add_item("Analisi", 2.0).unwrap();
        session.state_mut().set_vat_applied(false);

        let text = summary(&session);

        assert!(!text.contains("VAT ("));
        assert!(text.ends_with("TOTAL (excl. VAT): 70,00 €"));
    }

    #[test]
    fn test_summary_rounds_quarter_hours_up() {
        let mut session = session();
        session.state_mut().add_item("Call", 0.25).unwrap();

        let text = summary(&session);

        assert!(text.contains("0.3h"), "{text}");
        assert!(text.contains("Total hours: 0.3h"));
    }

    #[test]
    fn test_export_of_empty_quote_is_an_error() {
        let err = export(&session(), None, NaiveDate::from_ymd_opt(2026, 10, 17).unwrap()).unwrap_err();
        assert_eq!(err.code, ErrorCode::DocumentError);
    }
}
