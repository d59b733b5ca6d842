//! # Row Commands
//!
//! Adding, editing and removing activities.
//!
//! Adding validates (non-blank description, positive hours). Editing does
//! not: the quote keeps whatever description is typed and clamps bad hours
//! to zero, matching how a table row behaves while it is being edited.

use quote_core::{AmountFormatter, IdGenerator, LineItem, LineItemPatch};
use tracing::debug;

use crate::error::{AppError, AppResult};
use crate::state::Session;

fn describe<G: IdGenerator>(session: &Session<G>, row: usize, item: &LineItem) -> String {
    let format = session.format();
    format!(
        "#{row} {} ({}, {})",
        item.description,
        format.hours(item.hours),
        format.currency(session.state().line_cost(item))
    )
}

fn row_of<G: IdGenerator>(session: &Session<G>, id: &str) -> AppResult<(usize, LineItem)> {
    session
        .state()
        .items()
        .iter()
        .position(|item| item.id == id)
        .map(|index| (index + 1, session.state().items()[index].clone()))
        .ok_or_else(|| AppError::not_found("Row", id))
}

pub fn add<G: IdGenerator>(session: &mut Session<G>, description: &str, hours: f64) -> AppResult<String> {
    let id = session.state_mut().add_item(description, hours)?.id.clone();
    let (row, item) = row_of(session, &id)?;
    debug!(id = %id, row, "Item added");
    Ok(format!("Added {}", describe(session, row, &item)))
}

pub fn edit_description<G: IdGenerator>(
    session: &mut Session<G>,
    reference: &str,
    description: String,
) -> AppResult<String> {
    let id = session.resolve_row(reference)?;
    session
        .state_mut()
        .update_item(&id, LineItemPatch::description(description));
    let (row, item) = row_of(session, &id)?;
    Ok(format!("Updated {}", describe(session, row, &item)))
}

pub fn edit_hours<G: IdGenerator>(session: &mut Session<G>, reference: &str, hours: f64) -> AppResult<String> {
    let id = session.resolve_row(reference)?;
    session.state_mut().update_item(&id, LineItemPatch::hours(hours));
    let (row, item) = row_of(session, &id)?;
    Ok(format!("Updated {}", describe(session, row, &item)))
}

pub fn remove<G: IdGenerator>(session: &mut Session<G>, reference: &str) -> AppResult<String> {
    let id = session.resolve_row(reference)?;
    let (row, item) = row_of(session, &id)?;
    session.state_mut().remove_item(&id);
    debug!(id = %id, row, "Item removed");
    Ok(format!("Removed #{row} {}", item.description))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorCode;
    use crate::state::AppConfig;
    use quote_core::{Money, SequentialIds, VatRate};

    fn session() -> Session<SequentialIds> {
        let config = AppConfig {
            hourly_rate: Money::from_cents(3500),
            vat_rate: VatRate::from_bps(2200),
            output_dir: std::env::temp_dir(),
        };
        Session::with_ids(config, SequentialIds::new()).unwrap()
    }

    #[test]
    fn test_add_reports_row_and_cost() {
        let mut session = session();
        add(&mut session, "Analisi", 2.0).unwrap();
        let reply = add(&mut session, "  Sviluppo  ", 3.5).unwrap();
        assert_eq!(reply, "Added #2 Sviluppo (3.5h, 122,50 €)");
    }

    #[test]
    fn test_add_rejects_blank_description() {
        let mut session = session();
        let err = add(&mut session, "   ", 2.0).unwrap_err();
        assert_eq!(err.code, ErrorCode::ValidationError);
        assert!(session.state().items().is_empty());
    }

    #[test]
    fn test_edit_hours_clamps_negative_to_zero() {
        let mut session = session();
        add(&mut session, "Analisi", 2.0).unwrap();

        let reply = edit_hours(&mut session, "1", -3.0).unwrap();

        assert_eq!(reply, "Updated #1 Analisi (0.0h, 0,00 €)");
        assert_eq!(session.state().items()[0].hours, 0.0);
    }

    #[test]
    fn test_edit_description_by_id() {
        let mut session = session();
        add(&mut session, "Analisi", 2.0).unwrap();

        edit_description(&mut session, "item-1", "Analisi e stima".to_string()).unwrap();

        assert_eq!(session.state().items()[0].description, "Analisi e stima");
    }

    #[test]
    fn test_remove_then_rows_shift() {
        let mut session = session();
        add(&mut session, "Analisi", 2.0).unwrap();
        add(&mut session, "Sviluppo", 3.0).unwrap();

        assert_eq!(remove(&mut session, "1").unwrap(), "Removed #1 Analisi");
        assert_eq!(session.resolve_row("1").unwrap(), "item-2");
    }

    #[test]
    fn test_unknown_row() {
        let mut session = session();
        let err = remove(&mut session, "3").unwrap_err();
        assert_eq!(err.code, ErrorCode::NotFound);
        let err = edit_hours(&mut session, "3", 1.0).unwrap_err();
        assert_eq!(err.code, ErrorCode::NotFound);
    }
}
