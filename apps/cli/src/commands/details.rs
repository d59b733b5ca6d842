//! Client, project and VAT fields. None of these can fail.

use quote_core::{ClientField, IdGenerator, ProjectCategory, ProjectField};

use crate::state::Session;

pub fn set_client<G: IdGenerator>(session: &mut Session<G>, field: ClientField, value: String) -> String {
    let reply = if value.is_empty() {
        format!("Cleared client {}", field.key())
    } else {
        format!("Client {} set", field.key())
    };
    session.state_mut().set_client_field(field, value);
    reply
}

pub fn set_project<G: IdGenerator>(session: &mut Session<G>, field: ProjectField, value: String) -> String {
    let name = match field {
        ProjectField::Name => "name",
        ProjectField::Description => "description",
    };
    let reply = if value.is_empty() {
        format!("Cleared project {name}")
    } else {
        format!("Project {name} set")
    };
    session.state_mut().set_project_field(field, value);
    reply
}

pub fn set_category<G: IdGenerator>(session: &mut Session<G>, category: Option<ProjectCategory>) -> String {
    session.state_mut().set_project_category(category);
    match category {
        Some(category) => format!("Project type: {}", category.label()),
        None => "Project type cleared".to_string(),
    }
}

pub fn set_vat<G: IdGenerator>(session: &mut Session<G>, applied: bool) -> String {
    session.state_mut().set_vat_applied(applied);
    if applied {
        "VAT will be added to the subtotal".to_string()
    } else {
        "VAT will not be applied".to_string()
    }
}

/// Every project type with the key to type for it.
pub fn categories() -> String {
    ProjectCategory::ALL
        .iter()
        .map(|category| format!("  {:<24} {}", category.key(), category.label()))
        .collect::<Vec<_>>()
        .join("\n")
}
