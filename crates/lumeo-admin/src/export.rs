// SPDX-FileCopyrightText: 2026 Lumeo Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! CSV export of lead rows for the admin dashboard.
//!
//! Exports exactly the rows it is given (the caller filters first), one
//! header line plus one line per lead, columns in fixed order. Absent
//! optionals export as empty cells; values are never truncated or
//! reordered.

use lumeo_core::error::LumeoError;
use lumeo_core::types::Lead;

/// Fixed column order of the export.
pub const CSV_COLUMNS: [&str; 8] = [
    "Name", "Email", "Company", "Phone", "Service", "Budget", "Status", "Date",
];

/// Serializes the given leads to CSV text.
pub fn leads_to_csv(leads: &[Lead]) -> Result<String, LumeoError> {
    let mut writer = csv::Writer::from_writer(Vec::new());

    writer
        .write_record(CSV_COLUMNS)
        .map_err(|e| LumeoError::Internal(format!("CSV header write failed: {e}")))?;

    for lead in leads {
        writer
            .write_record([
                lead.name.clone(),
                lead.email.clone(),
                lead.company.clone().unwrap_or_default(),
                lead.phone.clone().unwrap_or_default(),
                lead.service.to_string(),
                lead.budget.map(|b| b.to_string()).unwrap_or_default(),
                lead.status.to_string(),
                lead.created_at.format("%Y-%m-%d").to_string(),
            ])
            .map_err(|e| LumeoError::Internal(format!("CSV row write failed: {e}")))?;
    }

    let bytes = writer
        .into_inner()
        .map_err(|e| LumeoError::Internal(format!("CSV flush failed: {e}")))?;
    String::from_utf8(bytes)
        .map_err(|e| LumeoError::Internal(format!("CSV output was not UTF-8: {e}")))
}
