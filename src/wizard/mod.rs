//! Import wizard orchestrator.
//!
//! A finite-state machine owning one import session. Two step sequences are
//! selected at construction time by the import kind; all state changes go
//! through named transitions. Uploads are guarded by a generation token so a
//! slow parse finishing after a newer upload (or after cancellation) is
//! discarded instead of applied.

use crate::assumptions::{Assumptions, GrowthMethod};
use crate::error::{LiftError, LiftResult};
use crate::ingest::WorkbookIngestor;
use crate::mapping::{
    self, ColumnMapping, DataType, MappingReport, BUSINESS_CATALOG, STATEMENT_CATALOG,
};
use crate::normalize::{normalize_business, normalize_statements};
use crate::types::{BusinessData, CellValue, FinancialStatements, UploadConfig, Workbook};

/// Which import flow the wizard runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImportKind {
    Business,
    Statements,
}

impl ImportKind {
    /// The step sequence for this flow.
    pub fn steps(&self) -> &'static [WizardStep] {
        match self {
            ImportKind::Business => &[
                WizardStep::Upload,
                WizardStep::Preview,
                WizardStep::Mapping,
                WizardStep::Complete,
            ],
            ImportKind::Statements => &[
                WizardStep::Upload,
                WizardStep::Preview,
                WizardStep::Assumptions,
                WizardStep::Complete,
            ],
        }
    }

    fn catalog(&self) -> &'static [mapping::CatalogEntry] {
        match self {
            ImportKind::Business => BUSINESS_CATALOG,
            ImportKind::Statements => STATEMENT_CATALOG,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WizardStep {
    Upload,
    Preview,
    Mapping,
    Assumptions,
    Complete,
}

impl WizardStep {
    pub fn name(&self) -> &'static str {
        match self {
            WizardStep::Upload => "upload",
            WizardStep::Preview => "preview",
            WizardStep::Mapping => "mapping",
            WizardStep::Assumptions => "assumptions",
            WizardStep::Complete => "complete",
        }
    }
}

/// Token identifying one upload attempt. Only the most recently issued
/// ticket may apply its result (last-write-wins).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UploadTicket(u64);

/// What a finished wizard hands to the import-complete collaborator.
#[derive(Debug, Clone, PartialEq)]
pub enum ImportOutcome {
    Business(BusinessData),
    Statements {
        statements: FinancialStatements,
        assumptions: Assumptions,
    },
}

/// One in-progress import session. Owns all wizard state exclusively;
/// dropped on cancellation, consumed on completion.
pub struct ImportWizard {
    kind: ImportKind,
    ingestor: WorkbookIngestor,
    step_index: usize,
    upload_generation: u64,
    file_name: Option<String>,
    workbook: Option<Workbook>,
    selected_sheet: usize,
    mappings: Vec<ColumnMapping>,
    statements: Option<FinancialStatements>,
    assumptions: Option<Assumptions>,
    last_error: Option<String>,
}

impl ImportWizard {
    pub fn new(kind: ImportKind, config: UploadConfig) -> Self {
        Self {
            kind,
            ingestor: WorkbookIngestor::new(config),
            step_index: 0,
            upload_generation: 0,
            file_name: None,
            workbook: None,
            selected_sheet: 0,
            mappings: Vec::new(),
            statements: None,
            assumptions: None,
            last_error: None,
        }
    }

    pub fn with_defaults(kind: ImportKind) -> Self {
        Self::new(kind, UploadConfig::default())
    }

    pub fn kind(&self) -> ImportKind {
        self.kind
    }

    pub fn step(&self) -> WizardStep {
        self.kind.steps()[self.step_index]
    }

    pub fn file_name(&self) -> Option<&str> {
        self.file_name.as_deref()
    }

    pub fn workbook(&self) -> Option<&Workbook> {
        self.workbook.as_ref()
    }

    pub fn statements(&self) -> Option<&FinancialStatements> {
        self.statements.as_ref()
    }

    pub fn assumptions(&self) -> Option<&Assumptions> {
        self.assumptions.as_ref()
    }

    pub fn mappings(&self) -> &[ColumnMapping] {
        &self.mappings
    }

    /// The error shown in the error-display sub-state, if any.
    pub fn last_error(&self) -> Option<&str> {
        self.last_error.as_deref()
    }

    //--------------------------------------------------------------------
    // Upload
    //--------------------------------------------------------------------

    /// Start an upload attempt. Issuing a new ticket invalidates every
    /// earlier one, so re-uploading while a parse is in flight makes the
    /// stale result a no-op when it lands.
    pub fn begin_upload(&mut self) -> UploadTicket {
        self.upload_generation += 1;
        tracing::debug!(generation = self.upload_generation, "upload started");
        UploadTicket(self.upload_generation)
    }

    /// Deliver the bytes of an upload attempt. Returns `Ok(false)` when the
    /// ticket is stale and the result was discarded. On ingest failure the
    /// wizard enters the error sub-state but keeps all previously completed
    /// step data intact.
    pub fn complete_upload(
        &mut self,
        ticket: UploadTicket,
        file_name: &str,
        bytes: Vec<u8>,
    ) -> LiftResult<bool> {
        if ticket.0 != self.upload_generation {
            tracing::debug!(
                ticket = ticket.0,
                current = self.upload_generation,
                "discarding stale upload result"
            );
            return Ok(false);
        }

        let workbook = match self.ingestor.ingest(file_name, bytes) {
            Ok(workbook) => workbook,
            Err(e) => {
                self.last_error = Some(e.to_string());
                return Err(e);
            }
        };

        // The statements flow has no mapping step: normalize immediately and
        // derive the assumptions before advancing.
        if self.kind == ImportKind::Statements {
            let statements = normalize_statements(&workbook);
            self.assumptions = Some(Assumptions::derive(&statements));
            self.statements = Some(statements);
        }

        self.last_error = None;
        self.file_name = Some(file_name.to_string());
        self.workbook = Some(workbook);
        self.selected_sheet = 0;
        self.mappings.clear();
        self.step_index = 1;
        tracing::info!(file = file_name, "upload complete, moved to preview");
        Ok(true)
    }

    //--------------------------------------------------------------------
    // Preview
    //--------------------------------------------------------------------

    pub fn sheet_names(&self) -> Vec<&str> {
        self.workbook.as_ref().map(Workbook::sheet_names).unwrap_or_default()
    }

    /// Select the sheet shown in the preview. Returns false for an unknown
    /// name; the selection is untouched.
    pub fn select_sheet(&mut self, name: &str) -> bool {
        if let Some(workbook) = &self.workbook {
            if let Some(idx) = workbook
                .sheets
                .iter()
                .position(|s| s.name.eq_ignore_ascii_case(name))
            {
                self.selected_sheet = idx;
                return true;
            }
        }
        false
    }

    /// Data rows of the currently selected sheet.
    pub fn preview_rows(&self) -> &[Vec<CellValue>] {
        self.workbook
            .as_ref()
            .and_then(|w| w.sheets.get(self.selected_sheet))
            .map(|s| s.rows.as_slice())
            .unwrap_or_default()
    }

    //--------------------------------------------------------------------
    // Mapping (business flow)
    //--------------------------------------------------------------------

    /// Run the field mapper over every sheet's header columns and store the
    /// accepted mappings. Returns the full advisory report.
    pub fn auto_map(&mut self) -> MappingReport {
        let columns = self.header_columns();
        let report = mapping::map_columns(&columns, self.kind.catalog());
        self.mappings = report.mappings.clone();
        report
    }

    /// Manually map (or remap) one source column. Unknown target ids are
    /// rejected so the mapping list only ever references catalog fields.
    pub fn set_mapping(&mut self, source_column: &str, target_field_id: &str) -> LiftResult<()> {
        let field = self
            .kind
            .catalog()
            .iter()
            .find(|f| f.id == target_field_id)
            .ok_or_else(|| {
                LiftError::InvalidTransition(format!("unknown catalog field '{target_field_id}'"))
            })?;

        let mapping = ColumnMapping {
            source_column: source_column.to_string(),
            target_field_id: field.id.to_string(),
            data_type: DataType::String,
            required: field.required,
        };

        match self
            .mappings
            .iter_mut()
            .find(|m| m.source_column == source_column)
        {
            Some(existing) => *existing = mapping,
            None => self.mappings.push(mapping),
        }
        Ok(())
    }

    /// Drop the mapping for one source column, if present.
    pub fn remove_mapping(&mut self, source_column: &str) {
        self.mappings.retain(|m| m.source_column != source_column);
    }

    /// Required catalog fields no current mapping targets.
    pub fn missing_required_fields(&self) -> Vec<String> {
        mapping::missing_required_fields(self.kind.catalog(), &self.mappings)
    }

    fn header_columns(&self) -> Vec<String> {
        let mut columns: Vec<String> = Vec::new();
        if let Some(workbook) = &self.workbook {
            for sheet in &workbook.sheets {
                for cell in &sheet.header {
                    if let CellValue::Text(s) = cell {
                        let name = s.trim();
                        if !name.is_empty() && !columns.iter().any(|c| c == name) {
                            columns.push(name.to_string());
                        }
                    }
                }
            }
        }
        columns
    }

    //--------------------------------------------------------------------
    // Assumptions (statements flow)
    //--------------------------------------------------------------------

    pub fn set_growth_method(&mut self, revenue: bool, method: GrowthMethod) -> LiftResult<()> {
        let statements = self.statements.clone().ok_or_else(|| {
            LiftError::InvalidTransition("no statements available for assumptions".to_string())
        })?;
        let assumptions = self.assumptions.get_or_insert_with(Assumptions::default);
        if revenue {
            assumptions.set_revenue_method(method, &statements);
        } else {
            assumptions.set_expense_method(method, &statements);
        }
        Ok(())
    }

    /// Mutable access for user adjustments on the assumptions step.
    pub fn assumptions_mut(&mut self) -> Option<&mut Assumptions> {
        self.assumptions.as_mut()
    }

    //--------------------------------------------------------------------
    // Transitions
    //--------------------------------------------------------------------

    /// Advance to the next step if the current step's guard is satisfied.
    pub fn next(&mut self) -> LiftResult<()> {
        self.check_guard()?;
        if self.step_index + 1 >= self.kind.steps().len() {
            return Err(LiftError::InvalidTransition(
                "already at the final step".to_string(),
            ));
        }
        self.step_index += 1;
        tracing::debug!(step = self.step().name(), "wizard advanced");
        Ok(())
    }

    /// Step back to the immediate predecessor. Never mutates computed data,
    /// so re-display is idempotent.
    pub fn back(&mut self) {
        if self.step_index > 0 {
            self.step_index -= 1;
            tracing::debug!(step = self.step().name(), "wizard stepped back");
        }
    }

    /// Abandon the session. All wizard state is discarded; completion
    /// collaborators are never invoked, and any in-flight upload ticket
    /// dies with the wizard.
    pub fn cancel(self) {
        tracing::info!(step = self.step().name(), "import cancelled");
    }

    /// Finish the import: runs the remaining normalization for the business
    /// flow, consumes the wizard, and yields the outcome for the
    /// import-complete collaborator.
    pub fn finish(mut self) -> LiftResult<ImportOutcome> {
        // Completing is legal from the step just before Complete (with that
        // step's guard satisfied), or once Complete has been reached.
        if self.step() != WizardStep::Complete {
            let pre_final = self.kind.steps().len() - 2;
            if self.step_index != pre_final {
                return Err(LiftError::InvalidTransition(format!(
                    "cannot complete from the {} step",
                    self.step().name()
                )));
            }
            self.next()?;
        }

        match self.kind {
            ImportKind::Business => {
                let workbook = self.workbook.as_ref().ok_or_else(|| {
                    LiftError::InvalidTransition("no workbook uploaded".to_string())
                })?;
                Ok(ImportOutcome::Business(normalize_business(workbook)))
            }
            ImportKind::Statements => {
                let statements = self.statements.take().ok_or_else(|| {
                    LiftError::InvalidTransition("statements not normalized".to_string())
                })?;
                let assumptions = self.assumptions.take().unwrap_or_default();
                Ok(ImportOutcome::Statements {
                    statements,
                    assumptions,
                })
            }
        }
    }

    fn check_guard(&self) -> LiftResult<()> {
        match self.step() {
            WizardStep::Upload => {
                if self.workbook.is_none() {
                    return Err(LiftError::InvalidTransition(
                        "no workbook uploaded".to_string(),
                    ));
                }
            }
            WizardStep::Preview => {
                if self.preview_rows().is_empty() {
                    return Err(LiftError::InvalidTransition(
                        "preview data is empty".to_string(),
                    ));
                }
                if self.kind == ImportKind::Statements && self.statements.is_none() {
                    return Err(LiftError::InvalidTransition(
                        "statements not normalized".to_string(),
                    ));
                }
            }
            WizardStep::Mapping => {
                if self.mappings.is_empty() {
                    return Err(LiftError::InvalidTransition(
                        "no column mappings recorded".to_string(),
                    ));
                }
            }
            WizardStep::Assumptions => {
                // Advisory-complete by construction: assumptions exist from
                // the moment statements were normalized.
                if self.assumptions.is_none() {
                    return Err(LiftError::InvalidTransition(
                        "assumptions not initialized".to_string(),
                    ));
                }
            }
            WizardStep::Complete => {
                return Err(LiftError::InvalidTransition(
                    "import already complete".to_string(),
                ));
            }
        }
        Ok(())
    }
}
