//! The generation engine: turns a tagged row set into rendered documents.
//!
//! Every strategy shares one per-output sequence: build a field map,
//! render it against the template resource, convert the markup to the
//! binary document format, write the binary, append a descriptor. The
//! first failure aborts the remaining outputs of the request.

use std::collections::BTreeMap;
use std::path::PathBuf;

use serde_json::{Value, json};

use docgen_model::{GenerationStrategy, SheetRole, TaggedRow, TemplateId};
use docgen_template::{map_row, spec_for, unit_title};

use crate::collaborators::{DocumentConverter, DocumentDescriptor, OutputWriter, Renderer, TemplateStore};
use crate::error::{AssembleError, Result};
use crate::select::apply_policy;
use crate::session::SessionId;

/// Characters that cannot appear in output filenames.
const HOSTILE_CHARS: [char; 9] = ['\\', '/', ':', '*', '?', '"', '<', '>', '|'];

/// Maximum length of the identifying segment of a filename, in chars.
const MAX_STEM_CHARS: usize = 100;

/// Learning_management_plan uses a shorter unit-name segment.
const LMP_STEM_CHARS: usize = 50;

/// Replaces path-hostile characters with `_` and truncates to
/// `max_chars` characters.
#[must_use]
pub fn sanitize_file_stem(raw: &str, max_chars: usize) -> String {
    raw.chars()
        .map(|c| if HOSTILE_CHARS.contains(&c) { '_' } else { c })
        .take(max_chars)
        .collect()
}

/// Drives render → convert → write for each output of a template.
pub struct DocumentAssembler<S, R, C, W> {
    store: S,
    renderer: R,
    converter: C,
    writer: W,
    output_dir: PathBuf,
    /// Prefix for the public-facing reference of each written document.
    public_base: String,
}

impl<S, R, C, W> DocumentAssembler<S, R, C, W>
where
    S: TemplateStore,
    R: Renderer,
    C: DocumentConverter,
    W: OutputWriter,
{
    pub fn new(
        store: S,
        renderer: R,
        converter: C,
        writer: W,
        output_dir: PathBuf,
        public_base: impl Into<String>,
    ) -> Self {
        Self {
            store,
            renderer,
            converter,
            writer,
            output_dir,
            public_base: public_base.into(),
        }
    }

    /// Generates every output document for one template.
    ///
    /// `rows` is the full merged row set; the template's render policy is
    /// applied here, independently of whatever the RowSelector persisted.
    pub fn assemble(
        &self,
        rows: &[TaggedRow],
        template: TemplateId,
        session: &SessionId,
    ) -> Result<Vec<DocumentDescriptor>> {
        if !self.store.exists(template) {
            return Err(AssembleError::TemplateNotFound { template });
        }
        let resource = self
            .store
            .load(template)
            .map_err(|e| AssembleError::DocumentRender {
                unit: format!("template {template}"),
                message: e.to_string(),
            })?;

        let spec = spec_for(template);
        let filtered = apply_policy(rows, spec.render_filter);
        if filtered.is_empty() {
            return Err(AssembleError::NoApplicableData { template });
        }
        tracing::info!(
            session = %session,
            template = %template,
            filtered = filtered.len(),
            total = rows.len(),
            "filtered rows for rendering"
        );

        match spec.strategy {
            GenerationStrategy::PerRow => self.per_row(&resource, &filtered, template, session, false),
            GenerationStrategy::PerRowFlat => {
                self.per_row(&resource, &filtered, template, session, true)
            }
            GenerationStrategy::SingleAggregate => {
                self.single_aggregate(&resource, &filtered, template, session)
            }
            GenerationStrategy::UnitCorrelated => {
                self.unit_correlated(&resource, rows, template, session)
            }
            GenerationStrategy::UnitMultiOutput => {
                self.unit_multi_output(&resource, &filtered, template, session)
            }
            GenerationStrategy::FirstRowTable => {
                self.first_row_table(&resource, &filtered, template, session)
            }
        }
    }

    /// One document per row.
    ///
    /// With `prefix_template` the output name carries the template
    /// identifier (the flat worksheet-style templates); without it the
    /// identifying field alone names the file (course-style templates).
    fn per_row(
        &self,
        resource: &str,
        rows: &[TaggedRow],
        template: TemplateId,
        session: &SessionId,
        prefix_template: bool,
    ) -> Result<Vec<DocumentDescriptor>> {
        let spec = spec_for(template);
        let mut documents = Vec::new();

        for (index, row) in rows.iter().enumerate() {
            let mapped = map_row(template, &row.values);
            let identifying = spec
                .filename_fields
                .iter()
                .filter_map(|field| mapped.get(field))
                .find(|value| !value.is_empty())
                .cloned();

            let stem = match (identifying, prefix_template) {
                (Some(value), true) => {
                    format!("{template}_{}", sanitize_file_stem(&value, MAX_STEM_CHARS))
                }
                (Some(value), false) => sanitize_file_stem(&value, MAX_STEM_CHARS),
                (None, true) => format!("{template}_{}", index + 1),
                (None, false) => format!("document_{}", index + 1),
            };

            let name = format!("{stem}_{}.docx", session.short());
            let fields = fields_to_json(&mapped);
            let label = format!("row {}", index + 1);
            documents.push(self.emit(resource, &fields, &name, &label, session)?);
        }

        Ok(documents)
    }

    /// One document per filtered unit row, extended field set.
    fn unit_multi_output(
        &self,
        resource: &str,
        rows: &[TaggedRow],
        template: TemplateId,
        session: &SessionId,
    ) -> Result<Vec<DocumentDescriptor>> {
        let mut documents = Vec::new();

        for (index, row) in rows.iter().enumerate() {
            let mapped = map_row(template, &row.values);
            let unit_name = mapped.get("Unit_name").cloned().unwrap_or_default();
            let stem = if unit_name.is_empty() {
                format!("Unit_{}", index + 1)
            } else {
                sanitize_file_stem(&unit_name, LMP_STEM_CHARS)
            };

            let name = format!("{template}_{stem}_{}.docx", session.short());
            let fields = fields_to_json(&mapped);
            let label = format!("unit {}", index + 1);
            documents.push(self.emit(resource, &fields, &name, &label, session)?);
        }

        Ok(documents)
    }

    /// One document summarizing all filtered rows as a unit list.
    ///
    /// Numeric analysis columns are emitted as empty placeholders, never
    /// computed.
    fn single_aggregate(
        &self,
        resource: &str,
        rows: &[TaggedRow],
        template: TemplateId,
        session: &SessionId,
    ) -> Result<Vec<DocumentDescriptor>> {
        let units: Vec<Value> = rows
            .iter()
            .map(|row| {
                let mapped = map_row(template, &row.values);
                let raw_name = mapped.get("ชื่อหน่วยการเรียนรู้").cloned().unwrap_or_default();
                unit_entry_placeholder(&unit_title(&raw_name))
            })
            .collect();

        tracing::info!(
            session = %session,
            template = %template,
            units = units.len(),
            "building aggregate unit document"
        );

        let fields = json!({
            "courseCode": "",
            "courseName": "",
            "credits": "",
            "theoryHours": "",
            "practiceHours": "",
            "units": units,
            "totalTheory": "",
            "totalPractice": "",
            "grandTotal": "",
            "totals": analysis_placeholders(),
        });

        let prefix = match template {
            TemplateId::UnitName => "Unit_Learning",
            _ => "Behavioral_Analysis",
        };
        let name = format!("{prefix}_{}.docx", session.short());
        let document = self.emit(resource, &fields, &name, "unit summary", session)?;
        Ok(vec![document])
    }

    /// One document per unit row, correlated positionally with content
    /// and test rows.
    ///
    /// Buckets are built from the FULL original row set, not the filtered
    /// one, and the i-th unit row is paired with the i-th content and
    /// i-th test rows purely by discovery order. Shorter buckets pad with
    /// empty fields.
    fn unit_correlated(
        &self,
        resource: &str,
        rows: &[TaggedRow],
        template: TemplateId,
        session: &SessionId,
    ) -> Result<Vec<DocumentDescriptor>> {
        let mut units: Vec<BTreeMap<&'static str, String>> = Vec::new();
        let mut contents: Vec<BTreeMap<&'static str, String>> = Vec::new();
        let mut tests: Vec<BTreeMap<&'static str, String>> = Vec::new();

        for row in rows {
            let mapped = map_row(template, &row.values);
            match row.role {
                SheetRole::Unit => units.push(mapped),
                SheetRole::Content => contents.push(mapped),
                SheetRole::Test => tests.push(mapped),
                SheetRole::Unknown => {}
            }
        }

        tracing::info!(
            session = %session,
            units = units.len(),
            contents = contents.len(),
            tests = tests.len(),
            "bucketed rows for positional correlation"
        );

        if units.is_empty() {
            return Err(AssembleError::NoUnitData);
        }

        let total_units = units.len();
        let mut documents = Vec::new();

        for (index, unit) in units.iter().enumerate() {
            // Positional zip with empty defaults: missing content or test
            // entries render as empty fields, not as errors.
            let content = contents.get(index);
            let test = tests.get(index);

            let field = |bucket: Option<&BTreeMap<&str, String>>, key: &str| {
                bucket
                    .and_then(|entry| entry.get(key).cloned())
                    .unwrap_or_default()
            };

            let unit_name = unit.get("Unit_name").cloned().unwrap_or_default();
            let fields = json!({
                "Unit_name": unit_name,
                "Outcom": unit.get("Outcom").cloned().unwrap_or_default(),
                "tpqi": unit.get("tpqi").cloned().unwrap_or_default(),
                "objective": unit.get("objective").cloned().unwrap_or_default(),
                "content": field(content, "content"),
                "references": field(content, "references"),
                "test": field(test, "test"),
                "answers": field(test, "answers"),
                "unitNumber": index + 1,
                "totalUnits": total_units,
            });

            let stem = if unit_name.is_empty() {
                format!("Unit_{}", index + 1)
            } else {
                sanitize_file_stem(&unit_name, MAX_STEM_CHARS)
            };
            let name = format!("{template}_{stem}_{}.docx", session.short());
            let label = format!("unit {}", index + 1);
            documents.push(self.emit(resource, &fields, &name, &label, session)?);
        }

        Ok(documents)
    }

    /// Exactly one document: header fields from the first filtered row, a
    /// table section from every row carrying standards data.
    fn first_row_table(
        &self,
        resource: &str,
        rows: &[TaggedRow],
        template: TemplateId,
        session: &SessionId,
    ) -> Result<Vec<DocumentDescriptor>> {
        let first = map_row(template, &rows[0].values);
        let standard_name = first.get("มาตรฐานอาชีพ").cloned().unwrap_or_default();

        let mut standards = Vec::new();
        for (index, row) in rows.iter().enumerate() {
            let mapped = map_row(template, &row.values);
            let unit_code = mapped.get("หน่วยสมรรถนะ").cloned().unwrap_or_default();
            let element_code = mapped.get("สมรรถนะย่อย").cloned().unwrap_or_default();
            let criteria = mapped.get("เกณฑ์การปฏิบัติงาน").cloned().unwrap_or_default();
            let assessment = mapped.get("วิธีการประเมิน").cloned().unwrap_or_default();

            // Rows without any identifying standards data are silently
            // dropped from the table.
            if unit_code.is_empty() && element_code.is_empty() && criteria.is_empty() {
                continue;
            }

            let (unit_code, unit_description) = split_code_and_description(&unit_code);
            let (element_code, element_description) = split_code_and_description(&element_code);

            standards.push(json!({
                "rowNumber": index + 1,
                "unitCode": unit_code,
                "unitDescription": unit_description,
                "elementCode": element_code,
                "elementDescription": element_description,
                "performanceCriteria": criteria,
                "assessment": assessment,
            }));
        }

        tracing::info!(
            session = %session,
            standards = standards.len(),
            rows = rows.len(),
            "extracted standards rows"
        );

        if standards.is_empty() {
            return Err(AssembleError::NoValidStandards);
        }

        let fields = json!({
            "มาตรฐานอาชีพ": standard_name,
            "standards": standards,
        });

        let name = format!("Vocational_Standard_{}.docx", session.short());
        let document = self.emit(resource, &fields, &name, "standards table", session)?;
        Ok(vec![document])
    }

    /// Shared render → convert → write sequence for one output unit.
    fn emit(
        &self,
        resource: &str,
        fields: &Value,
        name: &str,
        unit_label: &str,
        session: &SessionId,
    ) -> Result<DocumentDescriptor> {
        let render_failure = |message: String| AssembleError::DocumentRender {
            unit: unit_label.to_string(),
            message,
        };

        let markup = self
            .renderer
            .render(resource, fields)
            .map_err(|e| render_failure(e.to_string()))?;
        let bytes = self
            .converter
            .convert(&markup)
            .map_err(|e| render_failure(e.to_string()))?;

        let path = self.output_dir.join(name);
        self.writer
            .write(&path, &bytes)
            .map_err(|e| render_failure(e.to_string()))?;

        tracing::info!(session = %session, name, "generated document");

        Ok(DocumentDescriptor {
            name: name.to_string(),
            path,
            url: format!("{}/{name}", self.public_base),
        })
    }
}

/// Splits a multi-line cell into "first line = code, remaining lines =
/// description".
fn split_code_and_description(text: &str) -> (String, String) {
    let mut lines = text.lines().map(str::trim).filter(|l| !l.is_empty());
    let code = lines.next().unwrap_or_default().to_string();
    let description = lines.collect::<Vec<_>>().join(" ");
    (code, description)
}

fn fields_to_json(mapped: &BTreeMap<&'static str, String>) -> Value {
    let map: serde_json::Map<String, Value> = mapped
        .iter()
        .map(|(key, value)| ((*key).to_string(), Value::String(value.clone())))
        .collect();
    Value::Object(map)
}

fn analysis_placeholders() -> Value {
    json!({
        "knowledge": "",
        "understanding": "",
        "application": "",
        "analysis": "",
        "evaluation": "",
        "creation": "",
        "psychomotor": "",
        "affective": "",
        "practical": "",
        "total": "",
        "hours": "",
    })
}

fn unit_entry_placeholder(name: &str) -> Value {
    json!({
        "name": name,
        "theory": "",
        "practice": "",
        "knowledge": "",
        "understanding": "",
        "application": "",
        "analysis": "",
        "evaluation": "",
        "creation": "",
        "psychomotor": "",
        "affective": "",
        "practical": "",
        "total": "",
        "hours": "",
    })
}
