//! Integration tests for the generation strategies.

mod common;

use std::path::PathBuf;

use docgen_assemble::{AssembleError, DocumentAssembler, SessionId};
use docgen_model::{SheetRole, TemplateId};

use common::{
    FailingRenderer, JsonRenderer, MemoryStore, MemoryWriter, PassThroughConverter, tagged_row,
    written_fields,
};

fn assembler(
    writer: MemoryWriter,
) -> DocumentAssembler<MemoryStore, JsonRenderer, PassThroughConverter, MemoryWriter> {
    DocumentAssembler::new(
        MemoryStore { missing: false },
        JsonRenderer,
        PassThroughConverter,
        writer,
        PathBuf::from("/tmp/docgen-out"),
        "/output",
    )
}

#[test]
fn unit_correlation_pairs_buckets_by_position() {
    let rows = vec![
        tagged_row(SheetRole::Unit, 0, &[("Unit_name", "หน่วยที่ 1: ไฟฟ้า")]),
        tagged_row(SheetRole::Unit, 1, &[("Unit_name", "หน่วยที่ 2: เชื่อม")]),
        tagged_row(SheetRole::Unit, 2, &[("Unit_name", "หน่วยที่ 3: กลึง")]),
        tagged_row(
            SheetRole::Content,
            0,
            &[("content", "เนื้อหา ก"), ("references", "ตำรา ก")],
        ),
        tagged_row(SheetRole::Content, 1, &[("content", "เนื้อหา ข")]),
        tagged_row(SheetRole::Test, 0, &[("test", "ข้อสอบ ก"), ("answers", "เฉลย ก")]),
    ];

    let writer = MemoryWriter::default();
    let session = SessionId::generate();
    let documents = assembler(writer.clone())
        .assemble(&rows, TemplateId::KnowledgeSheet, &session)
        .unwrap();

    // 3 unit rows, 2 content rows, 1 test row: exactly one document per
    // unit row.
    assert_eq!(documents.len(), 3);

    let written = writer.written.lock().unwrap();
    let second = written_fields(&written[1].1);
    assert_eq!(second["content"], "เนื้อหา ข");
    assert_eq!(second["test"], "");
    assert_eq!(second["answers"], "");
    assert_eq!(second["unitNumber"], 2);
    assert_eq!(second["totalUnits"], 3);

    let third = written_fields(&written[2].1);
    assert_eq!(third["content"], "");
    assert_eq!(third["references"], "");
    assert_eq!(third["test"], "");
}

#[test]
fn per_row_generates_one_document_per_row_with_sanitized_names() {
    let rows = vec![
        tagged_row(
            SheetRole::Unknown,
            0,
            &[("ชื่อวิชา", "งาน/ไฟฟ้า:เบื้องต้น?"), ("course_code", "20100")],
        ),
        tagged_row(SheetRole::Unknown, 1, &[("course_code", "20101")]),
        tagged_row(SheetRole::Unknown, 2, &[("อื่นๆ", "x")]),
    ];

    let writer = MemoryWriter::default();
    let session = SessionId::generate();
    let documents = assembler(writer.clone())
        .assemble(&rows, TemplateId::Course, &session)
        .unwrap();

    assert_eq!(documents.len(), 3);
    let short = session.short();
    // Hostile characters in the identifying field become underscores.
    assert_eq!(documents[0].name, format!("งาน_ไฟฟ้า_เบื้องต้น__{short}.docx"));
    // Second row falls through ชื่อวิชา to รหัสวิชา.
    assert_eq!(documents[1].name, format!("20101_{short}.docx"));
    // No identifying field at all.
    assert_eq!(documents[2].name, format!("document_3_{short}.docx"));
    assert!(documents[0].url.starts_with("/output/"));
    assert_eq!(documents[0].path, PathBuf::from("/tmp/docgen-out").join(&documents[0].name));
}

#[test]
fn flat_templates_prefix_the_template_identifier() {
    let rows = vec![
        tagged_row(SheetRole::Unknown, 0, &[("ใบงานที่", "1")]),
        tagged_row(SheetRole::Unknown, 1, &[("อื่นๆ", "x")]),
    ];

    let writer = MemoryWriter::default();
    let session = SessionId::generate();
    let documents = assembler(writer)
        .assemble(&rows, TemplateId::WorkSheet, &session)
        .unwrap();

    assert_eq!(documents.len(), 2);
    assert_eq!(
        documents[0].name,
        format!("work_sheet_1_{}.docx", session.short())
    );
    // Rows without an identifying field fall back to the template id and
    // row position, with the prefix applied exactly once.
    assert_eq!(
        documents[1].name,
        format!("work_sheet_2_{}.docx", session.short())
    );
}

#[test]
fn aggregate_template_emits_one_document_with_stripped_unit_names() {
    let rows = vec![
        tagged_row(SheetRole::Unit, 0, &[("Unit_name", "หน่วยที่ 1: งานไฟฟ้า")]),
        tagged_row(SheetRole::Unit, 1, &[("ชื่อหน่วย", "งานเชื่อม")]),
        tagged_row(SheetRole::Unit, 2, &[("หน่วยการเรียนรู้", "หน่วยที่ 3: งานกลึง")]),
        tagged_row(SheetRole::Content, 0, &[("content", "ไม่ถูกนับ")]),
    ];

    let writer = MemoryWriter::default();
    let session = SessionId::generate();
    let documents = assembler(writer.clone())
        .assemble(&rows, TemplateId::UnitName, &session)
        .unwrap();

    assert_eq!(documents.len(), 1);
    assert_eq!(
        documents[0].name,
        format!("Unit_Learning_{}.docx", session.short())
    );

    let written = writer.written.lock().unwrap();
    let fields = written_fields(&written[0].1);
    let units = fields["units"].as_array().unwrap();
    // Content rows are filtered out before aggregation.
    assert_eq!(units.len(), 3);
    assert_eq!(units[0]["name"], "งานไฟฟ้า");
    assert_eq!(units[1]["name"], "งานเชื่อม");
    assert_eq!(units[2]["name"], "งานกลึง");
    // Analysis columns are placeholders, never computed.
    assert_eq!(units[0]["theory"], "");
    assert_eq!(fields["totals"]["knowledge"], "");
}

#[test]
fn vocational_standard_builds_table_from_usable_rows_only() {
    let rows = vec![
        tagged_row(
            SheetRole::Unknown,
            0,
            &[
                ("มาตรฐานอาชีพ", "สาขาช่างไฟฟ้า\n\nช่างไฟฟ้าภายในอาคาร"),
                ("หน่วยสมรรถนะ (Unit of Competence)", "UOC-01\nติดตั้งระบบไฟฟ้า"),
                ("สมรรถนะย่อย (Element)", "E-01\nเดินสายไฟ"),
                ("เกณฑ์การปฏิบัติงาน", "ทำได้ถูกต้อง"),
            ],
        ),
        // No unit code, element code, or criteria: dropped silently.
        tagged_row(SheetRole::Unknown, 1, &[("วิธีการประเมิน", "สังเกต")]),
        tagged_row(
            SheetRole::Unknown,
            2,
            &[("สมรรถนะย่อย", "E-02")],
        ),
    ];

    let writer = MemoryWriter::default();
    let session = SessionId::generate();
    let documents = assembler(writer.clone())
        .assemble(&rows, TemplateId::VocationalStandard, &session)
        .unwrap();

    assert_eq!(documents.len(), 1);
    assert_eq!(
        documents[0].name,
        format!("Vocational_Standard_{}.docx", session.short())
    );

    let written = writer.written.lock().unwrap();
    let fields = written_fields(&written[0].1);
    assert_eq!(
        fields["มาตรฐานอาชีพ"],
        "สาขาช่างไฟฟ้า\n\nช่างไฟฟ้าภายในอาคาร"
    );
    let standards = fields["standards"].as_array().unwrap();
    assert_eq!(standards.len(), 2);
    assert_eq!(standards[0]["unitCode"], "UOC-01");
    assert_eq!(standards[0]["unitDescription"], "ติดตั้งระบบไฟฟ้า");
    assert_eq!(standards[0]["elementCode"], "E-01");
    assert_eq!(standards[0]["rowNumber"], 1);
    assert_eq!(standards[1]["rowNumber"], 3);
    assert_eq!(standards[1]["unitCode"], "");
}

#[test]
fn vocational_standard_without_usable_rows_fails() {
    let rows = vec![tagged_row(SheetRole::Unknown, 0, &[("วิธีการประเมิน", "สังเกต")])];

    let err = assembler(MemoryWriter::default())
        .assemble(&rows, TemplateId::VocationalStandard, &SessionId::generate())
        .unwrap_err();
    assert!(matches!(err, AssembleError::NoValidStandards));
}

#[test]
fn learning_plan_emits_one_document_per_unit_row() {
    let rows = vec![
        tagged_row(
            SheetRole::Unit,
            0,
            &[
                ("Unit_name", "หน่วยที่ 1: งานไฟฟ้า"),
                ("Learning_content", "พื้นฐานวงจร"),
            ],
        ),
        tagged_row(SheetRole::Content, 0, &[("content", "ข้าม")]),
        tagged_row(SheetRole::Unit, 1, &[("ชื่อหน่วย", "งานเชื่อม")]),
    ];

    let writer = MemoryWriter::default();
    let session = SessionId::generate();
    let documents = assembler(writer.clone())
        .assemble(&rows, TemplateId::LearningManagementPlan, &session)
        .unwrap();

    assert_eq!(documents.len(), 2);
    assert!(documents[0].name.starts_with("Learning_management_plan_"));

    let written = writer.written.lock().unwrap();
    let first = written_fields(&written[0].1);
    assert_eq!(first["Learning_content"], "พื้นฐานวงจร");
    // Extended fields resolve empty when the row does not carry them.
    assert_eq!(first["performanceCriteria"], "");
}

#[test]
fn missing_template_resource_is_rejected_up_front() {
    let assembler = DocumentAssembler::new(
        MemoryStore { missing: true },
        JsonRenderer,
        PassThroughConverter,
        MemoryWriter::default(),
        PathBuf::from("/tmp/docgen-out"),
        "/output",
    );
    let rows = vec![tagged_row(SheetRole::Unknown, 0, &[("a", "x")])];

    let err = assembler
        .assemble(&rows, TemplateId::Course, &SessionId::generate())
        .unwrap_err();
    assert!(matches!(
        err,
        AssembleError::TemplateNotFound { template: TemplateId::Course }
    ));
}

#[test]
fn empty_render_input_is_no_applicable_data() {
    // Knowledge_sheet renders unit rows only; content rows alone leave
    // nothing to render.
    let rows = vec![tagged_row(SheetRole::Content, 0, &[("content", "x")])];

    let err = assembler(MemoryWriter::default())
        .assemble(&rows, TemplateId::KnowledgeSheet, &SessionId::generate())
        .unwrap_err();
    assert!(matches!(
        err,
        AssembleError::NoApplicableData { template: TemplateId::KnowledgeSheet }
    ));
}

#[test]
fn render_failure_aborts_the_request() {
    let writer = MemoryWriter::default();
    let assembler = DocumentAssembler::new(
        MemoryStore { missing: false },
        FailingRenderer,
        PassThroughConverter,
        writer.clone(),
        PathBuf::from("/tmp/docgen-out"),
        "/output",
    );
    let rows = vec![
        tagged_row(SheetRole::Unknown, 0, &[("course_code", "1")]),
        tagged_row(SheetRole::Unknown, 1, &[("course_code", "2")]),
    ];

    let err = assembler
        .assemble(&rows, TemplateId::Course, &SessionId::generate())
        .unwrap_err();
    match err {
        AssembleError::DocumentRender { unit, message } => {
            assert_eq!(unit, "row 1");
            assert!(message.contains("render engine unavailable"));
        }
        other => panic!("unexpected error: {other}"),
    }
    // Nothing was written: the first failure stops the whole request.
    assert!(writer.written.lock().unwrap().is_empty());
}
