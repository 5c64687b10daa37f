//! Per-template field synonym tables.
//!
//! Pure data: each template maps its canonical field names to an ordered
//! candidate-header list. Candidates are tried in order by
//! [`crate::fields::resolve`]; the lists encode every header spelling the
//! uploader conventions have produced so far (Thai-only, bilingual, and
//! English-only variants).

use docgen_model::TemplateId;

/// Canonical field name → ordered candidate headers.
pub type FieldSynonyms = &'static [(&'static str, &'static [&'static str])];

const COURSE: FieldSynonyms = &[
    ("หลักสูตร", &["หลักสูตร"]),
    ("ประเภทวิชา", &["ประเภทวิชา"]),
    ("รหัสวิชา", &["course_code"]),
    ("ชื่อวิชา", &["ชื่อวิชา ไทย", "subject_name_th", "ชื่อวิชา"]),
    ("ชื่อวิชาอังกฤษ", &["subject_name_en", "ชื่อวิชา อังกฤษ"]),
    ("ทฤษฎี", &["ทฤษฎี"]),
    ("ปฏิบัติ", &["ปฏิบัติ"]),
    ("หน่วยกิต", &["หน่วยกิต"]),
    ("อ้างอิงมาตรฐาน", &["refer"]),
    (
        "ผลลัพธ์รายวิชา",
        &["outcom", "ผลลัพธ์การเรียนรู้ระดับรายวิชา", "ผลลัพธ์รายวิชา"],
    ),
    ("จุดประสงค์รายวิชา", &["objective"]),
    ("สมรรถนะรายวิชา", &["competency"]),
    ("คำอธิบายรายวิชา", &["course_description"]),
    ("เครื่องมือ", &["เครื่องมือ/สิ่งนำมาสอน", "เครื่องมือ"]),
];

const UNIT_LIST: FieldSynonyms = &[(
    "ชื่อหน่วยการเรียนรู้",
    &["Unit_name", "ชื่อหน่วยการเรียนรู้", "หน่วยการเรียนรู้", "ชื่อหน่วย"],
)];

const VOCATIONAL_STANDARD: FieldSynonyms = &[
    ("มาตรฐานอาชีพ", &["มาตรฐานอาชีพ"]),
    ("หน้าที่หลัก", &["หน้าที่หลัก (Key Function)", "หน้าที่หลัก"]),
    (
        "หน่วยสมรรถนะ",
        &["หน่วยสมรรถนะ (Unit of Competence)", "หน่วยสมรรถนะ"],
    ),
    ("สมรรถนะย่อย", &["สมรรถนะย่อย (Element)", "สมรรถนะย่อย"]),
    (
        "เกณฑ์การปฏิบัติงาน",
        &[
            "เกณฑ์ในการปฏิบัติงาน (Performance Criteria)",
            "เกณฑ์การปฏิบัติงาน",
            "เกณฑ์ในการปฏิบัติงาน",
        ],
    ),
    ("วิธีการประเมิน", &["วิธีการประเมิน (Assessment)", "วิธีการประเมิน"]),
];

const LEARNING_MANAGEMENT_PLAN: FieldSynonyms = &[
    ("Unit_name", &["Unit_name", "ชื่อหน่วยการเรียนรู้", "ชื่อหน่วย"]),
    ("Outcom", &["Outcom", "ผลลัพธ์การเรียนรู้"]),
    ("tpqi", &["tpqi", "ตัวบ่งชี้"]),
    ("objective", &["objective", "วัตถุประสงค์"]),
    ("Learning_content", &["Learning_content", "เนื้อหาการเรียนรู้"]),
    (
        "Learning_activities",
        &["Learning_activities", "กิจกรรมการเรียนรู้"],
    ),
    ("learning_resources", &["learning_resources", "แหล่งการเรียนรู้"]),
    ("Evidence_learning", &["Evidence_learning", "หลักฐานการเรียนรู้"]),
    ("Evaluation", &["Evaluation", "การประเมินผล"]),
    ("performanceCriteria", &["performanceCriteria"]),
    ("assessmentMethod", &["assessmentMethod"]),
    ("performanceEvidence", &["performanceEvidence"]),
    ("knowledgeEvidence", &["knowledgeEvidence"]),
    ("vocationalIntegration", &["vocationalIntegration"]),
    ("assessmentCriteria", &["assessmentCriteria"]),
    ("assessmentTools", &["assessmentTools"]),
];

const KNOWLEDGE_SHEET: FieldSynonyms = &[
    ("Unit_name", &["Unit_name", "ชื่อหน่วยการเรียนรู้", "ชื่อหน่วย"]),
    ("Outcom", &["Outcom", "ผลลัพธ์การเรียนรู้"]),
    ("tpqi", &["tpqi", "ตัวบ่งชี้"]),
    ("objective", &["objective", "วัตถุประสงค์"]),
    ("content", &["content", "เนื้อหา"]),
    ("test", &["test", "แบบทดสอบ"]),
    ("references", &["references", "แหล่งอ้างอิง"]),
    ("answers", &["answers", "เฉลย"]),
];

const WORK_SHEET: FieldSynonyms = &[
    ("ใบงานที่", &["ใบงานที่"]),
    (
        "ผลลัพธ์การเรียนรู้จากการปฏิบัติงาน",
        &["ผลลัพธ์การเรียนรู้จากการปฏิบัติงาน"],
    ),
    ("สมรรถนะการปฏิบัติงาน", &["สมรรถนะการปฏิบัติงาน"]),
    ("จุดประสงค์เชิงพฤติกรรม", &["จุดประสงค์เชิงพฤติกรรม"]),
    ("เครื่องมือวัสดุและอุปกรณ์", &["เครื่องมือ วัสดุ และอุปกรณ์"]),
    ("คำแนะนำข้อควรระวัง", &["คำแนะนำ/ข้อควรระวัง"]),
    ("ขั้นตอนการปฏิบัติงาน", &["ขั้นตอนการปฏิบัติงาน"]),
    ("สรุปและวิจารณ์ผล", &["สรุปและวิจารณ์ผล"]),
    ("การประเมินผล", &["การประเมินผล"]),
    (
        "เอกสารอ้างอิงเอกสารค้นคว้าเพิ่มเติม",
        &["เอกสารอ้างอิง / เอกสารค้นคว้าเพิ่มเติม"],
    ),
];

const WORK_ASSIGNMENT: FieldSynonyms = &[
    ("ใบมอบหมายงานที่", &["ใบมอบหมายงานที่"]),
    ("ผลงานหรือผลการปฏิบัติงาน", &["ผลงานหรือผลการปฏิบัติงาน"]),
    ("สมรรถนะการปฏิบัติงาน", &["สมรรถนะการปฏิบัติงาน"]),
    ("จุดประสงค์เชิงพฤติกรรม", &["จุดประสงค์เชิงพฤติกรรม"]),
    ("รายละเอียดของงาน", &["รายละเอียดของงาน"]),
    ("กำหนดเวลาส่งงาน", &["กำหนดเวลาส่งงาน"]),
    ("แนวทางในการปฏิบัติงาน", &["แนวทางในการปฏิบัติงาน"]),
    ("แหล่งข้อมูลค้นคว้าเพิ่มเติม", &["แหล่งข้อมูลค้นคว้าเพิ่มเติม"]),
    ("การประเมินผล", &["การประเมินผล"]),
];

const ACTIVITY_DOCUMENTS: FieldSynonyms = &[
    ("ใบกิจกรรมที่", &["ใบกิจกรรมที่"]),
    (
        "ผลลัพธ์การเรียนรู้การปฏิบัติกิจกรรม",
        &["ผลลัพธ์การเรียนรู้การปฏิบัติกิจกรรม"],
    ),
    ("สมรรถนะประจำกิจกรรม", &["สมรรถนะประจำกิจกรรม"]),
    ("จุดประสงค์เชิงพฤติกรรม", &["จุดประสงค์เชิงพฤติกรรม"]),
    ("เครื่องมือ_วัสดุ_และอุปกรณ์", &["เครื่องมือ วัสดุ และอุปกรณ์"]),
    ("ขั้นตอนการปฏิบัติกิจกรรม", &["ขั้นตอนการปฏิบัติกิจกรรม"]),
    ("สรุปและอภิปรายผล", &["สรุปและอภิปรายผล"]),
    ("การประเมินผล", &["การประเมินผล"]),
    (
        "เอกสารอ้างอิง_เอกสารค้นคว้าเพิ่มเติม",
        &["เอกสารอ้างอิง / เอกสารค้นคว้าเพิ่มเติม"],
    ),
];

/// Returns the synonym table for a template.
#[must_use]
pub fn field_synonyms(template: TemplateId) -> FieldSynonyms {
    match template {
        TemplateId::Course => COURSE,
        TemplateId::KnowledgeSheet => KNOWLEDGE_SHEET,
        TemplateId::LearningManagementPlan => LEARNING_MANAGEMENT_PLAN,
        TemplateId::VocationalStandard => VOCATIONAL_STANDARD,
        TemplateId::WorkSheet => WORK_SHEET,
        TemplateId::WorkAssignment => WORK_ASSIGNMENT,
        TemplateId::UnitName | TemplateId::BehavioralAnalysisTable => UNIT_LIST,
        TemplateId::ActivityDocuments => ACTIVITY_DOCUMENTS,
    }
}
