// Create HR Record Use Case

use crate::domain::{
    Compensation, Documentation, EmployeeProfile, Exit, HistoryEvent, HrRecord, Osh, Resources,
    SocialSecurity,
};
use serde::{Deserialize, Serialize};

/// Flat HR input, one field per spreadsheet column
///
/// Lists default to empty; optional dates and free-text notes to null.
/// No further checks are made on the values.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HrRecordInput {
    // ----- Employee profile -----
    pub employee_id: String,
    pub first_name: String,
    pub last_name: String,
    pub id_document: String,
    pub birth_date: String,
    pub address: String,
    pub city: String,
    pub province: String,
    pub postal_code: String,
    pub phone: String,
    pub email: String,
    pub marital_status: String,
    pub dependents: i32,
    pub job_title: String,
    pub department: String,
    pub work_center: String,
    pub job_group: String,
    pub hire_date: String,
    pub contract_type: String,
    pub workday: String,
    pub schedule: String,
    pub probation_period: String,
    pub applicable_collective_agreement: String,

    // ----- Compensation -----
    pub base_salary_monthly: f64,
    pub allowances: f64,
    pub extra_payments: i32,
    pub extra_payments_prorated: bool,
    pub deductions: f64,
    pub withholding_rate: f64,
    pub bank_account_iban: String,
    pub estimated_company_cost: f64,
    #[serde(default)]
    pub compensation_notes: Option<String>,

    // ----- Documentation -----
    pub contract_signed: bool,
    #[serde(default)]
    pub contract_addenda: Vec<String>,
    pub id_copy: bool,
    #[serde(default)]
    pub degrees_certificates: Vec<String>,
    pub resume_cv: bool,
    pub gdpr_policies_signed: bool,
    pub code_of_ethics_signed: bool,
    pub osh_informed: bool,
    pub medical_clearance: bool,
    pub image_use_authorization: bool,
    pub last_documentation_update_date: Option<String>,

    // ----- History -----
    #[serde(default)]
    pub history: Vec<HistoryEvent>,

    // ----- Occupational safety & health -----
    pub role_risk_factors: String,
    pub osh_training_received: bool,
    pub osh_training_date: Option<String>,
    pub ppe_issued: bool,
    #[serde(default)]
    pub ppe_details: Option<String>,
    pub medical_fitness: String,
    pub medical_exam_date: Option<String>,
    #[serde(default)]
    pub osh_notes: Option<String>,

    // ----- Social security -----
    pub ss_affiliation_number: String,
    pub ss_enrollment_date: Option<String>,
    pub contribution_group: String,
    pub withholding_rate_ss: f64,
    #[serde(default)]
    pub applicable_bonuses: Vec<String>,

    // ----- Resources -----
    pub laptop_assigned: bool,
    pub mobile_phone_assigned: bool,
    pub access_card_assigned: bool,
    #[serde(default)]
    pub other_assets: Vec<String>,
    pub asset_delivery_date: Option<String>,
    pub asset_return_date: Option<String>,
    #[serde(default)]
    pub system_accesses: Vec<String>,
    #[serde(default)]
    pub assigned_licenses: Vec<String>,

    // ----- Exit -----
    pub termination_date: Option<String>,
    pub termination_reason: Option<String>,
    pub exit_interview_done: bool,
    pub severance_delivered: bool,
    pub employer_certificate_delivered: bool,
    pub assets_recovered: bool,
    #[serde(default)]
    pub exit_comments: Option<String>,
}

/// Build the nested HR record from the flat input
///
/// Pure field mapping: every input field lands under exactly one section key.
pub fn create_hr_record(input: HrRecordInput) -> HrRecord {
    HrRecord {
        profile: EmployeeProfile {
            employee_id: input.employee_id,
            first_name: input.first_name,
            last_name: input.last_name,
            id_document: input.id_document,
            birth_date: input.birth_date,
            address: input.address,
            city: input.city,
            province: input.province,
            postal_code: input.postal_code,
            phone: input.phone,
            email: input.email,
            marital_status: input.marital_status,
            dependents: input.dependents,
            job_title: input.job_title,
            department: input.department,
            work_center: input.work_center,
            job_group: input.job_group,
            hire_date: input.hire_date,
            contract_type: input.contract_type,
            workday: input.workday,
            schedule: input.schedule,
            probation_period: input.probation_period,
            applicable_collective_agreement: input.applicable_collective_agreement,
        },

        compensation: Compensation {
            base_salary_monthly: input.base_salary_monthly,
            allowances: input.allowances,
            extra_payments: input.extra_payments,
            extra_payments_prorated: input.extra_payments_prorated,
            deductions: input.deductions,
            withholding_rate: input.withholding_rate,
            bank_account_iban: input.bank_account_iban,
            estimated_company_cost: input.estimated_company_cost,
            notes: input.compensation_notes,
        },

        documentation: Documentation {
            contract_signed: input.contract_signed,
            contract_addenda: input.contract_addenda,
            id_copy: input.id_copy,
            degrees_certificates: input.degrees_certificates,
            resume_cv: input.resume_cv,
            gdpr_policies_signed: input.gdpr_policies_signed,
            code_of_ethics_signed: input.code_of_ethics_signed,
            osh_informed: input.osh_informed,
            medical_clearance: input.medical_clearance,
            image_use_authorization: input.image_use_authorization,
            last_documentation_update_date: input.last_documentation_update_date,
        },

        history: input.history,

        osh: Osh {
            role_risk_factors: input.role_risk_factors,
            osh_training_received: input.osh_training_received,
            osh_training_date: input.osh_training_date,
            ppe_issued: input.ppe_issued,
            ppe_details: input.ppe_details,
            medical_fitness: input.medical_fitness,
            medical_exam_date: input.medical_exam_date,
            notes: input.osh_notes,
        },

        social_security: SocialSecurity {
            affiliation_number: input.ss_affiliation_number,
            enrollment_date: input.ss_enrollment_date,
            contribution_group: input.contribution_group,
            withholding_rate: input.withholding_rate_ss,
            applicable_bonuses: input.applicable_bonuses,
        },

        resources: Resources {
            laptop_assigned: input.laptop_assigned,
            mobile_phone_assigned: input.mobile_phone_assigned,
            access_card_assigned: input.access_card_assigned,
            other_assets: input.other_assets,
            asset_delivery_date: input.asset_delivery_date,
            asset_return_date: input.asset_return_date,
            system_accesses: input.system_accesses,
            assigned_licenses: input.assigned_licenses,
        },

        exit: Exit {
            termination_date: input.termination_date,
            termination_reason: input.termination_reason,
            exit_interview_done: input.exit_interview_done,
            severance_delivered: input.severance_delivered,
            employer_certificate_delivered: input.employer_certificate_delivered,
            assets_recovered: input.assets_recovered,
            comments: input.exit_comments,
        },
    }
}

impl From<HrRecordInput> for HrRecord {
    fn from(input: HrRecordInput) -> Self {
        create_hr_record(input)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::hr_record::sample_input;
    use serde_json::json;

    #[test]
    fn test_sections_use_fixed_keys() {
        let record = create_hr_record(sample_input());
        let doc = serde_json::to_value(&record).unwrap();

        let keys: Vec<&str> = doc.as_object().unwrap().keys().map(|k| k.as_str()).collect();
        for expected in [
            "EmployeeProfile",
            "Compensation",
            "Documentation",
            "History",
            "OSH",
            "SocialSecurity",
            "Resources",
            "Exit",
        ] {
            assert!(keys.contains(&expected), "missing section {}", expected);
        }
        assert_eq!(keys.len(), 8);
    }

    #[test]
    fn test_profile_mapping() {
        let record = create_hr_record(sample_input());
        let doc = serde_json::to_value(&record).unwrap();
        let profile = &doc["EmployeeProfile"];

        assert_eq!(profile["EmployeeID"], "E001");
        assert_eq!(profile["FirstName"], "Ana");
        assert_eq!(profile["IDDocument"], "12345678Z");
        assert_eq!(profile["PostalCode"], "50001");
        assert_eq!(profile["Dependents"], 0);
        assert_eq!(profile["ApplicableCollectiveAgreement"], "Sector Servicios");
        assert_eq!(profile.as_object().unwrap().len(), 23);
    }

    #[test]
    fn test_acronym_keys() {
        let record = create_hr_record(sample_input());
        let doc = serde_json::to_value(&record).unwrap();

        assert_eq!(
            doc["Compensation"]["BankAccountIBAN"],
            "ES9121000418450200051332"
        );
        assert_eq!(doc["Documentation"]["IDCopy"], true);
        assert_eq!(doc["Documentation"]["ResumeCV"], true);
        assert_eq!(doc["Documentation"]["GDPRPoliciesSigned"], true);
        assert_eq!(doc["Documentation"]["OSHInformed"], true);
        assert_eq!(doc["OSH"]["OSHTrainingReceived"], true);
        assert_eq!(doc["OSH"]["OSHTrainingDate"], "2024-02-10");
        assert_eq!(doc["OSH"]["PPEIssued"], false);
        assert_eq!(doc["OSH"]["PPEDetails"], "");
    }

    #[test]
    fn test_renamed_inputs_land_in_section_keys() {
        let mut input = sample_input();
        input.compensation_notes = Some("bonus pending".to_string());
        input.osh_notes = Some("ergonomic chair".to_string());
        input.exit_comments = Some("n/a".to_string());
        input.withholding_rate = 15.0;
        input.withholding_rate_ss = 6.35;

        let doc = serde_json::to_value(create_hr_record(input)).unwrap();

        assert_eq!(doc["Compensation"]["Notes"], "bonus pending");
        assert_eq!(doc["OSH"]["Notes"], "ergonomic chair");
        assert_eq!(doc["Exit"]["Comments"], "n/a");
        assert_eq!(doc["Compensation"]["WithholdingRate"], 15.0);
        assert_eq!(doc["SocialSecurity"]["WithholdingRate"], 6.35);
        assert_eq!(doc["SocialSecurity"]["AffiliationNumber"], "12/1234567890");
    }

    #[test]
    fn test_absent_values_serialize_as_null() {
        let record = create_hr_record(sample_input());
        let doc = serde_json::to_value(&record).unwrap();

        assert!(doc["Exit"]["TerminationDate"].is_null());
        assert!(doc["Exit"]["TerminationReason"].is_null());
        assert!(doc["Resources"]["AssetReturnDate"].is_null());
        // Keys are present even when null
        assert!(doc["Exit"].as_object().unwrap().contains_key("TerminationDate"));
        assert_eq!(doc["Exit"].as_object().unwrap().len(), 7);
    }

    #[test]
    fn test_history_order_and_extra_keys() {
        let mut input = sample_input();
        input.history.push(
            HistoryEvent::new("2025-01-10", "Transfer", "Moved to Madrid office")
                .with_extra("approved_by", json!("E042")),
        );

        let doc = serde_json::to_value(create_hr_record(input)).unwrap();
        let history = doc["History"].as_array().unwrap();

        assert_eq!(history.len(), 2);
        assert_eq!(history[0]["event_type"], "Promotion");
        assert_eq!(history[1]["event_type"], "Transfer");
        assert_eq!(history[1]["approved_by"], "E042");
    }

    #[test]
    fn test_flat_json_defaults() {
        let mut value = serde_json::to_value(sample_input()).unwrap();
        let obj = value.as_object_mut().unwrap();
        for key in [
            "compensation_notes",
            "contract_addenda",
            "history",
            "other_assets",
            "termination_date",
            "exit_comments",
        ] {
            obj.remove(key);
        }

        let input: HrRecordInput = serde_json::from_value(value).unwrap();
        assert!(input.compensation_notes.is_none());
        assert!(input.contract_addenda.is_empty());
        assert!(input.history.is_empty());
        assert!(input.other_assets.is_empty());
        assert!(input.termination_date.is_none());
        assert!(input.exit_comments.is_none());
    }

    #[test]
    fn test_null_notes_stay_null() {
        let mut value = serde_json::to_value(sample_input()).unwrap();
        value["exit_comments"] = serde_json::Value::Null;
        value["ppe_details"] = serde_json::Value::Null;
        value["compensation_notes"] = serde_json::Value::Null;
        value["osh_notes"] = serde_json::Value::Null;

        let input: HrRecordInput = serde_json::from_value(value).unwrap();
        let doc = serde_json::to_value(create_hr_record(input)).unwrap();

        assert!(doc["Exit"]["Comments"].is_null());
        assert!(doc["OSH"]["PPEDetails"].is_null());
        assert!(doc["OSH"]["Notes"].is_null());
        assert!(doc["Compensation"]["Notes"].is_null());
        assert!(doc["Exit"].as_object().unwrap().contains_key("Comments"));
    }

    #[test]
    fn test_empty_notes_are_not_nulled() {
        let doc = serde_json::to_value(create_hr_record(sample_input())).unwrap();
        assert_eq!(doc["Exit"]["Comments"], "");
        assert_eq!(doc["OSH"]["PPEDetails"], "");
    }

    #[test]
    fn test_flat_json_missing_required_field() {
        let mut value = serde_json::to_value(sample_input()).unwrap();
        value.as_object_mut().unwrap().remove("employee_id");

        let result = serde_json::from_value::<HrRecordInput>(value);
        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("employee_id"));
    }

    #[test]
    fn test_nested_record_deserializes_back() {
        let record = create_hr_record(sample_input());
        let text = serde_json::to_string(&record).unwrap();

        let parsed: HrRecord = serde_json::from_str(&text).unwrap();
        assert_eq!(parsed, record);
    }
}
