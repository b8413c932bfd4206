// Sample input (minimal realistic employee, used by `hrdoc example` and tests)

use super::create::HrRecordInput;
use crate::domain::HistoryEvent;

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

/// Build a complete sample input for a single employee
pub fn sample_input() -> HrRecordInput {
    HrRecordInput {
        employee_id: "E001".to_string(),
        first_name: "Ana".to_string(),
        last_name: "López".to_string(),
        id_document: "12345678Z".to_string(),
        birth_date: "1990-05-01".to_string(),
        address: "C/ Mayor 1".to_string(),
        city: "Zaragoza".to_string(),
        province: "Zaragoza".to_string(),
        postal_code: "50001".to_string(),
        phone: "+34 600 000 000".to_string(),
        email: "ana@example.com".to_string(),
        marital_status: "Single".to_string(),
        dependents: 0,
        job_title: "HR Specialist".to_string(),
        department: "HR".to_string(),
        work_center: "HQ".to_string(),
        job_group: "Group II".to_string(),
        hire_date: "2023-01-15".to_string(),
        contract_type: "Permanent".to_string(),
        workday: "Full-time".to_string(),
        schedule: "9-18".to_string(),
        probation_period: "2 months".to_string(),
        applicable_collective_agreement: "Sector Servicios".to_string(),

        base_salary_monthly: 1800.0,
        allowances: 200.0,
        extra_payments: 2,
        extra_payments_prorated: true,
        deductions: 0.0,
        withholding_rate: 15.0,
        bank_account_iban: "ES9121000418450200051332".to_string(),
        estimated_company_cost: 2500.0,
        compensation_notes: Some(String::new()),

        contract_signed: true,
        contract_addenda: Vec::new(),
        id_copy: true,
        degrees_certificates: strings(&["BA HR"]),
        resume_cv: true,
        gdpr_policies_signed: true,
        code_of_ethics_signed: true,
        osh_informed: true,
        medical_clearance: true,
        image_use_authorization: false,
        last_documentation_update_date: Some("2025-12-01".to_string()),

        history: vec![HistoryEvent::new(
            "2024-06-01",
            "Promotion",
            "Promoted to Specialist",
        )],

        role_risk_factors: "Office work".to_string(),
        osh_training_received: true,
        osh_training_date: Some("2024-02-10".to_string()),
        ppe_issued: false,
        ppe_details: Some(String::new()),
        medical_fitness: "Fit".to_string(),
        medical_exam_date: Some("2024-02-10".to_string()),
        osh_notes: Some(String::new()),

        ss_affiliation_number: "12/1234567890".to_string(),
        ss_enrollment_date: Some("2023-01-15".to_string()),
        contribution_group: "Group 5".to_string(),
        withholding_rate_ss: 15.0,
        applicable_bonuses: Vec::new(),

        laptop_assigned: true,
        mobile_phone_assigned: false,
        access_card_assigned: true,
        other_assets: Vec::new(),
        asset_delivery_date: Some("2023-01-15".to_string()),
        asset_return_date: None,
        system_accesses: strings(&["O365", "ERP"]),
        assigned_licenses: strings(&["MS365 E3"]),

        termination_date: None,
        termination_reason: None,
        exit_interview_done: false,
        severance_delivered: false,
        employer_certificate_delivered: false,
        assets_recovered: false,
        exit_comments: Some(String::new()),
    }
}
