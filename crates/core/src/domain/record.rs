// HR Record Domain Model

use super::history::HistoryEvent;
use serde::{Deserialize, Serialize};

/// Identifier assigned by the database to an inserted record (ObjectId hex)
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RecordId(String);

impl RecordId {
    pub fn new(s: impl Into<String>) -> Self {
        Self(s.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for RecordId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Employee personal and contractual data
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct EmployeeProfile {
    #[serde(rename = "EmployeeID")]
    pub employee_id: String,
    pub first_name: String,
    pub last_name: String,
    /// DNI/NIE/Passport
    #[serde(rename = "IDDocument")]
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
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Compensation {
    pub base_salary_monthly: f64,
    pub allowances: f64,
    pub extra_payments: i32,
    pub extra_payments_prorated: bool,
    pub deductions: f64,
    /// IRPF %
    pub withholding_rate: f64,
    #[serde(rename = "BankAccountIBAN")]
    pub bank_account_iban: String,
    pub estimated_company_cost: f64,
    #[serde(default)]
    pub notes: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Documentation {
    pub contract_signed: bool,
    pub contract_addenda: Vec<String>,
    #[serde(rename = "IDCopy")]
    pub id_copy: bool,
    pub degrees_certificates: Vec<String>,
    #[serde(rename = "ResumeCV")]
    pub resume_cv: bool,
    #[serde(rename = "GDPRPoliciesSigned")]
    pub gdpr_policies_signed: bool,
    pub code_of_ethics_signed: bool,
    /// PRL informed
    #[serde(rename = "OSHInformed")]
    pub osh_informed: bool,
    pub medical_clearance: bool,
    pub image_use_authorization: bool,
    pub last_documentation_update_date: Option<String>,
}

/// Occupational safety & health (PRL)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Osh {
    pub role_risk_factors: String,
    #[serde(rename = "OSHTrainingReceived")]
    pub osh_training_received: bool,
    #[serde(rename = "OSHTrainingDate")]
    pub osh_training_date: Option<String>,
    #[serde(rename = "PPEIssued")]
    pub ppe_issued: bool,
    #[serde(rename = "PPEDetails", default)]
    pub ppe_details: Option<String>,
    pub medical_fitness: String,
    pub medical_exam_date: Option<String>,
    #[serde(default)]
    pub notes: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct SocialSecurity {
    /// NAF
    pub affiliation_number: String,
    pub enrollment_date: Option<String>,
    pub contribution_group: String,
    /// IRPF %
    pub withholding_rate: f64,
    pub applicable_bonuses: Vec<String>,
}

/// Company assets and system access
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Resources {
    pub laptop_assigned: bool,
    pub mobile_phone_assigned: bool,
    pub access_card_assigned: bool,
    pub other_assets: Vec<String>,
    pub asset_delivery_date: Option<String>,
    pub asset_return_date: Option<String>,
    pub system_accesses: Vec<String>,
    pub assigned_licenses: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Exit {
    pub termination_date: Option<String>,
    pub termination_reason: Option<String>,
    pub exit_interview_done: bool,
    pub severance_delivered: bool,
    pub employer_certificate_delivered: bool,
    pub assets_recovered: bool,
    #[serde(default)]
    pub comments: Option<String>,
}

/// HR Record Entity (one document per employee)
///
/// Every key is always serialized; absent values become null.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HrRecord {
    #[serde(rename = "EmployeeProfile")]
    pub profile: EmployeeProfile,

    #[serde(rename = "Compensation")]
    pub compensation: Compensation,

    #[serde(rename = "Documentation")]
    pub documentation: Documentation,

    #[serde(rename = "History")]
    pub history: Vec<HistoryEvent>,

    #[serde(rename = "OSH")]
    pub osh: Osh,

    #[serde(rename = "SocialSecurity")]
    pub social_security: SocialSecurity,

    #[serde(rename = "Resources")]
    pub resources: Resources,

    #[serde(rename = "Exit")]
    pub exit: Exit,
}

impl HrRecord {
    pub fn employee_id(&self) -> &str {
        &self.profile.employee_id
    }
}
