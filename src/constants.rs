/// Source identifiers used on the CLI and in the normalization registry
pub const CHICAGO_SOURCE: &str = "chicago";
pub const DALLAS_SOURCE: &str = "dallas";

/// Workflow names stamped into `DI_WorkflowFileName`
pub const CHICAGO_WORKFLOW: &str = "chicago_food_inspections";
pub const DALLAS_WORKFLOW: &str = "dallas_food_inspections";

// Run metadata columns appended during staging
pub const DI_PROCESS_ID: &str = "DI_Process_ID";
pub const DI_CURRENT_DATE: &str = "DI_CurrentDate";
pub const DI_WORKFLOW_FILE_NAME: &str = "DI_WorkflowFileName";

// Shared source columns
pub const INSPECTION_DATE: &str = "Inspection Date";
pub const INSPECTION_TYPE: &str = "Inspection Type";

// Chicago source columns
pub const CHICAGO_VIOLATIONS: &str = "Violations";
pub const CHICAGO_INSPECTION_ID: &str = "Inspection ID";
pub const CHICAGO_DBA_NAME: &str = "DBA Name";
pub const CHICAGO_AKA_NAME: &str = "AKA Name";
pub const CHICAGO_LICENSE: &str = "License #";
pub const CHICAGO_FACILITY_TYPE: &str = "Facility Type";
pub const CHICAGO_RESULTS: &str = "Results";
pub const CHICAGO_ADDRESS: &str = "Address";
pub const CHICAGO_CITY: &str = "City";
pub const CHICAGO_STATE: &str = "State";
pub const CHICAGO_ZIP: &str = "Zip";
pub const CHICAGO_LATITUDE: &str = "Latitude";
pub const CHICAGO_LONGITUDE: &str = "Longitude";

// Chicago intermediate violation columns
pub const VIOLATION_CODE: &str = "Violation_Code";
pub const VIOLATION_DESCRIPTION: &str = "Violation_Description";
pub const VIOLATION_COMMENT: &str = "Violation_Comment";

// Dallas source columns
pub const DALLAS_RESTAURANT_NAME: &str = "Restaurant Name";
pub const DALLAS_STREET_ADDRESS: &str = "Street Address";
pub const DALLAS_ZIP_CODE: &str = "Zip Code";
pub const DALLAS_INSPECTION_SCORE: &str = "Inspection Score";
pub const DALLAS_LAT_LONG: &str = "Lat Long Location";

// Dallas intermediate violation columns
pub const VIOLATION_MEMO: &str = "Violation_Memo";
pub const VIOLATION_DETAIL: &str = "Violation_Detail";
pub const VIOLATION_POINTS: &str = "Violation_Points";

/// Dallas exports carry at most this many indexed violation groups
pub const DALLAS_MAX_VIOLATIONS: usize = 25;

/// Non-violation columns carried forward into the Dallas intermediate table, in output order
pub const DALLAS_PROJECTION: [&str; 14] = [
    DALLAS_RESTAURANT_NAME,
    "Street Number",
    "Street Name",
    "Street Type",
    "Street Direction",
    "Street Unit",
    DALLAS_STREET_ADDRESS,
    DALLAS_ZIP_CODE,
    INSPECTION_DATE,
    DALLAS_INSPECTION_SCORE,
    INSPECTION_TYPE,
    "Inspection Year",
    "Inspection Month",
    DALLAS_LAT_LONG,
];

/// Column names of the numbered Dallas violation group `index` (1-based)
pub fn dallas_violation_columns(index: usize) -> DallasViolationColumns {
    DallasViolationColumns {
        description: format!("Violation Description - {index}"),
        memo: format!("Violation Memo - {index}"),
        detail: format!("Violation Detail - {index}"),
        points: format!("Violation Points - {index}"),
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DallasViolationColumns {
    pub description: String,
    pub memo: String,
    pub detail: String,
    pub points: String,
}

// Sentinels for fields a source cannot supply
pub const UNKNOWN: &str = "UNKNOWN";
pub const UNKNOWN_ZIP: &str = "00000";
pub const DALLAS_FACILITY_TYPE: &str = "Restaurant";
pub const CHICAGO_STATE_DEFAULT: &str = "IL";
pub const DALLAS_STATE: &str = "TX";

/// Dallas inspection score at or above which an inspection passes
pub const DALLAS_PASSING_SCORE: f64 = 70.0;

/// Tableau Public's per-workbook cell ceiling
pub const TABLEAU_PUBLIC_CELL_LIMIT: usize = 15_000_000;
