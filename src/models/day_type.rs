use serde::Serialize;

/// Which side of the balance a day classification sits on.
/// Every day type belongs to exactly one family.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Family {
    Working,
    Absent,
}

/// Fixed vocabulary of day classifications. The 5-char code is the
/// persisted identity (entries.day_type column), the label is for display.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum DayType {
    // Working family
    WorkDay,        // WKDAY
    WorkSaturday,   // SATUR
    WorkFromHome,   // WKHOM
    // Absent family
    PublicHoliday,  // PUABS
    Sickness,       // SICKD
    MedicalLeave,   // MEDIC
    SpecialLeave,   // SPECI
    Vacation,       // HOLIS
    ReturnHoliday,  // RETRN
    Training,       // TRAIN
    DayOnDemand,    // DAYOD
}

/// Declaration order is the order selection UIs present the codes in:
/// working types first, then absences.
pub const ALL_DAY_TYPES: [DayType; 11] = [
    DayType::WorkDay,
    DayType::WorkSaturday,
    DayType::WorkFromHome,
    DayType::PublicHoliday,
    DayType::Sickness,
    DayType::MedicalLeave,
    DayType::SpecialLeave,
    DayType::Vacation,
    DayType::ReturnHoliday,
    DayType::Training,
    DayType::DayOnDemand,
];

impl DayType {
    pub fn code(&self) -> &'static str {
        match self {
            DayType::WorkDay => "WKDAY",
            DayType::WorkSaturday => "SATUR",
            DayType::WorkFromHome => "WKHOM",
            DayType::PublicHoliday => "PUABS",
            DayType::Sickness => "SICKD",
            DayType::MedicalLeave => "MEDIC",
            DayType::SpecialLeave => "SPECI",
            DayType::Vacation => "HOLIS",
            DayType::ReturnHoliday => "RETRN",
            DayType::Training => "TRAIN",
            DayType::DayOnDemand => "DAYOD",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            DayType::WorkDay => "Work Day",
            DayType::WorkSaturday => "Work on Saturday",
            DayType::WorkFromHome => "Work at home",
            DayType::PublicHoliday => "Public Holiday",
            DayType::Sickness => "Sickness Absence",
            DayType::MedicalLeave => "Medical Leave",
            DayType::SpecialLeave => "Special Leave",
            DayType::Vacation => "Vacation",
            DayType::ReturnHoliday => "Return for Public Holiday",
            DayType::Training => "Training",
            DayType::DayOnDemand => "Day on demand",
        }
    }

    pub fn family(&self) -> Family {
        match self {
            DayType::WorkDay | DayType::WorkSaturday | DayType::WorkFromHome => Family::Working,
            _ => Family::Absent,
        }
    }

    pub fn is_working(&self) -> bool {
        self.family() == Family::Working
    }

    pub fn is_absent(&self) -> bool {
        self.family() == Family::Absent
    }

    /// Convert enum → DB string
    pub fn to_db_str(&self) -> &'static str {
        self.code()
    }

    /// Convert DB string → enum
    pub fn from_db_str(s: &str) -> Option<Self> {
        match s {
            "WKDAY" => Some(DayType::WorkDay),
            "SATUR" => Some(DayType::WorkSaturday),
            "WKHOM" => Some(DayType::WorkFromHome),
            "PUABS" => Some(DayType::PublicHoliday),
            "SICKD" => Some(DayType::Sickness),
            "MEDIC" => Some(DayType::MedicalLeave),
            "SPECI" => Some(DayType::SpecialLeave),
            "HOLIS" => Some(DayType::Vacation),
            "RETRN" => Some(DayType::ReturnHoliday),
            "TRAIN" => Some(DayType::Training),
            "DAYOD" => Some(DayType::DayOnDemand),
            _ => None,
        }
    }

    /// Helper: convert input code from CLI (lowercase or uppercase)
    pub fn from_code(code: &str) -> Option<Self> {
        DayType::from_db_str(&code.to_uppercase())
    }
}
