//! Day-type registry: the fixed classification vocabulary plus the
//! per-type accrual policy used by the balance calculator.
//!
//! The vocabulary itself is immutable process-wide data. The accrual
//! effects start from a built-in table and may be overridden per code in
//! the config file, because "does sick leave burn balance" is policy, not
//! arithmetic.

use std::collections::HashMap;

use crate::config::Config;
use crate::errors::{AppError, AppResult};
use crate::models::{DayType, ALL_DAY_TYPES};

/// Display label for a persisted 5-char code.
pub fn label_of(code: &str) -> AppResult<&'static str> {
    DayType::from_code(code)
        .map(|d| d.label())
        .ok_or_else(|| AppError::UnknownDayType(code.to_string()))
}

/// Whether a code belongs to the working family.
pub fn is_working(code: &str) -> AppResult<bool> {
    DayType::from_code(code)
        .map(|d| d.is_working())
        .ok_or_else(|| AppError::UnknownDayType(code.to_string()))
}

/// (code, label) pairs in presentation order, for selection widgets.
pub fn all_codes() -> Vec<(&'static str, &'static str)> {
    ALL_DAY_TYPES.iter().map(|d| (d.code(), d.label())).collect()
}

/// Effect of one entry on the time balance.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Accrual {
    /// Scheduled working day: zero unless a partial/extended day was
    /// recorded, then worked − shift.
    Shift,
    /// Extra working day (e.g. Saturday): everything worked is surplus.
    Credits,
    /// Absence owed back: a full day costs one shift, a partial absence
    /// costs only the recorded minutes.
    Deducts,
    /// No balance effect at all.
    Exempt,
}

impl Accrual {
    pub fn name(&self) -> &'static str {
        match self {
            Accrual::Shift => "shift",
            Accrual::Credits => "credits",
            Accrual::Deducts => "deducts",
            Accrual::Exempt => "exempt",
        }
    }

    pub fn from_name(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "shift" => Some(Accrual::Shift),
            "credits" => Some(Accrual::Credits),
            "deducts" => Some(Accrual::Deducts),
            "exempt" => Some(Accrual::Exempt),
            _ => None,
        }
    }

    /// Signed minutes this entry contributes to the balance.
    pub fn delta(&self, shift_minutes: i64, minutes_override: Option<i64>) -> i64 {
        match self {
            Accrual::Shift => match minutes_override {
                Some(worked) => worked - shift_minutes,
                None => 0,
            },
            Accrual::Credits => minutes_override.unwrap_or(shift_minutes),
            Accrual::Deducts => -minutes_override.unwrap_or(shift_minutes),
            Accrual::Exempt => 0,
        }
    }
}

fn default_accrual(day_type: DayType) -> Accrual {
    match day_type {
        DayType::WorkDay | DayType::WorkFromHome => Accrual::Shift,
        DayType::WorkSaturday => Accrual::Credits,
        DayType::Sickness | DayType::MedicalLeave | DayType::DayOnDemand => Accrual::Deducts,
        DayType::PublicHoliday
        | DayType::SpecialLeave
        | DayType::Vacation
        | DayType::ReturnHoliday
        | DayType::Training => Accrual::Exempt,
    }
}

/// Resolved accrual table: built-in defaults plus config overrides.
#[derive(Debug, Clone)]
pub struct AccrualPolicy {
    effects: HashMap<DayType, Accrual>,
}

impl Default for AccrualPolicy {
    fn default() -> Self {
        let effects = ALL_DAY_TYPES
            .iter()
            .map(|d| (*d, default_accrual(*d)))
            .collect();
        Self { effects }
    }
}

impl AccrualPolicy {
    /// Apply `accrual_overrides` from the config file on top of the
    /// defaults. Unknown codes or effect names fail fast.
    pub fn from_config(cfg: &Config) -> AppResult<Self> {
        let mut policy = AccrualPolicy::default();
        for (code, effect) in &cfg.accrual_overrides {
            let day_type = DayType::from_code(code)
                .ok_or_else(|| AppError::UnknownDayType(code.clone()))?;
            let accrual = Accrual::from_name(effect).ok_or_else(|| {
                AppError::Config(format!(
                    "invalid accrual effect '{}' for {} (use shift/credits/deducts/exempt)",
                    effect, code
                ))
            })?;
            policy.effects.insert(day_type, accrual);
        }
        Ok(policy)
    }

    pub fn effect(&self, day_type: DayType) -> Accrual {
        self.effects
            .get(&day_type)
            .copied()
            .unwrap_or_else(|| default_accrual(day_type))
    }
}
