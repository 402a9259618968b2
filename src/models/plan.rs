use serde::{Deserialize, Serialize};

/// What kind of item a saved plan points at. Unknown strings from older
/// saved data deserialize as `Other` and only count toward the total.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PlanType {
    Holiday,
    Event,
    #[serde(rename = "longweekend")]
    LongWeekend,
    #[serde(other)]
    Other,
}

impl Default for PlanType {
    fn default() -> Self {
        PlanType::Other
    }
}

impl PlanType {
    pub fn parse(value: &str) -> PlanType {
        match value {
            "holiday" => PlanType::Holiday,
            "event" => PlanType::Event,
            "longweekend" => PlanType::LongWeekend,
            _ => PlanType::Other,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            PlanType::Holiday => "holiday",
            PlanType::Event => "event",
            PlanType::LongWeekend => "longweekend",
            PlanType::Other => "other",
        }
    }
}

/// A user-saved bookmark referencing a holiday, event, or long weekend.
/// Immutable once saved; the store only appends and deletes.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Plan {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub date: Option<String>,
    #[serde(rename = "type", default)]
    pub plan_type: PlanType,
    pub location: String,
    #[serde(default)]
    pub extra: Option<String>,
}

/// Per-type counts over the saved collection. `Other` plans show up in
/// `all` only.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TypeCounts {
    pub all: usize,
    pub holiday: usize,
    pub event: usize,
    pub longweekend: usize,
}

impl TypeCounts {
    pub fn tally(plans: &[Plan]) -> TypeCounts {
        let mut counts = TypeCounts {
            all: plans.len(),
            ..TypeCounts::default()
        };
        for plan in plans {
            match plan.plan_type {
                PlanType::Holiday => counts.holiday += 1,
                PlanType::Event => counts.event += 1,
                PlanType::LongWeekend => counts.longweekend += 1,
                PlanType::Other => {}
            }
        }
        counts
    }
}

/// Filter applied to the my-plans view. Filtering never touches the store.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlanFilter {
    All,
    Type(PlanType),
}

impl PlanFilter {
    pub fn parse(value: &str) -> PlanFilter {
        match value {
            "all" | "" => PlanFilter::All,
            other => PlanFilter::Type(PlanType::parse(other)),
        }
    }

    pub fn matches(&self, plan: &Plan) -> bool {
        match self {
            PlanFilter::All => true,
            PlanFilter::Type(kind) => plan.plan_type == *kind,
        }
    }
}
