use crate::assessment::EndpointResult;
use std::fmt;
use std::str::FromStr;

/// SSLLabs letter grade.
///
/// Variants are declared from worst to best so the derived `Ord` is the
/// rating order. `M` and `T` share a score; `T` sorts first so the lowest
/// grade of any endpoint set is unique.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Grade {
    T,
    M,
    F,
    E,
    D,
    C,
    B,
    AMinus,
    A,
    APlus,
}

impl Grade {
    /// Numeric score, half way through each band of the SSL Server Rating Guide.
    /// `A+` and `A-` sit one point either side of `A`.
    pub fn score(self) -> f64 {
        match self {
            Grade::APlus => 91.0,
            Grade::A => 90.0,
            Grade::AMinus => 89.0,
            Grade::B => 72.0,
            Grade::C => 57.0,
            Grade::D => 42.0,
            Grade::E => 27.0,
            Grade::F => 10.0,
            Grade::M | Grade::T => 0.0,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Grade::APlus => "A+",
            Grade::A => "A",
            Grade::AMinus => "A-",
            Grade::B => "B",
            Grade::C => "C",
            Grade::D => "D",
            Grade::E => "E",
            Grade::F => "F",
            Grade::M => "M",
            Grade::T => "T",
        }
    }
}

impl FromStr for Grade {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "A+" => Ok(Grade::APlus),
            "A" => Ok(Grade::A),
            "A-" => Ok(Grade::AMinus),
            "B" => Ok(Grade::B),
            "C" => Ok(Grade::C),
            "D" => Ok(Grade::D),
            "E" => Ok(Grade::E),
            "F" => Ok(Grade::F),
            "M" => Ok(Grade::M),
            "T" => Ok(Grade::T),
            other => Err(other.to_string()),
        }
    }
}

impl fmt::Display for Grade {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Grade of a whole host, derived from its endpoints.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AggregatedGrade {
    /// No endpoint produced a grade.
    Ungraded,
    Graded(Grade),
    /// At least one endpoint reported a grade outside the known set.
    Undefined,
}

impl AggregatedGrade {
    /// Label value used for the `grade` label: `""`, the letter, or `"undef"`.
    pub fn as_label(&self) -> &'static str {
        match self {
            AggregatedGrade::Ungraded => "",
            AggregatedGrade::Graded(grade) => grade.as_str(),
            AggregatedGrade::Undefined => "undef",
        }
    }

    /// Score of the aggregate, `-1` for an undefined grade.
    pub fn score(&self) -> Option<f64> {
        match self {
            AggregatedGrade::Ungraded => None,
            AggregatedGrade::Graded(grade) => Some(grade.score()),
            AggregatedGrade::Undefined => Some(-1.0),
        }
    }
}

impl fmt::Display for AggregatedGrade {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_label())
    }
}

/// A host gets the lowest grade of its endpoints.
///
/// Unreachable endpoints (empty grade) are skipped. A single unknown grade
/// makes the whole result `Undefined`, wherever it appears in the list.
pub fn endpoints_lowest_grade(endpoints: &[EndpointResult]) -> AggregatedGrade {
    let mut lowest: Option<Grade> = None;

    for endpoint in endpoints.iter().filter(|e| !e.grade.is_empty()) {
        match endpoint.grade.parse::<Grade>() {
            Ok(grade) => lowest = Some(lowest.map_or(grade, |current| current.min(grade))),
            Err(_) => return AggregatedGrade::Undefined,
        }
    }

    lowest.map_or(AggregatedGrade::Ungraded, AggregatedGrade::Graded)
}
