//! Conversation stages.

use serde::{Deserialize, Serialize};

/// One step of the admissions conversation, in the order they are visited.
///
/// The derived `Ord` follows declaration order, so `a < b` means `a` comes
/// earlier in the script.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Default,
)]
#[serde(rename_all = "snake_case")]
pub enum Stage {
    #[default]
    Initial,
    AdmissionInterest,
    BiologyCheck,
    ProgramDetails,
    FeeStructure,
    HostelFacilities,
    CollegeLocation,
    Recognition,
    ClinicalTraining,
    Scholarship,
    TotalSeats,
    Eligibility,
    End,
}

impl Stage {
    /// Every stage in script order.
    pub const ALL: [Self; 13] = [
        Self::Initial,
        Self::AdmissionInterest,
        Self::BiologyCheck,
        Self::ProgramDetails,
        Self::FeeStructure,
        Self::HostelFacilities,
        Self::CollegeLocation,
        Self::Recognition,
        Self::ClinicalTraining,
        Self::Scholarship,
        Self::TotalSeats,
        Self::Eligibility,
        Self::End,
    ];

    /// The stage that follows this one. `End` is its own successor.
    #[must_use]
    pub const fn next(self) -> Self {
        match self {
            Self::Initial => Self::AdmissionInterest,
            Self::AdmissionInterest => Self::BiologyCheck,
            Self::BiologyCheck => Self::ProgramDetails,
            Self::ProgramDetails => Self::FeeStructure,
            Self::FeeStructure => Self::HostelFacilities,
            Self::HostelFacilities => Self::CollegeLocation,
            Self::CollegeLocation => Self::Recognition,
            Self::Recognition => Self::ClinicalTraining,
            Self::ClinicalTraining => Self::Scholarship,
            Self::Scholarship => Self::TotalSeats,
            Self::TotalSeats => Self::Eligibility,
            Self::Eligibility | Self::End => Self::End,
        }
    }

    /// Stages that ask the user a yes/no question and wait for the answer.
    #[must_use]
    pub const fn is_question(self) -> bool {
        !matches!(self, Self::Initial | Self::Eligibility | Self::End)
    }

    #[must_use]
    pub const fn is_terminal(self) -> bool {
        matches!(self, Self::End)
    }

    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Initial => "initial",
            Self::AdmissionInterest => "admission_interest",
            Self::BiologyCheck => "biology_check",
            Self::ProgramDetails => "program_details",
            Self::FeeStructure => "fee_structure",
            Self::HostelFacilities => "hostel_facilities",
            Self::CollegeLocation => "college_location",
            Self::Recognition => "recognition",
            Self::ClinicalTraining => "clinical_training",
            Self::Scholarship => "scholarship",
            Self::TotalSeats => "total_seats",
            Self::Eligibility => "eligibility",
            Self::End => "end",
        }
    }

    /// Human-readable topic title, used by the topic report.
    #[must_use]
    pub const fn title(&self) -> &'static str {
        match self {
            Self::Initial => "Greeting",
            Self::AdmissionInterest => "Admission Interest",
            Self::BiologyCheck => "Biology Prerequisite",
            Self::ProgramDetails => "Program Details",
            Self::FeeStructure => "Fee Structure",
            Self::HostelFacilities => "Hostel Facilities",
            Self::CollegeLocation => "College Location",
            Self::Recognition => "Recognition & Accreditation",
            Self::ClinicalTraining => "Clinical Training",
            Self::Scholarship => "Scholarship Options",
            Self::TotalSeats => "Total Seats",
            Self::Eligibility => "Eligibility Criteria",
            Self::End => "End",
        }
    }
}

impl std::fmt::Display for Stage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Stage {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|stage| stage.as_str() == s)
            .ok_or_else(|| format!("unknown stage: {s}"))
    }
}
