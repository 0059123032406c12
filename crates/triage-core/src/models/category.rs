//! Body-system categories, symptom sub-groups, and urgency levels.

use serde::{Deserialize, Serialize};

/// Top-level body-system classification of a conversation.
///
/// Fixed at build time; classified once per session from the opening
/// utterance, and changed only by a mid-conversation redirect.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    Gastrointestinal,
    Respiratory,
    Neurological,
    Orthopedic,
    Dermatological,
    GeneralSystemic,
}

impl Category {
    /// All categories, in classifier priority order.
    pub const ALL: [Category; 6] = [
        Category::Respiratory,
        Category::Neurological,
        Category::Dermatological,
        Category::Orthopedic,
        Category::Gastrointestinal,
        Category::GeneralSystemic,
    ];

    /// Canonical uppercase name, as stored in case records.
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Gastrointestinal => "GASTROINTESTINAL",
            Category::Respiratory => "RESPIRATORY",
            Category::Neurological => "NEUROLOGICAL",
            Category::Orthopedic => "ORTHOPEDIC",
            Category::Dermatological => "DERMATOLOGICAL",
            Category::GeneralSystemic => "GENERAL_SYSTEMIC",
        }
    }

    /// The specialist a finalized case in this category is assigned to.
    pub fn specialist(&self) -> &'static str {
        match self {
            Category::Gastrointestinal => "Gastroenterologist",
            Category::Respiratory => "Pulmonologist",
            Category::Neurological => "Neurologist",
            Category::Orthopedic => "Orthopedist",
            Category::Dermatological => "Dermatologist",
            Category::GeneralSystemic => "General Physician",
        }
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A symptom cluster within a category.
///
/// `Default` is the "not yet determined" sentinel: the router runs only
/// while a session's sub-group is `Default`, and a redirect resets it so
/// routing happens again for the new category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SubGroup {
    Default,
    // Gastrointestinal
    Stomach,
    Intestines,
    Esophagus,
    GiGeneral,
    // Neurological
    Headache,
    Dizziness,
    Vision,
    Consciousness,
    NeuroGeneral,
    // Respiratory
    Breathing,
    Cough,
    Infection,
    RespGeneral,
    // Orthopedic
    SpineBack,
    Joints,
    Extremities,
    OrthoTrauma,
    OrthoGeneral,
    // Dermatological
    RashAllergy,
    TraumaBurn,
    Bites,
    DermaGeneral,
    // General / systemic
    SummerHydration,
    MonsoonVector,
    WinterViral,
    ChronicMetabolic,
    FluSymptoms,
    Fatigue,
    WeightAppetite,
}

impl SubGroup {
    /// Canonical uppercase name for logs and reports.
    pub fn as_str(&self) -> &'static str {
        match self {
            SubGroup::Default => "DEFAULT",
            SubGroup::Stomach => "STOMACH",
            SubGroup::Intestines => "INTESTINES",
            SubGroup::Esophagus => "ESOPHAGUS",
            SubGroup::GiGeneral => "GENERAL",
            SubGroup::Headache => "HEADACHE",
            SubGroup::Dizziness => "DIZZINESS",
            SubGroup::Vision => "VISION",
            SubGroup::Consciousness => "CONSCIOUSNESS",
            SubGroup::NeuroGeneral => "GENERAL",
            SubGroup::Breathing => "BREATHING",
            SubGroup::Cough => "COUGH",
            SubGroup::Infection => "INFECTION",
            SubGroup::RespGeneral => "GENERAL",
            SubGroup::SpineBack => "SPINE_BACK",
            SubGroup::Joints => "JOINTS",
            SubGroup::Extremities => "EXTREMITIES",
            SubGroup::OrthoTrauma => "TRAUMA",
            SubGroup::OrthoGeneral => "GENERAL",
            SubGroup::RashAllergy => "RASH_ALLERGY",
            SubGroup::TraumaBurn => "TRAUMA_BURN",
            SubGroup::Bites => "BITES",
            SubGroup::DermaGeneral => "GENERAL",
            SubGroup::SummerHydration => "SUMMER_HYDRATION",
            SubGroup::MonsoonVector => "MONSOON_VECTOR",
            SubGroup::WinterViral => "WINTER_VIRAL",
            SubGroup::ChronicMetabolic => "CHRONIC_METABOLIC",
            SubGroup::FluSymptoms => "FLU_SYMPTOMS",
            SubGroup::Fatigue => "FATIGUE",
            SubGroup::WeightAppetite => "WEIGHT_APPETITE",
        }
    }
}

impl std::fmt::Display for SubGroup {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Escalation level attached to a conversation.
///
/// `Normal` is the resting level; extraction rules raise it to `High` or
/// `Critical` when red-flag language is found unnegated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Urgency {
    Normal,
    High,
    Critical,
}

impl Urgency {
    pub fn as_str(&self) -> &'static str {
        match self {
            Urgency::Normal => "Normal",
            Urgency::High => "HIGH",
            Urgency::Critical => "CRITICAL",
        }
    }

    pub fn parse(s: &str) -> Option<Urgency> {
        match s {
            "Normal" => Some(Urgency::Normal),
            "HIGH" => Some(Urgency::High),
            "CRITICAL" => Some(Urgency::Critical),
            _ => None,
        }
    }
}

impl std::fmt::Display for Urgency {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
