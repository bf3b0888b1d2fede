use std::fmt;

use async_graphql::{Enum, SimpleObject};
use serde::Serialize;

use super::Labelled;

#[derive(Enum, Copy, Clone, Eq, PartialEq, Hash, Debug, PartialOrd, Ord)]
pub(crate) enum State {
    Selangor,
    KualaLumpur,
    Johor,
    Penang,
    Sabah,
    Sarawak,
    Perak,
    Kedah,
    Kelantan,
    Terengganu,
    Melaka,
    Pahang,
    NegeriSembilan,
    Putrajaya,
    Perlis,
}

impl Labelled for State {
    const ALL: &'static [Self] = &[
        Self::Selangor,
        Self::KualaLumpur,
        Self::Johor,
        Self::Penang,
        Self::Sabah,
        Self::Sarawak,
        Self::Perak,
        Self::Kedah,
        Self::Kelantan,
        Self::Terengganu,
        Self::Melaka,
        Self::Pahang,
        Self::NegeriSembilan,
        Self::Putrajaya,
        Self::Perlis,
    ];

    fn label(self) -> &'static str {
        match self {
            Self::Selangor => "Selangor",
            Self::KualaLumpur => "Kuala Lumpur",
            Self::Johor => "Johor",
            Self::Penang => "Penang",
            Self::Sabah => "Sabah",
            Self::Sarawak => "Sarawak",
            Self::Perak => "Perak",
            Self::Kedah => "Kedah",
            Self::Kelantan => "Kelantan",
            Self::Terengganu => "Terengganu",
            Self::Melaka => "Melaka",
            Self::Pahang => "Pahang",
            Self::NegeriSembilan => "Negeri Sembilan",
            Self::Putrajaya => "Putrajaya",
            Self::Perlis => "Perlis",
        }
    }
}

labelled!(State);

#[derive(Enum, Copy, Clone, Eq, PartialEq, Hash, Debug, PartialOrd, Ord)]
pub(crate) enum AgeGroup {
    GenZ,
    YoungProfessional,
    MidCareer,
    Established,
    Silver,
}

impl Labelled for AgeGroup {
    const ALL: &'static [Self] = &[
        Self::GenZ,
        Self::YoungProfessional,
        Self::MidCareer,
        Self::Established,
        Self::Silver,
    ];

    fn label(self) -> &'static str {
        match self {
            Self::GenZ => "18-24",
            Self::YoungProfessional => "25-34",
            Self::MidCareer => "35-44",
            Self::Established => "45-54",
            Self::Silver => "55+",
        }
    }
}

labelled!(AgeGroup);

#[derive(Enum, Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub(crate) enum Gender {
    Male,
    Female,
    All,
}

impl Labelled for Gender {
    const ALL: &'static [Self] = &[Self::Male, Self::Female, Self::All];

    fn label(self) -> &'static str {
        match self {
            Self::Male => "Male",
            Self::Female => "Female",
            Self::All => "All",
        }
    }
}

labelled!(Gender);

/// Malaysian household-income classification.
#[derive(Enum, Copy, Clone, Eq, PartialEq, Hash, Debug, PartialOrd, Ord)]
pub(crate) enum SocialClass {
    /// Top 20% of household income.
    T20,
    /// Middle 40%.
    M40,
    /// Bottom 40%.
    B40,
}

impl Labelled for SocialClass {
    const ALL: &'static [Self] = &[Self::T20, Self::M40, Self::B40];

    fn label(self) -> &'static str {
        match self {
            Self::T20 => "T20 (High Income)",
            Self::M40 => "M40 (Middle Income)",
            Self::B40 => "B40 (Lower Income)",
        }
    }

    fn code(self) -> &'static str {
        match self {
            Self::T20 => "T20",
            Self::M40 => "M40",
            Self::B40 => "B40",
        }
    }
}

labelled!(SocialClass);

#[derive(Enum, Copy, Clone, Eq, PartialEq, Hash, Debug, PartialOrd, Ord)]
pub(crate) enum ItemCategory {
    Fmcg,
    Fashion,
    Electronics,
    HealthWellness,
    FoodBeverage,
    Services,
    Automotive,
    RealEstate,
}

impl Labelled for ItemCategory {
    const ALL: &'static [Self] = &[
        Self::Fmcg,
        Self::Fashion,
        Self::Electronics,
        Self::HealthWellness,
        Self::FoodBeverage,
        Self::Services,
        Self::Automotive,
        Self::RealEstate,
    ];

    fn label(self) -> &'static str {
        match self {
            Self::Fmcg => "Fast Moving Consumer Goods",
            Self::Fashion => "Fashion & Apparel",
            Self::Electronics => "Electronics & Gadgets",
            Self::HealthWellness => "Health & Wellness",
            Self::FoodBeverage => "Food & Beverage",
            Self::Services => "Professional Services",
            Self::Automotive => "Automotive",
            Self::RealEstate => "Real Estate",
        }
    }

    fn code(self) -> &'static str {
        match self {
            Self::Fmcg => "FMCG",
            Self::Fashion => "FASHION",
            Self::Electronics => "ELECTRONICS",
            Self::HealthWellness => "HEALTH_WELLNESS",
            Self::FoodBeverage => "FOOD_BEVERAGE",
            Self::Services => "SERVICES",
            Self::Automotive => "AUTOMOTIVE",
            Self::RealEstate => "REAL_ESTATE",
        }
    }
}

labelled!(ItemCategory);

/// How heavily a segment uses the messaging channel. Ordered from lightest
/// to heaviest.
#[derive(Enum, Copy, Clone, Eq, PartialEq, Hash, Debug, PartialOrd, Ord)]
pub(crate) enum UsageIntensity {
    Low,
    Medium,
    High,
    Extreme,
}

impl Labelled for UsageIntensity {
    const ALL: &'static [Self] = &[Self::Low, Self::Medium, Self::High, Self::Extreme];

    fn label(self) -> &'static str {
        match self {
            Self::Low => "Low",
            Self::Medium => "Medium",
            Self::High => "High",
            Self::Extreme => "Extreme",
        }
    }
}

labelled!(UsageIntensity);

#[derive(Enum, Copy, Clone, Eq, PartialEq, Hash, Debug, PartialOrd, Ord)]
pub(crate) enum Language {
    Malay,
    English,
    Mandarin,
    Tamil,
    Manglish,
    Mixed,
}

impl Labelled for Language {
    const ALL: &'static [Self] = &[
        Self::Malay,
        Self::English,
        Self::Mandarin,
        Self::Tamil,
        Self::Manglish,
        Self::Mixed,
    ];

    fn label(self) -> &'static str {
        match self {
            Self::Malay => "Malay",
            Self::English => "English",
            Self::Mandarin => "Mandarin",
            Self::Tamil => "Tamil",
            Self::Manglish => "Manglish",
            Self::Mixed => "Mixed",
        }
    }
}

labelled!(Language);

/// A demographic and behavioural cluster of the national population.
#[derive(SimpleObject, Serialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub(crate) struct AudienceSegment {
    pub(crate) id: String,
    pub(crate) name: String,
    /// States the segment lives in. Never empty.
    pub(crate) regions: Vec<State>,
    pub(crate) age_group: AgeGroup,
    pub(crate) gender: Gender,
    pub(crate) social_class: SocialClass,
    /// Estimated number of people in the segment.
    pub(crate) estimated_size: u64,
    pub(crate) usage_intensity: UsageIntensity,
    pub(crate) purchasing_behavior: Vec<String>,
    pub(crate) pain_points: Vec<String>,
    pub(crate) preferred_content: Vec<String>,
    pub(crate) special_requirements: String,
    pub(crate) cultural_triggers: Vec<String>,
    pub(crate) primary_language: Language,
    /// Free-text window such as "8 PM - 11 PM".
    pub(crate) peak_activity_time: String,
    /// Item categories the segment is inclined to buy, without repeats.
    pub(crate) top_item_affinities: Vec<ItemCategory>,
}

impl fmt::Display for AudienceSegment {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(&self.id)
    }
}
