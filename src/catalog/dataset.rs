//! The Malaysian SME market dataset.

use super::{
    AdPlatform, AgeGroup, AudienceSegment, CaseStudy, ConversionSpeed, Gender, ItemCategory,
    Language, SetupComplexity, SocialClass, State, StrategicTip, UsageIntensity,
};

fn phrases(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| (*s).to_string()).collect()
}

#[allow(clippy::too_many_lines)]
pub(super) fn segments() -> Vec<AudienceSegment> {
    vec![
        AudienceSegment {
            id: "seg-001".into(),
            name: "Klang Valley Urban Foodies".into(),
            regions: vec![State::Selangor, State::KualaLumpur],
            age_group: AgeGroup::YoungProfessional,
            gender: Gender::All,
            social_class: SocialClass::M40,
            estimated_size: 2_400_000,
            usage_intensity: UsageIntensity::High,
            purchasing_behavior: phrases(&["Home delivery", "Late-night snacks", "Coffee culture"]),
            pain_points: phrases(&[
                "Traffic jams",
                "Busy schedules",
                "Price sensitivity to delivery fees",
            ]),
            preferred_content: phrases(&[
                "Status updates with food photos",
                "Exclusive promo codes",
                "Quick response",
            ]),
            special_requirements:
                "Halal focus is paramount. Fast response time (< 5 mins) highly expected.".into(),
            cultural_triggers: phrases(&["Payday weekends", "Ramadan Buka Puasa", "Food trends"]),
            primary_language: Language::Manglish,
            peak_activity_time: "8 PM - 11 PM".into(),
            top_item_affinities: vec![ItemCategory::FoodBeverage, ItemCategory::Fmcg],
        },
        AudienceSegment {
            id: "seg-002".into(),
            name: "Johor Bahru Cross-Border Shoppers".into(),
            regions: vec![State::Johor],
            age_group: AgeGroup::MidCareer,
            gender: Gender::Female,
            social_class: SocialClass::T20,
            estimated_size: 850_000,
            usage_intensity: UsageIntensity::Medium,
            purchasing_behavior: phrases(&["Luxury goods", "Bulk groceries", "Health supplements"]),
            pain_points: phrases(&[
                "Currency fluctuation",
                "Product authenticity",
                "Customs delays",
            ]),
            preferred_content: phrases(&[
                "PDF catalogs",
                "Bulk order lists",
                "Personalized shopping assistance",
            ]),
            special_requirements:
                "Highly value personalized one-to-one communication and after-sales service."
                    .into(),
            cultural_triggers: phrases(&["SG Dollar strength", "CNY Shopping", "Long weekends"]),
            primary_language: Language::Mandarin,
            peak_activity_time: "12 PM - 2 PM".into(),
            top_item_affinities: vec![ItemCategory::Fashion, ItemCategory::HealthWellness],
        },
        AudienceSegment {
            id: "seg-003".into(),
            name: "Penang Tech-Savvy Gen Z".into(),
            regions: vec![State::Penang],
            age_group: AgeGroup::GenZ,
            gender: Gender::All,
            social_class: SocialClass::M40,
            estimated_size: 600_000,
            usage_intensity: UsageIntensity::High,
            purchasing_behavior: phrases(&["Gadgets", "Thrift fashion", "Concert tickets"]),
            pain_points: phrases(&[
                "Information overload",
                "Slow mobile apps",
                "Lack of installment options",
            ]),
            preferred_content: phrases(&[
                "Stickers/GIFs",
                "Short video demonstrations",
                "WhatsApp Pay (beta) adoption",
            ]),
            special_requirements: "Prefer messaging over calls. Use of \"Lingo\" (e.g., \"Bossku\", \"Abang Delivery\") creates rapport.".into(),
            cultural_triggers: phrases(&["Viral TikTok trends", "Tech launches", "Music festivals"]),
            primary_language: Language::Mixed,
            peak_activity_time: "10 PM - 1 AM".into(),
            top_item_affinities: vec![ItemCategory::Electronics, ItemCategory::Fashion],
        },
        AudienceSegment {
            id: "seg-004".into(),
            name: "East Malaysian Rural Direct-to-Consumer".into(),
            regions: vec![State::Sabah, State::Sarawak],
            age_group: AgeGroup::Established,
            gender: Gender::All,
            social_class: SocialClass::B40,
            estimated_size: 3_200_000,
            usage_intensity: UsageIntensity::High,
            purchasing_behavior: phrases(&[
                "Agricultural tools",
                "Fast-moving consumer goods",
                "Educational materials",
            ]),
            pain_points: phrases(&[
                "High shipping costs",
                "Network instability",
                "Language barriers (local dialects)",
            ]),
            preferred_content: phrases(&[
                "Voice notes",
                "Local language instructions",
                "Broadcast lists for community updates",
            ]),
            special_requirements: "Heavy reliance on voice notes due to local dialect nuances. Community-led trust is vital.".into(),
            cultural_triggers: phrases(&["Gawai Festival", "Kaamatan Festival", "Harvest seasons"]),
            primary_language: Language::Malay,
            peak_activity_time: "7 AM - 9 AM".into(),
            top_item_affinities: vec![ItemCategory::Fmcg, ItemCategory::Automotive],
        },
        AudienceSegment {
            id: "seg-005".into(),
            name: "Silver Generation Health Seekers".into(),
            regions: vec![State::Selangor, State::Perak],
            age_group: AgeGroup::Silver,
            gender: Gender::Female,
            social_class: SocialClass::M40,
            estimated_size: 1_100_000,
            usage_intensity: UsageIntensity::Medium,
            purchasing_behavior: phrases(&["Traditional herbs", "Wellness retreats", "Religious items"]),
            pain_points: phrases(&["Complex checkout processes", "Fear of scams", "Small fonts"]),
            preferred_content: phrases(&[
                "Simple text instructions",
                "High-contrast images",
                "Direct call button in WA",
            ]),
            special_requirements: "Need high trust cues. Avoid \"Bots\" - prefer human interaction. WhatsApp Status is their main feed.".into(),
            cultural_triggers: phrases(&[
                "Family health news",
                "Religious holidays",
                "Morning greetings",
            ]),
            primary_language: Language::Malay,
            peak_activity_time: "6 AM - 8 AM".into(),
            top_item_affinities: vec![ItemCategory::HealthWellness, ItemCategory::FoodBeverage],
        },
        AudienceSegment {
            id: "seg-006".into(),
            name: "Putrajaya Civil Servants".into(),
            regions: vec![State::Putrajaya],
            age_group: AgeGroup::MidCareer,
            gender: Gender::All,
            social_class: SocialClass::M40,
            estimated_size: 450_000,
            usage_intensity: UsageIntensity::High,
            purchasing_behavior: phrases(&[
                "Office lunch catering",
                "Personal insurance",
                "Investment plans",
            ]),
            pain_points: phrases(&[
                "Lack of time",
                "Rigid work hours",
                "Bureaucracy in private transactions",
            ]),
            preferred_content: phrases(&[
                "Official-looking PDF brochures",
                "Group order links",
                "Professional tone",
            ]),
            special_requirements: "Respect office hours (contact after 5 PM or during lunch). High value on professional etiquette.".into(),
            cultural_triggers: phrases(&[
                "Government budget announcements",
                "Public holiday eve",
                "Annual bonus",
            ]),
            primary_language: Language::Malay,
            peak_activity_time: "1 PM - 2 PM".into(),
            top_item_affinities: vec![ItemCategory::Services, ItemCategory::FoodBeverage],
        },
    ]
}

pub(super) fn case_studies() -> Vec<CaseStudy> {
    vec![
        CaseStudy {
            id: "cs-001".into(),
            title: "Dapur Mak Min (Nasi Lemak SME)".into(),
            industry: "Food & Beverage".into(),
            target_audience_id: "seg-001".into(),
            strategy: "Utilized WhatsApp Business Catalog and Automated Labels to manage peak breakfast rush in Petaling Jaya. Used WhatsApp Status to showcase daily special \"Lauk\".".into(),
            results: "Increased repeat orders by 45% and reduced manual order entry time by 3 hours daily.".into(),
        },
        CaseStudy {
            id: "cs-002".into(),
            title: "Aura Hijab (Online Retailer)".into(),
            industry: "E-commerce Fashion".into(),
            target_audience_id: "seg-002".into(),
            strategy: "Targeted JB-based customers with \"WhatsApp Only\" flash sales every Friday. Integrated a chatbot for initial size/color queries.".into(),
            results: "Achieved RM50,000 sales in a single 4-hour window with 90% attribution to WhatsApp.".into(),
        },
    ]
}

pub(super) fn ad_platforms() -> Vec<AdPlatform> {
    vec![
        AdPlatform {
            name: "WhatsApp Business".into(),
            setup_complexity: SetupComplexity::Low,
            avg_cpl: "RM 1.50 - 5.00".into(),
            trust_factor: 5,
            conversion_speed: ConversionSpeed::Fast,
            best_for: "Retention & Closing".into(),
            malaysian_context: "Deeply ingrained in daily life. Highest response rates for Malay-speaking market.".into(),
        },
        AdPlatform {
            name: "Facebook / IG Ads".into(),
            setup_complexity: SetupComplexity::High,
            avg_cpl: "RM 3.00 - 15.00".into(),
            trust_factor: 3,
            conversion_speed: ConversionSpeed::Medium,
            best_for: "Top-of-Funnel Reach".into(),
            malaysian_context: "Essential for T20/M40 urban segments. High competition in Klang Valley.".into(),
        },
        AdPlatform {
            name: "TikTok Shop / Ads".into(),
            setup_complexity: SetupComplexity::Medium,
            avg_cpl: "RM 2.00 - 8.00".into(),
            trust_factor: 4,
            conversion_speed: ConversionSpeed::Fast,
            best_for: "Impulse Purchases".into(),
            malaysian_context: "Booming in Gen Z and B40/M40 rural segments. Influencer led.".into(),
        },
        AdPlatform {
            name: "Shopee Ads".into(),
            setup_complexity: SetupComplexity::Medium,
            avg_cpl: "RM 0.50 - 3.00".into(),
            trust_factor: 4,
            conversion_speed: ConversionSpeed::Fast,
            best_for: "Ready-to-Buy Users".into(),
            malaysian_context: "Go-to for comparison shoppers. High dependency on platform vouchers.".into(),
        },
    ]
}

pub(super) fn strategic_tips() -> Vec<StrategicTip> {
    vec![
        StrategicTip {
            title: "Trust-First Economy".into(),
            description: "WhatsApp remains the #1 digital trust builder for closing sales across all social classes in Malaysia.".into(),
        },
        StrategicTip {
            title: "Hyper-Local Nuance".into(),
            description: "Regional dialects (Loghat) significantly outperform standard English in conversions for rural B40 segments.".into(),
        },
        StrategicTip {
            title: "Linguistic Blending".into(),
            description: "Manglish content formats see 24% higher engagement among Young Urban Professionals.".into(),
        },
    ]
}
