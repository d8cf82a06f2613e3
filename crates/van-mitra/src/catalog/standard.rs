use std::collections::{BTreeMap, BTreeSet};

use indexmap::IndexMap;

use crate::workflows::claims::{ClaimId, ClaimRecord, ClaimStatus, GeoPoint, ValidationScores};
use crate::workflows::schemes::{SchemeCode, SchemeDefinition, VillageProfile};

struct SchemeSeed {
    code: &'static str,
    full_name: &'static str,
    description: &'static str,
    eligibility: &'static [&'static str],
    benefits: &'static [&'static str],
    focus_areas: &'static [&'static str],
    budget: &'static str,
    weights: &'static [(&'static str, f64)],
}

const SCHEMES: &[SchemeSeed] = &[
    SchemeSeed {
        code: "MGNREGA",
        full_name: "Mahatma Gandhi National Rural Employment Guarantee Act",
        description: "Provides guaranteed wage employment for 100 days per year to rural households",
        eligibility: &[
            "Rural households",
            "Adult members willing to do unskilled manual work",
            "At least 18 years of age",
        ],
        benefits: &[
            "100 days guaranteed employment",
            "Minimum wages",
            "Unemployment allowance",
        ],
        focus_areas: &[
            "Water conservation",
            "Drought proofing",
            "Land development",
            "Rural connectivity",
        ],
        budget: "₹73,000 crores (2023-24)",
        weights: &[
            ("unemployment", 0.8),
            ("poverty", 0.9),
            ("waterScarcity", 0.7),
            ("landDegradation", 0.6),
        ],
    },
    SchemeSeed {
        code: "PMKSY",
        full_name: "Pradhan Mantri Krishi Sinchayee Yojana",
        description:
            "Aims to improve water use efficiency and expand cultivable area under assured irrigation",
        eligibility: &[
            "All farmers",
            "Water user associations",
            "Panchayats",
            "Self-help groups",
        ],
        benefits: &[
            "Drip irrigation subsidy",
            "Sprinkler system support",
            "Watershed development",
        ],
        focus_areas: &[
            "Water conservation",
            "Precision irrigation",
            "Watershed management",
        ],
        budget: "₹11,000 crores (2023-24)",
        weights: &[
            ("waterScarcity", 0.95),
            ("agriculturalLand", 0.85),
            ("irrigation", 0.9),
            ("cropYield", 0.7),
        ],
    },
    SchemeSeed {
        code: "NRLM",
        full_name: "National Rural Livelihood Mission",
        description:
            "Aims to reduce poverty by enabling poor households to access gainful self-employment",
        eligibility: &[
            "Poor rural households",
            "Women self-help groups",
            "Rural youth",
            "Tribal communities",
        ],
        benefits: &[
            "Skill training",
            "Financial assistance",
            "Market linkages",
            "Capacity building",
        ],
        focus_areas: &[
            "Livelihood generation",
            "Skill development",
            "Women empowerment",
        ],
        budget: "₹13,335 crores (2023-24)",
        weights: &[
            ("poverty", 0.9),
            ("unemployment", 0.85),
            ("womenEmpowerment", 0.8),
            ("skillGap", 0.75),
        ],
    },
    SchemeSeed {
        code: "CAMPA",
        full_name: "Compensatory Afforestation Fund Management and Planning Authority",
        description: "Manages funds for compensatory afforestation and environmental conservation",
        eligibility: &[
            "Forest departments",
            "Gram sabhas",
            "Joint forest management committees",
        ],
        benefits: &[
            "Afforestation funding",
            "Forest conservation",
            "Biodiversity protection",
        ],
        focus_areas: &["Afforestation", "Forest conservation", "Wildlife protection"],
        budget: "₹6,000 crores (2023-24)",
        weights: &[
            ("forestCover", 0.95),
            ("deforestation", 0.9),
            ("biodiversity", 0.85),
            ("tribalPopulation", 0.8),
        ],
    },
    SchemeSeed {
        code: "FRA",
        full_name: "Forest Rights Act",
        description: "Recognizes and vests forest rights and occupation in forest land to forest dwelling tribes",
        eligibility: &[
            "Forest dwelling Scheduled Tribes",
            "Traditional forest dwellers",
        ],
        benefits: &[
            "Individual forest rights",
            "Community forest rights",
            "Livelihood rights",
        ],
        focus_areas: &[
            "Land rights recognition",
            "Forest governance",
            "Tribal empowerment",
        ],
        budget: "State-level implementation",
        weights: &[
            ("tribalPopulation", 0.95),
            ("forestDependency", 0.9),
            ("landlessness", 0.85),
            ("forestCover", 0.7),
        ],
    },
    SchemeSeed {
        code: "PMAY-G",
        full_name: "Pradhan Mantri Awas Yojana - Gramin",
        description: "Provides financial assistance for construction of pucca houses",
        eligibility: &[
            "Houseless families",
            "Families living in kutcha houses",
            "Priority to SC/ST",
        ],
        benefits: &[
            "₹1.2 lakh plain area",
            "₹1.3 lakh hilly areas",
            "Technical support",
        ],
        focus_areas: &[
            "Rural housing",
            "Sanitation",
            "Infrastructure",
            "Poverty alleviation",
        ],
        budget: "₹28,000 crores (2023-24)",
        weights: &[
            ("homelessness", 0.9),
            ("poverty", 0.8),
            ("infrastructure", 0.75),
            ("sanitation", 0.7),
        ],
    },
];

fn strings(values: &[&str]) -> Vec<String> {
    values.iter().map(|value| value.to_string()).collect()
}

pub(super) fn schemes() -> Vec<SchemeDefinition> {
    SCHEMES
        .iter()
        .map(|seed| SchemeDefinition {
            code: SchemeCode::new(seed.code),
            full_name: seed.full_name.to_string(),
            description: seed.description.to_string(),
            budget: seed.budget.to_string(),
            eligibility: strings(seed.eligibility),
            benefits: strings(seed.benefits),
            focus_areas: strings(seed.focus_areas),
            indicator_weights: seed
                .weights
                .iter()
                .map(|(name, weight)| (name.to_string(), *weight))
                .collect::<IndexMap<_, _>>(),
        })
        .collect()
}

struct VillageSeed {
    id: u32,
    name: &'static str,
    population: u32,
    tribal_population_pct: u8,
    forest_cover_pct: u8,
    // unemployment, poverty, waterScarcity, irrigation, forestDependency, infrastructure
    indicators: [f64; 6],
    existing: &'static [&'static str],
    avg_income: u32,
    landlessness_pct: u8,
}

const VILLAGE_INDICATORS: [&str; 6] = [
    "unemployment",
    "poverty",
    "waterScarcity",
    "irrigation",
    "forestDependency",
    "infrastructure",
];

const VILLAGES: &[VillageSeed] = &[
    VillageSeed {
        id: 1,
        name: "Kakraban",
        population: 2340,
        tribal_population_pct: 78,
        forest_cover_pct: 65,
        indicators: [42.0, 56.0, 68.0, 25.0, 72.0, 35.0],
        existing: &["MGNREGA", "FRA"],
        avg_income: 45000,
        landlessness_pct: 45,
    },
    VillageSeed {
        id: 2,
        name: "Ambassa",
        population: 3120,
        tribal_population_pct: 65,
        forest_cover_pct: 58,
        indicators: [38.0, 48.0, 72.0, 18.0, 68.0, 42.0],
        existing: &["MGNREGA", "PMAY-G"],
        avg_income: 52000,
        landlessness_pct: 38,
    },
    VillageSeed {
        id: 3,
        name: "Kanchanpur",
        population: 1890,
        tribal_population_pct: 82,
        forest_cover_pct: 71,
        indicators: [48.0, 62.0, 58.0, 22.0, 85.0, 28.0],
        existing: &["FRA"],
        avg_income: 38000,
        landlessness_pct: 52,
    },
    VillageSeed {
        id: 4,
        name: "Melaghar",
        population: 2750,
        tribal_population_pct: 55,
        forest_cover_pct: 48,
        indicators: [35.0, 42.0, 65.0, 32.0, 52.0, 48.0],
        existing: &["MGNREGA", "NRLM"],
        avg_income: 58000,
        landlessness_pct: 32,
    },
    VillageSeed {
        id: 5,
        name: "Udaipur",
        population: 4200,
        tribal_population_pct: 88,
        forest_cover_pct: 75,
        indicators: [52.0, 68.0, 75.0, 15.0, 92.0, 32.0],
        existing: &["FRA", "CAMPA"],
        avg_income: 35000,
        landlessness_pct: 58,
    },
];

pub(super) fn villages() -> Vec<VillageProfile> {
    VILLAGES
        .iter()
        .map(|seed| VillageProfile {
            id: seed.id,
            name: seed.name.to_string(),
            population: seed.population,
            tribal_population_pct: seed.tribal_population_pct,
            forest_cover_pct: seed.forest_cover_pct,
            indicators: VILLAGE_INDICATORS
                .iter()
                .zip(seed.indicators)
                .map(|(name, value)| (name.to_string(), value))
                .collect::<BTreeMap<_, _>>(),
            existing_scheme_codes: seed
                .existing
                .iter()
                .map(|code| SchemeCode::new(*code))
                .collect::<BTreeSet<_>>(),
            avg_income: seed.avg_income,
            landlessness_pct: seed.landlessness_pct,
        })
        .collect()
}

#[allow(clippy::too_many_arguments)]
fn claim(
    id: u32,
    claimant_name: &str,
    patta_number: &str,
    extent_hectares: f64,
    village: &str,
    status: ClaimStatus,
    confidence: u8,
    location: (f64, f64),
    documents: &[&str],
    validation: (u8, u8, u8),
) -> ClaimRecord {
    ClaimRecord {
        id: ClaimId(id),
        claimant_name: claimant_name.to_string(),
        patta_number: patta_number.to_string(),
        extent_hectares,
        village: village.to_string(),
        status,
        confidence,
        location: GeoPoint {
            lat: location.0,
            lng: location.1,
        },
        documents: strings(documents),
        validation: Some(ValidationScores {
            name_match: validation.0,
            location_match: validation.1,
            extent_match: validation.2,
        }),
    }
}

pub(super) fn claims() -> Vec<ClaimRecord> {
    vec![
        claim(
            1,
            "Rahul Singh",
            "IFR-Tri-Khowai-2025-0017",
            509.0,
            "Kakraban",
            ClaimStatus::Pending,
            100,
            (23.45, 78.92),
            &["Form A", "ID Proof", "Map"],
            (100, 98, 100),
        ),
        claim(
            2,
            "Priya Devi",
            "IFR-Tri-Khowai-2025-0018",
            324.0,
            "Ambassa",
            ClaimStatus::Approved,
            95,
            (23.48, 78.88),
            &["Form A", "ID Proof", "Map"],
            (95, 92, 98),
        ),
        claim(
            3,
            "Amit Kumar",
            "IFR-Tri-Khowai-2025-0019",
            412.0,
            "Kanchanpur",
            ClaimStatus::Pending,
            88,
            (23.42, 78.95),
            &["Form A", "Map"],
            (88, 85, 90),
        ),
        claim(
            4,
            "Sunita Sharma",
            "IFR-Tri-Khowai-2025-0020",
            267.0,
            "Melaghar",
            ClaimStatus::Review,
            76,
            (23.40, 78.90),
            &["Form A"],
            (76, 80, 72),
        ),
        claim(
            5,
            "Mohan Lal",
            "IFR-Tri-Khowai-2025-0021",
            589.0,
            "Udaipur",
            ClaimStatus::Pending,
            92,
            (23.47, 78.85),
            &["Form A", "ID Proof", "Map", "Witness Statement"],
            (92, 95, 88),
        ),
    ]
}
