//! Deterministic demo catalog.
//!
//! Produces HR-service vendors whose metrics correlate with cost tier. The
//! same `(count, seed)` pair always yields the same records.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::hash::Hasher;
use twox_hash::XxHash64;

use crate::types::{CostTier, VendorRecord, MAX_RATING, MAX_SUCCESS_RATE, MIN_RATING};

pub const CATEGORIES: [&str; 5] = ["Recruitment", "Payroll", "DEI", "L&D", "Benefits"];

const ADJECTIVES: [&str; 14] = [
    "Global", "Prime", "Elite", "Rapid", "Secure", "Innovative", "People", "Smart", "Trusted",
    "Core", "NextGen", "Adaptive", "Strategic", "Dynamic",
];
const NOUNS: [&str; 14] = [
    "HR", "Solutions", "Systems", "Partners", "Group", "Services", "Staffing", "Technologies",
    "Works", "Hub", "Labs", "Associates", "Consulting", "Connect",
];
const SUFFIXES: [&str; 5] = ["Inc.", "Corp.", "LLC", "Global", "Tech"];

const INDUSTRIES: [&str; 5] = ["Tech", "Healthcare", "Finance", "Retail", "Manufacturing"];
const FOCUS_AREAS: [&str; 5] = ["Remote", "Enterprise", "Startup", "Global", "Hybrid"];
const REGIONS: [&str; 4] = ["North America", "EMEA", "APAC", "LATAM"];

const FILLERS: [&str; 5] = [
    "Trusted by Fortune 500 companies.",
    "Award-winning service delivery.",
    "Best-in-class support available 24/7.",
    "Scalable solutions for growing teams.",
    "Proven track record of success.",
];

fn templates(category: &str) -> &'static [&'static str] {
    match category {
        "Recruitment" => &[
            "Specializing in rapid talent acquisition for {industry} sectors.",
            "End-to-end RPO solutions with a focus on {focus} roles.",
            "Executive search firm dedicated to finding top-tier leadership in {region}.",
            "AI-driven staffing platform reducing time-to-hire by 40%.",
        ],
        "Payroll" => &[
            "Automated payroll processing ensuring 100% compliance with {region} laws.",
            "Cloud-native payroll engine designed for {focus} businesses.",
            "Global payroll solutions supporting over 50 currencies and tax regimes.",
            "Seamless integration with major accounting software for streamlined operations.",
        ],
        "DEI" => &[
            "Strategic consulting to build inclusive cultures and diverse teams.",
            "Data-driven DEI audits and roadmap development for {industry} companies.",
            "Unconscious bias training and inclusive leadership workshops.",
            "Empowering underrepresented talent through mentorship and pipeline programs.",
        ],
        "L&D" => &[
            "Comprehensive Learning Management System (LMS) for continuous employee growth.",
            "Customized training modules focusing on {focus} skills.",
            "Leadership development programs for high-potential managers.",
            "Micro-learning platforms designed for the modern, mobile workforce.",
        ],
        _ => &[
            "Flexible benefits administration tailored to {focus} workforce needs.",
            "Holistic wellness programs combining physical, mental, and financial health.",
            "Retirement planning and 401(k) management solutions.",
            "Simplified insurance enrollment platforms for better employee engagement.",
        ],
    }
}

/// Baseline `(rating, success rate, response hours)` per tier.
fn baseline(tier: CostTier) -> (f64, f64, f64) {
    match tier {
        CostTier::High => (4.0, 90.0, 2.0),
        CostTier::Medium => (3.5, 80.0, 12.0),
        CostTier::Low => (3.0, 70.0, 24.0),
    }
}

fn pick<'a, T>(rng: &mut StdRng, items: &'a [T]) -> &'a T {
    &items[rng.gen_range(0..items.len())]
}

// Box-Muller
fn normal(rng: &mut StdRng, mean: f64, std_dev: f64) -> f64 {
    let u1: f64 = rng.gen_range(f64::EPSILON..1.0);
    let u2: f64 = rng.gen();
    mean + std_dev * (-2.0 * u1.ln()).sqrt() * (2.0 * std::f64::consts::PI * u2).cos()
}

fn vendor_id(seed: u64, index: usize) -> String {
    let mut hasher = XxHash64::with_seed(seed);
    hasher.write_u64(index as u64);
    format!("{:08x}", hasher.finish() >> 32)
}

fn description(rng: &mut StdRng, category: &str) -> String {
    let body = pick(rng, templates(category))
        .replace("{industry}", *pick(rng, &INDUSTRIES))
        .replace("{focus}", *pick(rng, &FOCUS_AREAS))
        .replace("{region}", *pick(rng, &REGIONS));
    let filler = pick(rng, &FILLERS);
    format!("{body} {filler} We are leaders in {category} services.")
}

pub fn generate(count: usize, seed: u64) -> Vec<VendorRecord> {
    let mut rng = StdRng::seed_from_u64(seed);
    let records: Vec<VendorRecord> = (0..count)
        .map(|index| {
            let category = *pick(&mut rng, &CATEGORIES);
            let cost_tier = *pick(&mut rng, &CostTier::ALL);
            let (base_rating, base_success, base_response) = baseline(cost_tier);

            let rating = (normal(&mut rng, base_rating + 0.3, 0.4) * 10.0).round() / 10.0;
            let success = normal(&mut rng, base_success + 2.0, 5.0).trunc();
            let response = normal(&mut rng, base_response, 5.0).trunc();
            let name = format!(
                "{} {} {}",
                pick(&mut rng, &ADJECTIVES),
                pick(&mut rng, &NOUNS),
                pick(&mut rng, &SUFFIXES)
            );

            VendorRecord {
                id: vendor_id(seed, index),
                name,
                category: category.to_string(),
                cost_tier,
                rating: rating.clamp(MIN_RATING, MAX_RATING),
                response_time: response.max(1.0) as u32,
                success_rate: success.clamp(0.0, f64::from(MAX_SUCCESS_RATE)) as u8,
                description: description(&mut rng, category),
            }
        })
        .collect();
    tracing::debug!(count, seed, "synthetic catalog generated");
    records
}
