use std::cmp::Ordering;

use vendormatch_core::Recommendation;

/// Total order over result entries.
///
/// With a query: confidence desc, rating desc, identifier asc.
/// Without one: rating desc, identifier asc.
pub fn rank_order(has_query: bool, a: &Recommendation<'_>, b: &Recommendation<'_>) -> Ordering {
    let by_confidence = if has_query {
        b.confidence.total_cmp(&a.confidence)
    } else {
        Ordering::Equal
    };
    by_confidence
        .then_with(|| b.record.rating.total_cmp(&a.record.rating))
        .then_with(|| a.record.id.cmp(&b.record.id))
}

#[cfg(test)]
mod tests {
    use super::*;
    use vendormatch_core::{CostTier, VendorRecord};

    fn rec(id: &str, rating: f64) -> VendorRecord {
        VendorRecord {
            id: id.into(),
            name: id.into(),
            category: "Payroll".into(),
            cost_tier: CostTier::Low,
            rating,
            response_time: 1,
            success_rate: 50,
            description: String::new(),
        }
    }

    #[test]
    fn confidence_then_rating_then_id() {
        let (a, b, c) = (rec("a", 3.5), rec("b", 4.5), rec("c", 4.5));
        let hi = Recommendation { record: &a, confidence: 50.0 };
        let lo_b = Recommendation { record: &b, confidence: 10.0 };
        let lo_c = Recommendation { record: &c, confidence: 10.0 };
        assert_eq!(rank_order(true, &hi, &lo_b), Ordering::Less);
        assert_eq!(rank_order(true, &lo_b, &lo_c), Ordering::Less);
        // confidence ignored without a query
        assert_eq!(rank_order(false, &hi, &lo_b), Ordering::Greater);
    }
}
