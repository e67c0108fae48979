use api_client::{Allocation, RecommendationResponse};

/// `Built for Long Term • Aggressive style`
pub fn recommendation_header(response: &RecommendationResponse) -> String {
    format!(
        "Built for {} • {} style",
        response.investment_horizon, response.risk_profile
    )
}

/// One row of the allocation legend.
#[derive(Debug, Clone, PartialEq)]
pub struct LegendEntry {
    pub text: String,
    /// Lowercased category, used to pick the swatch style.
    pub css_class: String,
}

pub fn legend_entries(allocation: &Allocation) -> Vec<LegendEntry> {
    allocation
        .iter()
        .map(|(category, percent)| LegendEntry {
            text: format!("{} • {}%", category, percent),
            css_class: category.to_lowercase(),
        })
        .collect()
}

/// A plain-language reading of how growth-oriented an allocation is,
/// based on its equity share.
pub fn allocation_explanation(allocation: &Allocation) -> &'static str {
    let equity = allocation.get("Equity").copied().unwrap_or(0.0);

    if equity >= 65.0 {
        "Most of your money is set up for long-term growth. Short-term ups and downs are normal, this is how wealth is built."
    } else if equity >= 40.0 {
        "This is a balanced setup: your money grows steadily without extreme swings."
    } else {
        "This portfolio focuses more on stability, keeping your money safer while it grows gradually."
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct FundCard {
    pub scheme_name: String,
    pub sub_category: String,
    /// e.g. `cagr 5y: 14.2%`, or `cagr 5y: N/A` when the fund lacks the metric.
    pub metric: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct FundSection {
    /// e.g. `Equity Funds`
    pub title: String,
    pub cards: Vec<FundCard>,
}

/// The metric name as shown to users: its first underscore becomes a space.
pub fn metric_label(metric_used: &str) -> String {
    metric_used.replacen('_', " ", 1)
}

/// Fund cards grouped by category, in service order. Empty categories are skipped.
pub fn fund_sections(response: &RecommendationResponse) -> Vec<FundSection> {
    let label = metric_label(&response.metric_used);

    response
        .recommended_funds
        .iter()
        .filter(|(_, funds)| !funds.is_empty())
        .map(|(category, funds)| FundSection {
            title: format!("{} Funds", category),
            cards: funds
                .iter()
                .map(|fund| FundCard {
                    scheme_name: fund.scheme_name.clone(),
                    sub_category: fund.sub_category.clone(),
                    metric: match fund.metric(&response.metric_used) {
                        Some(value) => format!("{}: {}%", label, value),
                        None => format!("{}: N/A", label),
                    },
                })
                .collect(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn response(allocation: &str) -> RecommendationResponse {
        serde_json::from_str(&format!(
            r#"{{
                "investment_horizon": "Long Term",
                "risk_profile": "Aggressive",
                "allocation": {allocation},
                "recommended_funds": {{
                    "Equity": [
                        {{"scheme_name": "Alpha Bluechip", "sub_category": "Large Cap", "cagr_5y": 14.2}},
                        {{"scheme_name": "Beta Midcap", "sub_category": "Mid Cap"}}
                    ],
                    "Debt": [],
                    "Hybrid": [{{"scheme_name": "Balanced Advantage", "sub_category": "Dynamic", "cagr_5y": 9}}]
                }},
                "metric_used": "cagr_5y"
            }}"#
        ))
        .unwrap()
    }

    #[test]
    fn header_and_legend() {
        let response = response(r#"{"Equity": 65, "Debt": 25.5, "Hybrid": 9.5}"#);
        assert_eq!(recommendation_header(&response), "Built for Long Term • Aggressive style");

        let legend = legend_entries(&response.allocation);
        assert_eq!(legend[0].text, "Equity • 65%");
        assert_eq!(legend[1].text, "Debt • 25.5%");
        assert_eq!(legend[2].css_class, "hybrid");
    }

    #[test]
    fn explanation_follows_equity_share() {
        let growth = response(r#"{"Equity": 65, "Debt": 35}"#);
        let balanced = response(r#"{"Equity": 40, "Debt": 60}"#);
        let stable = response(r#"{"Equity": 39.9, "Debt": 60.1}"#);
        let no_equity = response(r#"{"Debt": 100}"#);

        assert!(allocation_explanation(&growth.allocation).starts_with("Most of your money"));
        assert!(allocation_explanation(&balanced.allocation).starts_with("This is a balanced setup"));
        assert!(allocation_explanation(&stable.allocation).starts_with("This portfolio focuses"));
        assert_eq!(
            allocation_explanation(&no_equity.allocation),
            allocation_explanation(&stable.allocation)
        );
    }

    #[test]
    fn fund_sections_skip_empty_categories() {
        let response = response(r#"{"Equity": 100}"#);
        let sections = fund_sections(&response);

        let titles: Vec<&str> = sections.iter().map(|s| s.title.as_str()).collect();
        assert_eq!(titles, ["Equity Funds", "Hybrid Funds"]);
        assert_eq!(sections[0].cards[0].metric, "cagr 5y: 14.2%");
        assert_eq!(sections[0].cards[1].metric, "cagr 5y: N/A");
        assert_eq!(sections[1].cards[0].metric, "cagr 5y: 9%");
    }
}
