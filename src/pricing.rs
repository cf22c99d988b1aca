//! Static pricing catalog

use serde::Serialize;

/// One subscription tier shown on the pricing page
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PricingPlan {
    pub name: &'static str,
    pub price: &'static str,
    /// Billing period suffix, empty for custom-quoted plans
    pub period: &'static str,
    pub features: &'static [&'static str],
    pub recommended: bool,
}

static PLANS: [PricingPlan; 3] = [
    PricingPlan {
        name: "基础版",
        price: "¥999",
        period: "/月",
        features: &["最多5个AI模型", "100GB数据处理", "基础技术支持", "标准准确率"],
        recommended: false,
    },
    PricingPlan {
        name: "专业版",
        price: "¥2,999",
        period: "/月",
        features: &[
            "最多20个AI模型",
            "500GB数据处理",
            "优先技术支持",
            "高准确率",
            "API访问",
        ],
        recommended: true,
    },
    PricingPlan {
        name: "企业版",
        price: "定制",
        period: "",
        features: &[
            "无限AI模型",
            "定制数据量",
            "24/7专属支持",
            "最高准确率",
            "完整API访问",
            "定制功能",
        ],
        recommended: false,
    },
];

/// All plans in display order
pub fn plans() -> &'static [PricingPlan] {
    &PLANS
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_three_plans() {
        let names: Vec<_> = plans().iter().map(|p| p.name).collect();
        assert_eq!(names, vec!["基础版", "专业版", "企业版"]);
    }

    #[test]
    fn test_only_professional_recommended() {
        let recommended: Vec<_> = plans().iter().map(|p| p.recommended).collect();
        assert_eq!(recommended, vec![false, true, false]);
    }

    #[test]
    fn test_enterprise_is_custom_quoted() {
        let enterprise = &plans()[2];
        assert_eq!(enterprise.price, "定制");
        assert!(enterprise.period.is_empty());
        assert_eq!(enterprise.features.len(), 6);
    }
}
