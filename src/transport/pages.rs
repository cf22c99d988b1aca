//! Server-rendered pages

use super::assets::{DASHBOARD_JS, PLOTLY_CDN, STYLES};
use crate::charts::SerializedChart;
use crate::config::AppConfig;
use crate::contact::ContactForm;
use crate::metrics::{Feature, MetricsSnapshot};
use crate::pricing::PricingPlan;
use maud::{html, Markup, PreEscaped, DOCTYPE};

/// Top-level navigation entries
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Nav {
    Home,
    Dashboard,
    Pricing,
    Contact,
    None,
}

const NAV_LINKS: [(Nav, &str, &str); 4] = [
    (Nav::Home, "/", "首页"),
    (Nav::Dashboard, "/dashboard", "仪表盘"),
    (Nav::Pricing, "/pricing", "定价"),
    (Nav::Contact, "/contact", "联系我们"),
];

fn build_info() -> String {
    format!(
        "v{} ({}, {})",
        env!("CARGO_PKG_VERSION"),
        env!("AI_DASHBOARD_GIT_HASH"),
        env!("AI_DASHBOARD_BUILD_DATE")
    )
}

fn layout(site: &str, page_title: &str, active: Nav, head_extra: Markup, content: Markup) -> Markup {
    html! {
        (DOCTYPE)
        html lang="zh-CN" {
            head {
                meta charset="utf-8";
                meta name="viewport" content="width=device-width, initial-scale=1.0";
                title { (page_title) " - " (site) }
                style { (PreEscaped(STYLES)) }
                (head_extra)
            }
            body {
                nav {
                    a.brand href="/" { (site) }
                    div.nav-links {
                        @for (entry, href, label) in NAV_LINKS {
                            a.active[entry == active] href=(href) { (label) }
                        }
                    }
                }
                main { (content) }
                footer { "© " (site) " · " (build_info()) }
            }
        }
    }
}

/// Make JSON safe to place inside a `<script>` element
///
/// `<` only occurs inside JSON strings, where `<` is an equivalent
/// escape, so the document still parses to the same value.
pub fn script_safe_json(json: &str) -> String {
    json.replace('<', "\\u003c")
}

pub fn index(app: &AppConfig) -> Markup {
    let content = html! {
        section.hero {
            h1 { (app.title) }
            p.subtitle { "用人工智能驱动业务决策：实时监控模型表现，洞察功能使用趋势。" }
            a.button href="/dashboard" { "进入仪表盘" }
            a.button.secondary href="/pricing" { "查看定价" }
        }
        div.grid {
            @for feature in Feature::ALL {
                div.card {
                    div.stat-label { "核心能力" }
                    div.stat-value { (feature.label()) }
                }
            }
        }
    };
    layout(&app.title, "首页", Nav::Home, html! {}, content)
}

pub fn dashboard(
    app: &AppConfig,
    metrics: &MetricsSnapshot,
    performance: &SerializedChart,
    usage: &SerializedChart,
) -> Markup {
    let refresh_ms = app.refresh_interval_secs.saturating_mul(1000);
    let data = format!(
        "window.dashboardData = {{\"performance\": {}, \"usage\": {}, \"refreshMs\": {}}};",
        script_safe_json(performance.as_str()),
        script_safe_json(usage.as_str()),
        refresh_ms
    );

    let head_extra = html! {
        script src=(PLOTLY_CDN) {}
    };

    let content = html! {
        h1 { "AI 仪表盘" }
        p.subtitle { "模型性能与系统运行状态总览" }
        div.grid {
            div.card {
                div.stat-label { "模型准确率" }
                div.stat-value #model-accuracy { (format!("{:.1}%", metrics.model_accuracy)) }
            }
            div.card {
                div.stat-label { "响应时间" }
                div.stat-value #response-time { (metrics.response_time) "ms" }
            }
            div.card {
                div.stat-label { "活跃用户" }
                div.stat-value #active-users { (metrics.active_users) }
            }
            div.card {
                div.stat-label { "已处理数据" }
                div.stat-value #data-processed { (metrics.data_processed) }
            }
            div.card {
                div.stat-label { "系统状态" }
                div.stat-value.status-ok #system-status { (metrics.system_status) }
            }
            div.card {
                div.stat-label { "可用性" }
                div.stat-value #uptime { (metrics.uptime) }
            }
        }
        div.chart-container #performance-chart {}
        div.chart-container #usage-chart {}
        script { (PreEscaped(data)) }
        script { (PreEscaped(DASHBOARD_JS)) }
    };
    layout(&app.title, "仪表盘", Nav::Dashboard, head_extra, content)
}

pub fn pricing(app: &AppConfig, plans: &[PricingPlan]) -> Markup {
    let content = html! {
        h1 { "选择适合您的方案" }
        p.subtitle { "所有方案均包含核心 AI 分析能力" }
        div.grid {
            @for plan in plans {
                div.card.plan.recommended[plan.recommended] {
                    @if plan.recommended {
                        span.badge { "推荐" }
                    }
                    h2 { (plan.name) }
                    div.price {
                        (plan.price)
                        span.period { (plan.period) }
                    }
                    ul {
                        @for feature in plan.features {
                            li { "✓ " (feature) }
                        }
                    }
                    a.button href="/contact" { "联系销售" }
                }
            }
        }
    };
    layout(&app.title, "定价", Nav::Pricing, html! {}, content)
}

pub fn contact(app: &AppConfig, form: ContactForm) -> Markup {
    let content = html! {
        h1 { "联系我们" }
        p.subtitle { "留下您的信息，我们的团队会尽快回复。" }
        @if form.success() {
            div.alert.success #contact-success { "感谢您的留言！我们会尽快与您联系。" }
        }
        form.contact method="post" action="/contact" novalidate {
            label for="name" { "姓名" }
            input #name type="text" name="name";
            label for="email" { "邮箱" }
            input #email type="email" name="email";
            label for="message" { "留言" }
            textarea #message name="message" {}
            button.button type="submit" { "发送" }
        }
    };
    layout(&app.title, "联系我们", Nav::Contact, html! {}, content)
}

pub fn not_found() -> Markup {
    let site = AppConfig::default().title;
    let content = html! {
        section.hero {
            h1 { "404" }
            p.subtitle { "页面不存在" }
            a.button href="/" { "返回首页" }
        }
    };
    layout(&site, "页面不存在", Nav::None, html! {}, content)
}

pub fn server_error() -> Markup {
    let site = AppConfig::default().title;
    let content = html! {
        section.hero {
            h1 { "500" }
            p.subtitle { "服务器内部错误，请稍后重试" }
        }
    };
    layout(&site, "服务器错误", Nav::None, html! {}, content)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::charts::encode_bar_chart;
    use crate::metrics::{generate_metrics, generate_usage_series, usage_columns, SeededRandom};

    #[test]
    fn test_script_safe_json() {
        let json = r#"{"t":"a<br>b</script>"}"#;
        let safe = script_safe_json(json);
        assert!(!safe.contains('<'));

        let original: serde_json::Value = serde_json::from_str(json).unwrap();
        let escaped: serde_json::Value = serde_json::from_str(&safe).unwrap();
        assert_eq!(original, escaped);
    }

    #[test]
    fn test_contact_banner_toggles() {
        let app = AppConfig::default();
        let blank = contact(&app, ContactForm::Unsubmitted).into_string();
        let done = contact(&app, ContactForm::Acknowledged).into_string();

        assert!(!blank.contains("contact-success"));
        assert!(done.contains("contact-success"));
        assert!(blank.contains(r#"action="/contact""#));
    }

    #[test]
    fn test_pricing_marks_recommended() {
        let html = pricing(&AppConfig::default(), crate::pricing::plans()).into_string();
        assert_eq!(html.matches("plan recommended").count(), 1);
        assert!(html.contains("¥2,999"));
    }

    #[test]
    fn test_dashboard_embeds_charts() {
        let mut rng = SeededRandom::new(6);
        let metrics = generate_metrics(&mut rng);
        let usage = generate_usage_series(&mut rng);
        let chart = encode_bar_chart(
            usage.as_slice(),
            usage_columns::FEATURE,
            usage_columns::COUNT,
            "功能使用情况",
            usage_columns::COUNT,
        )
        .unwrap();

        let html = dashboard(&AppConfig::default(), &metrics, &chart, &chart).into_string();
        assert!(html.contains("window.dashboardData"));
        assert!(html.contains("\"refreshMs\": 5000"));
        assert!(html.contains(&format!("{:.1}%", metrics.model_accuracy)));
        assert!(!html.contains("<br>"));
    }

    #[test]
    fn test_active_nav() {
        let html = index(&AppConfig::default()).into_string();
        assert_eq!(html.matches(r#"class="active""#).count(), 1);
        assert!(html.contains("首页"));
    }
}
