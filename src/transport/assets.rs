//! Static stylesheet and scripts embedded in the pages

pub const PLOTLY_CDN: &str = "https://cdn.plot.ly/plotly-2.27.0.min.js";

pub const STYLES: &str = r#"
* {
    margin: 0;
    padding: 0;
    box-sizing: border-box;
}

body {
    font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', 'PingFang SC', 'Microsoft YaHei', sans-serif;
    background: #0f172a;
    color: #e2e8f0;
    min-height: 100vh;
    display: flex;
    flex-direction: column;
}

a {
    color: inherit;
    text-decoration: none;
}

nav {
    display: flex;
    align-items: center;
    justify-content: space-between;
    padding: 16px 32px;
    border-bottom: 2px solid #1e293b;
}

.brand {
    font-size: 1.4rem;
    font-weight: 700;
    background: linear-gradient(135deg, #3b82f6 0%, #8b5cf6 100%);
    -webkit-background-clip: text;
    -webkit-text-fill-color: transparent;
}

.nav-links a {
    margin-left: 24px;
    color: #94a3b8;
}

.nav-links a.active,
.nav-links a:hover {
    color: #e2e8f0;
}

main {
    flex: 1;
    width: 100%;
    max-width: 1400px;
    margin: 0 auto;
    padding: 32px 20px;
}

footer {
    text-align: center;
    padding: 20px;
    color: #64748b;
    font-size: 0.8rem;
    border-top: 1px solid #1e293b;
}

h1 {
    font-size: 2.5rem;
    margin-bottom: 12px;
}

.subtitle {
    color: #94a3b8;
    font-size: 1.1rem;
    margin-bottom: 28px;
}

.hero {
    text-align: center;
    padding: 60px 0;
}

.button {
    display: inline-block;
    padding: 12px 28px;
    margin: 0 8px;
    border-radius: 8px;
    background: #3b82f6;
    color: #fff;
    border: none;
    font-size: 1rem;
    cursor: pointer;
}

.button.secondary {
    background: #1e293b;
    border: 1px solid #334155;
}

.grid {
    display: grid;
    grid-template-columns: repeat(auto-fit, minmax(220px, 1fr));
    gap: 20px;
    margin-bottom: 30px;
}

.card {
    background: #1e293b;
    border-radius: 12px;
    padding: 24px;
    border: 1px solid #334155;
    transition: transform 0.2s, box-shadow 0.2s;
}

.card:hover {
    transform: translateY(-2px);
    box-shadow: 0 8px 24px rgba(59, 130, 246, 0.2);
}

.stat-label {
    font-size: 0.875rem;
    color: #94a3b8;
    text-transform: uppercase;
    letter-spacing: 0.5px;
    margin-bottom: 8px;
}

.stat-value {
    font-size: 2rem;
    font-weight: 700;
}

.status-ok {
    color: #10b981;
}

.chart-container {
    background: #1e293b;
    border-radius: 12px;
    padding: 24px;
    margin-bottom: 30px;
    border: 1px solid #334155;
    min-height: 420px;
}

.plan {
    position: relative;
    text-align: center;
}

.plan.recommended {
    border: 2px solid #3b82f6;
}

.badge {
    position: absolute;
    top: -12px;
    left: 50%;
    transform: translateX(-50%);
    background: #3b82f6;
    color: #fff;
    padding: 2px 12px;
    border-radius: 999px;
    font-size: 0.8rem;
}

.price {
    font-size: 2.2rem;
    font-weight: 700;
    margin: 16px 0;
}

.period {
    font-size: 1rem;
    color: #94a3b8;
}

.plan ul {
    list-style: none;
    margin-bottom: 24px;
}

.plan li {
    padding: 6px 0;
    color: #cbd5e1;
}

form.contact {
    max-width: 560px;
}

form.contact label {
    display: block;
    margin: 16px 0 6px;
    color: #94a3b8;
}

form.contact input,
form.contact textarea {
    width: 100%;
    padding: 10px 12px;
    border-radius: 8px;
    border: 1px solid #334155;
    background: #0f172a;
    color: #e2e8f0;
    font-size: 1rem;
}

form.contact textarea {
    min-height: 140px;
}

form.contact .button {
    margin: 20px 0 0;
}

.alert {
    padding: 14px 18px;
    border-radius: 8px;
    margin-bottom: 20px;
}

.alert.success {
    background: rgba(16, 185, 129, 0.15);
    border: 1px solid #10b981;
    color: #6ee7b7;
}
"#;

/// Draws both charts and keeps the metric cards fresh
///
/// Reads `window.dashboardData`, written by the dashboard page.
pub const DASHBOARD_JS: &str = r#"
(function () {
    const data = window.dashboardData;
    const config = { responsive: true, displaylogo: false };

    Plotly.newPlot('performance-chart', data.performance.data, data.performance.layout, config);
    Plotly.newPlot('usage-chart', data.usage.data, data.usage.layout, config);

    function setText(id, value) {
        const el = document.getElementById(id);
        if (el) el.textContent = value;
    }

    async function refreshMetrics() {
        try {
            const res = await fetch('/api/real-time-metrics');
            if (!res.ok) return;
            const m = await res.json();
            setText('model-accuracy', m.model_accuracy.toFixed(1) + '%');
            setText('response-time', m.response_time + 'ms');
            setText('active-users', String(m.active_users));
            setText('data-processed', String(m.data_processed));
            setText('system-status', m.system_status);
            setText('uptime', m.uptime);
        } catch (err) {
            console.error('Failed to refresh metrics', err);
        }
    }

    if (data.refreshMs > 0) {
        setInterval(refreshMetrics, data.refreshMs);
    }
})();
"#;
