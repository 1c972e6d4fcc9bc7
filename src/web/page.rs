use crate::layout::DashboardLayout;

/// Render the dashboard page with the layout embedded as JSON.
pub fn render(layout: &DashboardLayout) -> String {
    // Layout only holds plain serialisable data, so this cannot fail.
    let json = serde_json::to_string(layout).unwrap_or_else(|_| "null".to_string());
    // Keep a site name like "</script>" from closing the inline script.
    let json = json.replace("</", "<\\/");
    DASHBOARD_HTML
        .replace("__TITLE__", &escape_html(&layout.title))
        .replace("__LAYOUT_JSON__", &json)
}

fn escape_html(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}

const DASHBOARD_HTML: &str = r##"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>__TITLE__</title>
    <script src="https://cdn.plot.ly/plotly-2.35.2.min.js"></script>
    <style>
        body { font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', Helvetica, Arial, sans-serif; margin: 20px; }
        h1 { text-align: center; color: #503D36; font-size: 40px; }
        .control { margin: 16px 0; }
        .range { display: flex; gap: 16px; align-items: center; }
        .range input[type=range] { flex: 1; }
        .marks { display: flex; justify-content: space-between; font-size: 12px; color: #666; }
        .warn { color: #b58900; font-size: 13px; }
    </style>
</head>
<body>
    <h1>__TITLE__</h1>
    <div class="control">
        <input id="site-search" type="search" placeholder="">
        <select id="site-dropdown"></select>
    </div>
    <div id="success-pie-chart"></div>
    <div class="control">
        <p id="payload-label"></p>
        <div class="range">
            <input id="payload-low" type="range">
            <input id="payload-high" type="range">
            <span id="payload-value"></span>
        </div>
        <div class="marks" id="payload-marks"></div>
        <div class="warn" id="payload-warn"></div>
    </div>
    <div id="success-payload-scatter-chart"></div>

<script>
const LAYOUT = __LAYOUT_JSON__;

const dropdown = document.getElementById('site-dropdown');
const search = document.getElementById('site-search');
const low = document.getElementById('payload-low');
const high = document.getElementById('payload-high');

function setupControls() {
    const dd = LAYOUT.site_dropdown;
    search.placeholder = dd.placeholder;
    search.hidden = !dd.searchable;
    fillOptions('');
    dropdown.value = dd.value;

    const s = LAYOUT.payload_slider;
    for (const input of [low, high]) {
        input.min = s.min;
        input.max = s.max;
        input.step = 1;
    }
    low.value = s.value.low;
    high.value = s.value.high;
    document.getElementById('payload-label').textContent = LAYOUT.payload_label;
    const marks = document.getElementById('payload-marks');
    for (const m of s.marks) {
        const span = document.createElement('span');
        span.textContent = m.label;
        marks.appendChild(span);
    }
}

function fillOptions(filter) {
    const current = dropdown.value;
    dropdown.innerHTML = '';
    for (const opt of LAYOUT.site_dropdown.options) {
        if (filter && !opt.label.toLowerCase().includes(filter.toLowerCase())) continue;
        const el = document.createElement('option');
        el.value = opt.value;
        el.textContent = opt.label;
        dropdown.appendChild(el);
    }
    if (current) dropdown.value = current;
}

function snap(input) {
    // Inputs use step 1 so the observed min/max default is not rounded away.
    const step = LAYOUT.payload_slider.step;
    return Math.round(Number(input.value) / step) * step;
}

function rangeValue() {
    return { low: Number(low.value), high: Number(high.value) };
}

async function fetchJson(url) {
    const resp = await fetch(url);
    if (!resp.ok) throw new Error(await resp.text());
    return resp.json();
}

async function updatePie() {
    const site = encodeURIComponent(dropdown.value);
    const pie = await fetchJson(`/api/charts/site-success?site=${site}`);
    Plotly.react(LAYOUT.pie_chart_id, [{
        type: 'pie',
        labels: pie.slices.map(s => s.label),
        values: pie.slices.map(s => s.count),
        marker: { colors: pie.slices.map(s => s.color) },
        hole: pie.hole,
        sort: false,
        direction: 'clockwise',
    }], { title: pie.title });
}

async function updateScatter() {
    const site = encodeURIComponent(dropdown.value);
    const r = rangeValue();
    document.getElementById('payload-value').textContent = `${r.low} – ${r.high} kg`;
    document.getElementById('payload-warn').textContent =
        r.low >= r.high ? 'Empty range: min ≥ max' : '';
    const chart = await fetchJson(
        `/api/charts/payload-outcome?site=${site}&low=${r.low}&high=${r.high}`);

    // One trace per booster version so the colour scale shows as a legend.
    const traces = chart.color_scale.map(stop => {
        const pts = chart.points.filter(p => p.booster_version === stop.label);
        return {
            type: 'scatter',
            mode: 'markers',
            name: stop.label,
            x: pts.map(p => p.payload_mass_kg),
            y: pts.map(p => p.outcome),
            hovertext: pts.map(p => p.hover_text),
            marker: { size: pts.map(p => p.size), color: stop.color },
            visible: pts.length ? true : 'legendonly',
        };
    });
    Plotly.react(LAYOUT.scatter_chart_id, traces, {
        title: chart.title,
        xaxis: { title: chart.x_title },
        yaxis: { title: chart.y_title, tickvals: [0, 1] },
        showlegend: true,
    });
}

function report(err) {
    console.error(err);
}

search.addEventListener('input', () => fillOptions(search.value));
dropdown.addEventListener('change', () => {
    updatePie().catch(report);
    updateScatter().catch(report);
});
for (const input of [low, high]) {
    input.addEventListener('change', () => {
        input.value = snap(input);
        updateScatter().catch(report);
    });
}

setupControls();
updatePie().catch(report);
updateScatter().catch(report);
</script>
</body>
</html>
"##;
