//! Static dashboard page. All data comes from `/api/dashboard`.

pub const INDEX_HTML: &str = r##"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>Eye Health Dashboard</title>
    <script src="https://cdn.plot.ly/plotly-2.27.0.min.js"></script>
    <style>
        :root {
            --bg: #0e0e10;
            --card-bg: #1a1a1a;
            --card-border: #444444;
            --font: #00BFFF;
        }
        html, body {
            margin: 0;
            background-color: var(--bg);
            color: var(--font);
            font-family: 'Poppins', sans-serif;
        }
        h1, h2, h3 { color: var(--font); font-weight: 700; }
        .layout { display: flex; min-height: 100vh; }
        aside {
            width: 220px;
            padding: 20px;
            border-right: 1px solid var(--card-border);
        }
        main { flex: 1; padding: 20px 32px; }
        .cards { display: grid; grid-template-columns: repeat(3, 1fr); gap: 16px; }
        .metric {
            background-color: var(--card-bg);
            border: 1px solid var(--card-border);
            border-radius: 12px;
            padding: 12px;
            text-align: center;
        }
        .metric .value { font-size: 1.8em; font-weight: 700; }
        .notice {
            padding: 12px;
            border-radius: 8px;
            border: 1px solid var(--card-border);
            background-color: var(--card-bg);
        }
        .notice.error { color: #ff4d6d; }
        table { border-collapse: collapse; width: 100%; }
        th, td { border: 1px solid var(--card-border); padding: 4px 8px; text-align: right; }
        label { display: block; margin: 6px 0; cursor: pointer; }
    </style>
</head>
<body>
<div class="layout">
    <aside>
        <label><input type="checkbox" id="dark-mode" checked> Dark mode</label>
        <h3>Resampling interval</h3>
        <div id="granularities"></div>
    </aside>
    <main>
        <h1>Eye Health Monitoring</h1>
        <div id="status"></div>
        <section id="content" hidden>
            <h2>Averages</h2>
            <div class="cards" id="cards"></div>
            <h2>Trends</h2>
            <div id="charts"></div>
            <details>
                <summary>Show full data</summary>
                <div id="table"></div>
            </details>
        </section>
    </main>
</div>
<script>
let granularity = null;

function applyTheme(theme) {
    const root = document.documentElement.style;
    root.setProperty('--bg', theme.background);
    root.setProperty('--card-bg', theme.card_background);
    root.setProperty('--card-border', theme.card_border);
    root.setProperty('--font', theme.font_color);
}

function showStatus(message, isError) {
    const status = document.getElementById('status');
    status.innerHTML = '';
    if (!message) return;
    const box = document.createElement('div');
    box.className = isError ? 'notice error' : 'notice';
    box.textContent = message;
    status.appendChild(box);
}

function renderCards(cards) {
    const container = document.getElementById('cards');
    container.innerHTML = '';
    for (const card of cards) {
        const el = document.createElement('div');
        el.className = 'metric';
        el.innerHTML = '<div></div><div class="value"></div>';
        el.children[0].textContent = card.label;
        el.children[1].textContent = card.value;
        container.appendChild(el);
    }
}

function renderCharts(charts) {
    const container = document.getElementById('charts');
    container.innerHTML = '';
    for (const chart of charts) {
        const el = document.createElement('div');
        container.appendChild(el);
        const trace = { type: 'bar', x: chart.x, y: chart.y, marker: { color: chart.color } };
        const layout = Object.assign({ title: { text: chart.title } }, chart.layout);
        Plotly.newPlot(el, [trace], layout, { responsive: true });
    }
}

function renderTable(rows) {
    const container = document.getElementById('table');
    if (rows.length === 0) { container.innerHTML = ''; return; }
    const columns = Object.keys(rows[0]);
    const head = '<tr>' + columns.map(c => '<th>' + c + '</th>').join('') + '</tr>';
    const body = rows.map(r => '<tr>' + columns.map(c => '<td>' + r[c] + '</td>').join('') + '</tr>').join('');
    container.innerHTML = '<table>' + head + body + '</table>';
}

async function refresh() {
    const dark = document.getElementById('dark-mode').checked;
    const params = new URLSearchParams({ granularity, dark });
    const response = await fetch('/api/dashboard?' + params);
    const payload = await response.json();
    const content = document.getElementById('content');

    if (!response.ok) {
        content.hidden = true;
        if (payload.code === 'NO_DATA') {
            showStatus('No data available.', false);
        } else {
            showStatus(payload.message, true);
        }
        return;
    }

    applyTheme(payload.theme);
    showStatus(null);
    renderCards(payload.cards);
    renderCharts(payload.charts);
    renderTable(payload.table);
    content.hidden = false;
}

async function init() {
    const response = await fetch('/api/granularities');
    const config = await response.json();
    granularity = config.default;
    document.getElementById('dark-mode').checked = config.dark_mode;

    const container = document.getElementById('granularities');
    for (const option of config.options) {
        const label = document.createElement('label');
        const input = document.createElement('input');
        input.type = 'radio';
        input.name = 'granularity';
        input.value = option.label;
        input.checked = option.label === granularity;
        input.addEventListener('change', () => { granularity = option.label; refresh(); });
        label.appendChild(input);
        label.appendChild(document.createTextNode(' ' + option.label));
        container.appendChild(label);
    }

    document.getElementById('dark-mode').addEventListener('change', refresh);
    await refresh();
}

init();
</script>
</body>
</html>
"##;
