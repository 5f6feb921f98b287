//! Embedded dashboard page.
//!
//! A single static page: upload a report, render the returned view
//! (summary, gauge cards, grouped table, insights, doctor questions),
//! and chat about the result. All rendering decisions are made
//! server-side; the page only injects the view JSON.

use axum::response::Html;

pub async fn dashboard() -> Html<&'static str> {
    Html(DASHBOARD_HTML)
}

const DASHBOARD_HTML: &str = r##"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="utf-8">
  <meta name="viewport" content="width=device-width, initial-scale=1">
  <title>ClearHealth — Understand your results</title>
  <style>
    * { box-sizing: border-box; margin: 0; padding: 0; }
    body {
      font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', system-ui, sans-serif;
      background: #f8fafc; color: #0f172a; padding: 24px; padding-bottom: 80px;
    }
    .wrap { max-width: 960px; margin: 0 auto; }
    h1 { font-size: 28px; margin-bottom: 8px; }
    h1 span { color: #0d9488; }
    .tagline { color: #64748b; margin-bottom: 24px; }
    .card {
      background: white; border: 1px solid #e2e8f0; border-radius: 16px;
      padding: 20px; margin-bottom: 20px;
    }
    .upload input[type=file] { display: none; }
    .btn {
      display: inline-block; padding: 12px 20px; border-radius: 10px;
      background: #0d9488; color: white; font-size: 15px; font-weight: 500;
      border: none; cursor: pointer;
    }
    .btn:disabled { opacity: 0.5; cursor: not-allowed; }
    .status { margin-top: 12px; font-size: 14px; color: #64748b; }
    .status.error { color: #dc2626; }
    h2 { font-size: 18px; margin-bottom: 12px; }
    .gauges { display: grid; grid-template-columns: repeat(auto-fill, minmax(180px, 1fr)); gap: 16px; }
    .gauge-card { text-align: center; }
    .gauge-card h4 { font-size: 13px; margin-bottom: 8px; min-height: 32px; }
    .gauge-card .value { font-size: 20px; font-weight: 700; color: #0d9488; }
    .gauge-card .value.out { color: #dc2626; }
    .gauge-card .range { font-size: 11px; color: #94a3b8; margin-top: 4px; }
    table { width: 100%; border-collapse: collapse; font-size: 14px; }
    th { text-align: left; color: #64748b; font-weight: 600; padding: 8px; border-bottom: 1px solid #e2e8f0; }
    td { padding: 8px; border-bottom: 1px solid #f1f5f9; vertical-align: middle; }
    td .value.out { color: #dc2626; font-weight: 700; }
    .badge {
      display: inline-block; padding: 3px 10px; border-radius: 999px;
      font-size: 12px; font-weight: 600; border: 1px solid transparent;
    }
    .badge.positive { color: #047857; background: #ecfdf5; border-color: #a7f3d0; }
    .badge.warning { color: #b45309; background: #fffbeb; border-color: #fde68a; }
    .badge.alert { color: #b91c1c; background: #fef2f2; border-color: #fecaca; }
    .badge.neutral { color: #475569; background: #f1f5f9; border-color: #e2e8f0; }
    .insight { border: 1px solid #f1f5f9; border-radius: 12px; padding: 14px; margin-bottom: 10px; }
    .insight h3 { font-size: 14px; margin-bottom: 4px; }
    .insight p { font-size: 13px; color: #475569; }
    .insight .tags { margin-top: 6px; }
    .insight .tags span {
      font-size: 10px; text-transform: uppercase; letter-spacing: 0.05em;
      border: 1px solid #e2e8f0; border-radius: 6px; padding: 2px 6px; margin-right: 6px;
      color: #64748b;
    }
    .questions li { margin: 8px 0 8px 20px; font-size: 14px; }
    .chat-log { max-height: 320px; overflow-y: auto; margin-bottom: 12px; }
    .msg { margin-bottom: 10px; display: flex; }
    .msg .bubble {
      padding: 10px 14px; border-radius: 14px; font-size: 14px; max-width: 80%;
    }
    .msg.user { justify-content: flex-end; }
    .msg.user .bubble { background: #f1f5f9; }
    .msg.model .bubble { background: #0d9488; color: white; }
    .chat-input { display: flex; gap: 8px; }
    .chat-input input {
      flex: 1; padding: 10px 14px; border: 1px solid #e2e8f0; border-radius: 10px;
      font-size: 14px; outline: none;
    }
    .chat-input input:focus { border-color: #0d9488; }
    .suggestions { margin-bottom: 10px; }
    .suggestions button {
      font-size: 12px; border: 1px solid #e2e8f0; background: white; border-radius: 999px;
      padding: 4px 10px; margin: 0 6px 6px 0; cursor: pointer; color: #475569;
    }
    .disclaimer {
      position: fixed; bottom: 0; left: 0; right: 0; background: #0f172a; color: #94a3b8;
      font-size: 12px; text-align: center; padding: 10px;
    }
    .hidden { display: none; }
  </style>
</head>
<body>
  <div class="wrap">
    <h1>Decide with Data. <span>Understand your Health.</span></h1>
    <p class="tagline">Upload your medical report and get an instant, AI-powered breakdown of your health metrics.</p>

    <div class="card upload">
      <label class="btn" id="upload-btn" for="file-input">Upload a report</label>
      <input type="file" id="file-input" accept="image/*,application/pdf">
      <div class="status" id="status"></div>
    </div>

    <div id="results" class="hidden">
      <div class="card">
        <h2>Executive Summary</h2>
        <p id="summary"></p>
      </div>

      <div class="card" id="gauges-card">
        <h2>Key Metrics</h2>
        <div class="gauges" id="gauges"></div>
      </div>

      <div id="categories"></div>

      <div class="card">
        <h2>Deep Dive Analysis</h2>
        <div id="insights"></div>
      </div>

      <div class="card">
        <h2>Questions for your Doctor</h2>
        <ol class="questions" id="questions"></ol>
      </div>

      <div class="card">
        <h2>Ask Follow-up Questions</h2>
        <div class="chat-log" id="chat-log"></div>
        <div class="suggestions" id="suggestions"></div>
        <div class="chat-input">
          <input id="chat-text" placeholder="Ask about your results..." maxlength="2000">
          <button class="btn" id="chat-send">Send</button>
        </div>
      </div>
    </div>
  </div>

  <div class="disclaimer">
    AI analysis for informational purposes only. Results may contain errors.
    Always consult a physician for medical advice.
  </div>

  <script>
    var fileInput = document.getElementById('file-input');
    var statusEl = document.getElementById('status');
    var chatText = document.getElementById('chat-text');
    var chatSend = document.getElementById('chat-send');

    function el(tag, className, text) {
      var node = document.createElement(tag);
      if (className) node.className = className;
      if (text !== undefined) node.textContent = text;
      return node;
    }

    fileInput.addEventListener('change', function () {
      if (!fileInput.files.length) return;
      var form = new FormData();
      form.append('file', fileInput.files[0]);

      fileInput.disabled = true;
      statusEl.className = 'status';
      statusEl.textContent = 'Analyzing your report...';
      document.getElementById('results').classList.add('hidden');

      fetch('/api/analyze', { method: 'POST', body: form })
        .then(function (res) {
          return res.json().then(function (json) { return { ok: res.ok, json: json }; });
        })
        .then(function (out) {
          if (!out.ok) throw new Error(out.json.error ? out.json.error.message : 'Analysis failed.');
          statusEl.textContent = '';
          renderReport(out.json);
          loadChat();
        })
        .catch(function (err) {
          statusEl.className = 'status error';
          statusEl.textContent = err.message;
        })
        .then(function () {
          fileInput.disabled = false;
          fileInput.value = '';
        });
    });

    function renderReport(view) {
      document.getElementById('results').classList.remove('hidden');
      document.getElementById('summary').textContent = view.summary;

      var gauges = document.getElementById('gauges');
      gauges.innerHTML = '';
      document.getElementById('gauges-card').classList.toggle('hidden', !view.keyMetrics.length);
      view.keyMetrics.forEach(function (card) {
        var node = el('div', 'gauge-card');
        node.appendChild(el('h4', null, card.testName));
        var svgHolder = el('div');
        svgHolder.innerHTML = card.svg;
        node.appendChild(svgHolder);
        var value = el('div', card.outOfRange ? 'value out' : 'value', card.displayValue + ' ');
        value.appendChild(el('span', null, card.unit));
        node.appendChild(value);
        node.appendChild(el('div', 'range', 'Range: ' + card.rangeMin + ' - ' + card.rangeMax));
        gauges.appendChild(node);
      });

      var categories = document.getElementById('categories');
      categories.innerHTML = '';
      view.categories.forEach(function (category) {
        var card = el('div', 'card');
        card.appendChild(el('h2', null, category.name + ' (' + category.testCount + ' tests)'));
        var table = el('table');
        var head = el('tr');
        ['Test Name', 'Value', 'Reference Range', 'Status'].forEach(function (h) {
          head.appendChild(el('th', null, h));
        });
        table.appendChild(head);
        category.rows.forEach(function (row) {
          var tr = el('tr');
          tr.appendChild(el('td', null, row.testName));
          var valueTd = el('td');
          valueTd.appendChild(el('span', row.outOfRange ? 'value out' : 'value', row.displayValue + ' ' + row.unit));
          tr.appendChild(valueTd);
          tr.appendChild(el('td', null, row.referenceRange || 'N/A'));
          var statusTd = el('td');
          if (row.gaugeSvg) {
            statusTd.innerHTML = row.gaugeSvg;
            if (row.status !== 'Normal') {
              statusTd.appendChild(el('div', 'badge ' + row.tier, row.status));
            }
          } else {
            statusTd.appendChild(el('span', 'badge ' + row.tier, row.status));
          }
          tr.appendChild(statusTd);
          table.appendChild(tr);
        });
        card.appendChild(table);
        categories.appendChild(card);
      });

      var insights = document.getElementById('insights');
      insights.innerHTML = '';
      if (!view.insights.length) {
        insights.appendChild(el('p', null,
          'No critical correlations found. Your results look balanced based on the visible data.'));
      }
      view.insights.forEach(function (insight) {
        var node = el('div', 'insight');
        var marker = insight.icon === 'warning' ? '⚠ ' : '✓ ';
        node.appendChild(el('h3', null, marker + insight.title));
        node.appendChild(el('p', null, insight.description));
        if (insight.relatedMetrics.length) {
          var tags = el('div', 'tags');
          insight.relatedMetrics.forEach(function (m) { tags.appendChild(el('span', null, m)); });
          node.appendChild(tags);
        }
        insights.appendChild(node);
      });

      var questions = document.getElementById('questions');
      questions.innerHTML = '';
      view.doctorQuestions.forEach(function (q) {
        questions.appendChild(el('li', null, q));
      });
    }

    function renderMessages(messages) {
      var log = document.getElementById('chat-log');
      log.innerHTML = '';
      messages.forEach(function (message) {
        var row = el('div', 'msg ' + message.role);
        row.appendChild(el('div', 'bubble', message.text));
        log.appendChild(row);
      });
      log.scrollTop = log.scrollHeight;
    }

    function loadChat() {
      fetch('/api/chat/messages')
        .then(function (res) { return res.json(); })
        .then(function (json) { renderMessages(json.messages); });
      fetch('/api/chat/suggestions')
        .then(function (res) { return res.json(); })
        .then(function (json) {
          var box = document.getElementById('suggestions');
          box.innerHTML = '';
          json.suggestions.forEach(function (s) {
            var btn = el('button', null, s);
            btn.addEventListener('click', function () {
              chatText.value = s;
              sendChat();
            });
            box.appendChild(btn);
          });
        });
    }

    function sendChat() {
      var message = chatText.value.trim();
      if (!message) return;
      chatText.value = '';
      chatText.disabled = true;
      chatSend.disabled = true;

      fetch('/api/chat/send', {
        method: 'POST',
        headers: { 'Content-Type': 'application/json' },
        body: JSON.stringify({ message: message })
      })
        .then(function (res) { return res.json(); })
        .then(function () {
          return fetch('/api/chat/messages')
            .then(function (res) { return res.json(); })
            .then(function (json) { renderMessages(json.messages); });
        })
        .then(function () {
          chatText.disabled = false;
          chatSend.disabled = false;
          chatText.focus();
        });
    }

    chatSend.addEventListener('click', sendChat);
    chatText.addEventListener('keydown', function (e) {
      if (e.key === 'Enter') sendChat();
    });
  </script>
</body>
</html>
"##;
