pub const APP_CSS: &str = r#"
:root {
    --color-bg-primary: #f8fafc;
    --color-surface: #ffffff;
    --color-surface-muted: #f1f5f9;
    --color-border: #e2e8f0;
    --color-border-strong: #cbd5e1;
    --color-text-primary: #1a202c;
    --color-text-muted: #64748b;
    --color-placeholder: #94a3b8;
    --color-accent: #00a67e;
    --color-accent-ring: rgba(0, 166, 126, 0.1);
    --color-shadow: rgba(0, 0, 0, 0.05);
}
* { box-sizing: border-box; }
html, body { margin: 0; padding: 0; font-family: system-ui, -apple-system, "Segoe UI", sans-serif; }
body { background: var(--color-bg-primary); color: var(--color-text-primary); }

.app { display: flex; flex-direction: column; height: 100vh; background: var(--color-bg-primary); }

.header {
    display: flex; justify-content: space-between; align-items: center;
    padding: 16px 24px; background: var(--color-surface);
    border-bottom: 1px solid var(--color-border); box-shadow: 0 1px 2px var(--color-shadow);
}
.brand { display: flex; align-items: center; gap: 12px; }
.brand-logo { width: 32px; height: 32px; color: var(--color-accent); }
.brand-text { display: flex; flex-direction: column; gap: 4px; }
.brand-name { font-size: 20px; font-weight: 600; line-height: 1; letter-spacing: -0.01em; }
.brand-sub { font-size: 12px; color: var(--color-text-muted); line-height: 1; }
.header-actions { display: flex; align-items: center; gap: 16px; }

.doc-indicator {
    display: flex; align-items: center; gap: 8px; padding: 8px 12px;
    background: var(--color-surface-muted); border: 1px solid var(--color-border);
    border-radius: 6px; font-size: 14px;
}
.doc-indicator .icon { color: var(--color-accent); display: flex; }

.btn {
    display: flex; align-items: center; gap: 8px; padding: 8px 16px;
    border: 1px solid var(--color-border); border-radius: 6px; background: var(--color-surface);
    color: var(--color-text-primary); cursor: pointer; font-size: 14px; font-weight: 500;
    transition: all 0.2s ease;
}
.btn:hover { background: var(--color-bg-primary); border-color: var(--color-border-strong); }
.btn.disabled { opacity: 0.7; cursor: not-allowed; }
.btn .icon { display: flex; width: 16px; height: 16px; }

.chat-list {
    flex: 1; padding: 24px; overflow-y: auto; display: flex; flex-direction: column;
    gap: 24px; max-width: 900px; margin: 0 auto; width: 100%;
}
.chat-empty { color: var(--color-text-muted); text-align: center; margin-top: 48px; }
.message-row { display: flex; gap: 16px; align-items: flex-start; animation: fade-in 0.3s ease; }
@keyframes fade-in {
    from { opacity: 0; transform: translateY(10px); }
    to { opacity: 1; transform: translateY(0); }
}
.avatar {
    width: 36px; height: 36px; border-radius: 50%; color: #ffffff; flex-shrink: 0;
    display: flex; align-items: center; justify-content: center; font-size: 14px; font-weight: 500;
    box-shadow: 0 2px 4px var(--color-shadow);
}
.avatar.user { background: var(--color-text-muted); }
.avatar.assistant { background: var(--color-accent); }
.message-stack { display: flex; flex-direction: column; gap: 4px; max-width: 70%; }
.bubble { padding: 16px; border-radius: 12px; font-size: 15px; line-height: 1.6; white-space: pre-wrap; }
.bubble.user { background: var(--color-surface-muted); border: 1px solid var(--color-border); }
.bubble.assistant { background: var(--color-surface); border: 1px solid transparent; box-shadow: 0 2px 4px var(--color-shadow); }
.bubble.pending { color: var(--color-text-muted); }
.message-timestamp { font-size: 12px; color: var(--color-placeholder); }

.composer {
    padding: 24px; background: var(--color-surface);
    border-top: 1px solid var(--color-border); box-shadow: 0 -1px 2px var(--color-shadow);
}
.composer-inner {
    display: flex; align-items: center; gap: 12px; max-width: 900px; margin: 0 auto;
    border: 1px solid var(--color-border); border-radius: 8px; padding: 8px 16px;
}
.composer-inner:focus-within { border-color: var(--color-accent); box-shadow: 0 0 0 2px var(--color-accent-ring); }
.composer input { flex: 1; border: none; font-size: 15px; padding: 8px 0; color: var(--color-text-primary); background: transparent; }
.composer input:focus { outline: none; }
.composer input::placeholder { color: var(--color-placeholder); }
.composer input:disabled { color: var(--color-placeholder); }
.send-btn { background: none; border: none; padding: 8px; cursor: pointer; color: var(--color-placeholder); border-radius: 6px; display: flex; }
.send-btn:hover:not(:disabled) { color: var(--color-accent); background: var(--color-bg-primary); }
.send-btn:disabled { color: var(--color-border-strong); cursor: not-allowed; }
"#;
