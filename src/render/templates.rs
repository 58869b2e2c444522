//! Built-in page templates (Tera syntax).
//!
//! `{/dir}`, `{file}` and `{line}` in the go-source tag are part of the
//! go-source convention and are filled in by the consuming tool, not here.

/// go-import / go-source discovery page.
pub const VANITY: &str = r#"<!DOCTYPE html>
<html>
<head>
    <meta name="go-import" content="{{ domain }}{{ path }} {{ vcs }} {{ repo }}">
    <meta name="go-source" content="{{ domain }}{{ path }} {{ repo }} {{ repo }}/tree/master{/dir} {{ repo }}/blob/master{/dir}/{file}#L{line}">
</head>
<body>
    go get {{ domain }}{{ path }}
</body>
</html>"#;

/// Client-side redirect to the documentation viewer.
pub const REDIRECT: &str = r#"<!DOCTYPE html>
<html>
<head>
    <link rel="icon" href="https://pkg.go.dev/static/shared/icon/favicon.ico">
    <meta http-equiv="refresh" content="0; url=https://pkg.go.dev/{{ domain }}{{ path }}">
</head>
<body>
    Redirecting to <a href="https://pkg.go.dev/{{ domain }}{{ path }}">pkg.go.dev/{{ domain }}{{ path }}</a>...
</body>
</html>"#;

/// Package listing served at `/`.
pub const HOME: &str = r#"<!DOCTYPE html>
<html>
<head>
    <meta charset="utf-8">
    <link rel="icon" href="https://pkg.go.dev/static/shared/icon/favicon.ico">
    <title>Go Packages - {{ domain }}</title>
    <style>
        body {
            font-family: -apple-system, BlinkMacSystemFont, "Segoe UI", Roboto, "Helvetica Neue", Arial, sans-serif;
            max-width: 800px;
            margin: 50px auto;
            padding: 20px;
            line-height: 1.6;
            color: #333;
        }
        h1 {
            color: #00ADD8;
            border-bottom: 2px solid #00ADD8;
            padding-bottom: 10px;
        }
        .package {
            background: #f5f5f5;
            border-left: 4px solid #00ADD8;
            padding: 15px;
            margin: 15px 0;
            border-radius: 4px;
        }
        .package-name {
            font-family: monospace;
            font-size: 1.1em;
            color: #00ADD8;
            font-weight: bold;
            text-decoration: none;
        }
        .package-name:hover {
            text-decoration: underline;
        }
        .external-icon {
            margin-left: 5px;
            vertical-align: middle;
        }
        .package-repo {
            margin-top: 5px;
            font-size: 0.9em;
        }
        .package-repo a {
            color: #666;
            text-decoration: none;
        }
        .package-repo a:hover {
            text-decoration: underline;
        }
        .install-cmd-wrapper {
            position: relative;
            margin-top: 8px;
            display: flex;
            align-items: center;
        }
        .install-cmd {
            background: #2d2d2d;
            color: #f8f8f2;
            padding: 10px;
            padding-right: 45px;
            border-radius: 4px;
            font-family: monospace;
            overflow-x: auto;
            flex: 1;
        }
        .copy-btn {
            position: absolute;
            right: 8px;
            background: #444;
            border: none;
            border-radius: 4px;
            padding: 6px 10px;
            cursor: pointer;
            color: #f8f8f2;
            font-size: 14px;
            transition: background 0.2s;
            display: flex;
            align-items: center;
            justify-content: center;
            height: 28px;
        }
        .copy-btn:hover {
            background: #555;
        }
        .copy-btn:active {
            background: #00ADD8;
        }
        .copy-btn.copied {
            background: #00ADD8;
        }
        .footer {
            margin-top: 40px;
            padding-top: 20px;
            border-top: 1px solid #ddd;
            text-align: center;
            color: #666;
            font-size: 0.9em;
        }
    </style>
</head>
<body>
    <h1>Go Packages</h1>

    {% for pkg in packages %}
    <div class="package">
        <a class="package-name" href="https://pkg.go.dev/{{ domain }}{{ pkg.path }}" target="_blank">{{ domain }}{{ pkg.path }}<svg class="external-icon" width="14" height="14" viewBox="0 0 16 16" fill="none" xmlns="http://www.w3.org/2000/svg"><path d="M6 3H3a1 1 0 0 0-1 1v9a1 1 0 0 0 1 1h9a1 1 0 0 0 1-1v-3M9 2h5m0 0v5m0-5L7 9" stroke="currentColor" stroke-width="1.5" stroke-linecap="round" stroke-linejoin="round"/></svg></a>
        <div class="package-repo">
            Source: <a href="{{ pkg.repo }}" target="_blank">{{ pkg.repo }}<svg class="external-icon" width="12" height="12" viewBox="0 0 16 16" fill="none" xmlns="http://www.w3.org/2000/svg"><path d="M6 3H3a1 1 0 0 0-1 1v9a1 1 0 0 0 1 1h9a1 1 0 0 0 1-1v-3M9 2h5m0 0v5m0-5L7 9" stroke="currentColor" stroke-width="1.5" stroke-linecap="round" stroke-linejoin="round"/></svg></a>
        </div>
        <div class="install-cmd-wrapper">
            <div class="install-cmd" id="cmd-{{ loop.index0 }}">go get {{ domain }}{{ pkg.path }}</div>
            <button class="copy-btn" onclick="copyToClipboard('cmd-{{ loop.index0 }}', this)">
                <svg width="16" height="16" viewBox="0 0 16 16" fill="none" xmlns="http://www.w3.org/2000/svg">
                    <path d="M13.5 5.5v7a1.5 1.5 0 0 1-1.5 1.5H5a1.5 1.5 0 0 1-1.5-1.5v-7A1.5 1.5 0 0 1 5 4h7a1.5 1.5 0 0 1 1.5 1.5z" stroke="currentColor" stroke-width="1.5" fill="none"/>
                    <path d="M5 4V3.5A1.5 1.5 0 0 1 6.5 2h7A1.5 1.5 0 0 1 15 3.5v7a1.5 1.5 0 0 1-1.5 1.5H13" stroke="currentColor" stroke-width="1.5" fill="none"/>
                </svg>
            </button>
        </div>
    </div>
    {% endfor %}

    <div class="footer">
        <p>Total packages: {{ count }}</p>
    </div>

    <script>
        function copyToClipboard(elementId, button) {
            const element = document.getElementById(elementId);
            const text = element.textContent;

            navigator.clipboard.writeText(text).then(() => {
                // Visual feedback
                button.classList.add('copied');
                const originalHTML = button.innerHTML;
                button.innerHTML = '<svg width="16" height="16" viewBox="0 0 16 16" fill="none" xmlns="http://www.w3.org/2000/svg"><path d="M13 4L6 11L3 8" stroke="currentColor" stroke-width="2" stroke-linecap="round" stroke-linejoin="round"/></svg>';

                setTimeout(() => {
                    button.classList.remove('copied');
                    button.innerHTML = originalHTML;
                }, 2000);
            }).catch(err => {
                console.error('Failed to copy:', err);
            });
        }
    </script>
</body>
</html>"#;
