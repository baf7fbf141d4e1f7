//! Gallery page rendering.

use std::path::Path;

use crate::render::Montage;

const STYLE: &str = r#"
  body { font-family: -apple-system, BlinkMacSystemFont, "Segoe UI", sans-serif; margin: 0; background: #f4f4f4; color: #222; }
  header { position: sticky; top: 0; background: #fff; padding: 1rem 2rem; box-shadow: 0 1px 4px rgba(0, 0, 0, 0.1); z-index: 1; }
  h1 { font-size: 1.25rem; margin: 0 0 0.75rem; }
  .command { display: flex; gap: 0.5rem; }
  textarea { flex: 1; font-family: ui-monospace, Menlo, monospace; font-size: 0.9rem; height: 3rem; resize: vertical; }
  button { padding: 0 1.25rem; font-size: 0.9rem; cursor: pointer; }
  main { padding: 1rem 2rem; }
  section { background: #fff; border-radius: 6px; padding: 1rem; margin-bottom: 1.5rem; box-shadow: 0 1px 3px rgba(0, 0, 0, 0.08); }
  section label { display: flex; align-items: center; gap: 0.5rem; font-weight: 600; margin-bottom: 0.75rem; cursor: pointer; }
  section img { max-width: 100%; display: block; }
"#;

const SCRIPT: &str = r#"
  const selected = [];
  const command = document.getElementById('command');
  const copy = document.getElementById('copy');

  function render() {
    command.value = selected.length ? 'brew uninstall --cask ' + selected.join(' ') : '';
  }

  document.querySelectorAll('section input[type=checkbox]').forEach(function (box) {
    box.addEventListener('change', function () {
      if (box.checked) {
        selected.push(box.value);
      } else {
        const index = selected.indexOf(box.value);
        if (index !== -1) {
          selected.splice(index, 1);
        }
      }
      render();
    });
  });

  copy.addEventListener('click', function () {
    navigator.clipboard.writeText(command.value).then(function () {
      copy.textContent = 'Copied!';
      setTimeout(function () { copy.textContent = 'Copy'; }, 2000);
    });
  });
"#;

/// Escape text for HTML element content and quoted attributes.
///
/// ```
/// use fontcull::gallery::escape_html;
///
/// assert_eq!(escape_html(r#"<a href="x">&'"#), "&lt;a href=&quot;x&quot;&gt;&amp;&#39;");
/// ```
pub fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            c => out.push(c),
        }
    }
    out
}

fn image_src(image: &Path) -> String {
    escape_html(&image.to_string_lossy())
}

fn section(montage: &Montage) -> String {
    let name = escape_html(&montage.package);
    format!(
        r#"    <section id="{name}">
      <label><input type="checkbox" value="{name}"> {name}</label>
      <img src="{src}" alt="{name} preview">
    </section>
"#,
        name = name,
        src = image_src(&montage.image),
    )
}

/// Render the gallery page for `montages`, one section each, in order.
pub fn render_gallery(keyword: &str, montages: &[Montage]) -> String {
    let title = format!("fontcull: {} fonts", escape_html(keyword));
    let mut html = String::new();

    html.push_str("<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n");
    html.push_str("<meta charset=\"utf-8\">\n");
    html.push_str(&format!("<title>{}</title>\n", title));
    html.push_str("<style>");
    html.push_str(STYLE);
    html.push_str("</style>\n</head>\n<body>\n");

    html.push_str("<header>\n");
    html.push_str(&format!("  <h1>{} ({})</h1>\n", title, montages.len()));
    html.push_str("  <div class=\"command\">\n");
    html.push_str("    <textarea id=\"command\" readonly placeholder=\"Check fonts to build an uninstall command\"></textarea>\n");
    html.push_str("    <button id=\"copy\" type=\"button\">Copy</button>\n");
    html.push_str("  </div>\n</header>\n");

    html.push_str("<main>\n");
    for montage in montages {
        html.push_str(&section(montage));
    }
    html.push_str("</main>\n");

    html.push_str("<script>");
    html.push_str(SCRIPT);
    html.push_str("</script>\n</body>\n</html>\n");
    html
}
