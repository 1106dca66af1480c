use regex::Regex;

use crate::error::ExtractError;

// Job boards tend to serve bots a stub page; present a browser UA.
const USER_AGENT: &str = "Mozilla/5.0 (Macintosh; Intel Mac OS X 10_15_7) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/131.0.0.0 Safari/537.36";

/// Fetch a page body as text. Non-2xx statuses are errors so the retry
/// loop treats them like any other transient failure.
pub async fn fetch_page(client: &reqwest::Client, url: &str) -> Result<String, ExtractError> {
    let resp = client
        .get(url)
        .header("User-Agent", USER_AGENT)
        .header("Accept", "text/html,application/xhtml+xml,*/*;q=0.8")
        .send()
        .await?;

    let status = resp.status();
    if !status.is_success() {
        return Err(ExtractError::PageStatus {
            url: url.to_string(),
            status,
        });
    }

    Ok(resp.text().await?)
}

/// Reduce raw HTML to plain text suitable for prompting: drop scripts and
/// styles, turn block-level tags into newlines, strip the rest, decode the
/// common entities, and collapse runs of blank lines.
pub fn html_to_text(html: &str) -> String {
    let mut text = html.to_string();

    let script_pattern = Regex::new(r"(?s)<script[^>]*>.*?</script>").unwrap();
    let style_pattern = Regex::new(r"(?s)<style[^>]*>.*?</style>").unwrap();
    text = script_pattern.replace_all(&text, "").to_string();
    text = style_pattern.replace_all(&text, "").to_string();

    let block_pattern = Regex::new(r"</(p|div|li|tr|h1|h2|h3|h4|section|article)>").unwrap();
    let br_pattern = Regex::new(r"<br\s*/?>").unwrap();
    text = block_pattern.replace_all(&text, "\n").to_string();
    text = br_pattern.replace_all(&text, "\n").to_string();

    let tag_pattern = Regex::new(r"<[^>]+>").unwrap();
    text = tag_pattern.replace_all(&text, " ").to_string();

    text = text
        .replace("&nbsp;", " ")
        .replace("&amp;", "&")
        .replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&quot;", "\"")
        .replace("&#39;", "'");

    let spaces_pattern = Regex::new(r"[ \t]+").unwrap();
    text = spaces_pattern.replace_all(&text, " ").to_string();

    let multi_newline = Regex::new(r"\n\s*\n\s*\n+").unwrap();
    text = multi_newline.replace_all(&text, "\n\n").to_string();

    text.trim().to_string()
}
