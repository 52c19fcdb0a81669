use regex::Regex;
use std::io::Read;
use std::sync::OnceLock;

/// Best-effort text extraction for an uploaded file. Returns `None` when
/// the bytes defeat the parser for that format; upload still succeeds, the
/// file just carries no analyzable text.
pub fn extract_text(bytes: &[u8], file_ext: &str) -> Option<String> {
    let result = match file_ext {
        ".txt" | ".md" => Ok(String::from_utf8_lossy(bytes).into_owned()),
        ".csv" => extract_csv(bytes),
        ".json" => extract_json(bytes),
        ".pdf" => pdf_extract::extract_text_from_mem(bytes).map_err(|err| err.to_string()),
        ".docx" => extract_docx(bytes),
        other => Err(format!("unsupported extension {}", other)),
    };

    match result {
        Ok(text) => {
            tracing::info!(
                "Extracted {} characters from {} file",
                text.chars().count(),
                file_ext
            );
            Some(text)
        }
        Err(err) => {
            tracing::warn!("Text extraction failed for {}: {}", file_ext, err);
            None
        }
    }
}

fn extract_csv(bytes: &[u8]) -> Result<String, String> {
    let text = std::str::from_utf8(bytes).map_err(|err| err.to_string())?;
    Ok(text
        .lines()
        .map(|line| {
            line.split(',')
                .map(str::trim)
                .collect::<Vec<_>>()
                .join(", ")
        })
        .collect::<Vec<_>>()
        .join("\n"))
}

fn extract_json(bytes: &[u8]) -> Result<String, String> {
    let value: serde_json::Value = serde_json::from_slice(bytes).map_err(|err| err.to_string())?;
    serde_json::to_string_pretty(&value).map_err(|err| err.to_string())
}

// A .docx is a zip archive; the document body lives in word/document.xml.
fn extract_docx(bytes: &[u8]) -> Result<String, String> {
    static TAG_RE: OnceLock<Regex> = OnceLock::new();
    let tag_re = TAG_RE.get_or_init(|| Regex::new(r"<[^>]+>").expect("tag regex"));

    let cursor = std::io::Cursor::new(bytes);
    let mut archive = zip::ZipArchive::new(cursor).map_err(|err| err.to_string())?;
    let mut xml = String::new();
    archive
        .by_name("word/document.xml")
        .map_err(|err| err.to_string())?
        .read_to_string(&mut xml)
        .map_err(|err| err.to_string())?;

    // paragraph ends become newlines before the remaining tags are stripped
    let with_breaks = xml.replace("</w:p>", "\n");
    Ok(tag_re.replace_all(&with_breaks, "").into_owned())
}
