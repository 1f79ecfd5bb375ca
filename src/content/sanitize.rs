//! Model-output sanitizer
//!
//! Upstream models may wrap their reply in channel markup
//! (`<|channel|>analysis<|message|>...<|end|><|start|>assistant<|channel|>final<|message|>...`)
//! and interleave `<think>...</think>` reasoning. Only the final channel is
//! display-worthy; everything else is removed here.

use once_cell::sync::Lazy;
use regex::Regex;

static FINAL_CHANNEL_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?s)<\|channel\|>final<\|message\|>(.*?)(?:<\|end\|>|$)")
        .expect("final channel regex pattern is valid")
});

static THINK_BLOCK_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?s)<think>.*?</think>").expect("think block regex pattern is valid")
});

static OPEN_THINK_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?s)<think>.*\z").expect("open think regex pattern is valid"));

static SENTINEL_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"<\|[^>]+\|>").expect("sentinel regex pattern is valid"));

static BLANK_RUN_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\n{3,}").expect("blank run regex pattern is valid"));

const THINK_CLOSE: &str = "</think>";

/// Extract the displayable reply from raw model output.
///
/// Empty input yields an empty string. Text without any markup only has its
/// newline runs collapsed and its ends trimmed.
pub fn sanitize(raw: &str) -> String {
    if raw.is_empty() {
        return String::new();
    }

    let text = match FINAL_CHANNEL_RE.captures(raw).and_then(|caps| caps.get(1)) {
        Some(payload) => {
            tracing::trace!(len = payload.len(), "extracted final channel");
            payload.as_str().to_string()
        }
        None => raw.to_string(),
    };

    let text = strip_markup(text);
    BLANK_RUN_RE.replace_all(&text, "\n\n").trim().to_string()
}

/// Remove think blocks and sentinels until nothing changes.
///
/// A removal can splice two fragments into a new construct (`<<|x|>|y|>`),
/// and every pass that changes the text shortens it, so this terminates.
fn strip_markup(mut text: String) -> String {
    loop {
        let stripped = strip_pairs_once(&text);
        if stripped != text {
            text = stripped;
            continue;
        }
        let stripped = strip_unterminated_think(&text);
        if stripped == text {
            return text;
        }
        text = stripped;
    }
}

fn strip_pairs_once(text: &str) -> String {
    let text = THINK_BLOCK_RE.replace_all(text, "");
    SENTINEL_RE.replace_all(&text, "").into_owned()
}

/// Only called once no closed pair is left: an opening tag runs to the end
/// of the text (reasoning still being streamed) and any closing tag is an
/// orphan.
fn strip_unterminated_think(text: &str) -> String {
    let text = OPEN_THINK_RE.replace(text, "");
    if text.contains(THINK_CLOSE) {
        text.replace(THINK_CLOSE, "")
    } else {
        text.into_owned()
    }
}
