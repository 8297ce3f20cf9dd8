// src/collect/extract.rs
//
// CSS-selector-driven extraction of listing entries. Rules are a static
// table keyed by source id, so adding a live source means adding a table
// entry, not touching the collection control flow.

use chrono::Utc;
use once_cell::sync::Lazy;
use regex::Regex;
use scraper::{ElementRef, Html, Selector};
use sha2::{Digest, Sha256};
use url::Url;

use crate::config::SourceConfig;
use crate::model::RfpRecord;

/// Title placeholder for items whose title element yields no text.
pub const UNTITLED: &str = "(untitled listing)";

/// Titles shorter than this are navigation links, not listings.
const MIN_TITLE_LEN: usize = 10;

const DESCRIPTION_CAP: usize = 200;

/// How to pull listings out of one site's markup. `items` matches repeated
/// listing entries; the optional per-field selectors fall back to heuristics
/// over the item's visible text.
pub struct ExtractRules {
    pub items: &'static str,
    pub title: &'static str,
    pub link: &'static str,
    pub agency: Option<&'static str>,
    pub posted_date: Option<&'static str>,
    pub due_date: Option<&'static str>,
    pub notice_id: Option<&'static str>,
    pub description: Option<&'static str>,
    /// Used when no agency selector matches and the config has no override.
    pub default_agency: &'static str,
    /// Prefix for derived notice ids, e.g. "IN-IDOA".
    pub id_prefix: &'static str,
}

const INDIANA_IDOA: ExtractRules = ExtractRules {
    items: "table tr, ul li",
    title: "a, h1, h2, h3, h4, strong",
    link: "a",
    agency: None,
    posted_date: None,
    due_date: None,
    notice_id: None,
    description: None,
    default_agency: "Indiana Department of Administration",
    id_prefix: "IN-IDOA",
};

/// Catch-all for sources without a dedicated entry; covers the common
/// shapes of government procurement pages.
const GENERIC: ExtractRules = ExtractRules {
    items: "table tr, ul li, ol li, article",
    title: "a, h1, h2, h3, h4, strong",
    link: "a",
    agency: None,
    posted_date: None,
    due_date: None,
    notice_id: None,
    description: None,
    default_agency: "",
    id_prefix: "RFP",
};

pub fn rules_for(source_id: &str) -> &'static ExtractRules {
    match source_id {
        "indiana-idoa" => &INDIANA_IDOA,
        _ => &GENERIC,
    }
}

// MM/DD/YYYY or YYYY-MM-DD, the formats government listing pages use.
static RE_DATE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\d{1,2}/\d{1,2}/\d{4}|\d{4}-\d{2}-\d{2}").unwrap());

static RE_WS: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s+").unwrap());

fn collapse_ws(s: &str) -> String {
    RE_WS.replace_all(s, " ").trim().to_string()
}

/// Parse the page and extract one record per matched item. An unparsable
/// selector yields zero records, which the caller treats like any other
/// empty extraction.
pub fn extract_records(
    html: &str,
    source: &SourceConfig,
    rules: &ExtractRules,
) -> Vec<RfpRecord> {
    let (Ok(items_sel), Ok(title_sel), Ok(link_sel)) = (
        Selector::parse(rules.items),
        Selector::parse(rules.title),
        Selector::parse(rules.link),
    ) else {
        return Vec::new();
    };

    let doc = Html::parse_document(html);
    doc.select(&items_sel)
        .filter_map(|item| extract_one(item, source, rules, &title_sel, &link_sel))
        .collect()
}

fn extract_one(
    item: ElementRef,
    source: &SourceConfig,
    rules: &ExtractRules,
    title_sel: &Selector,
    link_sel: &Selector,
) -> Option<RfpRecord> {
    // No title element at all means this item is not a listing (header rows,
    // spacer cells). A present-but-empty title keeps the item with a
    // placeholder instead.
    let title_el = item.select(title_sel).next()?;
    let title = {
        let t = collapse_ws(&title_el.text().collect::<String>());
        if t.is_empty() {
            UNTITLED.to_string()
        } else {
            t
        }
    };
    if title != UNTITLED && title.chars().count() < MIN_TITLE_LEN {
        return None;
    }

    let text = collapse_ws(&item.text().collect::<Vec<_>>().join(" "));

    let url = item
        .select(link_sel)
        .next()
        .and_then(|a| a.value().attr("href"))
        .map(|href| absolutize(&source.url, href))
        .unwrap_or_default();

    let agency = select_text(item, rules.agency)
        .or_else(|| source.agency.clone())
        .unwrap_or_else(|| {
            if rules.default_agency.is_empty() {
                source.label.clone()
            } else {
                rules.default_agency.to_string()
            }
        });

    // First date found in the item text is the posting date, second the due
    // date; no dates at all means "posted today, no due date".
    let mut dates = RE_DATE.find_iter(&text).map(|m| m.as_str().to_string());
    let (posted_scan, due_scan) = (dates.next(), dates.next());

    let posted_date = select_text(item, rules.posted_date)
        .or(posted_scan)
        .unwrap_or_else(|| Utc::now().format("%Y-%m-%d").to_string());
    let due_date = select_text(item, rules.due_date)
        .or(due_scan)
        .unwrap_or_default();

    let notice_id = select_text(item, rules.notice_id)
        .unwrap_or_else(|| derived_notice_id(rules.id_prefix, &title));

    let description = select_text(item, rules.description)
        .unwrap_or_else(|| text.chars().take(DESCRIPTION_CAP).collect::<String>());

    Some(RfpRecord {
        title,
        agency,
        posted_date,
        due_date,
        notice_id,
        description,
        source: source.label.clone(),
        url,
    })
}

fn select_text(item: ElementRef, selector: Option<&'static str>) -> Option<String> {
    let sel = Selector::parse(selector?).ok()?;
    item.select(&sel)
        .next()
        .map(|el| collapse_ws(&el.text().collect::<String>()))
        .filter(|s| !s.is_empty())
}

/// Resolve `href` against the listing page URL; empty when neither parses.
fn absolutize(base: &str, href: &str) -> String {
    if href.starts_with("http://") || href.starts_with("https://") {
        return href.to_string();
    }
    Url::parse(base)
        .and_then(|b| b.join(href))
        .map(String::from)
        .unwrap_or_default()
}

/// Stable source-assigned-looking id for items that don't publish one:
/// sha256 of the title, mod 10000, under the source's prefix.
pub fn derived_notice_id(prefix: &str, title: &str) -> String {
    let digest = Sha256::digest(title.as_bytes());
    let n = u32::from_be_bytes([digest[0], digest[1], digest[2], digest[3]]) % 10_000;
    format!("{prefix}-{n:04}")
}
