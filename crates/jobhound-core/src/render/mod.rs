//! Result formatting.
//!
//! Two renditions of the same data: a strict MarkdownV2 document where every
//! interpolated value is escaped, and a structurally equivalent plain-text
//! document for when the transport rejects the strict one. Both are total --
//! a listing with every optional field absent renders placeholders, never an
//! empty interpolation.

pub mod markup;

pub use markup::escape_markdown_v2;

use jobhound_types::listing::{Listing, Salary};

/// Hard cap on rendered listings, applied after the API's own page size.
const MAX_RENDERED: usize = 10;

/// Placeholder for an absent employer or city.
const NOT_SPECIFIED: &str = "not specified";

/// Currency code to display symbol. Unknown codes render as-is.
fn currency_symbol(code: &str) -> &str {
    match code {
        "RUR" => "\u{20bd}",
        "USD" => "$",
        "EUR" => "\u{20ac}",
        "KZT" => "\u{20b8}",
        "BYR" => "Br",
        other => other,
    }
}

/// Render a salary range: "from X", "to Y", both, or a placeholder.
pub fn format_salary(salary: Option<&Salary>) -> String {
    let Some(salary) = salary else {
        return NOT_SPECIFIED.to_string();
    };

    let mut parts = Vec::with_capacity(2);
    if let Some(from) = salary.from {
        parts.push(format!("from {from}"));
    }
    if let Some(to) = salary.to {
        parts.push(format!("to {to}"));
    }
    if parts.is_empty() {
        return NOT_SPECIFIED.to_string();
    }

    format!("{} {}", parts.join(" "), currency_symbol(&salary.currency))
}

/// Render one listing in strict MarkdownV2, every field escaped.
fn format_listing_strict(listing: &Listing) -> String {
    let title = escape_markdown_v2(&listing.title);
    let employer = escape_markdown_v2(listing.employer.as_deref().unwrap_or(NOT_SPECIFIED));
    let city = escape_markdown_v2(listing.city.as_deref().unwrap_or(NOT_SPECIFIED));
    let salary = escape_markdown_v2(&format_salary(listing.salary.as_ref()));

    format!(
        "\u{1f4bc} *{title}*\n\
         \u{1f3e2} {employer}\n\
         \u{1f4b0} {salary}\n\
         \u{1f4cd} {city}\n\
         [Open listing \u{27a1}\u{fe0f}]({url})",
        url = listing.url
    )
}

/// Render one listing as plain text with the same structure.
fn format_listing_plain(listing: &Listing) -> String {
    format!(
        "\u{1f4bc} {title}\n\
         \u{1f3e2} {employer}\n\
         \u{1f4b0} {salary}\n\
         \u{1f4cd} {city}\n\
         \u{1f517} {url}",
        title = listing.title,
        employer = listing.employer.as_deref().unwrap_or(NOT_SPECIFIED),
        salary = format_salary(listing.salary.as_ref()),
        city = listing.city.as_deref().unwrap_or(NOT_SPECIFIED),
        url = listing.url,
    )
}

/// Render the full results document.
///
/// `strict` selects the MarkdownV2 path (numbering literals escaped, all
/// values escaped); the plain path carries the same structure unescaped.
pub fn render_results(profession: &str, listings: &[Listing], strict: bool) -> String {
    let shown = &listings[..listings.len().min(MAX_RENDERED)];

    let mut out = if strict {
        format!(
            "\u{2705} Found *{}* listings for *{}*:\n\n",
            listings.len(),
            escape_markdown_v2(profession)
        )
    } else {
        format!(
            "\u{2705} Found {} listings for '{profession}':\n\n",
            listings.len()
        )
    };

    for (i, listing) in shown.iter().enumerate() {
        let n = i + 1;
        if strict {
            // The dot after the number is reserved in MarkdownV2.
            out.push_str(&format!("{n}\\. {}\n\n", format_listing_strict(listing)));
        } else {
            out.push_str(&format!("{n}. {}\n\n", format_listing_plain(listing)));
        }
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bare_listing() -> Listing {
        Listing {
            title: "Developer".to_string(),
            employer: None,
            city: None,
            salary: None,
            url: "https://hh.ru/vacancy/42".to_string(),
        }
    }

    fn full_listing() -> Listing {
        Listing {
            title: "Rust developer (remote)".to_string(),
            employer: Some("Acme Corp.".to_string()),
            city: Some("Moscow".to_string()),
            salary: Some(Salary {
                from: Some(200_000),
                to: Some(300_000),
                currency: "RUR".to_string(),
            }),
            url: "https://hh.ru/vacancy/1".to_string(),
        }
    }

    #[test]
    fn test_format_salary_absent() {
        assert_eq!(format_salary(None), "not specified");
    }

    #[test]
    fn test_format_salary_empty_bounds() {
        let salary = Salary {
            from: None,
            to: None,
            currency: "RUR".to_string(),
        };
        assert_eq!(format_salary(Some(&salary)), "not specified");
    }

    #[test]
    fn test_format_salary_from_only() {
        let salary = Salary {
            from: Some(100_000),
            to: None,
            currency: "RUR".to_string(),
        };
        assert_eq!(format_salary(Some(&salary)), "from 100000 \u{20bd}");
    }

    #[test]
    fn test_format_salary_both_bounds() {
        let salary = Salary {
            from: Some(1_000),
            to: Some(2_000),
            currency: "USD".to_string(),
        };
        assert_eq!(format_salary(Some(&salary)), "from 1000 to 2000 $");
    }

    #[test]
    fn test_format_salary_unknown_currency_falls_back_to_code() {
        let salary = Salary {
            from: Some(500),
            to: None,
            currency: "GBP".to_string(),
        };
        assert_eq!(format_salary(Some(&salary)), "from 500 GBP");
    }

    #[test]
    fn test_bare_listing_renders_placeholders() {
        for strict in [true, false] {
            let doc = render_results("Developer", &[bare_listing()], strict);
            assert_eq!(doc.matches("not specified").count(), 3);
            assert!(!doc.contains("  \n"), "no empty interpolation");
        }
    }

    #[test]
    fn test_strict_escapes_values_and_numbering() {
        let doc = render_results("C++ dev", &[full_listing()], true);
        assert!(doc.contains("C\\+\\+ dev"));
        assert!(doc.contains("1\\. "));
        assert!(doc.contains("Rust developer \\(remote\\)"));
        assert!(doc.contains("Acme Corp\\."));
        // The URL inside the link target stays raw.
        assert!(doc.contains("(https://hh.ru/vacancy/1)"));
    }

    #[test]
    fn test_plain_is_unescaped() {
        let doc = render_results("C++ dev", &[full_listing()], false);
        assert!(doc.contains("C++ dev"));
        assert!(doc.contains("1. "));
        assert!(!doc.contains('\\'));
        assert!(doc.contains("\u{1f517} https://hh.ru/vacancy/1"));
    }

    #[test]
    fn test_truncates_to_ten() {
        let listings: Vec<Listing> = (0..15).map(|_| full_listing()).collect();
        let doc = render_results("dev", &listings, false);
        assert!(doc.contains("Found 15 listings"));
        assert!(doc.contains("\n10. "));
        assert!(!doc.contains("\n11. "));
    }

    #[test]
    fn test_empty_listings_renders_header_only() {
        let doc = render_results("dev", &[], false);
        assert!(doc.contains("Found 0 listings"));
    }
}
