use crate::catalog::{AudienceSegment, Labelled};

/// File name offered to the browser for a CSV download.
pub(crate) const EXPORT_FILE_NAME: &str = "malaysian_sme_market_data.csv";

const HEADERS: [&str; 6] = ["Name", "Reach", "Class", "Age", "Peak Time", "Top Affinities"];
const AFFINITY_SEPARATOR: &str = " | ";

/// Renders segments as CSV: an unquoted header row, then one row per
/// segment with every field in double quotes. Rows are joined with `\n`
/// and the output has no trailing newline.
pub(crate) fn to_csv(segments: &[&AudienceSegment]) -> String {
    let mut csv = HEADERS.join(",");
    for segment in segments {
        let affinities = segment
            .top_item_affinities
            .iter()
            .map(|category| category.label())
            .collect::<Vec<_>>()
            .join(AFFINITY_SEPARATOR);
        let reach = segment.estimated_size.to_string();
        let fields: [&str; 6] = [
            &segment.name,
            &reach,
            segment.social_class.label(),
            segment.age_group.label(),
            &segment.peak_activity_time,
            &affinities,
        ];
        csv.push('\n');
        for (i, field) in fields.iter().enumerate() {
            if i > 0 {
                csv.push(',');
            }
            write_quoted(&mut csv, field);
        }
    }
    csv
}

/// Wraps `field` in double quotes, doubling any quote inside it.
fn write_quoted(out: &mut String, field: &str) {
    out.push('"');
    out.push_str(&field.replace('"', "\"\""));
    out.push('"');
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{tests::segment, Catalog, ItemCategory, SocialClass};

    #[test]
    fn header_only_for_empty_input() {
        assert_eq!(to_csv(&[]), "Name,Reach,Class,Age,Peak Time,Top Affinities");
    }

    #[test]
    fn quotes_every_field() {
        let mut s = segment("seg-x", SocialClass::M40);
        s.name = "Test, Inc.".to_string();
        s.estimated_size = 1_234;
        s.top_item_affinities = vec![ItemCategory::Fmcg, ItemCategory::Fashion];

        let csv = to_csv(&[&s]);
        let lines: Vec<&str> = csv.lines().collect();
        assert_eq!(lines.len(), 2);
        assert_eq!(
            lines[1],
            "\"Test, Inc.\",\"1234\",\"M40 (Middle Income)\",\"25-34\",\"8 PM - 11 PM\",\"Fast Moving Consumer Goods | Fashion & Apparel\""
        );
        assert!(!csv.ends_with('\n'));
    }

    #[test]
    fn doubles_embedded_quotes() {
        let mut s = segment("seg-x", SocialClass::T20);
        s.name = "The \"Best\" Shoppers".to_string();
        let csv = to_csv(&[&s]);
        assert!(csv.contains("\"The \"\"Best\"\" Shoppers\""));
    }

    #[test]
    fn one_row_per_segment() {
        let catalog = Catalog::malaysian().unwrap();
        let segments: Vec<&AudienceSegment> = catalog.segments().iter().collect();
        let csv = to_csv(&segments);
        assert_eq!(csv.lines().count(), 7);
        assert!(csv
            .lines()
            .nth(2)
            .unwrap()
            .starts_with("\"Johor Bahru Cross-Border Shoppers\",\"850000\""));
    }
}
