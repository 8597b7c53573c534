use crate::models::itinerary::ItineraryMatch;

// Leading byte-order marker so spreadsheet tools decode multi-byte city
// names correctly.
const UTF8_BOM: &str = "\u{feff}";

const CSV_HEADERS: [&str; 10] = [
    "itinerary_name",
    "url",
    "rating",
    "review_count",
    "participant_count",
    "min_price",
    "city",
    "country",
    "average_temperature",
    "precipitation_mm",
];

/// Serializes the filtered rows as UTF-8 CSV: one header line, one quoted
/// line per itinerary.
pub fn itineraries_to_csv(rows: &[ItineraryMatch]) -> String {
    let mut lines = Vec::with_capacity(rows.len() + 1);
    lines.push(CSV_HEADERS.join(","));

    for row in rows {
        let fields = [
            quote(&row.itinerary_name),
            quote(&row.url),
            quote(&row.rating.to_string()),
            quote(&row.review_count.to_string()),
            quote(&row.participant_count.to_string()),
            quote(&row.min_price.to_string()),
            quote(&row.city),
            quote(&row.country),
            quote(&row.average_temperature.to_string()),
            quote(&row.precipitation_mm.to_string()),
        ];
        lines.push(fields.join(","));
    }

    format!("{}{}", UTF8_BOM, lines.join("\n"))
}

fn quote(value: &str) -> String {
    format!("\"{}\"", value.replace('"', "\"\""))
}
