use payloads::ListingType;
use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;

/// Format a price as whole US dollars with thousands separators,
/// e.g. "$250,000". Fractional cents round to the nearest dollar.
pub fn format_usd(price: &Decimal) -> String {
    let dollars = price
        .round()
        .to_i128()
        .unwrap_or_default();
    let digits = dollars.unsigned_abs().to_string();

    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }

    if dollars < 0 {
        format!("-${grouped}")
    } else {
        format!("${grouped}")
    }
}

/// Price line for a listing card: rentals get a "/month" suffix.
pub fn format_price(price: &Decimal, listing_type: ListingType) -> String {
    if listing_type.is_rent() {
        format!("{}/month", format_usd(price))
    } else {
        format_usd(price)
    }
}

/// Singular/plural label for a count, e.g. "Bed" vs "Beds".
pub fn pluralize(
    count: i32,
    singular: &'static str,
    plural: &'static str,
) -> &'static str {
    if count == 1 { singular } else { plural }
}

/// Floor area in square meters, e.g. "120 m²". Whole numbers drop the
/// fractional part.
pub fn format_area(area: f64) -> String {
    if area.fract() == 0.0 {
        format!("{} m²", area as i64)
    } else {
        format!("{area} m²")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn usd_groups_thousands_without_cents() {
        assert_eq!(format_usd(&Decimal::from(250000_i64)), "$250,000");
        assert_eq!(format_usd(&Decimal::from(950_i64)), "$950");
        assert_eq!(format_usd(&Decimal::from(1234567_i64)), "$1,234,567");
        assert_eq!(format_usd(&Decimal::ZERO), "$0");
    }

    #[test]
    fn usd_rounds_fractional_prices() {
        let price = "1499.75".parse::<Decimal>().unwrap();
        assert_eq!(format_usd(&price), "$1,500");
    }

    #[test]
    fn rent_prices_get_monthly_suffix() {
        let price = Decimal::from(1800_i64);
        assert_eq!(format_price(&price, ListingType::Rent), "$1,800/month");
        assert_eq!(format_price(&price, ListingType::Sale), "$1,800");
    }

    #[test]
    fn bed_and_bath_labels_pluralize() {
        assert_eq!(pluralize(1, "Bed", "Beds"), "Bed");
        assert_eq!(pluralize(2, "Bed", "Beds"), "Beds");
        assert_eq!(pluralize(0, "Bath", "Baths"), "Baths");
    }

    #[test]
    fn area_drops_trailing_zero_fraction() {
        assert_eq!(format_area(120.0), "120 m²");
        assert_eq!(format_area(85.5), "85.5 m²");
    }
}
