use odograph_codec::{Coordinate, HIGH, LOW};

/// Full coordinate report: summary lines plus the JSON form.
pub fn print_coordinate(coordinate: &Coordinate) {
    println!("\n📍 Coordinate");
    println!("{}", "=".repeat(50));
    print_coordinate_summary(coordinate);
    println!("  • Band: {LOW}..={HIGH}");

    let json = serde_json::to_string_pretty(coordinate).unwrap_or_default();
    println!("\nJSON:");
    println!("{json}");
}

pub fn print_coordinate_summary(coordinate: &Coordinate) {
    println!("  • Start mask: {}", coordinate.start_mask);
    println!("  • End mask: {}", coordinate.end_mask);
    println!("  • Prev mask: {}", coordinate.prev_mask);
    println!("  • End choice: {}", coordinate.end_d);
    println!("  • Length: {} bytes", coordinate.length_bytes);
}
