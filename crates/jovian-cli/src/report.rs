//! Console preview and summary statistics
//!
//! Read-only consumers of a finished dataset; nothing here mutates the rows.

use jovian::{JovianDataset, END_YEAR, START_YEAR};

/// Print the first `n` rows of the key columns
pub fn print_preview(dataset: &JovianDataset, n: usize) {
    println!(
        "\n{:>10} {:>13} {:>14} {:>8} {:>14}",
        "Earth_Year", "Jupiter_Year", "Base_Value", "Quality", "Jupiter_Index"
    );
    for row in dataset.rows.iter().take(n) {
        println!(
            "{:>10} {:>13.3} {:>14.2} {:>8.1} {:>14.2}",
            row.earth_year,
            row.jupiter_year,
            row.base_value,
            row.observation_quality,
            row.jupiter_index
        );
    }
}

/// Print base-value statistics and run provenance
pub fn print_summary(dataset: &JovianDataset) {
    let base: Vec<f64> = dataset.rows.iter().map(|r| r.base_value).collect();
    if base.is_empty() {
        return;
    }

    let mean = base.iter().sum::<f64>() / base.len() as f64;
    let min = base.iter().copied().fold(f64::INFINITY, f64::min);
    let max = base.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    let latest = base[base.len() - 1];
    let unit = dataset.config.unit;

    println!("\n{} ({})", dataset.config.description, dataset.data_type);
    println!("  mean:   {:.2} {}", mean, unit);
    println!("  min:    {:.2} {}", min, unit);
    println!("  max:    {:.2} {}", max, unit);
    println!("  latest: {:.2} {}", latest, unit);
    println!(
        "  coverage: {}-{} (~{:.1} Jovian years)",
        START_YEAR,
        END_YEAR,
        dataset.jovian_years_covered()
    );
    println!("  run: {}", dataset.metadata.display_name());
}
