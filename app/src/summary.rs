use std::fmt::Write;

use pipeline::AnalysisReport;

/// Renders the console summary of one analysis run.
pub fn format_summary(report: &AnalysisReport) -> String {
    let mut out = String::new();
    let latest_volatility = report
        .latest_volatility
        .map(|v| format!("{v:.2}"))
        .unwrap_or_else(|| "n/a".to_string());

    // Writing into a String cannot fail.
    let _ = writeln!(out, "\n--- Trend Analysis Complete ---");
    let _ = writeln!(out, "{}-Day Moving Averages: {:?}", report.short_ma.window(), report.short_ma.values());
    let _ = writeln!(out, "Short-Term Trend: {}", report.trend);
    let _ = writeln!(out, "Trend Strength: {}", report.strength);
    let _ = writeln!(out, "Latest Volatility: {latest_volatility}");
    let _ = writeln!(out, "Trading Signal: {}", report.signal);
    let _ = writeln!(
        out,
        "Crossovers: BUY on days {:?} | SELL on days {:?}",
        report.crossovers.buy_days(),
        report.crossovers.sell_days()
    );
    out
}

pub fn print_summary(report: &AnalysisReport) {
    print!("{}", format_summary(report));
}
