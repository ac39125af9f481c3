//! Markdown fragments for the report placeholders.

use crate::domain::expander::NumberGroup;
use crate::domain::number_set::NumberSet;
use crate::domain::scorer::WheelStatistic;
use crate::domain::suggester::SuggestedNumber;

pub fn format_numbers(set: &NumberSet) -> String {
    if set.is_empty() {
        "_none_".to_string()
    } else {
        set.to_string()
    }
}

pub fn render_number_group(group: &NumberGroup) -> String {
    format!(
        "- Drawn: {}\n- Neighbors (±1): {}\n",
        format_numbers(&group.direct),
        format_numbers(&group.neighbors)
    )
}

pub fn render_ranking_table(ranking: &[WheelStatistic]) -> String {
    if ranking.is_empty() {
        return "_No wheels scored._\n".to_string();
    }

    let mut output = String::new();
    output.push_str("| # | Wheel | Frequency | Avg delay (days) | Recent repetitions | Score |\n");
    output.push_str("|---|-------|----------:|-----------------:|-------------------:|------:|\n");
    for (i, stat) in ranking.iter().enumerate() {
        output.push_str(&format!(
            "| {} | {} | {} | {:.1} | {} | {:.2} |\n",
            i + 1,
            stat.wheel,
            stat.frequency,
            stat.rounded_average_delay(),
            stat.recent_repetitions,
            stat.score
        ));
    }
    output
}

pub fn render_suggestions(suggestions: &[SuggestedNumber]) -> String {
    if suggestions.is_empty() {
        return "_No numbers to suggest._\n".to_string();
    }

    let picked = suggestions
        .iter()
        .map(|s| s.number.to_string())
        .collect::<Vec<_>>()
        .join(", ");

    let mut output = format!("**{}**\n\n", picked);
    output.push_str("| Number | Draws | Days since last seen |\n");
    output.push_str("|-------:|------:|---------------------:|\n");
    for s in suggestions {
        output.push_str(&format!(
            "| {} | {} | {} |\n",
            s.number, s.occurrences, s.last_seen_delay
        ));
    }
    output
}
