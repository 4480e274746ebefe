use auditor_api_types::attestation::ClassifiedAttestation;
use auditor_attestation::{
    LATE_ATT_INCLUSION_DELAY, classifier::SlotErrorPolicy, runner::AggregateReport,
};

/// `numerator / denominator` as a percentage with two decimals, `"0.00"` for a zero
/// denominator.
pub fn calculate_percentage(numerator: usize, denominator: usize) -> String {
    if denominator == 0 {
        return "0.00".to_string();
    }
    format!("{:.2}", numerator as f64 / denominator as f64 * 100.0)
}

pub fn create_summary_markdown(
    report: &AggregateReport,
    slot_error_policy: SlotErrorPolicy,
) -> String {
    let total = report.total_attestations;
    let rows = [
        (
            "Missed Attestations Total".to_string(),
            report.missed_attestations.len(),
        ),
        (
            "Missed Attestations with Missed Block (N + 1)".to_string(),
            report.missed_with_missed_block,
        ),
        (
            format!("Late Attestations Total (incl. delay >= {LATE_ATT_INCLUSION_DELAY})"),
            report.late_attestations.len(),
        ),
        (
            "Late Attestations with Missed Block (N + 1)".to_string(),
            report.late_with_missed_block,
        ),
    ];

    let mut markdown = String::from("# Summary\n\n");
    markdown.push_str("Missed and late attestations during last 100 epochs\n\n");
    markdown.push_str("| Metric | Count | Percentage |\n");
    markdown.push_str("| ------ | ----- | ---------- |\n");
    markdown.push_str(&format!("| Total Attestations | {total} | 100% |\n"));
    for (metric, count) in rows {
        markdown.push_str(&format!(
            "| {metric} | {count} | {}% |\n",
            calculate_percentage(count, total)
        ));
    }

    if report.indeterminate_block_lookups > 0 {
        let assumption = match slot_error_policy {
            SlotErrorPolicy::AssumeMissed => "missed",
            SlotErrorPolicy::AssumeProposed => "proposed",
        };
        markdown.push_str(&format!(
            "\n> {} slot lookups failed; their N + 1 block was assumed {assumption}.\n",
            report.indeterminate_block_lookups
        ));
    }

    markdown.push_str("\n## Missed Attestations\n\n");
    markdown.push_str(&create_markdown_table(&report.missed_attestations));

    markdown.push_str("\n## Late Attestations\n\n");
    markdown.push_str(&create_markdown_table(&report.late_attestations));

    markdown
}

pub fn create_markdown_table(attestations: &[ClassifiedAttestation]) -> String {
    let mut markdown = String::from(
        "| Validator Index | Attester Slot | Inclusion Slot | Block Missed (N + 1) |\n",
    );
    markdown.push_str(
        "| --------------- | ------------- | -------------- | --------------------- |\n",
    );

    for attestation in attestations {
        let record = &attestation.record;
        let inclusion_slot = match record.inclusion_delay() {
            Some(delay) => format!("{} ({delay})", record.inclusion_slot),
            None => "null".to_string(),
        };
        markdown.push_str(&format!(
            "| {} | {} | {inclusion_slot} | {} |\n",
            record.validator_index, record.attester_slot, attestation.block_missed
        ));
    }

    if attestations.is_empty() {
        markdown.push_str("| - | - | - | - |\n");
    }

    markdown
}
