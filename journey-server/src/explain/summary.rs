//! Plain-text journey summaries.

use serde::Serialize;

use crate::domain::Journey;

/// Headline figures for a journey.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct JourneySummary {
    /// Total duration in minutes
    pub duration: u32,
    /// Number of changes
    pub changes: usize,
    /// Distinct modes, in first-seen order
    pub modes: Vec<String>,
}

impl JourneySummary {
    pub fn from_journey(journey: &Journey) -> Self {
        Self {
            duration: journey.duration,
            changes: journey.change_count(),
            modes: journey.modes().into_iter().map(str::to_string).collect(),
        }
    }
}

const TIPS: [&str; 3] = [
    "Check TfL service status before travelling",
    "Allow extra time during peak hours (7-9 AM, 5-7 PM)",
    "Use contactless payment or an Oyster card for the best fares",
];

/// Markdown explanation built only from the journey data.
pub fn basic_explanation(journey: &Journey, from: &str, to: &str) -> String {
    let summary = JourneySummary::from_journey(journey);

    let steps: String = journey
        .legs
        .iter()
        .enumerate()
        .map(|(i, leg)| {
            format!(
                "\n{}. **{}** from {} to {}{}",
                i + 1,
                leg.mode,
                leg.departure,
                leg.arrival,
                minutes_suffix(leg.duration)
            )
        })
        .collect();

    let tips: String = TIPS.iter().map(|tip| format!("\n• {tip}")).collect();

    format!(
        "## Journey Summary\n\
         \n\
         **Route:** {from} → {to}\n\
         **Total time:** {duration} minutes\n\
         **Changes required:** {changes}\n\
         **Transport modes:** {modes}\n\
         \n\
         **Step-by-step route:**{steps}\n\
         \n\
         **General tips:**{tips}",
        duration = summary.duration,
        changes = summary.changes,
        modes = summary.modes.join(", "),
    )
}

/// Prompt asking a language model to assess the journey.
pub fn analysis_prompt(journey: &Journey, from: &str, to: &str) -> String {
    let steps: String = journey
        .legs
        .iter()
        .enumerate()
        .map(|(i, leg)| {
            format!(
                "\n{}. Take {} from {} to {}{}",
                i + 1,
                leg.mode,
                leg.departure,
                leg.arrival,
                minutes_suffix(leg.duration)
            )
        })
        .collect();

    format!(
        "You are a London transport expert. Analyze this journey plan:\n\
         \n\
         JOURNEY PLAN:\n\
         - From: {from}\n\
         - To: {to}\n\
         - Total duration: {duration} minutes\n\
         - Departure: {start}\n\
         - Arrival: {arrival}\n\
         - Number of changes: {changes}\n\
         \n\
         ROUTE DETAILS:{steps}\n\
         \n\
         Provide a concise analysis with:\n\
         1. Is this an efficient route? (consider time and changes)\n\
         2. Any potential issues or tricky interchanges?\n\
         3. One practical tip for this specific journey\n\
         4. Alternative options to consider\n\
         \n\
         Keep response under 200 words. Be specific about London transport.",
        duration = journey.duration,
        start = journey.start_time.format("%Y-%m-%dT%H:%M:%S"),
        arrival = journey.arrival_time.format("%Y-%m-%dT%H:%M:%S"),
        changes = journey.change_count(),
    )
}

/// ` (N minutes)`, or nothing for legs without a duration.
fn minutes_suffix(duration: u32) -> String {
    if duration > 0 {
        format!(" ({duration} minutes)")
    } else {
        String::new()
    }
}
