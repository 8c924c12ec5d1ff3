// Topic id → human-readable label.
//
// The table is fixed at compile time and matches the topic order of the
// trained model. Ids outside the table get a synthetic "Topic N" label so a
// model with extra topics still produces a complete distribution.

/// Labels for topic ids 0..=4, in id order.
pub const TOPIC_LABELS: [&str; 5] = ["Auto", "Tech", "Sports", "Politics", "International"];

/// Label for a topic id.
pub fn label_for(topic_id: usize) -> String {
    match TOPIC_LABELS.get(topic_id) {
        Some(label) => (*label).to_string(),
        None => format!("Topic {topic_id}"),
    }
}
