//! Entity → payload conversions.

use trivia_api_types::{CategoryMap, QuestionPayload};

use crate::repository::{CategoryRecord, QuestionRecord};

impl From<QuestionRecord> for QuestionPayload {
    fn from(record: QuestionRecord) -> Self {
        Self {
            id: record.id.into_inner(),
            question: record.question,
            answer: record.answer,
            category: record.category.into_inner(),
            difficulty: record.difficulty.value(),
        }
    }
}

pub fn question_payloads(records: Vec<QuestionRecord>) -> Vec<QuestionPayload> {
    records.into_iter().map(QuestionPayload::from).collect()
}

pub fn category_map(records: Vec<CategoryRecord>) -> CategoryMap {
    records
        .into_iter()
        .map(|c| (c.id.into_inner(), c.kind))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use trivia_core::domain::{CategoryId, Difficulty, QuestionId};

    #[test]
    fn question_payload_carries_five_fields() {
        let payload = QuestionPayload::from(QuestionRecord {
            id: QuestionId::new(9),
            question: "What boxer's original name is Cassius Clay?".to_string(),
            answer: "Muhammad Ali".to_string(),
            category: CategoryId::new(4),
            difficulty: Difficulty::new(1).expect("valid difficulty"),
        });

        let json = serde_json::to_value(&payload).expect("serialize payload");
        let object = json.as_object().expect("payload is an object");

        assert_eq!(object.len(), 5);
        assert_eq!(json["category"], 4);
        assert_eq!(json["difficulty"], 1);
    }

    #[test]
    fn category_map_is_keyed_by_id() {
        let map = category_map(vec![
            CategoryRecord {
                id: CategoryId::new(4),
                kind: "History".to_string(),
            },
            CategoryRecord {
                id: CategoryId::new(1),
                kind: "Science".to_string(),
            },
        ]);

        assert_eq!(map.get(&1).map(String::as_str), Some("Science"));
        assert_eq!(map.get(&4).map(String::as_str), Some("History"));
    }
}
