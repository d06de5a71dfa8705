use serde::{Deserialize, Serialize};

use shared_models::Record;

/// A single review score. `date` and `time` are plain integers as submitted
/// (no calendar meaning is enforced) and the rating is not linked to any
/// doctor, patient or appointment.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Rating {
    pub rating: i32,
    #[serde(default)]
    pub comment: Option<String>,
    pub date: i32,
    pub time: i32,
}

impl Rating {
    pub fn new(rating: i32, comment: Option<String>, date: i32, time: i32) -> Self {
        Self {
            rating,
            comment,
            date,
            time,
        }
    }
}

impl Record for Rating {
    const COLLECTION: &'static str = "rating";
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateRatingRequest {
    pub rating: Option<i32>,
    /// Absent keeps the comment, `null` clears it.
    #[serde(
        default,
        with = "::serde_with::rust::double_option",
        skip_serializing_if = "Option::is_none"
    )]
    pub comment: Option<Option<String>>,
    pub date: Option<i32>,
    pub time: Option<i32>,
}

impl UpdateRatingRequest {
    pub fn apply_to(self, rating: &mut Rating) {
        if let Some(score) = self.rating {
            rating.rating = score;
        }
        if let Some(comment) = self.comment {
            rating.comment = comment;
        }
        if let Some(date) = self.date {
            rating.date = date;
        }
        if let Some(time) = self.time {
            rating.time = time;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_comment_may_be_omitted() {
        let rating: Rating = serde_json::from_value(json!({ "rating": 4, "date": 20240101, "time": 930 })).unwrap();

        assert_eq!(rating, Rating::new(4, None, 20240101, 930));
    }

    #[test]
    fn test_scores_are_not_range_checked() {
        let rating: Rating = serde_json::from_value(json!({ "rating": -3, "date": 0, "time": 0 })).unwrap();

        assert_eq!(rating.rating, -3);
    }

    #[test]
    fn test_null_comment_clears_it() {
        let mut rating = Rating::new(4, Some("friendly staff".to_string()), 20240101, 930);

        let changes: UpdateRatingRequest = serde_json::from_value(json!({ "comment": null })).unwrap();
        changes.apply_to(&mut rating);

        assert_eq!(rating, Rating::new(4, None, 20240101, 930));
    }

    #[test]
    fn test_absent_comment_is_kept() {
        let mut rating = Rating::new(4, Some("friendly staff".to_string()), 20240101, 930);

        let changes: UpdateRatingRequest = serde_json::from_value(json!({ "rating": 5 })).unwrap();
        changes.apply_to(&mut rating);

        assert_eq!(rating.rating, 5);
        assert_eq!(rating.comment.as_deref(), Some("friendly staff"));
    }
}
