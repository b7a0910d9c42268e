use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecipientSpending {
    pub name: String,
    pub amount: f64,
    pub code: Option<String>,
    pub recipient_id: Option<String>,
    #[serde(rename(deserialize = "uei"))]
    pub recipient_uei: Option<String>,
}

impl RecipientSpending {
    /// The API reports spending that cannot be attributed to one recipient
    /// as a row without a recipient id.
    pub fn is_multiple_recipients(&self) -> bool {
        self.recipient_id.is_none()
    }
}

/// Recipients with the "multiple recipients" row split out.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct RecipientList {
    pub recipients: Vec<RecipientSpending>,
    pub amount_for_multiple_recipients: f64,
}

impl RecipientList {
    pub fn split(rows: Vec<RecipientSpending>) -> Self {
        let amount_for_multiple_recipients = rows
            .iter()
            .find(|r| r.is_multiple_recipients())
            .map(|r| r.amount)
            .unwrap_or(0.0);
        let recipients = rows
            .into_iter()
            .filter(|r| !r.is_multiple_recipients())
            .collect();

        Self {
            recipients,
            amount_for_multiple_recipients,
        }
    }
}
