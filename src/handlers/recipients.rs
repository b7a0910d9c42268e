use axum::extract::{Path, Query, State};
use serde::Deserialize;

use crate::client::{AwardFilter, RecipientFilter};
use crate::error::{AppError, AppResult};
use crate::handlers::{non_blank, today, PeriodParams};
use crate::load_state::LoadState;
use crate::models::{AwardSummary, RecipientList};
use crate::services::{awards, recipients};
use crate::state::AppState;

/// Drill-down filters. At most one may be set.
#[derive(Debug, Default, Deserialize)]
pub struct RecipientParams {
    pub psc: Option<String>,
    pub state: Option<String>,
    pub naics: Option<String>,
    pub federal_account: Option<String>,
    #[serde(default)]
    pub covid: bool,
}

impl RecipientParams {
    pub fn recipient_filter(&self) -> AppResult<RecipientFilter> {
        let mut set = [
            non_blank(&self.psc).map(|c| RecipientFilter::Psc(c.to_string())),
            non_blank(&self.state).map(|c| RecipientFilter::State(c.to_string())),
            non_blank(&self.naics).map(|c| RecipientFilter::Industry(c.to_string())),
            non_blank(&self.federal_account)
                .map(|c| RecipientFilter::FederalAccount(c.to_string())),
        ]
        .into_iter()
        .flatten();

        match (set.next(), set.next()) {
            (None, _) => Ok(RecipientFilter::All),
            (Some(filter), None) => Ok(filter),
            _ => Err(AppError::Validation(
                "only one of psc, state, naics or federal_account may be given".into(),
            )),
        }
    }

    pub fn award_filter(&self, recipient_uei: &str) -> AppResult<AwardFilter> {
        let recipient_uei = recipient_uei.to_string();
        if self.covid {
            return Ok(AwardFilter::CovidRecipient(recipient_uei));
        }

        Ok(match self.recipient_filter()? {
            RecipientFilter::Psc(psc_code) => AwardFilter::PscAndRecipient {
                psc_code,
                recipient_uei,
            },
            RecipientFilter::State(state_code) => AwardFilter::StateAndRecipient {
                state_code,
                recipient_uei,
            },
            RecipientFilter::Industry(naics_code) => AwardFilter::IndustryAndRecipient {
                naics_code,
                recipient_uei,
            },
            RecipientFilter::All | RecipientFilter::FederalAccount(_) => {
                AwardFilter::Recipient(recipient_uei)
            }
        })
    }
}

pub async fn index(
    State(state): State<AppState>,
    Query(period): Query<PeriodParams>,
    Query(params): Query<RecipientParams>,
) -> AppResult<LoadState<RecipientList>> {
    let period = period.resolve(today())?;
    let filter = params.recipient_filter()?;

    Ok(recipients::load(&state.client, &filter, period).await.into())
}

pub async fn awards(
    State(state): State<AppState>,
    Path(uei): Path<String>,
    Query(period): Query<PeriodParams>,
    Query(params): Query<RecipientParams>,
) -> AppResult<LoadState<Vec<AwardSummary>>> {
    let period = period.resolve(today())?;
    let filter = params.award_filter(&uei)?;

    Ok(awards::list(&state.client, &filter, period).await.into())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_recipient_filter_selection() {
        assert_eq!(
            RecipientParams::default().recipient_filter().unwrap(),
            RecipientFilter::All
        );

        let params = RecipientParams {
            state: Some("TX".into()),
            ..Default::default()
        };
        assert_eq!(
            params.recipient_filter().unwrap(),
            RecipientFilter::State("TX".into())
        );

        let both = RecipientParams {
            psc: Some("Q".into()),
            naics: Some("541330".into()),
            ..Default::default()
        };
        assert!(matches!(
            both.recipient_filter(),
            Err(AppError::Validation(_))
        ));
    }

    #[test]
    fn test_award_filter_selection() {
        let psc = RecipientParams {
            psc: Some("AN".into()),
            ..Default::default()
        };
        assert_eq!(
            psc.award_filter("UEI1").unwrap(),
            AwardFilter::PscAndRecipient {
                psc_code: "AN".into(),
                recipient_uei: "UEI1".into()
            }
        );

        let covid = RecipientParams {
            covid: true,
            ..Default::default()
        };
        assert_eq!(
            covid.award_filter("UEI2").unwrap(),
            AwardFilter::CovidRecipient("UEI2".into())
        );

        assert_eq!(
            RecipientParams::default().award_filter("UEI3").unwrap(),
            AwardFilter::Recipient("UEI3".into())
        );
    }
}
