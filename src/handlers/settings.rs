use axum::extract::State;
use axum::Form;
use serde::{Deserialize, Serialize};

use crate::error::{AppError, AppResult};
use crate::form_utils::parse_currency;
use crate::load_state::LoadState;
use crate::models::Settings;
use crate::state::AppState;
use crate::store;

#[derive(Debug, Serialize)]
pub struct SettingsView {
    pub tax_contribution: f64,
    pub tax_contribution_display: String,
}

impl From<Settings> for SettingsView {
    fn from(settings: Settings) -> Self {
        let cents = crate::models::to_cents(settings.tax_contribution);
        Self {
            tax_contribution: settings.tax_contribution,
            tax_contribution_display: crate::filters::format_usd(cents, 2),
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct SettingsFormData {
    #[serde(default)]
    pub tax_contribution: String,
}

pub async fn index(State(state): State<AppState>) -> AppResult<LoadState<SettingsView>> {
    let settings = state.load_settings()?;
    Ok(LoadState::success(settings.into()))
}

pub async fn update(
    State(state): State<AppState>,
    Form(form): Form<SettingsFormData>,
) -> AppResult<LoadState<SettingsView>> {
    let tax_contribution = parse_currency(&form.tax_contribution).map_err(AppError::Validation)?;

    let settings = Settings { tax_contribution };
    store::save_settings(state.settings.as_ref(), &settings)?;
    tracing::info!(tax_contribution, "Settings updated");

    Ok(LoadState::success(settings.into()))
}
